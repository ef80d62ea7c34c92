pub mod config;
pub mod errors;
pub mod socket;

pub use socket::Transport;
