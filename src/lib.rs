pub mod client;
pub mod logging;
pub mod net;
pub mod signal;
pub mod stream;
