use tokio_util::sync::{CancellationToken, DropGuard};

/// One-shot flag telling the writer side that reading has stopped.
#[derive(Clone, Debug, Default)]
pub struct CompletionHandle {
    token: CancellationToken
}

impl CompletionHandle {

    pub fn new() -> CompletionHandle {
        CompletionHandle { token: CancellationToken::new() }
    }

    /// Sets the flag when the returned guard is dropped.
    pub(crate) fn arm(&self) -> DropGuard {
        self.token.clone().drop_guard()
    }

    pub fn is_set(&self) -> bool {
        self.token.is_cancelled()
    }

    pub async fn wait(&self) {
        self.token.cancelled().await
    }
}
