//! Fetch-on-change: re-runs an async retrieval whenever its tracked key changes.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Observable state of a keyed retrieval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T, E> {
    /// No key tracked yet.
    Idle,
    Loading,
    Failed(E),
    Ready(T),
}

impl<T, E> FetchState<T, E> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

type BoxFetch<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;
type Fetcher<K, T, E> = Arc<dyn Fn(K) -> BoxFetch<T, E> + Send + Sync>;

/// Runs `fetcher` for each new key and publishes the outcome.
///
/// Results of a retrieval superseded by a newer key are discarded.
pub struct FetchOnChange<K, T, E> {
    fetcher: Fetcher<K, T, E>,
    current: Option<(K, CancellationToken)>,
    state_tx: Arc<watch::Sender<FetchState<T, E>>>,
}

impl<K, T, E> FetchOnChange<K, T, E>
where
    K: Clone + PartialEq + Send + 'static,
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    pub fn new<F, Fut>(fetcher: F) -> Self
    where
        F: Fn(K) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let (state_tx, _) = watch::channel(FetchState::Idle);
        FetchOnChange {
            fetcher: Arc::new(move |key| -> BoxFetch<T, E> { Box::pin(fetcher(key)) }),
            current: None,
            state_tx: Arc::new(state_tx),
        }
    }

    /// Starts a retrieval for `key` unless it is already the tracked key.
    ///
    /// Returns the spawned task, or `None` when the key is unchanged.
    /// Must be called within a tokio runtime.
    pub fn track(&mut self, key: K) -> Option<JoinHandle<()>> {
        if let Some((current, _)) = &self.current {
            if *current == key {
                return None;
            }
        }

        let token = CancellationToken::new();
        if let Some((_, previous)) = self.current.replace((key.clone(), token.clone())) {
            previous.cancel();
        }

        self.state_tx.send_replace(FetchState::Loading);

        let fetch = (self.fetcher)(key);
        let state_tx = Arc::clone(&self.state_tx);
        Some(tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = token.cancelled() => return,
                outcome = fetch => outcome,
            };
            let state = match outcome {
                Ok(data) => FetchState::Ready(data),
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("fetch failed for tracked key");
                    FetchState::Failed(err)
                }
            };
            // `track` cancels before publishing `Loading`, so checking under
            // the watch lock keeps a superseded result from landing after it
            state_tx.send_if_modified(|current| {
                if token.is_cancelled() {
                    return false;
                }
                *current = state;
                true
            });
        }))
    }

    pub fn state(&self) -> FetchState<T, E> {
        self.state_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState<T, E>> {
        self.state_tx.subscribe()
    }
}

impl<K, T, E> Drop for FetchOnChange<K, T, E> {
    fn drop(&mut self) {
        if let Some((_, token)) = self.current.take() {
            token.cancel();
        }
    }
}
