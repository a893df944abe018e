use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::fetch::{FetchResult, ResourceClient};
use crate::resource::{ResourceEndpointConfig, ResourceItem};

/// Fetch lifecycle controller for one collection.
///
/// `T` is the item-shape descriptor; every collection shares this one
/// implementation.
pub struct ResourceController<T> {
    client: ResourceClient,
    endpoint: ResourceEndpointConfig,
    _item: PhantomData<fn() -> T>,
}

impl<T: ResourceItem> ResourceController<T> {
    /// Controller for the collection `T` belongs to.
    pub fn new(client: ResourceClient) -> Self {
        Self::with_endpoint(client, T::KIND.endpoint())
    }
}

impl<T> ResourceController<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn with_endpoint(client: ResourceClient, endpoint: ResourceEndpointConfig) -> Self {
        Self {
            client,
            endpoint,
            _item: PhantomData,
        }
    }

    /// Begins a lifecycle with its own cancellation scope.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) -> FetchHandle<T> {
        self.start_scoped(&CancellationToken::new())
    }

    /// Begins a lifecycle that is also cancelled when `scope` is.
    pub fn start_scoped(&self, scope: &CancellationToken) -> FetchHandle<T> {
        let cancel = scope.child_token();
        let (sender, receiver) = watch::channel(FetchResult::Loading);

        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let token = cancel.clone();
        let lifecycle = Uuid::new_v4();

        tokio::spawn(async move {
            tracing::info!(
                resource = %endpoint.name,
                %lifecycle,
                "Fetching from REST API endpoint {}{}",
                client.origin(),
                endpoint.path
            );

            let outcome = tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::debug!(resource = %endpoint.name, %lifecycle, "Fetch cancelled, discarding response");
                    return;
                }
                outcome = client.fetch_items::<T>(&endpoint) => outcome,
            };

            // Deactivated while the body was being decoded.
            if token.is_cancelled() {
                tracing::debug!(resource = %endpoint.name, %lifecycle, "Fetch cancelled, discarding response");
                return;
            }

            match &outcome {
                Ok(items) => tracing::info!(
                    resource = %endpoint.name,
                    %lifecycle,
                    items = items.len(),
                    "Fetched data"
                ),
                Err(err) => tracing::warn!(
                    resource = %endpoint.name,
                    %lifecycle,
                    kind = ?err.kind(),
                    "Error fetching data: {err}"
                ),
            }

            sender.send_replace(FetchResult::from(outcome));
        });

        FetchHandle { receiver, cancel }
    }
}

/// Consumer side of a running lifecycle.
///
/// Dropping the handle cancels the lifecycle.
pub struct FetchHandle<T> {
    receiver: watch::Receiver<FetchResult<T>>,
    cancel: CancellationToken,
}

impl<T: Clone> FetchHandle<T> {
    /// Latest published state: `Loading` until the request settles.
    pub fn current(&self) -> FetchResult<T> {
        self.receiver.borrow().clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Waits for the terminal result.
    ///
    /// Returns `None` once the lifecycle has been cancelled, even if a
    /// response arrived concurrently.
    pub async fn settled(&mut self) -> Option<FetchResult<T>> {
        loop {
            if self.cancel.is_cancelled() {
                return None;
            }
            {
                let current = self.receiver.borrow_and_update();
                if current.is_terminal() {
                    return Some(current.clone());
                }
            }
            tokio::select! {
                _ = self.cancel.cancelled() => return None,
                changed = self.receiver.changed() => {
                    if changed.is_err() {
                        return None;
                    }
                }
            }
        }
    }
}

impl<T> Drop for FetchHandle<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
