use std::future::Future;
use std::time::Duration;

use api_client::{timing, ApiClient, OverviewSlot};
use dioxus::prelude::*;
use shared_types::{AdminOverview, AppError, Overlay};

use crate::auth::{use_api_client, use_session};

/// Lifecycle of one authenticated fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(AppError),
}

/// Handle returned by [`use_api`].
pub struct ApiResource<T: 'static> {
    state: Signal<FetchState<T>>,
    task: Resource<()>,
}

impl<T: 'static> Clone for ApiResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ApiResource<T> {}

impl<T: Clone + 'static> ApiResource<T> {
    pub fn state(&self) -> FetchState<T> {
        self.state.read().clone()
    }

    /// Fetch again from scratch, showing the loading state meanwhile.
    pub fn restart(&mut self) {
        self.state.set(FetchState::Loading);
        self.task.restart();
    }

    /// Edit the loaded value in place. No-op unless the fetch succeeded.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) {
        if let FetchState::Ready(value) = &mut *self.state.write() {
            f(value);
        }
    }
}

impl OverviewSlot for ApiResource<AdminOverview> {
    fn patch(&mut self, f: impl FnOnce(&mut AdminOverview)) {
        self.update(f);
    }
}

/// Run `fetch` with the API client and the session token when the calling
/// component mounts, and again on every `restart`.
///
/// A missing token fails the fetch with `NoSession` without touching the
/// network. Failures are logged here; views only render them.
pub fn use_api<T, F, Fut>(mut fetch: F) -> ApiResource<T>
where
    T: 'static,
    F: FnMut(ApiClient, String) -> Fut + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let client = use_api_client();
    let session = use_session();
    let mut state = use_signal(|| FetchState::Loading);

    let task = use_resource(move || {
        let request = session.token().map(|token| fetch(client.clone(), token));
        async move {
            let result = match request {
                Ok(pending) => pending.await,
                Err(e) => Err(e),
            };
            match result {
                Ok(value) => state.set(FetchState::Ready(value)),
                Err(e) => {
                    tracing::error!(error = %e, "Fetch failed");
                    state.set(FetchState::Failed(e));
                }
            }
        }
    });

    ApiResource { state, task }
}

/// The overlay currently shown by a view, if any.
#[derive(Clone, Copy, PartialEq)]
pub struct OverlaySlot {
    current: Signal<Option<Overlay>>,
}

impl OverlaySlot {
    pub fn current(&self) -> Option<Overlay> {
        self.current.read().clone()
    }

    pub fn show(&mut self, overlay: Overlay) {
        self.current.set(Some(overlay));
    }

    pub fn hide(&mut self) {
        self.current.set(None);
    }

    /// Show `overlay` for `duration`, then hide it.
    pub async fn flash(self, overlay: Overlay, duration: Duration) {
        let mut current = self.current;
        timing::flash(duration, move |visible| {
            current.set(visible.then(|| overlay.clone()));
        })
        .await;
    }
}

pub fn use_overlay() -> OverlaySlot {
    OverlaySlot {
        current: use_signal(|| None),
    }
}
