use std::sync::Arc;

use shared::state::PipelineState;
use tokio::{
    sync::{broadcast, watch},
    task::JoinHandle,
};
use tracing::{debug, info, warn};

use crate::{
    config::Settings,
    fetcher::{DataFetcher, HttpDataFetcher},
    transform::group_records,
};

const STATE_EVENT_CAPACITY: usize = 64;

/// Owns the pipeline state machine and publishes every transition.
///
/// Each invocation moves the state `Idle/Success/Failed → Loading →
/// Success|Failed`. Observers either read the latest value ([`Self::state`],
/// [`Self::watch`]) or receive transitions in order ([`Self::subscribe`]).
/// A broadcast subscriber that falls more than 64 transitions behind gets
/// `RecvError::Lagged` and skips the missed ones; the watch slot always holds
/// the current state.
///
/// Both channels are written under the watch lock, so the last broadcast event
/// always matches the final watch value.
///
/// [`Self::run`] does not guard against overlapping invocations: whichever
/// finishes last owns the published terminal state. Callers serialize
/// triggers, or use [`Self::try_run`].
pub struct PipelineController {
    fetcher: Arc<dyn DataFetcher>,
    state: watch::Sender<PipelineState>,
    events: broadcast::Sender<PipelineState>,
}

impl PipelineController {
    pub fn new(fetcher: Arc<dyn DataFetcher>) -> Arc<Self> {
        let (state, _) = watch::channel(PipelineState::Idle);
        let (events, _) = broadcast::channel(STATE_EVENT_CAPACITY);
        Arc::new(Self {
            fetcher,
            state,
            events,
        })
    }

    pub fn from_settings(settings: &Settings) -> Arc<Self> {
        Self::new(Arc::new(HttpDataFetcher::new(settings.endpoint_url.clone())))
    }

    pub fn state(&self) -> PipelineState {
        self.state.borrow().clone()
    }

    pub fn watch(&self) -> watch::Receiver<PipelineState> {
        self.state.subscribe()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PipelineState> {
        self.events.subscribe()
    }

    /// Publishes `Loading` before returning, then fetches, transforms and
    /// publishes the terminal state on a spawned task. Dropping the handle
    /// detaches the task; it still reaches `Success` or `Failed`.
    ///
    /// Must be called within a tokio runtime.
    pub fn run(self: &Arc<Self>) -> JoinHandle<()> {
        self.publish(PipelineState::Loading);
        self.spawn_completion()
    }

    /// Like [`Self::run`], but returns `None` without touching the state when
    /// an invocation is already loading.
    pub fn try_run(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let claimed = self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            *state = PipelineState::Loading;
            self.notify(PipelineState::Loading);
            true
        });
        if !claimed {
            debug!("pipeline: trigger ignored while loading");
            return None;
        }
        Some(self.spawn_completion())
    }

    fn spawn_completion(self: &Arc<Self>) -> JoinHandle<()> {
        let controller = Arc::clone(self);
        tokio::spawn(async move { controller.complete().await })
    }

    async fn complete(&self) {
        let next = match self.fetcher.fetch().await {
            Ok(records) => {
                let fetched = records.len();
                let grouped = group_records(records);
                info!(
                    fetched,
                    groups = grouped.len(),
                    "pipeline: listing grouped"
                );
                PipelineState::Success(grouped)
            }
            Err(err) => {
                warn!(kind = ?err.kind(), error = %err, "pipeline: fetch failed");
                PipelineState::Failed(err)
            }
        };
        self.publish(next);
    }

    fn publish(&self, next: PipelineState) {
        self.state.send_modify(|state| {
            *state = next.clone();
            self.notify(next);
        });
    }

    fn notify(&self, next: PipelineState) {
        debug!(state = next.label(), "pipeline: state published");
        // No subscribers is fine; the watch slot still holds the value.
        let _ = self.events.send(next);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
