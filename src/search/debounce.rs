//! Debounced query evaluation
//!
//! Every keystroke schedules a query after the debounce delay. Only the pass
//! scheduled by the most recent input may render: a generation counter and
//! the stored input are checked, under the same lock that `on_input` takes,
//! right before handing the view to the sink.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use super::engine::SiteSearch;
use super::types::SearchView;

/// Receiver of rendered views (the results container)
pub trait ResultSink: Send + Sync + 'static {
    fn render(&self, query: &str, view: &SearchView);
}

#[derive(Debug, Default)]
struct InputState {
    generation: u64,
    latest_input: String,
}

/// Last-write-wins query scheduler in front of a [`SiteSearch`]
pub struct QueryDebouncer<S: ResultSink> {
    engine: Arc<SiteSearch>,
    sink: Arc<S>,
    delay: Duration,
    input: Arc<Mutex<InputState>>,
}

impl<S: ResultSink> QueryDebouncer<S> {
    /// Debouncer using the engine's configured delay
    pub fn new(engine: Arc<SiteSearch>, sink: Arc<S>) -> Self {
        let delay = engine.config().debounce();
        Self::with_delay(engine, sink, delay)
    }

    pub fn with_delay(engine: Arc<SiteSearch>, sink: Arc<S>, delay: Duration) -> Self {
        Self {
            engine,
            sink,
            delay,
            input: Arc::new(Mutex::new(InputState::default())),
        }
    }

    #[must_use]
    pub fn current_generation(&self) -> u64 {
        self.input.lock().generation
    }

    /// Record the new input-box value and schedule its query
    ///
    /// The returned handle completes after the delay whether or not the pass
    /// rendered; superseded passes exit silently.
    pub fn on_input(&self, value: &str) -> JoinHandle<()> {
        let generation = {
            let mut input = self.input.lock();
            input.generation += 1;
            input.latest_input = value.to_string();
            input.generation
        };

        let engine = Arc::clone(&self.engine);
        let sink = Arc::clone(&self.sink);
        let input = Arc::clone(&self.input);
        let delay = self.delay;
        let query = value.to_string();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let view = engine.query(&query);

            let current = input.lock();
            if current.generation != generation || current.latest_input != query {
                tracing::trace!(generation, latest = current.generation, "Dropping stale query");
                return;
            }
            sink.render(&query, &view);
        })
    }

    /// Overlay closed: cancel pending passes and show the idle prompt
    pub fn clear(&self) {
        let mut input = self.input.lock();
        input.generation += 1;
        input.latest_input.clear();
        self.sink.render("", &SearchView::Idle);
    }
}
