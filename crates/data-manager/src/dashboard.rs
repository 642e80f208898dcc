//! Camera selection: fetch the counts and redraw the chart

use std::cell::RefCell;

use jamcam_shared::{strip_prefix, ChartConfig, ChartView, JamcamError, JamcamResult};

use crate::counts::fetch_counts;
use crate::fetcher::Fetcher;
use crate::request_tracker::RequestTracker;

/// Owns the chart state and the widget that draws it.
///
/// The chart view is injected rather than looked up, and every state change
/// is computed from the previous state before being rendered in one call.
pub struct Dashboard<F, V> {
    fetcher: F,
    view: V,
    counts_url: String,
    state: RefCell<ChartConfig>,
    tracker: RequestTracker,
}

impl<F: Fetcher, V: ChartView> Dashboard<F, V> {
    pub fn new(fetcher: F, view: V, counts_url: impl Into<String>, initial: ChartConfig) -> Self {
        Self {
            fetcher,
            view,
            counts_url: counts_url.into(),
            state: RefCell::new(initial),
            tracker: RequestTracker::new(),
        }
    }

    /// Draw the current state
    pub fn render(&self) {
        self.view.render(&self.state.borrow());
    }

    /// Snapshot of the current chart state
    pub fn chart_config(&self) -> ChartConfig {
        self.state.borrow().clone()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Show the counts for the camera `camera_id` (prefixed or raw form).
    ///
    /// The chart switches to its loading state before the request goes
    /// out. If another camera is selected before the response arrives, the
    /// response is dropped and `JamcamError::Stale` returned. On any other
    /// failure the chart stays in the loading state.
    pub async fn select_camera(&self, camera_id: &str) -> JamcamResult<()> {
        let raw_id = strip_prefix(camera_id).into_owned();
        let token = self.tracker.issue();
        log::info!("Selected camera {raw_id} (request {token})");

        let loading = self.state.borrow().loading(&raw_id);
        self.apply(loading);

        let result = fetch_counts(&self.fetcher, &self.counts_url, &raw_id).await;

        if !self.tracker.is_current(token) {
            log::debug!("Dropping counts for camera {raw_id}: request {token} superseded");
            return Err(JamcamError::Stale { token });
        }

        let response = result?;
        let populated = self.state.borrow().populated(&raw_id, &response);
        self.apply(populated);
        Ok(())
    }

    fn apply(&self, next: ChartConfig) {
        *self.state.borrow_mut() = next;
        self.render();
    }
}
