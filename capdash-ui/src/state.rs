//! Capture/review dashboard state
//!
//! One shared instance tracks the single pending captured frame and which
//! of four mutually exclusive panels the browser should show. The
//! dashboard is single-operator: the frame slot is process-wide and
//! last-writer-wins, guarded by RwLocks so the sharing is explicit.

use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tracing::{debug, info};

/// How long a capture-panel request waits for the frame to arrive.
///
/// The browser posts the frame and the panel request concurrently; the
/// frame usually lands first but is not guaranteed to. The wait is
/// bounded and followed by a recheck, so a missing frame still resolves
/// to the live feed.
const FRAME_WAIT: Duration = Duration::from_millis(250);

/// The four mutually exclusive dashboard panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    LiveFeed,
    CaptureReview,
    ClassificationResult,
    ValidationResult,
}

impl Panel {
    /// Wire name used by the panel poll endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::LiveFeed => "live_feed",
            Panel::CaptureReview => "capture_review",
            Panel::ClassificationResult => "classification_result",
            Panel::ValidationResult => "validation_result",
        }
    }
}

/// Shared dashboard state accessible by all handlers
pub struct DashboardState {
    /// The single pending captured frame, as a base64 data URL.
    /// Exactly one may exist at a time; a new capture overwrites it.
    captured_frame: RwLock<Option<String>>,

    /// Panel currently shown in the browser
    panel: RwLock<Panel>,

    /// Selected model choice, used as the dataset category segment
    selected_model: RwLock<Option<String>>,

    /// Last classification/validation result text
    result_text: RwLock<Option<String>>,

    /// Capture counter, bumped on every stored frame so a pending panel
    /// request can wait for the frame instead of sleeping blindly.
    capture_tx: watch::Sender<u64>,
}

impl DashboardState {
    pub fn new() -> Self {
        let (capture_tx, _) = watch::channel(0u64);
        Self {
            captured_frame: RwLock::new(None),
            panel: RwLock::new(Panel::LiveFeed),
            selected_model: RwLock::new(None),
            result_text: RwLock::new(None),
            capture_tx,
        }
    }

    /// Store an inbound captured frame, overwriting any prior one, and
    /// signal any waiting panel request.
    pub async fn store_frame(&self, frame: String) {
        *self.captured_frame.write().await = Some(frame);
        self.capture_tx.send_modify(|n| *n += 1);
    }

    pub async fn captured_frame(&self) -> Option<String> {
        self.captured_frame.read().await.clone()
    }

    pub async fn clear_frame(&self) {
        *self.captured_frame.write().await = None;
    }

    pub async fn panel(&self) -> Panel {
        *self.panel.read().await
    }

    pub async fn set_panel(&self, panel: Panel) {
        *self.panel.write().await = panel;
    }

    pub async fn selected_model(&self) -> Option<String> {
        self.selected_model.read().await.clone()
    }

    pub async fn select_model(&self, model: Option<String>) {
        *self.selected_model.write().await = model;
    }

    pub async fn result_text(&self) -> Option<String> {
        self.result_text.read().await.clone()
    }

    pub async fn set_result_text(&self, text: Option<String>) {
        *self.result_text.write().await = text;
    }

    /// Switch to the capture review panel if a frame is pending, back to
    /// the live feed otherwise.
    ///
    /// When no frame is stored yet, waits (bounded) for the capture
    /// signal before deciding, tolerating the asynchronous browser
    /// producer.
    pub async fn request_capture_panel(&self) -> Panel {
        let mut capture_rx = self.capture_tx.subscribe();
        if self.captured_frame().await.is_none() {
            debug!("No captured frame yet, waiting for capture signal");
            let _ = tokio::time::timeout(FRAME_WAIT, capture_rx.changed()).await;
        }
        let next = if self.captured_frame().await.is_some() {
            Panel::CaptureReview
        } else {
            Panel::LiveFeed
        };
        self.set_panel(next).await;
        next
    }

    /// Drop the pending frame and return to the live feed.
    pub async fn discard(&self) -> Panel {
        info!("Discarding capture");
        self.clear_frame().await;
        self.set_panel(Panel::LiveFeed).await;
        Panel::LiveFeed
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn starts_on_live_feed_with_nothing_captured() {
        let state = DashboardState::new();
        assert_eq!(state.panel().await, Panel::LiveFeed);
        assert_eq!(state.captured_frame().await, None);
        assert_eq!(state.selected_model().await, None);
    }

    #[tokio::test]
    async fn stored_frame_shows_review_panel() {
        let state = DashboardState::new();
        state.store_frame("data:image/jpeg;base64,AAAA".to_string()).await;
        assert_eq!(state.request_capture_panel().await, Panel::CaptureReview);
        assert_eq!(state.panel().await, Panel::CaptureReview);
        // The frame stays pending until labeled or discarded.
        assert!(state.captured_frame().await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn missing_frame_falls_back_to_live_feed() {
        let state = DashboardState::new();
        assert_eq!(state.request_capture_panel().await, Panel::LiveFeed);
        assert_eq!(state.panel().await, Panel::LiveFeed);
    }

    #[tokio::test(start_paused = true)]
    async fn panel_request_waits_for_late_frame() {
        let state = Arc::new(DashboardState::new());
        let producer = {
            let state = Arc::clone(&state);
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                state.store_frame("data:image/jpeg;base64,AAAA".to_string()).await;
            })
        };
        assert_eq!(state.request_capture_panel().await, Panel::CaptureReview);
        producer.await.unwrap();
    }

    #[tokio::test]
    async fn new_capture_overwrites_prior_frame() {
        let state = DashboardState::new();
        state.store_frame("data:,first".to_string()).await;
        state.store_frame("data:,second".to_string()).await;
        assert_eq!(state.captured_frame().await.as_deref(), Some("data:,second"));
    }

    #[tokio::test]
    async fn discard_clears_frame_from_any_panel() {
        let state = DashboardState::new();
        state.store_frame("data:,x".to_string()).await;
        state.set_panel(Panel::ClassificationResult).await;
        assert_eq!(state.discard().await, Panel::LiveFeed);
        assert_eq!(state.panel().await, Panel::LiveFeed);
        assert_eq!(state.captured_frame().await, None);
    }
}
