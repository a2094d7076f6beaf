//! TrackingSession: configure-then-step entry points for a host process.

use log::info;

use crate::LOG_TARGET;
use crate::adapter::{AdapterConfig, FrameTrackingAdapter, OverflowPolicy};
use crate::error::{AdapterError, Result};
use crate::frame::Frame;
use crate::tracking::{Detection, TrackIdAllocator, TrackerFactory};

/// Owns at most one configured adapter and rebuilds it on every `configure`.
///
/// A session starts unconfigured; `step` fails with
/// [`AdapterError::NotConfigured`] until `configure` succeeds. Each
/// `configure` builds a fresh tracker, discarding all track history. The
/// identifier allocator belongs to the session, so identifiers issued before
/// a re-configure are never issued again.
pub struct TrackingSession<F: TrackerFactory> {
    factory: F,
    ids: TrackIdAllocator,
    overflow: OverflowPolicy,
    adapter: Option<FrameTrackingAdapter<F::Tracker>>,
}

impl<F: TrackerFactory> TrackingSession<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            ids: TrackIdAllocator::new(),
            overflow: OverflowPolicy::default(),
            adapter: None,
        }
    }

    /// Policy applied by adapters built from the next `configure` on.
    pub fn with_overflow_policy(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Set the frame size and start tracking from scratch.
    ///
    /// On error the session keeps whatever adapter it had before.
    pub fn configure(&mut self, width: i64, height: i64) -> Result<()> {
        let config = AdapterConfig::from_dimensions(width, height)?.with_overflow_policy(self.overflow);
        let tracker = self.factory.build(&config, self.ids.clone());
        let adapter = FrameTrackingAdapter::configure(config, tracker)?;

        if self.adapter.replace(adapter).is_some() {
            info!(target: LOG_TARGET, "previous tracker state discarded");
        }
        Ok(())
    }

    pub fn step(&mut self, frame: &Frame, detections: &[Detection]) -> Result<Vec<i16>> {
        self.configured_mut()?.step(frame, detections)
    }

    pub fn step_with_scores(
        &mut self,
        frame: &Frame,
        detections: &[Detection],
        scores: &[f32],
    ) -> Result<Vec<i16>> {
        self.configured_mut()?.step_with_scores(frame, detections, scores)
    }

    pub fn is_configured(&self) -> bool {
        self.adapter.is_some()
    }

    pub fn adapter(&self) -> Option<&FrameTrackingAdapter<F::Tracker>> {
        self.adapter.as_ref()
    }

    pub fn adapter_mut(&mut self) -> Option<&mut FrameTrackingAdapter<F::Tracker>> {
        self.adapter.as_mut()
    }

    /// The allocator shared with every tracker this session builds.
    pub fn ids(&self) -> &TrackIdAllocator {
        &self.ids
    }

    fn configured_mut(&mut self) -> Result<&mut FrameTrackingAdapter<F::Tracker>> {
        self.adapter.as_mut().ok_or(AdapterError::NotConfigured)
    }
}
