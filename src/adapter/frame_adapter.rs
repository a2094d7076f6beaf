//! FrameTrackingAdapter: one tracker bound to one frame size.

use log::{debug, info};

use crate::LOG_TARGET;
use crate::adapter::{AdapterConfig, wire};
use crate::error::{AdapterError, Result};
use crate::frame::Frame;
use crate::tracking::{Detection, OnlineTracker, TrackedTarget};

/// Converts frames and detections into tracker input and flattens the
/// tracker's output into the `i16` result layout.
///
/// Constructing the adapter is what configures it; there is no unconfigured
/// adapter value. Use [`crate::TrackingSession`] when the host needs the
/// configure-then-step entry points.
pub struct FrameTrackingAdapter<T: OnlineTracker> {
    config: AdapterConfig,
    tracker: T,
    frames_processed: u64,
    last_targets: Vec<TrackedTarget>,
}

impl<T: OnlineTracker> FrameTrackingAdapter<T> {
    /// Bind `tracker` to frames of `config.width x config.height`.
    pub fn configure(config: AdapterConfig, tracker: T) -> Result<Self> {
        config.validate()?;
        info!(
            target: LOG_TARGET,
            "tracker configured for {}x{} frames",
            config.width,
            config.height
        );
        Ok(Self {
            config,
            tracker,
            frames_processed: 0,
            last_targets: Vec::new(),
        })
    }

    /// Track one BGR frame.
    ///
    /// The tracker receives the frame in RGB order and no scores. The result
    /// is `[N, (x, y, w, h, id) * N]` in tracker order, `[0]` when nothing is
    /// tracked.
    pub fn step(&mut self, frame: &Frame, detections: &[Detection]) -> Result<Vec<i16>> {
        self.run(frame, detections, None)
    }

    /// Like [`Self::step`], forwarding one confidence score per detection.
    pub fn step_with_scores(
        &mut self,
        frame: &Frame,
        detections: &[Detection],
        scores: &[f32],
    ) -> Result<Vec<i16>> {
        if scores.len() != detections.len() {
            return Err(AdapterError::ScoreCountMismatch {
                detections: detections.len(),
                scores: scores.len(),
            });
        }
        self.run(frame, detections, Some(scores))
    }

    fn run(
        &mut self,
        frame: &Frame,
        detections: &[Detection],
        scores: Option<&[f32]>,
    ) -> Result<Vec<i16>> {
        self.check_dimensions(frame)?;

        let rgb = frame.to_rgb();
        let targets = self
            .tracker
            .update(&rgb, detections, scores)
            .map_err(|e| AdapterError::Tracker(Box::new(e)))?;
        self.frames_processed += 1;

        debug!(
            target: LOG_TARGET,
            "frame {}: {} detections in, {} targets out",
            self.frames_processed,
            detections.len(),
            targets.len()
        );

        // Tracker state has advanced even if encoding fails below.
        let result = wire::encode_targets(&targets, self.config.overflow);
        self.last_targets = targets;
        result
    }

    fn check_dimensions(&self, frame: &Frame) -> Result<()> {
        let found = (frame.width(), frame.height());
        if found != self.config.dimensions() {
            return Err(AdapterError::DimensionMismatch {
                expected: self.config.dimensions(),
                found,
            });
        }
        Ok(())
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut T {
        &mut self.tracker
    }

    /// Frames the tracker has accepted since configuration.
    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    /// Targets returned by the most recent successful tracker update.
    pub fn last_targets(&self) -> &[TrackedTarget] {
        &self.last_targets
    }
}
