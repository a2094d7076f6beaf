//! Seam to the external multi-object tracker.

use crate::adapter::AdapterConfig;
use crate::frame::Frame;
use crate::tracking::detection::{Detection, TrackedTarget};
use crate::tracking::track_id::TrackIdAllocator;

/// An online multi-object tracker driven one frame at a time.
///
/// Implementations own association, motion state and identifier allocation.
/// Calls arrive in frame order from a single caller.
///
/// # Example
///
/// ```ignore
/// use pedtrack_adapter::{Detection, Frame, OnlineTracker, TrackedTarget};
///
/// struct MyTracker {
///     // Your tracker here
/// }
///
/// impl OnlineTracker for MyTracker {
///     type Error = std::io::Error;
///
///     fn update(
///         &mut self,
///         frame_rgb: &Frame,
///         detections: &[Detection],
///         scores: Option<&[f32]>,
///     ) -> Result<Vec<TrackedTarget>, Self::Error> {
///         Ok(vec![])
///     }
/// }
/// ```
pub trait OnlineTracker {
    /// Error type for update failures.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Advance by one frame and return the targets active after the update.
    ///
    /// # Arguments
    /// * `frame_rgb` - The frame in RGB channel order
    /// * `detections` - Boxes from the upstream detector, TLWH
    /// * `scores` - Confidence per detection, parallel to `detections`;
    ///   `None` means the tracker picks its own default
    fn update(
        &mut self,
        frame_rgb: &Frame,
        detections: &[Detection],
        scores: Option<&[f32]>,
    ) -> Result<Vec<TrackedTarget>, Self::Error>;
}

/// Builds a fresh tracker each time a session is configured.
pub trait TrackerFactory {
    type Tracker: OnlineTracker;

    fn build(&mut self, config: &AdapterConfig, ids: TrackIdAllocator) -> Self::Tracker;
}

impl<F, T> TrackerFactory for F
where
    F: FnMut(&AdapterConfig, TrackIdAllocator) -> T,
    T: OnlineTracker,
{
    type Tracker = T;

    fn build(&mut self, config: &AdapterConfig, ids: TrackIdAllocator) -> T {
        self(config, ids)
    }
}
