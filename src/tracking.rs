mod detection;
mod online_tracker;
mod rect;
mod track_id;

pub use detection::{Detection, TrackedTarget};
pub use online_tracker::{OnlineTracker, TrackerFactory};
pub use rect::Rect;
pub use track_id::TrackIdAllocator;
