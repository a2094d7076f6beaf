//! Per-frame glue between a camera perception pipeline and an online
//! multi-object tracker.
//!
//! A host process configures the frame size once, then for every frame hands
//! over a BGR image and the detector's pedestrian boxes. The adapter converts
//! the image to RGB, runs the tracker's update and flattens the active
//! targets into
//!
//! ```text
//! [N, x1, y1, w1, h1, id1, ..., xN, yN, wN, hN, idN]
//! ```
//!
//! as 16-bit signed integers, or `[0]` when nothing is tracked. The tracking
//! algorithm itself sits behind the [`OnlineTracker`] trait.

pub mod adapter;
pub mod error;
pub mod frame;
pub mod tracking;

pub use adapter::{
    AdapterConfig, FrameTrackingAdapter, OverflowPolicy, TrackingSession, WireTarget,
    decode_targets, encode_targets,
};
pub use error::{AdapterError, Result};
pub use frame::{ChannelOrder, Frame};
pub use tracking::{Detection, OnlineTracker, Rect, TrackIdAllocator, TrackedTarget, TrackerFactory};

/// `log` target used by every record this crate emits.
pub const LOG_TARGET: &str = "pedtrack";
