//! Adapter between the host perception pipeline and an online tracker.
//!
//! [`FrameTrackingAdapter`] is a configured adapter bound to one tracker.
//! [`TrackingSession`] wraps it in the two host entry points, `configure`
//! and `step`, and rebuilds the tracker on every `configure`.

mod config;
mod frame_adapter;
mod session;
pub mod wire;

pub use config::{AdapterConfig, OverflowPolicy};
pub use frame_adapter::FrameTrackingAdapter;
pub use session::TrackingSession;
pub use wire::{WireTarget, decode_targets, encode_targets};
