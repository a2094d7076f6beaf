//! Error types for the frame tracking adapter.

use thiserror::Error;

/// Errors surfaced by [`crate::FrameTrackingAdapter`] and [`crate::TrackingSession`].
#[derive(Debug, Error)]
pub enum AdapterError {
    /// A step was requested before any configuration.
    #[error("tracker is not configured; call configure(width, height) first")]
    NotConfigured,

    /// Width or height is not a positive pixel count.
    #[error("invalid frame dimensions {width}x{height}")]
    InvalidConfiguration { width: i64, height: i64 },

    /// Frame size differs from the configured size.
    #[error("frame is {}x{} but the adapter is configured for {}x{}", .found.0, .found.1, .expected.0, .expected.1)]
    DimensionMismatch {
        /// Configured (width, height)
        expected: (u32, u32),
        /// Received (width, height)
        found: (u32, u32),
    },

    /// A tracked value does not fit the 16-bit output layout.
    #[error("{field} value {value} does not fit in a 16-bit signed integer")]
    CoordinateOverflow { field: &'static str, value: f64 },

    /// The frame buffer is not a valid 3-channel image.
    #[error("invalid frame: {0}")]
    InvalidFrame(String),

    /// A score list was supplied that does not pair with the detections.
    #[error("{scores} scores supplied for {detections} detections")]
    ScoreCountMismatch { detections: usize, scores: usize },

    /// A flattened result does not follow the `[N, (x, y, w, h, id) * N]` layout.
    #[error("malformed tracking result of length {len}")]
    MalformedResult { len: usize },

    /// The tracker's update failed.
    #[error("tracker update failed: {0}")]
    Tracker(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, AdapterError>;
