use crate::error::{AdapterError, Result};

/// What to do with box geometry that falls outside the `i16` output range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverflowPolicy {
    /// Reject the step with [`AdapterError::CoordinateOverflow`].
    #[default]
    Fail,
    /// Clamp to `i16::MIN..=i16::MAX` and log a warning.
    /// Track identifiers and NaN values are never clamped.
    Saturate,
}

/// Configuration for a [`crate::FrameTrackingAdapter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdapterConfig {
    /// Width in pixels of every frame passed to `step`
    pub width: u32,
    /// Height in pixels of every frame passed to `step`
    pub height: u32,
    pub overflow: OverflowPolicy,
}

impl AdapterConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            overflow: OverflowPolicy::default(),
        }
    }

    /// Build from host-supplied dimensions, which may be zero or negative.
    pub fn from_dimensions(width: i64, height: i64) -> Result<Self> {
        match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok(Self::new(w, h)),
            _ => Err(AdapterError::InvalidConfiguration { width, height }),
        }
    }

    pub fn with_overflow_policy(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(AdapterError::InvalidConfiguration {
                width: self.width.into(),
                height: self.height.into(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
