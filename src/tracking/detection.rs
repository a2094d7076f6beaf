use crate::tracking::rect::Rect;

/// One pedestrian box reported by the upstream detector for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Detection {
    /// Bounding box in TLWH format
    pub tlwh: Rect,
}

impl Detection {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            tlwh: Rect::new(x, y, width, height),
        }
    }

    pub fn from_rect(tlwh: Rect) -> Self {
        Self { tlwh }
    }

    pub fn from_tlbr(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::from_rect(Rect::from_tlbr(x1, y1, x2, y2))
    }
}

impl From<Rect> for Detection {
    fn from(tlwh: Rect) -> Self {
        Self { tlwh }
    }
}

impl From<[f32; 4]> for Detection {
    fn from(tlwh: [f32; 4]) -> Self {
        Self {
            tlwh: Rect::from(tlwh),
        }
    }
}

/// One actively tracked pedestrian after a tracker update.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackedTarget {
    /// Current bounding box in TLWH format
    pub tlwh: Rect,
    /// Identifier stable across frames for the same physical target
    pub track_id: u64,
}

impl TrackedTarget {
    pub fn new(tlwh: Rect, track_id: u64) -> Self {
        Self { tlwh, track_id }
    }
}
