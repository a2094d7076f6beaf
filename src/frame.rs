//! Camera frame buffer and channel-order conversion.

use std::borrow::Cow;

use ndarray::{Array3, ArrayView3, Zip, s};

use crate::error::{AdapterError, Result};

/// Byte order of the three colour channels in a [`Frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelOrder {
    /// Blue, green, red. What the host camera pipeline delivers.
    #[default]
    Bgr,
    /// Red, green, blue. What the tracker consumes.
    Rgb,
}

/// Dense `height x width x 3` image buffer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    data: Array3<u8>,
    order: ChannelOrder,
}

impl Frame {
    /// Wrap an `(height, width, 3)` array.
    pub fn new(data: Array3<u8>, order: ChannelOrder) -> Result<Self> {
        let (height, width, channels) = data.dim();
        if channels != 3 {
            return Err(AdapterError::InvalidFrame(format!(
                "expected 3 channels, found {channels}"
            )));
        }
        if width == 0 || height == 0 {
            return Err(AdapterError::InvalidFrame(format!(
                "empty frame {width}x{height}"
            )));
        }
        if u32::try_from(width).is_err() || u32::try_from(height).is_err() {
            return Err(AdapterError::InvalidFrame(format!(
                "frame {width}x{height} is too large"
            )));
        }
        Ok(Self { data, order })
    }

    /// Wrap a packed row-major buffer of `width * height * 3` bytes.
    pub fn from_raw(bytes: Vec<u8>, width: u32, height: u32, order: ChannelOrder) -> Result<Self> {
        let expected = buffer_len(width, height)?;
        if bytes.len() != expected {
            return Err(AdapterError::InvalidFrame(format!(
                "buffer holds {} bytes, {width}x{height}x3 needs {expected}",
                bytes.len()
            )));
        }
        let data = Array3::from_shape_vec((height as usize, width as usize, 3), bytes)
            .map_err(|e| AdapterError::InvalidFrame(e.to_string()))?;
        Self::new(data, order)
    }

    /// A frame of the given size with every byte set to zero.
    pub fn zeros(width: u32, height: u32, order: ChannelOrder) -> Result<Self> {
        buffer_len(width, height)?;
        Self::new(Array3::zeros((height as usize, width as usize, 3)), order)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.data.dim().1 as u32
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.data.dim().0 as u32
    }

    #[inline]
    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    pub fn pixels(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    /// Channel bytes at column `x`, row `y`, in the frame's own order.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        let (x, y) = (x as usize, y as usize);
        if y >= self.data.dim().0 || x >= self.data.dim().1 {
            return None;
        }
        Some([self.data[[y, x, 0]], self.data[[y, x, 1]], self.data[[y, x, 2]]])
    }

    pub fn into_inner(self) -> Array3<u8> {
        self.data
    }

    /// RGB view of this frame. Borrows when the frame is already RGB,
    /// otherwise returns a converted copy and leaves `self` untouched.
    pub fn to_rgb(&self) -> Cow<'_, Frame> {
        match self.order {
            ChannelOrder::Rgb => Cow::Borrowed(self),
            ChannelOrder::Bgr => Cow::Owned(self.clone().into_rgb()),
        }
    }

    /// Convert to RGB in place.
    pub fn into_rgb(mut self) -> Frame {
        if self.order == ChannelOrder::Bgr {
            swap_red_blue(&mut self.data);
            self.order = ChannelOrder::Rgb;
        }
        self
    }
}

/// Bytes needed for a `width x height` frame, bounded by what an array can hold.
fn buffer_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .filter(|&n| n <= isize::MAX as usize)
        .ok_or_else(|| AdapterError::InvalidFrame(format!("frame {width}x{height} is too large")))
}

fn swap_red_blue(data: &mut Array3<u8>) {
    let (red, blue) = data.multi_slice_mut((s![.., .., 0], s![.., .., 2]));
    Zip::from(red).and(blue).for_each(|r, b| std::mem::swap(r, b));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bgr_2x1() -> Frame {
        Frame::from_raw(vec![1, 2, 3, 4, 5, 6], 2, 1, ChannelOrder::Bgr).unwrap()
    }

    #[test]
    fn test_from_raw_layout() {
        let frame = bgr_2x1();
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 1);
        assert_eq!(frame.pixel(0, 0), Some([1, 2, 3]));
        assert_eq!(frame.pixel(1, 0), Some([4, 5, 6]));
        assert_eq!(frame.pixel(2, 0), None);
    }

    #[test]
    fn test_from_raw_wrong_length() {
        let err = Frame::from_raw(vec![0; 5], 2, 1, ChannelOrder::Bgr).unwrap_err();
        assert!(matches!(err, AdapterError::InvalidFrame(_)));
    }

    #[test]
    fn test_oversized_dimensions_are_rejected() {
        let err = Frame::from_raw(vec![0; 3], u32::MAX, u32::MAX, ChannelOrder::Bgr).unwrap_err();
        assert!(matches!(err, AdapterError::InvalidFrame(msg) if msg.contains("too large")));

        let err = Frame::zeros(u32::MAX, u32::MAX, ChannelOrder::Bgr).unwrap_err();
        assert!(matches!(err, AdapterError::InvalidFrame(msg) if msg.contains("too large")));
    }

    #[test]
    fn test_zeros() {
        let frame = Frame::zeros(4, 2, ChannelOrder::Rgb).unwrap();
        assert_eq!(frame.pixels().dim(), (2, 4, 3));
        assert!(frame.into_inner().iter().all(|&b| b == 0));
        assert!(Frame::zeros(0, 2, ChannelOrder::Rgb).is_err());
    }

    #[test]
    fn test_new_rejects_non_rgb_shape() {
        let err = Frame::new(Array3::zeros((4, 4, 4)), ChannelOrder::Bgr).unwrap_err();
        assert!(matches!(err, AdapterError::InvalidFrame(_)));

        let err = Frame::new(Array3::zeros((0, 4, 3)), ChannelOrder::Bgr).unwrap_err();
        assert!(matches!(err, AdapterError::InvalidFrame(_)));
    }

    #[test]
    fn test_to_rgb_swaps_channels() {
        let frame = bgr_2x1();
        let rgb = frame.to_rgb();

        assert_eq!(rgb.order(), ChannelOrder::Rgb);
        assert_eq!(rgb.pixel(0, 0), Some([3, 2, 1]));
        assert_eq!(rgb.pixel(1, 0), Some([6, 5, 4]));
        assert_eq!(rgb.pixels().as_slice(), Some(&[3, 2, 1, 6, 5, 4][..]));

        // Source frame is untouched
        assert_eq!(frame.order(), ChannelOrder::Bgr);
        assert_eq!(frame.pixel(0, 0), Some([1, 2, 3]));
    }

    #[test]
    fn test_to_rgb_borrows_rgb_frame() {
        let frame = bgr_2x1().into_rgb();
        assert!(matches!(frame.to_rgb(), Cow::Borrowed(_)));
        assert_eq!(frame.into_rgb().pixel(0, 0), Some([3, 2, 1]));
    }
}
