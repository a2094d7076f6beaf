//! Flat `i16` result layout: `[N, x1, y1, w1, h1, id1, ..., xN, yN, wN, hN, idN]`.
//!
//! `N == 0` degenerates to `[0]`. Values are truncated toward zero before the
//! range check, matching what existing callers of the layout expect.

use log::warn;

use crate::LOG_TARGET;
use crate::adapter::OverflowPolicy;
use crate::error::{AdapterError, Result};
use crate::tracking::TrackedTarget;

/// Integers per target after the leading count.
pub const FIELDS_PER_TARGET: usize = 5;

/// One target as read back from the flat layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WireTarget {
    pub x: i16,
    pub y: i16,
    pub width: i16,
    pub height: i16,
    pub track_id: i16,
}

/// Flatten `targets`, in the given order, into the result layout.
pub fn encode_targets(targets: &[TrackedTarget], policy: OverflowPolicy) -> Result<Vec<i16>> {
    let count = i16::try_from(targets.len()).map_err(|_| AdapterError::CoordinateOverflow {
        field: "count",
        value: targets.len() as f64,
    })?;

    let mut out = Vec::with_capacity(1 + FIELDS_PER_TARGET * targets.len());
    out.push(count);
    for target in targets {
        let [x, y, w, h] = target.tlwh.to_tlwh();
        out.push(encode_geometry("x", x, policy)?);
        out.push(encode_geometry("y", y, policy)?);
        out.push(encode_geometry("width", w, policy)?);
        out.push(encode_geometry("height", h, policy)?);
        out.push(encode_track_id(target.track_id)?);
    }
    Ok(out)
}

/// Parse a flat result back into targets.
pub fn decode_targets(result: &[i16]) -> Result<Vec<WireTarget>> {
    let malformed = || AdapterError::MalformedResult { len: result.len() };

    let (&count, body) = result.split_first().ok_or_else(malformed)?;
    let count = usize::try_from(count).map_err(|_| malformed())?;
    if body.len() != count * FIELDS_PER_TARGET {
        return Err(malformed());
    }

    Ok(body
        .chunks_exact(FIELDS_PER_TARGET)
        .map(|c| WireTarget {
            x: c[0],
            y: c[1],
            width: c[2],
            height: c[3],
            track_id: c[4],
        })
        .collect())
}

fn encode_geometry(field: &'static str, value: f32, policy: OverflowPolicy) -> Result<i16> {
    let truncated = f64::from(value).trunc();
    if (f64::from(i16::MIN)..=f64::from(i16::MAX)).contains(&truncated) {
        return Ok(truncated as i16);
    }

    match policy {
        OverflowPolicy::Saturate if !truncated.is_nan() => {
            warn!(target: LOG_TARGET, "{field} value {value} clamped to the 16-bit range");
            Ok(truncated as i16)
        }
        _ => Err(AdapterError::CoordinateOverflow {
            field,
            value: f64::from(value),
        }),
    }
}

fn encode_track_id(track_id: u64) -> Result<i16> {
    i16::try_from(track_id).map_err(|_| AdapterError::CoordinateOverflow {
        field: "track_id",
        value: track_id as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::Rect;

    fn target(x: f32, y: f32, w: f32, h: f32, id: u64) -> TrackedTarget {
        TrackedTarget::new(Rect::new(x, y, w, h), id)
    }

    #[test]
    fn test_empty_is_single_zero() {
        assert_eq!(encode_targets(&[], OverflowPolicy::Fail).unwrap(), vec![0]);
    }

    #[test]
    fn test_layout_keeps_tracker_order() {
        let targets = [
            target(100.0, 50.0, 20.0, 40.0, 7),
            target(10.0, 10.0, 20.0, 40.0, 1),
        ];
        let out = encode_targets(&targets, OverflowPolicy::Fail).unwrap();
        assert_eq!(out, vec![2, 100, 50, 20, 40, 7, 10, 10, 20, 40, 1]);
        assert_eq!(out.len(), 1 + FIELDS_PER_TARGET * targets.len());
    }

    #[test]
    fn test_truncates_toward_zero() {
        let out = encode_targets(&[target(10.9, -3.7, 20.5, 40.99, 3)], OverflowPolicy::Fail).unwrap();
        assert_eq!(out, vec![1, 10, -3, 20, 40, 3]);
    }

    #[test]
    fn test_range_edges() {
        let out = encode_targets(
            &[target(32767.9, -32768.9, 0.0, 0.0, 32767)],
            OverflowPolicy::Fail,
        )
        .unwrap();
        assert_eq!(out, vec![1, 32767, -32768, 0, 0, 32767]);
    }

    #[test]
    fn test_geometry_overflow_fails() {
        let err = encode_targets(&[target(40000.0, 0.0, 10.0, 10.0, 1)], OverflowPolicy::Fail)
            .unwrap_err();
        assert!(matches!(err, AdapterError::CoordinateOverflow { field: "x", .. }));

        let err = encode_targets(&[target(0.0, 0.0, 10.0, -32769.0, 1)], OverflowPolicy::Fail)
            .unwrap_err();
        assert!(matches!(err, AdapterError::CoordinateOverflow { field: "height", .. }));
    }

    #[test]
    fn test_saturate_policy() {
        let out = encode_targets(
            &[target(40000.0, -40000.0, 10.0, 10.0, 2)],
            OverflowPolicy::Saturate,
        )
        .unwrap();
        assert_eq!(out, vec![1, i16::MAX, i16::MIN, 10, 10, 2]);

        let err = encode_targets(&[target(f32::NAN, 0.0, 1.0, 1.0, 2)], OverflowPolicy::Saturate)
            .unwrap_err();
        assert!(matches!(err, AdapterError::CoordinateOverflow { field: "x", .. }));
    }

    #[test]
    fn test_count_must_fit() {
        let at_limit = vec![target(1.0, 2.0, 3.0, 4.0, 9); i16::MAX as usize];
        let out = encode_targets(&at_limit, OverflowPolicy::Fail).unwrap();
        assert_eq!(out[0], i16::MAX);
        assert_eq!(out.len(), 1 + FIELDS_PER_TARGET * at_limit.len());

        let over = vec![target(1.0, 2.0, 3.0, 4.0, 9); i16::MAX as usize + 1];
        let err = encode_targets(&over, OverflowPolicy::Saturate).unwrap_err();
        assert!(matches!(
            err,
            AdapterError::CoordinateOverflow { field: "count", value } if value == 32768.0
        ));
    }

    #[test]
    fn test_track_id_always_checked() {
        let err = encode_targets(&[target(0.0, 0.0, 1.0, 1.0, 32768)], OverflowPolicy::Saturate)
            .unwrap_err();
        assert!(matches!(err, AdapterError::CoordinateOverflow { field: "track_id", .. }));
    }

    #[test]
    fn test_decode() {
        assert!(decode_targets(&[0]).unwrap().is_empty());
        assert_eq!(
            decode_targets(&[1, 10, 10, 20, 40, 1]).unwrap(),
            vec![WireTarget {
                x: 10,
                y: 10,
                width: 20,
                height: 40,
                track_id: 1
            }]
        );
    }

    #[test]
    fn test_decode_malformed() {
        for bad in [&[][..], &[1, 2, 3][..], &[-1][..], &[0, 5][..]] {
            assert!(matches!(
                decode_targets(bad),
                Err(AdapterError::MalformedResult { len }) if len == bad.len()
            ));
        }
    }
}
