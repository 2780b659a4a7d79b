//! Wedge layout and pointer-to-wedge mapping
//!
//! Wedge `i` covers `[i·arc, (i+1)·arc)` in the wheel's local frame. The
//! pointer is fixed in world space, so finding the wedge under it means
//! undoing the wheel's rotation first.

use super::colors::ColorMap;
use crate::types::{Participant, Rgb, POINTER_ANGLE};
use serde::Serialize;
use std::f64::consts::TAU;

/// Angular width of one wedge
pub fn arc_size(count: usize) -> f64 {
    TAU / count.max(1) as f64
}

/// Index of the wedge under the pointer when the wheel is rotated by `angle`.
///
/// Always in `[0, count)`; the clamp covers the rounding case where the
/// normalized angle lands on exactly `TAU`.
pub fn landing_index(angle: f64, count: usize) -> usize {
    let count = count.max(1);
    let local = (POINTER_ANGLE - angle % TAU + TAU) % TAU;
    let index = (local / arc_size(count)).floor();
    if index.is_nan() || index < 0.0 {
        return 0;
    }
    (index as usize).min(count - 1)
}

/// Shift `angle` by the smallest amount that puts wedge `index` under the
/// pointer. Needed when an angle sits on a wedge boundary and rounding in
/// the normalization picks the neighbor.
pub fn settle_into(angle: f64, count: usize, index: usize) -> f64 {
    if landing_index(angle, count) == index {
        return angle;
    }
    let mut step = angle.abs().max(1.0) * f64::EPSILON;
    for _ in 0..64 {
        for candidate in [angle - step, angle + step] {
            if landing_index(candidate, count) == index {
                return candidate;
            }
        }
        step *= 2.0;
    }
    tracing::warn!("Could not settle angle {} into wedge {} of {}", angle, index, count);
    angle
}

/// One slice of the wheel as a renderer needs it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wedge {
    pub index: usize,
    pub name: Participant,
    pub color: Option<Rgb>,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Where the label is drawn: the middle of the wedge
    pub label_angle: f64,
}

pub fn layout(participants: &[Participant], colors: &ColorMap) -> Vec<Wedge> {
    let arc = arc_size(participants.len());
    participants
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let start_angle = i as f64 * arc;
            Wedge {
                index: i,
                name: name.clone(),
                color: colors.get(name),
                start_angle,
                end_angle: start_angle + arc,
                label_angle: start_angle + arc / 2.0,
            }
        })
        .collect()
}
