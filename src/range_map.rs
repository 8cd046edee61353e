use std::fmt;

use crate::float_util::{self, inverse_lerp};
use crate::EPSILON;

/// A linear mapping from a source range onto a target range.
///
/// Ranges are stored as given, so either one may run high-to-low.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct RangeMap {
    pub source: (f32, f32),
    pub target: (f32, f32),
}

impl fmt::Display for RangeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<[{}, {}] -> [{}, {}]>", self.source.0, self.source.1, self.target.0, self.target.1)
    }
}

impl RangeMap {
    pub fn new(from_source: f32, to_source: f32, from_target: f32, to_target: f32) -> Self {
        RangeMap { source: (from_source, to_source), target: (from_target, to_target) }
    }

    pub fn from_ranges(source: (f32, f32), target: (f32, f32)) -> Self {
        RangeMap { source, target }
    }

    pub fn map(&self, value: f32) -> f32 {
        float_util::map(value, self.source.0, self.source.1, self.target.0, self.target.1)
    }

    pub fn clamped_map(&self, value: f32) -> f32 {
        float_util::clamped_map(value, self.source.0, self.source.1, self.target.0, self.target.1)
    }

    /// Normalized position of `value` in the source range, 0 when degenerate.
    pub fn normalize(&self, value: f32) -> f32 {
        inverse_lerp(self.source.0, self.source.1, value)
    }

    /// The mapping back from the target range onto the source range.
    pub fn inverse(&self) -> RangeMap {
        RangeMap { source: self.target, target: self.source }
    }

    pub fn is_degenerate(&self) -> bool {
        (self.source.1 - self.source.0).abs() < EPSILON
    }
}
