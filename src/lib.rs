pub mod float_util;
pub mod range_map;

pub use float_util::{clamped_map, map};
pub use range_map::RangeMap;

/// Source ranges narrower than this are treated as degenerate.
///
/// A degenerate source range has no meaningful normalized position, so the
/// remap functions return the start of the target range instead of dividing
/// by (nearly) zero.
pub const EPSILON: f32 = f32::EPSILON;
