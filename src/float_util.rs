use crate::EPSILON;

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Position of `value` within `[a, b]`, where `a` maps to 0 and `b` maps to 1.
///
/// Returns 0 when the range is degenerate.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if (b - a).abs() < EPSILON {
        return 0.0;
    }
    (value - a) / (b - a)
}

/// Clamp `value` into the interval spanned by `a` and `b`, in either order.
///
/// Unlike `f32::clamp` this never panics: inverted bounds are reordered and
/// NaN bounds are ignored.
#[inline]
pub fn clamp_to_range(value: f32, a: f32, b: f32) -> f32 {
    value.max(a.min(b)).min(a.max(b))
}

/// Maps `value` from the source range onto the target range.
///
/// Values outside the source range are not clamped and extrapolate past the
/// target range. Either range may be given high-to-low.
///
/// If the source range is narrower than [`EPSILON`] the result is `from_target`.
pub fn map(value: f32, from_source: f32, to_source: f32, from_target: f32, to_target: f32) -> f32 {
    if is_degenerate(from_source, to_source) {
        return from_target;
    }
    lerp(from_target, to_target, (value - from_source) / (to_source - from_source))
}

/// Same as [`map`], but `value` is first clamped to the source range, so the
/// result always lies within the target range.
pub fn clamped_map(value: f32, from_source: f32, to_source: f32, from_target: f32, to_target: f32) -> f32 {
    if is_degenerate(from_source, to_source) {
        return from_target;
    }
    let clamped = clamp_to_range(value, from_source, to_source);
    let mapped = lerp(from_target, to_target, (clamped - from_source) / (to_source - from_source));

    // rounding at t == 1 can land an ulp past the target bound
    clamp_to_range(mapped, from_target, to_target)
}

fn is_degenerate(from_source: f32, to_source: f32) -> bool {
    if (to_source - from_source).abs() < EPSILON {
        log::trace!("degenerate source range [{}, {}], using target start", from_source, to_source);
        return true;
    }
    false
}
