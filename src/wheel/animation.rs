/// Decelerates smoothly toward the end of the spin
pub fn ease_out_quint(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(5)
}

pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Wheel angle `elapsed` ms into a spin of `duration` ms.
///
/// Pinned to `target` once the duration has passed so the resting angle
/// carries no interpolation error.
pub fn compute_angle(start: f64, target: f64, elapsed: f64, duration: f64) -> f64 {
    if elapsed >= duration {
        return target;
    }
    let t = (elapsed / duration).clamp(0.0, 1.0);
    lerp(start, target, ease_out_quint(t))
}
