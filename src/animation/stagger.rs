/// Stagger fraction used by the bars and circles layouts.
pub const DEFAULT_STAGGER: f64 = 0.3;

/// Stagger fraction for the overlay phase of the rectangles and donut layouts.
pub const OVERLAY_STAGGER: f64 = 0.8;

/// Remap global `progress` to the local progress of item `index` out of `count`.
///
/// Item `i` starts after a delay of `i / (count - 1) * fraction`; every item animates over a
/// `1 - fraction` span, so the last item reaches `1.0` exactly when `progress` does. A single
/// item is not delayed. The result is clamped to `[0, 1]`.
pub fn stagger(progress: f64, index: usize, count: usize, fraction: f64) -> f64 {
    if count <= 1 {
        return clamp_unit(progress);
    }
    let span = 1.0 - fraction;
    if span <= 0.0 {
        // Degenerate fraction: items switch on at their delay.
        return if progress >= 1.0 { 1.0 } else { 0.0 };
    }
    let delay = (index as f64 / (count - 1) as f64) * fraction;
    clamp_unit((progress - delay) / span)
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stagger.rs"]
mod tests;
