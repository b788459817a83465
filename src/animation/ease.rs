/// Cubic ease-out, `1 - (1 - t)^3`: fast start, slow settle.
///
/// The one progress curve shared by live playback and frame export. `t` is clamped to `[0, 1]`
/// and NaN counts as 0, so the result stays in `[0, 1]` with exact endpoints.
pub fn ease_out(t: f64) -> f64 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
