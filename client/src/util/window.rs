//! Window geometry for the viewport broadcast.

#[cfg(test)]
#[path = "window_test.rs"]
mod window_test;

/// Geometry assumed when no window is available.
pub const FALLBACK_SIZE: (u32, u32) = (1024, 768);

/// Current `innerWidth` / `innerHeight` in CSS pixels.
pub fn inner_size() -> (u32, u32) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return FALLBACK_SIZE;
        };
        let width = window.inner_width().ok().and_then(|v| v.as_f64());
        let height = window.inner_height().ok().and_then(|v| v.as_f64());
        match (width, height) {
            (Some(w), Some(h)) => (css_pixels(w), css_pixels(h)),
            _ => FALLBACK_SIZE,
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        FALLBACK_SIZE
    }
}

#[cfg(any(test, feature = "csr"))]
/// Round a reported dimension to whole pixels. Negative and NaN become 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn css_pixels(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    value.round().min(f64::from(u32::MAX)) as u32
}
