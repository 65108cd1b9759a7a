//! Conversions between track pixels and slider values.
//!
//! Offsets are measured along the slider axis from the track origin (left
//! edge for horizontal sliders, top edge for vertical ones).

/// Pixels covered by one value unit. `None` until the track has a usable extent.
pub fn pixels_per_unit(track_extent_px: f64, range: f64) -> Option<f64> {
    let ppu = track_extent_px / range;
    (ppu.is_finite() && ppu > 0.0).then_some(ppu)
}

/// Raw (unnormalized) value under a track offset.
pub fn value_from_offset(offset_px: f64, pixels_per_unit: f64, min: f64) -> f64 {
    offset_px / pixels_per_unit + min
}

/// Progress length for `value`, in pixels.
pub fn offset_from_value(value: f64, pixels_per_unit: f64, min: f64) -> f64 {
    (value - min) * pixels_per_unit
}
