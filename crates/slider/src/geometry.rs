//! Layout measurements the host reports after the slider is laid out.

use slider_core::Orientation;

/// Distance kept between the slider box and the document edge before the
/// tooltip flips to the other side.
pub const TOOLTIP_GAP_PX: f64 = 20.0;

/// Measured geometry of one slider, in CSS pixels.
///
/// `slider_top`/`slider_left` are viewport-relative (like a bounding client
/// rect); adding the scroll offsets gives document coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SliderGeometry {
    /// Track length along the slider axis.
    pub track_extent_px: f64,
    pub slider_top: f64,
    pub slider_left: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
    pub tooltip_width: f64,
    pub tooltip_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl TooltipSide {
    pub fn as_str(self) -> &'static str {
        match self {
            TooltipSide::Top => "top",
            TooltipSide::Bottom => "bottom",
            TooltipSide::Left => "left",
            TooltipSide::Right => "right",
        }
    }

    /// Class applied to the tooltip element.
    pub fn class_name(self) -> String {
        format!("sj-tooltip-{}", self.as_str())
    }

    pub const ALL: [TooltipSide; 4] = [
        TooltipSide::Top,
        TooltipSide::Bottom,
        TooltipSide::Left,
        TooltipSide::Right,
    ];
}

/// Prefer the tooltip above (or left of) the slider when there is room
/// between the slider and the document edge; otherwise flip it.
pub fn place_tooltip(geometry: &SliderGeometry, orientation: Orientation) -> TooltipSide {
    match orientation {
        Orientation::Horizontal => {
            let room = geometry.slider_top + geometry.scroll_y;
            if room >= geometry.tooltip_height + TOOLTIP_GAP_PX {
                TooltipSide::Top
            } else {
                TooltipSide::Bottom
            }
        }
        Orientation::Vertical => {
            let room = geometry.slider_left + geometry.scroll_x;
            if room >= geometry.tooltip_width + TOOLTIP_GAP_PX {
                TooltipSide::Left
            } else {
                TooltipSide::Right
            }
        }
    }
}
