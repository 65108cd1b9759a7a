use crate::geometry::{SliderRects, THUMB_SIZE, slider_rects};
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, StrokeKind, Vec2};
use slider::{Slider, TooltipSide};
use slider_core::format_value;

const TOOLTIP_PADDING: Vec2 = Vec2::new(6.0, 3.0);
const TOOLTIP_OFFSET: f32 = 4.0;

#[derive(Clone, Copy, Debug)]
pub struct SliderStyle {
    pub track: Color32,
    pub progress: Color32,
    pub thumb: Color32,
    /// Thumb color while a pointer holds it.
    pub thumb_active: Color32,
    pub label: Color32,
    pub tooltip_fill: Color32,
    pub tooltip_text: Color32,
    pub focus_stroke: Stroke,
    pub font_px: f32,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            track: Color32::from_rgb(210, 210, 210),
            progress: Color32::from_rgb(66, 133, 244),
            thumb: Color32::from_rgb(250, 250, 250),
            thumb_active: Color32::from_rgb(225, 235, 255),
            label: Color32::from_rgb(80, 80, 80),
            tooltip_fill: Color32::from_rgba_unmultiplied(30, 30, 30, 230),
            tooltip_text: Color32::WHITE,
            focus_stroke: Stroke::new(1.0, Color32::from_rgb(66, 133, 244)),
            font_px: 12.0,
        }
    }
}

/// Rectangle of a tooltip of `size` placed on `side` of the thumb.
pub fn tooltip_rect(thumb: Rect, side: TooltipSide, size: Vec2) -> Rect {
    let c = thumb.center();
    let center = match side {
        TooltipSide::Top => Pos2::new(c.x, thumb.min.y - TOOLTIP_OFFSET - size.y * 0.5),
        TooltipSide::Bottom => Pos2::new(c.x, thumb.max.y + TOOLTIP_OFFSET + size.y * 0.5),
        TooltipSide::Left => Pos2::new(thumb.min.x - TOOLTIP_OFFSET - size.x * 0.5, c.y),
        TooltipSide::Right => Pos2::new(thumb.max.x + TOOLTIP_OFFSET + size.x * 0.5, c.y),
    };
    Rect::from_center_size(center, size)
}

/// Paint `slider` into `rect` and return the part rectangles for hit-testing.
///
/// The tooltip is only drawn once the slider has been laid out, and only
/// while it is focused or being dragged.
pub fn paint_slider(
    painter: &Painter,
    rect: Rect,
    slider: &Slider,
    style: &SliderStyle,
) -> SliderRects {
    let config = slider.config();
    let rects = slider_rects(rect, config.orientation(), slider.ratio());
    let font = FontId::proportional(style.font_px);

    painter.text(
        rects.min_label.center(),
        Align2::CENTER_CENTER,
        format_value(config.min()),
        font.clone(),
        style.label,
    );
    painter.text(
        rects.max_label.center(),
        Align2::CENTER_CENTER,
        format_value(config.max()),
        font.clone(),
        style.label,
    );

    let rounding = rects.track.height().min(rects.track.width()) * 0.5;
    painter.rect_filled(rects.track, rounding, style.track);
    painter.rect_filled(rects.progress, rounding, style.progress);

    let thumb_fill = if slider.is_dragging() {
        style.thumb_active
    } else {
        style.thumb
    };
    painter.circle_filled(rects.thumb.center(), THUMB_SIZE * 0.5, thumb_fill);
    painter.circle_stroke(
        rects.thumb.center(),
        THUMB_SIZE * 0.5,
        Stroke::new(1.0, style.progress),
    );

    if slider.is_focused() {
        painter.rect_stroke(rects.slider, 2.0, style.focus_stroke, StrokeKind::Outside);
    }

    if let Some(side) = slider.tooltip_side()
        && (slider.is_focused() || slider.is_dragging())
    {
        let galley = painter.layout_no_wrap(slider.display_value(), font, style.tooltip_text);
        let size = galley.size() + TOOLTIP_PADDING * 2.0;
        let bubble = tooltip_rect(rects.thumb, side, size);
        painter.rect_filled(bubble, 3.0, style.tooltip_fill);
        painter.galley(bubble.min + TOOLTIP_PADDING, galley, style.tooltip_text);
    }

    rects
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn thumb() -> Rect {
        Rect::from_center_size(pos2(100.0, 50.0), vec2(14.0, 14.0))
    }

    #[test]
    fn tooltip_above_thumb() {
        let r = tooltip_rect(thumb(), TooltipSide::Top, vec2(30.0, 20.0));
        assert_eq!(r.max.y, 39.0);
        assert_eq!(r.center().x, 100.0);
    }

    #[test]
    fn tooltip_below_thumb() {
        let r = tooltip_rect(thumb(), TooltipSide::Bottom, vec2(30.0, 20.0));
        assert_eq!(r.min.y, 61.0);
    }

    #[test]
    fn tooltip_beside_thumb() {
        let left = tooltip_rect(thumb(), TooltipSide::Left, vec2(30.0, 20.0));
        assert_eq!(left.max.x, 89.0);
        assert_eq!(left.center().y, 50.0);
        let right = tooltip_rect(thumb(), TooltipSide::Right, vec2(30.0, 20.0));
        assert_eq!(right.min.x, 111.0);
    }
}
