use egui::{Pos2, Rect, Vec2, pos2, vec2};
use html::Id;
use slider::{Orientation, SliderGeometry, SliderParts};

/// Space reserved for each of the min/max labels along the slider axis.
pub const LABEL_EXTENT: f32 = 32.0;
pub const TRACK_THICKNESS: f32 = 6.0;
pub const THUMB_SIZE: f32 = 14.0;

/// Screen rectangles of one slider's parts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRects {
    pub slider: Rect,
    pub min_label: Rect,
    pub track: Rect,
    pub progress: Rect,
    pub thumb: Rect,
    pub max_label: Rect,
}

/// Split `rect` into labels, track, progress and thumb.
///
/// Labels sit at both ends of the axis and the track fills the space between
/// them. Progress grows from the min end (left, or top when vertical) and the
/// thumb is centered on its far edge.
pub fn slider_rects(rect: Rect, orientation: Orientation, ratio: f64) -> SliderRects {
    let ratio = ratio.clamp(0.0, 1.0) as f32;
    let half = TRACK_THICKNESS * 0.5;

    match orientation {
        Orientation::Horizontal => {
            let label = LABEL_EXTENT.min(rect.width() / 4.0);
            let min_label = Rect::from_min_max(rect.min, pos2(rect.min.x + label, rect.max.y));
            let max_label = Rect::from_min_max(pos2(rect.max.x - label, rect.min.y), rect.max);
            let cy = rect.center().y;
            let track = Rect::from_min_max(
                pos2(min_label.max.x, cy - half),
                pos2(max_label.min.x, cy + half),
            );
            let end = track.min.x + ratio * track.width();
            SliderRects {
                slider: rect,
                min_label,
                track,
                progress: Rect::from_min_max(track.min, pos2(end, track.max.y)),
                thumb: Rect::from_center_size(pos2(end, cy), Vec2::splat(THUMB_SIZE)),
                max_label,
            }
        }
        Orientation::Vertical => {
            let label = LABEL_EXTENT.min(rect.height() / 4.0);
            let min_label = Rect::from_min_max(rect.min, pos2(rect.max.x, rect.min.y + label));
            let max_label = Rect::from_min_max(pos2(rect.min.x, rect.max.y - label), rect.max);
            let cx = rect.center().x;
            let track = Rect::from_min_max(
                pos2(cx - half, min_label.max.y),
                pos2(cx + half, max_label.min.y),
            );
            let end = track.min.y + ratio * track.height();
            SliderRects {
                slider: rect,
                min_label,
                track,
                progress: Rect::from_min_max(track.min, pos2(track.max.x, end)),
                thumb: Rect::from_center_size(pos2(cx, end), Vec2::splat(THUMB_SIZE)),
                max_label,
            }
        }
    }
}

/// Track length along the slider axis.
pub fn track_extent(track: Rect, orientation: Orientation) -> f64 {
    match orientation {
        Orientation::Horizontal => track.width() as f64,
        Orientation::Vertical => track.height() as f64,
    }
}

/// Pointer offset from the min end of the track. Not clamped.
pub fn track_offset(track: Rect, pos: Pos2, orientation: Orientation) -> f64 {
    match orientation {
        Orientation::Horizontal => (pos.x - track.min.x) as f64,
        Orientation::Vertical => (pos.y - track.min.y) as f64,
    }
}

/// Measurements for `Slider::on_layout`.
///
/// `scroll` is how far the viewport is scrolled; `tooltip_size` is the
/// tooltip's rendered size.
pub fn measure(
    rects: &SliderRects,
    orientation: Orientation,
    scroll: Vec2,
    tooltip_size: Vec2,
) -> SliderGeometry {
    SliderGeometry {
        track_extent_px: track_extent(rects.track, orientation),
        slider_top: rects.slider.min.y as f64,
        slider_left: rects.slider.min.x as f64,
        scroll_x: scroll.x as f64,
        scroll_y: scroll.y as f64,
        tooltip_width: tooltip_size.x as f64,
        tooltip_height: tooltip_size.y as f64,
    }
}

/// Element under `pos`: the thumb, then the track (widened to the thumb's
/// thickness so it is easy to grab), then the slider itself.
pub fn hit_test(
    rects: &SliderRects,
    parts: &SliderParts,
    orientation: Orientation,
    pos: Pos2,
) -> Option<Id> {
    if rects.thumb.contains(pos) {
        return Some(parts.thumb);
    }
    let band = match orientation {
        Orientation::Horizontal => vec2(rects.track.width(), THUMB_SIZE),
        Orientation::Vertical => vec2(THUMB_SIZE, rects.track.height()),
    };
    if Rect::from_center_size(rects.track.center(), band).contains(pos) {
        return Some(parts.track);
    }
    rects.slider.contains(pos).then_some(parts.slider)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal(ratio: f64) -> SliderRects {
        slider_rects(
            Rect::from_min_size(pos2(10.0, 20.0), vec2(232.0, 20.0)),
            Orientation::Horizontal,
            ratio,
        )
    }

    fn parts() -> SliderParts {
        SliderParts {
            container: Id(10),
            slider: Id(11),
            min_label: Id(12),
            min_label_text: Id(13),
            track: Id(14),
            progress: Id(15),
            tooltip: Id(16),
            tooltip_text: Id(17),
            thumb: Id(18),
            max_label: Id(19),
            max_label_text: Id(20),
            input: Id(2),
        }
    }

    #[test]
    fn horizontal_track_sits_between_labels() {
        let r = horizontal(0.25);
        assert_eq!(r.min_label.max.x, 42.0);
        assert_eq!(r.max_label.min.x, 210.0);
        assert_eq!(r.track.width(), 168.0);
        assert_eq!(r.track.height(), TRACK_THICKNESS);
        assert_eq!(r.track.center().y, 30.0);
        assert_eq!(r.progress.max.x, 84.0);
        assert_eq!(r.thumb.center(), pos2(84.0, 30.0));
    }

    #[test]
    fn ratio_is_clamped() {
        let r = horizontal(1.5);
        assert_eq!(r.progress.max.x, r.track.max.x);
        let r = horizontal(-1.0);
        assert_eq!(r.progress.width(), 0.0);
    }

    #[test]
    fn vertical_progress_grows_from_top() {
        let r = slider_rects(
            Rect::from_min_size(pos2(0.0, 0.0), vec2(20.0, 264.0)),
            Orientation::Vertical,
            0.5,
        );
        assert_eq!(r.track.min.y, 32.0);
        assert_eq!(r.track.height(), 200.0);
        assert_eq!(r.progress.min.y, 32.0);
        assert_eq!(r.progress.max.y, 132.0);
        assert_eq!(r.thumb.center(), pos2(10.0, 132.0));
        assert_eq!(track_extent(r.track, Orientation::Vertical), 200.0);
        assert_eq!(track_offset(r.track, pos2(3.0, 82.0), Orientation::Vertical), 50.0);
    }

    #[test]
    fn narrow_rect_shrinks_labels() {
        let r = slider_rects(
            Rect::from_min_size(pos2(0.0, 0.0), vec2(80.0, 20.0)),
            Orientation::Horizontal,
            0.0,
        );
        assert_eq!(r.min_label.width(), 20.0);
        assert_eq!(r.track.width(), 40.0);
    }

    #[test]
    fn offsets_are_relative_to_track_start() {
        let r = horizontal(0.0);
        let h = Orientation::Horizontal;
        assert_eq!(track_offset(r.track, pos2(126.0, 0.0), h), 84.0);
        assert_eq!(track_offset(r.track, pos2(30.0, 0.0), h), -12.0);
    }

    #[test]
    fn measure_reports_track_and_position() {
        let r = horizontal(0.0);
        let g = measure(&r, Orientation::Horizontal, vec2(0.0, 300.0), vec2(28.0, 18.0));
        assert_eq!(g.track_extent_px, 168.0);
        assert_eq!(g.slider_top, 20.0);
        assert_eq!(g.slider_left, 10.0);
        assert_eq!(g.scroll_y, 300.0);
        assert_eq!(g.tooltip_width, 28.0);
    }

    #[test]
    fn hit_test_prefers_thumb_then_track() {
        let r = horizontal(0.25);
        let p = parts();
        let h = Orientation::Horizontal;
        assert_eq!(hit_test(&r, &p, h, pos2(84.0, 30.0)), Some(p.thumb));
        assert_eq!(hit_test(&r, &p, h, pos2(180.0, 34.0)), Some(p.track));
        assert_eq!(hit_test(&r, &p, h, pos2(20.0, 30.0)), Some(p.slider));
        assert_eq!(hit_test(&r, &p, h, pos2(0.0, 0.0)), None);
    }
}
