use html::Id;
use slider_core::PointerId;

/// Keys a slider reacts to, named after DOM `KeyboardEvent.code` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Other,
}

impl Key {
    pub fn from_code(code: &str) -> Self {
        match code {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "Home" => Key::Home,
            "End" => Key::End,
            _ => Key::Other,
        }
    }
}

/// Raw host input forwarded to a slider.
///
/// Pointer offsets are along the slider axis, relative to the track origin
/// (the equivalent of `offsetX` / `offsetY` on the track element).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderEvent {
    KeyDown(Key),
    PointerDown {
        pointer_id: PointerId,
        target: Id,
        offset: f64,
    },
    PointerMove {
        pointer_id: PointerId,
        offset: f64,
    },
    PointerUp {
        pointer_id: PointerId,
    },
    LostPointerCapture {
        pointer_id: PointerId,
    },
    Focus,
    Blur,
}
