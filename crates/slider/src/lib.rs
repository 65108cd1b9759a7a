//! Range-input sliders for the document tree.
//!
//! [`init`] finds `input[type=range]` elements by selector, wraps each in a
//! styled slider structure and returns a [`SliderIndex`] that routes host
//! events (keys, pointer, focus) to the right [`Slider`]. All value rules
//! live in `slider_core`; this crate only mirrors the value into the tree.

mod build;
mod dom;
mod error;
mod event;
mod geometry;
mod index;
mod slider;

pub use build::SliderParts;
pub use dom::{InputControlType, input_control_type, is_range_input};
pub use error::SliderError;
pub use event::{Key, SliderEvent};
pub use geometry::{SliderGeometry, TOOLTIP_GAP_PX, TooltipSide, place_tooltip};
pub use index::{SliderIndex, init};
pub use slider::{FOCUSED_CLASS, Phase, Slider};

pub use slider_core::{Orientation, SliderDefaults, SliderOptions};
