use crate::build::{SliderParts, build_slider_dom};
use crate::dom::{ElementAttributes, is_range_input};
use crate::error::SliderError;
use crate::event::{Key, SliderEvent};
use crate::geometry::{SliderGeometry, TooltipSide, place_tooltip};
use html::dom_utils::{
    add_class, contains, find_node_by_id, find_node_by_id_mut, parent_of, remove_class, set_attr,
    set_style, set_text,
};
use html::{Id, Node};
use slider_core::{
    SliderConfig, SliderDefaults, SliderOptions, ValueController, format_value, pixels_per_unit,
    resolve, round_to,
};

/// Class toggled on the slider element while it has keyboard focus.
pub const FOCUSED_CLASS: &str = "sj-focused";

/// Whether the slider has been measured yet.
///
/// Track geometry is unknown until the host's first layout pass, so input
/// is ignored until [`Slider::on_layout`] succeeds once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    AwaitingLayout,
    Ready { pixels_per_unit: f64 },
}

/// A validated input that has not been rewritten yet.
#[derive(Debug)]
pub(crate) struct Prepared {
    input_id: Id,
    controller: ValueController,
}

/// One slider bound to a range input of a document.
#[derive(Clone, Debug)]
pub struct Slider {
    parts: SliderParts,
    controller: ValueController,
    phase: Phase,
    tooltip_side: Option<TooltipSide>,
    focused: bool,
}

impl Slider {
    /// Enhance the range input `input_id` with the built-in defaults.
    pub fn new(doc: &mut Node, input_id: Id, options: &SliderOptions) -> Result<Self, SliderError> {
        Self::with_defaults(doc, input_id, &SliderDefaults::default(), options)
    }

    /// Enhance the range input `input_id`, resolving options against `defaults`.
    pub fn with_defaults(
        doc: &mut Node,
        input_id: Id,
        defaults: &SliderDefaults,
        options: &SliderOptions,
    ) -> Result<Self, SliderError> {
        let prepared = Self::prepare(doc, input_id, defaults, options)?;
        Self::attach(doc, prepared)
    }

    /// Check eligibility and resolve the configuration without touching the tree.
    pub(crate) fn prepare(
        doc: &Node,
        input_id: Id,
        defaults: &SliderDefaults,
        options: &SliderOptions,
    ) -> Result<Prepared, SliderError> {
        let input = find_node_by_id(doc, input_id)
            .filter(|n| is_range_input(n))
            .ok_or(SliderError::NotARangeInput(input_id))?;
        if parent_of(doc, input_id).is_none() {
            return Err(SliderError::Detached(input_id));
        }

        let resolved = resolve(defaults, &ElementAttributes(input), options)?;
        Ok(Prepared {
            input_id,
            controller: ValueController::from(resolved),
        })
    }

    /// Build the slider structure for a prepared input.
    pub(crate) fn attach(doc: &mut Node, prepared: Prepared) -> Result<Self, SliderError> {
        let Prepared {
            input_id,
            controller,
        } = prepared;
        let parts = build_slider_dom(doc, input_id, controller.config(), controller.value())?;

        log::debug!(
            target: "slider",
            "built slider {:?} for input {:?}: {:?}",
            parts.slider,
            input_id,
            controller.config()
        );

        Ok(Self {
            parts,
            controller,
            phase: Phase::AwaitingLayout,
            tooltip_side: None,
            focused: false,
        })
    }

    pub fn parts(&self) -> &SliderParts {
        &self.parts
    }

    pub fn config(&self) -> &SliderConfig {
        self.controller.config()
    }

    pub fn value(&self) -> f64 {
        self.controller.value()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tooltip_side(&self) -> Option<TooltipSide> {
        self.tooltip_side
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.drag().is_dragging()
    }

    /// Position of the value within the range, in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        self.controller.ratio()
    }

    /// Text shown in the tooltip.
    pub fn display_value(&self) -> String {
        format_value(self.value())
    }

    /// `true` if `id` is the slider element or one of its descendants.
    pub fn owns(&self, doc: &Node, id: Id) -> bool {
        find_node_by_id(doc, self.parts.slider).is_some_and(|el| contains(el, id))
    }

    /// Set the value programmatically.
    ///
    /// The value is normalized, then the hidden input, ARIA state, tooltip
    /// and progress are updated together. Returns `true` if it changed.
    pub fn set_value(&mut self, doc: &mut Node, raw: f64) -> bool {
        let changed = self.controller.set(raw);
        if changed {
            self.sync(doc);
        }
        changed
    }

    /// Measure the laid-out slider.
    ///
    /// The first successful call enables input; later calls (e.g. after a
    /// resize) refresh the scale and tooltip side. Returns `false` while the
    /// track still has no usable extent.
    pub fn on_layout(&mut self, doc: &mut Node, geometry: &SliderGeometry) -> bool {
        let Some(ppu) = pixels_per_unit(geometry.track_extent_px, self.config().range()) else {
            log::debug!(
                target: "slider",
                "slider {:?}: track extent {} not usable yet",
                self.parts.slider,
                geometry.track_extent_px
            );
            return false;
        };

        let side = place_tooltip(geometry, self.config().orientation());
        if let Some(tooltip) = find_node_by_id_mut(doc, self.parts.tooltip) {
            for s in TooltipSide::ALL {
                if s != side {
                    remove_class(tooltip, &s.class_name());
                }
            }
            add_class(tooltip, &side.class_name());
        }
        self.tooltip_side = Some(side);

        if self.phase == Phase::AwaitingLayout {
            log::debug!(
                target: "slider",
                "slider {:?} ready: {ppu} px/unit, tooltip {}",
                self.parts.slider,
                side.as_str()
            );
        }
        self.phase = Phase::Ready {
            pixels_per_unit: ppu,
        };
        self.sync(doc);
        true
    }

    /// Feed one host event. Returns `true` if the value changed.
    pub fn handle_event(&mut self, doc: &mut Node, event: SliderEvent) -> bool {
        let Phase::Ready { pixels_per_unit } = self.phase else {
            log::trace!(target: "slider", "slider {:?}: {event:?} before layout", self.parts.slider);
            return false;
        };

        let changed = match event {
            SliderEvent::KeyDown(key) => match key {
                Key::ArrowLeft | Key::ArrowDown => self.controller.prev(),
                Key::ArrowRight | Key::ArrowUp => self.controller.next(),
                Key::Home => self.controller.first(),
                Key::End => self.controller.last(),
                Key::Other => false,
            },
            SliderEvent::PointerDown {
                pointer_id,
                target,
                offset,
            } => {
                let Some(track) = find_node_by_id(doc, self.parts.track) else {
                    return false;
                };
                if !contains(track, target) {
                    return false;
                }
                let on_thumb = find_node_by_id(doc, self.parts.thumb)
                    .is_some_and(|thumb| contains(thumb, target));
                self.controller
                    .pointer_down(pointer_id, on_thumb, offset, pixels_per_unit)
            }
            SliderEvent::PointerMove { pointer_id, offset } => {
                self.controller
                    .pointer_move(pointer_id, offset, pixels_per_unit)
            }
            SliderEvent::PointerUp { pointer_id }
            | SliderEvent::LostPointerCapture { pointer_id } => {
                self.controller.release(pointer_id);
                false
            }
            SliderEvent::Focus => {
                self.set_focused(doc, true);
                false
            }
            SliderEvent::Blur => {
                self.set_focused(doc, false);
                false
            }
        };

        if changed {
            log::trace!(
                target: "slider",
                "slider {:?}: {event:?} -> {}",
                self.parts.slider,
                self.display_value()
            );
            self.sync(doc);
        }
        changed
    }

    fn set_focused(&mut self, doc: &mut Node, focused: bool) {
        self.focused = focused;
        if let Some(el) = find_node_by_id_mut(doc, self.parts.slider) {
            if focused {
                add_class(el, FOCUSED_CLASS);
            } else {
                remove_class(el, FOCUSED_CLASS);
            }
        }
    }

    /// Push the current value into every DOM mirror.
    fn sync(&self, doc: &mut Node) {
        let text = self.display_value();

        if let Some(input) = find_node_by_id_mut(doc, self.parts.input) {
            set_attr(input, "value", Some(&text));
        }
        if let Some(el) = find_node_by_id_mut(doc, self.parts.slider) {
            set_attr(el, "aria-valuenow", Some(&text));
            set_attr(el, "data-value", Some(&text));
        }
        if let Some(tooltip) = find_node_by_id_mut(doc, self.parts.tooltip) {
            set_text(tooltip, self.parts.tooltip_text, &text);
        }
        if let Phase::Ready { pixels_per_unit } = self.phase
            && let Some(progress) = find_node_by_id_mut(doc, self.parts.progress)
        {
            let px = round_to(self.controller.offset_px(pixels_per_unit), 2);
            let dimension = self.config().orientation().dimension();
            set_style(progress, dimension, &format!("{}px", format_value(px)));
        }
    }
}
