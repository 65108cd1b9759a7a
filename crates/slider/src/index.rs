use crate::build::IDS_PER_SLIDER;
use crate::dom::is_range_input;
use crate::error::SliderError;
use crate::event::SliderEvent;
use crate::geometry::SliderGeometry;
use crate::slider::Slider;
use css::{parse_selector_list, select_all};
use html::dom_utils::{find_node_by_id, has_class, parent_of};
use html::traverse::IdAllocator;
use html::{Id, Node};
use slider_core::{SliderDefaults, SliderOptions};

/// Enhance every range input matched by `selector`.
///
/// Matched elements that are not `input[type=range]` are skipped with one
/// aggregate warning. Inputs that already host a slider are left alone. On
/// error the document is left unchanged.
pub fn init(
    doc: &mut Node,
    selector: &str,
    options: &SliderOptions,
) -> Result<SliderIndex, SliderError> {
    let list = parse_selector_list(selector)?;
    let matched = select_all(doc, &list);

    let mut eligible = Vec::new();
    let mut skipped = 0usize;
    for id in &matched {
        match find_node_by_id(doc, *id) {
            Some(node) if is_range_input(node) => {
                if is_enhanced(doc, *id) {
                    log::debug!(target: "slider", "input {id:?} already hosts a slider");
                    continue;
                }
                eligible.push(*id);
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        log::warn!(
            target: "slider",
            "{skipped} of {} elements matched by `{selector}` are not range inputs; \
             only input[type='range'] elements become sliders",
            matched.len()
        );
    }

    // Validate everything first so a failure leaves the tree untouched.
    let defaults = SliderDefaults::default();
    let tree: &Node = doc;
    let prepared = eligible
        .into_iter()
        .map(|id| Slider::prepare(tree, id, &defaults, options))
        .collect::<Result<Vec<_>, _>>()?;
    let needed = IDS_PER_SLIDER * prepared.len() as u64;
    if IdAllocator::after(doc).remaining() < needed {
        return Err(SliderError::IdsExhausted);
    }

    let mut index = SliderIndex::default();
    for p in prepared {
        index.sliders.push(Slider::attach(doc, p)?);
    }
    Ok(index)
}

fn is_enhanced(doc: &Node, input_id: Id) -> bool {
    parent_of(doc, input_id)
        .and_then(|p| find_node_by_id(doc, p))
        .is_some_and(|parent| has_class(parent, "sj-container"))
}

/// The sliders of one document, with event routing by target element.
#[derive(Clone, Debug, Default)]
pub struct SliderIndex {
    sliders: Vec<Slider>,
}

impl SliderIndex {
    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slider> {
        self.sliders.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Slider> {
        self.sliders.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Slider> {
        self.sliders.get_mut(index)
    }

    /// Slider bound to the input `input_id`.
    pub fn by_input(&self, input_id: Id) -> Option<&Slider> {
        self.sliders.iter().find(|s| s.parts().input == input_id)
    }

    /// Slider whose element contains `target`.
    pub fn position_for_target(&self, doc: &Node, target: Id) -> Option<usize> {
        self.sliders.iter().position(|s| s.owns(doc, target))
    }

    /// Run the deferred layout pass for every slider.
    ///
    /// `measure` reports the geometry of each slider. Returns how many
    /// sliders are ready afterwards.
    pub fn layout_all<F>(&mut self, doc: &mut Node, mut measure: F) -> usize
    where
        F: FnMut(&Slider) -> SliderGeometry,
    {
        let mut ready = 0;
        for slider in &mut self.sliders {
            let geometry = measure(slider);
            if slider.on_layout(doc, &geometry) {
                ready += 1;
            }
        }
        ready
    }

    /// Route an event that hit `target` to the slider owning it.
    ///
    /// Events from a captured pointer keep going to the dragging slider even
    /// when the pointer has left it.
    pub fn dispatch(&mut self, doc: &mut Node, target: Id, event: SliderEvent) -> bool {
        let captured = match event {
            SliderEvent::PointerMove { .. }
            | SliderEvent::PointerUp { .. }
            | SliderEvent::LostPointerCapture { .. } => {
                self.sliders.iter().position(Slider::is_dragging)
            }
            _ => None,
        };
        let Some(pos) = captured.or_else(|| self.position_for_target(doc, target)) else {
            return false;
        };
        self.sliders[pos].handle_event(doc, event)
    }
}
