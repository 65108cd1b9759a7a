//! DOM construction for one slider.
//!
//! ```text
//! div.sj-container
//! ├── div.sj.sj-{orientation}   (tabindex, role, aria-*, data-*)
//! │   ├── span.sj-min
//! │   ├── div.sj-track
//! │   │   └── div.sj-progress
//! │   │       ├── div.sj-tooltip
//! │   │       └── div.sj-thumb
//! │   └── span.sj-max
//! └── input[type=range][hidden]  (the original element)
//! ```

use crate::error::SliderError;
use html::dom_utils::{find_node_by_id_mut, remove_attr, replace_node, set_attr};
use html::traverse::IdAllocator;
use html::{Id, Node};
use slider_core::{SliderConfig, format_value};

/// Option attributes consumed from the input before it is rewritten.
pub(crate) const OPTION_ATTRIBUTES: [&str; 7] = [
    "min",
    "max",
    "orientation",
    "thumbs",
    "step",
    "precision",
    "value",
];

/// Fresh node ids one slider takes from the document.
pub(crate) const IDS_PER_SLIDER: u64 = 11;

/// Ids of the elements that make up one slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderParts {
    pub container: Id,
    pub slider: Id,
    pub min_label: Id,
    pub min_label_text: Id,
    pub track: Id,
    pub progress: Id,
    pub tooltip: Id,
    pub tooltip_text: Id,
    pub thumb: Id,
    pub max_label: Id,
    pub max_label_text: Id,
    pub input: Id,
}

fn div(id: Id, class: &str) -> Node {
    Node::element(id, "div").with_attr("class", class)
}

fn label(id: Id, text_id: Id, class: &str, text: &str) -> Node {
    Node::element(id, "span")
        .with_attr("class", class)
        .with_child(Node::text(text_id, text))
}

fn slider_element(id: Id, config: &SliderConfig, value: f64) -> Node {
    let orientation = config.orientation().as_str();
    let mut el = div(id, &format!("sj sj-{orientation}"))
        .with_attr("tabindex", "0")
        .with_attr("role", "slider")
        .with_attr("aria-valuemin", &format_value(config.min()))
        .with_attr("aria-valuemax", &format_value(config.max()))
        .with_attr("aria-valuenow", &format_value(value))
        .with_attr("aria-orientation", orientation);

    // Mirror the resolved options for debugging.
    for (name, v) in option_values(config, value) {
        el = el.with_attr(&format!("data-{name}"), &v);
    }
    el
}

fn option_values(config: &SliderConfig, value: f64) -> [(&'static str, String); 7] {
    [
        ("min", format_value(config.min())),
        ("max", format_value(config.max())),
        ("orientation", config.orientation().as_str().to_string()),
        ("thumbs", config.thumbs().to_string()),
        ("step", format_value(config.step())),
        ("precision", config.precision().to_string()),
        ("value", format_value(value)),
    ]
}

/// Wrap the input `input_id` in a freshly built slider structure.
///
/// The input stays in the tree, hidden, with its option attributes replaced
/// by the resolved `min`/`max`/`step`/`value`. Ids are allocated before the
/// tree is touched, so an error leaves the document unchanged.
pub(crate) fn build_slider_dom(
    doc: &mut Node,
    input_id: Id,
    config: &SliderConfig,
    value: f64,
) -> Result<SliderParts, SliderError> {
    let mut ids = IdAllocator::after(doc);
    let mut next = || ids.next_id().ok_or(SliderError::IdsExhausted);
    let parts = SliderParts {
        container: next()?,
        slider: next()?,
        min_label: next()?,
        min_label_text: next()?,
        track: next()?,
        progress: next()?,
        tooltip: next()?,
        tooltip_text: next()?,
        thumb: next()?,
        max_label: next()?,
        max_label_text: next()?,
        input: input_id,
    };

    let text = format_value(value);
    let tooltip =
        div(parts.tooltip, "sj-tooltip").with_child(Node::text(parts.tooltip_text, &text));
    let progress = div(parts.progress, "sj-progress")
        .with_child(tooltip)
        .with_child(div(parts.thumb, "sj-thumb"));
    let slider = slider_element(parts.slider, config, value)
        .with_child(label(
            parts.min_label,
            parts.min_label_text,
            "sj-min",
            &format_value(config.min()),
        ))
        .with_child(div(parts.track, "sj-track").with_child(progress))
        .with_child(label(
            parts.max_label,
            parts.max_label_text,
            "sj-max",
            &format_value(config.max()),
        ));
    let container = div(parts.container, "sj-container").with_child(slider);

    let mut input =
        replace_node(doc, input_id, container).ok_or(SliderError::Detached(input_id))?;
    rewrite_input(&mut input, config, value);

    let container = find_node_by_id_mut(doc, parts.container)
        .and_then(Node::children_mut)
        .ok_or(SliderError::Detached(input_id))?;
    container.push(input);

    Ok(parts)
}

fn rewrite_input(input: &mut Node, config: &SliderConfig, value: f64) {
    for name in OPTION_ATTRIBUTES {
        remove_attr(input, name);
    }
    set_attr(input, "type", Some("range"));
    set_attr(input, "hidden", None);
    set_attr(input, "min", Some(&format_value(config.min())));
    set_attr(input, "max", Some(&format_value(config.max())));
    set_attr(input, "step", Some(&format_value(config.step())));
    set_attr(input, "value", Some(&format_value(value)));
}
