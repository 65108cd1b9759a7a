use html::Node;
use html::dom_utils::get_attr;
use slider_core::AttributeSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputControlType {
    Range,
    Other,
}

pub fn input_control_type(node: &Node) -> InputControlType {
    if !node.is_element_named("input") {
        return InputControlType::Other;
    }

    match get_attr(node, "type").map(str::trim) {
        Some(t) if t.eq_ignore_ascii_case("range") => InputControlType::Range,
        _ => InputControlType::Other,
    }
}

pub fn is_range_input(node: &Node) -> bool {
    input_control_type(node) == InputControlType::Range
}

/// Declarative option lookup backed by an element's attributes.
pub(crate) struct ElementAttributes<'a>(pub(crate) &'a Node);

impl AttributeSource for ElementAttributes<'_> {
    fn attribute(&self, name: &str) -> Option<&str> {
        get_attr(self.0, name)
    }
}
