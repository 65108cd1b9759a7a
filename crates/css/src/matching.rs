use crate::syntax::{CompoundSelector, SelectorList, SimpleSelector};
use html::{Id, Node};

fn get_attribute<'a>(attributes: &'a [(String, Option<String>)], key: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .and_then(|(_, v)| v.as_deref())
}

fn has_attribute(attributes: &[(String, Option<String>)], key: &str) -> bool {
    attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(key))
}

fn matches_simple(name: &str, attributes: &[(String, Option<String>)], sel: &SimpleSelector) -> bool {
    match sel {
        SimpleSelector::Universal => true,
        SimpleSelector::Type(t) => name.eq_ignore_ascii_case(t),
        SimpleSelector::Id(want) => get_attribute(attributes, "id") == Some(want.as_str()),
        SimpleSelector::Class(want) => get_attribute(attributes, "class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == want)),
        SimpleSelector::Attribute { name: key, value } => match value {
            None => has_attribute(attributes, key),
            Some(want) => get_attribute(attributes, key) == Some(want.as_str()),
        },
    }
}

// Check if an element matches every part of a compound selector
pub fn matches_compound(node: &Node, selector: &CompoundSelector) -> bool {
    let Node::Element {
        name, attributes, ..
    } = node
    else {
        return false;
    };
    selector
        .parts
        .iter()
        .all(|part| matches_simple(name, attributes, part))
}

pub fn matches_list(node: &Node, list: &SelectorList) -> bool {
    list.selectors.iter().any(|s| matches_compound(node, s))
}

// Ids of matching elements in document order, each listed once
pub fn select_all(root: &Node, list: &SelectorList) -> Vec<Id> {
    fn walk(node: &Node, list: &SelectorList, out: &mut Vec<Id>) {
        if matches_list(node, list) {
            out.push(node.id());
        }
        for c in node.children() {
            walk(c, list, out);
        }
    }
    let mut out = Vec::new();
    walk(root, list, &mut out);
    out
}
