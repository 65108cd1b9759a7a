use crate::{Id, Node};

/// Attribute value by ASCII case-insensitive name. Value-less attributes yield `None`.
pub fn get_attr<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    match node {
        Node::Element { attributes, .. } => attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref()),
        _ => None,
    }
}

pub fn has_attr(node: &Node, name: &str) -> bool {
    match node {
        Node::Element { attributes, .. } => {
            attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
        }
        _ => false,
    }
}

/// Set (or overwrite) an attribute. No-op on non-elements.
pub fn set_attr(node: &mut Node, name: &str, value: Option<&str>) {
    let Node::Element { attributes, .. } = node else {
        return;
    };
    let value = value.map(str::to_string);
    match attributes
        .iter_mut()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
    {
        Some((_, v)) => *v = value,
        None => attributes.push((name.to_string(), value)),
    }
}

/// Remove an attribute, returning whether it was present.
pub fn remove_attr(node: &mut Node, name: &str) -> bool {
    let Node::Element { attributes, .. } = node else {
        return false;
    };
    let before = attributes.len();
    attributes.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
    attributes.len() != before
}

pub fn has_class(node: &Node, class: &str) -> bool {
    get_attr(node, "class").is_some_and(|v| v.split_whitespace().any(|c| c == class))
}

/// Add a class token; returns `false` if it was already present.
pub fn add_class(node: &mut Node, class: &str) -> bool {
    if has_class(node, class) {
        return false;
    }
    let joined = match get_attr(node, "class").map(str::trim).filter(|s| !s.is_empty()) {
        Some(existing) => format!("{existing} {class}"),
        None => class.to_string(),
    };
    set_attr(node, "class", Some(&joined));
    true
}

/// Remove a class token; returns `false` if it was absent.
pub fn remove_class(node: &mut Node, class: &str) -> bool {
    if !has_class(node, class) {
        return false;
    }
    let kept = get_attr(node, "class")
        .unwrap_or("")
        .split_whitespace()
        .filter(|c| *c != class)
        .collect::<Vec<_>>()
        .join(" ");
    set_attr(node, "class", Some(&kept));
    true
}

pub fn get_style<'a>(node: &'a Node, property: &str) -> Option<&'a str> {
    match node {
        Node::Element { style, .. } => style
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(property))
            .map(|(_, v)| v.as_str()),
        _ => None,
    }
}

/// Set an inline style declaration.
pub fn set_style(node: &mut Node, property: &str, value: &str) {
    let Node::Element { style, .. } = node else {
        return;
    };
    match style
        .iter_mut()
        .find(|(k, _)| k.eq_ignore_ascii_case(property))
    {
        Some((_, v)) => *v = value.to_string(),
        None => style.push((property.to_string(), value.to_string())),
    }
}

/// Concatenated text of all descendant text nodes.
pub fn text_content(node: &Node) -> String {
    fn walk(node: &Node, out: &mut String) {
        match node {
            Node::Text { text, .. } => out.push_str(text),
            _ => {
                for c in node.children() {
                    walk(c, out);
                }
            }
        }
    }
    let mut out = String::new();
    walk(node, &mut out);
    out
}

/// Replace the children of an element with a single text node `text_id`.
pub fn set_text(node: &mut Node, text_id: Id, text: &str) {
    let Some(children) = node.children_mut() else {
        return;
    };
    children.clear();
    children.push(Node::text(text_id, text));
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|c| find_node_by_id(c, id))
}

pub fn find_node_by_id_mut(node: &mut Node, id: Id) -> Option<&mut Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children_mut()?
        .iter_mut()
        .find_map(|c| find_node_by_id_mut(c, id))
}

/// `true` if `id` is `node` itself or one of its descendants.
pub fn contains(node: &Node, id: Id) -> bool {
    find_node_by_id(node, id).is_some()
}

/// Id of the parent of `id`, if `id` is in the tree and is not the root.
pub fn parent_of(root: &Node, id: Id) -> Option<Id> {
    root.children().iter().find_map(|c| {
        if c.id() == id {
            Some(root.id())
        } else {
            parent_of(c, id)
        }
    })
}

/// Swap the node `id` for `replacement` in place, returning the detached node.
pub fn replace_node(root: &mut Node, id: Id, replacement: Node) -> Option<Node> {
    let parent_id = parent_of(root, id)?;
    let parent = find_node_by_id_mut(root, parent_id)?;
    let children = parent.children_mut()?;
    let slot = children.iter_mut().find(|c| c.id() == id)?;
    Some(std::mem::replace(slot, replacement))
}

/// Indented one-line-per-node dump, capped at `cap` nodes.
pub fn outline_from_dom(root: &Node, cap: usize) -> Vec<String> {
    fn walk(node: &Node, depth: usize, out: &mut Vec<String>, left: &mut usize) {
        if *left == 0 {
            return;
        }
        *left -= 1;
        let indent = "  ".repeat(depth);
        match node {
            Node::Document { children, .. } => {
                out.push(format!("{indent}#document"));
                for c in children {
                    walk(c, depth + 1, out, left);
                }
            }
            Node::Element {
                name,
                attributes,
                style,
                children,
                ..
            } => {
                let mut line = format!("{indent}<{name}");
                for (k, v) in attributes {
                    match v {
                        Some(v) => line.push_str(&format!(r#" {k}="{v}""#)),
                        None => line.push_str(&format!(" {k}")),
                    }
                }
                line.push('>');
                if !style.is_empty() {
                    let styl = style
                        .iter()
                        .map(|(k, v)| format!("{k}: {v};"))
                        .collect::<Vec<_>>()
                        .join(" ");
                    line.push_str(&format!("  /* {styl} */"));
                }
                out.push(line);
                for c in children {
                    walk(c, depth + 1, out, left);
                }
            }
            Node::Text { text, .. } => {
                let t = text.replace('\n', " ").trim().to_string();
                if !t.is_empty() {
                    out.push(format!("{indent}\"{t}\""));
                }
            }
        }
    }
    let mut out = Vec::new();
    let mut left = cap;
    walk(root, 0, &mut out, &mut left);
    out
}
