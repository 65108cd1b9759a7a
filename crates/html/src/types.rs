pub type NodeId = u32;

/// Node identity within one document. `Id(0)` means "not assigned yet".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub NodeId);

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Document {
        id: Id,
        children: Vec<Node>,
    },
    Element {
        id: Id,
        name: String,
        attributes: Vec<(String, Option<String>)>,
        style: Vec<(String, String)>,
        children: Vec<Node>,
    },
    Text {
        id: Id,
        text: String,
    },
}

impl Node {
    /// Empty document root.
    pub fn document(children: Vec<Node>) -> Self {
        Node::Document {
            id: Id(0),
            children,
        }
    }

    /// Bare element with no attributes or children.
    pub fn element(id: Id, name: &str) -> Self {
        Node::Element {
            id,
            name: name.to_string(),
            attributes: Vec::new(),
            style: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(id: Id, text: &str) -> Self {
        Node::Text {
            id,
            text: text.to_string(),
        }
    }

    /// Builder: append an attribute.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        if let Node::Element { attributes, .. } = &mut self {
            attributes.push((name.to_string(), Some(value.to_string())));
        }
        self
    }

    /// Builder: append a child node.
    pub fn with_child(mut self, child: Node) -> Self {
        if let Some(children) = self.children_mut() {
            children.push(child);
        }
        self
    }

    pub fn id(&self) -> Id {
        match self {
            Node::Document { id, .. } => *id,
            Node::Element { id, .. } => *id,
            Node::Text { id, .. } => *id,
        }
    }

    pub fn set_id(&mut self, new_id: Id) {
        match self {
            Node::Document { id, .. } => *id = new_id,
            Node::Element { id, .. } => *id = new_id,
            Node::Text { id, .. } => *id = new_id,
        }
    }

    /// Element tag name, `None` for non-elements.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Node::Element { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn is_element_named(&self, tag: &str) -> bool {
        self.tag_name().is_some_and(|n| n.eq_ignore_ascii_case(tag))
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document { children, .. } | Node::Element { children, .. } => children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Document { children, .. } => Some(children),
            Node::Element { children, .. } => Some(children),
            _ => None,
        }
    }
}
