//! # In-memory DOM Host
//!
//! A small element tree standing in for the browser document. It offers exactly what
//! the controllers consume from a host: lookup by id, ancestry tests, descendant
//! queries, and class / text / value / visibility mutation.
//!
//! Elements live in an arena and are addressed by [`NodeId`]. Nodes are never removed,
//! so a `NodeId` stays valid for the lifetime of its [`Document`].

pub mod events;
pub mod sample;

pub use events::*;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

/// Index of an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A required element was not found when a controller initialized.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Missing {role} element `{id}`")]
pub struct MissingElementError {
    /// What the element is for, e.g. "menu toggle".
    pub role: String,
    /// The id that was looked up.
    pub id: String,
}

impl MissingElementError {
    pub fn new(role: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            id: id.into(),
        }
    }
}

/// One element of the tree.
///
/// Built with the `with_*` methods and attached with [`Document::append`]:
///
/// ```rust
/// use page_controls::dom::{Document, Element};
///
/// let mut doc = Document::new();
/// let nav = doc.append(doc.body(), Element::new("nav").with_class("navbar"));
/// let button = doc.append(nav, Element::new("button").with_id("menuToggle"));
/// assert_eq!(doc.get_element_by_id("menuToggle"), Some(button));
/// assert_eq!(doc.closest_with_class(button, "navbar"), Some(nav));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    value: String,
    hidden: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            id: None,
            classes: BTreeSet::new(),
            attributes: BTreeMap::new(),
            text: String::new(),
            value: String::new(),
            hidden: false,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// A button that submits its form when activated (`type` absent or `submit`).
    pub fn is_submit_control(&self) -> bool {
        match self.tag.as_str() {
            "button" => matches!(self.attribute("type"), None | Some("submit")),
            "input" => self.attribute("type") == Some("submit"),
            _ => false,
        }
    }
}

/// The element tree.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document containing only `<body>`.
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new("body")],
        }
    }

    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends `element` as the last child of `parent` and returns its id.
    ///
    /// An unknown `parent` attaches the element to `<body>`.
    pub fn append(&mut self, parent: NodeId, mut element: Element) -> NodeId {
        let parent = if parent.0 < self.nodes.len() {
            parent
        } else {
            self.body()
        };
        let node = NodeId(self.nodes.len());
        element.parent = Some(parent);
        element.children.clear();
        self.nodes.push(element);
        self.nodes[parent.0].children.push(node);
        node
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0)
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First element in document order with the given id.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.body())
            .into_iter()
            .find(|node| self.nodes[node.0].id.as_deref() == Some(id))
    }

    /// `node` followed by each of its ancestors up to `<body>`.
    pub fn ancestors(&self, node: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = self.element(node).map(|_| node);
        while let Some(id) = current {
            path.push(id);
            current = self.nodes[id.0].parent;
        }
        path
    }

    /// Nearest ancestor-or-self carrying `class`, like `Element.closest(".class")`.
    pub fn closest_with_class(&self, node: NodeId, class: &str) -> Option<NodeId> {
        self.ancestors(node)
            .into_iter()
            .find(|id| self.nodes[id.0].has_class(class))
    }

    /// Nearest ancestor-or-self with the given tag.
    pub fn closest_with_tag(&self, node: NodeId, tag: &str) -> Option<NodeId> {
        self.ancestors(node)
            .into_iter()
            .find(|id| self.nodes[id.0].tag == tag)
    }

    /// True if `node` is `ancestor` or lies beneath it.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors(node).contains(&ancestor)
    }

    /// `root` and everything beneath it, in document order.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if self.element(root).is_none() {
            return out;
        }
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.nodes[node.0].children.iter().rev().copied());
        }
        out
    }

    /// Strict descendants of `root` with the given tag, like `querySelectorAll(tag)`.
    pub fn query_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .skip(1)
            .filter(|node| self.nodes[node.0].tag == tag)
            .collect()
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            el.classes.insert(class.to_string());
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            el.classes.remove(class);
        }
    }

    /// Adds or removes `class` so that its presence equals `present`.
    pub fn set_class(&mut self, node: NodeId, class: &str, present: bool) {
        if present {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }

    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(Element::text)
    }

    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        if let Some(el) = self.element_mut(node) {
            el.text = text.into();
        }
    }

    pub fn value(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(Element::value)
    }

    pub fn set_value(&mut self, node: NodeId, value: impl Into<String>) {
        if let Some(el) = self.element_mut(node) {
            el.value = value.into();
        }
    }

    pub fn is_hidden(&self, node: NodeId) -> bool {
        self.element(node).is_some_and(Element::is_hidden)
    }

    pub fn set_hidden(&mut self, node: NodeId, hidden: bool) {
        if let Some(el) = self.element_mut(node) {
            el.hidden = hidden;
        }
    }
}

/// Shared handle to the page's [`Document`].
///
/// Access goes through closures so a lock can never be held across an `.await`.
#[derive(Debug, Clone, Default)]
pub struct DomHandle {
    inner: Arc<Mutex<Document>>,
}

impl DomHandle {
    pub fn new(document: Document) -> Self {
        Self {
            inner: Arc::new(Mutex::new(document)),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&Document) -> R) -> R {
        let doc = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&doc)
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut Document) -> R) -> R {
        let mut doc = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut doc)
    }
}

/// Host services injected into every controller at `run()` time.
#[derive(Debug, Clone, Default)]
pub struct Host {
    pub dom: DomHandle,
    pub bus: EventBus,
}

impl Host {
    pub fn new(document: Document) -> Self {
        Self {
            dom: DomHandle::new(document),
            bus: EventBus::new(),
        }
    }

    /// Resolves `id` or reports which element is missing.
    pub fn require(&self, role: &str, id: &str) -> Result<NodeId, MissingElementError> {
        self.dom
            .read(|doc| doc.get_element_by_id(id))
            .ok_or_else(|| MissingElementError::new(role, id))
    }
}
