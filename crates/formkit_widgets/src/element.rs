//! Rendered element tree
//!
//! Widgets render into `Element`s; the host maps them onto native views.
//! Elements may carry a `key` so hosts and tests can address them.

use formkit_core::Style;
use serde::Serialize;

use crate::labeled_input::{KeyboardType, ReturnKeyType};

/// Snapshot of a native text field's configuration
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextFieldSpec {
    /// Raw id of the widget that owns the field
    pub widget: u64,
    pub placeholder: String,
    #[serde(skip)]
    pub value: String,
    /// Value as shown on screen (masked for secure entry)
    pub display_value: String,
    pub secure_text_entry: bool,
    pub keyboard_type: KeyboardType,
    pub return_key_type: ReturnKeyType,
    pub auto_correct: bool,
    pub focused: bool,
}

impl TextFieldSpec {
    pub(crate) fn mask(value: &str, secure: bool) -> String {
        if secure {
            "\u{2022}".repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }
}

/// What an element displays
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementKind {
    Container,
    Text { content: String },
    TextField(TextFieldSpec),
    Image { source: String },
    Button {
        widget: u64,
        label: String,
        disabled: bool,
    },
}

/// A node of the rendered tree
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Element {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(flatten)]
    pub kind: ElementKind,
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            key: None,
            kind,
            style: Style::default(),
            children: Vec::new(),
        }
    }

    /// Set the lookup key
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the style
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Append a child
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Depth-first search by key
    pub fn find(&self, key: &str) -> Option<&Element> {
        if self.key.as_deref() == Some(key) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(key))
    }

    /// Text shown by this element, if it shows any
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Text { content } => Some(content),
            ElementKind::TextField(spec) => Some(&spec.display_value),
            ElementKind::Button { label, .. } => Some(label),
            _ => None,
        }
    }

    pub fn as_text_field(&self) -> Option<&TextFieldSpec> {
        match &self.kind {
            ElementKind::TextField(spec) => Some(spec),
            _ => None,
        }
    }

    /// Number of elements in this subtree, including `self`
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Element::count).sum::<usize>()
    }
}

/// Create an empty container
pub fn container() -> Element {
    Element::new(ElementKind::Container)
}

/// Create a text element
pub fn text(content: impl Into<String>) -> Element {
    Element::new(ElementKind::Text {
        content: content.into(),
    })
}

/// Create an image element
pub fn image(source: impl Into<String>) -> Element {
    Element::new(ElementKind::Image {
        source: source.into(),
    })
}
