use crate::geometry::{Point, Rectangle, Size};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of interactive region a classifier pass looks for
///
/// Declaration order is the fixed pass order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementType {
    Button,
    TextField,
    Image,
    Link,
}

impl ElementType {
    pub const ALL: [ElementType; 4] = [
        ElementType::Button,
        ElementType::TextField,
        ElementType::Image,
        ElementType::Link,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Button => "button",
            ElementType::TextField => "textfield",
            ElementType::Image => "image",
            ElementType::Link => "link",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown element type: {0} (expected button, textfield, image or link)")]
pub struct UnknownElementType(pub String);

impl FromStr for ElementType {
    type Err = UnknownElementType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownElementType(s.to_string()))
    }
}

pub type Attributes = BTreeMap<String, String>;

/// One detected candidate region
#[derive(Debug, Clone, PartialEq)]
pub struct ElementInfo {
    pub element_type: ElementType,
    /// Origin of the sampling window that matched
    pub position: Point,
    pub size: Size,
    /// Fixed per pass; not a graded score
    pub confidence: f32,
    /// Debug identifier such as `button[120,80]`, not a document locator
    pub selector: String,
    /// Only ever supplied by callers
    pub text: String,
    pub attributes: Attributes,
}

impl ElementInfo {
    pub fn new(element_type: ElementType, position: Point, size: Size, confidence: f32) -> Self {
        Self {
            element_type,
            position,
            size,
            confidence,
            selector: selector_for(element_type, position),
            text: String::new(),
            attributes: Attributes::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn rectangle(&self) -> Rectangle {
        Rectangle::from_origin(self.position, self.size)
    }
}

pub fn selector_for(element_type: ElementType, position: Point) -> String {
    format!("{}[{},{}]", element_type, position.x, position.y)
}
