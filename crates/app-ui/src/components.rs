//! UI component model for CareConnect
//!
//! A headless, serializable element tree. Screens build [`Element`]
//! values; a platform renderer walks the tree and draws it. Interactive
//! components carry event handler identifiers rather than callbacks so
//! the whole tree stays serializable and diffable.
//!
//! The element vocabulary is closed: every visual the five screens need
//! is one of the variants here, and there is no escape hatch for
//! platform-specific nodes.

use crate::theme::Color;
use crate::typography::TypeRole;
use serde::{Deserialize, Serialize};

// =============================================================================
// Core Types
// =============================================================================

/// Event handler identifier.
///
/// Handlers are referenced by id; the shell maps ids to actions at
/// dispatch time. Ids not registered with the shell are inert by
/// definition.
pub type EventHandler = String;

/// Text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Leading edge
    #[default]
    Start,
    /// Centered
    Center,
    /// Trailing edge
    End,
}

/// Layout direction for containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Children stack vertically
    #[default]
    Column,
    /// Children flow horizontally
    Row,
}

// =============================================================================
// Leaf Components
// =============================================================================

/// A run of styled text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// The text content
    pub content: String,
    /// Typography role
    pub role: TypeRole,
    /// Text color (theme on-color for the enclosing surface)
    pub color: Color,
    /// Alignment within the parent
    #[serde(default)]
    pub align: TextAlign,
}

impl Text {
    /// Create text with the default body role
    pub fn new(content: impl Into<String>, color: impl Into<Color>) -> Self {
        Self {
            content: content.into(),
            role: TypeRole::default(),
            color: color.into(),
            align: TextAlign::default(),
        }
    }

    /// Set the typography role
    pub fn with_role(mut self, role: TypeRole) -> Self {
        self.role = role;
        self
    }

    /// Set the alignment
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// A named icon glyph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    /// Glyph name (e.g., "home", "send")
    pub name: String,
    /// Edge size in dp
    pub size: f32,
    /// Tint color
    pub color: Color,
}

impl Icon {
    /// Create an icon at the default medium size
    pub fn new(name: impl Into<String>, color: impl Into<Color>) -> Self {
        Self {
            name: name.into(),
            size: crate::tokens::sizing::icon::MD,
            color: color.into(),
        }
    }

    /// Set the edge size
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

/// A pressable button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    /// Button label
    pub label: String,
    /// Optional leading icon name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Handler id invoked on press; `None` renders an inert button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
    /// Container color
    pub container_color: Color,
    /// Label/icon color
    pub content_color: Color,
    /// Whether the button shows as selected (rail destinations)
    #[serde(default)]
    pub selected: bool,
}

impl Button {
    /// Create a button
    pub fn new(
        label: impl Into<String>,
        container_color: impl Into<Color>,
        content_color: impl Into<Color>,
    ) -> Self {
        Self {
            label: label.into(),
            icon: None,
            on_press: None,
            container_color: container_color.into(),
            content_color: content_color.into(),
            selected: false,
        }
    }

    /// Attach a press handler id
    pub fn with_handler(mut self, handler: impl Into<EventHandler>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Attach a leading icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Mark as the selected destination
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// A single-line text input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    /// Placeholder shown when empty
    pub placeholder: String,
    /// Current value
    #[serde(default)]
    pub value: String,
    /// Handler id invoked on submit; `None` renders inert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_submit: Option<EventHandler>,
}

impl Input {
    /// Create an empty input
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            value: String::new(),
            on_submit: None,
        }
    }

    /// Set the current value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

// =============================================================================
// Composite Components
// =============================================================================

/// A summary card with a title and supporting line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Card title
    pub title: String,
    /// Supporting line under the title
    pub subtitle: String,
    /// Container color
    pub container_color: Color,
    /// Content color
    pub content_color: Color,
    /// Corner radius in dp
    pub corner_radius: f32,
}

/// A chat message bubble
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatBubble {
    /// Message text
    pub text: String,
    /// True when sent by the local user (trailing-aligned)
    pub from_self: bool,
    /// Bubble color
    pub container_color: Color,
    /// Text color
    pub content_color: Color,
}

/// One day cell in the month grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarCell {
    /// Day of month
    pub day: u8,
    /// Whether this cell is today (highlighted)
    pub is_today: bool,
    /// Cell background
    pub container_color: Color,
    /// Day-number color
    pub content_color: Color,
}

/// A dated journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Entry date label
    pub date: String,
    /// Entry note text
    pub note: String,
    /// Container color
    pub container_color: Color,
    /// Content color
    pub content_color: Color,
}

/// A profile header row with avatar and name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileItem {
    /// Display name
    pub name: String,
    /// Avatar icon name
    pub icon: String,
    /// Avatar edge size in dp
    pub icon_size: f32,
}

/// Layout properties shared by containers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ContainerProps {
    /// Stacking direction
    #[serde(default)]
    pub direction: Direction,
    /// Gap between children in dp
    #[serde(default)]
    pub gap: f32,
    /// Inner padding in dp
    #[serde(default)]
    pub padding: f32,
    /// Background color, if painted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
}

impl ContainerProps {
    /// A vertical column
    pub fn column() -> Self {
        Self::default()
    }

    /// A horizontal row
    pub fn row() -> Self {
        Self {
            direction: Direction::Row,
            ..Self::default()
        }
    }

    /// Set the child gap
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Set the inner padding
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Paint a background
    pub fn with_background(mut self, color: impl Into<Color>) -> Self {
        self.background = Some(color.into());
        self
    }
}

// =============================================================================
// Element Tree
// =============================================================================

/// One node in the renderable tree.
///
/// Internally tagged so serialized frames carry a `type` discriminator a
/// platform renderer can switch on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Element {
    /// Layout container with children
    Container {
        /// Layout properties
        props: ContainerProps,
        /// Child nodes in paint order
        children: Vec<Element>,
    },
    /// Styled text run
    Text(Text),
    /// Icon glyph
    Icon(Icon),
    /// Pressable button
    Button(Button),
    /// Text input
    Input(Input),
    /// Summary card
    Card(Card),
    /// Chat bubble
    ChatBubble(ChatBubble),
    /// Month-grid day cell
    CalendarCell(CalendarCell),
    /// Journal entry row
    TimelineEntry(TimelineEntry),
    /// Profile header row
    ProfileItem(ProfileItem),
}

impl Element {
    /// A column container
    pub fn column(props: ContainerProps, children: Vec<Element>) -> Self {
        Element::Container {
            props: ContainerProps {
                direction: Direction::Column,
                ..props
            },
            children,
        }
    }

    /// A row container
    pub fn row(props: ContainerProps, children: Vec<Element>) -> Self {
        Element::Container {
            props: ContainerProps {
                direction: Direction::Row,
                ..props
            },
            children,
        }
    }

    /// Depth-first iterator over this node and all descendants
    pub fn walk(&self) -> ElementWalk<'_> {
        ElementWalk { stack: vec![self] }
    }

    /// All text nodes, in paint order
    pub fn texts(&self) -> Vec<&Text> {
        self.walk()
            .filter_map(|e| match e {
                Element::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    /// All button nodes, in paint order
    pub fn buttons(&self) -> Vec<&Button> {
        self.walk()
            .filter_map(|e| match e {
                Element::Button(b) => Some(b),
                _ => None,
            })
            .collect()
    }

    /// All card nodes, in paint order
    pub fn cards(&self) -> Vec<&Card> {
        self.walk()
            .filter_map(|e| match e {
                Element::Card(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    /// All chat bubbles, in paint order
    pub fn bubbles(&self) -> Vec<&ChatBubble> {
        self.walk()
            .filter_map(|e| match e {
                Element::ChatBubble(b) => Some(b),
                _ => None,
            })
            .collect()
    }

    /// All calendar cells, in paint order
    pub fn calendar_cells(&self) -> Vec<&CalendarCell> {
        self.walk()
            .filter_map(|e| match e {
                Element::CalendarCell(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    /// All journal entries, in paint order
    pub fn timeline_entries(&self) -> Vec<&TimelineEntry> {
        self.walk()
            .filter_map(|e| match e {
                Element::TimelineEntry(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    /// All profile rows, in paint order
    pub fn profile_items(&self) -> Vec<&ProfileItem> {
        self.walk()
            .filter_map(|e| match e {
                Element::ProfileItem(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    /// All inputs, in paint order
    pub fn inputs(&self) -> Vec<&Input> {
        self.walk()
            .filter_map(|e| match e {
                Element::Input(i) => Some(i),
                _ => None,
            })
            .collect()
    }

    /// Every handler id attached anywhere in the tree
    pub fn handlers(&self) -> Vec<&EventHandler> {
        self.walk()
            .filter_map(|e| match e {
                Element::Button(b) => b.on_press.as_ref(),
                Element::Input(i) => i.on_submit.as_ref(),
                _ => None,
            })
            .collect()
    }

    /// Whether any text node contains the given substring
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.content.contains(needle))
    }
}

/// Depth-first element iterator, see [`Element::walk`]
pub struct ElementWalk<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for ElementWalk<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Element::Container { children, .. } = node {
            // Push reversed so children pop in paint order.
            for child in children.iter().rev() {
                self.stack.push(child);
            }
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Element {
        Element::column(
            ContainerProps::column().with_gap(8.0),
            vec![
                Element::Text(Text::new("first", "#000000")),
                Element::row(
                    ContainerProps::row(),
                    vec![
                        Element::Text(Text::new("second", "#000000")),
                        Element::Button(
                            Button::new("Go", "#D4EADC", "#1A371F").with_handler("nav.home"),
                        ),
                    ],
                ),
                Element::Button(Button::new("Inert", "#DAE4E4", "#101F1F")),
            ],
        )
    }

    #[test]
    fn test_text_builder() {
        let text = Text::new("hello", "#1A1C1D")
            .with_role(TypeRole::TitleLarge)
            .with_align(TextAlign::Center);
        assert_eq!(text.content, "hello");
        assert_eq!(text.role, TypeRole::TitleLarge);
        assert_eq!(text.align, TextAlign::Center);
    }

    #[test]
    fn test_button_builder() {
        let button = Button::new("Send", "#6BAA75", "#FFFFFF")
            .with_icon("send")
            .with_handler("messages.send");
        assert_eq!(button.icon.as_deref(), Some("send"));
        assert_eq!(button.on_press.as_deref(), Some("messages.send"));
        assert!(!button.selected);
    }

    #[test]
    fn test_inert_button_has_no_handler() {
        let button = Button::new("Back", "#D4EADC", "#1A371F");
        assert!(button.on_press.is_none());
    }

    #[test]
    fn test_walk_paint_order() {
        let tree = sample_tree();
        let contents: Vec<_> = tree.texts().iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second"]);
    }

    #[test]
    fn test_walk_includes_root() {
        let tree = sample_tree();
        assert_eq!(tree.walk().count(), 6);
    }

    #[test]
    fn test_handler_collection() {
        let tree = sample_tree();
        let handlers: Vec<_> = tree.handlers().iter().map(|h| h.as_str()).collect();
        assert_eq!(handlers, vec!["nav.home"]);
    }

    #[test]
    fn test_contains_text() {
        let tree = sample_tree();
        assert!(tree.contains_text("second"));
        assert!(!tree.contains_text("missing"));
    }

    #[test]
    fn test_element_serialization_tagged() {
        let tree = sample_tree();
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["type"], "container");
        assert_eq!(json["children"][0]["type"], "text");

        let parsed: Element = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, tree);
    }

    #[test]
    fn test_container_props_builders() {
        let props = ContainerProps::row()
            .with_gap(12.0)
            .with_padding(16.0)
            .with_background("#F7F8F8");
        assert_eq!(props.direction, Direction::Row);
        assert_eq!(props.gap, 12.0);
        assert_eq!(props.padding, 16.0);
        assert_eq!(props.background.as_deref(), Some("#F7F8F8"));
    }
}
