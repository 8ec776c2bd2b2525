use serde::{Deserialize, Serialize};

use crate::tree::NodeId;

/// Per-node rendering switch.
///
/// `Disabled` never removes a node from the tree; each variant decides how it
/// reacts when rendered (leaves and containers go silent, decorators become
/// transparent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Disabled,
    Enabled,
}

impl Status {
    pub fn is_enabled(self) -> bool {
        self == Status::Enabled
    }

    pub fn toggled(self) -> Self {
        match self {
            Status::Enabled => Status::Disabled,
            Status::Disabled => Status::Enabled,
        }
    }
}

impl From<u8> for Status {
    fn from(raw: u8) -> Self {
        // Anything non-zero counts as enabled, matching the serialized form.
        if raw == 0 {
            Status::Disabled
        } else {
            Status::Enabled
        }
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> u8 {
        match status {
            Status::Disabled => 0,
            Status::Enabled => 1,
        }
    }
}

/// The two registered decorator types.
///
/// The decorator mechanism itself is type-agnostic; this registry exists so a
/// chain can hold at most one decorator of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecoratorKind {
    StyledFont,
    BoxMargin,
}

/// Fixed decorator registry.
pub const DECORATORS: [DecoratorKind; 2] = [DecoratorKind::StyledFont, DecoratorKind::BoxMargin];

/// Payload of a `StyledFont` decorator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontStyle {
    pub font_size: String,
    pub font_family: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            font_size: "1em".to_string(),
            font_family: "Montserrat".to_string(),
            bold: false,
            italic: false,
            underline: false,
        }
    }
}

impl FontStyle {
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }
}

/// Payload of a `BoxMargin` decorator. Values are CSS lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub north: String,
    pub east: String,
    pub south: String,
    pub west: String,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            north: "0px".to_string(),
            east: "0px".to_string(),
            south: "0px".to_string(),
            west: "0px".to_string(),
        }
    }
}

impl Margins {
    pub fn new(
        north: impl Into<String>,
        east: impl Into<String>,
        south: impl Into<String>,
        west: impl Into<String>,
    ) -> Self {
        Self {
            north: north.into(),
            east: east.into(),
            south: south.into(),
            west: west.into(),
        }
    }
}

/// A decorator payload detached from any tree position. Passed to
/// `ContentTree::decorate`, which turns it into (or merges it onto) a
/// decorator node above the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decoration {
    StyledFont(FontStyle),
    BoxMargin(Margins),
}

impl Decoration {
    pub fn kind(&self) -> DecoratorKind {
        match self {
            Decoration::StyledFont(_) => DecoratorKind::StyledFont,
            Decoration::BoxMargin(_) => DecoratorKind::BoxMargin,
        }
    }
}

/// A node of the content tree: shared attributes plus the variant payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub status: Status,
    /// Free-form annotation shown by editors; defaults to the type name.
    pub label: String,
    /// Non-owning back-reference. Ownership flows strictly downward through
    /// `children`/`component` index lists.
    pub parent: Option<NodeId>,
}

/// Closed variant taxonomy of the content tree.
///
/// Leaves carry payload only; containers own an ordered child list;
/// decorators own exactly one component. Child/component fields hold arena
/// indices, never nested nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Plain text run.
    Text { value: String },

    /// Hyperlinked text run.
    Url { value: String, url: String },

    /// Horizontal rule.
    HLine,

    /// Newline-joined block container.
    Sequence { children: Vec<NodeId> },

    /// Concatenated inline container.
    TextLine { children: Vec<NodeId> },

    /// Heading line. `level` stays a string so editors can round-trip
    /// arbitrary input; renderers parse it and reject malformed values.
    Header { children: Vec<NodeId>, level: String },

    /// Comma-joined inline container.
    InlineList { children: Vec<NodeId> },

    /// `<ul>`-rendered container.
    UnorderedList { children: Vec<NodeId> },

    /// Row-chunked table container. `column_width` parses leniently with a
    /// fallback of 3.
    Tabular {
        children: Vec<NodeId>,
        column_width: String,
    },

    /// Inline font decorator.
    StyledFont { component: NodeId, style: FontStyle },

    /// Block margin decorator.
    BoxMargin { component: NodeId, margins: Margins },
}

impl NodeKind {
    pub fn sequence() -> Self {
        NodeKind::Sequence {
            children: Vec::new(),
        }
    }

    pub fn text_line() -> Self {
        NodeKind::TextLine {
            children: Vec::new(),
        }
    }

    pub fn inline_list() -> Self {
        NodeKind::InlineList {
            children: Vec::new(),
        }
    }

    pub fn unordered_list() -> Self {
        NodeKind::UnorderedList {
            children: Vec::new(),
        }
    }

    pub fn header(level: u32) -> Self {
        NodeKind::Header {
            children: Vec::new(),
            level: level.to_string(),
        }
    }

    pub fn tabular(column_width: u32) -> Self {
        NodeKind::Tabular {
            children: Vec::new(),
            column_width: column_width.to_string(),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        NodeKind::Text {
            value: value.into(),
        }
    }

    pub fn url(value: impl Into<String>, url: impl Into<String>) -> Self {
        NodeKind::Url {
            value: value.into(),
            url: url.into(),
        }
    }

    /// Wire type tag and default label.
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeKind::Text { .. } => "TextElement",
            NodeKind::Url { .. } => "URLElement",
            NodeKind::HLine => "HLine",
            NodeKind::Sequence { .. } => "Sequence",
            NodeKind::TextLine { .. } => "TextLine",
            NodeKind::Header { .. } => "Header",
            NodeKind::InlineList { .. } => "InlineList",
            NodeKind::UnorderedList { .. } => "UnorderedList",
            NodeKind::Tabular { .. } => "Tabular",
            NodeKind::StyledFont { .. } => "StyledFont",
            NodeKind::BoxMargin { .. } => "BoxMargin",
        }
    }

    pub fn children(&self) -> Option<&[NodeId]> {
        match self {
            NodeKind::Sequence { children }
            | NodeKind::TextLine { children }
            | NodeKind::Header { children, .. }
            | NodeKind::InlineList { children }
            | NodeKind::UnorderedList { children }
            | NodeKind::Tabular { children, .. } => Some(children),
            _ => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        match self {
            NodeKind::Sequence { children }
            | NodeKind::TextLine { children }
            | NodeKind::Header { children, .. }
            | NodeKind::InlineList { children }
            | NodeKind::UnorderedList { children }
            | NodeKind::Tabular { children, .. } => Some(children),
            _ => None,
        }
    }

    pub fn component(&self) -> Option<NodeId> {
        match self {
            NodeKind::StyledFont { component, .. } | NodeKind::BoxMargin { component, .. } => {
                Some(*component)
            }
            _ => None,
        }
    }

    pub(crate) fn component_mut(&mut self) -> Option<&mut NodeId> {
        match self {
            NodeKind::StyledFont { component, .. } | NodeKind::BoxMargin { component, .. } => {
                Some(component)
            }
            _ => None,
        }
    }

    pub fn is_container(&self) -> bool {
        self.children().is_some()
    }

    pub fn is_decorator(&self) -> bool {
        self.decorator_kind().is_some()
    }

    pub fn decorator_kind(&self) -> Option<DecoratorKind> {
        match self {
            NodeKind::StyledFont { .. } => Some(DecoratorKind::StyledFont),
            NodeKind::BoxMargin { .. } => Some(DecoratorKind::BoxMargin),
            _ => None,
        }
    }

    /// Decorator types this node's rendering understands. Advisory metadata
    /// for editors; `ContentTree::decorate` does not consult it.
    pub fn allowed_decorators(&self) -> &'static [DecoratorKind] {
        match self {
            NodeKind::Text { .. } | NodeKind::Url { .. } => &[DecoratorKind::StyledFont],
            kind if kind.is_container() => &DECORATORS,
            _ => &[],
        }
    }

    /// Child types editors offer for insertion. Advisory only; the tree does
    /// not enforce this.
    pub fn allowed_child_types(&self) -> &'static [&'static str] {
        match self {
            NodeKind::Sequence { .. } => {
                &["HLine", "Sequence", "Header", "TextLine", "UnorderedList"]
            }
            NodeKind::TextLine { .. } | NodeKind::Header { .. } => {
                &["TextElement", "URLElement", "InlineList"]
            }
            NodeKind::InlineList { .. } | NodeKind::Tabular { .. } => {
                &["TextElement", "URLElement"]
            }
            NodeKind::UnorderedList { .. } => &["Header", "TextLine", "InlineList"],
            _ => &[],
        }
    }
}
