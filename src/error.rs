use std::fmt::{Display, Formatter};

use thiserror::Error as ThisError;

use crate::domdata::Node;

/// A location in the parsed text, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Line number, starting at 1.
    pub line: u32,
    /// Column number in characters, starting at 1.
    pub column: u32,
}

impl Position {
    /// Create a position from line and column.
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Compute the position of a byte offset in `text`.
    pub fn from_offset(text: &str, offset: usize) -> Self {
        let offset = offset.min(text.len());
        let before = &text[..floor_char_boundary(text, offset)];
        let line = before.matches('\n').count() as u32 + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[line_start..].chars().count() as u32 + 1;
        Position { line, column }
    }
}

fn floor_char_boundary(text: &str, mut offset: usize) -> usize {
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl From<xmlparser::TextPos> for Position {
    fn from(pos: xmlparser::TextPos) -> Self {
        Position {
            line: pos.row,
            column: pos.col,
        }
    }
}

/// Malformed input.
///
/// Produced by the tokenizer for text input, or by the builder when an event
/// stream does not describe a well-formed document. Positions are available
/// for text input only.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ParseError {
    /// Syntax error reported by the underlying tokenizer.
    #[error("{message} at {position}")]
    Syntax {
        /// Description from the tokenizer.
        message: String,
        /// Where it happened.
        position: Position,
    },
    /// The end tag does not match the open element.
    #[error("expected end tag </{expected}>, found </{found}> at {position}")]
    InvalidCloseTag {
        /// Name of the open element.
        expected: String,
        /// Name in the end tag.
        found: String,
        /// Where it happened.
        position: Position,
    },
    /// An element was never closed.
    #[error("unclosed element <{name}> at {position}")]
    UnclosedTag {
        /// Name of the open element.
        name: String,
        /// Position of its start tag.
        position: Position,
    },
    /// A prefix is used that was never declared.
    #[error("unknown namespace prefix {prefix:?} at {position}")]
    UnknownPrefix {
        /// The prefix.
        prefix: String,
        /// Where it was used.
        position: Position,
    },
    /// The same expanded attribute name occurs twice on an element.
    #[error("duplicate attribute {name:?} at {position}")]
    DuplicateAttribute {
        /// The attribute as written.
        name: String,
        /// Position of the second occurrence.
        position: Position,
    },
    /// An entity reference without closing `;`.
    #[error("unclosed entity reference &{entity} at {position}")]
    UnclosedEntity {
        /// What was read of the reference.
        entity: String,
        /// Where it happened.
        position: Position,
    },
    /// An entity that is not predefined or declared, or a bad character reference.
    #[error("invalid entity reference &{entity}; at {position}")]
    InvalidEntity {
        /// The reference name.
        entity: String,
        /// Where it happened.
        position: Position,
    },
    /// Entity expansion exceeded the configured depth or size.
    #[error("entity expansion limit exceeded by &{entity}; at {position}")]
    EntityExpansionLimit {
        /// The entity being expanded.
        entity: String,
        /// Where it happened.
        position: Position,
    },
    /// Only XML 1.0 is supported.
    #[error("unsupported XML version {version:?} at {position}")]
    UnsupportedVersion {
        /// The declared version.
        version: String,
        /// Where it was declared.
        position: Position,
    },
    /// Input ended before the document element was complete.
    #[error("unexpected end of input{}", fmt_position(.position))]
    UnexpectedEnd {
        /// End of the text, if the input was text.
        position: Option<Position>,
    },
    /// The document has no element.
    #[error("no element at top level{}", fmt_position(.position))]
    NoElementAtTopLevel {
        /// End of the text, if the input was text.
        position: Option<Position>,
    },
    /// A second top-level element.
    #[error("more than one element at top level{}", fmt_position(.position))]
    MultipleElementsAtTopLevel {
        /// Position of the extra element, if the input was text.
        position: Option<Position>,
    },
    /// Non-whitespace text outside the document element.
    #[error("text outside the document element{}", fmt_position(.position))]
    TextAtTopLevel {
        /// Where it happened, if the input was text.
        position: Option<Position>,
    },
    /// An event that is not allowed in the builder's current state.
    #[error("unexpected {event} event in state {state}")]
    UnexpectedEvent {
        /// The event kind.
        event: &'static str,
        /// The builder state it arrived in.
        state: &'static str,
    },
    /// The bytes cannot be decoded in the given charset.
    #[error("input is not valid {encoding}")]
    Decoding {
        /// Name of the charset.
        encoding: String,
    },
}

fn fmt_position(position: &Option<Position>) -> String {
    match position {
        Some(position) => format!(" at {}", position),
        None => String::new(),
    }
}

impl ParseError {
    /// The position of the error in the input text, if known.
    pub fn position(&self) -> Option<Position> {
        use ParseError::*;
        match self {
            Syntax { position, .. }
            | InvalidCloseTag { position, .. }
            | UnclosedTag { position, .. }
            | UnknownPrefix { position, .. }
            | DuplicateAttribute { position, .. }
            | UnclosedEntity { position, .. }
            | InvalidEntity { position, .. }
            | EntityExpansionLimit { position, .. }
            | UnsupportedVersion { position, .. } => Some(*position),
            UnexpectedEnd { position }
            | NoElementAtTopLevel { position }
            | MultipleElementsAtTopLevel { position }
            | TextAtTopLevel { position } => *position,
            UnexpectedEvent { .. } | Decoding { .. } => None,
        }
    }
}

impl From<xmlparser::Error> for ParseError {
    fn from(e: xmlparser::Error) -> Self {
        ParseError::Syntax {
            message: strip_position(&e.to_string()),
            position: e.pos().into(),
        }
    }
}

// xmlparser appends " at row:col" to its messages; we carry the position
// separately.
fn strip_position(message: &str) -> String {
    match message.rfind(" at ") {
        Some(index) => message[..index].to_string(),
        None => message.to_string(),
    }
}

/// Xdom errors
#[derive(Debug, ThisError)]
pub enum Error {
    /// Malformed input.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    /// The charset name is not known. Raised before anything is written.
    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),
    /// A character that cannot be escaped is not available in the charset.
    #[error("character {character:?} cannot be represented in {encoding}")]
    UnrepresentableCharacter {
        /// The character.
        character: char,
        /// The charset.
        encoding: String,
    },
    /// The operation would produce an invalid tree.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    /// The node is not an element.
    #[error("node is not an element: {0:?}")]
    NotElement(Node),
    /// The node is not a document.
    #[error("node is not a document: {0:?}")]
    NotDocument(Node),
    /// The attribute node already belongs to an element.
    #[error("attribute is owned by another element: {0:?}")]
    AttributeInUse(Node),
    /// A prefix is bound to two different namespaces on one element.
    #[error("prefix {prefix:?} is already bound to {existing:?}, cannot bind to {new:?}")]
    NamespaceConflict {
        /// The prefix.
        prefix: String,
        /// The namespace it is bound to.
        existing: String,
        /// The conflicting namespace.
        new: String,
    },
    /// No prefix is in scope for a namespace that needs one.
    #[error("no prefix in scope for namespace {0:?}")]
    MissingPrefix(String),
    /// Comments cannot contain `--` or end with `-`.
    #[error("invalid comment: {0:?}")]
    InvalidComment(String),
    /// A name, prefix or doctype name that XML does not allow.
    #[error("invalid XML name: {0:?}")]
    InvalidName(String),
    /// Character data holds a character XML does not allow.
    #[error("character {0:?} is not allowed in XML")]
    InvalidCharacter(char),
    /// Processing instruction target is reserved or empty.
    #[error("invalid processing instruction target: {0:?}")]
    InvalidTarget(String),
    /// The arena refused a link, for instance one that would create a cycle.
    #[error("tree structure error: {0}")]
    Tree(#[from] indextree::NodeError),
    /// IO error during serialization.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The parse error, if this is one.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(e) => Some(e),
            _ => None,
        }
    }
}
