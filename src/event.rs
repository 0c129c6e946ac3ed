use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

use crate::config::ParseOptions;
use crate::error::ParseError;
use crate::tokenizer::Tokenizer;
use crate::xmlvalue::AttributeType;

/// A name as written: an optional prefix and a local name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QName {
    /// The prefix; empty if the name is unprefixed.
    pub prefix: String,
    /// The local name.
    pub local: String,
}

impl QName {
    /// An unprefixed name.
    pub fn local<S: Into<String>>(local: S) -> Self {
        QName {
            prefix: String::new(),
            local: local.into(),
        }
    }

    /// A prefixed name.
    pub fn prefixed<P: Into<String>, S: Into<String>>(prefix: P, local: S) -> Self {
        QName {
            prefix: prefix.into(),
            local: local.into(),
        }
    }
}

impl std::fmt::Display for QName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.prefix.is_empty() {
            write!(f, "{}", self.local)
        } else {
            write!(f, "{}:{}", self.prefix, self.local)
        }
    }
}

/// An attribute of a start-element event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventAttribute {
    /// The attribute name as written.
    pub name: QName,
    /// The namespace URI; empty for no namespace.
    pub namespace: String,
    /// The normalized value, with references expanded.
    pub value: String,
    /// The type declared in the DTD.
    pub attribute_type: AttributeType,
}

/// A structural parse event.
///
/// Events are owned values, so they can be produced on one thread and
/// consumed by [`Dom::build`](crate::Dom::build) on another.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// The document starts.
    StartDocument,
    /// A document type declaration.
    DocType {
        /// The declared root element name.
        name: String,
        /// The public identifier.
        public_id: Option<String>,
        /// The system identifier.
        system_id: Option<String>,
        /// The internal subset, without brackets.
        internal_subset: Option<String>,
    },
    /// An element starts.
    StartElement {
        /// The element name as written.
        name: QName,
        /// The namespace URI; empty for no namespace.
        namespace: String,
        /// Namespace declarations made on this element as `(prefix, uri)`,
        /// the empty prefix being the default namespace.
        declarations: Vec<(String, String)>,
        /// The attributes, without namespace declarations.
        attributes: Vec<EventAttribute>,
    },
    /// Character data.
    Characters {
        /// The text, with references expanded.
        text: String,
        /// True if this is whitespace in element-only content, known to be
        /// insignificant from the DTD.
        whitespace: bool,
    },
    /// A comment.
    Comment(String),
    /// A processing instruction.
    ProcessingInstruction {
        /// The target.
        target: String,
        /// The data, if any.
        data: Option<String>,
    },
    /// The current element ends.
    EndElement,
    /// The document ends.
    EndDocument,
}

impl Event {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Event::StartDocument => "start-document",
            Event::DocType { .. } => "doctype",
            Event::StartElement { .. } => "start-element",
            Event::Characters { .. } => "characters",
            Event::Comment(_) => "comment",
            Event::ProcessingInstruction { .. } => "processing-instruction",
            Event::EndElement => "end-element",
            Event::EndDocument => "end-document",
        }
    }
}

/// The sending half of an event channel.
pub type EventSender = SyncSender<Result<Event, ParseError>>;
/// The receiving half of an event channel. It can be passed to
/// [`Dom::build`](crate::Dom::build) directly.
pub type EventReceiver = Receiver<Result<Event, ParseError>>;

/// A bounded channel for parse events.
///
/// The producer blocks when `bound` events are waiting; the builder blocks
/// while the channel is empty. Dropping the sender ends the stream.
pub fn event_channel(bound: usize) -> (EventSender, EventReceiver) {
    sync_channel(bound)
}

/// Tokenize `xml` on a new thread, sending the events through a bounded
/// channel.
///
/// The thread stops after the first error, or when the receiver is dropped.
///
/// ```rust
/// let (receiver, handle) = xdom::spawn_tokenizer("<a>text</a>".to_string(), 16);
/// let mut dom = xdom::Dom::new();
/// let document = dom.build(receiver, &mut xdom::IdentityFactory).unwrap();
/// handle.join().unwrap();
/// assert_eq!(dom.to_xml(document).unwrap(), "<a>text</a>");
/// ```
pub fn spawn_tokenizer(xml: String, bound: usize) -> (EventReceiver, JoinHandle<()>) {
    spawn_tokenizer_with_options(xml, ParseOptions::default(), bound)
}

/// Like [`spawn_tokenizer`], with options.
pub fn spawn_tokenizer_with_options(
    xml: String,
    options: ParseOptions,
    bound: usize,
) -> (EventReceiver, JoinHandle<()>) {
    let (sender, receiver) = event_channel(bound);
    let handle = thread::spawn(move || {
        for event in Tokenizer::with_options(&xml, &options) {
            let is_error = event.is_err();
            if sender.send(event).is_err() || is_error {
                break;
            }
        }
    });
    (receiver, handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_carries_events() {
        let (sender, receiver) = event_channel(2);
        let producer = thread::spawn(move || {
            sender.send(Ok(Event::StartDocument)).unwrap();
            sender.send(Ok(Event::EndDocument)).unwrap();
        });
        let events = receiver.into_iter().collect::<Result<Vec<_>, _>>().unwrap();
        producer.join().unwrap();
        assert_eq!(events, vec![Event::StartDocument, Event::EndDocument]);
    }

    #[test]
    fn test_spawned_tokenizer_stops_at_error() {
        let (receiver, handle) = spawn_tokenizer("<a><b></a>".to_string(), 1);
        let events = receiver.into_iter().collect::<Vec<_>>();
        handle.join().unwrap();
        assert!(events.last().unwrap().is_err());
        assert_eq!(events.iter().filter(|e| e.is_err()).count(), 1);
    }

    #[test]
    fn test_qname_display() {
        assert_eq!(QName::prefixed("p", "a").to_string(), "p:a");
        assert_eq!(QName::local("a").to_string(), "a");
    }
}
