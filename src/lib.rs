#![forbid(unsafe_code)]

//! An XML document object model.
//!
//! All nodes live in a [`Dom`], and are referred to with the lightweight
//! [`Node`] handle. A `Dom` parses text or bytes into documents, lets you
//! create, navigate and change trees, and serializes them back to text in
//! any charset it knows.
//!
//! Documents are built from a stream of [`Event`]s. A [`NodeFactory`]
//! decides what each event turns into, so a factory that drops the
//! subtrees it has finished with can process documents much larger than
//! memory:
//!
//! ```rust
//! use xdom::{Dom, Error, Node, NodeFactory, Nodes};
//!
//! struct Count(usize);
//!
//! impl NodeFactory for Count {
//!     fn finish_making_element(&mut self, dom: &mut Dom, element: Node) -> Result<Nodes, Error> {
//!         let name = dom.element(element).unwrap().name();
//!         if dom.local_name_str(name) == "item" {
//!             self.0 += 1;
//!             return Ok(Nodes::new());
//!         }
//!         Ok(Nodes::one(element))
//!     }
//! }
//!
//! let (events, producer) = xdom::spawn_tokenizer("<list><item/><item/></list>".to_string(), 64);
//! let mut dom = Dom::new();
//! let mut count = Count(0);
//! let document = dom.build(events, &mut count).unwrap();
//! producer.join().unwrap();
//! assert_eq!(count.0, 2);
//! assert_eq!(dom.to_xml(document).unwrap(), "<list/>");
//! ```
//!
//! Serializing to a legacy charset escapes what the charset cannot hold:
//!
//! ```rust
//! use xdom::output::Parameters;
//!
//! let mut dom = xdom::Dom::new();
//! let document = dom.parse("<a>\u{85}\u{3b1}</a>").unwrap();
//! let parameters = Parameters {
//!     encoding: "IBM037".to_string(),
//!     declaration: false,
//! };
//! let bytes = dom.serialize_to_vec(document, &parameters).unwrap();
//! let parsed = dom.parse_bytes_with_encoding(&bytes, "IBM037").unwrap();
//! assert!(dom.deep_equal(document, parsed));
//! ```

mod access;
mod attributes;
mod builder;
mod chain;
mod compare;
mod config;
mod copy;
mod creation;
mod domdata;
mod dtd;
mod encoding;
mod entity;
mod error;
mod event;
mod factory;
pub mod fixed;
mod id;
mod manipulation;
mod nameaccess;
mod namespace;
mod nodes;
pub mod output;
mod parse;
#[cfg(feature = "proptest")]
pub mod proptest;
mod serialize;
mod tokenizer;
mod valueaccess;
mod xmlchar;
mod xmlvalue;

pub use access::NodeEdge;
pub use builder::BuildStats;
pub use chain::{Cause, CauseError, Chained};
pub use config::ParseOptions;
pub use domdata::{Dom, Node};
pub use encoding::Charset;
pub use error::{Error, ParseError, Position};
pub use event::{
    event_channel, spawn_tokenizer, spawn_tokenizer_with_options, Event, EventAttribute,
    EventReceiver, EventSender, QName,
};
pub use factory::{IdentityFactory, NodeFactory};
pub use id::{NameId, NamespaceId, PrefixId};
pub use nodes::Nodes;
pub use xmlvalue::{
    Attribute, AttributeType, Comment, DocType, Element, Namespace, Prefixes,
    ProcessingInstruction, Text, Value, ValueType,
};
