//! Owned, fixed trees.
//!
//! A [`Dom`] tree is mutable and lives in its arena. The values in this
//! module are plain data that can be created and stored anywhere, compared
//! and (with the `serde` feature) serialized. Turn one into nodes by
//! calling `materialize` with a mutable [`Dom`].
//!
//! ```rust
//! use xdom::fixed;
//!
//! let element = fixed::Element {
//!     name: fixed::Name::local("foo"),
//!     declarations: vec![],
//!     attributes: vec![fixed::Attribute {
//!         name: fixed::Name::prefixed("x", "http://example.com/x", "a"),
//!         value: "1".to_string(),
//!     }],
//!     children: vec![fixed::Content::Text("Example".to_string())],
//! };
//!
//! let mut dom = xdom::Dom::new();
//! let node = element.materialize(&mut dom).unwrap();
//! assert_eq!(
//!     dom.to_xml(node).unwrap(),
//!     r#"<foo xmlns:x="http://example.com/x" x:a="1">Example</foo>"#
//! );
//! ```

use crate::domdata::{Dom, Node};
use crate::error::Error;
use crate::id::NameId;

/// A document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    /// The document type declaration.
    pub doc_type: Option<DocType>,
    /// Comments and processing instructions before the document element.
    pub before: Vec<DocumentContent>,
    /// The document element.
    pub document_element: Element,
    /// Comments and processing instructions after the document element.
    pub after: Vec<DocumentContent>,
}

/// An element or attribute name with the prefix it is written with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Name {
    /// Empty for no namespace.
    pub namespace: String,
    /// Empty for no prefix.
    pub prefix: String,
    /// The local name.
    pub local: String,
}

impl Name {
    /// A name without namespace.
    pub fn local(local: &str) -> Self {
        Name {
            namespace: String::new(),
            prefix: String::new(),
            local: local.to_string(),
        }
    }

    /// A name in a namespace, written with a prefix.
    pub fn prefixed(prefix: &str, namespace: &str, local: &str) -> Self {
        Name {
            namespace: namespace.to_string(),
            prefix: prefix.to_string(),
            local: local.to_string(),
        }
    }

    /// Intern the expanded name.
    pub fn materialize(&self, dom: &mut Dom) -> Result<NameId, Error> {
        let namespace = dom.add_namespace(&self.namespace)?;
        dom.add_name_ns(&self.local, namespace)
    }
}

/// A namespace declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Declaration {
    /// Empty for the default namespace.
    pub prefix: String,
    /// The namespace URI.
    pub namespace: String,
}

/// An attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    /// The name.
    pub name: Name,
    /// The value.
    pub value: String,
}

/// An element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    /// The name.
    pub name: Name,
    /// Explicit namespace declarations.
    pub declarations: Vec<Declaration>,
    /// Attributes, in order.
    pub attributes: Vec<Attribute>,
    /// Children, in order.
    pub children: Vec<Content>,
}

/// Element content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Content {
    /// Text.
    Text(String),
    /// A comment.
    Comment(String),
    /// A processing instruction.
    ProcessingInstruction(ProcessingInstruction),
    /// An element.
    Element(Element),
}

/// What may appear next to the document element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DocumentContent {
    /// A comment.
    Comment(String),
    /// A processing instruction.
    ProcessingInstruction(ProcessingInstruction),
}

/// A processing instruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessingInstruction {
    /// The target.
    pub target: String,
    /// The data, if any.
    pub data: Option<String>,
}

/// A document type declaration without internal subset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocType {
    /// The name of the root element.
    pub root_name: String,
    /// The public identifier.
    pub public_id: Option<String>,
    /// The system identifier.
    pub system_id: Option<String>,
}

impl Document {
    /// Create the document node and everything in it.
    pub fn materialize(&self, dom: &mut Dom) -> Result<Node, Error> {
        let element = self.document_element.materialize(dom)?;
        let document = dom.new_document_with_element(element)?;
        if let Some(doc_type) = &self.doc_type {
            let node = dom.new_doc_type(
                &doc_type.root_name,
                doc_type.public_id.as_deref(),
                doc_type.system_id.as_deref(),
            )?;
            dom.prepend(document, node)?;
        }
        for content in &self.before {
            let node = content.materialize(dom)?;
            dom.insert_before(element, node)?;
        }
        for content in &self.after {
            let node = content.materialize(dom)?;
            dom.append(document, node)?;
        }
        Ok(document)
    }
}

impl Element {
    /// Create an unattached element and its content.
    ///
    /// Fails if a prefix is used for two namespaces on this element, or if
    /// any content is invalid.
    pub fn materialize(&self, dom: &mut Dom) -> Result<Node, Error> {
        let name = self.name.materialize(dom)?;
        let prefix = dom.add_prefix(&self.name.prefix)?;
        let element = dom.new_element_prefixed(name, prefix)?;
        for declaration in &self.declarations {
            let prefix = dom.add_prefix(&declaration.prefix)?;
            let namespace = dom.add_namespace(&declaration.namespace)?;
            dom.declare_namespace(element, prefix, namespace)?;
        }
        for attribute in &self.attributes {
            let name = attribute.name.materialize(dom)?;
            let prefix = dom.add_prefix(&attribute.name.prefix)?;
            let node = dom.new_attribute_prefixed(name, prefix, &attribute.value)?;
            dom.add_attribute(element, node)?;
        }
        for child in &self.children {
            let node = child.materialize(dom)?;
            dom.append(element, node)?;
        }
        Ok(element)
    }
}

impl Content {
    /// Create an unattached node.
    pub fn materialize(&self, dom: &mut Dom) -> Result<Node, Error> {
        match self {
            Content::Text(text) => dom.new_text(text),
            Content::Comment(comment) => dom.new_comment(comment),
            Content::ProcessingInstruction(pi) => pi.materialize(dom),
            Content::Element(element) => element.materialize(dom),
        }
    }
}

impl DocumentContent {
    /// Create an unattached node.
    pub fn materialize(&self, dom: &mut Dom) -> Result<Node, Error> {
        match self {
            DocumentContent::Comment(comment) => dom.new_comment(comment),
            DocumentContent::ProcessingInstruction(pi) => pi.materialize(dom),
        }
    }
}

impl ProcessingInstruction {
    /// Create an unattached processing instruction.
    pub fn materialize(&self, dom: &mut Dom) -> Result<Node, Error> {
        dom.new_processing_instruction(&self.target, self.data.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_materialize_document() {
        let mut dom = Dom::new();
        let document = Document {
            doc_type: Some(DocType {
                root_name: "foo".to_string(),
                public_id: None,
                system_id: Some("foo.dtd".to_string()),
            }),
            before: vec![DocumentContent::Comment("before".to_string())],
            document_element: Element {
                name: Name::prefixed("x", "http://example.com/x", "foo"),
                declarations: vec![],
                attributes: vec![],
                children: vec![
                    Content::Text("a".to_string()),
                    Content::Text("b".to_string()),
                ],
            },
            after: vec![DocumentContent::ProcessingInstruction(ProcessingInstruction {
                target: "pi".to_string(),
                data: None,
            })],
        };
        let document = document.materialize(&mut dom).unwrap();
        assert_eq!(
            dom.to_xml(document).unwrap(),
            "<!DOCTYPE foo SYSTEM \"foo.dtd\">\n<!--before-->\n<x:foo xmlns:x=\"http://example.com/x\">ab</x:foo>\n<?pi?>"
        );
    }

    #[test]
    fn test_materialize_conflicting_prefix() {
        let mut dom = Dom::new();
        let element = Element {
            name: Name::prefixed("x", "http://example.com/x", "foo"),
            declarations: vec![],
            attributes: vec![Attribute {
                name: Name::prefixed("x", "http://example.com/y", "a"),
                value: "1".to_string(),
            }],
            children: vec![],
        };
        assert!(matches!(
            element.materialize(&mut dom),
            Err(Error::NamespaceConflict { .. })
        ));
    }

    #[test]
    fn test_invalid_comment() {
        let mut dom = Dom::new();
        let content = Content::Comment("a--b".to_string());
        assert!(matches!(
            content.materialize(&mut dom),
            Err(Error::InvalidComment(_))
        ));
    }

    #[test]
    fn test_invalid_text_and_name() {
        let mut dom = Dom::new();
        let content = Content::Text("a\u{1}".to_string());
        assert!(matches!(
            content.materialize(&mut dom),
            Err(Error::InvalidCharacter('\u{1}'))
        ));
        let element = Element {
            name: Name::local("a b<"),
            declarations: vec![],
            attributes: vec![],
            children: vec![],
        };
        assert!(matches!(
            element.materialize(&mut dom),
            Err(Error::InvalidName(_))
        ));
    }
}
