use crate::domdata::{Dom, Node};
use crate::error::Error;
use crate::id::{NameId, PrefixId};
use crate::nodes::Nodes;
use crate::xmlchar::check_chars;
use crate::xmlvalue::{Attribute, AttributeType, DocType, Element, Value};

/// Intercepts node construction while a tree is built from parse events.
///
/// Every method has a default that builds the node unchanged, so an
/// implementation only overrides what it needs. The `make_*` methods
/// receive the parsed data rather than a node: a factory that vetoes a
/// node by returning no nodes never allocates it.
///
/// What a method returns is attached where the parsed node would have gone.
/// Returning several nodes inserts them as siblings. Nodes the builder
/// created but that are not returned are removed from the [`Dom`].
///
/// A factory that keeps a running total and discards the subtrees it has
/// seen:
///
/// ```rust
/// use xdom::{Dom, Node, NodeFactory, Nodes, Error};
///
/// #[derive(Default)]
/// struct Sum(i64);
///
/// impl NodeFactory for Sum {
///     fn finish_making_element(&mut self, dom: &mut Dom, element: Node) -> Result<Nodes, Error> {
///         if dom.local_name_str(dom.element(element).unwrap().name()) == "n" {
///             self.0 += dom.string_value(element).parse::<i64>().unwrap_or(0);
///             return Ok(Nodes::new());
///         }
///         Ok(Nodes::one(element))
///     }
/// }
///
/// let mut dom = Dom::new();
/// let mut sum = Sum::default();
/// let document = dom
///     .parse_with_factory("<ns><n>1</n><n>2</n><n>3</n></ns>", &mut sum)
///     .unwrap();
/// assert_eq!(sum.0, 6);
/// assert_eq!(dom.to_xml(document).unwrap(), "<ns/>");
/// ```
pub trait NodeFactory {
    /// Called once, before any other method.
    fn start_making_document(&mut self, _dom: &mut Dom) -> Result<(), Error> {
        Ok(())
    }

    /// Called once, with the complete document, after the last event.
    fn finish_making_document(&mut self, _dom: &mut Dom, _document: Node) -> Result<(), Error> {
        Ok(())
    }

    /// Create the element for a start tag.
    ///
    /// Returning `None` skips the element itself: its namespace
    /// declarations and attributes are dropped and its children go to the
    /// nearest kept ancestor.
    fn start_making_element(
        &mut self,
        dom: &mut Dom,
        name: NameId,
        prefix: PrefixId,
    ) -> Result<Option<Node>, Error> {
        Ok(Some(
            dom.new_node(Value::Element(Element::new(name, prefix))),
        ))
    }

    /// Called after the element and all its content are built.
    fn finish_making_element(&mut self, _dom: &mut Dom, element: Node) -> Result<Nodes, Error> {
        Ok(Nodes::one(element))
    }

    /// Create an attribute of the element being built.
    ///
    /// Returned attribute nodes are added to the element; anything else
    /// becomes its child.
    fn make_attribute(
        &mut self,
        dom: &mut Dom,
        name: NameId,
        prefix: PrefixId,
        value: &str,
        attribute_type: AttributeType,
    ) -> Result<Nodes, Error> {
        check_chars(value)?;
        Ok(Nodes::one(dom.new_node(Value::Attribute(Attribute::new(
            name,
            prefix,
            value.to_string(),
            attribute_type,
        )))))
    }

    /// Create a text node for character data.
    fn make_text(&mut self, dom: &mut Dom, text: &str) -> Result<Nodes, Error> {
        Ok(Nodes::one(dom.new_text(text)?))
    }

    /// Create a text node for whitespace that the DTD declares
    /// insignificant. By default this is the same as [`Self::make_text`].
    fn make_whitespace_in_element_content(
        &mut self,
        dom: &mut Dom,
        text: &str,
    ) -> Result<Nodes, Error> {
        self.make_text(dom, text)
    }

    /// Create a comment.
    fn make_comment(&mut self, dom: &mut Dom, text: &str) -> Result<Nodes, Error> {
        Ok(Nodes::one(dom.new_comment(text)?))
    }

    /// Create a processing instruction.
    fn make_processing_instruction(
        &mut self,
        dom: &mut Dom,
        target: &str,
        data: Option<&str>,
    ) -> Result<Nodes, Error> {
        Ok(Nodes::one(dom.new_processing_instruction(target, data)?))
    }

    /// Create the document type declaration.
    fn make_doc_type(&mut self, dom: &mut Dom, doc_type: DocType) -> Result<Nodes, Error> {
        doc_type.check()?;
        Ok(Nodes::one(dom.new_node(Value::DocType(doc_type))))
    }
}

/// The factory that keeps every node as parsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityFactory;

impl NodeFactory for IdentityFactory {}
