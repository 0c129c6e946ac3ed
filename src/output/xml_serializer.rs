use crate::access::NodeEdge;
use crate::domdata::{Dom, Node};
use crate::entity::{serialize_attribute, serialize_text};
use crate::error::Error;
use crate::id::{NamespaceId, PrefixId};
use crate::xmlvalue::{DocType, Value};

use super::{Output, Scope};

/// Writes nodes as XML 1.0 text to an [`Output`].
pub(crate) struct XmlSerializer<'a, O: Output> {
    dom: &'a Dom,
    output: O,
    scope: Scope,
}

impl<'a, O: Output> XmlSerializer<'a, O> {
    pub(crate) fn new(dom: &'a Dom, output: O) -> Self {
        Self {
            dom,
            output,
            scope: Scope::new(),
        }
    }

    pub(crate) fn into_output(self) -> O {
        self.output
    }

    pub(crate) fn markup(&mut self, text: &str) -> Result<(), Error> {
        self.output.markup(text)
    }

    /// Serialize any node.
    ///
    /// The top-level items of a document go on their own lines. Attribute
    /// and namespace nodes are written the way they appear in a start tag.
    pub(crate) fn serialize(&mut self, node: Node) -> Result<(), Error> {
        let dom = self.dom;
        match dom.value(node) {
            Value::Document => {
                for (i, child) in dom.children(node).enumerate() {
                    if i > 0 {
                        self.output.markup("\n")?;
                    }
                    self.serialize_tree(child)?;
                }
                Ok(())
            }
            Value::Attribute(attribute) => {
                let name = dom.qualified_name(attribute.prefix(), attribute.name());
                self.attribute(&name, attribute.value())
            }
            Value::Namespace(namespace) => {
                self.declaration(namespace.prefix(), namespace.namespace())
            }
            _ => self.serialize_tree(node),
        }
    }

    fn serialize_tree(&mut self, node: Node) -> Result<(), Error> {
        for edge in self.dom.traverse(node) {
            match edge {
                NodeEdge::Start(node) => self.start(node)?,
                NodeEdge::End(node) => self.end(node)?,
            }
        }
        Ok(())
    }

    fn start(&mut self, node: Node) -> Result<(), Error> {
        let dom = self.dom;
        match dom.value(node) {
            Value::Element(element) => {
                let declarations = self.scope.declarations(dom, node);
                self.output.markup("<")?;
                self.output
                    .markup(&dom.qualified_name(element.prefix(), element.name()))?;
                for (prefix, namespace) in &declarations {
                    self.output.markup(" ")?;
                    self.declaration(*prefix, *namespace)?;
                }
                self.scope.push(declarations);
                for attribute in dom.attributes(node) {
                    if let Some(attribute) = dom.attribute_value(attribute) {
                        let name =
                            self.scope
                                .attribute_name(dom, attribute.name(), attribute.prefix())?;
                        self.output.markup(" ")?;
                        self.attribute(&name, attribute.value())?;
                    }
                }
                if dom.first_child(node).is_none() {
                    self.output.markup("/>")
                } else {
                    self.output.markup(">")
                }
            }
            Value::Text(text) => self.output.content(&serialize_text(text.get().into())),
            Value::Comment(comment) => {
                self.output.markup("<!--")?;
                self.output.markup(comment.get())?;
                self.output.markup("-->")
            }
            Value::ProcessingInstruction(pi) => {
                self.output.markup("<?")?;
                self.output.markup(pi.target())?;
                if let Some(data) = pi.data() {
                    self.output.markup(" ")?;
                    self.output.markup(data)?;
                }
                self.output.markup("?>")
            }
            Value::DocType(doc_type) => self.doc_type(doc_type),
            Value::Document | Value::Attribute(_) | Value::Namespace(_) => Ok(()),
        }
    }

    fn end(&mut self, node: Node) -> Result<(), Error> {
        let dom = self.dom;
        if let Value::Element(element) = dom.value(node) {
            if dom.first_child(node).is_some() {
                self.output.markup("</")?;
                self.output
                    .markup(&dom.qualified_name(element.prefix(), element.name()))?;
                self.output.markup(">")?;
            }
            self.scope.pop();
        }
        Ok(())
    }

    fn attribute(&mut self, name: &str, value: &str) -> Result<(), Error> {
        self.output.markup(name)?;
        self.output.markup("=\"")?;
        self.output.content(&serialize_attribute(value.into()))?;
        self.output.markup("\"")
    }

    fn declaration(&mut self, prefix: PrefixId, namespace: NamespaceId) -> Result<(), Error> {
        let dom = self.dom;
        if prefix == dom.empty_prefix() {
            self.attribute("xmlns", dom.namespace_str(namespace))
        } else {
            let name = format!("xmlns:{}", dom.prefix_str(prefix));
            self.attribute(&name, dom.namespace_str(namespace))
        }
    }

    fn doc_type(&mut self, doc_type: &DocType) -> Result<(), Error> {
        self.output.markup("<!DOCTYPE ")?;
        self.output.markup(doc_type.root_name())?;
        match (doc_type.public_id(), doc_type.system_id()) {
            (Some(public_id), system_id) => {
                self.output.markup(" PUBLIC ")?;
                self.output.markup(&quoted(public_id))?;
                self.output.markup(" ")?;
                self.output.markup(&quoted(system_id.unwrap_or("")))?;
            }
            (None, Some(system_id)) => {
                self.output.markup(" SYSTEM ")?;
                self.output.markup(&quoted(system_id))?;
            }
            (None, None) => {}
        }
        if let Some(subset) = doc_type.internal_subset() {
            self.output.markup(" [")?;
            self.output.markup(subset)?;
            self.output.markup("]")?;
        }
        self.output.markup(">")
    }
}

// system literals cannot escape quotes, so pick the one not in the literal
fn quoted(literal: &str) -> String {
    if literal.contains('"') {
        format!("'{}'", literal)
    } else {
        format!("\"{}\"", literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialize(dom: &Dom, node: Node) -> String {
        let mut serializer = XmlSerializer::new(dom, String::new());
        serializer.serialize(node).unwrap();
        serializer.into_output()
    }

    #[test]
    fn test_fragment_gets_declarations_from_scope() {
        let mut dom = Dom::new();
        let document = dom
            .parse(r#"<a xmlns="http://one" xmlns:p="http://two"><p:b c="1"/></a>"#)
            .unwrap();
        let a = dom.document_element(document).unwrap();
        let b = dom.first_child(a).unwrap();
        assert_eq!(serialize(&dom, b), r#"<p:b xmlns:p="http://two" c="1"/>"#);
    }

    #[test]
    fn test_redundant_declaration_is_kept() {
        let mut dom = Dom::new();
        let document = dom
            .parse(r#"<a xmlns:p="http://two"><b xmlns:p="http://two"/></a>"#)
            .unwrap();
        assert_eq!(
            serialize(&dom, document),
            r#"<a xmlns:p="http://two"><b xmlns:p="http://two"/></a>"#
        );
    }

    #[test]
    fn test_document_items_on_lines() {
        let mut dom = Dom::new();
        let document = dom
            .parse("<!DOCTYPE a SYSTEM \"a.dtd\"><?pi data?><a/><!--after-->")
            .unwrap();
        assert_eq!(
            serialize(&dom, document),
            "<!DOCTYPE a SYSTEM \"a.dtd\">\n<?pi data?>\n<a/>\n<!--after-->"
        );
    }

    #[test]
    fn test_text_and_attribute_escaping() {
        let mut dom = Dom::new();
        let document = dom.parse(r#"<a b="&quot;&#9;&lt;">x &amp; ]]&gt;</a>"#).unwrap();
        assert_eq!(
            serialize(&dom, document),
            r#"<a b="&quot;&#x9;&lt;">x &amp; ]]&gt;</a>"#
        );
    }

    #[test]
    fn test_attribute_node() {
        let mut dom = Dom::new();
        let document = dom
            .parse(r#"<a xmlns:p="http://two" p:b="1"/>"#)
            .unwrap();
        let a = dom.document_element(document).unwrap();
        let b = dom.attributes(a).next().unwrap();
        assert_eq!(serialize(&dom, b), r#"p:b="1""#);
    }
}
