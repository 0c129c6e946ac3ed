use crate::domdata::{Dom, Node};
use crate::error::Error;
use crate::id::{NameId, PrefixId};
use crate::xmlchar::check_chars;
use crate::xmlvalue::{
    Attribute, AttributeType, Comment, DocType, Element, ProcessingInstruction, Text, Value,
};

/// ## Creation
///
/// Created nodes are unattached. Use the manipulation methods such as
/// [`Dom::append`] to put them into a tree.
impl Dom {
    pub(crate) fn new_node(&mut self, value: Value) -> Node {
        Node::new(self.arena.new_node(value))
    }

    /// Create a new, empty document node.
    ///
    /// A document needs exactly one element before it can be serialized.
    pub fn new_document(&mut self) -> Node {
        self.new_node(Value::Document)
    }

    /// Create a document node with `element` as its document element.
    ///
    /// ```rust
    /// let mut dom = xdom::Dom::new();
    /// let name = dom.add_name("doc").unwrap();
    /// let element = dom.new_element(name);
    /// let document = dom.new_document_with_element(element).unwrap();
    /// assert_eq!(dom.document_element(document).unwrap(), element);
    /// ```
    pub fn new_document_with_element(&mut self, element: Node) -> Result<Node, Error> {
        if self.element(element).is_none() {
            return Err(Error::NotElement(element));
        }
        let document = self.new_document();
        self.append(document, element)?;
        Ok(document)
    }

    /// Create a new unprefixed element.
    ///
    /// If the name is in a namespace, the element is written in that
    /// namespace as the default namespace, unless a prefix for it is
    /// declared on the element or an ancestor.
    pub fn new_element(&mut self, name: NameId) -> Node {
        let prefix = self.empty_prefix_id;
        self.new_node(Value::Element(Element::new(name, prefix)))
    }

    /// Create a new element written with the given prefix.
    ///
    /// The prefix cannot be `xmlns`, and a non-empty prefix needs a
    /// namespaced name.
    pub fn new_element_prefixed(&mut self, name: NameId, prefix: PrefixId) -> Result<Node, Error> {
        self.check_prefix(name, prefix)?;
        Ok(self.new_node(Value::Element(Element::new(name, prefix))))
    }

    /// Create a new, unattached attribute.
    ///
    /// A namespaced attribute gets its prefix from the scope of the element
    /// it is added to. The value must hold only XML characters.
    pub fn new_attribute(&mut self, name: NameId, value: &str) -> Result<Node, Error> {
        check_chars(value)?;
        let prefix = self.empty_prefix_id;
        Ok(self.new_node(Value::Attribute(Attribute::new(
            name,
            prefix,
            value.to_string(),
            AttributeType::Undeclared,
        ))))
    }

    /// Create a new, unattached attribute written with the given prefix.
    pub fn new_attribute_prefixed(
        &mut self,
        name: NameId,
        prefix: PrefixId,
        value: &str,
    ) -> Result<Node, Error> {
        self.check_prefix(name, prefix)?;
        check_chars(value)?;
        Ok(self.new_node(Value::Attribute(Attribute::new(
            name,
            prefix,
            value.to_string(),
            AttributeType::Undeclared,
        ))))
    }

    /// Create a new text node.
    ///
    /// ```rust
    /// use xdom::{Dom, Error};
    ///
    /// let mut dom = Dom::new();
    /// assert!(dom.new_text("a < b").is_ok());
    /// assert!(matches!(dom.new_text("a\u{1}"), Err(Error::InvalidCharacter('\u{1}'))));
    /// ```
    pub fn new_text(&mut self, text: &str) -> Result<Node, Error> {
        check_chars(text)?;
        Ok(self.new_node(Value::Text(Text::new(text.to_string()))))
    }

    /// Create a new comment node.
    ///
    /// Fails with [`Error::InvalidComment`] if the text contains `--` or ends
    /// with `-`.
    pub fn new_comment(&mut self, comment: &str) -> Result<Node, Error> {
        Comment::check(comment)?;
        Ok(self.new_node(Value::Comment(Comment::new(comment.to_string()))))
    }

    /// Create a new processing instruction node.
    ///
    /// Empty data is stored as no data.
    pub fn new_processing_instruction(
        &mut self,
        target: &str,
        data: Option<&str>,
    ) -> Result<Node, Error> {
        ProcessingInstruction::check_target(target)?;
        let data = data.filter(|d| !d.is_empty());
        if let Some(data) = data {
            ProcessingInstruction::check_data(data)?;
        }
        Ok(self.new_node(Value::ProcessingInstruction(ProcessingInstruction::new(
            target.to_string(),
            data.map(|d| d.to_string()),
        ))))
    }

    /// Create a new document type declaration.
    pub fn new_doc_type(
        &mut self,
        root_name: &str,
        public_id: Option<&str>,
        system_id: Option<&str>,
    ) -> Result<Node, Error> {
        let doc_type = DocType::new(
            root_name.to_string(),
            public_id.map(|s| s.to_string()),
            system_id.map(|s| s.to_string()),
            None,
        );
        doc_type.check()?;
        Ok(self.new_node(Value::DocType(doc_type)))
    }

    fn check_prefix(&self, name: NameId, prefix: PrefixId) -> Result<(), Error> {
        let namespace = self.namespace_for_name(name);
        if prefix == self.xmlns_prefix_id {
            return Err(Error::InvalidOperation(
                "the xmlns prefix cannot be used for names".into(),
            ));
        }
        if prefix != self.empty_prefix_id && namespace == self.no_namespace_id {
            return Err(Error::InvalidOperation(format!(
                "prefix {:?} used for a name without namespace",
                self.prefix_str(prefix)
            )));
        }
        if (prefix == self.xml_prefix_id) != (namespace == self.xml_namespace_id)
            && prefix != self.empty_prefix_id
        {
            return Err(Error::NamespaceConflict {
                prefix: self.prefix_str(prefix).to_string(),
                existing: self.namespace_str(self.xml_namespace_id).to_string(),
                new: self.namespace_str(namespace).to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_element_needs_namespace() {
        let mut dom = Dom::new();
        let name = dom.add_name("a").unwrap();
        let prefix = dom.add_prefix("p").unwrap();
        assert!(dom.new_element_prefixed(name, prefix).is_err());
        let ns = dom.add_namespace("http://example.com").unwrap();
        let name = dom.add_name_ns("a", ns).unwrap();
        assert!(dom.new_element_prefixed(name, prefix).is_ok());
    }

    #[test]
    fn test_xml_prefix_only_for_xml_namespace() {
        let mut dom = Dom::new();
        let ns = dom.add_namespace("http://example.com").unwrap();
        let name = dom.add_name_ns("lang", ns).unwrap();
        let xml = dom.xml_prefix();
        assert!(matches!(
            dom.new_attribute_prefixed(name, xml, "en"),
            Err(Error::NamespaceConflict { .. })
        ));
        let xml_ns = dom.xml_namespace();
        let name = dom.add_name_ns("lang", xml_ns).unwrap();
        assert!(dom.new_attribute_prefixed(name, xml, "en").is_ok());
    }

    #[test]
    fn test_new_comment_validates() {
        let mut dom = Dom::new();
        assert!(dom.new_comment("a -- b").is_err());
        assert!(dom.new_comment(" fine ").is_ok());
    }

    #[test]
    fn test_new_processing_instruction_empty_data() {
        let mut dom = Dom::new();
        let pi = dom.new_processing_instruction("target", Some("")).unwrap();
        assert_eq!(dom.processing_instruction(pi).unwrap().data(), None);
        assert!(dom.new_processing_instruction("xml", None).is_err());
    }

    #[test]
    fn test_character_data_validated() {
        let mut dom = Dom::new();
        assert!(matches!(dom.new_text("a\u{1}b"), Err(Error::InvalidCharacter('\u{1}'))));
        assert!(matches!(
            dom.new_text("a\u{FFFE}"),
            Err(Error::InvalidCharacter('\u{FFFE}'))
        ));
        let name = dom.add_name("a").unwrap();
        assert!(dom.new_attribute(name, "\u{0}").is_err());
        assert!(matches!(dom.new_comment("\u{1F}"), Err(Error::InvalidCharacter(_))));
        assert!(dom.new_processing_instruction("pi", Some("\u{FFFF}")).is_err());
        assert!(matches!(
            dom.new_processing_instruction("a b", None),
            Err(Error::InvalidTarget(_))
        ));
        // NEL is an XML character
        assert!(dom.new_text("\u{85}").is_ok());
    }

    #[test]
    fn test_doc_type_validated() {
        let mut dom = Dom::new();
        assert!(dom.new_doc_type("p:a", None, Some("a.dtd")).is_ok());
        assert!(matches!(
            dom.new_doc_type("a b", None, None),
            Err(Error::InvalidName(_))
        ));
        assert!(dom.new_doc_type("a", Some("\u{2}"), Some("a.dtd")).is_err());
    }
}
