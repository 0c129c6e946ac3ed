use crate::domdata::{Dom, Node};
use crate::xmlvalue::{
    Attribute, Comment, DocType, Element, Namespace, ProcessingInstruction, Text, Value, ValueType,
};

// typed views on a node's value: `None` when the node holds another kind
macro_rules! typed_value {
    ($variant:ident, $ty:ty, $vis:vis $get:ident, $get_mut_vis:vis $get_mut:ident, $what:literal) => {
        #[doc = concat!("The ", $what, " value of a node, if it is one.")]
        $vis fn $get(&self, node: Node) -> Option<&$ty> {
            match self.value(node) {
                Value::$variant(value) => Some(value),
                _ => None,
            }
        }

        #[doc = concat!("Mutable access to the ", $what, " value of a node, if it is one.")]
        $get_mut_vis fn $get_mut(&mut self, node: Node) -> Option<&mut $ty> {
            match self.value_mut(node) {
                Value::$variant(value) => Some(value),
                _ => None,
            }
        }
    };
}

/// ## Values
///
/// Every node holds a [`Value`]. Match on it to handle all kinds, or use
/// the typed accessors when only one kind is of interest.
impl Dom {
    /// The value of a node.
    ///
    /// ```rust
    /// use xdom::{Dom, Value};
    ///
    /// let mut dom = Dom::new();
    /// let document = dom.parse("<doc>Example</doc>").unwrap();
    /// let root = dom.document_element(document).unwrap();
    /// let doc = dom.name("doc").unwrap();
    /// assert!(matches!(dom.value(root), Value::Element(e) if e.name() == doc));
    /// ```
    #[inline]
    pub fn value(&self, node: Node) -> &Value {
        self.arena[node.get()].get()
    }

    /// The value of a node, mutably. Changing the kind of a node that is
    /// in a tree can break the tree's structure; prefer the typed
    /// accessors.
    #[inline]
    pub fn value_mut(&mut self, node: Node) -> &mut Value {
        self.arena[node.get()].get_mut()
    }

    /// What kind of node this is.
    pub fn value_type(&self, node: Node) -> ValueType {
        self.value(node).value_type()
    }

    /// Whether the node is a document.
    pub fn is_document(&self, node: Node) -> bool {
        matches!(self.value(node), Value::Document)
    }

    /// Whether the node is an element.
    pub fn is_element(&self, node: Node) -> bool {
        matches!(self.value(node), Value::Element(_))
    }

    /// Whether the node is text.
    pub fn is_text(&self, node: Node) -> bool {
        matches!(self.value(node), Value::Text(_))
    }

    /// Whether the node is an attribute.
    pub fn is_attribute(&self, node: Node) -> bool {
        matches!(self.value(node), Value::Attribute(_))
    }

    typed_value!(Element, Element, pub element, pub(crate) element_mut, "element");
    typed_value!(Text, Text, pub text, pub text_mut, "text");
    typed_value!(Comment, Comment, pub comment, pub comment_mut, "comment");
    typed_value!(
        ProcessingInstruction,
        ProcessingInstruction,
        pub processing_instruction,
        pub processing_instruction_mut,
        "processing instruction"
    );
    typed_value!(Attribute, Attribute, pub attribute_value, pub attribute_value_mut, "attribute");
    typed_value!(DocType, DocType, pub doc_type_value, pub doc_type_value_mut, "document type");

    /// The text of a text node.
    pub fn text_str(&self, node: Node) -> Option<&str> {
        self.text(node).map(|text| text.get())
    }

    /// The binding of a namespace node. Namespace nodes are read-only.
    pub fn namespace_value(&self, node: Node) -> Option<&Namespace> {
        match self.value(node) {
            Value::Namespace(namespace) => Some(namespace),
            _ => None,
        }
    }
}
