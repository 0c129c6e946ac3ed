use ahash::HashMap;

use crate::domdata::{Dom, Node};
use crate::id::NameId;
use crate::xmlvalue::Value;

impl Dom {
    /// Structural equality of two nodes.
    ///
    /// Nodes are equal when the trees have the same shape, the same value
    /// type at each position, the same names and prefixes, the same
    /// attributes in any order and the same text. Namespace declarations and
    /// declared attribute types are not compared. Document type
    /// declarations are compared field by field.
    ///
    /// ```rust
    /// let mut dom = xdom::Dom::new();
    /// let a = dom.parse(r#"<a x="1" y="2">t</a>"#).unwrap();
    /// let b = dom.parse(r#"<a y="2" x="1">t</a>"#).unwrap();
    /// assert!(dom.deep_equal(a, b));
    /// ```
    pub fn deep_equal(&self, a: Node, b: Node) -> bool {
        let mut pending = vec![(a, b)];
        while let Some((a, b)) = pending.pop() {
            if !self.value_equal(a, b) {
                return false;
            }
            if matches!(self.value(a), Value::Element(_)) && !self.attributes_equal(a, b) {
                return false;
            }
            let a_children = self.children(a).collect::<Vec<_>>();
            let b_children = self.children(b).collect::<Vec<_>>();
            if a_children.len() != b_children.len() {
                return false;
            }
            pending.extend(a_children.into_iter().zip(b_children));
        }
        true
    }

    fn value_equal(&self, a: Node, b: Node) -> bool {
        match (self.value(a), self.value(b)) {
            (Value::Document, Value::Document) => true,
            (Value::Element(a), Value::Element(b)) => {
                a.name() == b.name() && a.prefix() == b.prefix()
            }
            (Value::Attribute(a), Value::Attribute(b)) => {
                a.name() == b.name() && a.value() == b.value()
            }
            (Value::Namespace(a), Value::Namespace(b)) => {
                a.prefix() == b.prefix() && a.namespace() == b.namespace()
            }
            (Value::Text(a), Value::Text(b)) => a.get() == b.get(),
            (Value::Comment(a), Value::Comment(b)) => a.get() == b.get(),
            (Value::ProcessingInstruction(a), Value::ProcessingInstruction(b)) => {
                a.target() == b.target() && a.data() == b.data()
            }
            (Value::DocType(a), Value::DocType(b)) => a == b,
            _ => false,
        }
    }

    fn attributes_equal(&self, a: Node, b: Node) -> bool {
        let a_attributes = self.attribute_map(a);
        let b_attributes = self.attribute_map(b);
        a_attributes == b_attributes
    }

    fn attribute_map(&self, element: Node) -> HashMap<NameId, &str> {
        self.attributes(element)
            .filter_map(|attribute| self.attribute_value(attribute))
            .map(|attribute| (attribute.name(), attribute.value()))
            .collect()
    }
}
