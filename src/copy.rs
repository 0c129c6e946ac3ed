use crate::domdata::{Dom, Node};
use crate::xmlvalue::Value;

impl Dom {
    /// Deep copy a node.
    ///
    /// The copy is unattached and fully independent: attributes and
    /// descendants are copied too. A copy of a namespace node has no parent.
    ///
    /// ```rust
    /// let mut dom = xdom::Dom::new();
    /// let document = dom.parse(r#"<a x="1"><b/>text</a>"#).unwrap();
    /// let a = dom.document_element(document).unwrap();
    /// let copy = dom.copy(a);
    /// assert_eq!(dom.parent(copy), None);
    /// assert!(dom.deep_equal(a, copy));
    /// ```
    pub fn copy(&mut self, node: Node) -> Node {
        let top = self.new_node(self.copied_value(node));
        // (original, copy) pairs whose children still need copying
        let mut pending = vec![(node, top)];
        while let Some((original, copy)) = pending.pop() {
            let children = self.all_children(original).collect::<Vec<_>>();
            for child in children {
                let child_copy = self.new_node(self.copied_value(child));
                copy.get().append(child_copy.get(), self.arena_mut());
                pending.push((child, child_copy));
            }
        }
        top
    }

    fn copied_value(&self, node: Node) -> Value {
        let mut value = self.value(node).clone();
        if let Value::Namespace(namespace) = &mut value {
            namespace.element = None;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_is_independent() {
        let mut dom = Dom::new();
        let document = dom.parse(r#"<a x="1"><b>text</b></a>"#).unwrap();
        let copy = dom.copy(document);
        let a = dom.document_element(copy).unwrap();
        let b = dom.first_child(a).unwrap();
        let text = dom.first_child(b).unwrap();
        dom.text_mut(text).unwrap().set("changed").unwrap();
        let x = dom.name("x").unwrap();
        dom.set_attribute(a, x, "2").unwrap();
        assert_eq!(dom.to_xml(document).unwrap(), r#"<a x="1"><b>text</b></a>"#);
        assert_eq!(dom.to_xml(copy).unwrap(), r#"<a x="2"><b>changed</b></a>"#);
    }

    #[test]
    fn test_copy_attribute_is_unattached() {
        let mut dom = Dom::new();
        let document = dom.parse(r#"<a x="1"/>"#).unwrap();
        let a = dom.document_element(document).unwrap();
        let attribute = dom.attributes(a).next().unwrap();
        let copy = dom.copy(attribute);
        assert_eq!(dom.parent(copy), None);
        assert_eq!(dom.attribute_value(copy).unwrap().value(), "1");
        assert_ne!(copy, attribute);
    }
}
