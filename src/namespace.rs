use crate::domdata::{Dom, Node};
use crate::error::Error;
use crate::id::{NamespaceId, PrefixId};
use crate::nodes::Nodes;
use crate::xmlvalue::{Namespace, Prefixes, Value};

/// ## Namespaces
///
/// An element has explicit namespace declarations (`xmlns:p="..."`), and
/// implicit bindings: the prefix it is written with, and the prefixes of its
/// attributes. Both count for scoping. Serialization writes a declaration
/// for every implicit binding that is not in scope.
impl Dom {
    /// Declare a prefix on an element. The empty prefix declares the default
    /// namespace.
    ///
    /// Fails with [`Error::NamespaceConflict`] if the element or one of its
    /// attributes is written with the same prefix in a different namespace.
    pub fn declare_namespace(
        &mut self,
        element: Node,
        prefix: PrefixId,
        namespace: NamespaceId,
    ) -> Result<(), Error> {
        if !self.is_element(element) {
            return Err(Error::NotElement(element));
        }
        if prefix == self.xmlns_prefix_id {
            return Err(Error::InvalidOperation(
                "the xmlns prefix cannot be declared".into(),
            ));
        }
        if (prefix == self.xml_prefix_id) != (namespace == self.xml_namespace_id) {
            return Err(Error::NamespaceConflict {
                prefix: self.prefix_str(prefix).to_string(),
                existing: self.namespace_str(self.xml_namespace_id).to_string(),
                new: self.namespace_str(namespace).to_string(),
            });
        }
        if prefix != self.empty_prefix_id && namespace == self.no_namespace_id {
            return Err(Error::InvalidOperation(format!(
                "prefix {:?} cannot be undeclared in XML 1.0",
                self.prefix_str(prefix)
            )));
        }
        self.check_binding(element, prefix, namespace)?;
        if let Some(element) = self.element_mut(element) {
            element.prefixes.insert(prefix, namespace);
        }
        Ok(())
    }

    /// Remove a namespace declaration from an element.
    ///
    /// The element may still bind the prefix implicitly.
    pub fn remove_namespace_declaration(
        &mut self,
        element: Node,
        prefix: PrefixId,
    ) -> Result<Option<NamespaceId>, Error> {
        let element_value = self.element_mut(element).ok_or(Error::NotElement(element))?;
        Ok(element_value.prefixes.remove(prefix))
    }

    /// The namespace declarations made on this node, in declaration order.
    ///
    /// Empty for anything that is not an element.
    pub fn namespace_declarations(
        &self,
        node: Node,
    ) -> impl Iterator<Item = (PrefixId, NamespaceId)> + '_ {
        self.element(node)
            .into_iter()
            .flat_map(|element| element.prefixes.iter())
    }

    // explicit declarations first, then the element's own prefix, then the
    // prefixes of its attributes
    pub(crate) fn element_bindings(&self, element: Node) -> Vec<(PrefixId, NamespaceId)> {
        let element_value = match self.element(element) {
            Some(element_value) => element_value,
            None => return Vec::new(),
        };
        let mut bindings = element_value.prefixes.iter().collect::<Vec<_>>();
        bindings.push((
            element_value.prefix(),
            self.namespace_for_name(element_value.name()),
        ));
        for attribute in self.attributes(element) {
            if let Some(attribute) = self.attribute_value(attribute) {
                if attribute.prefix() != self.empty_prefix_id {
                    bindings.push((attribute.prefix(), self.namespace_for_name(attribute.name())));
                }
            }
        }
        bindings
    }

    pub(crate) fn check_binding(
        &self,
        element: Node,
        prefix: PrefixId,
        namespace: NamespaceId,
    ) -> Result<(), Error> {
        for (bound_prefix, bound_namespace) in self.element_bindings(element) {
            if bound_prefix == prefix && bound_namespace != namespace {
                return Err(Error::NamespaceConflict {
                    prefix: self.prefix_str(prefix).to_string(),
                    existing: self.namespace_str(bound_namespace).to_string(),
                    new: self.namespace_str(namespace).to_string(),
                });
            }
        }
        Ok(())
    }

    /// The namespace a prefix is bound to at this element.
    ///
    /// The nearest binding wins. For the empty prefix this is the default
    /// namespace; [`None`] means there is none.
    ///
    /// ```rust
    /// let mut dom = xdom::Dom::new();
    /// let document = dom
    ///     .parse(r#"<a xmlns:p="http://one"><b xmlns:p="http://two"/></a>"#)
    ///     .unwrap();
    /// let a = dom.document_element(document).unwrap();
    /// let b = dom.first_child(a).unwrap();
    /// let p = dom.prefix("p").unwrap();
    /// let two = dom.namespace("http://two").unwrap();
    /// assert_eq!(dom.namespace_for_prefix(b, p), Some(two));
    /// ```
    pub fn namespace_for_prefix(&self, element: Node, prefix: PrefixId) -> Option<NamespaceId> {
        if prefix == self.xml_prefix_id {
            return Some(self.xml_namespace_id);
        }
        for ancestor in self.ancestors(element) {
            let found = self
                .element_bindings(ancestor)
                .into_iter()
                .find(|(p, _)| *p == prefix)
                .map(|(_, ns)| ns);
            if let Some(namespace) = found {
                if namespace == self.no_namespace_id {
                    return None;
                }
                return Some(namespace);
            }
        }
        None
    }

    /// A non-empty prefix in scope at this element that is bound to the
    /// namespace.
    pub fn prefix_for_namespace(&self, element: Node, namespace: NamespaceId) -> Option<PrefixId> {
        if namespace == self.xml_namespace_id {
            return Some(self.xml_prefix_id);
        }
        for ancestor in self.ancestors(element) {
            for (prefix, bound) in self.element_bindings(ancestor) {
                if bound == namespace
                    && prefix != self.empty_prefix_id
                    && self.namespace_for_prefix(element, prefix) == Some(namespace)
                {
                    return Some(prefix);
                }
            }
        }
        None
    }

    /// All prefix bindings in scope at this element, including the `xml`
    /// prefix. The default namespace is included under the empty prefix if
    /// there is one.
    pub fn namespaces_in_scope(&self, element: Node) -> Vec<(PrefixId, NamespaceId)> {
        let mut scope = Prefixes::new();
        scope.insert(self.xml_prefix_id, self.xml_namespace_id);
        let mut elements = self
            .ancestors(element)
            .filter(|n| self.is_element(*n))
            .collect::<Vec<_>>();
        elements.reverse();
        for element in elements {
            for (prefix, namespace) in self.element_bindings(element) {
                scope.insert(prefix, namespace);
            }
        }
        scope
            .iter()
            .filter(|(prefix, namespace)| {
                !(*prefix == self.empty_prefix_id && *namespace == self.no_namespace_id)
            })
            .collect()
    }

    /// The namespace axis for a single prefix.
    ///
    /// Returns a new namespace node for the binding of `prefix` in scope at
    /// the element, or [`None`] if the prefix is not bound. The parent of
    /// the namespace node is the element; a copy has no parent.
    ///
    /// ```rust
    /// let mut dom = xdom::Dom::new();
    /// let document = dom
    ///     .parse(r#"<pre:root xmlns:pre="http://www.example.org/"/>"#)
    ///     .unwrap();
    /// let root = dom.document_element(document).unwrap();
    /// let pre = dom.prefix("pre").unwrap();
    /// let namespace = dom.namespace_node(root, pre).unwrap().unwrap();
    /// assert_eq!(dom.parent(namespace), Some(root));
    /// assert_eq!(dom.string_value(namespace), "http://www.example.org/");
    /// assert_eq!(
    ///     dom.to_xml(namespace).unwrap(),
    ///     r#"xmlns:pre="http://www.example.org/""#
    /// );
    /// ```
    pub fn namespace_node(&mut self, element: Node, prefix: PrefixId) -> Result<Option<Node>, Error> {
        if !self.is_element(element) {
            return Err(Error::NotElement(element));
        }
        let namespace = match self.namespace_for_prefix(element, prefix) {
            Some(namespace) => namespace,
            None => return Ok(None),
        };
        Ok(Some(self.new_node(Value::Namespace(Namespace {
            prefix_id: prefix,
            namespace_id: namespace,
            element: Some(element),
        }))))
    }

    /// The namespace axis: a namespace node for every binding in scope.
    pub fn namespace_nodes(&mut self, element: Node) -> Result<Nodes, Error> {
        if !self.is_element(element) {
            return Err(Error::NotElement(element));
        }
        let mut nodes = Nodes::new();
        for (prefix, namespace) in self.namespaces_in_scope(element) {
            nodes.push(self.new_node(Value::Namespace(Namespace {
                prefix_id: prefix,
                namespace_id: namespace,
                element: Some(element),
            })));
        }
        Ok(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_namespace_can_be_undeclared() {
        let mut dom = Dom::new();
        let document = dom
            .parse(r#"<a xmlns="http://one"><b xmlns=""/></a>"#)
            .unwrap();
        let a = dom.document_element(document).unwrap();
        let b = dom.first_child(a).unwrap();
        let empty = dom.empty_prefix();
        let one = dom.namespace("http://one").unwrap();
        assert_eq!(dom.namespace_for_prefix(a, empty), Some(one));
        assert_eq!(dom.namespace_for_prefix(b, empty), None);
        assert_eq!(dom.namespace_node(b, empty).unwrap(), None);
    }

    #[test]
    fn test_in_scope_nearest_wins() {
        let mut dom = Dom::new();
        let document = dom
            .parse(r#"<a xmlns:p="http://one" xmlns:q="http://q"><b xmlns:p="http://two"/></a>"#)
            .unwrap();
        let a = dom.document_element(document).unwrap();
        let b = dom.first_child(a).unwrap();
        let p = dom.prefix("p").unwrap();
        let q = dom.prefix("q").unwrap();
        let two = dom.namespace("http://two").unwrap();
        let q_ns = dom.namespace("http://q").unwrap();
        let scope = dom.namespaces_in_scope(b);
        assert_eq!(
            scope,
            vec![(dom.xml_prefix(), dom.xml_namespace()), (p, two), (q, q_ns)]
        );
    }

    #[test]
    fn test_declare_conflict_with_element_prefix() {
        let mut dom = Dom::new();
        let document = dom.parse(r#"<p:a xmlns:p="http://one"/>"#).unwrap();
        let a = dom.document_element(document).unwrap();
        let p = dom.prefix("p").unwrap();
        let other = dom.add_namespace("http://other").unwrap();
        assert!(matches!(
            dom.declare_namespace(a, p, other),
            Err(Error::NamespaceConflict { .. })
        ));
        let one = dom.namespace("http://one").unwrap();
        assert_eq!(
            dom.namespace_declarations(a).collect::<Vec<_>>(),
            vec![(p, one)]
        );
    }

    #[test]
    fn test_implicit_binding_of_element_prefix() {
        let mut dom = Dom::new();
        let ns = dom.add_namespace("http://www.example.org/").unwrap();
        let name = dom.add_name_ns("root", ns).unwrap();
        let pre = dom.add_prefix("pre").unwrap();
        let root = dom.new_element_prefixed(name, pre).unwrap();
        assert_eq!(dom.namespace_for_prefix(root, pre), Some(ns));
        assert_eq!(dom.prefix_for_namespace(root, ns), Some(pre));
        assert_eq!(dom.namespace_nodes(root).unwrap().len(), 2);
    }
}
