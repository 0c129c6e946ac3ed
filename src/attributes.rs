use crate::domdata::{Dom, Node};
use crate::error::Error;
use crate::id::NameId;
use crate::xmlvalue::{Value, ValueCategory};

/// ## Attributes
///
/// Attributes are nodes owned by a single element. An element never has two
/// attributes with the same expanded name: adding one replaces the other.
/// Attribute order is insertion order, and is kept by serialization.
impl Dom {
    /// Iterator over the attribute nodes of an element, in order.
    ///
    /// Empty for anything that is not an element.
    ///
    /// ```rust
    /// let mut dom = xdom::Dom::new();
    /// let document = dom.parse(r#"<p b="2" a="1"/>"#).unwrap();
    /// let p = dom.document_element(document).unwrap();
    /// let values = dom
    ///     .attributes(p)
    ///     .map(|a| dom.attribute_value(a).unwrap().value())
    ///     .collect::<Vec<_>>();
    /// assert_eq!(values, vec!["2", "1"]);
    /// ```
    pub fn attributes(&self, element: Node) -> impl Iterator<Item = Node> + '_ {
        element
            .get()
            .children(self.arena())
            .take_while(|n| self.arena()[*n].get().value_category() == ValueCategory::Attribute)
            .map(Node::new)
    }

    /// The attribute node with the given expanded name.
    pub fn attribute_node(&self, element: Node, name: NameId) -> Option<Node> {
        self.attributes(element).find(|attribute| {
            self.attribute_value(*attribute)
                .map(|a| a.name() == name)
                .unwrap_or(false)
        })
    }

    /// The value of the attribute with the given expanded name.
    pub fn attribute(&self, element: Node, name: NameId) -> Option<&str> {
        let node = self.attribute_node(element, name)?;
        self.attribute_value(node).map(|a| a.value())
    }

    /// Set an attribute value, creating the attribute if needed.
    ///
    /// A namespaced attribute gets a prefix that is in scope for its
    /// namespace; if there is none this fails with
    /// [`Error::MissingPrefix`]. Returns the attribute node.
    ///
    /// ```rust
    /// let mut dom = xdom::Dom::new();
    /// let document = dom.parse(r#"<p a="1"/>"#).unwrap();
    /// let p = dom.document_element(document).unwrap();
    /// let a = dom.add_name("a").unwrap();
    /// dom.set_attribute(p, a, "2").unwrap();
    /// assert_eq!(dom.attribute(p, a), Some("2"));
    /// assert_eq!(dom.attributes(p).count(), 1);
    /// ```
    pub fn set_attribute(&mut self, element: Node, name: NameId, value: &str) -> Result<Node, Error> {
        if !self.is_element(element) {
            return Err(Error::NotElement(element));
        }
        if let Some(existing) = self.attribute_node(element, name) {
            if let Some(attribute) = self.attribute_value_mut(existing) {
                attribute.set_value(value)?;
            }
            return Ok(existing);
        }
        let attribute = self.new_attribute(name, value)?;
        match self.add_attribute(element, attribute) {
            Ok(_) => Ok(attribute),
            Err(e) => {
                attribute.get().remove(self.arena_mut());
                Err(e)
            }
        }
    }

    /// Attach an attribute node to an element.
    ///
    /// An attribute with the same expanded name is replaced in place and
    /// returned, detached. An attribute that belongs to another element is
    /// rejected with [`Error::AttributeInUse`]; detach or copy it first.
    pub fn add_attribute(&mut self, element: Node, attribute: Node) -> Result<Option<Node>, Error> {
        if !self.is_element(element) {
            return Err(Error::NotElement(element));
        }
        let (name, prefix) = match self.value(attribute) {
            Value::Attribute(a) => (a.name(), a.prefix()),
            _ => {
                return Err(Error::InvalidOperation(
                    "only attribute nodes can be added as attributes".into(),
                ))
            }
        };
        match self.parent(attribute) {
            Some(owner) if owner == element => return Ok(None),
            Some(_) => return Err(Error::AttributeInUse(attribute)),
            None => {}
        }
        let namespace = self.namespace_for_name(name);
        let prefix = if namespace == self.no_namespace_id {
            self.empty_prefix_id
        } else if prefix == self.empty_prefix_id {
            self.prefix_for_namespace(element, namespace)
                .ok_or_else(|| Error::MissingPrefix(self.namespace_str(namespace).to_string()))?
        } else {
            prefix
        };
        if prefix != self.empty_prefix_id {
            self.check_binding(element, prefix, namespace)?;
        }

        if let Value::Attribute(a) = self.value_mut(attribute) {
            a.prefix_id = prefix;
        }
        let existing = self.attribute_node(element, name);
        if let Some(existing) = existing {
            existing
                .get()
                .checked_insert_after(attribute.get(), self.arena_mut())?;
            existing.get().detach(self.arena_mut());
        } else if let Some(last) = self.attributes(element).last() {
            last.get()
                .checked_insert_after(attribute.get(), self.arena_mut())?;
        } else {
            element
                .get()
                .checked_prepend(attribute.get(), self.arena_mut())?;
        }
        Ok(existing)
    }

    /// Remove the attribute with the given expanded name from an element.
    ///
    /// The attribute node is returned detached, so it can be added elsewhere.
    pub fn remove_attribute(&mut self, element: Node, name: NameId) -> Result<Option<Node>, Error> {
        if !self.is_element(element) {
            return Err(Error::NotElement(element));
        }
        let existing = self.attribute_node(element, name);
        if let Some(existing) = existing {
            existing.get().detach(self.arena_mut());
        }
        Ok(existing)
    }
}
