use indextree::NodeEdge as IndexTreeNodeEdge;

use crate::domdata::{Dom, Node};
use crate::error::Error;
use crate::xmlvalue::{Value, ValueType};

/// Node edges.
///
/// Used by [`Dom::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeEdge {
    /// The start edge of a node. In case of an element
    /// this is the start tag. In case of a document
    /// the start of the document.
    Start(Node),
    /// The end edge of a node. In case of an element
    /// this is the end tag. For leaf values the
    /// end edge occurs immediately after the start
    /// edge.
    End(Node),
}

/// ## Read-only access
impl Dom {
    /// Obtain the document element from the document node.
    ///
    /// Returns [`Error::NotDocument`] if this is not a document node.
    ///
    /// ```rust
    /// let mut dom = xdom::Dom::new();
    ///
    /// let document = dom.parse("<p>Example</p>").unwrap();
    ///
    /// let p = dom.document_element(document).unwrap();
    ///
    /// let p_name = dom.name("p").unwrap();
    /// assert_eq!(dom.element(p).unwrap().name(), p_name);
    /// ```
    pub fn document_element(&self, node: Node) -> Result<Node, Error> {
        if !self.is_document(node) {
            return Err(Error::NotDocument(node));
        }
        self.children(node)
            .find(|child| self.is_element(*child))
            .ok_or_else(|| Error::InvalidOperation("document has no element".into()))
    }

    /// Obtain the document type declaration of a document, if any.
    pub fn doc_type(&self, document: Node) -> Result<Option<Node>, Error> {
        if !self.is_document(document) {
            return Err(Error::NotDocument(document));
        }
        Ok(self
            .children(document)
            .find(|child| self.value_type(*child) == ValueType::DocType))
    }

    /// Obtain the top element, given a node anywhere in a tree.
    ///
    /// In a document this is the document element. In a fragment it's the
    /// outermost element, or the node itself if it has no element ancestors.
    pub fn top_element(&self, node: Node) -> Node {
        if let Ok(element) = self.document_element(node) {
            return element;
        }
        self.ancestors(node)
            .filter(|ancestor| self.is_element(*ancestor))
            .last()
            .unwrap_or(node)
    }

    /// Check whether a node has been removed.
    ///
    /// This happens when you removed it explicitly, or when it was discarded
    /// by a [`NodeFactory`](crate::NodeFactory) during a build.
    ///
    /// ```rust
    /// let mut dom = xdom::Dom::new();
    ///
    /// let document = dom.parse("<p>Example</p>").unwrap();
    /// let p = dom.document_element(document).unwrap();
    /// let text = dom.first_child(p).unwrap();
    /// dom.remove(text).unwrap();
    /// assert_eq!(dom.to_xml(document).unwrap(), "<p/>");
    /// assert!(dom.is_removed(text));
    /// ```
    pub fn is_removed(&self, node: Node) -> bool {
        self.arena()[node.get()].is_removed()
    }

    /// Get parent node.
    ///
    /// Returns [`None`] for a document node and for unattached nodes.
    ///
    /// The parent of an attribute is the element that owns it. The parent of
    /// a namespace node is the element it was obtained from, unless it is a
    /// copy.
    ///
    /// ```rust
    /// let mut dom = xdom::Dom::new();
    /// let document = dom.parse("<p>Example</p>").unwrap();
    /// let p = dom.document_element(document).unwrap();
    /// let text = dom.first_child(p).unwrap();
    /// assert_eq!(dom.parent(text), Some(p));
    /// assert_eq!(dom.parent(p), Some(document));
    /// assert_eq!(dom.parent(document), None);
    /// ```
    pub fn parent(&self, node: Node) -> Option<Node> {
        if let Value::Namespace(namespace) = self.value(node) {
            return namespace.element;
        }
        self.arena()[node.get()].parent().map(Node::new)
    }

    // attribute nodes followed by normal children
    pub(crate) fn all_children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(self.arena()).map(Node::new)
    }

    fn normal_children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get()
            .children(self.arena())
            .skip_while(|n| !self.arena()[*n].get().is_normal())
            .map(Node::new)
    }

    /// Get first child.
    ///
    /// Returns [`None`] if there are no children. Attributes are not
    /// children.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.normal_children(node).next()
    }

    /// Get last child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn last_child(&self, node: Node) -> Option<Node> {
        let last_child = self.arena()[node.get()].last_child()?;
        if self.arena()[last_child].get().is_normal() {
            Some(Node::new(last_child))
        } else {
            None
        }
    }

    /// Get next sibling.
    ///
    /// For attributes, gives the next attribute of the same element.
    ///
    /// ```rust
    /// let mut dom = xdom::Dom::new();
    /// let document = dom.parse("<p><a/><b/></p>").unwrap();
    /// let p = dom.document_element(document).unwrap();
    /// let a = dom.first_child(p).unwrap();
    /// let b = dom.next_sibling(a).unwrap();
    /// assert_eq!(dom.next_sibling(b), None);
    /// ```
    pub fn next_sibling(&self, node: Node) -> Option<Node> {
        let current_category = self.value(node).value_category();
        let next_sibling = self.arena()[node.get()].next_sibling()?;
        if self.arena()[next_sibling].get().value_category() != current_category {
            return None;
        }
        Some(Node::new(next_sibling))
    }

    /// Get previous sibling.
    pub fn previous_sibling(&self, node: Node) -> Option<Node> {
        let current_category = self.value(node).value_category();
        let previous_sibling = self.arena()[node.get()].previous_sibling()?;
        if self.arena()[previous_sibling].get().value_category() != current_category {
            return None;
        }
        Some(Node::new(previous_sibling))
    }

    /// Iterator over the child nodes of this node.
    ///
    /// ```rust
    /// let mut dom = xdom::Dom::new();
    /// let document = dom.parse(r#"<p x="1"><a/><b/></p>"#).unwrap();
    /// let p = dom.document_element(document).unwrap();
    /// let a = dom.first_child(p).unwrap();
    /// let b = dom.next_sibling(a).unwrap();
    /// assert_eq!(dom.children(p).collect::<Vec<_>>(), vec![a, b]);
    /// ```
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.normal_children(node)
    }

    /// Get index of child.
    ///
    /// Returns [`None`] if the node is not a child of this node.
    pub fn child_index(&self, parent: Node, child: Node) -> Option<usize> {
        if self.parent(child) != Some(parent) {
            return None;
        }
        self.normal_children(parent).position(|n| n == child)
    }

    /// Iterator over ancestor nodes, including this one.
    ///
    /// ```rust
    /// let mut dom = xdom::Dom::new();
    ///
    /// let document = dom.parse("<a><b><c/></b></a>").unwrap();
    /// let a = dom.document_element(document).unwrap();
    /// let b = dom.first_child(a).unwrap();
    /// let c = dom.first_child(b).unwrap();
    ///
    /// let ancestors = dom.ancestors(c).collect::<Vec<_>>();
    /// assert_eq!(ancestors, vec![c, b, a, document]);
    /// ```
    pub fn ancestors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        std::iter::successors(Some(node), move |n| self.parent(*n))
    }

    /// Iterator over the descendants of this node, including this one, in
    /// document order.
    ///
    /// Attributes aren't descendants.
    pub fn descendants(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get()
            .descendants(self.arena())
            .filter(move |n| *n == node.get() || self.arena()[*n].get().is_normal())
            .map(Node::new)
    }

    /// Traverse over node edges.
    ///
    /// This can be used to traverse the tree in document order iteratively
    /// without the need for recursion, while getting structure information.
    ///
    /// For the tree `<a><b/></a>` this generates a [`NodeEdge::Start`] for
    /// `<a>`, then a [`NodeEdge::Start`] for `<b>`, immediately followed by a
    /// [`NodeEdge::End`] for `<b>`, and finally a [`NodeEdge::End`] for `<a>`.
    ///
    /// Attributes are not visited.
    pub fn traverse(&self, node: Node) -> impl Iterator<Item = NodeEdge> + '_ {
        node.get()
            .traverse(self.arena())
            .filter_map(move |edge| {
                let (node_id, edge) = match edge {
                    IndexTreeNodeEdge::Start(node_id) => {
                        (node_id, NodeEdge::Start(Node::new(node_id)))
                    }
                    IndexTreeNodeEdge::End(node_id) => (node_id, NodeEdge::End(Node::new(node_id))),
                };
                if node_id == node.get() || self.arena()[node_id].get().is_normal() {
                    Some(edge)
                } else {
                    None
                }
            })
    }

    /// The string value of a node.
    ///
    /// For documents and elements this is the concatenation of all
    /// descendant text. For attributes it's the value, for namespace nodes
    /// the URI, for comments the text and for processing instructions the
    /// data. Document type declarations have an empty string value.
    ///
    /// ```rust
    /// let mut dom = xdom::Dom::new();
    /// let document = dom.parse("<a>one<b>two</b><!--no-->three</a>").unwrap();
    /// assert_eq!(dom.string_value(document), "onetwothree");
    /// ```
    pub fn string_value(&self, node: Node) -> String {
        match self.value(node) {
            Value::Document | Value::Element(_) => self
                .descendants(node)
                .filter_map(|n| self.text_str(n))
                .collect(),
            Value::Text(text) => text.get().to_string(),
            Value::Attribute(attribute) => attribute.value().to_string(),
            Value::Namespace(namespace) => self.namespace_str(namespace.namespace_id).to_string(),
            Value::Comment(comment) => comment.get().to_string(),
            Value::ProcessingInstruction(pi) => pi.data().unwrap_or("").to_string(),
            Value::DocType(_) => String::new(),
        }
    }
}
