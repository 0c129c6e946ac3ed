use crate::domdata::{Dom, Node};
use crate::error::Error;
use crate::id::NameId;
use crate::xmlvalue::{Value, ValueType};

/// Where a node goes relative to its new parent's children.
#[derive(Debug, Clone, Copy)]
enum Place {
    Append(Node),
    Prepend(Node),
    Before(Node),
    After(Node),
}

/// ## Manipulation
///
/// This maintains an XML structure:
/// - A document has at most one element, at most one document type
///   declaration which comes before the element, and otherwise only
///   comments and processing instructions. No text at document level.
/// - The document element cannot be detached or removed; use
///   [`Dom::replace`] to change it.
/// - Only elements and documents have children. Attributes, namespace nodes
///   and documents are never children.
/// - An element cannot become its own descendant.
///
/// A node that already has a parent is detached from it first. Checks
/// happen before anything changes: on error the tree is unchanged.
///
/// It also ensures that text nodes are consolidated: two text nodes never
/// appear consecutively. If you add a text node after or before another
/// text node, the text is appended to the existing text node, and the added
/// text node is removed. This also happens if you remove a node causing two
/// text nodes to be adjacent; the second text node is removed.
impl Dom {
    /// Append a child to the end of the children of the given parent.
    ///
    /// ```rust
    /// let mut dom = xdom::Dom::new();
    /// let document = dom.parse("<p><a/></p>").unwrap();
    /// let p = dom.document_element(document).unwrap();
    /// let b = dom.add_name("b").unwrap();
    /// let b = dom.new_element(b);
    /// dom.append(p, b).unwrap();
    /// assert_eq!(dom.to_xml(p).unwrap(), "<p><a/><b/></p>");
    /// ```
    pub fn append(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        self.insert(Place::Append(parent), child)
    }

    /// Append a text node to a parent node given text.
    ///
    /// Fails with [`Error::InvalidCharacter`] if the text holds a character
    /// XML does not allow. The tree is unchanged then.
    pub fn append_text(&mut self, parent: Node, text: &str) -> Result<(), Error> {
        let text = self.new_text(text)?;
        match self.append(parent, text) {
            Ok(()) => Ok(()),
            Err(e) => {
                text.get().remove(self.arena_mut());
                Err(e)
            }
        }
    }

    /// Append a new element with the given name, and return it.
    pub fn append_element(&mut self, parent: Node, name: NameId) -> Result<Node, Error> {
        let element = self.new_element(name);
        match self.append(parent, element) {
            Ok(()) => Ok(element),
            Err(e) => {
                element.get().remove(self.arena_mut());
                Err(e)
            }
        }
    }

    /// Prepend a child to the beginning of the children of the given parent.
    pub fn prepend(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        self.insert(Place::Prepend(parent), child)
    }

    /// Insert a new sibling before a reference node.
    pub fn insert_before(&mut self, reference_node: Node, new_sibling: Node) -> Result<(), Error> {
        self.insert(Place::Before(reference_node), new_sibling)
    }

    /// Insert a new sibling after a reference node.
    pub fn insert_after(&mut self, reference_node: Node, new_sibling: Node) -> Result<(), Error> {
        self.insert(Place::After(reference_node), new_sibling)
    }

    /// Detach a node (and its descendants) from the tree.
    ///
    /// It now becomes a fragment that can be attached elsewhere. Detaching
    /// an attribute takes it off its element.
    pub fn detach(&mut self, node: Node) -> Result<(), Error> {
        self.remove_structure_check(node)?;
        let prev_node = self.previous_sibling(node);
        let next_node = self.next_sibling(node);
        node.get().detach(self.arena_mut());
        self.remove_consolidate_text_nodes(prev_node, next_node);
        Ok(())
    }

    /// Remove a node (and its descendants) from the tree.
    ///
    /// The nodes are gone afterwards, see [`Dom::is_removed`]. A document
    /// node can be removed as a whole.
    pub fn remove(&mut self, node: Node) -> Result<(), Error> {
        if !self.is_document(node) {
            self.remove_structure_check(node)?;
        }
        let prev_node = self.previous_sibling(node);
        let next_node = self.next_sibling(node);
        node.get().remove_subtree(self.arena_mut());
        self.remove_consolidate_text_nodes(prev_node, next_node);
        Ok(())
    }

    /// Replace a node with another node. The old node is detached.
    ///
    /// This is the way to change the element of a document.
    ///
    /// ```rust
    /// let mut dom = xdom::Dom::new();
    /// let document = dom.parse("<a/>").unwrap();
    /// let a = dom.document_element(document).unwrap();
    /// let b = dom.add_name("b").unwrap();
    /// let b = dom.new_element(b);
    /// dom.replace(a, b).unwrap();
    /// assert_eq!(dom.to_xml(document).unwrap(), "<b/>");
    /// assert_eq!(dom.parent(a), None);
    /// ```
    pub fn replace(&mut self, old: Node, new: Node) -> Result<(), Error> {
        if old == new {
            return Ok(());
        }
        let parent = self
            .parent(old)
            .ok_or_else(|| Error::InvalidOperation("cannot replace a node without parent".into()))?;
        if !self.value(old).is_normal() {
            return Err(Error::InvalidOperation(
                "only child nodes can be replaced".into(),
            ));
        }
        let index = self.child_index(parent, old).unwrap_or(0);
        self.add_structure_check(parent, new, index, Some(old))?;
        let old_neighbours = self.detach_for_move(new)?;
        let prev_node = self.previous_sibling(old);
        let next_node = self.next_sibling(old);
        old.get().detach(self.arena_mut());
        self.link(parent, new, prev_node, next_node)?;
        self.consolidate_after_move(old_neighbours);
        Ok(())
    }

    fn insert(&mut self, place: Place, child: Node) -> Result<(), Error> {
        let parent = match place {
            Place::Append(parent) | Place::Prepend(parent) => parent,
            Place::Before(reference) | Place::After(reference) => {
                if reference == child {
                    return Err(Error::InvalidOperation(
                        "cannot insert a node next to itself".into(),
                    ));
                }
                if !self.value(reference).is_normal() {
                    return Err(Error::InvalidOperation(
                        "siblings can only be inserted next to child nodes".into(),
                    ));
                }
                self.parent(reference).ok_or_else(|| {
                    Error::InvalidOperation("cannot create siblings for a node without parent".into())
                })?
            }
        };
        let index = self.insertion_index(place, child);
        self.add_structure_check(parent, child, index, None)?;
        let old_neighbours = self.detach_for_move(child)?;
        let (prev_node, next_node) = match place {
            Place::Append(parent) => (self.last_child(parent), None),
            Place::Prepend(parent) => (None, self.first_child(parent)),
            Place::Before(reference) => (self.previous_sibling(reference), Some(reference)),
            Place::After(reference) => (Some(reference), self.next_sibling(reference)),
        };
        self.link(parent, child, prev_node, next_node)?;
        self.consolidate_after_move(old_neighbours);
        Ok(())
    }

    // index among the parent's children once `child` has been detached
    fn insertion_index(&self, place: Place, child: Node) -> usize {
        match place {
            Place::Prepend(_) => 0,
            Place::Append(parent) => self.children(parent).filter(|n| *n != child).count(),
            Place::Before(reference) | Place::After(reference) => {
                let offset = usize::from(matches!(place, Place::After(_)));
                match self.parent(reference) {
                    Some(parent) => {
                        self.children(parent)
                            .filter(|n| *n != child)
                            .take_while(|n| *n != reference)
                            .count()
                            + offset
                    }
                    None => 0,
                }
            }
        }
    }

    fn link(
        &mut self,
        parent: Node,
        child: Node,
        prev_node: Option<Node>,
        next_node: Option<Node>,
    ) -> Result<(), Error> {
        if self.add_consolidate_text_nodes(child, prev_node, next_node) {
            return Ok(());
        }
        match (prev_node, next_node) {
            (Some(prev_node), _) => prev_node
                .get()
                .checked_insert_after(child.get(), self.arena_mut())?,
            (None, Some(next_node)) => next_node
                .get()
                .checked_insert_before(child.get(), self.arena_mut())?,
            (None, None) => parent.get().checked_append(child.get(), self.arena_mut())?,
        }
        Ok(())
    }

    // detach without merging the old neighbours yet: one of them may be
    // the reference node of the insertion
    fn detach_for_move(&mut self, child: Node) -> Result<(Option<Node>, Option<Node>), Error> {
        if self.parent(child).is_none() {
            return Ok((None, None));
        }
        self.remove_structure_check(child)?;
        let neighbours = (self.previous_sibling(child), self.next_sibling(child));
        child.get().detach(self.arena_mut());
        Ok(neighbours)
    }

    fn consolidate_after_move(&mut self, (prev_node, next_node): (Option<Node>, Option<Node>)) {
        if let (Some(prev), Some(next)) = (prev_node, next_node) {
            if !self.is_removed(prev)
                && !self.is_removed(next)
                && self.next_sibling(prev) == Some(next)
            {
                self.remove_consolidate_text_nodes(Some(prev), Some(next));
            }
        }
    }

    fn add_structure_check(
        &self,
        parent: Node,
        child: Node,
        index: usize,
        replacing: Option<Node>,
    ) -> Result<(), Error> {
        match self.value_type(parent) {
            ValueType::Element | ValueType::Document => {}
            _ => {
                return Err(Error::InvalidOperation(
                    "cannot add children to a node that is not an element or document".into(),
                ));
            }
        }
        match self.value_type(child) {
            ValueType::Document => {
                return Err(Error::InvalidOperation(
                    "a document cannot be a child".into(),
                ));
            }
            ValueType::Attribute => {
                return Err(Error::InvalidOperation(
                    "attributes are not children, use add_attribute".into(),
                ));
            }
            ValueType::Namespace => {
                return Err(Error::InvalidOperation(
                    "namespace nodes cannot be attached".into(),
                ));
            }
            _ => {}
        }
        if self.ancestors(parent).any(|ancestor| ancestor == child) {
            return Err(Error::InvalidOperation(
                "a node cannot become its own descendant".into(),
            ));
        }
        if self.is_document_element(child) && replacing.is_none() {
            return Err(Error::InvalidOperation(
                "the document element cannot be moved".into(),
            ));
        }
        if self.is_document(parent) {
            self.document_children_check(parent, child, index, replacing)?;
        } else if self.value_type(child) == ValueType::DocType {
            return Err(Error::InvalidOperation(
                "a document type declaration can only be a child of a document".into(),
            ));
        }
        Ok(())
    }

    // simulate the document's children after the change and check them
    fn document_children_check(
        &self,
        document: Node,
        child: Node,
        index: usize,
        replacing: Option<Node>,
    ) -> Result<(), Error> {
        let mut types = self
            .children(document)
            .filter(|n| *n != child && Some(*n) != replacing)
            .map(|n| self.value_type(n))
            .collect::<Vec<_>>();
        types.insert(index.min(types.len()), self.value_type(child));
        if types.contains(&ValueType::Text) {
            return Err(Error::InvalidOperation(
                "text cannot be a child of a document".into(),
            ));
        }
        let element_positions = positions(&types, ValueType::Element);
        if element_positions.len() > 1 {
            return Err(Error::InvalidOperation(
                "a document can only have one element".into(),
            ));
        }
        let doc_type_positions = positions(&types, ValueType::DocType);
        if doc_type_positions.len() > 1 {
            return Err(Error::InvalidOperation(
                "a document can only have one document type declaration".into(),
            ));
        }
        if let (Some(doc_type), Some(element)) =
            (doc_type_positions.first(), element_positions.first())
        {
            if doc_type > element {
                return Err(Error::InvalidOperation(
                    "the document type declaration must come before the element".into(),
                ));
            }
        }
        Ok(())
    }

    fn is_document_element(&self, node: Node) -> bool {
        self.is_element(node)
            && self
                .parent(node)
                .map(|parent| self.is_document(parent))
                .unwrap_or(false)
    }

    fn remove_structure_check(&self, node: Node) -> Result<(), Error> {
        match self.value_type(node) {
            ValueType::Document => Err(Error::InvalidOperation(
                "a document cannot be detached".into(),
            )),
            ValueType::Namespace => Err(Error::InvalidOperation(
                "namespace nodes are read-only; copy them instead".into(),
            )),
            ValueType::Element if self.is_document_element(node) => Err(
                Error::InvalidOperation("the document element cannot be removed".into()),
            ),
            _ => Ok(()),
        }
    }

    fn add_consolidate_text_nodes(
        &mut self,
        node: Node,
        prev_node: Option<Node>,
        next_node: Option<Node>,
    ) -> bool {
        let added_text = match self.value(node) {
            Value::Text(t) => t.get().to_string(),
            _ => return false,
        };

        // due to consolidation, two text nodes can never be adjacent,
        // so consolidating with the previous or the next node is enough
        if let Some(Value::Text(prev)) = prev_node.map(|n| self.value_mut(n)) {
            prev.text.push_str(&added_text);
            node.get().remove(self.arena_mut());
            return true;
        }
        if let Some(Value::Text(next)) = next_node.map(|n| self.value_mut(n)) {
            next.text.insert_str(0, &added_text);
            node.get().remove(self.arena_mut());
            return true;
        }
        false
    }

    fn remove_consolidate_text_nodes(&mut self, prev_node: Option<Node>, next_node: Option<Node>) {
        let (prev_node, next_node) = match (prev_node, next_node) {
            (Some(prev_node), Some(next_node)) => (prev_node, next_node),
            _ => return,
        };
        let to_add = match self.text_str(next_node) {
            Some(text) if self.is_text(prev_node) => text.to_string(),
            _ => return,
        };
        if let Some(prev) = self.text_mut(prev_node) {
            prev.text.push_str(&to_add);
        }
        next_node.get().remove(self.arena_mut());
    }
}

fn positions(types: &[ValueType], value_type: ValueType) -> Vec<usize> {
    types
        .iter()
        .enumerate()
        .filter(|(_, t)| **t == value_type)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_detaches_from_old_parent() {
        let mut dom = Dom::new();
        let document = dom.parse("<a><b><c/></b><d/></a>").unwrap();
        let a = dom.document_element(document).unwrap();
        let b = dom.first_child(a).unwrap();
        let c = dom.first_child(b).unwrap();
        let d = dom.next_sibling(b).unwrap();
        dom.append(d, c).unwrap();
        assert_eq!(dom.parent(c), Some(d));
        assert_eq!(dom.first_child(b), None);
        assert_eq!(dom.to_xml(a).unwrap(), "<a><b/><d><c/></d></a>");
    }

    #[test]
    fn test_no_cycles() {
        let mut dom = Dom::new();
        let document = dom.parse("<a><b><c/></b></a>").unwrap();
        let a = dom.document_element(document).unwrap();
        let b = dom.first_child(a).unwrap();
        let c = dom.first_child(b).unwrap();
        assert!(dom.append(c, b).is_err());
        assert!(dom.append(b, b).is_err());
        assert_eq!(dom.to_xml(a).unwrap(), "<a><b><c/></b></a>");
    }

    #[test]
    fn test_document_allows_one_element() {
        let mut dom = Dom::new();
        let document = dom.parse("<a/>").unwrap();
        let b = dom.add_name("b").unwrap();
        let b = dom.new_element(b);
        assert!(dom.append(document, b).is_err());
        let text = dom.new_text("x").unwrap();
        assert!(dom.append(document, text).is_err());
        let comment = dom.new_comment("c").unwrap();
        dom.append(document, comment).unwrap();
        assert_eq!(dom.to_xml(document).unwrap(), "<a/>\n<!--c-->");
    }

    #[test]
    fn test_doc_type_before_element() {
        let mut dom = Dom::new();
        let document = dom.parse("<a/>").unwrap();
        let doc_type = dom.new_doc_type("a", None, Some("a.dtd")).unwrap();
        assert!(dom.append(document, doc_type).is_err());
        dom.prepend(document, doc_type).unwrap();
        let second = dom.new_doc_type("a", None, None).unwrap();
        assert!(dom.prepend(document, second).is_err());
    }

    #[test]
    fn test_document_element_cannot_be_removed() {
        let mut dom = Dom::new();
        let document = dom.parse("<a/>").unwrap();
        let a = dom.document_element(document).unwrap();
        assert!(dom.remove(a).is_err());
        assert!(dom.detach(a).is_err());
        assert!(!dom.is_removed(a));
    }

    #[test]
    fn test_text_consolidation() {
        let mut dom = Dom::new();
        let document = dom.parse("<a>one<b/>two</a>").unwrap();
        let a = dom.document_element(document).unwrap();
        let one = dom.first_child(a).unwrap();
        let b = dom.next_sibling(one).unwrap();
        dom.remove(b).unwrap();
        assert_eq!(dom.children(a).count(), 1);
        assert_eq!(dom.text_str(one), Some("onetwo"));
        dom.append_text(a, "three").unwrap();
        assert_eq!(dom.children(a).count(), 1);
        assert_eq!(dom.text_str(one), Some("onetwothree"));
    }

    #[test]
    fn test_insert_before_and_after() {
        let mut dom = Dom::new();
        let document = dom.parse("<a><c/></a>").unwrap();
        let a = dom.document_element(document).unwrap();
        let c = dom.first_child(a).unwrap();
        let b = dom.add_name("b").unwrap();
        let b = dom.new_element(b);
        let d = dom.add_name("d").unwrap();
        let d = dom.new_element(d);
        dom.insert_before(c, b).unwrap();
        dom.insert_after(c, d).unwrap();
        assert_eq!(dom.to_xml(a).unwrap(), "<a><b/><c/><d/></a>");
        assert_eq!(dom.child_index(a, d), Some(2));
    }
}
