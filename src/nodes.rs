use crate::domdata::Node;

/// An ordered, possibly empty collection of nodes.
///
/// This is what [`NodeFactory`](crate::NodeFactory) callbacks return: no
/// nodes omits, one node keeps or replaces, several nodes expand into
/// siblings. The namespace axis returns it as well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nodes(Vec<Node>);

impl Nodes {
    /// No nodes.
    pub fn new() -> Self {
        Nodes(Vec::new())
    }

    /// Exactly one node.
    pub fn one(node: Node) -> Self {
        Nodes(vec![node])
    }

    /// Add a node at the end.
    pub fn push(&mut self, node: Node) {
        self.0.push(node)
    }

    /// The node at `index`.
    pub fn get(&self, index: usize) -> Option<Node> {
        self.0.get(index).copied()
    }

    /// The number of nodes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the nodes in order.
    pub fn iter(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter().copied()
    }

    /// Whether a node is part of this collection.
    pub fn contains(&self, node: Node) -> bool {
        self.0.contains(&node)
    }
}

impl From<Node> for Nodes {
    fn from(node: Node) -> Self {
        Nodes::one(node)
    }
}

impl From<Vec<Node>> for Nodes {
    fn from(nodes: Vec<Node>) -> Self {
        Nodes(nodes)
    }
}

impl From<Option<Node>> for Nodes {
    fn from(node: Option<Node>) -> Self {
        Nodes(node.into_iter().collect())
    }
}

impl FromIterator<Node> for Nodes {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Nodes(iter.into_iter().collect())
    }
}

impl IntoIterator for Nodes {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Nodes {
    type Item = Node;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Node>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}
