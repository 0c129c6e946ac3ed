use indextree::{Arena, NodeId};

use crate::id::{ExpandedName, NameId, NameTable, NamespaceId, NamespaceTable, PrefixId, PrefixTable};
use crate::xmlvalue::Value;

pub(crate) const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Handle to a node owned by a [`Dom`].
///
/// Handles are `Copy` and compare by identity. Using a handle with a `Dom`
/// other than the one that created it is a logic error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(id: NodeId) -> Self {
        Node(id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// An arena holding documents, fragments and their interned names.
///
/// Every node of every tree lives here, which makes moving nodes between
/// trees cheap. The operations are spread over several `impl` blocks:
/// creation, access, attributes, manipulation, namespaces, parsing and
/// serialization.
///
/// Mutation takes `&mut Dom`, so a tree is changed by one thread at a time.
/// Building from events produced on another thread is described at
/// [`Dom::build`].
#[derive(Debug)]
pub struct Dom {
    pub(crate) arena: Arena<Value>,
    pub(crate) names: NameTable,
    pub(crate) namespaces: NamespaceTable,
    pub(crate) prefixes: PrefixTable,
    pub(crate) no_namespace_id: NamespaceId,
    pub(crate) xml_namespace_id: NamespaceId,
    pub(crate) empty_prefix_id: PrefixId,
    pub(crate) xml_prefix_id: PrefixId,
    pub(crate) xmlns_prefix_id: PrefixId,
}

impl Dom {
    /// An empty `Dom`. The `xml` prefix is bound from the start.
    pub fn new() -> Self {
        let mut namespaces = NamespaceTable::new();
        let mut prefixes = PrefixTable::new();
        // interned first, so they are always there
        let no_namespace_id = namespaces.intern(String::new());
        let xml_namespace_id = namespaces.intern(XML_NAMESPACE.to_string());
        let empty_prefix_id = prefixes.intern(String::new());
        let xml_prefix_id = prefixes.intern("xml".to_string());
        let xmlns_prefix_id = prefixes.intern("xmlns".to_string());
        Dom {
            arena: Arena::new(),
            names: NameTable::new(),
            namespaces,
            prefixes,
            no_namespace_id,
            xml_namespace_id,
            empty_prefix_id,
            xml_prefix_id,
            xmlns_prefix_id,
        }
    }

    #[inline]
    pub(crate) fn arena(&self) -> &Arena<Value> {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut Arena<Value> {
        &mut self.arena
    }

    #[inline]
    pub(crate) fn expanded_name(&self, name: NameId) -> &ExpandedName {
        self.names.resolve(name)
    }
}

impl Default for Dom {
    fn default() -> Self {
        Dom::new()
    }
}
