// The serializer keeps its own record of which prefixes are declared in
// the output so far, rather than asking the tree: a fragment is written
// from an empty scope, and implicit bindings only become visible once a
// declaration for them has been written.

use crate::domdata::{Dom, Node};
use crate::error::Error;
use crate::id::{NameId, NamespaceId, PrefixId};

type Bindings = Vec<(PrefixId, NamespaceId)>;

#[derive(Debug, Default)]
pub(crate) struct Scope {
    frames: Vec<Bindings>,
}

impl Scope {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The namespace a prefix is declared for in the output.
    fn lookup(&self, prefix: PrefixId) -> Option<NamespaceId> {
        self.frames
            .iter()
            .rev()
            .flat_map(|frame| frame.iter().rev())
            .find(|(p, _)| *p == prefix)
            .map(|(_, ns)| *ns)
    }

    /// The declarations to write on an element: its explicit ones, then one
    /// for every implicit binding the output does not have yet.
    pub(crate) fn declarations(&self, dom: &Dom, element: Node) -> Bindings {
        let mut declarations = dom.namespace_declarations(element).collect::<Bindings>();
        let explicit = declarations.len();
        for (prefix, namespace) in dom.element_bindings(element).into_iter().skip(explicit) {
            if prefix == dom.xml_prefix() || declarations.iter().any(|(p, _)| *p == prefix) {
                continue;
            }
            if prefix != dom.empty_prefix() && namespace == dom.no_namespace() {
                // cannot be undeclared in XML 1.0
                continue;
            }
            let current = self.lookup(prefix).unwrap_or_else(|| dom.no_namespace());
            if current != namespace {
                declarations.push((prefix, namespace));
            }
        }
        declarations
    }

    pub(crate) fn push(&mut self, declarations: Bindings) {
        self.frames.push(declarations);
    }

    pub(crate) fn pop(&mut self) {
        self.frames.pop();
    }

    /// The name an attribute is written with.
    ///
    /// An attribute in a namespace without a prefix borrows one that is
    /// declared for its namespace.
    pub(crate) fn attribute_name(
        &self,
        dom: &Dom,
        name: NameId,
        prefix: PrefixId,
    ) -> Result<String, Error> {
        let namespace = dom.namespace_for_name(name);
        if prefix != dom.empty_prefix() || namespace == dom.no_namespace() {
            return Ok(dom.qualified_name(prefix, name));
        }
        if namespace == dom.xml_namespace() {
            return Ok(dom.qualified_name(dom.xml_prefix(), name));
        }
        let prefix = self
            .frames
            .iter()
            .rev()
            .flat_map(|frame| frame.iter().rev())
            .find(|(p, ns)| {
                *ns == namespace && *p != dom.empty_prefix() && self.lookup(*p) == Some(namespace)
            })
            .map(|(p, _)| *p)
            .ok_or_else(|| Error::MissingPrefix(dom.namespace_str(namespace).to_string()))?;
        Ok(dom.qualified_name(prefix, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declares_implicit_binding_once() {
        let mut dom = Dom::new();
        let ns = dom.add_namespace("http://example.com").unwrap();
        let p = dom.add_prefix("p").unwrap();
        let a = dom.add_name_ns("a", ns).unwrap();
        let outer = dom.new_element_prefixed(a, p).unwrap();
        let inner = dom.new_element_prefixed(a, p).unwrap();
        dom.append(outer, inner).unwrap();

        let mut scope = Scope::new();
        let declarations = scope.declarations(&dom, outer);
        assert_eq!(declarations, vec![(p, ns)]);
        scope.push(declarations);
        assert!(scope.declarations(&dom, inner).is_empty());
        scope.pop();
        assert_eq!(scope.declarations(&dom, inner), vec![(p, ns)]);
    }

    #[test]
    fn test_undeclares_default_namespace() {
        let mut dom = Dom::new();
        let ns = dom.add_namespace("http://example.com").unwrap();
        let outer_name = dom.add_name_ns("outer", ns).unwrap();
        let inner_name = dom.add_name("inner").unwrap();
        let outer = dom.new_element(outer_name);
        let inner = dom.new_element(inner_name);
        dom.append(outer, inner).unwrap();

        let mut scope = Scope::new();
        let declarations = scope.declarations(&dom, outer);
        assert_eq!(declarations, vec![(dom.empty_prefix(), ns)]);
        scope.push(declarations);
        assert_eq!(
            scope.declarations(&dom, inner),
            vec![(dom.empty_prefix(), dom.no_namespace())]
        );
    }

    #[test]
    fn test_xml_prefix_never_declared() {
        let mut dom = Dom::new();
        let doc_name = dom.add_name("doc").unwrap();
        let lang = dom.add_name_ns("lang", dom.xml_namespace()).unwrap();
        let element = dom.new_element(doc_name);
        dom.set_attribute(element, lang, "en").unwrap();
        let scope = Scope::new();
        assert!(scope.declarations(&dom, element).is_empty());
        assert_eq!(
            scope
                .attribute_name(&dom, lang, dom.empty_prefix())
                .unwrap(),
            "xml:lang"
        );
    }

    #[test]
    fn test_attribute_without_declared_prefix() {
        let mut dom = Dom::new();
        let ns = dom.add_namespace("http://example.com").unwrap();
        let name = dom.add_name_ns("a", ns).unwrap();
        let scope = Scope::new();
        assert!(matches!(
            scope.attribute_name(&dom, name, dom.empty_prefix()),
            Err(Error::MissingPrefix(_))
        ));
    }
}
