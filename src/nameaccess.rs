use crate::domdata::Dom;
use crate::error::Error;
use crate::id::{ExpandedName, NameId, NamespaceId, PrefixId};
use crate::xmlchar::{check_chars, check_ncname};

/// ## Names, namespaces and prefixes
///
/// Names, namespaces and prefixes are interned. Looking one up without
/// adding it returns [`None`] if it was never seen.
impl Dom {
    /// Look up name without a namespace.
    pub fn name(&self, name: &str) -> Option<NameId> {
        self.name_ns(name, self.no_namespace_id)
    }

    /// Add name without a namespace.
    /// If the name already exists, return its id.
    ///
    /// Fails with [`Error::InvalidName`] unless the name is an XML name
    /// without a colon.
    pub fn add_name(&mut self, name: &str) -> Result<NameId, Error> {
        self.add_name_ns(name, self.no_namespace_id)
    }

    /// Look up name with a namespace.
    pub fn name_ns(&self, name: &str, namespace: NamespaceId) -> Option<NameId> {
        self.names.lookup(&ExpandedName {
            local: name.to_string(),
            namespace,
        })
    }

    /// Add name with a namespace.
    /// If the name already exists, return its id.
    ///
    /// ```rust
    /// let mut dom = xdom::Dom::new();
    /// let ns = dom.add_namespace("http://example.com").unwrap();
    /// let a = dom.add_name_ns("a", ns).unwrap();
    /// assert_eq!(dom.name_ns("a", ns), Some(a));
    /// assert_eq!(dom.name("a"), None);
    /// assert!(dom.add_name_ns("a b", ns).is_err());
    /// ```
    pub fn add_name_ns(&mut self, name: &str, namespace: NamespaceId) -> Result<NameId, Error> {
        if let Some(id) = self.name_ns(name, namespace) {
            return Ok(id);
        }
        check_ncname(name)?;
        Ok(self.names.intern(ExpandedName {
            local: name.to_string(),
            namespace,
        }))
    }

    /// Look up namespace.
    pub fn namespace(&self, namespace: &str) -> Option<NamespaceId> {
        self.namespaces.lookup(namespace)
    }

    /// Add namespace.
    /// If the namespace already exists, return its id.
    pub fn add_namespace(&mut self, namespace: &str) -> Result<NamespaceId, Error> {
        if let Some(id) = self.namespace(namespace) {
            return Ok(id);
        }
        check_chars(namespace)?;
        Ok(self.namespaces.intern(namespace.to_string()))
    }

    /// Look up prefix.
    pub fn prefix(&self, prefix: &str) -> Option<PrefixId> {
        self.prefixes.lookup(prefix)
    }

    /// Add prefix.
    /// If the prefix already exists, return its id. The empty prefix is
    /// always there; any other must be an XML name without a colon.
    pub fn add_prefix(&mut self, prefix: &str) -> Result<PrefixId, Error> {
        if let Some(id) = self.prefix(prefix) {
            return Ok(id);
        }
        check_ncname(prefix)?;
        Ok(self.prefixes.intern(prefix.to_string()))
    }

    /// The empty prefix, used for the default namespace and unprefixed names.
    #[inline]
    pub fn empty_prefix(&self) -> PrefixId {
        self.empty_prefix_id
    }

    /// The namespace id for "no namespace".
    #[inline]
    pub fn no_namespace(&self) -> NamespaceId {
        self.no_namespace_id
    }

    /// The `xml` prefix.
    #[inline]
    pub fn xml_prefix(&self) -> PrefixId {
        self.xml_prefix_id
    }

    /// The namespace the `xml` prefix is always bound to.
    #[inline]
    pub fn xml_namespace(&self) -> NamespaceId {
        self.xml_namespace_id
    }

    /// The local name part of a name.
    pub fn local_name_str(&self, name: NameId) -> &str {
        &self.expanded_name(name).local
    }

    /// The namespace of a name.
    pub fn namespace_for_name(&self, name: NameId) -> NamespaceId {
        self.expanded_name(name).namespace
    }

    /// The URI of a namespace. Empty for "no namespace".
    pub fn namespace_str(&self, namespace: NamespaceId) -> &str {
        self.namespaces.resolve(namespace)
    }

    /// The text of a prefix. Empty for the empty prefix.
    pub fn prefix_str(&self, prefix: PrefixId) -> &str {
        self.prefixes.resolve(prefix)
    }

    /// Local name and namespace URI of a name.
    pub fn name_ns_str(&self, name: NameId) -> (&str, &str) {
        let name = self.expanded_name(name);
        (&name.local, self.namespace_str(name.namespace))
    }

    // prefix:local, or local for the empty prefix
    pub(crate) fn qualified_name(&self, prefix: PrefixId, name: NameId) -> String {
        let local = self.local_name_str(name);
        if prefix == self.empty_prefix_id {
            local.to_string()
        } else {
            format!("{}:{}", self.prefix_str(prefix), local)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined() {
        let dom = Dom::new();
        assert_eq!(dom.prefix_str(dom.empty_prefix()), "");
        assert_eq!(dom.prefix_str(dom.xml_prefix()), "xml");
        assert_eq!(dom.namespace_str(dom.no_namespace()), "");
        assert_eq!(
            dom.namespace_str(dom.xml_namespace()),
            "http://www.w3.org/XML/1998/namespace"
        );
        assert_eq!(dom.prefix("xmlns"), Some(dom.xmlns_prefix_id));
    }

    #[test]
    fn test_same_local_name_different_namespace() {
        let mut dom = Dom::new();
        let ns = dom.add_namespace("http://example.com").unwrap();
        let plain = dom.add_name("a").unwrap();
        let namespaced = dom.add_name_ns("a", ns).unwrap();
        assert_ne!(plain, namespaced);
        assert_eq!(dom.name_ns_str(namespaced), ("a", "http://example.com"));
        assert_eq!(dom.namespace_for_name(plain), dom.no_namespace());
    }

    #[test]
    fn test_qualified_name() {
        let mut dom = Dom::new();
        let ns = dom.add_namespace("http://example.com").unwrap();
        let name = dom.add_name_ns("root", ns).unwrap();
        let pre = dom.add_prefix("pre").unwrap();
        assert_eq!(dom.qualified_name(pre, name), "pre:root");
        assert_eq!(dom.qualified_name(dom.empty_prefix(), name), "root");
    }

    #[test]
    fn test_invalid_names_rejected() {
        let mut dom = Dom::new();
        assert!(matches!(dom.add_name("a b<"), Err(Error::InvalidName(n)) if n == "a b<"));
        assert!(dom.add_name("").is_err());
        assert!(dom.add_name("p:a").is_err());
        assert!(matches!(dom.add_prefix("1p"), Err(Error::InvalidName(_))));
        assert!(matches!(
            dom.add_namespace("http://a\u{1}"),
            Err(Error::InvalidCharacter('\u{1}'))
        ));
        // nothing was interned
        assert_eq!(dom.name("a b<"), None);
        assert_eq!(dom.prefix("1p"), None);
        // the empty prefix is predefined
        assert_eq!(dom.add_prefix("").unwrap(), dom.empty_prefix());
    }
}
