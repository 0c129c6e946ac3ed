use crate::domdata::Node;
use crate::error::Error;
use crate::id::{NameId, NamespaceId, PrefixId};
use crate::xmlchar::{check_chars, check_name, check_ncname};

/// The type of the XML node.
///
/// Access it using [`Value::value_type`] or
/// [`Dom::value_type`](crate::Dom::value_type).
///
/// The `ValueType` can be used if you are interested in the type of the value
/// without needing to match on it.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ValueType {
    /// Document node that holds everything. Note that this not the same as the
    /// document element.
    Document,
    /// Document type declaration.
    DocType,
    /// Element; it has a name, a prefix, attributes and namespace declarations.
    Element,
    /// Attribute, owned by an element.
    Attribute,
    /// Namespace binding, materialized by the namespace axis.
    Namespace,
    /// Text. You can get and set the text value.
    Text,
    /// Processing instruction.
    ProcessingInstruction,
    /// Comment.
    Comment,
}

// Attribute nodes are stored in the arena as the first children of their
// element; everything after them is a normal child.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) enum ValueCategory {
    Attribute,
    Normal,
    Detached,
}

/// An XML value.
///
/// Access it using [`Dom::value`](crate::Dom::value) or mutably using
/// [`Dom::value_mut`](crate::Dom::value_mut).
#[derive(Debug, Clone)]
pub enum Value {
    /// Document node that holds everything. Note that this not the same as the
    /// document element.
    Document,
    /// Document type declaration, `<!DOCTYPE ...>`.
    DocType(DocType),
    /// Element.
    Element(Element),
    /// Attribute.
    Attribute(Attribute),
    /// Namespace binding.
    Namespace(Namespace),
    /// Text.
    Text(Text),
    /// Processing instruction.
    ProcessingInstruction(ProcessingInstruction),
    /// Comment.
    Comment(Comment),
}

impl Value {
    /// Returns the type of the XML value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Document => ValueType::Document,
            Value::DocType(_) => ValueType::DocType,
            Value::Element(_) => ValueType::Element,
            Value::Attribute(_) => ValueType::Attribute,
            Value::Namespace(_) => ValueType::Namespace,
            Value::Text(_) => ValueType::Text,
            Value::ProcessingInstruction(_) => ValueType::ProcessingInstruction,
            Value::Comment(_) => ValueType::Comment,
        }
    }

    pub(crate) fn value_category(&self) -> ValueCategory {
        match self {
            Value::Attribute(_) => ValueCategory::Attribute,
            Value::Namespace(_) | Value::Document => ValueCategory::Detached,
            _ => ValueCategory::Normal,
        }
    }

    #[inline]
    pub(crate) fn is_normal(&self) -> bool {
        self.value_category() == ValueCategory::Normal
    }

    /// True for values that never have children.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Value::Document | Value::Element(_))
    }
}

/// Namespace declarations made on an element, in declaration order.
///
/// The empty prefix declares the default namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefixes(Vec<(PrefixId, NamespaceId)>);

impl Prefixes {
    /// Create an empty set of declarations.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The namespace bound to a prefix, if declared here.
    pub fn get(&self, prefix_id: PrefixId) -> Option<NamespaceId> {
        self.0
            .iter()
            .find(|(p, _)| *p == prefix_id)
            .map(|(_, ns)| *ns)
    }

    /// Declare a prefix, returning the namespace it was bound to before.
    pub fn insert(&mut self, prefix_id: PrefixId, namespace_id: NamespaceId) -> Option<NamespaceId> {
        for (p, ns) in self.0.iter_mut() {
            if *p == prefix_id {
                return Some(std::mem::replace(ns, namespace_id));
            }
        }
        self.0.push((prefix_id, namespace_id));
        None
    }

    /// Remove a declaration.
    pub fn remove(&mut self, prefix_id: PrefixId) -> Option<NamespaceId> {
        let index = self.0.iter().position(|(p, _)| *p == prefix_id)?;
        Some(self.0.remove(index).1)
    }

    /// Whether the prefix is declared here.
    pub fn contains_key(&self, prefix_id: PrefixId) -> bool {
        self.get(prefix_id).is_some()
    }

    /// Iterate over `(prefix, namespace)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PrefixId, NamespaceId)> + '_ {
        self.0.iter().copied()
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// No declarations.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// XML element value.
///
/// Example: `<foo/>` or `<p:foo xmlns:p="http://example.com"/>`.
///
/// The attributes of an element are separate attribute nodes; see
/// [`Dom::attributes`](crate::Dom::attributes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub(crate) name_id: NameId,
    pub(crate) prefix_id: PrefixId,
    pub(crate) prefixes: Prefixes,
}

impl Element {
    pub(crate) fn new(name_id: NameId, prefix_id: PrefixId) -> Self {
        Element {
            name_id,
            prefix_id,
            prefixes: Prefixes::new(),
        }
    }

    /// The expanded name of the element.
    pub fn name(&self) -> NameId {
        self.name_id
    }

    /// The prefix the element name is written with. The empty prefix means
    /// the name is unprefixed.
    pub fn prefix(&self) -> PrefixId {
        self.prefix_id
    }

    /// The namespace declarations made on this element.
    ///
    /// This does not include declarations made on ancestors; use
    /// [`Dom::namespaces_in_scope`](crate::Dom::namespaces_in_scope) for those.
    pub fn prefixes(&self) -> &Prefixes {
        &self.prefixes
    }
}

/// The declared type of an attribute.
///
/// Attributes that are not declared in the internal DTD subset are
/// [`AttributeType::Undeclared`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeType {
    /// `CDATA`
    Cdata,
    /// `ID`
    Id,
    /// `IDREF`
    IdRef,
    /// `IDREFS`
    IdRefs,
    /// `NMTOKEN`
    NmToken,
    /// `NMTOKENS`
    NmTokens,
    /// `ENTITY`
    Entity,
    /// `ENTITIES`
    Entities,
    /// An enumeration, `(a|b|c)`.
    Enumeration,
    /// `NOTATION (a|b)`
    Notation,
    /// No declaration seen.
    #[default]
    Undeclared,
}

impl AttributeType {
    /// The keyword used for this type in an attribute-list declaration.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::Cdata => "CDATA",
            AttributeType::Id => "ID",
            AttributeType::IdRef => "IDREF",
            AttributeType::IdRefs => "IDREFS",
            AttributeType::NmToken => "NMTOKEN",
            AttributeType::NmTokens => "NMTOKENS",
            AttributeType::Entity => "ENTITY",
            AttributeType::Entities => "ENTITIES",
            AttributeType::Enumeration => "ENUMERATION",
            AttributeType::Notation => "NOTATION",
            AttributeType::Undeclared => "UNDECLARED",
        }
    }

    /// Tokenized types have their values whitespace-collapsed by the parser.
    pub fn is_tokenized(&self) -> bool {
        !matches!(self, AttributeType::Cdata | AttributeType::Undeclared)
    }
}

/// XML attribute value.
///
/// Example: `a="A"` in `<foo a="A"/>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub(crate) name_id: NameId,
    pub(crate) prefix_id: PrefixId,
    pub(crate) value: String,
    pub(crate) attribute_type: AttributeType,
}

impl Attribute {
    pub(crate) fn new(
        name_id: NameId,
        prefix_id: PrefixId,
        value: String,
        attribute_type: AttributeType,
    ) -> Self {
        Attribute {
            name_id,
            prefix_id,
            value,
            attribute_type,
        }
    }

    /// The expanded name of the attribute.
    pub fn name(&self) -> NameId {
        self.name_id
    }

    /// The prefix the attribute is written with.
    pub fn prefix(&self) -> PrefixId {
        self.prefix_id
    }

    /// The attribute value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the attribute value. It must hold only XML characters.
    pub fn set_value<S: Into<String>>(&mut self, value: S) -> Result<(), Error> {
        let value = value.into();
        check_chars(&value)?;
        self.value = value;
        Ok(())
    }

    /// The declared type.
    pub fn attribute_type(&self) -> AttributeType {
        self.attribute_type
    }

    /// Change the declared type.
    pub fn set_attribute_type(&mut self, attribute_type: AttributeType) {
        self.attribute_type = attribute_type;
    }
}

/// A namespace binding as seen from an element.
///
/// Namespace nodes are never stored in the tree; they are created by
/// [`Dom::namespace_node`](crate::Dom::namespace_node). Their parent is the
/// element they were observed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub(crate) prefix_id: PrefixId,
    pub(crate) namespace_id: NamespaceId,
    pub(crate) element: Option<Node>,
}

impl Namespace {
    /// The bound prefix. The empty prefix is the default namespace.
    pub fn prefix(&self) -> PrefixId {
        self.prefix_id
    }

    /// The namespace the prefix is bound to.
    pub fn namespace(&self) -> NamespaceId {
        self.namespace_id
    }
}

/// XML text value.
///
/// Example: `Bar` in `<foo>Bar</foo>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub(crate) text: String,
}

impl Text {
    pub(crate) fn new(text: String) -> Self {
        Text { text }
    }

    /// Get the text value.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the text value. It must hold only XML characters.
    pub fn set<S: Into<String>>(&mut self, text: S) -> Result<(), Error> {
        let text = text.into();
        check_chars(&text)?;
        self.text = text;
        Ok(())
    }
}

/// XML comment.
///
/// Example: `<!-- foo -->`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub(crate) text: String,
}

impl Comment {
    pub(crate) fn new(text: String) -> Self {
        Comment { text }
    }

    pub(crate) fn check(text: &str) -> Result<(), Error> {
        if text.contains("--") || text.ends_with('-') {
            return Err(Error::InvalidComment(text.to_string()));
        }
        check_chars(text)
    }

    /// Get the comment text.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the comment text.
    ///
    /// Rejects comments that contain `--` or end with `-`.
    pub fn set<S: Into<String>>(&mut self, text: S) -> Result<(), Error> {
        let text = text.into();
        Self::check(&text)?;
        self.text = text;
        Ok(())
    }
}

/// XML processing instruction value.
///
/// Example: `<?foo?>` or `<?foo bar?>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingInstruction {
    pub(crate) target: String,
    pub(crate) data: Option<String>,
}

impl ProcessingInstruction {
    pub(crate) fn new(target: String, data: Option<String>) -> Self {
        ProcessingInstruction { target, data }
    }

    pub(crate) fn check_target(target: &str) -> Result<(), Error> {
        if target.eq_ignore_ascii_case("xml") || check_ncname(target).is_err() {
            return Err(Error::InvalidTarget(target.to_string()));
        }
        Ok(())
    }

    pub(crate) fn check_data(data: &str) -> Result<(), Error> {
        if data.contains("?>") {
            return Err(Error::InvalidOperation(
                "processing instruction data cannot contain '?>'".into(),
            ));
        }
        check_chars(data)
    }

    /// Get processing instruction target.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Get processing instruction data.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// Set target.
    ///
    /// Rejects any target that is the string `"xml"` (or case variations) as
    /// it's reserved for XML.
    pub fn set_target<S: Into<String>>(&mut self, target: S) -> Result<(), Error> {
        let target = target.into();
        Self::check_target(&target)?;
        self.target = target;
        Ok(())
    }

    /// Set data. Empty data is the same as no data.
    pub fn set_data<S: Into<String>>(&mut self, data: Option<S>) -> Result<(), Error> {
        let data: Option<String> = data.map(Into::into).filter(|d: &String| !d.is_empty());
        if let Some(data) = &data {
            Self::check_data(data)?;
        }
        self.data = data;
        Ok(())
    }
}

/// Document type declaration.
///
/// Example: `<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "xhtml1-strict.dtd">`.
///
/// The internal subset is kept as raw text so that it survives serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocType {
    pub(crate) root_name: String,
    pub(crate) public_id: Option<String>,
    pub(crate) system_id: Option<String>,
    pub(crate) internal_subset: Option<String>,
}

impl DocType {
    pub(crate) fn new(
        root_name: String,
        public_id: Option<String>,
        system_id: Option<String>,
        internal_subset: Option<String>,
    ) -> Self {
        DocType {
            root_name,
            public_id,
            system_id,
            internal_subset,
        }
    }

    /// The declared name of the root element, including any prefix.
    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// The public identifier.
    pub fn public_id(&self) -> Option<&str> {
        self.public_id.as_deref()
    }

    /// The system identifier.
    pub fn system_id(&self) -> Option<&str> {
        self.system_id.as_deref()
    }

    /// The internal subset, without the enclosing brackets.
    pub fn internal_subset(&self) -> Option<&str> {
        self.internal_subset.as_deref()
    }

    /// Set the internal subset.
    pub fn set_internal_subset<S: Into<String>>(
        &mut self,
        internal_subset: Option<S>,
    ) -> Result<(), Error> {
        let internal_subset = internal_subset.map(Into::into);
        if let Some(subset) = &internal_subset {
            check_chars(subset)?;
        }
        self.internal_subset = internal_subset;
        Ok(())
    }

    // the root name is a qualified name; identifiers are quoted literals
    pub(crate) fn check(&self) -> Result<(), Error> {
        check_name(&self.root_name)?;
        for literal in [&self.public_id, &self.system_id, &self.internal_subset]
            .into_iter()
            .flatten()
        {
            check_chars(literal)?;
        }
        Ok(())
    }
}
