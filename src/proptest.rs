//! Generators for property tests.
//!
//! Enable with the `proptest` feature:
//!
//! ```toml
//! [dependencies]
//! xdom = { version = "0.1", features = ["proptest"] }
//! ```
//!
//! The generated documents are valid: they materialize without error and
//! survive serializing and parsing again.

use ahash::HashSet;
use proptest::prelude::*;

use crate::fixed::{
    Attribute, Content, Declaration, Document, DocumentContent, Element, Name,
    ProcessingInstruction,
};

// each prefix has one namespace, so bindings never conflict
const BINDINGS: &[(&str, &str)] = &[
    ("x", "http://example.com/x"),
    ("y", "http://example.com/y"),
];
const ELEMENT_NAMES: &[&str] = &["a", "b", "c", "d", "e"];
const ATTRIBUTE_NAMES: &[&str] = &["q", "r", "s"];
const PI_TARGETS: &[&str] = &["pi1", "pi2", "pi3"];
const TEXT: &str = "[\t\n\u{20}-\u{D7FF}\u{E000}-\u{FFFD}]{1,16}";
const COMMENT: &str = "[\t\n\u{20}-\u{2C}\u{2E}-\u{D7FF}]{0,16}";
const PI_DATA: &str = "[\u{21}-\u{3E}\u{40}-\u{D7FF}]{1,16}";

fn arb_element_name() -> impl Strategy<Value = Name> {
    (prop::sample::select(ELEMENT_NAMES), 0..BINDINGS.len() + 2).prop_map(|(local, binding)| {
        match BINDINGS.get(binding) {
            Some((prefix, namespace)) => Name::prefixed(prefix, namespace, local),
            // the last choice puts the element in a default namespace
            None if binding == BINDINGS.len() => Name {
                namespace: BINDINGS[0].1.to_string(),
                prefix: String::new(),
                local: local.to_string(),
            },
            None => Name::local(local),
        }
    })
}

fn arb_attribute() -> impl Strategy<Value = Attribute> {
    (
        prop::sample::select(ATTRIBUTE_NAMES),
        0..BINDINGS.len() + 1,
        TEXT,
    )
        .prop_map(|(local, binding, value)| Attribute {
            name: match BINDINGS.get(binding) {
                Some((prefix, namespace)) => Name::prefixed(prefix, namespace, local),
                None => Name::local(local),
            },
            value,
        })
}

fn arb_declaration() -> impl Strategy<Value = Declaration> {
    prop::sample::select(BINDINGS).prop_map(|(prefix, namespace)| Declaration {
        prefix: prefix.to_string(),
        namespace: namespace.to_string(),
    })
}

fn arb_comment() -> impl Strategy<Value = String> {
    COMMENT
}

fn arb_processing_instruction() -> impl Strategy<Value = ProcessingInstruction> {
    (
        prop::sample::select(PI_TARGETS),
        prop::option::of(PI_DATA),
    )
        .prop_map(|(target, data)| ProcessingInstruction {
            target: target.to_string(),
            data,
        })
}

fn element(
    name: Name,
    declarations: Vec<Declaration>,
    attributes: Vec<Attribute>,
    children: Vec<Content>,
) -> Element {
    let mut seen = HashSet::default();
    let declarations = declarations
        .into_iter()
        .filter(|d| seen.insert(d.prefix.clone()))
        .collect();
    let mut seen = HashSet::default();
    let attributes = attributes
        .into_iter()
        .filter(|a| seen.insert((a.name.namespace.clone(), a.name.local.clone())))
        .collect();
    Element {
        name,
        declarations,
        attributes,
        children,
    }
}

/// Generate element content, up to a few levels deep.
pub fn arb_content() -> impl Strategy<Value = Content> {
    let leaf = prop_oneof![
        TEXT.prop_map(Content::Text),
        arb_comment().prop_map(Content::Comment),
        arb_processing_instruction().prop_map(Content::ProcessingInstruction),
    ];
    leaf.prop_recursive(4, 64, 6, |inner| {
        (
            arb_element_name(),
            prop::collection::vec(arb_declaration(), 0..2),
            prop::collection::vec(arb_attribute(), 0..4),
            prop::collection::vec(inner, 0..6),
        )
            .prop_map(|(name, declarations, attributes, children)| {
                Content::Element(element(name, declarations, attributes, children))
            })
    })
}

prop_compose! {
    /// Generate an element.
    pub fn arb_element()(name in arb_element_name(),
                         declarations in prop::collection::vec(arb_declaration(), 0..2),
                         attributes in prop::collection::vec(arb_attribute(), 0..4),
                         children in prop::collection::vec(arb_content(), 0..6)) -> Element {
        element(name, declarations, attributes, children)
    }
}

fn arb_document_content() -> impl Strategy<Value = DocumentContent> {
    prop_oneof![
        arb_comment().prop_map(DocumentContent::Comment),
        arb_processing_instruction().prop_map(DocumentContent::ProcessingInstruction),
    ]
}

/// Generate a document.
///
/// ```rust,ignore
/// use proptest::prelude::*;
/// use xdom::proptest::arb_document;
///
/// proptest! {
///     #[test]
///     fn parses_what_it_serializes(fixed in arb_document()) {
///         let mut dom = xdom::Dom::new();
///         let document = fixed.materialize(&mut dom).unwrap();
///         let xml = dom.to_xml(document).unwrap();
///         let parsed = dom.parse(&xml).unwrap();
///         prop_assert!(dom.deep_equal(document, parsed));
///     }
/// }
/// ```
pub fn arb_document() -> impl Strategy<Value = Document> {
    (
        prop::collection::vec(arb_document_content(), 0..3),
        arb_element(),
        prop::collection::vec(arb_document_content(), 0..3),
    )
        .prop_map(|(before, document_element, after)| Document {
            doc_type: None,
            before,
            document_element,
            after,
        })
}
