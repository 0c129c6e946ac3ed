/// Options for parsing text.
///
/// They bound the expansion of internal entities declared in the DTD
/// subset, so that a small document cannot expand into a huge one.
///
/// ```rust
/// let options = xdom::ParseOptions {
///     max_entity_depth: 2,
///     ..Default::default()
/// };
/// let mut dom = xdom::Dom::new();
/// let xml = r#"<!DOCTYPE a [<!ENTITY x "1"><!ENTITY y "&x;"><!ENTITY z "&y;">]><a>&z;</a>"#;
/// assert!(dom.parse_with_options(xml, &options).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOptions {
    /// How deep entity references may nest.
    pub max_entity_depth: usize,
    /// How many bytes of replacement text entities may produce in total.
    pub max_entity_expansion: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_entity_depth: 8,
            max_entity_expansion: 1024 * 1024,
        }
    }
}
