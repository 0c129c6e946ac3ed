use std::borrow::Cow;

use ahash::HashMap;

use crate::config::ParseOptions;
use crate::xmlchar::is_xml_char;

// Reference problems, without position; the tokenizer adds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ReferenceError {
    Unclosed(String),
    Invalid(String),
    Limit(String),
}

/// Expands entity and character references in text and attribute values.
///
/// Internal general entities come from the internal DTD subset. Their
/// replacement text is treated as character data: markup inside it is
/// rejected.
///
/// `expanded` counts the replacement text produced so far, across all
/// expanders of one document.
pub(crate) struct Expander<'a> {
    entities: &'a HashMap<String, String>,
    options: &'a ParseOptions,
    expanded: &'a mut usize,
}

impl<'a> Expander<'a> {
    pub(crate) fn new(
        entities: &'a HashMap<String, String>,
        options: &'a ParseOptions,
        expanded: &'a mut usize,
    ) -> Self {
        Expander {
            entities,
            options,
            expanded,
        }
    }

    /// Expand references in character data.
    pub(crate) fn text<'t>(&mut self, raw: &'t str) -> Result<Cow<'t, str>, ReferenceError> {
        let normalized = normalize_line_endings(raw);
        if !normalized.contains('&') {
            return Ok(normalized);
        }
        let mut result = String::with_capacity(normalized.len());
        self.expand(&normalized, 0, false, &mut result)?;
        Ok(result.into())
    }

    /// Expand references in an attribute value and normalize its whitespace.
    pub(crate) fn attribute(&mut self, raw: &str) -> Result<String, ReferenceError> {
        let normalized = normalize_line_endings(raw);
        let mut result = String::with_capacity(normalized.len());
        self.expand(&normalized, 0, true, &mut result)?;
        Ok(result)
    }

    fn expand(
        &mut self,
        content: &str,
        depth: usize,
        in_attribute: bool,
        result: &mut String,
    ) -> Result<(), ReferenceError> {
        let mut chars = content.chars();
        while let Some(c) = chars.next() {
            match c {
                '&' => {
                    let mut entity = String::new();
                    let mut is_complete = false;
                    for c in chars.by_ref() {
                        if c == ';' {
                            is_complete = true;
                            break;
                        }
                        entity.push(c);
                    }
                    if !is_complete {
                        return Err(ReferenceError::Unclosed(entity));
                    }
                    self.reference(&entity, depth, in_attribute, result)?;
                }
                '\t' | '\n' | '\r' if in_attribute => result.push(' '),
                '<' if depth > 0 => return Err(ReferenceError::Invalid(c.to_string())),
                _ => result.push(c),
            }
        }
        Ok(())
    }

    fn reference(
        &mut self,
        entity: &str,
        depth: usize,
        in_attribute: bool,
        result: &mut String,
    ) -> Result<(), ReferenceError> {
        if let Some(number) = entity.strip_prefix('#') {
            let c = parse_char_reference(number)
                .ok_or_else(|| ReferenceError::Invalid(entity.to_string()))?;
            result.push(c);
            return Ok(());
        }
        match entity {
            "amp" => result.push('&'),
            "apos" => result.push('\''),
            "gt" => result.push('>'),
            "lt" => result.push('<'),
            "quot" => result.push('"'),
            _ => {
                let replacement = self
                    .entities
                    .get(entity)
                    .ok_or_else(|| ReferenceError::Invalid(entity.to_string()))?;
                if depth + 1 > self.options.max_entity_depth {
                    return Err(ReferenceError::Limit(entity.to_string()));
                }
                *self.expanded += replacement.len();
                if *self.expanded > self.options.max_entity_expansion {
                    return Err(ReferenceError::Limit(entity.to_string()));
                }
                let replacement = normalize_line_endings(replacement);
                self.expand(&replacement, depth + 1, in_attribute, result)
                    .map_err(|e| match e {
                        // report the entity that was referenced in the document
                        ReferenceError::Invalid(inner) if inner == "<" => {
                            ReferenceError::Invalid(entity.to_string())
                        }
                        e => e,
                    })?;
            }
        }
        Ok(())
    }
}

fn parse_char_reference(number: &str) -> Option<char> {
    let code = if let Some(hex) = number.strip_prefix('x') {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        number.parse::<u32>().ok()?
    };
    char::from_u32(code).filter(|c| is_xml_char(*c))
}

/// `\r\n` and lone `\r` become `\n`.
pub(crate) fn normalize_line_endings(content: &str) -> Cow<str> {
    if !content.contains('\r') {
        return Cow::Borrowed(content);
    }
    Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Collapse runs of spaces and trim, for tokenized attribute types.
pub(crate) fn collapse_whitespace(value: &str) -> String {
    value.split(' ').filter(|s| !s.is_empty()).collect::<Vec<_>>().join(" ")
}

pub(crate) fn serialize_text(content: Cow<str>) -> Cow<str> {
    escape(content, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '\r' => Some("&#xD;"),
        _ => None,
    })
}

pub(crate) fn serialize_attribute(content: Cow<str>) -> Cow<str> {
    escape(content, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\t' => Some("&#x9;"),
        '\n' => Some("&#xA;"),
        '\r' => Some("&#xD;"),
        _ => None,
    })
}

fn escape(content: Cow<str>, replacement: impl Fn(char) -> Option<&'static str>) -> Cow<str> {
    if !content.chars().any(|c| replacement(c).is_some()) {
        return content;
    }
    let mut result = String::with_capacity(content.len() + 8);
    for c in content.chars() {
        match replacement(c) {
            Some(escaped) => result.push_str(escaped),
            None => result.push(c),
        }
    }
    result.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expander_text(entities: &HashMap<String, String>, text: &str) -> Result<String, ReferenceError> {
        let options = ParseOptions::default();
        let mut expanded = 0;
        let mut expander = Expander::new(entities, &options, &mut expanded);
        expander.text(text).map(|s| s.into_owned())
    }

    #[test]
    fn test_parse() {
        let entities = HashMap::default();
        assert_eq!(expander_text(&entities, "A &amp; B").unwrap(), "A & B");
    }

    #[test]
    fn test_parse_multiple() {
        let entities = HashMap::default();
        assert_eq!(
            expander_text(&entities, "&amp;&apos;&gt;&lt;&quot;").unwrap(),
            "&'><\""
        );
    }

    #[test]
    fn test_parse_character_references() {
        let entities = HashMap::default();
        assert_eq!(
            expander_text(&entities, "&#65;&#x42;&#x85;").unwrap(),
            "AB\u{85}"
        );
        assert_eq!(
            expander_text(&entities, "&#0;"),
            Err(ReferenceError::Invalid("#0".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_entity() {
        let entities = HashMap::default();
        assert_eq!(
            expander_text(&entities, "&unknown;"),
            Err(ReferenceError::Invalid("unknown".to_string()))
        );
    }

    #[test]
    fn test_parse_unfinished_entity() {
        let entities = HashMap::default();
        assert_eq!(
            expander_text(&entities, "&amp"),
            Err(ReferenceError::Unclosed("amp".to_string()))
        );
    }

    #[test]
    fn test_parse_no_entities() {
        let entities = HashMap::default();
        let options = ParseOptions::default();
        let mut expanded = 0;
        let mut expander = Expander::new(&entities, &options, &mut expanded);
        let text = "hello";
        let result = expander.text(text).unwrap();
        // this is the same slice
        assert!(std::ptr::eq(text, result.as_ref()));
    }

    #[test]
    fn test_internal_entities_nest() {
        let mut entities = HashMap::default();
        entities.insert("inner".to_string(), "world".to_string());
        entities.insert("outer".to_string(), "hello &inner;".to_string());
        assert_eq!(expander_text(&entities, "&outer;!").unwrap(), "hello world!");
    }

    #[test]
    fn test_entity_depth_limit() {
        let mut entities = HashMap::default();
        entities.insert("a".to_string(), "&a;".to_string());
        assert_eq!(
            expander_text(&entities, "&a;"),
            Err(ReferenceError::Limit("a".to_string()))
        );
    }

    #[test]
    fn test_entity_expansion_limit() {
        let mut entities = HashMap::default();
        entities.insert("big".to_string(), "x".repeat(100));
        let options = ParseOptions {
            max_entity_expansion: 250,
            ..Default::default()
        };
        let mut expanded = 0;
        let mut expander = Expander::new(&entities, &options, &mut expanded);
        assert!(expander.text("&big;&big;").is_ok());
        let mut expander = Expander::new(&entities, &options, &mut expanded);
        assert_eq!(
            expander.text("&big;").map(|s| s.into_owned()),
            Err(ReferenceError::Limit("big".to_string()))
        );
    }

    #[test]
    fn test_attribute_whitespace() {
        let entities = HashMap::default();
        let options = ParseOptions::default();
        let mut expanded = 0;
        let mut expander = Expander::new(&entities, &options, &mut expanded);
        assert_eq!(expander.attribute("a\tb\r\nc&#xA;d").unwrap(), "a b c\nd");
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a   b c "), "a b c");
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serialize_text("A & B > C\r".into()), "A &amp; B &gt; C&#xD;");
    }

    #[test]
    fn test_serialize_attribute() {
        assert_eq!(
            serialize_attribute("\"a\"\t<b>\n".into()),
            "&quot;a&quot;&#x9;&lt;b&gt;&#xA;"
        );
    }

    #[test]
    fn test_serialize_no_entities() {
        let text = "hello";
        let result = serialize_text(text.into());
        // this is the same slice
        assert!(std::ptr::eq(text, result.as_ref()));
    }
}
