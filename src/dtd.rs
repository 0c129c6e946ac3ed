// Reads the declarations from the internal DTD subset that affect how
// content is reported: element content models (whitespace in element-only
// content is insignificant) and attribute types (tokenized values are
// whitespace-collapsed). Entity declarations are handled by the tokenizer.

use ahash::{HashMap, HashSet};

use crate::xmlvalue::AttributeType;

#[derive(Debug, Default)]
pub(crate) struct Dtd {
    element_content: HashSet<String>,
    attribute_types: HashMap<(String, String), AttributeType>,
}

impl Dtd {
    pub(crate) fn parse(subset: &str) -> Self {
        let mut dtd = Dtd::default();
        let mut scanner = Scanner::new(subset);
        while !scanner.is_eof() {
            scanner.skip_whitespace();
            if scanner.eat("<!--") {
                scanner.skip_past("-->");
            } else if scanner.eat("<?") {
                scanner.skip_past("?>");
            } else if scanner.eat("<!ELEMENT") {
                dtd.element_declaration(&mut scanner);
            } else if scanner.eat("<!ATTLIST") {
                dtd.attribute_list_declaration(&mut scanner);
            } else if scanner.eat("<!") {
                scanner.skip_declaration();
            } else {
                scanner.advance();
            }
        }
        dtd
    }

    /// Whether the element was declared with element-only content.
    pub(crate) fn has_element_content(&self, element: &str) -> bool {
        self.element_content.contains(element)
    }

    pub(crate) fn attribute_type(&self, element: &str, attribute: &str) -> AttributeType {
        self.attribute_types
            .get(&(element.to_string(), attribute.to_string()))
            .copied()
            .unwrap_or_default()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.element_content.is_empty() && self.attribute_types.is_empty()
    }

    fn element_declaration(&mut self, scanner: &mut Scanner) {
        scanner.skip_whitespace();
        let name = scanner.name().to_string();
        scanner.skip_whitespace();
        let content = scanner.until('>');
        let content = content.trim();
        if content.starts_with('(') && !content.contains("#PCDATA") {
            self.element_content.insert(name);
        }
    }

    fn attribute_list_declaration(&mut self, scanner: &mut Scanner) {
        scanner.skip_whitespace();
        let element = scanner.name().to_string();
        loop {
            scanner.skip_whitespace();
            if scanner.is_eof() || scanner.eat(">") {
                return;
            }
            let attribute = scanner.name().to_string();
            if attribute.is_empty() {
                // malformed; give up on this declaration
                scanner.skip_declaration();
                return;
            }
            scanner.skip_whitespace();
            let attribute_type = if scanner.eat("(") {
                scanner.until(')');
                AttributeType::Enumeration
            } else {
                match scanner.name() {
                    "CDATA" => AttributeType::Cdata,
                    "ID" => AttributeType::Id,
                    "IDREF" => AttributeType::IdRef,
                    "IDREFS" => AttributeType::IdRefs,
                    "ENTITY" => AttributeType::Entity,
                    "ENTITIES" => AttributeType::Entities,
                    "NMTOKEN" => AttributeType::NmToken,
                    "NMTOKENS" => AttributeType::NmTokens,
                    "NOTATION" => {
                        scanner.skip_whitespace();
                        if scanner.eat("(") {
                            scanner.until(')');
                        }
                        AttributeType::Notation
                    }
                    _ => AttributeType::Undeclared,
                }
            };
            scanner.skip_whitespace();
            if scanner.eat("#FIXED") {
                scanner.skip_whitespace();
                scanner.quoted();
            } else if scanner.eat("#") {
                scanner.name();
            } else {
                scanner.quoted();
            }
            // the first declaration of an attribute is binding
            self.attribute_types
                .entry((element.clone(), attribute))
                .or_insert(attribute_type);
        }
    }
}

struct Scanner<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Scanner { text, position: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.position..]
    }

    fn is_eof(&self) -> bool {
        self.position >= self.text.len()
    }

    fn advance(&mut self) {
        if let Some(c) = self.rest().chars().next() {
            self.position += c.len_utf8();
        }
    }

    fn eat(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.position += s.len();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
        self.position += rest.len() - trimmed.len();
    }

    fn skip_past(&mut self, end: &str) {
        match self.rest().find(end) {
            Some(index) => self.position += index + end.len(),
            None => self.position = self.text.len(),
        }
    }

    // consumes up to and including `end`, returns what came before it
    fn until(&mut self, end: char) -> &'a str {
        let rest = self.rest();
        match rest.find(end) {
            Some(index) => {
                self.position += index + end.len_utf8();
                &rest[..index]
            }
            None => {
                self.position = self.text.len();
                rest
            }
        }
    }

    fn name(&mut self) -> &'a str {
        let rest = self.rest();
        let end = rest
            .find(|c: char| c.is_ascii_whitespace() || "()|,>?*+\"'".contains(c))
            .unwrap_or(rest.len());
        self.position += end;
        &rest[..end]
    }

    fn quoted(&mut self) -> Option<&'a str> {
        if self.eat("\"") {
            Some(self.until('"'))
        } else if self.eat("'") {
            Some(self.until('\''))
        } else {
            None
        }
    }

    // skips to the closing `>` of a declaration, stepping over quoted strings
    fn skip_declaration(&mut self) {
        while !self.is_eof() {
            if self.quoted().is_some() {
                continue;
            }
            if self.eat(">") {
                return;
            }
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_content() {
        let dtd = Dtd::parse(
            r#"
            <!ELEMENT list (item)*>
            <!ELEMENT item (#PCDATA|b)*>
            <!ELEMENT empty EMPTY>
            <!ELEMENT any ANY>
            "#,
        );
        assert!(dtd.has_element_content("list"));
        assert!(!dtd.has_element_content("item"));
        assert!(!dtd.has_element_content("empty"));
        assert!(!dtd.has_element_content("any"));
    }

    #[test]
    fn test_attribute_types() {
        let dtd = Dtd::parse(
            r#"
            <!-- a comment with <!ATTLIST in it -->
            <!ENTITY e "<!ATTLIST fake x ID #IMPLIED>">
            <!ATTLIST item
                id ID #REQUIRED
                refs IDREFS #IMPLIED
                kind (a|b) "a"
                note CDATA #FIXED "x > y"
                format NOTATION (gif|png) #IMPLIED>
            <!ATTLIST item id CDATA #IMPLIED>
            "#,
        );
        assert_eq!(dtd.attribute_type("item", "id"), AttributeType::Id);
        assert_eq!(dtd.attribute_type("item", "refs"), AttributeType::IdRefs);
        assert_eq!(dtd.attribute_type("item", "kind"), AttributeType::Enumeration);
        assert_eq!(dtd.attribute_type("item", "note"), AttributeType::Cdata);
        assert_eq!(dtd.attribute_type("item", "format"), AttributeType::Notation);
        assert_eq!(dtd.attribute_type("item", "other"), AttributeType::Undeclared);
        assert_eq!(dtd.attribute_type("fake", "x"), AttributeType::Undeclared);
    }

    #[test]
    fn test_empty() {
        assert!(Dtd::parse("").is_empty());
        assert!(Dtd::parse("<!ENTITY a 'b'>").is_empty());
    }
}
