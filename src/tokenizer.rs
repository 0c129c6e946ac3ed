use std::collections::VecDeque;

use ahash::HashMap;
use xmlparser::{ElementEnd, EntityDefinition, ExternalId, StrSpan, Token};

use crate::config::ParseOptions;
use crate::domdata::XML_NAMESPACE;
use crate::dtd::Dtd;
use crate::entity::{collapse_whitespace, normalize_line_endings, Expander, ReferenceError};
use crate::error::{ParseError, Position};
use crate::event::{Event, EventAttribute, QName};

struct OpenElement {
    name: String,
    offset: usize,
    scope_len: usize,
    element_content: bool,
}

struct StartTag {
    name: QName,
    offset: usize,
    // (name, raw value, offset)
    attributes: Vec<(QName, String, usize)>,
}

struct PendingDocType {
    name: String,
    public_id: Option<String>,
    system_id: Option<String>,
    subset_start: usize,
}

/// Turns XML text into [`Event`]s.
///
/// This wraps `xmlparser`, which only tokenizes, and adds what a namespace
/// aware parser needs on top: namespace resolution, end tag matching,
/// attribute uniqueness and entity expansion. It stops after the first
/// error.
pub(crate) struct Tokenizer<'a> {
    xml: &'a str,
    tokens: xmlparser::Tokenizer<'a>,
    options: ParseOptions,
    entities: HashMap<String, String>,
    expanded: usize,
    dtd: Dtd,
    doc_type: Option<PendingDocType>,
    // (prefix, namespace); an empty namespace undeclares the default
    scope: Vec<(String, String)>,
    stack: Vec<OpenElement>,
    start_tag: Option<StartTag>,
    text: String,
    seen_root: bool,
    queue: VecDeque<Result<Event, ParseError>>,
    started: bool,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    #[cfg(test)]
    pub(crate) fn new(xml: &'a str) -> Self {
        Self::with_options(xml, &ParseOptions::default())
    }

    pub(crate) fn with_options(xml: &'a str, options: &ParseOptions) -> Self {
        Tokenizer {
            xml,
            tokens: xmlparser::Tokenizer::from(xml),
            options: options.clone(),
            entities: HashMap::default(),
            expanded: 0,
            dtd: Dtd::default(),
            doc_type: None,
            scope: vec![("xml".to_string(), XML_NAMESPACE.to_string())],
            stack: Vec::new(),
            start_tag: None,
            text: String::new(),
            seen_root: false,
            queue: VecDeque::new(),
            started: false,
            finished: false,
        }
    }

    fn position_at(&self, offset: usize) -> Position {
        Position::from_offset(self.xml, offset)
    }

    fn token(&mut self, token: Token<'a>) -> Result<(), ParseError> {
        match token {
            Token::Declaration { version, .. } => {
                if version.as_str() != "1.0" {
                    return Err(ParseError::UnsupportedVersion {
                        version: version.as_str().to_string(),
                        position: self.position_at(version.start()),
                    });
                }
            }
            Token::DtdStart {
                name,
                external_id,
                span,
            } => {
                let (public_id, system_id) = external_ids(external_id);
                self.doc_type = Some(PendingDocType {
                    name: name.as_str().to_string(),
                    public_id,
                    system_id,
                    subset_start: span.end(),
                });
            }
            Token::EmptyDtd {
                name, external_id, ..
            } => {
                let (public_id, system_id) = external_ids(external_id);
                self.queue.push_back(Ok(Event::DocType {
                    name: name.as_str().to_string(),
                    public_id,
                    system_id,
                    internal_subset: None,
                }));
            }
            Token::EntityDeclaration {
                name, definition, ..
            } => {
                // external entities are not loaded; references to them fail
                if let EntityDefinition::EntityValue(value) = definition {
                    self.entities
                        .entry(name.as_str().to_string())
                        .or_insert_with(|| value.as_str().to_string());
                }
            }
            Token::DtdEnd { span } => {
                if let Some(doc_type) = self.doc_type.take() {
                    let subset = &self.xml[doc_type.subset_start..span.start()];
                    self.dtd = Dtd::parse(subset);
                    self.queue.push_back(Ok(Event::DocType {
                        name: doc_type.name,
                        public_id: doc_type.public_id,
                        system_id: doc_type.system_id,
                        internal_subset: Some(subset.to_string()),
                    }));
                }
            }
            Token::ElementStart {
                prefix,
                local,
                span,
            } => {
                self.flush_text()?;
                self.start_tag = Some(StartTag {
                    name: qname(prefix, local),
                    offset: span.start(),
                    attributes: Vec::new(),
                });
            }
            Token::Attribute {
                prefix,
                local,
                value,
                span,
            } => {
                if let Some(start_tag) = self.start_tag.as_mut() {
                    start_tag.attributes.push((
                        qname(prefix, local),
                        value.as_str().to_string(),
                        span.start(),
                    ));
                }
            }
            Token::ElementEnd { end, span } => match end {
                ElementEnd::Open => self.open_element(false)?,
                ElementEnd::Empty => self.open_element(true)?,
                ElementEnd::Close(prefix, local) => {
                    self.flush_text()?;
                    self.close_element(qname(prefix, local), span.start())?;
                }
            },
            Token::Text { text } => {
                self.push_text(text)?;
            }
            Token::Cdata { text, .. } => {
                self.text.push_str(&normalize_line_endings(text.as_str()));
            }
            Token::Comment { text, .. } => {
                self.flush_text()?;
                self.queue.push_back(Ok(Event::Comment(
                    normalize_line_endings(text.as_str()).into_owned(),
                )));
            }
            Token::ProcessingInstruction {
                target, content, ..
            } => {
                self.flush_text()?;
                self.queue.push_back(Ok(Event::ProcessingInstruction {
                    target: target.as_str().to_string(),
                    data: content
                        .map(|c| normalize_line_endings(c.as_str()).into_owned())
                        .filter(|c| !c.is_empty()),
                }));
            }
        }
        Ok(())
    }

    fn push_text(&mut self, text: StrSpan<'a>) -> Result<(), ParseError> {
        if self.stack.is_empty() {
            if text.as_str().trim_matches(is_xml_whitespace).is_empty() {
                return Ok(());
            }
            return Err(ParseError::TextAtTopLevel {
                position: Some(self.position_at(text.start())),
            });
        }
        let offset = text.start();
        let mut expander = Expander::new(&self.entities, &self.options, &mut self.expanded);
        let expanded = expander
            .text(text.as_str())
            .map_err(|e| reference_error(e, Position::from_offset(self.xml, offset)))?;
        self.text.push_str(&expanded);
        Ok(())
    }

    fn flush_text(&mut self) -> Result<(), ParseError> {
        if self.text.is_empty() {
            return Ok(());
        }
        let text = std::mem::take(&mut self.text);
        let whitespace = self
            .stack
            .last()
            .map(|open| open.element_content)
            .unwrap_or(false)
            && text.chars().all(is_xml_whitespace);
        self.queue
            .push_back(Ok(Event::Characters { text, whitespace }));
        Ok(())
    }

    fn open_element(&mut self, empty: bool) -> Result<(), ParseError> {
        let Some(start_tag) = self.start_tag.take() else {
            return Ok(());
        };
        if self.stack.is_empty() && self.seen_root {
            return Err(ParseError::MultipleElementsAtTopLevel {
                position: Some(self.position_at(start_tag.offset)),
            });
        }
        self.seen_root = true;
        let element_name = start_tag.name.to_string();
        let scope_len = self.scope.len();

        // declarations first, so they are in scope for the names below
        let mut declarations: Vec<(String, String)> = Vec::new();
        let mut attributes = Vec::new();
        for (name, raw, offset) in start_tag.attributes {
            let mut expander = Expander::new(&self.entities, &self.options, &mut self.expanded);
            let value = expander
                .attribute(&raw)
                .map_err(|e| reference_error(e, Position::from_offset(self.xml, offset)))?;
            let declared_prefix = if name.prefix == "xmlns" {
                Some(name.local.clone())
            } else if name.prefix.is_empty() && name.local == "xmlns" {
                Some(String::new())
            } else {
                None
            };
            match declared_prefix {
                Some(prefix) => {
                    if declarations.iter().any(|(p, _)| *p == prefix) {
                        return Err(ParseError::DuplicateAttribute {
                            name: name.to_string(),
                            position: self.position_at(offset),
                        });
                    }
                    self.check_declaration(&prefix, &value, offset)?;
                    declarations.push((prefix, value));
                }
                None => attributes.push((name, value, offset)),
            }
        }
        self.scope.extend(declarations.iter().cloned());

        let namespace = self.resolve(&start_tag.name.prefix, true, start_tag.offset)?;

        let mut resolved: Vec<EventAttribute> = Vec::with_capacity(attributes.len());
        for (name, value, offset) in attributes {
            let namespace = self.resolve(&name.prefix, false, offset)?;
            if resolved
                .iter()
                .any(|a| a.name.local == name.local && a.namespace == namespace)
            {
                return Err(ParseError::DuplicateAttribute {
                    name: name.to_string(),
                    position: self.position_at(offset),
                });
            }
            let attribute_type = self
                .dtd
                .attribute_type(&element_name, &name.to_string());
            let value = if attribute_type.is_tokenized() {
                collapse_whitespace(&value)
            } else {
                value
            };
            resolved.push(EventAttribute {
                name,
                namespace,
                value,
                attribute_type,
            });
        }

        let element_content = self.dtd.has_element_content(&element_name);
        self.queue.push_back(Ok(Event::StartElement {
            name: start_tag.name,
            namespace,
            declarations,
            attributes: resolved,
        }));
        if empty {
            self.scope.truncate(scope_len);
            self.queue.push_back(Ok(Event::EndElement));
        } else {
            self.stack.push(OpenElement {
                name: element_name,
                offset: start_tag.offset,
                scope_len,
                element_content,
            });
        }
        Ok(())
    }

    fn check_declaration(&self, prefix: &str, namespace: &str, offset: usize) -> Result<(), ParseError> {
        let message = if prefix == "xmlns" {
            Some("the xmlns prefix cannot be declared")
        } else if prefix == "xml" && namespace != XML_NAMESPACE {
            Some("the xml prefix cannot be rebound")
        } else if prefix != "xml" && namespace == XML_NAMESPACE {
            Some("the xml namespace cannot be bound to another prefix")
        } else if !prefix.is_empty() && namespace.is_empty() {
            Some("a prefix cannot be undeclared")
        } else {
            None
        };
        match message {
            Some(message) => Err(ParseError::Syntax {
                message: message.to_string(),
                position: self.position_at(offset),
            }),
            None => Ok(()),
        }
    }

    // unprefixed attributes are in no namespace; unprefixed elements take
    // the default namespace
    fn resolve(&self, prefix: &str, is_element: bool, offset: usize) -> Result<String, ParseError> {
        if prefix.is_empty() && !is_element {
            return Ok(String::new());
        }
        match self.scope.iter().rev().find(|(p, _)| p == prefix) {
            Some((_, namespace)) => Ok(namespace.clone()),
            None if prefix.is_empty() => Ok(String::new()),
            None => Err(ParseError::UnknownPrefix {
                prefix: prefix.to_string(),
                position: self.position_at(offset),
            }),
        }
    }

    fn close_element(&mut self, name: QName, offset: usize) -> Result<(), ParseError> {
        let found = name.to_string();
        let Some(open) = self.stack.pop() else {
            return Err(ParseError::InvalidCloseTag {
                expected: String::new(),
                found,
                position: self.position_at(offset),
            });
        };
        if open.name != found {
            return Err(ParseError::InvalidCloseTag {
                expected: open.name,
                found,
                position: self.position_at(offset),
            });
        }
        self.scope.truncate(open.scope_len);
        self.queue.push_back(Ok(Event::EndElement));
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ParseError> {
        if let Some(open) = self.stack.last() {
            return Err(ParseError::UnclosedTag {
                name: open.name.clone(),
                position: self.position_at(open.offset),
            });
        }
        if !self.seen_root {
            return Err(ParseError::NoElementAtTopLevel {
                position: Some(self.position_at(self.xml.len())),
            });
        }
        self.queue.push_back(Ok(Event::EndDocument));
        Ok(())
    }

    fn fail(&mut self, error: ParseError) {
        self.queue.push_back(Err(error));
        self.finished = true;
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Event, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(event) = self.queue.pop_front() {
                return Some(event);
            }
            if self.finished {
                return None;
            }
            if !self.started {
                self.started = true;
                return Some(Ok(Event::StartDocument));
            }
            let result = match self.tokens.next() {
                None => {
                    self.finished = true;
                    self.finish()
                }
                Some(Err(e)) => Err(e.into()),
                Some(Ok(token)) => self.token(token),
            };
            if let Err(error) = result {
                self.fail(error);
            }
        }
    }
}

fn qname(prefix: StrSpan, local: StrSpan) -> QName {
    QName::prefixed(prefix.as_str(), local.as_str())
}

fn external_ids(external_id: Option<ExternalId>) -> (Option<String>, Option<String>) {
    match external_id {
        Some(ExternalId::System(system)) => (None, Some(system.as_str().to_string())),
        Some(ExternalId::Public(public, system)) => (
            Some(public.as_str().to_string()),
            Some(system.as_str().to_string()),
        ),
        None => (None, None),
    }
}

fn reference_error(error: ReferenceError, position: Position) -> ParseError {
    match error {
        ReferenceError::Unclosed(entity) => ParseError::UnclosedEntity { entity, position },
        ReferenceError::Invalid(entity) => ParseError::InvalidEntity { entity, position },
        ReferenceError::Limit(entity) => ParseError::EntityExpansionLimit { entity, position },
    }
}

fn is_xml_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(xml: &str) -> Vec<Event> {
        Tokenizer::new(xml).collect::<Result<Vec<_>, _>>().unwrap()
    }

    fn error(xml: &str) -> ParseError {
        Tokenizer::new(xml)
            .find_map(|event| event.err())
            .unwrap()
    }

    #[test]
    fn test_simple_element() {
        assert_eq!(
            events("<a>text</a>"),
            vec![
                Event::StartDocument,
                Event::StartElement {
                    name: QName::local("a"),
                    namespace: String::new(),
                    declarations: vec![],
                    attributes: vec![],
                },
                Event::Characters {
                    text: "text".to_string(),
                    whitespace: false,
                },
                Event::EndElement,
                Event::EndDocument,
            ]
        );
    }

    #[test]
    fn test_namespaces_resolved() {
        let events = events(r#"<p:a xmlns:p="http://p" xmlns="http://d" p:x="1" y="2"><b/></p:a>"#);
        match &events[1] {
            Event::StartElement {
                name,
                namespace,
                declarations,
                attributes,
            } => {
                assert_eq!(name, &QName::prefixed("p", "a"));
                assert_eq!(namespace, "http://p");
                assert_eq!(
                    declarations,
                    &vec![
                        ("p".to_string(), "http://p".to_string()),
                        (String::new(), "http://d".to_string())
                    ]
                );
                assert_eq!(attributes[0].namespace, "http://p");
                assert_eq!(attributes[1].namespace, "");
            }
            _ => panic!("expected start element"),
        }
        match &events[2] {
            Event::StartElement { namespace, .. } => assert_eq!(namespace, "http://d"),
            _ => panic!("expected start element"),
        }
    }

    #[test]
    fn test_default_namespace_undeclared() {
        let events = events(r#"<a xmlns="http://d"><b xmlns=""/></a>"#);
        match &events[2] {
            Event::StartElement { namespace, .. } => assert_eq!(namespace, ""),
            _ => panic!("expected start element"),
        }
    }

    #[test]
    fn test_text_and_cdata_merge() {
        let events = events("<a>x &amp; <![CDATA[<y>]]>z</a>");
        assert_eq!(
            events[2],
            Event::Characters {
                text: "x & <y>z".to_string(),
                whitespace: false,
            }
        );
    }

    #[test]
    fn test_comment_and_pi_line_endings() {
        let events = events("<a><!--x\r\ny\rz--><?p a\r\nb?></a>");
        assert_eq!(events[2], Event::Comment("x\ny\nz".to_string()));
        assert_eq!(
            events[3],
            Event::ProcessingInstruction {
                target: "p".to_string(),
                data: Some("a\nb".to_string()),
            }
        );
    }

    #[test]
    fn test_element_content_whitespace() {
        let events = events(
            "<!DOCTYPE list [<!ELEMENT list (item)*>]><list>\n  <item> </item>\n</list>",
        );
        let characters = events
            .iter()
            .filter_map(|e| match e {
                Event::Characters { whitespace, .. } => Some(*whitespace),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(characters, vec![true, false, true]);
    }

    #[test]
    fn test_doc_type() {
        let events = events(r#"<!DOCTYPE a SYSTEM "a.dtd" [<!ENTITY e "E">]><a>&e;</a>"#);
        assert_eq!(
            events[1],
            Event::DocType {
                name: "a".to_string(),
                public_id: None,
                system_id: Some("a.dtd".to_string()),
                internal_subset: Some(r#"<!ENTITY e "E">"#.to_string()),
            }
        );
        assert_eq!(
            events[3],
            Event::Characters {
                text: "E".to_string(),
                whitespace: false,
            }
        );
    }

    #[test]
    fn test_tokenized_attribute_collapsed() {
        let events = events(
            r#"<!DOCTYPE a [<!ATTLIST a ids IDREFS #IMPLIED t CDATA #IMPLIED>]><a ids="  x   y " t=" x  y "/>"#,
        );
        match &events[2] {
            Event::StartElement { attributes, .. } => {
                assert_eq!(attributes[0].value, "x y");
                assert_eq!(attributes[0].attribute_type, crate::AttributeType::IdRefs);
                assert_eq!(attributes[1].value, " x  y ");
            }
            _ => panic!("expected start element"),
        }
    }

    #[test]
    fn test_mismatched_end_tag() {
        assert!(matches!(
            error("<a><b></a>"),
            ParseError::InvalidCloseTag { expected, found, position }
                if expected == "b" && found == "a" && position == Position::new(1, 7)
        ));
    }

    #[test]
    fn test_unknown_prefix() {
        assert!(matches!(
            error("<a>\n  <p:b/></a>"),
            ParseError::UnknownPrefix { prefix, position }
                if prefix == "p" && position == Position::new(2, 3)
        ));
    }

    #[test]
    fn test_duplicate_expanded_attribute() {
        assert!(matches!(
            error(r#"<a xmlns:p="http://x" xmlns:q="http://x" p:b="1" q:b="2"/>"#),
            ParseError::DuplicateAttribute { name, .. } if name == "q:b"
        ));
    }

    #[test]
    fn test_unsupported_version() {
        assert!(matches!(
            error(r#"<?xml version="1.1"?><a/>"#),
            ParseError::UnsupportedVersion { version, .. } if version == "1.1"
        ));
    }

    #[test]
    fn test_unknown_entity() {
        assert!(matches!(
            error("<a>&nope;</a>"),
            ParseError::InvalidEntity { entity, .. } if entity == "nope"
        ));
    }

    #[test]
    fn test_no_element() {
        assert!(matches!(
            error("<!-- only a comment -->"),
            ParseError::NoElementAtTopLevel { .. }
        ));
    }

    #[test]
    fn test_rebinding_xml_prefix() {
        assert!(matches!(
            error(r#"<a xmlns:xml="http://other"/>"#),
            ParseError::Syntax { .. }
        ));
    }

    #[test]
    fn test_stops_after_error() {
        let results = Tokenizer::new("<a><b></a>").collect::<Vec<_>>();
        assert!(results.last().unwrap().is_err());
        assert_eq!(results.iter().filter(|r| r.is_err()).count(), 1);
    }
}
