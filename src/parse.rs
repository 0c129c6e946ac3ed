use tracing::debug;

use crate::config::ParseOptions;
use crate::domdata::{Dom, Node};
use crate::encoding::Charset;
use crate::error::Error;
use crate::factory::{IdentityFactory, NodeFactory};
use crate::tokenizer::Tokenizer;

/// ## Parsing
///
/// Parsing tokenizes the text and feeds the events to the builder on the
/// same thread. To tokenize on another thread, see
/// [`spawn_tokenizer`](crate::spawn_tokenizer).
impl Dom {
    /// Parse a string containing XML into a document node.
    ///
    /// ```rust
    /// let mut dom = xdom::Dom::new();
    /// let document = dom.parse("<p>Example</p>").unwrap();
    /// assert_eq!(dom.to_xml(document).unwrap(), "<p>Example</p>");
    /// ```
    ///
    /// Malformed input is reported with its position:
    ///
    /// ```rust
    /// use xdom::{Error, ParseError, Position};
    ///
    /// let mut dom = xdom::Dom::new();
    /// let err = dom.parse("<a>\n</b>").unwrap_err();
    /// let position = err.parse_error().and_then(|e| e.position());
    /// assert_eq!(position, Some(Position::new(2, 1)));
    /// ```
    pub fn parse(&mut self, xml: &str) -> Result<Node, Error> {
        self.parse_with_options(xml, &ParseOptions::default())
    }

    /// Parse a string with options.
    pub fn parse_with_options(&mut self, xml: &str, options: &ParseOptions) -> Result<Node, Error> {
        self.parse_with_factory_and_options(xml, &mut IdentityFactory, options)
    }

    /// Parse a string, building nodes through a [`NodeFactory`].
    pub fn parse_with_factory<F>(&mut self, xml: &str, factory: &mut F) -> Result<Node, Error>
    where
        F: NodeFactory + ?Sized,
    {
        self.parse_with_factory_and_options(xml, factory, &ParseOptions::default())
    }

    /// Parse a string through a [`NodeFactory`], with options.
    pub fn parse_with_factory_and_options<F>(
        &mut self,
        xml: &str,
        factory: &mut F,
        options: &ParseOptions,
    ) -> Result<Node, Error>
    where
        F: NodeFactory + ?Sized,
    {
        self.build(Tokenizer::with_options(xml, options), factory)
    }

    /// Parse XML bytes, detecting their charset.
    ///
    /// A byte order mark or the encoding declaration determine the
    /// charset; see [`Charset::sniff`]. Without either the input must be
    /// UTF-8.
    ///
    /// ```rust
    /// let mut dom = xdom::Dom::new();
    /// let bytes = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><a>caf\xe9</a>";
    /// let document = dom.parse_bytes(bytes).unwrap();
    /// assert_eq!(dom.to_xml(document).unwrap(), "<a>caf\u{e9}</a>");
    /// ```
    pub fn parse_bytes(&mut self, bytes: &[u8]) -> Result<Node, Error> {
        let charset = Charset::sniff(bytes)?;
        self.parse_bytes_in(bytes, charset)
    }

    /// Parse XML bytes in the named charset, ignoring what the document
    /// declares.
    ///
    /// Fails with [`Error::UnsupportedEncoding`] for an unknown name.
    pub fn parse_bytes_with_encoding(&mut self, bytes: &[u8], encoding: &str) -> Result<Node, Error> {
        let charset = Charset::for_label(encoding)?;
        self.parse_bytes_in(bytes, charset)
    }

    fn parse_bytes_in(&mut self, bytes: &[u8], charset: Charset) -> Result<Node, Error> {
        debug!(encoding = charset.name(), length = bytes.len(), "decoding input");
        let xml = charset.decode(bytes)?;
        self.parse(&xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn test_parse_bytes_utf16_with_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "<a>\u{1F600}</a>".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let mut dom = Dom::new();
        let document = dom.parse_bytes(&bytes).unwrap();
        assert_eq!(dom.string_value(document), "\u{1F600}");
    }

    #[test]
    fn test_parse_bytes_invalid_utf8() {
        let mut dom = Dom::new();
        let err = dom.parse_bytes(b"<a>\xff</a>").unwrap_err();
        assert!(matches!(
            err.parse_error(),
            Some(ParseError::Decoding { .. })
        ));
    }

    #[test]
    fn test_parse_bytes_unknown_encoding() {
        let mut dom = Dom::new();
        assert!(matches!(
            dom.parse_bytes_with_encoding(b"<a/>", "no-such-charset"),
            Err(Error::UnsupportedEncoding(_))
        ));
    }

    #[test]
    fn test_failed_parse_leaves_no_nodes() {
        let mut dom = Dom::new();
        assert!(dom.parse("<a><b>text</b><c></a>").is_err());
        assert!(dom.arena().iter().all(|n| n.is_removed()));
    }
}
