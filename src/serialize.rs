use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::domdata::{Dom, Node};
use crate::encoding::Charset;
use crate::error::Error;
use crate::output::{EncodedOutput, Parameters, XmlSerializer};
use crate::xmlvalue::Value;

/// ## Serialization
impl Dom {
    /// Serialize a node to a string in canonical form.
    ///
    /// There is no XML declaration. The items of a document (document
    /// type declaration, comments, processing instructions and the
    /// document element) are separated by newlines. Namespace declarations
    /// are added where an element uses a prefix that is not declared, so a
    /// fragment serializes to well-formed XML.
    ///
    /// ```rust
    /// let mut dom = xdom::Dom::new();
    /// let document = dom.parse(r#"<a xmlns:p="http://example.com"><p:b/></a>"#).unwrap();
    /// let a = dom.document_element(document).unwrap();
    /// let b = dom.first_child(a).unwrap();
    /// assert_eq!(dom.to_xml(b).unwrap(), r#"<p:b xmlns:p="http://example.com"/>"#);
    /// ```
    pub fn to_xml(&self, node: Node) -> Result<String, Error> {
        let mut serializer = XmlSerializer::new(self, String::new());
        serializer.serialize(node)?;
        Ok(serializer.into_output())
    }

    /// Serialize a node as bytes in a charset.
    ///
    /// The charset is resolved first; an unknown name fails with
    /// [`Error::UnsupportedEncoding`] before anything is written. Characters
    /// in text and attribute values that the charset lacks are written as
    /// character references. Such a character in markup, such as a name or
    /// a comment, fails with [`Error::UnrepresentableCharacter`].
    ///
    /// Everything is written through a buffer which is flushed before the
    /// writer is handed back. On error the writer is dropped.
    ///
    /// ```rust
    /// use xdom::output::Parameters;
    ///
    /// let mut dom = xdom::Dom::new();
    /// let document = dom.parse("<a>\u{e9}\u{20ac}</a>").unwrap();
    /// let parameters = Parameters {
    ///     encoding: "ISO-8859-1".to_string(),
    ///     ..Default::default()
    /// };
    /// let bytes = dom.serialize(document, &parameters, Vec::new()).unwrap();
    /// assert_eq!(
    ///     bytes,
    ///     b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n<a>\xe9&#x20AC;</a>\n"
    /// );
    /// ```
    pub fn serialize<W: Write>(
        &self,
        node: Node,
        parameters: &Parameters,
        writer: W,
    ) -> Result<W, Error> {
        let charset = Charset::for_label(&parameters.encoding)?;
        debug!(encoding = charset.name(), "serializing");
        let output = EncodedOutput::new(charset, BufWriter::new(writer));
        let mut serializer = XmlSerializer::new(self, output);
        if parameters.declaration {
            serializer.markup(&format!(
                "<?xml version=\"1.0\" encoding=\"{}\"?>\n",
                charset.name()
            ))?;
        }
        serializer.serialize(node)?;
        serializer.markup("\n")?;
        let mut writer = serializer.into_output().finish()?;
        writer.flush()?;
        writer.into_inner().map_err(|e| Error::Io(e.into_error()))
    }

    /// Serialize a node to a byte vector. See [`Dom::serialize`].
    pub fn serialize_to_vec(&self, node: Node, parameters: &Parameters) -> Result<Vec<u8>, Error> {
        self.serialize(node, parameters, Vec::new())
    }

    /// Serialize a node to a file, creating or truncating it. See
    /// [`Dom::serialize`].
    ///
    /// Returns once the data has reached the disk.
    pub fn serialize_to_file<P: AsRef<Path>>(
        &self,
        node: Node,
        parameters: &Parameters,
        path: P,
    ) -> Result<(), Error> {
        let file = File::create(path)?;
        let file = self.serialize(node, parameters, file)?;
        file.sync_all()?;
        Ok(())
    }

    /// A human readable outline of a tree, one node per line.
    ///
    /// This is meant for debugging and tests, not for round-tripping.
    ///
    /// ```rust
    /// let mut dom = xdom::Dom::new();
    /// let document = dom.parse(r#"<a b="1">text<!--c--></a>"#).unwrap();
    /// assert_eq!(
    ///     dom.summary(document),
    ///     "document\n  element a\n    attribute b=\"1\"\n    text \"text\"\n    comment \"c\"\n"
    /// );
    /// ```
    pub fn summary(&self, node: Node) -> String {
        let mut summary = String::new();
        self.summarize(node, 0, &mut summary);
        summary
    }

    fn summarize(&self, node: Node, depth: usize, summary: &mut String) {
        let indent = "  ".repeat(depth);
        // writing to a String does not fail
        let _ = match self.value(node) {
            Value::Document => writeln!(summary, "{}document", indent),
            Value::Element(element) => {
                let namespace = self.namespace_str(self.namespace_for_name(element.name()));
                let name = self.qualified_name(element.prefix(), element.name());
                if namespace.is_empty() {
                    writeln!(summary, "{}element {}", indent, name)
                } else {
                    writeln!(summary, "{}element {} {{{}}}", indent, name, namespace)
                }
            }
            Value::Attribute(attribute) => writeln!(
                summary,
                "{}attribute {}={:?}",
                indent,
                self.qualified_name(attribute.prefix(), attribute.name()),
                attribute.value()
            ),
            Value::Namespace(namespace) => writeln!(
                summary,
                "{}namespace {}={:?}",
                indent,
                self.prefix_str(namespace.prefix()),
                self.namespace_str(namespace.namespace())
            ),
            Value::Text(text) => writeln!(summary, "{}text {:?}", indent, text.get()),
            Value::Comment(comment) => writeln!(summary, "{}comment {:?}", indent, comment.get()),
            Value::ProcessingInstruction(pi) => writeln!(
                summary,
                "{}processing-instruction {} {:?}",
                indent,
                pi.target(),
                pi.data().unwrap_or("")
            ),
            Value::DocType(doc_type) => {
                writeln!(summary, "{}doctype {}", indent, doc_type.root_name())
            }
        };
        for attribute in self.attributes(node) {
            self.summarize(attribute, depth + 1, summary);
        }
        for child in self.children(node) {
            self.summarize(child, depth + 1, summary);
        }
    }
}
