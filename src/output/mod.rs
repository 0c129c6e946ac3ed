//! Serialization parameters and the machinery behind
//! [`Dom::serialize`](crate::Dom::serialize) and
//! [`Dom::to_xml`](crate::Dom::to_xml).
mod scope;
mod xml_serializer;

use std::io::Write;

use crate::encoding::{Charset, CharsetEncoder};
use crate::error::Error;

pub(crate) use scope::Scope;
pub(crate) use xml_serializer::XmlSerializer;

/// Parameters for serializing to bytes.
///
/// ```rust
/// let parameters = xdom::output::Parameters {
///     encoding: "ISO-8859-1".to_string(),
///     ..Default::default()
/// };
/// assert!(parameters.declaration);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    /// The charset name. Any label known to [`Charset::for_label`].
    pub encoding: String,
    /// Whether to write the XML declaration. Without it, a reader has to
    /// be told the encoding unless it is UTF-8 or UTF-16.
    pub declaration: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            encoding: "UTF-8".to_string(),
            declaration: true,
        }
    }
}

/// Where serialized pieces go.
///
/// Markup must be representable as is. Content (text and attribute
/// values, already escaped for XML) may fall back to character references.
pub(crate) trait Output {
    fn markup(&mut self, text: &str) -> Result<(), Error>;
    fn content(&mut self, text: &str) -> Result<(), Error>;
}

impl Output for String {
    fn markup(&mut self, text: &str) -> Result<(), Error> {
        self.push_str(text);
        Ok(())
    }

    fn content(&mut self, text: &str) -> Result<(), Error> {
        self.push_str(text);
        Ok(())
    }
}

/// Encodes into a charset and writes to a sink.
pub(crate) struct EncodedOutput<W: Write> {
    encoder: CharsetEncoder,
    scratch: Vec<u8>,
    writer: W,
}

impl<W: Write> EncodedOutput<W> {
    pub(crate) fn new(charset: Charset, writer: W) -> Self {
        EncodedOutput {
            encoder: CharsetEncoder::new(charset),
            scratch: Vec::new(),
            writer,
        }
    }

    fn write(&mut self, text: &str, escape: bool) -> Result<(), Error> {
        self.scratch.clear();
        self.encoder.encode(text, escape, &mut self.scratch)?;
        self.writer.write_all(&self.scratch)?;
        Ok(())
    }

    /// Flush encoder state and hand back the writer.
    pub(crate) fn finish(mut self) -> Result<W, Error> {
        self.scratch.clear();
        self.encoder.finish(&mut self.scratch)?;
        self.writer.write_all(&self.scratch)?;
        Ok(self.writer)
    }
}

impl<W: Write> Output for EncodedOutput<W> {
    fn markup(&mut self, text: &str) -> Result<(), Error> {
        self.write(text, false)
    }

    fn content(&mut self, text: &str) -> Result<(), Error> {
        self.write(text, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_output_escapes_content_only() {
        let charset = Charset::for_label("US-ASCII").unwrap();
        let mut output = EncodedOutput::new(charset, Vec::new());
        output.content("caf\u{e9}").unwrap();
        assert!(matches!(
            output.markup("\u{e9}"),
            Err(Error::UnrepresentableCharacter { character: '\u{e9}', .. })
        ));
        assert_eq!(output.finish().unwrap(), b"caf&#xE9;");
    }
}
