// Charsets for reading and writing XML bytes.
//
// encoding_rs covers the WHATWG encodings, but it maps the ISO-8859-1 and
// US-ASCII labels to windows-1252, has no EBCDIC and only decodes UTF-16.
// Those charsets are handled here; the rest is delegated.

mod ebcdic;

use encoding_rs::{EncoderResult, Encoding};
use tracing::debug;
use xhtmlchardet::detect;

use crate::error::{Error, ParseError};
use ebcdic::SingleByteTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CodePage {
    Ibm037,
    Ibm500,
    Ibm01140,
}

impl CodePage {
    fn table(&self) -> &'static SingleByteTable {
        match self {
            CodePage::Ibm037 => &ebcdic::IBM037,
            CodePage::Ibm500 => &ebcdic::IBM500,
            CodePage::Ibm01140 => &ebcdic::IBM01140,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Utf8,
    Utf16 { big_endian: bool, bom: bool },
    Ascii,
    Latin1,
    Ebcdic(CodePage),
    Other(&'static Encoding),
}

/// A character encoding for XML bytes.
///
/// ```rust
/// let charset = xdom::Charset::for_label("cp037").unwrap();
/// assert_eq!(charset.name(), "IBM037");
/// // NEL has its own byte in EBCDIC, distinct from line feed
/// assert_eq!(charset.encode_str("\u{85}\n").unwrap(), vec![0x15, 0x25]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    name: &'static str,
    kind: Kind,
}

impl Charset {
    /// UTF-8, the default.
    pub const UTF_8: Charset = Charset {
        name: "UTF-8",
        kind: Kind::Utf8,
    };

    /// Look up a charset by one of its names. Case is ignored.
    ///
    /// Fails with [`Error::UnsupportedEncoding`] for unknown names and for
    /// encodings that can only be decoded.
    pub fn for_label(label: &str) -> Result<Charset, Error> {
        let normalized = label.trim().to_ascii_lowercase();
        let (name, kind) = match normalized.as_str() {
            "utf-8" | "utf8" | "unicode-1-1-utf-8" => ("UTF-8", Kind::Utf8),
            "utf-16" | "utf16" => (
                "UTF-16",
                Kind::Utf16 {
                    big_endian: true,
                    bom: true,
                },
            ),
            "utf-16be" => (
                "UTF-16BE",
                Kind::Utf16 {
                    big_endian: true,
                    bom: false,
                },
            ),
            "utf-16le" => (
                "UTF-16LE",
                Kind::Utf16 {
                    big_endian: false,
                    bom: false,
                },
            ),
            "us-ascii" | "ascii" | "iso646-us" | "ansi_x3.4-1968" | "cp367" | "ibm367"
            | "csascii" => ("US-ASCII", Kind::Ascii),
            "iso-8859-1" | "iso8859-1" | "iso_8859-1" | "latin1" | "l1" | "cp819"
            | "ibm819" | "csisolatin1" => ("ISO-8859-1", Kind::Latin1),
            "ibm037" | "cp037" | "ibm-37" | "ebcdic-cp-us" | "ebcdic-cp-ca" | "ebcdic-cp-nl"
            | "ebcdic-cp-wt" | "csibm037" => ("IBM037", Kind::Ebcdic(CodePage::Ibm037)),
            "ibm500" | "cp500" | "ebcdic-cp-be" | "ebcdic-cp-ch" | "csibm500" => {
                ("IBM500", Kind::Ebcdic(CodePage::Ibm500))
            }
            "ibm01140" | "ibm1140" | "cp1140" | "ccsid01140" | "ebcdic-us-37+euro" => {
                ("IBM01140", Kind::Ebcdic(CodePage::Ibm01140))
            }
            _ => {
                let encoding = Encoding::for_label(normalized.as_bytes())
                    .filter(|encoding| encoding.output_encoding() == *encoding)
                    .ok_or_else(|| Error::UnsupportedEncoding(label.to_string()))?;
                (encoding.name(), Kind::Other(encoding))
            }
        };
        Ok(Charset { name, kind })
    }

    /// Guess the charset of XML bytes.
    ///
    /// A byte order mark wins, then the first bytes of `<?xml` in UTF-16 or
    /// EBCDIC, then the encoding declaration. Without any of these the
    /// input is UTF-8.
    pub fn sniff(bytes: &[u8]) -> Result<Charset, Error> {
        if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
            return Ok(Charset::UTF_8);
        }
        if bytes.starts_with(&[0xFE, 0xFF]) {
            return Charset::for_label("UTF-16");
        }
        if bytes.starts_with(&[0xFF, 0xFE]) || bytes.starts_with(&[0x3C, 0x00, 0x3F, 0x00]) {
            return Charset::for_label("UTF-16LE");
        }
        if bytes.starts_with(&[0x00, 0x3C, 0x00, 0x3F]) {
            return Charset::for_label("UTF-16BE");
        }
        if bytes.starts_with(&[0x4C, 0x6F, 0xA7, 0x94]) {
            // the declaration only uses characters that all EBCDIC code
            // pages agree on
            let start = bytes
                .iter()
                .take(128)
                .map(|b| ebcdic::IBM037.decode(*b))
                .collect::<String>();
            return match declared_encoding(&start) {
                Some(label) => Charset::for_label(&label),
                None => Charset::for_label("IBM037"),
            };
        }
        let mut cursor = std::io::Cursor::new(bytes);
        let charsets = detect(&mut cursor, None)?;
        match charsets.first() {
            Some(label) => Charset::for_label(label),
            None => Ok(Charset::UTF_8),
        }
    }

    /// The canonical name, as written in the XML declaration.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the charset has a byte sequence for the character.
    pub fn can_encode(&self, c: char) -> bool {
        match self.kind {
            Kind::Utf8 | Kind::Utf16 { .. } => true,
            Kind::Other(encoding) => {
                let mut encoder = encoding.new_encoder();
                let mut buffer = [0u8; 16];
                let mut utf8 = [0u8; 4];
                let (result, _, _) = encoder.encode_from_utf8_without_replacement(
                    c.encode_utf8(&mut utf8),
                    &mut buffer,
                    true,
                );
                matches!(result, EncoderResult::InputEmpty)
            }
            _ => self.single_byte(c).is_some(),
        }
    }

    fn single_byte(&self, c: char) -> Option<u8> {
        match self.kind {
            Kind::Ascii => u8::try_from(c).ok().filter(|b| b.is_ascii()),
            Kind::Latin1 => u8::try_from(c).ok(),
            Kind::Ebcdic(code_page) => code_page.table().encode(c),
            _ => None,
        }
    }

    /// Decode bytes in this charset. A byte order mark matching the charset
    /// is skipped.
    pub fn decode(&self, bytes: &[u8]) -> Result<String, Error> {
        let invalid = || {
            Error::from(ParseError::Decoding {
                encoding: self.name.to_string(),
            })
        };
        let decoded = match self.kind {
            Kind::Utf8 => {
                let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
                std::str::from_utf8(bytes).map_err(|_| invalid())?.to_string()
            }
            Kind::Utf16 { big_endian, bom } => {
                let (encoding, bytes) = match (bytes, bom) {
                    ([0xFE, 0xFF, rest @ ..], _) if big_endian || bom => {
                        (encoding_rs::UTF_16BE, rest)
                    }
                    ([0xFF, 0xFE, rest @ ..], _) if !big_endian || bom => {
                        (encoding_rs::UTF_16LE, rest)
                    }
                    _ if big_endian => (encoding_rs::UTF_16BE, bytes),
                    _ => (encoding_rs::UTF_16LE, bytes),
                };
                encoding
                    .decode_without_bom_handling_and_without_replacement(bytes)
                    .ok_or_else(invalid)?
                    .into_owned()
            }
            Kind::Ascii => {
                if !bytes.is_ascii() {
                    return Err(invalid());
                }
                bytes.iter().map(|b| char::from(*b)).collect()
            }
            Kind::Latin1 => bytes.iter().map(|b| char::from(*b)).collect(),
            Kind::Ebcdic(code_page) => {
                let table = code_page.table();
                bytes.iter().map(|b| table.decode(*b)).collect()
            }
            Kind::Other(encoding) => {
                let bytes = match Encoding::for_bom(bytes) {
                    Some((bom_encoding, length)) if bom_encoding == encoding => &bytes[length..],
                    _ => bytes,
                };
                encoding
                    .decode_without_bom_handling_and_without_replacement(bytes)
                    .ok_or_else(invalid)?
                    .into_owned()
            }
        };
        Ok(decoded)
    }

    /// Encode a string, failing on the first character the charset cannot
    /// represent.
    pub fn encode_str(&self, text: &str) -> Result<Vec<u8>, Error> {
        let mut encoder = CharsetEncoder::new(*self);
        let mut bytes = Vec::new();
        encoder.encode(text, false, &mut bytes)?;
        encoder.finish(&mut bytes)?;
        Ok(bytes)
    }
}

impl Default for Charset {
    fn default() -> Self {
        Charset::UTF_8
    }
}

impl std::fmt::Display for Charset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

// The value of `encoding="..."` in an XML declaration at the start of `text`.
fn declared_encoding(text: &str) -> Option<String> {
    let declaration = &text[..text.find("?>")?];
    if !declaration.starts_with("<?xml") {
        return None;
    }
    let rest = &declaration[declaration.find("encoding")? + "encoding".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let rest = &rest[1..];
    Some(rest[..rest.find(quote)?].to_string())
}

/// Encodes text in a charset, one piece at a time.
///
/// Escapable pieces (text and attribute values) get a character reference
/// for every character the charset lacks. Anywhere else such a character
/// is an error.
pub(crate) struct CharsetEncoder {
    charset: Charset,
    inner: Option<encoding_rs::Encoder>,
    started: bool,
}

impl CharsetEncoder {
    pub(crate) fn new(charset: Charset) -> Self {
        let inner = match charset.kind {
            Kind::Other(encoding) => Some(encoding.new_encoder()),
            _ => None,
        };
        CharsetEncoder {
            charset,
            inner,
            started: false,
        }
    }

    pub(crate) fn charset(&self) -> Charset {
        self.charset
    }

    pub(crate) fn encode(&mut self, text: &str, escape: bool, out: &mut Vec<u8>) -> Result<(), Error> {
        if !self.started {
            self.started = true;
            if let Kind::Utf16 {
                big_endian: true,
                bom: true,
            } = self.charset.kind
            {
                out.extend_from_slice(&[0xFE, 0xFF]);
            }
        }
        match self.charset.kind {
            Kind::Utf8 => out.extend_from_slice(text.as_bytes()),
            Kind::Utf16 { big_endian, .. } => {
                for unit in text.encode_utf16() {
                    if big_endian {
                        out.extend_from_slice(&unit.to_be_bytes());
                    } else {
                        out.extend_from_slice(&unit.to_le_bytes());
                    }
                }
            }
            Kind::Other(_) => self.encode_other(text, escape, out)?,
            _ => {
                for c in text.chars() {
                    match self.charset.single_byte(c) {
                        Some(b) => out.push(b),
                        None => {
                            let reference = self.unrepresentable(c, escape)?;
                            for c in reference.chars() {
                                // ASCII is in every single byte charset
                                if let Some(b) = self.charset.single_byte(c) {
                                    out.push(b);
                                }
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn encode_other(&mut self, text: &str, escape: bool, out: &mut Vec<u8>) -> Result<(), Error> {
        let mut remaining = text;
        loop {
            let Some(encoder) = self.inner.as_mut() else {
                return Ok(());
            };
            let needed = encoder
                .max_buffer_length_from_utf8_without_replacement(remaining.len())
                .unwrap_or(remaining.len() * 4 + 16);
            out.reserve(needed);
            let (result, read) =
                encoder.encode_from_utf8_to_vec_without_replacement(remaining, out, false);
            remaining = &remaining[read..];
            match result {
                EncoderResult::InputEmpty => return Ok(()),
                EncoderResult::OutputFull => {}
                EncoderResult::Unmappable(c) => {
                    let reference = self.unrepresentable(c, escape)?;
                    self.encode_other(&reference, false, out)?;
                }
            }
        }
    }

    fn unrepresentable(&self, c: char, escape: bool) -> Result<String, Error> {
        if !escape {
            return Err(Error::UnrepresentableCharacter {
                character: c,
                encoding: self.charset.name.to_string(),
            });
        }
        debug!(
            character = %c.escape_unicode(),
            encoding = self.charset.name,
            "escaping character not in charset"
        );
        Ok(format!("&#x{:X};", u32::from(c)))
    }

    /// Flush the state of stateful encoders, such as ISO-2022-JP.
    pub(crate) fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), Error> {
        if let Some(encoder) = self.inner.as_mut() {
            out.reserve(16);
            let (result, _) = encoder.encode_from_utf8_to_vec_without_replacement("", out, true);
            if let EncoderResult::Unmappable(c) = result {
                return Err(Error::UnrepresentableCharacter {
                    character: c,
                    encoding: self.charset.name.to_string(),
                });
            }
        }
        Ok(())
    }
}
