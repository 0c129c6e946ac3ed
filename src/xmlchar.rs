// Character classes of XML 1.0 (fifth edition), §2.2 and §2.3.

use crate::error::Error;

pub(crate) fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':' | 'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}' | '\u{D8}'..='\u{F6}' | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}' | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}' | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}' | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}' | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}'
            | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}')
}

fn is_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(is_name_start_char) && chars.all(is_name_char)
}

/// Character data may only hold XML characters.
pub(crate) fn check_chars(text: &str) -> Result<(), Error> {
    match text.chars().find(|c| !is_xml_char(*c)) {
        Some(c) => Err(Error::InvalidCharacter(c)),
        None => Ok(()),
    }
}

/// The `Name` production: doctype names and processing instruction targets.
pub(crate) fn check_name(name: &str) -> Result<(), Error> {
    if !is_name(name) {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(())
}

/// A name without a colon: local names and prefixes.
pub(crate) fn check_ncname(name: &str) -> Result<(), Error> {
    if name.contains(':') || !is_name(name) {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(())
}
