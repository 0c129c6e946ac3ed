use insta::assert_snapshot;
use xdom::output::Parameters;
use xdom::{Dom, Error};

fn parameters(encoding: &str, declaration: bool) -> Parameters {
    Parameters {
        encoding: encoding.to_string(),
        declaration,
    }
}

#[test]
fn test_default_namespace_declared_and_undeclared() {
    let mut dom = Dom::new();
    let ns = dom.add_namespace("http://a").unwrap();
    let doc = dom.add_name_ns("doc", ns).unwrap();
    let x = dom.add_name("x").unwrap();
    let doc = dom.new_element(doc);
    let document = dom.new_document_with_element(doc).unwrap();
    dom.append_element(doc, x).unwrap();
    assert_snapshot!(dom.to_xml(document).unwrap(), @r###"<doc xmlns="http://a"><x xmlns=""/></doc>"###);
}

#[test]
fn test_prefixed_attribute_declared() {
    let mut dom = Dom::new();
    let a = dom.add_namespace("http://a").unwrap();
    let b = dom.add_namespace("http://b").unwrap();
    let p = dom.add_prefix("p").unwrap();
    let doc = dom.add_name_ns("doc", a).unwrap();
    let id = dom.add_name_ns("id", b).unwrap();
    let doc = dom.new_element(doc);
    let attribute = dom.new_attribute_prefixed(id, p, "1").unwrap();
    dom.add_attribute(doc, attribute).unwrap();
    assert_snapshot!(dom.to_xml(doc).unwrap(), @r###"<doc xmlns="http://a" xmlns:p="http://b" p:id="1"/>"###);
}

#[test]
fn test_declarations_not_repeated_in_scope() {
    let mut dom = Dom::new();
    let document = dom
        .parse(r#"<p:a xmlns:p="http://p"><p:b><p:c p:x="1"/></p:b></p:a>"#)
        .unwrap();
    assert_snapshot!(dom.to_xml(document).unwrap(), @r###"<p:a xmlns:p="http://p"><p:b><p:c p:x="1"/></p:b></p:a>"###);
}

#[test]
fn test_unused_declarations_kept() {
    let mut dom = Dom::new();
    let document = dom
        .parse(r#"<a xmlns:unused="http://unused"><b/></a>"#)
        .unwrap();
    assert_snapshot!(dom.to_xml(document).unwrap(), @r###"<a xmlns:unused="http://unused"><b/></a>"###);
}

#[test]
fn test_xml_prefix_never_declared() {
    let mut dom = Dom::new();
    let document = dom.parse(r#"<a xml:lang="en"><b xml:space="preserve"/></a>"#).unwrap();
    let a = dom.document_element(document).unwrap();
    let b = dom.first_child(a).unwrap();
    assert_snapshot!(dom.to_xml(b).unwrap(), @r###"<b xml:space="preserve"/>"###);
}

#[test]
fn test_escaping() {
    let mut dom = Dom::new();
    let a = dom.add_name("a").unwrap();
    let v = dom.add_name("v").unwrap();
    let a = dom.new_element(a);
    dom.set_attribute(a, v, "\"<tab>\t\n").unwrap();
    dom.append_text(a, "1 < 2 && 3 > 2\r").unwrap();
    assert_snapshot!(dom.to_xml(a).unwrap(), @r###"<a v="&quot;&lt;tab&gt;&#x9;&#xA;">1 &lt; 2 &amp;&amp; 3 &gt; 2&#xD;</a>"###);
}

#[test]
fn test_document_items() {
    let mut dom = Dom::new();
    let xml = r#"<!DOCTYPE a SYSTEM "a.dtd" [<!ENTITY e "x">]><?first?><a>&e;</a><!--last-->"#;
    let document = dom.parse(xml).unwrap();
    assert_snapshot!(dom.to_xml(document).unwrap(), @r###"
    <!DOCTYPE a SYSTEM "a.dtd" [<!ENTITY e "x">]>
    <?first?>
    <a>x</a>
    <!--last-->
    "###);
}

#[test]
fn test_summary() {
    let mut dom = Dom::new();
    let document = dom
        .parse(r#"<p:a xmlns:p="http://p" x="1"><?pi data?>text<b/></p:a>"#)
        .unwrap();
    assert_snapshot!(dom.summary(document), @r###"
    document
      element p:a {http://p}
        attribute x="1"
        processing-instruction pi "data"
        text "text"
        element b
    "###);
}

#[test]
fn test_declaration() {
    let mut dom = Dom::new();
    let document = dom.parse("<a/>").unwrap();
    let bytes = dom
        .serialize_to_vec(document, &Parameters::default())
        .unwrap();
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<a/>\n"
    );
    let bytes = dom
        .serialize_to_vec(document, &parameters("utf8", false))
        .unwrap();
    assert_eq!(bytes, b"<a/>\n");
}

#[test]
fn test_declaration_names_canonical_charset() {
    let mut dom = Dom::new();
    let document = dom.parse("<a/>").unwrap();
    let bytes = dom
        .serialize_to_vec(document, &parameters("latin1", true))
        .unwrap();
    assert_eq!(
        bytes,
        b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n<a/>\n"
    );
}

#[test]
fn test_nel_in_ebcdic() {
    let mut dom = Dom::new();
    let document = dom.parse("<a>\u{85}</a>").unwrap();
    let bytes = dom
        .serialize_to_vec(document, &parameters("IBM037", false))
        .unwrap();
    // < a > NEL < / a > LF
    assert_eq!(
        bytes,
        vec![0x4C, 0x81, 0x6E, 0x15, 0x4C, 0x61, 0x81, 0x6E, 0x25]
    );
}

#[test]
fn test_utf16_has_byte_order_mark() {
    let mut dom = Dom::new();
    let document = dom.parse("<a/>").unwrap();
    let bytes = dom
        .serialize_to_vec(document, &parameters("UTF-16", false))
        .unwrap();
    assert_eq!(bytes, vec![0xFE, 0xFF, 0, b'<', 0, b'a', 0, b'/', 0, b'>', 0, b'\n']);
    let bytes = dom
        .serialize_to_vec(document, &parameters("UTF-16LE", false))
        .unwrap();
    assert_eq!(bytes, vec![b'<', 0, b'a', 0, b'/', 0, b'>', 0, b'\n', 0]);
}

#[test]
fn test_characters_outside_charset_become_references() {
    let mut dom = Dom::new();
    let document = dom.parse("<a b=\"\u{3b1}\">\u{1F600}</a>").unwrap();
    let bytes = dom
        .serialize_to_vec(document, &parameters("ISO-8859-1", false))
        .unwrap();
    assert_eq!(bytes, b"<a b=\"&#x3B1;\">&#x1F600;</a>\n");
}

#[test]
fn test_unrepresentable_comment() {
    let mut dom = Dom::new();
    let document = dom.parse("<a><!--\u{3b1}--></a>").unwrap();
    let err = dom
        .serialize_to_vec(document, &parameters("ISO-8859-1", false))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::UnrepresentableCharacter { character: '\u{3b1}', encoding } if encoding == "ISO-8859-1"
    ));
}

#[test]
fn test_unsupported_encoding() {
    let mut dom = Dom::new();
    let document = dom.parse("<a/>").unwrap();
    let mut sink = Vec::new();
    let err = dom
        .serialize(document, &parameters("x-klingon", true), &mut sink)
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedEncoding(name) if name == "x-klingon"));
    assert!(sink.is_empty());
}
