use proptest::prelude::*;
use rstest::rstest;
use xdom::output::Parameters;
use xdom::Dom;

#[rstest]
#[case(r#"<root><a>1</a><b>2</b></root>"#)]
#[case(r#"<foo:root xmlns:foo="http://example.com"><foo:a>1</foo:a><foo:b>2</foo:b></foo:root>"#)]
#[case(r#"<root xmlns:foo="http://example.com"><a>1</a><foo:b>2</foo:b></root>"#)]
#[case(r#"<root xmlns="http://example.com"><a>1</a><b>2</b></root>"#)]
#[case(r#"<root xmlns="http://example.com"><a xmlns="">1</a></root>"#)]
#[case(r#"<a b="&quot;&lt;&amp;" c="&#xA;"/>"#)]
#[case("<!--before-->\n<a><?pi data?>text</a>\n<!--after-->")]
#[case("<!DOCTYPE a PUBLIC \"-//A//EN\" \"a.dtd\">\n<a/>")]
fn roundtrip_text(#[case] xml: &str) {
    let mut dom = Dom::new();
    let document = dom.parse(xml).unwrap();
    assert_eq!(dom.to_xml(document).unwrap(), xml);
}

const SAMPLE: &str = "<doc a=\"\u{e9}\u{3b1}\u{1F600}\">caf\u{e9} \u{3b1}\u{3b2}\u{85}\u{20ac} \u{65e5}\u{672c} &amp; \u{1F600}<!--ascii only--><?pi data?></doc>";

#[rstest]
#[case("UTF-8")]
#[case("UTF-16")]
#[case("UTF-16LE")]
#[case("UTF-16BE")]
#[case("US-ASCII")]
#[case("ISO-8859-1")]
#[case("windows-1252")]
#[case("ISO-8859-7")]
#[case("KOI8-R")]
#[case("IBM037")]
#[case("IBM500")]
#[case("IBM01140")]
#[case("Shift_JIS")]
#[case("EUC-JP")]
#[case("ISO-2022-JP")]
#[case("EUC-KR")]
#[case("Big5")]
#[case("gb18030")]
fn roundtrip_encoding(#[case] encoding: &str) {
    let mut dom = Dom::new();
    let document = dom.parse(SAMPLE).unwrap();
    let parameters = Parameters {
        encoding: encoding.to_string(),
        ..Default::default()
    };
    let bytes = dom.serialize_to_vec(document, &parameters).unwrap();
    let parsed = dom.parse_bytes_with_encoding(&bytes, encoding).unwrap();
    assert!(
        dom.deep_equal(document, parsed),
        "{} became {}",
        SAMPLE,
        dom.to_xml(parsed).unwrap()
    );
}

// the declaration or byte order mark is enough to read these back
#[rstest]
#[case("UTF-8")]
#[case("UTF-16")]
#[case("UTF-16LE")]
#[case("UTF-16BE")]
#[case("ISO-8859-1")]
#[case("IBM037")]
#[case("IBM500")]
#[case("IBM01140")]
fn roundtrip_sniffed(#[case] encoding: &str) {
    let mut dom = Dom::new();
    let document = dom.parse(SAMPLE).unwrap();
    let parameters = Parameters {
        encoding: encoding.to_string(),
        ..Default::default()
    };
    let bytes = dom.serialize_to_vec(document, &parameters).unwrap();
    let parsed = dom.parse_bytes(&bytes).unwrap();
    assert!(dom.deep_equal(document, parsed));
}

#[test]
fn roundtrip_file() {
    let mut dom = Dom::new();
    let document = dom.parse(SAMPLE).unwrap();
    let path = std::env::temp_dir().join(format!("xdom-roundtrip-{}.xml", std::process::id()));
    let parameters = Parameters {
        encoding: "IBM01140".to_string(),
        ..Default::default()
    };
    dom.serialize_to_file(document, &parameters, &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    let parsed = dom.parse_bytes(&bytes).unwrap();
    assert!(dom.deep_equal(document, parsed));
}

// charsets where every representable character decodes to itself
const LOSSLESS: &[&str] = &[
    "UTF-8",
    "UTF-16",
    "UTF-16LE",
    "US-ASCII",
    "ISO-8859-1",
    "windows-1252",
    "KOI8-R",
    "IBM037",
    "IBM500",
    "IBM01140",
];

proptest! {
    #[test]
    fn text_and_attributes_survive_any_charset(
        text in "[\t\n\u{20}-\u{D7FF}\u{E000}-\u{FFFD}\u{10000}-\u{10FFFF}]{1,24}",
        value in "[\t\n\r\u{20}-\u{D7FF}\u{E000}-\u{FFFD}]{0,24}",
        encoding in prop::sample::select(LOSSLESS),
    ) {
        let mut dom = Dom::new();
        let doc = dom.add_name("doc").unwrap();
        let a = dom.add_name("a").unwrap();
        let element = dom.new_element(doc);
        let document = dom.new_document_with_element(element).unwrap();
        dom.set_attribute(element, a, &value).unwrap();
        dom.append_text(element, &text).unwrap();

        let parameters = Parameters {
            encoding: encoding.to_string(),
            ..Default::default()
        };
        let bytes = dom.serialize_to_vec(document, &parameters).unwrap();
        let parsed = dom.parse_bytes_with_encoding(&bytes, encoding).unwrap();
        prop_assert!(
            dom.deep_equal(document, parsed),
            "{:?} became {:?}",
            dom.to_xml(document).unwrap(),
            dom.to_xml(parsed).unwrap()
        );
    }
}
