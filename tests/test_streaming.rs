use std::thread;

use rstest::rstest;
use xdom::{
    event_channel, spawn_tokenizer, BuildStats, Dom, Error, Event, EventAttribute, IdentityFactory,
    Node, NodeFactory, Nodes, ParseError, QName,
};

// sums the values of <n> elements and keeps none of them
#[derive(Default)]
struct Sum(i64);

impl NodeFactory for Sum {
    fn finish_making_element(&mut self, dom: &mut Dom, element: Node) -> Result<Nodes, Error> {
        let name = dom.element(element).map(|e| e.name());
        if name.map(|name| dom.local_name_str(name) == "n").unwrap_or(false) {
            self.0 += dom.string_value(element).parse::<i64>().unwrap_or(0);
            return Ok(Nodes::new());
        }
        Ok(Nodes::one(element))
    }
}

fn start(name: &str) -> Event {
    Event::StartElement {
        name: QName::local(name),
        namespace: String::new(),
        declarations: vec![],
        attributes: vec![],
    }
}

fn text(text: &str) -> Event {
    Event::Characters {
        text: text.to_string(),
        whitespace: false,
    }
}

// produces <numbers><n>1</n>...</numbers> on its own thread, never holding
// more than a few events
fn produce<F: NodeFactory>(count: usize, factory: &mut F) -> (Node, BuildStats, Dom) {
    let (sender, receiver) = event_channel(8);
    let producer = thread::spawn(move || {
        let send = |event| sender.send(Ok(event)).is_ok();
        if !send(Event::StartDocument) || !send(start("numbers")) {
            return;
        }
        for i in 0..count {
            let value = (i % 10).to_string();
            if !(send(start("n")) && send(text(&value)) && send(Event::EndElement)) {
                return;
            }
        }
        send(Event::EndElement);
        send(Event::EndDocument);
    });
    let mut dom = Dom::new();
    let (document, stats) = dom.build_with_stats(receiver, factory).unwrap();
    producer.join().unwrap();
    (document, stats, dom)
}

#[test]
fn test_sum_over_channel() {
    let mut sum = Sum::default();
    let (document, stats, dom) = produce(1000, &mut sum);
    assert_eq!(sum.0, 4500);
    assert_eq!(dom.to_xml(document).unwrap(), "<numbers/>");
    assert_eq!(stats.events, 2 + 3 * 1000 + 2);
    assert_eq!(stats.max_depth, 2);
}

#[rstest]
#[case(1_000)]
#[case(100_000)]
fn test_discarding_factory_holds_constant_nodes(#[case] count: usize) {
    let mut sum = Sum::default();
    let (_, stats, _) = produce(count, &mut sum);
    // the root, one <n> and its text
    assert_eq!(stats.max_held_nodes, 3);
}

#[test]
fn test_identity_factory_holds_everything() {
    let (_, small, _) = produce(100, &mut IdentityFactory);
    let (_, large, _) = produce(1000, &mut IdentityFactory);
    assert_eq!(small.max_held_nodes, 1 + 2 * 100);
    assert_eq!(large.max_held_nodes, 1 + 2 * 1000);
}

#[test]
fn test_spawned_tokenizer() {
    let mut xml = String::from("<numbers>");
    for i in 0..500 {
        xml.push_str(&format!("<n>{}</n>", i));
    }
    xml.push_str("</numbers>");
    let (receiver, handle) = spawn_tokenizer(xml, 4);
    let mut dom = Dom::new();
    let mut sum = Sum::default();
    dom.build(receiver, &mut sum).unwrap();
    handle.join().unwrap();
    assert_eq!(sum.0, (0..500).sum::<i64>());
}

#[test]
fn test_closed_channel_before_root_end_fails() {
    let (sender, receiver) = event_channel(4);
    let producer = thread::spawn(move || {
        sender.send(Ok(Event::StartDocument)).unwrap();
        sender.send(Ok(start("a"))).unwrap();
        sender.send(Ok(start("b"))).unwrap();
        // dropping the sender closes the stream
    });
    let mut dom = Dom::new();
    let err = dom.build(receiver, &mut IdentityFactory).unwrap_err();
    producer.join().unwrap();
    assert!(matches!(
        err.parse_error(),
        Some(ParseError::UnexpectedEnd { position: None })
    ));
}

#[test]
fn test_closed_channel_after_root_end_is_complete() {
    let (sender, receiver) = event_channel(4);
    let producer = thread::spawn(move || {
        sender.send(Ok(start("a"))).unwrap();
        sender.send(Ok(Event::EndElement)).unwrap();
        sender
            .send(Ok(Event::Comment("trailing".to_string())))
            .unwrap();
    });
    let mut dom = Dom::new();
    let document = dom.build(receiver, &mut IdentityFactory).unwrap();
    producer.join().unwrap();
    assert_eq!(dom.to_xml(document).unwrap(), "<a/>\n<!--trailing-->");
}

#[test]
fn test_tokenizer_error_travels_through_channel() {
    let (receiver, handle) = spawn_tokenizer("<a>\n  <b></c></a>".to_string(), 2);
    let mut dom = Dom::new();
    let err = dom.build(receiver, &mut IdentityFactory).unwrap_err();
    handle.join().unwrap();
    let position = err.parse_error().and_then(|e| e.position()).unwrap();
    assert_eq!((position.line, position.column), (2, 6));
}

#[test]
fn test_events_out_of_order() {
    let mut dom = Dom::new();
    let events = vec![Ok(start("a")), Ok(Event::EndElement), Ok(Event::EndElement)];
    let err = dom.build(events, &mut IdentityFactory).unwrap_err();
    assert!(matches!(
        err.parse_error(),
        Some(ParseError::UnexpectedEvent { .. })
    ));
}

#[test]
fn test_attributes_from_events() {
    let mut dom = Dom::new();
    let events = vec![
        Event::StartDocument,
        Event::StartElement {
            name: QName::prefixed("p", "a"),
            namespace: "http://example.com".to_string(),
            declarations: vec![("p".to_string(), "http://example.com".to_string())],
            attributes: vec![EventAttribute {
                name: QName::local("b"),
                namespace: String::new(),
                value: "1".to_string(),
                attribute_type: xdom::AttributeType::Undeclared,
            }],
        },
        Event::EndElement,
        Event::EndDocument,
    ];
    let document = dom
        .build(events.into_iter().map(Ok), &mut IdentityFactory)
        .unwrap();
    assert_eq!(
        dom.to_xml(document).unwrap(),
        r#"<p:a xmlns:p="http://example.com" b="1"/>"#
    );
}
