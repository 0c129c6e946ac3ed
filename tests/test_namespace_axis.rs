use xdom::{Dom, ValueType};

#[test]
fn test_namespace_node_for_prefix() {
    let mut dom = Dom::new();
    let document = dom
        .parse(r#"<pre:root xmlns:pre="http://www.example.org/"/>"#)
        .unwrap();
    let root = dom.document_element(document).unwrap();
    let pre = dom.prefix("pre").unwrap();

    let namespace = dom.namespace_node(root, pre).unwrap().unwrap();
    assert_eq!(dom.value_type(namespace), ValueType::Namespace);
    let value = dom.namespace_value(namespace).unwrap();
    assert_eq!(dom.prefix_str(value.prefix()), "pre");
    assert_eq!(dom.namespace_str(value.namespace()), "http://www.example.org/");
    assert_eq!(dom.string_value(namespace), "http://www.example.org/");
    assert_eq!(dom.parent(namespace), Some(root));
    assert_eq!(
        dom.to_xml(namespace).unwrap(),
        r#"xmlns:pre="http://www.example.org/""#
    );

    let copy = dom.copy(namespace);
    let copied = dom.namespace_value(copy).unwrap();
    assert_eq!(dom.prefix_str(copied.prefix()), "pre");
    assert_eq!(dom.string_value(copy), "http://www.example.org/");
    assert_eq!(dom.parent(copy), None);
    assert!(dom.deep_equal(namespace, copy));

    // namespace nodes are not children
    assert_eq!(dom.children(root).count(), 0);
}

#[test]
fn test_nearest_binding_wins() {
    let mut dom = Dom::new();
    let document = dom
        .parse(r#"<a xmlns:p="http://one"><b xmlns:p="http://two"><c/></b></a>"#)
        .unwrap();
    let a = dom.document_element(document).unwrap();
    let b = dom.first_child(a).unwrap();
    let c = dom.first_child(b).unwrap();
    let p = dom.prefix("p").unwrap();
    let namespace = dom.namespace_node(c, p).unwrap().unwrap();
    assert_eq!(dom.string_value(namespace), "http://two");
    assert_eq!(dom.parent(namespace), Some(c));
    let namespace = dom.namespace_node(a, p).unwrap().unwrap();
    assert_eq!(dom.string_value(namespace), "http://one");
}

#[test]
fn test_default_namespace_under_empty_prefix() {
    let mut dom = Dom::new();
    let document = dom
        .parse(r#"<a xmlns="http://default"><b/><c xmlns=""/></a>"#)
        .unwrap();
    let a = dom.document_element(document).unwrap();
    let b = dom.first_child(a).unwrap();
    let c = dom.next_sibling(b).unwrap();
    let empty = dom.empty_prefix();

    let namespace = dom.namespace_node(b, empty).unwrap().unwrap();
    assert_eq!(dom.string_value(namespace), "http://default");
    assert_eq!(dom.to_xml(namespace).unwrap(), r#"xmlns="http://default""#);
    // undeclared again
    assert_eq!(dom.namespace_node(c, empty).unwrap(), None);
}

#[test]
fn test_implicit_binding_of_element_prefix() {
    let mut dom = Dom::new();
    let ns = dom.add_namespace("http://example.com").unwrap();
    let p = dom.add_prefix("p").unwrap();
    let name = dom.add_name_ns("a", ns).unwrap();
    let element = dom.new_element_prefixed(name, p).unwrap();
    let namespace = dom.namespace_node(element, p).unwrap().unwrap();
    assert_eq!(dom.string_value(namespace), "http://example.com");
}

#[test]
fn test_unbound_prefix() {
    let mut dom = Dom::new();
    let document = dom.parse("<a/>").unwrap();
    let a = dom.document_element(document).unwrap();
    let q = dom.add_prefix("q").unwrap();
    assert_eq!(dom.namespace_node(a, q).unwrap(), None);
    assert!(dom.namespace_node(document, q).is_err());
}

#[test]
fn test_namespace_axis_lists_scope() {
    let mut dom = Dom::new();
    let document = dom
        .parse(r#"<a xmlns:p="http://one" xmlns="http://default"><b xmlns:q="http://two"/></a>"#)
        .unwrap();
    let a = dom.document_element(document).unwrap();
    let b = dom.first_child(a).unwrap();
    let nodes = dom.namespace_nodes(b).unwrap();
    let mut bindings = nodes
        .iter()
        .map(|n| {
            let value = dom.namespace_value(n).unwrap();
            (
                dom.prefix_str(value.prefix()).to_string(),
                dom.namespace_str(value.namespace()).to_string(),
            )
        })
        .collect::<Vec<_>>();
    bindings.sort();
    assert_eq!(
        bindings,
        vec![
            ("".to_string(), "http://default".to_string()),
            ("p".to_string(), "http://one".to_string()),
            ("q".to_string(), "http://two".to_string()),
            (
                "xml".to_string(),
                "http://www.w3.org/XML/1998/namespace".to_string()
            ),
        ]
    );
    assert!(nodes.iter().all(|n| dom.parent(n) == Some(b)));
}
