use tracing::{debug, trace, warn};

use crate::domdata::{Dom, Node};
use crate::error::{Error, ParseError};
use crate::event::{Event, EventAttribute, QName};
use crate::factory::NodeFactory;
use crate::nodes::Nodes;
use crate::xmlvalue::DocType;

/// What the builder did while building a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Events consumed.
    pub events: usize,
    /// The deepest element nesting seen.
    pub max_depth: usize,
    /// The most nodes held by the builder at once, outside the document.
    ///
    /// A factory that discards finished subtrees keeps this bounded by the
    /// nesting depth, whatever the size of the input.
    pub max_held_nodes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    InProlog,
    InElement,
    AfterRoot,
    Done,
}

impl State {
    fn name(&self) -> &'static str {
        match self {
            State::Idle => "idle",
            State::InProlog => "prolog",
            State::InElement => "element",
            State::AfterRoot => "after root",
            State::Done => "done",
        }
    }
}

// An open element. `element` is `None` when the factory skipped it.
struct Frame {
    element: Option<Node>,
    held: usize,
}

struct Builder<'f, F: NodeFactory + ?Sized> {
    factory: &'f mut F,
    document: Node,
    state: State,
    stack: Vec<Frame>,
    held: usize,
    stats: BuildStats,
}

impl<'f, F: NodeFactory + ?Sized> Builder<'f, F> {
    fn new(dom: &mut Dom, factory: &'f mut F) -> Self {
        Builder {
            factory,
            document: dom.new_document(),
            state: State::Idle,
            stack: Vec::new(),
            held: 0,
            stats: BuildStats::default(),
        }
    }

    fn unexpected(&self, event: &Event) -> Error {
        ParseError::UnexpectedEvent {
            event: event.kind(),
            state: self.state.name(),
        }
        .into()
    }

    fn event(&mut self, dom: &mut Dom, event: Event) -> Result<(), Error> {
        trace!(event = event.kind(), depth = self.stack.len(), "build event");
        self.stats.events += 1;
        if self.state == State::Idle {
            self.factory.start_making_document(dom)?;
            self.state = State::InProlog;
            if event == Event::StartDocument {
                return Ok(());
            }
        }
        match event {
            Event::StartDocument => Err(self.unexpected(&event)),
            Event::DocType { .. } if self.state != State::InProlog => Err(self.unexpected(&event)),
            Event::DocType {
                name,
                public_id,
                system_id,
                internal_subset,
            } => {
                let doc_type = DocType::new(name, public_id, system_id, internal_subset);
                let nodes = self.factory.make_doc_type(dom, doc_type)?;
                self.attach(dom, nodes)
            }
            Event::StartElement { .. } if self.state == State::AfterRoot => {
                Err(ParseError::MultipleElementsAtTopLevel { position: None }.into())
            }
            Event::StartElement {
                name,
                namespace,
                declarations,
                attributes,
            } => self.start_element(dom, name, &namespace, declarations, attributes),
            Event::Characters { text, whitespace } => {
                if self.state != State::InElement {
                    if text.chars().all(|c| matches!(c, ' ' | '\t' | '\n' | '\r')) {
                        return Ok(());
                    }
                    return Err(ParseError::TextAtTopLevel { position: None }.into());
                }
                let nodes = if whitespace {
                    self.factory.make_whitespace_in_element_content(dom, &text)?
                } else {
                    self.factory.make_text(dom, &text)?
                };
                self.attach(dom, nodes)
            }
            Event::Comment(text) => {
                let nodes = self.factory.make_comment(dom, &text)?;
                self.attach(dom, nodes)
            }
            Event::ProcessingInstruction { target, data } => {
                let nodes = self
                    .factory
                    .make_processing_instruction(dom, &target, data.as_deref())?;
                self.attach(dom, nodes)
            }
            Event::EndElement if self.state != State::InElement => Err(self.unexpected(&event)),
            Event::EndElement => self.end_element(dom),
            Event::EndDocument => match self.state {
                State::AfterRoot => {
                    self.state = State::Done;
                    Ok(())
                }
                State::InElement => Err(ParseError::UnexpectedEnd { position: None }.into()),
                State::InProlog => Err(ParseError::NoElementAtTopLevel { position: None }.into()),
                _ => Err(self.unexpected(&event)),
            },
        }
    }

    fn start_element(
        &mut self,
        dom: &mut Dom,
        name: QName,
        namespace: &str,
        declarations: Vec<(String, String)>,
        attributes: Vec<EventAttribute>,
    ) -> Result<(), Error> {
        let namespace_id = dom.add_namespace(namespace)?;
        let name_id = dom.add_name_ns(&name.local, namespace_id)?;
        let prefix_id = dom.add_prefix(&name.prefix)?;
        let element = self.factory.start_making_element(dom, name_id, prefix_id)?;
        self.state = State::InElement;
        self.stack.push(Frame {
            element,
            held: usize::from(element.is_some()),
        });
        self.stats.max_depth = self.stats.max_depth.max(self.stack.len());
        let Some(element) = element else {
            return Ok(());
        };
        self.hold(1);

        for (prefix, namespace) in declarations {
            let prefix = dom.add_prefix(&prefix)?;
            let namespace = dom.add_namespace(&namespace)?;
            dom.declare_namespace(element, prefix, namespace)?;
        }
        for attribute in attributes {
            let namespace_id = dom.add_namespace(&attribute.namespace)?;
            let name_id = dom.add_name_ns(&attribute.name.local, namespace_id)?;
            let prefix_id = dom.add_prefix(&attribute.name.prefix)?;
            let nodes = self.factory.make_attribute(
                dom,
                name_id,
                prefix_id,
                &attribute.value,
                attribute.attribute_type,
            )?;
            self.attach(dom, nodes)?;
        }
        Ok(())
    }

    fn end_element(&mut self, dom: &mut Dom) -> Result<(), Error> {
        let Some(frame) = self.stack.pop() else {
            return Err(ParseError::UnexpectedEvent {
                event: "end-element",
                state: self.state.name(),
            }
            .into());
        };
        self.held -= frame.held;
        if self.stack.is_empty() {
            self.state = State::AfterRoot;
        }
        let Some(element) = frame.element else {
            return Ok(());
        };
        let nodes = self.factory.finish_making_element(dom, element)?;
        let keep = nodes.contains(element);
        self.attach_sized(dom, nodes, Some((element, frame.held)))?;
        if !keep && !dom.is_removed(element) && dom.parent(element).is_none() {
            element.get().remove_subtree(dom.arena_mut());
        }
        Ok(())
    }

    fn attach(&mut self, dom: &mut Dom, nodes: Nodes) -> Result<(), Error> {
        self.attach_sized(dom, nodes, None)
    }

    // `known` is a node whose subtree size is already counted
    fn attach_sized(
        &mut self,
        dom: &mut Dom,
        nodes: Nodes,
        known: Option<(Node, usize)>,
    ) -> Result<(), Error> {
        let target = self.stack.iter().rposition(|frame| frame.element.is_some());
        let parent = match target {
            Some(index) => self.stack[index].element.unwrap_or(self.document),
            None => self.document,
        };
        for node in nodes {
            let size = match known {
                Some((known, size)) if known == node => size,
                _ => node.get().descendants(dom.arena()).count(),
            };
            if dom.is_attribute(node) && dom.is_element(parent) {
                if let Some(replaced) = dom.add_attribute(parent, node)? {
                    replaced.get().remove_subtree(dom.arena_mut());
                }
            } else if parent == self.document
                && dom
                    .text_str(node)
                    .map(|text| text.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r')).is_empty())
                    .unwrap_or(false)
            {
                node.get().remove_subtree(dom.arena_mut());
                continue;
            } else {
                dom.append(parent, node)?;
            }
            if let Some(index) = target {
                self.stack[index].held += size;
                self.hold(size);
            }
        }
        Ok(())
    }

    fn hold(&mut self, count: usize) {
        self.held += count;
        self.stats.max_held_nodes = self.stats.max_held_nodes.max(self.held);
    }

    fn run<I>(&mut self, dom: &mut Dom, events: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = Result<Event, ParseError>>,
    {
        for event in events {
            self.event(dom, event?)?;
            if self.state == State::Done {
                break;
            }
        }
        Ok(())
    }

    fn finish(&mut self, dom: &mut Dom) -> Result<(), Error> {
        match self.state {
            State::AfterRoot | State::Done => {}
            State::InElement => return Err(ParseError::UnexpectedEnd { position: None }.into()),
            State::Idle | State::InProlog => {
                return Err(ParseError::NoElementAtTopLevel { position: None }.into())
            }
        }
        if !dom.children(self.document).any(|child| dom.is_element(child)) {
            return Err(ParseError::NoElementAtTopLevel { position: None }.into());
        }
        self.factory.finish_making_document(dom, self.document)?;
        self.state = State::Done;
        Ok(())
    }

    // drops everything the builder still holds
    fn abort(self, dom: &mut Dom) {
        let held = self.stack.into_iter().filter_map(|frame| frame.element);
        for node in held.chain(std::iter::once(self.document)) {
            if !dom.is_removed(node) {
                node.get().remove_subtree(dom.arena_mut());
            }
        }
    }
}

/// ## Building from events
///
/// The builder consumes parse events in order and asks a
/// [`NodeFactory`] for every node. Elements are finished in post-order:
/// an element's content is complete, and detached from any parent, when
/// [`NodeFactory::finish_making_element`] sees it. The result is attached
/// to the nearest open element, or to the document.
impl Dom {
    /// Build a document from a stream of events.
    ///
    /// `events` can be any iterator, including the receiving end of an
    /// [`event_channel`](crate::event_channel). The stream may end without
    /// [`Event::EndDocument`] once the document element is closed. On error
    /// nothing the builder created remains in the `Dom`.
    ///
    /// ```rust
    /// use xdom::{Event, QName};
    ///
    /// let events = vec![
    ///     Event::StartDocument,
    ///     Event::StartElement {
    ///         name: QName::local("a"),
    ///         namespace: String::new(),
    ///         declarations: vec![],
    ///         attributes: vec![],
    ///     },
    ///     Event::EndElement,
    /// ];
    /// let mut dom = xdom::Dom::new();
    /// let document = dom
    ///     .build(events.into_iter().map(Ok), &mut xdom::IdentityFactory)
    ///     .unwrap();
    /// assert_eq!(dom.to_xml(document).unwrap(), "<a/>");
    /// ```
    pub fn build<I, F>(&mut self, events: I, factory: &mut F) -> Result<Node, Error>
    where
        I: IntoIterator<Item = Result<Event, ParseError>>,
        F: NodeFactory + ?Sized,
    {
        self.build_with_stats(events, factory)
            .map(|(document, _)| document)
    }

    /// Like [`Dom::build`], also reporting [`BuildStats`].
    pub fn build_with_stats<I, F>(
        &mut self,
        events: I,
        factory: &mut F,
    ) -> Result<(Node, BuildStats), Error>
    where
        I: IntoIterator<Item = Result<Event, ParseError>>,
        F: NodeFactory + ?Sized,
    {
        let mut builder = Builder::new(self, factory);
        debug!("build started");
        let result = builder
            .run(self, events)
            .and_then(|()| builder.finish(self));
        match result {
            Ok(()) => {
                let stats = builder.stats;
                debug!(
                    events = stats.events,
                    max_depth = stats.max_depth,
                    max_held_nodes = stats.max_held_nodes,
                    "build finished"
                );
                Ok((builder.document, stats))
            }
            Err(error) => {
                warn!(
                    %error,
                    depth = builder.stack.len(),
                    "build failed, discarding partial tree"
                );
                builder.abort(self);
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::IdentityFactory;
    use crate::id::{NameId, PrefixId};

    fn start(name: &str) -> Event {
        Event::StartElement {
            name: QName::local(name),
            namespace: String::new(),
            declarations: vec![],
            attributes: vec![],
        }
    }

    fn build(dom: &mut Dom, events: Vec<Event>) -> Result<Node, Error> {
        dom.build(events.into_iter().map(Ok), &mut IdentityFactory)
    }

    #[test]
    fn test_build_without_end_document() {
        let mut dom = Dom::new();
        let document = build(
            &mut dom,
            vec![
                Event::StartDocument,
                start("a"),
                Event::Characters {
                    text: "x".to_string(),
                    whitespace: false,
                },
                Event::EndElement,
                Event::Comment("after".to_string()),
            ],
        )
        .unwrap();
        assert_eq!(dom.to_xml(document).unwrap(), "<a>x</a>\n<!--after-->");
    }

    #[test]
    fn test_stream_ends_inside_element() {
        let mut dom = Dom::new();
        let err = build(&mut dom, vec![Event::StartDocument, start("a")]).unwrap_err();
        assert_eq!(
            err.parse_error(),
            Some(&ParseError::UnexpectedEnd { position: None })
        );
    }

    #[test]
    fn test_no_element() {
        let mut dom = Dom::new();
        let err = build(
            &mut dom,
            vec![Event::StartDocument, Event::EndDocument],
        )
        .unwrap_err();
        assert_eq!(
            err.parse_error(),
            Some(&ParseError::NoElementAtTopLevel { position: None })
        );
    }

    #[test]
    fn test_two_roots() {
        let mut dom = Dom::new();
        let err = build(
            &mut dom,
            vec![
                Event::StartDocument,
                start("a"),
                Event::EndElement,
                start("b"),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err.parse_error(),
            Some(&ParseError::MultipleElementsAtTopLevel { position: None })
        );
    }

    #[test]
    fn test_end_without_start() {
        let mut dom = Dom::new();
        let err = build(&mut dom, vec![Event::StartDocument, Event::EndElement]).unwrap_err();
        assert!(matches!(
            err.parse_error(),
            Some(ParseError::UnexpectedEvent { event: "end-element", .. })
        ));
    }

    #[test]
    fn test_parse_failure_discards_partial_tree() {
        let mut dom = Dom::new();
        let events = vec![
            Ok(Event::StartDocument),
            Ok(start("a")),
            Ok(start("b")),
            Err(ParseError::UnexpectedEnd { position: None }),
        ];
        assert!(dom.build(events, &mut IdentityFactory).is_err());
        let live = dom.arena().iter().filter(|n| !n.is_removed()).count();
        assert_eq!(live, 0);
    }

    struct Skip;

    impl NodeFactory for Skip {
        fn start_making_element(
            &mut self,
            dom: &mut Dom,
            name: NameId,
            prefix: PrefixId,
        ) -> Result<Option<Node>, Error> {
            if dom.local_name_str(name) == "skip" {
                return Ok(None);
            }
            IdentityFactory.start_making_element(dom, name, prefix)
        }
    }

    #[test]
    fn test_skipped_element_flattens() {
        let mut dom = Dom::new();
        let document = dom
            .parse_with_factory("<a><skip x='1'><b/>t</skip></a>", &mut Skip)
            .unwrap();
        assert_eq!(dom.to_xml(document).unwrap(), "<a><b/>t</a>");
    }

    #[test]
    fn test_stats_depth() {
        let mut dom = Dom::new();
        let events = crate::tokenizer::Tokenizer::new("<a><b><c/></b><b/></a>");
        let (_, stats) = dom.build_with_stats(events, &mut IdentityFactory).unwrap();
        assert_eq!(stats.max_depth, 3);
        assert_eq!(stats.max_held_nodes, 4);
        // start document, 4 starts, 4 ends, end document
        assert_eq!(stats.events, 10);
    }
}
