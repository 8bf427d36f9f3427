//! Processor engine
//!
//!     A processor walks a parsed document depth first and dispatches every element to the
//!     handlers registered for its kind. A registration is keyed by an [`ElementKind`]: a handler
//!     for [`Heading`](crate::elements::Heading) fires for headings only, one for
//!     [`Column`](crate::elements::Column) fires for columns and cells, one for
//!     [`BasicList`](crate::elements::BasicList) fires for both kinds of list, one for
//!     [`ElementWithChildren`](crate::elements::ElementWithChildren) fires for every structural
//!     element and one for [`Element`] fires for everything. All matching handlers run, in
//!     registration order.
//!
//!     After the handlers for an element have run, its children are processed with the same
//!     handlers, unless one of them took control of the descent through [`ProcessorControl`]:
//!
//!     - `process_children_now` descends immediately, so the handler can act after its subtree.
//!     - `do_not_process_children` skips the subtree.
//!     - `process_children_now_with` descends with a separately configured handler set; the
//!       outer handlers never see that subtree.
//!
//!     Handlers are `Fn` and may be re-entered while their own subtree is processed. State that
//!     handlers accumulate lives outside the processor, typically in a `Cell` or `RefCell`.

use crate::document::ParsedDocument;
use crate::elements::{Element, ElementKind};
use tracing::trace;

type Handler<'a> = Box<dyn Fn(&Element, &mut ProcessorControl<'_>) + 'a>;

/// An ordered set of typed handlers.
#[derive(Default)]
pub struct Visitors<'a> {
    handlers: Vec<Handler<'a>>,
}

impl<'a> Visitors<'a> {
    pub fn new() -> Self {
        Visitors {
            handlers: Vec::new(),
        }
    }

    /// Register a handler for elements narrowable to `T`, with control over the descent.
    pub fn add_visitor<T, F>(&mut self, handler: F) -> &mut Self
    where
        T: ElementKind + 'static,
        F: Fn(&T, &mut ProcessorControl<'_>) + 'a,
    {
        self.handlers.push(Box::new(
            move |element: &Element, control: &mut ProcessorControl<'_>| {
                if let Some(narrowed) = T::narrow(element) {
                    handler(narrowed, control);
                }
            },
        ));
        self
    }

    /// Register a handler for elements narrowable to `T` that leaves the descent alone.
    pub fn add_plain_visitor<T, F>(&mut self, handler: F) -> &mut Self
    where
        T: ElementKind + 'static,
        F: Fn(&T) + 'a,
    {
        self.add_visitor::<T, _>(move |element: &T, _: &mut ProcessorControl<'_>| handler(element))
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Process `elements` and, recursively, their children.
    pub fn process(&self, elements: &[Element]) {
        for element in elements {
            let mut control = ProcessorControl::new(element, self);
            for handler in &self.handlers {
                handler(element, &mut control);
            }
            control.process_children_if_pending();
        }
    }
}

impl std::fmt::Debug for Visitors<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Visitors")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChildrenState {
    Pending,
    Processed,
}

/// Per-element descent control handed to every handler.
///
/// All handlers that fire for the same element share one control, so a decision taken by an
/// earlier handler is visible to the later ones.
pub struct ProcessorControl<'c> {
    element: &'c Element,
    visitors: &'c Visitors<'c>,
    state: ChildrenState,
}

impl<'c> ProcessorControl<'c> {
    fn new(element: &'c Element, visitors: &'c Visitors<'c>) -> Self {
        ProcessorControl {
            element,
            visitors,
            state: ChildrenState::Pending,
        }
    }

    /// The element being processed, before narrowing.
    pub fn element(&self) -> &'c Element {
        self.element
    }

    /// Whether the children will still be processed after the handlers return.
    pub fn children_pending(&self) -> bool {
        self.state == ChildrenState::Pending
    }

    /// Process the children now with the current handlers. No-op once they were processed.
    pub fn process_children_now(&mut self) {
        self.process_children_if_pending();
    }

    /// Skip the children of this element.
    pub fn do_not_process_children(&mut self) {
        self.state = ChildrenState::Processed;
    }

    /// Process the children now, using only the handlers registered by `configure`.
    pub fn process_children_now_with<'s, F>(&mut self, configure: F)
    where
        F: FnOnce(&mut Visitors<'s>),
    {
        let mut visitors = Visitors::new();
        configure(&mut visitors);
        trace!(
            parent = self.element.kind_name(),
            children = self.element.children().len(),
            handlers = visitors.len(),
            "descending with a separate handler set"
        );
        visitors.process(self.element.children());
        self.state = ChildrenState::Processed;
    }

    fn process_children_if_pending(&mut self) {
        if self.state == ChildrenState::Processed {
            return;
        }
        self.state = ChildrenState::Processed;

        let children = self.element.children();
        if !children.is_empty() {
            trace!(
                parent = self.element.kind_name(),
                children = children.len(),
                "descending"
            );
            self.visitors.process(children);
        }
    }
}

/// A handler set bound to a document.
///
/// ```ignore
/// let headings = Cell::new(0);
/// doc.new_processor()
///     .add_plain_visitor(|_: &Heading| headings.set(headings.get() + 1))
///     .process();
/// ```
#[derive(Debug)]
pub struct Processor<'d, 'a> {
    document: &'d ParsedDocument,
    visitors: Visitors<'a>,
}

impl<'d, 'a> Processor<'d, 'a> {
    pub fn new(document: &'d ParsedDocument) -> Self {
        Processor {
            document,
            visitors: Visitors::new(),
        }
    }

    pub fn add_visitor<T, F>(mut self, handler: F) -> Self
    where
        T: ElementKind + 'static,
        F: Fn(&T, &mut ProcessorControl<'_>) + 'a,
    {
        self.visitors.add_visitor::<T, F>(handler);
        self
    }

    pub fn add_plain_visitor<T, F>(mut self, handler: F) -> Self
    where
        T: ElementKind + 'static,
        F: Fn(&T) + 'a,
    {
        self.visitors.add_plain_visitor::<T, F>(handler);
        self
    }

    /// Walk the whole document and hand it back unchanged.
    pub fn process(self) -> &'d ParsedDocument {
        trace!(
            elements = self.document.len(),
            handlers = self.visitors.len(),
            "processing document"
        );
        self.visitors.process(self.document.elements());
        self.document
    }
}
