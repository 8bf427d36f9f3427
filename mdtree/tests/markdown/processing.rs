use mdtree::elements::{
    BasicList, Column, CustomIdentifier, ElementWithChildren, Heading, Link, Table, Text,
    UnorderedList,
};
use mdtree::{parse_configured, Element, ParseOptions, ProcessorControl};
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;

const DOCUMENT: &str = "\
# Intro{intro}

Some text with a [link{ref}](/target).

- alpha
- beta

| Name{col} | Value |
|-----------|-------|
| a         | 1     |
";

fn parse_document() -> mdtree::ParsedDocument {
    parse_configured(DOCUMENT, |options| {
        options
            .enable_wrap_into_paragraphs()
            .enable_parse_custom_id_tokens()
    })
}

#[test]
fn test_collects_custom_ids_at_any_depth() {
    let doc = parse_document();
    let ids = RefCell::new(Vec::new());

    doc.new_processor()
        .add_plain_visitor(|id: &CustomIdentifier| {
            ids.borrow_mut().push(id.identifier().to_string())
        })
        .process();

    assert_eq!(*ids.borrow(), vec!["intro", "ref", "col"]);
}

#[test]
fn test_counts_every_element() {
    let doc = parse_document();
    let total = Cell::new(0);
    let top_level = doc.len();

    let returned = doc
        .new_processor()
        .add_plain_visitor(|_: &Element| total.set(total.get() + 1))
        .process();

    assert_eq!(returned.len(), top_level);
    assert!(total.get() > top_level);
}

#[test]
fn test_do_not_process_children_of_lists() {
    let doc = parse_document();
    let texts = RefCell::new(Vec::new());

    doc.new_processor()
        .add_visitor(|_: &UnorderedList, control: &mut ProcessorControl<'_>| {
            control.do_not_process_children()
        })
        .add_plain_visitor(|text: &Text| texts.borrow_mut().push(text.value().to_string()))
        .process();

    let texts = texts.borrow();
    assert!(texts.iter().any(|text| text == "Intro"));
    assert!(!texts.iter().any(|text| text == "alpha" || text == "beta"));
}

#[test]
fn test_process_children_now_with_separate_handlers() {
    let doc = parse_document();
    let outer_links = Cell::new(0);
    let labels = RefCell::new(Vec::new());

    doc.new_processor()
        .add_visitor(|_: &Link, control: &mut ProcessorControl<'_>| {
            outer_links.set(outer_links.get() + 1);
            control.process_children_now_with(|visitors| {
                visitors.add_plain_visitor(|text: &Text| {
                    labels.borrow_mut().push(text.value().to_string())
                });
            });
        })
        .add_plain_visitor(|text: &Text| {
            assert_ne!(text.value(), "link", "outer handlers must not see the link subtree")
        })
        .process();

    assert_eq!(outer_links.get(), 1);
    assert_eq!(*labels.borrow(), vec!["link"]);
}

#[test]
fn test_nested_heading_tracking() {
    let doc = parse_document();
    let in_heading = Cell::new(false);
    let heading_texts = RefCell::new(Vec::new());

    doc.new_processor()
        .add_visitor(|_: &Heading, control: &mut ProcessorControl<'_>| {
            in_heading.set(true);
            control.process_children_now();
            in_heading.set(false);
        })
        .add_plain_visitor(|text: &Text| {
            if in_heading.get() {
                heading_texts.borrow_mut().push(text.value().to_string());
            }
        })
        .process();

    assert_eq!(*heading_texts.borrow(), vec!["Intro"]);
}

#[test]
fn test_columns_include_cells() {
    let doc = parse_document();
    let columns = RefCell::new(Vec::new());
    let tables = Cell::new(0);

    doc.new_processor()
        .add_plain_visitor(|_: &Table| tables.set(tables.get() + 1))
        .add_plain_visitor(|column: &Column| columns.borrow_mut().push(column.to_text()))
        .process();

    assert_eq!(tables.get(), 1);
    assert_eq!(*columns.borrow(), vec!["Name", "Value", "a", "1"]);
}

#[test]
fn test_one_list_handler_sees_both_list_kinds() {
    let doc = mdtree::parse("- a\n- b\n\n1. one\n2. two\n3. three\n");
    let lists = RefCell::new(Vec::new());

    doc.new_processor()
        .add_visitor(|list: &BasicList, control: &mut ProcessorControl<'_>| {
            lists
                .borrow_mut()
                .push((control.element().kind_name(), list.len()));
        })
        .process();

    assert_eq!(
        *lists.borrow(),
        vec![("UnorderedList", 2), ("OrderedList", 3)]
    );
}

#[test]
fn test_children_handler_sees_every_structural_element() {
    let doc = parse_document();
    let structural = RefCell::new(BTreeSet::new());
    let expected = RefCell::new(BTreeSet::new());

    doc.new_processor()
        .add_visitor(|_: &ElementWithChildren, control: &mut ProcessorControl<'_>| {
            structural.borrow_mut().insert(control.element().kind_name());
        })
        .add_plain_visitor(|element: &Element| {
            if element.has_children_capability() {
                expected.borrow_mut().insert(element.kind_name());
            }
        })
        .process();

    let structural = structural.into_inner();
    assert_eq!(structural, expected.into_inner());
    assert_eq!(
        structural.into_iter().collect::<Vec<_>>(),
        vec!["Cell", "Column", "Heading", "Link", "Paragraph", "Row", "Table", "UnorderedList"]
    );
}

#[test]
fn test_empty_processor_is_a_no_op() {
    let doc = parse_configured("", ParseOptions::enable_wrap_into_paragraphs);

    assert!(doc.new_processor().process().is_empty());
}
