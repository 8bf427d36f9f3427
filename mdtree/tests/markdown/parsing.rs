use mdtree::elements::{
    CustomIdentifier, Heading, Image, LineBreak, Link, OrderedList, Paragraph, StringTable, Table,
    Text, UnorderedList,
};
use mdtree::{parse, parse_configured, parse_with, Element, ParseOptions};

fn kinds(elements: &[Element]) -> Vec<&'static str> {
    elements.iter().map(Element::kind_name).collect()
}

#[test]
fn test_heading() {
    let doc = parse("# Title");

    assert_eq!(doc.len(), 1);
    let heading = doc.find_first::<Heading>().expect("heading");
    assert_eq!(heading.strength(), 1);
    assert_eq!(heading.text(), "Title");
}

#[test]
fn test_heading_levels() {
    let doc = parse("## Two\n\n###### Six");

    let levels: Vec<_> = doc.filter_by_type::<Heading>().map(Heading::strength).collect();
    assert_eq!(levels, vec![2, 6]);
}

#[test]
fn test_soft_break_becomes_line_break() {
    let doc = parse("This is a text\nand this is the second line");

    assert_eq!(kinds(doc.elements()), vec!["Text", "LineBreak", "Text"]);
    let texts: Vec<_> = doc.filter_by_type::<Text>().map(Text::value).collect();
    assert_eq!(texts, vec!["This is a text", "and this is the second line"]);
    assert!(doc.elements()[1].is::<LineBreak>());
}

#[test]
fn test_link() {
    let doc = parse(r#"[Link](http://somelink.org "Tooltip")"#);

    assert_eq!(doc.len(), 1);
    let link = doc.find_first::<Link>().expect("link");
    assert_eq!(link.label(), "Link");
    assert_eq!(link.link(), "http://somelink.org");
    assert_eq!(link.tooltip(), Some("Tooltip"));
}

#[test]
fn test_link_without_title_has_no_tooltip() {
    let doc = parse("[Link](http://somelink.org)");

    assert_eq!(doc.find_first::<Link>().unwrap().tooltip(), None);
}

#[test]
fn test_link_inside_heading() {
    let doc = parse("# See [the docs](/docs)");

    let heading = doc.find_first::<Heading>().unwrap();
    assert_eq!(heading.text(), "See the docs");
    assert_eq!(heading.links()[0].link(), "/docs");
}

#[test]
fn test_custom_id_in_heading() {
    let doc = parse_configured("# Title{#anker}", |options| {
        options.enable_parse_custom_id_tokens()
    });

    let heading = doc.find_first::<Heading>().unwrap();
    assert_eq!(heading.text(), "Title");
    assert!(heading.custom_ids().contains(&"anker"));
    // the identifier precedes the text it was lifted from
    assert!(heading.elements()[0].is::<CustomIdentifier>());
}

#[test]
fn test_custom_id_disabled_keeps_braces() {
    let doc = parse("# Title{#anker}");

    let heading = doc.find_first::<Heading>().unwrap();
    assert_eq!(heading.text(), "Title{#anker}");
    assert!(heading.custom_ids().is_empty());
}

#[test]
fn test_custom_id_in_link_label() {
    let options = ParseOptions::default().enable_parse_custom_id_tokens();
    let doc = parse_with("[Label{ref}](/target)", &options);

    let link = doc.find_first::<Link>().unwrap();
    assert_eq!(link.label(), "Label");
    assert_eq!(link.custom_ids(), vec!["ref"]);
}

#[test]
fn test_table() {
    let markdown = "\
| Column1 | Column2 |
|---------|---------|
| A1      |         |
| A2      | B2      |
";
    let doc = parse(markdown);

    assert_eq!(doc.len(), 1);
    let table = doc.find_first::<Table>().expect("table");
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.row_count(), 2);
    assert_eq!(
        table.as_string_table(),
        StringTable::new()
            .add_column_titles(["Column1", "Column2"])
            .add_row(["A1", ""])
            .add_row(["A2", "B2"])
    );
}

#[test]
fn test_table_custom_ids_are_found_in_cells() {
    let markdown = "\
| Name{title} |
|-------------|
| Value{cell} |
";
    let doc = parse_configured(markdown, ParseOptions::enable_parse_custom_id_tokens);

    let table = doc.find_first::<Table>().unwrap();
    assert_eq!(table.custom_ids(), vec!["title", "cell"]);
    assert_eq!(
        table.as_string_table(),
        StringTable::new()
            .add_column_titles(["Name"])
            .add_row(["Value"])
    );
}

#[test]
fn test_unordered_list_flattens_items() {
    let doc = parse("- first\n- second");

    let list = doc.find_first::<UnorderedList>().expect("list");
    assert_eq!(list.len(), 2);
    let items: Vec<_> = list
        .elements()
        .iter()
        .filter_map(Element::as_text)
        .map(Text::value)
        .collect();
    assert_eq!(items, vec!["first", "second"]);
}

#[test]
fn test_ordered_list() {
    let doc = parse("1. one\n2. two\n3. three");

    let list = doc.find_first::<OrderedList>().expect("list");
    assert_eq!(list.len(), 3);
    assert!(doc.find_first::<UnorderedList>().is_none());
}

#[test]
fn test_image() {
    let doc = parse(r#"![Alt *text*](/img.png "Caption")"#);

    let image = doc.find_first::<Image>().expect("image");
    assert_eq!(image.link(), "/img.png");
    assert_eq!(image.label(), "Alt text");
    assert_eq!(image.tooltip(), Some("Caption"));
    assert!(doc.elements()[0].children().is_empty());
}

#[test]
fn test_paragraphs_are_flattened_by_default() {
    let doc = parse("first\n\nsecond");

    assert_eq!(kinds(doc.elements()), vec!["Text", "Text"]);
}

#[test]
fn test_wrapped_paragraphs() {
    let doc = parse_configured("first\n\nsecond", ParseOptions::enable_wrap_into_paragraphs);

    assert_eq!(kinds(doc.elements()), vec!["Paragraph", "Paragraph"]);
    let paragraphs: Vec<_> = doc.filter_by_type::<Paragraph>().collect();
    assert_eq!(
        paragraphs[1].elements()[0].as_text().map(Text::value),
        Some("second")
    );
}

#[test]
fn test_star_emphasis_is_bold() {
    let doc = parse("*star* and _under_ and **strong**");

    let texts: Vec<_> = doc
        .filter_by_type::<Text>()
        .map(|text| (text.value(), text.is_bold()))
        .collect();
    assert_eq!(
        texts,
        vec![
            ("star", true),
            (" and ", false),
            ("under", false),
            (" and ", false),
            ("strong", false),
        ]
    );
}

#[test]
fn test_emphasis_does_not_reach_into_a_link() {
    let doc = parse("*[link](/u)* after");

    let link = doc.find_first::<Link>().unwrap();
    let label = link.elements()[0].as_text().unwrap();
    assert_eq!((label.value(), label.is_bold()), ("link", false));

    let trailing = doc.find_first::<Text>().unwrap();
    assert_eq!((trailing.value(), trailing.is_bold()), (" after", false));
}

#[test]
fn test_emphasis_inside_a_link_label_is_bold() {
    let doc = parse("[*bold* plain](/u)");

    let link = doc.find_first::<Link>().unwrap();
    let texts: Vec<_> = link
        .elements()
        .iter()
        .filter_map(|element| element.as_text())
        .map(|text| (text.value(), text.is_bold()))
        .collect();
    assert_eq!(texts, vec![("bold", true), (" plain", false)]);
}

#[test]
fn test_code_is_skipped() {
    let doc = parse("before `code` after");

    let texts: Vec<_> = doc.filter_by_type::<Text>().map(Text::value).collect();
    assert_eq!(texts, vec!["before ", " after"]);
}

#[test]
fn test_clear_custom_tokens() {
    let doc = parse_configured(
        "# Title{#anker}\n\n[Label{ref}](/target)",
        ParseOptions::enable_parse_custom_id_tokens,
    );

    let cleared = doc.clear_custom_tokens();

    let heading = cleared.find_first::<Heading>().unwrap();
    assert!(heading.custom_ids().is_empty());
    assert_eq!(heading.text(), "Title");
    assert!(cleared.find_first::<Link>().unwrap().custom_ids().is_empty());
    assert_eq!(doc.find_first::<Heading>().unwrap().custom_ids(), vec!["anker"]);
}

#[test]
fn test_element_json() {
    let doc = parse("# T");

    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {
                "kind": "Heading",
                "data": {
                    "level": 1,
                    "elements": [
                        { "kind": "Text", "data": { "value": "T", "bold": false } }
                    ]
                }
            }
        ])
    );
}

#[test]
fn test_list_json_has_a_flat_element_list() {
    let doc = parse("1. one");

    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json[0]["kind"], "OrderedList");
    assert_eq!(json[0]["data"]["elements"][0]["data"]["value"], "one");
    assert_eq!(doc.elements()[0].as_list().map(|list| list.len()), Some(1));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn clear_custom_tokens_is_idempotent(source in "[a-z #{}*\\[\\]()|\\-\n]{0,60}") {
            let doc = parse_configured(&source, ParseOptions::enable_parse_custom_id_tokens);
            let once = doc.clear_custom_tokens();

            prop_assert_eq!(once.clear_custom_tokens(), once);
        }

        #[test]
        fn parsing_never_fails(source in "\\PC{0,80}") {
            let options = ParseOptions::default()
                .enable_wrap_into_paragraphs()
                .enable_parse_custom_id_tokens();
            let _ = parse_with(&source, &options);
        }
    }
}
