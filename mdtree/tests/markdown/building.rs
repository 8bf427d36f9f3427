use mdtree::elements::{Heading, Link, StringTable, Table, Text};
use mdtree::{builder, HeadingStrength, MdTreeError, ParseOptions, TextBuilder};
use tempfile::tempdir;

fn sample_table() -> StringTable {
    StringTable::new()
        .add_column_titles(["Column1", "Column2"])
        .add_row(["A1", ""])
        .add_row(["A2", "B2"])
}

#[test]
fn test_round_trip() {
    let table = sample_table();
    let markdown = builder()
        .add_heading("Title")
        .add_paragraph(|paragraph| {
            paragraph.add_text("first line").add_text("second line");
        })
        .add_link("Example", "http://example.org", Some("Tooltip"))
        .add_line_break()
        .add_table(&table)
        .build();

    let doc = markdown.parse();

    assert_eq!(doc.find_first::<Heading>().unwrap().text(), "Title");
    let link = doc.find_first::<Link>().unwrap();
    assert_eq!(link.label(), "Example");
    assert_eq!(link.link(), "http://example.org");
    assert_eq!(link.tooltip(), Some("Tooltip"));
    assert_eq!(doc.find_first::<Table>().unwrap().as_string_table(), table);
}

#[test]
fn test_tooltip_with_quotes_round_trip() {
    let markdown = builder()
        .add_link("L", "http://x", Some(r#"a "q" b"#))
        .build();

    let doc = markdown.parse();

    assert_eq!(doc.len(), 1);
    let link = doc.find_first::<Link>().unwrap();
    assert_eq!(link.label(), "L");
    assert_eq!(link.tooltip(), Some(r#"a "q" b"#));
}

#[test]
fn test_heading_strength_round_trip() {
    let markdown = builder()
        .add_heading_with(HeadingStrength::H4, "Deep")
        .build();

    let heading = markdown.parse().find_first::<Heading>().cloned().unwrap();
    assert_eq!(heading.strength(), 4);
    assert_eq!(heading.text(), "Deep");
}

#[test]
fn test_paragraph_round_trip_with_wrapping() {
    let markdown = builder()
        .add_text("intro")
        .add_paragraph(|paragraph| {
            paragraph.add_texts(["one", "two"]);
        })
        .build();

    let doc = markdown.parse_with(&ParseOptions::default().enable_wrap_into_paragraphs());

    assert_eq!(doc.len(), 2);
    let second = doc.elements()[1].as_paragraph().unwrap();
    let texts: Vec<_> = second
        .elements()
        .iter()
        .filter_map(|element| element.as_text())
        .map(Text::value)
        .collect();
    assert_eq!(texts, vec!["one", "two"]);
}

#[test]
fn test_pipes_in_cells_survive_as_spaces() {
    let table = StringTable::new()
        .add_column_titles(["a|b"])
        .add_row(["c|d"]);

    let doc = builder().add_table(&table).build().parse();

    assert_eq!(
        doc.find_first::<Table>().unwrap().as_string_table(),
        StringTable::new().add_column_titles(["a b"]).add_row(["c d"])
    );
}

#[test]
fn test_write_to() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.md");

    let markdown = builder().add_heading("Written").build();
    markdown.write_to(&path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Written\n");
}

#[test]
fn test_write_to_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("out.md");

    let error = builder().add_text("x").build().write_to(&path).unwrap_err();

    match &error {
        MdTreeError::Write { path: failed, .. } => assert_eq!(failed, &path),
    }
    assert!(error.to_string().contains("out.md"));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn heading_text_round_trips(text in "[A-Za-z][A-Za-z ]{0,20}[A-Za-z]") {
            let markdown = builder()
                .add_heading_with(HeadingStrength::H2, &text)
                .build();

            let doc = markdown.parse();
            let heading = doc.find_first::<Heading>().unwrap();
            prop_assert_eq!(heading.text(), text);
            prop_assert_eq!(heading.strength(), 2);
        }

        #[test]
        fn link_tooltip_round_trips(tooltip in "[a-z \"\\\\]{1,12}") {
            let doc = builder().add_link("label", "/target", Some(&tooltip)).build().parse();

            let link = doc.find_first::<Link>().unwrap();
            prop_assert_eq!(link.tooltip(), Some(tooltip.as_str()));
        }

        #[test]
        fn table_cells_round_trip(
            cells in proptest::collection::vec("[A-Za-z0-9]{1,8}", 3)
        ) {
            let table = StringTable::new()
                .add_column_titles(["Key", "Value", "Note"])
                .add_row(cells.clone());

            let doc = builder().add_table(&table).build().parse();

            prop_assert_eq!(doc.find_first::<Table>().unwrap().as_string_table(), table);
        }
    }
}
