//! Tests for loading and validating edge tables.
mod common;
use junction::prelude::*;
use std::io::{Cursor, Write};
use std::path::Path;

fn load_jsonl(text: &str) -> Result<EdgeSet, LoadError> {
    load_reader(Cursor::new(text), InputFormat::JsonLines)
}

fn load_tsv(text: &str) -> Result<EdgeSet, LoadError> {
    load_reader(Cursor::new(text), InputFormat::Tsv)
}

#[test]
fn test_jsonl_column_aliases_are_normalized() {
    let text = r#"{"_key": "e1", "from": "A", "to": "B", "length": 12.5, "wayid": "w1"}
{"edgeid": "e2", "source": "B", "target": "C", "length": 3, "way_id": "w1"}
{"edge_id": "e3", "from": 1, "to": 2, "length": 0.5, "wayid": 7}
"#;
    let edges = load_jsonl(text).unwrap();
    assert_eq!(edges.len(), 3);

    assert_eq!(edges[0].id, Key::from("e1"));
    assert_eq!(edges[0].source, Key::from("A"));
    assert_eq!(edges[0].target, Key::from("B"));
    assert_eq!(edges[0].length, 12.5);
    assert_eq!(edges[0].way_id, Key::from("w1"));

    assert_eq!(edges[1].id, Key::from("e2"));
    assert_eq!(edges[1].length, 3.0);

    assert_eq!(edges[2].source, Key::Int(1));
    assert_eq!(edges[2].target, Key::Int(2));
    assert_eq!(edges[2].way_id, Key::Int(7));
}

#[test]
fn test_jsonl_keeps_passthrough_attributes_and_skips_blank_lines() {
    let text = r#"
{"edge_id": 1, "source": "A", "target": "B", "length": 1.0, "way_id": "w", "name": "High Street", "lanes": 2}

"#;
    let edges = load_jsonl(text).unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].attributes["name"], "High Street");
    assert_eq!(edges[0].attributes["lanes"], 2);
    assert!(!edges[0].attributes.contains_key("edge_id"));
}

#[test]
fn test_duplicate_identifiers_are_fatal() {
    let text = r#"{"edge_id": 1, "source": "A", "target": "B", "length": 1.0, "way_id": "w"}
{"edge_id": 2, "source": "B", "target": "C", "length": 1.0, "way_id": "w"}
{"edge_id": 2, "source": "C", "target": "D", "length": 1.0, "way_id": "w"}
{"edge_id": 3, "source": "D", "target": "E", "length": 1.0, "way_id": "w"}
"#;
    match load_jsonl(text) {
        Err(LoadError::DuplicateIdentifier { ids, records }) => {
            assert_eq!(ids, vec![Key::Int(2)]);
            assert_eq!(records.len(), 2);
            assert!(records.iter().all(|e| e.id == Key::Int(2)));
            assert_eq!(records[0].source, Key::from("B"));
            assert_eq!(records[1].source, Key::from("C"));
        }
        other => panic!("expected DuplicateIdentifier, got {:?}", other),
    }
}

#[test]
fn test_duplicate_identifier_error_names_the_ids() {
    let edges = vec![
        Edge::new("x", "A", "B", 1.0, "w"),
        Edge::new("x", "B", "C", 1.0, "w"),
        Edge::new("y", "C", "D", 1.0, "w"),
        Edge::new("y", "D", "E", 1.0, "w"),
    ];
    let err = EdgeSet::new(edges).unwrap_err();
    let message = err.to_string();
    let mut lines = message.lines();
    assert_eq!(lines.next(), Some("Duplicate edge IDs: x, y"));

    // Every offending row follows, as JSON, in input order.
    let rows: Vec<serde_json::Value> = lines
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["edge_id"], "x");
    assert_eq!(rows[0]["source"], "A");
    assert_eq!(rows[3]["edge_id"], "y");
    assert_eq!(rows[3]["target"], "E");
}

#[test]
fn test_missing_field_reports_line_number() {
    let text = r#"{"edge_id": 1, "source": "A", "target": "B", "length": 1.0, "way_id": "w"}
{"edge_id": 2, "source": "B", "target": "C", "way_id": "w"}
"#;
    match load_jsonl(text) {
        Err(LoadError::MalformedRecord { line, message }) => {
            assert_eq!(line, 2);
            assert!(message.contains("length"), "message was {}", message);
        }
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn test_unparsable_json_line_is_malformed() {
    let text = "{\"edge_id\": 1, \"source\": \"A\", \"target\": \"B\", \"length\": 1.0, \"way_id\": \"w\"}\nnot json\n";
    assert!(matches!(
        load_jsonl(text),
        Err(LoadError::MalformedRecord { line: 2, .. })
    ));
}

#[test]
fn test_tsv_with_aliases_and_extra_columns() {
    let text = "edgeid\tfrom\tto\tlength\twayid\tname\n\
                10\tA\tB\t12.5\tw1\tHigh Street\n\
                11\tB\t7\t3\tw1\tHigh Street\n";
    let edges = load_tsv(text).unwrap();
    assert_eq!(edges.len(), 2);

    assert_eq!(edges[0].id, Key::Int(10));
    assert_eq!(edges[0].source, Key::from("A"));
    assert_eq!(edges[0].length, 12.5);
    assert_eq!(edges[0].attributes["name"], "High Street");

    assert_eq!(edges[1].target, Key::Int(7));
    assert_eq!(edges[1].length, 3.0);
}

#[test]
fn test_tsv_handles_crlf_line_endings() {
    let text = "edge_id\tsource\ttarget\tlength\tway_id\r\n1\tA\tB\t2.0\tw\r\n";
    let edges = load_tsv(text).unwrap();
    assert_eq!(edges[0].way_id, Key::from("w"));
    assert_eq!(edges[0].length, 2.0);
}

#[test]
fn test_tsv_quoted_cells() {
    let text = "edge_id\tsource\ttarget\tlength\tway_id\tname\n\
                1\t\"A\"\tB\t2.0\tw\t\"High\tStreet\"\n\
                2\tB\tC\t\"3\"\tw\t\"The \"\"Old\"\" Road\"\n";
    let edges = load_tsv(text).unwrap();
    assert_eq!(edges.len(), 2);

    assert_eq!(edges[0].source, Key::from("A"));
    assert_eq!(edges[0].attributes["name"], "High\tStreet");
    assert_eq!(edges[1].length, 3.0);
    assert_eq!(edges[1].attributes["name"], "The \"Old\" Road");
}

#[test]
fn test_tsv_row_with_wrong_column_count() {
    let text = "edge_id\tsource\ttarget\tlength\tway_id\n\
                1\tA\tB\t2.0\tw\n\
                2\tB\tC\n";
    match load_tsv(text) {
        Err(LoadError::MalformedRecord { line, message }) => {
            assert_eq!(line, 3);
            assert!(message.contains("expected 5 columns"));
        }
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn test_tsv_empty_required_cell_is_malformed() {
    let text = "edge_id\tsource\ttarget\tlength\tway_id\n1\tA\tB\t\tw\n";
    assert!(matches!(
        load_tsv(text),
        Err(LoadError::MalformedRecord { line: 2, .. })
    ));
}

#[test]
fn test_input_format_detection() {
    assert_eq!(
        InputFormat::detect(Path::new("roads.tsv"), false),
        InputFormat::Tsv
    );
    assert_eq!(
        InputFormat::detect(Path::new("data/roads.TSV"), false),
        InputFormat::Tsv
    );
    assert_eq!(
        InputFormat::detect(Path::new("roads.jsonl"), false),
        InputFormat::JsonLines
    );
    assert_eq!(
        InputFormat::detect(Path::new("roads.jsonl"), true),
        InputFormat::Tsv
    );
    assert_eq!(
        InputFormat::detect(Path::new("roads"), false),
        InputFormat::JsonLines
    );
}

#[test]
fn test_load_path_reads_file() {
    let mut file = tempfile::Builder::new().suffix(".tsv").tempfile().unwrap();
    writeln!(file, "edge_id\tsource\ttarget\tlength\tway_id").unwrap();
    writeln!(file, "1\tA\tB\t2.0\tw").unwrap();
    writeln!(file, "2\tB\tC\t3.0\tw").unwrap();
    file.flush().unwrap();

    let format = InputFormat::detect(file.path(), false);
    let edges = load_path(file.path(), format).unwrap();
    assert_eq!(edges.len(), 2);
}

#[test]
fn test_load_path_missing_file_is_io_error() {
    let result = load_path(Path::new("/nonexistent/edges.jsonl"), InputFormat::JsonLines);
    assert!(matches!(result, Err(LoadError::Io(_))));
}
