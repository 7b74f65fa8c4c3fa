use super::*;

#[test]
fn escape_field_leaves_plain_values_alone() {
    assert_eq!(escape_field("1043946570"), "1043946570");
    assert_eq!(escape_field("Jan Jansen"), "Jan Jansen");
}

#[test]
fn escape_field_quotes_the_delimiter() {
    assert_eq!(escape_field("Widget; deluxe"), "\"Widget; deluxe\"");
}

#[test]
fn escape_field_doubles_embedded_quotes() {
    assert_eq!(escape_field("7\" single"), "\"7\"\" single\"");
}

#[test]
fn escape_field_quotes_line_breaks() {
    assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
}

#[test]
fn decode_line_splits_plain_fields() {
    assert_eq!(decode_line("a;b;c"), vec!["a", "b", "c"]);
}

#[test]
fn decode_line_preserves_empty_fields() {
    assert_eq!(decode_line("a;;c"), vec!["a", "", "c"]);
}

#[test]
fn decode_line_reverses_quoting() {
    assert_eq!(
        decode_line("\"Widget; deluxe\";\"7\"\" single\";plain"),
        vec!["Widget; deluxe", "7\" single", "plain"]
    );
}

#[test]
fn encode_then_decode_round_trips() {
    let fields = ["id;1", "he said \"hi\"", "plain", ""];
    let line = encode_line(fields.iter().copied());
    assert_eq!(decode_line(&line), fields);
}

#[test]
fn is_header_matches_the_header_row() {
    let header_line = encode_line(HEADER.iter().copied());
    assert!(is_header(&header_line));
    assert!(!is_header("1043946570;2024-11-05;111;2;;;;;;;;"));
}
