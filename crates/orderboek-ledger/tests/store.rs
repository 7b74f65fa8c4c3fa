//! Integration tests for `LedgerStore` against real files.

use orderboek_ledger::{decode_line, LedgerRow, LedgerStore, HEADER};

fn sample_row(order_id: &str, ean: &str) -> LedgerRow {
    LedgerRow {
        order_id: order_id.to_owned(),
        order_date: "2024-11-05T14:21:45+01:00".to_owned(),
        ean: ean.to_owned(),
        quantity: 2,
        product_name: "Widget".to_owned(),
        brand: "Acme".to_owned(),
        fulfilment_method: "VVB".to_owned(),
        customer_name: "Jan Jansen".to_owned(),
        customer_address: "Dorpsstraat 1".to_owned(),
        city: "Utrecht".to_owned(),
        postal_code: "3511 AB".to_owned(),
        country: "NL".to_owned(),
    }
}

fn store_in(dir: &tempfile::TempDir) -> LedgerStore {
    LedgerStore::new(dir.path().join("orders.csv"))
}

#[test]
fn load_on_a_missing_file_returns_an_empty_set() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let seen = store.load().unwrap();
    assert!(seen.is_empty());
    assert!(!store.path().exists());
}

#[test]
fn append_creates_the_file_with_a_header() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    store.append(&[sample_row("1001", "111")]).unwrap();

    let contents = std::fs::read_to_string(store.path()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(decode_line(lines[0]), HEADER);
    assert_eq!(
        lines[1],
        "1001;2024-11-05T14:21:45+01:00;111;2;Widget;Acme;VVB;Jan Jansen;Dorpsstraat 1;Utrecht;3511 AB;NL"
    );
}

#[test]
fn append_with_no_rows_still_creates_the_header() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    store.append(&[]).unwrap();

    let contents = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(contents.lines().count(), 1);
}

#[test]
fn repeated_appends_write_the_header_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    store.append(&[sample_row("1001", "111")]).unwrap();
    store.append(&[sample_row("1002", "222")]).unwrap();

    let contents = std::fs::read_to_string(store.path()).unwrap();
    let headers = contents
        .lines()
        .filter(|l| l.starts_with("OrderID"))
        .count();
    assert_eq!(headers, 1);
    assert_eq!(contents.lines().count(), 3);
}

#[test]
fn load_returns_recorded_order_ids_without_the_header() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    store
        .append(&[sample_row("1001", "111"), sample_row("1002", "222")])
        .unwrap();

    let seen = store.load().unwrap();
    assert_eq!(seen.len(), 2);
    assert!(seen.contains("1001"));
    assert!(seen.contains("1002"));
    assert!(!seen.contains("OrderID"));
}

#[test]
fn exists_scans_for_a_recorded_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    assert!(!store.exists("1001").unwrap());

    store.append(&[sample_row("1001", "111")]).unwrap();

    assert!(store.exists("1001").unwrap());
    assert!(!store.exists("9999").unwrap());
}

#[test]
fn fields_containing_the_delimiter_round_trip_quoted() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let mut row = sample_row("1001", "111");
    row.product_name = "Widget; deluxe \"edition\"".to_owned();
    store.append(&[row]).unwrap();

    let contents = std::fs::read_to_string(store.path()).unwrap();
    let data_line = contents.lines().nth(1).unwrap();
    let fields = decode_line(data_line);
    assert_eq!(fields[0], "1001");
    assert_eq!(fields[4], "Widget; deluxe \"edition\"");
    assert_eq!(fields.len(), HEADER.len());

    // The quoted product name must not disturb the id column scan.
    assert!(store.exists("1001").unwrap());
}

#[test]
fn load_tolerates_a_file_without_a_header() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    std::fs::write(
        store.path(),
        "1001;2024-11-05;111;2;Widget;Acme;VVB;Jan Jansen;Dorpsstraat 1;Utrecht;3511 AB;NL\n",
    )
    .unwrap();

    let seen = store.load().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen.contains("1001"));
}
