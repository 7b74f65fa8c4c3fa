use super::*;

#[test]
fn join_url_with_plain_segments() {
    assert_eq!(
        join_url("https://api.bol.com/retailer", "orders?status=OPEN"),
        "https://api.bol.com/retailer/orders?status=OPEN"
    );
}

#[test]
fn join_url_strips_trailing_slash() {
    assert_eq!(
        join_url("https://api.bol.com/retailer/", "orders/123"),
        "https://api.bol.com/retailer/orders/123"
    );
}

#[test]
fn join_url_strips_leading_slash_on_path() {
    assert_eq!(
        join_url("https://api.bol.com/retailer", "/orders/123"),
        "https://api.bol.com/retailer/orders/123"
    );
}
