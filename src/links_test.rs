use super::*;

const NUMBER: &str = "5493510000000";

#[test]
fn placeholder_detection() {
    assert!(is_placeholder("https://wa.me/XXXXXXXXXXX"));
    assert!(is_placeholder("https://wa.me/XXXXXXXXXXX?text=Hola"));
    assert!(!is_placeholder("https://wa.me/5493510000000"));
    assert!(!is_placeholder("#contacto"));
}

#[test]
fn rewrite_preserves_text() {
    assert_eq!(
        rewrite_href("https://wa.me/XXXXXXXXXXX?text=Hola", NUMBER).unwrap(),
        "https://wa.me/5493510000000?text=Hola"
    );
}

#[test]
fn rewrite_without_query() {
    assert_eq!(rewrite_href("https://wa.me/XXXXXXXXXXX", NUMBER).unwrap(), "https://wa.me/5493510000000");
}

#[test]
fn rewrite_keeps_encoded_text_and_drops_other_params() {
    assert_eq!(
        rewrite_href("https://wa.me/XXXXXXXXXXX?utm=nav&text=Hola%2C%20quiero%20info", NUMBER).unwrap(),
        "https://wa.me/5493510000000?text=Hola%2C%20quiero%20info"
    );
}

#[test]
fn unparseable_href_is_an_error() {
    let err = rewrite_href("wa.me/XXXXXXXXXXX?text=Hola", NUMBER).unwrap_err();
    assert!(matches!(err, SiteError::InvalidUrl(_)));
}

#[test]
fn empty_number_is_an_error() {
    assert!(matches!(rewrite_href("https://wa.me/XXXXXXXXXXX", "").unwrap_err(), SiteError::EmptyNumber));
}

#[test]
fn one_bad_link_does_not_block_the_rest() {
    let hrefs = [
        "https://wa.me/XXXXXXXXXXX?text=Hola",
        "http://[wa.me/XXXXXXXXXXX?text=Hola",
        "#servicios",
        "https://wa.me/XXXXXXXXXXX",
    ];
    let rewritten = rewrite_all(hrefs, NUMBER);
    assert_eq!(
        rewritten,
        vec![
            (0, "https://wa.me/5493510000000?text=Hola".to_owned()),
            (3, "https://wa.me/5493510000000".to_owned()),
        ]
    );
}
