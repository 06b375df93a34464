use eventdir::types::error::AppError;
use eventdir::types::request::PagingParams;
use eventdir::utils::webutils::{escape_html, parse_item_id};

#[test]
fn parse_item_id_accepts_numeric_segments() {
    assert_eq!(parse_item_id("12", "Event not found").unwrap(), 12);
}

#[test]
fn parse_item_id_rejects_non_numeric_segments() {
    for raw in ["", "abc", "12abc", "1.5"] {
        match parse_item_id(raw, "Event not found") {
            Err(AppError::NotFound(message)) => assert_eq!(message, "Event not found"),
            other => panic!("expected NotFound for {:?}, got {:?}", raw, other),
        }
    }
}

#[test]
fn escape_html_touches_angle_brackets_and_ampersands_only() {
    assert_eq!(escape_html("a&b <c> \"d\" 'e'"), "a&amp;b &lt;c&gt; \"d\" 'e'");
}

#[test]
fn verbosity_requires_the_literal_yes() {
    let yes = PagingParams {
        verbose: Some("yes".to_string()),
        ..Default::default()
    };
    assert!(yes.verbose());

    for value in [Some("no"), Some("YES"), Some("true"), None] {
        let params = PagingParams {
            verbose: value.map(str::to_string),
            ..Default::default()
        };
        assert!(!params.verbose());
    }
}

#[test]
fn paging_defaults_apply_when_absent() {
    let params = PagingParams::default();
    assert_eq!(params.start(), 0);
    assert_eq!(params.results_per_page(), 20);

    let params = PagingParams {
        start: Some(40),
        resultsperpage: Some(5),
        verbose: None,
    };
    assert_eq!(params.start(), 40);
    assert_eq!(params.results_per_page(), 5);
}
