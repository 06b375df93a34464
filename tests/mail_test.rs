use chrono::Utc;
use entity::{event, talk};
use eventdir::utils::mail::{
    build_talk_claim_rejected, html_to_plain_text, markdown_to_html, render_template,
};

fn sample_event() -> event::Model {
    let now = Utc::now();
    event::Model {
        id: 12,
        name: "RustConf".to_string(),
        description: None,
        starts_at: now,
        ends_at: now,
        created_at: now,
        updated_at: now,
    }
}

fn sample_talk() -> talk::Model {
    let now = Utc::now();
    talk::Model {
        id: 7,
        event_id: 12,
        title: "Borrowing Without Tears".to_string(),
        speaker_name: None,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn render_template_fills_placeholders() {
    let rendered = render_template(
        "Hello {name}, welcome to {place}. Bye {name}!",
        &[("name", "Ada"), ("place", "RustConf")],
    );
    assert_eq!(rendered, "Hello Ada, welcome to RustConf. Bye Ada!");
}

#[test]
fn render_template_leaves_unknown_placeholders_alone() {
    let rendered = render_template("Hello {name}", &[("other", "x")]);
    assert_eq!(rendered, "Hello {name}");
}

#[test]
fn markdown_to_html_renders_markup() {
    let html = markdown_to_html("Some **bold** text");
    assert!(html.contains("<p>"));
    assert!(html.contains("<strong>bold</strong>"));
}

#[test]
fn html_to_plain_text_strips_markup() {
    let text = html_to_plain_text("<p>Hello <strong>world</strong> &amp; friends</p>");
    assert_eq!(text, "Hello world & friends");
}

#[test]
fn talk_claim_rejected_mail_has_subject_and_both_bodies() {
    let email = build_talk_claim_rejected(
        vec!["speaker@test.com".to_string()],
        &sample_event(),
        &sample_talk(),
    );

    assert_eq!(email.subject, "Your talk claim has been rejected");
    assert_eq!(email.to, vec!["speaker@test.com".to_string()]);

    let html = email.html.expect("html body missing");
    assert!(html.contains("RustConf"));
    assert!(html.contains("Borrowing Without Tears"));
    assert!(html.contains("<strong>"));

    let text = email.text.expect("text body missing");
    assert!(text.contains("RustConf"));
    assert!(text.contains("Borrowing Without Tears"));
    assert!(!text.contains('<'));
}
