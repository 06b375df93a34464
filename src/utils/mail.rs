use crate::config::CONFIG;
use crate::types::mail::SendEmail;
use entity::event::Model as EventModel;
use entity::talk::Model as TalkModel;
use pulldown_cmark::{html, Options, Parser};
use reqwest::{Client, ClientBuilder};
use std::time::Instant;
use tracing::{debug, info};

const TALK_CLAIM_REJECTED_TEMPLATE: &str =
    include_str!("../../templates/talk_claim_rejected.md");
const TALK_CLAIM_REJECTED_SUBJECT: &str = "Your talk claim has been rejected";

pub async fn send_email(email: SendEmail) -> Result<String, String> {
    let cfg = &CONFIG
        .get()
        .ok_or_else(|| "mail is not configured".to_string())?
        .mail;

    let payload =
        serde_json::to_string(&email).map_err(|e| format!("serialize email failed: {e}"))?;
    debug!("mail payload: {payload}");

    let client: Client = ClientBuilder::new()
        .user_agent("eventdir/1.0 (+reqwest)")
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| format!("build client failed: {e}"))?;

    let t0 = Instant::now();
    let res = client
        .post(&cfg.endpoint)
        .bearer_auth(&cfg.api_key) // do NOT log the key
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .map_err(|e| format!("send failed: {e}"))?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| format!("read body failed: {e}"))?;
    info!(
        "mail dispatched: HTTP {status} in {} ms",
        t0.elapsed().as_millis()
    );

    if status.is_success() {
        Ok(body)
    } else {
        Err(format!("Resend API error: HTTP {status}: {body}"))
    }
}

/// Fills `{name}` placeholders in a markdown template.
pub fn render_template(template: &str, replacements: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (name, value) in replacements {
        rendered = rendered.replace(&format!("{{{}}}", name), value);
    }
    rendered
}

pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// The plaintext alternative is derived from the HTML body, not from the
/// markdown source.
pub fn html_to_plain_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .trim()
        .to_string()
}

pub fn build_talk_claim_rejected(
    recipients: Vec<String>,
    event: &EventModel,
    talk: &TalkModel,
) -> SendEmail {
    let replacements = [
        ("eventName", event.name.as_str()),
        ("talkTitle", talk.title.as_str()),
    ];
    let message_body = render_template(TALK_CLAIM_REJECTED_TEMPLATE, &replacements);
    let message_html = markdown_to_html(&message_body);

    SendEmail {
        to: recipients,
        subject: TALK_CLAIM_REJECTED_SUBJECT.to_string(),
        text: Some(html_to_plain_text(&message_html)),
        html: Some(message_html),
        ..Default::default()
    }
}

pub async fn mail_talk_claim_rejected(
    recipients: Vec<String>,
    event: &EventModel,
    talk: &TalkModel,
) -> Result<String, String> {
    let mut email = build_talk_claim_rejected(recipients, event, talk);
    if let Some(cfg) = CONFIG.get() {
        email.from = cfg.mail.from_address.clone();
    }
    send_email(email).await
}
