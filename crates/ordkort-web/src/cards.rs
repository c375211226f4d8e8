//! Flashcard HTML rendering

use ordkort_domain::VocabEntry;

/// Stylesheet embedded ahead of the card markup
const CARD_STYLE: &str = r#"<style>
    .flashcards {
        display: flex;
        flex-wrap: wrap;
        gap: 24px;
        margin: 32px auto;
        justify-content: center;
        max-width: 1000px;
        font-family: 'Segoe UI', Arial, sans-serif;
    }
    .card {
        background: linear-gradient(135deg, #23232a 60%, #18181b 100%);
        border: none;
        border-radius: 18px;
        box-shadow: 0 4px 24px rgba(0,0,0,0.25), 0 1.5px 4px rgba(0,0,0,0.18);
        padding: 28px 22px 20px 22px;
        width: 300px;
        text-align: left;
        transition: transform 0.15s, box-shadow 0.15s;
        position: relative;
    }
    .card:hover {
        transform: translateY(-6px) scale(1.03);
        box-shadow: 0 8px 32px rgba(0,0,0,0.35), 0 2px 8px rgba(0,0,0,0.22);
    }
    .card strong {
        color: #60a5fa;
        font-size: 1.25em;
        letter-spacing: 0.02em;
    }
    .card p {
        margin: 0.5em 0;
        color: #f3f4f6;
        font-size: 1.07em;
        line-height: 1.5;
    }
    .card i {
        color: #fbbf24;
        font-size: 0.98em;
    }
    .card .pos {
        color: #a1a1aa;
    }
    .card::before {
        content: "";
        display: block;
        width: 36px;
        height: 4px;
        background: linear-gradient(90deg, #60a5fa 60%, #818cf8 100%);
        border-radius: 2px;
        margin-bottom: 14px;
    }
</style>"#;

/// Escape text for safe embedding in HTML
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render one visual card per entry
///
/// Each card shows term + part of speech, definition, the example sentence
/// in italics, and the extra note. Entry fields are HTML-escaped; the LLM
/// wrote them, so they are untrusted.
pub fn build_flashcard_html(entries: &[VocabEntry]) -> String {
    let mut html = String::from(CARD_STYLE);
    html.push_str("<div class='flashcards'>");
    for entry in entries {
        html.push_str(&format!(
            "<div class='card'>\
             <p><strong>{}</strong> <span class='pos'>({})</span><br>{}</p>\
             <p><i>{}</i><br>{}</p>\
             </div>",
            escape(&entry.term),
            escape(&entry.part_of_speech),
            escape(&entry.definition),
            escape(&entry.example),
            escape(&entry.extra_note),
        ));
    }
    html.push_str("</div>");
    html
}
