use encoding_rs::{UTF_8, WINDOWS_1251};
use scraper::{Html, Selector};

const REPLACEMENT: char = '\u{FFFD}';

/// Title and first heading of a page, ready to be written into a row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageFields {
    pub title: String,
    pub h1: String,
    /// The page was re-decoded as windows-1251.
    pub fallback_used: bool,
}

/// Decode `bytes` as UTF-8 and pull out the title and first `<h1>`.
///
/// When the UTF-8 title contains U+FFFD the bytes are decoded once more as
/// windows-1251 and both fields are taken from that second parse instead.
pub fn extract_fields(bytes: &[u8]) -> PageFields {
    let (html, _) = UTF_8.decode_with_bom_removal(bytes);
    let (mut title, mut h1) = title_and_h1(&html);
    let mut fallback_used = false;

    if title.contains(REPLACEMENT) {
        let (html, _) = WINDOWS_1251.decode_without_bom_handling(bytes);
        (title, h1) = title_and_h1(&html);
        fallback_used = true;
    }

    PageFields {
        title: sanitize_field(&title),
        h1: sanitize_field(&h1),
        fallback_used,
    }
}

/// Replace characters that would break a flat `;`-separated line.
pub fn sanitize_field(text: &str) -> String {
    text.replace('"', "'").replace(['\r', '\n'], " ")
}

fn title_and_h1(html: &str) -> (String, String) {
    let document = Html::parse_document(html);
    (
        first_text(&document, "title"),
        first_text(&document, "h1"),
    )
}

fn first_text(document: &Html, selector: &str) -> String {
    let selector = Selector::parse(selector).unwrap();
    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}
