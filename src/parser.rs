//! Stylesheet parser: string offsets and two regexes, no CSS grammar.
//!
//! Targets the stylesheet shape icon-font hosts publish: one `@font-face`
//! with a multi-format `src:` list, followed by one `.name:before { ... }`
//! rule per glyph. Anything outside those patterns is ignored, and the
//! parser never fails: callers decide what a missing `src:` means.

use crate::model::*;
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_ICON_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.([^\s.:;,{}]+)\s*:before\s*[,{]").unwrap());

const SRC_MARKER: &str = "src:";

// -- Public API ---------------------------------------------------------------

/// Parse stylesheet text into fonts, icon names and the `src` span.
pub fn parse(css: &str) -> ParsedStylesheet {
    let src_span = find_src_span(css);

    let fonts = match src_span {
        Some(span) => parse_font_list(&css[span.start + SRC_MARKER.len()..span.end]),
        None => Vec::new(),
    };

    let timestamp = fonts
        .first()
        .and_then(|font| query_timestamp(&font.url))
        .unwrap_or_else(current_timestamp);

    ParsedStylesheet {
        src_span,
        timestamp,
        fonts,
        icon_class_names: icon_class_names(css),
    }
}

/// Locate the first `src:` and the `;` that closes it.
/// An unterminated declaration runs to the end of the text.
pub fn find_src_span(css: &str) -> Option<SrcSpan> {
    let start = css.find(SRC_MARKER)?;
    let end = css[start..]
        .find(';')
        .map(|offset| start + offset)
        .unwrap_or(css.len());
    Some(SrcSpan { start, end })
}

/// Collect the capture of every `.name:before {` rule, in order.
///
/// Each selector of a list (`.a:before, .b:before {`) yields a name. A
/// compound selector yields its last class: `.icon-a.active:before` → `active`.
pub fn icon_class_names(css: &str) -> Vec<String> {
    RE_ICON_CLASS
        .captures_iter(css)
        .map(|caps| caps[1].to_string())
        .collect()
}

// -- Font list ----------------------------------------------------------------

fn parse_font_list(body: &str) -> Vec<FontReference> {
    body.trim()
        .split(',')
        .filter(|segment| !segment.trim().is_empty())
        .map(parse_font_entry)
        .collect()
}

/// `url('//host/font.woff2?t=1') format('woff2')` → FontReference.
fn parse_font_entry(segment: &str) -> FontReference {
    let mut tokens = segment.split_whitespace();
    let url = unwrap_url(tokens.next().unwrap_or(""));
    let format = trim_after_paren(tokens.next().unwrap_or(""));

    let url = if url.starts_with("//") {
        format!("https:{}", url)
    } else {
        url.to_string()
    };

    FontReference {
        url,
        format: format.to_string(),
    }
}

/// Fixed-offset slice: drops `url('` and `')`.
fn unwrap_url(token: &str) -> &str {
    token.get(5..token.len().saturating_sub(2)).unwrap_or("")
}

/// Drop anything after the last `)`, e.g. a stray `,` or `;`.
fn trim_after_paren(token: &str) -> &str {
    match token.rfind(')') {
        Some(pos) => &token[..=pos],
        None => token,
    }
}

// -- Timestamp ----------------------------------------------------------------

/// `https://host/font.woff2?t=12345` → `12345`.
fn query_timestamp(url: &str) -> Option<String> {
    let query = url.split('?').nth(1)?;
    query.split('=').nth(1).map(str::to_string)
}

fn current_timestamp() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}
