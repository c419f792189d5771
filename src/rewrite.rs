//! Stylesheet rewrite: point `src` at local files and apply the
//! font-size directive.
//!
//! Everything outside the replaced spans is copied through byte-for-byte.

use crate::config::FontSize;
use crate::error::{Result, SyncError};
use crate::model::SrcSpan;
use regex::Regex;
use std::sync::LazyLock;

static RE_FONT_SIZE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*font-size:[^;]+;\n").unwrap());

const FONT_SIZE_MARKER: &str = "font-size:";

/// Separator between rewritten `src` entries.
const SRC_ENTRY_SEPARATOR: &str = ",\n    ";

/// What [`apply_font_size`] did to the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSizeOutcome {
    Unchanged,
    Removed,
    Replaced,
    NotFound,
}

/// Local file name for a font URL: `{filename}.{ext}`.
///
/// The extension is whatever follows the last `.` of the path with the
/// query string dropped. Two fonts with the same extension share a name.
/// A path without any `.` takes its "extension" from the host, so
/// `https://cdn.example.com/font` maps to `{filename}.com/font`.
pub fn local_file_name(filename: &str, url: &str) -> String {
    let path = url.split('?').next().unwrap_or(url);
    let ext = path.rsplit('.').next().unwrap_or(path);
    format!("{}.{}", filename, ext)
}

/// `url('./iconfont.woff2?t=123') format('woff2')`
pub fn font_src_entry(local_file_name: &str, timestamp: &str, format: &str) -> String {
    format!("url('./{}?t={}') {}", local_file_name, timestamp, format)
}

/// Replace the `src` declaration with the given entries.
///
/// The terminating `;` at `span.end` is kept. A missing span is an error:
/// splicing at an unknown offset would corrupt the stylesheet.
pub fn rebuild_stylesheet(css: &str, span: Option<SrcSpan>, entries: &[String]) -> Result<String> {
    let span = span.ok_or(SyncError::MissingSrcDeclaration)?;

    let mut out = String::with_capacity(css.len());
    out.push_str(&css[..span.start]);
    out.push_str("src: ");
    out.push_str(&entries.join(SRC_ENTRY_SEPARATOR));
    out.push_str(&css[span.end..]);
    Ok(out)
}

/// Apply the font-size directive to the first `font-size:` declaration.
pub fn apply_font_size(css: &str, font_size: &FontSize) -> (String, FontSizeOutcome) {
    match font_size {
        FontSize::Keep => (css.to_string(), FontSizeOutcome::Unchanged),
        FontSize::Remove => {
            if RE_FONT_SIZE_LINE.is_match(css) {
                let out = RE_FONT_SIZE_LINE.replace(css, "\n").into_owned();
                (out, FontSizeOutcome::Removed)
            } else {
                (css.to_string(), FontSizeOutcome::NotFound)
            }
        }
        FontSize::Replace(value) => match replace_font_size(css, value) {
            Some(out) => (out, FontSizeOutcome::Replaced),
            None => (css.to_string(), FontSizeOutcome::NotFound),
        },
    }
}

/// `font-size: 16px;` → `font-size: {value};`, keeping the original `;`.
fn replace_font_size(css: &str, value: &str) -> Option<String> {
    let start = css.find(FONT_SIZE_MARKER)?;
    let end = css[start..]
        .find(';')
        .map(|offset| start + offset)
        .unwrap_or(css.len());

    Some(format!("{}font-size: {}{}", &css[..start], value, &css[end..]))
}
