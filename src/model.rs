//! Data model for a parsed icon-font stylesheet: no I/O.

/// One `url(...) format(...)` pair from the `src` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontReference {
    /// Absolute URL (protocol-relative URLs get an `https:` prefix)
    pub url: String,
    /// Raw descriptor, e.g. `format('woff2')`
    pub format: String,
}

/// Byte range of the `src: ...` declaration.
///
/// `start` points at `src:`, `end` at the terminating `;`, which stays
/// outside the replaced region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SrcSpan {
    pub start: usize,
    pub end: usize,
}

/// Everything extracted from a stylesheet in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedStylesheet {
    /// `None` when the text has no `src:` declaration
    pub src_span: Option<SrcSpan>,
    /// Cache-buster taken from the first font URL, or the current time
    pub timestamp: String,
    /// Font references in declaration order
    pub fonts: Vec<FontReference>,
    /// Names from `.name:before {` rules in order of appearance.
    /// Repeated rules produce repeated names.
    pub icon_class_names: Vec<String>,
}
