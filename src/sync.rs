//! Sync orchestration: one linear pass, fail-fast, no retries.
//!
//! Steps, in order:
//!
//! 1. **Fetch** the stylesheet
//! 2. **Parse** fonts, timestamp and icon names
//! 3. **Download** each font, one at a time, in declaration order
//! 4. **Rewrite** `src` to the local files and apply the font-size directive
//! 5. **Write** the stylesheet, then the optional type declaration and name list
//!
//! Files written before a failure stay on disk.

use crate::config::{FontSize, SyncIconFontOptions};
use crate::error::{Result, SyncError};
use crate::fetch::ResourceFetcher;
use crate::logger::SyncLogger;
use crate::parser;
use crate::render::name_list::NameListRenderer;
use crate::render::names::canonical_names;
use crate::render::typescript::TypeDeclarationRenderer;
use crate::render::Renderer;
use crate::rewrite::{self, FontSizeOutcome};
use std::fs;
use std::path::{Path, PathBuf};

/// Path for log lines: relative to the working directory when it lies below it.
fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));
    relative.unwrap_or_else(|| path.to_path_buf()).display().to_string()
}

/// Files produced by a completed run.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub font_paths: Vec<PathBuf>,
    pub stylesheet_path: PathBuf,
    pub type_path: Option<PathBuf>,
    pub name_path: Option<PathBuf>,
    pub icon_count: usize,
}

/// Run a full sync with the given collaborators.
pub fn sync_icon_font(
    options: &SyncIconFontOptions,
    fetcher: &dyn ResourceFetcher,
    logger: &dyn SyncLogger,
) -> Result<SyncReport> {
    options.validate()?;

    let url = options.resolved_css_url();
    logger.info(&format!("downloading {}", url));
    let css = fetcher.fetch_text(&url)?;
    logger.info(&format!("downloaded {}", url));

    let parsed = parser::parse(&css);
    if parsed.src_span.is_none() {
        return Err(SyncError::MissingSrcDeclaration);
    }

    fs::create_dir_all(&options.output_dir)
        .map_err(|e| SyncError::io(&options.output_dir, e))?;

    let mut report = SyncReport::default();
    let mut entries = Vec::with_capacity(parsed.fonts.len());

    for font in &parsed.fonts {
        let local = rewrite::local_file_name(&options.filename, &font.url);
        let path = options.output_dir.join(&local);

        logger.info(&format!("downloading {}", font.url));
        let bytes = fetcher.fetch_bytes(&font.url)?;
        write_file(&path, &bytes)?;
        logger.info(&format!("saved {}", display_path(&path)));

        entries.push(rewrite::font_src_entry(&local, &parsed.timestamp, &font.format));
        report.font_paths.push(path);
    }

    let css = rewrite::rebuild_stylesheet(&css, parsed.src_span, &entries)?;
    let css = apply_font_size(&css, &options.font_size, logger);

    let stylesheet_path = options.stylesheet_path();
    write_file(&stylesheet_path, css.as_bytes())?;
    logger.info(&format!("saved {}", display_path(&stylesheet_path)));
    report.stylesheet_path = stylesheet_path;

    let names = canonical_names(
        &parsed.icon_class_names,
        options.font_class_prefix.as_deref(),
    );
    report.icon_count = names.len();

    if let Some(path) = options.type_output_path() {
        let renderer = TypeDeclarationRenderer {
            type_name: &options.type_name,
        };
        write_file(&path, renderer.render(&names).as_bytes())?;
        logger.info(&format!("saved {}", display_path(&path)));
        report.type_path = Some(path);
    }

    if let Some(path) = options.name_output_path() {
        write_file(&path, NameListRenderer.render(&names).as_bytes())?;
        logger.info(&format!("saved {}", display_path(&path)));
        report.name_path = Some(path);
    }

    Ok(report)
}

fn apply_font_size(css: &str, font_size: &FontSize, logger: &dyn SyncLogger) -> String {
    let (css, outcome) = rewrite::apply_font_size(css, font_size);
    match (outcome, font_size) {
        (FontSizeOutcome::Removed, _) => logger.info("removed font-size"),
        (FontSizeOutcome::Replaced, FontSize::Replace(value)) => {
            logger.info(&format!("replaced font-size to {}", value))
        }
        (FontSizeOutcome::NotFound, FontSize::Replace(_)) => {
            logger.info("no font-size rule found")
        }
        _ => {}
    }
    css
}

/// Write `contents`, creating missing parent directories.
fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SyncError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| SyncError::io(path, e))
}
