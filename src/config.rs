//! Sync options and the `.iconfont.yml` document they are loaded from.
//!
//! The YAML keys are camelCase. Defaults are applied at load time and the
//! result is validated before any network activity.

use crate::error::{Result, SyncError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Recognized configuration file names, in lookup order.
pub const CONFIG_FILE_NAMES: &[&str] = &[".iconfont.yml", ".iconfont.yaml"];

pub const DEFAULT_OUTPUT_DIR: &str = "iconfont";
pub const DEFAULT_FILENAME: &str = "iconfont";
pub const DEFAULT_TYPE_NAME: &str = "IconFontName";

/// What to do with the first `font-size:` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontSize {
    #[default]
    Keep,
    Remove,
    Replace(String),
}

/// Where the TypeScript declaration goes, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeOutput {
    /// `{output_dir}/{filename}.ts`
    #[default]
    Default,
    Disabled,
    Path(PathBuf),
}

/// Validated options for one sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncIconFontOptions {
    pub css_url: String,
    pub output_dir: PathBuf,
    /// Base name for the css, font and type files (no directory, no extension)
    pub filename: String,
    pub type_output: TypeOutput,
    pub type_name: String,
    /// Stripped from icon names that start with it
    pub font_class_prefix: Option<String>,
    pub font_size: FontSize,
    /// Bare names land in `output_dir`; paths are used as given
    pub name_output_path: Option<String>,
}

impl SyncIconFontOptions {
    pub fn new(css_url: impl Into<String>) -> Self {
        Self {
            css_url: css_url.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            filename: DEFAULT_FILENAME.to_string(),
            type_output: TypeOutput::Default,
            type_name: DEFAULT_TYPE_NAME.to_string(),
            font_class_prefix: None,
            font_size: FontSize::Keep,
            name_output_path: None,
        }
    }

    /// Check the invariants the sync relies on.
    pub fn validate(&self) -> Result<()> {
        if self.css_url.trim().is_empty() {
            return Err(SyncError::Config("the \"cssUrl\" is required.".into()));
        }
        if self.filename.is_empty() || self.filename.chars().any(std::path::is_separator) {
            return Err(SyncError::Config(format!(
                "the \"filename\" must be a bare name without directories: {:?}",
                self.filename
            )));
        }
        Ok(())
    }

    /// Stylesheet URL with a protocol-relative `//` prefix made `https:`.
    pub fn resolved_css_url(&self) -> String {
        if self.css_url.starts_with("//") {
            format!("https:{}", self.css_url)
        } else {
            self.css_url.clone()
        }
    }

    pub fn stylesheet_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.css", self.filename))
    }

    pub fn type_output_path(&self) -> Option<PathBuf> {
        match &self.type_output {
            TypeOutput::Default => Some(self.output_dir.join(format!("{}.ts", self.filename))),
            TypeOutput::Disabled => None,
            TypeOutput::Path(path) => Some(path.clone()),
        }
    }

    pub fn name_output_path(&self) -> Option<PathBuf> {
        let name = self.name_output_path.as_deref()?;
        if name.chars().any(std::path::is_separator) {
            Some(PathBuf::from(name))
        } else {
            Some(self.output_dir.join(name))
        }
    }
}

// -- YAML document ------------------------------------------------------------

/// Scalar that may be written as a boolean or a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FlagOrString {
    Flag(bool),
    Text(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOptions {
    css_url: Option<String>,
    output_dir: Option<String>,
    filename: Option<String>,
    type_output_path: Option<FlagOrString>,
    type_name: Option<String>,
    font_class_prefix: Option<String>,
    font_size: Option<FlagOrString>,
    name_output_path: Option<String>,
}

/// Empty strings count as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl From<RawOptions> for SyncIconFontOptions {
    fn from(raw: RawOptions) -> Self {
        let mut options = SyncIconFontOptions::new(raw.css_url.unwrap_or_default());

        if let Some(dir) = non_empty(raw.output_dir) {
            options.output_dir = PathBuf::from(dir);
        }
        if let Some(filename) = non_empty(raw.filename) {
            options.filename = filename;
        }
        if let Some(type_name) = non_empty(raw.type_name) {
            options.type_name = type_name;
        }
        options.font_class_prefix = non_empty(raw.font_class_prefix);
        options.name_output_path = non_empty(raw.name_output_path);

        options.type_output = match raw.type_output_path {
            None | Some(FlagOrString::Flag(true)) => TypeOutput::Default,
            Some(FlagOrString::Flag(false)) => TypeOutput::Disabled,
            Some(FlagOrString::Text(path)) if path.is_empty() => TypeOutput::Disabled,
            Some(FlagOrString::Text(path)) => TypeOutput::Path(PathBuf::from(path)),
        };

        options.font_size = match raw.font_size {
            Some(FlagOrString::Flag(false)) => FontSize::Remove,
            Some(FlagOrString::Text(value)) if !value.is_empty() => FontSize::Replace(value),
            _ => FontSize::Keep,
        };

        options
    }
}

/// Parse and validate a YAML configuration document.
pub fn from_yaml_str(document: &str) -> Result<SyncIconFontOptions> {
    let value: serde_yaml::Value = serde_yaml::from_str(document)
        .map_err(|e| SyncError::Config(format!("invalid configuration: {}", e)))?;
    if value.is_null() {
        return Err(SyncError::Config("configuration is empty.".into()));
    }

    let raw: RawOptions = serde_yaml::from_value(value)
        .map_err(|e| SyncError::Config(format!("invalid configuration: {}", e)))?;
    let options = SyncIconFontOptions::from(raw);
    options.validate()?;
    Ok(options)
}

/// Read the first non-empty configuration file from `dir`.
pub fn find_config_document(dir: &Path) -> Result<Option<(PathBuf, String)>> {
    for name in CONFIG_FILE_NAMES {
        let path = dir.join(name);
        if !path.is_file() {
            continue;
        }
        let content = fs::read_to_string(&path).map_err(|e| SyncError::io(&path, e))?;
        if !content.trim().is_empty() {
            return Ok(Some((path, content)));
        }
    }
    Ok(None)
}

/// Load options from an explicit file, or discover one in `dir`.
pub fn load_options(explicit: Option<&Path>, dir: &Path) -> Result<SyncIconFontOptions> {
    let document = match explicit {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|e| SyncError::io(path, e))?;
            Some(content).filter(|c| !c.trim().is_empty())
        }
        None => find_config_document(dir)?.map(|(_, content)| content),
    };

    match document {
        Some(content) => from_yaml_str(&content),
        None => Err(SyncError::Config(format!(
            "config file ({}) is not found or it is empty.",
            CONFIG_FILE_NAMES.join(" or ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_applied() {
        let options = from_yaml_str("cssUrl: //at.alicdn.com/t/c/font_1.css\n").unwrap();
        assert_eq!(options.output_dir, PathBuf::from("iconfont"));
        assert_eq!(options.filename, "iconfont");
        assert_eq!(options.type_name, "IconFontName");
        assert_eq!(options.type_output, TypeOutput::Default);
        assert_eq!(options.font_size, FontSize::Keep);
        assert_eq!(options.font_class_prefix, None);
        assert_eq!(options.name_output_path, None);
        assert_eq!(
            options.resolved_css_url(),
            "https://at.alicdn.com/t/c/font_1.css"
        );
    }

    #[test]
    fn all_fields() {
        let yaml = r#"
cssUrl: https://at.alicdn.com/t/c/font_1.css
outputDir: src/assets/icons
filename: icons
typeOutputPath: src/types/icons.ts
typeName: IconName
fontClassPrefix: icon-
fontSize: 1em
nameOutputPath: names.ts
"#;
        let options = from_yaml_str(yaml).unwrap();
        assert_eq!(options.output_dir, PathBuf::from("src/assets/icons"));
        assert_eq!(options.filename, "icons");
        assert_eq!(
            options.type_output,
            TypeOutput::Path(PathBuf::from("src/types/icons.ts"))
        );
        assert_eq!(options.type_name, "IconName");
        assert_eq!(options.font_class_prefix.as_deref(), Some("icon-"));
        assert_eq!(options.font_size, FontSize::Replace("1em".into()));
        assert_eq!(
            options.name_output_path(),
            Some(PathBuf::from("src/assets/icons/names.ts"))
        );
        assert_eq!(
            options.stylesheet_path(),
            PathBuf::from("src/assets/icons/icons.css")
        );
    }

    #[test]
    fn font_size_tri_state() {
        let remove = from_yaml_str("cssUrl: x\nfontSize: false\n").unwrap();
        assert_eq!(remove.font_size, FontSize::Remove);
        let keep = from_yaml_str("cssUrl: x\nfontSize: true\n").unwrap();
        assert_eq!(keep.font_size, FontSize::Keep);
        let empty = from_yaml_str("cssUrl: x\nfontSize: ''\n").unwrap();
        assert_eq!(empty.font_size, FontSize::Keep);
    }

    #[test]
    fn type_output_disabled() {
        let options = from_yaml_str("cssUrl: x\ntypeOutputPath: false\n").unwrap();
        assert_eq!(options.type_output, TypeOutput::Disabled);
        assert_eq!(options.type_output_path(), None);
    }

    #[test]
    fn type_output_default_path() {
        let options = from_yaml_str("cssUrl: x\noutputDir: out\nfilename: glyphs\n").unwrap();
        assert_eq!(options.type_output_path(), Some(PathBuf::from("out/glyphs.ts")));
    }

    #[test]
    fn name_output_with_directory_used_as_is() {
        let options = from_yaml_str("cssUrl: x\nnameOutputPath: src/names.ts\n").unwrap();
        assert_eq!(options.name_output_path(), Some(PathBuf::from("src/names.ts")));
    }

    #[test]
    fn missing_css_url() {
        let err = from_yaml_str("outputDir: icons\n").unwrap_err();
        assert!(err.to_string().contains("cssUrl"));
    }

    #[test]
    fn empty_document() {
        assert!(matches!(from_yaml_str(""), Err(SyncError::Config(_))));
        assert!(matches!(from_yaml_str("# nothing\n"), Err(SyncError::Config(_))));
    }

    #[test]
    fn filename_with_directory_rejected() {
        let err = from_yaml_str("cssUrl: x\nfilename: a/b\n").unwrap_err();
        assert!(err.to_string().contains("filename"));
    }

    #[test]
    fn discover_prefers_yml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".iconfont.yml"), "cssUrl: first\n").unwrap();
        fs::write(dir.path().join(".iconfont.yaml"), "cssUrl: second\n").unwrap();
        let options = load_options(None, dir.path()).unwrap();
        assert_eq!(options.css_url, "first");
    }

    #[test]
    fn discover_skips_empty_yml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".iconfont.yml"), "").unwrap();
        fs::write(dir.path().join(".iconfont.yaml"), "cssUrl: second\n").unwrap();
        let options = load_options(None, dir.path()).unwrap();
        assert_eq!(options.css_url, "second");
    }

    #[test]
    fn discover_nothing() {
        let dir = TempDir::new().unwrap();
        let err = load_options(None, dir.path()).unwrap_err();
        assert!(err.to_string().contains("is not found or it is empty"));
    }

    #[test]
    fn explicit_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yml");
        fs::write(&path, "cssUrl: https://example.com/a.css\n").unwrap();
        let options = load_options(Some(path.as_path()), Path::new("/nonexistent")).unwrap();
        assert_eq!(options.css_url, "https://example.com/a.css");
    }
}
