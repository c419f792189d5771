//! Default-exported JSON array of icon names.

use crate::render::Renderer;

pub struct NameListRenderer;

impl Renderer for NameListRenderer {
    fn render(&self, names: &[String]) -> String {
        // Serializing a slice of strings cannot fail.
        let json = serde_json::to_string_pretty(names).unwrap_or_else(|_| "[]".to_string());
        format!("export default {}\n", json)
    }
}
