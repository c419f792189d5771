//! TypeScript union type over the icon names.

use crate::render::Renderer;

pub struct TypeDeclarationRenderer<'a> {
    pub type_name: &'a str,
}

impl Renderer for TypeDeclarationRenderer<'_> {
    fn render(&self, names: &[String]) -> String {
        if names.is_empty() {
            return format!("export type {} = never\n", self.type_name);
        }

        let members: Vec<String> = names.iter().map(|name| quote_member(name)).collect();
        format!(
            "export type {} =\n  | {}\n",
            self.type_name,
            members.join("\n  | ")
        )
    }
}

/// `'name'`, or a JSON string when the name itself contains `'`.
fn quote_member(name: &str) -> String {
    if name.contains('\'') {
        serde_json::Value::from(name).to_string()
    } else {
        format!("'{}'", name)
    }
}
