//! Renderers for the artifacts derived from the icon name set.

pub mod name_list;
pub mod names;
pub mod typescript;

/// Trait for rendering the canonical icon names into a file body.
pub trait Renderer {
    fn render(&self, names: &[String]) -> String;
}
