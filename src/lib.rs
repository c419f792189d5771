//! iconfont-sync: pull an icon-font stylesheet and its fonts into a project.
//!
//! The stylesheet is parsed with plain string offsets ([`parser`]), its `src`
//! declaration is pointed at the downloaded copies ([`rewrite`]), and the
//! icon names feed a TypeScript union and an optional name list ([`render`]).
//! [`sync::sync_icon_font`] ties it together behind the [`fetch`] and
//! [`logger`] seams.

pub mod config;
pub mod error;
pub mod fetch;
pub mod logger;
pub mod model;
pub mod parser;
pub mod render;
pub mod rewrite;
pub mod sync;

pub use config::{FontSize, SyncIconFontOptions, TypeOutput};
pub use error::SyncError;
pub use sync::{sync_icon_font, SyncReport};
