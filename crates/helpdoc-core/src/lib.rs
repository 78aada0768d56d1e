//! # Helpdoc Core
//!
//! Turns the help metadata of a command module into one static HTML page with
//! a navigable side menu.
//!
//! ## Pipeline
//!
//! 1. [`assets::verify_assets`] - presentation assets must exist
//! 2. [`source::MetadataSource`] - resolve the module and normalize its metadata
//! 3. [`document::render_document`] - menu pass, then content pass
//! 4. [`writer::write_document`] - atomic write of the finished page
//!
//! [`generate::generate`] runs the four steps with early return on failure.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` / `expect()` / `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod assets;
pub mod config;
pub mod document;
mod error;
pub mod escape;
pub mod generate;
pub mod model;
pub mod source;
pub mod syntax;
pub mod writer;

pub use config::{Config, RelatedLinksMode};
pub use document::{render_document, RenderOptions};
pub use error::{Error, Result};
pub use generate::{generate, GenerateRequest, GenerationReport};
pub use model::{
    AnchorId, CommandHelp, Example, ModuleDescriptor, ModuleHelp, ParameterInfo, SyntaxParameter,
    SyntaxVariant,
};
pub use source::{JsonDirectorySource, MetadataSource};
