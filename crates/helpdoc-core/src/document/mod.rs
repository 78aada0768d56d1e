//! Document assembly.
//!
//! One fixed page shape: a navigation shell naming the module, a side menu
//! with one entry per command, an About panel, then one content panel per
//! command. Both passes walk the same precomputed anchor list, so every menu
//! link has a matching target.

mod view;

use askama::Template;
use tracing::debug;

pub use view::ABOUT_ANCHOR;
use view::{assign_anchors, AboutView, CommandView};

use crate::{
    assets::{SCRIPTS, STYLESHEETS},
    config::{Config, RelatedLinksMode},
    model::ModuleHelp,
    Result,
};

/// Fixed sub-links of every command menu entry, in display order.
pub const SECTIONS: [&str; 9] = [
    "Synopsis",
    "Syntax",
    "Description",
    "Parameters",
    "Inputs",
    "Outputs",
    "Examples",
    "RelatedLinks",
    "Notes",
];

/// Rendering knobs that do not come from the metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub related_links: RelatedLinksMode,
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            related_links: config.related_links,
        }
    }
}

#[derive(Template)]
#[template(path = "module.html")]
struct ModulePage {
    module_name: String,
    about_anchor: &'static str,
    about: AboutView,
    commands: Vec<CommandView>,
    sections: Vec<&'static str>,
    stylesheets: Vec<&'static str>,
    scripts: Vec<&'static str>,
}

/// Render the complete HTML document for a module.
///
/// Missing optional fields render as empty text; the only failure is a
/// template formatting error.
///
/// # Errors
///
/// Returns `Error::Render` if the template fails to render.
pub fn render_document(module: &ModuleHelp, options: &RenderOptions) -> Result<String> {
    let anchors = assign_anchors(module.commands.iter().map(|c| c.name.as_str()));
    let commands: Vec<CommandView> = module
        .commands
        .iter()
        .zip(anchors)
        .map(|(command, anchor)| CommandView::new(command, anchor, options.related_links))
        .collect();

    debug!(
        module = module.name(),
        commands = commands.len(),
        related_links = %options.related_links,
        "assembling document"
    );

    let page = ModulePage {
        module_name: module.name().to_string(),
        about_anchor: ABOUT_ANCHOR,
        about: AboutView::new(&module.descriptor),
        commands,
        sections: SECTIONS.to_vec(),
        stylesheets: STYLESHEETS.to_vec(),
        scripts: SCRIPTS.to_vec(),
    };

    Ok(page.render()?)
}
