//! Render-ready views of the help model.
//!
//! Plain text fields stay unescaped and are escaped by the template. Fields
//! named `*_html` are already escaped line joins and are emitted verbatim.

use std::collections::HashSet;

use super::SECTIONS;
use crate::{
    config::RelatedLinksMode,
    escape::join_lines,
    model::{AnchorId, CommandHelp, Example, ModuleDescriptor, ParameterInfo},
    syntax,
};

/// Anchor of the module About panel; never handed out to a command.
pub const ABOUT_ANCHOR: &str = "About";

pub struct AboutView {
    pub name: String,
    pub description_html: String,
    pub base_path: String,
    pub version: String,
    pub author: String,
    pub company_name: String,
    pub copyright: String,
}

impl AboutView {
    pub fn new(descriptor: &ModuleDescriptor) -> Self {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            name: field(&descriptor.name),
            description_html: join_lines(descriptor.description.as_deref().unwrap_or_default().lines()),
            base_path: field(&descriptor.base_path),
            version: field(&descriptor.version),
            author: field(&descriptor.author),
            company_name: field(&descriptor.company_name),
            copyright: field(&descriptor.copyright),
        }
    }
}

pub struct CommandView {
    pub name: String,
    pub anchor: AnchorId,
    pub synopsis: String,
    pub syntax: Vec<String>,
    pub description_html: String,
    pub parameters: Vec<ParameterView>,
    pub input_type: String,
    pub output_type: String,
    pub examples: Vec<ExampleView>,
    pub related_links: Vec<String>,
    pub notes_html: String,
}

impl CommandView {
    pub fn new(command: &CommandHelp, anchor: AnchorId, links: RelatedLinksMode) -> Self {
        Self {
            name: command.name.clone(),
            anchor,
            synopsis: command.synopsis.clone().unwrap_or_default(),
            syntax: syntax::format_all(command),
            description_html: join_lines(&command.description_lines),
            parameters: command.parameters.iter().map(ParameterView::new).collect(),
            input_type: command.input_type_name.clone().unwrap_or_default(),
            output_type: command.output_type_name.clone().unwrap_or_default(),
            examples: command.examples.iter().map(ExampleView::new).collect(),
            related_links: related_links(&command.related_link_uris, links),
            notes_html: join_lines(&command.notes),
        }
    }
}

/// Concatenated mode joins every URI with no separator into one link.
fn related_links(uris: &[String], mode: RelatedLinksMode) -> Vec<String> {
    match mode {
        RelatedLinksMode::Concatenated if uris.is_empty() => Vec::new(),
        RelatedLinksMode::Concatenated => vec![uris.concat()],
        RelatedLinksMode::Separate => uris.to_vec(),
    }
}

pub struct ParameterView {
    pub name: String,
    pub placeholder: String,
    pub description_html: String,
    pub required: bool,
    pub position: String,
    pub default_value: String,
    pub pipeline_input: bool,
    pub wildcards: bool,
}

impl ParameterView {
    fn new(parameter: &ParameterInfo) -> Self {
        Self {
            name: parameter.name.clone(),
            placeholder: parameter
                .value_type_name
                .as_deref()
                .map(|t| format!("<{t}>"))
                .unwrap_or_default(),
            description_html: join_lines(
                parameter.description.as_deref().unwrap_or_default().lines(),
            ),
            required: parameter.required,
            position: parameter.position.clone().unwrap_or_default(),
            default_value: parameter.default_value.clone().unwrap_or_default(),
            pipeline_input: parameter.accepts_pipeline_input,
            wildcards: parameter.accepts_wildcards,
        }
    }
}

pub struct ExampleView {
    pub code: String,
    pub remarks_html: String,
}

impl ExampleView {
    fn new(example: &Example) -> Self {
        Self {
            code: example.code.clone(),
            remarks_html: join_lines(&example.remark_lines),
        }
    }
}

/// Ids the page layout uses outside of any command panel.
const LAYOUT_IDS: [&str; 3] = ["sidebar", "command-menu", "content"];

/// Suffix of the collapsible sub-menu id of a command.
const MENU_SUFFIX: &str = "menu";

/// Every element id the page derives from a command anchor.
fn element_ids(anchor: &AnchorId) -> impl Iterator<Item = String> + '_ {
    std::iter::once(anchor.to_string()).chain(
        SECTIONS
            .into_iter()
            .chain(std::iter::once(MENU_SUFFIX))
            .map(move |suffix| format!("{anchor}-{suffix}")),
    )
}

fn is_free(anchor: &AnchorId, taken: &HashSet<String>) -> bool {
    element_ids(anchor).all(|id| !taken.contains(&id))
}

/// Assign one anchor per command, in order.
///
/// An anchor is accepted only if none of its derived element ids (section
/// headings, sub-menu) clash with an id already on the page. Otherwise
/// `-2`, `-3`, ... is appended until one fits.
pub fn assign_anchors<'a, I>(names: I) -> Vec<AnchorId>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut taken: HashSet<String> = std::iter::once(ABOUT_ANCHOR)
        .chain(LAYOUT_IDS)
        .map(str::to_string)
        .collect();

    names
        .into_iter()
        .map(|name| {
            let base = AnchorId::from_command_name(name);
            let anchor = if is_free(&base, &taken) {
                base
            } else {
                (2..)
                    .map(|n| base.with_suffix(n))
                    .find(|candidate| is_free(candidate, &taken))
                    .unwrap_or_else(|| base.clone())
            };
            taken.extend(element_ids(&anchor));
            anchor
        })
        .collect()
}
