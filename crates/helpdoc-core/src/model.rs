//! Strongly-typed help metadata.
//!
//! Every entity here is an immutable snapshot produced by a
//! [`MetadataSource`](crate::source::MetadataSource) and consumed in a single
//! rendering pass. Free text is optional everywhere and renders as empty.

use std::fmt;

/// Module-level metadata shown in the About section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_path: Option<String>,
    pub version: Option<String>,
    pub author: Option<String>,
    pub company_name: Option<String>,
    pub copyright: Option<String>,
}

/// A resolved module: its descriptor plus exported commands in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleHelp {
    pub descriptor: ModuleDescriptor,
    pub commands: Vec<CommandHelp>,
}

impl ModuleHelp {
    /// Display name of the module, empty when the descriptor has none.
    pub fn name(&self) -> &str {
        self.descriptor.name.as_deref().unwrap_or_default()
    }
}

/// Help record for one exported command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandHelp {
    pub name: String,
    pub synopsis: Option<String>,
    pub description_lines: Vec<String>,
    pub parameters: Vec<ParameterInfo>,
    pub syntax_variants: Vec<SyntaxVariant>,
    pub input_type_name: Option<String>,
    pub output_type_name: Option<String>,
    pub examples: Vec<Example>,
    pub related_link_uris: Vec<String>,
    pub notes: Vec<String>,
}

/// One entry of a command's parameter list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterInfo {
    pub name: String,
    pub required: bool,
    pub position: Option<String>,
    pub default_value: Option<String>,
    pub accepts_pipeline_input: bool,
    pub accepts_wildcards: bool,
    pub value_type_name: Option<String>,
    pub description: Option<String>,
}

/// One valid invocation shape of a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxVariant {
    pub command_name: String,
    /// Order is significant and preserved exactly as supplied.
    pub parameters: Vec<SyntaxParameter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxParameter {
    pub name: String,
    pub required: bool,
    pub value_type_name: Option<String>,
    pub allowed_values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Example {
    pub code: String,
    pub remark_lines: Vec<String>,
}

/// In-document link target derived from a command name.
///
/// Only ASCII letters, digits, `-` and `_` survive; everything else becomes
/// `-`. Ids always start with a letter so they are valid HTML ids and CSS
/// selectors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnchorId(String);

impl AnchorId {
    const FALLBACK_PREFIX: &'static str = "cmd-";

    pub fn from_command_name(name: &str) -> Self {
        let sanitized: String = name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '-'
                }
            })
            .collect();

        if sanitized.starts_with(|c: char| c.is_ascii_alphabetic()) {
            Self(sanitized)
        } else {
            Self(format!("{}{sanitized}", Self::FALLBACK_PREFIX))
        }
    }

    /// Append a numeric suffix, used to break collisions between sanitized names.
    pub fn with_suffix(&self, n: usize) -> Self {
        Self(format!("{}-{n}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_keeps_safe_names() {
        assert_eq!(AnchorId::from_command_name("Get-Thing").as_str(), "Get-Thing");
        assert_eq!(AnchorId::from_command_name("set_value2").as_str(), "set_value2");
    }

    #[test]
    fn test_anchor_replaces_unsafe_characters() {
        let anchor = AnchorId::from_command_name("Get<Thing> \"x\"");
        assert_eq!(anchor.as_str(), "Get-Thing---x-");
        assert!(anchor
            .as_str()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_anchor_prefixes_non_letter_start() {
        assert_eq!(AnchorId::from_command_name("").as_str(), "cmd-");
        assert_eq!(AnchorId::from_command_name("7zip").as_str(), "cmd-7zip");
        assert_eq!(AnchorId::from_command_name("-x").as_str(), "cmd--x");
    }

    #[test]
    fn test_anchor_suffix() {
        let anchor = AnchorId::from_command_name("Get-Thing").with_suffix(2);
        assert_eq!(anchor.to_string(), "Get-Thing-2");
    }

    #[test]
    fn test_module_name_defaults_to_empty() {
        assert_eq!(ModuleHelp::default().name(), "");
    }
}
