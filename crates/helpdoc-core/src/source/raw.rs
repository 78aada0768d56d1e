//! Loosely-typed metadata as found on disk, and its normalization.
//!
//! Help exporters are inconsistent: text may be a string or a list of lines,
//! flags may be booleans or strings like `"true (ByValue)"`, positions may be
//! numbers or `"named"`. These shapes absorb that and [`RawModule::into_model`]
//! produces the strict model.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::model::{
    CommandHelp, Example, ModuleDescriptor, ModuleHelp, ParameterInfo, SyntaxParameter,
    SyntaxVariant,
};

/// Text given either as one string or as a list of lines.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Text {
    One(String),
    Many(Vec<String>),
}

impl Text {
    fn into_lines(self) -> Vec<String> {
        match self {
            Self::One(text) => text.lines().map(str::to_string).collect(),
            Self::Many(lines) => lines,
        }
    }

    fn into_string(self) -> String {
        match self {
            Self::One(text) => text,
            Self::Many(lines) => lines.join("\n"),
        }
    }
}

/// A value rendered verbatim: string, number or boolean.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

/// A boolean that may be spelled as a string, e.g. `"true (ByPropertyName)"`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    fn is_set(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(text) => text
                .trim_start()
                .get(..4)
                .is_some_and(|head| head.eq_ignore_ascii_case("true")),
        }
    }
}

fn flag(value: Option<&Flag>) -> bool {
    value.is_some_and(Flag::is_set)
}

fn lines(value: Option<Text>) -> Vec<String> {
    value.map(Text::into_lines).unwrap_or_default()
}

fn text(value: Option<Text>) -> Option<String> {
    value.map(Text::into_string)
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(super) struct RawModule {
    name: Option<String>,
    description: Option<Text>,
    #[serde(alias = "moduleBase")]
    base_path: Option<String>,
    version: Option<Scalar>,
    author: Option<String>,
    company_name: Option<String>,
    copyright: Option<String>,
    commands: Option<Vec<RawCommand>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawCommand {
    name: Option<String>,
    synopsis: Option<Text>,
    description: Option<Text>,
    parameters: Option<Vec<RawParameter>>,
    syntax: Option<Vec<RawSyntax>>,
    input_type: Option<Text>,
    output_type: Option<Text>,
    examples: Option<Vec<RawExample>>,
    related_links: Option<Text>,
    notes: Option<Text>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawParameter {
    name: Option<String>,
    required: Option<Flag>,
    position: Option<Scalar>,
    default_value: Option<Scalar>,
    pipeline_input: Option<Flag>,
    globbing: Option<Flag>,
    #[serde(rename = "type", alias = "parameterValue")]
    type_name: Option<String>,
    description: Option<Text>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawSyntax {
    name: Option<String>,
    parameters: Option<Vec<RawSyntaxParameter>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawSyntaxParameter {
    name: Option<String>,
    required: Option<Flag>,
    #[serde(rename = "type", alias = "parameterValue")]
    type_name: Option<String>,
    validate_set: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawExample {
    code: Option<Text>,
    remarks: Option<Text>,
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl RawModule {
    /// Parse module metadata, insisting on an object at the top level.
    pub(super) fn parse(content: &str) -> Result<Self, String> {
        let value: Value = serde_json::from_str(content).map_err(|e| format!("invalid JSON: {e}"))?;
        if !value.is_object() {
            return Err(format!(
                "expected a module descriptor object, found {}",
                kind_of(&value)
            ));
        }
        serde_json::from_value(value).map_err(|e| e.to_string())
    }

    /// Normalize into the strict model. `requested` names the module when the
    /// descriptor does not.
    pub(super) fn into_model(self, requested: &str) -> Result<ModuleHelp, String> {
        let descriptor = ModuleDescriptor {
            name: self.name.or_else(|| Some(requested.to_string())),
            description: text(self.description),
            base_path: self.base_path,
            version: self.version.map(Scalar::into_string),
            author: self.author,
            company_name: self.company_name,
            copyright: self.copyright,
        };

        let commands = self
            .commands
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, command)| command.into_model(index))
            .collect::<Result<Vec<_>, _>>()?;

        let duplicate = {
            let mut seen = HashSet::new();
            commands
                .iter()
                .find(|c| !seen.insert(c.name.as_str()))
                .map(|c| c.name.clone())
        };
        if let Some(name) = duplicate {
            return Err(format!("duplicate command name '{name}'"));
        }

        Ok(ModuleHelp {
            descriptor,
            commands,
        })
    }
}

impl RawCommand {
    fn into_model(self, index: usize) -> Result<CommandHelp, String> {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| format!("command #{} has no name", index + 1))?;

        let syntax_variants = self
            .syntax
            .unwrap_or_default()
            .into_iter()
            .map(|variant| variant.into_model(&name))
            .collect();

        Ok(CommandHelp {
            synopsis: text(self.synopsis),
            description_lines: lines(self.description),
            parameters: self
                .parameters
                .unwrap_or_default()
                .into_iter()
                .map(RawParameter::into_model)
                .collect(),
            syntax_variants,
            input_type_name: text(self.input_type),
            output_type_name: text(self.output_type),
            examples: self
                .examples
                .unwrap_or_default()
                .into_iter()
                .map(RawExample::into_model)
                .collect(),
            related_link_uris: lines(self.related_links),
            notes: lines(self.notes),
            name,
        })
    }
}

impl RawParameter {
    fn into_model(self) -> ParameterInfo {
        ParameterInfo {
            name: self.name.unwrap_or_default(),
            required: flag(self.required.as_ref()),
            position: self.position.map(Scalar::into_string),
            default_value: self.default_value.map(Scalar::into_string),
            accepts_pipeline_input: flag(self.pipeline_input.as_ref()),
            accepts_wildcards: flag(self.globbing.as_ref()),
            value_type_name: self.type_name.filter(|t| !t.is_empty()),
            description: text(self.description),
        }
    }
}

impl RawSyntax {
    fn into_model(self, command_name: &str) -> SyntaxVariant {
        SyntaxVariant {
            command_name: self
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| command_name.to_string()),
            parameters: self
                .parameters
                .unwrap_or_default()
                .into_iter()
                .map(|p| SyntaxParameter {
                    name: p.name.unwrap_or_default(),
                    required: flag(p.required.as_ref()),
                    value_type_name: p.type_name.filter(|t| !t.is_empty()),
                    allowed_values: p.validate_set.filter(|set| !set.is_empty()),
                })
                .collect(),
        }
    }
}

impl RawExample {
    fn into_model(self) -> Example {
        Example {
            code: text(self.code).unwrap_or_default(),
            remark_lines: lines(self.remarks),
        }
    }
}
