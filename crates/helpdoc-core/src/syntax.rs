//! Invocation syntax reconstruction.
//!
//! Rebuilds the canonical syntax line of a [`SyntaxVariant`] from its
//! structured parameters:
//!
//! ```text
//! Get-Thing -Name <String> [-Count <Int32>] [-Mode {Fast | Slow}] [-Force]
//! ```
//!
//! The output is plain text; escaping happens when it is rendered.

use itertools::Itertools;

use crate::model::{CommandHelp, SyntaxParameter, SyntaxVariant};

const VALUE_SET_SEPARATOR: &str = " | ";

/// Format one syntax variant as a single line.
pub fn format_syntax(variant: &SyntaxVariant) -> String {
    variant
        .parameters
        .iter()
        .fold(variant.command_name.clone(), |mut line, parameter| {
            line.push(' ');
            line.push_str(&format_parameter(parameter));
            line
        })
}

/// Format every syntax variant of a command, in supplied order.
pub fn format_all(command: &CommandHelp) -> Vec<String> {
    command.syntax_variants.iter().map(format_syntax).collect()
}

fn format_parameter(parameter: &SyntaxParameter) -> String {
    let name = &parameter.name;
    let value_type = parameter.value_type_name.as_deref().filter(|t| !t.is_empty());

    if parameter.required {
        return value_type.map_or_else(|| format!("-{name}"), |t| format!("-{name} <{t}>"));
    }

    match (value_type, allowed_values(parameter)) {
        (Some(t), _) => format!("[-{name} <{t}>]"),
        (None, Some(values)) => format!(
            "[-{name} {{{}}}]",
            values.iter().join(VALUE_SET_SEPARATOR)
        ),
        (None, None) => format!("[-{name}]"),
    }
}

fn allowed_values(parameter: &SyntaxParameter) -> Option<&[String]> {
    parameter
        .allowed_values
        .as_deref()
        .filter(|values| !values.is_empty())
}
