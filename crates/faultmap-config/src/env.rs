use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Expand `{{ env.VAR }}` placeholders in raw config text
///
/// `{{ env.VAR | default("x") }}` substitutes `x` when `VAR` is unset.
/// Comment lines are copied through untouched so a commented-out secret
/// does not require its variable to exist.
pub fn expand_env(input: &str) -> Result<String, String> {
    let mut output = input
        .lines()
        .map(expand_line)
        .collect::<Result<Vec<_>, _>>()?
        .join("\n");

    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Group 1: scoped key, group 2: optional default
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#).expect("must be valid regex")
    })
}

fn expand_line(line: &str) -> Result<String, String> {
    if line.trim_start().starts_with('#') {
        return Ok(line.to_owned());
    }

    let mut failure = None;
    let expanded = placeholder().replace_all(line, |caps: &Captures<'_>| {
        lookup(&caps[1], caps.get(2).map(|m| m.as_str())).unwrap_or_else(|e| {
            failure.get_or_insert(e);
            String::new()
        })
    });

    match failure {
        Some(e) => Err(e),
        None => Ok(expanded.into_owned()),
    }
}

fn lookup(key: &str, default: Option<&str>) -> Result<String, String> {
    let var = match key.split_once('.') {
        Some(("env", var)) if !var.is_empty() && !var.contains('.') => var,
        _ => return Err(format!("only variables scoped with 'env.' are supported: `{key}`")),
    };

    match (std::env::var(var), default) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(default)) => Ok(default.to_owned()),
        (Err(_), None) => Err(format!("environment variable not found: `{var}`")),
    }
}
