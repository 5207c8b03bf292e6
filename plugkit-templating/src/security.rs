//! Security validation for template content
//!
//! Built-in templates are trusted. Templates read from an override directory
//! are untrusted and must stay within size, variable and nesting limits.

use crate::error::{Result, TemplatingError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Maximum allowed template size in bytes for untrusted templates
pub const MAX_TEMPLATE_SIZE: usize = 100_000;

/// Maximum allowed nesting depth of control blocks
pub const MAX_TEMPLATE_RECURSION_DEPTH: usize = 10;

/// Maximum allowed distinct variables per template
pub const MAX_TEMPLATE_VARIABLES: usize = 1000;

static VARIABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{-?\s*(\w+)").expect("static variable pattern is valid"));

static OPEN_BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{%-?\s*(if|unless|for|case|capture|tablerow)\b")
        .expect("static block pattern is valid")
});

static CLOSE_BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{%-?\s*(endif|endunless|endfor|endcase|endcapture|endtablerow)\b")
        .expect("static block pattern is valid")
});

/// Validates template content for security risks
///
/// Trusted templates only get a generous size cap. Untrusted templates are
/// checked for size, number of distinct variables and block nesting depth.
pub fn validate_template_security(template_content: &str, is_trusted: bool) -> Result<()> {
    if is_trusted {
        if template_content.len() > MAX_TEMPLATE_SIZE * 10 {
            return Err(TemplatingError::Security(format!(
                "Template too large: {} bytes (max allowed for trusted: {})",
                template_content.len(),
                MAX_TEMPLATE_SIZE * 10
            )));
        }
        return Ok(());
    }

    if template_content.len() > MAX_TEMPLATE_SIZE {
        return Err(TemplatingError::Security(format!(
            "Template too large: {} bytes (max allowed: {MAX_TEMPLATE_SIZE})",
            template_content.len()
        )));
    }

    let variable_count = count_template_variables(template_content);
    if variable_count > MAX_TEMPLATE_VARIABLES {
        return Err(TemplatingError::Security(format!(
            "Too many template variables: {variable_count} (max allowed: {MAX_TEMPLATE_VARIABLES})"
        )));
    }

    let max_nesting = check_template_nesting_depth(template_content);
    if max_nesting > MAX_TEMPLATE_RECURSION_DEPTH {
        return Err(TemplatingError::Security(format!(
            "Template nesting too deep: {max_nesting} levels (max allowed: {MAX_TEMPLATE_RECURSION_DEPTH})"
        )));
    }

    Ok(())
}

/// Count the distinct variables referenced by `{{ ... }}` output tags
fn count_template_variables(template: &str) -> usize {
    VARIABLE_RE
        .captures_iter(template)
        .map(|cap| cap[1].to_string())
        .collect::<HashSet<_>>()
        .len()
}

/// Maximum nesting depth of block tags
fn check_template_nesting_depth(template: &str) -> usize {
    let mut events: Vec<(usize, i32)> = OPEN_BLOCK_RE
        .find_iter(template)
        .map(|m| (m.start(), 1))
        .chain(CLOSE_BLOCK_RE.find_iter(template).map(|m| (m.start(), -1)))
        .collect();
    events.sort_by_key(|(pos, _)| *pos);

    let mut depth: i32 = 0;
    let mut max_depth: i32 = 0;
    for (_, delta) in events {
        depth = (depth + delta).max(0);
        max_depth = max_depth.max(depth);
    }
    max_depth as usize
}
