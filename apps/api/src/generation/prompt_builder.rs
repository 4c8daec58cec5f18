//! Prompt builder: renders the portfolio prompt from user input and the
//! resolved style. Pure and deterministic: identical inputs give identical text.

use crate::generation::prompts::{PORTFOLIO_PROMPT_TEMPLATE, UNIQUENESS_INSTRUCTION};
use crate::generation::style_catalog::StyleGuideline;
use crate::models::portfolio::{non_blank, PortfolioInput};
use crate::models::theme::ThemeId;

const DEFAULT_ADDITIONAL_INFO: &str = "None provided";
const DEFAULT_PORTFOLIO_STYLE: &str = "Modern Tech";
const DEFAULT_TARGET_AUDIENCE: &str = "Employers/Clients";
const DEFAULT_DESIGN_REFERENCE: &str = "Modern and clean";
const DEFAULT_COLOR_PREFERENCE: &str = "Professional colors";
const DEFAULT_LAYOUT_STYLE: &str = "Standard";

/// Builds the user prompt for one generation.
///
/// Preconditions (checked by the handler): `name`, `career_summary` and
/// `skills` are non-empty.
pub fn build(input: &PortfolioInput, guideline: &StyleGuideline, theme: ThemeId) -> String {
    let skills = input.skills.join(", ");
    let handle = social_handle(&input.name);

    let vars = [
        ("name", input.name.as_str()),
        ("career_summary", input.career_summary.as_str()),
        ("skills", skills.as_str()),
        (
            "additional_info",
            non_blank(&input.additional_info).unwrap_or(DEFAULT_ADDITIONAL_INFO),
        ),
        (
            "portfolio_style",
            non_blank(&input.portfolio_style).unwrap_or(DEFAULT_PORTFOLIO_STYLE),
        ),
        (
            "target_audience",
            non_blank(&input.target_audience).unwrap_or(DEFAULT_TARGET_AUDIENCE),
        ),
        (
            "design_reference",
            non_blank(&input.design_reference).unwrap_or(DEFAULT_DESIGN_REFERENCE),
        ),
        (
            "color_preference",
            non_blank(&input.color_preference).unwrap_or(DEFAULT_COLOR_PREFERENCE),
        ),
        (
            "layout_style",
            non_blank(&input.layout_style).unwrap_or(DEFAULT_LAYOUT_STYLE),
        ),
        ("style_name", guideline.name),
        ("tone", guideline.tone),
        ("focus", guideline.focus),
        ("metrics", guideline.metrics),
        ("project_types", guideline.project_types),
        ("uniqueness_instruction", UNIQUENESS_INSTRUCTION),
        ("theme", theme.as_str()),
        ("handle", handle.as_str()),
    ];

    render(PORTFOLIO_PROMPT_TEMPLATE, &vars)
}

/// Lower-cased name with all whitespace removed, used for social profile URLs.
fn social_handle(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Fills `{key}` placeholders in a single pass. Substituted values are never
/// scanned again, so braces in user text stay literal. Unknown `{...}`
/// sequences (like the JSON skeleton) are copied through unchanged.
fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 1024);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let substitution = after.find('}').and_then(|end| {
            let key = &after[..end];
            if key.is_empty() || !key.chars().all(|c| c.is_ascii_lowercase() || c == '_') {
                return None;
            }
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (*value, end))
        });

        match substitution {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
