//! Threshold-driven color and form selection

use crate::model::FormType;

/// Levels above this contribute their colors
const COLOR_LEVEL: f64 = 0.3;
/// Levels above this contribute their form
pub(crate) const FORM_LEVEL: f64 = 0.5;
/// Neutral gray used when nothing is strong enough
pub const FALLBACK_COLOR: &str = "#6b7280";

/// Concatenate the color pairs of every level above the color threshold
pub(crate) fn swatches(entries: &[(f64, [&str; 2])]) -> Vec<String> {
    let colors: Vec<String> = entries
        .iter()
        .filter(|(level, _)| *level > COLOR_LEVEL)
        .flat_map(|(_, pair)| pair.iter().map(|c| c.to_string()))
        .collect();

    if colors.is_empty() {
        vec![FALLBACK_COLOR.to_string()]
    } else {
        colors
    }
}

/// Forms whose condition holds, or `[Flowing]` when none does
pub(crate) fn forms_or_flowing(entries: &[(bool, FormType)]) -> Vec<FormType> {
    let forms: Vec<FormType> = entries
        .iter()
        .filter(|(active, _)| *active)
        .map(|&(_, form)| form)
        .collect();

    if forms.is_empty() {
        vec![FormType::Flowing]
    } else {
        forms
    }
}
