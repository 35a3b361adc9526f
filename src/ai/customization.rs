//! Rule-based transpiler from free-text customization to a structured
//! kitchen instruction string.
//!
//! Four extraction passes run in a fixed order (spice, ingredient deltas,
//! cooking preference, portion) over the normalized text; their non-empty
//! outputs are joined with `" | "` under a `KITCHEN:` prefix. The function
//! is pure and never panics.

use std::sync::LazyLock;

use regex::Regex;

static EXTRA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"extra\s+(\w+)").expect("hard-coded pattern"));
static NO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"no\s+(\w+)").expect("hard-coded pattern"));
static MORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"more\s+(\w+)").expect("hard-coded pattern"));
static LESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"less\s+(\w+)").expect("hard-coded pattern"));

/// Words the word-pair patterns can capture that describe preparation
/// rather than an ingredient ("extra spicy", "less food"). These belong
/// to the spice, cooking, and portion passes and must not produce
/// ingredient fragments.
const QUALIFIER_WORDS: [&str; 12] = [
    "spicy", "hot", "large", "small", "big", "light", "food", "portion", "crispy", "soft",
    "grilled", "double",
];

const FALLBACK: &str = "KITCHEN: STANDARD PREPARATION";
const NOTE_LIMIT: usize = 50;

pub fn derive_kitchen_instruction(free_text: &str) -> String {
    let text = free_text.trim().to_lowercase();
    if text.is_empty() {
        return FALLBACK.to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    if let Some(spice) = spice_level(&text) {
        parts.push(spice.to_string());
    }
    parts.extend(ingredient_deltas(&text));
    if let Some(cooking) = cooking_preference(&text) {
        parts.push(cooking.to_string());
    }
    if let Some(portion) = portion_adjustment(&text) {
        parts.push(portion.to_string());
    }

    if parts.is_empty() {
        let note: String = free_text.chars().take(NOTE_LIMIT).collect();
        return format!("{FALLBACK} - Special note: {note}");
    }
    format!("KITCHEN: {}", parts.join(" | "))
}

/// First-match-wins; the mild family is checked before the hot family so
/// "not spicy" never reads as "spicy".
fn spice_level(text: &str) -> Option<&'static str> {
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| text.contains(k));

    if contains_any(&["not spicy", "less spicy", "mild"]) {
        Some("SPICE: LOW")
    } else if contains_any(&["extra spicy", "very hot", "extra hot"]) {
        Some("SPICE: EXTRA HIGH")
    } else if contains_any(&["spicy", "hot"]) {
        Some("SPICE: HIGH")
    } else if text.contains("medium") && text.contains("spice") {
        Some("SPICE: MEDIUM")
    } else {
        None
    }
}

/// All matches of the four word-pair patterns, grouped as adds, removals,
/// increases, reductions. A word appearing in several patterns produces a
/// fragment for each.
fn ingredient_deltas(text: &str) -> Vec<String> {
    let mut fragments = Vec::new();
    let rules: [(&Regex, &str); 4] = [
        (&EXTRA_RE, "ADD: EXTRA"),
        (&NO_RE, "REMOVE:"),
        (&MORE_RE, "INCREASE:"),
        (&LESS_RE, "REDUCE:"),
    ];
    for (pattern, prefix) in rules {
        for capture in pattern.captures_iter(text) {
            let word = &capture[1];
            if QUALIFIER_WORDS.contains(&word) {
                continue;
            }
            fragments.push(format!("{prefix} {}", word.to_uppercase()));
        }
    }
    fragments
}

fn cooking_preference(text: &str) -> Option<&'static str> {
    if text.contains("well done") {
        Some("COOKING: WELL DONE")
    } else if text.contains("crispy") {
        Some("COOKING: EXTRA CRISPY")
    } else if text.contains("soft") {
        Some("COOKING: SOFT/TENDER")
    } else if text.contains("grilled") {
        Some("METHOD: GRILLED")
    } else {
        None
    }
}

fn portion_adjustment(text: &str) -> Option<&'static str> {
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| text.contains(k));

    if contains_any(&["large portion", "extra large", "big"]) {
        Some("PORTION: LARGE")
    } else if contains_any(&["small portion", "less food", "light"]) {
        Some("PORTION: SMALL")
    } else if text.contains("double") {
        Some("PORTION: DOUBLE")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_standard_preparation() {
        assert_eq!(
            derive_kitchen_instruction(""),
            "KITCHEN: STANDARD PREPARATION"
        );
        assert_eq!(
            derive_kitchen_instruction("   "),
            "KITCHEN: STANDARD PREPARATION"
        );
    }

    #[test]
    fn unrecognized_text_falls_back_with_truncated_note() {
        let text = "please bring it on the blue plate my grandmother used to own back in 1982";
        let expected_note: String = text.chars().take(50).collect();
        assert_eq!(
            derive_kitchen_instruction(text),
            format!("KITCHEN: STANDARD PREPARATION - Special note: {expected_note}")
        );
    }

    #[test]
    fn short_unrecognized_text_is_kept_whole() {
        assert_eq!(
            derive_kitchen_instruction("on a blue plate"),
            "KITCHEN: STANDARD PREPARATION - Special note: on a blue plate"
        );
    }

    #[test]
    fn ingredient_deltas_come_out_grouped_and_in_order() {
        assert_eq!(
            derive_kitchen_instruction("extra cheese no onions more garlic less salt"),
            "KITCHEN: ADD: EXTRA CHEESE | REMOVE: ONIONS | INCREASE: GARLIC | REDUCE: SALT"
        );
    }

    #[test]
    fn spice_then_cooking_then_portion_fragment_order() {
        assert_eq!(
            derive_kitchen_instruction("extra spicy and crispy, large portion"),
            "KITCHEN: SPICE: EXTRA HIGH | COOKING: EXTRA CRISPY | PORTION: LARGE"
        );
    }

    #[test]
    fn mild_family_wins_over_hot_family() {
        let instruction = derive_kitchen_instruction("mild but still hot please");
        assert!(instruction.contains("SPICE: LOW"));
        assert!(!instruction.contains("SPICE: HIGH"));
    }

    #[test]
    fn plain_spicy_is_high() {
        assert_eq!(derive_kitchen_instruction("spicy"), "KITCHEN: SPICE: HIGH");
    }

    #[test]
    fn medium_spice_requires_both_words() {
        assert_eq!(
            derive_kitchen_instruction("medium spice level please"),
            "KITCHEN: SPICE: MEDIUM"
        );
    }

    #[test]
    fn only_one_spice_directive_is_emitted() {
        let instruction = derive_kitchen_instruction("very hot and spicy");
        assert_eq!(instruction.matches("SPICE:").count(), 1);
        assert_eq!(instruction, "KITCHEN: SPICE: EXTRA HIGH");
    }

    #[test]
    fn a_word_may_trigger_multiple_patterns() {
        assert_eq!(
            derive_kitchen_instruction("extra cheese but also no cheese"),
            "KITCHEN: ADD: EXTRA CHEESE | REMOVE: CHEESE"
        );
    }

    #[test]
    fn well_done_beats_crispy() {
        assert_eq!(
            derive_kitchen_instruction("well done and crispy"),
            "KITCHEN: COOKING: WELL DONE"
        );
    }

    #[test]
    fn grilled_is_a_method() {
        assert_eq!(
            derive_kitchen_instruction("grilled"),
            "KITCHEN: METHOD: GRILLED"
        );
    }

    #[test]
    fn double_portion() {
        assert_eq!(
            derive_kitchen_instruction("double the rice"),
            "KITCHEN: PORTION: DOUBLE"
        );
    }

    #[test]
    fn less_food_is_a_portion_not_an_ingredient() {
        assert_eq!(
            derive_kitchen_instruction("less food"),
            "KITCHEN: PORTION: SMALL"
        );
    }

    #[test]
    fn input_is_case_folded() {
        assert_eq!(
            derive_kitchen_instruction("EXTRA CHEESE"),
            "KITCHEN: ADD: EXTRA CHEESE"
        );
    }
}
