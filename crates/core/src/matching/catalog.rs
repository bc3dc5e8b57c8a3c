//! Catalog matching for recommended vehicle names
//!
//! Resolves a free-text model/trim pair to an entry of the fixed image
//! catalog using a cascade of strategies:
//! - Exact match over generated candidate spellings
//! - Best similarity score across candidates and catalog
//! - Model-only match against each entry's two-token prefix
//! - First catalog entry as the last resort
//!
//! The cascade never fails: a wrong image is preferable to a missing UI
//! element, so absence of a good match degrades to the default entry. The
//! catalog is a closed, hand-curated set that cannot anticipate every
//! model/trim string a recommendation source might emit.

use tracing::debug;

use super::normalize::normalize;
use super::similarity::similarity;

/// Minimum blended score for the cross-product similarity pass
const SIMILARITY_FLOOR: f64 = 0.3;
/// Minimum score for the model-only prefix pass (must be exceeded)
const MODEL_ONLY_FLOOR: f64 = 0.5;
/// Make prefix stripped from incoming model names, case-insensitively
const MAKE_PREFIX: &str = "Toyota";

/// Resolve a model/trim pair to a catalog entry.
///
/// Total over all string inputs, including empty ones; the result is always
/// a member of `catalog`. `catalog` must be non-empty.
#[must_use]
pub fn resolve<'c>(base_model: &str, trim_name: &str, catalog: &[&'c str]) -> &'c str {
    let model = base_model.trim();
    let trim = trim_name.trim();
    let candidates = candidate_spellings(model, trim);

    if let Some(entry) = exact_match(&candidates, catalog) {
        debug!(model, trim, entry, strategy = "exact", "catalog match");
        return entry;
    }

    if let Some((entry, score)) = best_similarity(&candidates, catalog) {
        debug!(model, trim, entry, score, strategy = "similarity", "catalog match");
        return entry;
    }

    if let Some((entry, score)) = model_prefix_match(model, catalog) {
        debug!(model, trim, entry, score, strategy = "model_only", "catalog match");
        return entry;
    }

    debug!(model, trim, entry = catalog[0], strategy = "default", "catalog match");
    catalog[0]
}

/// Generate the ordered spelling variations tried against the catalog.
///
/// The make-stripped variation is deliberately listed twice; both passes are
/// order-stable, so the duplicate never changes a result, and the thresholds
/// were tuned against this exact iteration.
fn candidate_spellings(model: &str, trim: &str) -> Vec<String> {
    let bare_model = strip_make_prefix(model);

    vec![
        format!("{model} {trim}"),
        format!("{bare_model} {trim}"),
        format!("{MAKE_PREFIX} {bare_model} {trim}"),
        format!("{bare_model} {trim}"),
    ]
}

/// Strip a leading make prefix ("Toyota ..."), case-insensitively.
///
/// Only a leading occurrence is removed; anything else is left untouched.
fn strip_make_prefix(model: &str) -> &str {
    match model.get(..MAKE_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(MAKE_PREFIX) => {
            model[MAKE_PREFIX.len()..].trim_start()
        }
        _ => model,
    }
}

/// First candidate (outer) whose normalized form equals a catalog entry's
/// normalized form (catalog order inner).
fn exact_match<'c>(candidates: &[String], catalog: &[&'c str]) -> Option<&'c str> {
    for candidate in candidates {
        let target = normalize(candidate);
        for &entry in catalog {
            if normalize(entry) == target {
                return Some(entry);
            }
        }
    }
    None
}

/// Highest similarity over the candidate × catalog cross product.
///
/// Strict comparison keeps the first maximum in iteration order. Accepts
/// only scores at or above the floor.
fn best_similarity<'c>(candidates: &[String], catalog: &[&'c str]) -> Option<(&'c str, f64)> {
    let mut best: Option<(&'c str, f64)> = None;

    for candidate in candidates {
        for &entry in catalog {
            let score = similarity(candidate, entry);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((entry, score));
            }
        }
    }

    best.filter(|(_, score)| *score >= SIMILARITY_FLOOR)
}

/// Match the bare model name against each entry's first two tokens,
/// returning the first entry that clears the floor in catalog order.
fn model_prefix_match<'c>(model: &str, catalog: &[&'c str]) -> Option<(&'c str, f64)> {
    let model_only = normalize(strip_make_prefix(model));

    for &entry in catalog {
        let prefix = entry.split_whitespace().take(2).collect::<Vec<_>>().join(" ");
        let score = similarity(&model_only, &prefix);
        if score > MODEL_ONLY_FLOOR {
            return Some((entry, score));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &[&str] = &["Camry SE", "Camry XSE", "RAV4 Hybrid XLE", "Tacoma TRD Pro"];

    #[test]
    fn exact_match_beats_fuzzy() {
        assert_eq!(resolve("Camry", "SE", CATALOG), "Camry SE");
        assert_eq!(resolve("Camry", "XSE", CATALOG), "Camry XSE");
    }

    #[test]
    fn make_prefix_is_stripped_for_exact_match() {
        assert_eq!(resolve("Toyota Camry", "SE", CATALOG), "Camry SE");
        assert_eq!(resolve("toyota Camry", "SE", CATALOG), "Camry SE");
    }

    #[test]
    fn exact_match_ignores_case_and_punctuation() {
        assert_eq!(resolve("camry", "s.e.", CATALOG), "Camry SE");
    }

    #[test]
    fn similarity_fallback_covers_unknown_trims() {
        assert_eq!(resolve("RAV4 Hybrid", "XLE Premium", CATALOG), "RAV4 Hybrid XLE");
    }

    #[test]
    fn model_only_fallback_matches_two_token_prefix() {
        // Enough trim gibberish drags every blended score under the
        // similarity floor, but the bare model still matches the entry's
        // two-token prefix exactly.
        let catalog = &["Highlander Hybrid XLE"];
        let trim = "ZZZZZZZZ QQQQQQQQ WWWWWWWW JJJJJJJJ KKKKKKKK VVVVVVVV";
        assert_eq!(resolve("Toyota Highlander Hybrid", trim, catalog), catalog[0]);
    }

    #[test]
    fn unmatched_input_falls_back_to_first_entry() {
        assert_eq!(resolve("Zorg", "Blorp", CATALOG), "Camry SE");
    }

    #[test]
    fn empty_inputs_resolve_to_a_catalog_member() {
        let resolved = resolve("", "", CATALOG);
        assert!(CATALOG.contains(&resolved));
    }

    #[test]
    fn first_catalog_entry_wins_ties() {
        // Both entries normalize identically; the earlier one is returned.
        let catalog = &["CAMRY SE!", "Camry SE"];
        assert_eq!(resolve("Camry", "SE", catalog), "CAMRY SE!");
    }

    #[test]
    fn strip_make_prefix_only_removes_leading_occurrence() {
        assert_eq!(strip_make_prefix("Toyota Camry"), "Camry");
        assert_eq!(strip_make_prefix("TOYOTA Camry"), "Camry");
        assert_eq!(strip_make_prefix("Camry Toyota"), "Camry Toyota");
        assert_eq!(strip_make_prefix(""), "");
    }

    #[test]
    fn candidate_spellings_keep_the_documented_order() {
        let candidates = candidate_spellings("Toyota Camry", "SE");
        assert_eq!(
            candidates,
            vec![
                "Toyota Camry SE".to_string(),
                "Camry SE".to_string(),
                "Toyota Camry SE".to_string(),
                "Camry SE".to_string(),
            ]
        );
    }
}
