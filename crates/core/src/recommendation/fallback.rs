//! Fallback recommendation selection
//!
//! When the recommendation service yields nothing usable, the user's quiz
//! card selections alone determine a podium: each known card contributes its
//! three mapped vehicles, the pool is de-duplicated preserving first-seen
//! order, and the first three entries become ranks 1..3.

use roadquest_domain::constants::PODIUM_SIZE;
use roadquest_domain::types::quiz::{profile_for_card, vehicles_for_card, VehicleRef};
use roadquest_domain::Recommendation;
use tracing::debug;

/// Podium shown when no quiz selections exist at all
const DEFAULT_PODIUM: [(&str, &str, &str); PODIUM_SIZE] = [
    ("Toyota RAV4", "XLE", "All-around crossover favorite"),
    ("Toyota Camry", "SE", "Proven midsize sedan with balanced comfort"),
    ("Toyota Corolla", "LE", "Efficient, dependable daily driver"),
];

/// Summary sentence used when no known card was selected
const NO_PREFERENCES: &str = "no specific preferences provided";

/// Derive a podium from quiz card selections.
///
/// Returns between 0 and 3 recommendations with contiguous ranks starting at
/// 1. Empty input yields the fixed default podium; unknown labels contribute
/// nothing, so a selection of only unknown labels yields an empty list (the
/// caller substitutes per-slot defaults).
#[must_use]
pub fn select_fallback(selected_cards: &[String]) -> Vec<Recommendation> {
    if selected_cards.is_empty() {
        debug!("no quiz selections, using default podium");
        return DEFAULT_PODIUM
            .iter()
            .enumerate()
            .map(|(position, (base_model, trim_name, reason))| Recommendation {
                rank: position as u32 + 1,
                base_model: (*base_model).to_string(),
                trim_name: (*trim_name).to_string(),
                reason: Some((*reason).to_string()),
            })
            .collect();
    }

    let mut picks: Vec<(VehicleRef, &str)> = Vec::new();
    for label in selected_cards {
        let Some(vehicles) = vehicles_for_card(label) else {
            debug!(label = label.as_str(), "unknown quiz card label, skipping");
            continue;
        };
        for vehicle in vehicles {
            if !picks.iter().any(|(seen, _)| seen == vehicle) {
                picks.push((*vehicle, label.as_str()));
            }
        }
    }

    picks.truncate(PODIUM_SIZE);
    picks
        .into_iter()
        .enumerate()
        .map(|(position, (vehicle, label))| Recommendation {
            rank: position as u32 + 1,
            base_model: vehicle.base_model.to_string(),
            trim_name: vehicle.trim_name.to_string(),
            reason: profile_for_card(label).map(|profile| profile.description.to_string()),
        })
        .collect()
}

/// Fold the selected cards' lifestyle profiles into one preference sentence.
///
/// Distinct features, preferences, and vehicle types are collected in
/// first-seen order; repeated cards add nothing. Selections without a single
/// known card produce a fixed placeholder sentence.
#[must_use]
pub fn preference_summary(selected_cards: &[String]) -> String {
    let mut features: Vec<&str> = Vec::new();
    let mut preferences: Vec<&str> = Vec::new();
    let mut vehicle_types: Vec<&str> = Vec::new();

    for label in selected_cards {
        let Some(profile) = profile_for_card(label) else {
            continue;
        };
        push_unique(&mut features, profile.features);
        push_unique(&mut preferences, profile.preferences);
        push_unique(&mut vehicle_types, profile.vehicle_types);
    }

    if features.is_empty() && preferences.is_empty() && vehicle_types.is_empty() {
        return NO_PREFERENCES.to_string();
    }

    format!(
        "looking for vehicles that are {} with a focus on {}, particularly interested in {}",
        features.join(", "),
        preferences.join(", "),
        vehicle_types.join(", ")
    )
}

fn push_unique<'a>(list: &mut Vec<&'a str>, items: &[&'a str]) {
    for item in items {
        if !list.contains(item) {
            list.push(item);
        }
    }
}
