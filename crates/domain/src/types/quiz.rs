//! Quiz card labels and the static card-to-vehicle tables
//!
//! A quiz traversal produces an ordered list of card labels (repeats
//! allowed). The tables below translate those labels into concrete vehicles
//! and into a preference description; both are fixed per deployment.

/// A model/trim pair referencing a concrete vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleRef {
    pub base_model: &'static str,
    pub trim_name: &'static str,
}

/// Vehicles suggested when a quiz card is selected
#[derive(Debug, Clone, Copy)]
pub struct CardVehicles {
    pub label: &'static str,
    pub vehicles: [VehicleRef; 3],
}

/// Lifestyle profile attached to a quiz card
#[derive(Debug, Clone, Copy)]
pub struct CardProfile {
    pub label: &'static str,
    pub description: &'static str,
    pub vehicle_types: &'static [&'static str],
    pub features: &'static [&'static str],
    pub preferences: &'static [&'static str],
}

/// The eight quiz card labels, in quiz order
pub const QUIZ_CARD_LABELS: [&str; 8] = [
    "Sleek Sporty",
    "Family Roomy",
    "Gas1 Mood",
    "Gas2 Whatev",
    "Speed Demon",
    "Practical Life",
    "Chill",
    "Chaos",
];

const fn vehicle(base_model: &'static str, trim_name: &'static str) -> VehicleRef {
    VehicleRef { base_model, trim_name }
}

/// Static mapping from card label to its three suggested vehicles.
///
/// Base models carry the "Toyota " make prefix the recommendation service
/// also emits, so asset matching exercises the same spelling variations for
/// fallback results as for live ones.
pub const VEHICLE_CARD_MAPPING: &[CardVehicles] = &[
    CardVehicles {
        label: "Sleek Sporty",
        vehicles: [
            vehicle("Toyota GR86", "Premium"),
            vehicle("Toyota Camry", "XSE"),
            vehicle("Toyota Corolla", "XSE"),
        ],
    },
    CardVehicles {
        label: "Family Roomy",
        vehicles: [
            vehicle("Toyota Highlander", "XLE"),
            vehicle("Toyota Sienna", "XLE"),
            vehicle("Toyota Grand Highlander", "Limited"),
        ],
    },
    CardVehicles {
        label: "Gas1 Mood",
        vehicles: [
            vehicle("Toyota Prius", "XLE"),
            vehicle("Toyota RAV4 Hybrid", "XLE"),
            vehicle("Toyota bZ4X", "XLE"),
        ],
    },
    CardVehicles {
        label: "Gas2 Whatev",
        vehicles: [
            vehicle("Toyota Camry", "LE"),
            vehicle("Toyota RAV4", "XLE"),
            vehicle("Toyota Tacoma", "SR5"),
        ],
    },
    CardVehicles {
        label: "Speed Demon",
        vehicles: [
            vehicle("Toyota Prius", "LE"),
            vehicle("Toyota Corolla Hybrid", "LE"),
            vehicle("Toyota Camry Hybrid", "SE"),
        ],
    },
    CardVehicles {
        label: "Practical Life",
        vehicles: [
            vehicle("Toyota GR Supra", "3.0"),
            vehicle("Toyota GR Corolla", "Core"),
            vehicle("Toyota Camry", "XSE"),
        ],
    },
    CardVehicles {
        label: "Chill",
        vehicles: [
            vehicle("Toyota Corolla", "LE"),
            vehicle("Toyota Corolla Hatchback", "SE"),
            vehicle("Toyota Crown", "XLE"),
        ],
    },
    CardVehicles {
        label: "Chaos",
        vehicles: [
            vehicle("Toyota 4Runner", "TRD Pro"),
            vehicle("Toyota Tacoma", "TRD Off-Road"),
            vehicle("Toyota Land Cruiser", "First Edition"),
        ],
    },
];

/// Lifestyle profiles backing the preference summary
pub const CARD_PROFILES: &[CardProfile] = &[
    CardProfile {
        label: "Sleek Sporty",
        description: "For sports cars and sedans",
        vehicle_types: &["sports car", "sedan"],
        features: &["aerodynamic", "performance-oriented"],
        preferences: &["speed", "style"],
    },
    CardProfile {
        label: "Family Roomy",
        description: "For SUVs and minivans",
        vehicle_types: &["SUV", "minivan"],
        features: &["spacious", "comfortable"],
        preferences: &["safety", "space"],
    },
    CardProfile {
        label: "Gas1 Mood",
        description: "For hybrid and electric vehicles",
        vehicle_types: &["hybrid", "electric"],
        features: &["fuel-efficient", "eco-friendly"],
        preferences: &["economy", "sustainability"],
    },
    CardProfile {
        label: "Gas2 Whatev",
        description: "For gasoline vehicles",
        vehicle_types: &["gasoline"],
        features: &["traditional", "versatile"],
        preferences: &["conventional", "reliability"],
    },
    CardProfile {
        label: "Speed Demon",
        description: "High miles per gallon and fuel efficient",
        vehicle_types: &["efficient performance"],
        features: &["fuel efficiency", "performance"],
        preferences: &["economy", "speed"],
    },
    CardProfile {
        label: "Practical Life",
        description: "Lower mileage, more performance",
        vehicle_types: &["performance vehicle"],
        features: &["powerful", "dynamic"],
        preferences: &["performance", "excitement"],
    },
    CardProfile {
        label: "Chill",
        description: "For smooth city cruisers like sedans and hatchbacks",
        vehicle_types: &["sedan", "hatchback"],
        features: &["comfortable", "city-friendly"],
        preferences: &["comfort", "practicality"],
    },
    CardProfile {
        label: "Chaos",
        description: "For rugged rides like SUVs and trucks",
        vehicle_types: &["SUV", "truck"],
        features: &["rugged", "off-road capable"],
        preferences: &["adventure", "capability"],
    },
];

/// Look up the vehicles mapped to a card label, if the label is known
pub fn vehicles_for_card(label: &str) -> Option<&'static [VehicleRef; 3]> {
    VEHICLE_CARD_MAPPING.iter().find(|entry| entry.label == label).map(|entry| &entry.vehicles)
}

/// Look up the lifestyle profile for a card label, if the label is known
pub fn profile_for_card(label: &str) -> Option<&'static CardProfile> {
    CARD_PROFILES.iter().find(|profile| profile.label == label)
}
