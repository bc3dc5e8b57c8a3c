//! End-to-end behavior of the matching cascade and fallback policy against
//! the production catalog and card tables.

use std::sync::Arc;

use async_trait::async_trait;
use roadquest_core::matching::{normalize, resolve, similarity, AssetResolver};
use roadquest_core::recommendation::{select_fallback, RecommendationGateway, RecommendationService};
use roadquest_domain::{
    AssetConfig, QuizAck, QuizSelections, Recommendation, RecommendationsResponse, Result,
    VEHICLE_CARD_MAPPING, VEHICLE_IMAGE_CATALOG,
};

#[test]
fn normalize_is_idempotent_over_catalog_entries() {
    for entry in VEHICLE_IMAGE_CATALOG {
        let once = normalize(entry);
        assert_eq!(normalize(&once), once, "not idempotent for {entry:?}");
    }
}

#[test]
fn similarity_is_reflexive_and_bounded_over_catalog_entries() {
    for entry in VEHICLE_IMAGE_CATALOG {
        assert_eq!(similarity(entry, entry), 1.0);
    }

    for window in VEHICLE_IMAGE_CATALOG.windows(2) {
        let score = similarity(window[0], window[1]);
        assert!((0.0..=1.0).contains(&score), "{window:?} scored {score}");
    }
}

#[test]
fn resolve_always_returns_a_catalog_member() {
    let inputs = [
        ("Toyota Camry", "SE"),
        ("RAV4 Hybrid", "XLE Premium"),
        ("Zorg", "Blorp"),
        ("", ""),
        ("   ", "???"),
        ("toyota toyota", "toyota"),
    ];

    for (model, trim) in inputs {
        let resolved = resolve(model, trim, VEHICLE_IMAGE_CATALOG);
        assert!(
            VEHICLE_IMAGE_CATALOG.contains(&resolved),
            "{model:?}/{trim:?} resolved outside the catalog: {resolved:?}"
        );
    }
}

#[test]
fn every_mapped_vehicle_resolves_to_its_exact_catalog_entry() {
    // Our own static data must never rely on fuzzy degradation.
    for card in VEHICLE_CARD_MAPPING {
        for vehicle in &card.vehicles {
            let resolved = resolve(vehicle.base_model, vehicle.trim_name, VEHICLE_IMAGE_CATALOG);
            let expected = format!(
                "{} {}",
                vehicle.base_model.trim_start_matches("Toyota "),
                vehicle.trim_name
            );
            assert_eq!(
                normalize(resolved),
                normalize(&expected),
                "card {:?} vehicle {:?} degraded to {resolved:?}",
                card.label,
                vehicle
            );
        }
    }
}

#[test]
fn default_podium_vehicles_resolve_exactly() {
    for rec in select_fallback(&[]) {
        let resolved = resolve(&rec.base_model, &rec.trim_name, VEHICLE_IMAGE_CATALOG);
        let expected = format!("{} {}", rec.base_model.trim_start_matches("Toyota "), rec.trim_name);
        assert_eq!(normalize(resolved), normalize(&expected));
    }
}

#[test]
fn asset_paths_point_into_the_catalog() {
    let assets = AssetResolver::new(VEHICLE_IMAGE_CATALOG, &AssetConfig::default());

    let path = assets.resolve_path("Toyota RAV4 Hybrid", "XLE");
    assert_eq!(path, "/vehicle-images/RAV4 Hybrid XLE.png");

    // Degraded names land on the default asset, detectably.
    assert_eq!(assets.resolve_path("Zorg", "Blorp"), assets.default_path());
}

/// Gateway stub returning recommendations out of rank order
struct UnorderedGateway;

#[async_trait]
impl RecommendationGateway for UnorderedGateway {
    async fn fetch_recommendations(&self) -> Result<RecommendationsResponse> {
        let rec = |rank: u32, base_model: &str, trim_name: &str| Recommendation {
            rank,
            base_model: base_model.to_string(),
            trim_name: trim_name.to_string(),
            reason: None,
        };
        Ok(RecommendationsResponse {
            success: true,
            recommendations: Some(vec![
                rec(2, "Toyota Camry", "SE"),
                rec(1, "Toyota RAV4", "XLE"),
                rec(3, "Toyota Corolla", "LE"),
            ]),
        })
    }

    async fn fetch_selections(&self) -> Result<QuizSelections> {
        Ok(QuizSelections::default())
    }

    async fn submit_selections(&self, _selections: &QuizSelections) -> Result<QuizAck> {
        Ok(QuizAck { success: true })
    }
}

#[tokio::test]
async fn podium_is_rank_ordered_regardless_of_service_order() {
    let service = RecommendationService::new(Arc::new(UnorderedGateway));
    let podium = service.podium_recommendations().await;

    assert_eq!(podium.len(), 3);
    assert_eq!(podium[0].rank, 1);
    assert_eq!(podium[0].base_model, "Toyota RAV4");
    assert_eq!(podium[2].rank, 3);
}
