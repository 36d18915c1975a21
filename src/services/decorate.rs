use tracing::info;

use crate::model::building::{Building, DecoratedBuilding};
use crate::services::matching::{MatchResult, Resolver};

/// Attaches catalog photos to building rows. Buildings whose name does not
/// reconcile keep `image: None`. Output is ordered by name, case-insensitive.
pub fn decorate(buildings: Vec<Building>, resolver: &Resolver) -> Vec<DecoratedBuilding> {
    let mut out: Vec<DecoratedBuilding> = buildings
        .into_iter()
        .map(|b| decorate_one(b, resolver))
        .collect();

    let matched = out.iter().filter(|d| d.image.is_some()).count();
    info!(
        buildings = out.len(),
        matched,
        catalog = resolver.catalog().fingerprint(),
        "buildings decorated"
    );

    out.sort_by_cached_key(|d| d.building.organization_name.to_lowercase());
    out
}

pub fn decorate_one(building: Building, resolver: &Resolver) -> DecoratedBuilding {
    match resolver.resolve(&building.organization_name) {
        MatchResult::Matched { entry, score } => DecoratedBuilding {
            image: Some(entry.asset_reference.clone()),
            match_score: Some(score),
            building,
        },
        MatchResult::NoMatch => DecoratedBuilding {
            image: None,
            match_score: None,
            building,
        },
    }
}
