//! The fixed, ordered list of locations a session plays through.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::GeoPoint;
use crate::score::MAX_ROUND_POINTS;

/// One playable location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// Opaque embed reference handed to the panorama viewer; the core
    /// never parses or validates it.
    pub panorama_url: String,
    /// The answer the player's guess is measured against.
    pub location: GeoPoint,
    /// Human-readable name shown on the result overlay.
    pub label: String,
}

impl Round {
    #[must_use]
    pub fn new(panorama_url: &str, location: GeoPoint, label: &str) -> Self {
        Self {
            panorama_url: panorama_url.to_string(),
            location,
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    /// Index past the end of the catalog; unreachable while the session
    /// invariants hold, so an occurrence points at a state-machine bug.
    #[error("round index {index} outside catalog of {len} rounds")]
    OutOfRange { index: usize, len: usize },
}

/// Immutable, index-addressable round list fixed at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundCatalog {
    rounds: Vec<Round>,
}

impl RoundCatalog {
    #[must_use]
    pub const fn new(rounds: Vec<Round>) -> Self {
        Self { rounds }
    }

    /// The three production locations.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            Round::new(
                "https://schools.360cities.net/image/embed/xj5P924JH77Gm-_TzpvGMA",
                GeoPoint::new(40.7576, -73.985_881),
                "Times Square, New York, America",
            ),
            Round::new(
                "https://schools.360cities.net/image/embed/WtXQtfl3z1xOquFIKZxRKg",
                GeoPoint::new(51.512_748_038_261_84, -0.083_512_980_549_349_82),
                "Leadenhall Market, London, The UK",
            ),
            Round::new(
                "https://schools.360cities.net/image/embed/KfS7hpIbhzHGhuloCpDLBw",
                GeoPoint::new(-33.857_779_466_532_59, 151.214_279_947_517_95),
                "Sydney Opera House, Sydney, Australia",
            ),
        ])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Round at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::OutOfRange`] when `index` is past the end.
    pub fn get(&self, index: usize) -> Result<&Round, CatalogError> {
        self.rounds.get(index).ok_or(CatalogError::OutOfRange {
            index,
            len: self.rounds.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Round> {
        self.rounds.iter()
    }

    /// Highest total a session over this catalog can reach.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        u32::try_from(self.rounds.len()).unwrap_or(u32::MAX) * MAX_ROUND_POINTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_three_ordered_rounds() {
        let catalog = RoundCatalog::standard();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.max_score(), 15_000);
        assert!(catalog.get(0).unwrap().label.contains("Times Square"));
        assert!(catalog.get(1).unwrap().label.contains("Leadenhall"));
        assert!(catalog.get(2).unwrap().label.contains("Sydney"));
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let catalog = RoundCatalog::standard();
        let err = catalog.get(3).unwrap_err();
        assert_eq!(err, CatalogError::OutOfRange { index: 3, len: 3 });

        let empty = RoundCatalog::new(Vec::new());
        assert!(empty.is_empty());
        assert!(empty.get(0).is_err());
    }

    #[test]
    fn rounds_serialize_round_trip() {
        let catalog = RoundCatalog::standard();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: RoundCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
