//! Result-view fitting.
//!
//! After a round is scored the map has to show both the guess and the
//! answer. The zoom ceiling and box padding come from a fixed table
//! keyed on the same great-circle distance the score was computed from,
//! and every way the fit can fail degrades to a centered fallback view.

use serde::{Deserialize, Serialize};

use crate::geo::{self, GeoBounds, GeoPoint};

/// Zoom ceiling and bounding-box padding for one distance band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitTier {
    pub max_distance_km: f64,
    pub max_zoom: u8,
    pub padding: f64,
}

/// Distance bands from near-miss to antipodal; the last row catches
/// everything past 5000 km.
pub const FIT_TIERS: [FitTier; 6] = [
    FitTier {
        max_distance_km: 1.0,
        max_zoom: 16,
        padding: 1.5,
    },
    FitTier {
        max_distance_km: 10.0,
        max_zoom: 14,
        padding: 1.0,
    },
    FitTier {
        max_distance_km: 100.0,
        max_zoom: 11,
        padding: 0.8,
    },
    FitTier {
        max_distance_km: 1000.0,
        max_zoom: 8,
        padding: 0.5,
    },
    FitTier {
        max_distance_km: 5000.0,
        max_zoom: 6,
        padding: 0.3,
    },
    FitTier {
        max_distance_km: f64::INFINITY,
        max_zoom: 4,
        padding: 0.2,
    },
];

/// Zoom cap for the fallback view when a bounds fit cannot be applied.
const FALLBACK_ZOOM_CAP: u8 = 3;

/// Tier for a scored distance.
#[must_use]
pub fn tier_for_distance(distance_km: f64) -> FitTier {
    for tier in FIT_TIERS {
        if distance_km < tier.max_distance_km {
            return tier;
        }
    }
    FIT_TIERS[FIT_TIERS.len() - 1]
}

/// A concrete center-plus-zoom view. Always applicable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenterZoom {
    pub center: GeoPoint,
    pub zoom: u8,
}

/// What the renderer should ask of its map viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewportPlan {
    /// Fit the padded box without zooming past `max_zoom`. `fallback`
    /// is the view to apply instead when the map refuses the fit.
    FitBounds {
        bounds: GeoBounds,
        max_zoom: u8,
        fallback: CenterZoom,
    },
    /// Degenerate box; center directly.
    Center(CenterZoom),
}

impl ViewportPlan {
    /// The view to use when the primary request cannot be satisfied.
    #[must_use]
    pub const fn fallback(&self) -> CenterZoom {
        match *self {
            Self::FitBounds { fallback, .. } => fallback,
            Self::Center(view) => view,
        }
    }
}

/// Everything the result overlay needs to draw one round's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultView {
    pub guess: GeoPoint,
    pub target: GeoPoint,
    /// Drawn exactly as stored. When the points sit far apart the
    /// segment deliberately takes the long way across the map instead
    /// of wrapping at the antimeridian, so it stays visible on bounded
    /// tiles.
    pub path: [GeoPoint; 2],
    pub distance_km: f64,
    pub viewport: ViewportPlan,
}

impl ResultView {
    /// Normalize both points, measure them, and plan the viewport.
    #[must_use]
    pub fn compute(guess: GeoPoint, target: GeoPoint) -> Self {
        let guess = guess.normalized();
        let target = target.normalized();
        let distance_km = geo::distance_km(guess, target);
        let tier = tier_for_distance(distance_km);
        let bounds = GeoBounds::spanning(guess, target);
        let fallback = CenterZoom {
            center: bounds.center(),
            zoom: tier.max_zoom.min(FALLBACK_ZOOM_CAP),
        };
        let viewport = if bounds.is_degenerate() {
            ViewportPlan::Center(fallback)
        } else {
            ViewportPlan::FitBounds {
                bounds: bounds.padded(tier.padding),
                max_zoom: tier.max_zoom,
                fallback,
            }
        };
        Self {
            guess,
            target,
            path: [guess, target],
            distance_km,
            viewport,
        }
    }
}

/// One-shot handoff of a computed view to a renderer that may not be
/// mounted yet.
///
/// The core stages the view as soon as it exists; the renderer signals
/// readiness once its map is live. Whichever side arrives second
/// receives the view, exactly once, with no timers involved.
#[derive(Debug, Default, PartialEq)]
pub struct DeferredFit {
    pending: Option<ResultView>,
    ready: bool,
}

impl DeferredFit {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a view for delivery. Returns it immediately when the
    /// renderer has already signalled readiness.
    pub fn present(&mut self, view: ResultView) -> Option<ResultView> {
        self.pending = Some(view);
        self.take_if_ready()
    }

    /// Renderer-side readiness signal.
    pub fn mounted(&mut self) -> Option<ResultView> {
        self.ready = true;
        self.take_if_ready()
    }

    /// Drop any staged view and readiness, e.g. when the overlay closes.
    pub fn clear(&mut self) {
        self.pending = None;
        self.ready = false;
    }

    fn take_if_ready(&mut self) -> Option<ResultView> {
        if self.ready { self.pending.take() } else { None }
    }
}
