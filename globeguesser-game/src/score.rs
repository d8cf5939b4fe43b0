//! Distance-to-points mapping for a single round.

/// Maximum points a single round can award.
pub const MAX_ROUND_POINTS: u32 = 5000;

/// Points lost per kilometer of error; the award floors at zero from
/// 200 km out.
pub const POINTS_LOST_PER_KM: f64 = 25.0;

/// Score a guess by its great-circle error: full marks at zero
/// distance, linear decay, never negative.
#[must_use]
pub fn points_for_distance(distance_km: f64) -> u32 {
    let raw = (f64::from(MAX_ROUND_POINTS) - distance_km * POINTS_LOST_PER_KM).round();
    if raw <= 0.0 { 0 } else { raw as u32 }
}
