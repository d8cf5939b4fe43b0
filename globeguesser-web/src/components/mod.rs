pub mod confirm_dialog;
pub mod guess_map;
pub mod panorama;
pub mod result_dialog;
pub mod summary;

use globeguesser_game::GuessAttempt;

/// Distance formatted the way the result panes show it.
#[must_use]
pub fn format_km(distance_km: f64) -> String {
    format!("{distance_km:.1} km")
}

/// One end-of-session summary row.
#[must_use]
pub fn summary_line(attempt: &GuessAttempt) -> String {
    format!(
        "{}. Distance: {} - Points: {}",
        attempt.round_index + 1,
        format_km(attempt.distance_km),
        attempt.points
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use globeguesser_game::GeoPoint;

    #[test]
    fn distances_round_to_one_decimal() {
        assert_eq!(format_km(0.0), "0.0 km");
        assert_eq!(format_km(79.96), "80.0 km");
        assert_eq!(format_km(12345.678), "12345.7 km");
    }

    #[test]
    fn summary_rows_are_one_based() {
        let attempt = GuessAttempt {
            round_index: 1,
            guess: GeoPoint::new(0.0, 0.0),
            target: GeoPoint::new(0.0, 1.0),
            distance_km: 111.2,
            points: 2220,
        };
        assert_eq!(summary_line(&attempt), "2. Distance: 111.2 km - Points: 2220");
    }
}
