//! Probability to American odds conversion.

/// Returned for probabilities that have no finite odds.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a win probability as an American odds string.
///
/// Underdogs (`p < 0.5`) get `+N`, the payout on a 100 stake. Favourites get
/// `-N`, the stake needed to win 100. Values outside the open interval (0, 1),
/// including NaN, yield `"N/A"`. Rounding is half away from zero.
pub fn probability_to_american_odds(probability: f64) -> String {
    if !(probability > 0.0 && probability < 1.0) {
        return NOT_AVAILABLE.to_string();
    }

    let (sign, magnitude) = if probability < 0.5 {
        ('+', ((1.0 / probability - 1.0) * 100.0).round())
    } else {
        ('-', (-100.0 / (probability - 1.0)).round())
    };

    // Subnormal probabilities overflow `1 / p`.
    if !magnitude.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    format!("{}{:.0}", sign, magnitude)
}

/// Round to a fixed number of decimal places, half away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
