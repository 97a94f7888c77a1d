//! Serving-Size Scaling
//!
//! Pure helpers for scaling ingredient amounts by a servings multiplier.

/// Multiplier applied when none has been set, and the parse fallback
pub const DEFAULT_MULTIPLIER: f64 = 1.0;

/// Parse a multiplier from raw input text.
///
/// Unparseable text (empty field, stray characters) falls back to 1.0 rather
/// than leaving a stale value. Parsed values pass through unmodified; the
/// input control's min=0.5 is a UI hint, not an invariant enforced here.
pub fn parse_multiplier(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(DEFAULT_MULTIPLIER)
}

/// Scale a base amount and format with exactly one digit after the decimal
pub fn scaled_display(base: f64, multiplier: f64) -> String {
    format!("{:.1}", base * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_multiplier() {
        assert_eq!(scaled_display(400.0, 1.0), "400.0");
        assert_eq!(scaled_display(2.0, 1.0), "2.0");
        assert_eq!(scaled_display(0.5, 1.0), "0.5");
    }

    #[test]
    fn test_linear_scaling() {
        assert_eq!(scaled_display(200.0, 1.5), "300.0");
        assert_eq!(scaled_display(400.0, 1.5), "600.0");
        assert_eq!(scaled_display(3.0, 2.0), "6.0");
    }

    #[test]
    fn test_half_servings() {
        // servings 4 at multiplier 0.5 displays as 2.0
        assert_eq!(scaled_display(4.0, 0.5), "2.0");
    }

    #[test]
    fn test_zero_multiplier_displays_zero() {
        assert_eq!(scaled_display(400.0, 0.0), "0.0");
    }

    #[test]
    fn test_negative_multiplier_passes_through() {
        assert_eq!(scaled_display(100.0, -1.0), "-100.0");
    }

    #[test]
    fn test_parse_fallback() {
        assert_eq!(parse_multiplier(""), 1.0);
        assert_eq!(parse_multiplier("abc"), 1.0);
        assert_eq!(parse_multiplier("1.5.2"), 1.0);
    }

    #[test]
    fn test_parse_valid_values() {
        assert_eq!(parse_multiplier("1.5"), 1.5);
        assert_eq!(parse_multiplier(" 2 "), 2.0);
        assert_eq!(parse_multiplier("0"), 0.0);
        assert_eq!(parse_multiplier("-0.5"), -0.5);
    }
}
