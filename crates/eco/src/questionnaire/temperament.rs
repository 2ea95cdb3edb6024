use super::domain::Temperament;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Score band used by the four-quadrant temperament model. Scores of 4 and 5 belong to no band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Low,
    High,
}

impl Band {
    pub const LOW: RangeInclusive<i64> = 0..=3;
    pub const HIGH: RangeInclusive<i64> = 6..=9;

    pub fn of(score: i64) -> Option<Self> {
        if Self::LOW.contains(&score) {
            Some(Self::Low)
        } else if Self::HIGH.contains(&score) {
            Some(Self::High)
        } else {
            None
        }
    }
}

/// Classify a wanted/expressed score pair. `None` means undetermined.
pub fn classify(wanted: i64, expressed: i64) -> Option<Temperament> {
    match (Band::of(wanted)?, Band::of(expressed)?) {
        (Band::Low, Band::Low) => Some(Temperament::Melancholic),
        (Band::High, Band::Low) => Some(Temperament::Supine),
        (Band::Low, Band::High) => Some(Temperament::Choleric),
        (Band::High, Band::High) => Some(Temperament::Sanguine),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrants() {
        assert_eq!(classify(2, 2), Some(Temperament::Melancholic));
        assert_eq!(classify(8, 1), Some(Temperament::Supine));
        assert_eq!(classify(1, 9), Some(Temperament::Choleric));
        assert_eq!(classify(7, 7), Some(Temperament::Sanguine));
    }

    #[test]
    fn band_edges_are_inclusive() {
        assert_eq!(classify(0, 0), Some(Temperament::Melancholic));
        assert_eq!(classify(3, 3), Some(Temperament::Melancholic));
        assert_eq!(classify(6, 3), Some(Temperament::Supine));
        assert_eq!(classify(3, 6), Some(Temperament::Choleric));
        assert_eq!(classify(9, 9), Some(Temperament::Sanguine));
    }

    #[test]
    fn mid_range_scores_are_undetermined() {
        assert_eq!(classify(4, 9), None);
        assert_eq!(classify(5, 5), None);
        assert_eq!(classify(0, 4), None);
        assert_eq!(classify(9, 5), None);
    }

    #[test]
    fn out_of_range_scores_are_undetermined() {
        assert_eq!(classify(-1, 2), None);
        assert_eq!(classify(2, 10), None);
        assert_eq!(classify(i64::MAX, i64::MIN), None);
    }

    #[test]
    fn order_of_arguments_matters() {
        assert_ne!(classify(8, 1), classify(1, 8));
    }
}
