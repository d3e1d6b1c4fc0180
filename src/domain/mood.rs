//! Mood classification: color tokens, the threshold table and mood buckets

use crate::error::{MoodlogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic color used by every presentation surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Primary,
    Secondary,
    Warning,
    Muted,
    Danger,
    Success,
}

impl ColorToken {
    pub fn name(&self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::Secondary => "secondary",
            ColorToken::Warning => "warning",
            ColorToken::Muted => "muted",
            ColorToken::Danger => "danger",
            ColorToken::Success => "success",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            ColorToken::Primary => "#9b87f5",
            ColorToken::Secondary => "#33C3F0",
            ColorToken::Warning => "#FFB84D",
            ColorToken::Muted => "#6C757D",
            ColorToken::Danger => "#FF6B6B",
            ColorToken::Success => "#6BCB77",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.hex())
    }
}

/// One row of the threshold table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodBand {
    pub min: u8,
    pub label: String,
    pub color: ColorToken,
}

impl MoodBand {
    pub fn new(min: u8, label: impl Into<String>, color: ColorToken) -> Self {
        MoodBand {
            min,
            label: label.into(),
            color,
        }
    }
}

/// Result of classifying a mood score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodClass {
    pub label: String,
    pub color: ColorToken,
}

/// Threshold table evaluated high to low, first `mood >= min` wins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodScale {
    // Sorted by `min`, descending
    bands: Vec<MoodBand>,
}

impl MoodScale {
    /// Build a scale from bands in any order.
    ///
    /// Fails on an empty table or on two bands sharing a threshold.
    pub fn new(mut bands: Vec<MoodBand>) -> Result<Self> {
        if bands.is_empty() {
            return Err(MoodlogError::Config(
                "Mood scale must contain at least one band".to_string(),
            ));
        }

        bands.sort_by(|a, b| b.min.cmp(&a.min));

        if let Some(pair) = bands.windows(2).find(|w| w[0].min == w[1].min) {
            return Err(MoodlogError::Config(format!(
                "Duplicate mood scale threshold: {}",
                pair[0].min
            )));
        }

        Ok(MoodScale { bands })
    }

    pub fn bands(&self) -> &[MoodBand] {
        &self.bands
    }

    /// Classify a mood score.
    ///
    /// A score below every threshold falls into the lowest band.
    pub fn classify(&self, mood: u8) -> MoodClass {
        let band = self
            .bands
            .iter()
            .find(|band| mood >= band.min)
            .or_else(|| self.bands.last());

        match band {
            Some(band) => MoodClass {
                label: band.label.clone(),
                color: band.color,
            },
            // `new` never builds an empty scale
            None => MoodClass {
                label: String::new(),
                color: ColorToken::Primary,
            },
        }
    }
}

impl Default for MoodScale {
    fn default() -> Self {
        MoodScale {
            bands: vec![
                MoodBand::new(8, "Very Happy", ColorToken::Primary),
                MoodBand::new(6, "Happy", ColorToken::Secondary),
                MoodBand::new(4, "Neutral", ColorToken::Warning),
                MoodBand::new(2, "Sad", ColorToken::Muted),
                MoodBand::new(0, "Very Sad", ColorToken::Danger),
            ],
        }
    }
}

/// Classify a mood score with the default scale
pub fn classify_mood(mood: u8) -> MoodClass {
    MoodScale::default().classify(mood)
}

/// Mood-range filter used by the journal list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoodBucket {
    #[default]
    All,
    /// 8 and above
    VeryHappy,
    /// 6-7
    Happy,
    /// 4-5
    Neutral,
    /// 2-3
    Sad,
    /// 0-1
    VerySad,
}

impl MoodBucket {
    pub const RANGES: [MoodBucket; 5] = [
        MoodBucket::VerySad,
        MoodBucket::Sad,
        MoodBucket::Neutral,
        MoodBucket::Happy,
        MoodBucket::VeryHappy,
    ];

    /// Inclusive lower bound, `None` for `All`
    pub fn lower_bound(&self) -> Option<u8> {
        match self {
            MoodBucket::All => None,
            MoodBucket::VeryHappy => Some(8),
            MoodBucket::Happy => Some(6),
            MoodBucket::Neutral => Some(4),
            MoodBucket::Sad => Some(2),
            MoodBucket::VerySad => Some(0),
        }
    }

    /// Half-open `[b, b + 2)`; the top bucket has no upper bound
    pub fn matches(&self, mood: u8) -> bool {
        match self {
            MoodBucket::All => true,
            MoodBucket::VeryHappy => mood >= 8,
            _ => match self.lower_bound() {
                Some(b) => mood >= b && mood < b + 2,
                None => true,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodBucket::All => "all",
            MoodBucket::VeryHappy => "very-happy",
            MoodBucket::Happy => "happy",
            MoodBucket::Neutral => "neutral",
            MoodBucket::Sad => "sad",
            MoodBucket::VerySad => "very-sad",
        }
    }
}

impl FromStr for MoodBucket {
    type Err = MoodlogError;

    /// Accepts the kebab-case name or the numeric lower bound
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(MoodBucket::All),
            "very-happy" | "8" => Ok(MoodBucket::VeryHappy),
            "happy" | "6" => Ok(MoodBucket::Happy),
            "neutral" | "4" => Ok(MoodBucket::Neutral),
            "sad" | "2" => Ok(MoodBucket::Sad),
            "very-sad" | "0" => Ok(MoodBucket::VerySad),
            _ => Err(MoodlogError::InvalidMoodBucket(s.to_string())),
        }
    }
}

impl fmt::Display for MoodBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale_thresholds() {
        let cases = [
            (10, "Very Happy", ColorToken::Primary),
            (8, "Very Happy", ColorToken::Primary),
            (7, "Happy", ColorToken::Secondary),
            (6, "Happy", ColorToken::Secondary),
            (5, "Neutral", ColorToken::Warning),
            (4, "Neutral", ColorToken::Warning),
            (3, "Sad", ColorToken::Muted),
            (2, "Sad", ColorToken::Muted),
            (1, "Very Sad", ColorToken::Danger),
            (0, "Very Sad", ColorToken::Danger),
        ];

        for (mood, label, color) in cases {
            let class = classify_mood(mood);
            assert_eq!(class.label, label, "mood {}", mood);
            assert_eq!(class.color, color, "mood {}", mood);
        }
    }

    #[test]
    fn test_classify_is_deterministic() {
        for mood in 0..=10 {
            assert_eq!(classify_mood(mood), classify_mood(mood));
        }
    }

    #[test]
    fn test_scale_sorts_unordered_bands() {
        let scale = MoodScale::new(vec![
            MoodBand::new(0, "Low", ColorToken::Danger),
            MoodBand::new(5, "High", ColorToken::Success),
        ])
        .unwrap();

        assert_eq!(scale.bands()[0].min, 5);
        assert_eq!(scale.classify(7).label, "High");
        assert_eq!(scale.classify(4).label, "Low");
    }

    #[test]
    fn test_scale_below_all_thresholds_uses_lowest_band() {
        let scale = MoodScale::new(vec![
            MoodBand::new(6, "Good", ColorToken::Secondary),
            MoodBand::new(3, "Meh", ColorToken::Muted),
        ])
        .unwrap();

        let class = scale.classify(1);
        assert_eq!(class.label, "Meh");
        assert_eq!(class.color, ColorToken::Muted);
    }

    #[test]
    fn test_scale_rejects_empty_and_duplicates() {
        assert!(MoodScale::new(vec![]).is_err());

        let err = MoodScale::new(vec![
            MoodBand::new(4, "A", ColorToken::Warning),
            MoodBand::new(4, "B", ColorToken::Muted),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate mood scale threshold: 4"));
    }

    #[test]
    fn test_color_token_hex() {
        assert_eq!(ColorToken::Primary.hex(), "#9b87f5");
        assert_eq!(ColorToken::Danger.hex(), "#FF6B6B");
        assert_eq!(ColorToken::Secondary.to_string(), "secondary #33C3F0");
    }

    #[test]
    fn test_each_mood_in_exactly_one_range_bucket() {
        for mood in 0..=10u8 {
            let hits: Vec<MoodBucket> = MoodBucket::RANGES
                .iter()
                .copied()
                .filter(|b| b.matches(mood))
                .collect();
            assert_eq!(hits.len(), 1, "mood {} matched {:?}", mood, hits);
        }
        assert!(MoodBucket::VeryHappy.matches(10));
    }

    #[test]
    fn test_bucket_half_open_ranges() {
        assert!(MoodBucket::Neutral.matches(4));
        assert!(MoodBucket::Neutral.matches(5));
        assert!(!MoodBucket::Neutral.matches(6));
        assert!(!MoodBucket::Neutral.matches(3));
        assert!(MoodBucket::VerySad.matches(0));
        assert!(MoodBucket::VerySad.matches(1));
        assert!(!MoodBucket::VerySad.matches(2));
        assert!(MoodBucket::All.matches(0));
        assert!(MoodBucket::All.matches(10));
    }

    #[test]
    fn test_bucket_from_str() {
        assert_eq!("all".parse::<MoodBucket>().unwrap(), MoodBucket::All);
        assert_eq!("8".parse::<MoodBucket>().unwrap(), MoodBucket::VeryHappy);
        assert_eq!(
            "Very-Happy".parse::<MoodBucket>().unwrap(),
            MoodBucket::VeryHappy
        );
        assert_eq!("4".parse::<MoodBucket>().unwrap(), MoodBucket::Neutral);
        assert_eq!("very-sad".parse::<MoodBucket>().unwrap(), MoodBucket::VerySad);

        let err = "3".parse::<MoodBucket>().unwrap_err();
        assert!(matches!(err, MoodlogError::InvalidMoodBucket(ref s) if s == "3"));
    }

    #[test]
    fn test_bucket_display_roundtrips_through_from_str() {
        for bucket in MoodBucket::RANGES {
            assert_eq!(bucket.to_string().parse::<MoodBucket>().unwrap(), bucket);
        }
    }
}
