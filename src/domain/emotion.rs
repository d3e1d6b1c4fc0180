//! Emotion name to color lookup

use crate::domain::mood::ColorToken;
use std::collections::HashMap;

/// Color for emotion names outside the palette
pub const DEFAULT_EMOTION_COLOR: ColorToken = ColorToken::Primary;

/// Emotion color table. Names are matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionPalette {
    colors: HashMap<String, ColorToken>,
    fallback: ColorToken,
}

impl EmotionPalette {
    /// Add or replace a color for an emotion name
    pub fn insert(&mut self, name: &str, color: ColorToken) {
        self.colors.insert(name.to_lowercase(), color);
    }

    /// Look up a color, falling back to the default for unknown names
    pub fn color_for(&self, name: &str) -> ColorToken {
        self.colors
            .get(&name.to_lowercase())
            .copied()
            .unwrap_or(self.fallback)
    }
}

impl Default for EmotionPalette {
    fn default() -> Self {
        let mut palette = EmotionPalette {
            colors: HashMap::new(),
            fallback: DEFAULT_EMOTION_COLOR,
        };
        palette.insert("Joy", ColorToken::Primary);
        palette.insert("Contentment", ColorToken::Secondary);
        palette.insert("Anxiety", ColorToken::Warning);
        palette.insert("Sadness", ColorToken::Muted);
        palette.insert("Anger", ColorToken::Danger);
        palette.insert("Surprise", ColorToken::Success);
        palette
    }
}

/// Look up an emotion color in the default palette
pub fn classify_emotion_color(name: &str) -> ColorToken {
    EmotionPalette::default().color_for(name)
}
