//! Ball speed presets

use serde::{Deserialize, Serialize};

use crate::Config;

/// Speed preset selectable from the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpeedPreset {
    Slow,
    #[default]
    Normal,
    Fast,
    Insane,
}

impl SpeedPreset {
    pub const ALL: [SpeedPreset; 4] = [
        SpeedPreset::Slow,
        SpeedPreset::Normal,
        SpeedPreset::Fast,
        SpeedPreset::Insane,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedPreset::Slow => "Slow",
            SpeedPreset::Normal => "Normal",
            SpeedPreset::Fast => "Fast",
            SpeedPreset::Insane => "Insane",
        }
    }

    /// Position in the dropdown
    pub fn index(&self) -> usize {
        match self {
            SpeedPreset::Slow => 0,
            SpeedPreset::Normal => 1,
            SpeedPreset::Fast => 2,
            SpeedPreset::Insane => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Ball speed in units per frame
    pub fn magnitude(&self, config: &Config) -> f32 {
        config.speed_presets[self.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_normal() {
        assert_eq!(SpeedPreset::default(), SpeedPreset::Normal);
    }

    #[test]
    fn test_magnitudes() {
        let config = Config::new();
        let magnitudes: Vec<f32> = SpeedPreset::ALL
            .iter()
            .map(|p| p.magnitude(&config))
            .collect();
        assert_eq!(magnitudes, vec![1.0, 2.0, 4.0, 7.0]);
    }

    #[test]
    fn test_index_round_trip() {
        for preset in SpeedPreset::ALL {
            assert_eq!(SpeedPreset::from_index(preset.index()), Some(preset));
        }
        assert_eq!(SpeedPreset::from_index(4), None);
    }
}
