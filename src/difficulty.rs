use rand::Rng;

use crate::config::{DifficultyConfig, StimulusConfig};
use crate::types::{Orientation, StimulusParameters};

/// Maps the running score to a stimulus contrast and draws trials.
///
/// Holds configuration only; all per-game state lives in the session.
#[derive(Clone, Debug)]
pub struct DifficultyController {
    difficulty: DifficultyConfig,
    spatial_frequencies_cpd: Vec<f64>,
}

impl DifficultyController {
    pub fn new(difficulty: DifficultyConfig, stimulus: &StimulusConfig) -> Self {
        Self {
            difficulty,
            spatial_frequencies_cpd: stimulus.spatial_frequencies_cpd.clone(),
        }
    }

    pub fn config(&self) -> &DifficultyConfig {
        &self.difficulty
    }

    pub fn spatial_frequencies_cpd(&self) -> &[f64] {
        &self.spatial_frequencies_cpd
    }

    /// `max(min, initial * (1 - decay)^score)`.
    pub fn contrast_for_score(&self, score: u32) -> f64 {
        let DifficultyConfig {
            initial_contrast,
            min_contrast,
            decay_rate,
        } = self.difficulty;
        let exponent = i32::try_from(score).unwrap_or(i32::MAX);
        (initial_contrast * (1.0 - decay_rate).powi(exponent)).max(min_contrast)
    }

    /// Uniform, independent draws of frequency and orientation. No history is
    /// kept, so consecutive trials may repeat.
    ///
    /// Panics if the frequency set is empty; `AppConfig::validate` rejects that.
    pub fn next_trial<R: Rng + ?Sized>(&self, rng: &mut R, contrast: f64) -> StimulusParameters {
        let freq_idx = rng.random_range(0..self.spatial_frequencies_cpd.len());
        let orient_idx = rng.random_range(0..Orientation::ALL.len());
        StimulusParameters {
            spatial_frequency_cpd: self.spatial_frequencies_cpd[freq_idx],
            orientation: Orientation::ALL[orient_idx],
            contrast,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
    VeryHard,
    Extreme,
}

impl DifficultyLevel {
    pub fn from_contrast(contrast: f64) -> Self {
        if contrast > 0.5 {
            DifficultyLevel::Easy
        } else if contrast > 0.2 {
            DifficultyLevel::Medium
        } else if contrast > 0.05 {
            DifficultyLevel::Hard
        } else if contrast > 0.01 {
            DifficultyLevel::VeryHard
        } else {
            DifficultyLevel::Extreme
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "Easy 😊",
            DifficultyLevel::Medium => "Medium 😐",
            DifficultyLevel::Hard => "Hard 😰",
            DifficultyLevel::VeryHard => "Very Hard 🤯",
            DifficultyLevel::Extreme => "Extreme! 💀",
        }
    }
}
