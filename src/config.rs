use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{GameError, GameResult};
use crate::types::PatchGeometry;

pub const DEFAULT_SPATIAL_FREQUENCIES_CPD: [f64; 4] = [3.0, 6.0, 12.0, 18.0];
pub const DEFAULT_INITIAL_CONTRAST: f64 = 0.5;
pub const DEFAULT_MIN_CONTRAST: f64 = 0.0;
pub const DEFAULT_DECAY_RATE: f64 = 0.15;
pub const DEFAULT_SIGMA_DEG: f64 = 1.2;
pub const DEFAULT_FIELD_OF_VIEW_DEG: f64 = 8.0;
pub const DEFAULT_SIZE_PIXELS: usize = 512;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StimulusConfig {
    #[serde(default = "StimulusConfig::default_spatial_frequencies_cpd")]
    pub spatial_frequencies_cpd: Vec<f64>,
    #[serde(default = "StimulusConfig::default_size_pixels")]
    pub size_pixels: usize,
    #[serde(default = "StimulusConfig::default_field_of_view_deg")]
    pub field_of_view_deg: f64,
    #[serde(default = "StimulusConfig::default_sigma_deg")]
    pub sigma_deg: f64,
}

impl StimulusConfig {
    fn default_spatial_frequencies_cpd() -> Vec<f64> {
        DEFAULT_SPATIAL_FREQUENCIES_CPD.to_vec()
    }
    fn default_size_pixels() -> usize {
        DEFAULT_SIZE_PIXELS
    }
    fn default_field_of_view_deg() -> f64 {
        DEFAULT_FIELD_OF_VIEW_DEG
    }
    fn default_sigma_deg() -> f64 {
        DEFAULT_SIGMA_DEG
    }

    pub fn geometry(&self) -> PatchGeometry {
        PatchGeometry {
            size_pixels: self.size_pixels,
            field_of_view_deg: self.field_of_view_deg,
            sigma_deg: self.sigma_deg,
        }
    }
}

impl Default for StimulusConfig {
    fn default() -> Self {
        Self {
            spatial_frequencies_cpd: Self::default_spatial_frequencies_cpd(),
            size_pixels: Self::default_size_pixels(),
            field_of_view_deg: Self::default_field_of_view_deg(),
            sigma_deg: Self::default_sigma_deg(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DifficultyConfig {
    #[serde(default = "DifficultyConfig::default_initial_contrast")]
    pub initial_contrast: f64,
    #[serde(default = "DifficultyConfig::default_min_contrast")]
    pub min_contrast: f64,
    /// Fraction of contrast removed per correct answer.
    #[serde(default = "DifficultyConfig::default_decay_rate")]
    pub decay_rate: f64,
}

impl DifficultyConfig {
    fn default_initial_contrast() -> f64 {
        DEFAULT_INITIAL_CONTRAST
    }
    fn default_min_contrast() -> f64 {
        DEFAULT_MIN_CONTRAST
    }
    fn default_decay_rate() -> f64 {
        DEFAULT_DECAY_RATE
    }
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            initial_contrast: Self::default_initial_contrast(),
            min_contrast: Self::default_min_contrast(),
            decay_rate: Self::default_decay_rate(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "WindowConfig::default_title")]
    pub title: String,
    #[serde(default = "WindowConfig::default_inner_size")]
    pub inner_size: [f32; 2],
    #[serde(default = "WindowConfig::default_min_inner_size")]
    pub min_inner_size: [f32; 2],
}

impl WindowConfig {
    fn default_title() -> String {
        "Gabor Orientation Game".to_owned()
    }
    fn default_inner_size() -> [f32; 2] {
        [980.0, 900.0]
    }
    fn default_min_inner_size() -> [f32; 2] {
        [720.0, 640.0]
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: Self::default_title(),
            inner_size: Self::default_inner_size(),
            min_inner_size: Self::default_min_inner_size(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Fixed RNG seed for reproducible trial sequences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub stimulus: StimulusConfig,
    #[serde(default)]
    pub difficulty: DifficultyConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn validate(&self) -> GameResult<()> {
        let stimulus = &self.stimulus;
        if stimulus.spatial_frequencies_cpd.is_empty() {
            return Err(invalid("stimulus.spatial_frequencies_cpd must not be empty"));
        }
        if let Some(bad) = stimulus
            .spatial_frequencies_cpd
            .iter()
            .find(|f| !f.is_finite() || **f <= 0.0)
        {
            return Err(invalid(format!(
                "stimulus.spatial_frequencies_cpd contains non-positive value {bad}"
            )));
        }
        if stimulus.size_pixels < 2 {
            return Err(invalid("stimulus.size_pixels must be at least 2"));
        }
        if !(stimulus.field_of_view_deg.is_finite() && stimulus.field_of_view_deg > 0.0) {
            return Err(invalid("stimulus.field_of_view_deg must be positive"));
        }
        if !(stimulus.sigma_deg.is_finite() && stimulus.sigma_deg > 0.0) {
            return Err(invalid("stimulus.sigma_deg must be positive"));
        }

        let difficulty = &self.difficulty;
        if !(difficulty.initial_contrast > 0.0 && difficulty.initial_contrast <= 1.0) {
            return Err(invalid("difficulty.initial_contrast must be in (0, 1]"));
        }
        let floor = difficulty.min_contrast;
        if !(floor >= 0.0 && floor < difficulty.initial_contrast) {
            return Err(invalid("difficulty.min_contrast must be in [0, initial_contrast)"));
        }
        if !(difficulty.decay_rate > 0.0 && difficulty.decay_rate < 1.0) {
            return Err(invalid("difficulty.decay_rate must be in (0, 1)"));
        }
        Ok(())
    }

    pub fn load(path: &Path) -> GameResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: Self = toml::from_str(&contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Loads `path`, falling back to defaults on any failure. A missing file is
    /// created with every default written out as a commented line.
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            return match Self::load(path_obj) {
                Ok(cfg) => {
                    info!(path, "loaded config");
                    cfg
                }
                Err(err) => {
                    warn!(path, %err, "using default config");
                    Self::default()
                }
            };
        }

        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                if let Err(err) = fs::write(path_obj, comment_out_values(&text)) {
                    warn!(path, %err, "failed to write default config");
                } else {
                    info!(path, "wrote default config template");
                }
            }
            Err(err) => warn!(%err, "failed to serialize default config"),
        }
        default_cfg
    }
}

fn invalid(msg: impl Into<String>) -> GameError {
    GameError::InvalidConfig(msg.into())
}

// Section headers stay live so the template parses back to the defaults.
fn comment_out_values(text: &str) -> String {
    let mut commented = String::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            commented.push('\n');
        } else if is_table_header(trimmed) {
            commented.push_str(line);
            commented.push('\n');
        } else {
            commented.push_str("# ");
            commented.push_str(line);
            commented.push('\n');
        }
    }
    commented
}

fn is_table_header(line: &str) -> bool {
    line.starts_with('[') && line.ends_with(']') && !line.contains('=') && !line.contains(',')
}
