use crate::config::{DEFAULT_FIELD_OF_VIEW_DEG, DEFAULT_SIGMA_DEG, DEFAULT_SIZE_PIXELS};
use crate::error::{GameError, GameResult};

/// Grating orientation as shown to the player.
///
/// The label refers to the direction the stripes run on screen, not to the
/// propagation vector of the sinusoid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Diagonal,
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 3] = [
        Orientation::Horizontal,
        Orientation::Diagonal,
        Orientation::Vertical,
    ];

    pub fn degrees(self) -> i32 {
        match self {
            Orientation::Horizontal => 0,
            Orientation::Diagonal => 45,
            Orientation::Vertical => 90,
        }
    }

    pub fn from_degrees(degrees: i32) -> GameResult<Self> {
        Self::ALL
            .into_iter()
            .find(|o| o.degrees() == degrees)
            .ok_or(GameError::UnknownOrientation(degrees))
    }

    pub fn label(self) -> &'static str {
        match self {
            Orientation::Horizontal => "Horizontal (→)",
            Orientation::Diagonal => "Diagonal (↗)",
            Orientation::Vertical => "Vertical (↑)",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Orientation::Horizontal => "← Horizontal (0°)",
            Orientation::Diagonal => "↗ Diagonal (45°)",
            Orientation::Vertical => "↑ Vertical (90°)",
        }
    }
}

/// Everything needed to render one trial. Drawn once, never mutated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StimulusParameters {
    pub spatial_frequency_cpd: f64,
    pub orientation: Orientation,
    pub contrast: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatchGeometry {
    pub size_pixels: usize,
    pub field_of_view_deg: f64,
    pub sigma_deg: f64,
}

impl Default for PatchGeometry {
    fn default() -> Self {
        Self {
            size_pixels: DEFAULT_SIZE_PIXELS,
            field_of_view_deg: DEFAULT_FIELD_OF_VIEW_DEG,
            sigma_deg: DEFAULT_SIGMA_DEG,
        }
    }
}

impl PatchGeometry {
    /// Position in degrees of sample `index` along either axis, spaced
    /// linearly from `-fov/2` to `+fov/2` inclusive.
    pub fn coordinate(&self, index: usize) -> f64 {
        let half = self.field_of_view_deg / 2.0;
        if self.size_pixels <= 1 {
            return -half;
        }
        let step = self.field_of_view_deg / (self.size_pixels - 1) as f64;
        -half + step * index as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_degrees_roundtrip_through_option_set() {
        for o in Orientation::ALL {
            assert_eq!(Orientation::from_degrees(o.degrees()).unwrap(), o);
        }
        assert!(matches!(
            Orientation::from_degrees(30),
            Err(GameError::UnknownOrientation(30))
        ));
    }

    #[test]
    fn coordinate_spans_field_of_view() {
        let geometry = PatchGeometry::default();
        assert_eq!(geometry.coordinate(0), -4.0);
        assert!((geometry.coordinate(511) - 4.0).abs() < 1e-12);
        let mid = geometry.coordinate(255) + geometry.coordinate(256);
        assert!(mid.abs() < 1e-12, "grid should be symmetric about 0");
    }
}
