use gabor_orientation_game::config::{DifficultyConfig, StimulusConfig};
use gabor_orientation_game::difficulty::{DifficultyController, DifficultyLevel};

fn default_controller() -> DifficultyController {
    DifficultyController::new(DifficultyConfig::default(), &StimulusConfig::default())
}

fn assert_close(a: f64, b: f64, label: &str) {
    assert!((a - b).abs() <= 1e-12, "{label} mismatch: {a} vs {b}");
}

#[test]
fn contrast_strictly_decreases_and_stays_non_negative() {
    let ctl = default_controller();
    let mut prev = ctl.contrast_for_score(0);
    for score in 1..=1000 {
        let c = ctl.contrast_for_score(score);
        assert!(c >= 0.0, "negative contrast at score {score}");
        assert!(c < prev, "contrast did not drop at score {score}: {c} >= {prev}");
        prev = c;
    }
}

#[test]
fn contrast_follows_geometric_decay() {
    let ctl = default_controller();
    assert_eq!(ctl.contrast_for_score(0), 0.5);
    assert_close(ctl.contrast_for_score(1), 0.425, "score 1");
    assert_close(ctl.contrast_for_score(2), 0.36125, "score 2");
    for score in 0..40u32 {
        let expected = 0.5 * 0.85f64.powf(f64::from(score));
        assert_close(ctl.contrast_for_score(score), expected, "geometric");
    }
}

#[test]
fn min_contrast_floor_is_respected() {
    let cfg = DifficultyConfig {
        min_contrast: 0.1,
        ..DifficultyConfig::default()
    };
    let ctl = DifficultyController::new(cfg, &StimulusConfig::default());
    assert_eq!(ctl.contrast_for_score(50), 0.1);
    assert!(ctl.contrast_for_score(3) > 0.1);
}

#[test]
fn difficulty_walks_down_the_levels_as_score_rises() {
    let ctl = default_controller();
    let levels: Vec<_> = [0, 6, 15, 25, 40]
        .into_iter()
        .map(|s| DifficultyLevel::from_contrast(ctl.contrast_for_score(s)))
        .collect();
    assert_eq!(
        levels,
        vec![
            DifficultyLevel::Medium,
            DifficultyLevel::Hard,
            DifficultyLevel::VeryHard,
            DifficultyLevel::Extreme,
            DifficultyLevel::Extreme,
        ]
    );
}
