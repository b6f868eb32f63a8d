use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::difficulty::{DifficultyController, DifficultyLevel};
use crate::error::{GameError, GameResult};
use crate::types::{Orientation, StimulusParameters};

#[derive(Clone, Debug, PartialEq)]
pub struct AnswerFeedback {
    pub guess: Orientation,
    pub truth: Orientation,
    pub correct: bool,
    pub score_after: u32,
}

impl AnswerFeedback {
    pub fn message(&self) -> String {
        if self.correct {
            "✓ Correct!".to_owned()
        } else {
            format!("✗ Wrong! It was {}", self.truth.label())
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TrialPhase {
    Presenting,
    Feedback(AnswerFeedback),
}

/// Score, the trial in flight and its lifecycle phase.
///
/// `Presenting --submit_answer--> Feedback --advance--> Presenting`, with
/// `reset` returning to `Presenting` from anywhere.
pub struct GameSession {
    controller: DifficultyController,
    rng: StdRng,
    score: u32,
    trial: StimulusParameters,
    phase: TrialPhase,
    last_feedback: Option<AnswerFeedback>,
    trials_presented: u64,
}

impl GameSession {
    pub fn new(controller: DifficultyController, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let trial = controller.next_trial(&mut rng, controller.contrast_for_score(0));
        debug!(?trial, "first trial drawn");
        Self {
            controller,
            rng,
            score: 0,
            trial,
            phase: TrialPhase::Presenting,
            last_feedback: None,
            trials_presented: 1,
        }
    }

    pub fn from_config(config: &AppConfig, seed: u64) -> Self {
        let controller = DifficultyController::new(config.difficulty, &config.stimulus);
        Self::new(controller, seed)
    }

    pub fn controller(&self) -> &DifficultyController {
        &self.controller
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn trial(&self) -> &StimulusParameters {
        &self.trial
    }

    pub fn phase(&self) -> &TrialPhase {
        &self.phase
    }

    pub fn last_feedback(&self) -> Option<&AnswerFeedback> {
        self.last_feedback.as_ref()
    }

    pub fn trials_presented(&self) -> u64 {
        self.trials_presented
    }

    pub fn current_contrast(&self) -> f64 {
        self.controller.contrast_for_score(self.score)
    }

    pub fn difficulty_level(&self) -> DifficultyLevel {
        DifficultyLevel::from_contrast(self.current_contrast())
    }

    pub fn submit_answer(&mut self, guess: Orientation) -> GameResult<AnswerFeedback> {
        if matches!(self.phase, TrialPhase::Feedback(_)) {
            return Err(GameError::AnswerAlreadySubmitted);
        }

        let truth = self.trial.orientation;
        let correct = guess == truth;
        if correct {
            self.score = self.score.saturating_add(1);
        }
        info!(
            guess = guess.degrees(),
            truth = truth.degrees(),
            correct,
            score = self.score,
            contrast = self.trial.contrast,
            "answer submitted"
        );

        let feedback = AnswerFeedback {
            guess,
            truth,
            correct,
            score_after: self.score,
        };
        self.last_feedback = Some(feedback.clone());
        self.phase = TrialPhase::Feedback(feedback.clone());
        Ok(feedback)
    }

    /// Leaves `Feedback` and presents a freshly drawn trial at the contrast for
    /// the updated score.
    pub fn advance(&mut self) -> GameResult<&StimulusParameters> {
        if self.phase == TrialPhase::Presenting {
            return Err(GameError::NoPendingFeedback);
        }
        self.present_new_trial();
        Ok(&self.trial)
    }

    pub fn reset(&mut self) {
        info!(final_score = self.score, "game reset");
        self.score = 0;
        self.last_feedback = None;
        self.present_new_trial();
    }

    fn present_new_trial(&mut self) {
        let contrast = self.current_contrast();
        self.trial = self.controller.next_trial(&mut self.rng, contrast);
        self.phase = TrialPhase::Presenting;
        self.trials_presented += 1;
        debug!(trial = ?self.trial, n = self.trials_presented, "trial drawn");
    }
}
