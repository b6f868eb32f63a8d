use eframe::egui::{self, Color32, ColorImage, RichText, TextureHandle, TextureOptions};
use tracing::warn;

use gabor_orientation_game::config::AppConfig;
use gabor_orientation_game::gabor;
use gabor_orientation_game::session::GameSession;
use gabor_orientation_game::types::{Orientation, PatchGeometry};

const CORRECT_COLOR: Color32 = Color32::from_rgb(60, 160, 80);
const WRONG_COLOR: Color32 = Color32::from_rgb(200, 70, 70);

// Left-to-right button order, independent of Orientation::ALL.
const ANSWER_ORDER: [Orientation; 3] = [
    Orientation::Horizontal,
    Orientation::Vertical,
    Orientation::Diagonal,
];

pub struct GaborGameApp {
    config: AppConfig,
    geometry: PatchGeometry,
    session: GameSession,
    texture: Option<TextureHandle>,
    texture_trial: Option<u64>,
}

impl GaborGameApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig, seed: u64) -> Self {
        let geometry = config.stimulus.geometry();
        let session = GameSession::from_config(&config, seed);

        Self {
            config,
            geometry,
            session,
            texture: None,
            texture_trial: None,
        }
    }

    fn update_texture(&mut self, ctx: &egui::Context) {
        let trial_id = self.session.trials_presented();
        if self.texture_trial == Some(trial_id) {
            return;
        }

        let patch = gabor::generate(self.session.trial(), &self.geometry);
        let image = ColorImage::from_gray(patch.dimensions(), &patch.to_gray8());

        if let Some(texture) = &mut self.texture {
            texture.set(image, TextureOptions::LINEAR);
        } else {
            self.texture = Some(ctx.load_texture("gabor-patch", image, TextureOptions::LINEAR));
        }
        self.texture_trial = Some(trial_id);
    }

    fn answer(&mut self, guess: Orientation) {
        if let Err(err) = self.session.submit_answer(guess) {
            warn!(%err, "answer ignored");
            return;
        }
        if let Err(err) = self.session.advance() {
            warn!(%err, "failed to advance to next trial");
        }
    }

    fn draw_header(&mut self, ui: &mut egui::Ui) {
        ui.heading("👁 Gabor Orientation Game");
        ui.add_space(6.0);
        ui.label(RichText::new("🎮 How to Play").strong());
        ui.label("Identify the orientation of the Gabor patch and select your answer:");
        for orientation in ANSWER_ORDER {
            let hint = match orientation {
                Orientation::Horizontal => "Stripes go left-right",
                Orientation::Vertical => "Stripes go up-down",
                Orientation::Diagonal => "Stripes go at 45°",
            };
            ui.label(format!("• {}: {hint}", orientation.label()));
        }
        ui.label("Contrast decreases with each correct answer - see how high you can score!");
        ui.separator();

        let contrast = self.session.current_contrast();
        ui.columns(3, |cols| {
            cols[0].label("Score");
            cols[0].label(RichText::new(self.session.score().to_string()).size(24.0));
            cols[1].label("Contrast");
            cols[1].label(RichText::new(format!("{:.1}%", contrast * 100.0)).size(24.0));
            if cols[2].button("Reset Game").clicked() {
                self.session.reset();
            }
        });

        if let Some(feedback) = self.session.last_feedback() {
            let color = if feedback.correct {
                CORRECT_COLOR
            } else {
                WRONG_COLOR
            };
            egui::Frame::none()
                .fill(color)
                .inner_margin(8.0)
                .rounding(4.0)
                .show(ui, |ui| {
                    ui.colored_label(Color32::WHITE, feedback.message());
                });
        }
    }

    fn draw_patch(&mut self, ui: &mut egui::Ui) {
        if let Some(texture) = &self.texture {
            let image_size = texture.size_vec2();
            // Leave room for the answer row below the patch.
            let available = ui.available_size() - egui::vec2(0.0, 80.0);
            let scale = (available.x / image_size.x)
                .min(available.y / image_size.y)
                .clamp(0.4, 1.5);
            ui.vertical_centered(|ui| {
                ui.image((texture.id(), image_size * scale));
            });
        }
    }

    fn draw_answers(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Select Orientation:").strong());
        let mut picked = None;
        ui.columns(ANSWER_ORDER.len(), |cols| {
            for (col, orientation) in cols.iter_mut().zip(ANSWER_ORDER) {
                let button = egui::Button::new(orientation.button_label())
                    .min_size(egui::vec2(col.available_width(), 36.0));
                if col.add(button).clicked() {
                    picked = Some(orientation);
                }
            }
        });
        if let Some(guess) = picked {
            self.answer(guess);
        }
    }

    fn draw_sidebar(&self, ui: &mut egui::Ui) {
        let stimulus = &self.config.stimulus;
        let difficulty = &self.config.difficulty;

        ui.heading("ℹ About");
        ui.label(
            "This game tests your contrast sensitivity - your ability to detect \
             oriented patterns at low contrast levels.",
        );
        ui.add_space(4.0);
        ui.label(RichText::new("Rules:").strong());
        ui.label("• Identify the orientation of each Gabor patch");
        ui.label(format!(
            "• Contrast decreases by {:.0}% with each correct answer",
            difficulty.decay_rate * 100.0
        ));
        ui.label("• See how high you can score!");
        ui.add_space(4.0);

        let freqs = stimulus
            .spatial_frequencies_cpd
            .iter()
            .map(|f| format!("{f}"))
            .collect::<Vec<_>>()
            .join(", ");
        let orientations = Orientation::ALL
            .iter()
            .map(|o| format!("{}°", o.degrees()))
            .collect::<Vec<_>>()
            .join(", ");
        ui.label(RichText::new("Settings:").strong());
        ui.label(format!("• Spatial frequencies: {freqs} cpd"));
        ui.label(format!("• Orientations: {orientations}"));
        ui.label(format!(
            "• Contrast decay: {:.0}% per correct answer",
            difficulty.decay_rate * 100.0
        ));
        ui.label(format!(
            "• Field: {}° at {} px, σ = {}°",
            stimulus.field_of_view_deg, stimulus.size_pixels, stimulus.sigma_deg
        ));

        ui.separator();
        ui.heading("📊 Progress");
        ui.label(format!("Current Score: {}", self.session.score()));
        ui.label(format!(
            "Current Contrast: {:.2}%",
            self.session.current_contrast() * 100.0
        ));
        ui.label(format!(
            "Difficulty: {}",
            self.session.difficulty_level().label()
        ));
    }
}

impl eframe::App for GaborGameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("about")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.draw_sidebar(ui);
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_header(ui);
            ui.separator();
            self.update_texture(ctx);
            self.draw_patch(ui);
            self.draw_answers(ui);
        });

        if self.texture_trial != Some(self.session.trials_presented()) {
            ctx.request_repaint();
        }
    }
}
