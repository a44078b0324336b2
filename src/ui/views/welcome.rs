use crate::QuizApp;
use egui::{Align, Button, CentralPanel, Context, RichText};

pub fn ui_welcome(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 540.0;
        let content_width = ui.available_width().min(max_width);

        // Centrar verticalmente
        let estimated_h = 230.0;
        let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vs / 2.0);

        ui.horizontal_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                        ui.heading(format!("👋 Welcome to \"{}\"!", app.quiz.title));
                        ui.add_space(18.0);
                        ui.label(format!(
                            "{} questions. Pick every correct option to move on.",
                            app.total_questions()
                        ));
                        ui.add_space(16.0);

                        let btn_w = (content_width * 0.9).clamp(120.0, 400.0);
                        let btn_h = 40.0;

                        let btn_start = ui.add_sized([btn_w, btn_h], Button::new("▶ Start quiz"));
                        if btn_start.clicked() {
                            app.start_quiz();
                        }

                        // Pista consultiva restaurada de la sesión anterior
                        if app.engine.is_answered() {
                            ui.add_space(10.0);
                            ui.label(
                                RichText::new(
                                    "🟡 Last session ended on a fully answered question.",
                                )
                                .color(egui::Color32::YELLOW),
                            );
                        }
                    });
                });
        });

        ui.add_space(vs / 2.0);
    });
}
