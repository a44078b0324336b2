use crate::QuizApp;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Context, ScrollArea};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let max_width = 520.0;

    centered_panel(ctx, 420.0, max_width, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🏁 End of the quiz!");
            ui.add_space(10.0);
            ui.label(format!(
                "Fully answered: {} of {}",
                app.answered_count(),
                app.total_questions()
            ));
            ui.add_space(8.0);

            let max_height = 260.0;
            ScrollArea::vertical()
                .max_height(max_height)
                .max_width(max_width)
                .show(ui, |ui| {
                    for badge in app.question_badges() {
                        ui.label(badge.label());
                    }
                });

            ui.add_space(20.0);

            let (restart, home) = two_button_row(ui, max_width / 1.3, "⟲ Restart", "🏠 Home");
            if restart {
                app.restart_quiz();
            }
            if home {
                app.back_to_welcome();
            }
        });
    });
}
