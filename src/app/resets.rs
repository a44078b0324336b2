use super::*;

impl QuizApp {
    /// Reinicia el quiz entero: fuera todas las selecciones, fuera los
    /// flags visuales, y de vuelta a la primera pregunta.
    pub fn restart_quiz(&mut self) {
        // 1) Vaciar el historial canónico
        self.engine.clear_all();

        // 2) Limpiar las sombras visuales de todas las preguntas
        for q in &mut self.quiz.questions {
            for opt in &mut q.options {
                opt.selected = false;
            }
        }

        // 3) Cerrar el diálogo y volver a la primera pregunta
        self.confirm_restart = false;
        self.state = AppState::Quiz;
        self.enter_question(0);
    }

    pub fn back_to_welcome(&mut self) {
        self.state = AppState::Welcome;
    }

    pub fn confirm_restart(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirm restart")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Restart the quiz? Every selection will be cleared.");
                ui.horizontal(|ui| {
                    if ui.button("Yes, restart").clicked() {
                        self.restart_quiz();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_restart = false;
                    }
                });
            });
    }
}
