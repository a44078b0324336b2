use super::*;

impl QuizApp {
    /// Procesa el click sobre una opción de la pregunta en pantalla. Cuando
    /// esta función devuelve, el flag de contestada y el mensaje de guía ya
    /// están al día; la vista puede leerlos en el mismo frame.
    pub fn handle_option_click(&mut self, option_index: usize) {
        // 1) Extraer lo necesario de la pregunta sin retener el borrow
        let (question_index, is_multi, option) = {
            let q = match self.quiz.questions.get(self.current_index) {
                Some(q) => q,
                None => {
                    log::warn!(
                        "option click with question index {} out of range",
                        self.current_index
                    );
                    return;
                }
            };
            let option = match q.options.get(option_index) {
                Some(o) => o.clone(),
                None => {
                    log::warn!(
                        "option click {option_index} out of range for question {}",
                        q.index
                    );
                    return;
                }
            };
            (q.index, q.is_multi(), option)
        };

        // 2) El engine aplica la política de la pregunta y recalcula
        self.engine.toggle(question_index, &option, is_multi);

        // 3) Reflejar la selección canónica en los flags visuales
        self.sync_selected_flags();
    }

    /// Reescribe los flags `selected` de la pregunta en pantalla desde la
    /// selección canónica. Los flags nunca se leen para calcular nada, solo
    /// alimentan el pintado de los botones.
    pub fn sync_selected_flags(&mut self) {
        if let Some(q) = self.quiz.questions.get_mut(self.current_index) {
            self.engine.apply_selection_shadow(q);
        }
    }
}
