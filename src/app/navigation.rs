use super::*;

impl QuizApp {
    /// Arranca el quiz en la primera pregunta sin contestar, de modo que
    /// pasar por el inicio no pierde el sitio. Sin historial es la primera.
    pub fn start_quiz(&mut self) {
        self.state = AppState::Quiz;
        self.enter_question(self.first_unanswered_index());
    }

    /// Botón Next / Show Results. Con la pregunta incompleta no se avanza:
    /// se le deja al engine la decisión de si publicar el mensaje de avance
    /// (la reevaluará contra la selección vigente y la descartará si no
    /// procede).
    pub fn advance_question(&mut self) {
        if !self.engine.is_answered() {
            self.engine.propose_advance();
            return;
        }

        if self.is_last_question() {
            self.show_results();
        } else {
            self.enter_question(self.current_index + 1);
        }
    }

    /// Volver atrás es libre: no exige tener contestada la actual.
    pub fn previous_question(&mut self) {
        if self.current_index == 0 {
            return;
        }
        self.enter_question(self.current_index - 1);
    }

    pub fn show_results(&mut self) {
        self.state = AppState::Results;
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.quiz.questions.len()
    }

    /// Posiciona la app en una pregunta concreta.
    pub(crate) fn enter_question(&mut self, index: usize) {
        let total = self.quiz.questions.len();
        let question = match self.quiz.questions.get(index) {
            Some(q) => q.clone(),
            None => {
                log::warn!("enter_question({index}) out of range (total {total})");
                return;
            }
        };

        // 1) Rearmar el cronómetro ANTES de registrar: si la pregunta ya
        //    está completa por selecciones previas, el aviso de primera
        //    respuesta salta durante el registro y lo vuelve a parar.
        self.current_index = index;
        self.timer_stop.set(false);
        self.question_started_at = None;
        self.question_stopped_at = None;

        // 2) Registrar el snapshot en el engine (baja el flag, rearma el
        //    aviso y recalcula contra el historial de esa pregunta)
        self.engine.register_question(&question, total);

        // 3) Flags visuales al día
        self.sync_selected_flags();
    }
}
