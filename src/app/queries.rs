use super::*;

impl QuizApp {
    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.questions.get(self.current_index)
    }

    pub fn total_questions(&self) -> usize {
        self.quiz.questions.len()
    }

    /// Número "humano" de la pregunta en pantalla (1..=total).
    pub fn question_number_1based(&self) -> usize {
        self.current_index + 1
    }

    /// Cuántas preguntas del quiz están contestadas según la selección
    /// canónica del engine (los flags visuales no cuentan aquí).
    pub fn answered_count(&self) -> usize {
        self.quiz
            .questions
            .iter()
            .filter(|q| evaluate::is_fully_answered(q, self.engine.selection(q.index)))
            .count()
    }

    /// Primera pregunta sin contestar, para retomar el quiz donde se dejó.
    /// Con todas contestadas (o sin historial) devuelve la primera.
    pub fn first_unanswered_index(&self) -> usize {
        self.quiz
            .questions
            .iter()
            .position(|q| !evaluate::is_fully_answered(q, self.engine.selection(q.index)))
            .unwrap_or(0)
    }
}
