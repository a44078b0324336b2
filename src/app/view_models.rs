use super::*;

impl QuizApp {
    /// Filas de opciones de la pregunta en pantalla, listas para pintar.
    /// El estado `selected` sale de la selección canónica, no del flag
    /// sombra del modelo.
    pub fn option_rows(&self) -> Vec<OptionRow> {
        let q = match self.current_question() {
            Some(q) => q,
            None => return Vec::new(),
        };
        let selection = self.engine.selection(q.index);
        let multi = q.is_multi();

        q.options
            .iter()
            .enumerate()
            .map(|(i, opt)| {
                let selected = opt
                    .option_id
                    .map(|id| selection.iter().any(|r| r.option_id == id))
                    .unwrap_or(false);
                OptionRow {
                    idx: i,
                    text: opt.text.clone(),
                    selected,
                    multi,
                }
            })
            .collect()
    }

    /// Un badge por pregunta para la pantalla de resultados.
    pub fn question_badges(&self) -> Vec<QuestionBadge> {
        self.quiz
            .questions
            .iter()
            .map(|q| QuestionBadge {
                idx: q.index,
                number: q.index + 1,
                answered: evaluate::is_fully_answered(q, self.engine.selection(q.index)),
            })
            .collect()
    }
}
