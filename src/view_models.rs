// src/view_models.rs

#[derive(Clone, Debug)]
pub struct OptionRow {
    pub idx: usize,        // índice 0-based en question.options
    pub text: String,
    pub selected: bool,    // sombra visual, derivada de la selección canónica
    pub multi: bool,       // la pregunta admite varias correctas
}

#[derive(Clone, Debug)]
pub struct QuestionBadge {
    pub idx: usize,
    pub number: usize,     // número "humano" (1,2,3…)
    pub answered: bool,
}

impl OptionRow {
    pub fn label(&self) -> String {
        let mark = match (self.multi, self.selected) {
            (true, true) => "☑",
            (true, false) => "☐",
            (false, true) => "🔘",
            (false, false) => "⚪",
        };
        format!("{mark}  {}", self.text)
    }
}

impl QuestionBadge {
    pub fn label(&self) -> String {
        if self.answered {
            format!("Q{} ✅", self.number)
        } else {
            format!("Q{} ⬜", self.number)
        }
    }
}
