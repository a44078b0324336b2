use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Una sola opción correcta; una nueva selección reemplaza la anterior.
    Single,
    /// Varias opciones correctas; cada click alterna esa opción.
    Multiple,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnswerOption {
    /// Identificador estable dentro de la pregunta. Puede faltar en contenido
    /// defectuoso; el engine descarta eventos sin id en vez de fallar.
    pub option_id: Option<u32>,
    pub text: String,
    #[serde(default)]
    pub correct: bool,
    // Sombra visual de la selección. La verdad canónica vive en el
    // SelectionStore; este flag solo se escribe al reflejar estado.
    #[serde(default)]
    pub selected: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    /// Posición 0-based dentro del quiz. Se reasigna al cargar el banco.
    #[serde(default)]
    pub index: usize,
    pub prompt: String,
    pub kind: QuestionType,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn is_multi(&self) -> bool {
        matches!(self.kind, QuestionType::Multiple)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Quiz {
    pub title: String,
    pub questions: Vec<Question>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Results,
}

// ¡Implementa Default!
impl Default for AppState {
    fn default() -> Self {
        AppState::Welcome
    }
}
