use crate::data::read_quiz_embedded;
use crate::engine::{ANSWERED_KEY, SelectionEngine, evaluate};
use crate::model::{AppState, Question, Quiz};
use eframe::egui;
use std::cell::Cell;
use std::rc::Rc;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{OptionRow, QuestionBadge};

/// Estado del shell de UI. El conocimiento del quiz (qué está seleccionado,
/// qué está contestado, qué mensaje toca) vive en el engine; aquí solo queda
/// lo que la pantalla necesita: el banco, la posición y el cronómetro.
pub struct QuizApp {
    pub quiz: Quiz,
    pub engine: SelectionEngine,
    pub state: AppState,
    pub current_index: usize,
    /// Señal "para el cronómetro" compartida con el aviso de primera
    /// respuesta del engine. Una vez levantada no se baja hasta entrar en
    /// otra pregunta.
    pub timer_stop: Rc<Cell<bool>>,
    pub question_started_at: Option<f64>,
    pub question_stopped_at: Option<f64>,
    pub confirm_restart: bool,
}

impl QuizApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::new_for_quiz(read_quiz_embedded());

        // Restaura el último flag de respuesta guardado. Es consultivo: el
        // primer register_question lo pisa con el valor real.
        let stored = cc.storage.and_then(|s| s.get_string(ANSWERED_KEY));
        app.engine.restore_answered_flag(stored.as_deref());

        app
    }

    pub fn new_for_quiz(quiz: Quiz) -> Self {
        let timer_stop = Rc::new(Cell::new(false));

        let mut engine = SelectionEngine::new();
        let stop_flag = Rc::clone(&timer_stop);
        engine.on_first_answered(move || stop_flag.set(true));

        Self {
            quiz,
            engine,
            state: AppState::Welcome,
            current_index: 0,
            timer_stop,
            question_started_at: None,
            question_stopped_at: None,
            confirm_restart: false,
        }
    }
}
