//! Mensaje de guía bajo el panel de opciones. Se recalcula entero en cada
//! cambio relevante (nunca se parchea el texto anterior) y solo se publica
//! cuando difiere del que ya está en pantalla.

use crate::model::{Question, QuestionType};

use super::evaluate;
use super::store::SelectionRecord;

pub const MSG_START: &str = "Please start the quiz by selecting an option.";
pub const MSG_CONTINUE: &str = "Please select an option to continue…";
pub const MSG_NEXT: &str = "Please click the next button to continue.";
pub const MSG_RESULTS: &str = "Please click the Show Results button.";

/// Texto de "te faltan N correctas", con singular/plural correcto.
pub fn remaining_text(remaining: usize) -> String {
    if remaining == 1 {
        "Select 1 more correct option to continue…".to_string()
    } else {
        format!("Select {remaining} more correct options to continue…")
    }
}

/// Familia del mensaje publicado. Solo se usa para trazar transiciones en
/// el log y para explicar una supresión; el dedup compara textos.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MessageClass {
    Start,
    Continue,
    Remaining,
    Proceed,
}

pub struct MessageDeterminer {
    published: String,
    published_class: MessageClass,
    listeners: Vec<Box<dyn FnMut(&str)>>,
}

impl Default for MessageDeterminer {
    fn default() -> Self {
        Self {
            published: MSG_START.to_string(),
            published_class: MessageClass::Start,
            listeners: Vec::new(),
        }
    }
}

impl MessageDeterminer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &str {
        &self.published
    }

    pub fn on_change(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Recalcula el mensaje desde cero con la tabla de precedencia y lo
    /// publica (si cambió).
    pub fn refresh(
        &mut self,
        question: &Question,
        total_questions: usize,
        selection: &[SelectionRecord],
    ) {
        let (class, text) = classify(question, total_questions, selection);
        self.publish(class, text);
    }

    /// Entrada para un colaborador que cree que la pregunta está completa y
    /// quiere empujar el mensaje de avance. La completitud se reevalúa aquí
    /// mismo, contra la selección actual: si todavía faltan correctas, la
    /// propuesta venía de un recálculo desfasado y se descarta sin tocar el
    /// mensaje en pantalla.
    pub fn propose_proceed(
        &mut self,
        question: &Question,
        total_questions: usize,
        selection: &[SelectionRecord],
    ) {
        if !evaluate::is_fully_answered(question, selection) {
            let remaining = evaluate::remaining_correct_count(&question.options, selection);
            log::debug!(
                "stale proceed message for question {} dropped ({remaining} correct left, showing {:?})",
                question.index,
                self.published_class
            );
            return;
        }
        let text = proceed_text(question.index, total_questions);
        self.publish(MessageClass::Proceed, text.to_string());
    }

    /// Ante una anomalía (pregunta fuera de rango, snapshot ausente) el
    /// mensaje vuelve al prompt base de la pregunta, nunca se queda un
    /// "continúa" viejo ni un texto vacío.
    pub fn fallback(&mut self, question_index: usize) {
        if question_index == 0 {
            self.publish(MessageClass::Start, MSG_START.to_string());
        } else {
            self.publish(MessageClass::Continue, MSG_CONTINUE.to_string());
        }
    }

    fn publish(&mut self, class: MessageClass, text: String) {
        if text == self.published {
            return;
        }
        log::debug!(
            "guidance {:?} -> {class:?}: {text}",
            self.published_class
        );
        self.published = text;
        self.published_class = class;
        for listener in &mut self.listeners {
            listener(&self.published);
        }
    }
}

/// Tabla de precedencia, de arriba a abajo, primera fila que encaja gana.
fn classify(
    question: &Question,
    total_questions: usize,
    selection: &[SelectionRecord],
) -> (MessageClass, String) {
    match question.kind {
        QuestionType::Multiple => {
            let remaining = evaluate::remaining_correct_count(&question.options, selection);
            if remaining > 0 {
                (MessageClass::Remaining, remaining_text(remaining))
            } else {
                (
                    MessageClass::Proceed,
                    proceed_text(question.index, total_questions).to_string(),
                )
            }
        }
        QuestionType::Single => {
            if selection.is_empty() {
                if question.index == 0 {
                    (MessageClass::Start, MSG_START.to_string())
                } else {
                    (MessageClass::Continue, MSG_CONTINUE.to_string())
                }
            } else {
                (
                    MessageClass::Proceed,
                    proceed_text(question.index, total_questions).to_string(),
                )
            }
        }
    }
}

fn proceed_text(question_index: usize, total_questions: usize) -> &'static str {
    if question_index + 1 < total_questions {
        MSG_NEXT
    } else {
        MSG_RESULTS
    }
}
