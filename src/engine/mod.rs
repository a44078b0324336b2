//! Núcleo de selección del quiz, sin nada de UI dentro.
//!
//! El flujo por evento es siempre el mismo y siempre síncrono:
//!
//! 1) un click llega como `toggle` y el `SelectionStore` aplica la política
//!    de la pregunta (única reemplaza, multi alterna),
//! 2) `evaluate` recalcula los contadores de corrección desde cero,
//! 3) `AnsweredState` publica el flag si cambió,
//! 4) `MessageDeterminer` publica el mensaje de guía si cambió.
//!
//! Cuando `toggle` devuelve, cualquier consulta ve el estado derivado ya
//! consistente; no hay recálculo diferido ni estados intermedios visibles.
//! Ninguna operación de este módulo lanza errores hacia el caller: las
//! anomalías se registran en el log y degradan a un valor seguro.

pub mod answered;
pub mod evaluate;
pub mod message;
pub mod persist;
pub mod store;

pub use answered::AnsweredState;
pub use message::MessageDeterminer;
pub use persist::{ANSWERED_KEY, KeyValueStore, MemoryStore};
pub use store::{SelectionRecord, SelectionStore};

use crate::model::{AnswerOption, Question};

/// Coordinador del núcleo: compone el store canónico con las dos celdas
/// publicadas y guarda una copia de la pregunta en pantalla para poder
/// recalcular sin pedirle nada al cargador de contenido.
pub struct SelectionEngine {
    store: SelectionStore,
    answered: AnsweredState,
    messages: MessageDeterminer,
    current: Option<Question>,
    total_questions: usize,
}

impl Default for SelectionEngine {
    fn default() -> Self {
        Self {
            store: SelectionStore::new(),
            answered: AnsweredState::new(),
            messages: MessageDeterminer::new(),
            current: None,
            total_questions: 0,
        }
    }
}

impl SelectionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra la pregunta que pasa a estar en pantalla. Baja el flag de
    /// contestada, rearma el aviso de primera respuesta y recalcula contra
    /// las selecciones que esa pregunta ya tuviera (la navegación no borra
    /// historial, así que volver a una pregunta completa la deja completa).
    pub fn register_question(&mut self, question: &Question, total_questions: usize) {
        if question.index >= total_questions {
            log::warn!(
                "question index {} registered with total {total_questions}; counts look inconsistent",
                question.index
            );
        }
        self.current = Some(question.clone());
        self.total_questions = total_questions;
        self.answered.reset_for_question();
        self.recompute();
    }

    /// Aplica un click de opción y deja todo el estado derivado al día
    /// antes de devolver el control.
    pub fn toggle(&mut self, question_index: usize, option: &AnswerOption, is_multi: bool) {
        if self.store.toggle(question_index, option, is_multi) {
            self.recompute();
        }
    }

    /// Borra la selección de una pregunta y recalcula.
    pub fn clear(&mut self, question_index: usize) {
        self.store.clear(question_index);
        self.recompute();
    }

    /// Borra todas las selecciones (reinicio de quiz) y recalcula.
    pub fn clear_all(&mut self) {
        self.store.clear_all();
        self.recompute();
    }

    /// Selección actual de una pregunta, en orden de click. Fuera de rango
    /// devuelve la secuencia vacía.
    pub fn selection(&self, question_index: usize) -> &[SelectionRecord] {
        self.store.get(question_index)
    }

    pub fn is_answered(&self) -> bool {
        self.answered.get()
    }

    pub fn guidance_message(&self) -> &str {
        self.messages.current()
    }

    pub fn on_answered_change(&mut self, listener: impl FnMut(bool) + 'static) {
        self.answered.on_change(listener);
    }

    pub fn on_message_change(&mut self, listener: impl FnMut(&str) + 'static) {
        self.messages.on_change(listener);
    }

    /// Aviso de una sola vez por pregunta: se dispara cuando el flag sube a
    /// `true` por primera vez desde el último `register_question`. El shell
    /// lo usa para parar el cronómetro en pantalla.
    pub fn on_first_answered(&mut self, listener: impl FnMut() + 'static) {
        self.answered.on_first_answered(listener);
    }

    /// Un colaborador de navegación pide mostrar el mensaje de avance. La
    /// completitud se verifica contra la selección vigente en este momento;
    /// si la pregunta no está realmente completa no se publica nada.
    pub fn propose_advance(&mut self) {
        let question = match &self.current {
            Some(q) => q,
            None => {
                log::debug!("advance proposed with no question registered; ignored");
                return;
            }
        };
        let selection = self.store.get(question.index);
        self.messages
            .propose_proceed(question, self.total_questions, selection);
    }

    /// Refleja la selección canónica en los flags `selected` del modelo de
    /// contenido. Los flags son solo sombra visual: se escriben aquí y no
    /// se leen para ningún cálculo.
    pub fn apply_selection_shadow(&self, question: &mut Question) {
        let selection = self.store.get(question.index);
        for opt in &mut question.options {
            opt.selected = opt
                .option_id
                .map(|id| selection.iter().any(|r| r.option_id == id))
                .unwrap_or(false);
        }
    }

    /// Escribe el último estado conocido del flag en el almacén externo.
    pub fn save_answered_flag(&self, store: &mut dyn KeyValueStore) {
        store.set_string(ANSWERED_KEY, self.answered.get().to_string());
    }

    /// Siembra el flag con lo que hubiera guardado de una sesión anterior.
    /// Es consultivo: no notifica a nadie y el primer `register_question`
    /// lo pisa con el valor real. Un valor corrupto se registra y se trata
    /// como `false`.
    pub fn restore_answered_flag(&mut self, raw: Option<&str>) {
        let raw = match raw {
            Some(r) => r,
            None => return,
        };
        let value = match raw.parse::<bool>() {
            Ok(v) => v,
            Err(_) => {
                log::warn!("stored answered flag {raw:?} is not a bool; treating as false");
                false
            }
        };
        self.answered.seed(value);
    }

    // Deriva todo desde cero para la pregunta registrada. Sin pregunta, los
    // valores seguros: no contestada y el prompt base.
    fn recompute(&mut self) {
        let question = match &self.current {
            Some(q) => q,
            None => {
                self.answered.publish(false);
                self.messages.fallback(0);
                return;
            }
        };
        let selection = self.store.get(question.index);
        let answered = evaluate::is_fully_answered(question, selection);
        self.answered.publish(answered);
        self.messages
            .refresh(question, self.total_questions, selection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerOption, Question, QuestionType};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn opt(id: u32, correct: bool) -> AnswerOption {
        AnswerOption {
            option_id: Some(id),
            text: format!("option {id}"),
            correct,
            selected: false,
        }
    }

    fn single(index: usize) -> Question {
        Question {
            index,
            prompt: format!("single {index}"),
            kind: QuestionType::Single,
            options: vec![opt(1, false), opt(2, true), opt(3, false)],
        }
    }

    fn multi(index: usize) -> Question {
        Question {
            index,
            prompt: format!("multi {index}"),
            kind: QuestionType::Multiple,
            options: vec![opt(1, true), opt(2, false), opt(3, true), opt(4, false)],
        }
    }

    #[test]
    fn toggle_leaves_derived_state_consistent_on_return() {
        let mut engine = SelectionEngine::new();
        let q = single(0);
        engine.register_question(&q, 3);

        assert!(!engine.is_answered());
        assert_eq!(engine.guidance_message(), message::MSG_START);

        engine.toggle(0, &q.options[1], false);
        // nada diferido: la siguiente línea ya ve el estado nuevo
        assert!(engine.is_answered());
        assert_eq!(engine.guidance_message(), message::MSG_NEXT);
    }

    #[test]
    fn multi_question_counts_down_and_completes() {
        let mut engine = SelectionEngine::new();
        let q = multi(2);
        engine.register_question(&q, 3);
        assert_eq!(
            engine.guidance_message(),
            "Select 2 more correct options to continue…"
        );

        engine.toggle(2, &q.options[0], true);
        assert!(!engine.is_answered());
        assert_eq!(
            engine.guidance_message(),
            "Select 1 more correct option to continue…"
        );

        engine.toggle(2, &q.options[2], true);
        assert!(engine.is_answered());
        assert_eq!(engine.guidance_message(), message::MSG_RESULTS);
    }

    #[test]
    fn deselecting_a_correct_option_reverts_answered_and_message() {
        let mut engine = SelectionEngine::new();
        let q = multi(2);
        engine.register_question(&q, 3);

        engine.toggle(2, &q.options[0], true);
        engine.toggle(2, &q.options[2], true);
        assert!(engine.is_answered());

        engine.toggle(2, &q.options[0], true); // fuera A
        assert!(!engine.is_answered());
        assert_eq!(
            engine.guidance_message(),
            "Select 1 more correct option to continue…"
        );
    }

    #[test]
    fn event_without_option_id_changes_nothing() {
        let mut engine = SelectionEngine::new();
        let q = single(0);
        engine.register_question(&q, 3);

        let nameless = AnswerOption {
            option_id: None,
            text: "sin id".to_string(),
            correct: true,
            selected: false,
        };
        engine.toggle(0, &nameless, false);

        assert!(engine.selection(0).is_empty());
        assert!(!engine.is_answered());
        assert_eq!(engine.guidance_message(), message::MSG_START);
    }

    #[test]
    fn out_of_range_queries_return_safe_defaults() {
        let engine = SelectionEngine::new();
        assert!(engine.selection(42).is_empty());
        assert!(!engine.is_answered());
        assert_eq!(engine.guidance_message(), message::MSG_START);
    }

    #[test]
    fn register_question_resets_flag_but_keeps_history() {
        let mut engine = SelectionEngine::new();
        let q0 = single(0);
        let q1 = single(1);

        engine.register_question(&q0, 3);
        engine.toggle(0, &q0.options[1], false);
        assert!(engine.is_answered());

        engine.register_question(&q1, 3);
        assert!(!engine.is_answered());
        assert_eq!(engine.guidance_message(), message::MSG_CONTINUE);
        // la selección de la pregunta 0 sigue intacta
        assert_eq!(engine.selection(0).len(), 1);

        // al volver, el historial la deja contestada otra vez
        engine.register_question(&q0, 3);
        assert!(engine.is_answered());
        assert_eq!(engine.guidance_message(), message::MSG_NEXT);
    }

    #[test]
    fn first_answered_notice_fires_once_per_visit() {
        let fired = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&fired);

        let mut engine = SelectionEngine::new();
        engine.on_first_answered(move || *sink.borrow_mut() += 1);

        let q = multi(0);
        engine.register_question(&q, 1);
        engine.toggle(0, &q.options[0], true);
        engine.toggle(0, &q.options[2], true); // completa: dispara
        engine.toggle(0, &q.options[0], true); // deshace
        engine.toggle(0, &q.options[0], true); // completa otra vez: silencio
        assert_eq!(*fired.borrow(), 1);

        // otra visita a la misma pregunta rearma el aviso
        engine.register_question(&q, 1);
        assert_eq!(*fired.borrow(), 2);
    }

    #[test]
    fn propose_advance_respects_actual_completeness() {
        let mut engine = SelectionEngine::new();
        let q = multi(2);
        engine.register_question(&q, 3);
        engine.toggle(2, &q.options[0], true);

        let before = engine.guidance_message().to_string();
        engine.propose_advance(); // incompleta: se descarta
        assert_eq!(engine.guidance_message(), before);

        engine.toggle(2, &q.options[2], true);
        engine.propose_advance();
        assert_eq!(engine.guidance_message(), message::MSG_RESULTS);
    }

    #[test]
    fn propose_advance_without_question_is_ignored() {
        let mut engine = SelectionEngine::new();
        engine.propose_advance();
        assert_eq!(engine.guidance_message(), message::MSG_START);
    }

    #[test]
    fn shadow_flags_mirror_canonical_selection() {
        let mut engine = SelectionEngine::new();
        let mut q = multi(1);
        engine.register_question(&q, 3);

        let a = q.options[0].clone();
        let d = q.options[3].clone();
        engine.toggle(1, &a, true);
        engine.toggle(1, &d, true);
        engine.apply_selection_shadow(&mut q);

        let selected: Vec<bool> = q.options.iter().map(|o| o.selected).collect();
        assert_eq!(selected, vec![true, false, false, true]);

        engine.clear(1);
        engine.apply_selection_shadow(&mut q);
        assert!(q.options.iter().all(|o| !o.selected));
    }

    #[test]
    fn clear_all_resets_answered_and_message() {
        let mut engine = SelectionEngine::new();
        let q = single(0);
        engine.register_question(&q, 3);
        engine.toggle(0, &q.options[1], false);
        assert!(engine.is_answered());

        engine.clear_all();
        assert!(!engine.is_answered());
        assert_eq!(engine.guidance_message(), message::MSG_START);
    }

    #[test]
    fn answered_flag_round_trips_through_key_value_store() {
        let mut store = MemoryStore::new();

        let mut engine = SelectionEngine::new();
        let q = single(0);
        engine.register_question(&q, 1);
        engine.toggle(0, &q.options[1], false);
        engine.save_answered_flag(&mut store);
        assert_eq!(store.get_string(ANSWERED_KEY).as_deref(), Some("true"));

        let mut restored = SelectionEngine::new();
        restored.restore_answered_flag(store.get_string(ANSWERED_KEY).as_deref());
        assert!(restored.is_answered());
    }

    #[test]
    fn corrupt_stored_flag_degrades_to_false() {
        let mut engine = SelectionEngine::new();
        engine.restore_answered_flag(Some("definitely-not-a-bool"));
        assert!(!engine.is_answered());

        engine.restore_answered_flag(None);
        assert!(!engine.is_answered());
    }

    #[test]
    fn seeded_flag_yields_to_first_registration() {
        let mut engine = SelectionEngine::new();
        engine.restore_answered_flag(Some("true"));
        assert!(engine.is_answered());

        let q = single(0);
        engine.register_question(&q, 3);
        // sin selección real, el valor restaurado no sobrevive al registro
        assert!(!engine.is_answered());
    }
}
