use std::collections::HashMap;

use crate::model::AnswerOption;

/// Registro canónico de "esta opción, en esta pregunta, fue elegida".
/// Separado del modelo de contenido para que el historial de selección
/// no dependa de los flags mutables de `AnswerOption`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRecord {
    pub option_id: u32,
    pub question_index: usize,
    pub text: String,
}

/// Dueño único del mapa pregunta → selecciones (orden de inserción = orden
/// de click). Nadie más muta esta estructura; el resto de componentes lee
/// a través de `get`.
#[derive(Debug, Default)]
pub struct SelectionStore {
    by_question: HashMap<usize, Vec<SelectionRecord>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self {
            by_question: HashMap::new(),
        }
    }

    /// Aplica un click de opción. Para preguntas de respuesta única la nueva
    /// selección reemplaza la secuencia entera; para multi-respuesta alterna
    /// la pertenencia de esa opción (selección/deselección son inversas, así
    /// que los dobles clicks rápidos colapsan solos al efecto neto).
    ///
    /// Devuelve `true` si el mapa cambió. Un evento sin `option_id` se
    /// registra en el log y se ignora; nunca se propaga un error.
    pub fn toggle(&mut self, question_index: usize, option: &AnswerOption, is_multi: bool) -> bool {
        let option_id = match option.option_id {
            Some(id) => id,
            None => {
                log::warn!(
                    "selection event without option id at question {question_index}; ignored"
                );
                return false;
            }
        };

        let records = self.by_question.entry(question_index).or_default();
        let record = SelectionRecord {
            option_id,
            question_index,
            text: option.text.clone(),
        };

        if is_multi {
            match records.iter().position(|r| r.option_id == option_id) {
                // Ya estaba: deselección
                Some(pos) => {
                    records.remove(pos);
                }
                // No estaba: se añade al final (nunca se duplica un id)
                None => records.push(record),
            }
        } else {
            records.clear();
            records.push(record);
        }
        true
    }

    /// Borra todas las selecciones de una pregunta.
    pub fn clear(&mut self, question_index: usize) {
        self.by_question.remove(&question_index);
    }

    /// Borra el mapa entero (reinicio del quiz).
    pub fn clear_all(&mut self) {
        self.by_question.clear();
    }

    /// Vista de solo lectura de la selección de una pregunta, en orden de
    /// click. Índices desconocidos devuelven la secuencia vacía.
    pub fn get(&self, question_index: usize) -> &[SelectionRecord] {
        self.by_question
            .get(&question_index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerOption;

    fn opt(id: u32, text: &str) -> AnswerOption {
        AnswerOption {
            option_id: Some(id),
            text: text.to_string(),
            correct: false,
            selected: false,
        }
    }

    #[test]
    fn single_select_replaces_previous_record() {
        let mut store = SelectionStore::new();
        store.toggle(0, &opt(1, "a"), false);
        store.toggle(0, &opt(2, "b"), false);

        let records = store.get(0);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].option_id, 2);
        assert_eq!(records[0].text, "b");
    }

    #[test]
    fn single_reselect_same_option_keeps_one_record() {
        let mut store = SelectionStore::new();
        store.toggle(0, &opt(1, "a"), false);
        store.toggle(0, &opt(1, "a"), false);
        assert_eq!(store.get(0).len(), 1);
    }

    #[test]
    fn multi_toggle_twice_is_its_own_inverse() {
        let mut store = SelectionStore::new();
        store.toggle(2, &opt(7, "x"), true);
        assert_eq!(store.get(2).len(), 1);

        store.toggle(2, &opt(7, "x"), true);
        assert!(store.get(2).is_empty());
    }

    #[test]
    fn multi_never_duplicates_an_id() {
        let mut store = SelectionStore::new();
        store.toggle(1, &opt(1, "a"), true);
        store.toggle(1, &opt(2, "b"), true);
        store.toggle(1, &opt(1, "a"), true); // fuera
        store.toggle(1, &opt(1, "a"), true); // dentro otra vez

        let ids: Vec<u32> = store.get(1).iter().map(|r| r.option_id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn multi_preserves_click_order() {
        let mut store = SelectionStore::new();
        store.toggle(0, &opt(3, "c"), true);
        store.toggle(0, &opt(1, "a"), true);
        store.toggle(0, &opt(2, "b"), true);

        let ids: Vec<u32> = store.get(0).iter().map(|r| r.option_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn missing_option_id_is_a_noop() {
        let mut store = SelectionStore::new();
        let nameless = AnswerOption {
            option_id: None,
            text: "sin id".to_string(),
            correct: true,
            selected: false,
        };
        assert!(!store.toggle(0, &nameless, true));
        assert!(store.get(0).is_empty());
    }

    #[test]
    fn clear_only_affects_one_question() {
        let mut store = SelectionStore::new();
        store.toggle(0, &opt(1, "a"), false);
        store.toggle(1, &opt(2, "b"), false);

        store.clear(0);
        assert!(store.get(0).is_empty());
        assert_eq!(store.get(1).len(), 1);

        store.clear_all();
        assert!(store.get(1).is_empty());
    }

    #[test]
    fn unknown_question_yields_empty_slice() {
        let store = SelectionStore::new();
        assert!(store.get(99).is_empty());
    }
}
