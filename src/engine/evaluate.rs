//! Funciones puras de corrección: cuentan sobre la pregunta y la selección
//! recibidas, sin tocar ningún estado. La misma entrada produce siempre la
//! misma salida, así que cualquier componente puede llamarlas cuando quiera.

use crate::model::{AnswerOption, Question, QuestionType};

use super::store::SelectionRecord;

/// Cuántas opciones de la pregunta están marcadas como correctas.
pub fn correct_count(options: &[AnswerOption]) -> usize {
    options.iter().filter(|o| o.correct).count()
}

/// Cuántas opciones correctas aparecen en la selección actual. Solo cuentan
/// ids que existan en la pregunta Y sean correctos: un id huérfano en la
/// selección no suma nada.
pub fn selected_correct_count(options: &[AnswerOption], selection: &[SelectionRecord]) -> usize {
    options
        .iter()
        .filter(|o| o.correct)
        .filter(|o| {
            o.option_id
                .map(|id| selection.iter().any(|r| r.option_id == id))
                .unwrap_or(false)
        })
        .count()
}

/// Correctas que faltan por seleccionar. Saturado en cero: una selección con
/// más aciertos de los que la pregunta declara (contenido degenerado) nunca
/// produce un negativo.
pub fn remaining_correct_count(options: &[AnswerOption], selection: &[SelectionRecord]) -> usize {
    correct_count(options).saturating_sub(selected_correct_count(options, selection))
}

/// ¿La pregunta cuenta como contestada?
///
/// - Multi-respuesta: cuando no queda ninguna correcta pendiente. Una
///   pregunta sin correctas declaradas queda contestada de inmediato.
/// - Respuesta única: cuando hay cualquier selección, correcta o no.
pub fn is_fully_answered(question: &Question, selection: &[SelectionRecord]) -> bool {
    match question.kind {
        QuestionType::Multiple => remaining_correct_count(&question.options, selection) == 0,
        QuestionType::Single => !selection.is_empty(),
    }
}
