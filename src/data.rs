// src/data.rs

use crate::model::Quiz;
use serde_yaml;

/// Carga el quiz de demostración desde el YAML embebido y reasigna los
/// índices por posición, para que el contenido no pueda desincronizarlos.
pub fn read_quiz_embedded() -> Quiz {
    let file_content = include_str!("data/demo_quiz.yaml");
    let mut quiz: Quiz =
        serde_yaml::from_str(file_content).expect("No se pudo parsear el quiz YAML embebido");
    for (i, question) in quiz.questions.iter_mut().enumerate() {
        question.index = i;
    }
    quiz
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionType;

    #[test]
    fn embedded_quiz_parses_with_expected_shape() {
        let quiz = read_quiz_embedded();
        assert!(!quiz.title.is_empty());
        assert_eq!(quiz.questions.len(), 3);

        for (i, q) in quiz.questions.iter().enumerate() {
            assert_eq!(q.index, i);
            assert!(!q.prompt.is_empty());
            assert!(q.options.len() >= 3);
            assert!(q.options.iter().all(|o| o.option_id.is_some()));
            assert!(q.options.iter().all(|o| !o.selected));
        }

        // la última es multi-respuesta con dos correctas
        let last = &quiz.questions[2];
        assert!(matches!(last.kind, QuestionType::Multiple));
        assert_eq!(last.options.iter().filter(|o| o.correct).count(), 2);
    }

    #[test]
    fn option_ids_are_unique_within_each_question() {
        let quiz = read_quiz_embedded();
        for q in &quiz.questions {
            let mut ids: Vec<u32> = q.options.iter().filter_map(|o| o.option_id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), q.options.len(), "ids duplicados en {}", q.prompt);
        }
    }
}
