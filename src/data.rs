// src/data.rs

use crate::error::QuizError;
use crate::model::QuestionRecord;
use std::collections::HashSet;

const QUESTIONS_YAML: &str = include_str!("data/questions.yaml");

/// Banco de preguntas ya validado. Nunca está vacío.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    records: Vec<QuestionRecord>,
}

impl QuestionBank {
    pub fn new(records: Vec<QuestionRecord>) -> Result<Self, QuizError> {
        validate_questions(&records)?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> Result<QuestionBank, QuizError> {
    let bank = parse_questions(QUESTIONS_YAML)?;
    log::debug!("banco embebido cargado: {} preguntas", bank.len());
    Ok(bank)
}

pub fn parse_questions(yaml: &str) -> Result<QuestionBank, QuizError> {
    let records: Vec<QuestionRecord> =
        serde_yaml::from_str(yaml).map_err(|source| QuizError::Parse {
            what: "question bank",
            source,
        })?;
    QuestionBank::new(records)
}

/// Comprueba el banco entero y falla con la primera pregunta defectuosa.
pub fn validate_questions(records: &[QuestionRecord]) -> Result<(), QuizError> {
    if records.is_empty() {
        return Err(QuizError::EmptySource);
    }

    for (index, q) in records.iter().enumerate() {
        if q.question.trim().is_empty() {
            return Err(QuizError::EmptyQuestion { index });
        }
        if q.options.len() < 2 {
            return Err(QuizError::TooFewOptions {
                index,
                question: q.question.clone(),
                found: q.options.len(),
            });
        }

        let mut seen = HashSet::new();
        for option in &q.options {
            if option.is_empty() {
                return Err(QuizError::EmptyOption {
                    index,
                    question: q.question.clone(),
                });
            }
            if !seen.insert(option.as_str()) {
                return Err(QuizError::DuplicateOption {
                    index,
                    question: q.question.clone(),
                    option: option.clone(),
                });
            }
        }

        if !q.has_option(&q.answer) {
            return Err(QuizError::AnswerNotInOptions {
                index,
                question: q.question.clone(),
                answer: q.answer.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(question: &str, options: &[&str], answer: &str) -> QuestionRecord {
        QuestionRecord::new(question, options.iter().copied(), answer)
    }

    #[test]
    fn embedded_bank_is_valid() {
        let bank = read_questions_embedded().expect("embedded bank parses");
        assert!(bank.len() >= 10);
        for q in bank.records() {
            assert!(q.has_option(&q.answer), "{q:?}");
        }
    }

    #[test]
    fn parse_reads_yaml_records() {
        let yaml = r#"
- question: "Capital?"
  options: ["A", "B"]
  answer: "A"
- question: "Color?"
  options: ["Red", "Blue"]
  answer: "Blue"
"#;
        let bank = parse_questions(yaml).expect("valid yaml");
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.records()[1].answer, "Blue");
    }

    #[test]
    fn parse_reports_malformed_yaml() {
        let err = parse_questions("- question: [").unwrap_err();
        assert!(matches!(err, QuizError::Parse { .. }));
    }

    #[test]
    fn empty_bank_is_rejected() {
        assert!(matches!(
            QuestionBank::new(Vec::new()),
            Err(QuizError::EmptySource)
        ));
    }

    #[test]
    fn answer_outside_options_is_rejected() {
        let err = QuestionBank::new(vec![
            record("Capital?", &["A", "B"], "A"),
            record("Color?", &["Red", "Blue"], "blue"),
        ])
        .unwrap_err();
        match err {
            QuizError::AnswerNotInOptions { index, answer, .. } => {
                assert_eq!(index, 1);
                assert_eq!(answer, "blue");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_and_short_option_lists_are_rejected() {
        assert!(matches!(
            validate_questions(&[record("Q", &["A", "A"], "A")]),
            Err(QuizError::DuplicateOption { .. })
        ));
        assert!(matches!(
            validate_questions(&[record("Q", &["A"], "A")]),
            Err(QuizError::TooFewOptions { found: 1, .. })
        ));
        assert!(matches!(
            validate_questions(&[record("Q", &["A", ""], "A")]),
            Err(QuizError::EmptyOption { .. })
        ));
        assert!(matches!(
            validate_questions(&[record("  ", &["A", "B"], "A")]),
            Err(QuizError::EmptyQuestion { index: 0 })
        ));
    }
}
