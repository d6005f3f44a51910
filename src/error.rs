//! Errores del quiz: fallos del banco de preguntas y de la configuración.

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("the question bank is empty")]
    EmptySource,
    #[error("question {index} has no text")]
    EmptyQuestion { index: usize },
    #[error("question {index} ({question:?}) needs at least two options, found {found}")]
    TooFewOptions {
        index: usize,
        question: String,
        found: usize,
    },
    #[error("question {index} ({question:?}) has an empty option")]
    EmptyOption { index: usize, question: String },
    #[error("question {index} ({question:?}) repeats option {option:?}")]
    DuplicateOption {
        index: usize,
        question: String,
        option: String,
    },
    #[error("question {index} ({question:?}): answer {answer:?} is not one of its options")]
    AnswerNotInOptions {
        index: usize,
        question: String,
        answer: String,
    },
    #[error("could not parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(String),
}
