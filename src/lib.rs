pub mod app;
pub mod celebration;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod schedule;
pub mod session;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use error::QuizError;
pub use session::{QuizSession, Rejection, Transition};
