pub mod quiz_handler;

pub use quiz_handler::{create_quiz, get_quiz, health_check, record_answers, submit_quiz};
