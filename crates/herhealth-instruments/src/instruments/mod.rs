pub mod menopause;
pub mod menstrual;
pub mod pcos;

use crate::scoring::{AnswerOption, Question};

/// A four-option question scored 0–3 in the order the labels are given.
fn graded(id: u32, prompt: &str, factor_name: &str, labels: [&str; 4]) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        factor_name: factor_name.to_string(),
        options: labels
            .iter()
            .zip(0u8..)
            .map(|(label, score)| AnswerOption {
                label: label.to_string(),
                score,
            })
            .collect(),
    }
}
