use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;

/// One selectable answer. `score` is the weight it adds to the raw score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub label: String,
    pub score: u8,
}

/// A multiple-choice question. Options run from least to most severe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    /// Label grouping this question's contribution in the factor breakdown.
    pub factor_name: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn offers(&self, score: u8) -> bool {
        self.options.iter().any(|o| o.score == score)
    }

    fn score_range(&self) -> Option<(u8, u8)> {
        let first = self.options.first()?.score;
        let last = self.options.last()?.score;
        Some((first, last))
    }
}

/// A validated, ordered question list for one assessment type.
///
/// Every question shares the option range `[0, max_option_score]`, and
/// `max_option_score` is never zero, so the normalisation denominator is
/// always positive.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct QuestionSet {
    questions: Vec<Question>,
    max_option_score: u8,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Result<Self, InstrumentError> {
        let first = questions.first().ok_or(InstrumentError::EmptyQuestionSet)?;
        let (_, expected_max) = first
            .score_range()
            .ok_or(InstrumentError::NoOptions { question_id: first.id })?;
        if expected_max == 0 {
            return Err(InstrumentError::ZeroMaxScore);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(InstrumentError::DuplicateQuestion(question.id));
            }
            let (min, max) = question.score_range().ok_or(InstrumentError::NoOptions {
                question_id: question.id,
            })?;
            if question.options.windows(2).any(|w| w[0].score >= w[1].score) {
                return Err(InstrumentError::UnorderedOptions {
                    question_id: question.id,
                });
            }
            if min != 0 || max != expected_max {
                return Err(InstrumentError::MismatchedOptionRange {
                    question_id: question.id,
                    min,
                    max,
                    expected_max,
                });
            }
        }

        Ok(Self {
            questions,
            max_option_score: expected_max,
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn max_option_score(&self) -> u8 {
        self.max_option_score
    }

    /// Denominator of the normalised score: question count × max option score.
    pub fn max_score(&self) -> u32 {
        self.questions.len() as u32 * u32::from(self.max_option_score)
    }

    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

/// Selected option score per question id.
///
/// Entries only get in through [`AnswerMap::record`], which checks them
/// against the question set, so scoring can assume every key is known.
/// Serialises as `{"<question id>": score}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct AnswerMap(BTreeMap<u32, u8>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from untrusted `(question id, score)` pairs, rejecting
    /// the first entry the set does not accept.
    pub fn from_entries(
        set: &QuestionSet,
        entries: impl IntoIterator<Item = (u32, u8)>,
    ) -> Result<Self, InstrumentError> {
        let mut answers = Self::new();
        for (question_id, score) in entries {
            answers.record(set, question_id, score)?;
        }
        Ok(answers)
    }

    /// Record (or replace) the answer to one question.
    pub fn record(
        &mut self,
        set: &QuestionSet,
        question_id: u32,
        score: u8,
    ) -> Result<(), InstrumentError> {
        let question = set
            .question(question_id)
            .ok_or(InstrumentError::UnknownQuestion(question_id))?;
        if !question.offers(score) {
            return Err(InstrumentError::InvalidOptionScore { question_id, score });
        }
        self.0.insert(question_id, score);
        Ok(())
    }

    pub fn get(&self, question_id: u32) -> Option<u8> {
        self.0.get(&question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_complete(&self, set: &QuestionSet) -> bool {
        set.questions().iter().all(|q| self.0.contains_key(&q.id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, u8)> + '_ {
        self.0.iter().map(|(id, score)| (*id, *score))
    }

    /// The persisted `responses` shape: question id as string → score.
    pub fn to_responses(&self) -> BTreeMap<String, u8> {
        self.0.iter().map(|(id, score)| (id.to_string(), *score)).collect()
    }
}

/// Unnormalised sum of the selected scores.
pub fn raw_score(answers: &AnswerMap) -> u32 {
    answers.iter().map(|(_, score)| u32::from(score)).sum()
}

/// `round(100 × raw / max_score)`, rounding halves up.
///
/// Unanswered questions stay in the denominator, so a partial map yields a
/// lower-bound estimate rather than a percentage of what was answered.
pub fn normalized_score(set: &QuestionSet, answers: &AnswerMap) -> u8 {
    let max = set.max_score();
    let raw = raw_score(answers).min(max);
    ((200 * raw + max) / (2 * max)) as u8
}
