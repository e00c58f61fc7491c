use std::sync::Arc;

use tokio::task::JoinHandle;

use herhealth_core::models::recommendation::Recommendation;
use herhealth_instruments::engine::{AssessmentResult, Estimate, ScoringEngine};
use herhealth_instruments::recommendations;
use herhealth_instruments::scoring::{AnswerMap, Question};

use crate::error::FlowError;
use crate::step::Step;
use crate::submit::Submitter;

/// One user's pass through an assessment.
///
/// Steps only move forward, except `previous` inside the questionnaire and
/// `start_over` from anywhere. Answering the last question scores the run,
/// moves to [`Step::Results`] and submits the result in the background.
pub struct AssessmentRun {
    engine: Arc<ScoringEngine>,
    submitter: Submitter,
    step: Step,
    cursor: usize,
    answers: AnswerMap,
    result: Option<AssessmentResult>,
    submission: Option<JoinHandle<()>>,
}

impl AssessmentRun {
    pub fn new(engine: Arc<ScoringEngine>, submitter: Submitter) -> Self {
        Self {
            engine,
            submitter,
            step: Step::Education,
            cursor: 0,
            answers: AnswerMap::new(),
            result: None,
            submission: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    /// The question on screen, while in the questionnaire.
    pub fn current_question(&self) -> Option<&Question> {
        match self.step {
            Step::Questionnaire => self.engine.questions().get(self.cursor),
            _ => None,
        }
    }

    /// Score already chosen for the question on screen, if any.
    pub fn current_selection(&self) -> Option<u8> {
        self.current_question().and_then(|q| self.answers.get(q.id))
    }

    /// `(1-based question number, question count)`.
    pub fn progress(&self) -> (usize, usize) {
        (self.cursor + 1, self.engine.questions().len())
    }

    /// Live lower-bound estimate over the answers so far.
    pub fn estimate(&self) -> Estimate {
        self.engine.estimate(&self.answers)
    }

    pub fn begin(&mut self) -> Result<(), FlowError> {
        self.require_step(Step::Education, "begin the questionnaire")?;
        self.step = Step::Questionnaire;
        self.cursor = 0;
        Ok(())
    }

    /// Record `score` for the current question and advance. Returns the
    /// step the run is in afterwards.
    pub fn answer(&mut self, score: u8) -> Result<Step, FlowError> {
        self.require_step(Step::Questionnaire, "answer a question")?;

        let questions = self.engine.questions();
        let question_id = questions
            .get(self.cursor)
            .map(|q| q.id)
            .ok_or(FlowError::InvalidTransition {
                step: self.step,
                action: "answer past the last question",
            })?;
        self.answers.record(questions, question_id, score)?;

        if self.cursor + 1 < questions.len() {
            self.cursor += 1;
            return Ok(self.step);
        }

        let result = self.engine.evaluate(&self.answers)?;
        self.submission = self.submitter.submit(&result);
        self.result = Some(result);
        self.step = Step::Results;
        Ok(self.step)
    }

    pub fn previous(&mut self) -> Result<(), FlowError> {
        self.require_step(Step::Questionnaire, "go back")?;
        if self.cursor == 0 {
            return Err(FlowError::InvalidTransition {
                step: self.step,
                action: "go back from the first question",
            });
        }
        self.cursor -= 1;
        Ok(())
    }

    /// Results → recommendations → doctors.
    pub fn proceed(&mut self) -> Result<Step, FlowError> {
        self.step = match self.step {
            Step::Results => Step::Recommendations,
            Step::Recommendations => Step::Doctors,
            step => {
                return Err(FlowError::InvalidTransition {
                    step,
                    action: "proceed",
                });
            }
        };
        Ok(self.step)
    }

    /// Back to the education screen with no answers. A submission already
    /// in flight is left to finish on its own.
    pub fn start_over(&mut self) {
        self.step = Step::Education;
        self.cursor = 0;
        self.answers.clear();
        self.result = None;
        self.submission = None;
    }

    /// Guidance for the completed result.
    pub fn recommendation(&self) -> Option<Recommendation> {
        self.result
            .as_ref()
            .map(|r| recommendations::recommendation(r.severity_level, r.assessment_type))
    }

    /// Take the handle of the background submission, if one was spawned.
    pub fn take_submission(&mut self) -> Option<JoinHandle<()>> {
        self.submission.take()
    }

    fn require_step(&self, step: Step, action: &'static str) -> Result<(), FlowError> {
        if self.step == step {
            Ok(())
        } else {
            Err(FlowError::InvalidTransition {
                step: self.step,
                action,
            })
        }
    }
}
