use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use herhealth_audit::events::{AuditEvent, AuditOutcome};
use herhealth_instruments::engine::AssessmentResult;
use herhealth_storage::sink::AssessmentSink;

use crate::session::SessionProvider;

const ACTION: &str = "assessment.submit";
const RESOURCE_TYPE: &str = "health_assessment";

/// What happened to one submission. Reported after the fact; nothing waits
/// on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Saved { record_id: Uuid },
    Failed { reason: String },
    Skipped,
}

/// Submit-and-continue persistence for completed runs.
///
/// Each submission is spawned on the current tokio runtime and never
/// retried. The outcome is logged, emitted as an [`AuditEvent`], and
/// forwarded to the optional outcome channel.
#[derive(Clone)]
pub struct Submitter {
    sink: Arc<dyn AssessmentSink>,
    session: Arc<dyn SessionProvider>,
    outcomes: Option<mpsc::UnboundedSender<SubmissionOutcome>>,
}

impl Submitter {
    pub fn new(sink: Arc<dyn AssessmentSink>, session: Arc<dyn SessionProvider>) -> Self {
        Self {
            sink,
            session,
            outcomes: None,
        }
    }

    pub fn with_outcomes(mut self, outcomes: mpsc::UnboundedSender<SubmissionOutcome>) -> Self {
        self.outcomes = Some(outcomes);
        self
    }

    /// Hand `result` to the sink without waiting. Returns the spawned task,
    /// or `None` when nothing was spawned (no user, or no runtime).
    pub fn submit(&self, result: &AssessmentResult) -> Option<JoinHandle<()>> {
        let resource_id = result.assessment_type.as_str();

        let Some(user_id) = self.session.current_user() else {
            debug!(assessment_type = %resource_id, "no signed-in user, skipping persistence");
            AuditEvent::new(ACTION, RESOURCE_TYPE, resource_id, AuditOutcome::Skipped).emit();
            report(&self.outcomes, SubmissionOutcome::Skipped);
            return None;
        };

        let record = result.to_record(user_id.clone());

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            let reason = "no async runtime available".to_string();
            warn!(assessment_type = %resource_id, user_id = %user_id, "{reason}");
            AuditEvent::new(ACTION, RESOURCE_TYPE, resource_id, AuditOutcome::Failed)
                .with_user(user_id)
                .with_details(serde_json::json!({ "reason": &reason }))
                .emit();
            report(&self.outcomes, SubmissionOutcome::Failed { reason });
            return None;
        };

        let sink = Arc::clone(&self.sink);
        let outcomes = self.outcomes.clone();
        Some(runtime.spawn(async move {
            let record_id = record.id;
            let assessment_type = record.assessment_type;
            let outcome = match sink.insert(record).await {
                Ok(()) => {
                    info!(%record_id, %assessment_type, user_id = %user_id, "assessment saved");
                    AuditEvent::new(ACTION, RESOURCE_TYPE, record_id.to_string(), AuditOutcome::Succeeded)
                        .with_user(user_id)
                        .emit();
                    SubmissionOutcome::Saved { record_id }
                }
                Err(e) => {
                    let reason = e.to_string();
                    warn!(%record_id, %assessment_type, user_id = %user_id, error = %reason, "failed to save assessment");
                    AuditEvent::new(ACTION, RESOURCE_TYPE, record_id.to_string(), AuditOutcome::Failed)
                        .with_user(user_id)
                        .with_details(serde_json::json!({ "reason": &reason }))
                        .emit();
                    SubmissionOutcome::Failed { reason }
                }
            };
            report(&outcomes, outcome);
        }))
    }
}

fn report(outcomes: &Option<mpsc::UnboundedSender<SubmissionOutcome>>, outcome: SubmissionOutcome) {
    if let Some(tx) = outcomes {
        // A dropped receiver just means nobody is watching.
        let _ = tx.send(outcome);
    }
}
