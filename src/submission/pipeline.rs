use chrono::Utc;
use uuid::Uuid;

use crate::models::{ContactPayload, Submission};
use crate::store::SubmissionStore;

use super::validator::{self, FieldErrors};

pub const ACCEPTED_MESSAGE: &str = "Thanks for reaching out! We will be in touch shortly.";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted { id: Uuid, message: &'static str },
    Rejected { errors: FieldErrors },
    StorageFailure,
}

/// Validate a payload, stamp it with an id and timestamp, and append it to the store.
/// Nothing is written unless every rule passes; storage errors are logged here and
/// surfaced as `StorageFailure` without retrying.
pub async fn run(store: &dyn SubmissionStore, payload: &ContactPayload) -> SubmitOutcome {
    let result = validator::validate(payload);

    if !result.is_valid() {
        let fields: Vec<&str> = result.errors.keys().map(|f| f.as_str()).collect();
        tracing::debug!("Rejected contact submission: {fields:?}");
        return SubmitOutcome::Rejected {
            errors: result.errors,
        };
    }

    let submission = Submission::new(result.cleaned, Uuid::now_v7(), Utc::now());

    match store.append(&submission).await {
        Ok(()) => {
            tracing::info!("Accepted contact submission {}", submission.id);
            SubmitOutcome::Accepted {
                id: submission.id,
                message: ACCEPTED_MESSAGE,
            }
        }
        Err(e) => {
            tracing::error!("Failed to store submission {}: {e}", submission.id);
            SubmitOutcome::StorageFailure
        }
    }
}
