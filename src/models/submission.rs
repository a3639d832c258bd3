use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::submission::validator::CleanedPayload;

/// A contact request as it arrives on the wire. Every field is optional here;
/// presence rules belong to the validator.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub project_type: Option<String>,
}

/// A validated submission as persisted in the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub message: String,
    pub project_type: Option<String>,
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(cleaned: CleanedPayload, id: Uuid, submitted_at: DateTime<Utc>) -> Self {
        Self {
            name: cleaned.name,
            email: cleaned.email,
            company: cleaned.company,
            phone: cleaned.phone,
            message: cleaned.message,
            project_type: cleaned.project_type,
            id,
            submitted_at,
        }
    }
}
