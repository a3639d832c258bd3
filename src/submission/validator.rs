use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::models::ContactPayload;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

const MIN_PHONE_DIGITS: usize = 7;
const MIN_MESSAGE_CHARS: usize = 10;
const MAX_PROJECT_TYPE_CHARS: usize = 40;
const MAX_COMPANY_CHARS: usize = 80;

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Company,
    Phone,
    Message,
    ProjectType,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Phone => "phone",
            Field::Message => "message",
            Field::ProjectType => "projectType",
        }
    }
}

/// One user-facing message per failing field.
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Trimmed projection of a payload. Optional fields that are missing or blank
/// become `None`, never an empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanedPayload {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub message: String,
    pub project_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub errors: FieldErrors,
    pub cleaned: CleanedPayload,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check every rule against the payload and collect all failures.
pub fn validate(payload: &ContactPayload) -> ValidationResult {
    let mut errors = FieldErrors::new();

    let name = payload.name.as_deref();
    if name.is_none_or(|n| n.trim().is_empty()) {
        errors.insert(Field::Name, "Name is required.");
    }

    let email = payload.email.as_deref();
    if !email.is_some_and(is_valid_email) {
        errors.insert(Field::Email, "A valid email is required.");
    }

    if let Some(phone) = present(payload.phone.as_deref()) {
        if digit_count(phone) < MIN_PHONE_DIGITS {
            errors.insert(Field::Phone, "Phone number looks too short.");
        }
    }

    let message = payload.message.as_deref();
    if message.is_none_or(|m| m.trim().chars().count() < MIN_MESSAGE_CHARS) {
        errors.insert(
            Field::Message,
            "Please provide a little more detail (min 10 characters).",
        );
    }

    if let Some(project_type) = present(payload.project_type.as_deref()) {
        if project_type.chars().count() > MAX_PROJECT_TYPE_CHARS {
            errors.insert(Field::ProjectType, "Project type label is too long.");
        }
    }

    if let Some(company) = present(payload.company.as_deref()) {
        if company.chars().count() > MAX_COMPANY_CHARS {
            errors.insert(Field::Company, "Company name is too long.");
        }
    }

    ValidationResult {
        errors,
        cleaned: clean(payload),
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn clean(payload: &ContactPayload) -> CleanedPayload {
    CleanedPayload {
        name: trimmed(payload.name.as_deref()),
        email: trimmed(payload.email.as_deref()),
        company: trimmed_optional(payload.company.as_deref()),
        phone: trimmed_optional(payload.phone.as_deref()),
        message: trimmed(payload.message.as_deref()),
        project_type: trimmed_optional(payload.project_type.as_deref()),
    }
}

// Empty strings count as "not provided" for optional rules.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn digit_count(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_digit()).count()
}

fn trimmed(value: Option<&str>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

fn trimmed_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
