pub mod submission;

pub use submission::{ContactPayload, Submission};
