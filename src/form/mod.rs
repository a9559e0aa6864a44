pub mod submission;

pub use submission::{validate_request, GenerateRequest};
