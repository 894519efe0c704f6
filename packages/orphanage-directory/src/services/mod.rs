pub mod api;
pub mod location;
pub mod payload;
pub mod submissions;

pub use api::{ApiError, OrphanageApi};
pub use payload::CreatePayload;
pub use submissions::{Claim, SubmissionGuard};
