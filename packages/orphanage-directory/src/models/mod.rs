pub mod draft;
pub mod location;
pub mod requests;

// Re-export commonly used types
pub use draft::{DraftIssue, DraftSubmission, SelectedImage, ABOUT_MAX_CHARS};
pub use location::{LocationPoint, Orphanage, OrphanageImage, OrphanageSummary};
pub use requests::{CreateQuery, DetailQuery, MapQuery, Notice};
