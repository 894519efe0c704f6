//! The four screens of the application. Each one owns its state for the
//! lifetime of a request and renders itself to HTML.

pub mod create;
pub mod detail;
pub mod landing;
pub mod map_browser;

pub use create::{CreateMsg, CreateScreen};
pub use detail::{DetailScreen, Gallery};
pub use map_browser::MapBrowser;
