pub mod errors;
pub mod html;

pub use errors::html_error_response;
pub use html::html_response;

// Route handlers name their result type through here.
pub use crate::errors::ResultResp;
