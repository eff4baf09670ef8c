mod engine;
mod view_state;

pub use engine::{derive, page_window, ResultsPage};
pub use view_state::{SortKey, ViewState};
