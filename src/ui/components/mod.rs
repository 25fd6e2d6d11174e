//! Reusable UI components

pub mod common;

// Full-screen views
pub mod bug_detail;
pub mod bug_list;

// Overlays
pub mod input_popup;
pub mod message_popup;

// Component exports
pub use bug_detail::BugDetailView;
pub use bug_list::BugListView;
pub use input_popup::{InputPopup, SubmitFn};
pub use message_popup::MessagePopup;
