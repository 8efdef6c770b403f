//! Category detail page (MVVM)
//!
//! - `view_model.rs` - route/query state, loading, delete commands
//! - `view.rs` - header, tabs, assigned tables and dialogs

mod view;
mod view_model;

pub use view::CategoryDetailsPage;
pub use view_model::CategoryDetailsViewModel;
