//! Category create form
//!
//! MVVM split:
//! - view_model.rs: form signals and the create flow
//! - view.rs: Leptos component (pure UI)
//!
//! API calls live in `a001_category::api`.

mod view;
mod view_model;

pub use view::CategoryCreatePage;
pub use view_model::CategoryCreateViewModel;
