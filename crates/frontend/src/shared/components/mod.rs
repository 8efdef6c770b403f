pub mod confirm_dialog;
pub mod error_banner;
pub mod page_header;
pub mod pagination_controls;
pub mod saved_search_tabs;
pub mod search_field;
pub mod tab_bar;
pub mod table;

pub use confirm_dialog::ConfirmDialog;
pub use error_banner::ErrorBanner;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use saved_search_tabs::SavedSearchTabs;
pub use search_field::SearchField;
pub use tab_bar::TabBar;
