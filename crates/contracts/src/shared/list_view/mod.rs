//! Address-bar state of list and detail screens.

pub mod codec;
pub mod paging;
pub mod path;
pub mod saved_search;
pub mod state;
pub mod token;

pub use codec::{decode_detail, decode_list, encode_detail, encode_list, QueryState};
pub use paging::{PageControls, PageInfo, QueryPagination};
pub use path::{escape_id, unescape_id, url_join, with_query};
pub use saved_search::{SavedSearch, SavedSearches};
pub use state::{
    DetailViewState, Dialog, ListViewState, Pagination, Sort, SortArrow, DEFAULT_PAGE_SIZE,
    PAGE_SIZE_OPTIONS,
};
pub use token::{NoTab, TabAction, TabDialog, UrlToken};
