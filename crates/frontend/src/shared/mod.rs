pub mod api_utils;
pub mod components;
pub mod document;
pub mod graphql;
pub mod icons;
pub mod loader;
pub mod local_storage;
pub mod mutation;
pub mod saved_searches;
pub mod url_state;
