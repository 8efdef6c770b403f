pub mod date;
pub mod graphql;
pub mod grid;
pub mod list_view;
pub mod money;
pub mod mutation;
