pub mod assigned_items;
pub mod details;
pub mod list;
