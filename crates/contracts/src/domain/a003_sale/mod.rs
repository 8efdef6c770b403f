pub mod dto;
pub mod queries;
pub mod urls;
