pub mod grid_cell;
pub mod sortable_header_cell;
pub mod table_cell_checkbox;
pub mod table_header_checkbox;

pub use grid_cell::{GridCell, GridHeader};
pub use sortable_header_cell::SortableHeaderCell;
pub use table_cell_checkbox::TableCellCheckbox;
pub use table_header_checkbox::TableHeaderCheckbox;

/// Placeholder rows shown before the first page arrives
pub const SKELETON_ROWS: usize = 5;
