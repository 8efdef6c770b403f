//! Column projection and row state of list tables.

pub mod column;
pub mod projection;
pub mod selection;

pub use column::{
    attribute_column_value, attribute_id_from_column_value, is_attribute_column_value,
    ColumnSelection, ColumnToken, ATTRIBUTE_COLUMN_PREFIX,
};
pub use projection::{
    cell_value, derive_attribute_columns, is_column_visible, resolve_header_label,
    AttributeSource, CellContent, GridAttribute, GridColumn, GridColumnKind, GridLayout, GridRow,
    HeaderCell, HeaderLabel, LayoutSlot, MISSING_VALUE, VALUE_SEPARATOR,
};
pub use selection::{HeaderCheckState, RowState, Selection};
