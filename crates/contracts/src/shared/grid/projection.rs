//! Turns a column selection into the header and body cells of a list table.
//!
//! Header and body are both derived from the same `Vec<GridColumn>`, so a
//! row (loaded or skeleton) always has exactly as many cells as the header.

use super::column::ColumnSelection;
use crate::shared::list_view::{Sort, SortArrow, UrlToken};
use crate::shared::money::Money;
use serde::{Deserialize, Serialize};

/// Placeholder rendered for a loaded row that lacks a displayed attribute
pub const MISSING_VALUE: &str = "-";

/// Separator between the values of a multi-value attribute
pub const VALUE_SEPARATOR: &str = ", ";

/// Attribute that may be promoted to a grid column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridAttribute {
    pub id: String,
    pub name: String,
}

/// Fixed column of a screen
pub trait GridColumnKind: UrlToken {
    type SortField: UrlToken;

    fn label(&self) -> &'static str;

    /// Sort field behind the header, `None` for unsortable columns
    fn sort_field(&self) -> Option<Self::SortField>;

    fn align_right(&self) -> bool {
        false
    }
}

/// Slot of a screen's static column layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutSlot<C> {
    Fixed(C),
    /// Where the selected attribute columns are spliced in
    Attributes,
}

/// A column that will be rendered, in render order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridColumn<C> {
    /// Row selection checkbox
    Select,
    /// Always-visible main column (e.g. product name)
    Primary,
    Fixed(C),
    Attribute(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderLabel {
    Text(String),
    /// Attribute names have not arrived yet
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell<C, S> {
    pub column: GridColumn<C>,
    pub label: HeaderLabel,
    pub sort_field: Option<S>,
    pub arrow: Option<SortArrow>,
    pub align_right: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    /// Backing data not loaded yet
    Skeleton,
    Checkbox { checked: bool, disabled: bool },
    Text(String),
    /// Primary cell with optional thumbnail
    Avatar {
        text: String,
        thumbnail: Option<String>,
    },
    Status { label: &'static str, positive: bool },
    Money(Money),
}

/// Entity carrying attribute assignments
pub trait AttributeSource {
    /// Names of the values assigned for `attribute_id`, `None` when the row
    /// carries no entry for that attribute
    fn attribute_values(&self, attribute_id: &str) -> Option<Vec<&str>>;
}

/// A loaded entity as seen by the table
pub trait GridRow<C>: AttributeSource {
    fn id(&self) -> &str;

    fn primary_cell(&self) -> CellContent;

    /// Content of a fixed column; `Skeleton` when the field is not populated
    fn fixed_cell(&self, column: C) -> CellContent;
}

/// Static description of a list table
#[derive(Clone, Copy)]
pub struct GridLayout<C: GridColumnKind + 'static> {
    pub primary_label: &'static str,
    pub primary_sort: Option<C::SortField>,
    pub slots: &'static [LayoutSlot<C>],
}

/// Selected attribute column ids, in the user's selection order
pub fn derive_attribute_columns<C: UrlToken>(selection: &ColumnSelection<C>) -> Vec<&str> {
    selection.attribute_columns()
}

/// Whether a fixed column renders at all (header cell and every body cell)
pub fn is_column_visible<C: UrlToken>(column: C, selection: &ColumnSelection<C>) -> bool {
    selection.is_column_visible(column)
}

/// Header text of an attribute column.
///
/// `available` is `None` until the attribute query resolved. An id missing
/// from the loaded set also stays pending: the set is capped, so absence
/// only means the attribute was not fetched.
pub fn resolve_header_label(attribute_id: &str, available: Option<&[GridAttribute]>) -> HeaderLabel {
    available
        .and_then(|attributes| attributes.iter().find(|a| a.id == attribute_id))
        .map(|attribute| HeaderLabel::Text(attribute.name.clone()))
        .unwrap_or(HeaderLabel::Pending)
}

/// Text of an attribute cell for a loaded row; never empty
pub fn cell_value<R: AttributeSource + ?Sized>(row: &R, attribute_id: &str) -> String {
    match row.attribute_values(attribute_id) {
        Some(values) if !values.is_empty() => values.join(VALUE_SEPARATOR),
        _ => MISSING_VALUE.to_string(),
    }
}

impl<C: GridColumnKind + 'static> GridLayout<C> {
    /// Columns to render for `selection`, leading select and primary included
    pub fn columns(&self, selection: &ColumnSelection<C>) -> Vec<GridColumn<C>> {
        let mut columns = vec![GridColumn::Select, GridColumn::Primary];
        for slot in self.slots {
            match slot {
                LayoutSlot::Fixed(column) => {
                    if is_column_visible(*column, selection) {
                        columns.push(GridColumn::Fixed(*column));
                    }
                }
                LayoutSlot::Attributes => {
                    columns.extend(
                        derive_attribute_columns(selection)
                            .into_iter()
                            .map(|id| GridColumn::Attribute(id.to_string())),
                    );
                }
            }
        }
        columns
    }

    pub fn header_cells(
        &self,
        columns: &[GridColumn<C>],
        attributes: Option<&[GridAttribute]>,
        sort: &Sort<C::SortField>,
    ) -> Vec<HeaderCell<C, C::SortField>> {
        columns
            .iter()
            .map(|column| {
                let (label, sort_field, align_right) = match column {
                    GridColumn::Select => (HeaderLabel::Text(String::new()), None, false),
                    GridColumn::Primary => (
                        HeaderLabel::Text(self.primary_label.to_string()),
                        self.primary_sort,
                        false,
                    ),
                    GridColumn::Fixed(fixed) => (
                        HeaderLabel::Text(fixed.label().to_string()),
                        fixed.sort_field(),
                        fixed.align_right(),
                    ),
                    GridColumn::Attribute(id) => (resolve_header_label(id, attributes), None, false),
                };
                HeaderCell {
                    column: column.clone(),
                    label,
                    arrow: sort_field.and_then(|field| sort.arrow_for(field)),
                    sort_field,
                    align_right,
                }
            })
            .collect()
    }

    /// Body cells of one row; `row == None` is a skeleton row
    pub fn row_cells<R: GridRow<C>>(
        &self,
        columns: &[GridColumn<C>],
        row: Option<&R>,
        selected: bool,
        disabled: bool,
    ) -> Vec<CellContent> {
        columns
            .iter()
            .map(|column| match (column, row) {
                (GridColumn::Select, row) => CellContent::Checkbox {
                    checked: row.is_some() && selected,
                    disabled: disabled || row.is_none(),
                },
                (_, None) => CellContent::Skeleton,
                (GridColumn::Primary, Some(row)) => row.primary_cell(),
                (GridColumn::Fixed(fixed), Some(row)) => row.fixed_cell(*fixed),
                (GridColumn::Attribute(id), Some(row)) => CellContent::Text(cell_value(row, id)),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::grid::column::ColumnToken;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    enum SortBy {
        #[default]
        Name,
        Price,
    }

    impl UrlToken for SortBy {
        const ALL: &'static [Self] = &[SortBy::Name, SortBy::Price];

        fn code(&self) -> &'static str {
            match self {
                SortBy::Name => "name",
                SortBy::Price => "price",
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Col {
        Price,
        Note,
    }

    impl UrlToken for Col {
        const ALL: &'static [Self] = &[Col::Price, Col::Note];

        fn code(&self) -> &'static str {
            match self {
                Col::Price => "price",
                Col::Note => "note",
            }
        }
    }

    impl GridColumnKind for Col {
        type SortField = SortBy;

        fn label(&self) -> &'static str {
            match self {
                Col::Price => "Price",
                Col::Note => "Note",
            }
        }

        fn sort_field(&self) -> Option<SortBy> {
            match self {
                Col::Price => Some(SortBy::Price),
                Col::Note => None,
            }
        }
    }

    const LAYOUT: GridLayout<Col> = GridLayout {
        primary_label: "Name",
        primary_sort: Some(SortBy::Name),
        slots: &[
            LayoutSlot::Fixed(Col::Note),
            LayoutSlot::Attributes,
            LayoutSlot::Fixed(Col::Price),
        ],
    };

    struct Row {
        attributes: Vec<(&'static str, Vec<&'static str>)>,
    }

    impl GridRow<Col> for Row {
        fn id(&self) -> &str {
            "row-1"
        }

        fn primary_cell(&self) -> CellContent {
            CellContent::Text("Row".into())
        }

        fn fixed_cell(&self, column: Col) -> CellContent {
            CellContent::Text(column.label().into())
        }
    }

    impl AttributeSource for Row {
        fn attribute_values(&self, attribute_id: &str) -> Option<Vec<&str>> {
            self.attributes
                .iter()
                .find(|(id, _)| *id == attribute_id)
                .map(|(_, values)| values.clone())
        }
    }

    #[test]
    fn test_fixed_columns_keep_layout_position() {
        let selection = ColumnSelection::new([
            ColumnToken::Fixed(Col::Price),
            ColumnToken::attribute("a2"),
            ColumnToken::Fixed(Col::Note),
            ColumnToken::attribute("a1"),
        ]);
        assert_eq!(
            LAYOUT.columns(&selection),
            vec![
                GridColumn::Select,
                GridColumn::Primary,
                GridColumn::Fixed(Col::Note),
                GridColumn::Attribute("a2".into()),
                GridColumn::Attribute("a1".into()),
                GridColumn::Fixed(Col::Price),
            ]
        );
    }

    #[test]
    fn test_header_label_pending_until_loaded() {
        let attributes = vec![GridAttribute {
            id: "a1".into(),
            name: "Color".into(),
        }];
        assert_eq!(resolve_header_label("a1", None), HeaderLabel::Pending);
        assert_eq!(
            resolve_header_label("a1", Some(attributes.as_slice())),
            HeaderLabel::Text("Color".into())
        );
        assert_eq!(resolve_header_label("a9", Some(attributes.as_slice())), HeaderLabel::Pending);
    }

    #[test]
    fn test_header_arrows_follow_sort() {
        let selection = ColumnSelection::new([ColumnToken::Fixed(Col::Price)]);
        let columns = LAYOUT.columns(&selection);
        let headers = LAYOUT.header_cells(&columns, None, &Sort::new(SortBy::Price, false));
        assert_eq!(headers[1].arrow, None);
        assert_eq!(headers[1].sort_field, Some(SortBy::Name));
        assert_eq!(headers[2].arrow, Some(SortArrow::Desc));
    }

    #[test]
    fn test_cell_value_joins_or_falls_back() {
        let row = Row {
            attributes: vec![("a1", vec!["Red", "Blue"]), ("a2", vec![])],
        };
        assert_eq!(cell_value(&row, "a1"), "Red, Blue");
        assert_eq!(cell_value(&row, "a2"), MISSING_VALUE);
        assert_eq!(cell_value(&row, "a3"), MISSING_VALUE);
    }

    #[test]
    fn test_skeleton_row_has_header_width() {
        let selection = ColumnSelection::new([
            ColumnToken::attribute("a1"),
            ColumnToken::Fixed(Col::Price),
        ]);
        let columns = LAYOUT.columns(&selection);
        let headers = LAYOUT.header_cells(&columns, None, &Sort::default());
        let skeleton = LAYOUT.row_cells::<Row>(&columns, None, false, false);
        assert_eq!(headers.len(), skeleton.len());
        assert_eq!(
            skeleton[0],
            CellContent::Checkbox {
                checked: false,
                disabled: true
            }
        );
        assert!(skeleton[1..].iter().all(|c| *c == CellContent::Skeleton));
    }
}
