//! Column set of the product list.

use super::urls::ProductListSortField;
use crate::shared::grid::{ColumnSelection, ColumnToken, GridColumnKind, GridLayout, LayoutSlot};

/// Number of grid attributes offered by the column picker
pub const GRID_ATTRIBUTES_PICKER_LIMIT: u32 = 10;

crate::url_token! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum ProductListColumn {
        ProductType => "productType",
        IsPublished => "isPublished",
        Price => "price",
    }
}

impl GridColumnKind for ProductListColumn {
    type SortField = ProductListSortField;

    fn label(&self) -> &'static str {
        match self {
            ProductListColumn::ProductType => "Type",
            ProductListColumn::IsPublished => "Published",
            ProductListColumn::Price => "Price",
        }
    }

    fn sort_field(&self) -> Option<ProductListSortField> {
        Some(match self {
            ProductListColumn::ProductType => ProductListSortField::ProductType,
            ProductListColumn::IsPublished => ProductListSortField::Status,
            ProductListColumn::Price => ProductListSortField::Price,
        })
    }

    fn align_right(&self) -> bool {
        matches!(self, ProductListColumn::Price)
    }
}

pub const PRODUCT_LIST_LAYOUT: GridLayout<ProductListColumn> = GridLayout {
    primary_label: "Name",
    primary_sort: Some(ProductListSortField::Name),
    slots: &[
        LayoutSlot::Fixed(ProductListColumn::ProductType),
        LayoutSlot::Fixed(ProductListColumn::IsPublished),
        LayoutSlot::Attributes,
        LayoutSlot::Fixed(ProductListColumn::Price),
    ],
};

pub type ProductColumnSelection = ColumnSelection<ProductListColumn>;

/// Columns shown before the user changed anything
pub fn default_product_columns() -> ProductColumnSelection {
    ColumnSelection::new([
        ColumnToken::Fixed(ProductListColumn::ProductType),
        ColumnToken::Fixed(ProductListColumn::IsPublished),
        ColumnToken::Fixed(ProductListColumn::Price),
    ])
}
