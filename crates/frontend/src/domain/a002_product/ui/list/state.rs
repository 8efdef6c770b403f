use crate::shared::local_storage;
use contracts::domain::a002_product::columns::{
    default_product_columns, ProductColumnSelection, ProductListColumn,
};
use contracts::shared::grid::{ColumnToken, GridAttribute, GridColumnKind};
use contracts::shared::list_view::UrlToken;
use leptos::prelude::*;

/// localStorage key of the chosen product columns
pub const PRODUCT_COLUMNS_STORAGE_KEY: &str = "productListColumns";

/// Saved column choice or the default set
pub fn load_columns() -> ProductColumnSelection {
    local_storage::get_json::<Vec<String>>(PRODUCT_COLUMNS_STORAGE_KEY)
        .map(ProductColumnSelection::from_values)
        .unwrap_or_else(default_product_columns)
}

/// Column selection signal, written back to storage on every change
pub fn create_columns_state() -> RwSignal<ProductColumnSelection> {
    let columns = RwSignal::new(load_columns());
    Effect::new(move |_| {
        let values = columns.with(|c| c.to_values());
        local_storage::set_json(PRODUCT_COLUMNS_STORAGE_KEY, &values);
    });
    columns
}

/// Entry of the column picker
#[derive(Debug, Clone, PartialEq)]
pub struct PickerOption {
    pub token: ColumnToken<ProductListColumn>,
    pub label: String,
}

/// Fixed columns first, then the offered attributes, then selected attributes
/// the capped offer did not include (so they can still be switched off)
pub fn picker_options(
    available: &[GridAttribute],
    selected: &[GridAttribute],
) -> Vec<PickerOption> {
    let mut options: Vec<PickerOption> = ProductListColumn::ALL
        .iter()
        .map(|column| PickerOption {
            token: ColumnToken::Fixed(*column),
            label: column.label().to_string(),
        })
        .collect();

    for attribute in available.iter().chain(selected) {
        let token = ColumnToken::attribute(attribute.id.clone());
        if options.iter().all(|option| option.token != token) {
            options.push(PickerOption {
                token,
                label: attribute.name.clone(),
            });
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attribute(id: &str, name: &str) -> GridAttribute {
        GridAttribute {
            id: id.into(),
            name: name.into(),
        }
    }

    #[test]
    fn test_picker_lists_fixed_columns_first() {
        let options = picker_options(&[attribute("QXR0cjox", "Flavor")], &[]);
        assert_eq!(options.len(), ProductListColumn::ALL.len() + 1);
        assert_eq!(options[0].token, ColumnToken::Fixed(ProductListColumn::ProductType));
        assert_eq!(options.last().map(|o| o.label.as_str()), Some("Flavor"));
    }

    #[test]
    fn test_picker_keeps_selected_attributes_outside_offer() {
        let available = [attribute("QXR0cjox", "Flavor")];
        let selected = [attribute("QXR0cjox", "Flavor"), attribute("QXR0cjo5", "Size")];
        let labels: Vec<String> = picker_options(&available, &selected)
            .into_iter()
            .skip(ProductListColumn::ALL.len())
            .map(|o| o.label)
            .collect();
        assert_eq!(labels, vec!["Flavor".to_string(), "Size".to_string()]);
    }
}
