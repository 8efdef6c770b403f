//! Product list: a projection-driven table whose attribute columns are
//! chosen by the user.

mod column_picker;
pub mod state;

use crate::domain::a002_product::api;
use crate::shared::components::table::{GridCell, GridHeader, TableHeaderCheckbox, SKELETON_ROWS};
use crate::shared::components::{
    ConfirmDialog, ErrorBanner, PageHeader, PaginationControls, SavedSearchTabs, SearchField,
};
use crate::shared::document::set_title;
use crate::shared::icons::icon;
use crate::shared::loader::Loader;
use crate::shared::mutation::MutationRunner;
use crate::shared::saved_searches::create_saved_searches;
use crate::shared::url_state::{use_query_state, RouterNavigator};
use column_picker::ColumnPicker;
use contracts::domain::a002_product::columns::PRODUCT_LIST_LAYOUT;
use contracts::domain::a002_product::dto::{
    GridAttributesData, ProductListData, ProductListItem, ProductListVariables,
};
use contracts::domain::a002_product::urls::{
    product_list_url, product_url, ProductListDialog, ProductListFilter, ProductListParams,
    ProductStatusFilter,
};
use contracts::shared::grid::{GridAttribute, GridColumn, Selection};
use contracts::shared::list_view::{PageControls, PageInfo, TabAction, UrlToken};
use leptos::prelude::*;
use state::{create_columns_state, picker_options};
use thaw::*;

const PRODUCTS_TITLE: &str = "Products";

/// localStorage key of the saved searches
const PRODUCT_SEARCHES_STORAGE_KEY: &str = "productListFilters";

/// Bulk dialogs of the list: kind, title and confirm label
const BULK_DIALOGS: [(ProductListDialog, &str, &str); 3] = [
    (ProductListDialog::Publish, "Publish products", "Publish"),
    (ProductListDialog::Unpublish, "Unpublish products", "Unpublish"),
    (ProductListDialog::Delete, "Delete products", "Delete"),
];

fn bulk_message(kind: ProductListDialog, count: usize) -> String {
    let verb = match kind {
        ProductListDialog::Publish => "publish",
        ProductListDialog::Unpublish => "unpublish",
        _ => "delete",
    };
    match count {
        1 => format!("Are you sure you want to {} this product?", verb),
        n => format!("Are you sure you want to {} {} products?", verb, n),
    }
}

/// Names for attribute headers: the selected attributes plus everything the
/// picker offers. `None` until the attribute query answered.
fn known_attributes(data: Option<&GridAttributesData>) -> Option<Vec<GridAttribute>> {
    let data = data?;
    let mut attributes = data.grid.as_ref().map(|c| c.nodes()).unwrap_or_default();
    for attribute in data
        .available_in_grid
        .as_ref()
        .map(|c| c.nodes())
        .unwrap_or_default()
    {
        if attributes.iter().all(|a| a.id != attribute.id) {
            attributes.push(attribute);
        }
    }
    Some(attributes)
}

/// `/products`
#[component]
pub fn ProductListPage() -> impl IntoView {
    set_title(PRODUCTS_TITLE);

    let navigator = RouterNavigator::new();
    let searches = create_saved_searches(PRODUCT_SEARCHES_STORAGE_KEY);
    let query = use_query_state::<ProductListParams>();
    // a selected preset overrides the filters of the address bar
    let params = Memo::new(move |_| searches.with(|s| query.get().with_saved_search_applied(s)));
    let products = Loader::<ProductListData>::new();
    let attributes = Loader::<GridAttributesData>::new();
    let columns = create_columns_state();
    let selection = RwSignal::new(Selection::default());
    let mutations = MutationRunner::new();
    let picker_open = RwSignal::new(false);

    let apply = move |next: ProductListParams| navigator.go(&product_list_url(Some(&next)));

    let variables = Memo::new(move |_| ProductListVariables::from_params(&params.get()));
    Effect::new(move |_| {
        let variables = variables.get();
        selection.set(Selection::default());
        products.load(api::fetch_products(variables));
    });
    let reload = move || products.load(api::fetch_products(variables.get_untracked()));

    // attribute names load independently of the rows
    let attribute_ids = Memo::new(move |_| {
        columns.with(|c| {
            c.attribute_columns()
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
    });
    Effect::new(move |_| attributes.load(api::fetch_grid_attributes(attribute_ids.get())));

    let grid_columns = Memo::new(move |_| columns.with(|c| PRODUCT_LIST_LAYOUT.columns(c)));
    let headers = Signal::derive(move || {
        let known = attributes.data.with(|data| known_attributes(data.as_ref()));
        grid_columns.with(|cols| {
            params.with(|p| PRODUCT_LIST_LAYOUT.header_cells(cols, known.as_deref(), &p.sort))
        })
    });

    let rows = Signal::derive(move || {
        products.data.with(|data| {
            data.as_ref()
                .and_then(|d| d.products.as_ref())
                .map(|c| c.nodes())
        })
    });
    let page_info = Signal::derive(move || -> Option<PageInfo> {
        products.data.with(|data| {
            data.as_ref()
                .and_then(|d| d.products.as_ref())
                .and_then(|c| c.page_info.clone())
        })
    });
    let loaded_ids = move || -> Vec<String> {
        rows.with(|rows| rows.iter().flatten().map(|p| p.id.clone()).collect())
    };

    let confirm_bulk = move |kind: ProductListDialog| {
        let ids = params.get_untracked().bulk_selection;
        if ids.is_empty() {
            return;
        }
        let after = move || {
            let Some(current) = params.try_get_untracked() else {
                return;
            };
            selection.try_update(|s| s.clear());
            apply(current.without_dialog());
            reload();
        };
        match kind {
            ProductListDialog::Publish => mutations.run(
                "Products published",
                async move { api::bulk_publish_products(ids, true).await.map(|p| p.errors) },
                after,
            ),
            ProductListDialog::Unpublish => mutations.run(
                "Products unpublished",
                async move { api::bulk_publish_products(ids, false).await.map(|p| p.errors) },
                after,
            ),
            ProductListDialog::Delete => mutations.run(
                "Products deleted",
                async move { api::bulk_delete_products(ids).await.map(|p| p.errors) },
                after,
            ),
            // confirmed by SavedSearchTabs
            ProductListDialog::Tab(_) => {}
        }
    };

    let open_bulk = move |kind: ProductListDialog| {
        let ids = selection.with_untracked(|s| s.ids().to_vec());
        apply(params.get_untracked().with_bulk_dialog(kind, ids));
    };

    let filter_value = move |key: ProductListFilter| {
        params.with(|p| p.filter(key).unwrap_or_default().to_string())
    };
    let set_filter = move |key: ProductListFilter, value: String| {
        apply(params.get_untracked().with_filter(key, value.trim()))
    };

    view! {
        <div class="page">
            <PageHeader title=PRODUCTS_TITLE.to_string()>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| picker_open.update(|open| *open = !*open)
                >
                    {icon("columns")}
                    " Columns"
                </Button>
            </PageHeader>

            <Show when=move || picker_open.get()>
                <ColumnPicker
                    options=Signal::derive(move || {
                        attributes.data.with(|data| match data {
                            Some(d) => picker_options(
                                &d.available_in_grid.as_ref().map(|c| c.nodes()).unwrap_or_default(),
                                &d.grid.as_ref().map(|c| c.nodes()).unwrap_or_default(),
                            ),
                            None => picker_options(&[], &[]),
                        })
                    })
                    columns=columns
                    loading=attributes.loading
                    on_close=Callback::new(move |_| picker_open.set(false))
                />
            </Show>

            <ErrorBanner error=products.error />

            <SavedSearchTabs
                searches=searches
                all_label="All products"
                active_tab=Signal::derive(move || params.with(|p| p.active_tab.clone()))
                filters=Signal::derive(move || params.with(|p| p.filter_codes()))
                dialog=Signal::derive(move || params.with(|p| p.tab_dialog()))
                on_select=Callback::new(move |tab: Option<String>| {
                    let next = searches.with_untracked(|s| params.get_untracked().with_saved_search(s, tab.as_deref()));
                    apply(next);
                })
                on_dialog=Callback::new(move |action: Option<TabAction>| {
                    apply(params.get_untracked().with_tab_dialog(action))
                })
            />

            <div class="list-toolbar">
                <SearchField
                    value=Signal::derive(move || filter_value(ProductListFilter::Query))
                    placeholder="Search products"
                    on_commit=Callback::new(move |value: String| set_filter(ProductListFilter::Query, value))
                />
                <select
                    class="filter-select"
                    prop:value=move || filter_value(ProductListFilter::Status)
                    on:change=move |ev| set_filter(ProductListFilter::Status, event_target_value(&ev))
                >
                    <option value="">"All statuses"</option>
                    {ProductStatusFilter::ALL
                        .iter()
                        .map(|status| view! { <option value=status.code()>{status.label()}</option> })
                        .collect_view()}
                </select>
                <input
                    type="number"
                    step="0.01"
                    class="filter-input"
                    placeholder="Price from"
                    prop:value=move || filter_value(ProductListFilter::PriceFrom)
                    on:change=move |ev| set_filter(ProductListFilter::PriceFrom, event_target_value(&ev))
                />
                <input
                    type="number"
                    step="0.01"
                    class="filter-input"
                    placeholder="Price to"
                    prop:value=move || filter_value(ProductListFilter::PriceTo)
                    on:change=move |ev| set_filter(ProductListFilter::PriceTo, event_target_value(&ev))
                />

                <Show when=move || selection.with(|s| !s.is_empty())>
                    <div class="list-toolbar__bulk">
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open_bulk(ProductListDialog::Publish)>
                            "Publish"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open_bulk(ProductListDialog::Unpublish)>
                            "Unpublish"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open_bulk(ProductListDialog::Delete)>
                            {icon("delete")}
                            {move || format!(" Delete ({})", selection.with(|s| s.len()))}
                        </Button>
                    </div>
                </Show>
            </div>

            <Table class="list-table">
                <TableHeader>
                    <TableRow>
                        {move || {
                            headers
                                .get()
                                .into_iter()
                                .map(|header| match header.column {
                                    GridColumn::Select => view! {
                                        <TableHeaderCheckbox
                                            state=Signal::derive(move || {
                                                let ids = loaded_ids();
                                                selection.with(|s| s.header_state(ids.iter().map(String::as_str)))
                                            })
                                            disabled=Signal::derive(move || rows.with(|r| r.is_none()))
                                            on_toggle=Callback::new(move |_| {
                                                let ids = loaded_ids();
                                                selection.update(|s| s.toggle_all(ids.iter().map(String::as_str)));
                                            })
                                        />
                                    }
                                    .into_any(),
                                    _ => {
                                        let on_sort = header.sort_field.map(|field| {
                                            Callback::new(move |_| apply(params.get_untracked().with_sort_toggled(field)))
                                        });
                                        view! {
                                            <GridHeader
                                                label=header.label
                                                arrow=header.arrow
                                                align_right=header.align_right
                                                on_sort=on_sort
                                            />
                                        }
                                        .into_any()
                                    }
                                })
                                .collect_view()
                        }}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let cols = grid_columns.get();
                        match rows.get() {
                            None => (0..SKELETON_ROWS)
                                .map(|_| {
                                    let cells = PRODUCT_LIST_LAYOUT.row_cells::<ProductListItem>(&cols, None, false, true);
                                    view! {
                                        <TableRow>
                                            {cells
                                                .into_iter()
                                                .map(|content| view! { <GridCell content=content on_toggle=Callback::new(|_| {}) /> })
                                                .collect_view()}
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any(),
                            Some(rows) if rows.is_empty() => view! {
                                <TableRow>
                                    <TableCell attr:colspan=cols.len().to_string() class="table__empty">
                                        "No products found"
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any(),
                            Some(rows) => rows
                                .into_iter()
                                .map(|row| {
                                    let selected = selection.with(|s| s.is_selected(&row.id));
                                    let cells = PRODUCT_LIST_LAYOUT.row_cells(&cols, Some(&row), selected, false);
                                    let url = product_url(&row.id, None);
                                    let id = row.id.clone();
                                    let on_toggle = Callback::new(move |checked| selection.update(|s| s.set(&id, checked)));
                                    view! {
                                        <TableRow class="table__row--clickable" on:click=move |_| navigator.go(&url)>
                                            {cells
                                                .into_iter()
                                                .map(|content| view! { <GridCell content=content on_toggle=on_toggle /> })
                                                .collect_view()}
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any(),
                        }
                    }}
                </TableBody>
            </Table>

            <PaginationControls
                controls=Signal::derive(move || {
                    page_info.with(|info| PageControls::new(info.as_ref(), products.loading.get()))
                })
                page_size=Signal::derive(move || params.with(|p| p.pagination.page_size()))
                on_previous=Callback::new(move |_| {
                    let current = params.get_untracked();
                    if let Some(pagination) = page_info
                        .get_untracked()
                        .and_then(|info| current.pagination.previous_page(&info))
                    {
                        apply(ProductListParams { pagination, ..current });
                    }
                })
                on_next=Callback::new(move |_| {
                    let current = params.get_untracked();
                    if let Some(pagination) = page_info
                        .get_untracked()
                        .and_then(|info| current.pagination.next_page(&info))
                    {
                        apply(ProductListParams { pagination, ..current });
                    }
                })
                on_page_size_change=Callback::new(move |rows| apply(params.get_untracked().with_page_size(rows)))
            />

            {BULK_DIALOGS
                .into_iter()
                .map(|(kind, title, label)| view! {
                    <ConfirmDialog
                        open=Signal::derive(move || params.with(|p| p.is_dialog_open(kind)))
                        title=title
                        message=Signal::derive(move || params.with(|p| bulk_message(kind, p.bulk_selection.len())))
                        confirm_label=label
                        busy=mutations.busy
                        on_confirm=Callback::new(move |_| confirm_bulk(kind))
                        on_close=Callback::new(move |_| apply(params.get_untracked().without_dialog()))
                    />
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bulk_message() {
        assert_eq!(
            bulk_message(ProductListDialog::Publish, 1),
            "Are you sure you want to publish this product?"
        );
        assert_eq!(
            bulk_message(ProductListDialog::Delete, 3),
            "Are you sure you want to delete 3 products?"
        );
    }

    #[test]
    fn test_known_attributes_merge_selected_and_offered() {
        assert_eq!(known_attributes(None), None);

        let data: GridAttributesData = serde_json::from_value(json!({
            "availableInGrid": {
                "edges": [
                    { "node": { "id": "QXR0cjox", "name": "Flavor" } },
                    { "node": { "id": "QXR0cjoy", "name": "Volume" } }
                ]
            },
            "grid": {
                "edges": [{ "node": { "id": "QXR0cjoy", "name": "Volume" } }]
            }
        }))
        .expect("valid attributes");

        let known = known_attributes(Some(&data)).expect("loaded");
        let ids: Vec<&str> = known.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["QXR0cjoy", "QXR0cjox"]);
    }
}
