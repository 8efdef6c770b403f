use crate::domain::a001_category::api;
use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox, SKELETON_ROWS,
};
use crate::shared::components::{
    ConfirmDialog, ErrorBanner, PageHeader, PaginationControls, SavedSearchTabs, SearchField,
};
use crate::shared::document::set_title;
use crate::shared::icons::icon;
use crate::shared::loader::Loader;
use crate::shared::mutation::MutationRunner;
use crate::shared::saved_searches::create_saved_searches;
use crate::shared::url_state::{use_query_state, RouterNavigator};
use contracts::domain::a001_category::dto::{
    CategoryListItem, RootCategoriesData, RootCategoriesVariables,
};
use contracts::domain::a001_category::urls::{
    category_add_url, category_list_url, category_url, CategoryListDialog, CategoryListFilter,
    CategoryListParams, CategoryListSortField,
};
use contracts::shared::grid::Selection;
use contracts::shared::list_view::{PageControls, PageInfo, TabAction};
use leptos::prelude::*;
use thaw::*;

const CATEGORIES_TITLE: &str = "Categories";

/// localStorage key of the saved searches
const CATEGORY_SEARCHES_STORAGE_KEY: &str = "categoryListFilters";

fn count_label(count: Option<u32>) -> String {
    count.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string())
}

fn bulk_delete_message(count: usize) -> String {
    match count {
        1 => "Are you sure you want to delete this category?".to_string(),
        n => format!("Are you sure you want to delete {} categories?", n),
    }
}

/// `/categories`: root categories with search, sorting and bulk delete
#[component]
pub fn CategoryListPage() -> impl IntoView {
    set_title(CATEGORIES_TITLE);

    let navigator = RouterNavigator::new();
    let searches = create_saved_searches(CATEGORY_SEARCHES_STORAGE_KEY);
    let query = use_query_state::<CategoryListParams>();
    // a selected preset overrides the filters of the address bar
    let params = Memo::new(move |_| searches.with(|s| query.get().with_saved_search_applied(s)));
    let loader = Loader::<RootCategoriesData>::new();
    let selection = RwSignal::new(Selection::default());
    let mutations = MutationRunner::new();

    let apply = move |next: CategoryListParams| navigator.go(&category_list_url(Some(&next)));

    // dialogs do not take part in the query, opening one does not refetch
    let variables = Memo::new(move |_| RootCategoriesVariables::from_params(&params.get()));
    Effect::new(move |_| {
        let variables = variables.get();
        selection.set(Selection::default());
        loader.load(api::fetch_root_categories(variables));
    });
    let reload = move || loader.load(api::fetch_root_categories(variables.get_untracked()));

    // `None` until the first response arrives
    let rows = Signal::derive(move || {
        loader.data.with(|data| {
            data.as_ref()
                .and_then(|d| d.categories.as_ref())
                .map(|c| c.nodes())
        })
    });
    let page_info = Signal::derive(move || -> Option<PageInfo> {
        loader.data.with(|data| {
            data.as_ref()
                .and_then(|d| d.categories.as_ref())
                .and_then(|c| c.page_info.clone())
        })
    });
    let loaded_ids = move || -> Vec<String> {
        rows.with(|rows| {
            rows.iter()
                .flatten()
                .map(|row| row.id.clone())
                .collect()
        })
    };

    let sort_header = move |label: &'static str, field: CategoryListSortField, right: bool| {
        view! {
            <SortableHeaderCell
                label=label
                arrow=Signal::derive(move || params.with(|p| p.sort.arrow_for(field)))
                on_sort=Callback::new(move |_| apply(params.get_untracked().with_sort_toggled(field)))
                align_right=right
            />
        }
    };

    let on_confirm_delete = Callback::new(move |_| {
        let ids = params.get_untracked().bulk_selection;
        if ids.is_empty() {
            return;
        }
        mutations.run(
            "Categories deleted",
            async move { api::bulk_delete_categories(ids).await.map(|p| p.errors) },
            move || {
                selection.try_update(|s| s.clear());
                if let Some(current) = params.try_get_untracked() {
                    apply(current.without_dialog());
                    reload();
                }
            },
        );
    });

    view! {
        <div class="page">
            <PageHeader title=CATEGORIES_TITLE.to_string()>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| navigator.go(&category_add_url(None))
                >
                    {icon("plus")}
                    " Create category"
                </Button>
            </PageHeader>

            <ErrorBanner error=loader.error />

            <SavedSearchTabs
                searches=searches
                all_label="All categories"
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
                    value=Signal::derive(move || {
                        params.with(|p| p.filter(CategoryListFilter::Query).unwrap_or_default().to_string())
                    })
                    placeholder="Search categories"
                    on_commit=Callback::new(move |value: String| {
                        apply(params.get_untracked().with_filter(CategoryListFilter::Query, value))
                    })
                />
                <Show when=move || selection.with(|s| !s.is_empty())>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            let ids = selection.with_untracked(|s| s.ids().to_vec());
                            apply(params.get_untracked().with_bulk_dialog(CategoryListDialog::Remove, ids));
                        }
                    >
                        {icon("delete")}
                        {move || format!(" Delete ({})", selection.with(|s| s.len()))}
                    </Button>
                </Show>
            </div>

            <Table class="list-table">
                <TableHeader>
                    <TableRow>
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
                        {sort_header("Category name", CategoryListSortField::Name, false)}
                        {sort_header("Subcategories", CategoryListSortField::SubcategoryCount, true)}
                        {sort_header("Number of products", CategoryListSortField::ProductCount, true)}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || match rows.get() {
                        None => (0..SKELETON_ROWS)
                            .map(|_| view! {
                                <TableRow>
                                    <TableCellCheckbox
                                        checked=Signal::derive(|| false)
                                        disabled=true
                                        on_change=Callback::new(|_| {})
                                    />
                                    <TableCell><span class="skeleton skeleton--text"></span></TableCell>
                                    <TableCell><span class="skeleton skeleton--text"></span></TableCell>
                                    <TableCell><span class="skeleton skeleton--text"></span></TableCell>
                                </TableRow>
                            })
                            .collect_view()
                            .into_any(),
                        Some(rows) if rows.is_empty() => view! {
                            <TableRow>
                                <TableCell attr:colspan="4" class="table__empty">"No categories found"</TableCell>
                            </TableRow>
                        }
                        .into_any(),
                        Some(rows) => rows
                            .into_iter()
                            .map(|row: CategoryListItem| {
                                let id = row.id.clone();
                                let check_id = row.id.clone();
                                let toggle_id = row.id.clone();
                                let name = row.name.clone();
                                let subcategory_count = count_label(row.subcategory_count());
                                let product_count = count_label(row.product_count());
                                view! {
                                    <TableRow
                                        class="table__row--clickable"
                                        on:click=move |_| navigator.go(&category_url(&id, None))
                                    >
                                        <TableCellCheckbox
                                            checked=Signal::derive(move || selection.with(|s| s.is_selected(&check_id)))
                                            on_change=Callback::new(move |checked| {
                                                selection.update(|s| s.set(&toggle_id, checked))
                                            })
                                        />
                                        <TableCell>{name.clone()}</TableCell>
                                        <TableCell class="text-right">{subcategory_count.clone()}</TableCell>
                                        <TableCell class="text-right">{product_count.clone()}</TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                            .into_any(),
                    }}
                </TableBody>
            </Table>

            <PaginationControls
                controls=Signal::derive(move || {
                    page_info.with(|info| PageControls::new(info.as_ref(), loader.loading.get()))
                })
                page_size=Signal::derive(move || params.with(|p| p.pagination.page_size()))
                on_previous=Callback::new(move |_| {
                    let current = params.get_untracked();
                    if let Some(pagination) = page_info
                        .get_untracked()
                        .and_then(|info| current.pagination.previous_page(&info))
                    {
                        apply(CategoryListParams { pagination, ..current });
                    }
                })
                on_next=Callback::new(move |_| {
                    let current = params.get_untracked();
                    if let Some(pagination) = page_info
                        .get_untracked()
                        .and_then(|info| current.pagination.next_page(&info))
                    {
                        apply(CategoryListParams { pagination, ..current });
                    }
                })
                on_page_size_change=Callback::new(move |rows| apply(params.get_untracked().with_page_size(rows)))
            />

            <ConfirmDialog
                open=Signal::derive(move || params.with(|p| p.is_dialog_open(CategoryListDialog::Remove)))
                title="Delete categories"
                message=Signal::derive(move || params.with(|p| bulk_delete_message(p.bulk_selection.len())))
                confirm_label="Delete"
                busy=mutations.busy
                on_confirm=on_confirm_delete
                on_close=Callback::new(move |_| apply(params.get_untracked().without_dialog()))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(Some(3)), "3");
        assert_eq!(count_label(None), "-");
    }

    #[test]
    fn test_bulk_delete_message() {
        assert_eq!(
            bulk_delete_message(1),
            "Are you sure you want to delete this category?"
        );
        assert_eq!(
            bulk_delete_message(4),
            "Are you sure you want to delete 4 categories?"
        );
    }
}
