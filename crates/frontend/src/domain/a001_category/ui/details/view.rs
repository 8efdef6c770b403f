use super::view_model::CategoryDetailsViewModel;
use crate::shared::components::table::{
    TableCellCheckbox, TableHeaderCheckbox, SKELETON_ROWS,
};
use crate::shared::components::{
    ConfirmDialog, ErrorBanner, PageHeader, PaginationControls, TabBar,
};
use crate::shared::document::set_title;
use crate::shared::icons::icon;
use contracts::domain::a001_category::urls::{
    category_add_url, category_url, CategoryDialog, CategoryPageTab,
};
use contracts::domain::a002_product::urls::product_url;
use contracts::shared::list_view::UrlToken;
use leptos::prelude::*;
use thaw::*;

fn tab_label(tab: CategoryPageTab) -> &'static str {
    match tab {
        CategoryPageTab::Categories => "Subcategories",
        CategoryPageTab::Products => "Products",
    }
}

fn bulk_message(kind: CategoryDialog, count: usize) -> String {
    match kind {
        CategoryDialog::DeleteProducts => {
            format!("Are you sure you want to delete {} products?", count)
        }
        _ => format!("Are you sure you want to delete {} subcategories?", count),
    }
}

/// `/categories/:id`
#[component]
pub fn CategoryDetailsPage() -> impl IntoView {
    let vm = CategoryDetailsViewModel::new();

    Effect::new(move |_| {
        let title = vm.title();
        if !title.is_empty() {
            set_title(&title);
        }
    });

    let tabs = CategoryPageTab::ALL
        .iter()
        .map(|tab| (tab.code().to_string(), tab_label(*tab).to_string()))
        .collect::<Vec<_>>();

    view! {
        <div class="page details-page">
            <PageHeader
                title=Signal::derive(move || vm.title())
                back_href=Signal::derive(move || Some(vm.back_url()))
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.open_delete()
                    disabled=Signal::derive(move || vm.category().is_none())
                >
                    {icon("delete")}
                    " Delete category"
                </Button>
            </PageHeader>

            <ErrorBanner error=vm.loader.error />

            <Show when=move || vm.not_found()>
                <div class="alert alert--error">"Category not found"</div>
            </Show>

            <section class="card">
                <h3 class="card__title">"General information"</h3>
                {move || match vm.category() {
                    Some(category) => view! {
                        <dl class="details-list">
                            <dt>"Name"</dt>
                            <dd>{category.name.clone()}</dd>
                            <dt>"Search engine title"</dt>
                            <dd>{category.seo_title.clone().unwrap_or_else(|| "-".to_string())}</dd>
                            <dt>"Search engine description"</dt>
                            <dd>{category.seo_description.clone().unwrap_or_else(|| "-".to_string())}</dd>
                        </dl>
                    }
                    .into_any(),
                    None => view! { <span class="skeleton skeleton--block"></span> }.into_any(),
                }}
            </section>

            <section class="card">
                <div class="card__header">
                    <TabBar
                        tabs=tabs
                        active=Signal::derive(move || vm.active_tab().code().to_string())
                        on_select=Callback::new(move |code: String| {
                            if let Some(tab) = CategoryPageTab::from_code(&code) {
                                vm.set_tab(tab);
                            }
                        })
                    />
                    <div class="card__actions">
                        <Show when=move || vm.selection.with(|s| !s.is_empty())>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| vm.open_bulk_delete()
                            >
                                {icon("delete")}
                                {move || format!(" Delete ({})", vm.selection.with(|s| s.len()))}
                            </Button>
                        </Show>
                        {move || match vm.active_tab() {
                            CategoryPageTab::Categories => {
                                let add_url = vm.id.get().map(|id| category_add_url(Some(&id)));
                                view! {
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| {
                                            if let Some(url) = &add_url {
                                                vm.go(url);
                                            }
                                        }
                                    >
                                        {icon("plus")}
                                        " Add subcategory"
                                    </Button>
                                }
                                .into_any()
                            }
                            CategoryPageTab::Products => ().into_any(),
                        }}
                    </div>
                </div>

                <Table class="list-table">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCheckbox
                                state=Signal::derive(move || {
                                    let ids = vm.loaded_ids();
                                    vm.selection.with(|s| s.header_state(ids.iter().map(String::as_str)))
                                })
                                disabled=Signal::derive(move || vm.category().is_none())
                                on_toggle=Callback::new(move |_| {
                                    let ids = vm.loaded_ids();
                                    vm.selection.update(|s| s.toggle_all(ids.iter().map(String::as_str)));
                                })
                            />
                            <TableHeaderCell>"Name"</TableHeaderCell>
                            {move || match vm.active_tab() {
                                CategoryPageTab::Categories => view! {
                                    <TableHeaderCell class="text-right">"Subcategories"</TableHeaderCell>
                                    <TableHeaderCell class="text-right">"Number of products"</TableHeaderCell>
                                }
                                .into_any(),
                                CategoryPageTab::Products => view! {
                                    <TableHeaderCell attr:colspan="2"></TableHeaderCell>
                                }
                                .into_any(),
                            }}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || assigned_rows(vm)}
                    </TableBody>
                </Table>

                <PaginationControls
                    controls=Signal::derive(move || vm.page_controls())
                    page_size=Signal::derive(move || vm.params.with(|p| p.pagination.page_size()))
                    on_previous=Callback::new(move |_| vm.previous_page())
                    on_next=Callback::new(move |_| vm.next_page())
                    on_page_size_change=Callback::new(move |rows| vm.set_page_size(rows))
                />
            </section>

            <ConfirmDialog
                open=Signal::derive(move || vm.is_dialog_open(CategoryDialog::Delete))
                title="Delete category"
                message=Signal::derive(move || {
                    format!("Are you sure you want to delete {}?", vm.title())
                })
                confirm_label="Delete"
                busy=vm.mutations.busy
                on_confirm=Callback::new(move |_| vm.delete())
                on_close=Callback::new(move |_| vm.close_dialog())
            />
            <ConfirmDialog
                open=Signal::derive(move || {
                    vm.is_dialog_open(CategoryDialog::DeleteCategories)
                        || vm.is_dialog_open(CategoryDialog::DeleteProducts)
                })
                title="Delete selected"
                message=Signal::derive(move || {
                    let kind = if vm.is_dialog_open(CategoryDialog::DeleteProducts) {
                        CategoryDialog::DeleteProducts
                    } else {
                        CategoryDialog::DeleteCategories
                    };
                    bulk_message(kind, vm.bulk_count())
                })
                confirm_label="Delete"
                busy=vm.mutations.busy
                on_confirm=Callback::new(move |_| vm.delete_selected())
                on_close=Callback::new(move |_| vm.close_dialog())
            />
        </div>
    }
}

fn skeleton_rows() -> AnyView {
    (0..SKELETON_ROWS)
        .map(|_| {
            view! {
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
            }
        })
        .collect_view()
        .into_any()
}

fn empty_row(message: &'static str) -> AnyView {
    view! {
        <TableRow>
            <TableCell attr:colspan="4" class="table__empty">{message}</TableCell>
        </TableRow>
    }
    .into_any()
}

fn selection_cell(vm: CategoryDetailsViewModel, id: String) -> impl IntoView {
    let check_id = id.clone();
    view! {
        <TableCellCheckbox
            checked=Signal::derive(move || vm.selection.with(|s| s.is_selected(&check_id)))
            on_change=Callback::new(move |checked| vm.selection.update(|s| s.set(&id, checked)))
        />
    }
}

fn assigned_rows(vm: CategoryDetailsViewModel) -> AnyView {
    match vm.active_tab() {
        CategoryPageTab::Categories => match vm.subcategories() {
            None => skeleton_rows(),
            Some(rows) if rows.is_empty() => empty_row("No subcategories found"),
            Some(rows) => rows
                .into_iter()
                .map(|row| {
                    let url = category_url(&row.id, None);
                    let name = row.name.clone();
                    let subcategory_count = row.subcategory_count().map(|c| c.to_string()).unwrap_or_else(|| "-".to_string());
                    let product_count = row.product_count().map(|c| c.to_string()).unwrap_or_else(|| "-".to_string());
                    view! {
                        <TableRow class="table__row--clickable" on:click=move |_| vm.go(&url)>
                            {selection_cell(vm, row.id.clone())}
                            <TableCell>{name.clone()}</TableCell>
                            <TableCell class="text-right">
                                {subcategory_count.clone()}
                            </TableCell>
                            <TableCell class="text-right">
                                {product_count.clone()}
                            </TableCell>
                        </TableRow>
                    }
                })
                .collect_view()
                .into_any(),
        },
        CategoryPageTab::Products => match vm.products() {
            None => skeleton_rows(),
            Some(rows) if rows.is_empty() => empty_row("No products found"),
            Some(rows) => rows
                .into_iter()
                .map(|row| {
                    let url = product_url(&row.id, None);
                    let thumbnail = row.thumbnail.as_ref().map(|t| t.url.clone());
                    view! {
                        <TableRow class="table__row--clickable" on:click=move |_| vm.go(&url)>
                            {selection_cell(vm, row.id.clone())}
                            <TableCell attr:colspan="3">
                                <div class="table__avatar">
                                    {match thumbnail {
                                        Some(src) => view! { <img class="table__thumbnail" src=src alt="" /> }.into_any(),
                                        None => view! { <span class="table__thumbnail table__thumbnail--empty"></span> }.into_any(),
                                    }}
                                    <span>{row.name.clone()}</span>
                                </div>
                            </TableCell>
                        </TableRow>
                    }
                })
                .collect_view()
                .into_any(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tab_has_a_label() {
        for tab in CategoryPageTab::ALL {
            assert!(!tab_label(*tab).is_empty());
        }
    }

    #[test]
    fn test_bulk_message_follows_dialog() {
        assert_eq!(
            bulk_message(CategoryDialog::DeleteProducts, 2),
            "Are you sure you want to delete 2 products?"
        );
        assert_eq!(
            bulk_message(CategoryDialog::DeleteCategories, 3),
            "Are you sure you want to delete 3 subcategories?"
        );
    }
}
