//! Assigned catalogue card shared by the sale and voucher detail pages.

use crate::shared::components::table::SKELETON_ROWS;
use crate::shared::components::{PaginationControls, TabBar};
use crate::shared::url_state::RouterNavigator;
use contracts::domain::a001_category::urls::category_url;
use contracts::domain::a002_product::urls::product_url;
use contracts::domain::a003_sale::dto::AssignedItemRow;
use contracts::domain::a003_sale::urls::DiscountPageTab;
use contracts::shared::list_view::{PageControls, UrlToken};
use leptos::prelude::*;
use thaw::*;

fn detail_header(tab: DiscountPageTab) -> &'static str {
    match tab {
        DiscountPageTab::Products => "Product type",
        DiscountPageTab::Categories | DiscountPageTab::Collections => "Number of products",
    }
}

fn empty_message(tab: DiscountPageTab) -> &'static str {
    match tab {
        DiscountPageTab::Categories => "No categories found",
        DiscountPageTab::Collections => "No collections found",
        DiscountPageTab::Products => "No products found",
    }
}

/// Page of the assigned item; collections have no screen here
fn item_url(tab: DiscountPageTab, id: &str) -> Option<String> {
    match tab {
        DiscountPageTab::Categories => Some(category_url(id, None)),
        DiscountPageTab::Products => Some(product_url(id, None)),
        DiscountPageTab::Collections => None,
    }
}

#[component]
pub fn AssignedItemsCard(
    #[prop(into)] active: Signal<DiscountPageTab>,
    /// `None` until the discount is loaded
    #[prop(into)]
    rows: Signal<Option<Vec<AssignedItemRow>>>,
    #[prop(into)] controls: Signal<PageControls>,
    #[prop(into)] page_size: Signal<u32>,
    on_tab: Callback<DiscountPageTab>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
    on_page_size_change: Callback<u32>,
) -> impl IntoView {
    let navigator = RouterNavigator::new();
    let tabs = DiscountPageTab::ALL
        .iter()
        .map(|tab| (tab.code().to_string(), tab.label().to_string()))
        .collect::<Vec<_>>();

    view! {
        <section class="card">
            <div class="card__header">
                <TabBar
                    tabs=tabs
                    active=Signal::derive(move || active.get().code().to_string())
                    on_select=Callback::new(move |code: String| {
                        if let Some(tab) = DiscountPageTab::from_code(&code) {
                            on_tab.run(tab);
                        }
                    })
                />
            </div>

            <Table class="list-table">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell class="text-right">{move || detail_header(active.get())}</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let tab = active.get();
                        match rows.get() {
                            None => (0..SKELETON_ROWS)
                                .map(|_| view! {
                                    <TableRow>
                                        <TableCell><span class="skeleton skeleton--text"></span></TableCell>
                                        <TableCell><span class="skeleton skeleton--text"></span></TableCell>
                                    </TableRow>
                                })
                                .collect_view()
                                .into_any(),
                            Some(rows) if rows.is_empty() => view! {
                                <TableRow>
                                    <TableCell attr:colspan="2" class="table__empty">{empty_message(tab)}</TableCell>
                                </TableRow>
                            }
                            .into_any(),
                            Some(rows) => rows
                                .into_iter()
                                .map(|row| {
                                    let url = item_url(tab, &row.id);
                                    let class = if url.is_some() { "table__row--clickable" } else { "" };
                                    view! {
                                        <TableRow
                                            class=class
                                            on:click=move |_| {
                                                if let Some(url) = &url {
                                                    navigator.go(url);
                                                }
                                            }
                                        >
                                            <TableCell>{row.name}</TableCell>
                                            <TableCell class="text-right">{row.detail}</TableCell>
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
                controls=controls
                page_size=page_size
                on_previous=on_previous
                on_next=on_next
                on_page_size_change=on_page_size_change
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collections_are_not_linked() {
        assert_eq!(item_url(DiscountPageTab::Collections, "Q29sOjE="), None);
        assert_eq!(
            item_url(DiscountPageTab::Products, "UHJvZHVjdDox").as_deref(),
            Some("/products/UHJvZHVjdDox")
        );
    }

    #[test]
    fn test_detail_header_per_tab() {
        assert_eq!(detail_header(DiscountPageTab::Products), "Product type");
        assert_eq!(detail_header(DiscountPageTab::Collections), "Number of products");
    }
}
