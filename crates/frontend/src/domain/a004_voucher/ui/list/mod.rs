use crate::domain::a004_voucher::api;
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
use contracts::domain::a003_sale::dto::format_discount_value;
use contracts::domain::a003_sale::urls::{DiscountListDialog, DiscountListFilter};
use contracts::domain::a004_voucher::dto::{VoucherListData, VoucherListItem, VoucherListVariables};
use contracts::domain::a004_voucher::urls::{
    voucher_list_url, voucher_url, VoucherListParams, VoucherListSortField,
};
use contracts::shared::date::{format_date, format_optional_date};
use contracts::shared::grid::Selection;
use contracts::shared::list_view::{PageControls, PageInfo, TabAction};
use leptos::prelude::*;
use thaw::*;

const VOUCHERS_TITLE: &str = "Vouchers";

/// localStorage key of the saved searches
const VOUCHER_SEARCHES_STORAGE_KEY: &str = "voucherListFilters";

/// Checkbox plus six data columns
const VOUCHER_COLUMNS: usize = 7;

fn bulk_delete_message(count: usize) -> String {
    match count {
        1 => "Are you sure you want to delete this voucher?".to_string(),
        n => format!("Are you sure you want to delete {} vouchers?", n),
    }
}

/// `/discounts/vouchers`
#[component]
pub fn VoucherListPage() -> impl IntoView {
    set_title(VOUCHERS_TITLE);

    let navigator = RouterNavigator::new();
    let searches = create_saved_searches(VOUCHER_SEARCHES_STORAGE_KEY);
    let query = use_query_state::<VoucherListParams>();
    // a selected preset overrides the filters of the address bar
    let params = Memo::new(move |_| searches.with(|s| query.get().with_saved_search_applied(s)));
    let loader = Loader::<VoucherListData>::new();
    let selection = RwSignal::new(Selection::default());
    let mutations = MutationRunner::new();

    let apply = move |next: VoucherListParams| navigator.go(&voucher_list_url(Some(&next)));

    let variables = Memo::new(move |_| VoucherListVariables::from_params(&params.get()));
    Effect::new(move |_| {
        let variables = variables.get();
        selection.set(Selection::default());
        loader.load(api::fetch_vouchers(variables));
    });
    let reload = move || loader.load(api::fetch_vouchers(variables.get_untracked()));

    let rows = Signal::derive(move || {
        loader.data.with(|data| {
            data.as_ref()
                .and_then(|d| d.vouchers.as_ref())
                .map(|c| c.nodes())
        })
    });
    let currency = Signal::derive(move || {
        loader.data.with(|data| {
            data.as_ref()
                .and_then(|d| d.shop.as_ref())
                .map(|s| s.default_currency.clone())
        })
    });
    let page_info = Signal::derive(move || -> Option<PageInfo> {
        loader.data.with(|data| {
            data.as_ref()
                .and_then(|d| d.vouchers.as_ref())
                .and_then(|c| c.page_info.clone())
        })
    });
    let loaded_ids = move || -> Vec<String> {
        rows.with(|rows| rows.iter().flatten().map(|row| row.id.clone()).collect())
    };

    let sort_header = move |label: &'static str, field: VoucherListSortField, right: bool| {
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
            "Vouchers deleted",
            async move { api::bulk_delete_vouchers(ids).await.map(|p| p.errors) },
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
            <PageHeader title=VOUCHERS_TITLE.to_string() />

            <ErrorBanner error=loader.error />

            <SavedSearchTabs
                searches=searches
                all_label="All vouchers"
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
                        params.with(|p| p.filter(DiscountListFilter::Query).unwrap_or_default().to_string())
                    })
                    placeholder="Search vouchers"
                    on_commit=Callback::new(move |value: String| {
                        apply(params.get_untracked().with_filter(DiscountListFilter::Query, value))
                    })
                />
                <Show when=move || selection.with(|s| !s.is_empty())>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            let ids = selection.with_untracked(|s| s.ids().to_vec());
                            apply(params.get_untracked().with_bulk_dialog(DiscountListDialog::Remove, ids));
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
                        {sort_header("Code", VoucherListSortField::Code, false)}
                        {sort_header("Min. spent", VoucherListSortField::MinSpent, true)}
                        {sort_header("Starts", VoucherListSortField::StartDate, true)}
                        {sort_header("Ends", VoucherListSortField::EndDate, true)}
                        {sort_header("Value", VoucherListSortField::Value, true)}
                        {sort_header("Uses", VoucherListSortField::Limit, true)}
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
                                    {(1..VOUCHER_COLUMNS)
                                        .map(|_| view! {
                                            <TableCell><span class="skeleton skeleton--text"></span></TableCell>
                                        })
                                        .collect_view()}
                                </TableRow>
                            })
                            .collect_view()
                            .into_any(),
                        Some(rows) if rows.is_empty() => view! {
                            <TableRow>
                                <TableCell attr:colspan=VOUCHER_COLUMNS.to_string() class="table__empty">
                                    "No vouchers found"
                                </TableCell>
                            </TableRow>
                        }
                        .into_any(),
                        Some(rows) => {
                            let currency = currency.get();
                            rows.into_iter()
                                .map(|row: VoucherListItem| {
                                    let url = voucher_url(&row.id, None);
                                    let check_id = row.id.clone();
                                    let toggle_id = row.id.clone();
                                    let value = format_discount_value(
                                        row.discount_value_type,
                                        row.discount_value,
                                        currency.as_deref(),
                                    );
                                    let code = row.code.clone();
                                    let min_spent = row.min_spent_label();
                                    let start_date = format_date(&row.start_date);
                                    let end_date = format_optional_date(row.end_date.as_deref());
                                    let usage_limit = row.usage_limit_label();
                                    view! {
                                        <TableRow class="table__row--clickable" on:click=move |_| navigator.go(&url)>
                                            <TableCellCheckbox
                                                checked=Signal::derive(move || selection.with(|s| s.is_selected(&check_id)))
                                                on_change=Callback::new(move |checked| {
                                                    selection.update(|s| s.set(&toggle_id, checked))
                                                })
                                            />
                                            <TableCell>{code.clone()}</TableCell>
                                            <TableCell class="text-right">{min_spent.clone()}</TableCell>
                                            <TableCell class="text-right">{start_date.clone()}</TableCell>
                                            <TableCell class="text-right">{end_date.clone()}</TableCell>
                                            <TableCell class="text-right">{value.clone()}</TableCell>
                                            <TableCell class="text-right">{usage_limit.clone()}</TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
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
                        apply(VoucherListParams { pagination, ..current });
                    }
                })
                on_next=Callback::new(move |_| {
                    let current = params.get_untracked();
                    if let Some(pagination) = page_info
                        .get_untracked()
                        .and_then(|info| current.pagination.next_page(&info))
                    {
                        apply(VoucherListParams { pagination, ..current });
                    }
                })
                on_page_size_change=Callback::new(move |rows| apply(params.get_untracked().with_page_size(rows)))
            />

            <ConfirmDialog
                open=Signal::derive(move || params.with(|p| p.is_dialog_open(DiscountListDialog::Remove)))
                title="Delete vouchers"
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
    fn test_bulk_delete_message() {
        assert_eq!(
            bulk_delete_message(1),
            "Are you sure you want to delete this voucher?"
        );
        assert_eq!(
            bulk_delete_message(5),
            "Are you sure you want to delete 5 vouchers?"
        );
    }
}
