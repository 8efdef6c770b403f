use crate::domain::a003_sale::ui::assigned_items::AssignedItemsCard;
use crate::domain::a004_voucher::api;
use crate::shared::components::{ConfirmDialog, ErrorBanner, PageHeader};
use crate::shared::document::set_title;
use crate::shared::icons::icon;
use crate::shared::loader::Loader;
use crate::shared::mutation::MutationRunner;
use crate::shared::url_state::{use_query_state, use_route_id, RouterNavigator};
use contracts::domain::a003_sale::dto::{
    format_discount_value, AssignedItemRow, DiscountDetailsVariables,
};
use contracts::domain::a003_sale::urls::DiscountPageTab;
use contracts::domain::a004_voucher::dto::{VoucherDetails, VoucherDetailsData};
use contracts::domain::a004_voucher::urls::{
    voucher_list_url, voucher_url, VoucherDialog, VoucherParams,
};
use contracts::shared::date::{format_date, format_optional_date};
use contracts::shared::list_view::{PageControls, PageInfo};
use contracts::shared::money::format_money;
use leptos::prelude::*;
use thaw::*;

fn usage_limit_label(limit: Option<u32>) -> String {
    limit
        .map(|l| l.to_string())
        .unwrap_or_else(|| "Unlimited".to_string())
}

/// `/discounts/vouchers/:id`
#[component]
pub fn VoucherDetailsPage() -> impl IntoView {
    let navigator = RouterNavigator::new();
    let id = use_route_id();
    let params = use_query_state::<VoucherParams>();
    let loader = Loader::<VoucherDetailsData>::new();
    let mutations = MutationRunner::new();

    let variables = Memo::new(move |_| {
        let id = id.get()?;
        Some(params.with(|p| DiscountDetailsVariables::new(&id, &p.pagination)))
    });
    Effect::new(move |_| {
        if let Some(variables) = variables.get() {
            loader.load(api::fetch_voucher(variables));
        }
    });

    let voucher = Signal::derive(move || -> Option<VoucherDetails> {
        loader
            .data
            .with(|data| data.as_ref().and_then(|d| d.voucher.clone()))
    });
    let currency = Signal::derive(move || {
        loader.data.with(|data| {
            data.as_ref()
                .and_then(|d| d.shop.as_ref())
                .map(|s| s.default_currency.clone())
        })
    });
    let title = Signal::derive(move || {
        voucher
            .with(|v| v.as_ref().map(|v| v.code.clone()))
            .unwrap_or_default()
    });
    let active_tab = Signal::derive(move || params.with(|p| p.active_tab.unwrap_or_default()));
    let tab_data = Signal::derive(move || -> Option<(Vec<AssignedItemRow>, Option<PageInfo>)> {
        let tab = active_tab.get();
        voucher.with(|v| v.as_ref().map(|v| v.catalogue.tab_rows(tab)))
    });

    Effect::new(move |_| {
        let title = title.get();
        if !title.is_empty() {
            set_title(&title);
        }
    });

    let apply = move |next: VoucherParams| {
        if let Some(id) = id.get_untracked() {
            navigator.go(&voucher_url(&id, Some(&next)));
        }
    };
    let page_info = move || tab_data.get_untracked().and_then(|(_, info)| info);

    let on_delete = move || {
        let Some(id) = id.get_untracked() else {
            return;
        };
        mutations.run(
            "Voucher deleted",
            async move { api::delete_voucher(id).await.map(|p| p.errors) },
            move || navigator.go(&voucher_list_url(None)),
        );
    };

    view! {
        <div class="page details-page">
            <PageHeader title=title back_href=voucher_list_url(None)>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| apply(params.get_untracked().with_dialog(VoucherDialog::Remove, None))
                    disabled=Signal::derive(move || voucher.with(|v| v.is_none()))
                >
                    {icon("delete")}
                    " Delete voucher"
                </Button>
            </PageHeader>

            <ErrorBanner error=loader.error />

            <Show when=move || loader.data.with(|d| d.as_ref().is_some_and(|d| d.voucher.is_none()))>
                <div class="alert alert--error">"Voucher not found"</div>
            </Show>

            <section class="card">
                <h3 class="card__title">"General information"</h3>
                {move || match voucher.get() {
                    Some(voucher) => {
                        let value = format_discount_value(
                            voucher.discount_value_type,
                            voucher.discount_value,
                            currency.get().as_deref(),
                        );
                        view! {
                            <dl class="details-list">
                                <dt>"Code"</dt>
                                <dd>{voucher.code.clone()}</dd>
                                <dt>"Value"</dt>
                                <dd>{value}</dd>
                                <dt>"Minimum order value"</dt>
                                <dd>{voucher.min_spent.as_ref().map(format_money).unwrap_or_else(|| "-".to_string())}</dd>
                                <dt>"Usage limit"</dt>
                                <dd>{usage_limit_label(voucher.usage_limit)}</dd>
                                <dt>"Countries"</dt>
                                <dd>{voucher.countries_label()}</dd>
                                <dt>"Start date"</dt>
                                <dd>{format_date(&voucher.start_date)}</dd>
                                <dt>"End date"</dt>
                                <dd>{format_optional_date(voucher.end_date.as_deref())}</dd>
                            </dl>
                        }
                        .into_any()
                    }
                    None => view! { <span class="skeleton skeleton--block"></span> }.into_any(),
                }}
            </section>

            <AssignedItemsCard
                active=active_tab
                rows=Signal::derive(move || tab_data.get().map(|(rows, _)| rows))
                controls=Signal::derive(move || {
                    let info = tab_data.with(|data| data.as_ref().and_then(|(_, info)| info.clone()));
                    PageControls::new(info.as_ref(), loader.loading.get())
                })
                page_size=Signal::derive(move || params.with(|p| p.pagination.page_size()))
                on_tab=Callback::new(move |tab: DiscountPageTab| apply(params.get_untracked().with_tab(tab)))
                on_previous=Callback::new(move |_| {
                    let current = params.get_untracked();
                    if let Some(pagination) = page_info().and_then(|info| current.pagination.previous_page(&info)) {
                        apply(VoucherParams { pagination, ..current });
                    }
                })
                on_next=Callback::new(move |_| {
                    let current = params.get_untracked();
                    if let Some(pagination) = page_info().and_then(|info| current.pagination.next_page(&info)) {
                        apply(VoucherParams { pagination, ..current });
                    }
                })
                on_page_size_change=Callback::new(move |rows| {
                    let mut next = params.get_untracked();
                    next.pagination.rows = Some(rows);
                    next.pagination.reset_cursors();
                    apply(next);
                })
            />

            <ConfirmDialog
                open=Signal::derive(move || {
                    params.with(|p| p.dialog.as_ref().is_some_and(|d| d.kind == VoucherDialog::Remove))
                })
                title="Delete voucher"
                message=Signal::derive(move || format!("Are you sure you want to delete voucher {}?", title.get()))
                confirm_label="Delete"
                busy=mutations.busy
                on_confirm=Callback::new(move |_| on_delete())
                on_close=Callback::new(move |_| apply(params.get_untracked().without_dialog()))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_limit_label() {
        assert_eq!(usage_limit_label(Some(100)), "100");
        assert_eq!(usage_limit_label(None), "Unlimited");
    }
}
