use crate::domain::a003_sale::api;
use crate::domain::a003_sale::ui::assigned_items::AssignedItemsCard;
use crate::shared::components::{ConfirmDialog, ErrorBanner, PageHeader};
use crate::shared::document::set_title;
use crate::shared::icons::icon;
use crate::shared::loader::Loader;
use crate::shared::mutation::MutationRunner;
use crate::shared::url_state::{use_query_state, use_route_id, RouterNavigator};
use contracts::domain::a003_sale::dto::{
    format_discount_value, AssignedItemRow, DiscountDetailsVariables, SaleDetails,
    SaleDetailsData,
};
use contracts::domain::a003_sale::urls::{
    sale_list_url, sale_url, DiscountPageTab, SaleDialog, SaleParams,
};
use contracts::shared::date::{format_date, format_optional_date};
use contracts::shared::list_view::{PageControls, PageInfo};
use leptos::prelude::*;
use thaw::*;

/// `/discounts/sales/:id`
#[component]
pub fn SaleDetailsPage() -> impl IntoView {
    let navigator = RouterNavigator::new();
    let id = use_route_id();
    let params = use_query_state::<SaleParams>();
    let loader = Loader::<SaleDetailsData>::new();
    let mutations = MutationRunner::new();

    // tab and dialog changes reuse the loaded sale
    let variables = Memo::new(move |_| {
        let id = id.get()?;
        Some(params.with(|p| DiscountDetailsVariables::new(&id, &p.pagination)))
    });
    Effect::new(move |_| {
        if let Some(variables) = variables.get() {
            loader.load(api::fetch_sale(variables));
        }
    });

    let sale = Signal::derive(move || -> Option<SaleDetails> {
        loader.data.with(|data| data.as_ref().and_then(|d| d.sale.clone()))
    });
    let currency = Signal::derive(move || {
        loader.data.with(|data| {
            data.as_ref()
                .and_then(|d| d.shop.as_ref())
                .map(|s| s.default_currency.clone())
        })
    });
    let title = Signal::derive(move || {
        sale.with(|s| s.as_ref().map(|s| s.name.clone()))
            .unwrap_or_default()
    });
    let active_tab = Signal::derive(move || params.with(|p| p.active_tab.unwrap_or_default()));
    let tab_data = Signal::derive(move || -> Option<(Vec<AssignedItemRow>, Option<PageInfo>)> {
        let tab = active_tab.get();
        sale.with(|s| s.as_ref().map(|s| s.catalogue.tab_rows(tab)))
    });

    Effect::new(move |_| {
        let title = title.get();
        if !title.is_empty() {
            set_title(&title);
        }
    });

    let apply = move |next: SaleParams| {
        if let Some(id) = id.get_untracked() {
            navigator.go(&sale_url(&id, Some(&next)));
        }
    };
    let page_info = move || tab_data.get_untracked().and_then(|(_, info)| info);

    let on_delete = move || {
        let Some(id) = id.get_untracked() else {
            return;
        };
        mutations.run(
            "Sale deleted",
            async move { api::delete_sale(id).await.map(|p| p.errors) },
            move || navigator.go(&sale_list_url(None)),
        );
    };

    view! {
        <div class="page details-page">
            <PageHeader title=title back_href=sale_list_url(None)>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| apply(params.get_untracked().with_dialog(SaleDialog::Remove, None))
                    disabled=Signal::derive(move || sale.with(|s| s.is_none()))
                >
                    {icon("delete")}
                    " Delete sale"
                </Button>
            </PageHeader>

            <ErrorBanner error=loader.error />

            <Show when=move || loader.data.with(|d| d.as_ref().is_some_and(|d| d.sale.is_none()))>
                <div class="alert alert--error">"Sale not found"</div>
            </Show>

            <section class="card">
                <h3 class="card__title">"General information"</h3>
                {move || match sale.get() {
                    Some(sale) => {
                        let value = format_discount_value(sale.value_type, sale.value, currency.get().as_deref());
                        view! {
                            <dl class="details-list">
                                <dt>"Name"</dt>
                                <dd>{sale.name.clone()}</dd>
                                <dt>"Value"</dt>
                                <dd>{value}</dd>
                                <dt>"Start date"</dt>
                                <dd>{format_date(&sale.start_date)}</dd>
                                <dt>"End date"</dt>
                                <dd>{format_optional_date(sale.end_date.as_deref())}</dd>
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
                        apply(SaleParams { pagination, ..current });
                    }
                })
                on_next=Callback::new(move |_| {
                    let current = params.get_untracked();
                    if let Some(pagination) = page_info().and_then(|info| current.pagination.next_page(&info)) {
                        apply(SaleParams { pagination, ..current });
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
                    params.with(|p| p.dialog.as_ref().is_some_and(|d| d.kind == SaleDialog::Remove))
                })
                title="Delete sale"
                message=Signal::derive(move || format!("Are you sure you want to delete {}?", title.get()))
                confirm_label="Delete"
                busy=mutations.busy
                on_confirm=Callback::new(move |_| on_delete())
                on_close=Callback::new(move |_| apply(params.get_untracked().without_dialog()))
            />
        </div>
    }
}
