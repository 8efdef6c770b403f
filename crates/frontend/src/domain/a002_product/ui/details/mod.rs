use crate::domain::a002_product::api;
use crate::shared::components::{ConfirmDialog, ErrorBanner, PageHeader};
use crate::shared::document::set_title;
use crate::shared::icons::icon;
use crate::shared::loader::Loader;
use crate::shared::mutation::MutationRunner;
use crate::shared::url_state::{use_query_state, use_route_id, RouterNavigator};
use contracts::domain::a001_category::urls::category_url;
use contracts::domain::a002_product::dto::{
    ProductDetails, ProductDetailsData, NOT_PUBLISHED_LABEL, PUBLISHED_LABEL,
};
use contracts::domain::a002_product::urls::{
    product_list_url, product_url, ProductDialog, ProductParams,
};
use contracts::shared::money::format_money;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

fn is_remove_open(params: &ProductParams) -> bool {
    params
        .dialog
        .as_ref()
        .is_some_and(|d| d.kind == ProductDialog::Remove)
}

/// `/products/:id`
#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let navigator = RouterNavigator::new();
    let id = use_route_id();
    let params = use_query_state::<ProductParams>();
    let loader = Loader::<ProductDetailsData>::new();
    let mutations = MutationRunner::new();

    Effect::new(move |_| {
        if let Some(id) = id.get() {
            loader.load(api::fetch_product(id));
        }
    });

    let product = Signal::derive(move || -> Option<ProductDetails> {
        loader
            .data
            .with(|data| data.as_ref().and_then(|d| d.product.clone()))
    });
    let not_found = move || {
        loader
            .data
            .with(|data| data.as_ref().is_some_and(|d| d.product.is_none()))
    };
    let title = Signal::derive(move || {
        product
            .with(|p| p.as_ref().map(|p| p.name.clone()))
            .unwrap_or_default()
    });

    Effect::new(move |_| {
        let title = title.get();
        if !title.is_empty() {
            set_title(&title);
        }
    });

    let apply = move |next: ProductParams| {
        if let Some(id) = id.get_untracked() {
            navigator.go(&product_url(&id, Some(&next)));
        }
    };

    let on_delete = move || {
        let Some(id) = id.get_untracked() else {
            return;
        };
        mutations.run(
            "Product deleted",
            async move { api::delete_product(id).await.map(|p| p.errors) },
            move || navigator.go(&product_list_url(None)),
        );
    };

    view! {
        <div class="page details-page">
            <PageHeader title=title back_href=product_list_url(None)>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| apply(params.get_untracked().with_dialog(ProductDialog::Remove, None))
                    disabled=Signal::derive(move || product.with(|p| p.is_none()))
                >
                    {icon("delete")}
                    " Delete product"
                </Button>
            </PageHeader>

            <ErrorBanner error=loader.error />

            <Show when=not_found>
                <div class="alert alert--error">"Product not found"</div>
            </Show>

            <section class="card">
                <h3 class="card__title">"General information"</h3>
                {move || match product.get() {
                    Some(product) => {
                        let category = product.category.clone().map(|c| {
                            let url = category_url(&c.id, None);
                            view! { <A href=url>{c.name}</A> }
                        });
                        view! {
                            <div class="details-media">
                                {product.thumbnail.as_ref().map(|t| view! {
                                    <img class="details-media__image" src=t.url.clone() alt="" />
                                })}
                                <dl class="details-list">
                                    <dt>"Name"</dt>
                                    <dd>{product.name.clone()}</dd>
                                    <dt>"Product type"</dt>
                                    <dd>{product.product_type.as_ref().map(|t| t.name.clone()).unwrap_or_else(|| "-".to_string())}</dd>
                                    <dt>"Category"</dt>
                                    <dd>{category}</dd>
                                    <dt>"Price"</dt>
                                    <dd>{product.base_price.as_ref().map(format_money).unwrap_or_else(|| "-".to_string())}</dd>
                                    <dt>"Visibility"</dt>
                                    <dd>
                                        <Badge
                                            appearance=BadgeAppearance::Tint
                                            color=if product.is_published { BadgeColor::Success } else { BadgeColor::Danger }
                                        >
                                            {if product.is_published { PUBLISHED_LABEL } else { NOT_PUBLISHED_LABEL }}
                                        </Badge>
                                    </dd>
                                </dl>
                            </div>
                        }
                        .into_any()
                    }
                    None => view! { <span class="skeleton skeleton--block"></span> }.into_any(),
                }}
            </section>

            <ConfirmDialog
                open=Signal::derive(move || params.with(is_remove_open))
                title="Delete product"
                message=Signal::derive(move || format!("Are you sure you want to delete {}?", title.get()))
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
    use contracts::shared::list_view::QueryState;

    #[test]
    fn test_remove_dialog_read_from_query() {
        assert!(is_remove_open(&ProductParams::from_query("action=remove")));
        assert!(!is_remove_open(&ProductParams::from_query("")));
    }
}
