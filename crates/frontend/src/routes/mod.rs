//! Route table of the dashboard.
//!
//! Static segments (`add`) are declared before the `:id` routes next to them.

use crate::domain::a001_category::ui::create::CategoryCreatePage;
use crate::domain::a001_category::ui::details::CategoryDetailsPage;
use crate::domain::a001_category::ui::list::CategoryListPage;
use crate::domain::a002_product::ui::details::ProductDetailsPage;
use crate::domain::a002_product::ui::list::ProductListPage;
use crate::domain::a003_sale::ui::details::SaleDetailsPage;
use crate::domain::a003_sale::ui::list::SaleListPage;
use crate::domain::a004_voucher::ui::details::VoucherDetailsPage;
use crate::domain::a004_voucher::ui::list::VoucherListPage;
use crate::layout::Shell;
use contracts::domain::a002_product::urls::product_list_url;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page-header__title">"Page not found"</h1>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=product_list_url(None) /> } />

                    <Route path=path!("/categories") view=CategoryListPage />
                    <Route path=path!("/categories/add") view=CategoryCreatePage />
                    <Route path=path!("/categories/:id/add") view=CategoryCreatePage />
                    <Route path=path!("/categories/:id") view=CategoryDetailsPage />

                    <Route path=path!("/products") view=ProductListPage />
                    <Route path=path!("/products/:id") view=ProductDetailsPage />

                    <Route path=path!("/discounts/sales") view=SaleListPage />
                    <Route path=path!("/discounts/sales/:id") view=SaleDetailsPage />
                    <Route path=path!("/discounts/vouchers") view=VoucherListPage />
                    <Route path=path!("/discounts/vouchers/:id") view=VoucherDetailsPage />
                </Routes>
            </Shell>
        </Router>
    }
}
