use crate::shared::icons::icon;
use contracts::domain::a001_category::urls::{category_list_url, CATEGORY_SECTION};
use contracts::domain::a002_product::urls::{product_list_url, PRODUCT_SECTION};
use contracts::domain::a003_sale::urls::{sale_list_url, sale_section};
use contracts::domain::a004_voucher::urls::{voucher_list_url, voucher_section};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

struct MenuItem {
    label: &'static str,
    icon: &'static str,
    href: String,
    /// Path prefix that marks the item active
    section: String,
}

fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            label: "Products",
            icon: "products",
            href: product_list_url(None),
            section: PRODUCT_SECTION.to_string(),
        },
        MenuItem {
            label: "Categories",
            icon: "categories",
            href: category_list_url(None),
            section: CATEGORY_SECTION.to_string(),
        },
        MenuItem {
            label: "Sales",
            icon: "discounts",
            href: sale_list_url(None),
            section: sale_section(),
        },
        MenuItem {
            label: "Vouchers",
            icon: "discounts",
            href: voucher_list_url(None),
            section: voucher_section(),
        },
    ]
}

fn is_active(pathname: &str, section: &str) -> bool {
    let section = section.trim_end_matches('/');
    pathname == section || pathname.starts_with(&format!("{}/", section))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="sidebar">
            {menu_items()
                .into_iter()
                .map(|item| {
                    let section = item.section.clone();
                    view! {
                        <A href=item.href>
                            <span class=move || {
                                if is_active(&location.pathname.get(), &section) {
                                    "sidebar__item sidebar__item--active"
                                } else {
                                    "sidebar__item"
                                }
                            }>
                                {icon(item.icon)}
                                <span class="sidebar__label">{item.label}</span>
                            </span>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active_matches_section_and_children() {
        assert!(is_active("/products", "/products/"));
        assert!(is_active("/products/UHJvZHVjdDox", "/products/"));
        assert!(!is_active("/productsx", "/products/"));
        assert!(is_active("/discounts/sales/U2FsZTox", "/discounts/sales"));
        assert!(!is_active("/discounts/vouchers", "/discounts/sales"));
    }
}
