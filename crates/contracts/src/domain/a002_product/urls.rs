use crate::shared::list_view::{
    escape_id, url_join, with_query, DetailViewState, ListViewState, NoTab, QueryState,
    TabAction, TabDialog, UrlToken,
};

pub const PRODUCT_SECTION: &str = "/products/";

// ============================================================================
// List
// ============================================================================

crate::url_token! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum ProductListFilter {
        Query => "query",
        Status => "status",
        PriceFrom => "priceFrom",
        PriceTo => "priceTo",
    }
}

crate::url_token! {
    /// Values of the `status` filter
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ProductStatusFilter {
        Published => "published",
        Hidden => "hidden",
    }
}

impl ProductStatusFilter {
    pub fn label(&self) -> &'static str {
        match self {
            ProductStatusFilter::Published => "Published",
            ProductStatusFilter::Hidden => "Hidden",
        }
    }

    pub fn is_published(&self) -> bool {
        matches!(self, ProductStatusFilter::Published)
    }
}

crate::url_token! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub enum ProductListSortField {
        #[default]
        Name => "name",
        ProductType => "productType",
        Status => "status",
        Price => "price",
    }
}

impl ProductListSortField {
    /// `ProductOrderField` value of the API
    pub fn graphql_field(&self) -> &'static str {
        match self {
            ProductListSortField::Name => "NAME",
            ProductListSortField::ProductType => "TYPE",
            ProductListSortField::Status => "PUBLISHED",
            ProductListSortField::Price => "PRICE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductListDialog {
    Publish,
    Unpublish,
    Delete,
    Tab(TabAction),
}

impl UrlToken for ProductListDialog {
    const ALL: &'static [Self] = &[
        ProductListDialog::Publish,
        ProductListDialog::Unpublish,
        ProductListDialog::Delete,
        ProductListDialog::Tab(TabAction::SaveSearch),
        ProductListDialog::Tab(TabAction::DeleteSearch),
    ];

    fn code(&self) -> &'static str {
        match self {
            ProductListDialog::Publish => "publish",
            ProductListDialog::Unpublish => "unpublish",
            ProductListDialog::Delete => "delete",
            ProductListDialog::Tab(action) => action.code(),
        }
    }
}

impl TabDialog for ProductListDialog {
    fn tab(action: TabAction) -> Self {
        ProductListDialog::Tab(action)
    }

    fn tab_action(&self) -> Option<TabAction> {
        match self {
            ProductListDialog::Tab(action) => Some(*action),
            _ => None,
        }
    }
}

pub type ProductListParams =
    ListViewState<ProductListFilter, ProductListDialog, ProductListSortField>;

pub fn product_list_path() -> String {
    PRODUCT_SECTION.to_string()
}

pub fn product_list_url(params: Option<&ProductListParams>) -> String {
    with_query(
        product_list_path(),
        params.map(QueryState::to_query).unwrap_or_default(),
    )
}

// ============================================================================
// Details
// ============================================================================

crate::url_token! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ProductDialog {
        Remove => "remove",
    }
}

pub type ProductParams = DetailViewState<ProductDialog, NoTab>;

pub fn product_path(id: &str) -> String {
    url_join(&[PRODUCT_SECTION, id])
}

pub fn product_url(id: &str, params: Option<&ProductParams>) -> String {
    with_query(
        product_path(&escape_id(id)),
        params.map(QueryState::to_query).unwrap_or_default(),
    )
}

pub fn product_add_path() -> String {
    url_join(&[PRODUCT_SECTION, "add"])
}

pub fn product_add_url() -> String {
    product_add_path()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(product_list_path(), "/products/");
        assert_eq!(product_path("UHJvZHVjdDo3Mg=="), "/products/UHJvZHVjdDo3Mg==");
        assert_eq!(product_add_url(), "/products/add");
    }

    #[test]
    fn test_product_url_with_dialog() {
        let params = ProductParams::default().with_dialog(ProductDialog::Remove, None);
        assert_eq!(
            product_url("UHJvZHVjdDo3Mg==", Some(&params)),
            "/products/UHJvZHVjdDo3Mg%3D%3D?action=remove"
        );
    }

    #[test]
    fn test_list_url_with_filters_and_sort() {
        let params = ProductListParams::default()
            .with_filter(ProductListFilter::Status, "published")
            .with_filter(ProductListFilter::PriceFrom, "10")
            .with_sort_toggled(ProductListSortField::Price)
            .with_sort_toggled(ProductListSortField::Price);
        assert_eq!(
            product_list_url(Some(&params)),
            "/products/?sort=price&asc=false&priceFrom=10&status=published"
        );
    }

    #[test]
    fn test_status_filter_codes() {
        assert_eq!(
            ProductStatusFilter::from_code("hidden"),
            Some(ProductStatusFilter::Hidden)
        );
        assert!(ProductStatusFilter::Published.is_published());
    }
}
