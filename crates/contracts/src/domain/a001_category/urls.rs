use crate::shared::list_view::{
    escape_id, url_join, with_query, DetailViewState, ListViewState, QueryState, TabAction,
    TabDialog, UrlToken,
};

pub const CATEGORY_SECTION: &str = "/categories/";

// ============================================================================
// List
// ============================================================================

crate::url_token! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum CategoryListFilter {
        Query => "query",
    }
}

crate::url_token! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub enum CategoryListSortField {
        #[default]
        Name => "name",
        SubcategoryCount => "subcategoryCount",
        ProductCount => "productCount",
    }
}

impl CategoryListSortField {
    /// `CategorySortField` value of the API
    pub fn graphql_field(&self) -> &'static str {
        match self {
            CategoryListSortField::Name => "NAME",
            CategoryListSortField::SubcategoryCount => "SUBCATEGORY_COUNT",
            CategoryListSortField::ProductCount => "PRODUCT_COUNT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryListDialog {
    Remove,
    Tab(TabAction),
}

impl UrlToken for CategoryListDialog {
    const ALL: &'static [Self] = &[
        CategoryListDialog::Remove,
        CategoryListDialog::Tab(TabAction::SaveSearch),
        CategoryListDialog::Tab(TabAction::DeleteSearch),
    ];

    fn code(&self) -> &'static str {
        match self {
            CategoryListDialog::Remove => "remove",
            CategoryListDialog::Tab(action) => action.code(),
        }
    }
}

impl TabDialog for CategoryListDialog {
    fn tab(action: TabAction) -> Self {
        CategoryListDialog::Tab(action)
    }

    fn tab_action(&self) -> Option<TabAction> {
        match self {
            CategoryListDialog::Tab(action) => Some(*action),
            _ => None,
        }
    }
}

pub type CategoryListParams =
    ListViewState<CategoryListFilter, CategoryListDialog, CategoryListSortField>;

pub fn category_list_path() -> String {
    CATEGORY_SECTION.to_string()
}

pub fn category_list_url(params: Option<&CategoryListParams>) -> String {
    with_query(
        category_list_path(),
        params.map(QueryState::to_query).unwrap_or_default(),
    )
}

// ============================================================================
// Details
// ============================================================================

crate::url_token! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum CategoryDialog {
        Delete => "delete",
        DeleteCategories => "delete-categories",
        DeleteProducts => "delete-products",
    }
}

crate::url_token! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum CategoryPageTab {
        Categories => "categories",
        Products => "products",
    }
}

pub type CategoryParams = DetailViewState<CategoryDialog, CategoryPageTab>;

/// Path of a category; `id` is used as given
pub fn category_path(id: &str) -> String {
    url_join(&[CATEGORY_SECTION, id])
}

pub fn category_url(id: &str, params: Option<&CategoryParams>) -> String {
    with_query(
        category_path(&escape_id(id)),
        params.map(QueryState::to_query).unwrap_or_default(),
    )
}

// ============================================================================
// Create
// ============================================================================

/// `/categories/add` for a root category, `/categories/<parent>/add` otherwise
pub fn category_add_path(parent_id: Option<&str>) -> String {
    match parent_id {
        Some(parent_id) => url_join(&[CATEGORY_SECTION, parent_id, "add"]),
        None => url_join(&[CATEGORY_SECTION, "add"]),
    }
}

pub fn category_add_url(parent_id: Option<&str>) -> String {
    category_add_path(parent_id.map(escape_id).as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(category_list_path(), "/categories/");
        assert_eq!(category_path("42"), "/categories/42");
        assert_eq!(category_add_path(None), "/categories/add");
        assert_eq!(category_add_path(Some("7")), "/categories/7/add");
    }

    #[test]
    fn test_category_url_escapes_id() {
        assert_eq!(category_url("Q2F0ZWdvcnk6Mg==", None), "/categories/Q2F0ZWdvcnk6Mg%3D%3D");
        assert_eq!(category_add_url(Some("a/b")), "/categories/a%2Fb/add");
    }

    #[test]
    fn test_category_url_with_tab() {
        let params = CategoryParams::default().with_tab(CategoryPageTab::Products);
        assert_eq!(
            category_url("42", Some(&params)),
            "/categories/42?activeTab=products"
        );
    }

    #[test]
    fn test_list_url_dialog_tokens() {
        let params = CategoryListParams::default()
            .with_dialog(CategoryListDialog::Tab(TabAction::SaveSearch), None);
        assert_eq!(
            category_list_url(Some(&params)),
            "/categories/?action=save-search"
        );
        assert_eq!(category_list_url(None), "/categories/");
    }
}
