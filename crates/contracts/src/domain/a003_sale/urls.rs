use crate::shared::list_view::{
    escape_id, url_join, with_query, DetailViewState, ListViewState, QueryState, TabAction,
    TabDialog, UrlToken,
};

pub const DISCOUNT_SECTION: &str = "/discounts/";

crate::url_token! {
    /// Filters shared by both discount lists
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum DiscountListFilter {
        Query => "query",
    }
}

/// Dialogs shared by both discount lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountListDialog {
    Remove,
    Tab(TabAction),
}

impl UrlToken for DiscountListDialog {
    const ALL: &'static [Self] = &[
        DiscountListDialog::Remove,
        DiscountListDialog::Tab(TabAction::SaveSearch),
        DiscountListDialog::Tab(TabAction::DeleteSearch),
    ];

    fn code(&self) -> &'static str {
        match self {
            DiscountListDialog::Remove => "remove",
            DiscountListDialog::Tab(action) => action.code(),
        }
    }
}

impl TabDialog for DiscountListDialog {
    fn tab(action: TabAction) -> Self {
        DiscountListDialog::Tab(action)
    }

    fn tab_action(&self) -> Option<TabAction> {
        match self {
            DiscountListDialog::Tab(action) => Some(*action),
            _ => None,
        }
    }
}

crate::url_token! {
    /// Tabs of both discount detail pages
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum DiscountPageTab {
        #[default]
        Categories => "categories",
        Collections => "collections",
        Products => "products",
    }
}

impl DiscountPageTab {
    pub fn label(&self) -> &'static str {
        match self {
            DiscountPageTab::Categories => "Categories",
            DiscountPageTab::Collections => "Collections",
            DiscountPageTab::Products => "Products",
        }
    }
}

pub fn sale_section() -> String {
    url_join(&[DISCOUNT_SECTION, "sales"])
}

// ============================================================================
// List
// ============================================================================

crate::url_token! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub enum SaleListSortField {
        #[default]
        Name => "name",
        StartDate => "startDate",
        EndDate => "endDate",
        Value => "value",
    }
}

impl SaleListSortField {
    /// `SaleSortField` value of the API
    pub fn graphql_field(&self) -> &'static str {
        match self {
            SaleListSortField::Name => "NAME",
            SaleListSortField::StartDate => "START_DATE",
            SaleListSortField::EndDate => "END_DATE",
            SaleListSortField::Value => "VALUE",
        }
    }
}

pub type SaleListParams = ListViewState<DiscountListFilter, DiscountListDialog, SaleListSortField>;

pub fn sale_list_path() -> String {
    sale_section()
}

pub fn sale_list_url(params: Option<&SaleListParams>) -> String {
    with_query(
        sale_list_path(),
        params.map(QueryState::to_query).unwrap_or_default(),
    )
}

// ============================================================================
// Details
// ============================================================================

crate::url_token! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum SaleDialog {
        AssignCategory => "assign-category",
        AssignCollection => "assign-collection",
        AssignProduct => "assign-product",
        UnassignCategory => "unassign-category",
        UnassignCollection => "unassign-collection",
        UnassignProduct => "unassign-product",
        Remove => "remove",
    }
}

pub type SaleParams = DetailViewState<SaleDialog, DiscountPageTab>;

pub fn sale_path(id: &str) -> String {
    url_join(&[&sale_section(), id])
}

pub fn sale_url(id: &str, params: Option<&SaleParams>) -> String {
    with_query(
        sale_path(&escape_id(id)),
        params.map(QueryState::to_query).unwrap_or_default(),
    )
}

pub fn sale_add_path() -> String {
    url_join(&[&sale_section(), "add"])
}

pub fn sale_add_url() -> String {
    sale_add_path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::Pagination;

    #[test]
    fn test_paths() {
        assert_eq!(sale_list_path(), "/discounts/sales");
        assert_eq!(sale_path("U2FsZTox"), "/discounts/sales/U2FsZTox");
        assert_eq!(sale_add_url(), "/discounts/sales/add");
    }

    #[test]
    fn test_sale_url_with_tab_and_cursor() {
        let params = SaleParams {
            pagination: Pagination {
                after: Some("YXJyYXk6MA".into()),
                ..Pagination::default()
            },
            active_tab: Some(DiscountPageTab::Products),
            ..SaleParams::default()
        };
        assert_eq!(
            sale_url("U2FsZToy==", Some(&params)),
            "/discounts/sales/U2FsZToy%3D%3D?activeTab=products&after=YXJyYXk6MA"
        );
    }

    #[test]
    fn test_bulk_remove_url() {
        let params = SaleListParams::default().with_bulk_dialog(
            DiscountListDialog::Remove,
            vec!["U2FsZTox".to_string(), "U2FsZToy".to_string()],
        );
        assert_eq!(
            sale_list_url(Some(&params)),
            "/discounts/sales?action=remove&ids[0]=U2FsZTox&ids[1]=U2FsZToy"
        );
    }
}
