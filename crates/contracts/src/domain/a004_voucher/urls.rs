use crate::domain::a003_sale::urls::{
    DiscountListDialog, DiscountListFilter, DiscountPageTab, DISCOUNT_SECTION,
};
use crate::shared::list_view::{
    escape_id, url_join, with_query, DetailViewState, ListViewState, QueryState,
};

pub fn voucher_section() -> String {
    url_join(&[DISCOUNT_SECTION, "vouchers"])
}

// ============================================================================
// List
// ============================================================================

crate::url_token! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub enum VoucherListSortField {
        #[default]
        Code => "code",
        MinSpent => "minSpent",
        StartDate => "startDate",
        EndDate => "endDate",
        Value => "value",
        Limit => "limit",
    }
}

impl VoucherListSortField {
    /// `VoucherSortField` value of the API
    pub fn graphql_field(&self) -> &'static str {
        match self {
            VoucherListSortField::Code => "CODE",
            VoucherListSortField::MinSpent => "MINIMUM_SPENT_AMOUNT",
            VoucherListSortField::StartDate => "START_DATE",
            VoucherListSortField::EndDate => "END_DATE",
            VoucherListSortField::Value => "VALUE",
            VoucherListSortField::Limit => "USAGE_LIMIT",
        }
    }
}

pub type VoucherListParams =
    ListViewState<DiscountListFilter, DiscountListDialog, VoucherListSortField>;

pub fn voucher_list_path() -> String {
    voucher_section()
}

pub fn voucher_list_url(params: Option<&VoucherListParams>) -> String {
    with_query(
        voucher_list_path(),
        params.map(QueryState::to_query).unwrap_or_default(),
    )
}

// ============================================================================
// Details
// ============================================================================

crate::url_token! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum VoucherDialog {
        AssignCategory => "assign-category",
        AssignCollection => "assign-collection",
        AssignCountry => "assign-country",
        AssignProduct => "assign-product",
        UnassignCategory => "unassign-category",
        UnassignCollection => "unassign-collection",
        UnassignProduct => "unassign-product",
        Remove => "remove",
    }
}

pub type VoucherParams = DetailViewState<VoucherDialog, DiscountPageTab>;

pub fn voucher_path(id: &str) -> String {
    url_join(&[&voucher_section(), id])
}

pub fn voucher_url(id: &str, params: Option<&VoucherParams>) -> String {
    with_query(
        voucher_path(&escape_id(id)),
        params.map(QueryState::to_query).unwrap_or_default(),
    )
}

pub fn voucher_add_path() -> String {
    url_join(&[&voucher_section(), "add"])
}

pub fn voucher_add_url() -> String {
    voucher_add_path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{decode_detail, decode_list, UrlToken};

    #[test]
    fn test_paths() {
        assert_eq!(voucher_list_path(), "/discounts/vouchers");
        assert_eq!(voucher_path("Vm91Y2hlcjox"), "/discounts/vouchers/Vm91Y2hlcjox");
        assert_eq!(voucher_add_url(), "/discounts/vouchers/add");
    }

    #[test]
    fn test_assign_country_dialog_is_voucher_only() {
        let params: VoucherParams = decode_detail("action=assign-country");
        assert_eq!(
            params.dialog.map(|d| d.kind),
            Some(VoucherDialog::AssignCountry)
        );
        assert_eq!(
            crate::domain::a003_sale::urls::SaleDialog::from_code("assign-country"),
            None
        );
    }

    #[test]
    fn test_list_sort_round_trip() {
        let params = VoucherListParams::default().with_sort_toggled(VoucherListSortField::Limit);
        let url = voucher_list_url(Some(&params));
        assert_eq!(url, "/discounts/vouchers?sort=limit&asc=true");
        let query = url.split_once('?').map(|(_, q)| q).unwrap_or_default();
        let decoded: VoucherListParams = decode_list(query);
        assert_eq!(decoded, params);
    }
}
