use super::urls::VoucherListParams;
use crate::domain::a003_sale::dto::{AssignedCatalogue, DiscountValueType, ShopCurrency};
use crate::domain::a003_sale::urls::DiscountListFilter;
use crate::shared::graphql::{
    BulkPayload, Connection, ErrorsPayload, SearchFilterInput, SortingInput,
};
use crate::shared::list_view::QueryPagination;
use crate::shared::money::{format_money, Money};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryRef {
    pub code: String,
    pub country: String,
}

// ============================================================================
// List
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherListItem {
    pub id: String,
    pub code: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub usage_limit: Option<u32>,
    pub discount_value_type: DiscountValueType,
    pub discount_value: f64,
    #[serde(default)]
    pub min_spent: Option<Money>,
    #[serde(default)]
    pub countries: Vec<CountryRef>,
}

impl VoucherListItem {
    pub fn min_spent_label(&self) -> String {
        self.min_spent
            .as_ref()
            .map(format_money)
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn usage_limit_label(&self) -> String {
        self.usage_limit
            .map(|limit| limit.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoucherListVariables {
    #[serde(flatten)]
    pub pagination: QueryPagination,
    pub filter: SearchFilterInput,
    pub sort: SortingInput,
}

impl VoucherListVariables {
    pub fn from_params(params: &VoucherListParams) -> Self {
        Self {
            pagination: QueryPagination::from(&params.pagination),
            filter: SearchFilterInput::new(params.filter(DiscountListFilter::Query)),
            sort: SortingInput::new(params.sort.field.graphql_field(), params.sort.ascending),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VoucherListData {
    pub vouchers: Option<Connection<VoucherListItem>>,
    #[serde(default)]
    pub shop: Option<ShopCurrency>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherBulkDeleteData {
    pub voucher_bulk_delete: BulkPayload,
}

// ============================================================================
// Details
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherDetails {
    pub id: String,
    pub code: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub usage_limit: Option<u32>,
    pub discount_value_type: DiscountValueType,
    pub discount_value: f64,
    #[serde(default)]
    pub min_spent: Option<Money>,
    #[serde(default)]
    pub countries: Vec<CountryRef>,
    #[serde(flatten)]
    pub catalogue: AssignedCatalogue,
}

impl VoucherDetails {
    pub fn countries_label(&self) -> String {
        if self.countries.is_empty() {
            return "-".to_string();
        }
        self.countries
            .iter()
            .map(|c| c.country.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VoucherDetailsData {
    pub voucher: Option<VoucherDetails>,
    #[serde(default)]
    pub shop: Option<ShopCurrency>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherDeleteData {
    pub voucher_delete: ErrorsPayload,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::decode_list;
    use serde_json::json;

    #[test]
    fn test_list_item_labels() {
        let item: VoucherListItem = serde_json::from_value(json!({
            "id": "Vm91Y2hlcjox",
            "code": "FREE2019",
            "startDate": "2019-01-01",
            "endDate": null,
            "usageLimit": null,
            "discountValueType": "FIXED",
            "discountValue": 10.0,
            "minSpent": { "amount": 50.0, "currency": "USD" },
            "countries": []
        }))
        .expect("valid voucher");
        assert_eq!(item.min_spent_label(), "50.00 USD");
        assert_eq!(item.usage_limit_label(), "-");
    }

    #[test]
    fn test_list_variables_search() {
        let params: VoucherListParams = decode_list("query=FREE&sort=minSpent&asc=false");
        let variables = VoucherListVariables::from_params(&params);
        assert_eq!(
            serde_json::to_value(&variables).expect("serializable"),
            json!({
                "first": 20,
                "filter": { "search": "FREE" },
                "sort": { "direction": "DESC", "field": "MINIMUM_SPENT_AMOUNT" }
            })
        );
    }
}
