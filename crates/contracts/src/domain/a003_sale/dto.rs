use super::urls::{DiscountListFilter, DiscountPageTab, SaleListParams};
use crate::shared::graphql::{
    BulkPayload, Connection, CountableTotal, ErrorsPayload, SearchFilterInput, SortingInput,
};
use crate::shared::list_view::{PageInfo, Pagination, QueryPagination};
use crate::shared::money::{format_money, format_number_with_decimals, Money};
use serde::{Deserialize, Serialize};

// ============================================================================
// Discount values
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountValueType {
    Fixed,
    Percentage,
}

/// `12%` for percentage discounts, a money token for fixed ones.
/// A fixed value without a known currency is shown as a bare number.
pub fn format_discount_value(
    value_type: DiscountValueType,
    value: f64,
    currency: Option<&str>,
) -> String {
    match (value_type, currency) {
        (DiscountValueType::Percentage, _) => {
            let decimals = if value.fract() == 0.0 { 0 } else { 2 };
            format!("{}%", format_number_with_decimals(value, decimals))
        }
        (DiscountValueType::Fixed, Some(currency)) => format_money(&Money::new(value, currency)),
        (DiscountValueType::Fixed, None) => format_number_with_decimals(value, 2),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopCurrency {
    pub default_currency: String,
}

// ============================================================================
// Assigned catalogue
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssignedCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub products: Option<CountableTotal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssignedCollection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub products: Option<CountableTotal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NameRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedProduct {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub product_type: Option<NameRef>,
    #[serde(default)]
    pub is_published: Option<bool>,
}

/// Row of the assigned-items table of a discount detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedItemRow {
    pub id: String,
    pub name: String,
    /// Product count or product type, depending on the tab
    pub detail: String,
}

/// Catalogue connections shared by sale and voucher details
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssignedCatalogue {
    #[serde(default)]
    pub categories: Option<Connection<AssignedCategory>>,
    #[serde(default)]
    pub collections: Option<Connection<AssignedCollection>>,
    #[serde(default)]
    pub products: Option<Connection<AssignedProduct>>,
}

impl AssignedCatalogue {
    /// Rows and page info of the connection behind `tab`
    pub fn tab_rows(&self, tab: DiscountPageTab) -> (Vec<AssignedItemRow>, Option<PageInfo>) {
        fn product_count(total: Option<CountableTotal>) -> String {
            total
                .map(|t| t.total_count.to_string())
                .unwrap_or_else(|| "-".to_string())
        }

        match tab {
            DiscountPageTab::Categories => match &self.categories {
                Some(connection) => (
                    connection
                        .edges
                        .iter()
                        .map(|edge| AssignedItemRow {
                            id: edge.node.id.clone(),
                            name: edge.node.name.clone(),
                            detail: product_count(edge.node.products),
                        })
                        .collect(),
                    connection.page_info.clone(),
                ),
                None => (Vec::new(), None),
            },
            DiscountPageTab::Collections => match &self.collections {
                Some(connection) => (
                    connection
                        .edges
                        .iter()
                        .map(|edge| AssignedItemRow {
                            id: edge.node.id.clone(),
                            name: edge.node.name.clone(),
                            detail: product_count(edge.node.products),
                        })
                        .collect(),
                    connection.page_info.clone(),
                ),
                None => (Vec::new(), None),
            },
            DiscountPageTab::Products => match &self.products {
                Some(connection) => (
                    connection
                        .edges
                        .iter()
                        .map(|edge| AssignedItemRow {
                            id: edge.node.id.clone(),
                            name: edge.node.name.clone(),
                            detail: edge
                                .node
                                .product_type
                                .as_ref()
                                .map(|t| t.name.clone())
                                .unwrap_or_else(|| "-".to_string()),
                        })
                        .collect(),
                    connection.page_info.clone(),
                ),
                None => (Vec::new(), None),
            },
        }
    }
}

/// Variables of a discount detail query; one cursor pair drives all three
/// assigned-item connections
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscountDetailsVariables {
    pub id: String,
    #[serde(flatten)]
    pub pagination: QueryPagination,
}

impl DiscountDetailsVariables {
    pub fn new(id: &str, pagination: &Pagination) -> Self {
        Self {
            id: id.to_string(),
            pagination: QueryPagination::from(pagination),
        }
    }
}

// ============================================================================
// List
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleListItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub value_type: DiscountValueType,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaleListVariables {
    #[serde(flatten)]
    pub pagination: QueryPagination,
    pub filter: SearchFilterInput,
    pub sort: SortingInput,
}

impl SaleListVariables {
    pub fn from_params(params: &SaleListParams) -> Self {
        Self {
            pagination: QueryPagination::from(&params.pagination),
            filter: SearchFilterInput::new(params.filter(DiscountListFilter::Query)),
            sort: SortingInput::new(params.sort.field.graphql_field(), params.sort.ascending),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaleListData {
    pub sales: Option<Connection<SaleListItem>>,
    #[serde(default)]
    pub shop: Option<ShopCurrency>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleBulkDeleteData {
    pub sale_bulk_delete: BulkPayload,
}

// ============================================================================
// Details
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDetails {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub value_type: DiscountValueType,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    pub value: f64,
    #[serde(flatten)]
    pub catalogue: AssignedCatalogue,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaleDetailsData {
    pub sale: Option<SaleDetails>,
    #[serde(default)]
    pub shop: Option<ShopCurrency>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDeleteData {
    pub sale_delete: ErrorsPayload,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_sale::urls::SaleParams;
    use serde_json::json;

    #[test]
    fn test_format_discount_value() {
        assert_eq!(
            format_discount_value(DiscountValueType::Percentage, 15.0, Some("USD")),
            "15%"
        );
        assert_eq!(
            format_discount_value(DiscountValueType::Fixed, 1500.0, Some("USD")),
            "1 500.00 USD"
        );
        assert_eq!(
            format_discount_value(DiscountValueType::Fixed, 5.0, None),
            "5.00"
        );
    }

    #[test]
    fn test_sale_details_tab_rows() {
        let data: SaleDetailsData = serde_json::from_value(json!({
            "sale": {
                "id": "U2FsZTox",
                "name": "Summer",
                "type": "PERCENTAGE",
                "startDate": "2019-06-01",
                "endDate": null,
                "value": 10.0,
                "categories": {
                    "edges": [{ "node": { "id": "c1", "name": "Juices", "products": { "totalCount": 4 } } }],
                    "pageInfo": {
                        "hasNextPage": false,
                        "hasPreviousPage": false,
                        "startCursor": null,
                        "endCursor": null
                    }
                },
                "products": {
                    "edges": [{ "node": { "id": "p1", "name": "Bean Juice" } }]
                }
            },
            "shop": { "defaultCurrency": "USD" }
        }))
        .expect("valid sale");
        let sale = data.sale.expect("sale present");

        let (rows, page_info) = sale.catalogue.tab_rows(DiscountPageTab::Categories);
        assert_eq!(rows[0].detail, "4");
        assert!(page_info.is_some());

        let (rows, page_info) = sale.catalogue.tab_rows(DiscountPageTab::Products);
        assert_eq!(rows[0].detail, "-");
        assert!(page_info.is_none());

        let (rows, _) = sale.catalogue.tab_rows(DiscountPageTab::Collections);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_details_variables_follow_cursor() {
        let params: SaleParams = crate::shared::list_view::decode_detail("before=abc&rows=10");
        let variables = DiscountDetailsVariables::new("U2FsZTox", &params.pagination);
        assert_eq!(
            serde_json::to_value(&variables).expect("serializable"),
            json!({ "id": "U2FsZTox", "last": 10, "before": "abc" })
        );
    }
}
