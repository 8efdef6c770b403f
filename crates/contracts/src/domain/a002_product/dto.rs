use super::columns::ProductListColumn;
use super::urls::{ProductListFilter, ProductListParams, ProductStatusFilter};
use crate::shared::graphql::{BulkPayload, Connection, ErrorsPayload, SortingInput, Thumbnail};
use crate::shared::grid::{AttributeSource, CellContent, GridAttribute, GridRow};
use crate::shared::list_view::{QueryPagination, UrlToken};
use crate::shared::money::Money;
use serde::{Deserialize, Serialize};

pub const PUBLISHED_LABEL: &str = "Published";
pub const NOT_PUBLISHED_LABEL: &str = "Not published";

// ============================================================================
// List rows
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductTypeRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AttributeRef {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AttributeValueRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectedAttribute {
    pub attribute: AttributeRef,
    #[serde(default)]
    pub values: Vec<AttributeValueRef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
    #[serde(default)]
    pub product_type: Option<ProductTypeRef>,
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default)]
    pub attributes: Vec<SelectedAttribute>,
    #[serde(default)]
    pub base_price: Option<Money>,
}

impl AttributeSource for ProductListItem {
    fn attribute_values(&self, attribute_id: &str) -> Option<Vec<&str>> {
        self.attributes
            .iter()
            .find(|a| a.attribute.id == attribute_id)
            .map(|a| a.values.iter().map(|v| v.name.as_str()).collect())
    }
}

impl GridRow<ProductListColumn> for ProductListItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn primary_cell(&self) -> CellContent {
        CellContent::Avatar {
            text: self.name.clone(),
            thumbnail: self.thumbnail.as_ref().map(|t| t.url.clone()),
        }
    }

    fn fixed_cell(&self, column: ProductListColumn) -> CellContent {
        let content = match column {
            ProductListColumn::ProductType => self
                .product_type
                .as_ref()
                .map(|product_type| CellContent::Text(product_type.name.clone())),
            ProductListColumn::IsPublished => self.is_available.map(|available| {
                CellContent::Status {
                    label: if available {
                        PUBLISHED_LABEL
                    } else {
                        NOT_PUBLISHED_LABEL
                    },
                    positive: available,
                }
            }),
            ProductListColumn::Price => self.base_price.clone().map(CellContent::Money),
        };
        content.unwrap_or(CellContent::Skeleton)
    }
}

// ============================================================================
// List query
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PriceRangeInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilterInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceRangeInput>,
}

fn parse_price(value: Option<&str>) -> Option<f64> {
    value.and_then(|v| v.trim().replace(',', ".").parse::<f64>().ok())
}

impl ProductFilterInput {
    /// Filter values that do not parse are dropped, the rest still applies
    pub fn from_params(params: &ProductListParams) -> Self {
        let price = PriceRangeInput {
            gte: parse_price(params.filter(ProductListFilter::PriceFrom)),
            lte: parse_price(params.filter(ProductListFilter::PriceTo)),
        };
        Self {
            search: params.filter(ProductListFilter::Query).map(str::to_string),
            is_published: params
                .filter(ProductListFilter::Status)
                .and_then(ProductStatusFilter::from_code)
                .map(|status| status.is_published()),
            price: (price.gte.is_some() || price.lte.is_some()).then_some(price),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductListVariables {
    #[serde(flatten)]
    pub pagination: QueryPagination,
    pub filter: ProductFilterInput,
    pub sort: SortingInput,
}

impl ProductListVariables {
    pub fn from_params(params: &ProductListParams) -> Self {
        Self {
            pagination: QueryPagination::from(&params.pagination),
            filter: ProductFilterInput::from_params(params),
            sort: SortingInput::new(params.sort.field.graphql_field(), params.sort.ascending),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductListData {
    pub products: Option<Connection<ProductListItem>>,
}

// ============================================================================
// Grid attributes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridAttributesVariables {
    pub first: u32,
    /// Attribute ids of the selected columns
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridAttributesData {
    /// Attributes the column picker offers
    pub available_in_grid: Option<Connection<GridAttribute>>,
    /// Names for the attribute columns already selected
    pub grid: Option<Connection<GridAttribute>>,
}

// ============================================================================
// Bulk actions
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBulkPublishVariables {
    pub ids: Vec<String>,
    pub is_published: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBulkPublishData {
    pub product_bulk_publish: BulkPayload,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBulkDeleteData {
    pub product_bulk_delete: BulkPayload,
}

// ============================================================================
// Details
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub product_type: Option<ProductTypeRef>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub base_price: Option<Money>,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductDetailsData {
    pub product: Option<ProductDetails>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDeleteData {
    pub product_delete: ErrorsPayload,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::decode_list;
    use serde_json::json;

    fn product() -> ProductListItem {
        serde_json::from_value(json!({
            "id": "UHJvZHVjdDox",
            "name": "Bean Juice",
            "thumbnail": { "url": "https://cdn.example.com/juice.png" },
            "productType": { "id": "VHlwZTox", "name": "Juice" },
            "isAvailable": false,
            "attributes": [
                {
                    "attribute": { "id": "QXR0cjox" },
                    "values": [{ "id": "1", "name": "Apple" }, { "id": "2", "name": "Pear" }]
                }
            ],
            "basePrice": { "amount": 9.5, "currency": "USD" }
        }))
        .expect("valid product")
    }

    #[test]
    fn test_fixed_cells() {
        let product = product();
        assert_eq!(
            product.fixed_cell(ProductListColumn::ProductType),
            CellContent::Text("Juice".into())
        );
        assert_eq!(
            product.fixed_cell(ProductListColumn::IsPublished),
            CellContent::Status {
                label: NOT_PUBLISHED_LABEL,
                positive: false
            }
        );
        assert_eq!(
            product.fixed_cell(ProductListColumn::Price),
            CellContent::Money(Money::new(9.5, "USD"))
        );
    }

    #[test]
    fn test_missing_fields_render_skeleton() {
        let product: ProductListItem =
            serde_json::from_value(json!({ "id": "1", "name": "Bare" })).expect("valid product");
        assert_eq!(product.fixed_cell(ProductListColumn::Price), CellContent::Skeleton);
        assert_eq!(
            product.fixed_cell(ProductListColumn::IsPublished),
            CellContent::Skeleton
        );
    }

    #[test]
    fn test_attribute_values() {
        let product = product();
        assert_eq!(product.attribute_values("QXR0cjox"), Some(vec!["Apple", "Pear"]));
        assert_eq!(product.attribute_values("QXR0cjoy"), None);
    }

    #[test]
    fn test_filter_input_from_params() {
        let params: ProductListParams =
            decode_list("query=juice&status=hidden&priceFrom=5&priceTo=abc");
        let filter = ProductFilterInput::from_params(&params);
        assert_eq!(filter.search.as_deref(), Some("juice"));
        assert_eq!(filter.is_published, Some(false));
        assert_eq!(
            filter.price,
            Some(PriceRangeInput {
                gte: Some(5.0),
                lte: None
            })
        );
    }

    #[test]
    fn test_list_variables_serialize() {
        let params: ProductListParams = decode_list("sort=price&asc=false&rows=50");
        let variables = ProductListVariables::from_params(&params);
        assert_eq!(
            serde_json::to_value(&variables).expect("serializable"),
            json!({
                "first": 50,
                "filter": {},
                "sort": { "direction": "DESC", "field": "PRICE" }
            })
        );
    }
}
