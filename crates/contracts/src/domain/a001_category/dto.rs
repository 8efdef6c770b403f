use super::urls::{CategoryListFilter, CategoryListParams};
use crate::shared::graphql::{
    BulkPayload, Connection, CountableTotal, ErrorsPayload, FieldError, SearchFilterInput,
    SortingInput, Thumbnail,
};
use crate::shared::list_view::{PageInfo, Pagination, QueryPagination};
use crate::shared::mutation::CreatePayload;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

// ============================================================================
// Create
// ============================================================================

/// Values of the create form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCreateFormData {
    pub name: String,
    /// Plain text, one paragraph per line
    pub description: String,
    pub seo_title: String,
    pub seo_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoInput {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub name: String,
    /// Serialized rich-text document
    pub description_json: String,
    pub seo: SeoInput,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCreateVariables {
    /// Serialized as `null` for a root category
    pub parent: Option<String>,
    pub input: CategoryInput,
}

impl CategoryCreateFormData {
    pub fn to_variables(&self, parent_id: Option<&str>) -> CategoryCreateVariables {
        CategoryCreateVariables {
            parent: parent_id.filter(|id| !id.is_empty()).map(str::to_string),
            input: CategoryInput {
                name: self.name.trim().to_string(),
                description_json: description_document(&self.description).to_string(),
                seo: SeoInput {
                    title: self.seo_title.clone(),
                    description: self.seo_description.clone(),
                },
            },
        }
    }
}

/// Rich-text document (`blocks` + `entityMap`) holding one unstyled block per line
pub fn description_document(text: &str) -> Value {
    let blocks: Vec<Value> = text
        .lines()
        .enumerate()
        .map(|(index, line)| {
            json!({
                "key": format!("b{}", index),
                "text": line,
                "type": "unstyled",
                "depth": 0,
                "inlineStyleRanges": [],
                "entityRanges": [],
                "data": {},
            })
        })
        .collect();
    json!({ "blocks": blocks, "entityMap": {} })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryCreatePayload {
    #[serde(default)]
    pub errors: Vec<FieldError>,
    pub category: Option<CategoryRef>,
}

impl CreatePayload for CategoryCreatePayload {
    fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    fn created_id(&self) -> Option<&str> {
        self.category.as_ref().map(|category| category.id.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreateData {
    pub category_create: CategoryCreatePayload,
}

// ============================================================================
// Delete
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDeleteData {
    pub category_delete: ErrorsPayload,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBulkDeleteData {
    pub category_bulk_delete: BulkPayload,
}

// ============================================================================
// List
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryListItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub children: Option<CountableTotal>,
    #[serde(default)]
    pub products: Option<CountableTotal>,
}

impl CategoryListItem {
    pub fn subcategory_count(&self) -> Option<u32> {
        self.children.map(|c| c.total_count)
    }

    pub fn product_count(&self) -> Option<u32> {
        self.products.map(|c| c.total_count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootCategoriesVariables {
    #[serde(flatten)]
    pub pagination: QueryPagination,
    pub filter: SearchFilterInput,
    pub sort: SortingInput,
}

impl RootCategoriesVariables {
    pub fn from_params(params: &CategoryListParams) -> Self {
        Self {
            pagination: QueryPagination::from(&params.pagination),
            filter: SearchFilterInput::new(params.filter(CategoryListFilter::Query)),
            sort: SortingInput::new(params.sort.field.graphql_field(), params.sort.ascending),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RootCategoriesData {
    pub categories: Option<Connection<CategoryListItem>>,
}

// ============================================================================
// Details
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProductItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetails {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
    #[serde(default)]
    pub parent: Option<CategoryRefId>,
    #[serde(default)]
    pub children: Option<Connection<CategoryListItem>>,
    #[serde(default)]
    pub products: Option<Connection<CategoryProductItem>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRefId {
    pub id: String,
}

impl CategoryDetails {
    pub fn parent_id(&self) -> Option<&str> {
        self.parent.as_ref().map(|p| p.id.as_str())
    }

    pub fn children_page_info(&self) -> Option<&PageInfo> {
        self.children.as_ref().and_then(|c| c.page_info.as_ref())
    }

    pub fn products_page_info(&self) -> Option<&PageInfo> {
        self.products.as_ref().and_then(|c| c.page_info.as_ref())
    }
}

/// One cursor pair drives both the subcategory and the product connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDetailsVariables {
    pub id: String,
    #[serde(flatten)]
    pub pagination: QueryPagination,
}

impl CategoryDetailsVariables {
    pub fn new(id: &str, pagination: &Pagination) -> Self {
        Self {
            id: id.to_string(),
            pagination: QueryPagination::from(pagination),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDetailsData {
    pub category: Option<CategoryDetails>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_variables_wrap_description() {
        let form = CategoryCreateFormData {
            name: " Shoes ".into(),
            description: "Line one\nLine two".into(),
            seo_title: "Shoes".into(),
            seo_description: String::new(),
        };
        let variables = form.to_variables(None);
        assert_eq!(variables.parent, None);
        assert_eq!(variables.input.name, "Shoes");

        let document: Value =
            serde_json::from_str(&variables.input.description_json).expect("valid json");
        assert_eq!(document["blocks"][1]["text"], "Line two");
        assert_eq!(document["entityMap"], json!({}));

        let encoded = serde_json::to_value(&variables).expect("serializable");
        assert_eq!(encoded["parent"], Value::Null);
        assert_eq!(encoded["input"]["descriptionJson"], variables.input.description_json);
    }

    #[test]
    fn test_create_variables_keep_parent() {
        let variables = CategoryCreateFormData::default().to_variables(Some("Q2F0OjE="));
        assert_eq!(variables.parent.as_deref(), Some("Q2F0OjE="));
        assert_eq!(CategoryCreateFormData::default().to_variables(Some("")).parent, None);
    }

    #[test]
    fn test_create_payload_created_id() {
        let data: CategoryCreateData = serde_json::from_value(json!({
            "categoryCreate": {
                "errors": [],
                "category": { "id": "42", "name": "Shoes" }
            }
        }))
        .expect("valid payload");
        assert_eq!(data.category_create.created_id(), Some("42"));
        assert!(data.category_create.errors().is_empty());
    }

    #[test]
    fn test_list_variables_from_params() {
        let params: CategoryListParams =
            crate::shared::list_view::decode_list("query=shoe&sort=productCount&asc=false");
        let variables = RootCategoriesVariables::from_params(&params);
        assert_eq!(variables.filter.search.as_deref(), Some("shoe"));
        assert_eq!(variables.sort, SortingInput::new("PRODUCT_COUNT", false));
        assert_eq!(variables.pagination.first, Some(20));
    }

    #[test]
    fn test_list_variables_shape() {
        let variables = RootCategoriesVariables {
            pagination: QueryPagination {
                first: Some(20),
                ..QueryPagination::default()
            },
            filter: SearchFilterInput::default(),
            sort: SortingInput::new("NAME", false),
        };
        assert_eq!(
            serde_json::to_value(&variables).expect("serializable"),
            json!({
                "first": 20,
                "filter": {},
                "sort": { "direction": "DESC", "field": "NAME" }
            })
        );
    }
}
