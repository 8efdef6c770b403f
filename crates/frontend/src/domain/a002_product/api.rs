use crate::shared::graphql::execute;
use contracts::domain::a002_product::columns::GRID_ATTRIBUTES_PICKER_LIMIT;
use contracts::domain::a002_product::dto::{
    GridAttributesData, GridAttributesVariables, ProductBulkDeleteData, ProductBulkPublishData,
    ProductBulkPublishVariables, ProductDeleteData, ProductDetailsData, ProductListData,
    ProductListVariables,
};
use contracts::domain::a002_product::queries::{
    GRID_ATTRIBUTES, PRODUCT_BULK_DELETE, PRODUCT_BULK_PUBLISH, PRODUCT_DELETE, PRODUCT_DETAILS,
    PRODUCT_LIST,
};
use contracts::shared::graphql::{ApiError, BulkPayload, ErrorsPayload, IdVariables, IdsVariables};

pub async fn fetch_products(variables: ProductListVariables) -> Result<ProductListData, ApiError> {
    execute("ProductList", PRODUCT_LIST, &variables).await
}

/// Attributes offered by the column picker plus the names of `selected_ids`
pub async fn fetch_grid_attributes(
    selected_ids: Vec<String>,
) -> Result<GridAttributesData, ApiError> {
    let variables = GridAttributesVariables {
        first: GRID_ATTRIBUTES_PICKER_LIMIT,
        ids: selected_ids,
    };
    execute("GridAttributes", GRID_ATTRIBUTES, &variables).await
}

pub async fn bulk_publish_products(
    ids: Vec<String>,
    is_published: bool,
) -> Result<BulkPayload, ApiError> {
    let variables = ProductBulkPublishVariables { ids, is_published };
    let data: ProductBulkPublishData =
        execute("ProductBulkPublish", PRODUCT_BULK_PUBLISH, &variables).await?;
    Ok(data.product_bulk_publish)
}

pub async fn bulk_delete_products(ids: Vec<String>) -> Result<BulkPayload, ApiError> {
    let data: ProductBulkDeleteData =
        execute("ProductBulkDelete", PRODUCT_BULK_DELETE, &IdsVariables { ids }).await?;
    Ok(data.product_bulk_delete)
}

pub async fn fetch_product(id: String) -> Result<ProductDetailsData, ApiError> {
    execute("ProductDetails", PRODUCT_DETAILS, &IdVariables { id }).await
}

pub async fn delete_product(id: String) -> Result<ErrorsPayload, ApiError> {
    let data: ProductDeleteData =
        execute("ProductDelete", PRODUCT_DELETE, &IdVariables { id }).await?;
    Ok(data.product_delete)
}
