use crate::shared::graphql::execute;
use contracts::domain::a001_category::dto::{
    CategoryBulkDeleteData, CategoryCreateData, CategoryCreatePayload, CategoryCreateVariables,
    CategoryDeleteData, CategoryDetailsData, CategoryDetailsVariables, RootCategoriesData,
    RootCategoriesVariables,
};
use contracts::domain::a001_category::queries::{
    CATEGORY_BULK_DELETE, CATEGORY_CREATE, CATEGORY_DELETE, CATEGORY_DETAILS, ROOT_CATEGORIES,
};
use contracts::shared::graphql::{ApiError, BulkPayload, ErrorsPayload, IdVariables, IdsVariables};

pub async fn fetch_root_categories(
    variables: RootCategoriesVariables,
) -> Result<RootCategoriesData, ApiError> {
    execute("RootCategories", ROOT_CATEGORIES, &variables).await
}

pub async fn fetch_category(
    variables: CategoryDetailsVariables,
) -> Result<CategoryDetailsData, ApiError> {
    execute("CategoryDetails", CATEGORY_DETAILS, &variables).await
}

pub async fn create_category(
    variables: CategoryCreateVariables,
) -> Result<CategoryCreatePayload, ApiError> {
    let data: CategoryCreateData = execute("CategoryCreate", CATEGORY_CREATE, &variables).await?;
    Ok(data.category_create)
}

pub async fn delete_category(id: String) -> Result<ErrorsPayload, ApiError> {
    let data: CategoryDeleteData =
        execute("CategoryDelete", CATEGORY_DELETE, &IdVariables { id }).await?;
    Ok(data.category_delete)
}

pub async fn bulk_delete_categories(ids: Vec<String>) -> Result<BulkPayload, ApiError> {
    let data: CategoryBulkDeleteData =
        execute("CategoryBulkDelete", CATEGORY_BULK_DELETE, &IdsVariables { ids }).await?;
    Ok(data.category_bulk_delete)
}
