use crate::shared::graphql::execute;
use contracts::domain::a003_sale::dto::{
    DiscountDetailsVariables, SaleBulkDeleteData, SaleDeleteData, SaleDetailsData, SaleListData,
    SaleListVariables,
};
use contracts::domain::a003_sale::queries::{
    SALE_BULK_DELETE, SALE_DELETE, SALE_DETAILS, SALE_LIST,
};
use contracts::shared::graphql::{ApiError, BulkPayload, ErrorsPayload, IdVariables, IdsVariables};

pub async fn fetch_sales(variables: SaleListVariables) -> Result<SaleListData, ApiError> {
    execute("SaleList", SALE_LIST, &variables).await
}

pub async fn bulk_delete_sales(ids: Vec<String>) -> Result<BulkPayload, ApiError> {
    let data: SaleBulkDeleteData =
        execute("SaleBulkDelete", SALE_BULK_DELETE, &IdsVariables { ids }).await?;
    Ok(data.sale_bulk_delete)
}

pub async fn fetch_sale(variables: DiscountDetailsVariables) -> Result<SaleDetailsData, ApiError> {
    execute("SaleDetails", SALE_DETAILS, &variables).await
}

pub async fn delete_sale(id: String) -> Result<ErrorsPayload, ApiError> {
    let data: SaleDeleteData = execute("SaleDelete", SALE_DELETE, &IdVariables { id }).await?;
    Ok(data.sale_delete)
}
