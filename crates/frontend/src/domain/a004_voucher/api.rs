use crate::shared::graphql::execute;
use contracts::domain::a003_sale::dto::DiscountDetailsVariables;
use contracts::domain::a004_voucher::dto::{
    VoucherBulkDeleteData, VoucherDeleteData, VoucherDetailsData, VoucherListData,
    VoucherListVariables,
};
use contracts::domain::a004_voucher::queries::{
    VOUCHER_BULK_DELETE, VOUCHER_DELETE, VOUCHER_DETAILS, VOUCHER_LIST,
};
use contracts::shared::graphql::{ApiError, BulkPayload, ErrorsPayload, IdVariables, IdsVariables};

pub async fn fetch_vouchers(variables: VoucherListVariables) -> Result<VoucherListData, ApiError> {
    execute("VoucherList", VOUCHER_LIST, &variables).await
}

pub async fn bulk_delete_vouchers(ids: Vec<String>) -> Result<BulkPayload, ApiError> {
    let data: VoucherBulkDeleteData =
        execute("VoucherBulkDelete", VOUCHER_BULK_DELETE, &IdsVariables { ids }).await?;
    Ok(data.voucher_bulk_delete)
}

pub async fn fetch_voucher(
    variables: DiscountDetailsVariables,
) -> Result<VoucherDetailsData, ApiError> {
    execute("VoucherDetails", VOUCHER_DETAILS, &variables).await
}

pub async fn delete_voucher(id: String) -> Result<ErrorsPayload, ApiError> {
    let data: VoucherDeleteData =
        execute("VoucherDelete", VOUCHER_DELETE, &IdVariables { id }).await?;
    Ok(data.voucher_delete)
}
