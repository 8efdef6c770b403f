//! GraphQL documents of the voucher screens.

pub const VOUCHER_LIST: &str = r#"
query VoucherList(
  $first: Int
  $after: String
  $last: Int
  $before: String
  $filter: VoucherFilterInput
  $sort: VoucherSortingInput
) {
  vouchers(
    first: $first
    after: $after
    last: $last
    before: $before
    filter: $filter
    sortBy: $sort
  ) {
    edges {
      node {
        id
        code
        startDate
        endDate
        usageLimit
        discountValueType
        discountValue
        minSpent {
          amount
          currency
        }
        countries {
          code
          country
        }
      }
    }
    pageInfo {
      hasPreviousPage
      hasNextPage
      startCursor
      endCursor
    }
  }
  shop {
    defaultCurrency
  }
}
"#;

pub const VOUCHER_BULK_DELETE: &str = r#"
mutation VoucherBulkDelete($ids: [ID]!) {
  voucherBulkDelete(ids: $ids) {
    errors {
      field
      message
    }
    count
  }
}
"#;

pub const VOUCHER_DETAILS: &str = r#"
query VoucherDetails(
  $id: ID!
  $first: Int
  $after: String
  $last: Int
  $before: String
) {
  voucher(id: $id) {
    id
    code
    startDate
    endDate
    usageLimit
    discountValueType
    discountValue
    minSpent {
      amount
      currency
    }
    countries {
      code
      country
    }
    categories(first: $first, after: $after, last: $last, before: $before) {
      edges {
        node {
          id
          name
          products {
            totalCount
          }
        }
      }
      pageInfo {
        hasPreviousPage
        hasNextPage
        startCursor
        endCursor
      }
    }
    collections(first: $first, after: $after, last: $last, before: $before) {
      edges {
        node {
          id
          name
          products {
            totalCount
          }
        }
      }
      pageInfo {
        hasPreviousPage
        hasNextPage
        startCursor
        endCursor
      }
    }
    products(first: $first, after: $after, last: $last, before: $before) {
      edges {
        node {
          id
          name
          productType {
            name
          }
          isPublished
        }
      }
      pageInfo {
        hasPreviousPage
        hasNextPage
        startCursor
        endCursor
      }
    }
  }
  shop {
    defaultCurrency
  }
}
"#;

pub const VOUCHER_DELETE: &str = r#"
mutation VoucherDelete($id: ID!) {
  voucherDelete(id: $id) {
    errors {
      field
      message
    }
  }
}
"#;
