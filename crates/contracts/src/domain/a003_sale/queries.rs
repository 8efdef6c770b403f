//! GraphQL documents of the sale screens.

pub const SALE_LIST: &str = r#"
query SaleList(
  $first: Int
  $after: String
  $last: Int
  $before: String
  $filter: SaleFilterInput
  $sort: SaleSortingInput
) {
  sales(
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
        name
        type
        startDate
        endDate
        value
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

pub const SALE_BULK_DELETE: &str = r#"
mutation SaleBulkDelete($ids: [ID]!) {
  saleBulkDelete(ids: $ids) {
    errors {
      field
      message
    }
    count
  }
}
"#;

pub const SALE_DETAILS: &str = r#"
query SaleDetails(
  $id: ID!
  $first: Int
  $after: String
  $last: Int
  $before: String
) {
  sale(id: $id) {
    id
    name
    type
    startDate
    endDate
    value
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

pub const SALE_DELETE: &str = r#"
mutation SaleDelete($id: ID!) {
  saleDelete(id: $id) {
    errors {
      field
      message
    }
  }
}
"#;
