//! GraphQL documents of the product screens.

pub const PRODUCT_LIST: &str = r#"
query ProductList(
  $first: Int
  $after: String
  $last: Int
  $before: String
  $filter: ProductFilterInput
  $sort: ProductOrder
) {
  products(
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
        thumbnail {
          url
        }
        productType {
          id
          name
        }
        isAvailable
        attributes {
          attribute {
            id
          }
          values {
            id
            name
          }
        }
        basePrice {
          amount
          currency
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
}
"#;

pub const GRID_ATTRIBUTES: &str = r#"
query GridAttributes($first: Int!, $ids: [ID!]!) {
  availableInGrid: attributes(
    first: $first
    filter: { availableInGrid: true, isVariantOnly: false }
  ) {
    edges {
      node {
        id
        name
      }
    }
  }
  grid: attributes(first: 25, filter: { ids: $ids }) {
    edges {
      node {
        id
        name
      }
    }
  }
}
"#;

pub const PRODUCT_BULK_PUBLISH: &str = r#"
mutation ProductBulkPublish($ids: [ID!]!, $isPublished: Boolean!) {
  productBulkPublish(ids: $ids, isPublished: $isPublished) {
    errors {
      field
      message
    }
    count
  }
}
"#;

pub const PRODUCT_BULK_DELETE: &str = r#"
mutation ProductBulkDelete($ids: [ID!]!) {
  productBulkDelete(ids: $ids) {
    errors {
      field
      message
    }
    count
  }
}
"#;

pub const PRODUCT_DETAILS: &str = r#"
query ProductDetails($id: ID!) {
  product(id: $id) {
    id
    name
    productType {
      id
      name
    }
    category {
      id
      name
    }
    isPublished
    basePrice {
      amount
      currency
    }
    thumbnail {
      url
    }
  }
}
"#;

pub const PRODUCT_DELETE: &str = r#"
mutation ProductDelete($id: ID!) {
  productDelete(id: $id) {
    errors {
      field
      message
    }
  }
}
"#;
