//! GraphQL documents of the category screens.

pub const CATEGORY_CREATE: &str = r#"
mutation CategoryCreate($parent: ID, $input: CategoryInput!) {
  categoryCreate(parent: $parent, input: $input) {
    errors {
      field
      message
    }
    category {
      id
      name
    }
  }
}
"#;

pub const CATEGORY_DELETE: &str = r#"
mutation CategoryDelete($id: ID!) {
  categoryDelete(id: $id) {
    errors {
      field
      message
    }
  }
}
"#;

pub const CATEGORY_BULK_DELETE: &str = r#"
mutation CategoryBulkDelete($ids: [ID]!) {
  categoryBulkDelete(ids: $ids) {
    errors {
      field
      message
    }
    count
  }
}
"#;

pub const ROOT_CATEGORIES: &str = r#"
query RootCategories(
  $first: Int
  $after: String
  $last: Int
  $before: String
  $filter: CategoryFilterInput
  $sort: CategorySortingInput
) {
  categories(
    level: 0
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
        children {
          totalCount
        }
        products {
          totalCount
        }
      }
    }
    pageInfo {
      endCursor
      hasNextPage
      hasPreviousPage
      startCursor
    }
  }
}
"#;

pub const CATEGORY_DETAILS: &str = r#"
query CategoryDetails(
  $id: ID!
  $first: Int
  $after: String
  $last: Int
  $before: String
) {
  category(id: $id) {
    id
    name
    seoTitle
    seoDescription
    parent {
      id
    }
    children(first: $first, after: $after, last: $last, before: $before) {
      edges {
        node {
          id
          name
          children {
            totalCount
          }
          products {
            totalCount
          }
        }
      }
      pageInfo {
        endCursor
        hasNextPage
        hasPreviousPage
        startCursor
      }
    }
    products(first: $first, after: $after, last: $last, before: $before) {
      edges {
        node {
          id
          name
          thumbnail {
            url
          }
        }
      }
      pageInfo {
        endCursor
        hasNextPage
        hasPreviousPage
        startCursor
      }
    }
  }
}
"#;
