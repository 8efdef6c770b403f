use crate::shared::list_view::UrlToken;

/// Prefix that marks a dynamic attribute column in a stored selection
pub const ATTRIBUTE_COLUMN_PREFIX: &str = "attribute:";

/// One entry of a user's column selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnToken<C> {
    /// A column every row of the screen has, e.g. `price`
    Fixed(C),
    /// A grid attribute promoted to its own column, by attribute id
    Attribute(String),
}

/// Pure predicate separating attribute tokens from fixed ones
pub fn is_attribute_column_value(value: &str) -> bool {
    value.starts_with(ATTRIBUTE_COLUMN_PREFIX)
}

pub fn attribute_column_value(attribute_id: &str) -> String {
    format!("{}{}", ATTRIBUTE_COLUMN_PREFIX, attribute_id)
}

/// Exact inverse of [`attribute_column_value`]
pub fn attribute_id_from_column_value(value: &str) -> Option<&str> {
    value.strip_prefix(ATTRIBUTE_COLUMN_PREFIX)
}

impl<C: UrlToken> ColumnToken<C> {
    pub fn attribute(attribute_id: impl Into<String>) -> Self {
        ColumnToken::Attribute(attribute_id.into())
    }

    pub fn to_value(&self) -> String {
        match self {
            ColumnToken::Fixed(column) => column.code().to_string(),
            ColumnToken::Attribute(id) => attribute_column_value(id),
        }
    }

    /// Parse a stored value; unknown fixed names yield `None`
    pub fn from_value(value: &str) -> Option<Self> {
        match attribute_id_from_column_value(value) {
            Some(id) => Some(ColumnToken::Attribute(id.to_string())),
            None => C::from_code(value).map(ColumnToken::Fixed),
        }
    }

    pub fn attribute_id(&self) -> Option<&str> {
        match self {
            ColumnToken::Attribute(id) => Some(id),
            ColumnToken::Fixed(_) => None,
        }
    }
}

/// Ordered, duplicate-free set of displayed columns.
///
/// Order is significant: attribute columns render left to right in the
/// order they were chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection<C> {
    tokens: Vec<ColumnToken<C>>,
}

impl<C> Default for ColumnSelection<C> {
    fn default() -> Self {
        Self { tokens: Vec::new() }
    }
}

impl<C: UrlToken> ColumnSelection<C> {
    pub fn new<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = ColumnToken<C>>,
    {
        let mut selection = Self::default();
        for token in tokens {
            selection.insert(token);
        }
        selection
    }

    /// Build from stored string values, skipping values that no longer parse
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        Self::new(
            values
                .into_iter()
                .filter_map(|value| ColumnToken::from_value(value.as_ref())),
        )
    }

    pub fn to_values(&self) -> Vec<String> {
        self.tokens.iter().map(ColumnToken::to_value).collect()
    }

    pub fn tokens(&self) -> &[ColumnToken<C>] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &ColumnToken<C>) -> bool {
        self.tokens.contains(token)
    }

    /// Appends `token` unless it is already selected
    pub fn insert(&mut self, token: ColumnToken<C>) {
        if !self.tokens.contains(&token) {
            self.tokens.push(token);
        }
    }

    pub fn remove(&mut self, token: &ColumnToken<C>) {
        self.tokens.retain(|t| t != token);
    }

    /// Column picker checkbox: removes a selected token, appends an unselected one
    pub fn toggle(&mut self, token: ColumnToken<C>) {
        if self.contains(&token) {
            self.remove(&token);
        } else {
            self.insert(token);
        }
    }

    /// Whether a fixed column is shown; governs its header and every body cell
    pub fn is_column_visible(&self, column: C) -> bool {
        self.tokens
            .iter()
            .any(|token| matches!(token, ColumnToken::Fixed(c) if *c == column))
    }

    /// Attribute ids of the dynamic columns, in selection order
    pub fn attribute_columns(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .filter_map(ColumnToken::attribute_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Col {
        Price,
        Type,
    }

    impl UrlToken for Col {
        const ALL: &'static [Self] = &[Col::Price, Col::Type];

        fn code(&self) -> &'static str {
            match self {
                Col::Price => "price",
                Col::Type => "productType",
            }
        }
    }

    #[test]
    fn test_attribute_value_round_trip() {
        for id in ["42", "QXR0cmlidXRlOjQy", "a:b", ""] {
            let value = attribute_column_value(id);
            assert!(is_attribute_column_value(&value));
            assert_eq!(attribute_id_from_column_value(&value), Some(id));
        }
        assert!(!is_attribute_column_value("price"));
    }

    #[test]
    fn test_from_values_skips_unknown_and_duplicates() {
        let selection =
            ColumnSelection::<Col>::from_values(["price", "weight", "attribute:7", "price"]);
        assert_eq!(selection.to_values(), vec!["price", "attribute:7"]);
    }

    #[test]
    fn test_attribute_columns_keep_selection_order() {
        let selection = ColumnSelection::<Col>::from_values([
            "attribute:9",
            "productType",
            "attribute:1",
            "attribute:5",
        ]);
        assert_eq!(selection.attribute_columns(), vec!["9", "1", "5"]);
    }

    #[test]
    fn test_toggle_appends_then_removes() {
        let mut selection = ColumnSelection::<Col>::from_values(["price"]);
        selection.toggle(ColumnToken::Fixed(Col::Type));
        assert_eq!(selection.to_values(), vec!["price", "productType"]);
        selection.toggle(ColumnToken::Fixed(Col::Price));
        assert_eq!(selection.to_values(), vec!["productType"]);
        assert!(!selection.is_column_visible(Col::Price));
        assert!(selection.is_column_visible(Col::Type));
    }
}
