use super::token::UrlToken;
use std::collections::BTreeMap;

/// Page size used when the address bar does not carry `rows`
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Page size options offered by the pagination footer
pub const PAGE_SIZE_OPTIONS: [u32; 5] = [10, 20, 30, 50, 100];

// ============================================================================
// Pagination
// ============================================================================

/// Opaque cursor pair plus an optional explicit page size.
///
/// `after` and `before` are never both set by the builders in this module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    pub after: Option<String>,
    pub before: Option<String>,
    pub rows: Option<u32>,
}

impl Pagination {
    pub fn page_size(&self) -> u32 {
        self.rows.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn is_first_page(&self) -> bool {
        self.after.is_none() && self.before.is_none()
    }

    /// Back to the first page, keeping the page size
    pub fn reset_cursors(&mut self) {
        self.after = None;
        self.before = None;
    }
}

// ============================================================================
// Sort
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortArrow {
    Asc,
    Desc,
}

impl SortArrow {
    pub fn indicator(&self) -> &'static str {
        match self {
            SortArrow::Asc => " ▲",
            SortArrow::Desc => " ▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<S> {
    pub field: S,
    pub ascending: bool,
}

impl<S: UrlToken + Default> Default for Sort<S> {
    fn default() -> Self {
        Self {
            field: S::default(),
            ascending: true,
        }
    }
}

impl<S: UrlToken> Sort<S> {
    pub fn new(field: S, ascending: bool) -> Self {
        Self { field, ascending }
    }

    /// Header click: the active field flips direction, any other field
    /// becomes active in ascending order.
    pub fn toggled(self, field: S) -> Self {
        if self.field == field {
            Self {
                field,
                ascending: !self.ascending,
            }
        } else {
            Self {
                field,
                ascending: true,
            }
        }
    }

    /// Arrow shown on the header of `field`, `None` when it is not the active sort
    pub fn arrow_for(&self, field: S) -> Option<SortArrow> {
        if self.field != field {
            return None;
        }
        Some(if self.ascending {
            SortArrow::Asc
        } else {
            SortArrow::Desc
        })
    }
}

// ============================================================================
// Dialog
// ============================================================================

/// An open modal and the entity it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog<D> {
    pub kind: D,
    pub target_id: Option<String>,
}

impl<D> Dialog<D> {
    pub fn new(kind: D) -> Self {
        Self {
            kind,
            target_id: None,
        }
    }

    pub fn for_target(kind: D, target_id: impl Into<String>) -> Self {
        Self {
            kind,
            target_id: Some(target_id.into()),
        }
    }
}

// ============================================================================
// List view
// ============================================================================

/// Address-bar state of a list screen.
///
/// `F` is the screen's filter key enum, `D` its dialog kinds and `S` its sort
/// fields. Filter values are never empty: setting an empty value removes the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewState<F, D, S> {
    pub pagination: Pagination,
    pub sort: Sort<S>,
    /// Saved view selected in the tab bar; `None` is the custom view
    pub active_tab: Option<String>,
    pub dialog: Option<Dialog<D>>,
    /// Ids handed to a bulk-action dialog, in selection order without duplicates.
    /// Empty ids are dropped, so a selection holding `""` does not round-trip.
    pub bulk_selection: Vec<String>,
    pub filters: BTreeMap<F, String>,
}

impl<F, D, S> Default for ListViewState<F, D, S>
where
    S: UrlToken + Default,
{
    fn default() -> Self {
        Self {
            pagination: Pagination::default(),
            sort: Sort::default(),
            active_tab: None,
            dialog: None,
            bulk_selection: Vec::new(),
            filters: BTreeMap::new(),
        }
    }
}

impl<F, D, S> ListViewState<F, D, S>
where
    F: UrlToken + Ord,
    D: UrlToken,
    S: UrlToken,
{
    pub fn filter(&self, key: F) -> Option<&str> {
        self.filters.get(&key).map(String::as_str)
    }

    /// Replace one filter value. Leaves the saved view and goes back to the first page.
    pub fn with_filter(mut self, key: F, value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            self.filters.remove(&key);
        } else {
            self.filters.insert(key, value);
        }
        self.active_tab = None;
        self.pagination.reset_cursors();
        self
    }

    pub fn with_sort_toggled(mut self, field: S) -> Self {
        self.sort = self.sort.toggled(field);
        self.pagination.reset_cursors();
        self
    }

    pub fn with_page_size(mut self, rows: u32) -> Self {
        self.pagination.rows = Some(rows);
        self.pagination.reset_cursors();
        self
    }

    pub fn with_active_tab(mut self, tab: Option<String>) -> Self {
        self.active_tab = tab;
        self.pagination.reset_cursors();
        self
    }

    pub fn with_dialog(mut self, kind: D, target_id: Option<String>) -> Self {
        self.dialog = Some(Dialog { kind, target_id });
        self
    }

    /// Open a bulk dialog for the given ids
    pub fn with_bulk_dialog<I>(mut self, kind: D, ids: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.dialog = Some(Dialog::new(kind));
        self.bulk_selection = dedup_ids(ids);
        self
    }

    /// Close any dialog together with the ids it was opened for
    pub fn without_dialog(mut self) -> Self {
        self.dialog = None;
        self.bulk_selection.clear();
        self
    }

    pub fn is_dialog_open(&self, kind: D) -> bool {
        self.dialog.as_ref().is_some_and(|d| d.kind == kind)
    }
}

// ============================================================================
// Detail view
// ============================================================================

/// Address-bar state of a detail screen: assigned-item pagination, bulk ids,
/// an open dialog and the selected tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailViewState<D, T> {
    pub pagination: Pagination,
    pub active_tab: Option<T>,
    pub dialog: Option<Dialog<D>>,
    pub bulk_selection: Vec<String>,
}

impl<D, T> Default for DetailViewState<D, T> {
    fn default() -> Self {
        Self {
            pagination: Pagination::default(),
            active_tab: None,
            dialog: None,
            bulk_selection: Vec::new(),
        }
    }
}

impl<D: UrlToken, T: UrlToken> DetailViewState<D, T> {
    pub fn with_tab(mut self, tab: T) -> Self {
        self.active_tab = Some(tab);
        self.pagination.reset_cursors();
        self
    }

    pub fn with_dialog(mut self, kind: D, target_id: Option<String>) -> Self {
        self.dialog = Some(Dialog { kind, target_id });
        self
    }

    pub fn without_dialog(mut self) -> Self {
        self.dialog = None;
        self.bulk_selection.clear();
        self
    }
}

pub(crate) fn dedup_ids<I>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out: Vec<String> = Vec::new();
    for id in ids {
        if !id.is_empty() && !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    enum Field {
        #[default]
        Name,
        Price,
    }

    impl UrlToken for Field {
        const ALL: &'static [Self] = &[Field::Name, Field::Price];

        fn code(&self) -> &'static str {
            match self {
                Field::Name => "name",
                Field::Price => "price",
            }
        }
    }

    #[test]
    fn test_toggle_active_field_flips_direction() {
        let sort = Sort::new(Field::Name, true);
        assert_eq!(sort.toggled(Field::Name), Sort::new(Field::Name, false));
        assert_eq!(
            sort.toggled(Field::Name).toggled(Field::Name),
            Sort::new(Field::Name, true)
        );
    }

    #[test]
    fn test_toggle_other_field_starts_ascending() {
        let sort = Sort::new(Field::Name, false);
        assert_eq!(sort.toggled(Field::Price), Sort::new(Field::Price, true));
    }

    #[test]
    fn test_arrow_only_on_active_field() {
        let sort = Sort::new(Field::Price, false);
        assert_eq!(sort.arrow_for(Field::Price), Some(SortArrow::Desc));
        assert_eq!(sort.arrow_for(Field::Name), None);
    }

    #[test]
    fn test_dedup_ids_keeps_first_occurrence() {
        let ids = dedup_ids(vec![
            "b".to_string(),
            "a".to_string(),
            "b".to_string(),
            String::new(),
        ]);
        assert_eq!(ids, vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_pagination_defaults() {
        let pagination = Pagination::default();
        assert!(pagination.is_first_page());
        assert_eq!(pagination.page_size(), DEFAULT_PAGE_SIZE);
    }
}
