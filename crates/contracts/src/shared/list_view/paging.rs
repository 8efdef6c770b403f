use super::state::Pagination;
use serde::{Deserialize, Serialize};

/// Relay page info returned with every connection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

/// Connection arguments sent with a list query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryPagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

impl From<&Pagination> for QueryPagination {
    fn from(pagination: &Pagination) -> Self {
        let rows = pagination.page_size();
        let backward = pagination.before.is_some();
        Self {
            first: (!backward).then_some(rows),
            last: backward.then_some(rows),
            after: pagination.after.clone(),
            before: pagination.before.clone(),
        }
    }
}

/// Enabled state of the previous/next buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageControls {
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageControls {
    /// Both directions are disabled while a request is in flight or before
    /// the first page info arrived.
    pub fn new(page_info: Option<&PageInfo>, loading: bool) -> Self {
        match page_info {
            Some(info) if !loading => Self {
                has_previous: info.has_previous_page,
                has_next: info.has_next_page,
            },
            _ => Self::default(),
        }
    }
}

impl Pagination {
    /// Pagination for the page after the one described by `page_info`
    pub fn next_page(&self, page_info: &PageInfo) -> Option<Pagination> {
        if !page_info.has_next_page {
            return None;
        }
        Some(Pagination {
            after: Some(page_info.end_cursor.clone()?),
            before: None,
            rows: self.rows,
        })
    }

    pub fn previous_page(&self, page_info: &PageInfo) -> Option<Pagination> {
        if !page_info.has_previous_page {
            return None;
        }
        Some(Pagination {
            after: None,
            before: Some(page_info.start_cursor.clone()?),
            rows: self.rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_info(has_previous: bool, has_next: bool) -> PageInfo {
        PageInfo {
            has_next_page: has_next,
            has_previous_page: has_previous,
            start_cursor: Some("start".into()),
            end_cursor: Some("end".into()),
        }
    }

    #[test]
    fn test_first_page_asks_for_first_rows() {
        let query = QueryPagination::from(&Pagination::default());
        assert_eq!(query.first, Some(20));
        assert_eq!(query.last, None);
    }

    #[test]
    fn test_backward_page_asks_for_last_rows() {
        let pagination = Pagination {
            before: Some("c1".into()),
            rows: Some(50),
            ..Pagination::default()
        };
        let query = QueryPagination::from(&pagination);
        assert_eq!(query.first, None);
        assert_eq!(query.last, Some(50));
        assert_eq!(query.before.as_deref(), Some("c1"));
    }

    #[test]
    fn test_next_and_previous_page_cursors() {
        let pagination = Pagination {
            rows: Some(10),
            ..Pagination::default()
        };
        let next = pagination.next_page(&page_info(false, true)).unwrap_or_default();
        assert_eq!(next.after.as_deref(), Some("end"));
        assert_eq!(next.before, None);
        assert_eq!(next.rows, Some(10));

        let previous = next.previous_page(&page_info(true, true)).unwrap_or_default();
        assert_eq!(previous.before.as_deref(), Some("start"));
        assert_eq!(previous.after, None);
    }

    #[test]
    fn test_no_page_in_direction() {
        assert_eq!(Pagination::default().next_page(&page_info(false, false)), None);
        assert_eq!(Pagination::default().previous_page(&page_info(false, true)), None);
    }

    #[test]
    fn test_controls_disabled_while_loading() {
        let info = page_info(true, true);
        assert_eq!(PageControls::new(Some(&info), true), PageControls::default());
        assert_eq!(PageControls::new(None, false), PageControls::default());
        let controls = PageControls::new(Some(&info), false);
        assert!(controls.has_next && controls.has_previous);
    }
}
