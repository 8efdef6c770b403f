//! Screen state lives in the address bar: reads come from the router
//! location, writes are navigations.

use contracts::shared::list_view::{unescape_id, QueryState};
use contracts::shared::mutation::Navigator;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate, use_params_map};
use leptos_router::NavigateOptions;

type NavigateFn = Box<dyn Fn(&str, NavigateOptions)>;

/// Router-backed `Navigator`
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    navigate: StoredValue<NavigateFn, LocalStorage>,
}

impl RouterNavigator {
    pub fn new() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: StoredValue::new_local(Box::new(navigate) as NavigateFn),
        }
    }

    pub fn go(&self, url: &str) {
        log::info!("Navigating to {}", url);
        // no-op once the owning view is gone
        self.navigate
            .try_with_value(|navigate| navigate(url, NavigateOptions::default()));
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, url: &str) {
        self.go(url);
    }
}

/// Query string without its leading `?`
pub fn query_of(search: &str) -> &str {
    search.strip_prefix('?').unwrap_or(search)
}

/// Screen state decoded from the current query string
pub fn use_query_state<Q>() -> Memo<Q>
where
    Q: QueryState + PartialEq + Send + Sync + 'static,
{
    let location = use_location();
    Memo::new(move |_| location.search.with(|search| Q::from_query(query_of(search))))
}

/// Decoded value of the `:id` route segment
pub fn use_route_id() -> Memo<Option<String>> {
    let params = use_params_map();
    Memo::new(move |_| {
        params
            .with(|p| p.get("id"))
            .filter(|id| !id.is_empty())
            .map(|id| unescape_id(&id))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_of_strips_question_mark() {
        assert_eq!(query_of("?sort=name"), "sort=name");
        assert_eq!(query_of("sort=name"), "sort=name");
        assert_eq!(query_of(""), "");
    }
}
