//! Query-string codec for list and detail screens.
//!
//! Wire keys, in output order: `activeTab`, `action`, `id`, `ids[n]`, `after`,
//! `before`, `rows`, `sort`, `asc`, then the screen's filter keys.
//! Decoding never fails. A single bad value (`rows=abc`, an unknown `sort`
//! token) falls back to that field's default and keeps the rest. A query
//! string `serde_qs` cannot parse at all yields the default for every fixed
//! key, so `sort[a]=b&rows=10` loses `rows=10` too; filter keys are decoded
//! separately and survive.

use super::state::{dedup_ids, DetailViewState, Dialog, ListViewState, Pagination, Sort};
use super::token::UrlToken;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Screen state that round-trips through the address bar
pub trait QueryState: Sized {
    fn to_query(&self) -> String;
    fn from_query(query: &str) -> Self;
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct QueryWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    active_tab: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rows: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    asc: Option<String>,
}

fn qs_config() -> serde_qs::Config {
    // non-strict: accept percent-encoded brackets coming back from the browser
    serde_qs::Config::new(5, false)
}

fn to_qs<T: Serialize>(value: &T) -> String {
    serde_qs::to_string(value).unwrap_or_else(|err| {
        log::warn!("Failed to serialize query string: {}", err);
        String::new()
    })
}

fn join_parts(parts: [String; 2]) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("&")
}

fn parse_wire(query: &str) -> QueryWire {
    if query.is_empty() {
        return QueryWire::default();
    }
    qs_config()
        .deserialize_str::<QueryWire>(query)
        .unwrap_or_else(|err| {
            log::warn!("Ignoring malformed query string '{}': {}", query, err);
            QueryWire::default()
        })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn strip_question_mark(query: &str) -> &str {
    query.strip_prefix('?').unwrap_or(query)
}

// ============================================================================
// Field groups
// ============================================================================

fn write_dialog<D: UrlToken>(wire: &mut QueryWire, dialog: &Option<Dialog<D>>, ids: &[String]) {
    if let Some(dialog) = dialog {
        wire.action = Some(dialog.kind.code().to_string());
        wire.id = dialog.target_id.clone();
    }
    wire.ids = ids.to_vec();
}

fn read_dialog<D: UrlToken>(wire: &mut QueryWire) -> Option<Dialog<D>> {
    let kind = wire.action.as_deref().and_then(D::from_code)?;
    Some(Dialog {
        kind,
        target_id: non_empty(wire.id.take()),
    })
}

fn write_pagination(wire: &mut QueryWire, pagination: &Pagination) {
    wire.after = pagination.after.clone();
    wire.before = pagination.before.clone();
    wire.rows = pagination.rows.map(|rows| rows.to_string());
}

fn read_pagination(wire: &mut QueryWire) -> Pagination {
    Pagination {
        after: non_empty(wire.after.take()),
        before: non_empty(wire.before.take()),
        rows: wire
            .rows
            .as_deref()
            .and_then(|rows| rows.parse::<u32>().ok())
            .filter(|rows| *rows > 0),
    }
}

fn write_sort<S: UrlToken + Default>(wire: &mut QueryWire, sort: &Sort<S>) {
    if *sort == Sort::default() {
        return;
    }
    wire.sort = Some(sort.field.code().to_string());
    wire.asc = Some(sort.ascending.to_string());
}

fn read_sort<S: UrlToken + Default>(wire: &QueryWire) -> Sort<S> {
    let field = wire
        .sort
        .as_deref()
        .and_then(S::from_code)
        .unwrap_or_default();
    let ascending = match wire.asc.as_deref() {
        Some("false") => false,
        _ => true,
    };
    Sort { field, ascending }
}

fn encode_filters<F: UrlToken + Ord>(filters: &BTreeMap<F, String>) -> String {
    let flat: BTreeMap<&'static str, &str> = filters
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key.code(), value.as_str()))
        .collect();
    if flat.is_empty() {
        return String::new();
    }
    to_qs(&flat)
}

/// Filter keys are flat, so only the pairs naming a known key are handed to
/// `serde_qs`; bracketed keys such as `ids[0]` never reach the map.
fn decode_filters<F: UrlToken + Ord>(query: &str) -> BTreeMap<F, String> {
    let known: Vec<&str> = query
        .split('&')
        .filter(|pair| {
            let raw_key = pair.split('=').next().unwrap_or_default();
            urlencoding::decode(raw_key)
                .map(|key| F::from_code(&key).is_some())
                .unwrap_or(false)
        })
        .collect();
    if known.is_empty() {
        return BTreeMap::new();
    }

    let flat: BTreeMap<String, String> = qs_config()
        .deserialize_str(&known.join("&"))
        .unwrap_or_else(|err| {
            log::warn!("Ignoring malformed filters '{}': {}", query, err);
            BTreeMap::new()
        });

    flat.into_iter()
        .filter(|(_, value)| !value.is_empty())
        .filter_map(|(key, value)| F::from_code(&key).map(|key| (key, value)))
        .collect()
}

// ============================================================================
// List view
// ============================================================================

pub fn encode_list<F, D, S>(state: &ListViewState<F, D, S>) -> String
where
    F: UrlToken + Ord,
    D: UrlToken,
    S: UrlToken + Default,
{
    let mut wire = QueryWire {
        active_tab: state.active_tab.clone(),
        ..QueryWire::default()
    };
    write_dialog(&mut wire, &state.dialog, &state.bulk_selection);
    write_pagination(&mut wire, &state.pagination);
    write_sort(&mut wire, &state.sort);

    join_parts([to_qs(&wire), encode_filters(&state.filters)])
}

pub fn decode_list<F, D, S>(query: &str) -> ListViewState<F, D, S>
where
    F: UrlToken + Ord,
    D: UrlToken,
    S: UrlToken + Default,
{
    let query = strip_question_mark(query);
    let mut wire = parse_wire(query);

    ListViewState {
        active_tab: non_empty(wire.active_tab.take()),
        dialog: read_dialog(&mut wire),
        bulk_selection: dedup_ids(std::mem::take(&mut wire.ids)),
        pagination: read_pagination(&mut wire),
        sort: read_sort(&wire),
        filters: decode_filters(query),
    }
}

impl<F, D, S> QueryState for ListViewState<F, D, S>
where
    F: UrlToken + Ord,
    D: UrlToken,
    S: UrlToken + Default,
{
    fn to_query(&self) -> String {
        encode_list(self)
    }

    fn from_query(query: &str) -> Self {
        decode_list(query)
    }
}

// ============================================================================
// Detail view
// ============================================================================

pub fn encode_detail<D: UrlToken, T: UrlToken>(state: &DetailViewState<D, T>) -> String {
    let mut wire = QueryWire {
        active_tab: state.active_tab.map(|tab| tab.code().to_string()),
        ..QueryWire::default()
    };
    write_dialog(&mut wire, &state.dialog, &state.bulk_selection);
    write_pagination(&mut wire, &state.pagination);
    to_qs(&wire)
}

pub fn decode_detail<D: UrlToken, T: UrlToken>(query: &str) -> DetailViewState<D, T> {
    let mut wire = parse_wire(strip_question_mark(query));

    DetailViewState {
        active_tab: wire.active_tab.as_deref().and_then(T::from_code),
        dialog: read_dialog(&mut wire),
        bulk_selection: dedup_ids(std::mem::take(&mut wire.ids)),
        pagination: read_pagination(&mut wire),
    }
}

impl<D: UrlToken, T: UrlToken> QueryState for DetailViewState<D, T> {
    fn to_query(&self) -> String {
        encode_detail(self)
    }

    fn from_query(query: &str) -> Self {
        decode_detail(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Key {
        Query,
        Status,
    }

    impl UrlToken for Key {
        const ALL: &'static [Self] = &[Key::Query, Key::Status];

        fn code(&self) -> &'static str {
            match self {
                Key::Query => "query",
                Key::Status => "status",
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Action {
        Remove,
    }

    impl UrlToken for Action {
        const ALL: &'static [Self] = &[Action::Remove];

        fn code(&self) -> &'static str {
            "remove"
        }
    }

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

    type State = ListViewState<Key, Action, Field>;

    #[test]
    fn test_default_state_encodes_to_empty_string() {
        assert_eq!(encode_list(&State::default()), "");
    }

    #[test]
    fn test_dialog_flattens_to_action_and_id() {
        let state = State::default().with_dialog(Action::Remove, Some("abc".into()));
        assert_eq!(encode_list(&state), "action=remove&id=abc");
    }

    #[test]
    fn test_filters_follow_fixed_keys() {
        let state = State::default()
            .with_filter(Key::Query, "shoes")
            .with_sort_toggled(Field::Price);
        assert_eq!(encode_list(&state), "sort=price&asc=true&query=shoes");
    }

    #[test]
    fn test_empty_filter_is_omitted() {
        let state = State::default().with_filter(Key::Query, "");
        assert!(state.filters.is_empty());
        assert_eq!(encode_list(&state), "");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let state: State = decode_list("foo=bar&query=hat&utm_source=mail");
        assert_eq!(state.filter(Key::Query), Some("hat"));
        assert_eq!(state.filters.len(), 1);
    }

    #[test]
    fn test_bad_values_fall_back_per_field() {
        let state: State = decode_list("rows=abc&sort=weight&asc=maybe&action=explode&id=7");
        assert_eq!(state.pagination.rows, None);
        assert_eq!(state.sort, Sort::default());
        assert_eq!(state.dialog, None);
    }

    #[test]
    fn test_leading_question_mark_is_accepted() {
        let state: State = decode_list("?action=remove&id=5");
        assert_eq!(state.dialog, Some(Dialog::for_target(Action::Remove, "5")));
    }

    #[test]
    fn test_bulk_ids_round_trip_in_order() {
        let state = State::default()
            .with_bulk_dialog(Action::Remove, vec!["b".to_string(), "a".to_string()]);
        let decoded: State = decode_list(&encode_list(&state));
        assert_eq!(decoded.bulk_selection, vec!["b".to_string(), "a".to_string()]);
        assert_eq!(decoded, state);
    }

    #[test]
    fn test_encoded_brackets_are_accepted() {
        let state: State = decode_list("action=remove&ids%5B0%5D=x&ids%5B1%5D=y");
        assert_eq!(state.bulk_selection, vec!["x".to_string(), "y".to_string()]);
    }
}
