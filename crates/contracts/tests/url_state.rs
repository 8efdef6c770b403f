use contracts::domain::a002_product::urls::{
    product_list_url, ProductListDialog, ProductListFilter, ProductListParams,
    ProductListSortField,
};
use contracts::domain::a002_product::dto::ProductListVariables;
use contracts::domain::a003_sale::urls::{DiscountPageTab, SaleDialog, SaleParams};
use contracts::shared::list_view::{
    decode_detail, decode_list, encode_detail, encode_list, Dialog, Pagination, SavedSearches,
    Sort, TabAction, UrlToken,
};
use std::collections::BTreeMap;

fn sample_states() -> Vec<ProductListParams> {
    let mut states = vec![ProductListParams::default()];

    for field in ProductListSortField::ALL {
        for ascending in [true, false] {
            states.push(ProductListParams {
                sort: Sort::new(*field, ascending),
                ..ProductListParams::default()
            });
        }
    }

    for dialog in ProductListDialog::ALL {
        states.push(ProductListParams::default().with_dialog(*dialog, None));
        states.push(ProductListParams::default().with_dialog(*dialog, Some("UHJvZHVjdDox".into())));
    }

    states.push(
        ProductListParams::default()
            .with_filter(ProductListFilter::Query, "blue shoes")
            .with_filter(ProductListFilter::Status, "published")
            .with_filter(ProductListFilter::PriceFrom, "10.5")
            .with_filter(ProductListFilter::PriceTo, "99"),
    );

    states.push(ProductListParams {
        pagination: Pagination {
            after: Some("YXJyYXljb25uZWN0aW9uOjE5".into()),
            before: None,
            rows: Some(50),
        },
        active_tab: Some("2".into()),
        ..ProductListParams::default()
    });

    states.push(ProductListParams {
        pagination: Pagination {
            after: None,
            before: Some("YXJyYXljb25uZWN0aW9uOjA=".into()),
            rows: None,
        },
        ..ProductListParams::default()
    });

    states.push(ProductListParams::default().with_bulk_dialog(
        ProductListDialog::Publish,
        vec!["UHJvZHVjdDox".into(), "UHJvZHVjdDoy".into(), "UHJvZHVjdDoz".into()],
    ));

    states
}

#[test]
fn decode_is_left_inverse_of_encode() {
    for state in sample_states() {
        let encoded = encode_list(&state);
        let decoded: ProductListParams = decode_list(&encoded);
        assert_eq!(decoded, state, "round trip of '{}'", encoded);
    }
}

#[test]
fn empty_query_decodes_to_default_state() {
    let state: ProductListParams = decode_list("");
    assert_eq!(state, ProductListParams::default());
    assert_eq!(state.dialog, None);
    assert_eq!(state.active_tab, None);
    assert!(state.pagination.is_first_page());
    assert_eq!(state.sort, Sort::new(ProductListSortField::Name, true));
}

#[test]
fn absent_fields_are_omitted() {
    assert_eq!(product_list_url(Some(&ProductListParams::default())), "/products/");
    let state = ProductListParams::default().with_filter(ProductListFilter::Query, "hat");
    assert_eq!(encode_list(&state), "query=hat");
}

#[test]
fn malformed_query_never_fails() {
    for query in [
        "%%%",
        "ids[=x",
        "rows=-1",
        "rows=0",
        "asc",
        "action=&id=",
        "sort=&asc=",
        "&&&",
        "ids[0][1]=a",
    ] {
        let state: ProductListParams = decode_list(query);
        assert_eq!(state.dialog, None, "dialog from '{}'", query);
        assert_eq!(state.pagination.rows, None, "rows from '{}'", query);
    }
}

#[test]
fn structural_failure_drops_fixed_keys_but_keeps_filters() {
    let state: ProductListParams = decode_list("sort[a]=b&rows=10&query=mug");
    assert_eq!(state.pagination.rows, None);
    assert_eq!(state.sort, Sort::default());
    assert_eq!(state.filter(ProductListFilter::Query), Some("mug"));
}

#[test]
fn header_click_toggles_sort() {
    let state = ProductListParams::default();
    let toggled = state.clone().with_sort_toggled(ProductListSortField::Name);
    assert_eq!(toggled.sort, Sort::new(ProductListSortField::Name, false));

    let other = toggled.with_sort_toggled(ProductListSortField::Price);
    assert_eq!(other.sort, Sort::new(ProductListSortField::Price, true));
}

#[test]
fn changing_view_resets_cursors() {
    let paged = ProductListParams {
        pagination: Pagination {
            after: Some("c".into()),
            before: None,
            rows: Some(30),
        },
        ..ProductListParams::default()
    };
    let sorted = paged.clone().with_sort_toggled(ProductListSortField::Price);
    assert!(sorted.pagination.is_first_page());
    assert_eq!(sorted.pagination.rows, Some(30));

    let filtered = paged.clone().with_filter(ProductListFilter::Query, "x");
    assert!(filtered.pagination.is_first_page());

    let resized = paged.with_page_size(100);
    assert!(resized.pagination.is_first_page());
    assert_eq!(resized.pagination.rows, Some(100));
}

#[test]
fn tab_action_dialogs_use_shared_codes() {
    let state = ProductListParams::default()
        .with_dialog(ProductListDialog::Tab(TabAction::DeleteSearch), None);
    assert_eq!(encode_list(&state), "action=delete-search");

    let saving = ProductListParams::default().with_tab_dialog(Some(TabAction::SaveSearch));
    assert_eq!(saving.tab_dialog(), Some(TabAction::SaveSearch));
    assert_eq!(saving.with_tab_dialog(None).dialog, None);

    let bulk = ProductListParams::default().with_dialog(ProductListDialog::Delete, None);
    assert_eq!(bulk.tab_dialog(), None);
}

#[test]
fn active_tab_selects_saved_filters() {
    let mut searches = SavedSearches::default();
    searches.save("Mugs", BTreeMap::from([("query".to_string(), "mug".to_string())]));
    searches.save(
        "Hidden",
        BTreeMap::from([("status".to_string(), "hidden".to_string())]),
    );

    let variables_for = |query: &str| {
        let state: ProductListParams = decode_list(query);
        ProductListVariables::from_params(&state.with_saved_search_applied(&searches))
    };

    let custom = variables_for("");
    let hidden = variables_for("activeTab=2");
    assert_ne!(hidden, custom);
    assert_eq!(hidden.filter.is_published, Some(false));
    assert_eq!(hidden.filter.search, None);
    assert_eq!(variables_for("activeTab=1").filter.search.as_deref(), Some("mug"));
    assert_eq!(variables_for("activeTab=5"), custom);
}

#[test]
fn selecting_saved_search_writes_its_filters() {
    let mut searches = SavedSearches::default();
    searches.save("Mugs", BTreeMap::from([("query".to_string(), "mug".to_string())]));

    let state = ProductListParams::default()
        .with_filter(ProductListFilter::PriceFrom, "5")
        .with_saved_search(&searches, Some("1"));
    assert_eq!(product_list_url(Some(&state)), "/products/?activeTab=1&query=mug");
}

#[test]
fn detail_state_round_trip() {
    let state = SaleParams {
        active_tab: Some(DiscountPageTab::Collections),
        dialog: Some(Dialog::new(SaleDialog::UnassignProduct)),
        bulk_selection: vec!["UHJvZHVjdDox".into()],
        pagination: Pagination {
            after: Some("YQ==".into()),
            before: None,
            rows: Some(10),
        },
    };
    let encoded = encode_detail(&state);
    let decoded: SaleParams = decode_detail(&encoded);
    assert_eq!(decoded, state);
}
