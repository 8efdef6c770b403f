use contracts::domain::a002_product::columns::{
    default_product_columns, ProductColumnSelection, ProductListColumn, PRODUCT_LIST_LAYOUT,
};
use contracts::domain::a002_product::dto::ProductListItem;
use contracts::shared::grid::{
    CellContent, ColumnToken, GridAttribute, GridColumn, HeaderCheckState, HeaderLabel,
    RowState, Selection, MISSING_VALUE,
};
use contracts::shared::list_view::Sort;
use serde_json::json;

fn products() -> Vec<ProductListItem> {
    serde_json::from_value(json!([
        {
            "id": "UHJvZHVjdDox",
            "name": "Apple Juice",
            "productType": { "id": "VHlwZTox", "name": "Juice" },
            "isAvailable": true,
            "attributes": [
                { "attribute": { "id": "QXR0cjox" }, "values": [{ "id": "1", "name": "Apple" }] },
                { "attribute": { "id": "QXR0cjoy" }, "values": [{ "id": "2", "name": "1L" }, { "id": "3", "name": "2L" }] }
            ],
            "basePrice": { "amount": 3.0, "currency": "USD" }
        },
        {
            "id": "UHJvZHVjdDoy",
            "name": "Plain Water",
            "productType": { "id": "VHlwZTox", "name": "Juice" },
            "isAvailable": false,
            "attributes": [
                { "attribute": { "id": "QXR0cjox" }, "values": [] }
            ],
            "basePrice": { "amount": 1.0, "currency": "USD" }
        }
    ]))
    .expect("valid products")
}

fn selections() -> Vec<ProductColumnSelection> {
    let mut with_attributes = default_product_columns();
    with_attributes.insert(ColumnToken::attribute("QXR0cjoy"));
    with_attributes.insert(ColumnToken::attribute("QXR0cjox"));

    vec![
        ProductColumnSelection::default(),
        default_product_columns(),
        with_attributes,
        ProductColumnSelection::new([
            ColumnToken::attribute("QXR0cjox"),
            ColumnToken::Fixed(ProductListColumn::Price),
        ]),
    ]
}

#[test]
fn header_and_body_have_same_width() {
    let products = products();
    for selection in selections() {
        let columns = PRODUCT_LIST_LAYOUT.columns(&selection);
        let headers = PRODUCT_LIST_LAYOUT.header_cells(&columns, None, &Sort::default());
        assert_eq!(headers.len(), 2 + selection.len());

        let skeleton = PRODUCT_LIST_LAYOUT.row_cells::<ProductListItem>(&columns, None, false, true);
        assert_eq!(skeleton.len(), headers.len());

        for product in &products {
            let cells = PRODUCT_LIST_LAYOUT.row_cells(&columns, Some(product), false, false);
            assert_eq!(cells.len(), headers.len());
        }
    }
}

#[test]
fn attribute_columns_follow_selection_order() {
    let mut selection = default_product_columns();
    selection.insert(ColumnToken::attribute("QXR0cjoy"));
    selection.insert(ColumnToken::attribute("QXR0cjox"));

    // the backend returns attributes in a different order
    let attributes = vec![
        GridAttribute {
            id: "QXR0cjox".into(),
            name: "Flavor".into(),
        },
        GridAttribute {
            id: "QXR0cjoy".into(),
            name: "Volume".into(),
        },
    ];

    let columns = PRODUCT_LIST_LAYOUT.columns(&selection);
    let headers =
        PRODUCT_LIST_LAYOUT.header_cells(&columns, Some(attributes.as_slice()), &Sort::default());
    let labels: Vec<_> = headers
        .iter()
        .filter(|h| matches!(h.column, GridColumn::Attribute(_)))
        .map(|h| h.label.clone())
        .collect();
    assert_eq!(
        labels,
        vec![
            HeaderLabel::Text("Volume".into()),
            HeaderLabel::Text("Flavor".into())
        ]
    );
}

#[test]
fn attribute_header_pending_until_attributes_load() {
    let selection = ProductColumnSelection::new([ColumnToken::attribute("QXR0cjox")]);
    let columns = PRODUCT_LIST_LAYOUT.columns(&selection);
    let headers = PRODUCT_LIST_LAYOUT.header_cells(&columns, None, &Sort::default());
    assert_eq!(headers[2].label, HeaderLabel::Pending);
}

#[test]
fn missing_attribute_value_renders_placeholder() {
    let products = products();
    let selection = ProductColumnSelection::new([
        ColumnToken::attribute("QXR0cjoy"),
        ColumnToken::attribute("QXR0cjox"),
    ]);
    let columns = PRODUCT_LIST_LAYOUT.columns(&selection);

    let juice = PRODUCT_LIST_LAYOUT.row_cells(&columns, Some(&products[0]), false, false);
    assert_eq!(juice[2], CellContent::Text("1L, 2L".into()));
    assert_eq!(juice[3], CellContent::Text("Apple".into()));

    // no entry for QXR0cjoy, an entry without values for QXR0cjox
    let water = PRODUCT_LIST_LAYOUT.row_cells(&columns, Some(&products[1]), false, false);
    assert_eq!(water[2], CellContent::Text(MISSING_VALUE.into()));
    assert_eq!(water[3], CellContent::Text(MISSING_VALUE.into()));
}

#[test]
fn hidden_fixed_column_hides_header_and_cells() {
    let products = products();
    let selection = ProductColumnSelection::new([ColumnToken::Fixed(ProductListColumn::Price)]);
    let columns = PRODUCT_LIST_LAYOUT.columns(&selection);
    assert!(!columns.contains(&GridColumn::Fixed(ProductListColumn::ProductType)));

    let cells = PRODUCT_LIST_LAYOUT.row_cells(&columns, Some(&products[0]), true, false);
    assert_eq!(
        cells,
        vec![
            CellContent::Checkbox {
                checked: true,
                disabled: false
            },
            CellContent::Avatar {
                text: "Apple Juice".into(),
                thumbnail: None
            },
            CellContent::Money(contracts::shared::money::Money::new(3.0, "USD")),
        ]
    );
}

#[test]
fn select_all_skips_loading_rows() {
    let products = products();
    let loaded: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();

    let mut selection = Selection::default();
    selection.toggle_all(loaded.iter().copied());
    assert_eq!(selection.header_state(loaded.iter().copied()), HeaderCheckState::Checked);
    assert_eq!(selection.row_state(None), RowState::Loading);

    // a third row arrives after select-all
    let mut after_load = loaded.clone();
    after_load.push("UHJvZHVjdDoz");
    assert_eq!(selection.row_state(Some("UHJvZHVjdDoz")), RowState::Unselected);
    assert_eq!(
        selection.header_state(after_load.iter().copied()),
        HeaderCheckState::Indeterminate
    );

    selection.toggle_all(after_load.iter().copied());
    assert_eq!(selection.len(), 3);
    selection.toggle_all(after_load.iter().copied());
    assert!(selection.is_empty());
}
