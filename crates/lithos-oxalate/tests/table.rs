use std::io::Write;

use lithos_oxalate::error::OxalateError;
use lithos_oxalate::food::{OxalateLevel, DEFAULT_SERVING_SIZE};
use lithos_oxalate::table::{OxalateTable, SortDirection, SortField};

const DATA: &str = r#"{
    "food_data": [
        { "food": "Spinach", "type": "Vegetables", "oxalate_mg": 656 },
        { "food": "Almonds", "type": "Nuts", "oxalate_mg": 122, "serving_size": "1 oz" },
        { "food": "Banana", "type": "Fruits", "oxalate_mg": 3 },
        { "food": "Baked potato", "type": "Vegetables", "oxalate_mg": 97, "oxalate_level": "High" },
        { "food": "Carrots", "type": "Vegetables", "oxalate_mg": 15 }
    ]
}"#;

fn table() -> OxalateTable {
    OxalateTable::from_json_str(DATA).unwrap()
}

#[test]
fn levels_follow_mg_bands() {
    assert_eq!(OxalateLevel::from_mg(0.0), OxalateLevel::Low);
    assert_eq!(OxalateLevel::from_mg(9.9), OxalateLevel::Low);
    assert_eq!(OxalateLevel::from_mg(10.0), OxalateLevel::Medium);
    assert_eq!(OxalateLevel::from_mg(50.0), OxalateLevel::High);
    assert_eq!(OxalateLevel::from_mg(100.0), OxalateLevel::VeryHigh);
}

#[test]
fn missing_columns_are_filled_in() {
    let table = table();
    let spinach = &table.items()[0];
    assert_eq!(spinach.oxalate_level, OxalateLevel::VeryHigh);
    assert_eq!(spinach.serving_size, DEFAULT_SERVING_SIZE);

    let almonds = &table.items()[1];
    assert_eq!(almonds.serving_size, "1 oz");
}

#[test]
fn blank_search_returns_everything_sorted_by_food() {
    let results = table().search("  ", SortField::Food, SortDirection::Asc);
    let names: Vec<_> = results.iter().map(|f| f.food.as_str()).collect();
    assert_eq!(names, vec!["Almonds", "Baked potato", "Banana", "Carrots", "Spinach"]);
}

#[test]
fn search_matches_name_or_category_case_insensitively() {
    let results = table().search("VEGETABLE", SortField::OxalateMg, SortDirection::Desc);
    let names: Vec<_> = results.iter().map(|f| f.food.as_str()).collect();
    assert_eq!(names, vec!["Spinach", "Baked potato", "Carrots"]);

    let results = table().search("almond", SortField::Food, SortDirection::Asc);
    assert_eq!(results.len(), 1);

    assert!(table().search("quinoa", SortField::Food, SortDirection::Asc).is_empty());
}

#[test]
fn misspelt_term_falls_back_to_edit_distance() {
    let results = table().search("spinch", SortField::Food, SortDirection::Asc);
    let names: Vec<_> = results.iter().map(|f| f.food.as_str()).collect();
    assert_eq!(names, vec!["Spinach"]);

    let results = table().search("Frutis", SortField::Food, SortDirection::Asc);
    let names: Vec<_> = results.iter().map(|f| f.food.as_str()).collect();
    assert_eq!(names, vec!["Banana"]);

    assert!(table().search("xylophone", SortField::Food, SortDirection::Asc).is_empty());
}

#[test]
fn level_sort_uses_band_order() {
    let results = table().search("", SortField::OxalateLevel, SortDirection::Asc);
    let levels: Vec<_> = results.iter().map(|f| f.oxalate_level).collect();
    assert_eq!(
        levels,
        vec![
            OxalateLevel::Low,
            OxalateLevel::Medium,
            OxalateLevel::High,
            OxalateLevel::VeryHigh,
            OxalateLevel::VeryHigh,
        ]
    );
}

#[test]
fn unknown_sort_field_falls_back_to_food() {
    assert_eq!(SortField::parse_or_default("calories"), SortField::Food);
    assert_eq!(SortField::parse_or_default("oxalate_mg"), SortField::OxalateMg);
    assert_eq!(SortDirection::parse_or_desc("asc"), SortDirection::Asc);
    assert_eq!(SortDirection::parse_or_desc("sideways"), SortDirection::Desc);
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DATA.as_bytes()).unwrap();

    let table = OxalateTable::from_path(file.path()).unwrap();
    assert_eq!(table.len(), 5);
}

#[test]
fn missing_file_reports_path() {
    let err =
        OxalateTable::from_path(std::path::Path::new("/nonexistent/oxalate_en.json")).unwrap_err();
    assert!(matches!(err, OxalateError::Read { .. }));
    assert!(err.to_string().contains("/nonexistent/oxalate_en.json"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        OxalateTable::from_json_str("{ \"food_data\": [ { \"food\": 1 } ] }"),
        Err(OxalateError::Parse(_))
    ));
}
