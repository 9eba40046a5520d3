//! Tests for envelope parsing, record ingestion, and catalog search.

use serde_json::json;

use statline_client::metadata::category_names;
use statline_client::{parse_page, records_to_frame, search_catalog, short_description};
use statline_model::DatasetSummary;

fn summary(identifier: &str, title: &str, description: &str) -> DatasetSummary {
    DatasetSummary {
        identifier: identifier.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

#[test]
fn parse_page_with_next_link() {
    let body = json!({
        "value": [
            { "Id": 0, "Measure": "Population", "Value": 100.0 },
            { "Id": 1, "Measure": "Births", "Value": 5.0 }
        ],
        "@odata.nextLink": "https://example.test/Observations?$skip=2"
    });
    let page = parse_page(body).unwrap();
    assert_eq!(page.records.len(), 2);
    assert_eq!(
        page.next_link.as_deref(),
        Some("https://example.test/Observations?$skip=2")
    );
}

#[test]
fn parse_page_without_next_link_is_the_last_page() {
    let body = json!({ "value": [] });
    let page = parse_page(body).unwrap();
    assert!(page.records.is_empty());
    assert!(page.next_link.is_none());
}

#[test]
fn parse_page_rejects_a_missing_value_array() {
    assert!(parse_page(json!({ "data": [] })).is_err());
    assert!(parse_page(json!([1, 2, 3])).is_err());
}

#[test]
fn records_infer_numeric_and_string_columns() {
    let body = json!({
        "value": [
            { "Region": "NL", "Value": 100.5, "Id": 1 },
            { "Region": "BE", "Value": null, "Id": 2 }
        ]
    });
    let page = parse_page(body).unwrap();
    let df = records_to_frame(&page.records).unwrap();

    assert_eq!(df.height(), 2);
    let value = df.column("Value").unwrap().f64().unwrap();
    assert_eq!(value.get(0), Some(100.5));
    assert_eq!(value.get(1), None);

    let region = df.column("Region").unwrap().str().unwrap();
    assert_eq!(region.get(0), Some("NL"));
}

#[test]
fn records_with_mixed_types_become_strings() {
    let body = json!({
        "value": [
            { "Code": 7 },
            { "Code": "A7" }
        ]
    });
    let page = parse_page(body).unwrap();
    let df = records_to_frame(&page.records).unwrap();
    let code = df.column("Code").unwrap().str().unwrap();
    assert_eq!(code.get(0), Some("7"));
    assert_eq!(code.get(1), Some("A7"));
}

#[test]
fn records_union_keys_across_pages() {
    let page_one = parse_page(json!({ "value": [ { "Region": "NL" } ] })).unwrap();
    let page_two = parse_page(json!({ "value": [ { "Region": "BE", "Extra": "x" } ] })).unwrap();
    let mut records = page_one.records;
    records.extend(page_two.records);
    let df = records_to_frame(&records).unwrap();
    assert_eq!(df.width(), 2);
    let extra = df.column("Extra").unwrap().str().unwrap();
    assert_eq!(extra.get(0), None);
    assert_eq!(extra.get(1), Some("x"));
}

#[test]
fn empty_record_set_builds_an_empty_frame() {
    let df = records_to_frame(&[]).unwrap();
    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 0);
}

#[test]
fn reserved_metadata_categories_are_excluded() {
    let body = json!({
        "value": [
            { "name": "Properties" },
            { "name": "Observations" },
            { "name": "RegionCodes" },
            { "name": "PeriodenCodes" }
        ]
    });
    assert_eq!(category_names(&body), vec!["RegionCodes", "PeriodenCodes"]);
}

#[test]
fn search_ranks_title_matches_above_description_matches() {
    let entries = vec![
        summary("1", "Bevolking; kerncijfers", "Population key figures"),
        summary("2", "Energiebalans", "Bevolking als context"),
        summary("3", "Landbouw", "Agriculture"),
    ];
    let hits = search_catalog(entries, "bevolking");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].summary.identifier, "1");
    assert_eq!(hits[1].summary.identifier, "2");
    assert!(hits[0].score > hits[1].score);
}

#[test]
fn search_caps_the_number_of_hits() {
    let entries: Vec<DatasetSummary> = (0..20)
        .map(|n| summary(&n.to_string(), "Bevolking", ""))
        .collect();
    let hits = search_catalog(entries, "bevolking");
    assert_eq!(hits.len(), statline_client::catalog::MAX_SEARCH_HITS);
}

#[test]
fn blank_keyword_returns_no_hits() {
    let entries = vec![summary("1", "Bevolking", "")];
    assert!(search_catalog(entries, "   ").is_empty());
}

#[test]
fn long_descriptions_are_truncated_with_ellipsis() {
    let text = "x".repeat(300);
    let short = short_description(&text, 250);
    assert_eq!(short.chars().count(), 253);
    assert!(short.ends_with("..."));
    assert_eq!(short_description("short", 250), "short");
}
