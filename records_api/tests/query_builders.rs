use records_api::{Query, QueryParams, RecordQuery};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/records").unwrap()
}

#[test]
fn record_query_defaults() {
    let url = RecordQuery::default().add_to_url(&base_url()).unwrap();
    assert_eq!(url.query(), Some("limit=10&offset=0"));
}

#[test]
fn record_query_page_three_with_colors() {
    let query = RecordQuery::default()
        .with_page(3)
        .with_colors(&["red".to_string(), "blue".to_string()]);

    assert_eq!(
        serde_json::to_value(query.params().unwrap()).unwrap(),
        serde_json::json!({"limit": 10, "offset": 20, "color": ["red", "blue"]})
    );

    let url = query.add_to_url(&base_url()).unwrap();
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("limit".to_string(), "10".to_string()),
            ("offset".to_string(), "20".to_string()),
            ("color[]".to_string(), "red".to_string()),
            ("color[]".to_string(), "blue".to_string()),
        ]
    );
}

#[test]
fn record_query_limit_is_fixed() {
    for page in [1, 2, 17, 50, 99] {
        assert_eq!(RecordQuery::default().with_page(page).params().unwrap().limit, 10);
    }
}

#[test]
fn query_params_offset_tracks_page() {
    assert_eq!(QueryParams::new(1, &[]).unwrap().offset, 0);
    assert_eq!(QueryParams::new(2, &[]).unwrap().offset, 10);
    assert_eq!(QueryParams::new(0, &[]).unwrap().offset, -10);
}

#[test]
fn query_params_single_color_is_still_a_list() {
    let params = QueryParams::new(1, &["green".to_string()]).unwrap();
    assert_eq!(params.colors, Some(vec!["green".to_string()]));
    assert_eq!(
        params.pairs(),
        vec![
            ("limit", "10".to_string()),
            ("offset", "0".to_string()),
            ("color[]", "green".to_string()),
        ]
    );
}

#[test]
fn url_pairs_come_from_query_params() {
    let query = RecordQuery::default()
        .with_page(4)
        .with_colors(&["yellow".to_string(), "green".to_string()]);
    let url = query.add_to_url(&base_url()).unwrap();
    let from_url: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let from_params: Vec<(String, String)> = query
        .params()
        .unwrap()
        .pairs()
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    assert_eq!(from_url, from_params);
}

#[test]
fn max_page_does_not_panic() {
    assert_eq!(QueryParams::new(i64::MAX, &[]), None);
    assert_eq!(QueryParams::new(i64::MIN, &[]), None);
    let query = RecordQuery::default().with_page(i64::MAX).with_color("red");
    assert_eq!(query.add_to_url(&base_url()), None);
}
