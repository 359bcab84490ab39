use super::*;
use chrono::TimeZone;

#[test]
fn deserialize_apps_response() {
    let body = r#"{"Apps":[{"Id":"1","Name":"A","IconUrl":"https://example.com/a.png"}]}"#;
    let resp: AppsResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.apps.len(), 1);
    assert_eq!(resp.apps[0].id, "1");
    assert_eq!(resp.apps[0].name, "A");
    assert_eq!(resp.apps[0].icon_url, "https://example.com/a.png");
}

#[test]
fn deserialize_apps_response_null_apps() {
    // Go は空スライスを null としてエンコードする
    let body = r#"{"Apps":null}"#;
    let resp: AppsResponse = serde_json::from_str(body).unwrap();
    assert!(resp.apps.is_empty());
}

#[test]
fn deserialize_reviews_response_null_reviews() {
    let body = r#"{"Reviews":null}"#;
    let resp: ReviewsResponse = serde_json::from_str(body).unwrap();
    assert!(resp.reviews.is_empty());
}

#[test]
fn deserialize_review_with_string_score() {
    let body = r#"{
        "Id": "r1",
        "Author": "alice",
        "Content": "Great app",
        "Score": "4",
        "Date": "2024-06-21T15:05:00Z"
    }"#;
    let review: Review = serde_json::from_str(body).unwrap();
    assert_eq!(review.score, 4);
    assert_eq!(review.author, "alice");
    assert_eq!(review.date, chrono::Utc.with_ymd_and_hms(2024, 6, 21, 15, 5, 0).unwrap());
}

#[test]
fn deserialize_review_with_numeric_score() {
    let body = r#"{
        "Id": "r1",
        "Author": "bob",
        "Content": "ok",
        "Score": 3,
        "Date": "2024-06-21T15:05:00Z"
    }"#;
    let review: Review = serde_json::from_str(body).unwrap();
    assert_eq!(review.score, 3);
}

#[test]
fn deserialize_review_rejects_non_numeric_score() {
    let body = r#"{
        "Id": "r1",
        "Author": "bob",
        "Content": "ok",
        "Score": "five",
        "Date": "2024-06-21T15:05:00Z"
    }"#;
    let result: Result<Review, _> = serde_json::from_str(body);
    assert!(result.is_err());
}

#[test]
fn deserialize_reviews_response_empty() {
    let body = r#"{"Reviews":[]}"#;
    let resp: ReviewsResponse = serde_json::from_str(body).unwrap();
    assert!(resp.reviews.is_empty());
}

#[test]
fn deserialize_review_with_offset_date() {
    let body = r#"{
        "Id": "r1",
        "Author": "carol",
        "Content": "nice",
        "Score": "5",
        "Date": "2024-06-21T15:05:00-07:00"
    }"#;
    let review: Review = serde_json::from_str(body).unwrap();
    assert_eq!(review.date, chrono::Utc.with_ymd_and_hms(2024, 6, 21, 22, 5, 0).unwrap());
}
