use super::*;
use chrono::TimeZone;

fn make_review(author: &str, content: &str, score: u8) -> Review {
    Review {
        id: "r1".to_string(),
        author: author.to_string(),
        content: content.to_string(),
        score,
        date: chrono::Utc.with_ymd_and_hms(2024, 6, 21, 15, 5, 0).unwrap(),
    }
}

#[test]
fn format_card_contains_all_fields() {
    let card = format_card(&make_review("alice", "Great app", 3));
    assert!(card.contains("alice"));
    assert!(card.contains("Great app"));
    assert_eq!(card.matches('★').count(), 3);
    assert!(card.contains("2024"));
}

#[test]
fn format_card_ends_with_separator_blank_line() {
    let card = format_card(&make_review("bob", "meh", 1));
    assert!(card.ends_with("\n\n"));
}
