use serde_json::json;
use storefront_api::application::reviews::dto::SubmitReviewRequest;
use validator::Validate;

fn request(rating: i64, review: &str) -> SubmitReviewRequest {
    SubmitReviewRequest {
        rating,
        review: review.to_string(),
        author_name: None,
    }
}

#[test]
fn rating_must_be_between_one_and_five() {
    let text = "Ten chars!";
    assert!(request(0, text).validate().is_err());
    assert!(request(1, text).validate().is_ok());
    assert!(request(5, text).validate().is_ok());
    assert!(request(6, text).validate().is_err());
    assert!(request(-1, text).validate().is_err());
}

#[test]
fn review_needs_at_least_ten_characters() {
    assert!(request(4, "123456789").validate().is_err());
    assert!(request(4, "1234567890").validate().is_ok());
}

#[test]
fn text_is_trimmed_before_length_check() {
    let parsed = SubmitReviewRequest::from_json(&json!({ "rating": 4, "review": "   123456789   " }));
    assert_eq!(parsed.review, "123456789");
    assert!(parsed.validate().is_err());
}

#[test]
fn rating_is_read_leniently() {
    assert_eq!(SubmitReviewRequest::from_json(&json!({ "rating": "4" })).rating, 4);
    assert_eq!(SubmitReviewRequest::from_json(&json!({ "rating": 4.7 })).rating, 4);
    assert_eq!(SubmitReviewRequest::from_json(&json!({ "rating": null })).rating, 0);
    assert_eq!(SubmitReviewRequest::from_json(&json!({})).rating, 0);
    assert_eq!(SubmitReviewRequest::from_json(&json!("5")).rating, 0);
}
