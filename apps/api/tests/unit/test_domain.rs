use storefront_api::domain::delivery::{
    area_set::ServiceableAreaSet,
    validator::{RejectionReason, ValidationResult, validate},
    value_objects::Pincode,
};

fn areas(codes: &[&str]) -> ServiceableAreaSet {
    ServiceableAreaSet::from_codes(codes.iter().copied()).expect("valid pincodes")
}

fn rejected(reason: RejectionReason) -> ValidationResult {
    ValidationResult::Rejected { reason }
}

#[test]
fn pincode_accepts_expected_format() {
    assert!(Pincode::new("380001".to_string()).is_ok());
    assert!(Pincode::new("012345".to_string()).is_ok());
}

#[test]
fn pincode_rejects_wrong_length_or_characters() {
    assert!(Pincode::new("38001".to_string()).is_err());
    assert!(Pincode::new("3800011".to_string()).is_err());
    assert!(Pincode::new("38000a".to_string()).is_err());
    assert!(Pincode::new("".to_string()).is_err());
}

#[test]
fn serviceable_pincode_is_accepted() {
    let set = areas(&["380001", "382000"]);
    assert_eq!(validate("380001", &set), ValidationResult::Accepted);
}

#[test]
fn unknown_pincode_is_out_of_area() {
    let set = areas(&["380001"]);
    assert_eq!(
        validate("380002", &set),
        rejected(RejectionReason::OutOfServiceArea)
    );
}

#[test]
fn short_pincode_is_invalid_format() {
    let set = areas(&["380001"]);
    assert_eq!(validate("38001", &set), rejected(RejectionReason::InvalidFormat));
}

#[test]
fn non_digit_pincode_is_invalid_format() {
    let set = areas(&["380001"]);
    assert_eq!(validate("38000a", &set), rejected(RejectionReason::InvalidFormat));
}

#[test]
fn empty_set_rejects_every_well_formed_pincode() {
    let set = ServiceableAreaSet::default();
    assert_eq!(
        validate("380001", &set),
        rejected(RejectionReason::OutOfServiceArea)
    );
}

#[test]
fn leading_zeros_are_significant() {
    let set = areas(&["012345"]);
    assert_eq!(validate("012345", &set), ValidationResult::Accepted);
    assert_eq!(validate("12345", &set), rejected(RejectionReason::InvalidFormat));
}

#[test]
fn malformed_input_is_invalid_regardless_of_set_contents() {
    let sets = [
        ServiceableAreaSet::default(),
        areas(&["380001"]),
        areas(&["000000", "999999", "380001"]),
    ];
    let inputs = [
        "", " ", "380001 ", " 380001", "+38000", "-38000", "3800 1", "38.001", "abcdef",
        "3800010", "38000\n", "380001\n", "\u{0663}80001",
    ];
    for set in &sets {
        for input in inputs {
            assert_eq!(
                validate(input, set),
                rejected(RejectionReason::InvalidFormat),
                "{:?} should be invalid",
                input
            );
        }
    }
}

#[test]
fn repeated_validation_gives_the_same_answer() {
    let set = areas(&["380001"]);
    for candidate in ["380001", "380002", "bogus"] {
        let first = validate(candidate, &set);
        for _ in 0..5 {
            assert_eq!(validate(candidate, &set), first);
        }
    }
}
