use crate::cupcake;

/// The transport shape is the flat five-field object; nothing else leaks out.
#[test]
fn cupcake_serializes_flat() {
    let m = cupcake::Model {
        id: 7,
        flavor: "Chocolate".into(),
        size: "Large".into(),
        rating: 9.5,
        image: cupcake::DEFAULT_IMAGE_URL.into(),
    };
    let json = serde_json::to_value(&m).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": 7,
            "flavor": "Chocolate",
            "size": "Large",
            "rating": 9.5,
            "image": "https://tinyurl.com/demo-cupcake",
        })
    );
}

#[test]
fn validators_reject_blank_fields() {
    assert!(cupcake::validate_flavor("Vanilla").is_ok());
    assert!(cupcake::validate_flavor("  ").is_err());
    assert!(cupcake::validate_size("Small").is_ok());
    assert!(cupcake::validate_size("").is_err());
}
