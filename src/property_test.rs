use super::*;

const A: &str = "6f1c2b8e-6a57-4c2e-9d8e-1f0a2b3c4d5e";
const B: &str = "0b8e6d4a-3f2c-4e1d-8c7b-6a5f4e3d2c1b";
const C: &str = "9a8b7c6d-5e4f-4a3b-9c2d-1e0f9a8b7c6d";

fn payload() -> String {
    format!(
        r#"[
            {{"id": "{A}", "title": "Harbor loft", "address": "1 Pier Rd", "latitude": 47.6062, "longitude": -122.3321, "price": 925000}},
            {{"id": "{B}", "title": "Vacant lot", "latitude": null, "longitude": null}},
            {{"id": "{C}", "title": "Ridge cabin", "latitude": 46.85}}
        ]"#
    )
}

#[test]
fn parse_list_reads_records_and_ignores_unknown_fields() {
    let records = PropertyRecord::parse_list(&payload()).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].title, "Harbor loft");
    assert_eq!(records[0].address.as_deref(), Some("1 Pier Rd"));
    assert_eq!(records[1].address, None);
}

#[test]
fn parse_list_rejects_malformed_payload() {
    let err = PropertyRecord::parse_list("{not json").unwrap_err();
    assert!(matches!(err, PropertyError::Parse(_)));
    assert!(err.to_string().starts_with("property payload parse failed"));
}

#[test]
fn focus_point_requires_both_coordinates() {
    let records = PropertyRecord::parse_list(&payload()).unwrap();
    assert_eq!(records[0].focus_point(), Some(FocusPoint::new(47.6062, -122.3321)));
    assert_eq!(records[1].focus_point(), None);
    assert_eq!(records[2].focus_point(), None);
}

#[test]
fn find_focus_by_id() {
    let records = PropertyRecord::parse_list(&payload()).unwrap();
    let a = Uuid::parse_str(A).unwrap();
    let b = Uuid::parse_str(B).unwrap();

    assert_eq!(find_focus(&records, a), Some(FocusPoint::new(47.6062, -122.3321)));
    assert_eq!(find_focus(&records, b), None);
    assert_eq!(find_focus(&records, Uuid::new_v4()), None);
}
