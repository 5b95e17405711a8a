use super::*;

#[test]
fn form_fields_format_price_without_currency_sign() {
    let upload = ProductUpload {
        name: "Invoice kit".to_owned(),
        description: "Templates".to_owned(),
        price_cents: 1250,
        category: Some("templates".to_owned()),
    };
    assert_eq!(
        upload.form_fields(),
        vec![
            ("name", "Invoice kit".to_owned()),
            ("description", "Templates".to_owned()),
            ("price", "12.50".to_owned()),
            ("category", "templates".to_owned()),
        ]
    );
}

#[test]
fn form_fields_omit_missing_category() {
    let upload = ProductUpload {
        name: "Free".to_owned(),
        description: String::new(),
        price_cents: 0,
        category: None,
    };
    let fields = upload.form_fields();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[2], ("price", "0.00".to_owned()));
}
