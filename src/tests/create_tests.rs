use super::*;

#[test]
fn test_create_table() -> Result<(), TallyDBError> {
    let headers = title_hours();
    let db = Database::new("test db", headers.clone(), "Title")?;

    assert_eq!(db.name(), "test db");
    assert_eq!(db.get_headers(), headers.as_slice());
    assert!(db.get_rows().is_empty());

    // Key header only
    let db = Database::new("test db", vec![Header::key("Title", ValueType::String)], "Title")?;
    assert_eq!(db.get_headers().len(), 1);
    Ok(())
}

#[test]
fn test_create_table_fails() {
    let cases: Vec<(Vec<Header>, &str)> = vec![
        (title_hours(), ""),
        (vec![], "Title"),
        (vec![], ""),
        (vec![Header::key("Error", ValueType::String)], "Title"),
        (vec![Header::number("Hours")], "Hours"),
    ];

    for (headers, key) in cases {
        let result = Database::new("test db", headers, key);
        assert!(
            matches!(result, Err(TallyDBError::KeyHeaderEmpty { .. })),
            "expected KeyHeaderEmpty for key '{}'",
            key
        );
    }
}

#[test]
fn test_create_table_rejects_repeated_key_name() -> Result<(), TallyDBError> {
    let headers = vec![
        Header::string("Title"),
        Header::key("Title", ValueType::String),
    ];
    let result = Database::new("test db", headers, "Title");
    assert!(matches!(
        result,
        Err(TallyDBError::DuplicateHeader { ref header }) if header == "Title"
    ));

    // With the key declared once, rows stay addressable by key
    let mut db = Database::new("test db", title_hours(), "Title")?;
    db.add_row(Row::from_fields(vec![(Header::key("Title", ValueType::String), "A")])?)?;
    let again = db.add_row(Row::from_fields(vec![(Header::key("Title", ValueType::String), "A")])?);
    assert!(matches!(again, Err(TallyDBError::DuplicateKeyValue { .. })));
    assert!(db.get_row_from_key_header("A").is_some());

    db.remove_row("A")?;
    assert!(db.is_empty());
    Ok(())
}
