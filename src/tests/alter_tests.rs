use super::*;

fn table_with_rows() -> Result<Database, TallyDBError> {
    let mut db = Database::new("test", title_hours(), "Title")?;
    db.add_row(db.new_row([("Title", "A"), ("Hours", "10")])?)?;
    db.add_row(db.new_row([("Title", "B"), ("Hours", "20")])?)?;
    Ok(db)
}

#[test]
fn test_add_existing_header_is_noop() -> Result<(), TallyDBError> {
    let mut db = table_with_rows()?;

    db.add_header(Header::number("Hours"))?;
    db.add_header(Header::string("Hours"))?;

    assert_eq!(db.get_headers().len(), 2);
    assert!(db.header("Hours").unwrap().is_number());
    assert!(db.get_rows().iter().all(|r| r.len() == 2));
    Ok(())
}

#[test]
fn test_add_header() -> Result<(), TallyDBError> {
    let mut db = table_with_rows()?;

    db.add_header(Header::string("Platform"))?;

    assert_eq!(db.get_headers().len(), 3);
    for row in db.get_rows() {
        assert_eq!(row.len(), 3);
        assert_eq!(row.get_value_from_header("Platform")?.get_value(), "");
    }
    Ok(())
}

#[test]
fn test_remove_key_header() -> Result<(), TallyDBError> {
    let mut db = table_with_rows()?;

    let result = db.remove_header("Title");
    assert!(matches!(
        result,
        Err(TallyDBError::CannotDeleteKeyHeader { ref header }) if header == "Title"
    ));
    assert_eq!(db.get_headers().len(), 2);
    assert!(db.get_rows().iter().all(|r| r.header_exists("Title") && r.len() == 2));
    Ok(())
}

#[test]
fn test_remove_header() -> Result<(), TallyDBError> {
    let mut db = table_with_rows()?;

    db.remove_header("Hours")?;

    assert_eq!(db.get_headers_string(), vec!["Title (K)"]);
    assert!(db.get_rows().iter().all(|r| r.len() == 1 && !r.header_exists("Hours")));

    // Removing it again changes nothing
    db.remove_header("Hours")?;
    assert_eq!(db.get_headers().len(), 1);
    Ok(())
}

#[test]
fn test_readd_removed_header() -> Result<(), TallyDBError> {
    let mut db = table_with_rows()?;
    db.remove_header("Hours")?;
    db.add_header(Header::number("Hours"))?;

    let row = db.get_row_from_key_header("A").unwrap();
    assert_eq!(row.get_value_from_header("Hours")?.get_value(), "");
    Ok(())
}
