use tallydb::{Database, DatabaseManager, TableTemplate, TallyDBError};
use tracing_subscriber::EnvFilter;

const TEMPLATE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/platinum_tracker.yaml");

fn print_rows(db: &Database) {
    println!("Rows:");
    for row in db.get_rows() {
        for (header, value) in row.iter() {
            println!("{}: {}", header, value);
        }
        println!();
    }
}

fn main() -> Result<(), TallyDBError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let template = TableTemplate::from_file(TEMPLATE)?;
    let mut dbm = DatabaseManager::new();
    let db = dbm.create_from_template(&template)?;
    tracing::info!(table = %db.name(), rows = db.len(), "table created");

    println!("Headers:");
    for header in db.get_headers_string() {
        println!("{}", header);
    }
    println!();
    print_rows(db);

    let title = "Destroy All Humans! 2 Reprobed";
    db.add_value_to_header("20", "Hours to Platinum", title)?;
    db.add_value_to_header("1", "Platinumed", title)?;
    print_rows(db);

    println!("Hours to Platinum < 30:");
    for row in db.query("Hours to Platinum < 30")? {
        println!("{}", row.get_key_value().unwrap_or_default());
    }

    Ok(())
}
