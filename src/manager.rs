use std::collections::BTreeMap;

use crate::database::Database;
use crate::error::TallyDBError;
use crate::result::Result;
use crate::table::header::Header;
use crate::template::TableTemplate;

/// Registry of tables by name.
#[derive(Debug, Clone, Default)]
pub struct DatabaseManager {
    databases: BTreeMap<String, Database>,
}

impl DatabaseManager {
    pub fn new() -> Self {
        DatabaseManager {
            databases: BTreeMap::new(),
        }
    }

    pub fn create_database(
        &mut self,
        name: &str,
        headers: Vec<Header>,
        key_header: &str,
    ) -> Result<&mut Database> {
        if self.database_exists(name) {
            return Err(TallyDBError::DatabaseAlreadyExists {
                name: name.to_string(),
            });
        }
        let db = Database::new(name, headers, key_header)?;
        Ok(self.insert(db))
    }

    /// Creates the table described by `template`, seed rows included.
    pub fn create_from_template(&mut self, template: &TableTemplate) -> Result<&mut Database> {
        if self.database_exists(&template.name) {
            return Err(TallyDBError::DatabaseAlreadyExists {
                name: template.name.clone(),
            });
        }
        let db = template.build()?;
        Ok(self.insert(db))
    }

    pub fn database_exists(&self, name: &str) -> bool {
        self.databases.contains_key(name)
    }

    pub fn database(&self, name: &str) -> Result<&Database> {
        self.databases
            .get(name)
            .ok_or_else(|| TallyDBError::DatabaseNotFound {
                name: name.to_string(),
            })
    }

    pub fn database_mut(&mut self, name: &str) -> Result<&mut Database> {
        self.databases
            .get_mut(name)
            .ok_or_else(|| TallyDBError::DatabaseNotFound {
                name: name.to_string(),
            })
    }

    pub fn remove_database(&mut self, name: &str) -> Result<Database> {
        let db = self
            .databases
            .remove(name)
            .ok_or_else(|| TallyDBError::DatabaseNotFound {
                name: name.to_string(),
            })?;
        tracing::debug!(table = name, "removed table");
        Ok(db)
    }

    /// Tables in name order.
    pub fn databases(&self) -> impl Iterator<Item = &Database> {
        self.databases.values()
    }

    pub fn len(&self) -> usize {
        self.databases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.databases.is_empty()
    }

    fn insert(&mut self, db: Database) -> &mut Database {
        tracing::debug!(table = %db.name(), "registered table");
        self.databases.entry(db.name().to_string()).or_insert(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::value_type::ValueType;

    fn title() -> Vec<Header> {
        vec![Header::key("Title", ValueType::String)]
    }

    #[test]
    fn test_new() {
        let dbm = DatabaseManager::new();
        assert!(dbm.is_empty());
        assert_eq!(dbm.databases().count(), 0);
    }

    #[test]
    fn test_create_database() {
        let mut dbm = DatabaseManager::new();
        dbm.create_database("existing db", title(), "Title").unwrap();

        assert!(dbm.create_database("new db", title(), "Title").is_ok());
        assert!(matches!(
            dbm.create_database("existing db", vec![], ""),
            Err(TallyDBError::DatabaseAlreadyExists { ref name }) if name == "existing db"
        ));
        assert!(matches!(
            dbm.create_database("other db", title(), ""),
            Err(TallyDBError::KeyHeaderEmpty { .. })
        ));
        assert!(dbm.create_database("other db", vec![], "Title").is_err());
        assert!(dbm
            .create_database(
                "other db",
                vec![Header::key("NotKey", ValueType::String)],
                "Title"
            )
            .is_err());

        assert_eq!(dbm.len(), 2);
        assert!(!dbm.database_exists("other db"));
    }

    #[test]
    fn test_database_lookup() -> Result<()> {
        let mut dbm = DatabaseManager::new();
        dbm.create_database("test", title(), "Title")?;

        assert!(dbm.database_exists("test"));
        assert!(!dbm.database_exists("Not exists"));
        assert_eq!(dbm.database("test")?.name(), "test");
        assert!(matches!(
            dbm.database("Not exists"),
            Err(TallyDBError::DatabaseNotFound { .. })
        ));

        let db = dbm.database_mut("test")?;
        db.add_row(db.new_row([("Title", "A")])?)?;
        assert_eq!(dbm.database("test")?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_remove_database() -> Result<()> {
        let mut dbm = DatabaseManager::new();
        dbm.create_database("b", title(), "Title")?;
        dbm.create_database("a", title(), "Title")?;

        let names: Vec<_> = dbm.databases().map(Database::name).collect();
        assert_eq!(names, vec!["a", "b"]);

        let removed = dbm.remove_database("a")?;
        assert_eq!(removed.name(), "a");
        assert!(matches!(
            dbm.remove_database("a"),
            Err(TallyDBError::DatabaseNotFound { .. })
        ));
        assert_eq!(dbm.len(), 1);
        Ok(())
    }
}
