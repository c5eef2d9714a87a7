use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::database::Database;
use crate::error::TallyDBError;
use crate::result::Result;
use crate::table::header::Header;

/// Table definition loaded from YAML:
///
/// ```yaml
/// name: Platinum Tracker
/// key_header: Title
/// headers:
///   - { name: Title, type: string, key: true }
///   - { name: Hours, type: number }
/// rows:
///   - { Title: Jak 2, Hours: "23" }
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TableTemplate {
    pub name: String,
    pub key_header: String,
    pub headers: Vec<Header>,
    #[serde(default)]
    pub rows: Vec<BTreeMap<String, String>>,
}

impl TableTemplate {
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| TallyDBError::Template(format!("failed to parse template: {}", e)))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TallyDBError::Template(format!("failed to read {}: {}", path.display(), e))
        })?;
        let template = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), table = %template.name, "loaded template");
        Ok(template)
    }

    /// Creates the table and inserts every seed row through [`Database::add_row`].
    pub fn build(&self) -> Result<Database> {
        let mut db = Database::new(&self.name, self.headers.clone(), &self.key_header)?;
        for values in &self.rows {
            let row = db.new_row(values.iter().map(|(h, v)| (h.as_str(), v.as_str())))?;
            db.add_row(row)?;
        }
        Ok(db)
    }
}
