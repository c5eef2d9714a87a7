use super::row::Row;
use crate::error::TallyDBError;
use crate::result::Result;

/// Rows of one table in insertion order. No two rows share a key value.
#[derive(Debug, Clone, Default)]
pub struct Rows {
    items: Vec<Row>,
}

impl Rows {
    pub fn new() -> Self {
        Rows { items: Vec::new() }
    }

    pub fn get_rows(&self) -> &[Row] {
        &self.items
    }

    pub(crate) fn get_rows_mut(&mut self) -> &mut [Row] {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add_row(&mut self, row: Row) -> Result<()> {
        if let Some((header, value)) = row.get_key_header_and_value() {
            if self
                .items
                .iter()
                .any(|r| r.key_header_value_equal(value.get_value()))
            {
                return Err(TallyDBError::DuplicateKeyValue {
                    header: header.name.clone(),
                    value: value.get_value().to_string(),
                });
            }
        }
        self.items.push(row);
        Ok(())
    }

    /// Removes every row whose key value equals `row`'s.
    pub fn delete_row(&mut self, row: &Row) -> usize {
        match row.get_key_value() {
            Some(key) => self.delete_row_with_value(key),
            None => 0,
        }
    }

    pub fn delete_row_with_value(&mut self, key: &str) -> usize {
        let initial_len = self.items.len();
        self.items.retain(|r| !r.key_header_value_equal(key));
        initial_len - self.items.len()
    }

    pub fn remove_header(&mut self, header: &str) {
        for row in self.items.iter_mut() {
            if let Err(err) = row.remove_header(header) {
                tracing::trace!(%err, "skipping key header removal");
            }
        }
    }

    /// Sets `header` to `value` on the row keyed by `key`. Unknown keys are ignored.
    pub fn add_value_to_row_with_key_header(&mut self, value: &str, header: &str, key: &str) {
        if let Some(row) = self.items.iter_mut().find(|r| r.key_header_value_equal(key)) {
            row.update_header_value(header, value);
        }
    }

    pub fn get_row_from_key_header(&self, key: &str) -> Option<&Row> {
        self.items.iter().find(|r| r.key_header_value_equal(key))
    }

    pub fn get_rows_from_header_and_value(&self, header: &str, value: &str) -> Result<Vec<&Row>> {
        self.get_rows_where(header, |v| v == value)
    }

    pub(crate) fn get_rows_where<F>(&self, header: &str, predicate: F) -> Result<Vec<&Row>>
    where
        F: Fn(&str) -> bool,
    {
        let mut rows = Vec::new();
        for row in &self.items {
            if predicate(row.get_value_from_header(header)?.get_value()) {
                rows.push(row);
            }
        }
        Ok(rows)
    }
}
