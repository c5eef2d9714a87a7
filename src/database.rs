use crate::error::TallyDBError;
use crate::query::filter::Filter;
use crate::query::op::{NumberOp, Op};
use crate::result::Result;
use crate::table::header::Header;
use crate::table::row::Row;
use crate::table::rows::Rows;
use crate::table::value::Value;

/// A named table: a header set with exactly one key header, plus its rows.
///
/// Every row and column operation goes through this type, which keeps the
/// schema and the rows consistent with each other:
///
/// - header names are unique and exactly one header is the key header;
/// - every stored row carries exactly the schema's header names;
/// - key values are non-empty and unique across rows.
#[derive(Debug, Clone)]
pub struct Database {
    name: String,
    key_header: String,
    headers: Vec<Header>,
    rows: Rows,
}

impl Database {
    /// Creates an empty table. `headers` must contain a header named
    /// `key_header` that is flagged as key, no other key header and no
    /// repeated header names.
    pub fn new(name: &str, headers: Vec<Header>, key_header: &str) -> Result<Self> {
        let key_header_missing = || TallyDBError::KeyHeaderEmpty {
            header: key_header.to_string(),
        };
        if key_header.is_empty() || headers.is_empty() {
            return Err(key_header_missing());
        }
        if !headers.iter().any(|h| h.name == key_header && h.is_key) {
            return Err(key_header_missing());
        }
        if let Some(extra) = headers.iter().find(|h| h.is_key && h.name != key_header) {
            return Err(TallyDBError::KeyHeaderAlreadyExists {
                header: extra.name.clone(),
            });
        }
        for (i, header) in headers.iter().enumerate() {
            if headers[..i].iter().any(|h| h.name == header.name) {
                return Err(TallyDBError::DuplicateHeader {
                    header: header.name.clone(),
                });
            }
        }

        let mut db = Database {
            name: name.to_string(),
            key_header: key_header.to_string(),
            headers: Vec::with_capacity(headers.len()),
            rows: Rows::new(),
        };
        for header in headers {
            db.add_header(header)?;
        }
        if !db.header(key_header).is_some_and(|h| h.is_key) {
            return Err(key_header_missing());
        }
        tracing::debug!(table = %db.name, key = %db.key_header, headers = db.headers.len(), "created table");
        Ok(db)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key_header(&self) -> &str {
        &self.key_header
    }

    pub fn header(&self, name: &str) -> Option<&Header> {
        self.headers.iter().find(|h| h.name == name)
    }

    pub fn header_exists(&self, name: &str) -> bool {
        self.header(name).is_some()
    }

    pub fn get_headers(&self) -> &[Header] {
        &self.headers
    }

    /// Header names for display, the key header marked with ` (K)`.
    pub fn get_headers_string(&self) -> Vec<String> {
        self.headers
            .iter()
            .map(|h| {
                if h.is_key {
                    format!("{} (K)", h.name)
                } else {
                    h.name.clone()
                }
            })
            .collect()
    }

    /// Adds `header` to the schema and an empty cell for it to every row.
    /// A header whose name is already present is ignored.
    pub fn add_header(&mut self, header: Header) -> Result<()> {
        if self.header_exists(&header.name) {
            tracing::trace!(table = %self.name, header = %header.name, "header already present");
            return Ok(());
        }
        if header.is_key {
            if let Some(key) = self.headers.iter().find(|h| h.is_key) {
                return Err(TallyDBError::KeyHeaderAlreadyExists {
                    header: key.name.clone(),
                });
            }
        }

        for row in self.rows.get_rows_mut() {
            row.add_header_with_value(&header.name, false, header.value_type, Value::default())?;
        }
        tracing::debug!(table = %self.name, header = %header.name, "added header");
        self.headers.push(header);
        Ok(())
    }

    pub fn remove_header(&mut self, header: &str) -> Result<()> {
        if header == self.key_header {
            return Err(TallyDBError::CannotDeleteKeyHeader {
                header: header.to_string(),
            });
        }
        self.headers.retain(|h| h.name != header);
        self.rows.remove_header(header);
        tracing::debug!(table = %self.name, header, "removed header");
        Ok(())
    }

    /// Validates `row` against the schema, fills in missing headers with
    /// empty values and stores it.
    pub fn add_row(&mut self, mut row: Row) -> Result<()> {
        let key = match row.get_key_header_and_value() {
            Some((header, value)) if header.name == self.key_header => value.get_value(),
            other => {
                return Err(TallyDBError::KeyHeaderIncorrect {
                    expected: self.key_header.clone(),
                    found: other.map(|(h, _)| h.name.clone()).unwrap_or_default(),
                })
            }
        };
        if key.is_empty() {
            return Err(TallyDBError::KeyHeaderEmpty {
                header: self.key_header.clone(),
            });
        }
        if let Some(extra) = row.headers().find(|h| !self.header_exists(&h.name)) {
            return Err(TallyDBError::header_not_found(&extra.name));
        }

        row.reconcile(&self.headers);
        let key = row.get_key_value().unwrap_or_default().to_string();
        self.rows.add_row(row)?;
        tracing::debug!(table = %self.name, %key, "added row");
        Ok(())
    }

    /// Builds a row from `(header name, value)` pairs using the schema's
    /// header descriptors. The row is not stored.
    pub fn new_row<I, K, V>(&self, values: I) -> Result<Row>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut row = Row::new();
        for (name, value) in values {
            let header = self
                .header(name.as_ref())
                .ok_or_else(|| TallyDBError::header_not_found(name.as_ref()))?;
            row.add_header_with_value(&header.name, header.is_key, header.value_type, value)?;
        }
        Ok(row)
    }

    /// Deletes the row keyed by `key_value`. Unknown keys are not an error.
    pub fn remove_row(&mut self, key_value: &str) -> Result<()> {
        if key_value.is_empty() {
            return Err(TallyDBError::KeyValueEmpty);
        }
        let removed = self.rows.delete_row_with_value(key_value);
        tracing::debug!(table = %self.name, key = key_value, removed, "removed row");
        Ok(())
    }

    pub fn get_rows(&self) -> &[Row] {
        self.rows.get_rows()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sets `header` to `value` on the row keyed by `key`. A `key` matching
    /// no row is silently ignored; an unknown `header` is an error.
    pub fn add_value_to_header(&mut self, value: &str, header: &str, key: &str) -> Result<()> {
        if !self.header_exists(header) {
            return Err(TallyDBError::header_not_found(header));
        }
        if self.rows.get_row_from_key_header(key).is_none() {
            tracing::trace!(table = %self.name, key, "no row for key");
            return Ok(());
        }
        if header == self.key_header && value != key {
            if value.is_empty() {
                return Err(TallyDBError::KeyValueEmpty);
            }
            if self.rows.get_row_from_key_header(value).is_some() {
                return Err(TallyDBError::DuplicateKeyValue {
                    header: header.to_string(),
                    value: value.to_string(),
                });
            }
        }
        self.rows.add_value_to_row_with_key_header(value, header, key);
        Ok(())
    }

    pub fn get_row_from_key_header(&self, value: &str) -> Option<&Row> {
        self.rows.get_row_from_key_header(value)
    }

    pub fn get_rows_from_header_and_value(&self, header: &str, value: &str) -> Result<Vec<&Row>> {
        if !self.header_exists(header) {
            return Err(TallyDBError::header_not_found(header));
        }
        self.rows.get_rows_from_header_and_value(header, value)
    }

    /// Rows whose numeric `header` value compares strictly against `value`.
    /// The first cell that does not parse as a number aborts the scan.
    pub fn get_rows_from_header_and_value_number_operation(
        &self,
        header: &str,
        value: &str,
        op: NumberOp,
    ) -> Result<Vec<&Row>> {
        let operand = value
            .parse::<f64>()
            .map_err(|e| TallyDBError::NotANumber {
                value: value.to_string(),
                source: Some(e),
            })?;
        let h = self
            .header(header)
            .ok_or_else(|| TallyDBError::header_not_found(header))?;

        let mut rows = Vec::new();
        for row in self.rows.get_rows() {
            let cell = h.to_number(row.get_value_from_header(header)?)?;
            if op.evaluate(cell, operand) {
                rows.push(row);
            }
        }
        Ok(rows)
    }

    pub fn select(&self, filter: &Filter) -> Result<Vec<&Row>> {
        match filter.op {
            Op::Equal => self.get_rows_from_header_and_value(&filter.header, &filter.value),
            Op::NotEqual => {
                if !self.header_exists(&filter.header) {
                    return Err(TallyDBError::header_not_found(&filter.header));
                }
                self.rows
                    .get_rows_where(&filter.header, |v| v != filter.value)
            }
            Op::Number(op) => self.get_rows_from_header_and_value_number_operation(
                &filter.header,
                &filter.value,
                op,
            ),
        }
    }

    /// Parses `filter` (for example `Hours > 15`) and runs it.
    pub fn query(&self, filter: &str) -> Result<Vec<&Row>> {
        let filter: Filter = filter.parse()?;
        self.select(&filter)
    }
}
