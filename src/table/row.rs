use serde::Serialize;
use std::collections::BTreeMap;

use super::header::Header;
use super::value::Value;
use super::value_type::ValueType;
use crate::error::TallyDBError;
use crate::result::Result;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Field {
    pub header: Header,
    pub value: Value,
}

/// One record: an ordered mapping from header name to value. A row holds
/// at most one key header.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Row {
    fields: Vec<Field>,
}

impl Row {
    pub fn new() -> Self {
        Row { fields: Vec::new() }
    }

    /// Builds a row from `(header, value)` pairs, applying the same checks
    /// as [`Row::add_header_with_value`].
    pub fn from_fields<I, V>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Header, V)>,
        V: Into<Value>,
    {
        let mut row = Row::new();
        for (header, value) in fields {
            row.add_header_with_value(&header.name, header.is_key, header.value_type, value)?;
        }
        Ok(row)
    }

    pub fn get_key_header_and_value(&self) -> Option<(&Header, &Value)> {
        self.fields
            .iter()
            .find(|f| f.header.is_key)
            .map(|f| (&f.header, &f.value))
    }

    pub fn get_key_value(&self) -> Option<&str> {
        self.get_key_header_and_value().map(|(_, v)| v.get_value())
    }

    pub fn get_value_from_header(&self, header: &str) -> Result<&Value> {
        self.field(header)
            .map(|f| &f.value)
            .ok_or_else(|| TallyDBError::header_not_found(header))
    }

    pub fn header_exists(&self, header: &str) -> bool {
        self.field(header).is_some()
    }

    pub fn key_header_value_equal(&self, value: &str) -> bool {
        self.get_key_value() == Some(value)
    }

    /// Inserts the field, or overwrites it if a field with that name exists.
    /// Overwriting the key field keeps it the key field.
    pub fn add_header_with_value(
        &mut self,
        header: &str,
        is_key: bool,
        value_type: ValueType,
        value: impl Into<Value>,
    ) -> Result<()> {
        if is_key {
            if let Some((existing, _)) = self.get_key_header_and_value() {
                return Err(TallyDBError::KeyHeaderAlreadyExists {
                    header: existing.name.clone(),
                });
            }
        }

        match self.fields.iter_mut().find(|f| f.header.name == header) {
            Some(existing) => {
                let is_key = is_key || existing.header.is_key;
                existing.header = Header::new(header, value_type, is_key);
                existing.value = value.into();
            }
            None => self.fields.push(Field {
                header: Header::new(header, value_type, is_key),
                value: value.into(),
            }),
        }
        Ok(())
    }

    pub fn remove_header(&mut self, header: &str) -> Result<()> {
        if let Some((key, _)) = self.get_key_header_and_value() {
            if key.name == header {
                return Err(TallyDBError::CannotDeleteKeyHeader {
                    header: header.to_string(),
                });
            }
        }
        self.fields.retain(|f| f.header.name != header);
        Ok(())
    }

    /// Sets the value of an existing field. Does nothing if the field is absent.
    pub fn update_header_value(&mut self, header: &str, value: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.header.name == header) {
            field.value.set_value(value);
        }
    }

    /// Aligns the row with `schema`: descriptors are taken from the schema
    /// and schema headers missing from the row are added with empty values.
    /// Callers must have rejected fields that are not in the schema.
    pub(crate) fn reconcile(&mut self, schema: &[Header]) {
        for header in schema {
            match self.fields.iter_mut().find(|f| f.header.name == header.name) {
                Some(field) => field.header = header.clone(),
                None => self.fields.push(Field {
                    header: header.clone(),
                    value: Value::default(),
                }),
            }
        }
    }

    pub fn headers(&self) -> impl Iterator<Item = &Header> {
        self.fields.iter().map(|f| &f.header)
    }

    /// `(header name, value)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|f| (f.header.name.as_str(), f.value.get_value()))
    }

    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(h, v)| (h.to_string(), v.to_string()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn field(&self, header: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.header.name == header)
    }
}
