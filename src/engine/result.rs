use derive_more::Display;
use sqlx::{Column as _, Row as _, TypeInfo as _, ValueRef as _, sqlite::SqliteRow};

/// A single cell returned by SQLite, by storage class.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum Value {
    #[display("NULL")]
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    #[display("<blob {} bytes>", _0.len())]
    Blob(Vec<u8>),
}

impl Value {
    /// Decode column `index` of `row` according to the storage class of the
    /// value actually stored, falling back to text for declared-only types.
    pub(crate) fn decode(row: &SqliteRow, index: usize) -> crate::Result<Self> {
        let raw = row.try_get_raw(index)?;
        if raw.is_null() {
            return Ok(Value::Null);
        }
        let class = raw.type_info().name().to_ascii_uppercase();
        Ok(match class.as_str() {
            "INTEGER" | "INT" | "BIGINT" | "BOOLEAN" => Value::Integer(row.try_get_unchecked(index)?),
            "REAL" | "FLOAT" | "DOUBLE" => Value::Real(row.try_get_unchecked(index)?),
            "BLOB" => Value::Blob(row.try_get_unchecked(index)?),
            _ => Value::Text(row.try_get_unchecked(index)?),
        })
    }
}

/// Rows produced by one statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Empty result set with the column names of `row`.
    pub(crate) fn headed_by(row: &SqliteRow) -> Self {
        Self {
            columns: row.columns().iter().map(|c| c.name().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, row: &SqliteRow) -> crate::Result {
        let values = (0..row.len())
            .map(|i| Value::decode(row, i))
            .collect::<crate::Result<Vec<_>>>()?;
        self.rows.push(values);
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
