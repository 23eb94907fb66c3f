use serde::Serialize;
use tracing::debug;

use crate::bulk::bulk_record::{BulkRecord, FieldAccess};
use crate::bulk::bulk_rewrite::QueryMultiplier;
use crate::bulk::bulk_values::BindValue;
use crate::error::{BulkError, BulkResult};

/// Flatten `rows` × `field_names` into one row-major argument list: every field
/// of row 0 in `field_names` order, then row 1, and so on. This is the order the
/// placeholders of a multiplied INSERT expect.
///
/// Empty `field_names` yields an empty list without looking at the rows.
/// The first row that is not a record, or lacks a readable field, fails the
/// whole call.
pub fn extract_field_values<R, S>(rows: &[R], field_names: &[S]) -> BulkResult<Vec<BindValue>>
where
    R: BulkRecord,
    S: AsRef<str>,
{
    if field_names.is_empty() {
        return Ok(Vec::new());
    }

    let mut values = Vec::with_capacity(rows.len() * field_names.len());
    for (index, row) in rows.iter().enumerate() {
        if !row.is_record() {
            return Err(BulkError::NotAStruct { index, type_name: row.type_name() });
        }
        for name in field_names {
            let name = name.as_ref();
            match row.field(name) {
                FieldAccess::Value(v) => values.push(v),
                FieldAccess::Missing => {
                    return Err(BulkError::FieldNotFound { index, type_name: row.type_name(), field: name.to_string() });
                }
                FieldAccess::Private => {
                    return Err(BulkError::FieldNotAccessible { index, type_name: row.type_name(), field: name.to_string() });
                }
            }
        }
    }
    Ok(values)
}

/// A multiplied statement together with the arguments that fill it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkStatement {
    pub query: String,
    pub values: Vec<BindValue>,
}

impl BulkStatement {
    /// Rewrite `source` for `rows.len()` rows of `field_names.len()` columns and
    /// flatten the rows to match, using the default placeholder and keywords.
    pub fn prepare<R, S>(source: &str, rows: &[R], field_names: &[S]) -> BulkResult<Self>
    where
        R: BulkRecord,
        S: AsRef<str>,
    {
        Self::prepare_with(QueryMultiplier::shared(), source, rows, field_names)
    }

    pub fn prepare_with<R, S>(multiplier: &QueryMultiplier, source: &str, rows: &[R], field_names: &[S]) -> BulkResult<Self>
    where
        R: BulkRecord,
        S: AsRef<str>,
    {
        let query = multiplier.rewrite(source, rows.len(), field_names.len())?;
        let values = extract_field_values(rows, field_names).map_err(|e| {
            debug!(target: "sqlc_gen_bulk::flatten", "flatten failed at row {:?}: {}", e.row_index(), e.code_str());
            e
        })?;
        debug!(target: "sqlc_gen_bulk::flatten", "prepared bulk statement: rows={}, columns={}, values={}", rows.len(), field_names.len(), values.len());
        Ok(Self { query, values })
    }
}
