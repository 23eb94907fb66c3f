use serde::Serialize;
use tracing::{debug, warn};

use crate::bulk::bulk_common::{leading_keyword, strip_sql_comments};
use crate::bulk::QueryMultiplier;
use crate::codegen::request::{GenerateRequest, Query};
use crate::ident::{const_ident, field_name, pascal_to_snake_case, rust_ident, snake_to_pascal_case};

/// Statement kinds whose VALUES clause can be multiplied.
const BULK_KINDS: &[&str] = &["INSERT", "REPLACE"];

/// One query selected for bulk generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkInsert {
    /// sqlc query name, e.g. `InsertUser`.
    pub query_name: String,
    /// Generated function name, e.g. `insert_user_bulk`.
    pub fn_name: String,
    /// Prefix of the generated constants, e.g. `INSERT_USER_BULK`.
    pub const_prefix: String,
    /// Conventional row type for the query, e.g. `InsertUserParams`.
    pub params_type: String,
    /// Query text with comments removed; the template handed to the rewriter.
    pub source_query: String,
    pub column_names: Vec<String>,
    /// Row field names in parameter order.
    pub field_names: Vec<String>,
}

impl BulkInsert {
    pub fn num_params(&self) -> usize { self.field_names.len() }
}

pub fn is_bulk_candidate(q: &Query) -> bool {
    if q.params.is_empty() { return false; }
    matches!(leading_keyword(&q.text), Some(k) if BULK_KINDS.contains(&k.as_str()))
}

/// Select the INSERT queries of `req` that can be multiplied.
/// A query the rewriter rejects is skipped with a warning; the others still generate.
pub fn build_bulk_inserts(req: &GenerateRequest, multiplier: &QueryMultiplier) -> Vec<BulkInsert> {
    let mut out = Vec::new();
    for q in &req.queries {
        if !is_bulk_candidate(q) {
            debug!(target: "sqlc_gen_bulk::codegen", "skip {}: not an INSERT with parameters", q.name);
            continue;
        }
        let source_query = strip_sql_comments(&q.text).trim().to_string();
        if let Err(e) = multiplier.rewrite(&source_query, 1, q.params.len()) {
            warn!(target: "sqlc_gen_bulk::codegen", "skip {}: {} ({})", q.name, e, e.code_str());
            continue;
        }

        let base = pascal_to_snake_case(&q.name);
        let column_names: Vec<String> = q.params.iter().map(|p| p.column.name.clone()).collect();
        let field_names: Vec<String> = column_names.iter().map(|c| field_name(c)).collect();
        debug!(target: "sqlc_gen_bulk::codegen", "plan {}: columns={:?}", q.name, column_names);
        out.push(BulkInsert {
            query_name: q.name.clone(),
            fn_name: rust_ident(&format!("{}_bulk", base)),
            const_prefix: format!("{}_BULK", const_ident(&q.name)),
            params_type: format!("{}Params", snake_to_pascal_case(&base)),
            source_query,
            column_names,
            field_names,
        });
    }
    out
}
