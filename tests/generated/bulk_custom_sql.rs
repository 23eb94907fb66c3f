// Code generated by sqlc-gen-bulk. DO NOT EDIT.
// versions:
//   sqlc v1.27.0
//   sqlc-gen-bulk v0.1.0
// package: db

#![allow(dead_code)]

use sqlc_gen_bulk::bulk::{BulkRecord, BulkStatement, QueryMultiplier, SuffixKeyword};
use sqlc_gen_bulk::error::BulkResult;

fn multiplier() -> BulkResult<QueryMultiplier> {
    let m = QueryMultiplier::new().with_placeholder("@p");
    let m = m.with_suffix_keyword(SuffixKeyword::custom("AS new"))?;
    Ok(m)
}

/// Source statement of `UpsertUser`.
pub const UPSERT_USER_BULK_SOURCE: &str = "INSERT INTO users (id, name) VALUES (@p, @p) AS new ON DUPLICATE KEY UPDATE name = new.name";
/// Row fields bound by `upsert_user_bulk`, in placeholder order.
pub const UPSERT_USER_BULK_FIELDS: &[&str] = &["id", "name"];

/// Bulk variant of `UpsertUser`: one statement inserting every row of `rows`.
/// Binds 2 value(s) per row: id, name.
/// `rows` are usually `UpsertUserParams` values declared with `bulk_record!`.
pub fn upsert_user_bulk<R: BulkRecord>(rows: &[R]) -> BulkResult<BulkStatement> {
    BulkStatement::prepare_with(&multiplier()?, UPSERT_USER_BULK_SOURCE, rows, UPSERT_USER_BULK_FIELDS)
}
