// Code generated by sqlc-gen-bulk. DO NOT EDIT.
// versions:
//   sqlc v1.27.0
//   sqlc-gen-bulk v0.1.0
// package: db

#![allow(dead_code)]

use sqlc_gen_bulk::bulk::{BulkRecord, BulkStatement};
use sqlc_gen_bulk::error::BulkResult;

/// Source statement of `InsertUser`.
pub const INSERT_USER_BULK_SOURCE: &str = "INSERT INTO users (id, name, type) VALUES (?, ?, ?) ON DUPLICATE KEY UPDATE name = VALUES(name);";
/// Row fields bound by `insert_user_bulk`, in placeholder order.
pub const INSERT_USER_BULK_FIELDS: &[&str] = &["id", "name", "type"];

/// Bulk variant of `InsertUser`: one statement inserting every row of `rows`.
/// Binds 3 value(s) per row: id, name, type.
/// `rows` are usually `InsertUserParams` values declared with `bulk_record!`.
pub fn insert_user_bulk<R: BulkRecord>(rows: &[R]) -> BulkResult<BulkStatement> {
    BulkStatement::prepare(INSERT_USER_BULK_SOURCE, rows, INSERT_USER_BULK_FIELDS)
}

/// Source statement of `ReplaceTag`.
pub const REPLACE_TAG_BULK_SOURCE: &str = "REPLACE INTO tags (tag_name) VALUES (?)";
/// Row fields bound by `replace_tag_bulk`, in placeholder order.
pub const REPLACE_TAG_BULK_FIELDS: &[&str] = &["tag_name"];

/// Bulk variant of `ReplaceTag`: one statement inserting every row of `rows`.
/// Binds 1 value(s) per row: tag_name.
/// `rows` are usually `ReplaceTagParams` values declared with `bulk_record!`.
pub fn replace_tag_bulk<R: BulkRecord>(rows: &[R]) -> BulkResult<BulkStatement> {
    BulkStatement::prepare(REPLACE_TAG_BULK_SOURCE, rows, REPLACE_TAG_BULK_FIELDS)
}
