//! Error model for the bulk-insert rewriter and value flattener.
//! Every variant is a deterministic input failure; callers surface it and move on,
//! nothing here is retried.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BulkError {
    #[error("number of arguments (rows) for bulk insert cannot be zero")]
    InvalidArgumentCount,

    #[error("number of parameters per argument (columns) for bulk insert cannot be zero")]
    InvalidParameterCount,

    #[error("invalid query format: VALUES clause not found in original query: {query}")]
    ValuesClauseNotFound { query: String },

    #[error("rows[{index}] (type {type_name}) is not a struct or reference to struct")]
    NotAStruct { index: usize, type_name: &'static str },

    #[error("rows[{index}] (type {type_name}): field '{field}' not found")]
    FieldNotFound { index: usize, type_name: &'static str, field: String },

    #[error("rows[{index}] (type {type_name}): field '{field}' cannot be read (not exported)")]
    FieldNotAccessible { index: usize, type_name: &'static str, field: String },

    #[error("invalid suffix keyword '{keyword}': {reason}")]
    InvalidSuffixKeyword { keyword: String, reason: String },
}

impl BulkError {
    pub fn code_str(&self) -> &'static str {
        match self {
            BulkError::InvalidArgumentCount => "invalid_argument_count",
            BulkError::InvalidParameterCount => "invalid_parameter_count",
            BulkError::ValuesClauseNotFound { .. } => "values_clause_not_found",
            BulkError::NotAStruct { .. } => "not_a_struct",
            BulkError::FieldNotFound { .. } => "field_not_found",
            BulkError::FieldNotAccessible { .. } => "field_not_accessible",
            BulkError::InvalidSuffixKeyword { .. } => "invalid_suffix_keyword",
        }
    }

    /// Row index for flattening failures; `None` for rewrite failures.
    pub fn row_index(&self) -> Option<usize> {
        match self {
            BulkError::NotAStruct { index, .. }
            | BulkError::FieldNotFound { index, .. }
            | BulkError::FieldNotAccessible { index, .. } => Some(*index),
            _ => None,
        }
    }
}

pub type BulkResult<T> = Result<T, BulkError>;
