pub mod bulk;
pub mod codegen;
pub mod error;
pub mod ident;

pub use bulk::{build_bulk_insert_query, extract_field_values, BindValue, BulkRecord, BulkStatement, FieldAccess, QueryMultiplier};
pub use error::{BulkError, BulkResult};
