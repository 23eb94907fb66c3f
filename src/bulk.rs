//! Bulk INSERT support shared by the generator and by generated code.
//! - `bulk_rewrite`: multiplies a single-row INSERT into an N-row INSERT
//! - `bulk_flatten`: flattens row records into the matching argument list

pub mod bulk_common;
pub mod bulk_flatten;
pub mod bulk_record;
pub mod bulk_rewrite;
pub mod bulk_values;

pub use bulk_common::{default_suffix_keywords, strip_sql_comments, SuffixKeyword, SuffixKind};
pub use bulk_flatten::*;
pub use bulk_record::*;
pub use bulk_rewrite::*;
pub use bulk_values::*;
