use std::fmt::Write;

use anyhow::Result;

use crate::bulk::QueryMultiplier;
use crate::codegen::options::Options;
use crate::codegen::plan::BulkInsert;

pub const GENERATOR_NAME: &str = "sqlc-gen-bulk";

/// Rust string literal for `s`; `str`'s Debug output is valid literal syntax.
fn lit(s: &str) -> String { format!("{:?}", s) }

/// Render the generated module for `inserts`.
pub fn render_module(sqlc_version: &str, opts: &Options, multiplier: &QueryMultiplier, inserts: &[BulkInsert]) -> Result<String> {
    let rt = &opts.runtime_crate;
    let custom = !multiplier.is_default();
    let mut out = String::new();

    writeln!(out, "// Code generated by {}. DO NOT EDIT.", GENERATOR_NAME)?;
    writeln!(out, "// versions:")?;
    writeln!(out, "//   sqlc v{}", sqlc_version.trim_start_matches('v'))?;
    writeln!(out, "//   {} v{}", GENERATOR_NAME, env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "// package: {}", opts.package)?;
    writeln!(out)?;
    writeln!(out, "#![allow(dead_code)]")?;
    writeln!(out)?;
    if custom {
        writeln!(out, "use {}::bulk::{{BulkRecord, BulkStatement, QueryMultiplier, SuffixKeyword}};", rt)?;
    } else {
        writeln!(out, "use {}::bulk::{{BulkRecord, BulkStatement}};", rt)?;
    }
    writeln!(out, "use {}::error::BulkResult;", rt)?;

    if custom {
        writeln!(out)?;
        writeln!(out, "fn multiplier() -> BulkResult<QueryMultiplier> {{")?;
        writeln!(out, "    let m = QueryMultiplier::new().with_placeholder({});", lit(multiplier.placeholder()))?;
        for kw in &opts.suffix_keywords {
            writeln!(out, "    let m = m.with_suffix_keyword(SuffixKeyword::custom({}))?;", lit(kw))?;
        }
        writeln!(out, "    Ok(m)")?;
        writeln!(out, "}}")?;
    }

    for b in inserts {
        let source = format!("{}_SOURCE", b.const_prefix);
        let fields = format!("{}_FIELDS", b.const_prefix);
        let field_list = b.field_names.iter().map(|f| lit(f)).collect::<Vec<_>>().join(", ");

        writeln!(out)?;
        writeln!(out, "/// Source statement of `{}`.", b.query_name)?;
        writeln!(out, "pub const {}: &str = {};", source, lit(&b.source_query))?;
        writeln!(out, "/// Row fields bound by `{}`, in placeholder order.", b.fn_name)?;
        writeln!(out, "pub const {}: &[&str] = &[{}];", fields, field_list)?;
        writeln!(out)?;
        writeln!(out, "/// Bulk variant of `{}`: one statement inserting every row of `rows`.", b.query_name)?;
        writeln!(out, "/// Binds {} value(s) per row: {}.", b.num_params(), b.column_names.join(", "))?;
        writeln!(out, "/// `rows` are usually `{}` values declared with `bulk_record!`.", b.params_type)?;
        writeln!(out, "pub fn {}<R: BulkRecord>(rows: &[R]) -> BulkResult<BulkStatement> {{", b.fn_name)?;
        if custom {
            writeln!(out, "    BulkStatement::prepare_with(&multiplier()?, {}, rows, {})", source, fields)?;
        } else {
            writeln!(out, "    BulkStatement::prepare({}, rows, {})", source, fields)?;
        }
        writeln!(out, "}}")?;
    }
    Ok(out)
}
