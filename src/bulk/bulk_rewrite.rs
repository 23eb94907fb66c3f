use once_cell::sync::Lazy;
use tracing::debug;

use crate::bulk::bulk_common::*;
use crate::error::{BulkError, BulkResult};

pub const DEFAULT_PLACEHOLDER: &str = "?";

/// A single-row INSERT cut around its VALUES clause.
/// `prefix` already ends in `" VALUES "`; `suffix` is empty or starts with one space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseSplit {
    pub prefix: String,
    pub suffix: String,
    pub suffix_kind: Option<SuffixKind>,
}

/// Rewrites single-row INSERT templates into N-row statements.
///
/// The value holds only immutable configuration (placeholder token and the
/// trailing-clause keyword table), so one instance can be shared freely across
/// threads and every call is determined by its arguments.
#[derive(Debug, Clone)]
pub struct QueryMultiplier {
    placeholder: String,
    keywords: Vec<CompiledKeyword>,
}

static DEFAULT_MULTIPLIER: Lazy<QueryMultiplier> = Lazy::new(QueryMultiplier::new);

impl Default for QueryMultiplier {
    fn default() -> Self { Self::new() }
}

impl QueryMultiplier {
    pub fn new() -> Self {
        Self { placeholder: DEFAULT_PLACEHOLDER.to_string(), keywords: DEFAULT_KEYWORDS.clone() }
    }

    /// Shared instance with the default placeholder and keyword table.
    pub fn shared() -> &'static QueryMultiplier { &DEFAULT_MULTIPLIER }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_suffix_keyword(mut self, keyword: SuffixKeyword) -> BulkResult<Self> {
        if self.keywords.iter().any(|k| k.entry.keyword.eq_ignore_ascii_case(keyword.keyword.trim())) {
            return Ok(self);
        }
        self.keywords.push(CompiledKeyword::compile(keyword)?);
        Ok(self)
    }

    pub fn placeholder(&self) -> &str { &self.placeholder }

    pub fn suffix_keywords(&self) -> impl Iterator<Item = &SuffixKeyword> {
        self.keywords.iter().map(|k| &k.entry)
    }

    /// True when this multiplier renders exactly what `QueryMultiplier::new()` renders.
    pub fn is_default(&self) -> bool {
        self.placeholder == DEFAULT_PLACEHOLDER && self.keywords.len() == DEFAULT_KEYWORDS.len()
    }

    /// Locate the VALUES clause and any trailing clause of `original_query`.
    ///
    /// The suffix is found first: an upsert suffix may contain its own
    /// `VALUES(col)` calls which must not be taken for the row-values clause.
    pub fn split(&self, original_query: &str) -> BulkResult<ClauseSplit> {
        let mut trimmed = original_query.trim();
        if let Some(t) = trimmed.strip_suffix(';') { trimmed = t; }

        // Earliest keyword wins; everything after it travels as one opaque suffix.
        let mut boundary: Option<(usize, &SuffixKeyword)> = None;
        for kw in &self.keywords {
            if let Some(pos) = kw.rightmost(trimmed) {
                boundary = match boundary {
                    Some((b, cur)) if b < pos || (b == pos && cur.precedence >= kw.entry.precedence) => Some((b, cur)),
                    _ => Some((pos, &kw.entry)),
                };
            }
        }

        let (body, suffix, suffix_kind) = match boundary {
            Some((pos, kw)) => (&trimmed[..pos], format!(" {}", trimmed[pos..].trim()), Some(kw.kind)),
            None => (trimmed, String::new(), None),
        };

        let values_pos = rightmost_match(&VALUES_RE, body)
            .ok_or_else(|| BulkError::ValuesClauseNotFound { query: original_query.to_string() })?;
        let prefix = format!("{} VALUES ", body[..values_pos].trim());

        debug!(target: "sqlc_gen_bulk::rewrite", "split: values_at={}, suffix_kind={:?}, suffix_len={}", values_pos, suffix_kind, suffix.len());
        Ok(ClauseSplit { prefix, suffix, suffix_kind })
    }

    /// Rewrite `original_query` so it carries `num_args` row tuples of
    /// `num_params_per_arg` placeholders each.
    pub fn rewrite(&self, original_query: &str, num_args: usize, num_params_per_arg: usize) -> BulkResult<String> {
        if num_args == 0 { return Err(BulkError::InvalidArgumentCount); }
        if num_params_per_arg == 0 { return Err(BulkError::InvalidParameterCount); }

        let split = self.split(original_query)?;
        let group = format!("({})", vec![self.placeholder.as_str(); num_params_per_arg].join(","));

        let mut out = String::with_capacity(split.prefix.len() + (group.len() + 1) * num_args + split.suffix.len());
        out.push_str(&split.prefix);
        for i in 0..num_args {
            if i > 0 { out.push(','); }
            out.push_str(&group);
        }
        out.push_str(&split.suffix);
        out.truncate(out.trim_end().len());
        Ok(out)
    }
}

/// Rewrite with the default placeholder (`?`) and keyword table.
pub fn build_bulk_insert_query(original_query: &str, num_args: usize, num_params_per_arg: usize) -> BulkResult<String> {
    QueryMultiplier::shared().rewrite(original_query, num_args, num_params_per_arg)
}
