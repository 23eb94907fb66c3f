use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::bulk::{QueryMultiplier, SuffixKeyword, DEFAULT_PLACEHOLDER};
use crate::ident::is_plain_ident;

pub const DEFAULT_OUTPUT: &str = "bulk_sql.rs";
pub const DEFAULT_RUNTIME_CRATE: &str = "sqlc_gen_bulk";

fn default_output() -> String { DEFAULT_OUTPUT.to_string() }
fn default_placeholder() -> String { DEFAULT_PLACEHOLDER.to_string() }
fn default_runtime_crate() -> String { DEFAULT_RUNTIME_CRATE.to_string() }

/// Plugin options as configured under `codegen.options` in sqlc.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    #[serde(default)]
    pub package: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub suffix_keywords: Vec<String>,
    #[serde(default = "default_runtime_crate")]
    pub runtime_crate: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            package: String::new(),
            output: default_output(),
            placeholder: default_placeholder(),
            suffix_keywords: Vec::new(),
            runtime_crate: default_runtime_crate(),
        }
    }
}

impl Options {
    /// Parse raw plugin options. sqlc hands them over as JSON bytes, which reach
    /// us either as an embedded object or as a string.
    pub fn parse(raw: &serde_json::Value) -> Result<Self> {
        match raw {
            serde_json::Value::Null => Ok(Options::default()),
            serde_json::Value::String(s) if s.trim().is_empty() => Ok(Options::default()),
            serde_json::Value::String(s) => serde_json::from_str(s).context("options: failed to parse plugin options"),
            other => serde_json::from_value(other.clone()).context("options: failed to parse plugin options"),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.package.is_empty() {
            bail!(r#"options: "package" is required"#);
        }
        if !is_plain_ident(&self.package) {
            bail!(r#"options: "package" must be a valid Rust identifier, got '{}'"#, self.package);
        }
        if !self.output.ends_with(".rs") || self.output.contains(['/', '\\']) {
            bail!(r#"options: "output" must be a plain .rs file name, got '{}'"#, self.output);
        }
        if self.placeholder.is_empty() || self.placeholder.chars().any(char::is_whitespace) {
            bail!(r#"options: "placeholder" must be a non-empty token without whitespace"#);
        }
        if self.runtime_crate.is_empty() || !self.runtime_crate.split("::").all(is_plain_ident) {
            bail!(r#"options: "runtime_crate" must be a Rust path, got '{}'"#, self.runtime_crate);
        }
        self.multiplier()?;
        Ok(())
    }

    /// The rewriter configured by these options.
    pub fn multiplier(&self) -> Result<QueryMultiplier> {
        let mut m = QueryMultiplier::new().with_placeholder(self.placeholder.clone());
        for kw in &self.suffix_keywords {
            m = m
                .with_suffix_keyword(SuffixKeyword::custom(kw.clone()))
                .with_context(|| r#"options: invalid entry in "suffix_keywords""#.to_string())?;
        }
        Ok(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_object_and_string_forms() {
        let a = Options::parse(&json!({"package": "db"})).expect("object");
        let b = Options::parse(&json!(r#"{"package": "db"}"#)).expect("string");
        assert_eq!(a, b);
        assert_eq!(a.output, DEFAULT_OUTPUT);
        assert_eq!(a.placeholder, "?");
        assert_eq!(a.runtime_crate, DEFAULT_RUNTIME_CRATE);
    }

    #[test]
    fn parse_error_is_reported() {
        let err = Options::parse(&json!(r#"{"package": "db""#)).unwrap_err();
        assert!(format!("{:#}", err).contains("EOF"), "err={:#}", err);
    }

    #[test]
    fn package_is_required() {
        let err = Options::parse(&json!({})).expect("parse").validate().unwrap_err();
        assert!(err.to_string().contains(r#""package" is required"#));
        let err = Options::parse(&serde_json::Value::Null).expect("parse").validate().unwrap_err();
        assert!(err.to_string().contains(r#""package" is required"#));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let bad = vec![
            json!({"package": "my-db"}),
            json!({"package": "db", "output": "bulk.go"}),
            json!({"package": "db", "output": "gen/bulk.rs"}),
            json!({"package": "db", "placeholder": ""}),
            json!({"package": "db", "placeholder": "? "}),
            json!({"package": "db", "suffix_keywords": ["  "]}),
            json!({"package": "db", "runtime_crate": "my-crate"}),
        ];
        for raw in bad {
            let opts = Options::parse(&raw).expect("parse");
            assert!(opts.validate().is_err(), "expected validation error for {}", raw);
        }
    }

    #[test]
    fn multiplier_follows_options() {
        let opts = Options::parse(&json!({"package": "db", "placeholder": "@p", "suffix_keywords": ["AS new"]})).expect("parse");
        opts.validate().expect("valid");
        let m = opts.multiplier().expect("multiplier");
        assert_eq!(m.placeholder(), "@p");
        assert!(m.suffix_keywords().any(|k| k.keyword == "AS new"));
    }
}
