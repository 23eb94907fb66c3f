use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{BulkError, BulkResult};

/// Which trailing clause introduced the suffix of an INSERT statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuffixKind { OnDuplicateKeyUpdate, OnConflict, Returning, Custom }

/// One row of the trailing-clause keyword table.
/// `precedence` only matters when two keywords start at the same offset; the
/// higher value names the suffix. It never changes the suffix text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixKeyword {
    pub keyword: String,
    pub kind: SuffixKind,
    pub precedence: u8,
}

impl SuffixKeyword {
    pub fn new(keyword: impl Into<String>, kind: SuffixKind, precedence: u8) -> Self {
        Self { keyword: keyword.into(), kind, precedence }
    }

    /// A dialect keyword configured by the user (plugin options).
    pub fn custom(keyword: impl Into<String>) -> Self {
        Self::new(keyword, SuffixKind::Custom, 0)
    }
}

pub fn default_suffix_keywords() -> Vec<SuffixKeyword> {
    vec![
        SuffixKeyword::new("ON DUPLICATE KEY UPDATE", SuffixKind::OnDuplicateKeyUpdate, 30),
        SuffixKeyword::new("ON CONFLICT", SuffixKind::OnConflict, 20),
        SuffixKeyword::new("RETURNING", SuffixKind::Returning, 10),
    ]
}

/// A keyword together with its compiled case-insensitive matcher.
#[derive(Debug, Clone)]
pub struct CompiledKeyword {
    pub entry: SuffixKeyword,
    pattern: Regex,
}

impl CompiledKeyword {
    pub fn compile(entry: SuffixKeyword) -> BulkResult<Self> {
        let pattern = keyword_regex(&entry.keyword)?;
        Ok(Self { entry, pattern })
    }

    /// Byte offset of the rightmost unquoted match in `s`.
    pub fn rightmost(&self, s: &str) -> Option<usize> {
        rightmost_match(&self.pattern, s)
    }
}

pub(crate) static VALUES_RE: Lazy<Regex> =
    Lazy::new(|| keyword_regex("VALUES").expect("VALUES keyword pattern"));

pub(crate) static DEFAULT_KEYWORDS: Lazy<Vec<CompiledKeyword>> = Lazy::new(|| {
    default_suffix_keywords()
        .into_iter()
        .map(|k| CompiledKeyword::compile(k).expect("default suffix keyword pattern"))
        .collect()
});

/// Build a case-insensitive matcher for a (possibly multi-word) SQL keyword.
/// - Words are separated by any run of whitespace, so `ON\nCONFLICT` matches `ON CONFLICT`
/// - Word-character edges must sit on a word boundary (`my_values` is not `VALUES`)
pub fn keyword_regex(keyword: &str) -> BulkResult<Regex> {
    let words: Vec<&str> = keyword.split_whitespace().collect();
    if words.is_empty() {
        return Err(BulkError::InvalidSuffixKeyword { keyword: keyword.to_string(), reason: "keyword is empty".into() });
    }
    let body = words.iter().map(|w| regex::escape(w)).collect::<Vec<_>>().join(r"\s+");
    let is_word = |c: Option<char>| c.map(|c| c.is_alphanumeric() || c == '_').unwrap_or(false);
    let lead = if is_word(words[0].chars().next()) { r"\b" } else { "" };
    let trail = if is_word(words[words.len() - 1].chars().last()) { r"\b" } else { "" };
    Regex::new(&format!("(?i){}{}{}", lead, body, trail)).map_err(|e| BulkError::InvalidSuffixKeyword {
        keyword: keyword.to_string(),
        reason: e.to_string(),
    })
}

/// Byte offset of the rightmost match of `re` in `s` that does not start inside
/// a quoted region, so `INSERT INTO "returning" ...` never yields a keyword.
pub fn rightmost_match(re: &Regex, s: &str) -> Option<usize> {
    let spans = quoted_spans(s);
    re.find_iter(s)
        .map(|m| m.start())
        .filter(|&pos| !spans.iter().any(|&(start, end)| pos >= start && pos < end))
        .last()
}

/// Byte ranges covered by `'...'`, `"..."` and `` `...` `` (quotes included).
/// A doubled quote character stays inside its region; an unterminated
/// region runs to the end of `s`.
pub fn quoted_spans(s: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut chars = s.char_indices().peekable();
    let mut open: Option<(usize, char)> = None;

    while let Some((i, ch)) = chars.next() {
        match open {
            None => {
                if matches!(ch, '\'' | '"' | '`') { open = Some((i, ch)); }
            }
            Some((start, quote)) if ch == quote => {
                if chars.peek().map(|&(_, c)| c) == Some(quote) {
                    chars.next();
                } else {
                    spans.push((start, i + ch.len_utf8()));
                    open = None;
                }
            }
            Some(_) => {}
        }
    }
    if let Some((start, _)) = open {
        spans.push((start, s.len()));
    }
    spans
}

/// Strip SQL comments from the input while preserving content inside string literals.
/// Supported comment styles:
/// - Line comments starting with `--` until end of line
/// - Block comments delimited by `/* ... */`, nested
/// Newlines inside comments are kept so line structure survives.
pub fn strip_sql_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_squote = false;
    let mut in_dquote = false;
    let mut block_depth: u32 = 0;
    let mut line_comment = false;

    while let Some(ch) = chars.next() {
        if line_comment {
            if ch == '\n' { out.push('\n'); line_comment = false; }
            else if ch == '\r' { out.push('\r'); }
            continue;
        }
        if block_depth > 0 {
            match ch {
                '\n' | '\r' => out.push(ch),
                '/' if chars.peek() == Some(&'*') => { chars.next(); block_depth += 1; }
                '*' if chars.peek() == Some(&'/') => { chars.next(); block_depth -= 1; }
                _ => {}
            }
            continue;
        }
        match ch {
            '\'' if !in_dquote => in_squote = !in_squote,
            '"' if !in_squote => in_dquote = !in_dquote,
            '-' if !in_squote && !in_dquote && chars.peek() == Some(&'-') => {
                chars.next();
                line_comment = true;
                continue;
            }
            '/' if !in_squote && !in_dquote && chars.peek() == Some(&'*') => {
                chars.next();
                block_depth = 1;
                continue;
            }
            _ => {}
        }
        out.push(ch);
    }
    out
}

/// First keyword of a statement, uppercased, after comments and leading whitespace.
pub fn leading_keyword(sql: &str) -> Option<String> {
    let stripped = strip_sql_comments(sql);
    let word: String = stripped
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    if word.is_empty() { None } else { Some(word.to_ascii_uppercase()) }
}
