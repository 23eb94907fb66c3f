//! Identifier conversion for generated code
//! ----------------------------------------
//! Maps sqlc query names and column names onto Rust function, constant and
//! field identifiers.

/// Rust keywords that need `r#` when used as identifiers.
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do", "dyn", "else",
    "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "macro",
    "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return", "static", "struct", "trait",
    "true", "try", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers; these get a trailing underscore instead.
const RESERVED_PATH_KEYWORDS: &[&str] = &["crate", "self", "Self", "super", "_"];

/// Strip one layer of SQL identifier quoting (`"x"`, `` `x` ``, `[x]`).
pub fn unquote_identifier(ident: &str) -> &str {
    let t = ident.trim();
    let quoted = t.len() >= 2
        && ((t.starts_with('"') && t.ends_with('"'))
            || (t.starts_with('`') && t.ends_with('`'))
            || (t.starts_with('[') && t.ends_with(']')));
    if quoted { &t[1..t.len() - 1] } else { t }
}

/// `user_name` → `UserName`. Leading, trailing and repeated underscores are dropped.
pub fn snake_to_pascal_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for part in s.split('_').filter(|p| !p.is_empty()) {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// `InsertUser` → `insert_user`, `InsertUserID` → `insert_user_id`,
/// `user-name` → `user_name`. Any run of non-alphanumerics becomes one `_`.
pub fn pascal_to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if !ch.is_alphanumeric() {
            if !out.is_empty() && !out.ends_with('_') { out.push('_'); }
            continue;
        }
        if ch.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).map(|c| c.is_lowercase()).unwrap_or(false);
            let boundary = prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_lower);
            if boundary && !out.is_empty() && !out.ends_with('_') { out.push('_'); }
        }
        out.extend(ch.to_lowercase());
    }
    while out.ends_with('_') { out.pop(); }
    out
}

/// Column name → the field name generated rows expose (snake case, no `r#`).
pub fn field_name(column: &str) -> String {
    let snake = pascal_to_snake_case(unquote_identifier(column));
    match snake.chars().next() {
        None => "_".to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{}", snake),
        Some(_) => snake,
    }
}

/// A name usable as a Rust identifier in generated source.
pub fn rust_ident(name: &str) -> String {
    if RESERVED_PATH_KEYWORDS.contains(&name) {
        format!("{}_", name)
    } else if RAW_KEYWORDS.contains(&name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}

/// `InsertUser` → `INSERT_USER`.
pub fn const_ident(name: &str) -> String {
    pascal_to_snake_case(name).to_uppercase()
}

/// True for plain (non-raw, non-keyword) Rust identifiers such as module names.
pub fn is_plain_ident(s: &str) -> bool {
    let mut chars = s.chars();
    let head_ok = match chars.next() {
        Some(c) => c == '_' || c.is_ascii_alphabetic(),
        None => false,
    };
    head_ok
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        && s != "_"
        && !RAW_KEYWORDS.contains(&s)
        && !RESERVED_PATH_KEYWORDS.contains(&s)
}
