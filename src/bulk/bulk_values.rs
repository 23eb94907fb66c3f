use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bind argument extracted from a row, keeping the type it had on the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum BindValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Timestamp(DateTime<Utc>),
    Json(serde_json::Value),
}

impl BindValue {
    pub fn is_null(&self) -> bool { matches!(self, BindValue::Null) }

    pub fn type_name(&self) -> &'static str {
        match self {
            BindValue::Null => "null",
            BindValue::Bool(_) => "bool",
            BindValue::Int(_) => "int",
            BindValue::UInt(_) => "uint",
            BindValue::Float(_) => "float",
            BindValue::Text(_) => "text",
            BindValue::Bytes(_) => "bytes",
            BindValue::Timestamp(_) => "timestamp",
            BindValue::Json(_) => "json",
        }
    }

    /// Map a JSON scalar onto the closest bind type; arrays and objects stay JSON.
    pub fn from_json(v: &serde_json::Value) -> Self {
        use serde_json::Value as J;
        match v {
            J::Null => BindValue::Null,
            J::Bool(b) => BindValue::Bool(*b),
            J::Number(n) => {
                if let Some(i) = n.as_i64() { BindValue::Int(i) }
                else if let Some(u) = n.as_u64() { BindValue::UInt(u) }
                else { BindValue::Float(n.as_f64().unwrap_or(f64::NAN)) }
            }
            J::String(s) => BindValue::Text(s.clone()),
            J::Array(_) | J::Object(_) => BindValue::Json(v.clone()),
        }
    }
}

macro_rules! bind_from_int {
    ($($t:ty),+ $(,)?) => {
        $(impl From<$t> for BindValue { fn from(v: $t) -> Self { BindValue::Int(v as i64) } })+
    };
}
bind_from_int!(i8, i16, i32, i64, isize, u8, u16, u32);

impl From<u64> for BindValue { fn from(v: u64) -> Self { BindValue::UInt(v) } }
impl From<usize> for BindValue { fn from(v: usize) -> Self { BindValue::UInt(v as u64) } }

/// 128-bit integers bind as integers when they fit in 64 bits, as decimal text otherwise.
impl From<i128> for BindValue {
    fn from(v: i128) -> Self {
        i64::try_from(v).map(BindValue::Int).unwrap_or_else(|_| BindValue::Text(v.to_string()))
    }
}
impl From<u128> for BindValue {
    fn from(v: u128) -> Self {
        u64::try_from(v).map(BindValue::UInt).unwrap_or_else(|_| BindValue::Text(v.to_string()))
    }
}
impl From<f32> for BindValue { fn from(v: f32) -> Self { BindValue::Float(v as f64) } }
impl From<f64> for BindValue { fn from(v: f64) -> Self { BindValue::Float(v) } }
impl From<bool> for BindValue { fn from(v: bool) -> Self { BindValue::Bool(v) } }
impl From<String> for BindValue { fn from(v: String) -> Self { BindValue::Text(v) } }
impl From<&str> for BindValue { fn from(v: &str) -> Self { BindValue::Text(v.to_string()) } }
impl From<char> for BindValue { fn from(v: char) -> Self { BindValue::Text(v.to_string()) } }
impl From<Vec<u8>> for BindValue { fn from(v: Vec<u8>) -> Self { BindValue::Bytes(v) } }
impl From<DateTime<Utc>> for BindValue { fn from(v: DateTime<Utc>) -> Self { BindValue::Timestamp(v) } }
/// Naive timestamps are taken to be UTC.
impl From<NaiveDateTime> for BindValue { fn from(v: NaiveDateTime) -> Self { BindValue::Timestamp(v.and_utc()) } }
impl From<serde_json::Value> for BindValue { fn from(v: serde_json::Value) -> Self { BindValue::Json(v) } }

impl<T: Into<BindValue>> From<Option<T>> for BindValue {
    fn from(v: Option<T>) -> Self {
        match v { Some(v) => v.into(), None => BindValue::Null }
    }
}
