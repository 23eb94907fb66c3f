//! Field access by name without runtime reflection.
//!
//! Row types opt in through [`BulkRecord`], normally via the [`bulk_record!`](crate::bulk_record)
//! macro. References and smart pointers forward to the record they point at, so
//! `&[&T]`, `&[Box<T>]` and `&[T]` flatten identically.

use std::rc::Rc;
use std::sync::Arc;

use crate::bulk::bulk_values::BindValue;

/// Result of looking up one field on a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldAccess {
    Value(BindValue),
    /// The record has no field with this name.
    Missing,
    /// The field exists but is not readable from outside the record.
    Private,
}

/// A row that can hand out its field values by name.
pub trait BulkRecord {
    fn type_name(&self) -> &'static str { std::any::type_name::<Self>() }

    /// False for values that are not structured records at all (strings, numbers, `None`).
    fn is_record(&self) -> bool { true }

    fn field(&self, name: &str) -> FieldAccess;
}

impl<T: BulkRecord + ?Sized> BulkRecord for &T {
    fn type_name(&self) -> &'static str { (**self).type_name() }
    fn is_record(&self) -> bool { (**self).is_record() }
    fn field(&self, name: &str) -> FieldAccess { (**self).field(name) }
}

impl<T: BulkRecord + ?Sized> BulkRecord for &mut T {
    fn type_name(&self) -> &'static str { (**self).type_name() }
    fn is_record(&self) -> bool { (**self).is_record() }
    fn field(&self, name: &str) -> FieldAccess { (**self).field(name) }
}

macro_rules! forward_record {
    ($($ptr:ident),+ $(,)?) => {
        $(impl<T: BulkRecord + ?Sized> BulkRecord for $ptr<T> {
            fn type_name(&self) -> &'static str { (**self).type_name() }
            fn is_record(&self) -> bool { (**self).is_record() }
            fn field(&self, name: &str) -> FieldAccess { (**self).field(name) }
        })+
    };
}
forward_record!(Box, Rc, Arc);

// `None` plays the part of a nil pointer: there is no record behind it.
impl<T: BulkRecord> BulkRecord for Option<T> {
    fn type_name(&self) -> &'static str {
        match self { Some(v) => v.type_name(), None => std::any::type_name::<Self>() }
    }
    fn is_record(&self) -> bool { self.as_ref().map(|v| v.is_record()).unwrap_or(false) }
    fn field(&self, name: &str) -> FieldAccess {
        match self { Some(v) => v.field(name), None => FieldAccess::Missing }
    }
}

macro_rules! not_a_record {
    ($($t:ty),+ $(,)?) => {
        $(impl BulkRecord for $t {
            fn is_record(&self) -> bool { false }
            fn field(&self, _name: &str) -> FieldAccess { FieldAccess::Missing }
        })+
    };
}
not_a_record!(str, String, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T> BulkRecord for Vec<T> {
    fn is_record(&self) -> bool { false }
    fn field(&self, _name: &str) -> FieldAccess { FieldAccess::Missing }
}

impl<T> BulkRecord for [T] {
    fn is_record(&self) -> bool { false }
    fn field(&self, _name: &str) -> FieldAccess { FieldAccess::Missing }
}

/// JSON objects are records keyed by member name; every other JSON kind is not.
impl BulkRecord for serde_json::Value {
    fn type_name(&self) -> &'static str {
        match self {
            serde_json::Value::Null => "serde_json::Value::Null",
            serde_json::Value::Bool(_) => "serde_json::Value::Bool",
            serde_json::Value::Number(_) => "serde_json::Value::Number",
            serde_json::Value::String(_) => "serde_json::Value::String",
            serde_json::Value::Array(_) => "serde_json::Value::Array",
            serde_json::Value::Object(_) => "serde_json::Value::Object",
        }
    }
    fn is_record(&self) -> bool { self.is_object() }
    fn field(&self, name: &str) -> FieldAccess {
        match self.as_object().and_then(|m| m.get(name)) {
            Some(v) => FieldAccess::Value(BindValue::from_json(v)),
            None => FieldAccess::Missing,
        }
    }
}

/// Implement [`BulkRecord`] for a struct by listing its readable fields, and
/// optionally the fields that exist but must not be bound.
///
/// ```
/// use sqlc_gen_bulk::bulk_record;
///
/// struct InsertUserParams { id: i64, name: String, password_hash: String }
///
/// bulk_record!(InsertUserParams { id, name } hidden { password_hash });
/// ```
///
/// Field values are cloned and converted with `BindValue::from`, so every
/// listed field must have a type with a `From` impl for `BindValue`: the
/// integer and float primitives, `bool`, `char`, `String`, `&str`, `Vec<u8>`,
/// `chrono::DateTime<Utc>`, `chrono::NaiveDateTime`, `serde_json::Value`, and
/// `Option` of any of these. Raw identifiers are matched without their `r#`
/// prefix.
#[macro_export]
macro_rules! bulk_record {
    ($ty:ty { $($field:ident),* $(,)? } $(hidden { $($hidden:ident),* $(,)? })?) => {
        impl $crate::bulk::BulkRecord for $ty {
            fn type_name(&self) -> &'static str { stringify!($ty) }

            #[allow(unused_variables)]
            fn field(&self, name: &str) -> $crate::bulk::FieldAccess {
                $(
                    if name == stringify!($field).trim_start_matches("r#") {
                        return $crate::bulk::FieldAccess::Value(
                            $crate::bulk::BindValue::from(::std::clone::Clone::clone(&self.$field)),
                        );
                    }
                )*
                $($(
                    if name == stringify!($hidden).trim_start_matches("r#") {
                        return $crate::bulk::FieldAccess::Private;
                    }
                )*)?
                $crate::bulk::FieldAccess::Missing
            }
        }
    };
}
