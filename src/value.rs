//! Runtime database values.
//!
//! [`Value`] carries one Postgres-bindable value per [`FieldType`] so query
//! builders can return heterogeneous argument lists. Each variant encodes
//! with its concrete Postgres wire type (reported through
//! [`Encode::produces`]), so no `CAST` wrapping is needed in generated SQL.
//! NULLs are typed too: `Null` carries the column's [`FieldType`] so an
//! explicit NULL binds with that column's parameter type instead of TEXT,
//! which Postgres would reject at statement-parse time for non-text columns.

use rust_decimal::Decimal;
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo};
use sqlx::{Encode, Postgres, Type};
use time::{Date, PrimitiveDateTime};
use uuid::Uuid;

use crate::field::{AsFieldType, FieldType};

/// A single database value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL for a column of the given type.
    Null(FieldType),
    SmallInt(i16),
    Int(i32),
    BigInt(i64),
    Decimal(Decimal),
    Text(String),
    Bool(bool),
    /// `TIMESTAMP` (without time zone).
    Timestamp(PrimitiveDateTime),
    Date(Date),
    Json(serde_json::Value),
    Uuid(Uuid),
}

impl Value {
    /// Renders the value as a SQL literal for use in a `DEFAULT` clause.
    ///
    /// Strings are single-quoted with embedded quotes doubled; booleans and
    /// numbers use their bare textual form; temporal, UUID and JSON values
    /// are quoted so the backend parses them from their text representation.
    pub fn to_sql_literal(&self) -> String {
        match self {
            Value::Null(_) => "NULL".to_string(),
            Value::SmallInt(v) => v.to_string(),
            Value::Int(v) => v.to_string(),
            Value::BigInt(v) => v.to_string(),
            Value::Decimal(v) => v.to_string(),
            Value::Bool(v) => v.to_string(),
            Value::Text(v) => quoted(v),
            Value::Timestamp(v) => quoted(&v.to_string()),
            Value::Date(v) => quoted(&v.to_string()),
            Value::Json(v) => quoted(&v.to_string()),
            Value::Uuid(v) => quoted(&v.to_string()),
        }
    }

    /// Whether this value is SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null(_))
    }
}

fn quoted(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Postgres parameter type for a declared column type.
fn type_info_for(field_type: FieldType) -> PgTypeInfo {
    match field_type {
        FieldType::SmallInt => <i16 as Type<Postgres>>::type_info(),
        FieldType::Int => <i32 as Type<Postgres>>::type_info(),
        FieldType::BigInt => <i64 as Type<Postgres>>::type_info(),
        FieldType::Decimal => <Decimal as Type<Postgres>>::type_info(),
        FieldType::Varchar | FieldType::Text => <String as Type<Postgres>>::type_info(),
        FieldType::Boolean => <bool as Type<Postgres>>::type_info(),
        FieldType::Timestamp => <PrimitiveDateTime as Type<Postgres>>::type_info(),
        FieldType::Date => <Date as Type<Postgres>>::type_info(),
        FieldType::Json => <serde_json::Value as Type<Postgres>>::type_info(),
        FieldType::Uuid => <Uuid as Type<Postgres>>::type_info(),
    }
}

impl<'q> Encode<'q, Postgres> for Value {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        match self {
            Value::Null(_) => Ok(IsNull::Yes),
            Value::SmallInt(v) => Encode::<Postgres>::encode_by_ref(v, buf),
            Value::Int(v) => Encode::<Postgres>::encode_by_ref(v, buf),
            Value::BigInt(v) => Encode::<Postgres>::encode_by_ref(v, buf),
            Value::Decimal(v) => Encode::<Postgres>::encode_by_ref(v, buf),
            Value::Text(v) => Encode::<Postgres>::encode_by_ref(v, buf),
            Value::Bool(v) => Encode::<Postgres>::encode_by_ref(v, buf),
            Value::Timestamp(v) => Encode::<Postgres>::encode_by_ref(v, buf),
            Value::Date(v) => Encode::<Postgres>::encode_by_ref(v, buf),
            Value::Json(v) => Encode::<Postgres>::encode_by_ref(v, buf),
            Value::Uuid(v) => Encode::<Postgres>::encode_by_ref(v, buf),
        }
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        Some(match self {
            Value::Null(field_type) => type_info_for(*field_type),
            Value::Text(_) => <String as Type<Postgres>>::type_info(),
            Value::SmallInt(_) => <i16 as Type<Postgres>>::type_info(),
            Value::Int(_) => <i32 as Type<Postgres>>::type_info(),
            Value::BigInt(_) => <i64 as Type<Postgres>>::type_info(),
            Value::Decimal(_) => <Decimal as Type<Postgres>>::type_info(),
            Value::Bool(_) => <bool as Type<Postgres>>::type_info(),
            Value::Timestamp(_) => <PrimitiveDateTime as Type<Postgres>>::type_info(),
            Value::Date(_) => <Date as Type<Postgres>>::type_info(),
            Value::Json(_) => <serde_json::Value as Type<Postgres>>::type_info(),
            Value::Uuid(_) => <Uuid as Type<Postgres>>::type_info(),
        })
    }
}

impl Type<Postgres> for Value {
    fn type_info() -> PgTypeInfo {
        // Per-value type info comes from `Encode::produces`.
        <String as Type<Postgres>>::type_info()
    }

    fn compatible(_ty: &PgTypeInfo) -> bool {
        true
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::SmallInt(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::BigInt(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<PrimitiveDateTime> for Value {
    fn from(v: PrimitiveDateTime) -> Self {
        Value::Timestamp(v)
    }
}

impl From<Date> for Value {
    fn from(v: Date) -> Self {
        Value::Date(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl<T: Into<Value> + AsFieldType> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null(T::FIELD_TYPE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_strings_quoted() {
        assert_eq!(Value::from("active").to_sql_literal(), "'active'");
        assert_eq!(Value::from("it's").to_sql_literal(), "'it''s'");
    }

    #[test]
    fn test_literal_scalars_bare() {
        assert_eq!(Value::from(42i32).to_sql_literal(), "42");
        assert_eq!(Value::from(true).to_sql_literal(), "true");
        assert_eq!(Value::Null(FieldType::Int).to_sql_literal(), "NULL");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i32>), Value::Null(FieldType::Int));
        assert_eq!(Value::from(Some(7i32)), Value::Int(7));
    }

    #[test]
    fn test_null_binds_with_column_type() {
        // A NULL bound into an INTEGER column must declare the integer
        // parameter type, not TEXT, or Postgres rejects the statement.
        let null = Value::Null(FieldType::Int);
        assert_eq!(
            Encode::<Postgres>::produces(&null),
            Some(<i32 as Type<Postgres>>::type_info())
        );
        let null = Value::Null(FieldType::Timestamp);
        assert_eq!(
            Encode::<Postgres>::produces(&null),
            Some(<PrimitiveDateTime as Type<Postgres>>::type_info())
        );
        assert!(null.is_null());
    }
}
