//! Column metadata: field types, constraints and foreign-key references.

use rust_decimal::Decimal;
use time::{Date, PrimitiveDateTime};
use uuid::Uuid;

use crate::naming::to_snake_case;
use crate::value::Value;

/// SQL column type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Int,
    BigInt,
    SmallInt,
    Varchar,
    Text,
    Boolean,
    Timestamp,
    Date,
    Decimal,
    Json,
    Uuid,
}

impl FieldType {
    /// SQL spelling of the type.
    pub fn sql(&self) -> &'static str {
        match self {
            FieldType::Int => "INTEGER",
            FieldType::BigInt => "BIGINT",
            FieldType::SmallInt => "SMALLINT",
            FieldType::Varchar => "VARCHAR",
            FieldType::Text => "TEXT",
            FieldType::Boolean => "BOOLEAN",
            FieldType::Timestamp => "TIMESTAMP",
            FieldType::Date => "DATE",
            FieldType::Decimal => "DECIMAL",
            FieldType::Json => "JSON",
            FieldType::Uuid => "UUID",
        }
    }
}

/// Maps a plain Rust type to a [`FieldType`] for fields declared without an
/// explicit [`FieldSpec`].
///
/// The mapping is total at compile time: a type without an implementation
/// simply cannot be used, instead of being silently skipped. `Option<T>`
/// unwraps to `T` and marks the field nullable.
pub trait AsFieldType {
    const FIELD_TYPE: FieldType;
    const NULLABLE: bool = false;
}

macro_rules! impl_as_field_type {
    ($($ty:ty => $field_type:expr,)*) => {
        $(impl AsFieldType for $ty {
            const FIELD_TYPE: FieldType = $field_type;
        })*
    };
}

impl_as_field_type! {
    i16 => FieldType::SmallInt,
    i32 => FieldType::Int,
    i64 => FieldType::BigInt,
    &str => FieldType::Text,
    String => FieldType::Text,
    bool => FieldType::Boolean,
    f64 => FieldType::Decimal,
    Decimal => FieldType::Decimal,
    PrimitiveDateTime => FieldType::Timestamp,
    Date => FieldType::Date,
    serde_json::Value => FieldType::Json,
    Uuid => FieldType::Uuid,
}

impl<T: AsFieldType> AsFieldType for Option<T> {
    const FIELD_TYPE: FieldType = T::FIELD_TYPE;
    const NULLABLE: bool = true;
}

/// Referential action applied on delete or update of the referenced row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ReferentialAction {
    #[default]
    Cascade,
    Restrict,
    SetNull,
    SetDefault,
    NoAction,
}

impl ReferentialAction {
    pub fn sql(&self) -> &'static str {
        match self {
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::SetDefault => "SET DEFAULT",
            ReferentialAction::NoAction => "NO ACTION",
        }
    }
}

/// Declares that a field references another entity's column.
///
/// The target is named by entity (PascalCase), not by table: the table name
/// is resolved through the same conversion that produced it at declaration
/// time, so the reference stays consistent with however the target entity was
/// registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeySpec {
    pub target_entity: String,
    pub target_field: String,
    pub on_delete: ReferentialAction,
    pub on_update: ReferentialAction,
}

impl ForeignKeySpec {
    /// References `target_entity`'s `id` column with `CASCADE` on both
    /// delete and update.
    pub fn new(target_entity: impl Into<String>) -> Self {
        Self {
            target_entity: target_entity.into(),
            target_field: "id".to_string(),
            on_delete: ReferentialAction::Cascade,
            on_update: ReferentialAction::Cascade,
        }
    }

    pub fn target_field(mut self, field: impl Into<String>) -> Self {
        self.target_field = field.into();
        self
    }

    pub fn on_delete(mut self, action: ReferentialAction) -> Self {
        self.on_delete = action;
        self
    }

    pub fn on_update(mut self, action: ReferentialAction) -> Self {
        self.on_update = action;
        self
    }

    /// Resolved table name of the referenced entity.
    pub fn reference_table(&self) -> String {
        to_snake_case(&self.target_entity)
    }
}

/// One column's type and constraints.
///
/// Fields are nullable by default, matching the permissive stance of the
/// declaration layer; constraints are opted into through the builder methods.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub field_type: FieldType,
    pub nullable: bool,
    pub default: Option<Value>,
    pub primary_key: bool,
    pub unique: bool,
    pub foreign_key: Option<ForeignKeySpec>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            nullable: true,
            default: None,
            primary_key: false,
            unique: false,
            foreign_key: None,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn references(mut self, foreign_key: ForeignKeySpec) -> Self {
        self.foreign_key = Some(foreign_key);
        self
    }

    /// Renders the column-definition fragment for this field, in fixed
    /// clause order: `<TYPE> [NOT NULL] [PRIMARY KEY] [UNIQUE] [DEFAULT ..]`.
    ///
    /// A primary-key field never emits `DEFAULT`, even when one was set.
    pub fn column_sql(&self) -> String {
        let mut sql = self.field_type.sql().to_string();
        if !self.nullable {
            sql.push_str(" NOT NULL");
        }
        if self.primary_key {
            sql.push_str(" PRIMARY KEY");
        }
        if self.unique {
            sql.push_str(" UNIQUE");
        }
        if let Some(default) = &self.default {
            if !self.primary_key {
                sql.push_str(" DEFAULT ");
                sql.push_str(&default.to_sql_literal());
            }
        }
        sql
    }
}
