//! A minimal relational-mapping layer for PostgreSQL.
//!
//! Entities are described declaratively — fields, types, constraints,
//! foreign keys — and the crate derives table DDL, parameterised CRUD
//! statements and a managed connection pool from that description:
//!
//! - [`SchemaBuilder`] compiles a set of [`FieldSpec`] declarations into an
//!   immutable, shared [`EntitySchema`] (table name, ordered columns,
//!   primary key, resolved foreign keys), once per entity type.
//! - [`query`] turns metadata into SQL text plus an ordered argument list,
//!   with contiguous `$1..$n` placeholder numbering.
//! - [`Pool`] owns the bounded connection set and is the sole path to the
//!   database; build one at program start and pass it to every operation.
//! - [`EntityInstance`] is a live record with save/find/update/delete and
//!   foreign-key navigation.
//!
//! ```no_run
//! use ormlet::{EntityInstance, FieldSpec, FieldType, Pool, SchemaBuilder};
//!
//! # async fn demo() -> ormlet::Result<()> {
//! let pool = Pool::from_env()?;
//! let user = SchemaBuilder::new("User")
//!     .field(FieldSpec::new("id", FieldType::Int).not_null().primary_key())
//!     .field(FieldSpec::new("username", FieldType::Varchar).not_null().unique())
//!     .build()?;
//! user.create_table(&pool).await?;
//!
//! let mut alice = EntityInstance::new(user.clone());
//! alice.set("id", 1i32)?;
//! alice.set("username", "alice")?;
//! alice.save(&pool).await?;
//!
//! let found = EntityInstance::find_by_id(&user, &pool, 1i32).await?;
//! assert!(found.is_some());
//! # Ok(())
//! # }
//! ```

mod entity;
mod error;
mod field;
mod naming;
mod pool;
pub mod query;
mod schema;
mod value;

pub use entity::EntityInstance;
pub use error::{Error, Result};
pub use field::{AsFieldType, FieldSpec, FieldType, ForeignKeySpec, ReferentialAction};
pub use naming::to_snake_case;
pub use pool::{DATABASE_URL, Pool, PoolOptions, ResetBehavior};
pub use schema::{EntitySchema, ResolvedForeignKey, SchemaBuilder};
pub use value::Value;
