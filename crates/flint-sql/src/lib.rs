//! # flint-sql
//!
//! A dialect-aware SQL statement builder. Statements are assembled through a
//! typed, fluent API, lowered into an immutable syntax tree, and rendered
//! into SQL text plus a positional argument list for a parameterized-query
//! driver. The same built statement renders idiomatically under MySQL and
//! SQLite.
//!
//! ## Building a query
//!
//! ```rust
//! use flint_sql::{filter, MysqlDialect, QueryBuilder};
//!
//! let stmt = QueryBuilder::new(MysqlDialect::new())
//!     .select_from("users")
//!     .columns(&["id", "name"])
//!     .filter(filter::equals("active", true))
//!     .limit(10)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     stmt.sql,
//!     "SELECT id,name FROM users WHERE (active = ?) LIMIT 10"
//! );
//! assert_eq!(stmt.args.len(), 1);
//! ```
//!
//! ## Upserts
//!
//! The same conflict description renders per dialect:
//!
//! ```rust
//! use flint_sql::conflict::ConflictKey;
//! use flint_sql::{QueryBuilder, SqliteDialect};
//!
//! let stmt = QueryBuilder::new(SqliteDialect::new())
//!     .insert("users")
//!     .fields(&["id", "name"])
//!     .values([flint_sql::Value::Int(1), flint_sql::Value::Text("a".into())])
//!     .ignore_conflicts(ConflictKey::new(["id"]))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     stmt.sql,
//!     "INSERT INTO users (id,name) VALUES (?,?) ON CONFLICT (id) DO NOTHING"
//! );
//! ```

pub mod ast;
pub mod builder;
pub mod column;
pub mod conflict;
pub mod dialect;
pub mod error;
pub mod filter;
pub mod functions;
pub mod index;
pub mod statement;
pub mod value;

pub use builder::QueryBuilder;
pub use dialect::{Dialect, MysqlDialect, SqliteDialect};
pub use error::{Error, Result};
pub use statement::Statement;
pub use value::{ToValue, Value};
