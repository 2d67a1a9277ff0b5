//! MySQL dialect.

use super::{Dialect, SqlWriter};
use crate::ast::{ColumnType, ConflictAction, ConflictClause, Lock};

/// SQL rendering for MySQL.
#[derive(Debug, Clone, Copy, Default)]
pub struct MysqlDialect;

impl MysqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for MysqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn format_column_type(&self, w: &mut SqlWriter, column_type: &ColumnType) {
        match column_type {
            ColumnType::TinyInt => w.push_str("TINYINT"),
            ColumnType::SmallInt => w.push_str("SMALLINT"),
            ColumnType::Int => w.push_str("INT"),
            ColumnType::BigInt => w.push_str("BIGINT"),
            ColumnType::Char(size) => w.push_str(&format!("CHAR({size})")),
            ColumnType::VarChar(size) => w.push_str(&format!("VARCHAR({size})")),
            ColumnType::Text(size) => w.push_str(&format!("TEXT({size})")),
            ColumnType::TinyBlob => w.push_str("TINYBLOB"),
            ColumnType::Blob => w.push_str("BLOB"),
            ColumnType::MediumBlob => w.push_str("MEDIUMBLOB"),
            ColumnType::LongBlob => w.push_str("LONGBLOB"),
            ColumnType::DateTime => w.push_str("DATETIME"),
        }
    }

    fn auto_increment_sql(&self) -> Option<&'static str> {
        Some("AUTO_INCREMENT")
    }

    fn inlines_primary_key(&self) -> bool {
        false
    }

    fn row_lock_sql(&self, lock: Lock) -> Option<&'static str> {
        match lock {
            Lock::Shared => Some("FOR SHARE"),
            Lock::ForUpdate => Some("FOR UPDATE"),
        }
    }

    fn format_conflict_clause(&self, w: &mut SqlWriter, clause: &ConflictClause) {
        // MySQL infers the violated constraint from the schema, so the key
        // columns are accepted but never rendered.
        w.push_str("ON DUPLICATE KEY UPDATE ");
        for (i, update) in clause.updates.iter().enumerate() {
            if i > 0 {
                w.push(',');
            }
            w.push_str(&update.field);
            w.push('=');
            match update.action {
                ConflictAction::KeepExisting => w.push_str(&update.field),
                ConflictAction::TakeNew => {
                    w.push_str("VALUES(");
                    w.push_str(&update.field);
                    w.push(')');
                }
            }
        }
    }
}
