//! SQLite dialect.

use super::{Dialect, SqlWriter};
use crate::ast::{AlterTable, ColumnType, ConflictAction, ConflictClause, Lock};

/// SQL rendering for SQLite.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn format_column_type(&self, w: &mut SqlWriter, column_type: &ColumnType) {
        // SQLite types are affinities; sizes carry no meaning here.
        match column_type {
            ColumnType::TinyInt | ColumnType::SmallInt | ColumnType::Int | ColumnType::BigInt => {
                w.push_str("INTEGER");
            }
            ColumnType::Char(_) | ColumnType::VarChar(_) | ColumnType::Text(_) => {
                w.push_str("TEXT");
            }
            ColumnType::TinyBlob
            | ColumnType::Blob
            | ColumnType::MediumBlob
            | ColumnType::LongBlob => w.push_str("BLOB"),
            ColumnType::DateTime => w.push_str("NUMERIC"),
        }
    }

    fn auto_increment_sql(&self) -> Option<&'static str> {
        // SQLite rowid columns auto-increment without a keyword.
        None
    }

    fn inlines_primary_key(&self) -> bool {
        true
    }

    fn row_lock_sql(&self, _lock: Lock) -> Option<&'static str> {
        // SQLite has no concurrent-reader locking model; every select
        // behaves like FOR UPDATE already.
        None
    }

    fn format_conflict_clause(&self, w: &mut SqlWriter, clause: &ConflictClause) {
        w.push_str("ON CONFLICT (");
        for (i, column) in clause.key.iter().enumerate() {
            if i > 0 {
                w.push(',');
            }
            w.push_str(column);
        }
        w.push(')');

        if clause.all_keep_existing() {
            // Keeping every existing value changes no row, which is exactly
            // DO NOTHING.
            w.push_str(" DO NOTHING");
            return;
        }

        w.push_str(" DO UPDATE SET ");
        for (i, update) in clause.updates.iter().enumerate() {
            if i > 0 {
                w.push(',');
            }
            w.push_str(&update.field);
            w.push('=');
            match update.action {
                ConflictAction::KeepExisting => w.push_str(&update.field),
                ConflictAction::TakeNew => {
                    w.push_str("excluded.");
                    w.push_str(&update.field);
                }
            }
        }
    }

    fn format_alter_table(&self, w: &mut SqlWriter, alter: &AlterTable) {
        assert!(
            alter.add_indices.is_empty(),
            "sqlite cannot add an index in ALTER TABLE"
        );
        w.push_str("ALTER TABLE ");
        w.push_str(&alter.name);
        for (i, column) in alter.add_columns.iter().enumerate() {
            if i > 0 {
                w.push(',');
            }
            w.push_str(" ADD COLUMN ");
            self.format_column_spec(w, column);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ConflictUpdate;

    fn clause(updates: Vec<ConflictUpdate>) -> ConflictClause {
        ConflictClause {
            key: vec![String::from("ID")],
            updates,
        }
    }

    #[test]
    fn test_column_types_collapse() {
        let d = SqliteDialect::new();
        for (ct, exp) in [
            (ColumnType::TinyInt, "INTEGER"),
            (ColumnType::BigInt, "INTEGER"),
            (ColumnType::VarChar(255), "TEXT"),
            (ColumnType::Text(128), "TEXT"),
            (ColumnType::LongBlob, "BLOB"),
            (ColumnType::DateTime, "NUMERIC"),
        ] {
            let mut w = SqlWriter::new();
            d.format_column_type(&mut w, &ct);
            assert_eq!(w.sql(), exp);
        }
    }

    #[test]
    fn test_all_ignore_collapses_to_do_nothing() {
        let c = clause(vec![
            ConflictUpdate {
                field: String::from("ID"),
                action: ConflictAction::KeepExisting,
            },
            ConflictUpdate {
                field: String::from("V"),
                action: ConflictAction::KeepExisting,
            },
        ]);
        let mut w = SqlWriter::new();
        SqliteDialect::new().format_conflict_clause(&mut w, &c);
        assert_eq!(w.sql(), "ON CONFLICT (ID) DO NOTHING");
    }

    #[test]
    fn test_mixed_behaviors_render_do_update() {
        let c = clause(vec![
            ConflictUpdate {
                field: String::from("ID"),
                action: ConflictAction::KeepExisting,
            },
            ConflictUpdate {
                field: String::from("V"),
                action: ConflictAction::TakeNew,
            },
        ]);
        let mut w = SqlWriter::new();
        SqliteDialect::new().format_conflict_clause(&mut w, &c);
        assert_eq!(w.sql(), "ON CONFLICT (ID) DO UPDATE SET ID=ID,V=excluded.V");
    }
}
