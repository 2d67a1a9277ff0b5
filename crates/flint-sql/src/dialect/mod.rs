//! Dialect-specific SQL rendering.
//!
//! Different databases spell the same statement differently. This module
//! provides the [`Dialect`] trait: clause ordering and most token spelling
//! are shared default methods, while the points where dialects genuinely
//! diverge (physical column types, auto-increment, row locking, primary-key
//! placement, upsert syntax) are required methods each dialect implements.
//!
//! Rendering is a single pass over the built tree. The [`SqlWriter`] emits
//! text and records the bound value at the moment each `?` token is written,
//! so the placeholder/argument ordering contract holds by construction.

mod mysql;
mod sqlite;

pub use mysql::MysqlDialect;
pub use sqlite::SqliteDialect;

use crate::ast::{
    AlterTable, ColumnSpec, ColumnType, ConflictClause, CreateTable, Delete, Expr, IndexSpec,
    Insert, Limit, Lock, NodeRef, OrderBy, PrimaryKey, Select, TableExpr, Update, Where,
};
use crate::statement::Statement;
use crate::value::Value;

/// Accumulates SQL text and the positional arguments bound to it.
#[derive(Debug, Default)]
pub struct SqlWriter {
    sql: String,
    args: Vec<Value>,
}

impl SqlWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends raw SQL text.
    pub fn push_str(&mut self, s: &str) {
        self.sql.push_str(s);
    }

    /// Appends a single character of SQL text.
    pub fn push(&mut self, ch: char) {
        self.sql.push(ch);
    }

    /// Emits a `?` token and records the value it binds.
    pub fn placeholder(&mut self, value: &Value) {
        self.sql.push('?');
        self.args.push(value.clone());
    }

    /// Returns the text written so far.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Finishes the writer into a [`Statement`].
    #[must_use]
    pub fn into_statement(self) -> Statement {
        Statement {
            sql: self.sql,
            args: self.args,
        }
    }
}

/// SQL rendering for one database dialect.
///
/// Every node kind is handled by [`format_node`](Self::format_node); the
/// match there is exhaustive over the node set, so a dialect cannot silently
/// drop SQL for a node it does not know.
pub trait Dialect {
    /// Returns the dialect name.
    fn name(&self) -> &'static str;

    /// Renders the physical keyword for a logical column type.
    fn format_column_type(&self, w: &mut SqlWriter, column_type: &ColumnType);

    /// The auto-increment keyword, if the dialect has one.
    fn auto_increment_sql(&self) -> Option<&'static str>;

    /// Whether primary-key membership is declared inline per column rather
    /// than as a trailing clause.
    fn inlines_primary_key(&self) -> bool;

    /// The row-locking suffix for a lock kind, if the dialect has one.
    fn row_lock_sql(&self, lock: Lock) -> Option<&'static str>;

    /// Renders the conflict-resolution clause of an insert.
    fn format_conflict_clause(&self, w: &mut SqlWriter, clause: &ConflictClause);

    /// Renders any node.
    fn format_node(&self, w: &mut SqlWriter, node: NodeRef<'_>) {
        match node {
            NodeRef::Select(s) => self.format_select(w, s),
            NodeRef::Insert(i) => self.format_insert(w, i),
            NodeRef::Update(u) => self.format_update(w, u),
            NodeRef::Delete(d) => self.format_delete(w, d),
            NodeRef::CreateTable(ct) => self.format_create_table(w, ct),
            NodeRef::AlterTable(at) => self.format_alter_table(w, at),
            NodeRef::Expr(e) => self.format_expr(w, e),
            NodeRef::TableExpr(t) => self.format_table_expr(w, t),
            NodeRef::Where(wh) => self.format_where(w, wh),
            NodeRef::OrderBy(o) => self.format_order_by(w, o),
            NodeRef::Limit(l) => self.format_limit(w, l),
            NodeRef::Lock(lock) => {
                if let Some(kw) = self.row_lock_sql(*lock) {
                    w.push_str(kw);
                }
            }
            NodeRef::Conflict(c) => self.format_conflict_clause(w, c),
            NodeRef::ColumnSpec(cs) => self.format_column_spec(w, cs),
            NodeRef::PrimaryKey(pk) => self.format_primary_key(w, pk),
            NodeRef::IndexSpec(ix) => self.format_index_spec(w, ix),
        }
    }

    /// Renders a comma-delimited expression list.
    fn format_comma_exprs(&self, w: &mut SqlWriter, exprs: &[Expr]) {
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                w.push(',');
            }
            self.format_expr(w, expr);
        }
    }

    /// Renders an expression.
    fn format_expr(&self, w: &mut SqlWriter, expr: &Expr) {
        match expr {
            Expr::Identifier(name) => w.push_str(name),
            Expr::Selector { qualifier, field } => {
                w.push_str(qualifier);
                w.push('.');
                w.push_str(field);
            }
            Expr::Binary { left, op, right } => {
                self.format_expr(w, left);
                w.push(' ');
                w.push_str(op.as_str());
                w.push(' ');
                self.format_expr(w, right);
            }
            Expr::Unary { expr, op } => {
                self.format_expr(w, expr);
                w.push(' ');
                w.push_str(op.as_str());
            }
            Expr::Function { name, args } => {
                w.push_str(name);
                w.push('(');
                self.format_comma_exprs(w, args);
                w.push(')');
            }
            Expr::Distinct(args) => {
                w.push_str("DISTINCT ");
                self.format_comma_exprs(w, args);
            }
            Expr::Tuple(values) => {
                w.push('(');
                self.format_comma_exprs(w, values);
                w.push(')');
            }
            Expr::Paren(inner) => {
                w.push('(');
                self.format_expr(w, inner);
                w.push(')');
            }
            Expr::Placeholder(value) => w.placeholder(value),
            Expr::Integer(value) => w.push_str(&value.to_string()),
            Expr::Str(value) => {
                w.push('\'');
                w.push_str(&value.replace('\'', "''"));
                w.push('\'');
            }
            Expr::Null => w.push_str("NULL"),
            Expr::Star => w.push('*'),
            Expr::Alias { expr, alias } => {
                self.format_expr(w, expr);
                w.push_str(" AS ");
                w.push_str(alias);
            }
        }
    }

    /// Renders a table expression.
    fn format_table_expr(&self, w: &mut SqlWriter, table: &TableExpr) {
        match table {
            TableExpr::Name { database, name } => {
                if let Some(database) = database {
                    w.push_str(database);
                    w.push('.');
                }
                w.push_str(name);
            }
            TableExpr::Join {
                kind,
                left,
                right,
                on,
            } => {
                self.format_table_expr(w, left);
                w.push(' ');
                w.push_str(kind.as_str());
                w.push(' ');
                self.format_table_expr(w, right);
                w.push_str(" ON ");
                self.format_expr(w, on);
            }
            TableExpr::Alias { table, alias } => {
                self.format_table_expr(w, table);
                w.push_str(" AS ");
                w.push_str(alias);
            }
        }
    }

    /// Renders a WHERE clause.
    fn format_where(&self, w: &mut SqlWriter, where_clause: &Where) {
        w.push_str("WHERE (");
        self.format_expr(w, &where_clause.expr);
        w.push(')');
    }

    /// Renders an ORDER BY clause.
    fn format_order_by(&self, w: &mut SqlWriter, order_by: &OrderBy) {
        w.push_str("ORDER BY ");
        for (i, order) in order_by.orders.iter().enumerate() {
            if i > 0 {
                w.push(',');
            }
            self.format_expr(w, &order.expr);
            w.push(' ');
            w.push_str(order.direction.as_str());
        }
    }

    /// Renders a LIMIT clause.
    fn format_limit(&self, w: &mut SqlWriter, limit: &Limit) {
        w.push_str("LIMIT ");
        if let Some(offset) = &limit.offset {
            self.format_expr(w, offset);
            w.push_str(", ");
        }
        self.format_expr(w, &limit.count);
    }

    /// Renders a SELECT statement.
    fn format_select(&self, w: &mut SqlWriter, select: &Select) {
        w.push_str("SELECT ");
        self.format_comma_exprs(w, &select.exprs);
        w.push_str(" FROM ");
        self.format_table_expr(w, &select.from);
        if let Some(where_clause) = &select.where_clause {
            w.push(' ');
            self.format_where(w, where_clause);
        }
        if let Some(order_by) = &select.order_by {
            w.push(' ');
            self.format_order_by(w, order_by);
        }
        if let Some(limit) = &select.limit {
            w.push(' ');
            self.format_limit(w, limit);
        }
        if let Some(lock) = select.lock {
            if let Some(kw) = self.row_lock_sql(lock) {
                w.push(' ');
                w.push_str(kw);
            }
        }
    }

    /// Renders an INSERT statement.
    fn format_insert(&self, w: &mut SqlWriter, insert: &Insert) {
        w.push_str("INSERT INTO ");
        self.format_table_expr(w, &insert.into);
        w.push_str(" (");
        for (i, column) in insert.columns.iter().enumerate() {
            if i > 0 {
                w.push(',');
            }
            w.push_str(column);
        }
        w.push_str(") VALUES ");
        for (i, row) in insert.rows.iter().enumerate() {
            if i > 0 {
                w.push(',');
            }
            w.push('(');
            self.format_comma_exprs(w, row);
            w.push(')');
        }
        if let Some(conflict) = &insert.conflict {
            w.push(' ');
            self.format_conflict_clause(w, conflict);
        }
    }

    /// Renders an UPDATE statement.
    fn format_update(&self, w: &mut SqlWriter, update: &Update) {
        w.push_str("UPDATE ");
        self.format_table_expr(w, &update.table);
        w.push_str(" SET ");
        self.format_comma_exprs(w, &update.assignments);
        if let Some(where_clause) = &update.where_clause {
            w.push(' ');
            self.format_where(w, where_clause);
        }
        if let Some(order_by) = &update.order_by {
            w.push(' ');
            self.format_order_by(w, order_by);
        }
        if let Some(limit) = &update.limit {
            w.push(' ');
            self.format_limit(w, limit);
        }
    }

    /// Renders a DELETE statement.
    fn format_delete(&self, w: &mut SqlWriter, delete: &Delete) {
        w.push_str("DELETE FROM ");
        self.format_table_expr(w, &delete.from);
        if let Some(where_clause) = &delete.where_clause {
            w.push(' ');
            self.format_where(w, where_clause);
        }
        if let Some(order_by) = &delete.order_by {
            w.push(' ');
            self.format_order_by(w, order_by);
        }
        if let Some(limit) = &delete.limit {
            w.push(' ');
            self.format_limit(w, limit);
        }
    }

    /// Renders a CREATE TABLE statement.
    fn format_create_table(&self, w: &mut SqlWriter, create: &CreateTable) {
        w.push_str("CREATE TABLE ");
        if create.if_not_exists {
            w.push_str("IF NOT EXISTS ");
        }
        w.push_str(&create.name);
        w.push('(');
        for (i, column) in create.columns.iter().enumerate() {
            if i > 0 {
                w.push(',');
            }
            self.format_column_spec(w, column);
        }
        if !self.inlines_primary_key() {
            if let Some(primary_key) = &create.primary_key {
                w.push(',');
                self.format_primary_key(w, primary_key);
            }
        }
        w.push(')');
    }

    /// Renders an ALTER TABLE statement.
    fn format_alter_table(&self, w: &mut SqlWriter, alter: &AlterTable) {
        w.push_str("ALTER TABLE ");
        w.push_str(&alter.name);
        for (i, column) in alter.add_columns.iter().enumerate() {
            if i > 0 {
                w.push(',');
            }
            w.push_str(" ADD COLUMN ");
            self.format_column_spec(w, column);
        }
        if !alter.add_columns.is_empty() && !alter.add_indices.is_empty() {
            w.push(',');
        }
        for (i, index) in alter.add_indices.iter().enumerate() {
            if i > 0 {
                w.push(',');
            }
            w.push_str(" ADD ");
            self.format_index_spec(w, index);
        }
    }

    /// Renders one column definition.
    fn format_column_spec(&self, w: &mut SqlWriter, spec: &ColumnSpec) {
        w.push_str(&spec.name);
        w.push(' ');
        self.format_column_type(w, &spec.column_type);
        if let Some(nullability) = spec.nullability.as_str() {
            w.push(' ');
            w.push_str(nullability);
        }
        if let Some(default) = &spec.default {
            w.push_str(" DEFAULT ");
            self.format_expr(w, default);
        }
        if spec.primary_key && self.inlines_primary_key() {
            w.push_str(" PRIMARY KEY");
        }
        if spec.auto_increment {
            if let Some(kw) = self.auto_increment_sql() {
                w.push(' ');
                w.push_str(kw);
            }
        }
    }

    /// Renders a trailing primary-key clause.
    fn format_primary_key(&self, w: &mut SqlWriter, primary_key: &PrimaryKey) {
        w.push_str("PRIMARY KEY (");
        for (i, column) in primary_key.columns.iter().enumerate() {
            if i > 0 {
                w.push(',');
            }
            w.push_str(column);
        }
        w.push(')');
    }

    /// Renders one index definition.
    fn format_index_spec(&self, w: &mut SqlWriter, index: &IndexSpec) {
        if index.unique {
            w.push_str("UNIQUE ");
        }
        w.push_str("INDEX ");
        w.push_str(&index.name);
        w.push_str(" (");
        for (i, column) in index.columns.iter().enumerate() {
            if i > 0 {
                w.push(',');
            }
            w.push_str(column);
        }
        w.push(')');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOp;

    #[test]
    fn test_writer_records_placeholder_args() {
        let mut w = SqlWriter::new();
        w.push_str("A = ");
        w.placeholder(&Value::Int(7));
        let stmt = w.into_statement();
        assert_eq!(stmt.sql, "A = ?");
        assert_eq!(stmt.args, vec![Value::Int(7)]);
    }

    #[test]
    fn test_expr_rendering_is_dialect_agnostic() {
        let expr = Expr::identifier("A")
            .binary(BinaryOp::Eq, Expr::placeholder(1_i64))
            .and(Expr::identifier("B").is_not_null());

        let mut mysql = SqlWriter::new();
        MysqlDialect::new().format_expr(&mut mysql, &expr);
        let mut sqlite = SqlWriter::new();
        SqliteDialect::new().format_expr(&mut sqlite, &expr);

        assert_eq!(mysql.sql(), "A = ? AND B IS NOT NULL");
        assert_eq!(mysql.sql(), sqlite.sql());
    }
}
