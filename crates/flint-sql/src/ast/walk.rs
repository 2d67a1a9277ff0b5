//! Depth-first traversal over built statement trees.
//!
//! Traversal visits nodes in document order, the same order formatters emit
//! them. The visitor returns `true` to descend into a node's children and
//! `false` to skip the subtree; sibling subtrees are unaffected either way.

use super::ddl::{ColumnSpec, IndexSpec, PrimaryKey};
use super::expr::Expr;
use super::stmt::{
    AlterTable, ConflictClause, CreateTable, Delete, Insert, Limit, Lock, OrderBy, Select,
    TableExpr, Update, Where,
};
use crate::value::Value;

/// A borrowed view of any node in a statement tree.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    /// A SELECT statement.
    Select(&'a Select),
    /// An INSERT statement.
    Insert(&'a Insert),
    /// An UPDATE statement.
    Update(&'a Update),
    /// A DELETE statement.
    Delete(&'a Delete),
    /// A CREATE TABLE statement.
    CreateTable(&'a CreateTable),
    /// An ALTER TABLE statement.
    AlterTable(&'a AlterTable),
    /// An expression.
    Expr(&'a Expr),
    /// A table expression.
    TableExpr(&'a TableExpr),
    /// A WHERE clause.
    Where(&'a Where),
    /// An ORDER BY clause.
    OrderBy(&'a OrderBy),
    /// A LIMIT clause.
    Limit(&'a Limit),
    /// A row-locking clause.
    Lock(&'a Lock),
    /// A conflict-resolution clause.
    Conflict(&'a ConflictClause),
    /// A column definition.
    ColumnSpec(&'a ColumnSpec),
    /// A derived primary-key clause.
    PrimaryKey(&'a PrimaryKey),
    /// An index definition.
    IndexSpec(&'a IndexSpec),
}

/// A traversable AST node.
pub trait Node {
    /// Visits this node and, when the visitor returns `true`, its children in
    /// document order.
    fn accept<'a>(&'a self, visit: &mut dyn FnMut(NodeRef<'a>) -> bool);
}

impl Node for Expr {
    fn accept<'a>(&'a self, visit: &mut dyn FnMut(NodeRef<'a>) -> bool) {
        if !visit(NodeRef::Expr(self)) {
            return;
        }
        match self {
            Self::Binary { left, right, .. } => {
                left.accept(visit);
                right.accept(visit);
            }
            Self::Unary { expr, .. } | Self::Alias { expr, .. } | Self::Paren(expr) => {
                expr.accept(visit);
            }
            Self::Function { args, .. } | Self::Distinct(args) | Self::Tuple(args) => {
                for arg in args {
                    arg.accept(visit);
                }
            }
            Self::Identifier(_)
            | Self::Selector { .. }
            | Self::Placeholder(_)
            | Self::Integer(_)
            | Self::Str(_)
            | Self::Null
            | Self::Star => {}
        }
    }
}

impl Node for TableExpr {
    fn accept<'a>(&'a self, visit: &mut dyn FnMut(NodeRef<'a>) -> bool) {
        if !visit(NodeRef::TableExpr(self)) {
            return;
        }
        match self {
            Self::Join {
                left, right, on, ..
            } => {
                left.accept(visit);
                right.accept(visit);
                on.accept(visit);
            }
            Self::Alias { table, .. } => table.accept(visit),
            Self::Name { .. } => {}
        }
    }
}

impl Node for Where {
    fn accept<'a>(&'a self, visit: &mut dyn FnMut(NodeRef<'a>) -> bool) {
        if visit(NodeRef::Where(self)) {
            self.expr.accept(visit);
        }
    }
}

impl Node for OrderBy {
    fn accept<'a>(&'a self, visit: &mut dyn FnMut(NodeRef<'a>) -> bool) {
        if visit(NodeRef::OrderBy(self)) {
            for order in &self.orders {
                order.expr.accept(visit);
            }
        }
    }
}

impl Node for Limit {
    fn accept<'a>(&'a self, visit: &mut dyn FnMut(NodeRef<'a>) -> bool) {
        if visit(NodeRef::Limit(self)) {
            if let Some(offset) = &self.offset {
                offset.accept(visit);
            }
            self.count.accept(visit);
        }
    }
}

impl Node for ConflictClause {
    fn accept<'a>(&'a self, visit: &mut dyn FnMut(NodeRef<'a>) -> bool) {
        visit(NodeRef::Conflict(self));
    }
}

impl Node for ColumnSpec {
    fn accept<'a>(&'a self, visit: &mut dyn FnMut(NodeRef<'a>) -> bool) {
        if visit(NodeRef::ColumnSpec(self)) {
            if let Some(default) = &self.default {
                default.accept(visit);
            }
        }
    }
}

impl Node for IndexSpec {
    fn accept<'a>(&'a self, visit: &mut dyn FnMut(NodeRef<'a>) -> bool) {
        visit(NodeRef::IndexSpec(self));
    }
}

impl Node for Select {
    fn accept<'a>(&'a self, visit: &mut dyn FnMut(NodeRef<'a>) -> bool) {
        if !visit(NodeRef::Select(self)) {
            return;
        }
        for expr in &self.exprs {
            expr.accept(visit);
        }
        self.from.accept(visit);
        if let Some(where_clause) = &self.where_clause {
            where_clause.accept(visit);
        }
        if let Some(order_by) = &self.order_by {
            order_by.accept(visit);
        }
        if let Some(limit) = &self.limit {
            limit.accept(visit);
        }
        if let Some(lock) = &self.lock {
            visit(NodeRef::Lock(lock));
        }
    }
}

impl Node for Insert {
    fn accept<'a>(&'a self, visit: &mut dyn FnMut(NodeRef<'a>) -> bool) {
        if !visit(NodeRef::Insert(self)) {
            return;
        }
        self.into.accept(visit);
        for row in &self.rows {
            for expr in row {
                expr.accept(visit);
            }
        }
        if let Some(conflict) = &self.conflict {
            conflict.accept(visit);
        }
    }
}

impl Node for Update {
    fn accept<'a>(&'a self, visit: &mut dyn FnMut(NodeRef<'a>) -> bool) {
        if !visit(NodeRef::Update(self)) {
            return;
        }
        self.table.accept(visit);
        for assignment in &self.assignments {
            assignment.accept(visit);
        }
        if let Some(where_clause) = &self.where_clause {
            where_clause.accept(visit);
        }
        if let Some(order_by) = &self.order_by {
            order_by.accept(visit);
        }
        if let Some(limit) = &self.limit {
            limit.accept(visit);
        }
    }
}

impl Node for Delete {
    fn accept<'a>(&'a self, visit: &mut dyn FnMut(NodeRef<'a>) -> bool) {
        if !visit(NodeRef::Delete(self)) {
            return;
        }
        self.from.accept(visit);
        if let Some(where_clause) = &self.where_clause {
            where_clause.accept(visit);
        }
        if let Some(order_by) = &self.order_by {
            order_by.accept(visit);
        }
        if let Some(limit) = &self.limit {
            limit.accept(visit);
        }
    }
}

impl Node for CreateTable {
    fn accept<'a>(&'a self, visit: &mut dyn FnMut(NodeRef<'a>) -> bool) {
        if !visit(NodeRef::CreateTable(self)) {
            return;
        }
        for column in &self.columns {
            column.accept(visit);
        }
        if let Some(primary_key) = &self.primary_key {
            visit(NodeRef::PrimaryKey(primary_key));
        }
    }
}

impl Node for AlterTable {
    fn accept<'a>(&'a self, visit: &mut dyn FnMut(NodeRef<'a>) -> bool) {
        if !visit(NodeRef::AlterTable(self)) {
            return;
        }
        for column in &self.add_columns {
            column.accept(visit);
        }
        for index in &self.add_indices {
            index.accept(visit);
        }
    }
}

/// Collects every placeholder value in the tree, in traversal order.
///
/// Traversal order matches the order formatters emit `?` tokens, so the
/// result lines up with the placeholders of the rendered text.
#[must_use]
pub fn collect_args<N: Node>(node: &N) -> Vec<Value> {
    let mut args = Vec::new();
    node.accept(&mut |n| {
        if let NodeRef::Expr(Expr::Placeholder(value)) = n {
            args.push(value.clone());
            return false;
        }
        true
    });
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::expr::BinaryOp;

    fn placeholder_chain() -> Expr {
        Expr::identifier("A")
            .binary(BinaryOp::Eq, Expr::placeholder(1_i64))
            .and(Expr::identifier("B").binary(BinaryOp::Eq, Expr::placeholder("x")))
    }

    #[test]
    fn test_collect_args_in_document_order() {
        let expr = placeholder_chain();
        assert_eq!(
            collect_args(&expr),
            vec![Value::Int(1), Value::Text(String::from("x"))]
        );
    }

    #[test]
    fn test_visitor_stops_subtree_only() {
        let expr = placeholder_chain();
        let mut identifiers = 0;
        expr.accept(&mut |n| {
            match n {
                // Skip the left arm of the AND entirely.
                NodeRef::Expr(Expr::Binary {
                    op: BinaryOp::Eq,
                    left,
                    ..
                }) if matches!(&**left, Expr::Identifier(name) if name == "A") => {
                    return false;
                }
                NodeRef::Expr(Expr::Identifier(_)) => identifiers += 1,
                _ => {}
            }
            true
        });
        // Only the identifier in the right arm is visited.
        assert_eq!(identifiers, 1);
    }

    #[test]
    fn test_select_traversal_order() {
        let select = Select {
            exprs: vec![Expr::placeholder(1_i64)],
            from: TableExpr::named("t"),
            where_clause: Some(Where {
                expr: Expr::identifier("A").binary(BinaryOp::Eq, Expr::placeholder(2_i64)),
            }),
            order_by: None,
            limit: None,
            lock: None,
        };
        assert_eq!(collect_args(&select), vec![Value::Int(1), Value::Int(2)]);
    }
}
