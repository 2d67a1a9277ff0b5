//! INSERT statement builder, including conflict resolution and batching.

use crate::ast::{ConflictClause, ConflictUpdate, Expr, Insert, NodeRef, TableExpr};
use crate::conflict::{Behavior, ConflictKey};
use crate::dialect::{Dialect, SqlWriter};
use crate::error::{Error, Result};
use crate::statement::Statement;
use crate::value::{ToValue, Value};

/// Builds an INSERT statement.
///
/// Values are accumulated as one flat, row-major list; the argument count
/// must be an exact multiple of the field count by the time the statement is
/// built.
#[derive(Debug, Clone)]
pub struct InsertBuilder<D> {
    dialect: D,
    table: TableExpr,
    fields: Vec<String>,
    args: Vec<Value>,
    conflict: Option<ConflictTarget>,
}

#[derive(Debug, Clone)]
struct ConflictTarget {
    key: ConflictKey,
    behaviors: Vec<Behavior>,
}

impl<D: Dialect> InsertBuilder<D> {
    pub(crate) fn new(dialect: D, table: TableExpr) -> Self {
        Self {
            dialect,
            table,
            fields: Vec::new(),
            args: Vec::new(),
            conflict: None,
        }
    }

    /// Appends field names to the insert field list.
    #[must_use]
    pub fn fields(mut self, names: &[&str]) -> Self {
        self.fields.extend(names.iter().map(|n| String::from(*n)));
        self
    }

    /// Appends values to the flat argument list.
    #[must_use]
    pub fn values<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToValue,
    {
        self.args.extend(values.into_iter().map(ToValue::to_value));
        self
    }

    /// Attaches a conflict resolution with explicit per-field behaviors.
    #[must_use]
    pub fn on_conflict(mut self, key: ConflictKey, behaviors: Vec<Behavior>) -> Self {
        self.conflict = Some(ConflictTarget { key, behaviors });
        self
    }

    /// Keeps the existing row untouched when the key conflicts.
    ///
    /// Applies an ignore behavior to every field currently in the field list,
    /// so call this after [`fields`](Self::fields).
    #[must_use]
    pub fn ignore_conflicts(mut self, key: ConflictKey) -> Self {
        let behaviors = self.fields.iter().map(Behavior::ignore).collect();
        self.conflict = Some(ConflictTarget { key, behaviors });
        self
    }

    /// Replaces the existing row's values when the key conflicts.
    ///
    /// Applies an overwrite behavior to every field currently in the field
    /// list, so call this after [`fields`](Self::fields).
    #[must_use]
    pub fn overwrite_conflicts(mut self, key: ConflictKey) -> Self {
        let behaviors = self.fields.iter().map(Behavior::overwrite).collect();
        self.conflict = Some(ConflictTarget { key, behaviors });
        self
    }

    /// Builds a single statement covering every accumulated row.
    pub fn build(self) -> Result<Statement> {
        self.render(&self.args)
    }

    /// Builds one statement per batch of at most `items_per_batch` rows.
    ///
    /// Batches cover all rows in order with no overlap and no gaps, and each
    /// carries the same conflict clause.
    pub fn build_batches(self, items_per_batch: usize) -> Result<Vec<Statement>> {
        if items_per_batch == 0 {
            return Err(Error::InvalidBatchSize);
        }
        validate(&self.fields, &self.args)?;

        let args_per_item = self.fields.len();
        let num_items = self.args.len() / args_per_item;
        let num_batches = num_items.div_ceil(items_per_batch);
        let args_per_batch = items_per_batch * args_per_item;

        let mut statements = Vec::with_capacity(num_batches);
        for i in 0..num_batches {
            let start = i * args_per_batch;
            let end = usize::min(start + args_per_batch, self.args.len());
            statements.push(self.render(&self.args[start..end])?);
        }
        Ok(statements)
    }

    /// Validates the inputs, assembles the statement node over `args`, and
    /// renders it.
    fn render(&self, args: &[Value]) -> Result<Statement> {
        validate(&self.fields, args)?;

        let conflict = match &self.conflict {
            Some(target) if !target.behaviors.is_empty() => {
                if target.key.fields().is_empty() {
                    return Err(Error::EmptyConflictKey);
                }
                if let Some(unknown) = target
                    .behaviors
                    .iter()
                    .find(|b| !self.fields.iter().any(|f| f == b.field()))
                {
                    return Err(Error::UnknownConflictField(String::from(unknown.field())));
                }
                Some(ConflictClause {
                    key: target.key.fields().to_vec(),
                    updates: target
                        .behaviors
                        .iter()
                        .map(|b| ConflictUpdate {
                            field: String::from(b.field()),
                            action: b.action(),
                        })
                        .collect(),
                })
            }
            _ => None,
        };

        let node = Insert {
            into: self.table.clone(),
            columns: self.fields.clone(),
            rows: args
                .chunks(self.fields.len())
                .map(|chunk| chunk.iter().cloned().map(Expr::Placeholder).collect())
                .collect(),
            conflict,
        };

        let mut w = SqlWriter::new();
        self.dialect.format_node(&mut w, NodeRef::Insert(&node));
        Ok(w.into_statement())
    }
}

fn validate(fields: &[String], args: &[Value]) -> Result<()> {
    if fields.is_empty() {
        return Err(Error::EmptyFieldList);
    }
    if args.len() % fields.len() != 0 {
        return Err(Error::ArgumentCountMismatch {
            args: args.len(),
            fields: fields.len(),
        });
    }
    Ok(())
}
