//! End-to-end tests against an in-memory SQLite database.

use flint_sql::column::{int, varchar};
use flint_sql::conflict::ConflictKey;
use flint_sql::filter::{equals, order_asc};
use flint_sql::{QueryBuilder, SqliteDialect, Value};
use flint_sql_sqlite::SqliteExecutor;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::Row;

async fn executor_with_users_table() -> SqliteExecutor {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite should connect");
    let exec = SqliteExecutor::new(pool);

    let create = QueryBuilder::new(SqliteDialect::new())
        .create_table("Users")
        .column(int("ID").not_null().primary_key().build())
        .column(varchar("Name", 255).null().build())
        .build()
        .unwrap();
    exec.execute(&create).await.expect("create table");
    exec
}

fn builder() -> QueryBuilder<SqliteDialect> {
    QueryBuilder::new(SqliteDialect::new())
}

#[tokio::test]
async fn insert_select_update_delete_roundtrip() {
    let exec = executor_with_users_table().await;

    let insert = builder()
        .insert("Users")
        .fields(&["ID", "Name"])
        .values([Value::Int(1), Value::Text(String::from("ada"))])
        .values([Value::Int(2), Value::Text(String::from("grace"))])
        .build()
        .unwrap();
    let result = exec.execute(&insert).await.expect("insert");
    assert_eq!(result.rows_affected(), 2);

    let select = builder()
        .select_from("Users")
        .columns(&["Name"])
        .order_by(order_asc("ID"))
        .build()
        .unwrap();
    let rows = exec.fetch_all(&select).await.expect("select");
    let names: Vec<Option<String>> = rows.iter().map(|r| r.get(0)).collect();
    assert_eq!(
        names,
        vec![Some(String::from("ada")), Some(String::from("grace"))]
    );

    let update = builder()
        .update("Users")
        .set("Name", "ada lovelace")
        .filter(equals("ID", 1_i64))
        .build()
        .unwrap();
    let result = exec.execute(&update).await.expect("update");
    assert_eq!(result.rows_affected(), 1);

    let delete = builder()
        .delete("Users")
        .filter(equals("ID", 2_i64))
        .build()
        .unwrap();
    let result = exec.execute(&delete).await.expect("delete");
    assert_eq!(result.rows_affected(), 1);

    let remaining = builder()
        .select_from("Users")
        .columns(&["Name"])
        .build()
        .unwrap();
    let row = exec.fetch_one(&remaining).await.expect("one row left");
    assert_eq!(
        row.get::<Option<String>, _>(0),
        Some(String::from("ada lovelace"))
    );
}

#[tokio::test]
async fn upsert_ignore_keeps_existing_row() {
    let exec = executor_with_users_table().await;

    let seed = builder()
        .insert("Users")
        .fields(&["ID", "Name"])
        .values([Value::Int(1), Value::Text(String::from("first"))])
        .build()
        .unwrap();
    exec.execute(&seed).await.expect("seed");

    let conflicting = builder()
        .insert("Users")
        .fields(&["ID", "Name"])
        .values([Value::Int(1), Value::Text(String::from("second"))])
        .ignore_conflicts(ConflictKey::new(["ID"]))
        .build()
        .unwrap();
    exec.execute(&conflicting).await.expect("upsert ignore");

    let select = builder()
        .select_from("Users")
        .columns(&["Name"])
        .filter(equals("ID", 1_i64))
        .build()
        .unwrap();
    let row = exec.fetch_one(&select).await.expect("row");
    assert_eq!(row.get::<Option<String>, _>(0), Some(String::from("first")));
}

#[tokio::test]
async fn upsert_overwrite_takes_incoming_row() {
    let exec = executor_with_users_table().await;

    let seed = builder()
        .insert("Users")
        .fields(&["ID", "Name"])
        .values([Value::Int(1), Value::Text(String::from("first"))])
        .build()
        .unwrap();
    exec.execute(&seed).await.expect("seed");

    let conflicting = builder()
        .insert("Users")
        .fields(&["ID", "Name"])
        .values([Value::Int(1), Value::Text(String::from("second"))])
        .overwrite_conflicts(ConflictKey::new(["ID"]))
        .build()
        .unwrap();
    exec.execute(&conflicting).await.expect("upsert overwrite");

    let select = builder()
        .select_from("Users")
        .columns(&["Name"])
        .filter(equals("ID", 1_i64))
        .build()
        .unwrap();
    let row = exec.fetch_one(&select).await.expect("row");
    assert_eq!(row.get::<Option<String>, _>(0), Some(String::from("second")));
}

#[tokio::test]
async fn batched_inserts_execute_independently() {
    let exec = executor_with_users_table().await;

    let statements = builder()
        .insert("Users")
        .fields(&["ID", "Name"])
        .values([Value::Int(1), Value::Text(String::from("a"))])
        .values([Value::Int(2), Value::Text(String::from("b"))])
        .values([Value::Int(3), Value::Text(String::from("c"))])
        .build_batches(2)
        .unwrap();
    assert_eq!(statements.len(), 2);

    for stmt in &statements {
        exec.execute(stmt).await.expect("batch insert");
    }

    let count = builder()
        .select_from("Users")
        .fields([flint_sql::functions::count_all()])
        .build()
        .unwrap();
    let row = exec.fetch_one(&count).await.expect("count");
    assert_eq!(row.get::<i64, _>(0), 3);
}

#[tokio::test]
async fn constraint_violation_passes_through() {
    let exec = executor_with_users_table().await;

    let insert = builder()
        .insert("Users")
        .fields(&["ID", "Name"])
        .values([Value::Int(1), Value::Text(String::from("a"))])
        .build()
        .unwrap();
    exec.execute(&insert).await.expect("first insert");

    let err = exec.execute(&insert).await.expect_err("duplicate key");
    assert!(matches!(err, sqlx::Error::Database(_)));
}
