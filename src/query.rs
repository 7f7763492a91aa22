//! Parameterised SQL construction.
//!
//! Every function here is pure: metadata in, `(sql, ordered arguments)` out.
//! Placeholders are positional (`$1..$n`), 1-based and contiguous, numbered
//! in the exact order values are appended to the argument list; for `UPDATE`
//! the WHERE clause continues numbering after the SET clause. Column and
//! condition maps are insertion-ordered slices of pairs, never hash maps, so
//! placeholder/argument alignment can't drift.
//!
//! The generated text shapes (including the `IF NOT EXISTS` / `IF EXISTS`
//! guards and trailing `RETURNING *`) are an external contract; tooling that
//! introspects emitted SQL depends on them.

use crate::value::Value;

/// `CREATE TABLE IF NOT EXISTS <table> (<defs>);`
pub fn create_table(table: &str, column_defs: &[String]) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({});",
        table,
        column_defs.join(", ")
    )
}

/// `DROP TABLE IF EXISTS <table>;`
pub fn drop_table(table: &str) -> String {
    format!("DROP TABLE IF EXISTS {};", table)
}

/// `CREATE INDEX IF NOT EXISTS <index> ON <table> (<column>);`
pub fn create_index(table: &str, index_name: &str, column: &str) -> String {
    format!(
        "CREATE INDEX IF NOT EXISTS {} ON {} ({});",
        index_name, table, column
    )
}

/// `DROP INDEX IF EXISTS <index>;`
pub fn drop_index(index_name: &str) -> String {
    format!("DROP INDEX IF EXISTS {};", index_name)
}

/// `INSERT INTO <table> (<cols>) VALUES ($1..$n) RETURNING *;`
///
/// Placeholder order matches `data` order exactly.
pub fn insert(table: &str, data: &[(String, Value)]) -> (String, Vec<Value>) {
    let cols = data
        .iter()
        .map(|(name, _)| name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = (1..=data.len())
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING *;",
        table, cols, placeholders
    );
    (sql, values(data))
}

/// `SELECT <projection> FROM <table> [WHERE <c1> = $1 AND ...];`
///
/// The WHERE clause is omitted entirely when `conditions` is empty.
pub fn select(
    table: &str,
    projection: &str,
    conditions: &[(String, Value)],
) -> (String, Vec<Value>) {
    let mut sql = format!("SELECT {} FROM {}", projection, table);
    push_where(&mut sql, conditions, 1);
    sql.push(';');
    (sql, values(conditions))
}

/// `UPDATE <table> SET <f1> = $1, ... [WHERE ...] RETURNING *;`
///
/// SET placeholders run `$1..$k`; the WHERE clause continues from `$(k+1)`.
/// The returned arguments are the data values followed by the condition
/// values, in that order.
///
/// # Panics
///
/// `data` must be non-empty: SQL has no UPDATE with an empty SET list, so
/// there is no statement to build.
pub fn update(
    table: &str,
    data: &[(String, Value)],
    conditions: &[(String, Value)],
) -> (String, Vec<Value>) {
    assert!(!data.is_empty(), "UPDATE requires at least one SET column");
    let set_clause = data
        .iter()
        .enumerate()
        .map(|(i, (name, _))| format!("{} = ${}", name, i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    let mut sql = format!("UPDATE {} SET {}", table, set_clause);
    push_where(&mut sql, conditions, data.len() + 1);
    sql.push_str(" RETURNING *;");

    let mut args = values(data);
    args.extend(values(conditions));
    (sql, args)
}

/// `DELETE FROM <table> [WHERE ...] RETURNING *;`
pub fn delete(table: &str, conditions: &[(String, Value)]) -> (String, Vec<Value>) {
    let mut sql = format!("DELETE FROM {}", table);
    push_where(&mut sql, conditions, 1);
    sql.push_str(" RETURNING *;");
    (sql, values(conditions))
}

fn push_where(sql: &mut String, conditions: &[(String, Value)], first_placeholder: usize) {
    if conditions.is_empty() {
        return;
    }
    sql.push_str(" WHERE ");
    for (i, (name, _)) in conditions.iter().enumerate() {
        if i > 0 {
            sql.push_str(" AND ");
        }
        sql.push_str(&format!("{} = ${}", name, first_placeholder + i));
    }
}

fn values(pairs: &[(String, Value)]) -> Vec<Value> {
    pairs.iter().map(|(_, v)| v.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, i32)]) -> Vec<(String, Value)> {
        items
            .iter()
            .map(|(name, v)| (name.to_string(), Value::from(*v)))
            .collect()
    }

    #[test]
    fn test_create_table() {
        let defs = vec![
            "id INTEGER NOT NULL PRIMARY KEY".to_string(),
            "name TEXT".to_string(),
        ];
        assert_eq!(
            create_table("user", &defs),
            "CREATE TABLE IF NOT EXISTS user (id INTEGER NOT NULL PRIMARY KEY, name TEXT);"
        );
    }

    #[test]
    fn test_drop_statements() {
        assert_eq!(drop_table("user"), "DROP TABLE IF EXISTS user;");
        assert_eq!(drop_index("idx_user_name"), "DROP INDEX IF EXISTS idx_user_name;");
    }

    #[test]
    fn test_create_index() {
        assert_eq!(
            create_index("user", "idx_user_name", "name"),
            "CREATE INDEX IF NOT EXISTS idx_user_name ON user (name);"
        );
    }

    #[test]
    fn test_insert_placeholder_order() {
        let (sql, args) = insert("user", &pairs(&[("id", 1), ("age", 30)]));
        assert_eq!(
            sql,
            "INSERT INTO user (id, age) VALUES ($1, $2) RETURNING *;"
        );
        assert_eq!(args, vec![Value::Int(1), Value::Int(30)]);
    }

    #[test]
    fn test_select_with_conditions() {
        let (sql, args) = select("user", "*", &pairs(&[("id", 1), ("age", 30)]));
        assert_eq!(sql, "SELECT * FROM user WHERE id = $1 AND age = $2;");
        assert_eq!(args, vec![Value::Int(1), Value::Int(30)]);
    }

    #[test]
    fn test_select_without_conditions_omits_where() {
        let (sql, args) = select("user", "*", &[]);
        assert_eq!(sql, "SELECT * FROM user;");
        assert!(args.is_empty());
    }

    #[test]
    fn test_select_projection() {
        let (sql, _) = select("user", "id, name", &[]);
        assert_eq!(sql, "SELECT id, name FROM user;");
    }

    #[test]
    fn test_update_numbering_continues_into_where() {
        let (sql, args) = update(
            "t",
            &pairs(&[("a", 1), ("b", 2)]),
            &pairs(&[("c", 3)]),
        );
        assert_eq!(
            sql,
            "UPDATE t SET a = $1, b = $2 WHERE c = $3 RETURNING *;"
        );
        assert_eq!(args, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    }

    #[test]
    #[should_panic(expected = "at least one SET column")]
    fn test_update_requires_data() {
        update("t", &[], &pairs(&[("id", 1)]));
    }

    #[test]
    fn test_delete() {
        let (sql, args) = delete("user", &pairs(&[("id", 7)]));
        assert_eq!(sql, "DELETE FROM user WHERE id = $1 RETURNING *;");
        assert_eq!(args, vec![Value::Int(7)]);
    }

    #[test]
    fn test_delete_without_conditions_omits_where() {
        let (sql, args) = delete("user", &[]);
        assert_eq!(sql, "DELETE FROM user RETURNING *;");
        assert!(args.is_empty());
    }
}
