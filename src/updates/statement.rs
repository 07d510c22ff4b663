// ABOUTME: Assembles parameterized UPDATE and INSERT statements from validated assignments
// ABOUTME: Placeholder text and parameter list are built together in a single pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::schema::EntitySchema;
use super::validation::Assignment;
use crate::database_plugins::SqlValue;

/// Statement text plus its ordered parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// SQL with `$1..$n` placeholders
    pub text: String,
    /// Parameter `$i` is `params[i - 1]`
    pub params: Vec<SqlValue>,
}

impl Statement {
    /// Push a parameter and return its placeholder
    fn bind(&mut self, value: SqlValue) -> String {
        self.params.push(value);
        format!("${}", self.params.len())
    }
}

/// `UPDATE <table> SET c1 = $1, .. WHERE <pk> = $n+1 RETURNING *`
///
/// Assignments must be non-empty; callers reject empty diffs first.
#[must_use]
pub fn build_update(schema: &EntitySchema, assignments: Vec<Assignment>, id: i64) -> Statement {
    let mut statement = Statement {
        text: String::new(),
        params: Vec::with_capacity(assignments.len() + 1),
    };

    let sets: Vec<String> = assignments
        .into_iter()
        .map(|a| format!("{} = {}", a.field.column, statement.bind(a.value)))
        .collect();
    let key = statement.bind(SqlValue::Integer(Some(id)));

    statement.text = format!(
        "UPDATE {} SET {} WHERE {} = {key} RETURNING *",
        schema.table,
        sets.join(", "),
        schema.primary_key
    );
    statement
}

/// `INSERT INTO <table> (c1, ..) VALUES ($1, ..) RETURNING *`
#[must_use]
pub fn build_insert(schema: &EntitySchema, assignments: Vec<Assignment>) -> Statement {
    let mut statement = Statement {
        text: String::new(),
        params: Vec::with_capacity(assignments.len()),
    };

    if assignments.is_empty() {
        statement.text = format!("INSERT INTO {} DEFAULT VALUES RETURNING *", schema.table);
        return statement;
    }

    let (columns, placeholders): (Vec<&str>, Vec<String>) = assignments
        .into_iter()
        .map(|a| (a.field.column, statement.bind(a.value)))
        .unzip();

    statement.text = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
        schema.table,
        columns.join(", "),
        placeholders.join(", ")
    );
    statement
}

/// `UPDATE <table> SET <flag> = $1 WHERE <pk> = $2 RETURNING *`
#[must_use]
pub fn build_flag_update(schema: &EntitySchema, column: &str, flag: bool, id: i64) -> Statement {
    Statement {
        text: format!(
            "UPDATE {} SET {column} = $1 WHERE {} = $2 RETURNING *",
            schema.table, schema.primary_key
        ),
        params: vec![SqlValue::Boolean(Some(flag)), SqlValue::Integer(Some(id))],
    }
}

/// `DELETE FROM <table> WHERE <pk> = $1 RETURNING *`
#[must_use]
pub fn build_delete(schema: &EntitySchema, id: i64) -> Statement {
    Statement {
        text: format!(
            "DELETE FROM {} WHERE {} = $1 RETURNING *",
            schema.table, schema.primary_key
        ),
        params: vec![SqlValue::Integer(Some(id))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CLASSES, PAYMENTS};
    use crate::updates::validation::validate_field;
    use serde_json::json;

    fn assign(schema: &EntitySchema, key: &str, value: serde_json::Value) -> Assignment {
        let field = schema.fields.iter().find(|f| f.key == key).unwrap();
        validate_field(field, &value).unwrap()
    }

    #[test]
    fn test_single_field_update() {
        let statement = build_update(&PAYMENTS, vec![assign(&PAYMENTS, "monto", json!(60))], 4);
        assert_eq!(
            statement.text,
            "UPDATE pagos SET monto = $1 WHERE id_pago = $2 RETURNING *"
        );
        assert_eq!(
            statement.params,
            vec![SqlValue::Real(Some(60.0)), SqlValue::Integer(Some(4))]
        );
    }

    #[test]
    fn test_placeholders_match_parameter_positions() {
        let assignments = vec![
            assign(&CLASSES, "nombre_clase", json!("Spinning")),
            assign(&CLASSES, "descripcion", json!(null)),
            assign(&CLASSES, "dia_semana", json!("Martes")),
            assign(&CLASSES, "id_entrenador", json!("5")),
        ];
        let statement = build_update(&CLASSES, assignments, 9);

        assert_eq!(
            statement.text,
            "UPDATE clases SET nombre_clase = $1, descripcion = $2, dia_semana = $3, \
             id_entrenador = $4 WHERE id_clase = $5 RETURNING *"
        );
        assert_eq!(statement.params.len(), 5);
        assert_eq!(statement.params[3], SqlValue::Integer(Some(5)));
        assert_eq!(statement.params[4], SqlValue::Integer(Some(9)));
    }

    #[test]
    fn test_insert() {
        let assignments = vec![
            assign(&PAYMENTS, "id_cliente", json!(1)),
            assign(&PAYMENTS, "id_membresia", json!(2)),
            assign(&PAYMENTS, "monto", json!(35.5)),
        ];
        let statement = build_insert(&PAYMENTS, assignments);
        assert_eq!(
            statement.text,
            "INSERT INTO pagos (id_cliente, id_membresia, monto) VALUES ($1, $2, $3) RETURNING *"
        );
        assert_eq!(statement.params[2], SqlValue::Real(Some(35.5)));
    }

    #[test]
    fn test_delete_and_flag() {
        assert_eq!(
            build_delete(&CLASSES, 3).text,
            "DELETE FROM clases WHERE id_clase = $1 RETURNING *"
        );
        let soft = build_flag_update(&CLASSES, "estado", false, 3);
        assert_eq!(soft.params[0], SqlValue::Boolean(Some(false)));
        assert!(soft.text.ends_with("WHERE id_clase = $2 RETURNING *"));
    }
}
