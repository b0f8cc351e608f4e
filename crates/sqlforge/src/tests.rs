//! End-to-end statement assembly tests.

use crate::col::col;
use crate::request::request;
use crate::table::JoinType;
use crate::{CaseWhen, Condition, Operator, QueryError, Request};

#[test]
fn grouped_aggregate_query_with_filter_and_ordering() {
    let sql = request()
        .table("payment")
        .select([
            col("staff_id").asc(),
            col("amount").alias("total_amount").sum().desc(),
        ])
        .group_by(["staff_id"])
        .filter(col("amount").gt(0.99).and(col("customer_id").eq(3).negate()))
        .build();

    assert_eq!(
        sql,
        "SELECT staff_id, SUM(amount) AS total_amount FROM payment \
         WHERE ((amount > 0.99) AND NOT(customer_id = 3)) \
         GROUP BY staff_id ORDER BY staff_id ASC, amount DESC"
    );
}

#[test]
fn explicit_condition_joins_render_in_declaration_order() {
    let sql = request()
        .table("film")
        .select(["title", "first_name", "last_name"])
        .join(
            "film_actor",
            col("film.film_id").eq(col("film_actor.film_id")),
            JoinType::Inner,
        )
        .unwrap()
        .join(
            "actor",
            col("film_actor.actor_id").eq(col("actor.actor_id")),
            JoinType::Inner,
        )
        .unwrap()
        .build();

    assert_eq!(
        sql,
        "SELECT title, first_name, last_name FROM film \
         INNER JOIN film_actor ON (film.film_id = film_actor.film_id) \
         INNER JOIN actor ON (film_actor.actor_id = actor.actor_id)"
    );
}

#[test]
fn build_is_idempotent() {
    let req = request()
        .table("payment")
        .select([col("staff_id"), col("amount").sum()])
        .group_by(["staff_id"])
        .filter(col("amount").sum().gt(100));

    let first = req.build();
    let second = req.build();
    assert_eq!(first, second);
}

#[test]
fn join_ambiguity_resolution_uses_reference_side_alias() {
    let req = request()
        .table("customer")
        .select(["customer_id", "first_name"])
        .join("rental", "customer_id", JoinType::Inner)
        .unwrap();

    let sql = req.build();
    // "customer_id" is both selected and a join key: it gets the
    // FROM-side alias, not the newly joined table's.
    assert!(sql.starts_with("SELECT c.customer_id, first_name"));
    assert!(!sql.starts_with("SELECT r.customer_id"));
}

#[test]
fn standalone_condition_and_column_render_outside_a_request() {
    assert_eq!(Condition::new(42, Operator::Eq, 42).build(), "(42 = 42)");
    assert_eq!(col("amount").sum().build(), "SUM(amount)");

    let case = CaseWhen::new(col("rating"), ["G"], ["family"])
        .unwrap()
        .otherwise("adult");
    assert_eq!(
        case.build(),
        "CASE rating\nWHEN 'G' THEN 'family'\nELSE 'adult'\nEND"
    );
}

#[test]
fn using_mode_request_end_to_end() {
    let sql = Request::new_using()
        .table("film")
        .select(["title"])
        .join("film_actor", vec!["film_id", "last_update"], JoinType::Inner)
        .unwrap()
        .build();

    assert_eq!(
        sql,
        "SELECT title FROM film INNER JOIN film_actor USING (film_id, last_update)"
    );
}

#[test]
fn construction_errors_carry_readable_messages() {
    let err = CaseWhen::new(col("rating"), ["G", "PG"], ["family"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "CASE WHEN expected 2 branches but got 1 returned values"
    );

    let err = Request::new_using()
        .table("film")
        .join("film_actor", col("a").eq(col("b")), JoinType::Inner)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "USING-mode joins take column names, not a condition"
    );

    let err = request()
        .table("film")
        .join("film_actor", vec!["film_id"], JoinType::Inner)
        .unwrap_err();
    assert!(matches!(err, QueryError::JoinColumnsTooFew(1)));
}

#[test]
fn full_clause_order() {
    let sql = request()
        .table("payment")
        .select([col("staff_id").asc(), col("amount").sum()])
        .join(
            "staff",
            col("payment.staff_id").eq(col("staff.staff_id")),
            JoinType::Left,
        )
        .unwrap()
        .filter(col("amount").gt(0))
        .group_by(["staff_id"])
        .head(5)
        .build();

    assert_eq!(
        sql,
        "SELECT staff_id, SUM(amount) FROM payment \
         LEFT JOIN staff ON (payment.staff_id = staff.staff_id) \
         WHERE (amount > 0) GROUP BY staff_id ORDER BY staff_id ASC LIMIT 5"
    );
}
