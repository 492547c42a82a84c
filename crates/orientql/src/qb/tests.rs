//! Integration tests for the qb module.

use crate::config::{QuoteEscape, RenderConfig};
use crate::document::Document;
use crate::qb::{SqlQb, Target, update};
use crate::rid::RecordId;
use crate::value::Value;

fn foo_bar() -> Document {
    Document::new()
        .field("foo", "foo string value")
        .field("bar", 12345)
}

const FOO_BAR_SET: &str = "SET foo = 'foo string value', bar = 12345";

#[test]
fn test_update_class_from_document() {
    let sql = update()
        .document(foo_bar().with_class("TestVertexClass"))
        .build()
        .unwrap();
    assert_eq!(sql, format!("UPDATE TestVertexClass {FOO_BAR_SET}"));
}

#[test]
fn test_update_class() {
    let sql = update()
        .document(foo_bar())
        .class("TestVertexClass")
        .build()
        .unwrap();
    assert_eq!(sql, format!("UPDATE TestVertexClass {FOO_BAR_SET}"));
}

#[test]
fn test_update_cluster() {
    let sql = update()
        .document(foo_bar())
        .cluster("TestCluster")
        .build()
        .unwrap();
    assert_eq!(sql, format!("UPDATE cluster:TestCluster {FOO_BAR_SET}"));
}

#[test]
fn test_update_record_from_document() {
    let sql = update()
        .document(foo_bar().with_rid(RecordId::new(8, 0)))
        .build()
        .unwrap();
    assert_eq!(sql, format!("UPDATE #8:0 {FOO_BAR_SET}"));
}

#[test]
fn test_update_record() {
    let sql = update()
        .document(foo_bar())
        .record(RecordId::new(8, 0))
        .build()
        .unwrap();
    assert_eq!(sql, format!("UPDATE #8:0 {FOO_BAR_SET}"));
}

#[test]
fn test_update_record_set_document() {
    let sql = update()
        .record(RecordId::new(8, 0))
        .set_document(&foo_bar())
        .build()
        .unwrap();
    assert_eq!(sql, format!("UPDATE #8:0 {FOO_BAR_SET}"));
}

#[test]
fn test_set_document_ignores_document_target() {
    let doc = foo_bar().with_class("Ignored");
    let qb = update().set_document(&doc);
    assert!(qb.target().is_none());
    assert!(qb.build().unwrap_err().is_missing_target());
}

#[test]
fn test_update_record_set() {
    let sql = update()
        .record(RecordId::new(8, 0))
        .set("foo", "foo string value")
        .set("bar", 12345)
        .build()
        .unwrap();
    assert_eq!(sql, format!("UPDATE #8:0 {FOO_BAR_SET}"));
}

#[test]
fn test_update_where_all_operators() {
    let sql = update()
        .document(foo_bar().with_rid(RecordId::new(8, 0)))
        .where_("foo")
        .eq("whoa")
        .or("foo")
        .ne(123)
        .and("foo")
        .lt(1)
        .and("foo")
        .lte(2)
        .and("foo")
        .gt(3)
        .and("foo")
        .gte(4)
        .and("foo")
        .like("%whoa%")
        .and("foo")
        .is_null()
        .and("foo")
        .contains("johny")
        .and("foo")
        .contains_field("name", "johny")
        .build()
        .unwrap();

    assert_eq!(
        sql,
        "UPDATE #8:0 \
         SET foo = 'foo string value', bar = 12345 \
         WHERE foo = 'whoa' \
         OR foo != 123 \
         AND foo < 1 \
         AND foo <= 2 \
         AND foo > 3 \
         AND foo >= 4 \
         AND foo LIKE '%whoa%' \
         AND foo IS NULL \
         AND foo CONTAINS 'johny' \
         AND foo CONTAINS (name = 'johny')"
    );
}

#[test]
fn test_update_add_collection_item() {
    let sql = update()
        .record(RecordId::new(8, 0))
        .add("foo", "foo string value")
        .build()
        .unwrap();
    assert_eq!(sql, "UPDATE #8:0 ADD foo = 'foo string value'");
}

#[test]
fn test_update_remove_fields() {
    let sql = update()
        .record(RecordId::new(8, 0))
        .remove("foo")
        .remove("bar")
        .build()
        .unwrap();
    assert_eq!(sql, "UPDATE #8:0 REMOVE foo, bar");
}

#[test]
fn test_update_remove_collection_item() {
    let sql = update()
        .record(RecordId::new(8, 0))
        .remove_value("foo", 123)
        .build()
        .unwrap();
    assert_eq!(sql, "UPDATE #8:0 REMOVE foo = 123");
}

#[test]
fn test_clause_order_is_fixed() {
    // Called REMOVE, ADD, SET; rendered SET, ADD, REMOVE.
    let sql = update()
        .record(RecordId::new(8, 0))
        .remove("old")
        .add("tags", "t1")
        .set("name", "n")
        .where_("version")
        .eq(3)
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "UPDATE #8:0 SET name = 'n' ADD tags = 't1' REMOVE old WHERE version = 3"
    );
}

// Open question: several explicit targets. The last call wins.
#[test]
fn test_last_explicit_target_wins() {
    let qb = update()
        .class("A")
        .record(RecordId::new(1, 1))
        .cluster("C")
        .set("x", 1);
    assert_eq!(qb.target(), Some(Target::Cluster("C".into())));
    assert_eq!(qb.build().unwrap(), "UPDATE cluster:C SET x = 1");

    let qb = update().cluster("C").class("A").set("x", 1);
    assert_eq!(qb.build().unwrap(), "UPDATE A SET x = 1");
}

#[test]
fn test_explicit_target_beats_document() {
    let doc = foo_bar()
        .with_class("DocClass")
        .with_rid(RecordId::new(9, 9));
    let sql = update().document(doc).class("Explicit").build().unwrap();
    assert_eq!(sql, format!("UPDATE Explicit {FOO_BAR_SET}"));
}

// Open question: document fields and explicit SET together. Document first.
#[test]
fn test_document_fields_precede_explicit_set() {
    let sql = update()
        .set("first_called", 1)
        .document(foo_bar().with_class("C"))
        .set("last_called", 2)
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "UPDATE C SET foo = 'foo string value', bar = 12345, first_called = 1, last_called = 2"
    );
}

#[test]
fn test_document_overwrite_keeps_position_in_set() {
    let mut doc = foo_bar().with_class("C");
    doc.set_field("foo", "second");
    let sql = update().document(doc).build().unwrap();
    assert_eq!(sql, "UPDATE C SET foo = 'second', bar = 12345");
}

// An UPDATE with no clauses renders rather than failing. The warning it
// logs is checked in tests/update_query.rs.
#[test]
fn test_empty_update_is_permitted() {
    let sql = update().record(RecordId::new(8, 0)).build().unwrap();
    assert_eq!(sql, "UPDATE #8:0");
}

#[test]
fn test_render_is_idempotent() {
    let qb = update()
        .document(foo_bar().with_class("C"))
        .add("tags", vec!["a", "b"])
        .where_("foo")
        .contains_field("name", "johny");
    let first = qb.build().unwrap();
    let second = qb.build().unwrap();
    assert_eq!(first, second);
    assert_eq!(qb.to_sql().unwrap(), first);
}

#[test]
fn test_where_token_counts() {
    let sql = update()
        .class("C")
        .set("x", 1)
        .where_("a")
        .eq(1)
        .and("b")
        .eq(2)
        .or("c")
        .eq(3)
        .build()
        .unwrap();
    assert_eq!(sql.matches("WHERE").count(), 1);
    assert_eq!(sql.matches(" AND ").count(), 1);
    assert_eq!(sql.matches(" OR ").count(), 1);
    assert!(sql.find(" AND ").unwrap() < sql.find(" OR ").unwrap());
}

#[test]
fn test_where_without_mutations() {
    let sql = update().class("C").where_("x").is_null().build().unwrap();
    assert_eq!(sql, "UPDATE C WHERE x IS NULL");
}

#[test]
fn test_literal_kinds_in_set() {
    let sql = update()
        .record(RecordId::new(3, 7))
        .set("s", "")
        .set("i", -5)
        .set("f", 2.5)
        .set("b", true)
        .set("n", Value::Null)
        .set("l", vec![1, 2])
        .set("link", RecordId::new(4, 2))
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "UPDATE #3:7 SET s = '', i = -5, f = 2.5, b = true, n = NULL, l = [1, 2], link = #4:2"
    );
}

#[test]
fn test_set_json() {
    #[derive(serde::Serialize)]
    struct Address {
        city: &'static str,
        zip: u32,
    }

    let sql = update()
        .class("Person")
        .set_json(
            "address",
            &Address {
                city: "Rome",
                zip: 100,
            },
        )
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(sql, "UPDATE Person SET address = (city = 'Rome', zip = 100)");
}

#[test]
fn test_large_unsigned_stays_exact() {
    let sql = update()
        .class("C")
        .set_json("n", &u64::MAX)
        .unwrap()
        .set("len", vec![1, 2, 3].len())
        .build()
        .unwrap();
    assert_eq!(sql, "UPDATE C SET n = 18446744073709551615, len = 3");
}

#[test]
fn test_backslash_escape_config() {
    let config = RenderConfig::new().with_quote_escape(QuoteEscape::Backslash);
    let qb = update()
        .class("C")
        .set("name", "O'Brien")
        .where_("note")
        .like("%it's%");

    assert_eq!(
        qb.build().unwrap(),
        "UPDATE C SET name = 'O'Brien' WHERE note LIKE '%it's%'"
    );
    assert_eq!(
        qb.build_with(&config).unwrap(),
        r"UPDATE C SET name = 'O\'Brien' WHERE note LIKE '%it\'s%'"
    );
}

#[test]
fn test_finished_builder_is_shareable() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    let qb = update().class("C").set("x", 1).where_("y").eq(2);
    assert_send_sync(&qb);

    let expected = qb.build().unwrap();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| qb.build().unwrap())).collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
