//! Example demonstrating the UPDATE builder.
//!
//! Run with:
//!   cargo run --example update_builder -p orientql
//!
//! The subscriber prints the `orientql.sql` debug events next to the output.

use orientql::{Document, OqlResult, Op, RecordId, RenderConfig, SqlQb, WhereChain, update};

fn main() -> OqlResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Target and SET fields both come from the document.
    let profile = Document::new()
        .with_class("Profile")
        .field("name", "Luke")
        .field("online", true);
    println!("{}", update().document(profile).build()?);

    // Collection edits on a single record.
    let rid: RecordId = "#12:4".parse()?;
    println!(
        "{}",
        update()
            .record(rid)
            .add("friends", RecordId::new(12, 7))
            .remove_value("tags", "draft")
            .remove("legacy")
            .build()?
    );

    // Conditions assembled at runtime.
    let min_age: Option<i64> = Some(18);
    let mut chain = WhereChain::new();
    chain.where_("active", Op::eq(true))?;
    if let Some(age) = min_age {
        chain.and("age", Op::gte(age))?;
    }
    let qb = update()
        .cluster("profiles_eu")
        .set("verified", true)
        .filter(chain)?
        .or("roles")
        .contains_field("name", "admin");
    println!("{}", qb.build_with(&RenderConfig::new().with_max_log_length(40))?);

    Ok(())
}
