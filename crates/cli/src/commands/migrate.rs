//! Applies the Postgres schema.
//!
//! Idempotent: every statement is `IF NOT EXISTS`.

use folio_storage::PgStorage;

pub(crate) async fn run() -> anyhow::Result<()> {
    let pg_url = crate::get_database_url()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set for migration"))?;
    PgStorage::new(&pg_url).await?;
    println!("Schema is up to date");
    Ok(())
}
