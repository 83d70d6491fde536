use sqlx::PgPool;

// Idempotent DDL applied at startup: one row per Account, columns matching
// the JSON field names. Ids are database-assigned and never reused.
const CREATE_ACCOUNTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS accounts (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    address TEXT NOT NULL,
    phone_number TEXT NOT NULL,
    date_joined DATE NOT NULL DEFAULT CURRENT_DATE
)";

pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_ACCOUNTS_TABLE).execute(pool).await?;
    Ok(())
}
