use sqlx::PgPool;

use crate::models::{Account, CreateAccount, UpdateAccount};

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        "SELECT id, name, email, address, phone_number, date_joined
         FROM accounts
         ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

pub async fn fetch_one(pool: &PgPool, id: i32) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        "SELECT id, name, email, address, phone_number, date_joined
         FROM accounts
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn insert(pool: &PgPool, input: CreateAccount) -> Result<Account, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        "INSERT INTO accounts (name, email, address, phone_number, date_joined)
         VALUES ($1, $2, $3, $4, COALESCE($5, CURRENT_DATE))
         RETURNING id, name, email, address, phone_number, date_joined",
    )
    .bind(input.name)
    .bind(input.email)
    .bind(input.address)
    .bind(input.phone_number)
    .bind(input.date_joined)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: i32,
    input: UpdateAccount,
) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        "UPDATE accounts
         SET name = $1, email = $2, address = $3, phone_number = $4,
             date_joined = COALESCE($5, date_joined)
         WHERE id = $6
         RETURNING id, name, email, address, phone_number, date_joined",
    )
    .bind(input.name)
    .bind(input.email)
    .bind(input.address)
    .bind(input.phone_number)
    .bind(input.date_joined)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
