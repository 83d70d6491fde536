use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Represents a customer account record (one row in the accounts table).
// `date_joined` renders as an ISO-8601 date string ("YYYY-MM-DD") in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub date_joined: NaiveDate,
}

// Creation payload. The id is assigned by the database; `date_joined`
// falls back to the current date when the caller omits it.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAccount {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    #[serde(default)]
    pub date_joined: Option<NaiveDate>,
}

// Full replacement payload for PUT. Same required fields as creation;
// an omitted `date_joined` leaves the stored value untouched.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateAccount {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    #[serde(default)]
    pub date_joined: Option<NaiveDate>,
}
