use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

/// A catalog item. `owner_name` is not stored on the row; reads fill it from
/// the joined owner.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub defect: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub waist: i32,
    pub length: i32,
    pub chest: i32,
    pub owner: i32,
    pub status: String,
    pub price: i32,
    #[serde(rename = "saleprice")]
    #[sqlx(rename = "saleprice")]
    pub sale_price: i32,
    pub image: Vec<String>,
    #[serde(rename = "createdate")]
    #[sqlx(rename = "createdate")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedate")]
    #[sqlx(rename = "updatedate")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "ownername")]
    #[sqlx(rename = "ownername")]
    pub owner_name: String,
}
