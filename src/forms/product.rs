use crate::models;
use serde::{Deserialize, Serialize};

/// Full product payload. Every mutable field is replaced on update; fields
/// missing from the body take their zero value. Server-managed fields sent by
/// the client (timestamps, owner name) are ignored.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductForm {
    /// Only read by the bulk update, where it selects the row.
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub defect: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub waist: i32,
    pub length: i32,
    pub chest: i32,
    pub owner: i32,
    pub status: String,
    pub price: i32,
    #[serde(rename = "saleprice")]
    pub sale_price: i32,
    /// `null` is accepted and stored as an empty list.
    pub image: Option<Vec<String>>,
}

impl Into<models::Product> for ProductForm {
    fn into(self) -> models::Product {
        let mut product = models::Product::default();
        product.id = self.id.unwrap_or_default();
        product.name = self.name;
        product.description = self.description;
        product.defect = self.defect;
        product.kind = self.kind;
        product.waist = self.waist;
        product.length = self.length;
        product.chest = self.chest;
        product.owner = self.owner;
        product.status = self.status;
        product.price = self.price;
        product.sale_price = self.sale_price;
        product.image = self.image.unwrap_or_default();

        product
    }
}
