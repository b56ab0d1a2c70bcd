//! Transaction Models

use jiff::Timestamp;

use crate::{domain::products::models::ProductId, ids::TypedId};

/// Transaction Id
pub type TransactionId = TypedId<Transaction>;

/// Line Item Id
pub type LineItemId = TypedId<LineItem>;

/// A single requested product in a checkout.
///
/// `quantity` is kept signed so that non-positive requests reach validation
/// instead of failing to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Optional metadata recorded on the transaction header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerDetails {
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub table_number: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub customer: CustomerDetails,
    pub items: Vec<CartItem>,
}

/// A priced line awaiting persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLineItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub subtotal: u64,
}

/// Line Item Model
///
/// `product_name` and `subtotal` are snapshots taken at sale time and never
/// follow later changes to the product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub id: LineItemId,
    pub transaction_id: TransactionId,
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub subtotal: u64,
}

/// Transaction Model
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub table_number: Option<i32>,
    /// Sum of every line item subtotal.
    pub total_amount: u64,
    pub created_at: Timestamp,
    pub details: Vec<LineItem>,
}
