//! Transaction Models

use serde::{Deserialize, Serialize};

use kasir_app::domain::{
    products::models::ProductId,
    transactions::models::{CartItem, CheckoutRequest, CustomerDetails, LineItem, Transaction},
};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CheckoutItemBody {
    pub product_id: i64,
    pub quantity: i64,
}

/// Checkout request body; a missing or `null` `items` list is an empty cart.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CheckoutBody {
    #[serde(default)]
    pub customer_id: Option<String>,

    #[serde(default)]
    pub customer_name: Option<String>,

    #[serde(default)]
    pub table_number: Option<i32>,

    #[serde(default)]
    pub items: Option<Vec<CheckoutItemBody>>,
}

impl From<CheckoutBody> for CheckoutRequest {
    fn from(body: CheckoutBody) -> Self {
        CheckoutRequest {
            customer: CustomerDetails {
                customer_id: body.customer_id,
                customer_name: body.customer_name,
                table_number: body.table_number,
            },
            items: body
                .items
                .unwrap_or_default()
                .into_iter()
                .map(|item| CartItem {
                    product_id: ProductId::from_i64(item.product_id),
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct LineItemResponse {
    pub id: i64,
    pub transaction_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: u32,
    pub subtotal: u64,
}

impl From<LineItem> for LineItemResponse {
    fn from(item: LineItem) -> Self {
        LineItemResponse {
            id: item.id.into_i64(),
            transaction_id: item.transaction_id.into_i64(),
            product_id: item.product_id.into_i64(),
            product_name: item.product_name,
            quantity: item.quantity,
            subtotal: item.subtotal,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct TransactionResponse {
    pub id: i64,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub table_number: Option<i32>,
    pub total_amount: u64,
    pub created_at: String,
    pub details: Vec<LineItemResponse>,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        TransactionResponse {
            id: transaction.id.into_i64(),
            customer_id: transaction.customer_id,
            customer_name: transaction.customer_name,
            table_number: transaction.table_number,
            total_amount: transaction.total_amount,
            created_at: transaction.created_at.to_string(),
            details: transaction.details.into_iter().map(Into::into).collect(),
        }
    }
}
