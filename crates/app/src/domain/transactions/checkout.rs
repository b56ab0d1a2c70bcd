//! Checkout engine.
//!
//! Turns a cart into a persisted [`Transaction`]. Items are validated in request
//! order, each one checked for quantity, then existence, then stock, and the first
//! failure aborts the whole checkout. Stock is decremented as items are accepted so
//! later items for the same product see the reduced level.

use rustc_hash::FxHashMap;
use tracing::{Span, debug};

use crate::domain::{
    products::models::ProductId,
    transactions::{
        errors::CheckoutError,
        models::{CheckoutRequest, NewLineItem, Transaction},
        store::CheckoutStore,
    },
};

/// Runs a checkout against `store`.
///
/// Nothing is committed here; the caller owns the unit of work behind `store` and
/// must discard it when this returns an error.
///
/// # Errors
///
/// Returns a business error for the first invalid item, or an internal error when
/// storage fails or the total overflows.
#[tracing::instrument(
    name = "transactions.checkout",
    skip_all,
    fields(
        item_count = request.items.len(),
        transaction_id = tracing::field::Empty,
        total_amount = tracing::field::Empty
    ),
    err
)]
pub async fn checkout<S>(store: &mut S, request: CheckoutRequest) -> Result<Transaction, CheckoutError>
where
    S: CheckoutStore,
{
    let CheckoutRequest { customer, items } = request;

    if items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    // Quantities already taken from each product earlier in this request.
    let mut reserved: FxHashMap<ProductId, u64> = FxHashMap::default();
    let mut line_items = Vec::with_capacity(items.len());
    let mut total_amount: u64 = 0;

    for item in items {
        let quantity = match u64::try_from(item.quantity) {
            Ok(quantity) if quantity >= 1 => quantity,
            _ => {
                return Err(CheckoutError::InvalidQuantity {
                    product_id: item.product_id,
                    quantity: item.quantity,
                });
            }
        };

        let product = store
            .get_product_for_update(item.product_id)
            .await?
            .ok_or(CheckoutError::ProductNotFound(item.product_id))?;

        let reserved_before = reserved.get(&product.id).copied().unwrap_or_default();
        let available = u64::from(product.stock) + reserved_before;

        let requested = reserved_before
            .checked_add(quantity)
            .ok_or(CheckoutError::AmountOverflow)?;

        if requested > available {
            return Err(CheckoutError::InsufficientStock {
                product_id: product.id,
                product_name: product.name,
                requested,
                available,
            });
        }

        let subtotal = product
            .price
            .checked_mul(quantity)
            .ok_or(CheckoutError::AmountOverflow)?;

        total_amount = total_amount
            .checked_add(subtotal)
            .ok_or(CheckoutError::AmountOverflow)?;

        // Bounded by the product's stock, which is itself a u32.
        let quantity = u32::try_from(quantity).map_err(|_overflow| CheckoutError::AmountOverflow)?;

        if !store.decrement_stock(product.id, quantity).await? {
            return Err(CheckoutError::ProductNotFound(product.id));
        }

        reserved.insert(product.id, requested);

        debug!(product_id = %product.id, quantity, subtotal, "accepted line item");

        line_items.push(NewLineItem {
            product_id: product.id,
            product_name: product.name,
            quantity,
            subtotal,
        });
    }

    let (id, created_at) = store.insert_transaction(total_amount, &customer).await?;

    let details = store.insert_line_items(id, &line_items).await?;

    let span = Span::current();

    span.record("transaction_id", tracing::field::display(id));
    span.record("total_amount", total_amount);

    Ok(Transaction {
        id,
        customer_id: customer.customer_id,
        customer_name: customer.customer_name,
        table_number: customer.table_number,
        total_amount,
        created_at,
        details,
    })
}
