//! Checkout flow state machine.

use crate::cart::Ledger;
use crate::checkout::{ContactDetails, OrderConfirmation, ShippingMethod};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use tracing::info;
use vitrine_kv::BlobStore;

/// Steps in the checkout flow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStep {
    /// Contact information and shipping address.
    Information,
    /// Shipping method selection.
    Shipping,
    /// Payment details.
    Payment,
    /// Order review before submission.
    Review,
    /// Order placed; absorbing terminal state.
    Completed,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Information => "information",
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Review => "review",
            CheckoutStep::Completed => "completed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Information => "Information",
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Review => "Review",
            CheckoutStep::Completed => "Completed",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Information => 1,
            CheckoutStep::Shipping => 2,
            CheckoutStep::Payment => 3,
            CheckoutStep::Review => 4,
            CheckoutStep::Completed => 5,
        }
    }
}

/// A checkout session over the cart ledger.
///
/// Sessions are created fresh each time checkout begins and discarded on
/// completion or abandonment; they are never persisted. Out-of-range
/// transitions are no-ops, never errors.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkout {
    step: CheckoutStep,
    contact: ContactDetails,
    shipping_method: ShippingMethod,
    confirmation: Option<OrderConfirmation>,
}

impl Checkout {
    /// Begin a checkout session against `ledger`.
    ///
    /// Refuses an empty cart; a completed session later holding an empty
    /// (cleared) cart is the expected terminal state and is not re-guarded.
    pub fn begin<S: BlobStore>(ledger: &Ledger<S>) -> Result<Self, CommerceError> {
        if ledger.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        Ok(Self {
            step: CheckoutStep::Information,
            contact: ContactDetails::default(),
            shipping_method: ShippingMethod::default(),
            confirmation: None,
        })
    }

    /// The current step.
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// The buyer's contact details so far.
    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    /// Replace the buyer's contact details.
    pub fn set_contact(&mut self, contact: ContactDetails) {
        self.contact = contact;
    }

    /// The selected shipping method.
    pub fn shipping_method(&self) -> ShippingMethod {
        self.shipping_method
    }

    /// Select a shipping method.
    pub fn set_shipping_method(&mut self, method: ShippingMethod) {
        self.shipping_method = method;
    }

    /// The placed order's summary, once the session is terminal.
    pub fn confirmation(&self) -> Option<&OrderConfirmation> {
        self.confirmation.as_ref()
    }

    /// Check if the order has been placed.
    pub fn is_placed(&self) -> bool {
        self.step == CheckoutStep::Completed
    }

    /// The empty-cart guard, re-evaluated on entry: a session with nothing
    /// to check out must bail to the empty-state view, except once the
    /// order is placed and the cleared cart is expected.
    pub fn blocked_on_empty_cart<S: BlobStore>(&self, ledger: &Ledger<S>) -> bool {
        ledger.is_empty() && !self.is_placed()
    }

    /// Advance one step; from [`CheckoutStep::Review`] this places the
    /// order.
    ///
    /// Placement recomputes the final total as subtotal plus the selected
    /// method's rate plus tax (independent of the ledger's standard-rate
    /// estimate), stores the confirmation, and clears the ledger. Advancing
    /// a completed session is a no-op. Returns the resulting step.
    pub fn advance<S: BlobStore>(&mut self, ledger: &mut Ledger<S>) -> CheckoutStep {
        self.step = match self.step {
            CheckoutStep::Information => CheckoutStep::Shipping,
            CheckoutStep::Shipping => CheckoutStep::Payment,
            CheckoutStep::Payment => CheckoutStep::Review,
            CheckoutStep::Review => {
                self.place_order(ledger);
                CheckoutStep::Completed
            }
            CheckoutStep::Completed => CheckoutStep::Completed,
        };
        self.step
    }

    /// Go back one step; a no-op from [`CheckoutStep::Information`] and
    /// from [`CheckoutStep::Completed`]. Returns the resulting step.
    pub fn retreat(&mut self) -> CheckoutStep {
        self.step = match self.step {
            CheckoutStep::Information => CheckoutStep::Information,
            CheckoutStep::Shipping => CheckoutStep::Information,
            CheckoutStep::Payment => CheckoutStep::Shipping,
            CheckoutStep::Review => CheckoutStep::Payment,
            CheckoutStep::Completed => CheckoutStep::Completed,
        };
        self.step
    }

    fn place_order<S: BlobStore>(&mut self, ledger: &mut Ledger<S>) {
        let totals = ledger.totals();
        let shipping = self.shipping_method.rate(totals.subtotal, ledger.config());
        let confirmation = OrderConfirmation {
            order_number: OrderConfirmation::generate_order_number(),
            item_count: ledger.item_count(),
            subtotal: totals.subtotal,
            shipping,
            tax: totals.tax,
            total: totals.subtotal + shipping + totals.tax,
            shipping_method: self.shipping_method,
        };
        info!(
            order_number = %confirmation.order_number,
            total = %confirmation.total,
            "order placed"
        );
        ledger.clear();
        self.confirmation = Some(confirmation);
    }
}
