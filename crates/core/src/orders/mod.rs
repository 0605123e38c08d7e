//! Orders
//!
//! An order is created once from a cart snapshot and afterwards only its
//! status (and the fulfilment details that come with it) may change, through
//! the lifecycle in [`OrderStatus`].

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    cart::{Cart, CartLine},
    catalog::{Color, ProductUuid, Size},
    customers::{AddressUuid, UserUuid},
    uuids::TypedUuid,
    values::{UnknownValue, WireValue},
};

mod errors;
mod number;
mod status;
mod totals;
mod tracking;

pub use errors::OrderError;
pub use number::OrderNumber;
pub use status::OrderStatus;
pub use totals::{ChargesPolicy, InvalidTaxRate, OrderTotals, parse_tax_rate};
pub use tracking::{StepProgress, StepState, TrackingStep, tracking_steps};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Cash on delivery
    Cod,
    /// Credit card
    CreditCard,
    /// UPI transfer
    Upi,
    /// PayPal
    Paypal,
}

impl WireValue for PaymentMethod {
    const KIND: &'static str = "payment method";

    const ALL: &'static [Self] = &[Self::Cod, Self::CreditCard, Self::Upi, Self::Paypal];

    fn as_str(self) -> &'static str {
        match self {
            Self::Cod => "COD",
            Self::CreditCard => "CREDIT_CARD",
            Self::Upi => "UPI",
            Self::Paypal => "PAYPAL",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_wire(s)
    }
}

/// Payment state, tracked independently of the order status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Not yet paid
    #[default]
    Pending,
    /// Paid in full
    Paid,
    /// Payment attempt failed
    Failed,
    /// Payment returned to the customer
    Refunded,
}

impl WireValue for PaymentStatus {
    const KIND: &'static str = "payment status";

    const ALL: &'static [Self] = &[Self::Pending, Self::Paid, Self::Failed, Self::Refunded];

    fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::Failed => "FAILED",
            Self::Refunded => "REFUNDED",
        }
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_wire(s)
    }
}

/// Snapshot of a cart line at purchase time. Later catalog price changes do
/// not affect it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product: ProductUuid,
    pub name: String,
    pub image: Option<String>,
    pub quantity: u32,
    pub size: Size,
    pub color: Color,
    pub price: Decimal,
}

impl OrderLine {
    /// Unit price times quantity.
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            product: line.product,
            name: line.name.clone(),
            image: line.image.clone(),
            quantity: line.quantity,
            size: line.size,
            color: line.color,
            price: line.price,
        }
    }
}

/// Everything needed to create an order except its identity and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub user: UserUuid,
    pub lines: Vec<OrderLine>,
    pub address: AddressUuid,
    pub payment_method: PaymentMethod,
    pub totals: OrderTotals,
}

impl OrderDraft {
    /// Snapshot `cart` into a draft, pricing it with `charges`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NoLines`] if the cart is empty.
    pub fn from_cart(
        user: UserUuid,
        cart: &Cart,
        address: AddressUuid,
        payment_method: PaymentMethod,
        charges: &ChargesPolicy,
    ) -> Result<Self, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::NoLines);
        }

        let lines: Vec<OrderLine> = cart.lines().iter().map(OrderLine::from).collect();
        let subtotal = lines.iter().map(OrderLine::subtotal).sum();

        Ok(Self {
            user,
            lines,
            address,
            payment_method,
            totals: charges.totals_for(subtotal, Decimal::ZERO),
        })
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub uuid: OrderUuid,
    pub user: UserUuid,
    pub number: OrderNumber,
    pub lines: Vec<OrderLine>,
    pub address: AddressUuid,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub totals: OrderTotals,
    pub status: OrderStatus,
    pub tracking_number: Option<String>,
    pub estimated_delivery: Option<Date>,
    pub created_at: Timestamp,
}

impl Order {
    /// Create a pending, unpaid order from a draft.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NoLines`] if the draft has no lines, or
    /// [`OrderError::TotalsMismatch`] if its totals are inconsistent.
    pub fn place(draft: OrderDraft, now: Timestamp) -> Result<Self, OrderError> {
        if draft.lines.is_empty() {
            return Err(OrderError::NoLines);
        }

        let totals = OrderTotals::checked(
            draft.totals.subtotal(),
            draft.totals.tax(),
            draft.totals.shipping(),
            draft.totals.discount(),
            draft.totals.total(),
        )?;

        Ok(Self {
            uuid: OrderUuid::new(),
            user: draft.user,
            number: OrderNumber::generate(now),
            lines: draft.lines,
            address: draft.address,
            payment_method: draft.payment_method,
            payment_status: PaymentStatus::Pending,
            totals,
            status: OrderStatus::Pending,
            tracking_number: None,
            estimated_delivery: None,
            created_at: now,
        })
    }

    /// Cancel the order. The status is untouched on error.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotCancellable`] unless the order is pending or
    /// processing.
    pub fn cancel(&mut self) -> Result<(), OrderError> {
        self.status = self.status.cancel()?;

        Ok(())
    }

    /// Administrative status change. The status is untouched on error.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::InvalidTransition`] for moves the lifecycle does
    /// not allow.
    pub fn advance(&mut self, next: OrderStatus) -> Result<(), OrderError> {
        self.status = self.status.advance(next)?;

        Ok(())
    }

    /// Tracking steps for the current status.
    pub fn tracking(&self) -> [StepProgress; 4] {
        tracking_steps(self.status)
    }

    /// Total number of units ordered.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}
