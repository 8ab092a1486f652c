use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Fulfilment states for an order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(OrderStatus::Pending),
            "processing" => Some(OrderStatus::Processing),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

/// Payment states for an order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(PaymentStatus::Pending),
            "paid" => Some(PaymentStatus::Paid),
            "refunded" => Some(PaymentStatus::Refunded),
            _ => None,
        }
    }
}

/// A single line of an order, denormalized at purchase time so later catalog
/// edits do not rewrite history.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    /// The catalog row this line came from, if it still exists.
    pub sweet_id: Option<i32>,
    pub name: String,
    pub price_cents: i32,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Domain representation of a placed order. Orders are read-modeled: this
/// codebase displays them but never creates or mutates them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub member_id: Option<i32>,
    /// Human-friendly order reference shown to the member.
    pub order_number: String,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub shipping_address: Option<String>,
    pub total_cents: i32,
    pub ordered_at: NaiveDateTime,
    pub items: Vec<OrderItem>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Query definition used to list orders.
#[derive(Debug, Clone, Default)]
pub struct OrderListQuery {
    /// Restrict the results to orders placed by this member.
    pub member_id: Option<i32>,
    /// Optional status filter.
    pub status: Option<OrderStatus>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl OrderListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results to orders belonging to `member_id`.
    pub fn member(mut self, member_id: i32) -> Self {
        self.member_id = Some(member_id);
        self
    }

    /// Filter the results by order status.
    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
