use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{
    Order as DomainOrder, OrderItem as DomainOrderItem, OrderStatus, PaymentStatus,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub member_id: Option<i32>,
    pub order_number: String,
    pub status: String,
    pub payment_status: String,
    pub shipping_address: Option<String>,
    pub total_cents: i32,
    pub ordered_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::order_items)]
#[diesel(belongs_to(Order))]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub sweet_id: Option<i32>,
    pub name: String,
    pub price_cents: i32,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable order row. Orders are read-modeled in the application; this is
/// exercised by test fixtures standing in for the fulfilment pipeline.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder {
    pub member_id: Option<i32>,
    pub order_number: String,
    pub status: String,
    pub payment_status: String,
    pub shipping_address: Option<String>,
    pub total_cents: i32,
    pub ordered_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::order_items)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub sweet_id: Option<i32>,
    pub name: String,
    pub price_cents: i32,
    pub quantity: i32,
}

impl From<OrderItem> for DomainOrderItem {
    fn from(value: OrderItem) -> Self {
        Self {
            id: value.id,
            order_id: value.order_id,
            sweet_id: value.sweet_id,
            name: value.name,
            price_cents: value.price_cents,
            quantity: value.quantity,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<(Order, Vec<OrderItem>)> for DomainOrder {
    fn from((order, items): (Order, Vec<OrderItem>)) -> Self {
        Self {
            id: order.id,
            member_id: order.member_id,
            order_number: order.order_number,
            status: OrderStatus::parse(&order.status).unwrap_or_default(),
            payment_status: PaymentStatus::parse(&order.payment_status).unwrap_or_default(),
            shipping_address: order.shipping_address,
            total_cents: order.total_cents,
            ordered_at: order.ordered_at,
            items: items.into_iter().map(DomainOrderItem::from).collect(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}
