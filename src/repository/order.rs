use std::collections::HashMap;

use diesel::prelude::*;

use crate::domain::order::{Order as DomainOrder, OrderListQuery};
use crate::models::order::{Order as DbOrder, OrderItem as DbOrderItem};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, OrderReader};

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<DomainOrder>> {
        use crate::schema::{order_items, orders};

        let mut conn = self.conn()?;

        let order = orders::table
            .filter(orders::id.eq(id))
            .first::<DbOrder>(&mut conn)
            .optional()?;

        let Some(order) = order else {
            return Ok(None);
        };

        let items = order_items::table
            .filter(order_items::order_id.eq(order.id))
            .order(order_items::id.asc())
            .load::<DbOrderItem>(&mut conn)?;

        Ok(Some(DomainOrder::from((order, items))))
    }

    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<DomainOrder>)> {
        use crate::schema::{order_items, orders};

        let mut conn = self.conn()?;

        let OrderListQuery {
            member_id,
            status,
            pagination,
        } = query;

        let status_filter = status.map(|value| value.as_str().to_string());

        let mut count_query = orders::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(member) = member_id {
            count_query = count_query.filter(orders::member_id.eq(Some(member)));
        }

        if let Some(ref status_value) = status_filter {
            count_query = count_query.filter(orders::status.eq(status_value.clone()));
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items_query = orders::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(member) = member_id {
            items_query = items_query.filter(orders::member_id.eq(Some(member)));
        }

        if let Some(ref status_value) = status_filter {
            items_query = items_query.filter(orders::status.eq(status_value.clone()));
        }

        items_query = items_query.order(orders::ordered_at.desc());

        if let Some(pagination) = &pagination {
            let page = pagination.page.max(1);
            let per_page = pagination.per_page as i64;
            let offset = ((page - 1) * pagination.per_page) as i64;
            items_query = items_query.offset(offset).limit(per_page);
        }

        let db_orders = items_query.load::<DbOrder>(&mut conn)?;

        if db_orders.is_empty() {
            return Ok((total, Vec::new()));
        }

        let order_ids: Vec<i32> = db_orders.iter().map(|order| order.id).collect();

        let lines = order_items::table
            .filter(order_items::order_id.eq_any(&order_ids))
            .order(order_items::id.asc())
            .load::<DbOrderItem>(&mut conn)?;

        let mut lines_by_order: HashMap<i32, Vec<DbOrderItem>> = HashMap::new();
        for line in lines {
            lines_by_order.entry(line.order_id).or_default().push(line);
        }

        let orders = db_orders
            .into_iter()
            .map(|order| {
                let items = lines_by_order.remove(&order.id).unwrap_or_default();
                DomainOrder::from((order, items))
            })
            .collect();

        Ok((total, orders))
    }
}
