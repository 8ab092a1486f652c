use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, CategoryListQuery, NewCategory, UpdateCategory};
use crate::domain::member::{Member, NewMember};
use crate::domain::order::{Order, OrderListQuery};
use crate::domain::sweet::{NewSweet, Sweet, SweetListQuery, UpdateSweet};

pub mod errors;

pub mod category;
pub mod member;
pub mod order;
pub mod sweet;

#[cfg(test)]
pub mod mock;

use errors::RepositoryResult;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over catalog sweets.
pub trait SweetReader {
    fn get_sweet_by_id(&self, id: i32) -> RepositoryResult<Option<Sweet>>;
    fn get_sweet_by_slug(&self, slug: &str) -> RepositoryResult<Option<Sweet>>;
    fn list_sweets(&self, query: SweetListQuery) -> RepositoryResult<(usize, Vec<Sweet>)>;
}

/// Write operations over catalog sweets.
pub trait SweetWriter {
    fn create_sweet(&self, new_sweet: &NewSweet) -> RepositoryResult<Sweet>;
    fn update_sweet(&self, sweet_id: i32, updates: &UpdateSweet) -> RepositoryResult<Sweet>;
    /// Partial update touching only the stock level.
    fn set_sweet_stock(&self, sweet_id: i32, stock_level: i32) -> RepositoryResult<Sweet>;
    fn delete_sweet(&self, sweet_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over storefront categories.
pub trait CategoryReader {
    fn get_category_by_slug(&self, slug: &str) -> RepositoryResult<Option<Category>>;
    fn list_categories(&self, query: CategoryListQuery)
    -> RepositoryResult<(usize, Vec<Category>)>;
}

/// Write operations over storefront categories.
pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category>;
    fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over member records.
pub trait MemberReader {
    fn get_member_by_id(&self, id: i32) -> RepositoryResult<Option<Member>>;
    fn get_member_by_email(&self, email: &str) -> RepositoryResult<Option<Member>>;
}

/// Write operations over member records.
pub trait MemberWriter {
    fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member>;
}

/// Read-only operations over placed orders. There is deliberately no writer:
/// orders enter the store through the fulfilment pipeline, not this app.
pub trait OrderReader {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
}
