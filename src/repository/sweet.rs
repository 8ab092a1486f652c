use diesel::prelude::*;

use crate::domain::sweet::{
    NewSweet as DomainNewSweet, Sweet as DomainSweet, SweetListQuery,
    UpdateSweet as DomainUpdateSweet,
};
use crate::models::sweet::{NewSweet as DbNewSweet, Sweet as DbSweet, UpdateSweet as DbUpdateSweet};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, SweetReader, SweetWriter};

impl SweetReader for DieselRepository {
    fn get_sweet_by_id(&self, id: i32) -> RepositoryResult<Option<DomainSweet>> {
        use crate::schema::sweets;

        let mut conn = self.conn()?;

        let sweet = sweets::table
            .filter(sweets::id.eq(id))
            .first::<DbSweet>(&mut conn)
            .optional()?;

        Ok(sweet.map(DomainSweet::from))
    }

    fn get_sweet_by_slug(&self, slug: &str) -> RepositoryResult<Option<DomainSweet>> {
        use crate::schema::sweets;

        let mut conn = self.conn()?;

        let sweet = sweets::table
            .filter(sweets::slug.eq(slug))
            .first::<DbSweet>(&mut conn)
            .optional()?;

        Ok(sweet.map(DomainSweet::from))
    }

    fn list_sweets(&self, query: SweetListQuery) -> RepositoryResult<(usize, Vec<DomainSweet>)> {
        use crate::schema::sweets;

        let mut conn = self.conn()?;

        let mut count_query = sweets::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(term) = query.search.as_ref() {
            // SQLite LIKE is case-insensitive for ASCII.
            let pattern = format!("%{}%", term);
            count_query = count_query.filter(sweets::name.like(pattern));
        }

        if let Some(category) = query.category.as_ref() {
            count_query = count_query.filter(sweets::category.eq(Some(category.clone())));
        }

        if query.in_stock_only {
            count_query = count_query.filter(sweets::stock_level.gt(0));
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items_query = sweets::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(term) = query.search.as_ref() {
            let pattern = format!("%{}%", term);
            items_query = items_query.filter(sweets::name.like(pattern));
        }

        if let Some(category) = query.category.as_ref() {
            items_query = items_query.filter(sweets::category.eq(Some(category.clone())));
        }

        if query.in_stock_only {
            items_query = items_query.filter(sweets::stock_level.gt(0));
        }

        items_query = items_query.order(sweets::name.asc());

        if let Some(pagination) = &query.pagination {
            let page = pagination.page.max(1);
            let per_page = pagination.per_page as i64;
            let offset = ((page - 1) * pagination.per_page) as i64;
            items_query = items_query.offset(offset).limit(per_page);
        }

        let sweets = items_query.load::<DbSweet>(&mut conn)?;
        let sweets = sweets.into_iter().map(DomainSweet::from).collect();

        Ok((total, sweets))
    }
}

impl SweetWriter for DieselRepository {
    fn create_sweet(&self, new_sweet: &DomainNewSweet) -> RepositoryResult<DomainSweet> {
        use crate::schema::sweets;

        let mut conn = self.conn()?;

        let insertable = DbNewSweet::from(new_sweet);

        let created = diesel::insert_into(sweets::table)
            .values(&insertable)
            .get_result::<DbSweet>(&mut conn)?;

        Ok(created.into())
    }

    fn update_sweet(
        &self,
        sweet_id: i32,
        updates: &DomainUpdateSweet,
    ) -> RepositoryResult<DomainSweet> {
        use crate::schema::sweets;

        let mut conn = self.conn()?;

        let db_updates = DbUpdateSweet::from(updates);

        let updated = diesel::update(sweets::table.filter(sweets::id.eq(sweet_id)))
            .set(&db_updates)
            .get_result::<DbSweet>(&mut conn)?;

        Ok(updated.into())
    }

    fn set_sweet_stock(&self, sweet_id: i32, stock_level: i32) -> RepositoryResult<DomainSweet> {
        use crate::schema::sweets;

        let mut conn = self.conn()?;

        let now = chrono::Utc::now().naive_utc();

        let updated = diesel::update(sweets::table.filter(sweets::id.eq(sweet_id)))
            .set((
                sweets::stock_level.eq(stock_level),
                sweets::updated_at.eq(now),
            ))
            .get_result::<DbSweet>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_sweet(&self, sweet_id: i32) -> RepositoryResult<()> {
        use crate::schema::sweets;

        let mut conn = self.conn()?;

        let deleted =
            diesel::delete(sweets::table.filter(sweets::id.eq(sweet_id))).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
