use diesel::prelude::*;

use crate::domain::category::{
    Category as DomainCategory, CategoryListQuery, NewCategory as DomainNewCategory,
    UpdateCategory as DomainUpdateCategory,
};
use crate::models::category::{
    Category as DbCategory, NewCategory as DbNewCategory, UpdateCategory as DbUpdateCategory,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository};

impl CategoryReader for DieselRepository {
    fn get_category_by_slug(&self, slug: &str) -> RepositoryResult<Option<DomainCategory>> {
        use crate::schema::sweet_categories;

        let mut conn = self.conn()?;

        let category = sweet_categories::table
            .filter(sweet_categories::slug.eq(slug))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(category.map(DomainCategory::from))
    }

    fn list_categories(
        &self,
        query: CategoryListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainCategory>)> {
        use crate::schema::sweet_categories;

        let mut conn = self.conn()?;

        let mut count_query = sweet_categories::table.into_boxed::<diesel::sqlite::Sqlite>();

        if query.active_only {
            count_query = count_query.filter(sweet_categories::is_active.eq(true));
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items_query = sweet_categories::table.into_boxed::<diesel::sqlite::Sqlite>();

        if query.active_only {
            items_query = items_query.filter(sweet_categories::is_active.eq(true));
        }

        items_query = items_query.order((
            sweet_categories::sort_order.asc(),
            sweet_categories::name.asc(),
        ));

        if let Some(pagination) = &query.pagination {
            let page = pagination.page.max(1);
            let per_page = pagination.per_page as i64;
            let offset = ((page - 1) * pagination.per_page) as i64;
            items_query = items_query.offset(offset).limit(per_page);
        }

        let categories = items_query.load::<DbCategory>(&mut conn)?;
        let categories = categories.into_iter().map(DomainCategory::from).collect();

        Ok((total, categories))
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(
        &self,
        new_category: &DomainNewCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::sweet_categories;

        let mut conn = self.conn()?;

        let insertable = DbNewCategory::from(new_category);

        let created = diesel::insert_into(sweet_categories::table)
            .values(&insertable)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.into())
    }

    fn update_category(
        &self,
        category_id: i32,
        updates: &DomainUpdateCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::sweet_categories;

        let mut conn = self.conn()?;

        let db_updates = DbUpdateCategory::from(updates);

        let updated =
            diesel::update(sweet_categories::table.filter(sweet_categories::id.eq(category_id)))
                .set(&db_updates)
                .get_result::<DbCategory>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_category(&self, category_id: i32) -> RepositoryResult<()> {
        use crate::schema::sweet_categories;

        let mut conn = self.conn()?;

        let deleted =
            diesel::delete(sweet_categories::table.filter(sweet_categories::id.eq(category_id)))
                .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
