use mockall::mock;

use super::{
    CategoryReader, CategoryWriter, MemberReader, MemberWriter, OrderReader, SweetReader,
    SweetWriter,
};
use crate::domain::{
    category::{Category, CategoryListQuery, NewCategory, UpdateCategory},
    member::{Member, NewMember},
    order::{Order, OrderListQuery},
    sweet::{NewSweet, Sweet, SweetListQuery, UpdateSweet},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub SweetReader {}

    impl SweetReader for SweetReader {
        fn get_sweet_by_id(&self, id: i32) -> RepositoryResult<Option<Sweet>>;
        fn get_sweet_by_slug(&self, slug: &str) -> RepositoryResult<Option<Sweet>>;
        fn list_sweets(&self, query: SweetListQuery) -> RepositoryResult<(usize, Vec<Sweet>)>;
    }
}

mock! {
    pub SweetWriter {}

    impl SweetWriter for SweetWriter {
        fn create_sweet(&self, new_sweet: &NewSweet) -> RepositoryResult<Sweet>;
        fn update_sweet(&self, sweet_id: i32, updates: &UpdateSweet) -> RepositoryResult<Sweet>;
        fn set_sweet_stock(&self, sweet_id: i32, stock_level: i32) -> RepositoryResult<Sweet>;
        fn delete_sweet(&self, sweet_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub CategoryReader {}

    impl CategoryReader for CategoryReader {
        fn get_category_by_slug(&self, slug: &str) -> RepositoryResult<Option<Category>>;
        fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<(usize, Vec<Category>)>;
    }
}

mock! {
    pub CategoryWriter {}

    impl CategoryWriter for CategoryWriter {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
        fn update_category(&self, category_id: i32, updates: &UpdateCategory) -> RepositoryResult<Category>;
        fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub MemberReader {}

    impl MemberReader for MemberReader {
        fn get_member_by_id(&self, id: i32) -> RepositoryResult<Option<Member>>;
        fn get_member_by_email(&self, email: &str) -> RepositoryResult<Option<Member>>;
    }
}

mock! {
    pub MemberWriter {}

    impl MemberWriter for MemberWriter {
        fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member>;
    }
}

mock! {
    pub OrderReader {}

    impl OrderReader for OrderReader {
        fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
        fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
    }
}
