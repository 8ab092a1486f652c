use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::{
    Category as DomainCategory, NewCategory as DomainNewCategory,
    UpdateCategory as DomainUpdateCategory,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::sweet_categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sweet_categories)]
pub struct NewCategory<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub image: Option<&'a str>,
    pub is_active: bool,
    pub sort_order: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::sweet_categories)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateCategory<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub image: Option<&'a str>,
    pub is_active: bool,
    pub sort_order: i32,
    pub updated_at: NaiveDateTime,
}

impl From<Category> for DomainCategory {
    fn from(value: Category) -> Self {
        Self {
            id: value.id,
            name: value.name,
            slug: value.slug,
            description: value.description,
            image: value.image,
            is_active: value.is_active,
            sort_order: value.sort_order,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCategory> for NewCategory<'a> {
    fn from(value: &'a DomainNewCategory) -> Self {
        Self {
            name: value.name.as_str(),
            slug: value.slug.as_str(),
            description: value.description.as_deref(),
            image: value.image.as_deref(),
            is_active: value.is_active,
            sort_order: value.sort_order,
        }
    }
}

impl<'a> From<&'a DomainUpdateCategory> for UpdateCategory<'a> {
    fn from(value: &'a DomainUpdateCategory) -> Self {
        Self {
            name: value.name.as_str(),
            slug: value.slug.as_str(),
            description: value.description.as_deref(),
            image: value.image.as_deref(),
            is_active: value.is_active,
            sort_order: value.sort_order,
            updated_at: value.updated_at,
        }
    }
}
