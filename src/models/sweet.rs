use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::sweet::{
    NewSweet as DomainNewSweet, Sweet as DomainSweet, UpdateSweet as DomainUpdateSweet,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::sweets)]
pub struct Sweet {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price_cents: i32,
    pub image: Option<String>,
    pub category: Option<String>,
    pub stock_level: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sweets)]
pub struct NewSweet<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub price_cents: i32,
    pub image: Option<&'a str>,
    pub category: Option<&'a str>,
    pub stock_level: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::sweets)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateSweet<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub price_cents: i32,
    pub image: Option<&'a str>,
    pub category: Option<&'a str>,
    pub stock_level: i32,
    pub updated_at: NaiveDateTime,
}

impl From<Sweet> for DomainSweet {
    fn from(value: Sweet) -> Self {
        Self {
            id: value.id,
            name: value.name,
            slug: value.slug,
            description: value.description,
            price_cents: value.price_cents,
            image: value.image,
            category: value.category,
            stock_level: value.stock_level,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewSweet> for NewSweet<'a> {
    fn from(value: &'a DomainNewSweet) -> Self {
        Self {
            name: value.name.as_str(),
            slug: value.slug.as_str(),
            description: value.description.as_deref(),
            price_cents: value.price_cents,
            image: value.image.as_deref(),
            category: value.category.as_deref(),
            stock_level: value.stock_level,
        }
    }
}

impl<'a> From<&'a DomainUpdateSweet> for UpdateSweet<'a> {
    fn from(value: &'a DomainUpdateSweet) -> Self {
        Self {
            name: value.name.as_str(),
            slug: value.slug.as_str(),
            description: value.description.as_deref(),
            price_cents: value.price_cents,
            image: value.image.as_deref(),
            category: value.category.as_deref(),
            stock_level: value.stock_level,
            updated_at: value.updated_at,
        }
    }
}
