use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::member::{Member as DomainMember, NewMember as DomainNewMember};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::members)]
pub struct Member {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
    pub is_admin: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::members)]
pub struct NewMember<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone: Option<&'a str>,
    pub profile_image: Option<&'a str>,
    pub is_admin: bool,
}

impl From<Member> for DomainMember {
    fn from(value: Member) -> Self {
        Self {
            id: value.id,
            email: value.email,
            password_hash: value.password_hash,
            first_name: value.first_name,
            last_name: value.last_name,
            phone: value.phone,
            profile_image: value.profile_image,
            is_admin: value.is_admin,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewMember> for NewMember<'a> {
    fn from(value: &'a DomainNewMember) -> Self {
        Self {
            email: value.email.as_str(),
            password_hash: value.password_hash.as_str(),
            first_name: value.first_name.as_str(),
            last_name: value.last_name.as_str(),
            phone: value.phone.as_deref(),
            profile_image: value.profile_image.as_deref(),
            is_admin: value.is_admin,
        }
    }
}
