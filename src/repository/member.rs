use diesel::prelude::*;

use crate::domain::member::{Member as DomainMember, NewMember as DomainNewMember};
use crate::models::member::{Member as DbMember, NewMember as DbNewMember};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, MemberReader, MemberWriter};

impl MemberReader for DieselRepository {
    fn get_member_by_id(&self, id: i32) -> RepositoryResult<Option<DomainMember>> {
        use crate::schema::members;

        let mut conn = self.conn()?;

        let member = members::table
            .filter(members::id.eq(id))
            .first::<DbMember>(&mut conn)
            .optional()?;

        Ok(member.map(DomainMember::from))
    }

    fn get_member_by_email(&self, email: &str) -> RepositoryResult<Option<DomainMember>> {
        use crate::schema::members;

        let mut conn = self.conn()?;

        // Emails are stored lowercased; match against the same form.
        let needle = email.to_lowercase();

        let member = members::table
            .filter(members::email.eq(needle))
            .first::<DbMember>(&mut conn)
            .optional()?;

        Ok(member.map(DomainMember::from))
    }
}

impl MemberWriter for DieselRepository {
    fn create_member(&self, new_member: &DomainNewMember) -> RepositoryResult<DomainMember> {
        use crate::schema::members;

        let mut conn = self.conn()?;

        let insertable = DbNewMember::from(new_member);

        let created = diesel::insert_into(members::table)
            .values(&insertable)
            .get_result::<DbMember>(&mut conn)?;

        Ok(created.into())
    }
}
