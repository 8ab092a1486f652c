use serde::Serialize;

use crate::auth::{self, AuthenticatedMember};
use crate::domain::member::{Member, NewMember};
use crate::domain::order::{Order, OrderListQuery};
use crate::forms::members::{SignInForm, SignUpForm};
use crate::repository::{MemberReader, MemberWriter, OrderReader};
use crate::services::{ServiceError, ServiceResult};

/// Verify the sign-in form against the stored member record. Unknown emails
/// and wrong passwords are indistinguishable to the caller.
pub fn sign_in<R>(repo: &R, form: SignInForm) -> ServiceResult<Member>
where
    R: MemberReader + ?Sized,
{
    let credentials = form
        .into_credentials()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let member = repo
        .get_member_by_email(&credentials.email)?
        .ok_or(ServiceError::Unauthorized)?;

    match auth::verify_password(&credentials.password, &member.password_hash) {
        Ok(true) => Ok(member),
        Ok(false) => Err(ServiceError::Unauthorized),
        Err(err) => {
            log::error!("Password verification failed for {}: {err}", member.email);
            Err(ServiceError::Unauthorized)
        }
    }
}

/// Register a new member. New members are never admins; the flag is owned by
/// the data store.
pub fn sign_up<R>(repo: &R, form: SignUpForm) -> ServiceResult<Member>
where
    R: MemberReader + MemberWriter + ?Sized,
{
    let payload = form
        .into_payload()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo.get_member_by_email(&payload.email)?.is_some() {
        return Err(ServiceError::Conflict);
    }

    let password_hash = auth::hash_password(&payload.password).map_err(|err| {
        log::error!("Failed to hash a new member password: {err}");
        ServiceError::Form("Could not process that password.".to_string())
    })?;

    let mut new_member = NewMember::new(
        payload.email,
        password_hash,
        payload.first_name,
        payload.last_name,
    );
    if let Some(phone) = payload.phone {
        new_member = new_member.with_phone(phone);
    }

    repo.create_member(&new_member).map_err(ServiceError::from)
}

/// Read-only identity fields rendered on the profile page.
#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
    pub is_admin: bool,
    pub member_since: String,
}

impl From<Member> for ProfileView {
    fn from(member: Member) -> Self {
        Self {
            full_name: member.full_name(),
            member_since: member.created_at.format("%B %Y").to_string(),
            first_name: member.first_name,
            last_name: member.last_name,
            email: member.email,
            phone: member.phone,
            profile_image: member.profile_image,
            is_admin: member.is_admin,
        }
    }
}

/// One order in the profile page history.
#[derive(Debug, Serialize)]
pub struct OrderView {
    pub order_number: String,
    pub status: String,
    pub payment_status: String,
    pub ordered_on: String,
    pub total_formatted: String,
    pub items: Vec<OrderItemView>,
}

#[derive(Debug, Serialize)]
pub struct OrderItemView {
    pub name: String,
    pub quantity: i32,
    pub price_formatted: String,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        Self {
            order_number: order.order_number,
            status: order.status.as_str().to_string(),
            payment_status: order.payment_status.as_str().to_string(),
            ordered_on: order.ordered_at.format("%Y-%m-%d").to_string(),
            total_formatted: format!("{:.2}", order.total_cents as f64 / 100.0),
            items: order
                .items
                .into_iter()
                .map(|item| OrderItemView {
                    name: item.name,
                    quantity: item.quantity,
                    price_formatted: format!("{:.2}", item.price_cents as f64 / 100.0),
                })
                .collect(),
        }
    }
}

/// Data required to render the profile page.
pub struct ProfileData {
    pub member: ProfileView,
    pub orders: Vec<OrderView>,
}

/// Loads the signed-in member's profile and order history.
pub fn load_profile<R>(repo: &R, claims: &AuthenticatedMember) -> ServiceResult<ProfileData>
where
    R: MemberReader + OrderReader + ?Sized,
{
    let member = repo
        .get_member_by_id(claims.sub)?
        .ok_or(ServiceError::NotFound)?;

    let (_, orders) = repo.list_orders(OrderListQuery::new().member(claims.sub))?;

    Ok(ProfileData {
        member: ProfileView::from(member),
        orders: orders.into_iter().map(OrderView::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::repository::errors::RepositoryResult;
    use crate::repository::mock::{MockMemberReader, MockMemberWriter, MockOrderReader};
    use crate::repository::{MemberReader, MemberWriter};

    fn datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn sample_member(password: &str) -> Member {
        Member {
            id: 1,
            email: "rosa@example.com".to_string(),
            password_hash: auth::hash_password(password).expect("hashing should succeed"),
            first_name: "Rosa".to_string(),
            last_name: "Marchetti".to_string(),
            phone: None,
            profile_image: None,
            is_admin: false,
            created_at: datetime(),
            updated_at: datetime(),
        }
    }

    fn sign_in_form(email: &str, password: &str) -> SignInForm {
        SignInForm {
            email: email.to_string(),
            password: password.to_string(),
            next: None,
        }
    }

    struct FakeRepo {
        members: MockMemberReader,
        member_writer: MockMemberWriter,
    }

    impl FakeRepo {
        fn new() -> Self {
            Self {
                members: MockMemberReader::new(),
                member_writer: MockMemberWriter::new(),
            }
        }
    }

    impl MemberReader for FakeRepo {
        fn get_member_by_id(&self, id: i32) -> RepositoryResult<Option<Member>> {
            self.members.get_member_by_id(id)
        }

        fn get_member_by_email(&self, email: &str) -> RepositoryResult<Option<Member>> {
            self.members.get_member_by_email(email)
        }
    }

    impl MemberWriter for FakeRepo {
        fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member> {
            self.member_writer.create_member(new_member)
        }
    }

    #[test]
    fn sign_in_accepts_the_right_password() {
        let mut repo = FakeRepo::new();
        repo.members
            .expect_get_member_by_email()
            .withf(|email| email == "rosa@example.com")
            .returning(|_| Ok(Some(sample_member("caramel-swirl"))));

        let member = sign_in(&repo, sign_in_form("Rosa@Example.com", "caramel-swirl"))
            .expect("expected success");

        assert_eq!(member.email, "rosa@example.com");
    }

    #[test]
    fn sign_in_rejects_a_wrong_password() {
        let mut repo = FakeRepo::new();
        repo.members
            .expect_get_member_by_email()
            .returning(|_| Ok(Some(sample_member("caramel-swirl"))));

        let result = sign_in(&repo, sign_in_form("rosa@example.com", "cola-cubes"));

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn sign_in_rejects_unknown_emails_identically() {
        let mut repo = FakeRepo::new();
        repo.members
            .expect_get_member_by_email()
            .returning(|_| Ok(None));

        let result = sign_in(&repo, sign_in_form("nobody@example.com", "caramel-swirl"));

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn sign_up_rejects_duplicate_emails() {
        let mut repo = FakeRepo::new();
        repo.members
            .expect_get_member_by_email()
            .returning(|_| Ok(Some(sample_member("caramel-swirl"))));

        let form = SignUpForm {
            email: "rosa@example.com".to_string(),
            password: "caramel-swirl".to_string(),
            first_name: "Rosa".to_string(),
            last_name: "Marchetti".to_string(),
            phone: None,
        };

        let result = sign_up(&repo, form);

        assert!(matches!(result, Err(ServiceError::Conflict)));
    }

    #[test]
    fn sign_up_stores_a_verifiable_hash_and_no_admin_flag() {
        let mut repo = FakeRepo::new();
        repo.members
            .expect_get_member_by_email()
            .returning(|_| Ok(None));

        repo.member_writer
            .expect_create_member()
            .times(1)
            .withf(|new_member| {
                assert_eq!(new_member.email, "theo@example.com");
                assert!(!new_member.is_admin);
                assert!(
                    auth::verify_password("sherbet-lemon", &new_member.password_hash)
                        .expect("verification should run")
                );
                true
            })
            .returning(|new_member| {
                let mut member = sample_member("sherbet-lemon");
                member.email = new_member.email.clone();
                Ok(member)
            });

        let form = SignUpForm {
            email: "Theo@Example.com".to_string(),
            password: "sherbet-lemon".to_string(),
            first_name: "Theo".to_string(),
            last_name: "Brandt".to_string(),
            phone: None,
        };

        sign_up(&repo, form).expect("expected success");
    }

    #[test]
    fn load_profile_collects_identity_and_orders() {
        struct ProfileRepo {
            members: MockMemberReader,
            orders: MockOrderReader,
        }

        impl MemberReader for ProfileRepo {
            fn get_member_by_id(&self, id: i32) -> RepositoryResult<Option<Member>> {
                self.members.get_member_by_id(id)
            }

            fn get_member_by_email(&self, email: &str) -> RepositoryResult<Option<Member>> {
                self.members.get_member_by_email(email)
            }
        }

        impl crate::repository::OrderReader for ProfileRepo {
            fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>> {
                self.orders.get_order_by_id(id)
            }

            fn list_orders(
                &self,
                query: OrderListQuery,
            ) -> RepositoryResult<(usize, Vec<Order>)> {
                self.orders.list_orders(query)
            }
        }

        let mut repo = ProfileRepo {
            members: MockMemberReader::new(),
            orders: MockOrderReader::new(),
        };

        repo.members
            .expect_get_member_by_id()
            .withf(|id| *id == 1)
            .returning(|_| Ok(Some(sample_member("caramel-swirl"))));

        repo.orders
            .expect_list_orders()
            .times(1)
            .withf(|query| {
                assert_eq!(query.member_id, Some(1));
                true
            })
            .returning(|_| Ok((0, Vec::new())));

        let claims = AuthenticatedMember {
            sub: 1,
            email: "rosa@example.com".to_string(),
            name: "Rosa Marchetti".to_string(),
            is_admin: false,
        };

        let data = load_profile(&repo, &claims).expect("expected success");

        assert_eq!(data.member.full_name, "Rosa Marchetti");
        assert_eq!(data.member.member_since, "June 2024");
        assert!(data.orders.is_empty());
    }
}
