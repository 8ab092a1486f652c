use serde::Deserialize;

use crate::auth::AuthenticatedMember;
use crate::domain::category::{Category, CategoryListQuery};
use crate::domain::sweet::{Sweet, SweetListQuery};
use crate::forms::admin::{AddCategoryForm, EditCategoryForm, EditSweetForm, RestockForm, SweetForm};
use crate::repository::{CategoryReader, CategoryWriter, SweetReader, SweetWriter};
use crate::services::store::SweetView;
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the dashboard.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Optional search string entered by the admin.
    pub search: Option<String>,
}

/// Data required to render the dashboard template.
pub struct DashboardData {
    /// Every sweet matching the filter; the dashboard shows the full
    /// catalog, unpaginated.
    pub sweets: Vec<SweetView>,
    /// All categories, for the form selector.
    pub categories: Vec<Category>,
    /// Search query echoed back to the view when present.
    pub search: Option<String>,
}

fn ensure_admin(member: &AuthenticatedMember) -> ServiceResult<()> {
    if member.is_admin {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

/// Loads the dashboard: the sweet list (optionally filtered by a
/// case-insensitive name search) and the categories for the selector.
pub fn load_dashboard<R>(
    repo: &R,
    member: &AuthenticatedMember,
    query: DashboardQuery,
) -> ServiceResult<DashboardData>
where
    R: SweetReader + CategoryReader + ?Sized,
{
    ensure_admin(member)?;

    let DashboardQuery { search } = query;

    let mut list_query = SweetListQuery::new();
    if let Some(term) = search.as_ref().map(|value| value.trim()).filter(|value| !value.is_empty())
    {
        list_query = list_query.search(term);
    }

    let (_, sweets) = repo.list_sweets(list_query)?;
    let (_, categories) = repo.list_categories(CategoryListQuery::new())?;

    Ok(DashboardData {
        sweets: sweets.into_iter().map(SweetView::from).collect(),
        categories,
        search,
    })
}

/// Creates a new sweet from the dashboard form.
pub fn create_sweet<R>(
    repo: &R,
    member: &AuthenticatedMember,
    form: SweetForm,
) -> ServiceResult<Sweet>
where
    R: SweetWriter + ?Sized,
{
    ensure_admin(member)?;

    let new_sweet = form
        .into_new_sweet()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_sweet(&new_sweet).map_err(ServiceError::from)
}

/// Applies the edit form to an existing sweet.
pub fn modify_sweet<R>(
    repo: &R,
    member: &AuthenticatedMember,
    form: EditSweetForm,
) -> ServiceResult<Sweet>
where
    R: SweetWriter + ?Sized,
{
    ensure_admin(member)?;

    let payload = form
        .into_update_sweet()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_sweet(payload.sweet_id, &payload.update)
        .map_err(ServiceError::from)
}

/// Deletes a sweet after the confirm dialog.
pub fn remove_sweet<R>(repo: &R, member: &AuthenticatedMember, sweet_id: i32) -> ServiceResult<()>
where
    R: SweetWriter + ?Sized,
{
    ensure_admin(member)?;

    repo.delete_sweet(sweet_id).map_err(ServiceError::from)
}

/// Applies the restock dialog: a partial update touching only the stock
/// level, leaving every other column as it was.
pub fn restock_sweet<R>(
    repo: &R,
    member: &AuthenticatedMember,
    sweet_id: i32,
    form: RestockForm,
) -> ServiceResult<Sweet>
where
    R: SweetWriter + ?Sized,
{
    ensure_admin(member)?;

    let stock_level = form
        .into_stock_level()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.set_sweet_stock(sweet_id, stock_level)
        .map_err(ServiceError::from)
}

/// Creates a new category from the dashboard form.
pub fn create_category<R>(
    repo: &R,
    member: &AuthenticatedMember,
    form: AddCategoryForm,
) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    ensure_admin(member)?;

    let new_category = form
        .into_new_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_category(&new_category)
        .map_err(ServiceError::from)
}

/// Applies the edit form to an existing category. Sweets keep the old
/// category name; renames do not cascade.
pub fn modify_category<R>(
    repo: &R,
    member: &AuthenticatedMember,
    form: EditCategoryForm,
) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    ensure_admin(member)?;

    let payload = form
        .into_update_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_category(payload.category_id, &payload.update)
        .map_err(ServiceError::from)
}

/// Deletes a category after the confirm dialog.
pub fn remove_category<R>(
    repo: &R,
    member: &AuthenticatedMember,
    category_id: i32,
) -> ServiceResult<()>
where
    R: CategoryWriter + ?Sized,
{
    ensure_admin(member)?;

    repo.delete_category(category_id).map_err(ServiceError::from)
}
