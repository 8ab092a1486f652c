use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::auth::AuthenticatedMember;
use crate::forms::admin::{
    AddCategoryForm, EditCategoryForm, EditSweetForm, RestockForm, SweetForm,
};
use crate::repository::DieselRepository;
use crate::routes::cart::load_cart;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::admin::{self, DashboardQuery};

#[get("")]
pub async fn show_dashboard(
    params: web::Query<DashboardQuery>,
    member: AuthenticatedMember,
    repo: web::Data<DieselRepository>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let cart = load_cart(&session);

    // The service re-checks the flag; this renders the denial page without
    // touching any records.
    if !member.is_admin {
        let context = base_context(&flash_messages, Some(&member), "admin", cart.count());
        return render_template(&tera, "admin/denied.html", &context);
    }

    match admin::load_dashboard(repo.get_ref(), &member, params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, Some(&member), "admin", cart.count());
            context.insert("sweets", &data.sweets);
            context.insert("categories", &data.categories);
            context.insert("search", &data.search);
            render_template(&tera, "admin/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            let context = base_context(&flash_messages, Some(&member), "admin", cart.count());
            render_template(&tera, "admin/denied.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the admin dashboard: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/sweets/add")]
pub async fn add_sweet(
    member: AuthenticatedMember,
    repo: web::Data<DieselRepository>,
    form: web::Form<SweetForm>,
) -> impl Responder {
    match admin::create_sweet(repo.get_ref(), &member, form.into_inner()) {
        Ok(sweet) => {
            FlashMessage::success(format!("{} has been added to the catalog.", sweet.name)).send();
            redirect("/admin")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("You do not have permission to do that.").send();
            redirect("/")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/admin")
        }
        Err(ServiceError::Conflict) => {
            FlashMessage::error("A sweet with that name already exists.").send();
            redirect("/admin")
        }
        Err(err) => {
            log::error!("Failed to create a sweet: {err}");
            FlashMessage::error("Could not add the sweet.").send();
            redirect("/admin")
        }
    }
}

#[post("/sweets/edit")]
pub async fn edit_sweet(
    member: AuthenticatedMember,
    repo: web::Data<DieselRepository>,
    form: web::Form<EditSweetForm>,
) -> impl Responder {
    match admin::modify_sweet(repo.get_ref(), &member, form.into_inner()) {
        Ok(sweet) => {
            FlashMessage::success(format!("{} has been updated.", sweet.name)).send();
            redirect("/admin")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("You do not have permission to do that.").send();
            redirect("/")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/admin")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("That sweet no longer exists.").send();
            redirect("/admin")
        }
        Err(ServiceError::Conflict) => {
            FlashMessage::error("A sweet with that name already exists.").send();
            redirect("/admin")
        }
        Err(err) => {
            log::error!("Failed to update a sweet: {err}");
            FlashMessage::error("Could not update the sweet.").send();
            redirect("/admin")
        }
    }
}

#[post("/sweets/{sweet_id}/delete")]
pub async fn delete_sweet(
    path: web::Path<i32>,
    member: AuthenticatedMember,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let sweet_id = path.into_inner();

    match admin::remove_sweet(repo.get_ref(), &member, sweet_id) {
        Ok(()) => {
            FlashMessage::success("The sweet has been deleted.").send();
            redirect("/admin")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("You do not have permission to do that.").send();
            redirect("/")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("That sweet was already deleted.").send();
            redirect("/admin")
        }
        Err(err) => {
            log::error!("Failed to delete sweet {sweet_id}: {err}");
            FlashMessage::error("Could not delete the sweet.").send();
            redirect("/admin")
        }
    }
}

#[post("/sweets/{sweet_id}/restock")]
pub async fn restock_sweet(
    path: web::Path<i32>,
    member: AuthenticatedMember,
    repo: web::Data<DieselRepository>,
    form: web::Form<RestockForm>,
) -> impl Responder {
    let sweet_id = path.into_inner();

    match admin::restock_sweet(repo.get_ref(), &member, sweet_id, form.into_inner()) {
        Ok(sweet) => {
            FlashMessage::success(format!(
                "{} now has {} in stock.",
                sweet.name, sweet.stock_level
            ))
            .send();
            redirect("/admin")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("You do not have permission to do that.").send();
            redirect("/")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/admin")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("That sweet no longer exists.").send();
            redirect("/admin")
        }
        Err(err) => {
            log::error!("Failed to restock sweet {sweet_id}: {err}");
            FlashMessage::error("Could not update the stock level.").send();
            redirect("/admin")
        }
    }
}

#[post("/categories/add")]
pub async fn add_category(
    member: AuthenticatedMember,
    repo: web::Data<DieselRepository>,
    form: web::Form<AddCategoryForm>,
) -> impl Responder {
    match admin::create_category(repo.get_ref(), &member, form.into_inner()) {
        Ok(category) => {
            FlashMessage::success(format!("Category {} has been added.", category.name)).send();
            redirect("/admin")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("You do not have permission to do that.").send();
            redirect("/")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/admin")
        }
        Err(ServiceError::Conflict) => {
            FlashMessage::error("A category with that name already exists.").send();
            redirect("/admin")
        }
        Err(err) => {
            log::error!("Failed to create a category: {err}");
            FlashMessage::error("Could not add the category.").send();
            redirect("/admin")
        }
    }
}

#[post("/categories/edit")]
pub async fn edit_category(
    member: AuthenticatedMember,
    repo: web::Data<DieselRepository>,
    form: web::Form<EditCategoryForm>,
) -> impl Responder {
    match admin::modify_category(repo.get_ref(), &member, form.into_inner()) {
        Ok(category) => {
            FlashMessage::success(format!("Category {} has been updated.", category.name)).send();
            redirect("/admin")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("You do not have permission to do that.").send();
            redirect("/")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/admin")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("That category no longer exists.").send();
            redirect("/admin")
        }
        Err(ServiceError::Conflict) => {
            FlashMessage::error("A category with that name already exists.").send();
            redirect("/admin")
        }
        Err(err) => {
            log::error!("Failed to update a category: {err}");
            FlashMessage::error("Could not update the category.").send();
            redirect("/admin")
        }
    }
}

#[post("/categories/{category_id}/delete")]
pub async fn delete_category(
    path: web::Path<i32>,
    member: AuthenticatedMember,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = path.into_inner();

    match admin::remove_category(repo.get_ref(), &member, category_id) {
        Ok(()) => {
            FlashMessage::success("The category has been deleted.").send();
            redirect("/admin")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("You do not have permission to do that.").send();
            redirect("/")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("That category was already deleted.").send();
            redirect("/admin")
        }
        Err(err) => {
            log::error!("Failed to delete category {category_id}: {err}");
            FlashMessage::error("Could not delete the category.").send();
            redirect("/admin")
        }
    }
}
