use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::auth::AuthenticatedMember;
use crate::repository::DieselRepository;
use crate::routes::cart::load_cart;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::store::{self, CatalogQuery};

#[get("/store")]
pub async fn show_store(
    params: web::Query<CatalogQuery>,
    member: Option<AuthenticatedMember>,
    repo: web::Data<DieselRepository>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_catalog(
        repo.get_ref(),
        None,
        params.into_inner(),
        member,
        &session,
        &flash_messages,
        &tera,
    )
}

#[get("/store/{category_slug}")]
pub async fn show_store_category(
    path: web::Path<String>,
    params: web::Query<CatalogQuery>,
    member: Option<AuthenticatedMember>,
    repo: web::Data<DieselRepository>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let category_slug = path.into_inner();
    render_catalog(
        repo.get_ref(),
        Some(&category_slug),
        params.into_inner(),
        member,
        &session,
        &flash_messages,
        &tera,
    )
}

fn render_catalog(
    repo: &DieselRepository,
    category_slug: Option<&str>,
    params: CatalogQuery,
    member: Option<AuthenticatedMember>,
    session: &Session,
    flash_messages: &IncomingFlashMessages,
    tera: &Tera,
) -> HttpResponse {
    let cart = load_cart(session);

    match store::load_catalog_page(repo, category_slug, params) {
        Ok(data) => {
            let mut context = base_context(flash_messages, member.as_ref(), "store", cart.count());
            context.insert("sweets", &data.sweets);
            context.insert("categories", &data.categories);
            context.insert("current_category", &data.current_category);
            render_template(tera, "store/index.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("That category is no longer available.").send();
            redirect("/store")
        }
        Err(err) => {
            log::error!("Failed to load the catalog: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/products/{slug}")]
pub async fn show_sweet(
    path: web::Path<String>,
    member: Option<AuthenticatedMember>,
    repo: web::Data<DieselRepository>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let slug = path.into_inner();
    let cart = load_cart(&session);

    match store::load_sweet_page(repo.get_ref(), &slug) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, member.as_ref(), "store", cart.count());
            context.insert("sweet", &data.sweet);
            render_template(&tera, "store/sweet.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("That sweet is no longer on the shelves.").send();
            redirect("/store")
        }
        Err(err) => {
            log::error!("Failed to load sweet {slug}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
