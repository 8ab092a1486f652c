use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::auth::AuthenticatedMember;
use crate::repository::DieselRepository;
use crate::routes::cart::load_cart;
use crate::routes::{base_context, redirect, render_template};
use crate::services::store;

#[get("/")]
pub async fn show_home(
    member: Option<AuthenticatedMember>,
    repo: web::Data<DieselRepository>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let cart = load_cart(&session);

    match store::load_home_page(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, member.as_ref(), "home", cart.count());
            context.insert("featured", &data.featured);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the home page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/about")]
pub async fn show_about(
    member: Option<AuthenticatedMember>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let cart = load_cart(&session);
    let context = base_context(&flash_messages, member.as_ref(), "about", cart.count());
    render_template(&tera, "main/about.html", &context)
}

#[get("/contact")]
pub async fn show_contact(
    member: Option<AuthenticatedMember>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let cart = load_cart(&session);
    let context = base_context(&flash_messages, member.as_ref(), "contact", cart.count());
    render_template(&tera, "main/contact.html", &context)
}

/// Catch-all for unknown paths: back to the home page, never an error page.
pub async fn fallback() -> impl Responder {
    redirect("/")
}
