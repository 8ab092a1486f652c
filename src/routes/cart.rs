use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::auth::AuthenticatedMember;
use crate::domain::cart::{CART_SESSION_KEY, Cart};
use crate::forms::cart::{AddToCartForm, RemoveFromCartForm, UpdateCartForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::cart as cart_service;

/// Read the cart out of the session; a missing or undecodable entry is an
/// empty cart.
pub fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(CART_SESSION_KEY)
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Write the cart back to the session.
pub fn store_cart(session: &Session, cart: &Cart) {
    if let Err(err) = session.insert(CART_SESSION_KEY, cart) {
        log::error!("Failed to persist the cart to the session: {err}");
    }
}

#[get("/cart")]
pub async fn show_cart(
    member: Option<AuthenticatedMember>,
    repo: web::Data<DieselRepository>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut cart = load_cart(&session);

    match cart_service::resolve_cart(repo.get_ref(), &mut cart) {
        Ok(data) => {
            if data.adjusted {
                store_cart(&session, &cart);
            }
            let mut context = base_context(&flash_messages, member.as_ref(), "cart", cart.count());
            context.insert("lines", &data.lines);
            context.insert("total_formatted", &data.total_formatted);
            context.insert("cart_adjusted", &data.adjusted);
            render_template(&tera, "cart/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to resolve the cart: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/cart/add")]
pub async fn add_to_cart(
    repo: web::Data<DieselRepository>,
    session: Session,
    form: web::Form<AddToCartForm>,
) -> impl Responder {
    let AddToCartForm { sweet_id, quantity } = form.into_inner();
    let mut cart = load_cart(&session);

    match cart_service::add_to_cart(repo.get_ref(), &mut cart, sweet_id, quantity) {
        Ok(sweet) => {
            store_cart(&session, &cart);
            FlashMessage::success(format!("Added {} to your cart.", sweet.name)).send();
            redirect("/cart")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("That sweet is no longer on the shelves.").send();
            redirect("/store")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/cart")
        }
        Err(err) => {
            log::error!("Failed to add sweet {sweet_id} to the cart: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/cart/update")]
pub async fn update_cart(
    repo: web::Data<DieselRepository>,
    session: Session,
    form: web::Form<UpdateCartForm>,
) -> impl Responder {
    let UpdateCartForm { sweet_id, quantity } = form.into_inner();
    let mut cart = load_cart(&session);

    match cart_service::update_quantity(repo.get_ref(), &mut cart, sweet_id, quantity) {
        Ok(()) => {
            store_cart(&session, &cart);
            redirect("/cart")
        }
        Err(ServiceError::NotFound) => {
            cart.remove(sweet_id);
            store_cart(&session, &cart);
            FlashMessage::error("That sweet is no longer on the shelves.").send();
            redirect("/cart")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/cart")
        }
        Err(err) => {
            log::error!("Failed to update the cart: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/cart/remove")]
pub async fn remove_from_cart(
    session: Session,
    form: web::Form<RemoveFromCartForm>,
) -> impl Responder {
    let RemoveFromCartForm { sweet_id } = form.into_inner();

    let mut cart = load_cart(&session);
    cart.remove(sweet_id);
    store_cart(&session, &cart);

    redirect("/cart")
}
