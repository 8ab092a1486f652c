use actix_web::http::header;
use actix_web::{HttpResponse, web};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::Tera;

use crate::auth::AuthenticatedMember;
use crate::middleware::RedirectUnauthorized;

pub mod admin;
pub mod cart;
pub mod main;
pub mod members;
pub mod store;

/// Register every route. Public storefront routes come first; `/profile` and
/// `/admin` live behind the sign-in redirect.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::show_home)
        .service(main::show_about)
        .service(main::show_contact)
        .service(store::show_store)
        .service(store::show_store_category)
        .service(store::show_sweet)
        .service(cart::show_cart)
        .service(cart::add_to_cart)
        .service(cart::update_cart)
        .service(cart::remove_from_cart)
        .service(members::show_sign_in)
        .service(members::process_sign_in)
        .service(members::show_sign_up)
        .service(members::process_sign_up)
        .service(members::sign_out)
        .service(
            web::scope("/profile")
                .wrap(RedirectUnauthorized)
                .service(members::show_profile),
        )
        .service(
            web::scope("/admin")
                .wrap(RedirectUnauthorized)
                .service(admin::show_dashboard)
                .service(admin::add_sweet)
                .service(admin::edit_sweet)
                .service(admin::delete_sweet)
                .service(admin::restock_sweet)
                .service(admin::add_category)
                .service(admin::edit_category)
                .service(admin::delete_category),
        );
}

/// A flash message shaped for the alert partial.
#[derive(Serialize)]
struct Alert {
    level: &'static str,
    content: String,
}

fn level_class(level: Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Build the context every template starts from: flash alerts, the signed-in
/// member (if any), the active nav entry and the cart badge count.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    member: Option<&AuthenticatedMember>,
    active_page: &str,
    cart_count: i32,
) -> tera::Context {
    let mut context = tera::Context::new();

    let alerts: Vec<Alert> = flash_messages
        .iter()
        .map(|message| Alert {
            level: level_class(message.level()),
            content: message.content().to_string(),
        })
        .collect();

    context.insert("alerts", &alerts);
    context.insert("current_member", &member);
    context.insert("active_page", active_page);
    context.insert("cart_count", &cart_count);
    context
}

/// Render a template or log and answer 500; there is no finer-grained
/// recovery for render failures.
pub fn render_template(tera: &Tera, name: &str, context: &tera::Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {name}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// A `303 See Other` to the given location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

/// Clamp a `next` redirect target to local paths, discarding anything that
/// could leave the site.
pub fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => "/",
    }
}
