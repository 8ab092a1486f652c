use actix_identity::Identity;
use actix_session::Session;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::auth::AuthenticatedMember;
use crate::forms::members::{SignInForm, SignInQuery, SignUpForm};
use crate::repository::DieselRepository;
use crate::routes::cart::load_cart;
use crate::routes::{base_context, redirect, render_template, safe_next};
use crate::services::ServiceError;
use crate::services::members as member_service;

/// Contextual prompt shown above the sign-in form for guarded destinations.
fn sign_in_message(next: Option<&str>) -> Option<&'static str> {
    match next {
        Some("/admin") => Some("Sign in to access the admin dashboard"),
        Some(_) => Some("Sign in to continue"),
        None => None,
    }
}

#[get("/signin")]
pub async fn show_sign_in(
    params: web::Query<SignInQuery>,
    member: Option<AuthenticatedMember>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if member.is_some() {
        return redirect("/");
    }

    let cart = load_cart(&session);
    let next = params.into_inner().next;

    let mut context = base_context(&flash_messages, None, "signin", cart.count());
    context.insert("next", &next);
    context.insert("sign_in_message", &sign_in_message(next.as_deref()));
    render_template(&tera, "members/signin.html", &context)
}

#[post("/signin")]
pub async fn process_sign_in(
    request: HttpRequest,
    repo: web::Data<DieselRepository>,
    form: web::Form<SignInForm>,
) -> impl Responder {
    let form = form.into_inner();
    let next = form.next.clone();

    match member_service::sign_in(repo.get_ref(), form) {
        Ok(member) => {
            let claims = AuthenticatedMember::from(&member);
            match log_in(&request, &claims) {
                Ok(()) => {
                    FlashMessage::success(format!("Welcome back, {}!", member.first_name)).send();
                    redirect(safe_next(next.as_deref()))
                }
                Err(response) => response,
            }
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Unknown email or wrong password.").send();
            redirect("/signin")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/signin")
        }
        Err(err) => {
            log::error!("Failed to sign a member in: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/signup")]
pub async fn show_sign_up(
    member: Option<AuthenticatedMember>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if member.is_some() {
        return redirect("/");
    }

    let cart = load_cart(&session);
    let context = base_context(&flash_messages, None, "signup", cart.count());
    render_template(&tera, "members/signup.html", &context)
}

#[post("/signup")]
pub async fn process_sign_up(
    request: HttpRequest,
    repo: web::Data<DieselRepository>,
    form: web::Form<SignUpForm>,
) -> impl Responder {
    match member_service::sign_up(repo.get_ref(), form.into_inner()) {
        Ok(member) => {
            let claims = AuthenticatedMember::from(&member);
            match log_in(&request, &claims) {
                Ok(()) => {
                    FlashMessage::success(format!("Welcome to SweetShop, {}!", member.first_name))
                        .send();
                    redirect("/")
                }
                Err(response) => response,
            }
        }
        Err(ServiceError::Conflict) => {
            FlashMessage::error("An account with that email already exists.").send();
            redirect("/signup")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/signup")
        }
        Err(err) => {
            log::error!("Failed to register a member: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/logout")]
pub async fn sign_out(identity: Option<Identity>) -> impl Responder {
    if let Some(identity) = identity {
        identity.logout();
    }
    redirect("/")
}

#[get("")]
pub async fn show_profile(
    claims: AuthenticatedMember,
    repo: web::Data<DieselRepository>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let cart = load_cart(&session);

    match member_service::load_profile(repo.get_ref(), &claims) {
        Ok(data) => {
            let mut context =
                base_context(&flash_messages, Some(&claims), "profile", cart.count());
            context.insert("profile", &data.member);
            context.insert("orders", &data.orders);
            render_template(&tera, "members/profile.html", &context)
        }
        Err(ServiceError::NotFound) => {
            // The session outlived the member record.
            FlashMessage::error("Your account could not be found. Please sign in again.").send();
            redirect("/logout")
        }
        Err(err) => {
            log::error!("Failed to load the profile page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

fn log_in(request: &HttpRequest, claims: &AuthenticatedMember) -> Result<(), HttpResponse> {
    let id = claims.to_session_string().map_err(|err| {
        log::error!("Failed to serialize session claims: {err}");
        HttpResponse::InternalServerError().finish()
    })?;

    Identity::login(&request.extensions(), id).map_err(|err| {
        log::error!("Failed to attach the identity to the session: {err}");
        HttpResponse::InternalServerError().finish()
    })?;

    Ok(())
}
