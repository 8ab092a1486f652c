use std::env;

use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use dotenvy::dotenv;
use tera::Tera;

use sweetshop::db::establish_connection_pool;
use sweetshop::repository::DieselRepository;
use sweetshop::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("sweetshop.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let secret_key = match env::var("SECRET_KEY") {
        Ok(key) => Key::from(key.as_bytes()),
        Err(_) => Key::generate(),
    };

    // Optional mount prefix for deployments below a path, e.g. "/shop".
    let base_path = env::var("BASE_PATH").unwrap_or_default();
    let base_path = base_path.trim_end_matches('/').to_string();

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = match Tera::new("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    HttpServer::new(move || {
        let app = App::new()
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true behind TLS
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .default_service(web::route().to(routes::main::fallback));

        if base_path.is_empty() {
            app.service(Files::new("/assets", "./assets"))
                .configure(routes::configure)
        } else {
            app.service(Files::new(&format!("{base_path}/assets"), "./assets"))
                .service(web::scope(&base_path).configure(routes::configure))
        }
    })
    .bind((address, port))?
    .run()
    .await
}
