mod config;
mod error;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;

use services::{database::DatabaseService, templates::TemplateService};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = config::Config::from_env();

    let database_service = DatabaseService::new(&config.database)
        .await
        .context("failed to initialize database")?;

    let template_service = TemplateService::new(&config.views_dir)
        .context("failed to load views")?;

    let bind_address = config.server.bind_address();
    let public_dir = config.public_dir.clone();

    log::info!("Starting user records server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(database_service.clone()))
            .app_data(web::Data::new(template_service.clone()))
            .configure(handlers::configure)
            .configure(|cfg| handlers::configure_static(cfg, &public_dir))
    })
    .bind(&bind_address)
    .with_context(|| format!("failed to bind {}", bind_address))?
    .run()
    .await?;

    Ok(())
}
