pub mod users;

use actix_files::Files;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(users::home)
        .service(users::list_users)
        .service(users::create_user)
        .service(users::delete_user)
        .service(users::edit_user)
        .service(users::update_user);
}

/// Serves the public directory verbatim. Register after `configure` so the
/// routes take precedence over files at the same path.
pub fn configure_static(cfg: &mut web::ServiceConfig, public_dir: &str) {
    cfg.service(Files::new("/", public_dir));
}
