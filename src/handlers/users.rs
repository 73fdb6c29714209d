use actix_web::http::header::{self, ContentType};
use actix_web::web::{Data, Form, Json, Path};
use actix_web::{get, post, Either, HttpResponse};
use tera::Context;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::user::UserForm;
use crate::services::{database::DatabaseService, templates::TemplateService};

type Result<T> = std::result::Result<T, AppError>;

/// Create and update accept a urlencoded form or a JSON body.
type UserPayload = Either<Form<UserForm>, Json<UserForm>>;

fn into_form(payload: UserPayload) -> UserForm {
    match payload {
        Either::Left(form) => form.into_inner(),
        Either::Right(json) => json.into_inner(),
    }
}

fn html(page: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(page)
}

/// Every mutation ends on the listing, whether or not it matched a record.
fn redirect_to_list() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/read"))
        .finish()
}

#[get("/")]
pub async fn home(views: Data<TemplateService>) -> Result<HttpResponse> {
    Ok(html(views.render("index", &Context::new())?))
}

#[get("/read")]
pub async fn list_users(
    db: Data<DatabaseService>,
    views: Data<TemplateService>,
) -> Result<HttpResponse> {
    let users = db.list_users().await?;

    let mut context = Context::new();
    context.insert("users", &users);
    Ok(html(views.render("read", &context)?))
}

#[post("/create")]
pub async fn create_user(
    db: Data<DatabaseService>,
    payload: UserPayload,
) -> Result<HttpResponse> {
    db.create_user(into_form(payload)).await?;
    Ok(redirect_to_list())
}

#[get("/delete/{user_id}")]
pub async fn delete_user(
    db: Data<DatabaseService>,
    path: Path<Uuid>,
) -> Result<HttpResponse> {
    let user_id = path.into_inner();

    if db.delete_user(&user_id).await?.is_none() {
        log::debug!("No user {} to delete", user_id);
    }
    Ok(redirect_to_list())
}

#[get("/update/{user_id}")]
pub async fn edit_user(
    db: Data<DatabaseService>,
    views: Data<TemplateService>,
    path: Path<Uuid>,
) -> Result<HttpResponse> {
    let user_id = path.into_inner();

    // An unknown id still renders the view, just without a `user`.
    let mut context = Context::new();
    match db.get_user(&user_id).await? {
        Some(user) => context.insert("user", &user),
        None => log::debug!("No user {} to edit", user_id),
    }
    Ok(html(views.render("edit", &context)?))
}

#[post("/update/{user_id}")]
pub async fn update_user(
    db: Data<DatabaseService>,
    path: Path<Uuid>,
    payload: UserPayload,
) -> Result<HttpResponse> {
    let user_id = path.into_inner();

    if db.update_user(&user_id, into_form(payload)).await?.is_none() {
        log::debug!("No user {} to update", user_id);
    }
    Ok(redirect_to_list())
}
