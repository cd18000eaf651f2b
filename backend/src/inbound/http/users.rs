//! Users page handlers.
//!
//! ```text
//! POST / name=Ada&email=a@x.com   302 Found, Location: /
//! any other method on /           HTML page, newest users first
//! ```

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpRequest, HttpResponse, web};

use crate::domain::RegistrationForm;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Urlencoded body for `POST /`. Both fields are optional.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl RegistrationRequest {
    /// Collect fields from decoded form pairs. A repeated key keeps its last
    /// value; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        pairs
            .into_iter()
            .fold(Self::default(), |mut request, (key, value)| {
                match key.as_str() {
                    "name" => request.name = Some(value),
                    "email" => request.email = Some(value),
                    _ => {}
                }
                request
            })
    }
}

impl From<RegistrationRequest> for RegistrationForm {
    fn from(value: RegistrationRequest) -> Self {
        Self::new(value.name, value.email)
    }
}

/// Mount the users page on `/`: `POST` registers, every other method lists.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use roster::inbound::http::users;
///
/// let app = App::new().configure(users::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::post().to(register_user))
            .default_service(web::to(list_users)),
    );
}

/// Render the registration form and every user, newest first.
pub async fn list_users(req: HttpRequest, state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let users = state.users.list_users().await?;
    let html = state.page.render(&users, req.path())?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}

/// Register a user from form fields, then redirect back to the listing.
///
/// A missing, empty or unparseable body is treated as absent fields: nothing
/// is stored and the redirect is still issued.
pub async fn register_user(
    req: HttpRequest,
    state: web::Data<HttpState>,
    form: Option<web::Form<Vec<(String, String)>>>,
) -> ApiResult<HttpResponse> {
    let request = form
        .map(|pairs| RegistrationRequest::from_pairs(pairs.into_inner()))
        .unwrap_or_default();
    state.registration.register(request.into()).await?;
    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, req.path().to_owned()))
        .finish())
}
