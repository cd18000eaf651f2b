//! Server-side rendering of the users page.
//!
//! The template is embedded at compile time and registered under an `.html`
//! name, so Tera autoescapes every interpolated value.

use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::{Error, User};

const TEMPLATE_NAME: &str = "users/index.html";

/// Renderer for the registration form and users list.
#[derive(Debug)]
pub struct UsersPage {
    tera: Tera,
}

#[derive(Serialize)]
struct PageContext<'a> {
    users: &'a [User],
    form_action: &'a str,
}

impl UsersPage {
    /// Parse the embedded template.
    ///
    /// # Errors
    /// Returns a Tera error if the template does not parse.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(
            TEMPLATE_NAME,
            include_str!("../../../templates/users/index.html"),
        )?;
        Ok(Self { tera })
    }

    /// Render `users` in the order given, with the form posting to
    /// `form_action`.
    ///
    /// # Errors
    /// Rendering failures map to [`Error::internal`].
    pub fn render(&self, users: &[User], form_action: &str) -> Result<String, Error> {
        let context = Context::from_serialize(PageContext { users, form_action })
            .map_err(|err| Error::internal(format!("users page context: {err}")))?;
        self.tera
            .render(TEMPLATE_NAME, &context)
            .map_err(|err| Error::internal(format!("users page render: {err}")))
    }
}
