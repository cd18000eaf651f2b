//! Behaviour tests for the register-then-list flow over HTTP.
//!
//! Each test drives a fresh in-memory user store through the same handlers
//! the server mounts.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use rstest::{fixture, rstest};

use roster::Trace;
use roster::domain::TRACE_ID_HEADER;
use roster::inbound::http::state::HttpState;
use roster::inbound::http::users::configure;
use roster::outbound::persistence::InMemoryUserRepository;

#[fixture]
fn state() -> HttpState {
    HttpState::from_repository(Arc::new(InMemoryUserRepository::new())).expect("state builds")
}

async fn submit<S>(app: &S, fields: &[(&str, &str)]) -> ServiceResponse
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let request = test::TestRequest::post()
        .uri("/")
        .set_form(fields)
        .to_request();
    test::call_service(app, request).await
}

async fn page_html<S>(app: &S) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let response = test::call_service(app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = test::read_body(response).await;
    String::from_utf8(body.to_vec()).expect("utf8 page")
}

fn listed_ids(html: &str) -> Vec<i64> {
    html.split("data-user-id=\"")
        .skip(1)
        .filter_map(|chunk| chunk.split('"').next())
        .map(|id| id.parse().expect("numeric id"))
        .collect()
}

#[rstest]
#[actix_web::test]
async fn submitted_user_appears_first_on_next_page(state: HttpState) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(configure),
    )
    .await;

    let earlier = submit(&app, &[("name", "Zed"), ("email", "z@x.com")]).await;
    assert_eq!(earlier.status(), StatusCode::FOUND);
    let response = submit(&app, &[("name", "Alice"), ("email", "a@x.com")]).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/")
    );
    assert!(response.headers().contains_key(TRACE_ID_HEADER));

    let html = page_html(&app).await;
    let alice = html.find("Alice").expect("Alice listed");
    let zed = html.find("Zed").expect("Zed listed");
    assert!(alice < zed, "latest submission is listed first");
}

#[rstest]
#[actix_web::test]
async fn ids_are_listed_in_descending_order(state: HttpState) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;

    for (name, email) in [("One", "1@x.com"), ("Two", "2@x.com"), ("Three", "3@x.com")] {
        submit(&app, &[("name", name), ("email", email)]).await;
    }

    assert_eq!(listed_ids(&page_html(&app).await), vec![3, 2, 1]);
}

#[rstest]
#[actix_web::test]
async fn empty_name_leaves_listing_unchanged(state: HttpState) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;
    submit(&app, &[("name", "Ada"), ("email", "ada@x.com")]).await;
    let before = page_html(&app).await;

    let response = submit(&app, &[("name", ""), ("email", "b@x.com")]).await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let after = page_html(&app).await;
    assert_eq!(listed_ids(&after), vec![1]);
    assert!(!after.contains("b@x.com"));
    assert_eq!(before, after);
}

#[rstest]
#[actix_web::test]
async fn repeated_reads_are_identical(state: HttpState) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;
    submit(&app, &[("name", "Ada"), ("email", "ada@x.com")]).await;

    let first = page_html(&app).await;
    let second = page_html(&app).await;
    assert_eq!(first, second);
}

#[rstest]
#[actix_web::test]
async fn duplicate_emails_are_both_stored(state: HttpState) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;

    submit(&app, &[("name", "Ada"), ("email", "same@x.com")]).await;
    submit(&app, &[("name", "Bea"), ("email", "same@x.com")]).await;

    assert_eq!(listed_ids(&page_html(&app).await), vec![2, 1]);
}

#[rstest]
#[actix_web::test]
async fn repeated_form_keys_keep_the_last_value(state: HttpState) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;

    let response = submit(&app, &[("name", "a"), ("name", "b"), ("email", "e@x.com")]).await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let html = page_html(&app).await;
    assert_eq!(listed_ids(&html), vec![1]);
    assert!(html.contains("<td>b</td>"));
}

#[rstest]
#[actix_web::test]
async fn put_after_post_shows_the_listing(state: HttpState) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;
    submit(&app, &[("name", "Ada"), ("email", "ada@x.com")]).await;

    let response =
        test::call_service(&app, test::TestRequest::put().uri("/").to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = test::read_body(response).await;
    let html = std::str::from_utf8(&body).expect("utf8 page");
    assert_eq!(listed_ids(html), vec![1]);
}
