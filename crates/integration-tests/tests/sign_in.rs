//! Sign-in flow: credential round trip, role navigation, error-code
//! mapping, and the cosmetic minimum delay.

use serde_json::{Value, json};

use comandas_app::navigator::{DialogRequest, Route};
use comandas_app::notice::NoticeLevel;
use comandas_app::screens::sign_in::SignInScreen;
use comandas_app::storage::KeyValueStore;
use comandas_core::OrderId;
use comandas_integration_tests::TestContext;

fn signin_response(rol: i32) -> Value {
    json!({
        "idusers": 8,
        "name": "bob",
        "phone": "5512345678",
        "email": "bob@comandas.mx",
        "rol": rol
    })
}

fn screen_with_credentials(tc: &TestContext) -> SignInScreen {
    let mut screen = SignInScreen::new(&tc.ctx);
    screen.form.name = "bob".to_owned();
    screen.form.password = "secreto".to_owned();
    screen
}

#[tokio::test(start_paused = true)]
async fn test_navigation_follows_role_map() {
    let cases = [
        (0, Route::Menu),
        (1, Route::OrdersView),
        (2, Route::ChefOrderView),
        (3, Route::Menu),
        (7, Route::Menu),
        (-1, Route::Menu),
    ];

    for (rol, expected) in cases {
        let tc = TestContext::new();
        tc.transport.respond("auth/signin", signin_response(rol));

        let mut screen = screen_with_credentials(&tc);
        let outcome = screen.submit().await;

        assert_eq!(outcome.navigate, Some(expected), "rol {rol}");
        assert_eq!(outcome.notice, None);
    }
}

#[tokio::test(start_paused = true)]
async fn test_session_is_persisted_under_user_key() {
    let tc = TestContext::new();
    tc.transport.respond("auth/signin", signin_response(1));

    let mut screen = screen_with_credentials(&tc);
    screen.submit().await;

    let stored = tc.store.get_item("user").expect("store is readable");
    assert_eq!(stored.expect("session was stored")["idusers"], 8);
    assert_eq!(tc.ctx.sessions().current().expect("session decodes").rol, 1);
}

#[tokio::test(start_paused = true)]
async fn test_cook_with_active_order_gets_dialog() {
    let tc = TestContext::new();
    let mut response = signin_response(2);
    response["actual_order"] = json!(17);
    tc.transport.respond("auth/signin", response);

    let mut screen = screen_with_credentials(&tc);
    let outcome = screen.submit().await;

    assert_eq!(outcome.navigate, Some(Route::ChefOrderView));
    assert_eq!(
        outcome.dialog,
        Some(DialogRequest::OrderDetail(OrderId::new(17)))
    );
}

#[tokio::test(start_paused = true)]
async fn test_cook_without_active_order_gets_no_dialog() {
    let tc = TestContext::new();
    tc.transport.respond("auth/signin", signin_response(2));

    let mut screen = screen_with_credentials(&tc);
    let outcome = screen.submit().await;

    assert_eq!(outcome.dialog, None);
}

#[tokio::test(start_paused = true)]
async fn test_active_order_is_ignored_for_other_roles() {
    let tc = TestContext::new();
    let mut response = signin_response(1);
    response["actual_order"] = json!(17);
    tc.transport.respond("auth/signin", response);

    let mut screen = screen_with_credentials(&tc);
    let outcome = screen.submit().await;

    assert_eq!(outcome.navigate, Some(Route::OrdersView));
    assert_eq!(outcome.dialog, None);
}

#[tokio::test(start_paused = true)]
async fn test_wrong_password_code_005() {
    let tc = TestContext::new();
    tc.transport
        .fail("auth/signin", Some("005"), "wrong password");

    let mut screen = screen_with_credentials(&tc);
    screen.form.password = "wrong".to_owned();
    let outcome = screen.submit().await;

    let notice = outcome.notice.expect("a notice is shown");
    assert_eq!(notice.title.as_deref(), Some("Contraseña incorrecta"));
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert_eq!(outcome.navigate, None);
    assert!(tc.ctx.sessions().current().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_unknown_user_code_004() {
    let tc = TestContext::new();
    tc.transport.fail("auth/signin", Some("004"), "no such user");

    let mut screen = screen_with_credentials(&tc);
    let outcome = screen.submit().await;

    let notice = outcome.notice.expect("a notice is shown");
    assert_eq!(notice.title.as_deref(), Some("Usuario incorrecto"));
    assert_eq!(notice.message, "No encontramos ese usuario.");
    assert_eq!(outcome.navigate, None);
}

#[tokio::test(start_paused = true)]
async fn test_unrecognized_codes_fall_back_to_generic() {
    for code in [None, Some("123")] {
        let tc = TestContext::new();
        tc.transport.fail("auth/signin", code, "rejected");

        let mut screen = screen_with_credentials(&tc);
        let outcome = screen.submit().await;

        let notice = outcome.notice.expect("a notice is shown");
        assert_eq!(notice.title.as_deref(), Some("Credenciales incorrectas"));
        assert_eq!(notice.message, "Revisa tu usuario y contraseña");
    }
}

#[tokio::test(start_paused = true)]
async fn test_invalid_form_issues_no_request() {
    let tc = TestContext::new();

    let mut screen = SignInScreen::new(&tc.ctx);
    screen.form.name = "bob".to_owned();
    // password left empty
    let outcome = screen.submit().await;

    assert_eq!(tc.transport.call_count(), 0);
    assert!(screen.touched);
    assert_eq!(outcome, Default::default());
}

#[tokio::test(start_paused = true)]
async fn test_loading_lasts_at_least_the_cosmetic_delay() {
    let tc = TestContext::new();
    tc.transport.respond("auth/signin", signin_response(0));

    let mut screen = screen_with_credentials(&tc);

    let started = tokio::time::Instant::now();
    screen.submit().await;
    let elapsed = started.elapsed();

    // The stub answers instantly; the delay keeps the spinner up anyway
    assert!(elapsed >= std::time::Duration::from_millis(1500), "{elapsed:?}");
    assert!(!screen.loading);
}

#[tokio::test(start_paused = true)]
async fn test_failure_also_waits_out_the_delay() {
    let tc = TestContext::new();
    tc.transport.fail("auth/signin", Some("005"), "wrong password");

    let mut screen = screen_with_credentials(&tc);

    let started = tokio::time::Instant::now();
    screen.submit().await;

    assert!(started.elapsed() >= std::time::Duration::from_millis(1500));
}

#[tokio::test(start_paused = true)]
async fn test_one_request_per_attempt() {
    let tc = TestContext::new();
    tc.transport.fail("auth/signin", Some("005"), "wrong password");

    let mut screen = screen_with_credentials(&tc);
    screen.submit().await;
    screen.submit().await;

    assert_eq!(tc.transport.calls_to("auth/signin").len(), 2);
}
