//! User administration: create/edit/delete, the live-channel
//! connectivity gate, endpoint selection by password presence, and the
//! `usuarios` broadcast.

use serde_json::json;

use comandas_app::live::LiveChannel;
use comandas_app::navigator::Route;
use comandas_app::notice::NoticeLevel;
use comandas_app::provider::Method;
use comandas_app::screens::user_admin::{UserAdminMode, UserAdminScreen};
use comandas_core::UserId;
use comandas_integration_tests::TestContext;

fn create_screen(tc: &TestContext) -> UserAdminScreen {
    let mut screen = UserAdminScreen::new(&tc.ctx, UserAdminMode::Create);
    screen.form.name = "mario".to_owned();
    screen.form.email = "mario@comandas.mx".to_owned();
    screen.form.password = "secreto".to_owned();
    screen.form.rol = Some(1);
    screen
}

fn edit_screen(tc: &TestContext, id: i32) -> UserAdminScreen {
    let mut screen = UserAdminScreen::new(&tc.ctx, UserAdminMode::Edit(UserId::new(id)));
    screen.form.idusers = Some(UserId::new(id));
    screen.form.name = "mario".to_owned();
    screen.form.email = "mario@comandas.mx".to_owned();
    screen.form.phone = "5512345678".to_owned();
    screen.form.rol = Some(1);
    screen
}

#[tokio::test]
async fn test_disconnected_channel_refuses_create() {
    let tc = TestContext::new();
    tc.live.set_connected(false);

    let mut screen = create_screen(&tc);
    let outcome = screen.save().await;

    // The HTTP path is independent of the channel, but the gate comes first
    assert_eq!(tc.transport.call_count(), 0);
    let notice = outcome.notice.expect("a notice is shown");
    assert_eq!(notice.message, "No es posible crear el usuario");
    assert_eq!(outcome.navigate, None);
}

#[tokio::test]
async fn test_disconnected_channel_refuses_update() {
    let tc = TestContext::new();
    tc.live.set_connected(false);

    let mut screen = edit_screen(&tc, 4);
    let outcome = screen.save().await;

    assert_eq!(tc.transport.call_count(), 0);
    assert_eq!(
        outcome.notice.expect("a notice is shown").message,
        "No es posible actualizar el usuario"
    );
}

#[tokio::test]
async fn test_create_goes_through_signup_and_broadcasts() {
    let tc = TestContext::new();
    let ack = json!({"idusers": 31, "name": "mario", "rol": 1});
    tc.transport.respond("auth/signup", ack.clone());

    let mut subscription = tc.live.subscribe("usuarios");

    let mut screen = create_screen(&tc);
    let outcome = screen.save().await;

    let calls = tc.transport.calls_to("auth/signup");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, Method::Post);

    // Other admin clients see the acknowledged record verbatim
    assert_eq!(subscription.recv().await.expect("broadcast arrives"), ack);

    let notice = outcome.notice.expect("a notice is shown");
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.message, "Usuario Creado");
    assert_eq!(outcome.navigate, Some(Route::UserView));
    assert!(screen.form.name.is_empty(), "form resets after save");
}

#[tokio::test]
async fn test_edit_with_password_hits_the_password_endpoint() {
    let tc = TestContext::new();
    tc.transport.respond("user/updateUserAdm", json!({"idusers": 4}));

    let mut screen = edit_screen(&tc, 4);
    screen.form.password = "nueva-clave".to_owned();
    let outcome = screen.save().await;

    assert_eq!(tc.transport.calls_to("user/updateUserAdm").len(), 1);
    assert_eq!(tc.transport.calls_to("user/updateProfileAdm").len(), 0);

    let params = tc.transport.calls_to("user/updateUserAdm")[0]
        .params
        .clone()
        .expect("a body was sent");
    assert_eq!(params["password"], "nueva-clave");
    assert_eq!(params["rol"], 1);

    assert_eq!(
        outcome.notice.expect("a notice is shown").message,
        "Usuario Actualizado"
    );
}

#[tokio::test]
async fn test_edit_with_blank_password_keeps_it_untouched() {
    let tc = TestContext::new();
    tc.transport
        .respond("user/updateProfileAdm", json!({"idusers": 4}));

    let mut screen = edit_screen(&tc, 4);
    let outcome = screen.save().await;

    assert_eq!(tc.transport.calls_to("user/updateProfileAdm").len(), 1);
    assert_eq!(tc.transport.calls_to("user/updateUserAdm").len(), 0);

    let calls = tc.transport.calls_to("user/updateProfileAdm");
    assert_eq!(calls[0].method, Method::Put);
    let params = calls[0].params.clone().expect("a body was sent");
    assert!(params.get("password").is_none());
    assert_eq!(params["idusers"], 4);
    assert_eq!(params["name"], "mario");
    assert_eq!(params["phone"], "5512345678");
    assert_eq!(params["email"], "mario@comandas.mx");
    assert_eq!(params["rol"], 1);

    assert_eq!(outcome.navigate, Some(Route::UserView));
}

#[tokio::test]
async fn test_edit_load_prefills_and_blanks_password() {
    let tc = TestContext::new();
    tc.transport.respond(
        "user/viewUser",
        json!([{
            "idusers": 4,
            "name": "mario",
            "phone": "5512345678",
            "email": "mario@comandas.mx",
            "rol": 2
        }]),
    );

    let mut screen = UserAdminScreen::new(&tc.ctx, UserAdminMode::Edit(UserId::new(4)));
    screen.load().await.expect("record loads");

    assert_eq!(screen.form.idusers, Some(UserId::new(4)));
    assert_eq!(screen.form.name, "mario");
    assert_eq!(screen.form.rol, Some(2));
    assert!(screen.form.password.is_empty());

    let calls = tc.transport.calls_to("user/viewUser");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, Method::Get);
    assert_eq!(calls[0].params, Some(json!({"idusers": 4})));
}

#[tokio::test]
async fn test_delete_broadcasts_and_navigates() {
    let tc = TestContext::new();
    let ack = json!({"idusers": 4, "deleted": true});
    tc.transport.respond("user/deleteUser", ack.clone());

    let mut subscription = tc.live.subscribe("usuarios");

    let mut screen = edit_screen(&tc, 4);
    let outcome = screen.delete().await;

    let calls = tc.transport.calls_to("user/deleteUser");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, Method::Delete);
    assert_eq!(calls[0].params, Some(json!({"idusers": 4})));

    assert_eq!(subscription.recv().await.expect("broadcast arrives"), ack);
    assert_eq!(
        outcome.notice.expect("a notice is shown").message,
        "Usuario Eliminado"
    );
    assert_eq!(outcome.navigate, Some(Route::UserView));
}

#[tokio::test]
async fn test_delete_refused_while_disconnected() {
    let tc = TestContext::new();
    tc.live.set_connected(false);

    let mut screen = edit_screen(&tc, 4);
    let outcome = screen.delete().await;

    assert_eq!(tc.transport.call_count(), 0);
    assert_eq!(
        outcome.notice.expect("a notice is shown").message,
        "No es posible eliminar el usuario"
    );
}

#[tokio::test]
async fn test_invalid_form_refuses_before_the_backend() {
    let tc = TestContext::new();

    let mut screen = create_screen(&tc);
    screen.form.password = "abc".to_owned(); // below minimum
    let outcome = screen.save().await;

    assert_eq!(tc.transport.call_count(), 0);
    assert!(screen.touched);
    assert_eq!(
        outcome.notice.expect("a notice is shown").message,
        "No es posible crear el usuario"
    );
}

#[tokio::test]
async fn test_update_failure_keeps_the_screen() {
    let tc = TestContext::new();
    tc.transport.fail("user/updateProfileAdm", None, "boom");

    let mut screen = edit_screen(&tc, 4);
    let outcome = screen.save().await;

    assert_eq!(
        outcome.notice.expect("a notice is shown").message,
        "No es posible actualizar el usuario"
    );
    assert_eq!(outcome.navigate, None);
    // The form keeps its values for another attempt
    assert_eq!(screen.form.name, "mario");
}
