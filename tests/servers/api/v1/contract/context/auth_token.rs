use foodgram::servers::apis::v1::context::auth_token::resources::AuthToken;
use foodgram_test_helpers::configuration;
use serde_json::json;
use tracing::level_filters::LevelFilter;

use crate::common::fixtures::{registration, PASSWORD};
use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::{
    assert_field_errors, assert_invalid_token, assert_no_content, assert_not_authenticated, assert_ok_json,
};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_allow_users_to_log_in_with_their_email_and_password() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let registration = registration();
    env.foodgram.register_user(&registration).unwrap();

    let response = Client::new(env.get_connection_info())
        .login(&json!({ "email": registration.email, "password": PASSWORD }))
        .await;

    let token: AuthToken = assert_ok_json(response).await;

    assert!(env.foodgram.authenticate(&token.auth_token).is_ok());

    env.stop().await;
}

#[tokio::test]
async fn should_return_the_same_token_until_the_user_logs_out() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let registration = registration();
    env.foodgram.register_user(&registration).unwrap();

    let client = Client::new(env.get_connection_info());
    let credentials = json!({ "email": registration.email, "password": PASSWORD });

    let first: AuthToken = assert_ok_json(client.login(&credentials).await).await;
    let second: AuthToken = assert_ok_json(client.login(&credentials).await).await;

    assert_eq!(first, second);

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_logging_in_with_a_wrong_password() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let registration = registration();
    env.foodgram.register_user(&registration).unwrap();

    let response = Client::new(env.get_connection_info())
        .login(&json!({ "email": registration.email, "password": "wrong password" }))
        .await;

    let errors = assert_field_errors(response, &["non_field_errors"]).await;

    assert_eq!(
        errors,
        json!({ "non_field_errors": ["Unable to log in with provided credentials."] })
    );

    env.stop().await;
}

#[tokio::test]
async fn should_require_the_email_and_the_password_to_log_in() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info()).login(&json!({})).await;

    assert_field_errors(response, &["email", "password"]).await;

    env.stop().await;
}

#[tokio::test]
async fn should_invalidate_the_token_when_the_user_logs_out() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let registration = registration();
    env.foodgram.register_user(&registration).unwrap();

    let token: AuthToken = assert_ok_json(
        Client::new(env.get_connection_info())
            .login(&json!({ "email": registration.email, "password": PASSWORD }))
            .await,
    )
    .await;

    let client = Client::new(env.get_connection_info_for(&token.auth_token));

    assert_no_content(client.logout().await).await;

    assert_invalid_token(client.me().await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_anonymous_users_to_log_out() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info()).logout().await;

    assert_not_authenticated(response).await;

    env.stop().await;
}
