use foodgram_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::fixtures::logged_in_user;
use crate::common::http::Query;
use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::connection_info::{connection_with_invalid_token, connection_with_no_token, ConnectionInfo};
use crate::servers::api::v1::asserts::{
    assert_invalid_token, assert_not_authenticated, assert_ok_json, assert_token_not_valid, assert_unauthorized,
};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_authenticate_users_with_the_token_in_the_authorization_header() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (user, token) = logged_in_user(&env.foodgram);

    let response = Client::new(env.get_connection_info_for(&token)).me().await;

    let me: serde_json::Value = assert_ok_json(response).await;

    assert_eq!(me["id"], user.id);

    env.stop().await;
}

#[tokio::test]
async fn should_not_authenticate_requests_without_a_token_on_protected_endpoints() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(connection_with_no_token(&env.bind_address().to_string()))
        .me()
        .await;

    assert_not_authenticated(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_reject_unknown_tokens_even_on_public_endpoints() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(connection_with_invalid_token(&env.bind_address().to_string()));

    assert_invalid_token(client.me().await).await;
    assert_invalid_token(client.list_recipes(Query::default()).await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_the_admin_endpoints_without_a_valid_access_token() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let bind_address = env.bind_address().to_string();

    let response = Client::new(connection_with_no_token(&bind_address))
        .admin_recipe_stats("1")
        .await;

    assert_unauthorized(response).await;

    let response = Client::new(ConnectionInfo::admin(&bind_address, "not the access token"))
        .admin_recipe_stats("1")
        .await;

    assert_token_not_valid(response).await;

    env.stop().await;
}
