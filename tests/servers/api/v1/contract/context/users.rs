use foodgram::core::users::Credentials;
use foodgram::servers::apis::v1::context::users::resources::{Author, CreatedUser, User};
use foodgram::servers::apis::v1::pagination::Page;
use foodgram_test_helpers::{configuration, random};
use serde_json::json;
use tracing::level_filters::LevelFilter;

use crate::common::fixtures::{logged_in_user, recipe, PASSWORD};
use crate::common::http::{Query, QueryParam};
use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::{
    assert_created, assert_field_errors, assert_no_content, assert_not_authenticated, assert_not_found, assert_ok_json,
    assert_rejected, assert_unhandled_rejection,
};
use crate::servers::api::v1::client::{self, Client};
use crate::servers::api::{force_database_error, Started};

#[tokio::test]
async fn should_allow_registering_a_new_user() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let email = random::email();
    let username = random::username();

    let response = Client::new(env.get_connection_info())
        .register_user(&json!({
            "email": email,
            "username": username,
            "first_name": "Vasya",
            "last_name": "Pupkin",
            "password": PASSWORD
        }))
        .await;

    let created: CreatedUser = assert_created(response).await;

    assert_eq!(created.email, email);
    assert_eq!(created.username, username);
    assert!(env
        .foodgram
        .login(&Credentials {
            email: Some(email),
            password: Some(PASSWORD.to_string()),
        })
        .is_ok());

    env.stop().await;
}

#[tokio::test]
async fn should_report_the_invalid_fields_when_registering() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .register_user(&json!({
            "email": "not an email",
            "username": "me",
            "first_name": "Vasya"
        }))
        .await;

    assert_field_errors(response, &["email", "username", "last_name", "password"]).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_registering_an_email_twice() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (user, _) = logged_in_user(&env.foodgram);

    let response = Client::new(env.get_connection_info())
        .register_user(&json!({
            "email": user.email,
            "username": random::username(),
            "first_name": "Vasya",
            "last_name": "Pupkin",
            "password": PASSWORD
        }))
        .await;

    let errors = assert_field_errors(response, &["email"]).await;

    assert_eq!(errors["email"], json!(["A user with that email already exists."]));

    env.stop().await;
}

#[tokio::test]
async fn should_allow_getting_the_users_paginated_with_limit_and_offset() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    for _ in 0..3 {
        logged_in_user(&env.foodgram);
    }

    let response = Client::new(env.get_connection_info())
        .list_users(Query::params(
            [QueryParam::new("limit", "1"), QueryParam::new("offset", "1")].to_vec(),
        ))
        .await;

    let page: Page<User> = assert_ok_json(response).await;

    let base = format!("http://{}/api/users", env.bind_address());

    assert_eq!(page.count, 3);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.next, Some(format!("{base}?limit=1&offset=2")));
    assert_eq!(page.previous, Some(format!("{base}?limit=1")));
    assert!(!page.results[0].is_subscribed);

    env.stop().await;
}

#[tokio::test]
async fn should_decode_the_pagination_params() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    for _ in 0..3 {
        logged_in_user(&env.foodgram);
    }

    let base = format!("http://{}/api/users", env.bind_address());

    // `%31` is `1`
    let response = client::get(&format!("{base}/?%6Cimit=1&offset=%31"), None).await;

    let page: Page<User> = assert_ok_json(response).await;

    assert_eq!(page.count, 3);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.next, Some(format!("{base}?limit=1&offset=2")));
    assert_eq!(page.previous, Some(format!("{base}?limit=1")));

    env.stop().await;
}

#[tokio::test]
async fn should_allow_getting_a_user_profile() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (user, _) = logged_in_user(&env.foodgram);

    let response = Client::new(env.get_connection_info()).get_user(&user.id.to_string()).await;

    let profile: User = assert_ok_json(response).await;

    assert_eq!(
        profile,
        User {
            email: user.email,
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            is_subscribed: false,
        }
    );

    env.stop().await;
}

#[tokio::test]
async fn should_return_not_found_for_unknown_or_invalid_user_ids() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    assert_not_found(client.get_user("999").await).await;
    assert_not_found(client.get_user("abc").await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_getting_the_current_user() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (user, token) = logged_in_user(&env.foodgram);

    let me: User = assert_ok_json(Client::new(env.get_connection_info_for(&token)).me().await).await;

    assert_eq!(me.id, user.id);
    assert!(!me.is_subscribed);

    assert_not_authenticated(Client::new(env.get_connection_info()).me().await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_changing_the_password() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (user, token) = logged_in_user(&env.foodgram);

    let response = Client::new(env.get_connection_info_for(&token))
        .set_password(&json!({ "new_password": "NewPassword456", "current_password": PASSWORD }))
        .await;

    assert_no_content(response).await;

    assert!(env
        .foodgram
        .login(&Credentials {
            email: Some(user.email),
            password: Some("NewPassword456".to_string()),
        })
        .is_ok());

    env.stop().await;
}

#[tokio::test]
async fn should_not_change_the_password_with_a_wrong_current_password() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (_, token) = logged_in_user(&env.foodgram);

    let response = Client::new(env.get_connection_info_for(&token))
        .set_password(&json!({ "new_password": "NewPassword456", "current_password": "wrong" }))
        .await;

    let errors = assert_field_errors(response, &["current_password"]).await;

    assert_eq!(errors["current_password"], json!(["Invalid current password"]));

    env.stop().await;
}

#[tokio::test]
async fn should_allow_subscribing_to_an_author() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, _) = logged_in_user(&env.foodgram);
    recipe(&env.foodgram, &author);
    recipe(&env.foodgram, &author);

    let (_, token) = logged_in_user(&env.foodgram);

    let response = Client::new(env.get_connection_info_for(&token))
        .subscribe(author.id, Query::params([QueryParam::new("recipes_limit", "1")].to_vec()))
        .await;

    let subscribed: Author = assert_created(response).await;

    assert_eq!(subscribed.user.id, author.id);
    assert!(subscribed.user.is_subscribed);
    assert_eq!(subscribed.recipes.len(), 1);
    assert_eq!(subscribed.recipes_count, 2);
    assert!(subscribed.recipes[0]
        .image
        .starts_with(&format!("http://{}/media/recipes/images/", env.bind_address())));

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_subscribing_twice_or_to_yourself() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, _) = logged_in_user(&env.foodgram);
    let (user, token) = logged_in_user(&env.foodgram);

    let client = Client::new(env.get_connection_info_for(&token));

    let _: Author = assert_created(client.subscribe(author.id, Query::default()).await).await;

    assert_rejected(
        client.subscribe(author.id, Query::default()).await,
        "You are already subscribed to this author.",
    )
    .await;

    assert_rejected(
        client.subscribe(user.id, Query::default()).await,
        "You cannot subscribe to yourself.",
    )
    .await;

    assert_not_found(client.subscribe(999, Query::default()).await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_unsubscribing_from_an_author() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, _) = logged_in_user(&env.foodgram);
    let (user, token) = logged_in_user(&env.foodgram);

    env.foodgram.subscribe(&user, author.id).unwrap();

    let client = Client::new(env.get_connection_info_for(&token));

    assert_no_content(client.unsubscribe(author.id).await).await;

    assert!(!env.foodgram.is_subscribed(Some(&user), author.id).unwrap());

    assert_rejected(
        client.unsubscribe(author.id).await,
        "You are not subscribed to this author.",
    )
    .await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_listing_the_subscriptions() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, _) = logged_in_user(&env.foodgram);
    recipe(&env.foodgram, &author);

    let (user, token) = logged_in_user(&env.foodgram);
    env.foodgram.subscribe(&user, author.id).unwrap();

    let response = Client::new(env.get_connection_info_for(&token))
        .subscriptions(Query::default())
        .await;

    let page: Page<Author> = assert_ok_json(response).await;

    assert_eq!(page.count, 1);
    assert_eq!(page.next, None);
    assert_eq!(page.results[0].user.id, author.id);
    assert!(page.results[0].user.is_subscribed);
    assert_eq!(page.results[0].recipes_count, 1);

    env.stop().await;
}

#[tokio::test]
async fn should_fail_when_the_database_is_not_available() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    force_database_error(&env.foodgram);

    let response = Client::new(env.get_connection_info()).list_users(Query::default()).await;

    assert_unhandled_rejection(response, "").await;

    env.stop().await;
}
