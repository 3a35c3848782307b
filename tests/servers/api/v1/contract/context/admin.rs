use foodgram::core::recipes::Collection;
use foodgram::servers::apis::v1::context::admin::resources::{Imported, Stats};
use foodgram::servers::apis::v1::context::ingredients::resources::Ingredient;
use foodgram::servers::apis::v1::context::tags::resources::Tag;
use foodgram_test_helpers::{configuration, random};
use serde_json::json;
use tracing::level_filters::LevelFilter;

use crate::common::fixtures::{ingredient, logged_in_user, recipe, tag};
use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::{assert_created, assert_field_errors, assert_not_found, assert_ok, assert_ok_json};
use crate::servers::api::v1::client::Client;
use crate::servers::api::{force_database_error, Started};

#[tokio::test]
async fn should_allow_creating_a_tag() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_admin_connection_info())
        .admin_create_tag(&json!({ "name": "Breakfast", "color": "#E26C2D", "slug": "breakfast" }))
        .await;

    let created: Tag = assert_created(response).await;

    assert_eq!(created.name, "Breakfast");
    assert_eq!(created.color, "#E26C2D");
    assert_eq!(created.slug, "breakfast");
    assert_eq!(env.foodgram.get_tag(created.id).unwrap().slug, "breakfast");

    env.stop().await;
}

#[tokio::test]
async fn should_report_the_invalid_fields_of_a_tag() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_admin_connection_info())
        .admin_create_tag(&json!({ "color": "orange", "slug": "not a slug" }))
        .await;

    assert_field_errors(response, &["name", "color", "slug"]).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_deleting_a_tag() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let breakfast = tag(&env.foodgram);

    let client = Client::new(env.get_admin_connection_info());

    assert_ok(client.admin_delete_tag(&breakfast.id.to_string()).await).await;

    assert!(env.foodgram.get_tag(breakfast.id).is_err());

    assert_not_found(client.admin_delete_tag(&breakfast.id.to_string()).await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_creating_an_ingredient() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_admin_connection_info());

    let created: Ingredient = assert_created(
        client
            .admin_create_ingredient(&json!({ "name": "flour", "measurement_unit": "g" }))
            .await,
    )
    .await;

    assert_eq!(created.name, "flour");
    assert_eq!(created.measurement_unit, "g");

    // The same ingredient with the same unit only once
    assert_field_errors(
        client
            .admin_create_ingredient(&json!({ "name": "flour", "measurement_unit": "g" }))
            .await,
        &["non_field_errors"],
    )
    .await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_importing_ingredients_skipping_the_existing_ones() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    ingredient(&env.foodgram, "salt", "g");

    let response = Client::new(env.get_admin_connection_info())
        .admin_import_ingredients(&json!([
            { "name": "salt", "measurement_unit": "g" },
            { "name": "sugar", "measurement_unit": "g" },
            { "name": "milk", "measurement_unit": "ml" },
            { "name": "milk", "measurement_unit": "ml" }
        ]))
        .await;

    let imported: Imported = assert_ok_json(response).await;

    assert_eq!(imported, Imported { imported: 2 });

    let names: Vec<String> = env
        .foodgram
        .list_ingredients(None)
        .unwrap()
        .into_iter()
        .map(|ingredient| ingredient.name)
        .collect();

    assert_eq!(names, vec!["milk", "salt", "sugar"]);

    env.stop().await;
}

#[tokio::test]
async fn should_not_import_anything_when_an_ingredient_is_not_valid() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_admin_connection_info())
        .admin_import_ingredients(&json!([
            { "name": "sugar", "measurement_unit": "g" },
            { "name": "milk" }
        ]))
        .await;

    assert_field_errors(response, &["ingredients[1]"]).await;

    assert!(env.foodgram.list_ingredients(None).unwrap().is_empty());

    env.stop().await;
}

#[tokio::test]
async fn should_allow_deleting_an_ingredient() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let salt = ingredient(&env.foodgram, "salt", "g");

    let client = Client::new(env.get_admin_connection_info());

    assert_ok(client.admin_delete_ingredient(&salt.id.to_string()).await).await;
    assert_not_found(client.admin_delete_ingredient(&salt.id.to_string()).await).await;
    assert_not_found(client.admin_delete_ingredient("salt").await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_deleting_a_user_with_their_recipes() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, _) = logged_in_user(&env.foodgram);
    let published = recipe(&env.foodgram, &author);

    let client = Client::new(env.get_admin_connection_info());

    assert_ok(client.admin_delete_user(&author.id.to_string()).await).await;

    assert!(env.foodgram.get_user(author.id).is_err());
    assert!(env.foodgram.get_recipe(published.id).is_err());

    assert_not_found(client.admin_delete_user(&author.id.to_string()).await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_getting_the_usage_counters_of_a_recipe() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, _) = logged_in_user(&env.foodgram);
    let published = recipe(&env.foodgram, &author);

    for _ in 0..2 {
        let (fan, _) = logged_in_user(&env.foodgram);
        env.foodgram
            .add_to_collection(&fan, Collection::Favorites, published.id)
            .unwrap();
    }

    let client = Client::new(env.get_admin_connection_info());

    let stats: Stats = assert_ok_json(client.admin_recipe_stats(&published.id.to_string()).await).await;

    assert_eq!(
        stats,
        Stats {
            id: published.id,
            name: published.name,
            favorites_count: 2,
        }
    );

    assert_not_found(client.admin_recipe_stats(&random::string(4)).await).await;
    assert_not_found(client.admin_recipe_stats("999").await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_getting_the_recipe_stats_when_the_database_is_unavailable() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    force_database_error(&env.foodgram);

    let response = Client::new(env.get_admin_connection_info()).admin_recipe_stats("1").await;

    assert_eq!(response.status(), 500);

    env.stop().await;
}
