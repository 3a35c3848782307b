use foodgram::core::recipes::Collection;
use foodgram::servers::apis::v1::context::recipes::resources::{IngredientAmount, Recipe, RecipeMinified};
use foodgram::servers::apis::v1::context::tags::resources::Tag;
use foodgram::servers::apis::v1::pagination::Page;
use foodgram_test_helpers::configuration;
use serde_json::json;
use tracing::level_filters::LevelFilter;

use crate::common::fixtures::{ingredient, logged_in_user, recipe, recipe_form, tag, ONE_PIXEL_PNG};
use crate::common::http::{Query, QueryParam};
use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::{
    assert_created, assert_detail, assert_field_errors, assert_no_content, assert_not_authenticated, assert_not_found,
    assert_ok_json, assert_permission_denied,
};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_allow_publishing_a_recipe() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, token) = logged_in_user(&env.foodgram);
    let breakfast = tag(&env.foodgram);
    let egg = ingredient(&env.foodgram, "egg", "pcs");

    let response = Client::new(env.get_connection_info_for(&token))
        .create_recipe(&json!({
            "ingredients": [{"id": egg.id, "amount": 3}],
            "tags": [breakfast.id],
            "image": ONE_PIXEL_PNG,
            "name": "Omelette",
            "text": "Beat the eggs.",
            "cooking_time": 10
        }))
        .await;

    let created: Recipe = assert_created(response).await;

    assert_eq!(created.name, "Omelette");
    assert_eq!(created.author.id, author.id);
    assert_eq!(created.tags, vec![Tag::from(breakfast)]);
    assert_eq!(
        created.ingredients,
        vec![IngredientAmount {
            id: egg.id,
            name: "egg".to_string(),
            measurement_unit: "pcs".to_string(),
            amount: 3,
        }]
    );
    assert!(!created.is_favorited);
    assert!(!created.is_in_shopping_cart);
    assert!(created
        .image
        .starts_with(&format!("http://{}/media/recipes/images/", env.bind_address())));

    // The image is served
    let image = reqwest::get(&created.image).await.unwrap();
    assert_eq!(image.status(), 200);

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_anonymous_users_to_publish_recipes() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .create_recipe(&json!({ "name": "Omelette" }))
        .await;

    assert_not_authenticated(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_report_the_invalid_fields_of_a_recipe() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (_, token) = logged_in_user(&env.foodgram);

    let response = Client::new(env.get_connection_info_for(&token))
        .create_recipe(&json!({
            "ingredients": [],
            "tags": [999],
            "image": "not an image",
            "text": "Beat the eggs.",
            "cooking_time": 0
        }))
        .await;

    assert_field_errors(response, &["ingredients", "tags", "image", "name", "cooking_time"]).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_getting_a_recipe() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, _) = logged_in_user(&env.foodgram);
    let published = recipe(&env.foodgram, &author);

    let client = Client::new(env.get_connection_info());

    let found: Recipe = assert_ok_json(client.get_recipe(&published.id.to_string()).await).await;

    assert_eq!(found.id, published.id);
    assert_eq!(found.cooking_time, published.cooking_time);
    assert!(!found.author.is_subscribed);

    assert_not_found(client.get_recipe("999").await).await;
    assert_not_found(client.get_recipe("abc").await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_listing_the_recipes_paginated_by_page_number() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, _) = logged_in_user(&env.foodgram);
    for _ in 0..3 {
        recipe(&env.foodgram, &author);
    }

    let response = Client::new(env.get_connection_info())
        .list_recipes(Query::params(
            [QueryParam::new("page", "2"), QueryParam::new("limit", "1")].to_vec(),
        ))
        .await;

    let page: Page<Recipe> = assert_ok_json(response).await;

    let base = format!("http://{}/api/recipes", env.bind_address());

    assert_eq!(page.count, 3);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.next, Some(format!("{base}?limit=1&page=3")));
    assert_eq!(page.previous, Some(format!("{base}?limit=1")));

    env.stop().await;
}

#[tokio::test]
async fn should_allow_filtering_the_recipes_by_tags_and_author() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, _) = logged_in_user(&env.foodgram);
    let (other, _) = logged_in_user(&env.foodgram);

    let breakfast = tag(&env.foodgram);
    let dinner = tag(&env.foodgram);
    let lunch = tag(&env.foodgram);
    let egg = ingredient(&env.foodgram, "egg", "pcs");

    let omelette = env
        .foodgram
        .create_recipe(&author, &recipe_form("Omelette", &[&breakfast], &[(&egg, 2)]))
        .unwrap();
    let steak = env
        .foodgram
        .create_recipe(&other, &recipe_form("Steak", &[&dinner], &[(&egg, 1)]))
        .unwrap();
    env.foodgram
        .create_recipe(&other, &recipe_form("Salad", &[&lunch], &[(&egg, 1)]))
        .unwrap();

    let client = Client::new(env.get_connection_info());

    let page: Page<Recipe> = assert_ok_json(
        client
            .list_recipes(Query::params(
                [
                    QueryParam::new("tags", &breakfast.slug),
                    QueryParam::new("tags", &dinner.slug),
                ]
                .to_vec(),
            ))
            .await,
    )
    .await;

    let mut ids: Vec<i64> = page.results.iter().map(|recipe| recipe.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![omelette.id, steak.id]);

    let page: Page<Recipe> = assert_ok_json(
        client
            .list_recipes(Query::params([QueryParam::new("author", &author.id.to_string())].to_vec()))
            .await,
    )
    .await;

    assert_eq!(page.count, 1);
    assert_eq!(page.results[0].id, omelette.id);

    env.stop().await;
}

#[tokio::test]
async fn should_allow_filtering_the_recipes_in_the_collections_of_the_user() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, _) = logged_in_user(&env.foodgram);
    let favorite = recipe(&env.foodgram, &author);
    recipe(&env.foodgram, &author);

    let (user, token) = logged_in_user(&env.foodgram);
    env.foodgram
        .add_to_collection(&user, Collection::Favorites, favorite.id)
        .unwrap();

    let favorited = Query::params([QueryParam::new("is_favorited", "1")].to_vec());

    let page: Page<Recipe> = assert_ok_json(
        Client::new(env.get_connection_info_for(&token))
            .list_recipes(favorited)
            .await,
    )
    .await;

    assert_eq!(page.count, 1);
    assert_eq!(page.results[0].id, favorite.id);
    assert!(page.results[0].is_favorited);

    // Anonymous users have no favorites
    let page: Page<Recipe> = assert_ok_json(
        Client::new(env.get_connection_info())
            .list_recipes(Query::params([QueryParam::new("is_favorited", "1")].to_vec()))
            .await,
    )
    .await;

    assert_eq!(page.count, 0);

    // `0` does not filter
    let page: Page<Recipe> = assert_ok_json(
        Client::new(env.get_connection_info())
            .list_recipes(Query::params([QueryParam::new("is_favorited", "0")].to_vec()))
            .await,
    )
    .await;

    assert_eq!(page.count, 2);

    env.stop().await;
}

#[tokio::test]
async fn should_allow_the_author_to_change_a_recipe() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, token) = logged_in_user(&env.foodgram);
    let published = recipe(&env.foodgram, &author);
    let dinner = tag(&env.foodgram);

    let response = Client::new(env.get_connection_info_for(&token))
        .update_recipe(published.id, &json!({ "name": "Scrambled eggs", "tags": [dinner.id] }))
        .await;

    let updated: Recipe = assert_ok_json(response).await;

    assert_eq!(updated.name, "Scrambled eggs");
    assert_eq!(updated.text, published.text);
    assert_eq!(updated.tags, vec![Tag::from(dinner)]);
    assert_eq!(updated.ingredients.len(), 1);

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_other_users_to_change_or_delete_a_recipe() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, _) = logged_in_user(&env.foodgram);
    let published = recipe(&env.foodgram, &author);

    let (_, token) = logged_in_user(&env.foodgram);
    let client = Client::new(env.get_connection_info_for(&token));

    assert_permission_denied(client.update_recipe(published.id, &json!({ "name": "Mine now" })).await).await;
    assert_permission_denied(client.delete_recipe(published.id).await).await;

    assert_not_found(client.update_recipe(999, &json!({ "name": "Ghost" })).await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_the_author_to_delete_a_recipe() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, token) = logged_in_user(&env.foodgram);
    let published = recipe(&env.foodgram, &author);

    let response = Client::new(env.get_connection_info_for(&token))
        .delete_recipe(published.id)
        .await;

    assert_no_content(response).await;

    assert!(env.foodgram.get_recipe(published.id).is_err());

    env.stop().await;
}

#[tokio::test]
async fn adding_a_recipe_to_the_favorites_should_be_idempotent() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, _) = logged_in_user(&env.foodgram);
    let published = recipe(&env.foodgram, &author);

    let (user, token) = logged_in_user(&env.foodgram);
    let client = Client::new(env.get_connection_info_for(&token));

    let added: RecipeMinified = assert_created(client.add_favorite(published.id).await).await;

    assert_eq!(added.id, published.id);
    assert_eq!(added.name, published.name);

    let again: RecipeMinified = assert_ok_json(client.add_favorite(published.id).await).await;

    assert_eq!(again, added);
    assert_eq!(env.foodgram.collection_count(Collection::Favorites, published.id).unwrap(), 1);
    assert!(env
        .foodgram
        .is_in_collection(Some(&user), Collection::Favorites, published.id)
        .unwrap());

    assert_not_found(client.add_favorite(999).await).await;

    env.stop().await;
}

#[tokio::test]
async fn removing_a_recipe_from_the_favorites_should_be_idempotent() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, _) = logged_in_user(&env.foodgram);
    let published = recipe(&env.foodgram, &author);

    let (user, token) = logged_in_user(&env.foodgram);
    env.foodgram
        .add_to_collection(&user, Collection::Favorites, published.id)
        .unwrap();

    let client = Client::new(env.get_connection_info_for(&token));

    assert_no_content(client.remove_favorite(published.id).await).await;

    let not_there: RecipeMinified = assert_ok_json(client.remove_favorite(published.id).await).await;

    assert_eq!(not_there.id, published.id);

    env.stop().await;
}

#[tokio::test]
async fn should_allow_managing_the_shopping_cart() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, _) = logged_in_user(&env.foodgram);
    let published = recipe(&env.foodgram, &author);

    let (user, token) = logged_in_user(&env.foodgram);
    let client = Client::new(env.get_connection_info_for(&token));

    let _: RecipeMinified = assert_created(client.add_to_shopping_cart(published.id).await).await;

    let found: Recipe = assert_ok_json(client.get_recipe(&published.id.to_string()).await).await;
    assert!(found.is_in_shopping_cart);

    assert_no_content(client.remove_from_shopping_cart(published.id).await).await;

    assert!(!env
        .foodgram
        .is_in_collection(Some(&user), Collection::ShoppingCart, published.id)
        .unwrap());

    env.stop().await;
}

#[tokio::test]
async fn should_allow_downloading_the_shopping_list_as_a_pdf_document() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, _) = logged_in_user(&env.foodgram);
    let egg = ingredient(&env.foodgram, "egg", "pcs");
    let milk = ingredient(&env.foodgram, "milk", "ml");
    let breakfast = tag(&env.foodgram);

    let omelette = env
        .foodgram
        .create_recipe(&author, &recipe_form("Omelette", &[&breakfast], &[(&egg, 3), (&milk, 50)]))
        .unwrap();
    let pancakes = env
        .foodgram
        .create_recipe(&author, &recipe_form("Pancakes", &[&breakfast], &[(&egg, 2), (&milk, 200)]))
        .unwrap();

    let (user, token) = logged_in_user(&env.foodgram);
    env.foodgram
        .add_to_collection(&user, Collection::ShoppingCart, omelette.id)
        .unwrap();
    env.foodgram
        .add_to_collection(&user, Collection::ShoppingCart, pancakes.id)
        .unwrap();

    let response = Client::new(env.get_connection_info_for(&token))
        .download_shopping_cart()
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/pdf");
    assert_eq!(
        response.headers().get("content-disposition").unwrap(),
        "attachment; filename=\"shopping_list.pdf\""
    );

    let document = response.bytes().await.unwrap();

    assert!(document.starts_with(b"%PDF"));

    let items = env.foodgram.shopping_list(&user).unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!((items[0].name.as_str(), items[0].amount), ("egg", 5));
    assert_eq!((items[1].name.as_str(), items[1].amount), ("milk", 250));

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_anonymous_users_to_download_the_shopping_list() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info()).download_shopping_cart().await;

    assert_not_authenticated(response).await;

    env.stop().await;
}

fn page_count(document: &[u8]) -> usize {
    document
        .windows(6)
        .filter(|window| window.starts_with(b"/Page") && !window[5].is_ascii_alphabetic())
        .count()
}

#[tokio::test]
async fn should_allow_publishing_a_recipe_with_a_long_cooking_time_and_large_amounts() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (_, token) = logged_in_user(&env.foodgram);
    let holiday = tag(&env.foodgram);
    let flour = ingredient(&env.foodgram, "flour", "g");

    let response = Client::new(env.get_connection_info_for(&token))
        .create_recipe(&json!({
            "ingredients": [{"id": flour.id, "amount": 50000}],
            "tags": [holiday.id],
            "image": ONE_PIXEL_PNG,
            "name": "Aged ham",
            "text": "Wait.",
            "cooking_time": 40000
        }))
        .await;

    let created: Recipe = assert_created(response).await;

    assert_eq!(created.cooking_time, 40000);
    assert_eq!(created.ingredients[0].amount, 50000);

    env.stop().await;
}

#[tokio::test]
async fn should_reject_an_image_that_is_not_an_image() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (_, token) = logged_in_user(&env.foodgram);
    let breakfast = tag(&env.foodgram);
    let egg = ingredient(&env.foodgram, "egg", "pcs");

    let response = Client::new(env.get_connection_info_for(&token))
        .create_recipe(&json!({
            "ingredients": [{"id": egg.id, "amount": 3}],
            "tags": [breakfast.id],
            "image": "data:image/png;base64,aGVsbG8gd29ybGQ=",
            "name": "Omelette",
            "text": "Beat the eggs.",
            "cooking_time": 10
        }))
        .await;

    let errors = assert_field_errors(response, &["image"]).await;

    assert_eq!(
        errors["image"],
        json!(["Upload a valid image. The file you uploaded was either not an image or a corrupted image."])
    );

    env.stop().await;
}

#[tokio::test]
async fn should_return_not_found_for_a_page_that_does_not_exist() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, _) = logged_in_user(&env.foodgram);
    for _ in 0..3 {
        recipe(&env.foodgram, &author);
    }

    let client = Client::new(env.get_connection_info());

    let response = client
        .list_recipes(Query::params(
            [QueryParam::new("page", "5"), QueryParam::new("limit", "1")].to_vec(),
        ))
        .await;

    assert_detail(response, 404, "Invalid page.").await;

    let response = client
        .list_recipes(Query::params([QueryParam::new("page", "abc")].to_vec()))
        .await;

    assert_detail(response, 404, "Invalid page.").await;

    env.stop().await;
}

#[tokio::test]
async fn the_page_links_should_keep_the_filters() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, _) = logged_in_user(&env.foodgram);
    let breakfast = tag(&env.foodgram);
    let dinner = tag(&env.foodgram);
    let egg = ingredient(&env.foodgram, "egg", "pcs");

    env.foodgram
        .create_recipe(&author, &recipe_form("Omelette", &[&breakfast], &[(&egg, 2)]))
        .unwrap();
    env.foodgram
        .create_recipe(&author, &recipe_form("Steak", &[&dinner], &[(&egg, 1)]))
        .unwrap();

    let response = Client::new(env.get_connection_info())
        .list_recipes(Query::params(
            [
                QueryParam::new("tags", &breakfast.slug),
                QueryParam::new("tags", &dinner.slug),
                QueryParam::new("limit", "1"),
            ]
            .to_vec(),
        ))
        .await;

    let page: Page<Recipe> = assert_ok_json(response).await;

    let base = format!("http://{}/api/recipes", env.bind_address());

    assert_eq!(page.count, 2);
    assert_eq!(
        page.next,
        Some(format!("{base}?tags={}&tags={}&limit=1&page=2", breakfast.slug, dinner.slug))
    );
    assert_eq!(page.previous, None);

    env.stop().await;
}

#[tokio::test]
async fn changing_the_image_of_a_recipe_should_remove_the_old_file() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, token) = logged_in_user(&env.foodgram);
    let published = recipe(&env.foodgram, &author);

    let old_file = env.foodgram.media().root().join(&published.image);
    assert!(old_file.exists());

    let response = Client::new(env.get_connection_info_for(&token))
        .update_recipe(published.id, &json!({ "image": ONE_PIXEL_PNG }))
        .await;

    let updated: Recipe = assert_ok_json(response).await;

    let changed = env.foodgram.get_recipe(published.id).unwrap();

    assert_ne!(changed.image, published.image);
    assert!(updated.image.ends_with(&changed.image));
    assert!(env.foodgram.media().root().join(&changed.image).exists());
    assert!(!old_file.exists());

    env.stop().await;
}

#[tokio::test]
async fn sending_back_the_current_image_url_should_keep_the_image() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, token) = logged_in_user(&env.foodgram);
    let published = recipe(&env.foodgram, &author);

    let client = Client::new(env.get_connection_info_for(&token));

    let found: Recipe = assert_ok_json(client.get_recipe(&published.id.to_string()).await).await;

    let updated: Recipe = assert_ok_json(
        client
            .update_recipe(published.id, &json!({ "name": "Scrambled eggs", "image": found.image }))
            .await,
    )
    .await;

    assert_eq!(updated.image, found.image);
    assert_eq!(env.foodgram.get_recipe(published.id).unwrap().image, published.image);
    assert!(env.foodgram.media().root().join(&published.image).exists());

    env.stop().await;
}

#[tokio::test]
async fn replacing_a_recipe_should_need_every_field() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, token) = logged_in_user(&env.foodgram);
    let published = recipe(&env.foodgram, &author);
    let dinner = tag(&env.foodgram);
    let beef = ingredient(&env.foodgram, "beef", "g");

    let client = Client::new(env.get_connection_info_for(&token));

    let response = client
        .replace_recipe(published.id, &json!({ "name": "Steak" }))
        .await;

    assert_field_errors(response, &["text", "cooking_time", "tags", "ingredients"]).await;

    let found: Recipe = assert_ok_json(client.get_recipe(&published.id.to_string()).await).await;

    let response = client
        .replace_recipe(
            published.id,
            &json!({
                "ingredients": [{"id": beef.id, "amount": 300}],
                "tags": [dinner.id],
                "image": found.image,
                "name": "Steak",
                "text": "Grill it.",
                "cooking_time": 15
            }),
        )
        .await;

    let replaced: Recipe = assert_ok_json(response).await;

    assert_eq!(replaced.name, "Steak");
    assert_eq!(replaced.cooking_time, 15);
    assert_eq!(replaced.tags, vec![Tag::from(dinner)]);
    assert_eq!(replaced.ingredients.len(), 1);
    assert_eq!(replaced.ingredients[0].id, beef.id);

    env.stop().await;
}

#[tokio::test]
async fn a_long_shopping_list_should_span_several_pages_and_embed_the_font() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (author, _) = logged_in_user(&env.foodgram);
    let holiday = tag(&env.foodgram);

    let ingredients: Vec<_> = (1..=30)
        .map(|i| ingredient(&env.foodgram, &format!("мука {i}"), "г"))
        .collect();
    let amounts: Vec<_> = ingredients.iter().map(|ingredient| (ingredient, 100)).collect();

    let feast = env
        .foodgram
        .create_recipe(&author, &recipe_form("Пир", &[&holiday], &amounts))
        .unwrap();

    let (user, token) = logged_in_user(&env.foodgram);
    env.foodgram
        .add_to_collection(&user, Collection::ShoppingCart, feast.id)
        .unwrap();

    let response = Client::new(env.get_connection_info_for(&token))
        .download_shopping_cart()
        .await;

    assert_eq!(response.status(), 200);

    let document = response.bytes().await.unwrap();

    assert!(page_count(&document) > 1);
    assert!(document.windows(10).any(|window| window == b"/FontFile2"));

    env.stop().await;
}
