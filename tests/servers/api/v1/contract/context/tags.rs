use foodgram::servers::apis::v1::context::tags::resources::Tag;
use foodgram_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::fixtures::tag;
use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::{assert_not_found, assert_ok_json};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_allow_listing_all_the_tags() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let breakfast = Tag::from(tag(&env.foodgram));
    let dinner = Tag::from(tag(&env.foodgram));

    let response = Client::new(env.get_connection_info()).list_tags().await;

    let tags: Vec<Tag> = assert_ok_json(response).await;

    assert_eq!(tags.len(), 2);
    assert!(tags.contains(&breakfast));
    assert!(tags.contains(&dinner));

    env.stop().await;
}

#[tokio::test]
async fn should_allow_getting_a_tag() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let breakfast = Tag::from(tag(&env.foodgram));

    let response = Client::new(env.get_connection_info())
        .get_tag(&breakfast.id.to_string())
        .await;

    assert_eq!(assert_ok_json::<Tag>(response).await, breakfast);

    env.stop().await;
}

#[tokio::test]
async fn should_return_not_found_for_unknown_tags() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    assert_not_found(client.get_tag("999").await).await;
    assert_not_found(client.get_tag("-1").await).await;

    env.stop().await;
}
