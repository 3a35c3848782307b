use reqwest::{RequestBuilder, Response};
use serde::Serialize;

use crate::common::http::{Query, QueryParam, ReqwestQuery};
use crate::servers::api::connection_info::ConnectionInfo;

/// API Client
pub struct Client {
    connection_info: ConnectionInfo,
    base_path: String,
}

impl Client {
    pub fn new(connection_info: ConnectionInfo) -> Self {
        Self {
            connection_info,
            base_path: "/api/".to_string(),
        }
    }

    // Users

    pub async fn register_user<T: Serialize + ?Sized>(&self, form: &T) -> Response {
        self.post_form("users/", form).await
    }

    pub async fn list_users(&self, params: Query) -> Response {
        self.get("users/", params).await
    }

    pub async fn get_user(&self, id: &str) -> Response {
        self.get(&format!("users/{id}/"), Query::default()).await
    }

    pub async fn me(&self) -> Response {
        self.get("users/me/", Query::default()).await
    }

    pub async fn set_password<T: Serialize + ?Sized>(&self, form: &T) -> Response {
        self.post_form("users/set_password/", form).await
    }

    pub async fn subscriptions(&self, params: Query) -> Response {
        self.get("users/subscriptions/", params).await
    }

    pub async fn subscribe(&self, id: i64, params: Query) -> Response {
        self.send(self.request(reqwest::Method::POST, &format!("users/{id}/subscribe/"), params))
            .await
    }

    pub async fn unsubscribe(&self, id: i64) -> Response {
        self.delete(&format!("users/{id}/subscribe/")).await
    }

    // Auth token

    pub async fn login<T: Serialize + ?Sized>(&self, form: &T) -> Response {
        self.post_form("auth/token/login/", form).await
    }

    pub async fn logout(&self) -> Response {
        self.post_empty("auth/token/logout/").await
    }

    // Tags and ingredients

    pub async fn list_tags(&self) -> Response {
        self.get("tags/", Query::default()).await
    }

    pub async fn get_tag(&self, id: &str) -> Response {
        self.get(&format!("tags/{id}/"), Query::default()).await
    }

    pub async fn list_ingredients(&self, params: Query) -> Response {
        self.get("ingredients/", params).await
    }

    pub async fn get_ingredient(&self, id: &str) -> Response {
        self.get(&format!("ingredients/{id}/"), Query::default()).await
    }

    // Recipes

    pub async fn list_recipes(&self, params: Query) -> Response {
        self.get("recipes/", params).await
    }

    pub async fn get_recipe(&self, id: &str) -> Response {
        self.get(&format!("recipes/{id}/"), Query::default()).await
    }

    pub async fn create_recipe<T: Serialize + ?Sized>(&self, form: &T) -> Response {
        self.post_form("recipes/", form).await
    }

    pub async fn update_recipe<T: Serialize + ?Sized>(&self, id: i64, form: &T) -> Response {
        self.send(self.request(reqwest::Method::PATCH, &format!("recipes/{id}/"), Query::default()).json(form))
            .await
    }

    pub async fn replace_recipe<T: Serialize + ?Sized>(&self, id: i64, form: &T) -> Response {
        self.send(self.request(reqwest::Method::PUT, &format!("recipes/{id}/"), Query::default()).json(form))
            .await
    }

    pub async fn delete_recipe(&self, id: i64) -> Response {
        self.delete(&format!("recipes/{id}/")).await
    }

    pub async fn add_favorite(&self, id: i64) -> Response {
        self.post_empty(&format!("recipes/{id}/favorite/")).await
    }

    pub async fn remove_favorite(&self, id: i64) -> Response {
        self.delete(&format!("recipes/{id}/favorite/")).await
    }

    pub async fn add_to_shopping_cart(&self, id: i64) -> Response {
        self.post_empty(&format!("recipes/{id}/shopping_cart/")).await
    }

    pub async fn remove_from_shopping_cart(&self, id: i64) -> Response {
        self.delete(&format!("recipes/{id}/shopping_cart/")).await
    }

    pub async fn download_shopping_cart(&self) -> Response {
        self.get("recipes/download_shopping_cart/", Query::default()).await
    }

    // Admin

    pub async fn admin_create_tag<T: Serialize + ?Sized>(&self, form: &T) -> Response {
        self.post_form("admin/tags", form).await
    }

    pub async fn admin_delete_tag(&self, id: &str) -> Response {
        self.delete(&format!("admin/tags/{id}")).await
    }

    pub async fn admin_create_ingredient<T: Serialize + ?Sized>(&self, form: &T) -> Response {
        self.post_form("admin/ingredients", form).await
    }

    pub async fn admin_import_ingredients<T: Serialize + ?Sized>(&self, forms: &T) -> Response {
        self.post_form("admin/ingredients/import", forms).await
    }

    pub async fn admin_delete_ingredient(&self, id: &str) -> Response {
        self.delete(&format!("admin/ingredients/{id}")).await
    }

    pub async fn admin_delete_user(&self, id: &str) -> Response {
        self.delete(&format!("admin/users/{id}")).await
    }

    pub async fn admin_recipe_stats(&self, id: &str) -> Response {
        self.get(&format!("admin/recipes/{id}/stats"), Query::default()).await
    }

    // Generic requests

    pub async fn get(&self, path: &str, params: Query) -> Response {
        self.send(self.request(reqwest::Method::GET, path, params)).await
    }

    pub async fn post_empty(&self, path: &str) -> Response {
        self.send(self.request(reqwest::Method::POST, path, Query::default())).await
    }

    pub async fn post_form<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> Response {
        self.send(self.request(reqwest::Method::POST, path, Query::default()).json(form))
            .await
    }

    pub async fn delete(&self, path: &str) -> Response {
        self.send(self.request(reqwest::Method::DELETE, path, Query::default())).await
    }

    fn request(&self, method: reqwest::Method, path: &str, params: Query) -> RequestBuilder {
        let mut query = params;

        if let Some(token) = &self.connection_info.api_token {
            query.add_param(QueryParam::new("token", token));
        };

        let builder = reqwest::Client::new()
            .request(method, self.base_url(path))
            .query(&ReqwestQuery::from(query));

        match &self.connection_info.auth_token {
            Some(token) => builder.header("Authorization", format!("Token {token}")),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Response {
        builder.send().await.unwrap()
    }

    fn base_url(&self, path: &str) -> String {
        format!("http://{}{}{path}", &self.connection_info.bind_address, &self.base_path)
    }
}

pub async fn get(path: &str, query: Option<Query>) -> Response {
    match query {
        Some(params) => reqwest::Client::builder()
            .build()
            .unwrap()
            .get(path)
            .query(&ReqwestQuery::from(params))
            .send()
            .await
            .unwrap(),
        None => reqwest::Client::builder().build().unwrap().get(path).send().await.unwrap(),
    }
}
