use reqwest::Response;
use serde::de::DeserializeOwned;

// Resource responses

/// It checks the status and the JSON content type, and returns the body.
pub async fn assert_json<T: DeserializeOwned>(response: Response, status: u16) -> T {
    let response_status = response.status();
    let response_headers = response.headers().get("content-type").cloned();
    let response_text = response.text().await.unwrap();

    let details = format!(
        r#"
   status: ´{response_status}´
  headers: ´{response_headers:?}´
     text: ´"{response_text}"´"#
    );

    assert_eq!(response_status, status, "details:{details}.");
    assert_eq!(
        response_headers.as_ref().map(|v| v.to_str().unwrap()),
        Some("application/json"),
        "\ndetails:{details}."
    );

    serde_json::from_str(&response_text).unwrap()
}

pub async fn assert_ok_json<T: DeserializeOwned>(response: Response) -> T {
    assert_json(response, 200).await
}

pub async fn assert_created<T: DeserializeOwned>(response: Response) -> T {
    assert_json(response, 201).await
}

// OK responses

pub async fn assert_ok(response: Response) {
    let response_status = response.status();
    let response_headers = response.headers().get("content-type").cloned().unwrap();
    let response_text = response.text().await.unwrap();

    let details = format!(
        r#"
   status: ´{response_status}´
  headers: ´{response_headers:?}´
     text: ´"{response_text}"´"#
    );

    assert_eq!(response_status, 200, "details:{details}.");
    assert_eq!(response_headers, "application/json", "\ndetails:{details}.");
    assert_eq!(response_text, "{\"status\":\"ok\"}", "\ndetails:{details}.");
}

pub async fn assert_no_content(response: Response) {
    assert_eq!(response.status(), 204);
    assert_eq!(response.text().await.unwrap(), "");
}

// Error responses

pub async fn assert_detail(response: Response, status: u16, detail: &str) {
    let body: serde_json::Value = assert_json(response, status).await;

    assert_eq!(body, serde_json::json!({ "detail": detail }));
}

pub async fn assert_not_found(response: Response) {
    assert_detail(response, 404, "Not found.").await;
}

pub async fn assert_not_authenticated(response: Response) {
    assert_eq!(response.headers().get("www-authenticate").unwrap(), "Token");
    assert_detail(response, 401, "Authentication credentials were not provided.").await;
}

pub async fn assert_invalid_token(response: Response) {
    assert_detail(response, 401, "Invalid token.").await;
}

pub async fn assert_permission_denied(response: Response) {
    assert_detail(response, 403, "You do not have permission to perform this action.").await;
}

/// It checks a `400` response with errors for the given fields.
pub async fn assert_field_errors(response: Response, fields: &[&str]) -> serde_json::Value {
    let body: serde_json::Value = assert_json(response, 400).await;

    for field in fields {
        assert!(body.get(field).is_some(), "missing errors for field `{field}` in {body}");
    }

    body
}

pub async fn assert_rejected(response: Response, reason: &str) {
    let body: serde_json::Value = assert_json(response, 400).await;

    assert_eq!(body, serde_json::json!({ "errors": reason }));
}

pub async fn assert_unhandled_rejection(response: Response, reason: &str) {
    assert_eq!(response.status(), 500);
    assert_eq!(response.headers().get("content-type").unwrap(), "text/plain; charset=utf-8");

    let reason_text = format!("Unhandled rejection: Err {{ reason: \"{reason}");

    let response_text = response.text().await.unwrap();

    assert!(
        response_text.contains(&reason_text),
        ":\n  response: `\"{response_text}\"`\n  does not contain: `\"{reason_text}\"`."
    );
}

pub async fn assert_unauthorized(response: Response) {
    assert_unhandled_rejection(response, "unauthorized").await;
}

pub async fn assert_token_not_valid(response: Response) {
    assert_unhandled_rejection(response, "token not valid").await;
}
