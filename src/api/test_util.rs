use axum::body;
use serde::de::DeserializeOwned;

/// Reads the whole response body and deserializes it, failing the test if either step fails
pub async fn deserialize_body<T: DeserializeOwned>(response_body: body::Body) -> T {
    let bytes = body::to_bytes(response_body, usize::MAX)
        .await
        .expect("Could not read data from response body!");

    serde_json::from_slice(&bytes).unwrap_or_else(|err| {
        panic!(
            "Could not parse body content into data structure! Error: {}, Received body: {:?}",
            err, bytes
        )
    })
}

/// Pulls the "error_code" out of a [BasicErrorResponse][crate::routing_utils::BasicErrorResponse] body
pub async fn error_code(response_body: body::Body) -> String {
    let error_body: serde_json::Value = deserialize_body(response_body).await;

    error_body["error_code"]
        .as_str()
        .unwrap_or_else(|| panic!("Response body had no error code: {error_body}"))
        .to_owned()
}
