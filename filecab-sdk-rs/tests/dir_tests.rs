use axum::http::{Method, StatusCode};
use filecab_sdk_rs::prelude::*;
use filecab_types::error::ResponseError;
use serde_json::json;

use test_utils::MockApi;

fn dir_entry(id: &str, name: &str, parent: Option<&str>) -> serde_json::Value {
	let mut entry = json!({
		"id": id,
		"name": name,
		"dir": true,
		"mtime": "2024-05-01T10:30:00Z",
	});
	if let Some(parent) = parent {
		entry["parent"] = json!(parent);
	}
	entry
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn list_targets_root_without_id() {
	let api = MockApi::default();
	let client = UnauthClient::new(test_utils::spawn(api.clone()).await);

	api.push_response(
		StatusCode::OK,
		json!({
			"message": "directory retrieved",
			"data": [dir_entry("42", "docs", None)],
		})
		.to_string(),
	);
	let entries = list_dir(&client, None).await.unwrap();
	assert_eq!(entries.len(), 1);
	assert_eq!(entries[0].id, EntryId::from("42"));
	assert_eq!(entries[0].name, "docs");
	assert!(entries[0].dir);

	let requests = api.requests();
	assert_eq!(requests.len(), 1);
	assert_eq!(requests[0].method, Method::GET);
	assert_eq!(requests[0].path, "/api/v1/directories/");
	assert!(requests[0].body.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn list_targets_id_segment() {
	let api = MockApi::default();
	let client = UnauthClient::new(test_utils::spawn(api.clone()).await);

	api.push_response(
		StatusCode::OK,
		json!({"message": "directory retrieved", "data": []}).to_string(),
	);
	let entries = list_dir(&client, Some(&EntryId::from("42"))).await.unwrap();
	assert!(entries.is_empty());

	assert_eq!(api.requests()[0].path, "/api/v1/directories/42");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn create_posts_json_payload() {
	let api = MockApi::default();
	let client = UnauthClient::new(test_utils::spawn(api.clone()).await);

	api.push_response(
		StatusCode::CREATED,
		json!({
			"message": "directory created",
			"data": dir_entry("7", "pics", Some("42")),
		})
		.to_string(),
	);
	let dir = create_dir(&client, "pics", Some(&EntryId::from("42")))
		.await
		.unwrap();
	assert_eq!(dir.id, EntryId::from("7"));
	assert_eq!(dir.parent, Some(EntryId::from("42")));

	let requests = api.requests();
	assert_eq!(requests[0].method, Method::POST);
	assert_eq!(requests[0].path, "/api/v1/directories/");
	assert_eq!(
		requests[0].headers[axum::http::header::CONTENT_TYPE],
		"application/json"
	);
	let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
	assert_eq!(body, json!({"name": "pics", "parent": "42"}));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn create_without_parent_omits_field() {
	let api = MockApi::default();
	let client = UnauthClient::new(test_utils::spawn(api.clone()).await);

	api.push_response(
		StatusCode::CREATED,
		json!({"message": "directory created", "data": dir_entry("7", "pics", None)}).to_string(),
	);
	create_dir(&client, "pics", None).await.unwrap();

	let body: serde_json::Value = serde_json::from_slice(&api.requests()[0].body).unwrap();
	assert_eq!(body, json!({"name": "pics"}));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn rename_sends_exact_body() {
	let api = MockApi::default();
	let client = UnauthClient::new(test_utils::spawn(api.clone()).await);

	api.push_response(
		StatusCode::OK,
		json!({"message": "directory updated", "data": dir_entry("5", "Photos", None)}).to_string(),
	);
	let dir = rename_dir(&client, &EntryId::from("5"), "Photos")
		.await
		.unwrap();
	assert_eq!(dir.name, "Photos");

	let requests = api.requests();
	assert_eq!(requests[0].method, Method::PUT);
	assert_eq!(requests[0].path, "/api/v1/directories/5");
	assert_eq!(requests[0].body.as_ref(), br#"{"name":"Photos"}"#);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn rename_twice_issues_identical_requests() {
	let api = MockApi::default();
	let client = UnauthClient::new(test_utils::spawn(api.clone()).await);

	for _ in 0..2 {
		api.push_response(
			StatusCode::OK,
			json!({"message": "directory updated", "data": dir_entry("5", "Photos", None)})
				.to_string(),
		);
		rename_dir(&client, &EntryId::from("5"), "Photos")
			.await
			.unwrap();
	}

	let requests = api.requests();
	assert_eq!(requests.len(), 2);
	assert_eq!(requests[0].method, requests[1].method);
	assert_eq!(requests[0].path, requests[1].path);
	assert_eq!(requests[0].body, requests[1].body);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn delete_returns_confirmation_verbatim() {
	let api = MockApi::default();
	let client = UnauthClient::new(test_utils::spawn(api.clone()).await);

	api.push_response(
		StatusCode::OK,
		json!({"message": "directory deleted"}).to_string(),
	);
	let message = delete_dir(&client, &EntryId::from("5")).await.unwrap();
	assert_eq!(message, "directory deleted");

	let requests = api.requests();
	assert_eq!(requests[0].method, Method::DELETE);
	assert_eq!(requests[0].path, "/api/v1/directories/5");
	assert!(requests[0].body.is_empty());
}

// The client never looks at the status line, so a 404 confirmation body
// comes back exactly like a success.
#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn delete_error_body_is_returned_like_success() {
	let api = MockApi::default();
	let client = UnauthClient::new(test_utils::spawn(api.clone()).await);

	api.push_response(
		StatusCode::NOT_FOUND,
		json!({"message": "resource not found"}).to_string(),
	);
	let message = delete_dir(&client, &EntryId::from("5")).await.unwrap();
	assert_eq!(message, "resource not found");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn missing_data_surfaces_as_api_error() {
	let api = MockApi::default();
	let client = UnauthClient::new(test_utils::spawn(api.clone()).await);

	api.push_response(
		StatusCode::INTERNAL_SERVER_ERROR,
		json!({"message": "internal server error"}).to_string(),
	);
	match list_dir(&client, None).await.unwrap_err() {
		Error::Api { endpoint, source } => {
			assert_eq!(endpoint, "/api/v1/directories/");
			assert_eq!(
				source,
				ResponseError::ApiError {
					message: Some("internal server error".to_string()),
				}
			);
		}
		other => panic!("expected api error, got {other:?}"),
	}
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn malformed_body_surfaces_as_request_error() {
	let api = MockApi::default();
	let client = UnauthClient::new(test_utils::spawn(api.clone()).await);

	api.push_response(StatusCode::OK, "not json");
	let err = list_dir(&client, None).await.unwrap_err();
	assert!(matches!(err, Error::Request { .. }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn transport_failure_is_propagated() {
	// discard port, nothing listens there
	let client = UnauthClient::new("http://127.0.0.1:9");
	let err = list_dir(&client, None).await.unwrap_err();
	assert!(matches!(err, Error::Request { .. }));
}
