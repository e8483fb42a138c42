//! Create, get-one and list over HTTP.

use axum::body::Body;
use axum::http::StatusCode;
use serde_json::{Value, json};

use files_core::types::FileId;

use crate::helpers::{TestApp, encode, id_of};

#[tokio::test]
async fn test_create_text_file_at_root() {
    let app = TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request(
            "POST",
            "/files",
            Some(json!({"name": "a.txt", "type": "file", "data": encode(b"hi")})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let record = &response.body;
    assert_eq!(record["name"], "a.txt");
    assert_eq!(record["type"], "file");
    assert_eq!(record["isPublic"], false);
    assert_eq!(record["parentId"], 0);
    assert!(record["localPath"].is_string());
    assert!(record["userId"].is_string());
    assert_eq!(app.blob_count(), 1);

    let data = app
        .request("GET", &format!("/files/{}/data", id_of(record)), None, Some(&token))
        .await;
    assert_eq!(data.status, StatusCode::OK);
    assert_eq!(&data.bytes[..], b"hi");
    let content_type = data.headers["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/"), "{content_type}");
}

#[tokio::test]
async fn test_folder_writes_no_blob() {
    let app = TestApp::new().await;
    let token = app.login().await;

    for (name, data) in [("empty", None), ("with-data", Some(encode(b"ignored")))] {
        let mut body = json!({"name": name, "type": "folder", "isPublic": true});
        if let Some(data) = data {
            body["data"] = json!(data);
        }
        let response = app.request("POST", "/files", Some(body), Some(&token)).await;
        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.body["type"], "folder");
        assert_eq!(response.body["isPublic"], true);
        assert!(response.body.get("localPath").is_none());
    }

    assert_eq!(app.blob_count(), 0);
}

#[tokio::test]
async fn test_content_round_trips_exact_bytes() {
    let app = TestApp::new().await;
    let token = app.login().await;
    let payload: Vec<u8> = (0..=255).collect();

    let response = app
        .request(
            "POST",
            "/files",
            Some(json!({"name": "pixel.png", "type": "image", "data": encode(&payload)})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["type"], "image");

    let data = app
        .request("GET", &format!("/files/{}/data", id_of(&response.body)), None, Some(&token))
        .await;
    assert_eq!(data.status, StatusCode::OK);
    assert_eq!(data.bytes.to_vec(), payload);
    assert_eq!(data.headers["content-type"], "image/png");
}

#[tokio::test]
async fn test_create_validation_messages_in_order() {
    let app = TestApp::new().await;
    let token = app.login().await;

    let cases = [
        (json!({}), "Missing name"),
        (json!({"type": "file", "data": encode(b"x")}), "Missing name"),
        (json!({"name": "a"}), "Missing type"),
        (json!({"name": "a", "type": "video", "data": encode(b"x")}), "Missing type"),
        (json!({"name": "a", "type": "file"}), "Missing data"),
        (json!({"name": "a", "type": "image"}), "Missing data"),
        (
            json!({"name": "a", "type": "file", "data": encode(b"x"), "parentId": FileId::new().to_string()}),
            "Parent not found",
        ),
        (json!({"name": "a", "type": "file", "data": "%%%"}), "Invalid data"),
    ];

    for (body, message) in cases {
        let response = app.request("POST", "/files", Some(body.clone()), Some(&token)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(response.error(), message, "{body}");
    }

    assert_eq!(app.files.len().await, 0);
    assert_eq!(app.blob_count(), 0);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = TestApp::new().await;
    let token = app.login().await;

    let response = app
        .raw_request("POST", "/files", Body::from("{not json"), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Invalid JSON body");

    let empty = app.raw_request("POST", "/files", Body::empty(), Some(&token)).await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty.error(), "Missing name");
}

#[tokio::test]
async fn test_nested_create_requires_folder_parent() {
    let app = TestApp::new().await;
    let token = app.login().await;

    let sub = app.create_folder(&token, "sub", None).await;
    let sub_id = id_of(&sub);

    let response = app
        .request(
            "POST",
            "/files",
            Some(json!({"name": "b.txt", "type": "file", "data": encode(b"b"), "parentId": sub_id})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["parentId"], json!(sub_id));
    let file_id = id_of(&response.body);

    for body in [
        json!({"name": "c", "type": "folder", "parentId": file_id}),
        json!({"name": "c.txt", "type": "file", "data": encode(b"c"), "parentId": file_id, "isPublic": true}),
        json!({"name": "c.png", "type": "image", "data": encode(b"c"), "parentId": file_id}),
    ] {
        let response = app.request("POST", "/files", Some(body), Some(&token)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error(), "Parent is not a folder");
    }
}

#[tokio::test]
async fn test_root_parent_forms() {
    let app = TestApp::new().await;
    let token = app.login().await;

    for parent in [json!(0), json!("0"), Value::Null] {
        let response = app
            .request(
                "POST",
                "/files",
                Some(json!({"name": "top", "type": "folder", "parentId": parent})),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{parent}");
        assert_eq!(response.body["parentId"], 0);
    }
}

#[tokio::test]
async fn test_get_one_is_owner_scoped() {
    let app = TestApp::new().await;
    let owner = app.login().await;
    let other = app.login().await;
    let record = app.create_file(&owner, "a.txt", b"hi").await;
    let path = format!("/files/{}", id_of(&record));

    let own = app.request("GET", &path, None, Some(&owner)).await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(own.body, record);

    let foreign = app.request("GET", &path, None, Some(&other)).await;
    let missing = app
        .request("GET", &format!("/files/{}", FileId::new()), None, Some(&owner))
        .await;
    let garbage = app.request("GET", "/files/5f1e", None, Some(&owner)).await;

    for response in [&foreign, &missing, &garbage] {
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body, json!({"error": "Not found"}));
    }
}

#[tokio::test]
async fn test_list_is_scoped_to_owner_and_parent() {
    let app = TestApp::new().await;
    let token = app.login().await;
    let other = app.login().await;

    let sub = app.create_folder(&token, "sub", None).await;
    let sub_id = id_of(&sub);
    app.create_file(&token, "root.txt", b"r").await;
    app.create_folder(&token, "inner", Some(&sub_id)).await;
    app.create_file(&other, "foreign.txt", b"f").await;

    let root = app.request("GET", "/files", None, Some(&token)).await;
    assert_eq!(root.status, StatusCode::OK);
    let names: Vec<_> = root.body.as_array().unwrap().iter().map(|r| r["name"].clone()).collect();
    assert_eq!(names, [json!("sub"), json!("root.txt")]);

    let explicit = app.request("GET", "/files?parentId=0", None, Some(&token)).await;
    assert_eq!(explicit.body, root.body);

    let nested = app
        .request("GET", &format!("/files?parentId={sub_id}"), None, Some(&token))
        .await;
    let nested = nested.body.as_array().unwrap();
    assert_eq!(nested.len(), 1);
    assert_eq!(nested[0]["name"], "inner");

    let foreign = app
        .request("GET", &format!("/files?parentId={sub_id}"), None, Some(&other))
        .await;
    assert_eq!(foreign.body, json!([]));

    let garbage = app.request("GET", "/files?parentId=nope", None, Some(&token)).await;
    assert_eq!(garbage.status, StatusCode::OK);
    assert_eq!(garbage.body, json!([]));
}

#[tokio::test]
async fn test_list_with_empty_parent_lists_root() {
    let app = TestApp::new().await;
    let token = app.login().await;
    let top = app.create_folder(&token, "top", None).await;
    app.create_folder(&token, "inner", Some(&id_of(&top))).await;

    let absent = app.request("GET", "/files", None, Some(&token)).await;
    let empty = app.request("GET", "/files?parentId=", None, Some(&token)).await;
    let empty_page = app
        .request("GET", "/files?parentId=&page=", None, Some(&token))
        .await;

    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(absent.body, json!([top]));
    assert_eq!(empty.body, absent.body);
    assert_eq!(empty_page.body, absent.body);
}

#[tokio::test]
async fn test_list_pages_by_twenty() {
    let app = TestApp::new().await;
    let token = app.login().await;
    for i in 0..45 {
        app.create_folder(&token, &format!("f{i:02}"), None).await;
    }

    let mut seen = Vec::new();
    for (page, expected) in [(0, 20), (1, 20), (2, 5), (3, 0)] {
        let response = app
            .request("GET", &format!("/files?page={page}"), None, Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::OK);
        let records = response.body.as_array().unwrap();
        assert_eq!(records.len(), expected, "page {page}");
        seen.extend(records.iter().map(|r| r["name"].as_str().unwrap().to_string()));
    }

    let expected: Vec<_> = (0..45).map(|i| format!("f{i:02}")).collect();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn test_list_rejects_bad_page() {
    let app = TestApp::new().await;
    let token = app.login().await;

    for page in ["-1", "two"] {
        let response = app
            .request("GET", &format!("/files?page={page}"), None, Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error(), "Invalid page");
    }
}
