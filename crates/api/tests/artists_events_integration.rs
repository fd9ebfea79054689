//! Integration tests for artist and event endpoints.
//!
//! Requires a running PostgreSQL instance at `TEST_DATABASE_URL`.

mod common;

use axum::http::{Method, StatusCode};
use common::{admin_token, json_request, parse_response_body, test_app, try_test_pool};
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_artist_lifecycle() {
    let Some(pool) = try_test_pool().await else { return };
    let app = test_app(pool);
    let token = admin_token();

    let name: String = Name().fake();
    let bio: String = Sentence(3..8).fake();
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/artists",
            Some(&token),
            Some(json!({
                "name": name,
                "instrument": "Violin",
                "country": "Austria",
                "bio": bio,
                "featured": true,
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let id = parse_response_body(response).await["id"].as_i64().unwrap();

    // Featured list includes it.
    let response = app
        .clone()
        .oneshot(json_request(Method::GET, "/artists/featured", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let featured = parse_response_body(response).await;
    assert!(featured
        .as_array()
        .unwrap()
        .iter()
        .any(|a| a["id"].as_i64() == Some(id)));

    // Partial update keeps the untouched fields.
    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/artists/{}", id),
            Some(&token),
            Some(json!({"instrument": "Viola", "featured": false})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_response_body(response).await["message"], "Updated");

    let response = app
        .clone()
        .oneshot(json_request(Method::GET, &format!("/artists/{}", id), None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let artist = parse_response_body(response).await;
    assert_eq!(artist["instrument"], "Viola");
    assert_eq!(artist["country"], "Austria");
    assert_eq!(artist["name"], name.as_str());
    assert_eq!(artist["featured"], false);
    assert!(artist["updatedAt"].is_string());

    let response = app
        .clone()
        .oneshot(json_request(
            Method::DELETE,
            &format!("/artists/{}", id),
            Some(&token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(json_request(Method::GET, &format!("/artists/{}", id), None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_unknown_artist_is_not_found() {
    let Some(pool) = try_test_pool().await else { return };
    let app = test_app(pool);

    let response = app
        .oneshot(json_request(
            Method::PUT,
            "/artists/2147483000",
            Some(&admin_token()),
            Some(json!({"name": "Ghost"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_events_split_into_upcoming_and_past() {
    let Some(pool) = try_test_pool().await else { return };
    let app = test_app(pool);
    let token = admin_token();

    let mut ids = Vec::new();
    for (title, upcoming) in [("Spring Gala", true), ("Winter Recital", false)] {
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/events",
                Some(&token),
                Some(json!({
                    "title": title,
                    "eventDate": "2025-04-12T19:30:00Z",
                    "location": "Main Hall",
                    "isUpcoming": upcoming,
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        ids.push(parse_response_body(response).await["id"].as_i64().unwrap());
    }

    let listed = |uri: &'static str| {
        let app = app.clone();
        async move {
            let response = app
                .oneshot(json_request(Method::GET, uri, None, None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            parse_response_body(response)
                .await
                .as_array()
                .unwrap()
                .iter()
                .filter_map(|e| e["id"].as_i64())
                .collect::<Vec<_>>()
        }
    };

    let upcoming = listed("/events/upcoming").await;
    let past = listed("/events/past").await;
    let all = listed("/events").await;

    assert!(upcoming.contains(&ids[0]) && !upcoming.contains(&ids[1]));
    assert!(past.contains(&ids[1]) && !past.contains(&ids[0]));
    assert!(all.contains(&ids[0]) && all.contains(&ids[1]));

    // Moving an event to the past.
    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/events/{}", ids[0]),
            Some(&token),
            Some(json!({"isUpcoming": false})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(json_request(Method::GET, &format!("/events/{}", ids[0]), None, None))
        .await
        .unwrap();
    let event = parse_response_body(response).await;
    assert_eq!(event["isUpcoming"], false);
    assert_eq!(event["title"], "Spring Gala");
    assert_eq!(event["location"], "Main Hall");

    for id in ids {
        let response = app
            .clone()
            .oneshot(json_request(
                Method::DELETE,
                &format!("/events/{}", id),
                Some(&token),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(parse_response_body(response).await["message"], "Deleted");
    }
}

#[tokio::test]
async fn test_event_requires_date() {
    let Some(pool) = try_test_pool().await else { return };
    let app = test_app(pool);

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/events",
            Some(&admin_token()),
            Some(json!({"title": "Undated"})),
        ))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}
