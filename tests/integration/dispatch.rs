//! Both API generations through one connected client, against a mock server.

use std::time::Duration;

use chrono::{TimeDelta, Utc};
use jamf_pro_api::classic::{Policy, PolicyGeneral};
use jamf_pro_api::client::{BearerToken, RequestMethod};
use jamf_pro_api::v1::Script;
use jamf_pro_api::{
    connect, refresh_if_expired, ApiGeneration, ClassicClient, ClientConfig, JamfClient,
    JamfCredentials, QueryParameters, Session, SortDirection, V1Client,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{expiry_in_minutes, init_tracing};

// "apiuser:s3cret"
const BASIC: &str = "Basic YXBpdXNlcjpzM2NyZXQ=";

async fn mount_token_endpoint(server: &MockServer, token: &str, calls: u64) {
    Mock::given(method("POST"))
        .and(path("/uapi/auth/tokens"))
        .and(header("Authorization", BASIC))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": token,
            "expires": expiry_in_minutes(30)
        })))
        .expect(calls)
        .mount(server)
        .await;
}

async fn connected(server: &MockServer) -> JamfClient {
    let credentials = JamfCredentials::new(server.uri(), "apiuser", "s3cret");
    connect(&credentials, ClientConfig::default())
        .await
        .expect("connect should succeed")
}

#[tokio::test]
async fn test_v1_list_after_connect() {
    init_tracing();
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "issued-token", 1).await;

    Mock::given(method("GET"))
        .and(path("/uapi/v1/scripts"))
        .and(query_param("page-size", "10"))
        .and(query_param("sort", "name:asc"))
        .and(header("Authorization", "Bearer issued-token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalCount": 1,
            "results": [{"id": "41", "name": "x"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let v1 = V1Client::new(connected(&server).await);
    let page = v1
        .list_scripts(
            &QueryParameters::new()
                .page_size(10)
                .sort("name", SortDirection::Asc),
        )
        .await
        .expect("list_scripts should succeed");

    assert_eq!(page.total_count, 1);
    assert_eq!(page.results[0].id.as_deref(), Some("41"));
}

#[tokio::test]
async fn test_one_session_serves_both_generations() {
    init_tracing();
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "issued-token", 1).await;

    Mock::given(method("POST"))
        .and(path("/JSSResource/policies/id/0"))
        .and(header("Authorization", BASIC))
        .and(header("Content-Type", "application/xml"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_raw(b"<policy><id>45</id></policy>".to_vec(), "text/xml"),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/uapi/v1/scripts"))
        .and(header("Authorization", "Bearer issued-token"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "54",
            "href": "https://example.jamfcloud.com/api/v1/scripts/54"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = connected(&server).await;
    let classic = ClassicClient::new(client.clone());
    let v1 = V1Client::new(client);

    let policy = Policy {
        general: Some(PolicyGeneral {
            name: Some("sample_policy".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let new_script = Script::named("test_script.sh");
    let (policy_id, script) = futures::join!(
        classic.create_policy(&policy),
        v1.create_script(&new_script)
    );

    assert_eq!(policy_id.expect("create_policy should succeed").id, 45);
    assert_eq!(script.expect("create_script should succeed").id, "54");
}

#[tokio::test]
async fn test_payload_of_wrong_generation_is_rejected_before_sending() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "issued-token", 1).await;
    let client = connected(&server).await;

    let err = client
        .build_request(
            ApiGeneration::Classic,
            RequestMethod::Post,
            &["scripts"],
            None,
            Some(&Script::named("x")),
        )
        .await
        .unwrap_err();

    assert!(err.is_configuration_error());
}

#[tokio::test]
async fn test_expired_token_is_refreshed_once_for_concurrent_callers() {
    init_tracing();
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "fresh-token", 1).await;

    Mock::given(method("GET"))
        .and(path("/uapi/v1/scripts/41"))
        .and(header("Authorization", "Bearer fresh-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "41", "name": "x"})),
        )
        .expect(4)
        .mount(&server)
        .await;

    let session = Session::new(server.uri())
        .unwrap()
        .with_classic_credential("YXBpdXNlcjpzM2NyZXQ=")
        .with_bearer_token(BearerToken::new(
            "stale-token",
            Utc::now() - TimeDelta::minutes(1),
        ));
    let client = JamfClient::new(session).unwrap();

    let calls = (0..4).map(|_| {
        let client = client.clone();
        async move {
            refresh_if_expired(&client).await?;
            V1Client::new(client).get_script("41").await
        }
    });
    for result in futures::future::join_all(calls).await {
        assert_eq!(result.expect("get_script should succeed").name.as_deref(), Some("x"));
    }

    let token = client.session().bearer_token().await.unwrap();
    assert_eq!(token.token(), "fresh-token");
}

#[tokio::test]
async fn test_rejected_bootstrap_fails_connect() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/uapi/auth/tokens"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let credentials = JamfCredentials::new(server.uri(), "apiuser", "wrong");
    let err = connect(&credentials, ClientConfig::default())
        .await
        .unwrap_err();

    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_caller_deadline_bounds_the_round_trip() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, "issued-token", 1).await;

    Mock::given(method("GET"))
        .and(path("/JSSResource/policies"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(b"<policies><size>0</size></policies>".to_vec(), "text/xml")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = connected(&server).await;
    let request = client
        .build_request::<Policy>(
            ApiGeneration::Classic,
            RequestMethod::Get,
            &["policies"],
            None,
            None,
        )
        .await
        .unwrap();

    let err = client
        .execute_within(&request, Duration::from_millis(200))
        .await
        .unwrap_err();

    assert!(err.is_timeout());
}
