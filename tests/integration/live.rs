//! Tests against a real Jamf Pro server. Every object created is removed
//! again before the test ends.

use jamf_pro_api::classic::{Policy, PolicyGeneral, PolicyScope};
use jamf_pro_api::v1::{Script, ScriptPriority};
use jamf_pro_api::{
    connect, refresh_if_expired, ClassicClient, ClientConfig, QueryParameters, SortDirection,
    V1Client,
};

use super::common::get_credentials;

fn unique(prefix: &str) -> String {
    format!("{}_{}", prefix, chrono::Utc::now().timestamp_millis())
}

#[tokio::test]
#[ignore]
async fn test_live_token_refresh_is_noop_when_valid() {
    let client = connect(&get_credentials(), ClientConfig::default())
        .await
        .expect("connect should succeed");

    let before = client.session().bearer_token().await.unwrap();
    let after = refresh_if_expired(&client)
        .await
        .expect("refresh should succeed");
    assert_eq!(before.token(), after.token());
}

#[tokio::test]
#[ignore]
async fn test_live_script_lifecycle() {
    let client = connect(&get_credentials(), ClientConfig::default())
        .await
        .expect("connect should succeed");
    let v1 = V1Client::new(client);

    let name = unique("jamf_pro_api_script");
    let script = Script {
        priority: Some(ScriptPriority::After),
        script_contents: Some("#!/bin/bash\n\necho \"Trivial script.\"".to_string()),
        ..Script::named(name.as_str())
    };
    let created = v1.create_script(&script).await.expect("create should succeed");

    let fetched = v1.get_script(&created.id).await.expect("get should succeed");
    assert_eq!(fetched.name.as_deref(), Some(name.as_str()));

    let renamed = format!("{}_renamed", name);
    let updated = v1
        .update_script(&created.id, &Script::named(renamed.as_str()))
        .await
        .expect("update should succeed");
    assert_eq!(updated.name.as_deref(), Some(renamed.as_str()));

    let page = v1
        .list_scripts(
            &QueryParameters::new()
                .page_size(10)
                .sort("name", SortDirection::Asc)
                .filter(format!("name==\"{}\"", renamed)),
        )
        .await
        .expect("list should succeed");
    assert_eq!(page.total_count, 1);

    v1.delete_script(&created.id)
        .await
        .expect("delete should succeed");
    let err = v1.get_script(&created.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
#[ignore]
async fn test_live_policy_lifecycle() {
    let client = connect(&get_credentials(), ClientConfig::default())
        .await
        .expect("connect should succeed");
    let classic = ClassicClient::new(client);

    let name = unique("jamf_pro_api_policy");
    let policy = Policy {
        general: Some(PolicyGeneral {
            name: Some(name.clone()),
            enabled: Some(false),
            ..Default::default()
        }),
        scope: Some(PolicyScope {
            all_computers: Some(false),
            ..Default::default()
        }),
        ..Default::default()
    };
    let created = classic
        .create_policy(&policy)
        .await
        .expect("create should succeed");
    let id = created.id.to_string();

    let fetched = classic.get_policy(&id).await.expect("get should succeed");
    assert_eq!(
        fetched.general.and_then(|g| g.name).as_deref(),
        Some(name.as_str())
    );

    let list = classic.list_policies().await.expect("list should succeed");
    assert!(list.policies.iter().any(|p| p.id == Some(created.id)));

    classic
        .delete_policy(&id)
        .await
        .expect("delete should succeed");
}
