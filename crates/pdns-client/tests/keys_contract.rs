//! Contract Test: Keys and Metadata
//!
//! Verifies the DNSSEC cryptokey, TSIG key and zone metadata endpoints.

mod common;

use common::*;
use pdns_client::models::{MetadataKind, TsigKey};
use reqwest::Method;
use serde_json::json;

fn cryptokey(id: u64, active: bool) -> serde_json::Value {
    json!({
        "type": "Cryptokey",
        "id": id,
        "keytype": "csk",
        "active": active,
        "published": true,
        "dnskey": "257 3 13 thisIsTheKey",
        "ds": ["997 13 1 foo", "997 13 2 foo"],
        "algorithm": "ECDSAP256SHA256",
        "bits": 256
    })
}

#[tokio::test]
async fn list_and_get_cryptokeys() {
    let transport = MockTransport::new();
    transport.respond(MockResponse::json(200, json!([cryptokey(11, true)])));
    transport.respond(MockResponse::json(200, cryptokey(11, true)));
    let client = test_client(&transport);

    let keys = client.cryptokeys().list("example.com").await.unwrap();
    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0].id, Some(11));
    assert_eq!(keys[0].ds.len(), 2);

    let key = client.cryptokeys().get("example.com", 11).await.unwrap();
    assert_eq!(key.algorithm.as_deref(), Some("ECDSAP256SHA256"));

    let requests = transport.requests();
    assert_eq!(requests[0].path(), api_path("zones/example.com./cryptokeys"));
    assert_eq!(requests[1].path(), api_path("zones/example.com./cryptokeys/11"));
}

#[tokio::test]
async fn toggle_cryptokey_activation() {
    let transport = MockTransport::new();
    let client = test_client(&transport);

    client.cryptokeys().deactivate("example.com", 11).await.unwrap();
    client.cryptokeys().activate("example.com.", 11).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::PUT);
    assert_eq!(requests[0].path(), api_path("zones/example.com./cryptokeys/11"));
    assert_eq!(requests[0].json(), json!({"active": false}));
    assert_eq!(requests[1].json(), json!({"active": true}));
}

#[tokio::test]
async fn delete_cryptokey() {
    let transport = MockTransport::new();
    let client = test_client(&transport);

    client.cryptokeys().delete("example.com", 11).await.unwrap();

    let sent = transport.last_request();
    assert_eq!(sent.method, Method::DELETE);
    assert_eq!(sent.path(), api_path("zones/example.com./cryptokeys/11"));
}

#[tokio::test]
async fn tsig_key_lifecycle() {
    let transport = MockTransport::new();
    let created = json!({
        "name": "examplekey",
        "id": "examplekey.",
        "algorithm": "hmac-sha256",
        "key": "ruTjBX2Jw/2BlE//5255fmKHaSRvLvp6p+YyDDAXThnBN/1Mz/VwMw+HQJVtkpDsAXvpPuNNZhucdKmhiOS4Tg==",
        "type": "TSIGKey"
    });
    transport.respond(MockResponse::json(201, created.clone()));
    transport.respond(MockResponse::json(200, json!([{"name": "examplekey", "id": "examplekey.", "algorithm": "hmac-sha256", "key": "", "type": "TSIGKey"}])));
    transport.respond(MockResponse::json(200, created));
    transport.respond(MockResponse::json(200, json!({"name": "examplekey", "id": "examplekey.", "algorithm": "hmac-sha512", "type": "TSIGKey"})));
    transport.respond(MockResponse::empty(204));
    let client = test_client(&transport);

    let key = client.tsig_keys().create("examplekey", "hmac-sha256", "").await.unwrap();
    assert_eq!(key.id.as_deref(), Some("examplekey."));
    assert!(!key.key.unwrap().is_empty());

    let keys = client.tsig_keys().list().await.unwrap();
    assert_eq!(keys.len(), 1);

    let fetched = client.tsig_keys().get("examplekey.").await.unwrap();
    assert_eq!(fetched.algorithm.as_deref(), Some("hmac-sha256"));

    let change = TsigKey {
        algorithm: Some("hmac-sha512".to_string()),
        ..TsigKey::default()
    };
    let changed = client.tsig_keys().change("examplekey.", &change).await.unwrap();
    assert_eq!(changed.algorithm.as_deref(), Some("hmac-sha512"));

    client.tsig_keys().delete("examplekey.").await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].path(), api_path("tsigkeys"));
    assert_eq!(
        requests[0].json(),
        json!({"name": "examplekey", "algorithm": "hmac-sha256", "key": ""})
    );
    assert_eq!(requests[1].method, Method::GET);
    assert_eq!(requests[2].path(), api_path("tsigkeys/examplekey."));
    assert_eq!(requests[3].method, Method::PUT);
    assert_eq!(requests[3].json(), json!({"algorithm": "hmac-sha512"}));
    assert_eq!(requests[4].method, Method::DELETE);
    assert_eq!(requests[4].path(), api_path("tsigkeys/examplekey."));
}

#[tokio::test]
async fn metadata_lifecycle() {
    let transport = MockTransport::new();
    transport.respond(MockResponse::json(201, json!({"kind": "ALLOW-AXFR-FROM", "metadata": ["192.168.0.1"]})));
    transport.respond(MockResponse::json(200, json!([
        {"kind": "ALLOW-AXFR-FROM", "metadata": ["192.168.0.1"]},
        {"kind": "X-CUSTOM", "metadata": ["on"]}
    ])));
    transport.respond(MockResponse::json(200, json!({"kind": "ALLOW-AXFR-FROM", "metadata": ["192.168.0.1"]})));
    transport.respond(MockResponse::json(200, json!({"kind": "ALLOW-AXFR-FROM", "metadata": ["10.0.0.0/8"]})));
    transport.respond(MockResponse::empty(204));
    let client = test_client(&transport);

    let created = client
        .metadata()
        .create("example.com", MetadataKind::AllowAxfrFrom, ["192.168.0.1"])
        .await
        .unwrap();
    assert_eq!(created.kind, Some(MetadataKind::AllowAxfrFrom));

    let all = client.metadata().list("example.com").await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].kind, Some(MetadataKind::Other("X-CUSTOM".to_string())));

    let one = client.metadata().get("example.com", &MetadataKind::AllowAxfrFrom).await.unwrap();
    assert_eq!(one.metadata, vec!["192.168.0.1".to_string()]);

    let replaced = client
        .metadata()
        .set("example.com", MetadataKind::AllowAxfrFrom, ["10.0.0.0/8"])
        .await
        .unwrap();
    assert_eq!(replaced.metadata, vec!["10.0.0.0/8".to_string()]);

    client.metadata().delete("example.com", &MetadataKind::AllowAxfrFrom).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].path(), api_path("zones/example.com./metadata"));
    assert_eq!(
        requests[0].json(),
        json!({"kind": "ALLOW-AXFR-FROM", "metadata": ["192.168.0.1"]})
    );
    assert_eq!(requests[2].path(), api_path("zones/example.com./metadata/ALLOW-AXFR-FROM"));
    assert_eq!(requests[3].method, Method::PUT);
    assert_eq!(requests[3].path(), api_path("zones/example.com./metadata/ALLOW-AXFR-FROM"));
    assert_eq!(requests[4].method, Method::DELETE);
}
