// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Result;
use asyncaws_secretsmanager::input::DeleteSecretRequest;
use serde_json::json;

type Request = awscore::request::Request;

fn body_json(request: &Request) -> serde_json::Value {
    serde_json::from_slice(request.body()).unwrap()
}

#[test]
fn marshal_minimal_request() -> Result<()> {
    let request = DeleteSecretRequest::new()
        .set_secret_id("arn:aws:secretsmanager:us-east-1:1234567890:secret:foo")
        .build()?;

    assert_eq!(request.method(), &http::Method::POST);
    assert_eq!(request.path(), "/");
    assert!(request.query().is_empty());
    assert_eq!(
        request.headers().get("X-Amz-Target").unwrap(),
        "secretsmanager.DeleteSecret"
    );
    assert_eq!(
        request.headers().get("Content-Type").unwrap(),
        "application/x-amz-json-1.1"
    );
    assert_eq!(
        String::from_utf8(request.body().to_vec())?,
        r#"{"SecretId":"arn:aws:secretsmanager:us-east-1:1234567890:secret:foo"}"#
    );
    Ok(())
}

#[test]
fn marshal_boolean_as_boolean() -> Result<()> {
    let request = DeleteSecretRequest::new()
        .set_secret_id("foo")
        .set_force_delete_without_recovery(true)
        .build()?;

    let body = body_json(&request);
    assert_eq!(body["SecretId"], json!("foo"));
    // A true boolean literal, not the string "true".
    assert_eq!(body["ForceDeleteWithoutRecovery"], json!(true));
    Ok(())
}

#[test]
fn optional_fields_are_omitted() -> Result<()> {
    let request = DeleteSecretRequest::new().set_secret_id("foo").build()?;
    let body = body_json(&request);
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 1, "{body}");
    assert!(object.contains_key("SecretId"), "{body}");
    Ok(())
}

#[test]
fn missing_required_field_names_field_and_input() {
    let err = DeleteSecretRequest::new()
        .set_force_delete_without_recovery(true)
        .build()
        .unwrap_err();
    assert!(err.is_validation(), "{err:?}");
    let detail = err.required_field().unwrap();
    assert_eq!(detail.field, "SecretId");
    assert_eq!(detail.input, "DeleteSecretRequest");
    assert!(err.to_string().contains("SecretId"), "{err}");
}

#[test]
fn construct_from_configuration() {
    let request = DeleteSecretRequest::create(json!({
        "SecretId": "foo",
        "RecoveryWindowInDays": "7",
        "@region": "eu-west-1",
        "SomeFutureParameter": "ignored",
    }));
    assert_eq!(request.secret_id(), Some("foo"));
    assert_eq!(request.recovery_window_in_days(), Some("7"));
    assert_eq!(request.force_delete_without_recovery(), None);
    assert_eq!(request.region(), Some("eu-west-1"));
}

#[test]
fn create_is_idempotent_for_existing_requests() {
    let request = DeleteSecretRequest::new()
        .set_secret_id("foo")
        .set_recovery_window_in_days("7");
    let got = DeleteSecretRequest::create(request.clone());
    assert_eq!(got, request);
}

#[test]
fn setters_chain_and_clear() -> Result<()> {
    let request = DeleteSecretRequest::new()
        .set_secret_id("foo")
        .set_recovery_window_in_days("7")
        .set_or_clear_recovery_window_in_days::<String>(None)
        .build()?;
    let body = body_json(&request);
    assert!(
        !body.as_object().unwrap().contains_key("RecoveryWindowInDays"),
        "{body}"
    );
    Ok(())
}

#[test]
fn build_twice_from_same_input() -> Result<()> {
    let request = DeleteSecretRequest::new().set_secret_id("foo");
    assert_eq!(request.build()?, request.build()?);
    Ok(())
}
