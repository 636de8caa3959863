use super::*;
use http_body_util::BodyExt;

#[test]
fn kind_names_are_snake_case() {
    assert_eq!(Error::MissingKey("secret_key").kind(), "missing_key");
    assert_eq!(Error::NoStdout("pm2").kind(), "no_stdout");
    assert_eq!(Error::Io(std::io::Error::other("boom")).kind(), "io");
}

#[test]
fn missing_key_message_names_key() {
    let err = Error::MissingKey("reload_interval");
    assert_eq!(err.to_string(), "missing configuration key: reload_interval");
}

#[test]
fn toml_errors_convert_to_config() {
    let parse_err = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
    let err: Error = parse_err.into();
    assert!(matches!(err, Error::Config(_)));
}

#[tokio::test]
async fn into_response_is_500_with_json_body() {
    let err = Error::Spawn {
        command: "pm2",
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["type"], "spawn");
    assert_eq!(body["message"], "failed to spawn `pm2`: not found");
}
