use super::*;
use std::io::Write;

const SAMPLE: &str = r#"
secret_key = "s3cret"
reload_interval = 30

[deploy."acme/site#main"]
script = "/srv/site/deploy.sh"

[deploy."acme/api#release"]
script = "/srv/api/deploy.sh"
"#;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// =============================================================================
// parse / load
// =============================================================================

#[test]
fn parse_full_config() {
    let cfg = parse(SAMPLE).unwrap();
    assert_eq!(cfg.secret_key.as_deref(), Some("s3cret"));
    assert_eq!(cfg.reload_interval, Some(30));
    assert_eq!(cfg.deploy.len(), 2);
    assert_eq!(cfg.deploy["acme/site#main"].script, "/srv/site/deploy.sh");
}

#[test]
fn parse_without_deploy_table_is_empty_table() {
    let cfg = parse("secret_key = \"k\"\n").unwrap();
    assert!(cfg.deploy.is_empty());
    assert_eq!(cfg.reload_interval, None);
}

#[test]
fn parse_rejects_invalid_toml() {
    let err = parse("secret_key = ").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn parse_rejects_entry_without_script() {
    let err = parse("[deploy.\"a/b#main\"]\npath = \"x\"\n").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[tokio::test]
async fn load_reads_file() {
    let file = write_config(SAMPLE);
    let cfg = load(file.path()).await.unwrap();
    assert_eq!(cfg.secret_key.as_deref(), Some("s3cret"));
}

#[tokio::test]
async fn load_missing_file_is_empty_config() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = load(&dir.path().join("absent.toml")).await.unwrap();
    assert!(cfg.secret_key.is_none());
    assert!(cfg.reload_interval.is_none());
    assert!(cfg.deploy.is_empty());
}

#[tokio::test]
async fn load_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(dir.path()).await.unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

// =============================================================================
// reload
// =============================================================================

#[test]
fn reload_period_clamps_zero_to_one_second() {
    assert_eq!(reload_period(0), Duration::from_secs(1));
    assert_eq!(reload_period(1), Duration::from_secs(1));
    assert_eq!(reload_period(45), Duration::from_secs(45));
}

#[tokio::test]
async fn reload_swaps_changed_table() {
    let file = write_config(SAMPLE);
    let table = RwLock::new(DeployTable::new());

    assert!(reload(&table, file.path()).await.unwrap());
    assert_eq!(table.read().await.len(), 2);
}

#[tokio::test]
async fn reload_unchanged_table_reports_false() {
    let file = write_config(SAMPLE);
    let table = RwLock::new(parse(SAMPLE).unwrap().deploy);

    assert!(!reload(&table, file.path()).await.unwrap());
}

#[tokio::test]
async fn reload_parse_error_keeps_previous_table() {
    let file = write_config("[deploy");
    let table = RwLock::new(parse(SAMPLE).unwrap().deploy);

    assert!(reload(&table, file.path()).await.is_err());
    assert_eq!(table.read().await.len(), 2);
}

#[tokio::test]
async fn reload_task_picks_up_edits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").unwrap();

    let table = Arc::new(RwLock::new(DeployTable::new()));
    let handle = spawn_reload_task(table.clone(), 1, path.clone());

    std::fs::write(&path, SAMPLE).unwrap();
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(100)).await;
        if !table.read().await.is_empty() {
            break;
        }
    }
    assert_eq!(table.read().await.len(), 2);
    handle.abort();
}
