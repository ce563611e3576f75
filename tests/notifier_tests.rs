//! Notifier integration tests against stub alerter executables
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use serial_test::serial;

use mac_notify::application::ports::ExecutionError;
use mac_notify::infrastructure::alerter::{default_install_dir, EmbeddedAlerter, ALERTER_FILE_NAME};
use mac_notify::infrastructure::ProcessExecutor;
use mac_notify::{ActivationKind, DefaultNotifier, Notification, Notifier, NotifyError, Timeout};

const CLOSED: &str = r#"{"activationType":"closed","activationValue":""}"#;

/// Write an executable shell script that records its arguments to
/// `args.txt` next to itself and then runs `body`
fn write_stub(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("alerter");
    let script = format!(
        "#!/bin/sh\nfor a in \"$@\"; do printf '%s\\n' \"$a\"; done > \"$(dirname \"$0\")/args.txt\"\n{}\n",
        body
    );
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn replying(dir: &Path, json: &str) -> PathBuf {
    write_stub(dir, &format!("printf '%s' '{}'", json))
}

fn recorded_args(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("args.txt"))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
#[serial]
async fn minimal_notification_against_stub() {
    let tmp = tempfile::tempdir().unwrap();
    let notifier = DefaultNotifier::with_custom_path(replying(tmp.path(), CLOSED));

    let response = notifier
        .send(&Notification::new("hello", "world"))
        .await
        .unwrap();

    assert_eq!(response.activation_type, "closed");
    assert_eq!(response.activation_value, "");
    assert_eq!(
        recorded_args(tmp.path()),
        vec!["-json", "-message", "world", "-title", "hello"]
    );
}

#[tokio::test]
#[serial]
async fn actions_reach_alerter_as_one_argument() {
    let tmp = tempfile::tempdir().unwrap();
    let stub = replying(
        tmp.path(),
        r#"{"activationType":"actionClicked","activationValue":"Option 1"}"#,
    );
    let notifier = DefaultNotifier::with_custom_path(stub);

    let response = notifier
        .send(&Notification::new("hello", "world").actions(["Option 1", "Option 2"]))
        .await
        .unwrap();

    assert_eq!(response.kind(), ActivationKind::ActionClicked);
    assert_eq!(response.activation_value, "Option 1");

    let args = recorded_args(tmp.path());
    assert_eq!(&args[args.len() - 2..], ["-actions", "Option 1,Option 2"]);
}

#[tokio::test]
#[serial]
async fn every_optional_field_is_passed() {
    let tmp = tempfile::tempdir().unwrap();
    let notifier = DefaultNotifier::with_custom_path(replying(tmp.path(), CLOSED))
        .with_default_timeout(Timeout::from_secs(10));

    let notification = Notification::new("hello", "world")
        .subtitle("sub title")
        .content_image("/tmp/picture.png")
        .close_label("CLOSE ME")
        .with_timeout(Timeout::from_secs(5));
    notifier.send(&notification).await.unwrap();

    assert_eq!(
        recorded_args(tmp.path()),
        vec![
            "-json",
            "-message",
            "world",
            "-title",
            "hello",
            "-subtitle",
            "sub title",
            "-timeout",
            "5",
            "-contentImage",
            "/tmp/picture.png",
            "-closeLabel",
            "CLOSE ME",
        ]
    );
}

#[tokio::test]
#[serial]
async fn malformed_reply_is_a_decode_error() {
    let tmp = tempfile::tempdir().unwrap();
    let notifier = DefaultNotifier::with_custom_path(write_stub(tmp.path(), "echo 'not json'"));

    let err = notifier
        .send(&Notification::new("hello", "world"))
        .await
        .unwrap_err();

    match err {
        NotifyError::Decode(cause) => assert!(cause.is_syntax()),
        other => panic!("expected Decode, got {other:?}"),
    }
}

#[tokio::test]
#[serial]
async fn failing_alerter_is_an_execution_error() {
    let tmp = tempfile::tempdir().unwrap();
    let notifier =
        DefaultNotifier::with_custom_path(write_stub(tmp.path(), "echo 'no display' >&2; exit 1"));

    let err = notifier
        .send(&Notification::new("hello", "world"))
        .await
        .unwrap_err();

    match err {
        NotifyError::Execution(ExecutionError::Failed { status, stderr, .. }) => {
            assert_eq!(status.code(), Some(1));
            assert_eq!(stderr, "no display");
        }
        other => panic!("expected Execution, got {other:?}"),
    }
}

#[tokio::test]
#[serial]
async fn missing_alerter_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let notifier = DefaultNotifier::with_custom_path(tmp.path().join("missing"));

    let err = notifier
        .send(&Notification::new("hello", "world"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        NotifyError::Execution(ExecutionError::NotFound(_))
    ));
}

#[tokio::test]
async fn invalid_notification_never_runs_alerter() {
    let tmp = tempfile::tempdir().unwrap();
    // Running this path would fail with NotFound
    let notifier = DefaultNotifier::with_custom_path(tmp.path().join("missing"));

    let err = notifier
        .send(&Notification::new("", "world"))
        .await
        .unwrap_err();

    assert!(matches!(err, NotifyError::Validation(_)));
}

/// Existence and mtime of a path, for before/after comparisons
fn snapshot(path: &Path) -> Option<std::time::SystemTime> {
    fs::symlink_metadata(path).ok().and_then(|m| m.modified().ok())
}

#[test]
#[serial]
fn custom_path_construction_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let default_target = default_install_dir().join(ALERTER_FILE_NAME);
    let before = snapshot(&default_target);

    let notifier = DefaultNotifier::with_custom_path(tmp.path().join("alerter"));

    assert_eq!(notifier.alerter_path(), tmp.path().join("alerter"));
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    assert_eq!(snapshot(&default_target), before);
}

#[tokio::test]
#[serial]
async fn installed_payload_can_be_sent_through() {
    let tmp = tempfile::tempdir().unwrap();
    let alerter = EmbeddedAlerter::new()
        .with_install_dir(tmp.path().join("mac-notify"))
        .with_payload(
            b"#!/bin/sh\nprintf '%s' '{\"activationType\":\"contentsClicked\",\"activationValue\":\"\"}'\n",
        );

    let notifier = Notifier::resolve(&alerter, ProcessExecutor::new())
        .await
        .unwrap();
    assert_eq!(notifier.alerter_path(), alerter.target_path());

    let response = notifier
        .send(&Notification::new("hello", "world"))
        .await
        .unwrap();
    assert_eq!(response.kind(), ActivationKind::ContentsClicked);
}
