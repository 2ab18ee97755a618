//! Script repository and snapshot persistence against the real file system.

mod common;

use common::RecordingHost;
use kataribe::storage::{load_snapshot, save_snapshot, FileScriptRepository, ScriptRepository};
use kataribe::{DialogueEngine, Script};
use std::fs;
use std::path::PathBuf;

fn temp_base(tag: &str) -> PathBuf {
    let base = std::env::temp_dir().join(format!("kataribe-test-{}-{tag}", std::process::id()));
    let _ = fs::remove_dir_all(&base);
    fs::create_dir_all(&base).unwrap();
    base
}

#[tokio::test]
async fn repository_loads_script_by_name() {
    let base = temp_base("load");
    fs::write(
        base.join("intro.json"),
        r#"[{"characterName": "Ayumi", "message": "Hello."}]"#,
    )
    .unwrap();

    let repo = FileScriptRepository::new(&base);
    assert!(repo.script_exists("intro").await);

    let script = repo.load_script("intro").await.unwrap();
    assert_eq!(script.len(), 1);
    assert_eq!(script.get(0).unwrap().character_name, "Ayumi");

    let _ = fs::remove_dir_all(&base);
}

#[tokio::test]
async fn repository_rejects_malformed_script() {
    let base = temp_base("malformed");
    fs::write(base.join("broken.json"), "{ not a script").unwrap();

    let repo = FileScriptRepository::new(&base);
    assert!(repo.load_script("broken").await.is_err());

    let _ = fs::remove_dir_all(&base);
}

#[test]
fn snapshot_survives_persistence_and_restores_position() {
    let script = Script::from_json(
        r#"[
        {"characterName": "A", "message": "one"},
        {"characterName": "B", "message": "two"},
        {"characterName": "C", "message": "three"}
    ]"#,
    )
    .unwrap();

    let (host, _log) = RecordingHost::new();
    let mut engine = DialogueEngine::new(script.clone(), Box::new(host));
    engine.start();
    engine.advance(); // reveal line 0
    engine.advance(); // to line 1
    engine.skip(); // to line 2, skip counter 1

    let bytes = save_snapshot(&engine.snapshot()).unwrap();
    let snapshot = load_snapshot(&bytes).unwrap();

    let (host, log) = RecordingHost::new();
    let mut restored = DialogueEngine::new(script, Box::new(host));
    restored.restore(&snapshot).unwrap();
    restored.reveal_all();

    assert_eq!(restored.current_index(), 2);
    assert_eq!(restored.skip_counter(), 1);
    assert_eq!(log.lock().unwrap().text, "three");
}
