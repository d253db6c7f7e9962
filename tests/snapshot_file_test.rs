//! Persist/restore through real files, the way a snapshot-file manager hands
//! sinks and streams to the state machine.
mod common;

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::io::Write;

use common::cluster;
use common::enable_logger;
use common::set_entry;
use kv_fsm::constants::SNAPSHOT_VERSION_V1;
use kv_fsm::KvStateMachine;
use kv_fsm::StateMachine;
use kv_fsm::StateMachineSnapshot;

/// Drives any state machine through the host-facing operations only
fn persist_with<S: StateMachine>(
    state_machine: &S,
    sink: &mut dyn Write,
) {
    let mut snapshot = state_machine.snapshot().expect("snapshot");
    snapshot.persist(sink).expect("persist");
    snapshot.release();
}

#[test]
fn test_file_round_trip() {
    enable_logger();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot-1-1.bin");

    let fsm = KvStateMachine::new();
    assert!(fsm.apply(&set_entry(1, "name", "abc")).is_ok());
    fsm.store_configuration(1, cluster(&[1, 2]));

    {
        let mut sink = File::create(&path).unwrap();
        persist_with(&fsm, &mut sink);
        sink.sync_all().unwrap();
    }

    let mut stream = BufReader::new(File::open(&path).unwrap());
    let restored = KvStateMachine::new();
    restored.restore(&mut stream).unwrap();

    assert_eq!(restored.get("name"), Some("abc".to_string()));
    assert_eq!(restored.latest_configuration(), Some(cluster(&[1, 2])));
}

#[test]
fn test_file_starts_with_version_byte() {
    let mut file = tempfile::tempfile().unwrap();

    let fsm = KvStateMachine::new();
    for i in 0..100u64 {
        fsm.apply(&set_entry(i + 1, &format!("key-{i}"), &"v".repeat(i as usize)))
            .unwrap();
    }
    persist_with(&fsm, &mut file);

    file.seek(SeekFrom::Start(0)).unwrap();
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).unwrap();
    assert_eq!(bytes[0], SNAPSHOT_VERSION_V1);

    let restored = KvStateMachine::new();
    restored.restore(&mut bytes.as_slice()).unwrap();
    assert_eq!(restored.store().to_hash_map(), fsm.store().to_hash_map());
}

#[test]
fn test_truncated_file_is_rejected() {
    let mut file = tempfile::tempfile().unwrap();

    let fsm = KvStateMachine::new();
    fsm.apply(&set_entry(1, "a", "alpha")).unwrap();
    fsm.apply(&set_entry(2, "b", "beta")).unwrap();
    persist_with(&fsm, &mut file);

    let len = file.metadata().unwrap().len();
    file.set_len(len - 2).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let restored = KvStateMachine::new();
    restored.apply(&set_entry(1, "local", "value")).unwrap();
    assert!(restored.restore(&mut file).is_err());
    assert_eq!(restored.get("local"), Some("value".to_string()));
}

#[test]
fn test_restored_state_machine_keeps_applying() {
    let fsm = KvStateMachine::new();
    fsm.apply(&set_entry(1, "k", "v1")).unwrap();
    let mut bytes = Vec::new();
    persist_with(&fsm, &mut bytes);

    let follower = KvStateMachine::new();
    follower.restore(&mut bytes.as_slice()).unwrap();
    follower.apply(&set_entry(2, "k", "v2")).unwrap();
    follower.apply(&set_entry(3, "k2", "x")).unwrap();

    assert_eq!(follower.get("k"), Some("v2".to_string()));
    assert_eq!(follower.len(), 2);
}
