use crate::ClusterConfiguration;
use crate::NodeMeta;
use crate::NodeRole;
use crate::StateMachine;
use crate::StateMachineSnapshot;

static LOGGER_INIT: once_cell::sync::Lazy<()> = once_cell::sync::Lazy::new(|| {
    let _ = env_logger::builder().is_test(true).try_init();
});

pub fn enable_logger() {
    *LOGGER_INIT;
    println!("setup logger for unit test.");
}

/// Voter-only configuration with one member per id
pub fn voters(ids: &[u32]) -> ClusterConfiguration {
    ClusterConfiguration::new(
        ids.iter()
            .map(|id| NodeMeta {
                id: *id,
                address: format!("127.0.0.1:{}", 9080 + id),
                role: NodeRole::Voter,
            })
            .collect(),
    )
}

/// Snapshot + persist into memory
pub fn persist_to_vec<S: StateMachine>(state_machine: &S) -> Vec<u8> {
    let snapshot = state_machine.snapshot().expect("snapshot");
    let mut out = Vec::new();
    snapshot.persist(&mut out).expect("persist");
    out
}

/// Encoded `(key, value)` record exactly as it appears on the wire
pub fn record_bytes(
    key: &str,
    value: &str,
) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&(key.len() as u32).to_be_bytes());
    out.extend_from_slice(key.as_bytes());
    out.extend_from_slice(&(value.len() as u32).to_be_bytes());
    out.extend_from_slice(value.as_bytes());
    out
}
