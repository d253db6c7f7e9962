use kv_fsm::ClusterConfiguration;
use kv_fsm::Entry;
use kv_fsm::KvCommand;
use kv_fsm::NodeMeta;
use kv_fsm::NodeRole;

static LOGGER_INIT: once_cell::sync::Lazy<()> = once_cell::sync::Lazy::new(|| {
    let _ = env_logger::builder().is_test(true).try_init();
});

pub fn enable_logger() {
    *LOGGER_INIT;
}

pub fn set_entry(
    index: u64,
    key: &str,
    value: &str,
) -> Entry {
    Entry::new(
        index,
        1,
        KvCommand::set(key, value).encode().expect("encode command"),
    )
}

pub fn cluster(ids: &[u32]) -> ClusterConfiguration {
    ClusterConfiguration::new(
        ids.iter()
            .map(|id| NodeMeta {
                id: *id,
                address: format!("10.0.0.{}:9081", id),
                role: if *id == 1 {
                    NodeRole::Voter
                } else {
                    NodeRole::Learner
                },
            })
            .collect(),
    )
}
