mod configuration_tracker;
pub use configuration_tracker::*;


use serde::Deserialize;
use serde::Serialize;

/// Role a node plays in the cluster membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeRole {
    Voter,
    Learner,
}

/// One member of a cluster configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeMeta {
    pub id: u32,
    pub address: String,
    pub role: NodeRole,
}

/// Cluster membership as handed over by the consensus layer.
///
/// The state machine never interprets it: it is kept so a restored replica
/// knows the membership in effect when the snapshot was taken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClusterConfiguration {
    pub members: Vec<NodeMeta>,
}

impl ClusterConfiguration {
    pub fn new(members: Vec<NodeMeta>) -> Self {
        Self { members }
    }

    pub fn voters(&self) -> impl Iterator<Item = &NodeMeta> {
        self.members.iter().filter(|m| m.role == NodeRole::Voter)
    }
}
