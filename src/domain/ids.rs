use uuid::Uuid;

use super::models::InstanceId;

/// Supplies the per-navigation identity tokens attached to detail routes.
///
/// Injected wherever routes are built so that navigation sequences can be
/// replayed deterministically in tests.
pub trait IdSource {
    fn next_id(&mut self) -> InstanceId;
}

/// Monotonic counter: `nav-1`, `nav-2`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    issued: u64,
}

impl SequentialIds {
    pub fn starting_at(issued: u64) -> Self {
        Self { issued }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> InstanceId {
        self.issued += 1;
        InstanceId::new(format!("nav-{}", self.issued))
    }
}

/// Random v4 UUIDs, for live sessions where tokens must stay unique across
/// restored snapshots.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> InstanceId {
        InstanceId::new(Uuid::new_v4().to_string())
    }
}
