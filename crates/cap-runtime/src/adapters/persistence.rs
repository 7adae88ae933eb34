//! In-memory operation store.
//!
//! Development stand-in for a durable backend. Honors the same atomic
//! compare-and-set contract a real backend must provide, so engine
//! idempotency behaves identically against it.

use std::collections::HashMap;

use parking_lot::Mutex;

use cap_05_engine::ports::outbound::{OpStatus, OperationRecord, PersistenceBackend};
use shared_types::{OpId, PersistenceError};

/// Operation records behind one mutex. The whole map is the critical
/// section, which is exactly the read-modify-write atomicity the contract
/// asks for.
#[derive(Debug, Default)]
pub struct InMemoryOpStore {
    records: Mutex<HashMap<String, OperationRecord>>,
}

impl InMemoryOpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held. Test and diagnostics helper.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// True when no operation has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl PersistenceBackend for InMemoryOpStore {
    fn fetch_op(&self, op_id: &OpId) -> Result<Option<OperationRecord>, PersistenceError> {
        Ok(self.records.lock().get(op_id.as_str()).cloned())
    }

    fn store_op(
        &self,
        record: OperationRecord,
        expected: Option<OpStatus>,
    ) -> Result<(), PersistenceError> {
        let mut records = self.records.lock();
        let current = records.get(record.op_id.as_str()).map(|r| r.status);
        if current != expected {
            return Err(PersistenceError::Conflict {
                op_id: record.op_id.as_str().to_string(),
            });
        }
        records.insert(record.op_id.as_str().to_string(), record);
        Ok(())
    }
}
