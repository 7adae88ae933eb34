//! Development settlement provider.
//!
//! Confirms every transfer immediately and mints a reference per call.
//! Stands in for the wallet/signing collaborator in local runs; production
//! deployments supply their own `SettlementProvider`.

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use cap_05_engine::ports::outbound::{SettlementProvider, SettlementReceipt};
use shared_types::{Address, Amount, OpId, SettlementError};

/// Always-confirming settlement provider for development.
#[derive(Debug, Clone)]
pub struct DevSettlement {
    identity: Address,
}

impl DevSettlement {
    pub fn new(identity: Address) -> Self {
        Self { identity }
    }
}

#[async_trait]
impl SettlementProvider for DevSettlement {
    fn identity(&self) -> Address {
        self.identity
    }

    async fn transfer(
        &self,
        from: Address,
        to: Address,
        amount: Amount,
        op_id: &OpId,
    ) -> Result<SettlementReceipt, SettlementError> {
        let reference = Uuid::new_v4().to_string();
        info!(
            from = ?&from[..4],
            to = ?&to[..4],
            amount,
            op_id = %op_id,
            reference = %reference,
            "Dev settlement confirmed"
        );
        Ok(SettlementReceipt {
            success: true,
            reference,
        })
    }
}
