//! # CarbonCap Engine
//!
//! The single authority that validates and applies every state transition.
//! Components never call each other; the engine consults the identity
//! registry and fee schedule for authorization, then mutates the emissions
//! or credit ledger, invoking external settlement before any value-moving
//! commit.
//!
//! ## Value-Moving Protocol
//!
//! ```text
//! fetch_op(opId) ── Committed ──→ return stored outcome, no re-execution
//!       │                InFlight ──→ DuplicateOperation
//!       ▼
//!   validate ── reject ──→ no mutation
//!       ▼
//!   reserve ──→ store InFlight ──→ settle (bounded by deadline)
//!                                      │
//!                        success ──────┼────── failure / timeout
//!                           ▼          │            ▼
//!                        commit        │        rollback
//!                    store Committed   │     store RolledBack
//! ```
//!
//! A settlement timeout is a definitive failure; the engine never assumes
//! success. Unreadable or corrupt operation records degrade the affected
//! accounts: further writes there are refused until the Regulator clears
//! the flag after external repair.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use cap_01_identity_registry::{IdentityRegistry, RegistrationPolicy, RegistryError};
use cap_02_fee_schedule::{FeeError, FeeSchedule};
use cap_03_emissions_ledger::{EmissionsError, EmissionsLedger};
use cap_04_credit_ledger::{CreditError, CreditLedger};
use shared_types::{
    Address, Amount, EmissionRecord, FeeEntry, OpId, OperationData, OperationOutcome,
    OperationPayload, OperationRequest, PersistenceError, Role, SettlementError, Timestamp,
    Transfer, ZERO_ADDRESS,
};

use crate::domain::policy::{AllocationPolicy, AllocationRequest};
use crate::ports::outbound::{
    OpStatus, OperationRecord, PersistenceBackend, SettlementProvider, TimeSource,
};

/// Engine configuration, fixed at bootstrap.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Deadline for one settlement call. Exceeding it is a definitive
    /// failure.
    pub settlement_timeout: Duration,
    /// Factory registration gating.
    pub registration_policy: RegistrationPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            settlement_timeout: Duration::from_secs(30),
            registration_policy: RegistrationPolicy::default(),
        }
    }
}

/// What a replay check found for an op id.
enum Replay {
    /// No resolved attempt; `prior` is the CAS expectation for the
    /// InFlight write.
    Fresh { prior: Option<OpStatus> },
    /// The operation already resolved (or is unresolvable); reply with
    /// this and stop.
    Resolved(OperationOutcome),
}

/// The composed registry-and-ledger state machine.
///
/// Owns all component state exclusively; one engine instance is the
/// process-wide single writer. Callers hold it behind one async lock and
/// take the write side for `submit`.
pub struct CarbonCapEngine {
    registry: IdentityRegistry,
    fees: FeeSchedule,
    emissions: EmissionsLedger,
    credits: CreditLedger,
    allocation: Arc<dyn AllocationPolicy>,
    settlement: Arc<dyn SettlementProvider>,
    persistence: Arc<dyn PersistenceBackend>,
    clock: Arc<dyn TimeSource>,
    /// Accounts refusing writes pending external repair.
    degraded: HashSet<Address>,
    config: EngineConfig,
}

impl CarbonCapEngine {
    /// Bootstraps the engine with an explicit Regulator identity.
    ///
    /// The Regulator is fixed here and never reassigned through normal
    /// operations.
    pub fn bootstrap(
        regulator: Address,
        config: EngineConfig,
        allocation: Arc<dyn AllocationPolicy>,
        settlement: Arc<dyn SettlementProvider>,
        persistence: Arc<dyn PersistenceBackend>,
        clock: Arc<dyn TimeSource>,
    ) -> Self {
        info!(
            regulator = ?&regulator[..4],
            signer = ?&settlement.identity()[..4],
            "Bootstrapping CarbonCap engine"
        );
        Self {
            registry: IdentityRegistry::bootstrap_with_policy(
                regulator,
                config.registration_policy,
            ),
            fees: FeeSchedule::new(),
            emissions: EmissionsLedger::new(),
            credits: CreditLedger::new(),
            allocation,
            settlement,
            persistence,
            clock,
            degraded: HashSet::new(),
            config,
        }
    }

    // =========================================================================
    // OPERATION API
    // =========================================================================

    /// Validates and applies one operation.
    ///
    /// Every validation failure is detected before any mutation; a rejected
    /// request leaves all committed state unchanged.
    pub async fn submit(&mut self, request: OperationRequest) -> OperationOutcome {
        let OperationRequest {
            op_id,
            caller,
            payload,
        } = request;

        if caller == ZERO_ADDRESS {
            return OperationOutcome::rejected(op_id, shared_types::ResultCode::InvalidAddress);
        }

        // Degraded gate: refuse writes touching a degraded account.
        if !matches!(payload, OperationPayload::ClearDegraded { .. }) {
            let touched = Self::touched_accounts(caller, &payload);
            if let Some(account) = touched.iter().find(|a| self.degraded.contains(*a)) {
                warn!(account = ?&account[..4], op_id = %op_id, "Write refused: account degraded");
                return OperationOutcome::rejected(op_id, shared_types::ResultCode::Degraded);
            }
        }

        match payload {
            OperationPayload::RegisterFactory { factory } => {
                self.register(op_id, caller, factory, Role::Factory)
            }
            OperationPayload::RegisterOrganization { organization } => {
                self.register(op_id, caller, organization, Role::Organization)
            }
            OperationPayload::CertifyOrganization { organization } => {
                self.certify(op_id, caller, organization)
            }
            OperationPayload::SetFee { amount } => self.set_fee(op_id, caller, amount),
            OperationPayload::RecordEmissions { gas_type, quantity } => {
                self.record_emissions(op_id, caller, &gas_type, quantity)
            }
            OperationPayload::VerifyEmissions {
                factory,
                sequence_id,
            } => self.verify_emissions(op_id, caller, factory, sequence_id),
            OperationPayload::AllocateCredits { factory, amount } => {
                self.allocate_credits(op_id, caller, factory, amount)
            }
            OperationPayload::BuyCredits { factory, amount } => {
                self.buy_credits(op_id, caller, factory, amount).await
            }
            OperationPayload::PayRegistrationFee => {
                self.pay_registration_fee(op_id, caller).await
            }
            OperationPayload::ClearDegraded { account } => {
                self.clear_degraded(op_id, caller, account)
            }
        }
    }

    /// The accounts whose state an operation writes.
    fn touched_accounts(caller: Address, payload: &OperationPayload) -> Vec<Address> {
        match payload {
            OperationPayload::RegisterFactory { factory } => vec![*factory],
            OperationPayload::RegisterOrganization { organization } => vec![*organization],
            OperationPayload::CertifyOrganization { organization } => vec![*organization],
            OperationPayload::SetFee { .. } => vec![],
            OperationPayload::RecordEmissions { .. } => vec![caller],
            OperationPayload::VerifyEmissions { factory, .. } => vec![*factory],
            OperationPayload::AllocateCredits { factory, .. } => vec![*factory],
            OperationPayload::BuyCredits { factory, .. } => vec![caller, *factory],
            OperationPayload::PayRegistrationFee => vec![caller],
            OperationPayload::ClearDegraded { .. } => vec![],
        }
    }

    // =========================================================================
    // NON-VALUE OPERATIONS (no settlement, no idempotency store)
    // =========================================================================

    fn register(
        &mut self,
        op_id: OpId,
        caller: Address,
        address: Address,
        role: Role,
    ) -> OperationOutcome {
        match self.registry.register(caller, address, role) {
            Ok(()) => {
                info!(address = ?&address[..4], ?role, "Registered");
                OperationOutcome::ok(op_id)
            }
            Err(err) => Self::reject_registry(op_id, err),
        }
    }

    fn certify(&mut self, op_id: OpId, caller: Address, organization: Address) -> OperationOutcome {
        match self.registry.certify(caller, organization) {
            Ok(()) => {
                info!(organization = ?&organization[..4], "Organization certified");
                OperationOutcome::ok(op_id)
            }
            Err(err) => Self::reject_registry(op_id, err),
        }
    }

    fn set_fee(&mut self, op_id: OpId, caller: Address, amount: Amount) -> OperationOutcome {
        if !self.registry.is_regulator(&caller) {
            return OperationOutcome::rejected(op_id, shared_types::ResultCode::Unauthorized);
        }
        let now = self.clock.now();
        match self.fees.set_fee(caller, amount, now) {
            Ok(()) => {
                info!(amount, "Registration fee set");
                OperationOutcome::ok(op_id)
            }
            Err(err) => Self::reject_fee(op_id, err),
        }
    }

    fn record_emissions(
        &mut self,
        op_id: OpId,
        caller: Address,
        gas_type: &str,
        quantity: Amount,
    ) -> OperationOutcome {
        // The caller IS the factory; only active factory registrants report.
        if self.registry.role_of(&caller) != Role::Factory
            || !self.registry.is_registered(&caller)
        {
            return OperationOutcome::rejected(op_id, shared_types::ResultCode::NotRegistered);
        }
        let now = self.clock.now();
        match self.emissions.record(caller, gas_type, quantity, now) {
            Ok(sequence_id) => {
                info!(factory = ?&caller[..4], sequence_id, quantity, "Emissions recorded");
                OperationOutcome::ok_with(op_id, OperationData::SequenceId(sequence_id))
            }
            Err(err) => Self::reject_emissions(op_id, err),
        }
    }

    fn verify_emissions(
        &mut self,
        op_id: OpId,
        caller: Address,
        factory: Address,
        sequence_id: u64,
    ) -> OperationOutcome {
        if !self.registry.is_regulator(&caller) {
            return OperationOutcome::rejected(op_id, shared_types::ResultCode::Unauthorized);
        }
        let now = self.clock.now();
        match self.emissions.verify(caller, factory, sequence_id, now) {
            Ok(()) => {
                info!(factory = ?&factory[..4], sequence_id, "Emissions verified");
                OperationOutcome::ok(op_id)
            }
            Err(err) => Self::reject_emissions(op_id, err),
        }
    }

    fn allocate_credits(
        &mut self,
        op_id: OpId,
        caller: Address,
        factory: Address,
        amount: Amount,
    ) -> OperationOutcome {
        if !self.registry.is_regulator(&caller) {
            return OperationOutcome::rejected(op_id, shared_types::ResultCode::Unauthorized);
        }
        if self.registry.role_of(&factory) != Role::Factory
            || !self.registry.is_registered(&factory)
        {
            return OperationOutcome::rejected(op_id, shared_types::ResultCode::NotRegistered);
        }

        let request = AllocationRequest {
            factory,
            requested: amount,
            verified_emissions: self.emissions.verified_total(&factory),
            current_balance: self.credits.balance_of(&factory),
        };
        if let Err(denial) = self.allocation.authorize(&request) {
            warn!(factory = ?&factory[..4], amount, %denial, "Allocation denied by policy");
            return OperationOutcome::rejected(op_id, shared_types::ResultCode::InvalidAmount);
        }

        match self.credits.credit(factory, amount) {
            Ok(()) => {
                info!(factory = ?&factory[..4], amount, "Credits allocated");
                OperationOutcome::ok(op_id)
            }
            Err(err) => Self::reject_credit(op_id, err),
        }
    }

    fn clear_degraded(
        &mut self,
        op_id: OpId,
        caller: Address,
        account: Address,
    ) -> OperationOutcome {
        if !self.registry.is_regulator(&caller) {
            return OperationOutcome::rejected(op_id, shared_types::ResultCode::Unauthorized);
        }
        if self.degraded.remove(&account) {
            info!(account = ?&account[..4], "Degraded flag cleared");
        }
        OperationOutcome::ok(op_id)
    }

    // =========================================================================
    // VALUE-MOVING OPERATIONS (reserve / settle / commit-or-rollback)
    // =========================================================================

    async fn buy_credits(
        &mut self,
        op_id: OpId,
        organization: Address,
        factory: Address,
        amount: Amount,
    ) -> OperationOutcome {
        let prior = match self.replay_check(&op_id, &[organization, factory]) {
            Replay::Fresh { prior } => prior,
            Replay::Resolved(outcome) => return outcome,
        };

        // Validations, all before any mutation.
        if self.registry.role_of(&factory) != Role::Factory
            || !self.registry.is_registered(&factory)
        {
            return OperationOutcome::rejected(op_id, shared_types::ResultCode::NotRegistered);
        }
        if !self.registry.is_certified(&organization) {
            return OperationOutcome::rejected(op_id, shared_types::ResultCode::NotCertified);
        }

        // Phase (a): reserve. Debits the factory, holds the amount.
        let now = self.clock.now();
        if let Err(err) =
            self.credits
                .reserve(op_id.clone(), factory, organization, amount, now)
        {
            return Self::reject_credit(op_id, err);
        }

        if let Some(outcome) = self.mark_in_flight(&op_id, prior, &[organization, factory]) {
            // The hold never reached the durable store; release it.
            let _ = self.credits.rollback(&op_id);
            return outcome;
        }

        // Phase (b): settlement, organization pays the factory.
        let settled = self.settle(organization, factory, amount, &op_id).await;
        match settled {
            Ok(receipt) => {
                // Phase (c): commit.
                let committed_at = self.clock.now();
                match self.credits.commit(&op_id, committed_at) {
                    Ok(transfer) => {
                        info!(
                            from = ?&transfer.from[..4],
                            to = ?&transfer.to[..4],
                            amount = transfer.amount,
                            op_id = %op_id,
                            "Credit purchase committed"
                        );
                        let outcome = OperationOutcome::ok_with(
                            op_id.clone(),
                            OperationData::SettlementRef(receipt.reference),
                        );
                        self.seal_committed(&op_id, &outcome, &[organization, factory]);
                        outcome
                    }
                    Err(err) => {
                        // Settlement money moved but the ledger cannot
                        // absorb the credit. Freeze both parties.
                        error!(op_id = %op_id, %err, "Commit failed after settlement");
                        let _ = self.credits.rollback(&op_id);
                        self.mark_degraded(&[organization, factory]);
                        self.seal_rolled_back(&op_id, &[organization, factory]);
                        OperationOutcome::rejected(op_id, shared_types::ResultCode::Degraded)
                    }
                }
            }
            Err(err) => {
                warn!(op_id = %op_id, %err, "Settlement failed, rolling back reservation");
                let _ = self.credits.rollback(&op_id);
                self.seal_rolled_back(&op_id, &[organization, factory]);
                OperationOutcome::rejected(op_id, shared_types::ResultCode::SettlementFailed)
            }
        }
    }

    async fn pay_registration_fee(&mut self, op_id: OpId, payer: Address) -> OperationOutcome {
        let prior = match self.replay_check(&op_id, &[payer]) {
            Replay::Fresh { prior } => prior,
            Replay::Resolved(outcome) => return outcome,
        };

        let fee = match self.fees.current() {
            Ok(fee) => fee,
            Err(err) => return Self::reject_fee(op_id, err),
        };

        // Creates the payer record on first contact; rejects an already
        // active registrant before any value moves.
        if let Err(err) = self.registry.ensure_payer(payer) {
            return Self::reject_registry(op_id, err);
        }

        if let Some(outcome) = self.mark_in_flight(&op_id, prior, &[payer]) {
            return outcome;
        }

        // Settlement: the payer pays the Regulator the current fee.
        let regulator = self.registry.regulator();
        let settled = self.settle(payer, regulator, fee, &op_id).await;
        match settled {
            Ok(receipt) => match self.registry.mark_registered(payer) {
                Ok(()) => {
                    info!(payer = ?&payer[..4], fee, op_id = %op_id, "Registration fee paid");
                    let outcome = OperationOutcome::ok_with(
                        op_id.clone(),
                        OperationData::SettlementRef(receipt.reference),
                    );
                    self.seal_committed(&op_id, &outcome, &[payer]);
                    outcome
                }
                Err(err) => {
                    error!(op_id = %op_id, %err, "Activation failed after settlement");
                    self.mark_degraded(&[payer]);
                    self.seal_rolled_back(&op_id, &[payer]);
                    OperationOutcome::rejected(op_id, shared_types::ResultCode::Degraded)
                }
            },
            Err(err) => {
                warn!(op_id = %op_id, %err, "Fee settlement failed");
                self.seal_rolled_back(&op_id, &[payer]);
                OperationOutcome::rejected(op_id, shared_types::ResultCode::SettlementFailed)
            }
        }
    }

    /// Runs one settlement transfer under the configured deadline.
    ///
    /// A deadline overrun is a definitive failure, never "assume success".
    async fn settle(
        &self,
        from: Address,
        to: Address,
        amount: Amount,
        op_id: &OpId,
    ) -> Result<crate::ports::outbound::SettlementReceipt, SettlementError> {
        let deadline = self.config.settlement_timeout;
        let receipt = tokio::time::timeout(
            deadline,
            self.settlement.transfer(from, to, amount, op_id),
        )
        .await
        .map_err(|_| SettlementError::Timeout {
            timeout_ms: deadline.as_millis() as u64,
        })??;

        if !receipt.success {
            return Err(SettlementError::Rejected {
                reason: format!("provider declined transfer {}", receipt.reference),
            });
        }
        Ok(receipt)
    }

    // =========================================================================
    // IDEMPOTENCY AND DEGRADED-MODE BOOKKEEPING
    // =========================================================================

    /// Consults the durable op store before a value-moving attempt.
    fn replay_check(&mut self, op_id: &OpId, touched: &[Address]) -> Replay {
        match self.persistence.fetch_op(op_id) {
            Ok(None) => Replay::Fresh { prior: None },
            Ok(Some(record)) => match record.status {
                OpStatus::Committed => match record.outcome {
                    // Return the original result without re-executing.
                    Some(outcome) => Replay::Resolved(outcome),
                    None => {
                        error!(op_id = %op_id, "Committed record has no outcome");
                        self.mark_degraded(touched);
                        Replay::Resolved(OperationOutcome::rejected(
                            op_id.clone(),
                            shared_types::ResultCode::Degraded,
                        ))
                    }
                },
                OpStatus::InFlight => Replay::Resolved(OperationOutcome::rejected(
                    op_id.clone(),
                    shared_types::ResultCode::DuplicateOperation,
                )),
                // A confirmed rollback may be retried; the retry must CAS
                // against the RolledBack record.
                OpStatus::RolledBack => Replay::Fresh {
                    prior: Some(OpStatus::RolledBack),
                },
            },
            Err(err) => {
                error!(op_id = %op_id, %err, "Operation store unreadable");
                self.mark_degraded(touched);
                Replay::Resolved(OperationOutcome::rejected(
                    op_id.clone(),
                    shared_types::ResultCode::Degraded,
                ))
            }
        }
    }

    /// Durably marks the operation in flight before settlement starts.
    ///
    /// Returns the rejection to reply with when the write loses the CAS or
    /// the store fails; `None` means proceed.
    fn mark_in_flight(
        &mut self,
        op_id: &OpId,
        prior: Option<OpStatus>,
        touched: &[Address],
    ) -> Option<OperationOutcome> {
        let record = OperationRecord {
            op_id: op_id.clone(),
            status: OpStatus::InFlight,
            outcome: None,
        };
        match self.persistence.store_op(record, prior) {
            Ok(()) => None,
            Err(PersistenceError::Conflict { .. }) => Some(OperationOutcome::rejected(
                op_id.clone(),
                shared_types::ResultCode::DuplicateOperation,
            )),
            Err(err) => {
                error!(op_id = %op_id, %err, "Operation store write failed");
                self.mark_degraded(touched);
                Some(OperationOutcome::rejected(
                    op_id.clone(),
                    shared_types::ResultCode::Degraded,
                ))
            }
        }
    }

    /// Durably records a commit. The ledger already holds the committed
    /// state; a store failure degrades the accounts but cannot un-commit
    /// the settled payment.
    fn seal_committed(&mut self, op_id: &OpId, outcome: &OperationOutcome, touched: &[Address]) {
        let record = OperationRecord {
            op_id: op_id.clone(),
            status: OpStatus::Committed,
            outcome: Some(outcome.clone()),
        };
        if let Err(err) = self.persistence.store_op(record, Some(OpStatus::InFlight)) {
            error!(op_id = %op_id, %err, "Failed to persist commit record");
            self.mark_degraded(touched);
        }
    }

    /// Durably records a rollback so a retry with the same op id is
    /// unambiguous and non-duplicating.
    fn seal_rolled_back(&mut self, op_id: &OpId, touched: &[Address]) {
        let record = OperationRecord {
            op_id: op_id.clone(),
            status: OpStatus::RolledBack,
            outcome: None,
        };
        if let Err(err) = self.persistence.store_op(record, Some(OpStatus::InFlight)) {
            error!(op_id = %op_id, %err, "Failed to persist rollback record");
            self.mark_degraded(touched);
        }
    }

    fn mark_degraded(&mut self, accounts: &[Address]) {
        for account in accounts {
            if self.degraded.insert(*account) {
                error!(account = ?&account[..4], "Account marked degraded");
            }
        }
    }

    // =========================================================================
    // ERROR MAPPING
    // =========================================================================

    fn reject_registry(op_id: OpId, err: RegistryError) -> OperationOutcome {
        use shared_types::ResultCode as Code;
        let code = match err {
            RegistryError::Unauthorized { .. } | RegistryError::SelfCertification => {
                Code::Unauthorized
            }
            RegistryError::RoleConflict { .. } | RegistryError::AlreadyRegistered { .. } => {
                Code::AlreadyRegistered
            }
            RegistryError::AlreadyCertified { .. } => Code::AlreadyCertified,
            RegistryError::UnknownAccount { .. } => Code::NotRegistered,
            RegistryError::InvalidAddress => Code::InvalidAddress,
        };
        OperationOutcome::rejected(op_id, code)
    }

    fn reject_fee(op_id: OpId, err: FeeError) -> OperationOutcome {
        use shared_types::ResultCode as Code;
        let code = match err {
            FeeError::InvalidAmount { .. } => Code::InvalidAmount,
            FeeError::FeeNotSet => Code::FeeNotSet,
        };
        OperationOutcome::rejected(op_id, code)
    }

    fn reject_emissions(op_id: OpId, err: EmissionsError) -> OperationOutcome {
        use shared_types::ResultCode as Code;
        let code = match err {
            EmissionsError::InvalidQuantity { .. } | EmissionsError::EmptyGasType => {
                Code::InvalidAmount
            }
            EmissionsError::RecordNotFound { .. } => Code::RecordNotFound,
            EmissionsError::AlreadyVerified { .. } => Code::AlreadyVerified,
        };
        OperationOutcome::rejected(op_id, code)
    }

    fn reject_credit(op_id: OpId, err: CreditError) -> OperationOutcome {
        use shared_types::ResultCode as Code;
        let code = match err {
            CreditError::InvalidAmount { .. } | CreditError::Overflow { .. } => Code::InvalidAmount,
            CreditError::InsufficientBalance { .. } => Code::InsufficientBalance,
            CreditError::ReservationExists { .. } | CreditError::ReservationNotFound { .. } => {
                Code::DuplicateOperation
            }
        };
        OperationOutcome::rejected(op_id, code)
    }

    // =========================================================================
    // READ-ONLY QUERIES
    // =========================================================================

    /// The bootstrap Regulator address.
    pub fn regulator(&self) -> Address {
        self.registry.regulator()
    }

    /// The current registration fee, if one has been set.
    pub fn fee(&self) -> Option<Amount> {
        self.fees.current().ok()
    }

    /// The ordered audit trail of fee changes.
    pub fn fee_history(&self) -> &[FeeEntry] {
        self.fees.history()
    }

    /// Is this address an active registrant?
    pub fn is_registered(&self, address: &Address) -> bool {
        self.registry.is_registered(address)
    }

    /// Is this address a certified organization?
    pub fn is_certified(&self, address: &Address) -> bool {
        self.registry.is_certified(address)
    }

    /// Emission records for a factory, in insertion order.
    pub fn list_emissions(&self, factory: &Address) -> &[EmissionRecord] {
        self.emissions.list(factory)
    }

    /// Sum of verified emission quantities for a factory.
    pub fn verified_total(&self, factory: &Address) -> Amount {
        self.emissions.verified_total(factory)
    }

    /// Available credit balance for an account.
    pub fn balance_of(&self, address: &Address) -> Amount {
        self.credits.balance_of(address)
    }

    /// All committed credit movements, append-only.
    pub fn transfers(&self) -> &[Transfer] {
        self.credits.transfers()
    }

    /// Sum of all balances plus live holds.
    pub fn total_supply(&self) -> Amount {
        self.credits.total_supply()
    }

    /// Is this account refusing writes pending repair?
    pub fn is_degraded(&self, address: &Address) -> bool {
        self.degraded.contains(address)
    }

    /// Timestamp from the engine's clock. Exposed for callers that stamp
    /// their own audit entries.
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }
}
