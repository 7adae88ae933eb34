//! # Operation Envelope
//!
//! Every external request enters the engine as an `OperationRequest`; every
//! response leaves as an `OperationOutcome` carrying exactly one
//! `ResultCode`.
//!
//! The payload enum is closed over the full operation set so that an
//! unhandled operation is a compile error, not a runtime surprise.

use serde::{Deserialize, Serialize};

use crate::entities::{Address, Amount, OpId};

/// A request submitted to the engine.
///
/// `caller` is the authenticated identity as reported by the signing
/// provider; the engine trusts it and performs all role checks against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRequest {
    /// Caller-supplied idempotency key. Only consulted for value-moving
    /// operations, but required on every request for uniformity.
    pub op_id: OpId,
    /// Authenticated caller address.
    pub caller: Address,
    /// The operation to perform.
    pub payload: OperationPayload,
}

/// The closed set of operations the engine accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationPayload {
    /// Register `factory` as an emitter. Regulator-gated by default.
    RegisterFactory { factory: Address },
    /// Register `organization` as a credit buyer.
    RegisterOrganization { organization: Address },
    /// Certify `organization`. Regulator only.
    CertifyOrganization { organization: Address },
    /// Set the current registration fee. Regulator only.
    SetFee { amount: Amount },
    /// Append an emission record for the calling factory.
    RecordEmissions { gas_type: String, quantity: Amount },
    /// Verify one emission record. Regulator only.
    VerifyEmissions { factory: Address, sequence_id: u64 },
    /// Credit `amount` to `factory`. Regulator only, policy-checked.
    AllocateCredits { factory: Address, amount: Amount },
    /// Buy `amount` credits from `factory`. Caller is the organization;
    /// settlement moves payment organization -> factory.
    BuyCredits { factory: Address, amount: Amount },
    /// Pay the current registration fee. Caller is the payer; settlement
    /// moves payment payer -> regulator.
    PayRegistrationFee,
    /// Re-enable writes for an account previously marked degraded.
    /// Regulator only, used after external repair.
    ClearDegraded { account: Address },
}

/// One code per distinct failure class. `Ok` is the only success code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultCode {
    Ok,
    /// Malformed or zero address in the request.
    InvalidAddress,
    /// Caller lacks the role the operation requires.
    Unauthorized,
    /// Target factory (or payer) is not an active registrant.
    NotRegistered,
    /// Payer is already registered.
    AlreadyRegistered,
    /// Organization is not certified.
    NotCertified,
    /// Organization is already certified.
    AlreadyCertified,
    /// Factory balance cannot cover the requested amount.
    InsufficientBalance,
    /// Zero or otherwise invalid amount, or empty gas label.
    InvalidAmount,
    /// No registration fee has been set yet.
    FeeNotSet,
    /// No emission record with the requested sequence id.
    RecordNotFound,
    /// The emission record was already verified.
    AlreadyVerified,
    /// External settlement failed or timed out; any reservation was rolled
    /// back.
    SettlementFailed,
    /// The op id is already in flight, or reused for a different request.
    DuplicateOperation,
    /// The engine refuses writes for an affected account pending external
    /// repair.
    Degraded,
}

impl ResultCode {
    /// True only for `Ok`.
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// Optional data returned alongside a successful result code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationData {
    /// The sequence id assigned by `RecordEmissions`.
    SequenceId(u64),
    /// The settlement provider's reference for a committed value movement.
    SettlementRef(String),
}

/// The engine's reply to an `OperationRequest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationOutcome {
    /// Echo of the request's op id.
    pub op_id: OpId,
    /// Exactly one result code.
    pub code: ResultCode,
    /// Operation-specific data, present only when `code` is `Ok`.
    pub data: Option<OperationData>,
}

impl OperationOutcome {
    /// A success outcome with no data.
    pub fn ok(op_id: OpId) -> Self {
        Self {
            op_id,
            code: ResultCode::Ok,
            data: None,
        }
    }

    /// A success outcome carrying data.
    pub fn ok_with(op_id: OpId, data: OperationData) -> Self {
        Self {
            op_id,
            code: ResultCode::Ok,
            data: Some(data),
        }
    }

    /// A rejection with the given code.
    pub fn rejected(op_id: OpId, code: ResultCode) -> Self {
        Self {
            op_id,
            code,
            data: None,
        }
    }

    /// True only when the operation committed.
    pub fn is_ok(&self) -> bool {
        self.code.is_ok()
    }
}
