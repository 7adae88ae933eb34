//! # Identity Registry Aggregate
//!
//! Single owner of all account records. Every mutation validates before it
//! writes; a rejected call leaves the registry untouched.

use std::collections::HashMap;

use shared_types::{AccountRecord, Address, Role, ZERO_ADDRESS};

use super::errors::RegistryError;

/// Whether a factory may register itself or needs the Regulator.
///
/// The stricter policy is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationPolicy {
    /// Factory registration requires the Regulator as caller.
    #[default]
    RegulatorGated,
    /// A factory may submit its own registration.
    SelfService,
}

/// Account records keyed by address, plus the fixed Regulator identity.
///
/// INVARIANTS:
/// - INVARIANT-1: Exactly one Regulator, set at bootstrap, never reassigned
/// - INVARIANT-2: `register` is idempotent per (address, role) pair
/// - INVARIANT-3: `certify` flips `certified` false -> true exactly once
/// - INVARIANT-4: The Regulator cannot certify itself
#[derive(Debug)]
pub struct IdentityRegistry {
    /// The bootstrap Regulator. Immutable for the registry's lifetime.
    regulator: Address,
    /// All known accounts, the Regulator's record included.
    accounts: HashMap<Address, AccountRecord>,
    /// Factory registration gating.
    policy: RegistrationPolicy,
}

impl IdentityRegistry {
    /// Creates a registry with the given Regulator identity and the default
    /// (Regulator-gated) registration policy.
    pub fn bootstrap(regulator: Address) -> Self {
        Self::bootstrap_with_policy(regulator, RegistrationPolicy::default())
    }

    /// Creates a registry with an explicit registration policy.
    pub fn bootstrap_with_policy(regulator: Address, policy: RegistrationPolicy) -> Self {
        let mut accounts = HashMap::new();
        accounts.insert(
            regulator,
            AccountRecord {
                address: regulator,
                role: Role::Regulator,
                registered: true,
                certified: false,
            },
        );
        Self {
            regulator,
            accounts,
            policy,
        }
    }

    /// The bootstrap Regulator address.
    pub fn regulator(&self) -> Address {
        self.regulator
    }

    /// The active registration policy.
    pub fn policy(&self) -> RegistrationPolicy {
        self.policy
    }

    /// True if the caller is the Regulator.
    pub fn is_regulator(&self, caller: &Address) -> bool {
        *caller == self.regulator
    }

    /// Registers `address` with `role`.
    ///
    /// Idempotent for an identical (address, role) pair. Factory
    /// registration immediately activates the record when permitted;
    /// organizations stay inactive until their registration fee settles.
    ///
    /// # Errors
    /// - `InvalidAddress` for the zero address
    /// - `Unauthorized` when the policy requires the Regulator and the
    ///   caller is someone else, or when `role` is `Regulator`
    /// - `RoleConflict` when the address already holds a different role
    pub fn register(
        &mut self,
        caller: Address,
        address: Address,
        role: Role,
    ) -> Result<(), RegistryError> {
        if address == ZERO_ADDRESS {
            return Err(RegistryError::InvalidAddress);
        }

        // INVARIANT-1: the Regulator is fixed at bootstrap.
        if role == Role::Regulator || address == self.regulator {
            return Err(RegistryError::Unauthorized { caller });
        }

        match role {
            Role::Factory => self.check_factory_gate(caller, address)?,
            Role::Organization => {
                // Self-service or Regulator-submitted.
                if caller != address && caller != self.regulator {
                    return Err(RegistryError::Unauthorized { caller });
                }
            }
            Role::Regulator | Role::Unregistered => {
                return Err(RegistryError::Unauthorized { caller });
            }
        }

        if let Some(existing) = self.accounts.get(&address) {
            if existing.role == role {
                // INVARIANT-2: idempotent re-registration.
                return Ok(());
            }
            return Err(RegistryError::RoleConflict {
                address,
                held: existing.role,
                requested: role,
            });
        }

        let mut record = AccountRecord::new(address, role);
        // A factory admitted through the gate is active immediately; an
        // organization activates when its fee settles.
        record.registered = role == Role::Factory;
        self.accounts.insert(address, record);
        Ok(())
    }

    fn check_factory_gate(
        &self,
        caller: Address,
        factory: Address,
    ) -> Result<(), RegistryError> {
        match self.policy {
            RegistrationPolicy::RegulatorGated => {
                if caller != self.regulator {
                    return Err(RegistryError::Unauthorized { caller });
                }
            }
            RegistrationPolicy::SelfService => {
                if caller != factory && caller != self.regulator {
                    return Err(RegistryError::Unauthorized { caller });
                }
            }
        }
        Ok(())
    }

    /// Certifies `organization`.
    ///
    /// Creates the account record on first certification. A record holding
    /// a non-organization role is a conflict.
    ///
    /// # Errors
    /// - `Unauthorized` when the caller is not the Regulator
    /// - `SelfCertification` when the Regulator targets itself
    /// - `AlreadyCertified` when certification already happened
    /// - `RoleConflict` when the address holds a non-organization role
    pub fn certify(
        &mut self,
        caller: Address,
        organization: Address,
    ) -> Result<(), RegistryError> {
        if organization == ZERO_ADDRESS {
            return Err(RegistryError::InvalidAddress);
        }
        if caller != self.regulator {
            return Err(RegistryError::Unauthorized { caller });
        }
        if organization == self.regulator {
            return Err(RegistryError::SelfCertification);
        }

        match self.accounts.get_mut(&organization) {
            Some(record) => {
                if record.role != Role::Organization {
                    return Err(RegistryError::RoleConflict {
                        address: organization,
                        held: record.role,
                        requested: Role::Organization,
                    });
                }
                if record.certified {
                    return Err(RegistryError::AlreadyCertified {
                        address: organization,
                    });
                }
                record.certified = true;
                Ok(())
            }
            None => {
                // Account created on first certification call.
                let mut record = AccountRecord::new(organization, Role::Organization);
                record.certified = true;
                self.accounts.insert(organization, record);
                Ok(())
            }
        }
    }

    /// Ensures a payer record exists ahead of a fee payment.
    ///
    /// Unknown payers are admitted as organizations; an already-active
    /// registrant is rejected so the fee cannot be charged twice.
    pub fn ensure_payer(&mut self, payer: Address) -> Result<(), RegistryError> {
        if payer == ZERO_ADDRESS {
            return Err(RegistryError::InvalidAddress);
        }
        match self.accounts.get(&payer) {
            Some(record) if record.registered => {
                Err(RegistryError::AlreadyRegistered { address: payer })
            }
            Some(_) => Ok(()),
            None => {
                self.accounts
                    .insert(payer, AccountRecord::new(payer, Role::Organization));
                Ok(())
            }
        }
    }

    /// Activates an account after its registration fee settled.
    pub fn mark_registered(&mut self, address: Address) -> Result<(), RegistryError> {
        match self.accounts.get_mut(&address) {
            Some(record) => {
                if record.registered {
                    return Err(RegistryError::AlreadyRegistered { address });
                }
                record.registered = true;
                Ok(())
            }
            None => Err(RegistryError::UnknownAccount { address }),
        }
    }

    /// Pure query: is this address an active registrant?
    pub fn is_registered(&self, address: &Address) -> bool {
        self.accounts
            .get(address)
            .map(|r| r.registered)
            .unwrap_or(false)
    }

    /// Pure query: is this address a certified organization?
    pub fn is_certified(&self, address: &Address) -> bool {
        self.accounts
            .get(address)
            .map(|r| r.certified)
            .unwrap_or(false)
    }

    /// Pure query: the role held by this address.
    pub fn role_of(&self, address: &Address) -> Role {
        self.accounts
            .get(address)
            .map(|r| r.role)
            .unwrap_or(Role::Unregistered)
    }

    /// Pure query: the full account record, if one exists.
    pub fn account(&self, address: &Address) -> Option<&AccountRecord> {
        self.accounts.get(address)
    }
}
