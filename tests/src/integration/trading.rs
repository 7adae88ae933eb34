//! # Trading Scenarios
//!
//! Credit allocation and purchase flows, including the conservation
//! property and the allocation-policy boundary.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cap_05_engine::domain::policy::VerifiedEmissionsCap;
    use cap_05_engine::CarbonCapEngine;
    use cap_runtime::adapters::{DevSettlement, InMemoryOpStore};
    use cap_runtime::bootstrap::RegistryBootstrap;
    use cap_runtime::container::RuntimeConfig;
    use cap_runtime::RegistryRuntime;
    use shared_types::{Address, OpId, OperationPayload, OperationRequest, ResultCode};
    use uuid::Uuid;

    const REGULATOR: Address = [0x01; 20];
    const FACTORY: Address = [0xF1; 20];
    const ORG_A: Address = [0x0A; 20];
    const ORG_B: Address = [0x0B; 20];

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn request(caller: Address, payload: OperationPayload) -> OperationRequest {
        OperationRequest {
            op_id: OpId::new(Uuid::new_v4().to_string()),
            caller,
            payload,
        }
    }

    /// Runtime with FACTORY registered and funded, ORG_A and ORG_B
    /// certified.
    async fn trading_runtime(factory_credits: u64) -> RegistryRuntime {
        let config = RuntimeConfig {
            regulator: REGULATOR,
            ..RuntimeConfig::default()
        };
        let runtime = RegistryRuntime::new(config).expect("bootstrap");

        runtime
            .submit(request(
                REGULATOR,
                OperationPayload::RegisterFactory { factory: FACTORY },
            ))
            .await;
        for organization in [ORG_A, ORG_B] {
            runtime
                .submit(request(
                    REGULATOR,
                    OperationPayload::CertifyOrganization { organization },
                ))
                .await;
        }
        if factory_credits > 0 {
            let outcome = runtime
                .submit(request(
                    REGULATOR,
                    OperationPayload::AllocateCredits {
                        factory: FACTORY,
                        amount: factory_credits,
                    },
                ))
                .await;
            assert!(outcome.is_ok());
        }
        runtime
    }

    // =============================================================================
    // PURCHASE AND CONSERVATION
    // =============================================================================

    #[tokio::test]
    async fn test_purchase_moves_exactly_the_amount() {
        let runtime = trading_runtime(1_000).await;

        let outcome = runtime
            .submit(request(
                ORG_A,
                OperationPayload::BuyCredits {
                    factory: FACTORY,
                    amount: 600,
                },
            ))
            .await;
        assert_eq!(outcome.code, ResultCode::Ok);

        assert_eq!(runtime.balance_of(&FACTORY).await, 400);
        assert_eq!(runtime.balance_of(&ORG_A).await, 600);

        let transfers = runtime.transfers().await;
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].from, FACTORY);
        assert_eq!(transfers[0].to, ORG_A);
        assert_eq!(transfers[0].amount, 600);

        // The next overdraw changes nothing.
        let outcome = runtime
            .submit(request(
                ORG_A,
                OperationPayload::BuyCredits {
                    factory: FACTORY,
                    amount: 500,
                },
            ))
            .await;
        assert_eq!(outcome.code, ResultCode::InsufficientBalance);
        assert_eq!(runtime.balance_of(&FACTORY).await, 400);
        assert_eq!(runtime.balance_of(&ORG_A).await, 600);
    }

    #[tokio::test]
    async fn test_supply_conserved_across_many_purchases() {
        let runtime = trading_runtime(1_000).await;

        for (buyer, amount) in [(ORG_A, 250), (ORG_B, 400), (ORG_A, 100)] {
            let outcome = runtime
                .submit(request(
                    buyer,
                    OperationPayload::BuyCredits {
                        factory: FACTORY,
                        amount,
                    },
                ))
                .await;
            assert_eq!(outcome.code, ResultCode::Ok);
        }

        let factory = runtime.balance_of(&FACTORY).await;
        let org_a = runtime.balance_of(&ORG_A).await;
        let org_b = runtime.balance_of(&ORG_B).await;

        assert_eq!(factory, 250);
        assert_eq!(org_a, 350);
        assert_eq!(org_b, 400);
        // Conservation: nothing minted, nothing lost.
        assert_eq!(factory + org_a + org_b, 1_000);
        assert_eq!(runtime.transfers().await.len(), 3);
    }

    #[tokio::test]
    async fn test_uncertified_buyer_changes_nothing() {
        let runtime = trading_runtime(1_000).await;
        let uncertified: Address = [0x0C; 20];

        let outcome = runtime
            .submit(request(
                uncertified,
                OperationPayload::BuyCredits {
                    factory: FACTORY,
                    amount: 100,
                },
            ))
            .await;

        assert_eq!(outcome.code, ResultCode::NotCertified);
        assert_eq!(runtime.balance_of(&FACTORY).await, 1_000);
        assert_eq!(runtime.balance_of(&uncertified).await, 0);
        assert!(runtime.transfers().await.is_empty());
    }

    #[tokio::test]
    async fn test_buying_from_unregistered_factory_rejected() {
        let runtime = trading_runtime(0).await;
        let ghost_factory: Address = [0x99; 20];

        let outcome = runtime
            .submit(request(
                ORG_A,
                OperationPayload::BuyCredits {
                    factory: ghost_factory,
                    amount: 100,
                },
            ))
            .await;

        assert_eq!(outcome.code, ResultCode::NotRegistered);
    }

    // =============================================================================
    // ALLOCATION AND THE POLICY BOUNDARY
    // =============================================================================

    #[tokio::test]
    async fn test_allocation_is_regulator_only() {
        let runtime = trading_runtime(0).await;

        let outcome = runtime
            .submit(request(
                FACTORY,
                OperationPayload::AllocateCredits {
                    factory: FACTORY,
                    amount: 1_000,
                },
            ))
            .await;

        assert_eq!(outcome.code, ResultCode::Unauthorized);
        assert_eq!(runtime.balance_of(&FACTORY).await, 0);
    }

    /// The emissions-to-allotment formula is a policy decision, not a
    /// ledger rule: the same allocation flips from denied to admitted by
    /// swapping the injected policy, with no ledger change involved.
    #[tokio::test]
    async fn test_allocation_policy_is_injectable() {
        let config = RuntimeConfig {
            regulator: REGULATOR,
            ..RuntimeConfig::default()
        };
        let engine: CarbonCapEngine = RegistryBootstrap::new(config)
            .with_allocation_policy(Arc::new(VerifiedEmissionsCap))
            .build(
                Arc::new(DevSettlement::new(REGULATOR)),
                Arc::new(InMemoryOpStore::new()),
            )
            .expect("bootstrap");
        let runtime = RegistryRuntime::with_engine(engine);

        runtime
            .submit(request(
                REGULATOR,
                OperationPayload::RegisterFactory { factory: FACTORY },
            ))
            .await;

        // No verified volume: the cap policy denies.
        let outcome = runtime
            .submit(request(
                REGULATOR,
                OperationPayload::AllocateCredits {
                    factory: FACTORY,
                    amount: 500,
                },
            ))
            .await;
        assert_eq!(outcome.code, ResultCode::InvalidAmount);
        assert_eq!(runtime.balance_of(&FACTORY).await, 0);

        // Record and verify 500 units, then the allocation is admitted.
        runtime
            .submit(request(
                FACTORY,
                OperationPayload::RecordEmissions {
                    gas_type: "CO2".to_string(),
                    quantity: 500,
                },
            ))
            .await;
        runtime
            .submit(request(
                REGULATOR,
                OperationPayload::VerifyEmissions {
                    factory: FACTORY,
                    sequence_id: 1,
                },
            ))
            .await;

        let outcome = runtime
            .submit(request(
                REGULATOR,
                OperationPayload::AllocateCredits {
                    factory: FACTORY,
                    amount: 500,
                },
            ))
            .await;
        assert_eq!(outcome.code, ResultCode::Ok);
        assert_eq!(runtime.balance_of(&FACTORY).await, 500);
    }

    #[tokio::test]
    async fn test_default_policy_needs_no_verified_volume() {
        // The default runtime policy is explicitly uncapped: allocation
        // succeeds with zero verified emissions.
        let runtime = trading_runtime(750).await;
        assert_eq!(runtime.balance_of(&FACTORY).await, 750);
    }
}
