//! # Lifecycle Scenarios
//!
//! Registration, emissions recording/verification, and fee payment driven
//! end-to-end through the runtime with the development adapters.

#[cfg(test)]
mod tests {
    use cap_runtime::container::RuntimeConfig;
    use cap_runtime::RegistryRuntime;
    use shared_types::{
        Address, OpId, OperationData, OperationPayload, OperationRequest, ResultCode,
    };
    use uuid::Uuid;

    const REGULATOR: Address = [0x01; 20];

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn runtime() -> RegistryRuntime {
        let config = RuntimeConfig {
            regulator: REGULATOR,
            ..RuntimeConfig::default()
        };
        RegistryRuntime::new(config).expect("bootstrap")
    }

    fn request(caller: Address, payload: OperationPayload) -> OperationRequest {
        OperationRequest {
            op_id: OpId::new(Uuid::new_v4().to_string()),
            caller,
            payload,
        }
    }

    // =============================================================================
    // REGISTRATION AND EMISSIONS
    // =============================================================================

    #[tokio::test]
    async fn test_factory_lifecycle_register_record_verify() {
        let runtime = runtime();
        let factory: Address = rand::random();

        // Regulator-gated registration: the factory cannot admit itself.
        let outcome = runtime
            .submit(request(
                factory,
                OperationPayload::RegisterFactory { factory },
            ))
            .await;
        assert_eq!(outcome.code, ResultCode::Unauthorized);
        assert!(!runtime.is_registered(&factory).await);

        let outcome = runtime
            .submit(request(
                REGULATOR,
                OperationPayload::RegisterFactory { factory },
            ))
            .await;
        assert_eq!(outcome.code, ResultCode::Ok);
        assert!(runtime.is_registered(&factory).await);

        // First record gets sequence id 1, unverified.
        let outcome = runtime
            .submit(request(
                factory,
                OperationPayload::RecordEmissions {
                    gas_type: "CO2".to_string(),
                    quantity: 100,
                },
            ))
            .await;
        assert_eq!(outcome.code, ResultCode::Ok);
        assert_eq!(outcome.data, Some(OperationData::SequenceId(1)));

        let records = runtime.list_emissions(&factory).await;
        assert_eq!(records.len(), 1);
        assert!(!records[0].verified);

        // Verification stamps the Regulator and sticks.
        let outcome = runtime
            .submit(request(
                REGULATOR,
                OperationPayload::VerifyEmissions {
                    factory,
                    sequence_id: 1,
                },
            ))
            .await;
        assert_eq!(outcome.code, ResultCode::Ok);

        let records = runtime.list_emissions(&factory).await;
        assert!(records[0].verified);
        assert_eq!(records[0].verified_by, Some(REGULATOR));

        let outcome = runtime
            .submit(request(
                REGULATOR,
                OperationPayload::VerifyEmissions {
                    factory,
                    sequence_id: 1,
                },
            ))
            .await;
        assert_eq!(outcome.code, ResultCode::AlreadyVerified);
    }

    #[tokio::test]
    async fn test_unregistered_factory_leaves_no_record() {
        let runtime = runtime();
        let stranger: Address = [0x77; 20];

        let outcome = runtime
            .submit(request(
                stranger,
                OperationPayload::RecordEmissions {
                    gas_type: "CO2".to_string(),
                    quantity: 50,
                },
            ))
            .await;

        assert_eq!(outcome.code, ResultCode::NotRegistered);
        assert!(runtime.list_emissions(&stranger).await.is_empty());
    }

    #[tokio::test]
    async fn test_sequence_ids_stay_per_factory() {
        let runtime = runtime();
        let f1: Address = [0xF1; 20];
        let f2: Address = [0xF2; 20];

        for factory in [f1, f2] {
            runtime
                .submit(request(
                    REGULATOR,
                    OperationPayload::RegisterFactory { factory },
                ))
                .await;
        }

        for quantity in [10, 20, 30] {
            runtime
                .submit(request(
                    f1,
                    OperationPayload::RecordEmissions {
                        gas_type: "CO2".to_string(),
                        quantity,
                    },
                ))
                .await;
        }
        let outcome = runtime
            .submit(request(
                f2,
                OperationPayload::RecordEmissions {
                    gas_type: "CH4".to_string(),
                    quantity: 5,
                },
            ))
            .await;

        // f2's counter is independent of f1's.
        assert_eq!(outcome.data, Some(OperationData::SequenceId(1)));
        assert_eq!(runtime.list_emissions(&f1).await.len(), 3);
        assert_eq!(runtime.list_emissions(&f2).await.len(), 1);
    }

    #[tokio::test]
    async fn test_organization_self_registration_and_role_conflict() {
        let runtime = runtime();
        let organization: Address = [0x0A; 20];

        // An organization may submit its own registration; it stays
        // inactive until the fee settles.
        let outcome = runtime
            .submit(request(
                organization,
                OperationPayload::RegisterOrganization { organization },
            ))
            .await;
        assert_eq!(outcome.code, ResultCode::Ok);
        assert!(!runtime.is_registered(&organization).await);

        // Re-registration with the same role is an idempotent no-op.
        let outcome = runtime
            .submit(request(
                organization,
                OperationPayload::RegisterOrganization { organization },
            ))
            .await;
        assert_eq!(outcome.code, ResultCode::Ok);

        // The same address cannot come back as a factory.
        let outcome = runtime
            .submit(request(
                REGULATOR,
                OperationPayload::RegisterFactory {
                    factory: organization,
                },
            ))
            .await;
        assert_eq!(outcome.code, ResultCode::AlreadyRegistered);
    }

    // =============================================================================
    // REGISTRATION FEE
    // =============================================================================

    #[tokio::test]
    async fn test_fee_set_pay_and_repeat() {
        let runtime = runtime();
        let organization: Address = [0x0A; 20];

        assert_eq!(runtime.fee().await, None);

        let outcome = runtime
            .submit(request(REGULATOR, OperationPayload::SetFee { amount: 5 }))
            .await;
        assert_eq!(outcome.code, ResultCode::Ok);
        assert_eq!(runtime.fee().await, Some(5));

        let outcome = runtime
            .submit(request(organization, OperationPayload::PayRegistrationFee))
            .await;
        assert_eq!(outcome.code, ResultCode::Ok);
        assert!(runtime.is_registered(&organization).await);

        let outcome = runtime
            .submit(request(organization, OperationPayload::PayRegistrationFee))
            .await;
        assert_eq!(outcome.code, ResultCode::AlreadyRegistered);
    }

    #[tokio::test]
    async fn test_zero_fee_rejected() {
        let runtime = runtime();
        let outcome = runtime
            .submit(request(REGULATOR, OperationPayload::SetFee { amount: 0 }))
            .await;
        assert_eq!(outcome.code, ResultCode::InvalidAmount);
        assert_eq!(runtime.fee().await, None);
    }

    // =============================================================================
    // CERTIFICATION
    // =============================================================================

    #[tokio::test]
    async fn test_certification_is_regulator_only_and_once() {
        let runtime = runtime();
        let organization: Address = [0x0A; 20];
        let impostor: Address = [0x66; 20];

        let outcome = runtime
            .submit(request(
                impostor,
                OperationPayload::CertifyOrganization { organization },
            ))
            .await;
        assert_eq!(outcome.code, ResultCode::Unauthorized);
        assert!(!runtime.is_certified(&organization).await);

        let outcome = runtime
            .submit(request(
                REGULATOR,
                OperationPayload::CertifyOrganization { organization },
            ))
            .await;
        assert_eq!(outcome.code, ResultCode::Ok);
        assert!(runtime.is_certified(&organization).await);

        let outcome = runtime
            .submit(request(
                REGULATOR,
                OperationPayload::CertifyOrganization { organization },
            ))
            .await;
        assert_eq!(outcome.code, ResultCode::AlreadyCertified);
    }
}
