//! # Governance Spoofing
//!
//! Attempts to push protocol-level actions from the wrong place: a
//! non-governance emitter, a superseded guardian set, a packet aimed at
//! another chain, or a skipped rotation index.

#[cfg(test)]
mod tests {
    use crate::helpers::*;
    use sb_04_governance::{GovernanceError, ACTION_GUARDIAN_SET_ROTATION, CORE_MODULE};
    use shared_types::UniversalAddress;

    const NOW: u64 = 1_700_000_000;

    #[test]
    fn test_non_governance_emitter_rejected() {
        let ring = GuardianKeyring::generate(6);
        let mut core = deploy_core(&ring);
        let attacker_set = GuardianKeyring::generate(6);

        // Properly quorum-signed, well-formed rotation packet, but from
        // an application emitter instead of the governance contract.
        let raw = FrameBuilder::new()
            .quorum_signers(&ring)
            .emitter(7, UniversalAddress::from_native(&[0x66; 20]).unwrap())
            .payload(governance_packet(
                &CORE_MODULE,
                ACTION_GUARDIAN_SET_ROTATION,
                0,
                &rotation_payload(1, &attacker_set.ids),
            ))
            .build(&ring);

        let err = core.submit_governance(&raw, NOW).unwrap_err();
        assert_eq!(err, GovernanceError::NotGovernanceEmitter);
        assert_eq!(core.registry().current_index(), 0);
    }

    #[test]
    fn test_spoofed_governance_chain_rejected() {
        let ring = GuardianKeyring::generate(6);
        let mut core = deploy_core(&ring);

        // Right governance address, wrong chain.
        let raw = FrameBuilder::new()
            .quorum_signers(&ring)
            .emitter(GOV_CHAIN + 3, GOV_ADDRESS)
            .payload(governance_packet(
                &CORE_MODULE,
                ACTION_GUARDIAN_SET_ROTATION,
                0,
                &rotation_payload(1, &ring.ids),
            ))
            .build(&ring);

        assert_eq!(
            core.submit_governance(&raw, NOW).unwrap_err(),
            GovernanceError::NotGovernanceEmitter
        );
    }

    #[test]
    fn test_retired_set_cannot_rotate_again() {
        let ring = GuardianKeyring::generate(6);
        let mut core = deploy_core(&ring);
        let honest_next = GuardianKeyring::generate(6);
        let attacker_set = GuardianKeyring::generate(6);

        let rotate = FrameBuilder::new()
            .quorum_signers(&ring)
            .governance(
                ACTION_GUARDIAN_SET_ROTATION,
                0,
                &rotation_payload(1, &honest_next.ids),
            )
            .build(&ring);
        core.submit_governance(&rotate, NOW).unwrap();

        // The old set is still inside its grace period, but governance
        // must refuse it outright.
        let coup = FrameBuilder::new()
            .guardian_set(0)
            .sequence(2)
            .quorum_signers(&ring)
            .governance(
                ACTION_GUARDIAN_SET_ROTATION,
                0,
                &rotation_payload(2, &attacker_set.ids),
            )
            .build(&ring);

        let err = core.submit_governance(&coup, NOW + 60).unwrap_err();
        assert_eq!(
            err,
            GovernanceError::StaleGuardianSet { current: 1, got: 0 }
        );
        assert_eq!(core.registry().current().guardians(), honest_next.ids.as_slice());
    }

    #[test]
    fn test_packet_for_another_chain_rejected() {
        let ring = GuardianKeyring::generate(6);
        let mut core = deploy_core(&ring);
        let next = GuardianKeyring::generate(6);

        let raw = FrameBuilder::new()
            .quorum_signers(&ring)
            .governance(
                ACTION_GUARDIAN_SET_ROTATION,
                LOCAL_CHAIN + 1,
                &rotation_payload(1, &next.ids),
            )
            .build(&ring);

        let err = core.submit_governance(&raw, NOW).unwrap_err();
        assert!(matches!(err, GovernanceError::TargetMismatch { .. }));
    }

    #[test]
    fn test_skipped_rotation_index_rejected() {
        let ring = GuardianKeyring::generate(6);
        let mut core = deploy_core(&ring);
        let next = GuardianKeyring::generate(6);

        let raw = FrameBuilder::new()
            .quorum_signers(&ring)
            .governance(
                ACTION_GUARDIAN_SET_ROTATION,
                0,
                &rotation_payload(5, &next.ids),
            )
            .build(&ring);

        let err = core.submit_governance(&raw, NOW).unwrap_err();
        assert!(matches!(err, GovernanceError::Registry(_)));
        assert_eq!(core.registry().current_index(), 0);
    }

    #[test]
    fn test_wrong_module_rejected() {
        let ring = GuardianKeyring::generate(6);
        let mut core = deploy_core(&ring);
        let next = GuardianKeyring::generate(6);

        let mut module = CORE_MODULE;
        module[0] = 0xFF;
        let raw = FrameBuilder::new()
            .quorum_signers(&ring)
            .emitter(GOV_CHAIN, GOV_ADDRESS)
            .payload(governance_packet(
                &module,
                ACTION_GUARDIAN_SET_ROTATION,
                0,
                &rotation_payload(1, &next.ids),
            ))
            .build(&ring);

        assert_eq!(
            core.submit_governance(&raw, NOW).unwrap_err(),
            GovernanceError::WrongModule
        );
    }

    #[test]
    fn test_empty_rotation_roster_rejected() {
        let ring = GuardianKeyring::generate(6);
        let mut core = deploy_core(&ring);

        let raw = FrameBuilder::new()
            .quorum_signers(&ring)
            .governance(ACTION_GUARDIAN_SET_ROTATION, 0, &rotation_payload(1, &[]))
            .build(&ring);

        let err = core.submit_governance(&raw, NOW).unwrap_err();
        assert!(matches!(err, GovernanceError::Registry(_)));
        assert_eq!(core.registry().current_index(), 0);
    }
}
