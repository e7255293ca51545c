//! # Test Helpers
//!
//! Guardian keyrings and signed-frame builders shared by the
//! integration and exploit suites.

use k256::ecdsa::SigningKey;
use sb_01_wire_codec::ByteWriter;
use sb_02_guardian_registry::GuardianSet;
use sb_03_message_verification::{
    guardian_id_from_pubkey, MessageBody, RecoverableSignature, SignedMessage, PROTOCOL_VERSION,
};
use sb_04_governance::{CoreConfig, CoreService, GovernanceEmitter, CORE_MODULE};
use shared_types::{ChainId, GuardianId, Hash, UniversalAddress};

/// Governance emitter chain used across the suite.
pub const GOV_CHAIN: ChainId = 1;

/// Governance emitter address used across the suite.
pub const GOV_ADDRESS: UniversalAddress = UniversalAddress::new([0x04; 32]);

/// This ledger's chain id in the suite.
pub const LOCAL_CHAIN: ChainId = 18;

/// Default grace period for superseded guardian sets, in seconds.
pub const GRACE_PERIOD_SECS: u64 = 86_400;

/// Install a fmt subscriber for tests that want visible tracing output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

/// A set of guardian signing keys with their derived 20-byte ids.
pub struct GuardianKeyring {
    pub keys: Vec<SigningKey>,
    pub ids: Vec<GuardianId>,
}

impl GuardianKeyring {
    /// Generate `n` random guardians.
    pub fn generate(n: usize) -> Self {
        let mut keys = Vec::with_capacity(n);
        let mut ids = Vec::with_capacity(n);
        for _ in 0..n {
            let key = SigningKey::random(&mut rand::thread_rng());
            ids.push(guardian_id_from_pubkey(key.verifying_key()));
            keys.push(key);
        }
        Self { keys, ids }
    }

    /// Quorum threshold for this keyring's size.
    pub fn quorum(&self) -> usize {
        self.ids.len() * 2 / 3 + 1
    }

    /// Sign a digest as the guardian at `index`.
    pub fn sign(&self, digest: &Hash, index: u8) -> RecoverableSignature {
        let (sig, recid) = self.keys[index as usize]
            .sign_prehash_recoverable(digest)
            .expect("signing failed");
        let bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        RecoverableSignature {
            guardian_index: index,
            r,
            s,
            recovery_id: recid.to_byte(),
        }
    }
}

/// Builder for signed wire frames, in the style of the deployment's
/// relayers.
pub struct FrameBuilder {
    guardian_set_index: u32,
    signer_indices: Vec<u8>,
    body: MessageBody,
}

impl FrameBuilder {
    /// Start from an observed event with sensible defaults.
    pub fn new() -> Self {
        Self {
            guardian_set_index: 0,
            signer_indices: vec![],
            body: MessageBody {
                timestamp: 1_700_000_000,
                nonce: 0,
                emitter_chain: 2,
                emitter_address: UniversalAddress::new([0x74; 32]),
                sequence: 0,
                consistency_level: 1,
                payload: vec![],
            },
        }
    }

    /// Reference a guardian set by index.
    pub fn guardian_set(mut self, index: u32) -> Self {
        self.guardian_set_index = index;
        self
    }

    /// Sign with the guardians at these roster indices, in this order.
    pub fn signers(mut self, indices: &[u8]) -> Self {
        self.signer_indices = indices.to_vec();
        self
    }

    /// Sign with the first `quorum` guardians of a keyring.
    pub fn quorum_signers(mut self, ring: &GuardianKeyring) -> Self {
        self.signer_indices = (0..ring.quorum() as u8).collect();
        self
    }

    /// Set the emitter (chain, address).
    pub fn emitter(mut self, chain: ChainId, address: UniversalAddress) -> Self {
        self.body.emitter_chain = chain;
        self.body.emitter_address = address;
        self
    }

    /// Set the emitter sequence number.
    pub fn sequence(mut self, sequence: u64) -> Self {
        self.body.sequence = sequence;
        self
    }

    /// Set the body payload.
    pub fn payload(mut self, payload: Vec<u8>) -> Self {
        self.body.payload = payload;
        self
    }

    /// Carry a governance packet from the governance emitter.
    pub fn governance(
        self,
        action: u8,
        target_chain: ChainId,
        action_payload: &[u8],
    ) -> Self {
        self.emitter(GOV_CHAIN, GOV_ADDRESS)
            .payload(governance_packet(&CORE_MODULE, action, target_chain, action_payload))
    }

    /// Sign and encode the frame.
    pub fn build(self, ring: &GuardianKeyring) -> Vec<u8> {
        let digest = self.body.digest();
        let signatures = self
            .signer_indices
            .iter()
            .map(|&i| ring.sign(&digest, i))
            .collect();
        SignedMessage {
            version: PROTOCOL_VERSION,
            guardian_set_index: self.guardian_set_index,
            signatures,
            body: self.body,
            digest,
        }
        .to_bytes()
    }
}

impl Default for FrameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a governance packet prefix plus action payload.
pub fn governance_packet(
    module: &[u8; 32],
    action: u8,
    target_chain: ChainId,
    action_payload: &[u8],
) -> Vec<u8> {
    let mut w = ByteWriter::with_capacity(35 + action_payload.len());
    w.push_bytes(module);
    w.push_u8(action);
    w.push_u16(target_chain);
    w.push_bytes(action_payload);
    w.into_bytes()
}

/// Encode a guardian-set rotation action payload.
pub fn rotation_payload(new_index: u32, guardians: &[GuardianId]) -> Vec<u8> {
    let mut w = ByteWriter::new();
    w.push_u32(new_index);
    w.push_u8(guardians.len() as u8);
    for guardian in guardians {
        w.push_bytes(guardian);
    }
    w.into_bytes()
}

/// Deploy a core service governed by the suite's fixed emitter, with the
/// keyring as guardian set zero.
pub fn deploy_core(ring: &GuardianKeyring) -> CoreService {
    let config = CoreConfig {
        governance: GovernanceEmitter {
            chain: GOV_CHAIN,
            address: GOV_ADDRESS,
        },
        chain_id: LOCAL_CHAIN,
        grace_period_secs: GRACE_PERIOD_SECS,
        schema_version: 1,
    };
    let genesis = GuardianSet::new(0, ring.ids.clone()).expect("non-empty roster");
    CoreService::new(config, genesis)
}
