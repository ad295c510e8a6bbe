use alloy::primitives::Bytes;
use alloy::sol;
use alloy::sol_types::SolCall;

use crate::args::ValidatorArgs;

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, all_derives)]
    interface ValidatorRegistry {
        #[derive(Debug, PartialEq, Eq)]
        struct G1Point {
            uint256 X;
            uint256 Y;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct G2Point {
            uint256[2] X;
            uint256[2] Y;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct ValidatorProof {
            uint256[2] a;
            uint256[2][2] b;
            uint256[2] c;
            uint256[] publicInputs;
            bytes32 programKey;
            bytes32 nullifier;
            uint64 chainId;
            uint64 expiresAt;
            bytes metadata;
        }

        function addValidator(
            address validator,
            bytes32[] calldata attestations,
            ValidatorProof calldata proof,
            G1Point calldata pubkeyG1,
            G2Point calldata pubkeyG2,
            G1Point calldata signature
        ) external;
    }
);

impl From<&ValidatorArgs> for ValidatorRegistry::addValidatorCall {
    fn from(args: &ValidatorArgs) -> Self {
        Self {
            validator: args.validator,
            attestations: args.attestations.clone(),
            proof: args.proof.clone(),
            pubkeyG1: args.pubkey_g1.clone(),
            pubkeyG2: args.pubkey_g2.clone(),
            signature: args.signature.clone(),
        }
    }
}

/// ABI-encoded `addValidator` calldata, selector included.
pub fn encode_add_validator(args: &ValidatorArgs) -> Bytes {
    ValidatorRegistry::addValidatorCall::from(args)
        .abi_encode()
        .into()
}
