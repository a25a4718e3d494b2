//! Literals of the Uniswap v2 deployments proposal. These are the defaults of
//! [`ProposalConfig`](crate::ProposalConfig) and are validated like any other
//! input before anything is encoded.

pub const PARENT_NAME: &str = "uniswap.eth";

pub const SUBDOMAIN_LABEL: &str = "v2deployments";

/// ENS registry with fallback, mainnet.
pub const ENS_REGISTRY: &str = "0x00000000000C2E074eC69A0dFb2997BA6C7d2e1e";

/// ENS public resolver, mainnet.
pub const ENS_PUBLIC_RESOLVER: &str = "0x4976fb03C32e5B8cfe2b6cCB31c09Ba78EBaBa41";

/// Uniswap timelock. Owns the new subdomain.
pub const TIMELOCK: &str = "0x1a9C8182C09F50C8318d769245beA52c32BE35BC";

pub const GOVERNOR_BRAVO: &str = "0x408ED6354d4973f66138C91495F2f2FCbd8724C3";

pub const DAO_NAME: &str = "Uniswap";

pub const DESCRIPTION: &str = "Deploy and Populate new subdomain";

/// No caching hint.
pub const TTL: u64 = 0;

/// `(chain, chain id, addresses)` for every chain with a v2 deployment, in the
/// order the records are written.
pub const V2_DEPLOYMENTS: &[(&str, &str, &str)] = &[
    (
        "polygon",
        "137",
        "0xfe5e5D361b2ad62c541bAb87C45a0B9B018389a2, 0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f",
    ),
    (
        "optimism",
        "10",
        "0x25ace71c97B33Cc4729CF772ae268934F7ab5fA1, 0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f",
    ),
    (
        "avalanche",
        "43114",
        "0x4Dbd4fc535Ac27206064B68FfCf827b0A60BAB3f, 0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f",
    ),
    (
        "base",
        "8453",
        "0x4Dbd4fc535Ac27206064B68FfCf827b0A60BAB3f, 0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f",
    ),
    (
        "arbitrum",
        "42161",
        "0x4Dbd4fc535Ac27206064B68FfCf827b0A60BAB3f, 0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f",
    ),
    (
        "bnb",
        "56",
        "0xf5F4496219F31CDCBa6130B5402873624585615a, 0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f",
    ),
    (
        "gnosis",
        "100",
        "0xf5F4496219F31CDCBa6130B5402873624585615a, 0x7146c626be7ee5e70747aa75e295439e643fc034",
    ),
    (
        "boba",
        "288",
        "0x6D4528d192dB72E282265D6092F4B872f9Dff69e, 0x53163235746ceb81da32293bb0932e1a599256b4",
    ),
    (
        "linea",
        "59144",
        "0xd19d4B5d358258f05D7B411E21A1460D11B0876F, 0x056588f18869a626b0Ae9e89f077eFE6BA752633",
    ),
    (
        "moonbeam",
        "1284",
        "0xf5F4496219F31CDCBa6130B5402873624585615a, 0x91FbCAe76de0b852519C26D9f8CA865b5027eeFA",
    ),
    (
        "celo",
        "42220",
        "0xf5F4496219F31CDCBa6130B5402873624585615a, 0x79a530c8e2fA8748B7B40dd3629C0520c2cCf03f",
    ),
];
