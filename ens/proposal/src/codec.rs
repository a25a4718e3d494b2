//! Offline ABI encoding of the registry and resolver calls, plus the matching
//! decoders used to audit a finished proposal.

use {
    crate::{
        Error, Result,
        contract_bindings::{ens_registry::EnsRegistry, public_resolver::PublicResolver},
    },
    alloy::{
        primitives::{Address, B256, Bytes, hex},
        sol_types::SolCall,
    },
    ens_types::{DomainHashes, TextRecordEntry, TextRecordTable},
};

/// `setText(node, key, value)` for one text record.
pub fn encode_set_text(node: B256, entry: &TextRecordEntry) -> Bytes {
    PublicResolver::setTextCall {
        node,
        key: entry.key(),
        value: entry.value().to_string(),
    }
    .abi_encode()
    .into()
}

/// One `setText` call per table entry, in table order.
pub fn encode_text_records(node: B256, table: &TextRecordTable) -> Vec<Bytes> {
    table
        .iter()
        .map(|entry| encode_set_text(node, entry))
        .collect()
}

/// `multicall(data)` dispatching the given resolver calls as one transaction.
pub fn encode_multicall(calls: Vec<Bytes>) -> Bytes {
    PublicResolver::multicallCall { data: calls }
        .abi_encode()
        .into()
}

/// `setSubnodeRecord(node, label, owner, resolver, ttl)` creating the subdomain.
pub fn encode_set_subnode_record(
    hashes: &DomainHashes,
    owner: Address,
    resolver: Address,
    ttl: u64,
) -> Bytes {
    EnsRegistry::setSubnodeRecordCall {
        node: hashes.parent_node,
        label: hashes.label_hash,
        owner,
        resolver,
        ttl,
    }
    .abi_encode()
    .into()
}

// ----------------------------------- decode ----------------------------------

/// Decode calldata as a call to `C`, checking the selector first so a blob
/// meant for another function is reported as such.
pub fn decode_call<C: SolCall>(calldata: &[u8]) -> Result<C> {
    let found = calldata.get(..4).unwrap_or(calldata);

    if found != C::SELECTOR {
        return Err(Error::SelectorMismatch {
            function: C::SIGNATURE,
            expected: hex::encode_prefixed(C::SELECTOR),
            found: hex::encode_prefixed(found),
        });
    }

    Ok(C::abi_decode(calldata)?)
}

pub fn decode_set_text(calldata: &[u8]) -> Result<PublicResolver::setTextCall> {
    decode_call(calldata)
}

/// Decode a resolver multicall into its inner calldata blobs.
pub fn decode_multicall(calldata: &[u8]) -> Result<Vec<Bytes>> {
    decode_call::<PublicResolver::multicallCall>(calldata).map(|call| call.data)
}

pub fn decode_set_subnode_record(calldata: &[u8]) -> Result<EnsRegistry::setSubnodeRecordCall> {
    decode_call(calldata)
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        alloy::primitives::{address, b256},
        assertor::*,
        ens_types::Subdomain,
    };

    const VALUE: &str =
        "0x25ace71c97B33Cc4729CF772ae268934F7ab5fA1, 0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f";

    fn node() -> B256 {
        Subdomain::new("uniswap.eth", "v2deployments")
            .unwrap()
            .hashes()
            .node
    }

    fn entry(chain: &str, key: &str) -> TextRecordEntry {
        TextRecordEntry::parse(chain, key, VALUE).unwrap()
    }

    #[test]
    fn set_text_round_trips() {
        let calldata = encode_set_text(node(), &entry("optimism", "10"));

        assert_eq!(calldata[..4], [0x10, 0xf1, 0x3a, 0x8c]);

        let call = decode_set_text(&calldata).unwrap();
        assert_eq!(call.node, node());
        assert_that!(call.key).is_equal_to("10".to_string());
        assert_that!(call.value).is_equal_to(VALUE.to_string());
    }

    #[test]
    fn multicall_preserves_order() {
        let table = TextRecordTable::new(vec![
            entry("polygon", "137"),
            entry("optimism", "10"),
            entry("avalanche", "43114"),
        ])
        .unwrap();

        let calls = encode_text_records(node(), &table);
        let batch = encode_multicall(calls.clone());

        assert_eq!(batch[..4], [0xac, 0x96, 0x50, 0xd8]);
        assert_that!(decode_multicall(&batch).unwrap()).is_equal_to(calls.clone());

        let keys = calls
            .iter()
            .map(|blob| decode_set_text(blob).unwrap().key)
            .collect::<Vec<_>>();
        assert_that!(keys).is_equal_to(vec![
            "137".to_string(),
            "10".to_string(),
            "43114".to_string(),
        ]);
    }

    #[test]
    fn empty_multicall_encodes() {
        let batch = encode_multicall(vec![]);
        assert!(decode_multicall(&batch).unwrap().is_empty());
    }

    #[test]
    fn set_subnode_record_round_trips() {
        let hashes = Subdomain::new("uniswap.eth", "v2deployments")
            .unwrap()
            .hashes();
        let owner = address!("1a9C8182C09F50C8318d769245beA52c32BE35BC");
        let resolver = address!("4976fb03C32e5B8cfe2b6cCB31c09Ba78EBaBa41");

        let calldata = encode_set_subnode_record(&hashes, owner, resolver, 0);
        let call = decode_set_subnode_record(&calldata).unwrap();

        assert_eq!(
            call.node,
            b256!("ec9ec573cf97ad1c270be71ac1de3b382790cb346036130c7d7ff844bf8f4974")
        );
        assert_eq!(
            call.label,
            b256!("df848cb54b740ab5a6c1efa359bf318cc6e5e7b08d1134b9122466969831e32e")
        );
        assert_eq!(call.owner, owner);
        assert_eq!(call.resolver, resolver);
        assert_eq!(call.ttl, 0);
    }

    #[test]
    fn decoding_with_the_wrong_interface_fails() {
        let calldata = encode_set_text(node(), &entry("optimism", "10"));

        assert!(matches!(
            decode_multicall(&calldata),
            Err(Error::SelectorMismatch {
                function: "multicall(bytes[])",
                ..
            })
        ));
        assert!(matches!(
            decode_set_text(&[0x10]),
            Err(Error::SelectorMismatch { .. })
        ));
    }
}
