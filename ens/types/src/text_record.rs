use {
    crate::{AddressList, Error, Result},
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

/// Parse a text record key. Keys are EVM chain ids in canonical decimal form:
/// digits only, no sign, no leading zeros, not zero.
pub fn parse_key(key: &str) -> Result<u64> {
    let invalid = || Error::InvalidKey {
        key: key.to_string(),
    };

    if key.is_empty() || key.starts_with('0') || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    key.parse().map_err(|_| invalid())
}

/// One chain's deployment addresses, written as a text record on the subdomain.
///
/// The value goes on chain exactly as supplied. It is parsed into
/// `addresses` only to validate it; spacing and address case are kept.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "RawTextRecord", into = "RawTextRecord")]
pub struct TextRecordEntry {
    /// Human readable chain name. Only used in logs and error messages.
    pub chain: String,
    pub chain_id: u64,
    pub addresses: AddressList,
    value: String,
}

impl TextRecordEntry {
    /// Build an entry from already parsed addresses. The value is their
    /// checksummed join.
    pub fn new(chain: impl Into<String>, chain_id: u64, addresses: AddressList) -> Result<Self> {
        let value = addresses.to_string();

        Self::with_value(chain.into(), chain_id, addresses, value)
    }

    /// Parse an entry from its raw key and value strings, keeping `value`
    /// verbatim.
    pub fn parse(chain: impl Into<String>, key: &str, value: &str) -> Result<Self> {
        Self::with_value(chain.into(), parse_key(key)?, value.parse()?, value.to_string())
    }

    fn with_value(
        chain: String,
        chain_id: u64,
        addresses: AddressList,
        value: String,
    ) -> Result<Self> {
        if chain_id == 0 {
            return Err(Error::InvalidKey {
                key: chain_id.to_string(),
            });
        }

        if addresses.is_empty() {
            return Err(Error::EmptyAddressList {
                key: chain_id.to_string(),
            });
        }

        Ok(Self {
            chain,
            chain_id,
            addresses,
            value,
        })
    }

    /// The text record key, i.e. the decimal chain id.
    pub fn key(&self) -> String {
        self.chain_id.to_string()
    }

    /// The text record value, byte for byte.
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Serialize, Deserialize, Clone)]
struct RawTextRecord {
    chain: String,
    key: String,
    value: String,
}

impl TryFrom<RawTextRecord> for TextRecordEntry {
    type Error = Error;

    fn try_from(raw: RawTextRecord) -> Result<Self> {
        Self::parse(raw.chain, &raw.key, &raw.value)
    }
}

impl From<TextRecordEntry> for RawTextRecord {
    fn from(entry: TextRecordEntry) -> Self {
        Self {
            key: entry.key(),
            chain: entry.chain,
            value: entry.value,
        }
    }
}

// ------------------------------------ table ----------------------------------

/// An ordered set of text records with distinct keys.
///
/// Each key may only be written once per proposal. Two entries with the same
/// key would make the later `setText` silently overwrite the earlier one.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(try_from = "Vec<TextRecordEntry>", into = "Vec<TextRecordEntry>")]
pub struct TextRecordTable(Vec<TextRecordEntry>);

impl TextRecordTable {
    pub fn new(entries: Vec<TextRecordEntry>) -> Result<Self> {
        let mut seen = BTreeMap::new();

        for entry in &entries {
            if let Some(first) = seen.insert(entry.chain_id, &entry.chain) {
                return Err(Error::DuplicateKey {
                    key: entry.key(),
                    first: first.clone(),
                    second: entry.chain.clone(),
                });
            }
        }

        Ok(Self(entries))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextRecordEntry> {
        self.0.iter()
    }
}

impl TryFrom<Vec<TextRecordEntry>> for TextRecordTable {
    type Error = Error;

    fn try_from(entries: Vec<TextRecordEntry>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<TextRecordTable> for Vec<TextRecordEntry> {
    fn from(table: TextRecordTable) -> Self {
        table.0
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, assertor::*, test_case::test_case};

    const VALUE: &str =
        "0x1a9C8182C09F50C8318d769245beA52c32BE35BC, 0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f";

    #[test_case("10" => 10; "optimism")]
    #[test_case("42161" => 42161; "arbitrum")]
    fn parses_canonical_keys(key: &str) -> u64 {
        parse_key(key).unwrap()
    }

    #[test_case(""; "empty")]
    #[test_case("0"; "zero")]
    #[test_case("010"; "leading zero")]
    #[test_case("+10"; "sign")]
    #[test_case("ten"; "not a number")]
    #[test_case("99999999999999999999999"; "overflow")]
    fn rejects_malformed_keys(key: &str) {
        assert!(matches!(parse_key(key), Err(Error::InvalidKey { .. })));
    }

    #[test]
    fn entry_renders_key_and_value() {
        let entry = TextRecordEntry::parse("optimism", "10", VALUE).unwrap();

        assert_that!(entry.key()).is_equal_to("10".to_string());
        assert_that!(entry.value().to_string()).is_equal_to(VALUE.to_string());
    }

    #[test_case(
        "0x1a9C8182C09F50C8318d769245beA52c32BE35BC,0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f";
        "no space"
    )]
    #[test_case(
        "0xf5F4496219F31CDCBa6130B5402873624585615a, 0x7146c626be7ee5e70747aa75e295439e643fc034";
        "lowercase address"
    )]
    #[test_case(
        " 0x1a9C8182C09F50C8318d769245beA52c32BE35BC ,0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f";
        "irregular spacing"
    )]
    fn parsed_value_is_kept_verbatim(value: &str) {
        let entry = TextRecordEntry::parse("gnosis", "100", value).unwrap();

        assert_that!(entry.value().to_string()).is_equal_to(value.to_string());
        assert_eq!(entry.addresses.len(), 2);
    }

    #[test]
    fn entry_built_from_addresses_uses_the_canonical_join() {
        let addresses: AddressList = VALUE.replace(", ", ",").parse().unwrap();
        let entry = TextRecordEntry::new("optimism", 10, addresses).unwrap();

        assert_that!(entry.value().to_string()).is_equal_to(VALUE.to_string());
    }

    #[test]
    fn serde_keeps_the_raw_value() {
        let value = VALUE.replace(", ", ",");
        let entry = TextRecordEntry::parse("base", "8453", &value).unwrap();

        let json = serde_json::to_value(&entry).unwrap();
        assert_that!(json["key"].as_str()).is_equal_to(Some("8453"));
        assert_that!(json["value"].as_str()).is_equal_to(Some(value.as_str()));

        let back: TextRecordEntry = serde_json::from_value(json).unwrap();
        assert_that!(back).is_equal_to(entry);
    }

    #[test]
    fn serde_validates_the_value() {
        let json = serde_json::json!({ "chain": "base", "key": "8453", "value": "0x1234" });
        assert!(serde_json::from_value::<TextRecordEntry>(json).is_err());
    }

    #[test]
    fn entry_without_addresses_is_rejected() {
        assert!(matches!(
            TextRecordEntry::parse("optimism", "10", ""),
            Err(Error::EmptyAddressList { .. })
        ));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let boba = TextRecordEntry::parse("boba", "288", VALUE).unwrap();
        let moonbeam = TextRecordEntry::parse("moonbeam", "288", VALUE).unwrap();

        let err = TextRecordTable::new(vec![boba, moonbeam]).unwrap_err();

        assert!(matches!(
            err,
            Error::DuplicateKey { ref key, ref first, ref second }
                if key == "288" && first == "boba" && second == "moonbeam"
        ));
    }

    #[test]
    fn table_preserves_order() {
        let table = TextRecordTable::new(vec![
            TextRecordEntry::parse("polygon", "137", VALUE).unwrap(),
            TextRecordEntry::parse("optimism", "10", VALUE).unwrap(),
        ])
        .unwrap();

        let keys = table.iter().map(TextRecordEntry::key).collect::<Vec<_>>();
        assert_that!(keys).contains_exactly_in_order(vec!["137".to_string(), "10".to_string()]);
    }
}
