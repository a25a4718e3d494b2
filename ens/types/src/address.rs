use {
    crate::{Error, Result},
    alloy::primitives::Address,
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
};

/// Separator used when joining an [`AddressList`] into a text record value.
pub const ADDRESS_SEPARATOR: &str = ", ";

/// Parse a `0x`-prefixed hex address.
///
/// All-lowercase and all-uppercase inputs carry no checksum and are accepted
/// as is. Mixed-case inputs must pass the EIP-55 checksum.
pub fn parse_address(input: &str) -> Result<Address> {
    let invalid = |reason: String| Error::InvalidAddress {
        input: input.to_string(),
        reason,
    };

    let hex = input
        .strip_prefix("0x")
        .ok_or_else(|| invalid("missing `0x` prefix".to_string()))?;

    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid("expected 40 hex digits".to_string()));
    }

    let has_lower = hex.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = hex.chars().any(|c| c.is_ascii_uppercase());

    if has_lower && has_upper {
        Address::parse_checksummed(input, None)
            .map_err(|_| invalid("bad EIP-55 checksum".to_string()))
    } else {
        Address::from_str(input).map_err(|err| invalid(err.to_string()))
    }
}

/// Like [`parse_address`], but also rejects the zero address.
pub fn parse_nonzero_address(input: &str, role: &'static str) -> Result<Address> {
    let address = parse_address(input)?;

    if address.is_zero() {
        return Err(Error::ZeroAddress { role });
    }

    Ok(address)
}

// -------------------------------- address list -------------------------------

/// An ordered list of contract addresses stored under one text record key.
///
/// Parsing splits on `,` and trims surrounding whitespace, so both
/// `"0xA,0xB"` and `"0xA, 0xB"` are read back as the same list. Rendering
/// joins the checksummed addresses with `", "`; it is only used for lists
/// built in code, since parsed values are written back as supplied.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct AddressList(Vec<Address>);

impl AddressList {
    pub fn new(addresses: Vec<Address>) -> Self {
        Self(addresses)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.0.iter()
    }
}

impl FromStr for AddressList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }

        s.split(',')
            .map(|part| parse_address(part.trim()))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

impl TryFrom<Vec<String>> for AddressList {
    type Error = Error;

    fn try_from(addresses: Vec<String>) -> Result<Self> {
        addresses
            .iter()
            .map(|address| parse_address(address))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

impl From<AddressList> for Vec<String> {
    fn from(list: AddressList) -> Self {
        list.0.iter().map(Address::to_string).collect()
    }
}

impl fmt::Display for AddressList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, address) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(ADDRESS_SEPARATOR)?;
            }
            write!(f, "{address}")?;
        }
        Ok(())
    }
}

// ----------------------------------- tests -----------------------------------
