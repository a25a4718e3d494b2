use {
    crate::{Error, Result},
    alloy::primitives::{B256, keccak256},
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
};

/// A single component of an ENS name, e.g. `uniswap` in `uniswap.eth`.
///
/// Labels must already be in normalized form. Uppercase characters, ASCII or
/// not, are rejected instead of being lowercased, so a typo in a literal can't silently hash
/// to a different node than the one intended.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Label(String);

impl Label {
    pub fn new(label: impl Into<String>) -> Result<Self> {
        let label = label.into();

        let reason = if label.is_empty() {
            Some("label is empty")
        } else if label.contains('.') {
            Some("label contains a dot")
        } else if label.chars().any(|c| c.is_whitespace() || c.is_control()) {
            Some("label contains whitespace or control characters")
        } else if label.chars().any(char::is_uppercase) {
            Some("label is not normalized (contains uppercase characters)")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(Error::InvalidLabel { label, reason }),
            None => Ok(Self(label)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `keccak256` of the label's UTF-8 bytes.
    pub fn labelhash(&self) -> B256 {
        keccak256(self.0.as_bytes())
    }
}

impl TryFrom<String> for Label {
    type Error = Error;

    fn try_from(label: String) -> Result<Self> {
        Self::new(label)
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.0
    }
}

impl FromStr for Label {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ------------------------------------ name -----------------------------------

/// A fully qualified ENS name, stored as its labels from left to right.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Name {
    labels: Vec<Label>,
}

impl Name {
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Return the name with `label` prepended, i.e. `label.self`.
    pub fn child(&self, label: Label) -> Self {
        let mut labels = Vec::with_capacity(self.labels.len() + 1);
        labels.push(label);
        labels.extend(self.labels.iter().cloned());

        Self { labels }
    }

    /// EIP-137 namehash: starting from the zero node, fold the labels from
    /// right to left as `node = keccak256(node ++ labelhash(label))`.
    pub fn namehash(&self) -> B256 {
        self.labels.iter().rev().fold(B256::ZERO, |node, label| {
            let mut preimage = [0u8; 64];
            preimage[..32].copy_from_slice(node.as_slice());
            preimage[32..].copy_from_slice(label.labelhash().as_slice());
            keccak256(preimage)
        })
    }
}

impl FromStr for Name {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::EmptyName);
        }

        let labels = s.split('.').map(Label::new).collect::<Result<Vec<_>>>()?;

        Ok(Self { labels })
    }
}

impl TryFrom<String> for Name {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.to_string()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(label.as_str())?;
        }
        Ok(())
    }
}

// --------------------------------- subdomain ---------------------------------

/// A subdomain to be created under an existing parent name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Subdomain {
    pub parent: Name,
    pub label: Label,
}

/// The three hashes needed to register a subdomain and write records to it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainHashes {
    /// Namehash of the parent name. The `node` argument of `setSubnodeRecord`.
    pub parent_node: B256,
    /// Labelhash of the new label. The `label` argument of `setSubnodeRecord`.
    pub label_hash: B256,
    /// Namehash of `label.parent`. The node the text records are written to.
    pub node: B256,
}

impl Subdomain {
    pub fn new(parent: &str, label: &str) -> Result<Self> {
        Ok(Self {
            parent: parent.parse()?,
            label: label.parse()?,
        })
    }

    pub fn full_name(&self) -> Name {
        self.parent.child(self.label.clone())
    }

    pub fn hashes(&self) -> DomainHashes {
        DomainHashes {
            parent_node: self.parent.namehash(),
            label_hash: self.label.labelhash(),
            node: self.full_name().namehash(),
        }
    }
}

impl fmt::Display for Subdomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.label, self.parent)
    }
}

// ----------------------------------- tests -----------------------------------
