use serde::ser::{Serialize, SerializeMap, Serializer};

/// The distinguished-name attribute kinds a report carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameAttribute {
    CommonName,
    Organization,
    OrganizationalUnit,
    Country,
    StateOrProvince,
    Locality,
}

impl NameAttribute {
    pub const ALL: [NameAttribute; 6] = [
        NameAttribute::CommonName,
        NameAttribute::Organization,
        NameAttribute::OrganizationalUnit,
        NameAttribute::Country,
        NameAttribute::StateOrProvince,
        NameAttribute::Locality,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            NameAttribute::CommonName => "CN",
            NameAttribute::Organization => "O",
            NameAttribute::OrganizationalUnit => "OU",
            NameAttribute::Country => "C",
            NameAttribute::StateOrProvince => "ST",
            NameAttribute::Locality => "L",
        }
    }
}

/// Attributes present on a subject or issuer, in `NameAttribute::ALL` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistinguishedName {
    entries: Vec<(NameAttribute, String)>,
}

impl DistinguishedName {
    pub fn new() -> Self { Self::default() }

    pub fn with(mut self, attr: NameAttribute, value: impl Into<String>) -> Self {
        self.insert(attr, value);
        self
    }

    pub fn insert(&mut self, attr: NameAttribute, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(a, _)| *a == attr) {
            Some(entry) => entry.1 = value,
            None => {
                self.entries.push((attr, value));
                self.entries.sort_by_key(|(a, _)| NameAttribute::ALL.iter().position(|x| x == a));
            }
        }
    }

    pub fn get(&self, attr: NameAttribute) -> Option<&str> {
        self.entries.iter().find(|(a, _)| *a == attr).map(|(_, v)| v.as_str())
    }

    pub fn common_name(&self) -> Option<&str> {
        self.get(NameAttribute::CommonName)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NameAttribute, &str)> {
        self.entries.iter().map(|(a, v)| (*a, v.as_str()))
    }

    /// `CN=foo, O=bar` form for text output.
    pub fn to_rfc_string(&self) -> String {
        self.iter().map(|(a, v)| format!("{}={}", a.code(), v)).collect::<Vec<_>>().join(", ")
    }
}

impl Serialize for DistinguishedName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (attr, value) in &self.entries {
            map.serialize_entry(attr.code(), value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidityWindow {
    #[serde(rename = "notBefore")]
    pub not_before: String,
    #[serde(rename = "notAfter")]
    pub not_after: String,
}

/// What a handshake revealed about the peer's leaf certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedCertificate {
    pub subject: DistinguishedName,
    pub issuer: DistinguishedName,
    pub validity: ValidityWindow,
}

impl ObservedCertificate {
    pub fn issuer_cn(&self) -> &str {
        self.issuer.common_name().unwrap_or("Unknown")
    }
}
