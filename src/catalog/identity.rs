use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Name under which a loaded catalog is registered (e.g. `NIST_SP80053r5_HIGH`).
///
/// Persistence sinks key control rows by this name, so it must stay stable
/// across reloads of the same document.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogName(pub String);

/// FISMA impact level a catalog baseline targets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ImpactLevel {
    Low,
    Moderate,
    High,
}

/// Catalog revision identifier.
///
/// Known variants keep serialization consistent with the standard NIST
/// content layout; `Other` preserves forward compatibility with catalogs
/// published under new revisions.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum CatalogVersion {
    NistSp80053R5,
    NistSp80053R4,
    Other(String),
}

impl ImpactLevel {
    pub fn as_str(&self) -> &str {
        match self {
            ImpactLevel::Low => "low",
            ImpactLevel::Moderate => "moderate",
            ImpactLevel::High => "high",
        }
    }

    /// Case-insensitive parse; returns `None` for anything outside the three
    /// FISMA levels so callers surface bad file names explicitly.
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "low" => Some(ImpactLevel::Low),
            "moderate" => Some(ImpactLevel::Moderate),
            "high" => Some(ImpactLevel::High),
            _ => None,
        }
    }
}

impl CatalogVersion {
    pub fn as_str(&self) -> &str {
        match self {
            CatalogVersion::NistSp80053R5 => "NIST_SP80053r5",
            CatalogVersion::NistSp80053R4 => "NIST_SP80053r4",
            CatalogVersion::Other(value) => value.as_str(),
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "NIST_SP80053r5" => CatalogVersion::NistSp80053R5,
            "NIST_SP80053r4" => CatalogVersion::NistSp80053R4,
            other => CatalogVersion::Other(other.to_string()),
        }
    }
}

impl Serialize for ImpactLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ImpactLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        ImpactLevel::from_str(&value).ok_or_else(|| {
            serde::de::Error::custom(format!("unknown impact level '{value}'"))
        })
    }
}

impl Serialize for CatalogVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CatalogVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_str(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_level_round_trips_and_rejects_unknown() {
        let json = serde_json::to_string(&ImpactLevel::Moderate).unwrap();
        assert_eq!(json, "\"moderate\"");
        let back: ImpactLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ImpactLevel::Moderate);

        assert_eq!(ImpactLevel::from_str("HIGH"), Some(ImpactLevel::High));
        assert!(serde_json::from_str::<ImpactLevel>("\"severe\"").is_err());
    }

    #[test]
    fn catalog_version_round_trips_known_and_unknown() {
        let known = CatalogVersion::NistSp80053R5;
        let json = serde_json::to_string(&known).unwrap();
        assert_eq!(json, "\"NIST_SP80053r5\"");
        let back: CatalogVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, known);

        let parsed: CatalogVersion = serde_json::from_str("\"NIST_SP80053r6\"").unwrap();
        assert_eq!(parsed, CatalogVersion::Other("NIST_SP80053r6".to_string()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"NIST_SP80053r6\"");
    }

    #[test]
    fn catalog_name_is_transparent() {
        let name = CatalogName("NIST_SP80053r5_HIGH".to_string());
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"NIST_SP80053r5_HIGH\"");
        let back: CatalogName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }
}
