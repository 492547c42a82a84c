//! Record identifiers (`#<cluster>:<position>`).

use crate::error::OqlError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Locator of a single stored record: cluster id plus position inside the cluster.
///
/// Renders as `#<cluster>:<position>`.
///
/// # Example
/// ```ignore
/// use orientql::RecordId;
///
/// let rid = RecordId::new(8, 0);
/// assert_eq!(rid.to_string(), "#8:0");
/// assert_eq!("#8:0".parse::<RecordId>()?, rid);
/// # Ok::<(), orientql::OqlError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId {
    cluster: u32,
    position: u64,
}

impl RecordId {
    /// Create a record id.
    pub const fn new(cluster: u32, position: u64) -> Self {
        Self { cluster, position }
    }

    /// Cluster id.
    pub const fn cluster(&self) -> u32 {
        self.cluster
    }

    /// Position inside the cluster.
    pub const fn position(&self) -> u64 {
        self.position
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.cluster, self.position)
    }
}

impl FromStr for RecordId {
    type Err = OqlError;

    /// Accepts `#c:p` and the bare `c:p` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.strip_prefix('#').unwrap_or(s);
        let (cluster, position) = body
            .split_once(':')
            .ok_or_else(|| OqlError::InvalidRecordId(format!("'{s}' is missing ':'")))?;

        let cluster = cluster
            .parse::<u32>()
            .map_err(|e| OqlError::InvalidRecordId(format!("'{s}': bad cluster id: {e}")))?;
        let position = position
            .parse::<u64>()
            .map_err(|e| OqlError::InvalidRecordId(format!("'{s}': bad position: {e}")))?;

        Ok(Self::new(cluster, position))
    }
}

impl From<(u32, u64)> for RecordId {
    fn from((cluster, position): (u32, u64)) -> Self {
        Self::new(cluster, position)
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(RecordId::new(8, 0).to_string(), "#8:0");
        assert_eq!(RecordId::new(0, 0).to_string(), "#0:0");
        assert_eq!(RecordId::new(12, 9_000_000_000).to_string(), "#12:9000000000");
    }

    #[test]
    fn test_parse() {
        assert_eq!("#8:0".parse::<RecordId>().unwrap(), RecordId::new(8, 0));
        assert_eq!("17:42".parse::<RecordId>().unwrap(), RecordId::new(17, 42));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "#", "#8", "#8:", "#:1", "#-1:0", "#8:-3", "#a:b", "#8:0:1"] {
            let err = bad.parse::<RecordId>().unwrap_err();
            assert!(matches!(err, OqlError::InvalidRecordId(_)), "{bad}: {err:?}");
        }
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(RecordId::new(3, 4), RecordId::from((3, 4)));
        assert_ne!(RecordId::new(3, 4), RecordId::new(4, 3));
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&RecordId::new(8, 0)).unwrap();
        assert_eq!(json, "\"#8:0\"");
        let back: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RecordId::new(8, 0));
        assert!(serde_json::from_str::<RecordId>("\"oops\"").is_err());
    }
}
