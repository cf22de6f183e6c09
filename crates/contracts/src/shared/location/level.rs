use serde::{Deserialize, Serialize};

/// One tier of the location hierarchy.
///
/// The order of levels is decided per screen (see `LocationCascade`), so this
/// enum carries no ordering of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationLevel {
    Country,
    State,
    District,
    Cluster,
    Zone,
    City,
}

impl LocationLevel {
    pub const ALL: [LocationLevel; 6] = [
        LocationLevel::Country,
        LocationLevel::State,
        LocationLevel::District,
        LocationLevel::Cluster,
        LocationLevel::Zone,
        LocationLevel::City,
    ];

    /// REST collection served by the location service.
    pub fn collection(&self) -> &'static str {
        match self {
            LocationLevel::Country => "countries",
            LocationLevel::State => "states",
            LocationLevel::District => "districts",
            LocationLevel::Cluster => "clusters",
            LocationLevel::Zone => "zones",
            LocationLevel::City => "cities",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LocationLevel::Country => "Country",
            LocationLevel::State => "State",
            LocationLevel::District => "District",
            LocationLevel::Cluster => "Cluster",
            LocationLevel::Zone => "Zone",
            LocationLevel::City => "City",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            LocationLevel::Country => "country",
            LocationLevel::State => "state",
            LocationLevel::District => "district",
            LocationLevel::Cluster => "cluster",
            LocationLevel::Zone => "zone",
            LocationLevel::City => "city",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.key() == key)
    }
}

/// A state, district, cluster, zone or city as returned by the location service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationNode {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "parentId", default)]
    pub parent_id: Option<String>,
    #[serde(rename = "isActive", default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl LocationNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, parent_id: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: parent_id.map(str::to_string),
            is_active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for level in LocationLevel::ALL {
            assert_eq!(LocationLevel::from_key(level.key()), Some(level));
        }
        assert_eq!(LocationLevel::from_key("warehouse"), None);
    }

    #[test]
    fn test_node_from_service_json() {
        let node: LocationNode = serde_json::from_str(
            r#"{"_id": "64a1", "name": "Surat", "parentId": "gj"}"#,
        )
        .unwrap();
        assert_eq!(node.id, "64a1");
        assert_eq!(node.parent_id.as_deref(), Some("gj"));
        assert!(node.is_active);
    }
}
