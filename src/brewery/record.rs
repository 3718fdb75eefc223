use serde::{Deserialize, Deserializer};

/// A single brewery as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BreweryRecord {
    /// Empty when the endpoint sends a null or missing id.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Brewery category (`brewery_type` on the wire), e.g. "micro".
    #[serde(rename = "brewery_type", default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub state: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub website_url: Option<String>,
}

impl BreweryRecord {
    /// Text shown in the website column.
    pub fn website_label(&self) -> &str {
        self.website_url.as_deref().unwrap_or("N/A")
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|url| !url.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_api_shape() {
        let json = r#"{
            "id": "b-1",
            "name": "Hop Yard",
            "brewery_type": "micro",
            "city": "Austin",
            "state": "Texas",
            "website_url": "http://hopyard.example",
            "phone": "5550100"
        }"#;
        let record: BreweryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "b-1");
        assert_eq!(record.category, "micro");
        assert_eq!(record.website_label(), "http://hopyard.example");
    }

    #[test]
    fn nulls_become_empty_or_none() {
        let json = r#"{
            "id": "b-2",
            "name": "Quiet Tap",
            "brewery_type": "micro",
            "city": null,
            "state": null,
            "website_url": null
        }"#;
        let record: BreweryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.city, "");
        assert_eq!(record.state, "");
        assert!(record.website_url.is_none());
        assert_eq!(record.website_label(), "N/A");
    }

    #[test]
    fn null_id_does_not_fail_the_list() {
        let json = r#"[
            {"id": null, "name": "Nameless Works", "brewery_type": "micro"},
            {"name": "No Id Brewing", "brewery_type": "micro"},
            {"id": "b-4", "name": "Keeper", "brewery_type": "micro"}
        ]"#;
        let records: Vec<BreweryRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, "");
        assert_eq!(records[1].id, "");
        assert_eq!(records[2].id, "b-4");
    }

    #[test]
    fn blank_website_is_none() {
        let json = r#"{"id": "b-3", "name": "X", "brewery_type": "brewpub", "website_url": "  "}"#;
        let record: BreweryRecord = serde_json::from_str(json).unwrap();
        assert!(record.website_url.is_none());
    }
}
