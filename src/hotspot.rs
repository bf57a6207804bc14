use serde::Deserialize;

/// Column headers for the hotspot table, in output order.
pub(crate) const HOTSPOT_COLUMNS: [&str; 6] = [
    "Location ID",
    "Location Name",
    "Latitude",
    "Longitude",
    "Latest Observation Date",
    "Number of Species",
];

/// One birding location from the per-region hotspot endpoint. Location names
/// are not guaranteed unique; the location ID is. Hotspots with no submitted
/// checklists come back without a latest observation date or species count.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    pub loc_id: String,
    pub loc_name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub latest_obs_dt: Option<String>,
    #[serde(default)]
    pub num_species_all_time: Option<u32>,
}

impl Hotspot {
    pub(crate) fn row(&self) -> Vec<String> {
        vec![
            self.loc_id.clone(),
            self.loc_name.clone(),
            self.lat.to_string(),
            self.lng.to_string(),
            self.latest_obs_dt.clone().unwrap_or_default(),
            self.num_species_all_time
                .map(|n| n.to_string())
                .unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_record() {
        let hotspot: Hotspot = serde_json::from_value(json!({
            "locId": "L109516",
            "locName": "Prospect Park",
            "countryCode": "US",
            "subnational1Code": "US-NY",
            "lat": 40.6602841,
            "lng": -73.9689534,
            "latestObsDt": "2024-05-01 09:12",
            "numSpeciesAllTime": 289
        }))
        .unwrap();

        assert_eq!(hotspot.loc_id, "L109516");
        assert_eq!(hotspot.num_species_all_time, Some(289));
    }

    #[test]
    fn test_unvisited_hotspot_has_empty_cells() {
        let hotspot: Hotspot = serde_json::from_value(json!({
            "locId": "L999",
            "locName": "New Pond",
            "lat": 41.0,
            "lng": -74.0
        }))
        .unwrap();

        let row = hotspot.row();
        assert_eq!(row[4], "");
        assert_eq!(row[5], "");
    }
}
