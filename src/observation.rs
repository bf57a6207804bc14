use crate::region::RegionType;
use crate::table::Table;
use serde::Deserialize;

/// eBird's default lookback window for recent observations, in days.
pub const DEFAULT_DAYS_BACK: u32 = 14;

/// The API ceiling on the lookback window. Passed through, not clamped; the
/// service rejects larger values itself.
pub const MAX_DAYS_BACK: u32 = 30;

/// Maximum number of explicit location codes the observation endpoints accept.
pub const MAX_LOCATIONS: usize = 10;

pub(crate) const OBSERVATION_COLUMNS: [&str; 7] = [
    "Common Name",
    "Scientific Name",
    "Location Name",
    "Date Observed",
    "How Many Observed",
    "Latitude",
    "Longitude",
];

pub(crate) const SPECIES_COLUMNS: [&str; 5] = [
    "Common Name",
    "Scientific Name",
    "Location Name",
    "Number of Observations",
    "Date Observed",
];

pub(crate) const ID_INFO_COLUMN: &str = "ID Info";

/// One observation record from the recent/notable/species endpoints.
/// `how_many` is absent when the species was reported present but not
/// counted; it renders as an empty cell rather than failing to parse.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub species_code: String,
    pub com_name: String,
    pub sci_name: String,
    pub loc_name: String,
    pub obs_dt: String,
    #[serde(default)]
    pub how_many: Option<u32>,
    pub lat: f64,
    pub lng: f64,
    /// Identification text scraped from the species reference page. Never
    /// present in the API payload; filled in by enrichment when requested.
    #[serde(skip)]
    pub id_info: Option<String>,
}

impl Observation {
    /// Calendar date of the observation, with any time-of-day dropped.
    pub fn obs_date(&self) -> &str {
        self.obs_dt.split_whitespace().next().unwrap_or(&self.obs_dt)
    }
}

/// Parameters shared by the observation queries. A fresh value carries the
/// API defaults and an empty location list of its own; nothing is shared
/// between requests.
#[derive(Debug, Clone)]
pub struct ObservationRequest {
    /// Narrow the query to one named hotspot. Requires `region_type` to be
    /// `State` or `Substate` for the hotspot scan.
    pub hotspot_name: Option<String>,
    /// Substate (county) name; only valid with `RegionType::Substate`.
    pub substate_name: Option<String>,
    /// Region tier to resolve when no hotspot or explicit locations are given.
    pub region_type: RegionType,
    /// Lookback window in days. The API caps this at [`MAX_DAYS_BACK`].
    pub days_back: u32,
    /// Up to [`MAX_LOCATIONS`] explicit location codes. When non-empty the
    /// query targets these instead of a resolved region.
    pub locations: Vec<String>,
    /// Restrict results to observations made at hotspots.
    pub only_hotspots: bool,
    /// Attach identification text to each record. Slow: one page fetch per
    /// record, issued sequentially.
    pub id_info: bool,
}

impl Default for ObservationRequest {
    fn default() -> Self {
        Self {
            hotspot_name: None,
            substate_name: None,
            region_type: RegionType::State,
            days_back: DEFAULT_DAYS_BACK,
            locations: Vec::new(),
            only_hotspots: false,
            id_info: false,
        }
    }
}

/// Project observation records onto the recent-observations column set.
/// `date_only` reduces `Date Observed` to the calendar date, as the notable
/// view requires.
pub(crate) fn observation_table(
    observations: &[Observation],
    with_id_info: bool,
    date_only: bool,
) -> Table {
    let mut columns: Vec<String> = OBSERVATION_COLUMNS.iter().map(|c| c.to_string()).collect();
    if with_id_info {
        columns.push(ID_INFO_COLUMN.to_string());
    }

    let mut table = Table::new(columns);
    for obs in observations {
        let date = if date_only {
            obs.obs_date().to_string()
        } else {
            obs.obs_dt.clone()
        };
        let mut row = vec![
            obs.com_name.clone(),
            obs.sci_name.clone(),
            obs.loc_name.clone(),
            date,
            obs.how_many.map(|n| n.to_string()).unwrap_or_default(),
            obs.lat.to_string(),
            obs.lng.to_string(),
        ];
        if with_id_info {
            row.push(obs.id_info.clone().unwrap_or_default());
        }
        table.push_row(row);
    }

    table
}

/// Project species-specific records onto the reduced species column set.
/// Identification text, when given, is one shared description applied to
/// every row.
pub(crate) fn species_table(observations: &[Observation], id_info: Option<&str>) -> Table {
    let mut columns: Vec<String> = SPECIES_COLUMNS.iter().map(|c| c.to_string()).collect();
    if id_info.is_some() {
        columns.push(ID_INFO_COLUMN.to_string());
    }

    let mut table = Table::new(columns);
    for obs in observations {
        let mut row = vec![
            obs.com_name.clone(),
            obs.sci_name.clone(),
            obs.loc_name.clone(),
            obs.how_many.map(|n| n.to_string()).unwrap_or_default(),
            obs.obs_dt.clone(),
        ];
        if let Some(info) = id_info {
            row.push(info.to_string());
        }
        table.push_row(row);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn woodcock() -> Observation {
        serde_json::from_value(json!({
            "speciesCode": "amewoo",
            "comName": "American Woodcock",
            "sciName": "Scolopax minor",
            "locId": "L109516",
            "locName": "Prospect Park",
            "obsDt": "2024-03-20 18:45",
            "howMany": 2,
            "lat": 40.6602841,
            "lng": -73.9689534
        }))
        .unwrap()
    }

    #[test]
    fn test_uncounted_observation_deserializes() {
        let obs: Observation = serde_json::from_value(json!({
            "speciesCode": "amewoo",
            "comName": "American Woodcock",
            "sciName": "Scolopax minor",
            "locName": "Prospect Park",
            "obsDt": "2024-03-20",
            "lat": 40.66,
            "lng": -73.97
        }))
        .unwrap();
        assert_eq!(obs.how_many, None);

        let table = observation_table(&[obs], false, false);
        assert_eq!(table.rows()[0][4], "");
    }

    #[test]
    fn test_observation_columns_in_order() {
        let table = observation_table(&[woodcock()], false, false);
        assert_eq!(
            table.columns(),
            [
                "Common Name",
                "Scientific Name",
                "Location Name",
                "Date Observed",
                "How Many Observed",
                "Latitude",
                "Longitude"
            ]
        );
        assert_eq!(table.rows()[0][3], "2024-03-20 18:45");
    }

    #[test]
    fn test_date_only_drops_time_of_day() {
        let table = observation_table(&[woodcock()], false, true);
        assert_eq!(table.rows()[0][3], "2024-03-20");
    }

    #[test]
    fn test_id_info_column_appended() {
        let mut obs = woodcock();
        obs.id_info = Some("Plump, well-camouflaged shorebird.".to_string());
        let table = observation_table(&[obs], true, false);
        assert_eq!(table.columns().last().unwrap(), "ID Info");
        assert_eq!(table.rows()[0][7], "Plump, well-camouflaged shorebird.");
    }

    #[test]
    fn test_species_table_shares_one_description() {
        let table = species_table(&[woodcock(), woodcock()], Some("Long bill."));
        assert_eq!(
            table.columns(),
            [
                "Common Name",
                "Scientific Name",
                "Location Name",
                "Number of Observations",
                "Date Observed",
                "ID Info"
            ]
        );
        assert!(table.rows().iter().all(|row| row[5] == "Long bill."));
    }

    #[test]
    fn test_default_request_has_fresh_empty_locations() {
        let req = ObservationRequest::default();
        assert_eq!(req.days_back, 14);
        assert_eq!(req.region_type, RegionType::State);
        assert!(req.locations.is_empty());
        assert!(!req.only_hotspots);
    }
}
