use crate::error::Error;
use crate::hotspot::{HOTSPOT_COLUMNS, Hotspot};
use crate::idinfo::extract_id_info;
use crate::observation::{
    MAX_LOCATIONS, Observation, ObservationRequest, observation_table, species_table,
};
use crate::region::{Region, RegionType, find_region_code};
use crate::table::Table;
use crate::transport::{API_BASE, EbirdTransport, SPECIES_PAGE_BASE, Transport};
use log::info;

/// Trip-planning client for the eBird API: resolves human-readable geography
/// names to region codes, lists hotspots, and fetches recent, notable, and
/// species-specific observations, optionally enriched with identification
/// text scraped from the species reference pages.
///
/// Session state (token, state name, country name) is fixed at construction.
/// Every operation fetches fresh; nothing is cached between calls.
pub struct TripPlanner {
    transport: Box<dyn Transport>,
    state_name: String,
    country_name: String,
}

impl TripPlanner {
    /// Create a planner talking to the live eBird API. The token comes from
    /// https://ebird.org/api/keygen; state and country names may be left
    /// empty and are only required by the operations that resolve them.
    pub fn new(token: &str, state_name: &str, country_name: &str) -> Result<Self, Error> {
        if token.trim().is_empty() {
            return Err(Error::Configuration(
                "an eBird API token is required; obtain one at https://ebird.org/api/keygen"
                    .to_string(),
            ));
        }

        Ok(Self::with_transport(
            Box::new(EbirdTransport::new(token)?),
            state_name,
            country_name,
        ))
    }

    /// Create a planner over a caller-supplied transport. This is the seam
    /// used to run the lookup chain against canned responses.
    pub fn with_transport(
        transport: Box<dyn Transport>,
        state_name: &str,
        country_name: &str,
    ) -> Self {
        Self {
            transport,
            state_name: state_name.to_string(),
            country_name: country_name.to_string(),
        }
    }

    fn fetch_regions(&self, url: &str) -> Result<Vec<Region>, Error> {
        let value = self.transport.get_json(url, &[])?;
        Ok(serde_json::from_value(value)?)
    }

    /// Region code of the configured country, e.g. "US" for "United States".
    pub fn country_code(&self) -> Result<String, Error> {
        if self.country_name.is_empty() {
            return Err(Error::Configuration(
                "no country configured for this planner".to_string(),
            ));
        }
        let countries = self.fetch_regions(&format!("{API_BASE}/ref/region/list/country/world"))?;
        find_region_code(&self.country_name, &countries, RegionType::Country)
    }

    /// All supported country display names, in API order. Needs no
    /// configured country.
    pub fn country_names(&self) -> Result<Vec<String>, Error> {
        let countries = self.fetch_regions(&format!("{API_BASE}/ref/region/list/country/world"))?;
        Ok(countries.into_iter().map(|region| region.name).collect())
    }

    /// Region code of the configured state within the configured country,
    /// e.g. "US-NY" for "New York".
    pub fn state_code(&self) -> Result<String, Error> {
        let country_code = self.country_code()?;
        if self.state_name.is_empty() {
            return Err(Error::Configuration(
                "no state configured for this planner".to_string(),
            ));
        }
        let states =
            self.fetch_regions(&format!("{API_BASE}/ref/region/list/subnational1/{country_code}"))?;
        find_region_code(&self.state_name, &states, RegionType::State)
    }

    /// All state names within the configured country.
    pub fn state_names(&self) -> Result<Vec<String>, Error> {
        let country_code = self.country_code()?;
        let states =
            self.fetch_regions(&format!("{API_BASE}/ref/region/list/subnational1/{country_code}"))?;
        Ok(states.into_iter().map(|region| region.name).collect())
    }

    /// Region code of a substate (in the US, a county) within the configured
    /// state, e.g. "US-NY-047" for "Kings".
    pub fn substate_code(&self, substate_name: &str) -> Result<String, Error> {
        let state_code = self.state_code()?;
        let substates =
            self.fetch_regions(&format!("{API_BASE}/ref/region/list/subnational2/{state_code}"))?;
        find_region_code(substate_name, &substates, RegionType::Substate)
    }

    /// All substate (county) names within the configured state.
    pub fn substate_names(&self) -> Result<Vec<String>, Error> {
        let state_code = self.state_code()?;
        let substates =
            self.fetch_regions(&format!("{API_BASE}/ref/region/list/subnational2/{state_code}"))?;
        Ok(substates.into_iter().map(|region| region.name).collect())
    }

    /// Region code for a hotspot query. Hotspots are only listed at state or
    /// substate level.
    fn resolve_hotspot_region(
        &self,
        substate_name: Option<&str>,
        region_type: RegionType,
    ) -> Result<String, Error> {
        if substate_name.is_some() && region_type != RegionType::Substate {
            return Err(Error::Validation(
                "a substate name requires region type substate".to_string(),
            ));
        }
        match region_type {
            RegionType::Substate => {
                let name = substate_name.ok_or_else(|| {
                    Error::Validation("region type substate requires a substate name".to_string())
                })?;
                self.substate_code(name)
            }
            RegionType::State => self.state_code(),
            RegionType::Country => Err(Error::Validation(
                "hotspots can only be listed at state or substate level".to_string(),
            )),
        }
    }

    /// Raw hotspot records for the configured state or a named substate.
    pub fn hotspots(
        &self,
        substate_name: Option<&str>,
        region_type: RegionType,
    ) -> Result<Vec<Hotspot>, Error> {
        let region_code = self.resolve_hotspot_region(substate_name, region_type)?;
        let value = self.transport.get_json(
            &format!("{API_BASE}/ref/hotspot/{region_code}"),
            &[("fmt", "json".to_string())],
        )?;
        let hotspots: Vec<Hotspot> = serde_json::from_value(value)?;
        info!("Fetched {} hotspots for {}", hotspots.len(), region_code);
        Ok(hotspots)
    }

    /// Hotspot records projected onto the six display columns.
    pub fn hotspot_table(
        &self,
        substate_name: Option<&str>,
        region_type: RegionType,
    ) -> Result<Table, Error> {
        let hotspots = self.hotspots(substate_name, region_type)?;
        let mut table = Table::new(HOTSPOT_COLUMNS.iter().map(|c| c.to_string()).collect());
        for hotspot in &hotspots {
            table.push_row(hotspot.row());
        }
        Ok(table)
    }

    /// Location code of a named hotspot within the resolved region. The name
    /// match is exact and case-sensitive; hotspot names are not guaranteed
    /// unique, and the scan does not break early, so the last match wins.
    pub fn hotspot_code(
        &self,
        hotspot_name: &str,
        substate_name: Option<&str>,
        region_type: RegionType,
    ) -> Result<String, Error> {
        let hotspots = self.hotspots(substate_name, region_type)?;

        let mut code = None;
        for hotspot in &hotspots {
            if hotspot.loc_name == hotspot_name {
                code = Some(hotspot.loc_id.clone());
            }
        }

        code.ok_or_else(|| {
            Error::Lookup(format!(
                "{hotspot_name} does not exist within the given region"
            ))
        })
    }

    /// Query target for the observation endpoints, by precedence: explicit
    /// location codes (region path left empty), then hotspot name, then the
    /// requested region tier.
    fn resolve_observation_region(&self, req: &ObservationRequest) -> Result<String, Error> {
        if req.locations.len() > MAX_LOCATIONS {
            return Err(Error::Validation(format!(
                "at most {MAX_LOCATIONS} explicit location codes are supported, got {}",
                req.locations.len()
            )));
        }
        if !req.locations.is_empty() {
            return Ok(String::new());
        }
        if let Some(hotspot_name) = &req.hotspot_name {
            return self.hotspot_code(hotspot_name, req.substate_name.as_deref(), req.region_type);
        }
        match req.region_type {
            RegionType::Substate => {
                let name = req.substate_name.as_deref().ok_or_else(|| {
                    Error::Validation("region type substate requires a substate name".to_string())
                })?;
                self.substate_code(name)
            }
            RegionType::State => self.state_code(),
            RegionType::Country => self.country_code(),
        }
    }

    fn observation_params(req: &ObservationRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![("back", req.days_back.to_string())];
        for location in &req.locations {
            params.push(("r", location.clone()));
        }
        params.push(("hotspot", req.only_hotspots.to_string()));
        params
    }

    fn fetch_observations(
        &self,
        endpoint: &str,
        req: &ObservationRequest,
    ) -> Result<Vec<Observation>, Error> {
        let value = self
            .transport
            .get_json(endpoint, &Self::observation_params(req))?;
        Ok(serde_json::from_value(value)?)
    }

    /// One page fetch per record, in order. A transport or scrape failure
    /// aborts the pass; partial enrichment is never returned.
    fn enrich(&self, observations: &mut [Observation]) -> Result<(), Error> {
        for obs in observations.iter_mut() {
            obs.id_info = Some(self.bird_id_info(&obs.species_code)?);
        }
        Ok(())
    }

    /// Raw recent observation records for the resolved target. An empty
    /// result is a lookup failure.
    pub fn recent_observations(
        &self,
        req: &ObservationRequest,
    ) -> Result<Vec<Observation>, Error> {
        let region_code = self.resolve_observation_region(req)?;
        let mut observations = self.fetch_observations(
            &format!("{API_BASE}/data/obs/{region_code}/recent"),
            req,
        )?;

        if observations.is_empty() {
            return Err(Error::Lookup(
                "no recent observations in this location".to_string(),
            ));
        }

        if req.id_info {
            self.enrich(&mut observations)?;
        }

        info!("Fetched {} recent observations", observations.len());
        Ok(observations)
    }

    /// Recent observations projected onto the display columns.
    pub fn recent_observations_table(&self, req: &ObservationRequest) -> Result<Table, Error> {
        let observations = self.recent_observations(req)?;
        Ok(observation_table(&observations, req.id_info, false))
    }

    /// Notable (rare-for-the-region) observations as a table. Unlike the
    /// recent query, an empty result is returned as an empty table. Dates are
    /// reduced to the calendar day and duplicate rows collapsed, since the
    /// notable endpoint serves one sub-record per confirming checklist.
    pub fn recent_rare_observations(&self, req: &ObservationRequest) -> Result<Table, Error> {
        let region_code = self.resolve_observation_region(req)?;
        let mut observations = self.fetch_observations(
            &format!("{API_BASE}/data/obs/{region_code}/recent/notable"),
            req,
        )?;

        if req.id_info {
            self.enrich(&mut observations)?;
        }

        info!("Fetched {} notable observations", observations.len());
        let mut table = observation_table(&observations, req.id_info, true);
        table.dedup_rows();
        Ok(table)
    }

    /// Recent observations of one species, matched case-insensitively by
    /// common name against what is currently being reported in the resolved
    /// target. When requested, identification text is fetched once for the
    /// species and applied to every row.
    pub fn species_observations(
        &self,
        bird_name: &str,
        req: &ObservationRequest,
    ) -> Result<Table, Error> {
        // The pre-pass only supplies species codes; never enrich it.
        let survey = ObservationRequest {
            id_info: false,
            ..req.clone()
        };
        let region_observations = self.recent_observations(&survey)?;
        let region_code = self.resolve_observation_region(req)?;

        let wanted = bird_name.to_lowercase();
        let mut species_code = None;
        for obs in &region_observations {
            if obs.com_name.to_lowercase() == wanted {
                species_code = Some(obs.species_code.clone());
            }
        }

        let Some(species_code) = species_code else {
            let context = req
                .hotspot_name
                .as_deref()
                .or(req.substate_name.as_deref())
                .unwrap_or(&self.state_name);
            return Err(Error::Lookup(format!(
                "no recent observations of {bird_name} in {context}"
            )));
        };

        let observations = self.fetch_observations(
            &format!("{API_BASE}/data/obs/{region_code}/recent/{species_code}"),
            req,
        )?;
        info!(
            "Fetched {} observations of {}",
            observations.len(),
            species_code
        );

        let id_info = if req.id_info {
            Some(self.bird_id_info(&species_code)?)
        } else {
            None
        };

        Ok(species_table(&observations, id_info.as_deref()))
    }

    /// Identification blurb for a species, scraped from its reference page.
    pub fn bird_id_info(&self, species_code: &str) -> Result<String, Error> {
        let page = self
            .transport
            .get_page(&format!("{SPECIES_PAGE_BASE}/{species_code}"))?;
        extract_id_info(&page)
    }
}
