use crate::error::Error;
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

/// One (name, code) pair from the eBird region-listing endpoints. The same
/// shape is served for all three tiers (country, state, substate).
#[derive(Debug, Clone, Deserialize)]
pub struct Region {
    pub code: String,
    pub name: String,
}

/// Region tier used when resolving a query target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RegionType {
    Country,
    State,
    Substate,
}

impl fmt::Display for RegionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RegionType::Country => "country",
            RegionType::State => "state",
            RegionType::Substate => "substate",
        };
        write!(f, "{name}")
    }
}

/// Case-insensitive exact-match scan of a region list. Upstream data can
/// carry duplicate names; the scan deliberately never breaks early, so the
/// last matching entry wins.
pub(crate) fn find_region_code(
    name: &str,
    regions: &[Region],
    tier: RegionType,
) -> Result<String, Error> {
    let wanted = name.to_lowercase();
    let mut code = None;
    for region in regions {
        if region.name.to_lowercase() == wanted {
            code = Some(region.code.clone());
        }
    }

    code.ok_or_else(|| Error::Lookup(format!("{name} does not exist within the {tier} list")))
}
