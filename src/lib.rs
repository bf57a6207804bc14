//! Trip-planning client for the eBird API: resolve geography names to region
//! codes, list birding hotspots, and fetch recent, notable, and
//! species-specific observations, optionally enriched with identification
//! text from the species reference pages. Using the API requires a token,
//! which anyone with an eBird account can obtain at
//! https://ebird.org/api/keygen.

mod error;
mod hotspot;
mod idinfo;
mod observation;
mod planner;
mod region;
mod table;
mod transport;

pub use error::Error;
pub use hotspot::Hotspot;
pub use observation::{
    DEFAULT_DAYS_BACK, MAX_DAYS_BACK, MAX_LOCATIONS, Observation, ObservationRequest,
};
pub use planner::TripPlanner;
pub use region::{Region, RegionType};
pub use table::Table;
pub use transport::{EbirdTransport, Transport};
