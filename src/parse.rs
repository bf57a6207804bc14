use clap::{Args as ClapArgs, Parser, Subcommand};
use veery::RegionType;

#[derive(Parser)]
#[command(name = "veery")]
#[command(about = "A CLI tool for planning birdwatching trips with the eBird API")]
#[command(version = "1.0")]
pub(crate) struct Args {
    /// eBird API token, from https://ebird.org/api/keygen
    #[arg(short, long)]
    pub token: String,

    /// Full name of the state to explore
    #[arg(short, long, default_value = "")]
    pub state: String,

    /// Full name of the country to explore
    #[arg(short, long, default_value = "")]
    pub country: String,

    /// Write the result to a CSV file instead of printing it
    #[arg(short, long)]
    pub output: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// List supported country, state, or substate names
    Regions {
        /// Region tier to list names for
        #[arg(value_enum, default_value_t = RegionType::State)]
        tier: RegionType,
    },

    /// List birding hotspots in the configured state or a substate
    Hotspots {
        /// Substate (county) name; requires --region-type substate
        #[arg(long)]
        substate: Option<String>,

        /// Region tier to list hotspots for
        #[arg(long, value_enum, default_value_t = RegionType::State)]
        region_type: RegionType,
    },

    /// Recent observations in a region, hotspot, or explicit location set
    Recent {
        /// Only report observations flagged notable/rare for the region
        #[arg(long)]
        rare: bool,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Recent observations of one species, matched by common name
    Species {
        /// Common name of the species of interest
        name: String,

        #[command(flatten)]
        query: QueryArgs,
    },
}

#[derive(ClapArgs)]
pub(crate) struct QueryArgs {
    /// Name of a birding hotspot to narrow the query to
    #[arg(long)]
    pub hotspot: Option<String>,

    /// Substate (county) name; requires --region-type substate
    #[arg(long)]
    pub substate: Option<String>,

    /// Region tier to query when no hotspot or locations are given
    #[arg(long, value_enum, default_value_t = RegionType::State)]
    pub region_type: RegionType,

    /// Number of days to look back (the API caps this at 30)
    #[arg(long, default_value = "14")]
    pub days_back: u32,

    /// Explicit location codes to query instead of a region (up to 10)
    #[arg(long)]
    pub location: Vec<String>,

    /// Only report observations made at hotspots
    #[arg(long)]
    pub only_hotspots: bool,

    /// Attach identification info to each record (slow: one page fetch each)
    #[arg(long)]
    pub id_info: bool,
}
