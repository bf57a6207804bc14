mod parse;

use crate::parse::{Args, Command, QueryArgs};
use clap::Parser;
use veery::{ObservationRequest, RegionType, Table, TripPlanner};

fn observation_request(query: QueryArgs) -> ObservationRequest {
    ObservationRequest {
        hotspot_name: query.hotspot,
        substate_name: query.substate,
        region_type: query.region_type,
        days_back: query.days_back,
        locations: query.location,
        only_hotspots: query.only_hotspots,
        id_info: query.id_info,
    }
}

fn output_table(table: &Table, output: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(filename) => table.save_to_csv(filename),
        None => {
            println!("{table}");
            println!("{} rows", table.len());
            Ok(())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::try_parse()?;
    // Initialize logger
    env_logger::init();

    let planner = TripPlanner::new(&args.token, &args.state, &args.country)?;

    match args.command {
        Command::Regions { tier } => {
            let names = match tier {
                RegionType::Country => planner.country_names()?,
                RegionType::State => planner.state_names()?,
                RegionType::Substate => planner.substate_names()?,
            };
            for name in names {
                println!("{name}");
            }
        }
        Command::Hotspots {
            substate,
            region_type,
        } => {
            let table = planner.hotspot_table(substate.as_deref(), region_type)?;
            output_table(&table, args.output.as_deref())?;
        }
        Command::Recent { rare, query } => {
            let request = observation_request(query);
            let table = if rare {
                planner.recent_rare_observations(&request)?
            } else {
                planner.recent_observations_table(&request)?
            };
            output_table(&table, args.output.as_deref())?;
        }
        Command::Species { name, query } => {
            let request = observation_request(query);
            let table = planner.species_observations(&name, &request)?;
            output_table(&table, args.output.as_deref())?;
        }
    }

    Ok(())
}
