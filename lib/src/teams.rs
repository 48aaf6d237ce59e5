use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Display identity for one club. `color` is absent for abbreviations
/// outside the static table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub name: String,
    pub color: Option<String>,
}

// (abbreviation, full name, primary hex color)
const TEAMS: &[(&str, &str, &str)] = &[
    ("ARI", "Arizona Cardinals", "#97233F"),
    ("ATL", "Atlanta Falcons", "#A71930"),
    ("BAL", "Baltimore Ravens", "#241773"),
    ("BUF", "Buffalo Bills", "#00338D"),
    ("CAR", "Carolina Panthers", "#0085CA"),
    ("CHI", "Chicago Bears", "#0B162A"),
    ("CIN", "Cincinnati Bengals", "#FB4F14"),
    ("CLE", "Cleveland Browns", "#311D00"),
    ("DAL", "Dallas Cowboys", "#003594"),
    ("DEN", "Denver Broncos", "#FB4F14"),
    ("DET", "Detroit Lions", "#0076B6"),
    ("GB", "Green Bay Packers", "#203731"),
    ("HOU", "Houston Texans", "#03202F"),
    ("IND", "Indianapolis Colts", "#002C5F"),
    ("JAX", "Jacksonville Jaguars", "#101820"),
    ("KC", "Kansas City Chiefs", "#E31837"),
    ("LA", "Los Angeles Rams", "#003594"),
    ("LAC", "Los Angeles Chargers", "#0080C6"),
    ("LV", "Las Vegas Raiders", "#000000"),
    ("MIA", "Miami Dolphins", "#008E97"),
    ("MIN", "Minnesota Vikings", "#4F2683"),
    ("NE", "New England Patriots", "#002244"),
    ("NO", "New Orleans Saints", "#D3BC8D"),
    ("NYG", "New York Giants", "#0B2265"),
    ("NYJ", "New York Jets", "#125740"),
    ("PHI", "Philadelphia Eagles", "#004C54"),
    ("PIT", "Pittsburgh Steelers", "#FFB612"),
    ("SEA", "Seattle Seahawks", "#002244"),
    ("SF", "San Francisco 49ers", "#AA0000"),
    ("TB", "Tampa Bay Buccaneers", "#D50A0A"),
    ("TEN", "Tennessee Titans", "#0C2340"),
    ("WAS", "Washington Commanders", "#5A1414"),
];

/// Total lookup: an unmapped abbreviation displays as itself, uncolored.
pub fn resolve(abbr: &str) -> TeamInfo {
    match TEAMS.iter().find(|(a, _, _)| *a == abbr) {
        Some((_, name, color)) => TeamInfo {
            name: (*name).to_string(),
            color: Some((*color).to_string()),
        },
        None => TeamInfo {
            name: abbr.to_string(),
            color: None,
        },
    }
}

/// The mapping as a joinable frame, for enriching game records in bulk.
pub fn frame() -> DataFrame {
    let abbrs: Vec<&str> = TEAMS.iter().map(|(a, _, _)| *a).collect();
    let names: Vec<&str> = TEAMS.iter().map(|(_, n, _)| *n).collect();
    df!("abbr" => abbrs, "teamName" => names).expect("static team table is well-formed")
}
