use crate::{
    context::DataContext, filter::SelectionFilter, games::Game, tracking::TrackingDf, Result,
};
use polars::{prelude::*, sql::SQLContext};
use serde::Serialize;

/// Sparse numeric participation fields. Absent values mean "no contribution"
/// and are zeroed before any aggregation.
const STAT_COLS: [&str; 6] = [
    "rushingYards",
    "passingYards",
    "receivingYards",
    "soloTackle",
    "tackleForALoss",
    "interceptionYards",
];

// (source column, presentation label)
const TABLE_COLS: [(&str, &str); 9] = [
    ("displayName", "Player"),
    ("position", "Position"),
    ("club", "Team"),
    ("rushingYards", "Rushing Yards"),
    ("passingYards", "Passing Yards"),
    ("receivingYards", "Receiving Yards"),
    ("soloTackle", "Solo Tackles"),
    ("tackleForALoss", "Tackles For Loss"),
    ("interceptionYards", "Interception Yards"),
];

static TOTALS_QUERY: &str = r#"
    SELECT
        SUM("passingYards") as passing,
        SUM("receivingYards") as receiving
    FROM play_stats
"#;

/// Headline fields for one play.
#[derive(Debug, Clone, Serialize)]
pub struct PlayHeadline {
    pub home_team: String,
    pub visitor_team: String,
    pub leading_rusher: Option<String>,
    pub participants: u32,
    pub passing_yards: i64,
    pub receiving_yards: i64,
}

pub struct PlaySummary {
    /// One row per participant, presentation column labels.
    pub table: DataFrame,
    pub headline: PlayHeadline,
}

/// Consolidates one play's participation records: stat rows joined to player
/// identity and to the club each player lined up with in this play.
pub fn assemble(
    ctx: &DataContext,
    game: &Game,
    play_id: i64,
    tracking_play: &TrackingDf,
) -> Result<PlaySummary> {
    let join_args = JoinArgs::new(JoinType::Left).with_coalesce(JoinCoalesce::CoalesceColumns);

    // Stat rows with no matching player keep null display fields; they are
    // never dropped.
    let merged = ctx
        .player_play()
        .join(ctx.players(), ["nflId"], ["nflId"], join_args.clone())?;
    let club_pairs = tracking_play.club_pairs()?;
    let merged = merged.join(&club_pairs, ["nflId"], ["nflId"], join_args)?;

    let filter = SelectionFilter::new().game(game.game_id).play(play_id).build();
    let fill_zero: Vec<Expr> = STAT_COLS.iter().map(|c| col(*c).fill_null(lit(0))).collect();
    let stats = merged.lazy().filter(filter).with_columns(fill_zero).collect()?;
    log::debug!("{} participation records for play {}", stats.height(), play_id);

    let mut sql = SQLContext::new();
    sql.register("play_stats", stats.clone().lazy());
    let totals = sql.execute(TOTALS_QUERY)?.collect()?;
    let passing_yards = totals.column("passing")?.i64()?.get(0).unwrap_or(0);
    let receiving_yards = totals.column("receiving")?.i64()?.get(0).unwrap_or(0);

    let headline = PlayHeadline {
        home_team: game.home_name.clone(),
        visitor_team: game.visitor_name.clone(),
        leading_rusher: leading_rusher(&stats)?,
        participants: tracking_play.participant_count()?,
        passing_yards,
        receiving_yards,
    };

    let select: Vec<Expr> = TABLE_COLS.iter().map(|(c, _)| col(*c)).collect();
    let existing: Vec<&str> = TABLE_COLS.iter().map(|(c, _)| *c).collect();
    let labels: Vec<&str> = TABLE_COLS.iter().map(|(_, l)| *l).collect();
    let table = stats.lazy().select(select).rename(existing, labels).collect()?;

    Ok(PlaySummary { table, headline })
}

/// First row of a stable descending sort on rushing yards. With all-zero
/// rushing this still names the first participant; row order decides ties.
fn leading_rusher(stats: &DataFrame) -> Result<Option<String>> {
    if stats.height() == 0 {
        return Ok(None);
    }
    let by_rushing = stats
        .clone()
        .lazy()
        .sort(
            ["rushingYards"],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_maintain_order(true),
        )
        .collect()?;
    let name = by_rushing.column("displayName")?.str()?.get(0).map(String::from);
    Ok(name)
}
