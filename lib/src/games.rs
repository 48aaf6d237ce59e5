use crate::{error::Error, teams, Result};
use derive_deref::Deref;
use polars::prelude::*;

/// One resolved game selection.
#[derive(Debug, Clone)]
pub struct Game {
    pub game_id: i64,
    pub date: String,
    pub home_abbr: String,
    pub visitor_abbr: String,
    pub home_name: String,
    pub visitor_name: String,
}

#[derive(Clone, Debug, Deref)]
pub struct GamesDf(DataFrame);

impl GamesDf {
    /// Wraps the raw games table and computes the derived display columns:
    /// parsed date, `%d/%m/%Y` display string, full team names (raw
    /// abbreviation when unmapped), and the composite selection label.
    pub fn new(df: DataFrame) -> Result<Self> {
        let teams_df = teams::frame();
        let join_args = JoinArgs::new(JoinType::Left);

        let df = df
            .lazy()
            .with_column(col("gameDate").str().to_date(StrptimeOptions {
                format: Some("%m/%d/%Y".into()),
                ..Default::default()
            }))
            .with_column(
                col("gameDate")
                    .dt()
                    .to_string("%d/%m/%Y")
                    .alias("gameDateDisplay"),
            )
            .join(
                teams_df.clone().lazy(),
                [col("homeTeamAbbr")],
                [col("abbr")],
                join_args.clone(),
            )
            .with_column(
                col("teamName")
                    .fill_null(col("homeTeamAbbr"))
                    .alias("homeTeamFull"),
            )
            .drop(["teamName"])
            .join(
                teams_df.lazy(),
                [col("visitorTeamAbbr")],
                [col("abbr")],
                join_args,
            )
            .with_column(
                col("teamName")
                    .fill_null(col("visitorTeamAbbr"))
                    .alias("visitorTeamFull"),
            )
            .drop(["teamName"])
            .with_column(
                concat_str(
                    [
                        col("gameDateDisplay"),
                        lit("-"),
                        col("homeTeamFull"),
                        lit("vs"),
                        col("visitorTeamFull"),
                    ],
                    " ",
                    true,
                )
                .alias("gameLabel"),
            )
            .collect()?;

        log::debug!("{} games enriched", df.height());
        Ok(GamesDf(df))
    }

    pub fn filter(self, filter: Expr) -> Result<Self> {
        let df = self.0.lazy().filter(filter).collect()?;
        Ok(GamesDf(df))
    }

    /// Selection labels in load order, one per game.
    pub fn labels(&self) -> Result<Vec<String>> {
        let labels = self
            .0
            .column("gameLabel")?
            .str()?
            .into_iter()
            .flatten()
            .map(String::from)
            .collect();
        Ok(labels)
    }

    /// Resolves a composite label back to its game. Anything other than
    /// exactly one match is a recoverable `SelectionNotFound`.
    pub fn select_game(&self, label: &str) -> Result<Game> {
        let matched = self
            .0
            .clone()
            .lazy()
            .filter(col("gameLabel").eq(lit(label)))
            .collect()?;

        if matched.height() != 1 {
            return Err(Error::SelectionNotFound(label.to_string()));
        }

        let game_id = matched
            .column("gameId")?
            .i64()?
            .get(0)
            .ok_or_else(|| Error::SelectionNotFound(label.to_string()))?;
        let get_str = |name: &str| -> Result<String> {
            Ok(matched
                .column(name)?
                .str()?
                .get(0)
                .unwrap_or_default()
                .to_string())
        };

        Ok(Game {
            game_id,
            date: get_str("gameDateDisplay")?,
            home_abbr: get_str("homeTeamAbbr")?,
            visitor_abbr: get_str("visitorTeamAbbr")?,
            home_name: get_str("homeTeamFull")?,
            visitor_name: get_str("visitorTeamFull")?,
        })
    }
}
