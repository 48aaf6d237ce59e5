use crate::{filter::SelectionFilter, Result};
use derive_deref::Deref;
use polars::prelude::*;

/// Club sentinel for tracking samples with no team affiliation (the ball).
pub const BALL: &str = "BALL";

#[derive(Clone, Debug, Deref)]
pub struct TrackingDf(DataFrame);

impl TrackingDf {
    pub fn new(df: DataFrame) -> Self {
        TrackingDf(df)
    }

    pub fn filter(self, filter: Expr) -> Result<Self> {
        let df = self.0.lazy().filter(filter).collect()?;
        Ok(TrackingDf(df))
    }

    /// Narrows to one play's samples.
    pub fn for_play(&self, game_id: i64, play_id: i64) -> Result<Self> {
        let filter = SelectionFilter::new().game(game_id).play(play_id).build();
        self.clone().filter(filter)
    }

    /// Distinct player display names observed in this subset, in first-seen
    /// order. Empty when the play has no tracking samples.
    pub fn player_names(&self) -> Result<Vec<String>> {
        let distinct = self
            .0
            .clone()
            .lazy()
            .filter(
                col("displayName")
                    .is_not_null()
                    .and(col("displayName").is_first_distinct()),
            )
            .select([col("displayName")])
            .collect()?;

        let names = distinct
            .column("displayName")?
            .str()?
            .into_iter()
            .flatten()
            .map(String::from)
            .collect();
        Ok(names)
    }

    /// Distinct `(nflId, club)` pairs for this subset. Club affiliation is
    /// per-play, so assembly must take it from here, never from a
    /// season-global source.
    pub fn club_pairs(&self) -> Result<DataFrame> {
        let pairs = self
            .0
            .clone()
            .lazy()
            .filter(col("nflId").is_not_null())
            .select([col("nflId"), col("club")])
            .unique_stable(None, UniqueKeepStrategy::First)
            .collect()?;
        Ok(pairs)
    }

    /// Distinct players in this subset; the ball (null `nflId`) never counts.
    pub fn participant_count(&self) -> Result<u32> {
        let counted = self
            .0
            .clone()
            .lazy()
            .select([col("nflId").drop_nulls().n_unique()])
            .collect()?;
        let count = counted.column("nflId")?.u32()?.get(0).unwrap_or(0);
        Ok(count)
    }
}
