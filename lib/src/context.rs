use crate::{filter::SelectionFilter, games::GamesDf, tracking::TrackingDf, Result, SourceTable};
use derive_deref::Deref;
use polars::prelude::*;
use std::path::Path;

#[derive(Clone, Debug, Deref)]
pub struct PlaysDf(DataFrame);

impl PlaysDf {
    pub fn new(df: DataFrame) -> Self {
        PlaysDf(df)
    }

    /// Distinct play identifiers belonging to one game, ascending. The core
    /// consumes plays by identity only.
    pub fn play_ids(&self, game_id: i64) -> Result<Vec<i64>> {
        let plays = self
            .0
            .clone()
            .lazy()
            .filter(SelectionFilter::new().game(game_id).build())
            .select([col("playId")])
            .unique_stable(None, UniqueKeepStrategy::First)
            .sort(["playId"], SortMultipleOptions::default())
            .collect()?;

        let ids = plays.column("playId")?.i64()?.into_iter().flatten().collect();
        Ok(ids)
    }
}

#[derive(Clone, Debug, Deref)]
pub struct PlayersDf(DataFrame);

impl PlayersDf {
    pub fn new(df: DataFrame) -> Self {
        PlayersDf(df)
    }
}

#[derive(Clone, Debug, Deref)]
pub struct PlayerPlayDf(DataFrame);

impl PlayerPlayDf {
    pub fn new(df: DataFrame) -> Self {
        PlayerPlayDf(df)
    }
}

/// The five loaded tables. Built once at startup, read-only afterwards, and
/// passed by reference into every selection recomputation.
#[derive(Debug)]
pub struct DataContext {
    games: GamesDf,
    plays: PlaysDf,
    players: PlayersDf,
    player_play: PlayerPlayDf,
    tracking: TrackingDf,
}

impl DataContext {
    /// Loads the five staged csv files from `dir`. All five must exist; a
    /// missing file aborts with `DataUnavailable` before any table is read.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        for table in SourceTable::ALL {
            let path = dir.join(table.filename());
            if !path.exists() {
                return Err(crate::Error::DataUnavailable(path));
            }
        }

        let load = |table: SourceTable| crate::load_csv(dir.join(table.filename()));
        let ctx = Self::from_frames(
            load(SourceTable::Games)?,
            load(SourceTable::Plays)?,
            load(SourceTable::Players)?,
            load(SourceTable::PlayerPlay)?,
            load(SourceTable::TrackingWeek1)?,
        )?;
        log::info!(
            "dataset loaded: {} games, {} plays, {} tracking samples",
            ctx.games.height(),
            ctx.plays.height(),
            ctx.tracking.height()
        );
        Ok(ctx)
    }

    /// Builds a context from already-materialized frames. Game enrichment
    /// still runs, so the frames carry raw source columns.
    pub fn from_frames(
        games: DataFrame,
        plays: DataFrame,
        players: DataFrame,
        player_play: DataFrame,
        tracking: DataFrame,
    ) -> Result<Self> {
        Ok(Self {
            games: GamesDf::new(games)?,
            plays: PlaysDf::new(plays),
            players: PlayersDf::new(players),
            player_play: PlayerPlayDf::new(player_play),
            tracking: TrackingDf::new(tracking),
        })
    }

    pub fn games(&self) -> &GamesDf {
        &self.games
    }

    pub fn plays(&self) -> &PlaysDf {
        &self.plays
    }

    pub fn players(&self) -> &PlayersDf {
        &self.players
    }

    pub fn player_play(&self) -> &PlayerPlayDf {
        &self.player_play
    }

    pub fn tracking(&self) -> &TrackingDf {
        &self.tracking
    }
}
