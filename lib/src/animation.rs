use crate::{
    error::Error,
    teams,
    tracking::{TrackingDf, BALL},
    Result,
};
use itertools::Itertools;
use polars::prelude::*;
use std::collections::HashMap;

/// One ball overlay position. The ball is a single fixed-size icon, drawn
/// per frame rather than as a colored scatter series.
#[derive(Debug, Clone, PartialEq)]
pub struct BallPosition {
    pub frame_id: i64,
    pub x: f64,
    pub y: f64,
}

/// Animation-ready view of one play, ordered by `frameId`. `nflId` stays in
/// `players` as the stable per-entity key so the consumer can animate
/// continuous motion instead of re-keying each frame.
#[derive(Debug)]
pub struct AnimationData {
    pub players: DataFrame,
    pub colors: HashMap<String, String>,
    pub ball: Vec<BallPosition>,
}

/// Builds the animation dataset for one play's tracking subset. A player
/// filter keeps that player's samples plus every ball sample; the ball is
/// never excluded by an identity filter.
pub fn build(tracking_play: &TrackingDf, player: Option<&str>) -> Result<AnimationData> {
    let df: &DataFrame = tracking_play;
    if df.height() == 0 || !df.get_column_names().contains(&"frameId") {
        return Err(Error::EmptyAnimationInput);
    }

    // Null club marks the ball; canonicalize before any split or filter.
    let mut lf = df
        .clone()
        .lazy()
        .with_column(col("club").fill_null(lit(BALL)));
    if let Some(name) = player {
        lf = lf.filter(col("displayName").eq(lit(name)).or(col("club").eq(lit(BALL))));
    }
    let sorted = lf.sort(["frameId"], SortMultipleOptions::default()).collect()?;
    if sorted.height() == 0 {
        return Err(Error::EmptyAnimationInput);
    }

    let players = sorted
        .clone()
        .lazy()
        .filter(col("club").neq(lit(BALL)))
        .collect()?;
    let ball_df = sorted.lazy().filter(col("club").eq(lit(BALL))).collect()?;
    log::debug!(
        "animation built: {} player samples, {} ball samples",
        players.height(),
        ball_df.height()
    );

    let colors = color_map(&players)?;
    let ball = ball_overlay(&ball_df)?;

    Ok(AnimationData { players, colors, ball })
}

/// Club to hex color, for clubs the identity resolver knows. Unmapped clubs
/// get no entry and render without a forced color.
fn color_map(players: &DataFrame) -> Result<HashMap<String, String>> {
    let mut colors = HashMap::new();
    for club in players.column("club")?.str()?.into_iter().flatten().unique() {
        if let Some(color) = teams::resolve(club).color {
            colors.insert(club.to_string(), color);
        }
    }
    Ok(colors)
}

/// One position per frame; the first sample wins when a frame repeats.
fn ball_overlay(ball_df: &DataFrame) -> Result<Vec<BallPosition>> {
    let frames = ball_df.column("frameId")?.i64()?;
    let xs = ball_df.column("x")?.f64()?;
    let ys = ball_df.column("y")?.f64()?;

    let positions = frames
        .into_iter()
        .zip(xs)
        .zip(ys)
        .filter_map(|((frame_id, x), y)| Some((frame_id?, x?, y?)))
        .dedup_by(|a, b| a.0 == b.0)
        .map(|(frame_id, x, y)| BallPosition { frame_id, x, y })
        .collect();
    Ok(positions)
}
