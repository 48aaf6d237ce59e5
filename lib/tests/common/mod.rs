#![allow(dead_code)]

use bdb::DataContext;
use polars::prelude::*;

pub const GAME_1: i64 = 2022090800;
pub const GAME_2: i64 = 2022091100;
pub const LABEL_1: &str = "08/09/2022 - Buffalo Bills vs Los Angeles Rams";

pub fn games_frame() -> DataFrame {
    df!(
        "gameId" => &[GAME_1, GAME_2],
        "gameDate" => &["09/08/2022", "09/11/2022"],
        "homeTeamAbbr" => &["BUF", "NYJ"],
        "visitorTeamAbbr" => &["LA", "BAL"],
    )
    .unwrap()
}

pub fn plays_frame() -> DataFrame {
    // play 101 listed twice: listing must dedup
    df!(
        "gameId" => &[GAME_1, GAME_1, GAME_1, GAME_2],
        "playId" => &[101i64, 56, 101, 64],
    )
    .unwrap()
}

pub fn players_frame() -> DataFrame {
    df!(
        "nflId" => &[1i64, 2, 3],
        "displayName" => &["Josh Allen", "Cooper Kupp", "Von Miller"],
        "position" => &["QB", "WR", "LB"],
    )
    .unwrap()
}

pub fn player_play_frame() -> DataFrame {
    // Play 56 carries sparse stats plus one stat row (nflId 99) with no
    // matching player. Play 101 has participation rows but no stat values.
    // The GAME_2 row must never leak into GAME_1 aggregates.
    df!(
        "gameId" => &[GAME_1, GAME_1, GAME_1, GAME_1, GAME_1, GAME_1, GAME_2],
        "playId" => &[56i64, 56, 56, 56, 101, 101, 64],
        "nflId" => &[1i64, 2, 3, 99, 1, 2, 1],
        "rushingYards" => &[None, Some(7i64), None, None, None, None, None],
        "passingYards" => &[Some(12i64), None, None, None, None, None, Some(99)],
        "receivingYards" => &[None, Some(12i64), None, None, None, None, None],
        "soloTackle" => &[None, None, Some(1i64), None, None, None, None],
        "tackleForALoss" => &[None::<i64>, None, None, None, None, None, None],
        "interceptionYards" => &[None::<i64>, None, None, None, None, None, None],
    )
    .unwrap()
}

pub fn tracking_frame() -> DataFrame {
    // Play 56: players 1 (BUF), 2 (LA), 3 (BUF) plus the ball across frames
    // 1..=3, deliberately out of frame order. Play 101: players 1 and 2 plus
    // the ball across frames 1..=2.
    let names = ["Josh Allen", "Cooper Kupp", "Von Miller"];
    let clubs = ["BUF", "LA", "BUF"];

    let mut game_id = Vec::new();
    let mut play_id = Vec::new();
    let mut nfl_id: Vec<Option<i64>> = Vec::new();
    let mut frame_id = Vec::new();
    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut club: Vec<Option<&str>> = Vec::new();
    let mut display_name: Vec<Option<&str>> = Vec::new();

    for frame in [2i64, 1, 3] {
        for p in 0..3 {
            game_id.push(GAME_1);
            play_id.push(56i64);
            nfl_id.push(Some(p as i64 + 1));
            frame_id.push(frame);
            x.push(10.0 + frame as f64 + p as f64);
            y.push(20.0 + p as f64);
            club.push(Some(clubs[p]));
            display_name.push(Some(names[p]));
        }
        game_id.push(GAME_1);
        play_id.push(56);
        nfl_id.push(None);
        frame_id.push(frame);
        x.push(50.0 + frame as f64);
        y.push(26.0);
        club.push(None);
        display_name.push(None);
    }

    for frame in [1i64, 2] {
        for p in 0..2 {
            game_id.push(GAME_1);
            play_id.push(101i64);
            nfl_id.push(Some(p as i64 + 1));
            frame_id.push(frame);
            x.push(30.0 + frame as f64);
            y.push(15.0 + p as f64);
            club.push(Some(clubs[p]));
            display_name.push(Some(names[p]));
        }
        game_id.push(GAME_1);
        play_id.push(101);
        nfl_id.push(None);
        frame_id.push(frame);
        x.push(60.0 + frame as f64);
        y.push(26.0);
        club.push(None);
        display_name.push(None);
    }

    df!(
        "gameId" => game_id,
        "playId" => play_id,
        "nflId" => nfl_id,
        "frameId" => frame_id,
        "x" => x,
        "y" => y,
        "club" => club,
        "displayName" => display_name,
    )
    .unwrap()
}

pub fn context() -> DataContext {
    DataContext::from_frames(
        games_frame(),
        plays_frame(),
        players_frame(),
        player_play_frame(),
        tracking_frame(),
    )
    .unwrap()
}
