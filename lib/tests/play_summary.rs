mod common;

use bdb::summary::{self, PlaySummary};

fn assemble(play_id: i64) -> PlaySummary {
    let ctx = common::context();
    let game = ctx.games().select_game(common::LABEL_1).unwrap();
    let tracking = ctx.tracking().for_play(common::GAME_1, play_id).unwrap();
    summary::assemble(&ctx, &game, play_id, &tracking).unwrap()
}

#[test]
fn totals_sum_only_the_selected_play() {
    let play = assemble(56);
    // the GAME_2 row with 99 passing yards must not leak in
    assert_eq!(play.headline.passing_yards, 12);
    assert_eq!(play.headline.receiving_yards, 12);
}

#[test]
fn totals_do_not_depend_on_participation_row_order() {
    let baseline = assemble(56);

    let ctx = bdb::DataContext::from_frames(
        common::games_frame(),
        common::plays_frame(),
        common::players_frame(),
        common::player_play_frame().reverse(),
        common::tracking_frame(),
    )
    .unwrap();
    let game = ctx.games().select_game(common::LABEL_1).unwrap();
    let tracking = ctx.tracking().for_play(common::GAME_1, 56).unwrap();
    let reversed = summary::assemble(&ctx, &game, 56, &tracking).unwrap();

    assert_eq!(reversed.headline.passing_yards, baseline.headline.passing_yards);
    assert_eq!(reversed.headline.receiving_yards, baseline.headline.receiving_yards);
    assert_eq!(reversed.table.height(), baseline.table.height());
}

#[test]
fn headline_carries_full_team_names_and_participants() {
    let play = assemble(56);
    assert_eq!(play.headline.home_team, "Buffalo Bills");
    assert_eq!(play.headline.visitor_team, "Los Angeles Rams");
    // three tracked players; the ball never counts
    assert_eq!(play.headline.participants, 3);
}

#[test]
fn leading_rusher_is_the_max() {
    let play = assemble(56);
    assert_eq!(play.headline.leading_rusher.as_deref(), Some("Cooper Kupp"));
}

#[test]
fn leading_rusher_on_all_zero_play_is_first_row_and_deterministic() {
    let first = assemble(101);
    assert_eq!(first.headline.leading_rusher.as_deref(), Some("Josh Allen"));
    for _ in 0..3 {
        let again = assemble(101);
        assert_eq!(again.headline.leading_rusher, first.headline.leading_rusher);
    }
}

#[test]
fn absent_stats_default_to_zero() {
    let play = assemble(101);
    let rushing = play.table.column("Rushing Yards").unwrap();
    assert_eq!(rushing.null_count(), 0);
    let values: Vec<i64> = rushing.i64().unwrap().into_iter().flatten().collect();
    assert_eq!(values, vec![0, 0]);
    assert_eq!(play.headline.passing_yards, 0);
    assert_eq!(play.headline.receiving_yards, 0);
}

#[test]
fn stat_row_without_player_is_kept_with_null_identity() {
    let play = assemble(56);
    assert_eq!(play.table.height(), 4);
    assert_eq!(play.table.column("Player").unwrap().null_count(), 1);
    assert_eq!(play.table.column("Position").unwrap().null_count(), 1);
}

#[test]
fn club_comes_from_this_plays_tracking() {
    let play = assemble(56);
    let players = play.table.column("Player").unwrap().str().unwrap();
    let teams = play.table.column("Team").unwrap().str().unwrap();
    for (player, team) in players.into_iter().zip(teams) {
        match player {
            Some("Josh Allen") | Some("Von Miller") => assert_eq!(team, Some("BUF")),
            Some("Cooper Kupp") => assert_eq!(team, Some("LA")),
            // nflId 99 has stats but no tracking match
            None => assert_eq!(team, None),
            other => panic!("unexpected player {other:?}"),
        }
    }
}

#[test]
fn table_uses_presentation_labels() {
    let play = assemble(56);
    assert_eq!(
        play.table.get_column_names(),
        &[
            "Player",
            "Position",
            "Team",
            "Rushing Yards",
            "Passing Yards",
            "Receiving Yards",
            "Solo Tackles",
            "Tackles For Loss",
            "Interception Yards",
        ]
    );
}
