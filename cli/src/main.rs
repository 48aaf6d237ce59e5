use anyhow::Result;
use bdb::{animation, summary, DataContext, Error};
use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Text stand-in for the interactive explorer: the three cascading selection
/// values arrive as flags, the two outputs render as text.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Directory holding the staged dataset csv files
    #[arg(short = 'd', long = "data-dir", value_name = "DIR", default_value = "dataset")]
    data_dir: std::path::PathBuf,

    /// Game label, e.g. "08/09/2022 - Los Angeles Rams vs Buffalo Bills"
    #[arg(short, long)]
    game: Option<String>,

    /// Play identifier within the chosen game
    #[arg(short, long)]
    play: Option<i64>,

    /// Restrict the animation to one player (the ball always stays)
    #[arg(long)]
    player: Option<String>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set the default level based on verbosity
    let default_level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let config = ConfigBuilder::new().add_filter_allow_str("bdb").build();

    // Initialize the logger with the custom configuration
    TermLogger::init(
        default_level,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    log::trace!("Args {:#?}", args);

    let ctx = DataContext::load(&args.data_dir)?;

    let Some(label) = args.game else {
        println!("Available games:");
        for label in ctx.games().labels()? {
            println!("  {label}");
        }
        println!("Pick one with --game <LABEL>");
        return Ok(());
    };

    let game = match ctx.games().select_game(&label) {
        Ok(game) => game,
        Err(Error::SelectionNotFound(label)) => {
            log::warn!("no game found for selection: {label}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let play_ids = ctx.plays().play_ids(game.game_id)?;
    let Some(play_id) = args.play else {
        println!("Plays in {} vs {}:", game.home_name, game.visitor_name);
        for id in &play_ids {
            println!("  {id}");
        }
        println!("Pick one with --play <ID>");
        return Ok(());
    };
    if !play_ids.contains(&play_id) {
        log::warn!("play {play_id} does not belong to game {}", game.game_id);
        return Ok(());
    }

    let tracking_play = ctx.tracking().for_play(game.game_id, play_id)?;
    if args.player.is_none() {
        let names = tracking_play.player_names()?;
        log::info!("players on play {play_id}: {}", names.join(", "));
    }

    let play = summary::assemble(&ctx, &game, play_id, &tracking_play)?;
    let headline = &play.headline;
    println!("Home team:              {}", headline.home_team);
    println!("Visiting team:          {}", headline.visitor_team);
    println!(
        "Leading rusher:         {}",
        headline.leading_rusher.as_deref().unwrap_or("N/A")
    );
    println!("Players on play:        {}", headline.participants);
    println!("Total passing yards:    {}", fmt_yards(headline.passing_yards));
    println!("Total receiving yards:  {}", fmt_yards(headline.receiving_yards));

    // Animation and table degrade independently.
    match animation::build(&tracking_play, args.player.as_deref()) {
        Ok(anim) => {
            println!(
                "Animation: {} player samples, {} colored clubs, {} ball overlay positions",
                anim.players.height(),
                anim.colors.len(),
                anim.ball.len()
            );
        }
        Err(Error::EmptyAnimationInput) => {
            log::warn!("no animation available for this selection");
        }
        Err(err) => return Err(err.into()),
    }

    if play.table.height() > 0 {
        println!("{}", play.table);
    } else {
        println!("No statistics found for this play.");
    }

    Ok(())
}

fn fmt_yards(yards: i64) -> String {
    if yards > 0 {
        yards.to_string()
    } else {
        "None".to_string()
    }
}
