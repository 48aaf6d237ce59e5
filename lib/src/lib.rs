use parse_display::{Display, FromStr};
use polars::prelude::*;
use std::path::Path;

pub mod animation;
pub mod context;
pub mod error;
pub mod filter;
pub mod games;
pub mod summary;
pub mod teams;
pub mod tracking;

pub use context::DataContext;
pub use error::Error;

pub type Result<T> = std::result::Result<T, error::Error>;

/// The five source tables staged by the acquisition step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, FromStr)]
#[display(style = "snake_case")]
pub enum SourceTable {
    Games,
    Plays,
    Players,
    PlayerPlay,
    #[display("tracking_week_1")]
    TrackingWeek1,
}

impl SourceTable {
    pub const ALL: [SourceTable; 5] = [
        SourceTable::Games,
        SourceTable::Plays,
        SourceTable::Players,
        SourceTable::PlayerPlay,
        SourceTable::TrackingWeek1,
    ];

    pub fn filename(self) -> String {
        format!("{self}.csv")
    }
}

pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::DataUnavailable(path.to_path_buf()));
    }
    let df = CsvReadOptions::default()
        .with_infer_schema_length(Some(10_000))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    log::debug!("loaded {} rows from {}", df.height(), path.display());
    Ok(df)
}
