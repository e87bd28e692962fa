use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("car count must be at least 1 (got {})", count))]
    InvalidCarCountError { count: usize },

    #[snafu(display("lane count must be at least 1 (got {})", count))]
    InvalidLaneCountError { count: usize },

    #[snafu(display("heat {} is out of range (schedule has {} heats)", heat, heats))]
    HeatOutOfRangeError { heat: usize, heats: usize },

    #[snafu(display("lane {} is out of range (heat {} has {} lanes)", lane, heat, lanes))]
    LaneOutOfRangeError {
        heat: usize,
        lane: usize,
        lanes: usize,
    },

    #[snafu(display("a roster needs at least one car"))]
    EmptyRosterError,

    #[snafu(display("file does not exist: {}", path))]
    FileDoesNotExistError { path: String },

    #[snafu(display("permission denied: {}", path))]
    PermissionDeniedError { path: String },

    #[snafu(display("failed reading roster {}: {}", path, source))]
    ReadRosterError {
        path: String,
        source: std::io::Error,
    },

    #[snafu(display("invalid roster entry on line {}: {:?}", line, entry))]
    InvalidRosterEntryError { line: usize, entry: String },

    #[snafu(display("session {} not found", id))]
    SessionNotFoundError { id: u64 },
}

impl Error {
    /// true for errors caused by values the caller supplied, as opposed to
    /// lookups of things that do not exist
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidCarCountError { .. }
                | Error::InvalidLaneCountError { .. }
                | Error::EmptyRosterError
                | Error::InvalidRosterEntryError { .. }
        )
    }
}

pub type CustomResult<T> = Result<T, Error>;
