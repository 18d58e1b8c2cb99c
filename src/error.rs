// Copyright (C) 2020-2026 Andy Kurnia.

pub struct MyError {
    s: String,
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(s: String) -> MyError {
    MyError { s }
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}

// Expected outcomes of trying one candidate. The search skips these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    LetterConflict {
        row: i8,
        col: i8,
        expected: char,
        found: char,
    },
    InsufficientTiles {
        letter: char,
    },
    NothingPlaced,
    NoPrimaryWord,
    InvalidPrimaryWord(String),
    InvalidCrossWord(String),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::LetterConflict {
                row,
                col,
                expected,
                found,
            } => write!(
                f,
                "letter conflict at row {} col {} (0-based): need {}, board has {}",
                row, col, expected, found
            ),
            Rejection::InsufficientTiles { letter } => {
                write!(f, "no rack tile or blank left for {}", letter)
            }
            Rejection::NothingPlaced => write!(f, "placement uses no rack tile"),
            Rejection::NoPrimaryWord => write!(f, "placement forms no word"),
            Rejection::InvalidPrimaryWord(word) => write!(f, "invalid word {:?}", word),
            Rejection::InvalidCrossWord(word) => write!(f, "invalid cross word {:?}", word),
        }
    }
}

impl std::error::Error for Rejection {}

// Broken inputs. These never happen with a well-formed board and rack, and
// must not be confused with "no legal move".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    UnassignedBlank { row: i8, col: i8 },
    CellOccupied { row: i8, col: i8 },
    OutOfBounds { row: i8, col: i8 },
    RackTooLarge { len: usize, max: usize },
    AssignedBlankOnRack { index: usize },
    DuplicateRackTile { index: usize },
    MissingRackTile { index: usize },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvariantViolation::UnassignedBlank { row, col } => write!(
                f,
                "blank at row {} col {} (0-based) has no assigned letter",
                row, col
            ),
            InvariantViolation::CellOccupied { row, col } => write!(
                f,
                "row {} col {} (0-based) already holds a tile",
                row, col
            ),
            InvariantViolation::OutOfBounds { row, col } => {
                write!(f, "row {} col {} (0-based) is off the board", row, col)
            }
            InvariantViolation::RackTooLarge { len, max } => {
                write!(f, "rack has {} tiles, at most {} allowed", len, max)
            }
            InvariantViolation::AssignedBlankOnRack { index } => {
                write!(f, "rack tile {} is a blank with an assigned letter", index)
            }
            InvariantViolation::DuplicateRackTile { index } => {
                write!(f, "rack tile {} is used more than once", index)
            }
            InvariantViolation::MissingRackTile { index } => {
                write!(f, "rack has no matching tile {}", index)
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayError {
    Rejected(Rejection),
    Invariant(InvariantViolation),
}

impl From<Rejection> for PlayError {
    #[inline(always)]
    fn from(rejection: Rejection) -> Self {
        PlayError::Rejected(rejection)
    }
}

impl From<InvariantViolation> for PlayError {
    #[inline(always)]
    fn from(violation: InvariantViolation) -> Self {
        PlayError::Invariant(violation)
    }
}

impl std::fmt::Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayError::Rejected(x) => x.fmt(f),
            PlayError::Invariant(x) => x.fmt(f),
        }
    }
}

impl std::error::Error for PlayError {}
