#![warn(missing_docs)]

//! # Word hunt
//!
//! A timed word search game engine. [`Puzzle`] hides a list of words in a square letter grid,
//! [`compute_line`] turns a drag gesture into a straight line of cells, and [`verify`] checks the
//! letters under a released selection against the words still to be found.
//!
//! [`GameSession`] ties these together into a single game with a countdown, scoring and hints.
//! Sessions report points to a [`PointSink`] and keep the best time per [`Category`] in a
//! [`RecordStore`].

pub use category::*;
pub use config::*;
pub use direction::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use placement::*;
pub use points::*;
pub use selection::*;
pub use session::*;
pub use store::*;
pub use verifier::*;

mod category;
mod config;
mod direction;
mod error;
mod generator;
mod grid;
mod placement;
mod points;
mod selection;
mod session;
mod store;
mod verifier;
