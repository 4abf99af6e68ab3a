//! Views over a month's ladder: filtering and the completion grid

mod filter;
mod grid;

pub use filter::{AreaFilter, ProblemFilter, StatusFilter, areas};
pub use grid::{GridCell, ladder_grid};
