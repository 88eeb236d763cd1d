//! Overview layout: the data tree ([`build_overview`]) and its pixel
//! placement with hit-testing ([`place`]).

mod builder;
mod placement;
mod types;

pub use builder::build_overview;
pub use placement::place;
pub use types::*;

#[cfg(test)]
mod tests;
