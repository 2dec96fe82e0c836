//! Response normalization: reshaping heterogeneous upstream payloads into
//! the small set of predictable shapes the rest of the application consumes.

pub mod matches;
pub mod players;

pub use matches::extract_matches;
pub use players::{normalize_players, normalize_roster};
