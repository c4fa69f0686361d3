//! Renju rules for the restricted side
//!
//! - [`patterns`]: mask/expected shape tables
//! - [`counter`]: per-intersection shape counting
//! - [`forbidden`]: recursive validation of threes and forbidden points
//! - [`win`]: outcome of a committed move

pub mod counter;
pub mod forbidden;
pub mod patterns;
pub mod win;

// Re-exports for convenient access
pub use counter::{classify, relative, Counter};
pub use forbidden::{forbidden_moves, is_forbidden_move, is_forbidden_point};
pub use patterns::{Pack, Role, ThreeShape};
pub use win::{judge, Outcome};
