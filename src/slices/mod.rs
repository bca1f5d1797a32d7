//! State Slices
//!
//! Pure reducer logic for the two independent partitions of client state.
//! Each async operation is tagged with a per-slice request sequence; a
//! resolution commits only if it is still the latest issued, so a stale
//! response (success or failure) can never overwrite a newer one.

mod analysis;
mod user;

pub use analysis::AnalysisSlice;
pub use user::{UserSlice, MAX_SEARCH_HISTORY};
