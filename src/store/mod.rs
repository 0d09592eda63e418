pub mod prefs;
pub mod votes;

pub use prefs::{PrefsStore, Theme};
pub use votes::{FileVoteFlags, MemoryVoteFlags, VoteFlags};
