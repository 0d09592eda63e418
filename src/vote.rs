use anyhow::{Context, Result};
use tracing::{info, warn};

use ipo_rs::{IpoClient, IpoId};
use ipo_rs::ipos::models::{VoteResponse, VoteType};

use crate::store::VoteFlags;

#[derive(Debug, Clone, PartialEq)]
pub enum VoteOutcome {
    /// This installation already voted on the listing; nothing was sent.
    AlreadyVoted,
    Recorded(VoteResponse),
}

/// Submit one sentiment vote, at most once per listing.
///
/// The flag is only set after the server accepted the vote, so a failed
/// request can be retried. Once the server has counted the vote the outcome is
/// `Recorded`, even if the flag cannot be saved.
pub async fn cast_vote(
    client: &IpoClient,
    flags: &dyn VoteFlags,
    id: &IpoId,
    vote_type: VoteType,
) -> Result<VoteOutcome> {
    if flags.has_voted(id) {
        return Ok(VoteOutcome::AlreadyVoted);
    }

    let resp = client
        .vote(id, vote_type)
        .await
        .with_context(|| format!("voting {vote_type} on ipo {id}"))?;

    info!(ipo = %id, vote = %vote_type, bullish = resp.bullish, bearish = resp.bearish, "vote recorded");

    if let Err(e) = flags.mark_voted(id) {
        warn!(ipo = %id, "vote counted but flag not saved: {e:#}");
    }
    Ok(VoteOutcome::Recorded(resp))
}
