//! dashboard.rs
//!
//! The single event loop behind the terminal dashboard.
//!
//! - Owns the mounted list view, the index ticker and the local stores.
//! - Serializes prompt commands, refresh timers and completed fetches.
//! - Fetches run as spawned tasks and report back over a channel, tagged with
//!   the mount epoch they were started under. Results for an older epoch
//!   (the view was unmounted or remounted meanwhile) are dropped.
//!
//! Failed fetches are logged and leave the previous data on screen. No retries.

use std::collections::HashSet;
use std::future::Future;
use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use tokio::sync::mpsc;
use tokio::time::{self, Duration, MissedTickBehavior};
use tracing::{debug, info, warn};

use ipo_rs::{Ipo, IpoClient, IpoError, IpoId};
use ipo_rs::ipos::models::IpoDetail;
use ipo_rs::market::models::MarketIndex;
use ipo_rs::news::models::NewsItem;
use ipo_rs::predict::models::{AllotmentEstimate, ProfitEstimate};

use crate::config::Config;
use crate::report::{self, Look};
use crate::store::{PrefsStore, VoteFlags};
use crate::types::{Command, HELP, ViewState};
use crate::view::ListView;
use crate::vote::{self, VoteOutcome};

/// Result of one background request.
#[derive(Debug)]
pub enum Fetched {
    Ipos(Result<Vec<Ipo>, IpoError>),
    Indices(Result<Vec<MarketIndex>, IpoError>),
    News(Result<Vec<NewsItem>, IpoError>),
    Detail(IpoId, Result<IpoDetail, IpoError>),
    Vote(IpoId, Result<VoteOutcome>),
    Prediction(IpoId, Result<(ProfitEstimate, AllotmentEstimate)>),
}

#[derive(Debug)]
pub struct Delivery {
    pub epoch: u64,
    pub fetched: Fetched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Dashboard<W: Write> {
    cfg: Config,
    client: Arc<IpoClient>,
    flags: Arc<dyn VoteFlags>,
    prefs: PrefsStore,
    view: ListView,
    indices: Vec<MarketIndex>,
    pending_votes: HashSet<IpoId>,

    // Bumped on every mount and unmount.
    epoch: u64,
    mounted: bool,

    tx: mpsc::Sender<Delivery>,
    out: W,
}

impl<W: Write> Dashboard<W> {
    /// Build an unmounted dashboard and the receiver its fetches report to.
    pub fn new(
        cfg: Config,
        client: Arc<IpoClient>,
        flags: Arc<dyn VoteFlags>,
        prefs: PrefsStore,
        out: W,
    ) -> (Self, mpsc::Receiver<Delivery>) {
        let (tx, rx) = mpsc::channel(64);
        let view = ListView::new(ViewState::with_sort(cfg.default_sort));
        let dash = Self {
            cfg,
            client,
            flags,
            prefs,
            view,
            indices: Vec::new(),
            pending_votes: HashSet::new(),
            epoch: 0,
            mounted: false,
            tx,
            out,
        };
        (dash, rx)
    }

    /// Fresh view state, first fetches in flight.
    pub fn mount(&mut self) {
        self.epoch += 1;
        self.mounted = true;
        self.view = ListView::new(ViewState::with_sort(self.cfg.default_sort));
        self.pending_votes.clear();
        info!(epoch = self.epoch, api = %self.client.base_url(), "view mounted");
        self.spawn_fetch_ipos();
        self.spawn_fetch_indices();
    }

    /// Anything still in flight will be ignored when it lands.
    pub fn unmount(&mut self) {
        self.epoch += 1;
        self.mounted = false;
        info!(epoch = self.epoch, "view unmounted");
    }

    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = Fetched> + Send + 'static,
    {
        let tx = self.tx.clone();
        let epoch = self.epoch;
        tokio::spawn(async move {
            let fetched = fut.await;
            // Receiver gone means the loop has exited; nothing to deliver to.
            let _ = tx.send(Delivery { epoch, fetched }).await;
        });
    }

    fn spawn_fetch_ipos(&self) {
        let client = self.client.clone();
        self.spawn(async move { Fetched::Ipos(client.get_ipos().await) });
    }

    fn spawn_fetch_indices(&self) {
        let client = self.client.clone();
        self.spawn(async move { Fetched::Indices(client.get_market_indices().await) });
    }

    fn look(&self) -> Look {
        Look {
            theme: self.prefs.theme(),
            color: self.cfg.color,
        }
    }

    fn say(&mut self, msg: &str) -> Result<()> {
        writeln!(self.out, "{msg}").context("writing to terminal")
    }

    fn render(&mut self) -> Result<()> {
        let state = self.view.state().clone();
        let total = self.view.base().len();
        let look = self.look();
        let rows = self.view.projection();
        report::log_view(&state, rows.len(), total);
        let table = report::render_table(rows, &state, total, look);
        write!(self.out, "{table}").context("writing to terminal")
    }

    /// Apply a completed fetch, unless it belongs to a view that is gone.
    pub fn on_fetch(&mut self, delivery: Delivery) -> Result<()> {
        if !self.mounted || delivery.epoch != self.epoch {
            debug!(
                epoch = delivery.epoch,
                current = self.epoch,
                "dropping fetch result for unmounted view"
            );
            return Ok(());
        }

        match delivery.fetched {
            Fetched::Ipos(Ok(ipos)) => {
                info!(count = ipos.len(), "listings refreshed");
                self.view.replace_base(ipos);
                self.render()?;
            }
            Fetched::Ipos(Err(e)) => {
                warn!("Error loading IPOs: {e}");
                self.render()?;
            }
            Fetched::Indices(Ok(indices)) => {
                self.indices = indices;
                if !self.indices.is_empty() {
                    let line = report::render_indices(&self.indices, self.look());
                    self.say(&line)?;
                }
            }
            Fetched::Indices(Err(e)) => warn!("Failed to fetch ticker data: {e}"),
            Fetched::News(Ok(news)) => {
                if news.is_empty() {
                    self.say("no news")?;
                } else {
                    let text = report::render_news(&news);
                    write!(self.out, "{text}")?;
                }
            }
            Fetched::News(Err(e)) => warn!("Failed to load news: {e}"),
            Fetched::Detail(_, Ok(detail)) => {
                let text = report::render_detail(&detail, self.look());
                write!(self.out, "{text}")?;
            }
            Fetched::Detail(id, Err(e)) => warn!(ipo = %id, "Failed to load IPO detail: {e}"),
            Fetched::Vote(id, outcome) => {
                self.pending_votes.remove(&id);
                match outcome {
                    Ok(VoteOutcome::Recorded(resp)) => self.say(&report::render_vote(&resp))?,
                    Ok(VoteOutcome::AlreadyVoted) => self.say("already voted on this listing")?,
                    Err(e) => warn!(ipo = %id, "Vote failed: {e:#}"),
                }
            }
            Fetched::Prediction(_, Ok((profit, allotment))) => {
                self.say(&report::render_prediction(&profit, &allotment))?;
            }
            Fetched::Prediction(id, Err(e)) => warn!(ipo = %id, "Prediction failed: {e:#}"),
        }
        Ok(())
    }

    pub fn handle_command(&mut self, cmd: Command) -> Result<Flow> {
        match cmd {
            Command::View(event) => {
                if self.view.apply(event) {
                    self.render()?;
                }
            }
            Command::Refresh => self.spawn_fetch_ipos(),
            Command::Show(id) => {
                let client = self.client.clone();
                self.spawn(async move {
                    let res = client.get_ipo(&id).await;
                    Fetched::Detail(id, res)
                });
            }
            Command::Vote(id, vote_type) => {
                if self.flags.has_voted(&id) {
                    self.say("already voted on this listing")?;
                } else if !self.pending_votes.insert(id.clone()) {
                    self.say("vote already in flight")?;
                } else {
                    let client = self.client.clone();
                    let flags = self.flags.clone();
                    self.spawn(async move {
                        let res = vote::cast_vote(&client, flags.as_ref(), &id, vote_type).await;
                        Fetched::Vote(id, res)
                    });
                }
            }
            Command::Predict { id, lots, category } => {
                if self.view.find(&id).is_some_and(Ipo::is_closed) {
                    self.say("predictions are only available for listings that are not closed")?;
                    return Ok(Flow::Continue);
                }
                let client = self.client.clone();
                self.spawn(async move {
                    let res = tokio::try_join!(
                        client.predict_profit(&id, lots),
                        client.predict_allotment(&id, category, lots),
                    )
                    .map_err(|e| anyhow!(e));
                    Fetched::Prediction(id, res)
                });
            }
            Command::News => {
                let client = self.client.clone();
                self.spawn(async move { Fetched::News(client.get_news().await) });
            }
            Command::Indices => {
                if self.indices.is_empty() {
                    self.spawn_fetch_indices();
                } else {
                    let line = report::render_indices(&self.indices, self.look());
                    self.say(&line)?;
                }
            }
            Command::Theme => {
                match self.prefs.toggle_theme() {
                    Ok(theme) => info!(theme = theme.as_str(), "theme changed"),
                    Err(e) => warn!("could not save theme preference: {e:#}"),
                }
                self.render()?;
            }
            Command::Help => self.say(HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Run until `quit` or the command stream ends.
    pub async fn run(
        mut self,
        mut commands: mpsc::Receiver<String>,
        mut fetched: mpsc::Receiver<Delivery>,
    ) -> Result<()> {
        self.mount();

        let mut refresh = time::interval(Duration::from_millis(self.cfg.refresh_ms));
        let mut ticker = time::interval(Duration::from_millis(self.cfg.ticker_refresh_ms));
        refresh.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // mount() already fetched; skip the immediate first ticks.
        refresh.tick().await;
        ticker.tick().await;

        loop {
            tokio::select! {
                line = commands.recv() => {
                    let Some(line) = line else { break; };
                    if line.trim().is_empty() {
                        continue;
                    }
                    match line.parse::<Command>() {
                        Ok(cmd) => {
                            if self.handle_command(cmd)? == Flow::Quit {
                                break;
                            }
                        }
                        Err(e) => self.say(&format!("{e}"))?,
                    }
                }
                _ = refresh.tick() => self.spawn_fetch_ipos(),
                _ = ticker.tick() => self.spawn_fetch_indices(),
                Some(delivery) = fetched.recv() => self.on_fetch(delivery)?,
            }
        }

        self.unmount();
        Ok(())
    }
}
