//! Monte Carlo equity: complete the board at random, score every player,
//! split credit between tied winners.

use std::sync::atomic::{AtomicBool, Ordering};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::card::{parse_board, parse_hole_cards, Card};
use crate::cardset::CardSet;
use crate::config::EquityConfig;
use crate::deck::RemainingDeck;
use crate::error::EquityError;
use crate::evaluator::best_hand;
use crate::score::Score;

/// 23 players use 46 hole cards; with a 5-card board that is 51 of 52.
pub const MAX_PLAYERS: usize = 23;

/// Per-player tallies of one run.
///
/// `wins` counts outright wins, `ties` counts split pots (of any size) and
/// `share` is the credit actually awarded: 1 per outright win, 1/k per k-way tie.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct PlayerEquity {
    pub wins: u64,
    pub ties: u64,
    pub losses: u64,
    pub share: f64,
}

impl PlayerEquity {
    #[inline(always)]
    pub fn total(&self) -> u64 {
        self.wins + self.ties + self.losses
    }

    /// Fraction of trials won, with ties credited fractionally.
    pub fn equity(&self) -> f64 {
        let t = self.total() as f64;
        if t == 0.0 {
            return 0.0;
        }
        self.share / t
    }

    fn merge(&mut self, other: &PlayerEquity) {
        self.wins += other.wins;
        self.ties += other.ties;
        self.losses += other.losses;
        self.share += other.share;
    }
}

/// Result of one equity run: one entry per player, in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct EquityReport {
    pub trials: u64,
    pub players: Vec<PlayerEquity>,
}

impl EquityReport {
    fn empty(n: usize) -> Self {
        Self {
            trials: 0,
            players: vec![PlayerEquity::default(); n],
        }
    }

    fn merge(mut self, other: EquityReport) -> Self {
        self.trials += other.trials;
        for (p, o) in self.players.iter_mut().zip(&other.players) {
            p.merge(o);
        }
        self
    }

    /// `share / trials` per player. Sums to 1 up to float rounding.
    pub fn win_rates(&self) -> Vec<f64> {
        self.players.iter().map(|p| self.rate(p)).collect()
    }

    pub fn equity(&self, player: usize) -> f64 {
        self.players.get(player).map_or(0.0, |p| self.rate(p))
    }

    fn rate(&self, p: &PlayerEquity) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        p.share / self.trials as f64
    }
}

/// Validated inputs shared read-only by every trial.
struct Table<'a> {
    players: &'a [[Card; 2]],
    board: &'a [Card],
    deck: RemainingDeck,
}

impl<'a> Table<'a> {
    fn new(players: &'a [[Card; 2]], board: &'a [Card]) -> Result<Self, EquityError> {
        if players.is_empty() {
            return Err(EquityError::NoPlayers);
        }
        if players.len() > MAX_PLAYERS {
            return Err(EquityError::TooManyPlayers(players.len()));
        }
        if board.len() > 5 {
            return Err(EquityError::TooManyBoardCards(board.len()));
        }
        let mut used = CardSet::new();
        for &c in players.iter().flatten().chain(board) {
            used.insert_unique(c)?;
        }
        let deck = RemainingDeck::from_used(used);
        deck.ensure(5 - board.len())?;
        Ok(Self {
            players,
            board,
            deck,
        })
    }

    /// Play `trials` trials with `rng`, stopping early if `cancel` is raised.
    fn run<R: Rng + ?Sized>(
        &self,
        trials: usize,
        rng: &mut R,
        cancel: Option<&AtomicBool>,
    ) -> EquityReport {
        let n = self.players.len();
        let known = self.board.len();
        let mut report = EquityReport::empty(n);
        let mut board5 = [Card::from_id(0); 5];
        board5[..known].copy_from_slice(self.board);
        let mut scores = vec![Score(0); n];

        for _ in 0..trials {
            if cancel.is_some_and(|c| c.load(Ordering::Relaxed)) {
                break;
            }
            self.deck.draw_into(rng, &mut board5[known..]);

            for (score, hole) in scores.iter_mut().zip(self.players) {
                let seven = [
                    hole[0], hole[1], board5[0], board5[1], board5[2], board5[3], board5[4],
                ];
                *score = best_hand(&seven);
            }

            let best = scores.iter().copied().max().unwrap_or(Score(0));
            let winners = scores.iter().filter(|&&s| s == best).count();
            assert!(winners >= 1, "every trial has at least one winner");
            let credit = 1.0 / winners as f64;

            for (tally, &s) in report.players.iter_mut().zip(&scores) {
                if s != best {
                    tally.losses += 1;
                } else if winners == 1 {
                    tally.wins += 1;
                    tally.share += credit;
                } else {
                    tally.ties += 1;
                    tally.share += credit;
                }
            }
            report.trials += 1;
        }
        report
    }
}

/// Core trial loop: `trials` trials driven by a caller-supplied generator.
///
/// Returns one win rate per player (ties split fractionally).
pub fn run_trials<R: Rng + ?Sized>(
    players: &[[Card; 2]],
    board: &[Card],
    trials: usize,
    rng: &mut R,
) -> Result<Vec<f64>, EquityError> {
    if trials == 0 {
        return Err(EquityError::InvalidTrialCount(trials));
    }
    let table = Table::new(players, board)?;
    Ok(table.run(trials, rng, None).win_rates())
}

/// Equity run configured by an [`EquityConfig`].
#[derive(Clone, Debug, Default)]
pub struct Simulation {
    config: EquityConfig,
}

impl Simulation {
    pub fn new(config: EquityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EquityConfig {
        &self.config
    }

    fn master_rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// One run of `config.trials` trials (repeats are ignored here).
    pub fn run(&self, players: &[[Card; 2]], board: &[Card]) -> Result<EquityReport, EquityError> {
        self.config.validate()?;
        let table = Table::new(players, board)?;
        let mut master = self.master_rng();
        self.run_once(&table, &mut master)
    }

    /// Win rates averaged elementwise over `config.repeats` independent runs.
    pub fn estimate(&self, players: &[[Card; 2]], board: &[Card]) -> Result<Vec<f64>, EquityError> {
        self.config.validate()?;
        let table = Table::new(players, board)?;
        let mut master = self.master_rng();

        let mut sums = vec![0.0f64; players.len()];
        for _ in 0..self.config.repeats {
            let report = self.run_once(&table, &mut master)?;
            for (sum, rate) in sums.iter_mut().zip(report.win_rates()) {
                *sum += rate;
            }
        }
        let r = self.config.repeats as f64;
        Ok(sums.into_iter().map(|s| s / r).collect())
    }

    fn run_once(
        &self,
        table: &Table<'_>,
        master: &mut StdRng,
    ) -> Result<EquityReport, EquityError> {
        let parts: Vec<(usize, u64)> = self
            .config
            .partition_sizes()
            .into_iter()
            .map(|n| (n, master.gen::<u64>()))
            .collect();
        let cancel = self.config.cancel.as_deref();

        log::debug!(
            "equity run: {} players, {} board cards, {} trials in {} partitions, seed {:?}",
            table.players.len(),
            table.board.len(),
            self.config.trials,
            parts.len(),
            self.config.seed
        );

        let reports = run_partitions(table, &parts, cancel);
        let report = reports
            .into_iter()
            .fold(EquityReport::empty(table.players.len()), EquityReport::merge);

        if report.trials < self.config.trials as u64 {
            log::debug!("equity run cancelled after {} trials", report.trials);
            return Err(EquityError::Cancelled {
                completed: report.trials as usize,
            });
        }
        log::debug!("equity run done: {:?}", report.win_rates());
        Ok(report)
    }
}

fn run_partition(
    table: &Table<'_>,
    trials: usize,
    seed: u64,
    cancel: Option<&AtomicBool>,
) -> EquityReport {
    log::trace!("partition: {} trials, seed {:#018x}", trials, seed);
    let mut rng = StdRng::seed_from_u64(seed);
    table.run(trials, &mut rng, cancel)
}

#[cfg(not(feature = "parallel"))]
fn run_partitions(
    table: &Table<'_>,
    parts: &[(usize, u64)],
    cancel: Option<&AtomicBool>,
) -> Vec<EquityReport> {
    parts
        .iter()
        .map(|&(n, seed)| run_partition(table, n, seed, cancel))
        .collect()
}

/// Partitions run on the rayon pool. Results come back in partition order, so
/// the merge is the same as the sequential one.
#[cfg(feature = "parallel")]
fn run_partitions(
    table: &Table<'_>,
    parts: &[(usize, u64)],
    cancel: Option<&AtomicBool>,
) -> Vec<EquityReport> {
    use rayon::prelude::*;

    parts
        .par_iter()
        .map(|&(n, seed)| run_partition(table, n, seed, cancel))
        .collect()
}

/// Estimate equity from an entropy-seeded run of `trials` trials.
pub fn estimate_equity(
    players: &[[Card; 2]],
    board: &[Card],
    trials: usize,
) -> Result<Vec<f64>, EquityError> {
    Simulation::new(EquityConfig::new(trials)).estimate(players, board)
}

/// Same as [`estimate_equity`] but reproducible for a given seed.
pub fn estimate_equity_seeded(
    players: &[[Card; 2]],
    board: &[Card],
    trials: usize,
    seed: u64,
) -> Result<Vec<f64>, EquityError> {
    Simulation::new(EquityConfig::new(trials).with_seed(seed)).estimate(players, board)
}

/// Average of `repeats` independent runs of `trials` trials each, reproducible
/// for a given seed.
pub fn estimate_equity_repeated(
    players: &[[Card; 2]],
    board: &[Card],
    trials: usize,
    repeats: usize,
    seed: u64,
) -> Result<Vec<f64>, EquityError> {
    let config = EquityConfig::new(trials).with_repeats(repeats).with_seed(seed);
    Simulation::new(config).estimate(players, board)
}

/// Card-code front door: `players` like `["AS KS", "QH QD"]`, `board` like `"2H 5S 9D"`.
pub fn estimate_equity_from_codes(
    players: &[&str],
    board: &str,
    trials: usize,
) -> Result<Vec<f64>, EquityError> {
    let holes = players
        .iter()
        .map(|p| parse_hole_cards(p))
        .collect::<Result<Vec<_>, _>>()?;
    let board = parse_board(board)?;
    estimate_equity(&holes, &board, trials)
}
