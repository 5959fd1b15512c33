//! Timing harness running every registered strategy over the same input.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::count_hashed::HashedCounter;
use crate::count_linear::LinearCounter;
use crate::count_ordered::OrderedCounter;
use crate::counter::{WordCount, WordCounter, count_words};
use crate::error::Result;
use crate::word_reader::{ReadMode, WordSource};

/// Entry point of a strategy: drain the source into its own counting structure.
pub type StrategyFn = fn(&mut WordSource) -> Box<dyn WordCounter>;

/// A named strategy in the registration table
#[derive(Clone, Copy)]
pub struct StrategyEntry {
    pub name: &'static str,
    pub run: StrategyFn,
}

impl StrategyEntry {
    pub const fn new(name: &'static str, run: StrategyFn) -> Self {
        StrategyEntry { name, run }
    }

    /// Entry backed by `C`, built fresh for every run
    pub fn of<C>(name: &'static str) -> Self
    where
        C: WordCounter + Default + 'static,
    {
        StrategyEntry::new(name, run_counter::<C>)
    }
}

fn run_counter<C>(source: &mut WordSource) -> Box<dyn WordCounter>
where
    C: WordCounter + Default + 'static,
{
    Box::new(count_words::<C, _>(source))
}

/// The three strategies in reporting order.
pub fn default_strategies() -> Vec<StrategyEntry> {
    vec![
        StrategyEntry::of::<LinearCounter>("linear search"),
        StrategyEntry::of::<OrderedCounter>("ordered map"),
        StrategyEntry::of::<HashedCounter>("hash map"),
    ]
}

/// Outcome of one strategy run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub name: &'static str,
    pub elapsed: Duration,
    pub distinct: usize,
    pub total: u64,
    /// Final counts, present only when the harness collects entries
    pub entries: Option<Vec<WordCount>>,
}

impl RunReport {
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

#[derive(Debug, Clone)]
pub struct Harness {
    path: PathBuf,
    mode: ReadMode,
    collect_entries: bool,
}

impl Harness {
    pub fn new(path: impl Into<PathBuf>, mode: ReadMode) -> Self {
        Harness {
            path: path.into(),
            mode,
            collect_entries: false,
        }
    }

    /// Keep a snapshot of the final counts in every report
    pub fn collect_entries(mut self, collect: bool) -> Self {
        self.collect_entries = collect;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run every strategy in table order, one after the other.
    ///
    /// Each run opens its own source and builds its own counter. The clock covers
    /// opening the source through the strategy returning; snapshotting and
    /// dropping the counter happen after it stops.
    pub fn run(&self, strategies: &[StrategyEntry]) -> Vec<RunReport> {
        strategies.iter().map(|entry| self.run_one(entry)).collect()
    }

    fn run_one(&self, entry: &StrategyEntry) -> RunReport {
        let start = Instant::now();
        let mut source = WordSource::open(&self.path, self.mode);
        let counter = (entry.run)(&mut source);
        let elapsed = start.elapsed();

        let report = RunReport {
            name: entry.name,
            elapsed,
            distinct: counter.distinct(),
            total: counter.total(),
            entries: self.collect_entries.then(|| counter.entries()),
        };
        debug!(
            strategy = report.name,
            elapsed = ?report.elapsed,
            distinct = report.distinct,
            total = report.total,
            "strategy finished"
        );
        report
    }
}

/// Write `<name>: <ms> ms` per report, preceded by its `<word>: <count>` lines
/// when `print_results` is set and the report carries entries.
pub fn write_report<W: Write>(out: &mut W, reports: &[RunReport], print_results: bool) -> Result<()> {
    for report in reports {
        let entries = report.entries.as_deref().filter(|_| print_results);
        for entry in entries.into_iter().flatten() {
            writeln!(out, "{}: {}", entry.word, entry.count)?;
        }
        writeln!(out, "{}: {} ms", report.name, report.elapsed_millis())?;
    }
    out.flush()?;
    Ok(())
}
