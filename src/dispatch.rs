//! # Dispatcher
//!
//! Fans entries out to a rayon thread pool, one sticker per task, and joins
//! before returning. Tasks share only the read-only font and layout; each
//! writes its own file.
//!
//! By default every task runs to completion and failures are collected into
//! the [`RunReport`]. In fail-fast mode the run stops at the first failure.
//!
//! ```no_run
//! use std::path::Path;
//! use stickerprint::dispatch::{Dispatcher, prepare_output_dir};
//! use stickerprint::input::load_entries;
//! use stickerprint::render::font::LabelFont;
//!
//! let entries = load_entries(Path::new("data.xlsx"))?;
//! prepare_output_dir(Path::new("out"))?;
//!
//! let font = LabelFont::embedded()?;
//! let report = Dispatcher::new(&font, "out").run(&entries)?;
//! println!("{} stickers written", report.written.len());
//! # Ok::<(), stickerprint::StickerError>(())
//! ```

use rayon::prelude::*;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::entry::{Entries, Entry};
use crate::error::StickerError;
use crate::layout::StickerLayout;
use crate::render::font::LabelFont;
use crate::render::sticker::compose_to_file;

/// Create `dir` if it does not exist. Returns whether it was created.
pub fn prepare_output_dir(dir: &Path) -> Result<bool, StickerError> {
    if dir.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(dir)?;
    Ok(true)
}

/// A sticker that could not be produced.
#[derive(Debug)]
pub struct TaskFailure {
    /// Raw barcode of the failing entry
    pub code: String,
    pub error: StickerError,
}

impl fmt::Display for TaskFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.error)
    }
}

/// Outcome of a run, available once every task has finished.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Number of entries dispatched
    pub total: usize,
    /// Files written, in entry order
    pub written: Vec<PathBuf>,
    pub failures: Vec<TaskFailure>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Turn a report with failures into [`StickerError::Incomplete`].
    pub fn into_result(self) -> Result<Self, StickerError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(StickerError::Incomplete {
                failed: self.failures.len(),
                total: self.total,
            })
        }
    }
}

/// Runs one composition task per entry on a bounded worker pool.
#[derive(Debug)]
pub struct Dispatcher<'a> {
    font: &'a LabelFont,
    layout: StickerLayout,
    out_dir: PathBuf,
    jobs: Option<usize>,
    fail_fast: bool,
}

impl<'a> Dispatcher<'a> {
    pub fn new(font: &'a LabelFont, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            font,
            layout: StickerLayout::STANDARD,
            out_dir: out_dir.into(),
            jobs: None,
            fail_fast: false,
        }
    }

    pub fn layout(mut self, layout: StickerLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Worker thread count. `None` uses one thread per CPU.
    pub fn jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs;
        self
    }

    /// Stop at the first failing sticker and return its error.
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Render every entry and wait for all of them.
    ///
    /// Returns `Err` only when the pool cannot start, or in fail-fast mode
    /// when a sticker fails. Otherwise per-entry failures are in the report.
    pub fn run(&self, entries: &Entries) -> Result<RunReport, StickerError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs.unwrap_or(0))
            .thread_name(|i| format!("sticker-{}", i))
            .build()
            .map_err(|e| StickerError::Pool(e.to_string()))?;

        let work: Vec<Entry> = entries.iter().map(Entry::from).collect();
        tracing::info!(
            entries = work.len(),
            threads = pool.current_num_threads(),
            out_dir = %self.out_dir.display(),
            "dispatching stickers"
        );

        pool.install(|| {
            if self.fail_fast {
                self.run_fail_fast(&work)
            } else {
                Ok(self.run_collect(&work))
            }
        })
    }

    fn compose(&self, entry: &Entry) -> Result<PathBuf, StickerError> {
        compose_to_file(entry, self.font, &self.layout, &self.out_dir)
    }

    fn run_fail_fast(&self, work: &[Entry]) -> Result<RunReport, StickerError> {
        let written = work
            .par_iter()
            .map(|entry| self.compose(entry).map_err(|e| e.for_code(&entry.code)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RunReport {
            total: work.len(),
            written,
            failures: Vec::new(),
        })
    }

    fn run_collect(&self, work: &[Entry]) -> RunReport {
        let results: Vec<Result<PathBuf, StickerError>> =
            work.par_iter().map(|entry| self.compose(entry)).collect();

        let mut report = RunReport {
            total: work.len(),
            ..Default::default()
        };
        for (entry, result) in work.iter().zip(results) {
            match result {
                Ok(path) => report.written.push(path),
                Err(error) => {
                    tracing::warn!(code = %entry.code, %error, "sticker failed");
                    report.failures.push(TaskFailure {
                        code: entry.code.clone(),
                        error,
                    });
                }
            }
        }
        report
    }
}
