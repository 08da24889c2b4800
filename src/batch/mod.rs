//! Sequential batch loop: compose, reduce, write.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use rand::Rng;

use crate::{compose::driver::Composer, foundation::error::BurstResult, optimize::Optimizer};

/// Where and how many documents to write.
#[derive(Clone, Debug)]
pub struct BatchOpts {
    pub count: u64,
    pub prefix: String,
    pub out_dir: PathBuf,
}

/// One sequence number that produced no file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchFailure {
    pub seq: u64,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    pub requested: u64,
    pub written: Vec<PathBuf>,
    pub failed: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.written.len() as u64 == self.requested
    }
}

/// `{prefix}_{seq}` with `seq` zero-padded to nine digits.
pub fn output_file_name(prefix: &str, seq: u64) -> String {
    format!("{prefix}_{seq:09}.svg")
}

/// Produce `opts.count` documents numbered from 1.
///
/// A failure at any stage of one iteration is logged and recorded, and the
/// loop moves on to the next sequence number. Nothing is retried.
#[tracing::instrument(skip_all, fields(count = opts.count, prefix = %opts.prefix))]
pub fn run_batch<R: Rng>(
    composer: &Composer<'_>,
    optimizer: &dyn Optimizer,
    opts: &BatchOpts,
    rng: &mut R,
) -> BatchReport {
    let mut report = BatchReport {
        requested: opts.count,
        ..BatchReport::default()
    };

    for seq in 1..=opts.count {
        tracing::info!(seq, "generating svg {seq}/{}", opts.count);
        match run_one(composer, optimizer, opts, seq, rng) {
            Ok(path) => report.written.push(path),
            Err(e) => {
                tracing::error!(seq, error = %e, "iteration failed");
                report.failed.push(BatchFailure {
                    seq,
                    message: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        written = report.written.len(),
        failed = report.failed.len(),
        "batch finished"
    );
    report
}

fn run_one<R: Rng>(
    composer: &Composer<'_>,
    optimizer: &dyn Optimizer,
    opts: &BatchOpts,
    seq: u64,
    rng: &mut R,
) -> BurstResult<PathBuf> {
    let doc = composer.generate_one(rng)?;
    let reduced = optimizer.optimize(&doc.markup)?;
    tracing::info!(seq, before = doc.markup.len(), after = reduced.len(), "reduced svg");
    persist(&opts.out_dir, &output_file_name(&opts.prefix, seq), &reduced)
}

/// Write through a sibling temp file so a failed write leaves no output.
fn persist(dir: &Path, name: &str, contents: &str) -> BurstResult<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;

    let path = dir.join(name);
    let tmp = dir.join(format!(".{name}.tmp"));
    let written = std::fs::write(&tmp, contents)
        .with_context(|| format!("write '{}'", tmp.display()))
        .and_then(|()| {
            std::fs::rename(&tmp, &path)
                .with_context(|| format!("move into place '{}'", path.display()))
        });
    if let Err(e) = written {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/batch/mod.rs"]
mod tests;
