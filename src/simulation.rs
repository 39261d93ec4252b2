use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    config::SimConfig,
    mmu::translator::{Statistics, Translator},
    storage::backing_store::BackingStore,
    trace::ReferenceTrace,
    utils::replacer::ReplacementPolicy,
};

/// Translates every address of the configured trace, writing one line per
/// address followed by the summary. Nothing is written if the inputs can't be opened.
pub fn run(config: &SimConfig, out: &mut impl Write) -> Result<Statistics> {
    let trace = ReferenceTrace::from_path(&config.reference_file).context("failed to load trace")?;
    let backing_store =
        BackingStore::open(&config.backing_store).context("failed to open backing store")?;

    info!(
        addresses = trace.len(),
        frames = config.frame_count,
        policy = %config.policy,
        backing_store = %backing_store.path().display(),
        "starting run"
    );

    let policy = ReplacementPolicy::new(config.policy, config.frame_count, trace.pages());
    let mut translator = Translator::new(backing_store, config.frame_count, policy);

    for &address in trace.addresses() {
        let translation = translator
            .translate(address)
            .with_context(|| format!("failed to translate address {}", address))?;
        writeln!(out, "{}", translator.report_line(&translation))?;
    }

    let stats = *translator.statistics();
    writeln!(out, "{}", stats)?;
    out.flush()?;

    info!(
        translated = stats.translated,
        page_faults = stats.page_faults,
        tlb_misses = stats.tlb_misses,
        "run complete"
    );

    Ok(stats)
}
