use anyhow::Context;
use lnfarm_core::{Mode, ReconcileReporter};
use tracing::warn;

use super::RunOptions;

/// Create or clean links and print a summary
pub struct Link;

impl Link {
    pub fn execute(options: &RunOptions<'_>, mode: Mode) -> anyhow::Result<()> {
        let engine = options.engine()?;
        let reporter = ReconcileReporter::new(options.verbose);

        let result = engine
            .run_with_observer(options.target, options.sources, mode, |report| {
                reporter.log_entry(report);
            })
            .with_context(|| format!("{mode} run aborted"))?;

        let summary = ReconcileReporter::generate_summary(&result);
        println!("{summary}");

        let attention = result
            .entries
            .iter()
            .filter(|e| e.outcome.needs_attention())
            .count();
        if attention > 0 {
            warn!("{attention} entries left untouched or failed, see above");
        }

        let failed = result.failures().count();
        if failed > 0 {
            anyhow::bail!("{failed} entries could not be processed");
        }

        Ok(())
    }
}
