use anyhow::Context;
use lnfarm_core::{Mode, ReconcileReporter};

use super::RunOptions;

/// Print the planned links without touching the target
pub struct Show;

impl Show {
    pub fn execute(options: &RunOptions<'_>) -> anyhow::Result<()> {
        let engine = options.engine()?;
        let reporter = ReconcileReporter::new(options.verbose);

        engine
            .run_with_observer(options.target, options.sources, Mode::Show, |report| {
                reporter.log_entry(report);
                println!("{}", ReconcileReporter::plan_line(report));
            })
            .context("show run aborted")?;

        Ok(())
    }
}
