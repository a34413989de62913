pub mod command;
pub mod options;

use crate::command::run_pipeline;
pub use crate::options::*;
use anyhow::Result;
use log::{debug, info};
use shell::{Outcome, Runner};
use std::io::Write;

/// Print the emulator command line, then run it unless this is a dry run.
/// Returns `None` for a dry run.
pub fn launch(
    options: &RunOptions,
    runner: &mut impl Runner,
    out: &mut impl Write,
) -> Result<Option<Outcome>> {
    let line = run_pipeline(options).render();
    writeln!(out, "{}", line)?;
    out.flush()?;

    if options.dry_run {
        debug!("dry run, not starting the emulator");
        return Ok(None);
    }

    let outcome = runner.run(&line)?;
    match outcome {
        Outcome::Interrupted => debug!("emulator interrupted"),
        Outcome::Exited(code) => info!("emulator exited with status {}", code),
    }
    Ok(Some(outcome))
}
