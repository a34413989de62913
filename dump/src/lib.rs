#[macro_use]
extern crate pest_derive;

pub mod backtrace;
pub mod command;
pub mod options;

use crate::backtrace::Backtrace;
use crate::command::*;
pub use crate::options::*;
use anyhow::Result;
use log::{debug, info};
use shell::{Outcome, Pipeline, Runner};
use std::io::Write;
use std::path::Path;

pub const NO_BACKTRACE: &str = "No backtrace found";

/// What a single invocation of the wrapper is going to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// Run the pipeline and read its output in the pager
    View(Pipeline),
    /// Resolution was requested but the log holds no backtrace
    NoBacktrace,
}

pub fn plan(options: &DumpOptions) -> Result<Plan> {
    if options.backtrace {
        let backtrace = backtrace::scan_file(Path::new(&options.log), options.tail)?;
        Ok(plan_backtrace(options, &backtrace))
    } else {
        Ok(plan_disassembly(options))
    }
}

pub fn plan_disassembly(options: &DumpOptions) -> Plan {
    Plan::View(viewer(options, objdump_command(options)))
}

pub fn plan_backtrace(options: &DumpOptions, backtrace: &Backtrace) -> Plan {
    if !backtrace.found() {
        return Plan::NoBacktrace;
    }
    let resolve = addr2line_command(options, &backtrace.addresses);
    let pipeline = viewer(options, resolve);
    if backtrace.addresses.is_empty() {
        // addr2line reads addresses from stdin when given none
        Plan::View(pipeline.stdin_from("/dev/null"))
    } else {
        Plan::View(pipeline)
    }
}

pub fn execute(plan: &Plan, runner: &mut impl Runner, out: &mut impl Write) -> Result<Outcome> {
    match plan {
        Plan::View(pipeline) => {
            let line = pipeline.render();
            debug!("dump: {}", line);
            let outcome = runner.run(&line)?;
            info!("{} finished: {:?}", pipeline.first().program(), outcome);
            Ok(outcome)
        }
        Plan::NoBacktrace => {
            writeln!(out, "{}", NO_BACKTRACE)?;
            Ok(Outcome::Exited(0))
        }
    }
}

/// Plan and execute in one go
pub fn dump(options: &DumpOptions, runner: &mut impl Runner, out: &mut impl Write) -> Result<Outcome> {
    let plan = plan(options)?;
    execute(&plan, runner, out)
}
