use clap::Parser;
use dump::{dump, DumpOptions, Syntax, DEFAULT_BINARY, DEFAULT_TAIL_LINES};
use shell::{SystemShell, CONSOLE_LOG};
use std::io;
use std::process;

#[derive(Parser)]
#[clap(author, version, about = "Convenient objdump wrapper", long_about = None)]
#[clap(propagate_version = true)]
struct Args {
    /// Program to dump
    #[clap(short, long, value_parser, default_value = DEFAULT_BINARY)]
    file: String,
    /// Dump all sections, not just .text
    #[clap(short, long, action, default_value = "false")]
    all_sections: bool,
    /// Do not interleave source lines
    #[clap(short = 's', long, action, default_value = "false")]
    no_source: bool,
    /// Instruction syntax [att, intel]
    #[clap(short = 'M', long, default_value = "att")]
    syntax: Syntax,
    /// Resolve the backtrace at the end of the log instead of disassembling
    #[clap(short, long, action, default_value = "false")]
    backtrace: bool,
    /// Console log to look for a backtrace in
    #[clap(short, long, value_parser, default_value = CONSOLE_LOG)]
    log: String,
    /// Number of trailing log lines to scan
    #[clap(long, default_value = DEFAULT_TAIL_LINES)]
    tail: usize,
    /// Do not pipe through rustfilt
    #[clap(short = 'n', long, action, default_value = "false")]
    no_demangle: bool,
}

impl From<Args> for DumpOptions {
    fn from(args: Args) -> Self {
        DumpOptions {
            file: args.file,
            all_sections: args.all_sections,
            source: !args.no_source,
            syntax: args.syntax,
            demangle: !args.no_demangle,
            backtrace: args.backtrace,
            log: args.log,
            tail: args.tail,
        }
    }
}

fn main() {
    env_logger::init();
    let options = DumpOptions::from(Args::parse());
    match dump(&options, &mut SystemShell, &mut io::stdout()) {
        Ok(outcome) => process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
