use clap::Parser;
use run::{launch, RunOptions, DEFAULT_IMAGE, DEFAULT_RAM};
use shell::SystemShell;
use std::io;
use std::process;

#[derive(Parser)]
#[clap(author, version, about = "Convenient qemu wrapper", long_about = None)]
#[clap(propagate_version = true)]
struct Args {
    /// ISO to run
    #[clap(short, long, value_parser, default_value = DEFAULT_IMAGE)]
    file: String,
    /// Set the VM's RAM size
    #[clap(short, long, value_parser, default_value = DEFAULT_RAM)]
    ram: String,
    /// Wait for GDB debug connection
    #[clap(short, long, action, default_value = "false")]
    debug: bool,
    /// Show video
    #[clap(short, long, action, default_value = "false")]
    video: bool,
    /// Show interrupt debug information
    #[clap(short, long, action, default_value = "false")]
    interrupts: bool,
    /// Show the QEMU monitor on stdio (implies -t)
    #[clap(short, long, action, default_value = "false")]
    monitor: bool,
    /// Attach a network interface
    #[clap(short = 'x', long, action, default_value = "false")]
    net: bool,
    /// Do not use serial stdio
    #[clap(short = 'n', long, action, default_value = "false")]
    no_serial: bool,
    /// Do not tee output
    #[clap(short = 't', long, action, default_value = "false")]
    no_tee: bool,
    /// Enable QEMU debug console (port E9)
    #[clap(long, action, default_value = "false")]
    debugcon: bool,
    /// Run in test mode (attach isa-debug-exit device)
    #[clap(long, action, default_value = "false")]
    test_mode: bool,
    /// Let the guest reboot instead of halting QEMU
    #[clap(long, action, default_value = "false")]
    allow_reboot: bool,
    /// Just print the QEMU command, don't run it
    #[clap(long, action, default_value = "false")]
    dry_run: bool,
}

impl From<Args> for RunOptions {
    fn from(args: Args) -> Self {
        RunOptions {
            image: args.file,
            ram: args.ram,
            debug: args.debug,
            video: args.video,
            interrupts: args.interrupts,
            monitor: args.monitor,
            net: args.net,
            serial: !args.no_serial,
            tee: !args.no_tee,
            debugcon: args.debugcon,
            test_mode: args.test_mode,
            halt_on_reboot: !args.allow_reboot,
            dry_run: args.dry_run,
        }
    }
}

fn main() {
    env_logger::init();
    let options = RunOptions::from(Args::parse());
    match launch(&options, &mut SystemShell, &mut io::stdout()) {
        Ok(Some(outcome)) => process::exit(outcome.exit_code()),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
