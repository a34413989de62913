use crate::options::{DumpOptions, Syntax};
use shell::{Command, Pipeline};

pub const OBJDUMP: &str = "objdump";
pub const ADDR2LINE: &str = "addr2line";
pub const DEMANGLER: &str = "rustfilt";
pub const PAGER: &str = "less";

/// Sections holding kernel code: the higher-half text and the low boot trampoline
pub const TEXT_SECTIONS: [&str; 2] = ["-j.text", "-j.low.text"];

pub fn objdump_command(options: &DumpOptions) -> Command {
    let mut cmd = Command::new(OBJDUMP);
    if options.all_sections {
        cmd = cmd.arg("-D");
    } else {
        cmd = cmd.arg("-d").args(TEXT_SECTIONS);
    }
    if options.source {
        cmd = cmd.arg("-S");
    }
    if options.syntax == Syntax::Intel {
        cmd = cmd.arg("-Mintel");
    }
    cmd.arg(options.file.as_str())
}

/// Function names and `file:line` for every address, one per line
pub fn addr2line_command(options: &DumpOptions, addresses: &[String]) -> Command {
    Command::new(ADDR2LINE)
        .args(["-e", options.file.as_str(), "-f", "-p"])
        .args(addresses.iter().map(String::as_str))
}

/// Pipe `first` through the demangler (when enabled) into the pager
pub fn viewer(options: &DumpOptions, first: Command) -> Pipeline {
    let mut pipeline = Pipeline::new(first);
    if options.demangle {
        pipeline = pipeline.pipe(Command::new(DEMANGLER));
    }
    pipeline.pipe(Command::new(PAGER))
}
