use anyhow::anyhow;
use shell::CONSOLE_LOG;
use std::str::FromStr;

pub const DEFAULT_BINARY: &str = "cardinal.elf";
/// Trailing log lines scanned for a backtrace
pub const DEFAULT_TAIL: usize = 50;
pub const DEFAULT_TAIL_LINES: &str = "50";

/// Instruction syntax of the disassembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    Att,
    Intel,
}

impl FromStr for Syntax {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "att" | "at&t" => Ok(Syntax::Att),
            "intel" => Ok(Syntax::Intel),
            _ => Err(anyhow!("Unknown syntax: {} (expected att or intel)", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpOptions {
    /// The binary to disassemble, or to resolve backtrace addresses against
    pub file: String,
    /// Dump every section instead of the executable ones
    pub all_sections: bool,
    /// Interleave source lines with the disassembly
    pub source: bool,
    pub syntax: Syntax,
    /// Pipe the output through the demangler
    pub demangle: bool,
    /// Resolve the backtrace in `log` instead of disassembling
    pub backtrace: bool,
    pub log: String,
    pub tail: usize,
}

impl Default for DumpOptions {
    fn default() -> Self {
        DumpOptions {
            file: DEFAULT_BINARY.to_string(),
            all_sections: false,
            source: true,
            syntax: Syntax::Att,
            demangle: true,
            backtrace: false,
            log: CONSOLE_LOG.to_string(),
            tail: DEFAULT_TAIL,
        }
    }
}
