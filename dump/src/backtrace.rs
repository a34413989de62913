use anyhow::{anyhow, Context, Result};
use log::{debug, trace};
use pest::Parser;
use std::fs;
use std::path::Path;

#[derive(Parser)]
#[grammar = "backtrace.pest"]
struct BacktraceParser;

/// Text marking a backtrace even when none of its frames could be matched
pub const MARKER: &str = "backtrace";

/// What a scan of the console log turned up
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Backtrace {
    /// Hex addresses in the order they appear in the log
    pub addresses: Vec<String>,
    /// Whether the scanned lines mention a backtrace at all
    pub marker: bool,
}

impl Backtrace {
    pub fn found(&self) -> bool {
        self.marker || !self.addresses.is_empty()
    }
}

/// The last `n` lines of `text`
pub fn tail_lines(text: &str, n: usize) -> Vec<&str> {
    let lines: Vec<&str> = text.lines().collect();
    let skip = lines.len().saturating_sub(n);
    lines[skip..].to_vec()
}

/// Addresses of frame (`(0x..) <sym>`) and register (`bp: .. ip: 0x..`) shapes in one line
pub fn line_addresses(line: &str) -> Result<Vec<String>> {
    let pairs = BacktraceParser::parse(Rule::line, line)
        .map_err(|e| anyhow!("Scanning log line {:?} failed: {}", line, e))?;
    let addresses: Vec<String> = pairs
        .flatten()
        .filter(|pair| pair.as_rule() == Rule::hex)
        .map(|pair| pair.as_str().to_string())
        .collect();
    if !addresses.is_empty() {
        trace!("{:?} -> {:?}", line, addresses);
    }
    Ok(addresses)
}

/// Scan the last `tail` lines of a console log
pub fn scan(log: &str, tail: usize) -> Result<Backtrace> {
    let mut backtrace = Backtrace::default();
    for line in tail_lines(log, tail) {
        backtrace.marker |= line.contains(MARKER);
        backtrace.addresses.extend(line_addresses(line)?);
    }
    debug!(
        "backtrace scan: {} addresses, marker: {}",
        backtrace.addresses.len(),
        backtrace.marker
    );
    Ok(backtrace)
}

pub fn scan_file(path: &Path, tail: usize) -> Result<Backtrace> {
    let log = fs::read(path).with_context(|| format!("Could not read log file {:?}", path))?;
    // the guest may write arbitrary bytes to the serial port
    scan(&String::from_utf8_lossy(&log), tail)
}
