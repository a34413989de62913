pub const DEFAULT_IMAGE: &str = "cardinal.iso";
pub const DEFAULT_RAM: &str = "32M";

/// Everything one emulator invocation depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Boot image attached as the CD-ROM
    pub image: String,
    /// Guest RAM in QEMU's size syntax (`32M`, `1G`)
    pub ram: String,
    /// Freeze the CPU at startup until a debugger attaches
    pub debug: bool,
    pub video: bool,
    /// Log every interrupt and exception QEMU delivers
    pub interrupts: bool,
    /// QEMU monitor on stdio; takes stdio away from the serial console
    pub monitor: bool,
    pub net: bool,
    pub serial: bool,
    /// Copy the console into the log read by `dump --backtrace`
    pub tee: bool,
    /// Port 0xE9 debug console on stdio
    pub debugcon: bool,
    /// Attach the exit device used by the test harness
    pub test_mode: bool,
    pub halt_on_reboot: bool,
    pub dry_run: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            image: DEFAULT_IMAGE.to_string(),
            ram: DEFAULT_RAM.to_string(),
            debug: false,
            video: false,
            interrupts: false,
            monitor: false,
            net: false,
            serial: true,
            tee: true,
            debugcon: false,
            test_mode: false,
            halt_on_reboot: true,
            dry_run: false,
        }
    }
}
