use crate::options::RunOptions;
use shell::{Command, Pipeline, CONSOLE_LOG};

pub const QEMU: &str = "qemu-system-x86_64";

/// Second serial port, always reachable through a unix socket next to the image
pub const SERIAL2: [&str; 2] = ["-serial", "unix:./serial2,nowait,server"];

/// rtl8139 on the pre-provisioned `tap0`, with every frame captured to `tap0.pcap`
pub const NETWORK: [&str; 6] = [
    "-device",
    "rtl8139,netdev=net0",
    "-netdev",
    "tap,id=net0,script=no,downscript=no,ifname=tap0",
    "-object",
    "filter-dump,id=dump0,netdev=net0,file=tap0.pcap",
];

pub fn qemu_command(options: &RunOptions) -> Command {
    let mut cmd = Command::new(QEMU).arg("-s").args(["-vga", "std"]);
    if options.halt_on_reboot {
        cmd = cmd.arg("-no-reboot");
    }
    cmd = cmd
        .args(["-m", options.ram.as_str()])
        .args(["-cdrom", options.image.as_str()]);

    if options.debug {
        cmd = cmd.arg("-S");
    }
    if options.monitor {
        cmd = cmd.args(["-monitor", "stdio"]);
    }
    if options.serial && !options.monitor {
        cmd = cmd.args(["-serial", "stdio"]);
    }
    if options.debugcon {
        cmd = cmd.args(["-debugcon", "stdio"]);
    }
    if options.interrupts {
        cmd = cmd.args(["-d", "int"]);
    }
    if !options.video {
        cmd = cmd.args(["-display", "none"]);
    }
    if options.test_mode {
        cmd = cmd.args(["--device", "isa-debug-exit"]);
    }

    cmd = cmd.args(SERIAL2);

    if options.net {
        cmd = cmd.args(NETWORK);
    }
    cmd
}

/// The emulator, teed into the console log unless the monitor owns stdio
pub fn run_pipeline(options: &RunOptions) -> Pipeline {
    let pipeline = Pipeline::new(qemu_command(options));
    if options.tee && !options.monitor {
        pipeline.pipe(Command::new("tee").arg(CONSOLE_LOG))
    } else {
        pipeline
    }
}
