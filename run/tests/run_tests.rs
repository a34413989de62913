use anyhow::Result;
use run::command::*;
use run::*;
use shell::{Outcome, Recorder};

const DEFAULT_LINE: &str = "qemu-system-x86_64 -s -vga std -no-reboot -m 32M -cdrom cardinal.iso \
     -serial stdio -display none -serial unix:./serial2,nowait,server | tee last_output";

fn count(tokens: &[String], token: &str) -> usize {
    tokens.iter().filter(|t| *t == token).count()
}

#[test]
fn test_defaults() {
    let options = RunOptions::default();
    assert_eq!(options.image, "cardinal.iso");
    assert_eq!(options.ram, "32M");
    assert!(options.serial && options.tee && options.halt_on_reboot);
    assert_eq!(run_pipeline(&options).render(), DEFAULT_LINE);
}

#[test]
fn test_monitor_takes_stdio() {
    let options = RunOptions {
        monitor: true,
        ..Default::default()
    };
    let pipeline = run_pipeline(&options);
    let cmd = pipeline.first();
    let monitor = cmd.position("-monitor").unwrap();
    assert_eq!(cmd.tokens()[monitor + 1], "stdio");
    // only the always-on unix socket serial remains
    assert_eq!(count(cmd.tokens(), "-serial"), 1);
    assert!(!cmd.render().contains("-serial stdio"));
    // no tee while the monitor is interactive
    assert_eq!(pipeline.stages().len(), 1);
}

#[test]
fn test_no_serial_no_tee() {
    let options = RunOptions {
        serial: false,
        tee: false,
        ..Default::default()
    };
    let pipeline = run_pipeline(&options);
    assert_eq!(pipeline.programs(), vec!["qemu-system-x86_64"]);
    assert!(!pipeline.render().contains("-serial stdio"));
    assert!(pipeline
        .render()
        .ends_with("-serial unix:./serial2,nowait,server"));
}

#[test]
fn test_network() {
    let options = RunOptions {
        net: true,
        ..Default::default()
    };
    let cmd = qemu_command(&options);
    let tokens = cmd.tokens();
    assert_eq!(count(tokens, "-netdev"), 1);
    assert_eq!(count(tokens, "-object"), 1);
    assert_eq!(
        count(tokens, "filter-dump,id=dump0,netdev=net0,file=tap0.pcap"),
        1
    );
    let netdev = cmd.position("-netdev").unwrap();
    assert_eq!(
        tokens[netdev + 1],
        "tap,id=net0,script=no,downscript=no,ifname=tap0"
    );
    // the nic group follows the always-on serial socket
    assert!(cmd.position("unix:./serial2,nowait,server").unwrap() < cmd.position("rtl8139,netdev=net0").unwrap());
}

#[test]
fn test_independent_toggles() {
    let options = RunOptions {
        image: "build/cardinal.iso".to_string(),
        ram: "1G".to_string(),
        debug: true,
        video: true,
        interrupts: true,
        debugcon: true,
        test_mode: true,
        halt_on_reboot: false,
        tee: false,
        ..Default::default()
    };
    let cmd = qemu_command(&options);
    assert_eq!(
        cmd.tokens(),
        [
            "qemu-system-x86_64",
            "-s",
            "-vga",
            "std",
            "-m",
            "1G",
            "-cdrom",
            "build/cardinal.iso",
            "-S",
            "-serial",
            "stdio",
            "-debugcon",
            "stdio",
            "-d",
            "int",
            "--device",
            "isa-debug-exit",
            "-serial",
            "unix:./serial2,nowait,server",
        ]
    );
}

#[test]
fn test_dry_run_never_runs() -> Result<()> {
    let options = RunOptions {
        dry_run: true,
        ..Default::default()
    };
    let mut recorder = Recorder::new();
    let mut out = Vec::new();
    assert_eq!(launch(&options, &mut recorder, &mut out)?, None);
    assert!(recorder.lines.is_empty());
    assert_eq!(String::from_utf8(out)?, format!("{}\n", DEFAULT_LINE));
    Ok(())
}

#[test]
fn test_runs_printed_line_once() -> Result<()> {
    let options = RunOptions {
        test_mode: true,
        tee: false,
        ..Default::default()
    };
    // isa-debug-exit reports (value << 1) | 1
    let mut recorder = Recorder::with_outcome(Outcome::Exited(33));
    let mut out = Vec::new();
    let outcome = launch(&options, &mut recorder, &mut out)?;
    assert_eq!(outcome, Some(Outcome::Exited(33)));
    let printed = String::from_utf8(out)?;
    assert_eq!(recorder.lines, vec![printed.trim_end().to_string()]);
    Ok(())
}

#[test]
fn test_interrupt_is_quiet() -> Result<()> {
    let mut recorder = Recorder::with_outcome(Outcome::Interrupted);
    let mut out = Vec::new();
    let outcome = launch(&RunOptions::default(), &mut recorder, &mut out)?;
    assert_eq!(outcome.map(|o| o.exit_code()), Some(0));
    Ok(())
}
