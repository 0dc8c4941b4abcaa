use crate::{Cli, Command};

use std::path::PathBuf;

use clap::Parser;
use googletest::prelude::*;

#[test]
fn given_no_subcommand_when_parsed_then_run_is_default() {
    let cli = Cli::try_parse_from(["iw-daemon"]).unwrap();

    assert_that!(cli.command(), eq(Command::Run));
    assert_that!(cli.config_dir.is_none(), eq(true));
}

#[test]
fn given_subcommands_when_parsed_then_mapped() {
    let cases = [
        ("run", Command::Run),
        ("probe", Command::Probe),
        ("status", Command::Status),
        ("power-on", Command::PowerOn),
    ];

    for (arg, expected) in cases {
        let cli = Cli::try_parse_from(["iw-daemon", arg]).unwrap();
        assert_that!(cli.command(), eq(expected));
    }
}

#[test]
fn given_config_dir_after_subcommand_when_parsed_then_accepted() {
    let cli = Cli::try_parse_from(["iw-daemon", "probe", "--config-dir", "/etc/iw"]).unwrap();

    assert_that!(cli.command(), eq(Command::Probe));
    assert_that!(cli.config_dir, some(eq(&PathBuf::from("/etc/iw"))));
}

#[test]
fn given_unknown_subcommand_when_parsed_then_error() {
    let result = Cli::try_parse_from(["iw-daemon", "reboot"]);

    assert_that!(result.is_err(), eq(true));
}
