//! CLI tests (multi-file: flag parsing, argument checks, output).

use super::{parse_args, Cli};

pub(super) fn parse(args: &[&str]) -> Cli {
    parse_args(args.iter().copied()).unwrap().1
}
