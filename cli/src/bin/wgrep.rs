//! wgrep: Print lines containing a search term.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use rle_cli::args::{parse_for, GrepArgs};
use rle_cli::{logging, report, run_wgrep};
use rle_core::constants::progs;

fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("{}: {e:#}", progs::WGREP);
    }

    let args: GrepArgs = parse_for(progs::WGREP);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = run_wgrep(&args, &mut out);
    report::finish(progs::WGREP, result, args.common.stats, &mut out)
}
