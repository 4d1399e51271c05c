//! wunzip: Expand run-length record streams back to bytes on stdout.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use rle_cli::args::{parse_for, UnzipArgs};
use rle_cli::{logging, report, run_wunzip};
use rle_core::constants::progs;

fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("{}: {e:#}", progs::WUNZIP);
    }

    let args: UnzipArgs = parse_for(progs::WUNZIP);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = run_wunzip(&args, &mut out);
    report::finish(progs::WUNZIP, result, args.common.stats, &mut out)
}
