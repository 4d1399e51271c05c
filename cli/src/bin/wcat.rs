//! wcat: Print files to stdout, in order.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use rle_cli::args::{parse_for, CatArgs};
use rle_cli::{logging, report, run_wcat};
use rle_core::constants::progs;

fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("{}: {e:#}", progs::WCAT);
    }

    let args: CatArgs = parse_for(progs::WCAT);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = run_wcat(&args, &mut out);
    report::finish(progs::WCAT, result, args.common.stats, &mut out)
}
