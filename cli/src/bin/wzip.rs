//! wzip: Compress files into a run-length record stream on stdout.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use rle_cli::args::{parse_for, ZipArgs};
use rle_cli::{logging, report, run_wzip};
use rle_core::constants::progs;

fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("{}: {e:#}", progs::WZIP);
    }

    let args: ZipArgs = parse_for(progs::WZIP);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = run_wzip(&args, &mut out);
    report::finish(progs::WZIP, result, args.common.stats, &mut out)
}
