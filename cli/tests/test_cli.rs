// End-to-end runs of the four binaries: stdout bytes, diagnostics and exit codes.

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use std::process::{Command, Output, Stdio};

    const WZIP: &str = env!("CARGO_BIN_EXE_wzip");
    const WUNZIP: &str = env!("CARGO_BIN_EXE_wunzip");
    const WCAT: &str = env!("CARGO_BIN_EXE_wcat");
    const WGREP: &str = env!("CARGO_BIN_EXE_wgrep");

    fn run(bin: &str, args: &[&Path]) -> Output {
        Command::new(bin)
            .args(args)
            .env_remove("RLE_LOG")
            .output()
            .unwrap()
    }

    fn run_with_stdin(bin: &str, args: &[&str], stdin: &[u8]) -> Output {
        let mut child = Command::new(bin)
            .args(args)
            .env_remove("RLE_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        child.stdin.take().unwrap().write_all(stdin).unwrap();
        child.wait_with_output().unwrap()
    }

    fn record(length: u32, value: u8) -> Vec<u8> {
        let mut r = length.to_le_bytes().to_vec();
        r.push(value);
        r
    }

    // --- Usage ---

    #[test]
    fn codec_tools_without_files_print_usage() {
        for (bin, prog) in [(WZIP, "wzip"), (WUNZIP, "wunzip")] {
            let out = run(bin, &[]);
            assert_eq!(out.status.code(), Some(1));
            assert_eq!(out.stdout, format!("{prog}: file1 [file2 ...]\n").into_bytes());
        }
    }

    #[test]
    fn wgrep_without_term_prints_usage() {
        let out = run(WGREP, &[]);
        assert_eq!(out.status.code(), Some(1));
        assert_eq!(out.stdout, b"wgrep: searchterm [file ...]\n");
    }

    #[test]
    fn wcat_without_files_succeeds_silently() {
        let out = run(WCAT, &[]);
        assert!(out.status.success());
        assert!(out.stdout.is_empty());
    }

    // --- wzip / wunzip ---

    #[test]
    fn wzip_writes_records() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, b"aaaaaaaaaabbbb").unwrap();

        let out = run(WZIP, &[&input]);
        assert!(out.status.success());

        let mut expected = record(10, b'a');
        expected.extend(record(4, b'b'));
        assert_eq!(out.stdout, expected);
    }

    #[test]
    fn wzip_merges_runs_across_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, b"aaa").unwrap();
        fs::write(&b, b"aab").unwrap();

        let out = run(WZIP, &[&a, &b]);
        let mut expected = record(5, b'a');
        expected.extend(record(1, b'b'));
        assert_eq!(out.stdout, expected);
    }

    #[test]
    fn wzip_missing_file_after_valid_one() {
        let dir = tempfile::tempdir().unwrap();
        let valid = dir.path().join("valid.txt");
        fs::write(&valid, b"aaab").unwrap();
        let missing = dir.path().join("missing.txt");

        let out = run(WZIP, &[&valid, &missing]);
        assert_eq!(out.status.code(), Some(1));

        let mut expected = record(3, b'a');
        expected.extend_from_slice(b"wzip: cannot open file\n");
        assert_eq!(out.stdout, expected);
    }

    #[test]
    fn wzip_treats_hyphenated_argument_as_file() {
        let dir = tempfile::tempdir().unwrap();

        let out = Command::new(WZIP)
            .arg("-missing")
            .current_dir(dir.path())
            .env_remove("RLE_LOG")
            .output()
            .unwrap();
        assert_eq!(out.status.code(), Some(1));
        assert_eq!(out.stdout, b"wzip: cannot open file\n");
    }

    #[test]
    fn hyphenated_file_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("-data"), b"---xx").unwrap();

        let zipped = Command::new(WZIP)
            .arg("-data")
            .current_dir(dir.path())
            .env_remove("RLE_LOG")
            .output()
            .unwrap();
        assert!(zipped.status.success());
        let mut expected = record(3, b'-');
        expected.extend(record(2, b'x'));
        assert_eq!(zipped.stdout, expected);

        fs::write(dir.path().join("-data.z"), &zipped.stdout).unwrap();
        let unzipped = Command::new(WUNZIP)
            .arg("-data.z")
            .current_dir(dir.path())
            .env_remove("RLE_LOG")
            .output()
            .unwrap();
        assert!(unzipped.status.success());
        assert_eq!(unzipped.stdout, b"---xx");

        let cases: [(&str, &[&str], &[u8]); 2] = [(WCAT, &["-data"], b"---xx"), (WGREP, &["x", "-data"], b"---xx\n")];
        for (bin, args, expected) in cases {
            let out = Command::new(bin)
                .args(args)
                .current_dir(dir.path())
                .env_remove("RLE_LOG")
                .output()
                .unwrap();
            assert!(out.status.success());
            assert_eq!(out.stdout, expected);
        }
    }

    #[test]
    fn wzip_then_wunzip_restores_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.bin");
        let payload: Vec<u8> = (0..20_000u32).map(|i| ((i / 37) % 5) as u8).collect();
        fs::write(&input, &payload).unwrap();

        let zipped = run(WZIP, &[&input]);
        assert!(zipped.status.success());
        let wire = dir.path().join("data.z");
        fs::write(&wire, &zipped.stdout).unwrap();

        let unzipped = run(WUNZIP, &[&wire]);
        assert!(unzipped.status.success());
        assert_eq!(unzipped.stdout, payload);
    }

    #[test]
    fn wunzip_rejects_trailing_fragment() {
        let dir = tempfile::tempdir().unwrap();
        let wire = dir.path().join("bad.z");
        let mut bytes = record(3, b'x');
        bytes.extend_from_slice(&[1, 0]);
        fs::write(&wire, &bytes).unwrap();

        let out = run(WUNZIP, &[&wire]);
        assert_eq!(out.status.code(), Some(1));
        assert_eq!(out.stdout, b"xxxwunzip: malformed input\n");
    }

    #[test]
    fn wunzip_lenient_drops_trailing_fragment() {
        let dir = tempfile::tempdir().unwrap();
        let wire = dir.path().join("bad.z");
        let mut bytes = record(3, b'x');
        bytes.extend_from_slice(&[1, 0]);
        fs::write(&wire, &bytes).unwrap();

        let out = Command::new(WUNZIP)
            .arg("--lenient")
            .arg(&wire)
            .env_remove("RLE_LOG")
            .output()
            .unwrap();
        assert!(out.status.success());
        assert_eq!(out.stdout, b"xxx");
    }

    #[test]
    fn stats_go_to_stderr_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, b"zzzz").unwrap();

        let out = Command::new(WZIP)
            .arg("--stats")
            .arg(&input)
            .env_remove("RLE_LOG")
            .output()
            .unwrap();
        assert!(out.status.success());
        assert_eq!(out.stdout, record(4, b'z'));

        let stderr = String::from_utf8(out.stderr).unwrap();
        assert!(stderr.contains("\"records\":1"), "stderr was: {stderr}");
    }

    // --- wcat / wgrep ---

    #[test]
    fn wcat_prints_files_and_stops_at_missing() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        fs::write(&a, b"hello\n").unwrap();
        let missing = dir.path().join("nope.txt");

        let out = run(WCAT, &[&a, &a]);
        assert!(out.status.success());
        assert_eq!(out.stdout, b"hello\nhello\n");

        let out = run(WCAT, &[&a, &missing]);
        assert_eq!(out.status.code(), Some(1));
        assert_eq!(out.stdout, b"hello\nwcat: cannot open file\n");
    }

    #[test]
    fn wgrep_searches_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        fs::write(&a, b"apple pie\nbanana\npineapple").unwrap();

        let out = Command::new(WGREP)
            .arg("apple")
            .arg(&a)
            .env_remove("RLE_LOG")
            .output()
            .unwrap();
        assert!(out.status.success());
        assert_eq!(out.stdout, b"apple pie\npineapple\n");
    }

    #[test]
    fn wgrep_reads_stdin_without_files() {
        let out = run_with_stdin(WGREP, &["an"], b"banana\ncherry\nmango\n");
        assert!(out.status.success());
        assert_eq!(out.stdout, b"banana\nmango\n");
    }

    #[test]
    fn wgrep_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.txt");

        let out = Command::new(WGREP)
            .arg("x")
            .arg(&missing)
            .env_remove("RLE_LOG")
            .output()
            .unwrap();
        assert_eq!(out.status.code(), Some(1));
        assert_eq!(out.stdout, b"wgrep: cannot open file\n");
    }
}
