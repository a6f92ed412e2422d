use assert_cmd::Command;
use std::str;

/// Generic execution function that invokes logsift with input piped
/// on stdin and returns whatever landed on stdout
fn run_logsift(input: &str, args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("logsift").unwrap();
    let output = cmd
        .args(args)
        .write_stdin(input)
        .output()
        .expect("failed to execute");

    str::from_utf8(&output.stdout)
        .expect("Failed to read stdout as UTF-8")
        .to_string()
}

/// Ten lines, the last one unterminated the way log files usually end
const TEN_LINES: &str = "This is line 1/10\n\
This is line 2/10\n\
This is line 3/10\n\
This is line 4/10\n\
This is line 5/10\n\
This is line 6/10\n\
This is line 7/10\n\
This is line 8/10\n\
This is line 9/10\n\
This is line 10/10";

const MIXED_LOG: &str = "boot 00:00:01 ok\n\
peer 10.0.0.1 seen\n\
peer 54ad:92fb:9c62:dcc1:39fb:d679:73f4:b804 seen\n\
noise line\n\
shutdown 23:59:59 from 192.168.0.254";

/// -f NUM keeps the head of the input
#[test]
fn first_keeps_leading_lines() {
    let output = run_logsift(TEN_LINES, &["-f", "3"]);
    assert_eq!(
        output,
        "This is line 1/10\nThis is line 2/10\nThis is line 3/10\n"
    );
}

/// -f larger than the input saturates to the whole input, like head
#[test]
fn first_larger_than_input_prints_everything() {
    let output = run_logsift(TEN_LINES, &["-f", "20"]);
    assert_eq!(output, TEN_LINES);
}

/// -f 0 selects an empty head and prints nothing
#[test]
fn first_zero_prints_nothing() {
    let output = run_logsift(TEN_LINES, &["-f", "0"]);
    assert_eq!(output, "");
}

/// A negative -f drops the last |NUM| lines
#[test]
fn negative_first_drops_trailing_lines() {
    let output = run_logsift(TEN_LINES, &["--first", "-7"]);
    assert_eq!(
        output,
        "This is line 1/10\nThis is line 2/10\nThis is line 3/10\n"
    );
}

/// -l NUM keeps the tail of the input, including the unterminated final line
#[test]
fn last_keeps_trailing_lines() {
    let output = run_logsift(TEN_LINES, &["-l", "2"]);
    assert_eq!(output, "This is line 9/10\nThis is line 10/10");
}

/// A negative -l is read by its magnitude
#[test]
fn negative_last_reads_magnitude() {
    let output = run_logsift(TEN_LINES, &["--last", "-2"]);
    assert_eq!(output, "This is line 9/10\nThis is line 10/10");
}

/// -f and -l together select their intersection
#[test]
fn first_and_last_select_the_overlap() {
    let output = run_logsift(TEN_LINES, &["-f", "7", "-l", "7"]);
    assert_eq!(
        output,
        "This is line 4/10\nThis is line 5/10\nThis is line 6/10\nThis is line 7/10\n"
    );
}

/// Disjoint -f and -l windows print nothing and still exit successfully
#[test]
fn disjoint_windows_print_nothing() {
    let mut cmd = Command::cargo_bin("logsift").unwrap();
    cmd.args(["-f", "3", "-l", "-3"])
        .write_stdin(TEN_LINES)
        .assert()
        .success()
        .stdout("");
}

/// -t keeps only lines carrying an HH:MM:SS timestamp
#[test]
fn timestamp_filter() {
    let output = run_logsift(MIXED_LOG, &["-t"]);
    assert_eq!(
        output,
        "boot 00:00:01 ok\nshutdown 23:59:59 from 192.168.0.254"
    );
}

/// With stdout piped, color auto-detection turns highlighting off
#[test]
fn ipv4_filter_without_a_tty_adds_no_markers() {
    let output = run_logsift(MIXED_LOG, &["-i"]);
    assert_eq!(
        output,
        "peer 10.0.0.1 seen\nshutdown 23:59:59 from 192.168.0.254"
    );
}

/// -C always forces highlight markers around each matched address
#[test]
fn ipv4_filter_with_forced_color_wraps_matches() {
    let output = run_logsift(MIXED_LOG, &["-i", "-C", "always"]);
    assert_eq!(
        output,
        "peer \x1b[42m10.0.0.1\x1b[0m seen\n\
         shutdown 23:59:59 from \x1b[42m192.168.0.254\x1b[0m"
    );
}

/// -I matches only full eight-group IPv6 notation
#[test]
fn ipv6_filter() {
    let output = run_logsift(MIXED_LOG, &["-I"]);
    assert_eq!(
        output,
        "peer 54ad:92fb:9c62:dcc1:39fb:d679:73f4:b804 seen\n"
    );
}

/// Predicates combine with the slicing window
#[test]
fn timestamp_filter_combined_with_first() {
    let output = run_logsift(MIXED_LOG, &["-t", "-f", "3"]);
    assert_eq!(output, "boot 00:00:01 ok\n");
}

/// Invoking with no filter options at all is a usage error
#[test]
fn requires_at_least_one_filter() {
    let mut cmd = Command::cargo_bin("logsift").unwrap();
    cmd.write_stdin("some data\n").assert().failure().stdout("");
}

/// A FILE that cannot be opened is reported as an error
#[test]
fn unreadable_file_fails() {
    let mut cmd = Command::cargo_bin("logsift").unwrap();
    cmd.args(["-t", "no/such/file.log"])
        .assert()
        .failure()
        .stdout("");
}
