//! End-to-end output of the default stderr reporter.
//!
//! The reporter writes straight to the process's standard error, which the
//! test harness does not capture. `test_default_reporter_writes_one_line_per_raise`
//! therefore re-runs this test binary, restricted to `emit_reports_in_child`,
//! and inspects the child's stderr.

use std::process::{Command, Stdio};

use errslot::prelude::*;

const CHILD_ENV_VAR: &str = "ERRSLOT_REPORTER_TEST_CHILD";

#[test]
fn emit_reports_in_child() {
    if std::env::var_os(CHILD_ENV_VAR).is_none() {
        return;
    }

    let mut context = ErrorContext::new(true);
    raise_user!(&mut context, "disk full", 28);
    errslot::check::less_than(&mut context, 9, 3);

    context.reset();

    context.set_reporting(false);
    raise_system!(&mut context, "not reported", 1);
}

#[test]
fn test_default_reporter_writes_one_line_per_raise() {
    let child = Command::new(std::env::current_exe().unwrap())
        .args(["--exact", "emit_reports_in_child", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV_VAR, "1")
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    let pid = child.id();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "{output:?}");

    let stderr = String::from_utf8(output.stderr).unwrap();
    let lines: Vec<&str> = stderr
        .lines()
        .filter(|line| line.starts_with("ERROR (pid="))
        .collect();
    assert_eq!(lines.len(), 2, "{stderr}");

    let user_prefix = format!("ERROR (pid={pid}): {} : emit_reports_in_child : @ ", file!());
    assert!(lines[0].starts_with(&user_prefix), "{}", lines[0]);
    assert!(lines[0].ends_with(" : (error code = 28) : disk full"), "{}", lines[0]);

    let check_prefix = format!("ERROR (pid={pid}): ");
    assert!(lines[1].starts_with(&check_prefix), "{}", lines[1]);
    assert!(lines[1].contains("check.rs : less_than : @ "), "{}", lines[1]);
    assert!(lines[1].ends_with(" : (error code = -1) : failed check"), "{}", lines[1]);

    assert!(!stderr.contains("not reported"), "{stderr}");
}
