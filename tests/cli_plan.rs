use predicates::prelude::*;

#[test]
fn plan_prints_labels_without_a_token() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("booktasks");
    cmd.env_remove("TODOIST_API_TOKEN")
        .args(["plan"])
        .write_stdin("Go Basics\n2\n2\n1\nproj\nsect\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[Go Basics] 1_1\n[Go Basics] 1_2\n[Go Basics] 2_1\n",
        ));
}

#[test]
fn plan_fails_on_truncated_input() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("booktasks");
    cmd.args(["plan"])
        .write_stdin("Go Basics\n2\n2\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "input ended before section count for chapter 2 was entered",
        ));
}

#[test]
fn rust_log_debug_emits_debug_line_to_stderr() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("booktasks");
    cmd.env("RUST_LOG", "debug")
        .args(["plan"])
        .write_stdin("T\n0\np\ns\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("parsed cli"));
}
