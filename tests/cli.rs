use std::{fs, process::Command};

fn rpncalc(args: &[&str]) -> (Option<i32>, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_rpncalc")).args(args)
                                                            .env_remove("RUST_LOG")
                                                            .output()
                                                            .expect("failed to run rpncalc");
    (output.status.code(),
     String::from_utf8_lossy(&output.stdout).into_owned(),
     String::from_utf8_lossy(&output.stderr).into_owned())
}

#[test]
fn one_shot_prints_value() {
    let (code, stdout, _) = rpncalc(&["2+3*4"]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout, "14\n");

    let (code, stdout, _) = rpncalc(&["10/0"]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout, "Infinity\n");
}

#[test]
fn postfix_flag_prints_postfix_form() {
    let (code, stdout, _) = rpncalc(&["--postfix", "(2+3)*4"]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout, "2 3 + 4 *\n");
}

#[test]
fn failure_exits_with_one() {
    let (code, stdout, stderr) = rpncalc(&["2+"]);
    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());
    assert!(stderr.contains("Missing operand"), "stderr was: {stderr}");

    let (code, _, stderr) = rpncalc(&["2+(3"]);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("closing parenthesis"), "stderr was: {stderr}");
}

#[test]
fn file_mode_evaluates_every_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sums.txt");
    fs::write(&path, "1+1\n\n(2+3)*4\n5%2\n").unwrap();

    let (code, stdout, _) = rpncalc(&["--file", path.to_str().unwrap()]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout, "2\n20\n1\n");
}

#[test]
fn file_mode_keeps_going_after_a_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mixed.txt");
    fs::write(&path, "1+\n7*6\n").unwrap();

    let (code, stdout, _) = rpncalc(&["-f", path.to_str().unwrap()]);
    assert_eq!(code, Some(1));
    assert_eq!(stdout, "42\n");
}

#[test]
fn missing_file_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let (code, stdout, stderr) = rpncalc(&["--file", path.to_str().unwrap()]);
    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());
    assert!(stderr.contains("Failed to read"), "stderr was: {stderr}");
}
