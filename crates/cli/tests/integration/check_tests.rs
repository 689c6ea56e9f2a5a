use predicates::prelude::*;

use super::common::{TestEnv, VALID_LOCK};

#[test]
fn check_without_lock_file_succeeds() {
  let env = TestEnv::empty();

  env
    .vlock_cmd()
    .arg("check")
    .assert()
    .success()
    .stdout(predicate::str::contains("No lock file"));
}

#[test]
fn check_valid_lock_file() {
  let env = TestEnv::with_valid_lock();

  env
    .vlock_cmd()
    .arg("check")
    .assert()
    .success()
    .stdout(predicate::str::contains("is consistent (2 repos, 2 profiles)"));
}

#[test]
fn check_reports_missing_directory() {
  let env = TestEnv::empty();
  env.add_repos("github.com/tyru/caw.vim");
  env.write_lock(VALID_LOCK);

  env
    .vlock_cmd()
    .arg("check")
    .assert()
    .failure()
    .stderr(predicate::str::contains("(repos[1].path) doesn't exist on filesystem"));
}

#[test]
fn check_reports_duplicate_profile() {
  let env = TestEnv::with_valid_lock();
  env.write_lock(&VALID_LOCK.replace("\"name\": \"minimal\"", "\"name\": \"default\""));

  env
    .vlock_cmd()
    .arg("check")
    .assert()
    .failure()
    .stderr(predicate::str::contains("duplicate profile 'default'"));
}

#[test]
fn check_reports_parse_error() {
  let env = TestEnv::empty();
  env.write_lock("not json");

  env
    .vlock_cmd()
    .arg("check")
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to parse lock file"));
}

#[test]
fn volt_path_flag_overrides_env() {
  let env = TestEnv::with_valid_lock();
  let other = TestEnv::empty();

  other
    .vlock_cmd()
    .arg("--volt-path")
    .arg(env.root_path())
    .arg("check")
    .assert()
    .success()
    .stdout(predicate::str::contains("is consistent"));
}

#[test]
fn check_reports_error_once() {
  let env = TestEnv::with_valid_lock();
  env.write_lock(&VALID_LOCK.replace("\"name\": \"minimal\"", "\"name\": \"default\""));

  let output = env.vlock_cmd().arg("check").output().unwrap();

  assert_eq!(output.status.code(), Some(1));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("duplicate profile 'default'"), "{stderr}");
  assert!(!stderr.contains("Error:"), "{stderr}");
}

#[test]
fn check_reports_null_version_as_missing() {
  let env = TestEnv::with_valid_lock();
  env.write_lock(&VALID_LOCK.replacen("\"version\": 1,", "\"version\": null,", 1));

  env
    .vlock_cmd()
    .arg("check")
    .assert()
    .failure()
    .stderr(predicate::str::contains("missing: version"));
}
