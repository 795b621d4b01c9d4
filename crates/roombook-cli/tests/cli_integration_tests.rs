use assert_cmd::Command;
use predicates::prelude::*;

// Base URL pointing at a closed local port: commands that are supposed to
// fail locally must fail before any connection is attempted, so the address
// is never actually contacted by passing tests.
const UNREACHABLE: &str = "http://127.0.0.1:9";

fn roombook() -> Command {
    Command::cargo_bin("roombook").unwrap()
}

#[test]
fn test_cli_version() {
    roombook()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("roombook"));
}

#[test]
fn test_cli_help_lists_namespaces() {
    roombook()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("room"))
        .stdout(predicate::str::contains("booking"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_room_help_lists_operations() {
    roombook()
        .args(["room", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("edit"))
        .stdout(predicate::str::contains("rm"));
}

#[test]
fn test_no_subcommand_shows_guidance() {
    roombook()
        .assert()
        .success()
        .stdout(predicate::str::contains("roombook room list"));
}

#[test]
fn test_booking_add_rejects_end_before_start_locally() {
    roombook()
        .args([
            "--base-url",
            UNREACHABLE,
            "booking",
            "add",
            "--room",
            "1",
            "--booker",
            "Salma",
            "--purpose",
            "Meeting",
            "--start",
            "2025-01-01T10:00",
            "--end",
            "2025-01-01T09:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("End time must be after start time."));
}

#[test]
fn test_booking_add_rejects_unparsable_time_locally() {
    roombook()
        .args([
            "--base-url",
            UNREACHABLE,
            "booking",
            "add",
            "--room",
            "1",
            "--booker",
            "Salma",
            "--purpose",
            "Meeting",
            "--start",
            "whenever",
            "--end",
            "2025-01-01T09:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time"));
}

#[test]
fn test_room_add_rejects_zero_capacity_locally() {
    roombook()
        .args([
            "--base-url",
            UNREACHABLE,
            "room",
            "add",
            "--name",
            "Lab A",
            "--location",
            "Building X",
            "--capacity",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Capacity must be a positive number."));
}

#[test]
fn test_booking_list_filters_are_mutually_exclusive() {
    roombook()
        .args([
            "--base-url",
            UNREACHABLE,
            "booking",
            "list",
            "--status",
            "pending",
            "--date",
            "2026-02-15",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_booking_list_rejects_bad_date_locally() {
    roombook()
        .args([
            "--base-url",
            UNREACHABLE,
            "booking",
            "list",
            "--date",
            "15/02/2026",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_network_failure_is_reported_not_fatal() {
    roombook()
        .args(["--base-url", UNREACHABLE, "room", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch rooms."));
}
