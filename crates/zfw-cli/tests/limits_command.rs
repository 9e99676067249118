use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::str::contains;

fn prepare_command() -> Command {
    let mut cmd = cargo_bin_cmd!("zfw-cli");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env_remove("ZFW_FORMAT");
    cmd
}

#[test]
fn lists_payload_limits_and_standard_weights() {
    let mut cmd = prepare_command();
    cmd.arg("limits");

    cmd.assert()
        .success()
        .stdout(contains("Max pax + cargo (lb)"))
        .stdout(contains("CJ2"))
        .stdout(contains("1086"))
        .stdout(contains("1550"))
        .stdout(contains("2104"))
        .stdout(contains("Standard passenger weights (lb)"))
        .stdout(contains("199"))
        .stdout(contains("Default cargo: 30 lb per passenger"));
}

#[test]
fn limits_as_json() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "json", "limits"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");

    let limits = value["payload_limits"].as_array().expect("array");
    assert_eq!(limits.len(), 3);
    assert_eq!(limits[2]["aircraft"], "Embraer");
    assert_eq!(limits[2]["summer_lb"], 2116);
    assert_eq!(value["standard_weights"][1]["season"], "Winter");
    assert_eq!(value["standard_weights"][1]["female"], 165);
    assert_eq!(value["default_cargo_per_passenger_lb"], 30);
}
