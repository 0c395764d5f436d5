use assert_cmd::Command;
use std::io::Write;

fn summarizer_cmd() -> Command {
    let mut cmd = Command::cargo_bin("content-summarizer").unwrap();
    // keep runs on the local path and quiet on stderr
    cmd.env_remove("HUGGINGFACE_API_KEY")
        .env_remove("SUMMARY_ENDPOINT")
        .env_remove("SUMMARY_SENTENCES")
        .env_remove("SUMMARY_TIMEOUT_SECS")
        .env("RUST_LOG", "warn");
    cmd
}

fn document() -> String {
    [
        "The city council approved a new budget for public transit on Monday.",
        "Transit ridership has grown every year since the new bus lanes opened.",
        "Council members debated the transit budget for nearly four hours.",
        "Several residents spoke in favor of extending evening bus service.",
        "The budget also funds repairs to two aging transit stations downtown.",
        "Opponents argued that road maintenance deserved a larger share of funds.",
        "The mayor praised the council for reaching a compromise on transit.",
        "A final vote on the parks budget was postponed until next month.",
        "Local businesses near the stations expect more foot traffic next year.",
        "Officials plan to publish quarterly ridership reports for the public.",
        "The transit agency will hire additional drivers before the winter season.",
        "Construction on the station repairs is scheduled to begin in the spring.",
    ]
    .join(" ")
}

fn parse(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("stdout is json")
}

#[test]
fn summarizes_stdin_locally() {
    let output = summarizer_cmd()
        .write_stdin(document())
        .output()
        .expect("run binary");
    assert!(output.status.success());

    let v = parse(&output.stdout);
    let summary = v["summary"].as_str().unwrap();
    assert!(!summary.is_empty());
    assert_eq!(summary.matches("\n\n").count(), 3);

    let key_points = v["keyPoints"].as_array().unwrap();
    assert!(!key_points.is_empty() && key_points.len() <= 7);
    for point in key_points {
        let point = point.as_str().unwrap();
        assert!(point.len() > 20 && point.len() < 200);
        assert!(summary.contains(point));
    }
}

#[test]
fn short_input_yields_empty_result() {
    let output = summarizer_cmd()
        .write_stdin("Short.")
        .output()
        .expect("run binary");
    assert!(output.status.success());
    assert_eq!(
        parse(&output.stdout),
        serde_json::json!({"summary": "", "keyPoints": []})
    );
}

#[test]
fn reads_input_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(document().as_bytes()).unwrap();

    let from_file = summarizer_cmd()
        .arg(file.path())
        .arg("--pretty")
        .output()
        .expect("run binary");
    assert!(from_file.status.success());

    let from_stdin = summarizer_cmd()
        .write_stdin(document())
        .output()
        .expect("run binary");
    assert_eq!(parse(&from_file.stdout), parse(&from_stdin.stdout));
}

#[test]
fn missing_input_file_fails() {
    summarizer_cmd()
        .arg("/nonexistent/input.txt")
        .assert()
        .failure();
}
