use ctltest::{
    config::{OutputStream, RunConfig},
    error::EngineError,
    formatter::{common::color::ColorSetting, json::JsonFormatter},
    runner::{Runner, RunnerState},
};
use pretty_assertions::assert_eq;

mod lib;

use lib::Buffer;

fn runner_with(format: &str) -> (Runner, Buffer, Buffer) {
    let out = Buffer::default();
    let err = Buffer::default();
    let mut runner = Runner::new(RunConfig::new().with_format(format));
    runner.set_output_stream(OutputStream::custom(out.clone()));
    runner.set_error_stream(OutputStream::custom(err.clone()));
    (runner, out, err)
}

#[test]
fn passing_group_is_stamped_and_succeeds() {
    let (mut runner, out, _) = runner_with("progress");
    let group = runner.example_group("sample", |g| {
        g.example("accepts", || assert!(1 < 2));
    });
    runner.add_test(group, "ctl-001", None);

    let group = &runner.tests()[0];
    assert_eq!(group.metadata().id(), Some("ctl-001"));
    assert_eq!(group.examples()[0].metadata.id(), Some("ctl-001"));
    assert_eq!(group.metadata().group_title(), None);

    let report = runner.run().unwrap();
    assert!(report.is_success());
    assert_eq!(report.exit_code(), 0);
    assert_eq!(
        lib::sanitize_duration(&out.try_to_string().unwrap()),
        "\nrunning 1 example\n.\n\n\
         test result: ok. 1 passed; 0 failed; 0 pending; 0 filtered out; finished in <time>\n\n"
    );
}

#[test]
fn failing_group_reports_failure() {
    let (mut runner, out, _) = runner_with("progress");
    let group = runner.example_group("sample", |g| {
        g.example("denies", || Err::<(), _>("denied"));
    });
    runner.add_test(group, "ctl-002", Some("Sample control"));

    let report = runner.run().unwrap();
    assert!(!report.is_success());
    assert_eq!(report.exit_code(), 1);
    assert_eq!(report.records[0].id.as_deref(), Some("ctl-002"));
    assert_eq!(report.records[0].group_title.as_deref(), Some("Sample control"));
    assert_eq!(
        lib::sanitize_duration(&out.try_to_string().unwrap()),
        "\nrunning 1 example\nF\n\n\
         failures:\n\n\
         ---- sample denies [ctl-002] ----\n\
         Error: \"denied\"\n\n\
         failures:\n    sample denies\n\n\
         test result: FAILED. 0 passed; 1 failed; 0 pending; 0 filtered out; finished in <time>\n\n"
    );
}

#[test]
fn empty_runner_succeeds() {
    let (mut runner, out, _) = runner_with("progress");
    let report = runner.run().unwrap();
    assert!(report.is_success());
    assert!(report.records.is_empty());
    assert!(out.try_to_string().unwrap().contains("running 0 examples"));
}

#[test]
fn groups_run_in_registration_order() {
    let (mut runner, _, _) = runner_with("progress");
    for (name, id) in [("third", "c"), ("first", "a"), ("second", "b")] {
        let group = runner.example_group(name, |g| {
            g.example("runs", || ());
        });
        runner.add_test(group, id, None);
    }

    let report = runner.run().unwrap();
    let ids: Vec<_> = report
        .records
        .iter()
        .map(|record| record.id.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(ids, ["c", "a", "b"]);
}

#[test]
fn documentation_output_shows_the_tree() {
    let (mut runner, out, _) = runner_with("documentation");
    let group = runner.example_group("sample", |g| {
        g.example("passes", || ());
        g.group("nested", |g| {
            g.pending("later", "not yet");
        });
    });
    runner.add_test(group, "ctl-001", None);

    let report = runner.run().unwrap();
    assert_eq!(report.passed(), 1);
    assert_eq!(report.pending(), 1);
    assert_eq!(
        lib::sanitize_duration(&out.try_to_string().unwrap()),
        "\nctl-001: sample\n  passes ... ok\n  nested\n    later ... pending, not yet\n\n\
         test result: ok. 1 passed; 0 failed; 1 pending; 0 filtered out; finished in <time>\n\n"
    );
}

#[test]
fn json_output_carries_ids_and_titles() {
    let (mut runner, out, _) = runner_with("json");
    let group = runner.example_group("sample", |g| {
        g.example("passes", || ());
        g.group("nested", |g| {
            g.example("fails", || Err::<(), _>("nope"));
        });
    });
    runner.add_test(group, "ctl-003", Some("Nested control"));
    runner.run().unwrap();

    let json: serde_json::Value = serde_json::from_str(&out.try_to_string().unwrap()).unwrap();
    let examples = json["examples"].as_array().unwrap();
    assert_eq!(examples.len(), 2);
    for example in examples {
        assert_eq!(example["id"], "ctl-003");
        assert_eq!(example["group_title"], "Nested control");
    }
    assert_eq!(examples[1]["full_description"], "sample nested fails");
    assert_eq!(examples[1]["status"], "failed");
    assert_eq!(json["summary"]["failure_count"], 1);
}

#[test]
fn formatter_instances_can_be_added() {
    let (mut runner, out, _) = runner_with("progress");
    runner.add_formatter(Box::new(JsonFormatter::new().with_pretty(true)));
    let group = runner.example_group("sample", |g| {
        g.example("passes", || ());
    });
    runner.add_test(group, "ctl-004", None);
    runner.run().unwrap();

    let output = out.try_to_string().unwrap();
    assert!(output.contains("running 1 example"));
    assert!(output.contains("\"id\": \"ctl-004\""));
}

#[test]
fn unknown_formatter_fails_at_run_time() {
    let (mut runner, out, _) = runner_with("html");
    let group = runner.example_group("sample", |g| {
        g.example("passes", || ());
    });
    runner.add_test(group, "ctl-005", None);

    let err = runner.run().unwrap_err();
    assert!(matches!(err, EngineError::UnknownFormatter(ref name) if name == "html"));
    assert_eq!(out.try_to_string().unwrap(), "");
}

#[test]
fn repeated_runs_rerun_registered_groups() {
    let (mut runner, _, _) = runner_with("progress");
    let group = runner.example_group("sample", |g| {
        g.example("passes", || ());
    });
    runner.add_test(group, "ctl-006", None);

    let first = runner.run().unwrap();
    let second = runner.run().unwrap();
    assert_eq!(first.records.len(), 1);
    assert_eq!(second.records.len(), 1);
    assert_eq!(runner.state(), RunnerState::Ran);
}

#[test]
fn config_from_json_selects_formatter() {
    let conf = RunConfig::from_json(r#"{"format": "documentation", "color": "never"}"#).unwrap();
    let runner = Runner::new(conf);
    assert_eq!(
        runner.engine_config().formatter_names().collect::<Vec<_>>(),
        ["documentation"]
    );
}

#[test]
fn forced_color_paints_the_summary() {
    let out = Buffer::default();
    let conf = RunConfig::new()
        .with_format("documentation")
        .with_color_setting(ColorSetting::Always);
    let mut runner = Runner::new(conf);
    runner.set_output_stream(OutputStream::custom(out.clone()));
    let group = runner.example_group("sample", |g| {
        g.example("passes", || ());
    });
    runner.add_test(group, "ctl-007", None);
    runner.run().unwrap();

    let output = out.try_to_string().unwrap();
    assert!(output.contains("passes ... \x1b[32mok\x1b[0m"));
    assert!(output.contains("test result: \x1b[32mok\x1b[0m. 1 passed"));
}
