//! Strict runs surface configuration problems instead of disabling handlers.

use switchboard::{ConfigError, SwitchboardError, run_strict};

mod common;
use common::{handlers_xml, write_config};

#[test]
fn valid_configuration_dispatches() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), &handlers_xml(&["Foo", "Qux"]));

    let invoked = run_strict(dir.path().join("handlers.xml")).unwrap();
    assert_eq!(invoked, 2);
}

#[test]
fn doctype_configuration_dispatches() {
    let dir = tempfile::tempdir().unwrap();
    write_config(
        dir.path(),
        "<?xml version=\"1.0\"?>\n<!DOCTYPE Handlers>\n<Handlers><Bar enable=\"true\"/></Handlers>\n",
    );

    let invoked = run_strict(dir.path().join("handlers.xml")).unwrap();
    assert_eq!(invoked, 1);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = run_strict(dir.path().join("handlers.xml")).unwrap_err();
    assert!(matches!(
        err,
        SwitchboardError::Config(ConfigError::Io { .. })
    ));
}

#[test]
fn bad_flag_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), "<Handlers><Foo enable=\"maybe\"/></Handlers>");

    let err = run_strict(dir.path().join("handlers.xml")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "configuration error: invalid `enable` value \"maybe\" on element `Foo`"
    );
}
