//! Library integration tests.

use accelgate::GateError;

#[test]
fn error_types_are_public() {
    let err = GateError::AccelerationRequired {
        module: "openblas".into(),
    };
    assert!(err.to_string().contains("openblas"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> accelgate::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn has_array_support_never_fails() {
    let first = accelgate::has_array_support();
    let second = accelgate::has_array_support();
    assert_eq!(first, second);
}

#[test]
fn cli_types_are_public() {
    use accelgate::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["accelgate", "probe", "--json"]);
    if let Some(Commands::Probe(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Probe command");
    }
}
