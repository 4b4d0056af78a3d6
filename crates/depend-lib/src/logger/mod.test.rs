use super::*;
use clap::ValueEnum;

#[test]
fn test_filter_directives_scope_depend_crates() {
    assert_eq!(
        Logger::filter_directives(LogLevel::Debug),
        "warn,depend=debug,depend_lib=debug"
    );
    assert_eq!(
        Logger::filter_directives(LogLevel::Error),
        "warn,depend=error,depend_lib=error"
    );
}

#[test]
fn test_filter_directives_parse() {
    for level in LogLevel::value_variants() {
        let directives = Logger::filter_directives(*level);
        assert!(EnvFilter::try_new(&directives).is_ok(), "{}", directives);
    }
}

#[test]
fn test_logger_global_matches_initialized_flag() {
    assert_eq!(Logger::is_initialized(), Logger::global().is_some());
}
