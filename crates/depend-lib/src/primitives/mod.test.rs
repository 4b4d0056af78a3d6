use super::*;

// =============================================================================
// LEVEL A: EXHAUSTIVE DATA TYPE TESTING
// =============================================================================

macro_rules! test_enum_completeness {
    ($enum_type:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            for variant in <$enum_type>::value_variants() {
                let name = variant
                    .to_possible_value()
                    .unwrap_or_else(|| panic!("{:?} has no possible value", variant))
                    .get_name()
                    .to_string();
                let parsed: $enum_type = name.parse().unwrap();
                assert_eq!(parsed, *variant, "'{}' should parse back to {:?}", name, variant);
            }
        }
    };
}

macro_rules! test_fromstr_aliases {
    ($enum_type:ty, $test_name:ident, $expected_mappings:expr) => {
        #[test]
        fn $test_name() {
            let mappings: &[(&str, $enum_type)] = &$expected_mappings;
            for (input, expected) in mappings {
                assert_eq!(
                    input.parse::<$enum_type>().ok(),
                    Some(*expected),
                    "'{}' as {}",
                    input,
                    stringify!($enum_type)
                );
            }
        }
    };
}

// Generate exhaustive tests for all ValueEnum types
test_enum_completeness!(LogLevel, test_log_level_completeness);
test_enum_completeness!(LogFormat, test_log_format_completeness);
test_enum_completeness!(LogOutput, test_log_output_completeness);
test_enum_completeness!(ColorIntent, test_color_intent_completeness);
test_enum_completeness!(OutputFormat, test_output_format_completeness);

// Test all documented aliases work correctly
test_fromstr_aliases!(
    LogLevel,
    test_log_level_aliases,
    [
        ("error", LogLevel::Error),
        ("err", LogLevel::Error),
        ("fatal", LogLevel::Error),
        ("critical", LogLevel::Error),
        ("warn", LogLevel::Warning),
        ("warning", LogLevel::Warning),
        ("info", LogLevel::Info),
        ("information", LogLevel::Info),
        ("debug", LogLevel::Debug),
        ("debugging", LogLevel::Debug),
        ("trace", LogLevel::Trace),
        ("tracing", LogLevel::Trace),
        ("verbose", LogLevel::Trace),
    ]
);

test_fromstr_aliases!(
    LogFormat,
    test_log_format_aliases,
    [
        ("text", LogFormat::Text),
        ("txt", LogFormat::Text),
        ("plain", LogFormat::Text),
        ("json", LogFormat::Json),
        ("pretty", LogFormat::Pretty),
        ("human", LogFormat::Pretty),
    ]
);

test_fromstr_aliases!(
    LogOutput,
    test_log_output_aliases,
    [("stderr", LogOutput::Stderr), ("stdout", LogOutput::Stdout),]
);

test_fromstr_aliases!(
    ColorIntent,
    test_color_intent_aliases,
    [
        ("auto", ColorIntent::Auto),
        ("automatic", ColorIntent::Auto),
        ("detect", ColorIntent::Auto),
        ("default", ColorIntent::Auto),
        ("always", ColorIntent::Always),
        ("force", ColorIntent::Always),
        ("on", ColorIntent::Always),
        ("never", ColorIntent::Never),
        ("off", ColorIntent::Never),
    ]
);

test_fromstr_aliases!(
    OutputFormat,
    test_output_format_aliases,
    [
        ("text", OutputFormat::Text),
        ("lines", OutputFormat::Text),
        ("json", OutputFormat::Json),
    ]
);

// =============================================================================
// LEVEL B: COMPLEX IMPLEMENTATION BEHAVIORS/VALIDATIONS
// =============================================================================

#[test]
fn test_log_level_from_verbosity_boundary_conditions() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(1), LogLevel::Warning);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(3), LogLevel::Debug);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);

    // Anything past 4 saturates at Trace
    assert_eq!(LogLevel::from_verbosity(5), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(u8::MAX), LogLevel::Trace);
}

#[test]
fn test_log_level_filter_directives() {
    assert_eq!(LogLevel::Error.as_filter(), "error");
    assert_eq!(LogLevel::Warning.as_filter(), "warn");
    assert_eq!(LogLevel::Trace.as_filter(), "trace");
}

#[test]
fn test_color_intent_explicit_choices_ignore_terminal() {
    assert!(ColorIntent::Always.resolve(LogOutput::Stderr));
    assert!(ColorIntent::Always.resolve(LogOutput::Stdout));
    assert!(!ColorIntent::Never.resolve(LogOutput::Stderr));
    assert!(!ColorIntent::Never.resolve(LogOutput::Stdout));
}

#[test]
fn test_data_types_are_copy() {
    fn assert_copy<T: Copy>() {}

    assert_copy::<LogLevel>();
    assert_copy::<LogFormat>();
    assert_copy::<LogOutput>();
    assert_copy::<ColorIntent>();
    assert_copy::<OutputFormat>();
}

#[test]
fn test_config_error_display() {
    let error = ConfigError::ValidationFailed {
        reason: "log level 9 is out of range 0-4".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Configuration validation failed: log level 9 is out of range 0-4"
    );

    let error = ConfigError::ParseError {
        value: "loud".to_string(),
        reason: "invalid log level".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Failed to parse configuration value 'loud': invalid log level"
    );
}

#[test]
fn test_unknown_value_reports_parse_error() {
    let parsed: Result<LogFormat, _> = "yaml".parse();
    assert!(matches!(parsed, Err(ConfigError::ParseError { .. })));
}
