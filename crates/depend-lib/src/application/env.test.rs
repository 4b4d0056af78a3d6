use super::*;

fn env_with(configure: impl FnOnce(&mut EnvironmentConfig)) -> EnvironmentConfig {
    let mut env = EnvironmentConfig::default();
    configure(&mut env);
    env
}

#[test]
fn test_empty_environment_has_no_override() {
    assert_eq!(EnvironmentConfig::default().color_override(), None);
}

#[test]
fn test_no_color_disables() {
    let env = env_with(|e| e.no_color = Some("1".to_string()));
    assert_eq!(env.color_override(), Some(ColorIntent::Never));
}

#[test]
fn test_empty_no_color_is_ignored() {
    let env = env_with(|e| e.no_color = Some(String::new()));
    assert_eq!(env.color_override(), None);
}

#[test]
fn test_clicolor_zero_disables() {
    let env = env_with(|e| e.clicolor = Some("0".to_string()));
    assert_eq!(env.color_override(), Some(ColorIntent::Never));

    let env = env_with(|e| e.clicolor = Some("1".to_string()));
    assert_eq!(env.color_override(), None);
}

#[test]
fn test_force_color_beats_no_color() {
    let env = env_with(|e| {
        e.clicolor = Some("0".to_string());
        e.no_color = Some("1".to_string());
        e.force_color = Some("1".to_string());
    });
    assert_eq!(env.color_override(), Some(ColorIntent::Always));
}

#[test]
fn test_ci_beats_force_color() {
    let env = env_with(|e| {
        e.ci = Some("true".to_string());
        e.force_color = Some("1".to_string());
    });
    assert_eq!(env.color_override(), Some(ColorIntent::Never));
}

#[test]
fn test_unrecognised_force_color_falls_through() {
    let env = env_with(|e| {
        e.force_color = Some("loud".to_string());
        e.no_color = Some("1".to_string());
    });
    assert_eq!(env.color_override(), Some(ColorIntent::Never));
}
