use super::*;

#[test]
fn default_config_has_expected_tick_rate() {
    let config = AppConfig::default();
    assert_eq!(config.tick_rate_ms(), 250);
}

#[test]
fn default_config_has_all_general_fields() {
    let config = AppConfig::default();
    assert_eq!(config.general.refresh_interval_ms, 2000);
    assert_eq!(config.general.fetch_timeout_ms, 5000);
    assert_eq!(config.general.default_view, "containers");
    assert!(config.general.show_all_containers);
    assert_eq!(config.refresh_interval(), Duration::from_secs(2));
    assert_eq!(config.fetch_timeout(), Duration::from_secs(5));
}

#[test]
fn embedded_defaults_match_struct_defaults() {
    let config = AppConfig::default();
    let general = GeneralConfig::default();
    assert_eq!(config.general.tick_rate_ms, general.tick_rate_ms);
    assert_eq!(config.general.default_view, general.default_view);
    assert_eq!(config.theme.accent, ThemeConfig::default().accent);
    assert_eq!(config.theme.status.failed, ThemeConfig::default().status.failed);
    assert_eq!(config.theme.selection.bg, ThemeConfig::default().selection.bg);
}

#[test]
fn docker_host_empty_means_environment() {
    let config = AppConfig::default();
    assert_eq!(config.docker.host(), None);

    let raw = r#"
[docker]
host = "tcp://10.0.0.5:2375"
"#;
    let config: AppConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.docker.host(), Some("tcp://10.0.0.5:2375"));
}

#[test]
fn parse_general_from_toml() {
    let raw = r#"
[general]
tick_rate_ms = 100
default_view = "volumes"
"#;
    let config: AppConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.general.tick_rate_ms, 100);
    assert_eq!(config.general.default_view, "volumes");
    assert_eq!(config.general.refresh_interval_ms, 2000);
}

#[test]
fn kebab_case_aliases_are_accepted() {
    let raw = r#"
[general]
tick-rate-ms = 120
show-all-containers = false

[theme]
text-dim = "gray"

[theme.selection]
fg = "white"
bg = "blue"
"#;
    let config: AppConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.general.tick_rate_ms, 120);
    assert!(!config.general.show_all_containers);
    assert_eq!(config.theme.text_dim, "gray");
    assert_eq!(config.theme.selection.bg, "blue");
    assert_eq!(config.theme.header.bg, "#1e1e2e");
}

#[test]
fn partial_toml_only_general_merges_with_defaults() {
    let mut base = AppConfig::default();
    let user_toml = r#"
[general]
tick_rate_ms = 500
"#;
    let user: AppConfig = toml::from_str(user_toml).unwrap();
    base.merge(user);

    assert_eq!(base.general.tick_rate_ms, 500);
    assert!(!base.keybindings.global.is_empty());
    assert_eq!(base.keybindings.global.get("quit").unwrap(), "q");
}

#[test]
fn keybinding_override_keeps_other_defaults() {
    let mut base = AppConfig::default();
    let user_toml = r#"
[keybindings.navigation]
down = "n"
"#;
    let user: AppConfig = toml::from_str(user_toml).unwrap();
    base.merge(user);

    assert_eq!(base.keybindings.navigation.get("down").unwrap(), "n");
    assert_eq!(base.keybindings.navigation.get("up").unwrap(), "k");
    assert_eq!(base.keybindings.global.get("filter").unwrap(), "/");
}

#[test]
fn default_keybindings_are_valid_and_collision_free() {
    let config = AppConfig::default();
    assert!(validate_keybindings(&config.keybindings).is_empty());
    assert!(check_collisions(&config.keybindings).is_empty());
}

#[test]
fn save_then_load_from_preserves_values() {
    let dir = std::env::temp_dir().join(format!("docktile-config-test-{}", std::process::id()));
    let path = dir.join("config.toml");

    let mut config = AppConfig::default();
    config.general.refresh_interval_ms = 750;
    config.keybindings.global.insert("quit".into(), "ctrl+q".into());
    config.save(&path).unwrap();

    let loaded = AppConfig::load_from(&path).unwrap();
    assert_eq!(loaded.general.refresh_interval_ms, 750);
    assert_eq!(loaded.keybindings.global.get("quit").unwrap(), "ctrl+q");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn load_from_missing_file_is_an_error() {
    let path = std::env::temp_dir().join("docktile-definitely-missing").join("config.toml");
    assert!(AppConfig::load_from(&path).is_err());
}

#[test]
fn default_path_ends_with_docktile_config() {
    let path = AppConfig::default_path();
    assert!(path.ends_with("docktile/config.toml"));
}
