//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed cwd and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use skin_config::{ConfigError, SkinConfig};
use std::path::Path;

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_limit = 50
default_user = "asha"

[database]
path = "data/skin.db"

[checkout]
tax_rate_bps = 500
currency = "USD"

[progress]
history_limit = 14
"#,
        )?;

        let config: SkinConfig = Figment::from(Serialized::defaults(SkinConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_limit, 50);
        assert_eq!(config.general.default_user, "asha");
        assert_eq!(config.database.path, "data/skin.db");
        assert_eq!(config.checkout.tax_rate_bps, 500);
        assert_eq!(config.checkout.currency, "USD");
        assert_eq!(config.progress.history_limit, 14);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[checkout]
currency = "EUR"
"#,
        )?;

        let config: SkinConfig = Figment::from(Serialized::defaults(SkinConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.checkout.currency, "EUR");
        assert_eq!(config.checkout.tax_rate_bps, 1800);
        assert_eq!(config.general.default_user, "local");
        Ok(())
    });
}

#[test]
fn project_config_is_read_from_state_dir() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.create_dir(".skinsense")?;
        jail.create_file(
            ".skinsense/config.toml",
            r#"
[general]
default_limit = 5
"#,
        )?;

        let config = SkinConfig::load_for_project(Path::new(".")).expect("config loads");
        assert_eq!(config.general.default_limit, 5);

        let config = SkinConfig::load_for_project(jail.directory()).expect("config loads");
        assert_eq!(config.general.default_limit, 5);
        Ok(())
    });
}

#[test]
fn load_rejects_excessive_tax_rate() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.create_dir(".skinsense")?;
        jail.create_file(
            ".skinsense/config.toml",
            r#"
[checkout]
tax_rate_bps = 25000
"#,
        )?;

        let err = SkinConfig::load_for_project(jail.directory()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert!(err.to_string().contains("checkout.tax_rate_bps"));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.create_dir(".skinsense")?;
        jail.create_file(".skinsense/config.toml", "[general\ndefault_limit = ")?;

        let err = SkinConfig::load_for_project(jail.directory()).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
