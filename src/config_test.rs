use super::*;

#[test]
fn default_matches_published_site() {
    let config = SiteConfig::default();
    assert_eq!(config.contact_email, "a14studio.cba@gmail.com");
    assert_eq!(config.contact_subject, "Consulta desde la web A14 Studio");
    assert_eq!(config.theme_storage_key, "a14_theme");
    assert_eq!(config.theme_color_light, "#ff5a00");
    assert_eq!(config.theme_color_dark, "#0f1215");
}

#[test]
fn blank_json_is_default() {
    assert_eq!(SiteConfig::from_json("  \n").unwrap(), SiteConfig::default());
}

#[test]
fn partial_json_keeps_other_defaults() {
    let config = SiteConfig::from_json(r#"{ "whatsapp_number": "+54 9 351 555-0101" }"#).unwrap();
    assert_eq!(config.whatsapp_number, "+54 9 351 555-0101");
    assert_eq!(config.contact_email, DEFAULT_CONTACT_EMAIL);
    assert_eq!(config.theme_storage_key, DEFAULT_THEME_STORAGE_KEY);
}

#[test]
fn malformed_json_is_an_error() {
    let err = SiteConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn malformed_json_falls_back_to_default() {
    assert_eq!(SiteConfig::from_json_or_default(Some("[1, 2")), SiteConfig::default());
    assert_eq!(SiteConfig::from_json_or_default(None), SiteConfig::default());
}

#[test]
fn whatsapp_digits_strips_formatting() {
    let config = SiteConfig { whatsapp_number: "+54 9 351-000 0000".into(), ..SiteConfig::default() };
    assert_eq!(config.whatsapp_digits(), "5493510000000");
}

#[test]
fn log_level_parses_or_defaults_to_info() {
    let debug = SiteConfig { log_level: "debug".into(), ..SiteConfig::default() };
    assert_eq!(debug.log_level(), log::Level::Debug);
    let junk = SiteConfig { log_level: "loud".into(), ..SiteConfig::default() };
    assert_eq!(junk.log_level(), log::Level::Info);
}
