use record_cards::config::{CardSettings, ConfigError, Pixels, StyleConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write config");
    file
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = CardSettings::config_path();
    assert!(path.ends_with("record-cards/config.toml"));
}

#[test]
fn test_default_settings_resolve_to_defaults() {
    let style = StyleConfig::resolve(&CardSettings::default());
    assert_eq!(style.display_field, "Name");
    assert_eq!(style.selected_color, "#53c4ee");
    assert_eq!(style.unselected_color, "#ecebea");
    assert_eq!(style.card_min_width, 100);
    assert_eq!(style.card_max_width, 200);
    assert_eq!(style.card_font_size, 13);
    assert_eq!(style.header_text, "Select Records");
    assert_eq!(style.sub_header_text, "Click cards to toggle selection");
    assert!(!style.selection_locked);
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r##"
displayFieldApiName = "Title"
selectedColor = "#000000"
cardMinWidth = 120
cardMaxWidth = "300"
headerText = "Pick contacts"
selectionLocked = true
"##,
    );

    let settings = CardSettings::load_from(file.path()).expect("config should load");
    assert_eq!(settings.display_field_api_name.as_deref(), Some("Title"));
    assert_eq!(settings.card_min_width, Some(Pixels::Number(120)));
    assert_eq!(settings.card_max_width, Some(Pixels::Text("300".to_string())));

    let style = StyleConfig::resolve(&settings);
    assert_eq!(style.selected_color, "#000000");
    assert_eq!(style.unselected_color, "#ecebea");
    assert_eq!(style.card_max_width, 300);
    assert_eq!(style.header_text, "Pick contacts");
    assert!(style.selection_locked);
}

#[test]
fn test_empty_file_is_default() {
    let file = write_config("");
    let settings = CardSettings::load_from(file.path()).expect("empty config should load");
    assert_eq!(settings, CardSettings::default());
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let result = CardSettings::load_from(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let file = write_config("selectedColor = ");
    let result = CardSettings::load_from(file.path());
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_non_numeric_width_fails_validation() {
    let file = write_config(r#"cardMinWidth = "wide""#);
    match CardSettings::load_from(file.path()) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("cardMinWidth"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_min_width_above_max_fails_validation() {
    let settings = CardSettings {
        card_min_width: Some(Pixels::Number(500)),
        ..CardSettings::default()
    };
    match settings.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("greater than cardMaxWidth"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_blank_values_pass_validation_and_fall_back() {
    let file = write_config(
        r#"
selectedColor = ""
cardFontSize = ""
"#,
    );
    let settings = CardSettings::load_from(file.path()).expect("blank values are allowed");
    let style = StyleConfig::resolve(&settings);
    assert_eq!(style.selected_color, "#53c4ee");
    assert_eq!(style.card_font_size, 13);
}
