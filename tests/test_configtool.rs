use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::tempdir;
use wowgen::configtool::{prompt_input, Preferences, CONFIG_FILE};
use wowgen::commands::config::init_config_at;
use wowgen::passgen::PRESET_LENGTH;

#[test]
fn test_defaults() {
    let prefs = Preferences::default();
    assert_eq!(prefs.default_length, 12);
    assert_eq!(prefs.preset_length, PRESET_LENGTH);
    assert_eq!(prefs.word_count, 4);
    assert_eq!(prefs.separator, "-");
    assert!(prefs.wordlist.is_none());
    assert!(prefs.show_strength);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempdir().expect("Failed to create temp directory");
    let prefs = Preferences::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
    assert_eq!(prefs, Preferences::default());
}

#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("nested").join(CONFIG_FILE);
    let prefs = Preferences {
        default_length: 20,
        separator: "_".to_string(),
        wordlist: Some(PathBuf::from("/usr/share/dict/words")),
        show_strength: false,
        ..Default::default()
    };
    prefs.save_to(&path).unwrap();
    assert_eq!(Preferences::load_from(&path).unwrap(), prefs);
}

#[test]
fn test_partial_file_uses_field_defaults() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, r#"{ "word_count": 6 }"#).unwrap();

    let prefs = Preferences::load_from(&path).unwrap();
    assert_eq!(prefs.word_count, 6);
    assert_eq!(prefs.separator, "-");
    assert_eq!(prefs.default_length, 12);
}

#[test]
fn test_invalid_json_is_error() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "not json").unwrap();
    assert!(Preferences::load_from(&path).is_err());
}

#[test]
fn test_resolve_wordlist_order() {
    let mut prefs = Preferences::default();
    let flag = PathBuf::from("flag.txt");
    assert_eq!(prefs.resolve_wordlist(Some(flag.clone())), flag);

    prefs.wordlist = Some(PathBuf::from("prefs.txt"));
    assert_eq!(prefs.resolve_wordlist(None), PathBuf::from("prefs.txt"));
    assert_eq!(prefs.resolve_wordlist(Some(flag.clone())), flag);

    prefs.wordlist = None;
    assert!(prefs.resolve_wordlist(None).ends_with("wordlist.txt"));
}

#[test]
fn test_prompt_input_trims() {
    let mut input = Cursor::new("  hello  \n");
    let mut output = Vec::new();
    let answer = prompt_input(&mut input, &mut output, "Say: ").unwrap();
    assert_eq!(answer, "hello");
    assert_eq!(String::from_utf8(output).unwrap(), "Say: ");
}

#[test]
fn test_garbage_file_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "garbage").unwrap();

    assert!(Preferences::load_from(&path).is_err());
    assert_eq!(Preferences::load_from_or_default(&path), Preferences::default());
}

#[test]
fn test_init_config_overwrites_only_with_force() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("wowgen").join(CONFIG_FILE);

    // 首次写入
    assert!(init_config_at(&path, false).unwrap());
    assert_eq!(Preferences::load_from(&path).unwrap(), Preferences::default());

    fs::write(&path, "garbage").unwrap();
    assert!(!init_config_at(&path, false).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), "garbage");

    assert!(init_config_at(&path, true).unwrap());
    assert_eq!(Preferences::load_from(&path).unwrap(), Preferences::default());
}
