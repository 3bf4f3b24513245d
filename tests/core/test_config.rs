//! Config loading from XDG directories and environment overrides

use markua_index::core::config::Config;
use markua_index::core::xdg::XdgDirs;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const ENV_VARS: [&str; 6] = [
    "MARKUA_INDEX_CONFIG",
    "MARKUA_INDEX_DICTIONARIES_DIR",
    "MARKUA_INDEX_BUILTIN_STOP_WORDS",
    "MARKUA_INDEX_MAX_PHRASE_WORDS",
    "MARKUA_INDEX_OUTPUT_DIR",
    "MARKUA_INDEX_OUTPUT_FILE",
];

fn clear_env_vars() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

fn xdg_in(temp: &TempDir) -> XdgDirs {
    XdgDirs {
        config_dir: temp.path().join("config"),
        data_dir: temp.path().join("data"),
    }
}

#[test]
#[serial]
fn test_load_from_xdg_config_file() {
    clear_env_vars();
    let temp = TempDir::new().unwrap();
    let xdg = xdg_in(&temp);
    fs::create_dir_all(&xdg.config_dir).unwrap();
    fs::write(
        xdg.config_file(),
        "[phrases]\nmax_words = 4\n\n[output]\nfile_name = \"terms.txt\"\n",
    )
    .unwrap();

    let config = Config::load_with_xdg(&xdg).unwrap();

    assert_eq!(config.phrases.max_words, Some(4));
    assert_eq!(config.output.file_name, "terms.txt");
    assert!(config.dictionaries.builtin);
}

#[test]
#[serial]
fn test_shared_dictionaries_used_when_no_local_ones() {
    clear_env_vars();
    let temp = TempDir::new().unwrap();
    let xdg = xdg_in(&temp);
    fs::create_dir_all(xdg.dictionaries_dir()).unwrap();

    let config = Config::load_with_xdg(&xdg).unwrap();

    assert_eq!(config.dictionaries.dir, xdg.dictionaries_dir());
}

#[test]
#[serial]
fn test_env_overrides_config_file() {
    clear_env_vars();
    let temp = TempDir::new().unwrap();
    let xdg = xdg_in(&temp);
    fs::create_dir_all(&xdg.config_dir).unwrap();
    fs::write(xdg.config_file(), "[phrases]\nmax_words = 4\n").unwrap();

    env::set_var("MARKUA_INDEX_MAX_PHRASE_WORDS", "none");
    env::set_var("MARKUA_INDEX_OUTPUT_DIR", "build/index");

    let config = Config::load_with_xdg(&xdg).unwrap();

    assert_eq!(config.phrases.max_words, None);
    assert_eq!(config.output.dir, PathBuf::from("build/index"));

    clear_env_vars();
}

#[test]
#[serial]
fn test_invalid_env_value_fails_validation() {
    clear_env_vars();
    let temp = TempDir::new().unwrap();

    env::set_var("MARKUA_INDEX_OUTPUT_FILE", "nested/index.txt");
    let err = Config::load_with_xdg(&xdg_in(&temp)).unwrap_err();
    clear_env_vars();

    assert!(err.is_bad_input());
}
