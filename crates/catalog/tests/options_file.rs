use modshot_catalog::ModCatalog;
use modshot_common::config::AppConfig;
use modshot_common::error::ModshotError;

#[test]
fn missing_options_file_gives_default_options() {
    let tmp = tempfile::tempdir().unwrap();
    let config = AppConfig::in_dir(tmp.path());

    let catalog = ModCatalog::load(&config.options_file).expect("missing file is not an error");
    assert!(catalog.is_empty());

    let options = catalog.options_for(config.inputs_dir.join("bar7.png"), &config);
    assert_eq!(options.identifier(), Some("bar"));
    assert!(!options.has_text());
    assert_eq!(
        options.logo_path(&config),
        Some(tmp.path().join("logos").join("bar.png"))
    );
}

#[test]
fn options_file_is_loaded_from_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let config = AppConfig::in_dir(tmp.path());
    std::fs::write(
        &config.options_file,
        "mods:\n  foo:\n    text: Foo Mod\n    logo: ./logos/{id}.png\n",
    )
    .unwrap();

    let catalog = ModCatalog::load(&config.options_file).unwrap();
    let options = catalog.options_for("Foo12.png", &config);
    assert_eq!(options.identifier(), Some("Foo"));
    assert_eq!(options.display_text(), Some("Foo Mod"));
    assert_eq!(
        options.logo_path(&config),
        Some(tmp.path().join("./logos/Foo.png"))
    );
}

#[test]
fn malformed_options_file_fails_with_path() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("Screenshots.yaml");
    std::fs::write(&path, "mods:\n  foo:\n    text: [unterminated\n").unwrap();

    let err = ModCatalog::load(&path).unwrap_err();
    match &err {
        ModshotError::Config { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("expected a config error, got {other:?}"),
    }
    assert!(err.to_string().contains(&*path.to_string_lossy()));
}
