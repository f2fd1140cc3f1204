//! End-to-end resolution and toggle scenarios through the public API.

use m6_theme::{
    reset_ambient_detector, set_ambient_detector, ClassList, FileStorage, FixedAmbient,
    MemoryStorage, PreferenceStore, StorageKey, SystemAmbient, ThemePreference, ThemeToggle,
    DARK_CLASS,
};
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn test_ambient_dark_with_empty_storage() {
    let storage = MemoryStorage::new();
    let root = ClassList::new();
    let store = PreferenceStore::new(storage.clone(), root.clone(), FixedAmbient::dark());

    let theme = ThemeToggle::mount(store, StorageKey::default());

    assert!(theme.state().is_dark_mode);
    assert_eq!(storage.peek("m6-ui-theme").as_deref(), Some("true"));
    assert!(root.contains(DARK_CLASS));
}

#[test]
fn test_stored_false_ignores_ambient() {
    let storage = MemoryStorage::new().with_entry("m6-ui-theme", "false");
    let root = ClassList::new();
    let store = PreferenceStore::new(storage.clone(), root.clone(), FixedAmbient::dark());

    let theme = ThemeToggle::mount(store, StorageKey::default());

    assert!(!theme.state().is_dark_mode);
    assert_eq!(storage.peek("m6-ui-theme").as_deref(), Some("false"));
    assert!(!root.contains(DARK_CLASS));
}

#[test]
fn test_bootstrap_marker_overrides_stored_light() {
    let storage = MemoryStorage::new().with_entry("m6-ui-theme", "false");
    let root = ClassList::new().with_class(DARK_CLASS);
    let store = PreferenceStore::new(storage.clone(), root.clone(), FixedAmbient::light());

    let theme = ThemeToggle::mount(store, StorageKey::default());

    assert!(theme.state().is_dark_mode);
    // The mount effect brings storage back in line with the marker.
    assert_eq!(storage.peek("m6-ui-theme").as_deref(), Some("true"));
}

#[test]
fn test_toggle_round_trip() {
    let storage = MemoryStorage::new();
    let root = ClassList::new();
    let store = PreferenceStore::new(storage.clone(), root.clone(), FixedAmbient::light());
    let mut theme = ThemeToggle::mount(store, StorageKey::default());
    let button = theme.toggler();
    let writes_after_mount = storage.write_count();

    button.toggle_dark_mode();
    theme.flush();
    assert!(theme.state().is_dark_mode);
    assert_eq!(storage.write_count(), writes_after_mount + 1);
    assert_eq!(storage.peek("m6-ui-theme").as_deref(), Some("true"));

    button.toggle_dark_mode();
    theme.flush();
    assert!(!theme.state().is_dark_mode);
    assert_eq!(storage.write_count(), writes_after_mount + 2);
    assert_eq!(storage.peek("m6-ui-theme").as_deref(), Some("false"));
    assert!(!root.contains(DARK_CLASS));
}

#[test]
fn test_instances_with_distinct_keys_coexist() {
    let storage = MemoryStorage::new();
    let editor_key = StorageKey::new("editor-theme").unwrap();
    let docs_key = StorageKey::new("docs-theme").unwrap();

    let mut editor = ThemeToggle::mount(
        PreferenceStore::new(storage.clone(), ClassList::new(), FixedAmbient::light()),
        editor_key,
    );
    let docs = ThemeToggle::mount(
        PreferenceStore::new(storage.clone(), ClassList::new(), FixedAmbient::light()),
        docs_key,
    );

    editor.toggle_dark_mode();
    editor.flush();

    assert!(editor.state().is_dark_mode);
    assert!(!docs.state().is_dark_mode);
    assert_eq!(storage.peek("editor-theme").as_deref(), Some("true"));
    assert_eq!(storage.peek("docs-theme").as_deref(), Some("false"));
}

#[test]
fn test_instances_sharing_a_key_last_write_wins() {
    let storage = MemoryStorage::new();
    let root = ClassList::new();
    let mount = || {
        ThemeToggle::mount(
            PreferenceStore::new(storage.clone(), root.clone(), FixedAmbient::light()),
            StorageKey::default(),
        )
    };
    let mut header = mount();
    let mut sidebar = mount();

    header.toggle_dark_mode();
    header.flush();
    assert_eq!(storage.peek("m6-ui-theme").as_deref(), Some("true"));
    assert!(root.contains(DARK_CLASS));

    // The sidebar never saw the header's change and flips from its own light.
    sidebar.toggle_dark_mode();
    sidebar.toggle_dark_mode();
    sidebar.flush();
    assert!(header.state().is_dark_mode);
    assert!(!sidebar.state().is_dark_mode);
    assert_eq!(storage.peek("m6-ui-theme").as_deref(), Some("false"));
    assert!(!root.contains(DARK_CLASS));

    header.toggle_dark_mode();
    header.flush();
    sidebar.toggle_dark_mode();
    sidebar.flush();
    assert!(!header.state().is_dark_mode);
    assert!(sidebar.state().is_dark_mode);
    assert_eq!(storage.peek("m6-ui-theme").as_deref(), Some("true"));
    assert!(root.contains(DARK_CLASS));
}

#[test]
fn test_preference_survives_remount_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");

    let mut first = ThemeToggle::mount(
        PreferenceStore::new(FileStorage::new(&path), ClassList::new(), FixedAmbient::light()),
        StorageKey::default(),
    );
    first.toggle_dark_mode();
    first.flush();
    drop(first);

    let second = ThemeToggle::mount(
        PreferenceStore::new(FileStorage::new(&path), ClassList::new(), FixedAmbient::light()),
        StorageKey::default(),
    );
    assert_eq!(second.preference(), ThemePreference::Dark);
}

#[test]
fn test_corrupt_file_falls_back_to_ambient() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "not json").unwrap();

    let root = ClassList::new();
    let theme = ThemeToggle::mount(
        PreferenceStore::new(FileStorage::new(&path), root.clone(), FixedAmbient::dark()),
        StorageKey::default(),
    );

    assert!(theme.state().is_dark_mode);
    assert!(root.contains(DARK_CLASS));
}

#[test]
#[serial]
fn test_system_ambient_follows_detector() {
    set_ambient_detector(|| Some(ThemePreference::Dark));
    let theme = ThemeToggle::mount(
        PreferenceStore::new(MemoryStorage::new(), ClassList::new(), SystemAmbient),
        StorageKey::default(),
    );
    assert!(theme.state().is_dark_mode);

    set_ambient_detector(|| None);
    let theme = ThemeToggle::mount(
        PreferenceStore::new(MemoryStorage::new(), ClassList::new(), SystemAmbient),
        StorageKey::default(),
    );
    assert!(!theme.state().is_dark_mode);

    reset_ambient_detector();
}
