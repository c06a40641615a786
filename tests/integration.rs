// SPDX-License-Identifier: MPL-2.0
use brook_portal::app::Portal;
use brook_portal::config::{self, Config};
use brook_portal::i18n::I18n;
use brook_portal::routes::RouteName;
use brook_portal::storage::{FileStorage, Storage, IS_DARK_KEY, LOCALE_KEY, TOKEN_KEY};
use brook_portal::ui::modal::ModalOptions;
use brook_portal::ui::notifications::ToastKind;
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &config_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded, english);
    let i18n = I18n::new(None, &loaded, None);
    assert_eq!(i18n.current_locale().to_string(), "en-US");

    let mut chinese = Config::default();
    chinese.general.language = Some("zh-CN".to_string());
    config::save_to_path(&chinese, &config_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded, None);
    assert_eq!(i18n.current_locale().to_string(), "zh-CN");
    assert_eq!(i18n.tr("common-cancel"), "取消");
}

#[test]
fn test_preferences_survive_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let storage_path = dir.path().join("storage.json");
    let mut config = Config::default();
    config.general.language = Some("zh-CN".to_string());

    {
        let storage: Arc<dyn Storage> =
            Arc::new(FileStorage::open(&storage_path).expect("Failed to open storage"));
        let i18n = I18n::new(None, &config, Some(storage.clone()));
        assert!(i18n.set_locale(&"en-US".parse().unwrap()));
        storage.set_item(TOKEN_KEY, "session");
        storage.set_item(IS_DARK_KEY, "true");
    }

    let storage = FileStorage::open(&storage_path).expect("Failed to reopen storage");
    assert_eq!(storage.get_item(LOCALE_KEY).as_deref(), Some("en-US"));
    assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some("session"));

    // The stored locale wins over the configured one.
    let i18n = I18n::new(None, &config, Some(Arc::new(storage)));
    assert!(i18n.is_english());
}

#[tokio::test]
async fn test_portal_restores_session_from_file_storage() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let storage_path = dir.path().join("storage.json");
    {
        let storage = FileStorage::open(&storage_path).expect("Failed to open storage");
        storage.set_item(TOKEN_KEY, "session");
        storage.set_item(IS_DARK_KEY, "true");
    }

    let storage = Arc::new(FileStorage::open(&storage_path).expect("Failed to reopen storage"));
    let portal = Portal::with_storage(Some("en-US".into()), Config::default(), storage)
        .expect("Failed to build portal");

    assert!(portal.is_authenticated());
    assert_eq!(portal.router().current().name, RouteName::Index);
    assert!(portal.theme().is_dark());

    portal.theme().toggle_theme();
    portal.logout();
    let reopened = FileStorage::open(&storage_path).expect("Failed to reopen storage");
    assert_eq!(reopened.get_item(IS_DARK_KEY).as_deref(), Some("false"));
    assert_eq!(reopened.get_item(TOKEN_KEY), None);
}

#[tokio::test(start_paused = true)]
async fn test_portal_overlays_share_one_lifecycle() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let storage = Arc::new(FileStorage::open(dir.path().join("storage.json")).unwrap());
    let portal = Portal::with_storage(Some("en-US".into()), Config::default(), storage).unwrap();

    portal.messages().success("saved");
    let id = portal.modals().confirm(ModalOptions::new());
    assert_eq!(portal.toasts().toasts()[0].kind(), ToastKind::Success);
    assert_eq!(portal.modals().registry().len(), 1);

    portal.modals().close(&id);
    tokio::time::sleep(Duration::from_millis(301)).await;
    assert!(portal.modals().registry().is_empty());
    assert_eq!(portal.toasts().len(), 1);

    tokio::time::sleep(Duration::from_millis(3000)).await;
    assert!(portal.toasts().is_empty());
}
