// SPDX-License-Identifier: MPL-2.0
//! Application root owning every registry and service of the portal.
//!
//! Front ends create one [`Portal`] and borrow handles from it; no state
//! lives in module-level singletons.

pub mod paths;

use crate::config::{self, Config};
use crate::error::Result;
use crate::i18n::I18n;
use crate::request::{ProgressTracker, Request, Response};
use crate::routes::{Router, INDEX_PATH, LOGIN_PATH};
use crate::service::types::LoginInfo;
use crate::service::{BaseInfoApi, MySettingApi, ProxyConfigApi};
use crate::storage::{FileStorage, MemoryStorage, Storage, TOKEN_KEY};
use crate::ui::menu::{self, Menu};
use crate::ui::modal::{ModalRegistry, ModalService};
use crate::ui::notifications::{MessageService, ToastRegistry};
use crate::ui::theming::{Theme, ThemeState};
use std::fmt;
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

/// Startup options, usually parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override in BCP-47 form (`zh-CN`, `en-US`).
    pub lang: Option<String>,
    /// Data directory override (for `storage.json`).
    /// Takes precedence over `BROOK_PORTAL_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Config directory override (for `settings.toml`).
    /// Takes precedence over `BROOK_PORTAL_CONFIG_DIR`.
    pub config_dir: Option<String>,
}

pub struct Portal {
    config: Config,
    storage: Arc<dyn Storage>,
    i18n: Arc<I18n>,
    theme: ThemeState,
    toasts: ToastRegistry,
    messages: MessageService,
    modals: ModalService,
    router: Router,
    progress: ProgressTracker,
    http: Request,
    base_info: BaseInfoApi,
    proxy_config: ProxyConfigApi,
    my_setting: MySettingApi,
}

impl fmt::Debug for Portal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Portal")
            .field("config", &self.config)
            .field("locale", &self.i18n.current_locale())
            .field("theme", &self.theme.current_theme())
            .field("route", &self.router.current())
            .finish_non_exhaustive()
    }
}

impl Portal {
    /// Loads configuration and persisted storage, then wires every service.
    ///
    /// A configuration that could not be read is replaced by defaults; the
    /// returned warning is the i18n key describing the problem.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage file is unreadable or the HTTP
    /// client cannot be built.
    pub fn new(flags: Flags) -> Result<(Self, Option<String>)> {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);
        let (config, warning) = config::load();

        let storage: Arc<dyn Storage> = match paths::get_storage_path_with_override(None) {
            Some(path) => Arc::new(FileStorage::open(path)?),
            None => {
                tracing::warn!("no data directory available, storage is not persisted");
                Arc::new(MemoryStorage::new())
            }
        };

        let portal = Self::with_storage(flags.lang, config, storage)?;
        if let Some(key) = &warning {
            portal.messages.warning(portal.i18n.tr(key));
        }
        Ok((portal, warning))
    }

    /// Wires every service over an explicit configuration and storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_storage(
        lang: Option<String>,
        config: Config,
        storage: Arc<dyn Storage>,
    ) -> Result<Self> {
        let i18n = Arc::new(I18n::new(lang, &config, Some(Arc::clone(&storage))));

        let theme = ThemeState::new(
            Arc::clone(&storage),
            Theme::from_dark(config.general.dark.unwrap_or(false)),
        );
        theme.init_theme();

        let toasts = ToastRegistry::new();
        let messages = MessageService::new(toasts.clone());
        let modals = ModalService::new(ModalRegistry::new(Arc::clone(&i18n)));
        let router = Router::new(Arc::clone(&storage));
        let progress = ProgressTracker::new();

        let http = Request::new(
            &config.api,
            Arc::clone(&storage),
            messages.clone(),
            Arc::new(progress.clone()),
            Arc::new(router.clone()),
        )?;

        tracing::info!(
            base_url = http.base_url(),
            locale = %i18n.current_locale(),
            theme = %theme.current_theme(),
            "portal ready"
        );

        Ok(Self {
            base_info: BaseInfoApi::new(http.clone(), Arc::clone(&storage)),
            proxy_config: ProxyConfigApi::new(http.clone()),
            my_setting: MySettingApi::new(http.clone()),
            config,
            storage,
            i18n,
            theme,
            toasts,
            messages,
            modals,
            router,
            progress,
            http,
        })
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    #[must_use]
    pub fn i18n(&self) -> &Arc<I18n> {
        &self.i18n
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastRegistry {
        &self.toasts
    }

    #[must_use]
    pub fn messages(&self) -> &MessageService {
        &self.messages
    }

    #[must_use]
    pub fn modals(&self) -> &ModalService {
        &self.modals
    }

    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    #[must_use]
    pub fn http(&self) -> &Request {
        &self.http
    }

    #[must_use]
    pub fn base_info(&self) -> &BaseInfoApi {
        &self.base_info
    }

    #[must_use]
    pub fn proxy_config(&self) -> &ProxyConfigApi {
        &self.proxy_config
    }

    #[must_use]
    pub fn my_setting(&self) -> &MySettingApi {
        &self.my_setting
    }

    #[must_use]
    pub fn menus(&self) -> Vec<Menu> {
        menu::menus()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.storage
            .get_item(TOKEN_KEY)
            .is_some_and(|token| !token.is_empty())
    }

    /// Signs in; on success the token is stored and the index is entered.
    pub async fn login(&self, info: &LoginInfo) -> Response<String> {
        let response = self.base_info.login(info).await;
        if response.success() {
            self.router.push(INDEX_PATH);
            self.messages
                .success(self.i18n.tr("notification-login-success"));
        }
        response
    }

    /// Forgets the session token and returns to the login page.
    pub fn logout(&self) {
        self.storage.remove_item(TOKEN_KEY);
        self.router.push(LOGIN_PATH);
        self.messages.info(self.i18n.tr("notification-logout"));
        tracing::info!("signed out");
    }

    /// Switches the UI language. Returns `false` for unsupported locales.
    pub fn set_locale(&self, locale: &str) -> bool {
        match locale.parse::<LanguageIdentifier>() {
            Ok(locale) => self.i18n.set_locale(&locale),
            Err(_) => false,
        }
    }
}
