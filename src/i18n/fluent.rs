// SPDX-License-Identifier: MPL-2.0
use crate::config::{Config, DEFAULT_LOCALE};
use crate::storage::{Storage, LOCALE_KEY};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Translation catalog and current locale.
///
/// Shared behind an `Arc`: switching locale takes `&self`.
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: RwLock<LanguageIdentifier>,
    storage: Option<Arc<dyn Storage>>,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default(), None)
    }
}

impl I18n {
    pub fn new(
        cli_lang: Option<String>,
        config: &Config,
        storage: Option<Arc<dyn Storage>>,
    ) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(filename, "ignoring translation file with invalid locale");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    tracing::warn!(%locale, ?errors, "translation file has syntax errors");
                    resource
                }
            };
            let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(%locale, ?errors, "duplicate translation entries");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let stored = storage.as_ref().and_then(|s| s.get_item(LOCALE_KEY));
        let current_locale = resolve_locale(cli_lang, stored, config, &available_locales)
            .unwrap_or_else(|| DEFAULT_LOCALE.parse().unwrap_or_default());

        Self {
            bundles,
            available_locales,
            current_locale: RwLock::new(current_locale),
            storage,
        }
    }

    #[must_use]
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    #[must_use]
    pub fn current_locale(&self) -> LanguageIdentifier {
        self.current_locale
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Switches to `locale` and persists the choice.
    ///
    /// Returns `false` (and changes nothing) when no catalog exists for it.
    pub fn set_locale(&self, locale: &LanguageIdentifier) -> bool {
        if !self.bundles.contains_key(locale) {
            tracing::debug!(%locale, "ignoring unsupported locale");
            return false;
        }
        *self
            .current_locale
            .write()
            .unwrap_or_else(PoisonError::into_inner) = locale.clone();
        if let Some(storage) = &self.storage {
            storage.set_item(LOCALE_KEY, &locale.to_string());
        }
        true
    }

    /// Translates `key` in the current locale.
    ///
    /// A missing key is logged and returned unchanged.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.translate(key, None)
    }

    /// Translates `key`, substituting `{ $name }` placeables from `args`.
    #[must_use]
    pub fn tr_args(&self, key: &str, args: &FluentArgs) -> String {
        self.translate(key, Some(args))
    }

    fn translate(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let locale = self.current_locale();
        let pattern = self
            .bundles
            .get(&locale)
            .and_then(|bundle| bundle.get_message(key).map(|msg| (bundle, msg)))
            .and_then(|(bundle, msg)| msg.value().map(|pattern| (bundle, pattern)));

        let Some((bundle, pattern)) = pattern else {
            tracing::warn!(key, %locale, "translation key not found");
            return key.to_string();
        };

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            tracing::warn!(key, %locale, ?errors, "translation formatted with errors");
        }
        value.to_string()
    }

    /// Display name of the current locale.
    #[must_use]
    pub fn locale_name(&self) -> &'static str {
        if self.is_chinese() {
            "简体中文"
        } else {
            "English"
        }
    }

    #[must_use]
    pub fn is_chinese(&self) -> bool {
        self.current_locale().to_string() == "zh-CN"
    }

    #[must_use]
    pub fn is_english(&self) -> bool {
        self.current_locale().to_string() == "en-US"
    }

    /// Text direction; both supported locales are left to right.
    #[must_use]
    pub fn direction(&self) -> &'static str {
        "ltr"
    }
}

fn parse_available(value: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    value
        .parse::<LanguageIdentifier>()
        .ok()
        .filter(|lang| available.contains(lang))
}

fn resolve_locale(
    cli_lang: Option<String>,
    stored: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. CLI argument
    if let Some(lang) = cli_lang.and_then(|s| parse_available(&s, available)) {
        return Some(lang);
    }

    // 2. Choice persisted by a previous session
    if let Some(lang) = stored.and_then(|s| parse_available(&s, available)) {
        return Some(lang);
    }

    // 3. Config file
    if let Some(lang) = config
        .general
        .language
        .as_deref()
        .and_then(|s| parse_available(s, available))
    {
        return Some(lang);
    }

    // 4. OS locale
    sys_locale::get_locale().and_then(|s| parse_available(&s, available))
}
