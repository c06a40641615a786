// SPDX-License-Identifier: MPL-2.0
//! Side navigation entries of the portal.

use crate::i18n::I18n;

/// Page a menu entry opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPage {
    Dashboard,
    ProxyConfig,
    MySetting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    /// Fluent key of the title.
    pub title: &'static str,
    /// Fluent key of the one-line description.
    pub describe: &'static str,
    /// Icon font class.
    pub icon: &'static str,
    pub active: bool,
    pub children: Vec<Menu>,
    pub page: MenuPage,
    pub parent_title: Option<&'static str>,
}

impl Menu {
    fn new(title: &'static str, describe: &'static str, icon: &'static str, page: MenuPage) -> Self {
        Self {
            title,
            describe,
            icon,
            active: false,
            children: Vec::new(),
            page,
            parent_title: None,
        }
    }

    #[must_use]
    pub fn localized_title(&self, i18n: &I18n) -> String {
        i18n.tr(self.title)
    }

    #[must_use]
    pub fn localized_describe(&self, i18n: &I18n) -> String {
        i18n.tr(self.describe)
    }
}

/// The navigation entries, the dashboard first and active.
#[must_use]
pub fn menus() -> Vec<Menu> {
    vec![
        Menu {
            active: true,
            ..Menu::new(
                "menu-dashboard",
                "menu-dashboard-describe",
                "brook-Diagram-",
                MenuPage::Dashboard,
            )
        },
        Menu::new(
            "menu-proxy-config",
            "menu-proxy-config-describe",
            "brook-technology_usb-cable",
            MenuPage::ProxyConfig,
        ),
        Menu {
            parent_title: Some("Setting"),
            ..Menu::new(
                "menu-my-setting",
                "menu-my-setting-describe",
                "brook-Gear-",
                MenuPage::MySetting,
            )
        },
    ]
}
