//! Admin menu pages
//!
//! A [`MenuPage`] is one top-level admin menu with an ordered list of
//! [`SubmenuPage`]s. Menus are not added to the host directly; they are
//! deferred to the host's `admin_menu` event through [`AdminHooks`] and
//! emitted into a [`Navigation`] when that event fires.
//!
//! With two or more pages the first page is listed twice: once as the target
//! of the top-level entry and again as the first submenu entry, under the
//! parent's slug.

use crate::error::{AdminError, Result};
use plugkit_common::slugify;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Produces the body of an admin page when the host shows it
#[derive(Clone)]
pub struct PageContent(Arc<dyn Fn() -> String + Send + Sync>);

impl PageContent {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Produce the page body
    pub fn render(&self) -> String {
        (self.0)()
    }
}

impl fmt::Debug for PageContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PageContent(..)")
    }
}

/// Configuration for a top-level menu
#[derive(Debug, Clone, Default)]
pub struct MenuConfig {
    pub title: Option<String>,
    /// Derived from the title when absent
    pub slug: Option<String>,
    pub icon: Option<String>,
    pub position: Option<u32>,
    /// CSS rules emitted as inline admin styles
    pub styles: Vec<String>,
}

impl MenuConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    pub fn style(mut self, rule: impl Into<String>) -> Self {
        self.styles.push(rule.into());
        self
    }
}

/// Configuration for one page under a menu.
///
/// `title`, `capability` and `content` are all mandatory; they are optional
/// here so a missing one can be reported by name.
#[derive(Debug, Clone, Default)]
pub struct PageConfig {
    pub title: Option<String>,
    /// Host capability a user needs to see the page
    pub capability: Option<String>,
    pub content: Option<PageContent>,
}

impl PageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn capability(mut self, capability: impl Into<String>) -> Self {
        self.capability = Some(capability.into());
        self
    }

    pub fn content<F>(mut self, f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.content = Some(PageContent::new(f));
        self
    }
}

/// A validated page under a menu
#[derive(Debug, Clone)]
pub struct SubmenuPage {
    pub title: String,
    /// Derived from the title
    pub slug: String,
    pub capability: String,
    pub content: PageContent,
}

/// Top-level entry handed to [`Navigation::add_menu_page`]
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub page_title: String,
    pub menu_title: String,
    pub capability: String,
    pub slug: String,
    pub content: PageContent,
    pub icon: Option<String>,
    pub position: Option<u32>,
}

/// Child entry handed to [`Navigation::add_submenu_page`]
#[derive(Debug, Clone)]
pub struct SubmenuEntry {
    pub parent_slug: String,
    pub page_title: String,
    pub menu_title: String,
    pub capability: String,
    pub slug: String,
    pub content: PageContent,
}

/// The host's admin navigation
pub trait Navigation {
    fn add_menu_page(&mut self, entry: MenuEntry);

    fn add_submenu_page(&mut self, entry: SubmenuEntry);

    /// Add CSS to the admin pages
    fn add_inline_style(&mut self, css: &str);
}

/// A top-level admin menu and its pages
#[derive(Debug, Clone)]
pub struct MenuPage {
    title: String,
    slug: String,
    icon: Option<String>,
    position: Option<u32>,
    styles: Vec<String>,
    pages: Vec<SubmenuPage>,
}

fn required(value: Option<String>, entity: &'static str, key: &'static str) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(AdminError::MissingKey { entity, key })
}

fn derived_slug(title: &str, entity: &'static str) -> Result<String> {
    let slug = slugify(title);
    if slug.is_empty() {
        return Err(AdminError::EmptySlug {
            entity,
            title: title.to_string(),
        });
    }
    Ok(slug)
}

impl MenuPage {
    /// Create a menu with no pages.
    ///
    /// Fails if the title is missing, or if no slug is given and the title
    /// has no letters or digits to derive one from.
    pub fn new(config: MenuConfig) -> Result<Self> {
        let title = required(config.title, "menu", "title")?;
        let slug = match config.slug.filter(|s| !s.trim().is_empty()) {
            Some(slug) => slug,
            None => derived_slug(&title, "menu")?,
        };

        debug!(title = %title, slug = %slug, "created admin menu");
        Ok(Self {
            title,
            slug,
            icon: config.icon,
            position: config.position,
            styles: config.styles,
            pages: Vec::new(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn pages(&self) -> &[SubmenuPage] {
        &self.pages
    }

    /// Append a page.
    ///
    /// Keys are checked in the order `title`, `capability`, `content`; the
    /// first one missing is reported and the page list is left unchanged. A
    /// title that yields an empty slug is rejected the same way.
    pub fn add_page(&mut self, config: PageConfig) -> Result<&mut Self> {
        let title = required(config.title, "submenu page", "title")?;
        let capability = required(config.capability, "submenu page", "capability")?;
        let content = config.content.ok_or(AdminError::MissingKey {
            entity: "submenu page",
            key: "content",
        })?;
        let slug = derived_slug(&title, "submenu page")?;

        debug!(menu = %self.slug, page = %title, capability = %capability, "added admin page");
        self.pages.push(SubmenuPage {
            title,
            slug,
            capability,
            content,
        });
        Ok(self)
    }

    /// Defer this menu until the host fires its `admin_menu` event
    pub fn register(self, hooks: &mut AdminHooks) {
        debug!(menu = %self.slug, pages = self.pages.len(), "deferred admin menu");
        hooks.menus.push(self);
    }

    /// Emit the menu into the host navigation
    pub fn register_menu(&self, nav: &mut dyn Navigation) {
        let Some((first, rest)) = self.pages.split_first() else {
            warn!(menu = %self.slug, "admin menu has no pages; nothing registered");
            return;
        };

        nav.add_menu_page(MenuEntry {
            page_title: first.title.clone(),
            menu_title: self.title.clone(),
            capability: first.capability.clone(),
            slug: self.slug.clone(),
            content: first.content.clone(),
            icon: self.icon.clone(),
            position: self.position,
        });

        if !rest.is_empty() {
            nav.add_submenu_page(SubmenuEntry {
                parent_slug: self.slug.clone(),
                page_title: first.title.clone(),
                menu_title: first.title.clone(),
                capability: first.capability.clone(),
                slug: self.slug.clone(),
                content: first.content.clone(),
            });
            for page in rest {
                nav.add_submenu_page(SubmenuEntry {
                    parent_slug: self.slug.clone(),
                    page_title: page.title.clone(),
                    menu_title: page.title.clone(),
                    capability: page.capability.clone(),
                    slug: page.slug.clone(),
                    content: page.content.clone(),
                });
            }
        }

        if !self.styles.is_empty() {
            nav.add_inline_style(&self.styles.join("\n"));
        }

        debug!(menu = %self.slug, pages = self.pages.len(), "registered admin menu");
    }
}

/// Menus waiting for the host's `admin_menu` event
#[derive(Debug, Clone, Default)]
pub struct AdminHooks {
    menus: Vec<MenuPage>,
}

impl AdminHooks {
    /// Host action the menus are registered under
    pub const HOOK_NAME: &'static str = "admin_menu";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn menus(&self) -> &[MenuPage] {
        &self.menus
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    /// `admin_menu` handler: emit every deferred menu in registration order
    pub fn fire_admin_menu(&self, nav: &mut dyn Navigation) {
        for menu in &self.menus {
            menu.register_menu(nav);
        }
    }
}
