//! Admin menus and asset manifests
//!
//! `plugkit-admin` covers the parts of a plugin that live outside the
//! registration form:
//!
//! - [`MenuPage`]: a top-level admin menu with its pages, deferred to the
//!   host's `admin_menu` event through [`AdminHooks`] and emitted into the
//!   host's [`Navigation`]
//! - [`AssetManifest`]: scripts and styles, registered and enqueued into the
//!   host's [`AssetQueue`] per page context ([`Facing`])
//!
//! ```rust
//! use plugkit_admin::{AdminHooks, MenuConfig, MenuPage, PageConfig};
//!
//! let mut menu = MenuPage::new(MenuConfig::new("Acme Tools")).unwrap();
//! menu.add_page(
//!     PageConfig::new()
//!         .title("Overview")
//!         .capability("manage_options")
//!         .content(|| "<h1>Acme</h1>".to_string()),
//! )
//! .unwrap();
//! assert_eq!(menu.slug(), "acme-tools");
//!
//! let mut hooks = AdminHooks::new();
//! menu.register(&mut hooks);
//! assert_eq!(hooks.len(), 1);
//! ```

pub mod assets;
pub mod error;
pub mod menu;

pub use assets::{Asset, AssetGroup, AssetManifest, AssetQueue, EnqueueEntry, Facing};
pub use error::{AdminError, Result};
pub use menu::{
    AdminHooks, MenuConfig, MenuEntry, MenuPage, Navigation, PageConfig, PageContent,
    SubmenuEntry, SubmenuPage,
};
