//! A plugin assembled from configuration
//!
//! [`Plugin`] owns everything a plugin registers with its host: the
//! registration form, the deferred admin menus and the asset manifest. The
//! host calls one method per lifecycle event.

use crate::error::{PluginError, Result};
use plugkit_admin::{
    AdminHooks, AssetManifest, AssetQueue, Facing, MenuConfig, MenuPage, Navigation, PageConfig,
    PageContent,
};
use plugkit_common::init_tracing;
use plugkit_config::{
    ConfigProvider, LoggingSettings, MenuDeclaration, PageDeclaration, PluginConfig,
};
use plugkit_fields::{ErrorCollection, FieldFactory, HostEvent, RegistrationForm, Submission};
use plugkit_templating::{Properties, TemplateRegistry, TemplateRenderer};
use serde_json::Value;
use std::io::Write;
use tracing::{debug, error, info};

/// Install the tracing subscriber with the configured level as fallback
pub fn init_logging(settings: &LoggingSettings) {
    init_tracing(&settings.level);
}

/// The form, menus and assets a plugin registers with its host
#[derive(Debug)]
pub struct Plugin {
    templates: TemplateRegistry,
    form: RegistrationForm,
    admin: AdminHooks,
    assets: AssetManifest,
}

impl Plugin {
    /// Load configuration from the standard locations and build the plugin
    pub fn load() -> Result<Self> {
        let config = ConfigProvider::new().load()?;
        Self::from_config(&config)
    }

    /// Build a plugin with the built-in field variants
    pub fn from_config(config: &PluginConfig) -> Result<Self> {
        Self::from_config_with(config, &FieldFactory::with_builtins())
    }

    /// Build a plugin whose fields come from `factory`.
    ///
    /// The configuration is validated against the factory's kinds first.
    /// Every field, template and menu is built here, so a broken declaration
    /// fails before anything reaches the host.
    pub fn from_config_with(config: &PluginConfig, factory: &FieldFactory) -> Result<Self> {
        config.validate(&factory.kinds())?;

        let mut templates = TemplateRegistry::with_builtins();
        if let Some(dir) = &config.templates.directory {
            let loaded = templates.load_directory(dir)?;
            info!(dir = %dir.display(), loaded, "loaded template overrides");
        }

        let mut form = RegistrationForm::new();
        for (index, declaration) in config.fields.iter().enumerate() {
            let field = factory
                .create(&declaration.kind, &declaration.properties, &templates)
                .map_err(|e| PluginError::from(e).in_declaration(format!("fields[{index}]")))?;
            form.add(field);
        }

        let mut admin = AdminHooks::new();
        for (index, declaration) in config.menus.iter().enumerate() {
            build_menu(declaration, &templates)
                .map_err(|e| e.in_declaration(format!("menus[{index}]")))?
                .register(&mut admin);
        }

        config.assets.validate()?;

        debug!(
            fields = form.len(),
            menus = admin.len(),
            templates = templates.len(),
            "built plugin"
        );
        Ok(Self {
            templates,
            form,
            admin,
            assets: config.assets.clone(),
        })
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RegistrationForm {
        &mut self.form
    }

    pub fn admin_hooks(&self) -> &AdminHooks {
        &self.admin
    }

    pub fn assets(&self) -> &AssetManifest {
        &self.assets
    }

    /// Host actions this plugin listens to
    pub fn hook_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if !self.form.is_empty() {
            names.push(HostEvent::RenderRegistrationForm.hook_name());
            names.push(HostEvent::ProcessRegistrationSubmission.hook_name());
        }
        if !self.admin.is_empty() {
            names.push(AdminHooks::HOOK_NAME);
        }
        if !self.assets.is_empty() {
            names.extend(Facing::ALL.iter().map(|f| f.hook_name()));
        }
        names
    }

    /// `register_form`: write every field's markup to `out`
    pub fn render_registration_form(&mut self, out: &mut dyn Write) -> Result<()> {
        self.form.on_render_form(out)?;
        Ok(())
    }

    /// `registration_errors`: refresh fields from the submission and validate
    pub fn process_registration_submission(
        &mut self,
        submission: &Submission,
        errors: ErrorCollection,
        login: &str,
        email: &str,
    ) -> ErrorCollection {
        self.form.on_submission(submission, errors, login, email)
    }

    /// `admin_menu`: emit every menu into the host navigation
    pub fn admin_menu(&self, nav: &mut dyn Navigation) {
        self.admin.fire_admin_menu(nav);
    }

    /// `*_enqueue_scripts`: register and enqueue the assets facing `facing`
    pub fn enqueue_assets(&self, facing: Facing, queue: &mut dyn AssetQueue) -> Result<()> {
        self.assets.apply(facing, queue)?;
        Ok(())
    }
}

fn build_menu(declaration: &MenuDeclaration, templates: &TemplateRegistry) -> Result<MenuPage> {
    let mut menu = MenuPage::new(MenuConfig {
        title: Some(declaration.title.clone()),
        slug: declaration.slug.clone(),
        icon: declaration.icon.clone(),
        position: declaration.position,
        styles: declaration.styles.clone(),
    })?;

    for (index, page) in declaration.pages.iter().enumerate() {
        let context = || format!("pages[{index}]");
        // Title and capability are reported before any template problem
        let content = if has_value(&page.title) && has_value(&page.capability) {
            page_content(page, templates).map_err(|e| e.in_declaration(context()))?
        } else {
            None
        };
        let config = PageConfig {
            title: page.title.clone(),
            capability: page.capability.clone(),
            content,
        };
        menu.add_page(config)
            .map_err(|e| PluginError::from(e).in_declaration(context()))?;
    }
    Ok(menu)
}

fn has_value(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Compile and render the page template now; render it again when the host
/// shows the page
fn page_content(page: &PageDeclaration, templates: &TemplateRegistry) -> Result<Option<PageContent>> {
    let Some(name) = &page.template else {
        return Ok(None);
    };
    let mut renderer = templates.compile(name)?;
    renderer.check(page_properties(page))?;

    Ok(Some(PageContent::new(move || match renderer.render() {
        Ok(markup) => markup,
        Err(e) => {
            error!(template = %renderer.name(), error = %e, "failed to render admin page");
            String::new()
        }
    })))
}

fn page_properties(page: &PageDeclaration) -> Properties {
    let mut properties = page.properties.clone();
    for (key, value) in [("title", &page.title), ("capability", &page.capability)] {
        if let Some(value) = value {
            properties
                .entry(key)
                .or_insert_with(|| Value::String(value.clone()));
        }
    }
    properties
}
