//! Partial template loading
//!
//! Field templates share fragments such as the label and description markup.
//! Anything implementing [`PartialLoader`] can serve those fragments; the
//! [`PartialLoaderAdapter`] bridges a loader to liquid's `PartialSource` so a
//! template can `{% include '_partials/label' %}`.

use std::borrow::Cow;

/// File extensions stripped or appended when resolving a partial name
pub const PARTIAL_EXTENSIONS: &[&str] = &[".liquid", ".html", ".html.liquid"];

/// Trait for loading partial templates from various sources
pub trait PartialLoader: Send + Sync + std::fmt::Debug {
    /// Check if a partial with the given name exists
    fn contains(&self, name: &str) -> bool;

    /// Get the names of all available partials
    fn names(&self) -> Vec<String>;

    /// Try to load a partial template by name
    fn try_get(&self, name: &str) -> Option<Cow<'_, str>>;
}

/// Candidate names to try for a requested partial, exact name first.
///
/// `_partials/label.liquid` also tries `_partials/label`, and a bare name
/// also tries it with each known extension appended.
pub fn normalize_partial_name(requested_name: &str) -> Vec<String> {
    let mut candidates = vec![requested_name.to_string()];

    for ext in PARTIAL_EXTENSIONS {
        if let Some(stripped) = requested_name.strip_suffix(ext) {
            candidates.push(stripped.to_string());
        }
    }

    for ext in PARTIAL_EXTENSIONS {
        candidates.push(format!("{requested_name}{ext}"));
    }

    let mut seen = std::collections::HashSet::new();
    candidates
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Adapter to make any PartialLoader work with Liquid's PartialSource trait
#[derive(Debug)]
pub struct PartialLoaderAdapter<T: PartialLoader> {
    loader: T,
    names_cache: Vec<String>,
}

impl<T: PartialLoader> PartialLoaderAdapter<T> {
    /// Create a new adapter around a PartialLoader
    pub fn new(loader: T) -> Self {
        let names_cache = loader.names();
        Self {
            loader,
            names_cache,
        }
    }
}

impl<T: PartialLoader> liquid::partials::PartialSource for PartialLoaderAdapter<T> {
    fn contains(&self, name: &str) -> bool {
        normalize_partial_name(name)
            .iter()
            .any(|candidate| self.loader.contains(candidate))
    }

    fn names(&self) -> Vec<&str> {
        self.names_cache.iter().map(|s| s.as_str()).collect()
    }

    fn try_get(&self, name: &str) -> Option<Cow<'_, str>> {
        for candidate in normalize_partial_name(name) {
            if let Some(content) = self.loader.try_get(&candidate) {
                tracing::trace!("Loaded partial: '{}'", candidate);
                return Some(content);
            }
        }

        tracing::warn!("No match found for partial '{}'", name);
        None
    }
}
