//! Per-module Template Registry
//!
//! Rendering picks a presentation keyed by slug. Slugs are seeded with
//! the catalog, so a module can exist without a registered template; in
//! that case the generic page is used rather than failing the request.

use std::collections::HashMap;

use crate::domain::entities::Module;
use crate::presentation::pages;

/// Renderer for one module's body
pub type ModuleRenderer = fn(&Module) -> String;

/// Slug-keyed template registry with a generic fallback
#[derive(Default, Clone)]
pub struct TemplateRegistry {
    renderers: HashMap<&'static str, ModuleRenderer>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a specialized renderer for a slug
    pub fn register(&mut self, slug: &'static str, renderer: ModuleRenderer) {
        self.renderers.insert(slug, renderer);
    }

    /// Render a module page body
    pub fn render(&self, module: &Module) -> String {
        match self.renderers.get(module.slug.as_str()) {
            Some(renderer) => renderer(module),
            None => {
                tracing::debug!(slug = %module.slug, "No template registered, using generic page");
                pages::generic_module_body(module)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::fixtures::module;

    #[test]
    fn test_unregistered_slug_falls_back_to_generic() {
        let registry = TemplateRegistry::new();
        let body = registry.render(&module(1, "intro-to-physics", false));
        assert!(body.contains("Module 1"));
    }

    #[test]
    fn test_registered_renderer_wins() {
        let mut registry = TemplateRegistry::new();
        registry.register("intro-to-physics", |_| "<h1>Custom physics page</h1>".to_string());

        let body = registry.render(&module(1, "intro-to-physics", false));
        assert_eq!(body, "<h1>Custom physics page</h1>");

        // Other slugs still use the generic page
        let other = registry.render(&module(2, "chemistry-basics", false));
        assert!(other.contains("Module 2"));
    }
}
