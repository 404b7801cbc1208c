//! Catalog pages

use auth::presentation::pages::{escape, layout};
use platform::flash::FlashMessage;

use crate::domain::entities::Module;

/// GET /modules page
pub fn modules_page(username: &str, modules: &[Module], flash: Option<&FlashMessage>) -> String {
    let mut items = String::new();
    for module in modules {
        let badge = if module.is_premium {
            " <em>(premium)</em>"
        } else {
            ""
        };
        items.push_str(&format!(
            "<li><a href=\"/modules/{slug}\">{title}</a>{badge}<br>{description}</li>\n",
            slug = escape(module.slug.as_str()),
            title = escape(&module.title),
            badge = badge,
            description = escape(&module.description),
        ));
    }

    let body = format!(
        "<h1>Modules</h1>\n<p>Signed in as {}</p>\n<ul>\n{}</ul>\n\
         <p><a href=\"/dashboard\">Back to dashboard</a></p>",
        escape(username),
        items
    );
    layout("Modules", flash, &body)
}

/// Generic body for a module without a registered template
pub fn generic_module_body(module: &Module) -> String {
    format!(
        "<h1>{title}</h1>\n<p>{description}</p>\n<p><a href=\"/modules\">All modules</a></p>",
        title = escape(&module.title),
        description = escape(&module.description),
    )
}

/// Full module page around a rendered body
pub fn module_page(module: &Module, body: &str, flash: Option<&FlashMessage>) -> String {
    layout(&module.title, flash, body)
}
