//! Billing pages

use auth::presentation::pages::{escape, layout};
use platform::flash::FlashMessage;

/// GET /subscription page
pub fn subscription_page(username: &str, flash: Option<&FlashMessage>) -> String {
    let body = format!(
        "<h1>Subscription</h1>\n\
         <p>Signed in as {}</p>\n\
         <p>Unlock every premium module with a one-time payment.</p>\n\
         <form method=\"post\" action=\"/create-paystack-payment\">\n\
         <button type=\"submit\">Subscribe</button>\n\
         </form>\n\
         <p><a href=\"/modules\">Back to modules</a></p>",
        escape(username)
    );
    layout("Subscription", flash, &body)
}
