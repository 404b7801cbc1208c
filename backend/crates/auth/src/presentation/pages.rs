//! Minimal HTML pages
//!
//! The visual layer is a collaborator; these pages carry just enough
//! markup for the flows (forms, links, flash banner) to work end to end.

use platform::flash::FlashMessage;

/// Escape text interpolated into HTML
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shared page shell with the flash banner
pub fn layout(title: &str, flash: Option<&FlashMessage>, body: &str) -> String {
    let banner = match flash {
        Some(message) => format!(
            "<p class=\"flash {}\">{}</p>",
            message.level.as_str(),
            escape(&message.text)
        ),
        None => String::new(),
    };

    format!(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n\
         <body>\n{}\n{}\n</body>\n</html>",
        escape(title),
        banner,
        body
    )
}

pub fn home_page(flash: Option<&FlashMessage>) -> String {
    layout(
        "Learning Hub",
        flash,
        "<h1>Learning Hub</h1>\n\
         <p><a href=\"/login\">Log in</a> or <a href=\"/register\">register</a> to start learning.</p>",
    )
}

pub fn login_page(flash: Option<&FlashMessage>) -> String {
    layout(
        "Log in",
        flash,
        "<h1>Log in</h1>\n\
         <form method=\"post\" action=\"/login\">\n\
         <label>Username <input name=\"username\"></label>\n\
         <label>Password <input name=\"password\" type=\"password\"></label>\n\
         <button type=\"submit\">Log in</button>\n\
         </form>\n\
         <p><a href=\"/register\">Need an account? Register</a></p>",
    )
}

pub fn register_page(flash: Option<&FlashMessage>) -> String {
    layout(
        "Register",
        flash,
        "<h1>Register</h1>\n\
         <form method=\"post\" action=\"/register\">\n\
         <label>Username <input name=\"username\"></label>\n\
         <label>Email <input name=\"email\" type=\"email\"></label>\n\
         <label>Password <input name=\"password\" type=\"password\"></label>\n\
         <button type=\"submit\">Register</button>\n\
         </form>\n\
         <p><a href=\"/login\">Already registered? Log in</a></p>",
    )
}

pub fn dashboard_page(username: &str, flash: Option<&FlashMessage>) -> String {
    let body = format!(
        "<h1>Welcome, {}</h1>\n\
         <ul>\n\
         <li><a href=\"/modules\">Browse modules</a></li>\n\
         <li><a href=\"/subscription\">Subscription</a></li>\n\
         <li><a href=\"/logout\">Log out</a></li>\n\
         </ul>",
        escape(username)
    );
    layout("Dashboard", flash, &body)
}
