//! Decision Result Pages
//!
//! Small self-contained HTML documents rendered to the merchant after they
//! follow a one-click approval link from the notification email.

use pallet_app::domain::registrations::models::Registration;

pub(crate) fn approved(registration: &Registration) -> String {
    document(
        "Application Approved",
        &format!(
            "<h1 style=\"color: #2e7d32;\">Application Approved!</h1>\n\
             <p>The wholesale application has been successfully approved.</p>\n\
             <p><strong>Applicant:</strong> {}<br>\n\
             <strong>Email:</strong> {}</p>\n\
             <p>The customer has been notified via email and their account now has wholesale pricing.</p>",
            escape_html(&registration.name),
            escape_html(&registration.email),
        ),
    )
}

pub(crate) fn rejected(registration: &Registration) -> String {
    document(
        "Application Rejected",
        &format!(
            "<h1 style=\"color: #c62828;\">Application Rejected</h1>\n\
             <p>The wholesale application has been rejected.</p>\n\
             <p><strong>Applicant:</strong> {}<br>\n\
             <strong>Email:</strong> {}</p>\n\
             <p>The customer has been notified via email about this decision.</p>",
            escape_html(&registration.name),
            escape_html(&registration.email),
        ),
    )
}

pub(crate) fn failure(title: &str, message: &str) -> String {
    document(
        title,
        &format!(
            "<h1 style=\"color: #c62828;\">{}</h1>\n<p>{}</p>",
            escape_html(title),
            escape_html(message),
        ),
    )
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{}</title>\n\
         </head>\n\
         <body style=\"font-family: sans-serif; max-width: 600px; margin: 40px auto; padding: 0 20px;\">\n\
         {body}\n\
         </body>\n\
         </html>",
        escape_html(title),
    )
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for character in value.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }

    escaped
}
