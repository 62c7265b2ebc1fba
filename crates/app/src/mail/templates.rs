//! Email templates for the registration workflow.
//!
//! Applicant-supplied text is HTML-escaped before it lands in a body.

use crate::{
    approvals::links::DecisionLinks, domain::registrations::models::Registration, mail::MailMessage,
};

/// Notify the merchant that a new application is waiting for review.
#[must_use]
pub fn merchant_notification(
    merchant_email: &str,
    registration: &Registration,
    links: &DecisionLinks,
) -> MailMessage {
    let name = escape_html(&registration.name);
    let email = escape_html(&registration.email);
    let business_details = escape_html(&registration.business_details);

    MailMessage {
        to: merchant_email.to_string(),
        subject: format!("New Wholesale Registration: {}", registration.name),
        html_body: format!(
            "<h2>New Wholesale Registration Request</h2>\n\
             <p>A new wholesale application is waiting for review.</p>\n\
             <p><strong>Name:</strong> {name}<br>\n\
             <strong>Email:</strong> {email}</p>\n\
             <p><strong>Business Details:</strong></p>\n\
             <p style=\"white-space: pre-wrap;\">{business_details}</p>\n\
             <p>\n\
             <a href=\"{approve_url}\" style=\"background-color: #28a745; color: #ffffff; padding: 10px 20px; text-decoration: none; border-radius: 4px;\">Approve</a>\n\
             &nbsp;\n\
             <a href=\"{reject_url}\" style=\"background-color: #dc3545; color: #ffffff; padding: 10px 20px; text-decoration: none; border-radius: 4px;\">Reject</a>\n\
             </p>\n\
             <p>These links will expire in 7 days. Please review and respond to this\n\
             wholesale registration request.</p>",
            approve_url = escape_html(&links.approve_url),
            reject_url = escape_html(&links.reject_url),
        ),
    }
}

/// Tell an applicant their application was approved.
#[must_use]
pub fn applicant_approved(registration: &Registration) -> MailMessage {
    let name = escape_html(&registration.name);

    MailMessage {
        to: registration.email.clone(),
        subject: "Your Wholesale Application Has Been Approved!".to_string(),
        html_body: format!(
            "<h2>Congratulations, {name}!</h2>\n\
             <p>We're pleased to let you know that your wholesale application has been\n\
             approved.</p>\n\
             <p><strong>What's next?</strong></p>\n\
             <ul>\n\
             <li>You now have access to wholesale pricing</li>\n\
             <li>Log in to your account to see wholesale prices</li>\n\
             <li>Start placing wholesale orders right away</li>\n\
             </ul>\n\
             <p>Best regards,<br>The Wholesale Team</p>"
        ),
    }
}

/// Tell an applicant their application was not approved.
#[must_use]
pub fn applicant_rejected(registration: &Registration) -> MailMessage {
    let name = escape_html(&registration.name);

    MailMessage {
        to: registration.email.clone(),
        subject: "Update on Your Wholesale Application".to_string(),
        html_body: format!(
            "<h2>Thank you for your interest, {name}</h2>\n\
             <p>Thank you for submitting your wholesale application. After careful\n\
             review, we are unable to approve your application at this time.</p>\n\
             <p>This decision can come down to factors such as current business\n\
             requirements, geographic coverage, or product availability.</p>\n\
             <p>We appreciate your interest in our products and encourage you to keep\n\
             shopping with us at retail.</p>\n\
             <p>Best regards,<br>The Wholesale Team</p>"
        ),
    }
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
            _ => escaped.push(character),
        }
    }

    escaped
}
