use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{error, info, instrument};

use crate::config::{ConfigError, EmailConfig};
use crate::model::inquiry::{InquiryType, NewInquiry};

/// Email service errors
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("SMTP error: {0}")]
    SmtpError(String),

    #[error("Message building error: {0}")]
    MessageError(String),

    #[error("Address error: {0}")]
    AddressError(String),
}

impl From<ConfigError> for EmailError {
    fn from(err: ConfigError) -> Self {
        EmailError::ConfigError(err.to_string())
    }
}

/// The two sends the intake pipeline performs per accepted submission.
#[async_trait]
pub trait InquiryNotifier: Send + Sync {
    /// Notify the company inbox about a new inquiry
    async fn send_internal_notification(&self, inquiry: &NewInquiry) -> Result<(), EmailError>;

    /// Send the submitter an acknowledgment
    async fn send_confirmation(
        &self,
        to: &str,
        name: &str,
        kind: InquiryType,
    ) -> Result<(), EmailError>;
}

/// SMTP notifier implementation
pub struct SmtpEmailService {
    pub config: EmailConfig,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailService {
    #[instrument(skip(config), fields(host = %config.smtp_host, port = config.smtp_port))]
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        info!("Initializing SMTP email service");

        config.validate().map_err(EmailError::from)?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .timeout(Some(std::time::Duration::from_secs(
                    config.connection_timeout_secs,
                )));

        if config.use_tls {
            let tls_parameters = TlsParameters::new(config.smtp_host.clone())
                .map_err(|e| EmailError::ConfigError(format!("TLS configuration error: {}", e)))?;

            if config.use_starttls {
                transport_builder = transport_builder.tls(Tls::Required(tls_parameters));
            } else {
                transport_builder = transport_builder.tls(Tls::Wrapper(tls_parameters));
            }
        } else {
            transport_builder = transport_builder.tls(Tls::None);
        }

        if !config.smtp_username.is_empty() && !config.smtp_password.is_empty() {
            let credentials = Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            );
            transport_builder = transport_builder.credentials(credentials);
        }

        let transport = transport_builder.build();

        info!("SMTP email service initialized successfully");
        Ok(Self { config, transport })
    }

    async fn send_html(&self, to: &str, subject: &str, html: String) -> Result<(), EmailError> {
        let from_mailbox: Mailbox =
            format!("{} <{}>", self.config.from_name, self.config.from_email)
                .parse()
                .map_err(|e| EmailError::AddressError(format!("Invalid from address: {}", e)))?;

        let to_mailbox: Mailbox = to
            .parse()
            .map_err(|e| EmailError::AddressError(format!("Invalid to address: {}", e)))?;

        let message = Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(subject)
            .singlepart(
                lettre::message::SinglePart::builder()
                    .header(ContentType::TEXT_HTML)
                    .body(html),
            )
            .map_err(|e| EmailError::MessageError(format!("Failed to build message: {}", e)))?;

        self.transport.send(message).await.map_err(|e| {
            error!("Failed to send email: {}", e);
            EmailError::SmtpError(format!("Failed to send email: {}", e))
        })?;

        info!("Email sent successfully");
        Ok(())
    }

    fn notification_subject(&self, inquiry: &NewInquiry) -> String {
        match inquiry.inquiry_type {
            InquiryType::Quote => format!("New Quote Request from {}", inquiry.name),
            _ => format!("New Contact Message from {}", inquiry.name),
        }
    }

    /// Internal notification body listing everything the submitter entered
    fn generate_notification_html(&self, inquiry: &NewInquiry) -> String {
        let heading = match inquiry.inquiry_type {
            InquiryType::Quote => "New Quote Request",
            _ => "New Contact Message",
        };

        let mut html = format!(
            "<h2>{heading}</h2>\n<p><strong>Name:</strong> {}</p>\n<p><strong>Email:</strong> {}</p>\n",
            html_escape::encode_text(&inquiry.name),
            html_escape::encode_text(&inquiry.email),
        );

        if let Some(phone) = &inquiry.phone {
            html.push_str(&format!(
                "<p><strong>Phone:</strong> {}</p>\n",
                html_escape::encode_text(phone)
            ));
        }
        if let Some(company) = &inquiry.company {
            html.push_str(&format!(
                "<p><strong>Company:</strong> {}</p>\n",
                html_escape::encode_text(company)
            ));
        }
        if !inquiry.services_interested.is_empty() {
            html.push_str(&format!(
                "<p><strong>Services Interested:</strong> {}</p>\n",
                html_escape::encode_text(&inquiry.services_interested.join(", "))
            ));
        }

        html.push_str(&format!(
            "<p><strong>Message:</strong> {}</p>\n",
            html_escape::encode_text(&inquiry.message)
        ));

        if let Some(timeline) = inquiry.project_details.get("timeline") {
            html.push_str(&format!(
                "<p><strong>Timeline:</strong> {}</p>\n",
                html_escape::encode_text(timeline)
            ));
        }
        if let Some(budget) = inquiry.project_details.get("budget") {
            html.push_str(&format!(
                "<p><strong>Budget Range:</strong> {}</p>\n",
                html_escape::encode_text(budget)
            ));
        }

        html.push_str("<hr>\n<p>Please follow up with this client within 24-48 hours.</p>");
        html
    }

    fn generate_confirmation_html(&self, name: &str, kind: InquiryType) -> String {
        let company = &self.config.from_name;
        let phone = &self.config.company_phone;
        let (heading, body) = match kind {
            InquiryType::Quote => (
                "Thank You for Your Quote Request",
                format!(
                    "<p>Thank you for submitting a quote request to {company}. We have received \
                     your request and our team will review it shortly.</p>\n\
                     <p>We typically respond to quote requests within 24-48 business hours. If you \
                     have any urgent questions, please feel free to contact us at {phone}.</p>",
                    company = html_escape::encode_text(company),
                    phone = html_escape::encode_text(phone),
                ),
            ),
            _ => (
                "Thank You for Contacting Us",
                format!(
                    "<p>Thank you for reaching out to {company}. We have received your message \
                     and will get back to you soon.</p>\n\
                     <p>If your enquiry is urgent, please call us at {phone}.</p>",
                    company = html_escape::encode_text(company),
                    phone = html_escape::encode_text(phone),
                ),
            ),
        };

        format!(
            "<h2>{heading}</h2>\n<p>Dear {name},</p>\n{body}\n\
             <p>Best regards,<br>The {company} Team</p>\n<hr>\n\
             <p>This is an automated message. Please do not reply to this email.</p>",
            heading = heading,
            name = html_escape::encode_text(name),
            body = body,
            company = html_escape::encode_text(company),
        )
    }
}

#[async_trait]
impl InquiryNotifier for SmtpEmailService {
    #[instrument(skip(self, inquiry), fields(inquiry_type = %inquiry.inquiry_type))]
    async fn send_internal_notification(&self, inquiry: &NewInquiry) -> Result<(), EmailError> {
        info!("Sending internal inquiry notification");
        let subject = self.notification_subject(inquiry);
        let html = self.generate_notification_html(inquiry);
        let to = self.config.notification_email.clone();
        self.send_html(&to, &subject, html).await
    }

    #[instrument(skip(self), fields(to = %to))]
    async fn send_confirmation(
        &self,
        to: &str,
        name: &str,
        kind: InquiryType,
    ) -> Result<(), EmailError> {
        info!("Sending submitter confirmation");
        let subject = match kind {
            InquiryType::Quote => format!(
                "Thank you for your quote request - {}",
                self.config.from_name
            ),
            _ => format!("Thank you for contacting us - {}", self.config.from_name),
        };
        let html = self.generate_confirmation_html(name, kind);
        self.send_html(to, &subject, html).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::inquiry::InquiryStatus;
    use std::collections::HashMap;

    fn service() -> SmtpEmailService {
        SmtpEmailService::new(EmailConfig::from_test_env()).unwrap()
    }

    fn quote_inquiry() -> NewInquiry {
        let mut details = HashMap::new();
        details.insert("description".to_string(), "Road rehabilitation".to_string());
        details.insert("timeline".to_string(), "1-3_months".to_string());
        details.insert("budget".to_string(), "100k-500k".to_string());
        NewInquiry {
            inquiry_type: InquiryType::Quote,
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: Some("0244000000".to_string()),
            company: Some("Doe Mining Ltd".to_string()),
            services_interested: vec!["Civil Works".to_string(), "Road Construction".to_string()],
            message: "Road rehabilitation".to_string(),
            project_details: details,
            status: InquiryStatus::New,
        }
    }

    // SmtpEmailService::new builds a pooled async transport, so these run
    // inside a runtime even though nothing is sent.
    #[tokio::test]
    async fn test_notification_subject_by_type() {
        let svc = service();
        let mut inquiry = quote_inquiry();
        assert_eq!(
            svc.notification_subject(&inquiry),
            "New Quote Request from Jane Doe"
        );
        inquiry.inquiry_type = InquiryType::Contact;
        assert_eq!(
            svc.notification_subject(&inquiry),
            "New Contact Message from Jane Doe"
        );
    }

    #[tokio::test]
    async fn test_notification_html_lists_fields() {
        let svc = service();
        let html = svc.generate_notification_html(&quote_inquiry());
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("jane@example.com"));
        assert!(html.contains("Civil Works, Road Construction"));
        assert!(html.contains("1-3_months"));
        assert!(html.contains("100k-500k"));
    }

    #[tokio::test]
    async fn test_notification_html_escapes_user_content() {
        let svc = service();
        let mut inquiry = quote_inquiry();
        inquiry.name = "<script>alert(1)</script>".to_string();
        let html = svc.generate_notification_html(&inquiry);
        assert!(!html.contains("<script>"));
    }

    #[tokio::test]
    async fn test_confirmation_html_mentions_sla_for_quotes() {
        let svc = service();
        let html = svc.generate_confirmation_html("Jane Doe", InquiryType::Quote);
        assert!(html.contains("24-48 business hours"));
        assert!(html.contains("Dear Jane Doe"));
    }

    #[tokio::test]
    async fn test_confirmation_html_for_contact() {
        let svc = service();
        let html = svc.generate_confirmation_html("Jane Doe", InquiryType::Contact);
        assert!(html.contains("Thank You for Contacting Us"));
    }
}
