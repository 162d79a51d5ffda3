use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::dto::inquiry_dto::{ContactRequest, QuoteRequest};
use crate::model::inquiry::{InquiryStatus, InquiryType, NewInquiry};
use crate::repository::inquiry_repo::InquiryRepository;
use crate::util::email::InquiryNotifier;
use crate::util::error::ServiceError;
use crate::util::recaptcha::RecaptchaVerifier;

/// The intake pipeline: abuse check, persist, notify. Validation happens at
/// the handler edge before either method is called. No step is retried; any
/// failure short-circuits to the caller.
#[async_trait]
pub trait InquiryService: Send + Sync {
    async fn submit_contact(&self, request: ContactRequest) -> Result<(), ServiceError>;
    async fn submit_quote(&self, request: QuoteRequest) -> Result<(), ServiceError>;
}

pub struct InquiryServiceImpl {
    pub verifier: Arc<dyn RecaptchaVerifier>,
    pub inquiry_repo: Arc<dyn InquiryRepository>,
    pub notifier: Arc<dyn InquiryNotifier>,
}

impl InquiryServiceImpl {
    pub fn new(
        verifier: Arc<dyn RecaptchaVerifier>,
        inquiry_repo: Arc<dyn InquiryRepository>,
        notifier: Arc<dyn InquiryNotifier>,
    ) -> Self {
        InquiryServiceImpl {
            verifier,
            inquiry_repo,
            notifier,
        }
    }
}

#[async_trait]
impl InquiryService for InquiryServiceImpl {
    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn submit_contact(&self, request: ContactRequest) -> Result<(), ServiceError> {
        info!("Processing contact submission");

        self.verifier.verify(&request.recaptcha_token).await?;

        let inquiry = NewInquiry {
            inquiry_type: InquiryType::Contact,
            name: request.name,
            email: request.email,
            phone: request.phone,
            company: request.company,
            services_interested: request.service.map(|s| vec![s]).unwrap_or_default(),
            message: request.message,
            project_details: HashMap::new(),
            status: InquiryStatus::New,
        };

        self.inquiry_repo.insert(&inquiry).await?;
        info!("Contact inquiry stored");

        // Contact flow: a failed send fails the whole request and the error
        // text reaches the client. See DESIGN.md on this asymmetry.
        self.notifier.send_internal_notification(&inquiry).await?;
        self.notifier
            .send_confirmation(&inquiry.email, &inquiry.name, InquiryType::Contact)
            .await?;

        info!("Contact submission completed");
        Ok(())
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn submit_quote(&self, request: QuoteRequest) -> Result<(), ServiceError> {
        info!("Processing quote submission");

        self.verifier.verify(&request.recaptcha_token).await?;

        let mut project_details = HashMap::new();
        project_details.insert("description".to_string(), request.description.clone());
        project_details.insert("timeline".to_string(), request.timeline.clone());
        project_details.insert("budget".to_string(), request.budget.clone());

        let inquiry = NewInquiry {
            inquiry_type: InquiryType::Quote,
            name: request.name,
            email: request.email,
            phone: Some(request.phone),
            company: request.company,
            services_interested: request.services,
            message: request.description,
            project_details,
            status: InquiryStatus::New,
        };

        self.inquiry_repo.insert(&inquiry).await?;
        info!("Quote inquiry stored");

        // Quote flow: the inquiry is already durably stored, so email failure
        // is logged and the request still succeeds.
        let notify = async {
            self.notifier.send_internal_notification(&inquiry).await?;
            self.notifier
                .send_confirmation(&inquiry.email, &inquiry.name, InquiryType::Quote)
                .await
        };
        if let Err(e) = notify.await {
            error!("Failed to send quote notification emails: {}", e);
        }

        info!("Quote submission completed");
        Ok(())
    }
}
