use practice_alarm_domain::EmailTemplateParams;
use reqwest::Client;
use serde::Serialize;
use tracing::error;

const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Transactional email api that renders a template owned by the provider
#[async_trait::async_trait]
pub trait IEmailSender: Send + Sync {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &EmailTemplateParams,
    ) -> anyhow::Result<()>;
}

#[derive(Debug, Serialize)]
struct EmailJsSendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    /// EmailJS calls the public key `user_id`
    user_id: Option<&'a str>,
    template_params: &'a EmailTemplateParams,
}

pub struct EmailJsApi {
    client: Client,
    public_key: Option<String>,
    send_url: String,
}

impl EmailJsApi {
    pub fn new(public_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            public_key,
            send_url: EMAILJS_SEND_URL.into(),
        }
    }
}

#[async_trait::async_trait]
impl IEmailSender for EmailJsApi {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &EmailTemplateParams,
    ) -> anyhow::Result<()> {
        let body = EmailJsSendRequest {
            service_id,
            template_id,
            user_id: self.public_key.as_deref(),
            template_params: params,
        };

        let res = match self.client.post(&self.send_url).json(&body).send().await {
            Ok(res) => res,
            Err(e) => {
                error!("[Network Error] EmailJS send error. Error message: {:?}", e);
                return Err(anyhow::Error::new(e));
            }
        };

        let status = res.status();
        if !status.is_success() {
            let message = res.text().await.unwrap_or_default();
            error!(
                "[Unexpected Response] EmailJS send error. Status: {}, message: {}",
                status, message
            );
            return Err(anyhow::anyhow!(
                "EmailJS responded with status {}: {}",
                status,
                message
            ));
        }

        Ok(())
    }
}
