use serde::{Deserialize, Serialize};

/// Company details, policies and social links shown across the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Config {
    pub company_name: String,
    #[serde(default)]
    pub company_logo: Option<String>,
    pub company_contact: String,
    pub company_email: String,
    pub company_address: String,
    #[serde(default)]
    pub facebook_url: Option<String>,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub tiktok_url: Option<String>,
    #[serde(default)]
    pub youtube_url: Option<String>,
    #[serde(default)]
    pub x_url: Option<String>,
    #[serde(default)]
    pub terms_of_service: Option<String>,
    #[serde(default)]
    pub privacy_policy: Option<String>,
    #[serde(default)]
    pub payment_instructions: Option<String>,
    #[serde(default)]
    pub cookie_message: Option<String>,
}
