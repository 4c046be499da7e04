//! Company settings form.

mod validator;

pub use validator::*;

use crate::model::Config;

/// Editable company settings. Empty strings stand for absent optional values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub company_name: String,
    pub company_logo: String,
    pub company_address: String,
    pub company_contact: String,
    pub company_email: String,
    pub facebook_url: String,
    pub instagram_url: String,
    pub tiktok_url: String,
    pub youtube_url: String,
    pub x_url: String,
    pub terms_of_service: String,
    pub privacy_policy: String,
    pub payment_instructions: String,
    pub cookie_message: String,
}

impl SettingsForm {
    /// Seed the form from the saved config.
    pub fn from_config(config: &Config) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            company_name: config.company_name.clone(),
            company_logo: text(&config.company_logo),
            company_address: config.company_address.clone(),
            company_contact: config.company_contact.clone(),
            company_email: config.company_email.clone(),
            facebook_url: text(&config.facebook_url),
            instagram_url: text(&config.instagram_url),
            tiktok_url: text(&config.tiktok_url),
            youtube_url: text(&config.youtube_url),
            x_url: text(&config.x_url),
            terms_of_service: text(&config.terms_of_service),
            privacy_policy: text(&config.privacy_policy),
            payment_instructions: text(&config.payment_instructions),
            cookie_message: text(&config.cookie_message),
        }
    }

    pub fn validate(&self) -> ValidationResult {
        let mut validator = Validator::new()
            .field("company_name", self.company_name.as_str())
            .required("Please enter a company name.")
            .field("company_logo", self.company_logo.as_str())
            .required("Please enter a company logo.")
            .field("company_address", self.company_address.as_str())
            .required("Please enter a company address.")
            .field("company_contact", self.company_contact.trim())
            .min_length(6, "Number must contain at least 6 numbers.")
            .max_length(11, "Number must contain at most 11 numbers.")
            .field("company_email", self.company_email.trim())
            .email("Please enter a valid email.");

        for (name, value) in self.social_links() {
            validator = validator
                .field(name, value)
                .optional()
                .url("Please enter a valid URL.");
        }
        validator.validate()
    }

    fn social_links(&self) -> [(&'static str, &str); 5] {
        [
            ("facebook_url", self.facebook_url.as_str()),
            ("instagram_url", self.instagram_url.as_str()),
            ("tiktok_url", self.tiktok_url.as_str()),
            ("youtube_url", self.youtube_url.as_str()),
            ("x_url", self.x_url.as_str()),
        ]
    }

    /// Write the form back as a config, turning blank optional fields into `None`.
    pub fn into_config(self) -> Config {
        fn optional(v: String) -> Option<String> {
            let v = v.trim();
            (!v.is_empty()).then(|| v.to_string())
        }
        Config {
            company_name: self.company_name.trim().to_string(),
            company_logo: optional(self.company_logo),
            company_contact: self.company_contact.trim().to_string(),
            company_email: self.company_email.trim().to_string(),
            company_address: self.company_address.trim().to_string(),
            facebook_url: optional(self.facebook_url),
            instagram_url: optional(self.instagram_url),
            tiktok_url: optional(self.tiktok_url),
            youtube_url: optional(self.youtube_url),
            x_url: optional(self.x_url),
            terms_of_service: optional(self.terms_of_service),
            privacy_policy: optional(self.privacy_policy),
            payment_instructions: optional(self.payment_instructions),
            cookie_message: optional(self.cookie_message),
        }
    }
}
