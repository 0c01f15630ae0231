use clap::ValueEnum;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_OUTPUT_SIZE, DEFAULT_QR_SIZE, MAX_API_SIZE, MIN_API_SIZE};
use crate::types::{BadgeText, QrText, ValueError};

/// How the badge text is derived from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BadgeMode {
    /// Initials of the URL hostname, falling back to the raw input
    Auto,
    /// No badge
    None,
    /// Initials of the raw input
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Everything one generation needs, validated at construction and immutable
/// afterwards. A fresh value is built per invocation so there is no shared
/// mutable configuration between generations.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    text: QrText,
    badge_mode: BadgeMode,
    theme: Theme,
    output_size: u32,
    qr_size: u32,
}

impl GenerationRequest {
    pub fn new(text: &str, badge_mode: BadgeMode, theme: Theme) -> Result<Self, ValueError> {
        Ok(Self {
            text: QrText::new(text)?,
            badge_mode,
            theme,
            output_size: DEFAULT_OUTPUT_SIZE,
            qr_size: DEFAULT_QR_SIZE,
        })
    }

    /// Change the exported edge length, scaling the embedded QR size by the
    /// default 760/1000 ratio so its bounding box stays inside the card.
    pub fn with_output_size(mut self, output_size: u32) -> Result<Self, ValueError> {
        if output_size == 0 {
            return Err(ValueError::OutputSize);
        }
        let qr_size =
            ((output_size as u64 * DEFAULT_QR_SIZE as u64) / DEFAULT_OUTPUT_SIZE as u64) as u32;
        let qr_size = qr_size.max(1);
        if qr_size >= output_size {
            return Err(ValueError::QrSize);
        }
        self.output_size = output_size;
        self.qr_size = qr_size;
        Ok(self)
    }

    /// Override the embedded QR size explicitly.
    pub fn with_qr_size(mut self, qr_size: u32) -> Result<Self, ValueError> {
        if qr_size == 0 || qr_size >= self.output_size {
            return Err(ValueError::QrSize);
        }
        self.qr_size = qr_size;
        Ok(self)
    }

    /// Pixel size requested from the remote service, clamped so we never ask
    /// for a degenerate resolution.
    pub fn api_size(&self) -> u32 {
        self.output_size.clamp(MIN_API_SIZE, MAX_API_SIZE)
    }

    /// Derive the badge text for the active badge mode.
    pub fn badge_text(&self) -> BadgeText {
        match self.badge_mode {
            BadgeMode::None => BadgeText::empty(),
            BadgeMode::Text => BadgeText::initials(self.text.as_str()),
            BadgeMode::Auto => match Url::parse(self.text.as_str()) {
                Ok(url) => {
                    // First label of the hostname; empty hostnames fall back
                    // to the raw input, like an unparseable URL would.
                    let label = url
                        .host_str()
                        .and_then(|host| host.split('.').next())
                        .unwrap_or_default();
                    if label.is_empty() {
                        BadgeText::initials(self.text.as_str())
                    } else {
                        BadgeText::initials(label)
                    }
                }
                Err(_) => BadgeText::initials(self.text.as_str()),
            },
        }
    }

    pub fn text(&self) -> &QrText {
        &self.text
    }
    pub fn badge_mode(&self) -> BadgeMode {
        self.badge_mode
    }
    pub fn theme(&self) -> Theme {
        self.theme
    }
    pub fn output_size(&self) -> u32 {
        self.output_size
    }
    pub fn qr_size(&self) -> u32 {
        self.qr_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str, badge_mode: BadgeMode) -> GenerationRequest {
        GenerationRequest::new(text, badge_mode, Theme::Light).unwrap()
    }

    #[test]
    fn empty_input_is_rejected_before_anything_else() {
        assert!(GenerationRequest::new("   ", BadgeMode::Auto, Theme::Dark).is_err());
    }

    #[test]
    fn auto_mode_uses_the_first_hostname_label() {
        let badge = request("https://Example.com/path", BadgeMode::Auto).badge_text();
        assert_eq!(badge.as_str(), "EX");
    }

    #[test]
    fn auto_mode_falls_back_to_raw_input_for_non_urls() {
        let badge = request("hello world", BadgeMode::Auto).badge_text();
        assert_eq!(badge.as_str(), "HE");
    }

    #[test]
    fn auto_mode_falls_back_when_the_url_has_no_host() {
        let badge = request("mailto:someone@example.com", BadgeMode::Auto).badge_text();
        assert_eq!(badge.as_str(), "MA");
    }

    #[test]
    fn text_mode_ignores_url_parseability() {
        let badge = request("https://example.com", BadgeMode::Text).badge_text();
        assert_eq!(badge.as_str(), "HT");
    }

    #[test]
    fn none_mode_yields_no_badge() {
        assert!(request("anything", BadgeMode::None).badge_text().is_empty());
    }

    #[test]
    fn badge_text_is_short_and_uppercase_in_every_mode() {
        for mode in [BadgeMode::Auto, BadgeMode::None, BadgeMode::Text] {
            let badge = request("some longer input text", mode).badge_text();
            assert!(badge.as_str().chars().count() <= 2);
            assert!(badge.as_str().chars().all(|c| !c.is_lowercase()));
        }
    }

    #[test]
    fn api_size_is_clamped_to_the_safe_range() {
        let base = request("hello", BadgeMode::None);
        assert_eq!(base.api_size(), MIN_API_SIZE); // default 1000 rounds up
        assert_eq!(
            base.clone().with_output_size(1500).unwrap().api_size(),
            1500
        );
        assert_eq!(
            base.clone().with_output_size(4000).unwrap().api_size(),
            MAX_API_SIZE
        );
        assert_eq!(base.with_output_size(480).unwrap().api_size(), MIN_API_SIZE);
    }

    #[test]
    fn scaled_qr_box_stays_inside_the_canvas() {
        for output_size in (480..=2000).step_by(40) {
            let req = request("hello", BadgeMode::None)
                .with_output_size(output_size)
                .unwrap();
            assert!(req.qr_size() > 0);
            assert!(req.qr_size() < req.output_size());
        }
    }

    #[test]
    fn explicit_qr_size_must_fit_inside_the_output() {
        let req = request("hello", BadgeMode::None);
        assert!(req.clone().with_qr_size(0).is_err());
        assert!(req.clone().with_qr_size(1000).is_err());
        assert_eq!(req.with_qr_size(600).unwrap().qr_size(), 600);
    }

    #[test]
    fn zero_output_size_is_rejected() {
        assert!(request("hello", BadgeMode::None).with_output_size(0).is_err());
    }
}
