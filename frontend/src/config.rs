use serde::Deserialize;

/// Delay used by the simulated backend before it reports success.
pub const SIMULATED_DELAY_MS: u32 = 1_000;
/// How long a toast stays on screen before dismissing itself.
pub const TOAST_DURATION_MS: u32 = 4_000;
/// Oldest toasts are dropped once more than this many are queued.
pub const MAX_VISIBLE_TOASTS: usize = 3;

pub const SUCCESS_MESSAGE: &str = "Thanks for joining! We'll be in touch soon.";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

pub const LOGO_SRC: &str = "/assets/logo.png";
pub const LOGO_ALT: &str = "Beep";
pub const BACKGROUND_VIDEO_SRC: &str = "/assets/background.mp4";

/// Styling and copy presets for the landing page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageVariant {
    #[default]
    Midnight,
    Aurora,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub placeholder: &'static str,
    pub footer: &'static str,
    /// Submit button background.
    pub accent: &'static str,
    /// Submit button background while hovered.
    pub accent_hover: &'static str,
    /// Submit button label color.
    pub accent_text: &'static str,
    /// Shown when the background video can't play.
    pub fallback_gradient: &'static str,
}

impl PageConfig {
    pub fn for_variant(variant: PageVariant) -> Self {
        match variant {
            PageVariant::Midnight => Self {
                heading: "agentic payments",
                subtitle: "Something amazing is on the way. Join our waitlist to be the first to know when we launch.",
                placeholder: "Enter your email",
                footer: "Join thousands of others waiting for launch",
                accent: "#ffffff",
                accent_hover: "#e5e7eb",
                accent_text: "#000000",
                fallback_gradient: "linear-gradient(to bottom right, #581c87, #1e3a8a, #312e81)",
            },
            PageVariant::Aurora => Self {
                heading: "agentic payments",
                subtitle: "Payments that run themselves are almost here. Get early access before anyone else.",
                placeholder: "you@company.com",
                footer: "Early access invites go out in waves",
                accent: "#7c3aed",
                accent_hover: "#6d28d9",
                accent_text: "#ffffff",
                fallback_gradient: "linear-gradient(to bottom right, #4c1d95, #0f766e, #1e1b4b)",
            },
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::for_variant(PageVariant::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::value::{Error as ValueError, StrDeserializer};
    use serde::de::IntoDeserializer;

    fn parse(name: &str) -> Result<PageVariant, ValueError> {
        let de: StrDeserializer<ValueError> = name.into_deserializer();
        PageVariant::deserialize(de)
    }

    #[test]
    fn variant_names_are_lowercase() {
        assert_eq!(parse("midnight").unwrap(), PageVariant::Midnight);
        assert_eq!(parse("aurora").unwrap(), PageVariant::Aurora);
        assert!(parse("Aurora").is_err());
        assert!(parse("sunset").is_err());
    }

    #[test]
    fn default_config_is_midnight() {
        assert_eq!(PageConfig::default(), PageConfig::for_variant(PageVariant::Midnight));
        assert_eq!(PageConfig::default().accent, "#ffffff");
    }

    #[test]
    fn variants_share_heading_but_not_styling() {
        let midnight = PageConfig::for_variant(PageVariant::Midnight);
        let aurora = PageConfig::for_variant(PageVariant::Aurora);
        assert_eq!(midnight.heading, aurora.heading);
        assert_ne!(midnight.accent, aurora.accent);
        assert_ne!(midnight.accent_hover, aurora.accent_hover);
        assert_ne!(midnight.subtitle, aurora.subtitle);
    }
}
