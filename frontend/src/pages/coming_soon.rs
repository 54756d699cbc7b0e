use std::fmt::Display;

use serde::Deserialize;
use yew::prelude::*;
use yew_router::hooks::use_location;

use crate::components::waitlist_form::WaitlistFormView;
use crate::config::{PageConfig, PageVariant, BACKGROUND_VIDEO_SRC, LOGO_ALT, LOGO_SRC};

#[derive(Deserialize, Debug, Default, PartialEq)]
struct VariantQuery {
    #[serde(default)]
    variant: Option<PageVariant>,
}

fn resolve_variant<E: Display>(query: Result<VariantQuery, E>) -> PageVariant {
    match query {
        Ok(query) => query.variant.unwrap_or_default(),
        Err(e) => {
            log::warn!("Unreadable page query, using default variant: {}", e);
            PageVariant::default()
        }
    }
}

#[function_component(ComingSoon)]
pub fn coming_soon() -> Html {
    let variant = match use_location() {
        Some(location) => resolve_variant(location.query::<VariantQuery>()),
        None => PageVariant::default(),
    };
    let config = PageConfig::for_variant(variant);

    html! {
        <div class="coming-soon">
            <style>{PAGE_CSS}</style>
            <div class="coming-soon-background">
                <video class="coming-soon-video" autoplay=true loop=true muted=true playsinline=true>
                    <source src={BACKGROUND_VIDEO_SRC} type="video/mp4" />
                    <div class="coming-soon-fallback" style={format!("background: {};", config.fallback_gradient)}></div>
                </video>
            </div>
            <div class="coming-soon-overlay"></div>

            <div class="coming-soon-content">
                <div class="coming-soon-logo">
                    <img src={LOGO_SRC} alt={LOGO_ALT} />
                </div>

                <div class="coming-soon-copy">
                    <h1>{config.heading}</h1>
                    <p>{config.subtitle}</p>
                </div>

                <div class="coming-soon-form">
                    <WaitlistFormView config={config.clone()} />
                </div>

                <div class="coming-soon-footer">
                    <p>{config.footer}</p>
                </div>
            </div>
        </div>
    }
}

const PAGE_CSS: &str = r#"
.coming-soon {
    min-height: 100vh;
    position: relative;
    overflow: hidden;
    background: #000;
}
.coming-soon-background {
    position: absolute;
    inset: 0;
    z-index: 0;
}
.coming-soon-video,
.coming-soon-fallback {
    width: 100%;
    height: 100%;
    object-fit: cover;
    opacity: 0.4;
}
.coming-soon-overlay {
    position: absolute;
    inset: 0;
    z-index: 5;
    background: rgba(0, 0, 0, 0.3);
    pointer-events: none;
}
.coming-soon-content {
    position: relative;
    z-index: 10;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    min-height: 100vh;
    padding: 0 1rem;
    text-align: center;
}
.coming-soon-logo {
    margin-bottom: 2rem;
    animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}
.coming-soon-logo img {
    height: 4rem;
    width: auto;
}
.coming-soon-copy {
    margin-bottom: 3rem;
}
.coming-soon-copy h1 {
    font-size: 2.25rem;
    font-weight: 700;
    color: #fff;
    letter-spacing: -0.025em;
    margin-bottom: 1rem;
}
.coming-soon-copy p {
    font-size: 1.125rem;
    color: #d1d5db;
    max-width: 42rem;
    margin: 0 auto;
}
.coming-soon-form {
    width: 100%;
    max-width: 28rem;
}
.waitlist-row {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}
.waitlist-input {
    flex: 1;
    padding: 0.5rem 0.75rem;
    border-radius: 6px;
    background: rgba(255, 255, 255, 0.1);
    border: 1px solid rgba(255, 255, 255, 0.2);
    color: #fff;
    backdrop-filter: blur(4px);
}
.waitlist-input::placeholder {
    color: #9ca3af;
}
.waitlist-input:focus {
    outline: none;
    border-color: rgba(255, 255, 255, 0.4);
    background: rgba(255, 255, 255, 0.2);
}
.waitlist-button {
    padding: 0.5rem 2rem;
    border: none;
    border-radius: 6px;
    font-weight: 500;
    cursor: pointer;
    transition: background-color 0.2s ease;
}
.waitlist-button:disabled {
    opacity: 0.6;
    cursor: not-allowed;
}
.coming-soon-footer {
    margin-top: 4rem;
}
.coming-soon-footer p {
    font-size: 0.875rem;
    color: #6b7280;
}
@keyframes pulse {
    50% { opacity: 0.5; }
}
@media (min-width: 640px) {
    .waitlist-row {
        flex-direction: row;
    }
}
@media (min-width: 768px) {
    .coming-soon-logo img {
        height: 6rem;
    }
    .coming-soon-copy h1 {
        font-size: 3.75rem;
    }
    .coming-soon-copy p {
        font-size: 1.25rem;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variant_uses_default() {
        let query: Result<VariantQuery, String> = Ok(VariantQuery::default());
        assert_eq!(resolve_variant(query), PageVariant::Midnight);
    }

    #[test]
    fn known_variant_is_used() {
        let query: Result<VariantQuery, String> = Ok(VariantQuery {
            variant: Some(PageVariant::Aurora),
        });
        assert_eq!(resolve_variant(query), PageVariant::Aurora);
    }

    #[test]
    fn unreadable_query_falls_back() {
        let query: Result<VariantQuery, String> = Err("unknown variant `sunset`".to_string());
        assert_eq!(resolve_variant(query), PageVariant::Midnight);
    }
}
