//! Build-time settings. Values come from the environment at compile time
//! and fall back to the production defaults.

pub const ASSET_PREFIX: &str = "/Project/";
pub const LOGO: &str = "/logo.png";
pub const HERO_IMAGE: &str = "/Project/hero.jpg";
pub const HERO_FALLBACK: &str =
    "https://images.unsplash.com/photo-1556911220-e15b29be8c8f?q=80&w=2070&auto=format&fit=crop";
pub const BRAND_VIDEO: &str = "/Project/brand-video.mp4";

pub const LEAD_FROM_NAME: &str = "GL Website Inquiry";

pub const CONTACT_EMAIL: &str = "GLdesignBuild703@gmail.com";
pub const KAKAO_OPEN_CHAT: &str = "https://open.kakao.com/o/gQlXUX8h";
pub const FACEBOOK: &str = "https://www.facebook.com/GLdesignBuildcom/photos";
pub const FLICKR: &str = "https://www.flickr.com/photos/90832744@N05/albums/72157700948710755/";
pub const YOUTUBE: &str = "https://www.youtube.com/watch?v=dzmaQedMc9s";
pub const HOME_SOLUTION: &str = "https://aez-homesolution.vercel.app";
pub const STUDIO_HUB: &str = "https://aez-hub.vercel.app/";

pub fn web3forms_endpoint() -> &'static str {
    option_env!("WEB3FORMS_ENDPOINT").unwrap_or("https://api.web3forms.com/submit")
}

pub fn web3forms_access_key() -> &'static str {
    option_env!("WEB3FORMS_ACCESS_KEY").unwrap_or("ad70cc8b-f1de-4b91-a9be-384c9da267c7")
}

pub fn kakao_app_key() -> &'static str {
    option_env!("KAKAO_APP_KEY").unwrap_or("ae953bc09e6d628c5f9a5a3b8487c10e")
}

pub fn kakao_share_template() -> u64 {
    option_env!("KAKAO_SHARE_TEMPLATE_ID")
        .and_then(|id| id.parse().ok())
        .unwrap_or(128038)
}

pub fn asset(name: &str) -> String {
    format!("{}{}", ASSET_PREFIX, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assets_live_under_the_project_prefix() {
        assert_eq!(asset("kitchen-1.jpg"), "/Project/kitchen-1.jpg");
    }

    #[test]
    fn share_template_has_a_default() {
        assert!(kakao_share_template() > 0);
        assert!(web3forms_endpoint().starts_with("https://"));
    }
}
