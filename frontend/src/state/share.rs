use thiserror::Error;

use crate::i18n::Lang;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShareError {
    #[error("Kakao SDK is not loaded")]
    SdkMissing,
    #[error("Kakao SDK init failed: {0}")]
    Init(String),
    #[error("Kakao share failed: {0}")]
    Send(String),
}

impl ShareError {
    pub fn notice(&self, lang: Lang) -> &'static str {
        let notices = &lang.text().notices;
        match self {
            ShareError::SdkMissing => notices.sdk_missing,
            ShareError::Init(_) | ShareError::Send(_) => notices.share_failed,
        }
    }
}

/// The messaging SDK global loaded by the page.
#[cfg_attr(test, mockall::automock)]
pub trait ShareSdk {
    fn is_loaded(&self) -> bool;
    fn is_initialized(&self) -> bool;
    fn init(&self, app_key: &str) -> Result<(), ShareError>;
    fn send_custom(&self, template_id: u64) -> Result<(), ShareError>;
}

/// Opens the share sheet, initializing the SDK once if it was not ready.
pub fn share_page(sdk: &impl ShareSdk, app_key: &str, template_id: u64) -> Result<(), ShareError> {
    if !sdk.is_loaded() {
        return Err(ShareError::SdkMissing);
    }
    if !sdk.is_initialized() {
        log::info!("Kakao SDK not initialized, initializing now");
        sdk.init(app_key)?;
    }
    sdk.send_custom(template_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn missing_sdk_is_reported_not_called() {
        let mut sdk = MockShareSdk::new();
        sdk.expect_is_loaded().return_const(false);
        sdk.expect_init().never();
        sdk.expect_send_custom().never();

        let err = share_page(&sdk, "key", 1).unwrap_err();
        assert_eq!(err, ShareError::SdkMissing);
        assert_eq!(err.notice(Lang::En), "Kakao SDK not loaded.");
        assert_eq!(err.notice(Lang::Ko), "카카오 SDK를 불러오지 못했습니다.");
    }

    #[test]
    fn uninitialized_sdk_gets_one_init_then_shares() {
        let mut sdk = MockShareSdk::new();
        sdk.expect_is_loaded().return_const(true);
        sdk.expect_is_initialized().return_const(false);
        sdk.expect_init()
            .withf(|key: &str| key == "app-key")
            .times(1)
            .returning(|_| Ok(()));
        sdk.expect_send_custom()
            .with(eq(128038u64))
            .times(1)
            .returning(|_| Ok(()));

        assert_eq!(share_page(&sdk, "app-key", 128038), Ok(()));
    }

    #[test]
    fn ready_sdk_skips_init() {
        let mut sdk = MockShareSdk::new();
        sdk.expect_is_loaded().return_const(true);
        sdk.expect_is_initialized().return_const(true);
        sdk.expect_init().never();
        sdk.expect_send_custom().times(1).returning(|_| Ok(()));

        assert!(share_page(&sdk, "app-key", 7).is_ok());
    }

    #[test]
    fn failed_init_stops_before_sending() {
        let mut sdk = MockShareSdk::new();
        sdk.expect_is_loaded().return_const(true);
        sdk.expect_is_initialized().return_const(false);
        sdk.expect_init()
            .times(1)
            .returning(|_| Err(ShareError::Init("bad key".into())));
        sdk.expect_send_custom().never();

        let err = share_page(&sdk, "app-key", 7).unwrap_err();
        assert_eq!(err.notice(Lang::En), "Error opening Kakao Share.");
    }
}
