//! Telegram delivery of watchdog notices.

pub(crate) mod error;
pub(crate) mod telegram;

pub use error::{NotifyError, NotifyResult};
pub use telegram::TelegramNotifier;
