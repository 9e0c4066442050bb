use log::{debug, warn};

use super::toast::Notifier;
use crate::api::ApiResult;

/// One toast for a one-off mutation (delete, status change). The server
/// message wins over the fallbacks when it says anything.
pub fn report_outcome<T>(
    notifier: &dyn Notifier,
    result: ApiResult<T>,
    success_fallback: &str,
    error_fallback: &str,
) -> Option<T> {
    match result {
        Ok(reply) => {
            let message = Some(reply.message.trim())
                .filter(|m| !m.is_empty())
                .unwrap_or(success_fallback)
                .to_string();
            debug!("Mutation succeeded: {}", message);
            notifier.success(&message);
            Some(reply.data)
        }
        Err(err) => {
            warn!("Mutation failed ({}): {}", err.code, err.error);
            notifier.error(&err.message_or(error_fallback));
            None
        }
    }
}
