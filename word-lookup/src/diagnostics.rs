use std::error::Error;

/// Where failures end up. Users only ever see the generic message.
pub trait DiagnosticsLog: Send + Sync {
    fn log_error(&self, context: &str, error: &(dyn Error + 'static));
}

pub struct TracingLog;

impl DiagnosticsLog for TracingLog {
    fn log_error(&self, context: &str, error: &(dyn Error + 'static)) {
        tracing::error!(context, error = %error_chain(error), "lookup failed");
    }
}

/// `error: cause: root cause`
pub fn error_chain(error: &(dyn Error + 'static)) -> String {
    let mut chain = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}
