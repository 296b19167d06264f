use std::{env, fs, net::SocketAddr, path::PathBuf, str::FromStr};
use tokio::net::TcpListener;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Keeps the non-blocking file writer flushing until dropped.
pub struct TracingGuards {
    _file_guard: Option<WorkerGuard>,
}

pub fn init_tracing(service_name: &str) -> TracingGuards {
    // RUST_LOG overrides the default filter.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = fmt::layer().with_writer(std::io::stdout);
    let mut file_guard: Option<WorkerGuard> = None;
    let mut file_layer = None;

    // File logging is opt-in; the service runs fine with stdout only.
    if let Ok(log_dir) = env::var("LOG_DIR") {
        let log_root = PathBuf::from(log_dir).join(service_name);
        if fs::create_dir_all(&log_root).is_ok() {
            let appender =
                tracing_appender::rolling::daily(&log_root, format!("{service_name}.log"));
            let (writer, guard) = tracing_appender::non_blocking(appender);
            file_layer = Some(fmt::layer().with_ansi(false).with_writer(writer));
            file_guard = Some(guard);
        }
    }

    let subscriber = Registry::default()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer);
    let _ = tracing::subscriber::set_global_default(subscriber);

    TracingGuards {
        _file_guard: file_guard,
    }
}

pub fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse::<T>().ok())
        .unwrap_or(default)
}

/// Reads a boolean switch such as `CORS_ENABLED=1`. Unrecognized values fall back to `default`.
pub fn env_flag(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|value| parse_flag(&value))
        .unwrap_or(default)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub async fn bind_listener(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    Ok(listener)
}

pub async fn shutdown_signal() {
    // Handle ctrl-c and SIGTERM to allow graceful shutdown.
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {},
                    _ = sigterm.recv() => {},
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "sigterm handler unavailable, waiting on ctrl-c only");
                let _ = ctrl_c.await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = ctrl_c.await;
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flag_accepts_common_spellings() {
        for raw in ["1", "true", "TRUE", " yes ", "On"] {
            assert_eq!(parse_flag(raw), Some(true), "{raw:?}");
        }
        for raw in ["0", "false", "No", "off"] {
            assert_eq!(parse_flag(raw), Some(false), "{raw:?}");
        }
        assert_eq!(parse_flag("maybe"), None);
        assert_eq!(parse_flag(""), None);
    }

    #[test]
    fn env_flag_falls_back_on_missing_or_garbage() {
        assert!(env_flag("TEMPERATURE_COMMON_TEST_FLAG_MISSING", true));
        env::set_var("TEMPERATURE_COMMON_TEST_FLAG_GARBAGE", "sometimes");
        assert!(!env_flag("TEMPERATURE_COMMON_TEST_FLAG_GARBAGE", false));
        env::set_var("TEMPERATURE_COMMON_TEST_FLAG_SET", "yes");
        assert!(env_flag("TEMPERATURE_COMMON_TEST_FLAG_SET", false));
    }

    #[test]
    fn env_or_parses_typed_values() {
        env::set_var("TEMPERATURE_COMMON_TEST_PORT", "5050");
        assert_eq!(env_or("TEMPERATURE_COMMON_TEST_PORT", 5000u16), 5050);
        env::set_var("TEMPERATURE_COMMON_TEST_PORT_BAD", "not-a-port");
        assert_eq!(env_or("TEMPERATURE_COMMON_TEST_PORT_BAD", 5000u16), 5000);
    }

    #[tokio::test]
    async fn bind_listener_picks_ephemeral_port() {
        let listener = bind_listener(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("bind");
        assert_ne!(listener.local_addr().expect("addr").port(), 0);
    }
}
