use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` 優先，否則只開啟本 crate 的指定等級
fn crate_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("merge_client={}", level)))
}

/// CLI 使用：精簡格式輸出到 stderr，stdout 只留給 JSON 結果
pub fn init_cli_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact();

    // 已經有全域 subscriber 時保留原本的
    let _ = tracing_subscriber::registry()
        .with(crate_filter(level))
        .with(layer)
        .try_init();
}

/// 服務環境使用 JSON 格式，方便集中收集
pub fn init_json_logger(level: Option<&str>) {
    let layer = fmt::layer()
        .with_target(false)
        .json()
        .with_current_span(false);

    let _ = tracing_subscriber::registry()
        .with(crate_filter(level.unwrap_or("info")))
        .with(layer)
        .try_init();
}
