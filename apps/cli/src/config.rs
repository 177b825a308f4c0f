use std::path::PathBuf;
use std::time::Duration;

use tickertape_core::WindowMode;

const DEFAULT_SYMBOLS: &str = "AAPL,GOOGL,MSFT,AMZN,TSLA,META,NVDA,SPY";
const DEFAULT_INDEX_SYMBOLS: &str = "^GSPC,^DJI,^IXIC,^VIX";

pub struct Config {
    pub symbols: Vec<String>,
    pub index_symbols: Vec<String>,
    pub data_dir: PathBuf,
    pub window_mode: WindowMode,
    pub rotation_interval: Duration,
    pub quote_refresh: Duration,
    pub news_refresh: Duration,
    pub demo: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let symbols = parse_list(
            &std::env::var("TT_SYMBOLS").unwrap_or_else(|_| DEFAULT_SYMBOLS.into()),
        );
        let index_symbols = parse_list(
            &std::env::var("TT_INDEX_SYMBOLS").unwrap_or_else(|_| DEFAULT_INDEX_SYMBOLS.into()),
        );
        let data_dir =
            PathBuf::from(std::env::var("TT_DATA_DIR").unwrap_or_else(|_| "./data".into()));
        let window_mode = parse_window_mode(
            &std::env::var("TT_WINDOW").unwrap_or_else(|_| "adaptive".into()),
        );
        let rotation_secs: u64 = std::env::var("TT_ROTATION_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(|| default_rotation_secs(window_mode));
        let quote_refresh_secs: u64 = std::env::var("TT_QUOTE_REFRESH_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .unwrap_or(60);
        let news_refresh_secs: u64 = std::env::var("TT_NEWS_REFRESH_SECS")
            .unwrap_or_else(|_| "300".into())
            .parse()
            .unwrap_or(300);
        let demo = std::env::var("TT_DEMO")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            symbols,
            index_symbols,
            data_dir,
            window_mode,
            rotation_interval: Duration::from_secs(rotation_secs),
            quote_refresh: Duration::from_secs(quote_refresh_secs),
            news_refresh: Duration::from_secs(news_refresh_secs),
            demo,
        }
    }

    /// Where read links are remembered between runs.
    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join("read_history.json")
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// `adaptive` or a window size; anything unparseable falls back to
/// adaptive rather than refusing to start.
fn parse_window_mode(raw: &str) -> WindowMode {
    if raw.eq_ignore_ascii_case("adaptive") {
        return WindowMode::Adaptive;
    }
    match raw.parse::<usize>() {
        Ok(size) if size >= 1 => WindowMode::Fixed(size),
        _ => WindowMode::Adaptive,
    }
}

/// Single items linger a little longer than pairs; adaptive mixes both
/// and gets the slowest cadence.
fn default_rotation_secs(mode: WindowMode) -> u64 {
    match mode {
        WindowMode::Adaptive => 6,
        WindowMode::Fixed(1) => 5,
        WindowMode::Fixed(_) => 4,
    }
}
