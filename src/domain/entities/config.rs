use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const PAGE_SIZES: [usize; 2] = [25, 50];

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct AdminConfig {
    pub theme: ThemeMode,
    pub page_size: usize,
    pub close_delay_ms: u64,
    pub lookup_latency_ms: u64,
    pub confirm_before_delete: bool,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            page_size: PAGE_SIZES[0],
            close_delay_ms: 1500,
            lookup_latency_ms: 1000,
            confirm_before_delete: true,
        }
    }
}

impl AdminConfig {
    /// Page size clamped to one of the supported values.
    pub fn effective_page_size(&self) -> usize {
        if PAGE_SIZES.contains(&self.page_size) {
            self.page_size
        } else {
            PAGE_SIZES[0]
        }
    }

    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }

    pub fn lookup_latency(&self) -> Duration {
        Duration::from_millis(self.lookup_latency_ms)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ThemeMode {
    System,
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_page_size_falls_back_to_default() {
        let mut config = AdminConfig::default();
        config.page_size = 50;
        assert_eq!(config.effective_page_size(), 50);

        config.page_size = 30;
        assert_eq!(config.effective_page_size(), 25);
    }

    #[test]
    fn delays_are_read_as_milliseconds() {
        let config = AdminConfig {
            close_delay_ms: 250,
            lookup_latency_ms: 0,
            ..AdminConfig::default()
        };
        assert_eq!(config.close_delay(), Duration::from_millis(250));
        assert!(config.lookup_latency().is_zero());
    }
}
