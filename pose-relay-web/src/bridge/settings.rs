//! Runtime configuration shared by the producer and consumer bridges

use std::cell::RefCell;
use std::str::FromStr;
use wasm_bindgen::prelude::*;
use crate::config::{ClassifierConfig, Config, RelayConfig};

thread_local! {
    static CONFIG: RefCell<Config> = RefCell::new(Config::default());
}

pub(crate) fn classifier_config() -> ClassifierConfig {
    CONFIG.with(|c| c.borrow().classifier.clone())
}

pub(crate) fn relay_config() -> RelayConfig {
    CONFIG.with(|c| c.borrow().relay.clone())
}

/// Replace thresholds from a JSON object; omitted fields keep their defaults.
/// Running tasks pick up the new relay key and staleness window immediately;
/// a new poll interval applies on the next `start_monitor`.
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsValue> {
    let config = Config::from_json(json)?;

    super::producer::apply_relay_config(&config.relay);
    super::consumer::apply_relay_config(&config.relay);

    CONFIG.with(|c| *c.borrow_mut() = config);
    log::info!("Configuration updated");
    Ok(())
}

/// "error" | "warn" | "info" | "debug" | "trace" | "off"
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = log::LevelFilter::from_str(level)
        .map_err(|_| JsValue::from_str(&format!("Unknown log level: {}", level)))?;
    log::set_max_level(filter);
    Ok(())
}
