use crate::constants::CONFIG_ATTR;
use wavefield_core::FieldConfig;

/// Build a config from the raw `data-wave-config` attribute. Absent or
/// malformed JSON falls back to defaults. Unless the JSON pins `line_seed`,
/// the seed comes from `random_seed`.
pub fn parse_field_config(raw: Option<&str>, random_seed: impl FnOnce() -> u64) -> FieldConfig {
    let parsed = raw.map(|raw| {
        serde_json::from_str::<serde_json::Value>(raw).and_then(|value| {
            let pinned = value.get("line_seed").is_some();
            serde_json::from_value::<FieldConfig>(value).map(|cfg| (cfg, pinned))
        })
    });
    match parsed {
        Some(Ok((cfg, true))) => cfg,
        Some(Ok((cfg, false))) => FieldConfig {
            line_seed: random_seed(),
            ..cfg
        },
        Some(Err(e)) => {
            log::warn!("[waves] ignoring {}: {}", CONFIG_ATTR, e);
            FieldConfig {
                line_seed: random_seed(),
                ..FieldConfig::default()
            }
        }
        None => FieldConfig {
            line_seed: random_seed(),
            ..FieldConfig::default()
        },
    }
}
