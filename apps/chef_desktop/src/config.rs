use std::{fs, io, path::Path};

use anyhow::Context;

const TEXT_SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.5..=3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub log_filter: String,
    pub text_scale: f32,
    pub seed_demo: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Chef App".into(),
            window_width: 420.0,
            window_height: 760.0,
            log_filter: "info".into(),
            text_scale: 1.0,
            seed_demo: false,
        }
    }
}

/// Settings plus the override values that were present but unusable.
#[derive(Debug, Clone, Default)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub ignored: Vec<String>,
}

/// Defaults, then the TOML file at `path` if it exists, then `CHEF_APP__*`
/// environment variables. Only unreadable or syntactically broken files are
/// errors; unknown keys and bad values are skipped one by one.
pub fn load_settings(path: &Path) -> anyhow::Result<LoadedSettings> {
    let mut loaded = LoadedSettings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg = toml::from_str::<toml::Table>(&raw)
                .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
            apply_file_settings(&mut loaded, &file_cfg);
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()));
        }
    }

    apply_env_overrides(&mut loaded, |name| std::env::var(name).ok());
    Ok(loaded)
}

#[derive(Debug, Clone, Copy)]
enum Dimension {
    Width,
    Height,
}

fn apply_file_settings(loaded: &mut LoadedSettings, file_cfg: &toml::Table) {
    for (key, value) in file_cfg {
        match key.as_str() {
            "window_title" | "log_filter" => {
                let Some(text) = value.as_str() else {
                    loaded.ignored.push(format!("{key}={value} is not a string"));
                    continue;
                };
                if key == "window_title" {
                    loaded.settings.window_title = text.to_string();
                } else {
                    loaded.settings.log_filter = text.to_string();
                }
            }
            "window_width" | "window_height" | "text_scale" => {
                let number = match value {
                    toml::Value::Float(v) => *v as f32,
                    toml::Value::Integer(v) => *v as f32,
                    _ => {
                        loaded.ignored.push(format!("{key}={value} is not a number"));
                        continue;
                    }
                };
                match key.as_str() {
                    "window_width" => set_dimension(loaded, Dimension::Width, key, number),
                    "window_height" => set_dimension(loaded, Dimension::Height, key, number),
                    _ => set_text_scale(loaded, key, number),
                }
            }
            "seed_demo" => match value.as_bool() {
                Some(flag) => loaded.settings.seed_demo = flag,
                None => loaded.ignored.push(format!("{key}={value} is not a boolean")),
            },
            _ => loaded.ignored.push(format!("unknown setting '{key}'")),
        }
    }
}

fn apply_env_overrides(loaded: &mut LoadedSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("CHEF_APP__WINDOW_TITLE") {
        loaded.settings.window_title = v;
    }
    if let Some(v) = lookup("CHEF_APP__LOG_FILTER") {
        loaded.settings.log_filter = v;
    }

    for name in ["CHEF_APP__WINDOW_WIDTH", "CHEF_APP__WINDOW_HEIGHT", "CHEF_APP__TEXT_SCALE"] {
        let Some(raw) = lookup(name) else {
            continue;
        };
        let Ok(parsed) = raw.trim().parse::<f32>() else {
            loaded
                .ignored
                .push(format!("{name}={raw:?} is not a number; keeping previous value"));
            continue;
        };
        match name {
            "CHEF_APP__WINDOW_WIDTH" => set_dimension(loaded, Dimension::Width, name, parsed),
            "CHEF_APP__WINDOW_HEIGHT" => set_dimension(loaded, Dimension::Height, name, parsed),
            _ => set_text_scale(loaded, name, parsed),
        }
    }

    if let Some(raw) = lookup("CHEF_APP__SEED_DEMO") {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => loaded.settings.seed_demo = true,
            "0" | "false" | "no" => loaded.settings.seed_demo = false,
            _ => loaded
                .ignored
                .push(format!("CHEF_APP__SEED_DEMO={raw:?} is not a boolean")),
        }
    }
}

fn set_dimension(loaded: &mut LoadedSettings, dimension: Dimension, key: &str, value: f32) {
    if !value.is_finite() || value <= 0.0 {
        loaded
            .ignored
            .push(format!("{key}={value} must be a positive size"));
        return;
    }
    match dimension {
        Dimension::Width => loaded.settings.window_width = value,
        Dimension::Height => loaded.settings.window_height = value,
    }
}

fn set_text_scale(loaded: &mut LoadedSettings, key: &str, value: f32) {
    if !TEXT_SCALE_RANGE.contains(&value) {
        loaded.ignored.push(format!(
            "{key}={value} is outside {}..={}",
            TEXT_SCALE_RANGE.start(),
            TEXT_SCALE_RANGE.end()
        ));
        return;
    }
    loaded.settings.text_scale = value;
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
