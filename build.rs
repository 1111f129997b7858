// Build script - reads config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const NOTCH_DEPTH: f64 = {notch_depth:?};
pub const ANIMATION_MS: u64 = {animation_ms};
pub const BUTTON_WIDTH: f64 = {button_width:?};
pub const BAR_HEIGHT: f64 = {bar_height:?};
pub const RESTING_OFFSET: f64 = {resting_offset:?};
pub const LIFTED_OFFSET: f64 = {lifted_offset:?};

pub const CELL_WIDTH: f64 = {cell_width:?};
pub const CELL_HEIGHT: f64 = {cell_height:?};
pub const CURVE_STEPS: usize = {curve_steps};
pub const MOUSE_ENABLED: bool = {mouse_enabled};

// Bar and button colors (RGB tuples)
pub const BAR_COLOR: (u8, u8, u8) = {bar_color};
pub const ACCENT_COLOR: (u8, u8, u8) = {accent_color};
pub const TINT_COLOR: (u8, u8, u8) = {tint_color};
"#,
        notch_depth = config.notch_depth,
        animation_ms = config.animation_ms,
        button_width = config.button_width,
        bar_height = config.bar_height,
        resting_offset = config.resting_offset,
        lifted_offset = config.lifted_offset,
        cell_width = config.cell_width,
        cell_height = config.cell_height,
        curve_steps = config.curve_steps,
        mouse_enabled = config.mouse_enabled,
        bar_color = rgb_literal(config.bar_color),
        accent_color = rgb_literal(config.accent_color),
        tint_color = rgb_literal(config.tint_color),
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    notch_depth: f64,
    animation_ms: u64,
    button_width: f64,
    bar_height: f64,
    resting_offset: f64,
    lifted_offset: f64,
    cell_width: f64,
    cell_height: f64,
    curve_steps: usize,
    mouse_enabled: bool,
    bar_color: (u8, u8, u8),
    accent_color: (u8, u8, u8),
    tint_color: (u8, u8, u8),
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            notch_depth: 40.0,
            animation_ms: 300,
            button_width: 60.0,
            bar_height: 90.0,
            resting_offset: 25.0,
            lifted_offset: 0.0,
            cell_width: 8.0,
            cell_height: 16.0,
            curve_steps: 24,
            mouse_enabled: true,
            bar_color: (17, 17, 17),      // #111111
            accent_color: (10, 132, 255), // #0a84ff
            tint_color: (255, 255, 255),  // #ffffff
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_wave = false;
    let mut in_display = false;
    let mut in_colors = false;

    for line in content.lines() {
        let trimmed = line.trim();

        // Top-level keys switch sections
        if !line.starts_with(' ') && !line.starts_with('\t') && !trimmed.is_empty() && !trimmed.starts_with('#') {
            in_wave = trimmed.starts_with("wave:");
            in_display = trimmed.starts_with("display:");
            in_colors = trimmed.starts_with("colors:");
            continue;
        }

        let Some((key, value)) = parse_kv(trimmed) else {
            continue;
        };

        if in_wave {
            match key {
                "notch_depth" => config.notch_depth = value.parse().unwrap_or(config.notch_depth),
                "animation_ms" => config.animation_ms = value.parse().unwrap_or(config.animation_ms),
                "button_width" => config.button_width = value.parse().unwrap_or(config.button_width),
                "bar_height" => config.bar_height = value.parse().unwrap_or(config.bar_height),
                "resting_offset" => config.resting_offset = value.parse().unwrap_or(config.resting_offset),
                "lifted_offset" => config.lifted_offset = value.parse().unwrap_or(config.lifted_offset),
                _ => {}
            }
        } else if in_display {
            match key {
                "cell_width" => config.cell_width = value.parse().unwrap_or(config.cell_width),
                "cell_height" => config.cell_height = value.parse().unwrap_or(config.cell_height),
                "curve_steps" => config.curve_steps = value.parse().unwrap_or(config.curve_steps),
                "mouse_enabled" => config.mouse_enabled = parse_bool(value),
                _ => {}
            }
        } else if in_colors {
            match key {
                "bar" => config.bar_color = parse_hex_color(value).unwrap_or(config.bar_color),
                "accent" => config.accent_color = parse_hex_color(value).unwrap_or(config.accent_color),
                "tint" => config.tint_color = parse_hex_color(value).unwrap_or(config.tint_color),
                _ => {}
            }
        }
    }

    // Keep floats printable as float literals
    for value in [
        &mut config.notch_depth,
        &mut config.button_width,
        &mut config.bar_height,
        &mut config.resting_offset,
        &mut config.lifted_offset,
        &mut config.cell_width,
        &mut config.cell_height,
    ] {
        if !value.is_finite() {
            *value = 0.0;
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    // Skip comments and empty lines
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments but keep a leading # (hex color)
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    if value.is_empty() {
        return None;
    }

    Some((key, value.trim_matches('"').trim_matches('\'')))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim().trim_start_matches('#');
    if s.len() != 6 {
        return None;
    }
    Some((
        u8::from_str_radix(&s[0..2], 16).ok()?,
        u8::from_str_radix(&s[2..4], 16).ok()?,
        u8::from_str_radix(&s[4..6], 16).ok()?,
    ))
}

fn rgb_literal((r, g, b): (u8, u8, u8)) -> String {
    format!("({}, {}, {})", r, g, b)
}
