//! Build script for panel-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates bridge.toml at compile time
//! - Generates the configuration constants the firmware is built with

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use panel_core::config::BridgeConfig;

fn main() {
    setup_linker();
    let config = validate_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate bridge.toml configuration at compile time
fn validate_config() -> BridgeConfig {
    // Re-run if bridge.toml changes
    println!("cargo:rerun-if-changed=bridge.toml");

    let config_path = Path::new("bridge.toml");

    // A missing file means stock settings
    if !config_path.exists() {
        println!("cargo:warning=bridge.toml not found, using default configuration");
        return BridgeConfig::default();
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read bridge.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Syntax first, so the message points at the TOML problem
    let value: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in bridge.toml                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    validate_known_keys(&value);

    let config = match value.try_into::<BridgeConfig>() {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid value in bridge.toml                             ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Configuration out of range in bridge.toml                ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            ║  • {:<62} ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            e.describe()
        );
    }

    println!("cargo:warning=bridge.toml validated successfully");
    config
}

/// Reject misspelled sections and keys, which serde would silently ignore
fn validate_known_keys(value: &toml::Value) {
    const SECTIONS: &[(&str, &[&str])] = &[
        ("serial", &["baudrate", "tx_timeout_ms"]),
        ("analog", &["threshold", "pot0_input", "pot1_input"]),
        ("buttons", &["debounce_ms"]),
    ];

    let mut errors = Vec::new();

    if let toml::Value::Table(root) = value {
        for (name, section) in root {
            let Some((_, keys)) = SECTIONS.iter().find(|(s, _)| *s == name.as_str()) else {
                errors.push(format!("Unknown section [{}]", name));
                continue;
            };
            let toml::Value::Table(section) = section else {
                errors.push(format!("[{}] must be a table", name));
                continue;
            };
            for key in section.keys() {
                if !keys.contains(&key.as_str()) {
                    errors.push(format!("[{}] unknown key '{}'", name, key));
                }
            }
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Unexpected entries in bridge.toml                        ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}

/// Write the validated configuration as Rust constants
fn generate_config(config: &BridgeConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("bridge_config.rs")).unwrap();
    writeln!(f, "// Generated from bridge.toml by build.rs").unwrap();
    writeln!(f, "pub const BAUDRATE: u32 = {};", config.serial.baudrate).unwrap();
    writeln!(f, "pub const TX_TIMEOUT_MS: u32 = {};", config.serial.tx_timeout_ms).unwrap();
    writeln!(f, "pub const REPORT_THRESHOLD: u16 = {};", config.analog.threshold).unwrap();
    writeln!(f, "pub const POT0_INPUT: u8 = {};", config.analog.pot0_input).unwrap();
    writeln!(f, "pub const POT1_INPUT: u8 = {};", config.analog.pot1_input).unwrap();
    writeln!(f, "pub const DEBOUNCE_MS: u32 = {};", config.buttons.debounce_ms).unwrap();
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
