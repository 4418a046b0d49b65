//! Build script for dryer-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates dryer.toml and compiles it into a `DryerConfig` constant

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use dryer_core::config::DryerConfig;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    setup_linker(&out_dir);
    generate_config(&out_dir);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse, validate and emit dryer.toml
fn generate_config(out_dir: &Path) {
    println!("cargo:rerun-if-changed=dryer.toml");

    let config_path = Path::new("dryer.toml");
    if !config_path.exists() {
        fail(&["dryer.toml not found!", "", "Create one in the dryer-firmware directory."]);
    }

    let content = fs::read_to_string(config_path)
        .unwrap_or_else(|e| fail(&["Failed to read dryer.toml", "", &e.to_string()]));

    let config: DryerConfig = toml::from_str(&content).unwrap_or_else(|e| {
        let msg = e.to_string();
        let mut lines = vec!["Invalid dryer.toml", ""];
        lines.extend(msg.lines());
        fail(&lines)
    });

    if let Err(e) = config.validate() {
        fail(&["dryer.toml validation failed", "", &format!("{:?}", e)]);
    }

    let code = render(&config);
    fs::write(out_dir.join("dryer_config.rs"), code).unwrap();
    println!("cargo:warning=dryer.toml validated successfully");
}

/// Emit the config as a Rust constant expression
fn render(c: &DryerConfig) -> String {
    let r = &c.regulation;
    let l = &c.limits;
    let k = &c.cadence;
    let t = &c.thermistor;
    format!(
        "// Generated from dryer.toml by build.rs\n\
         pub const DRYER_CONFIG: DryerConfig = DryerConfig {{\n\
         \x20   regulation: RegulationConfig {{ bed_deadband_c: {:?}f32, fan_deadband_c: {:?}f32, fan2_duty: {} }},\n\
         \x20   limits: TargetLimits {{ max_air_temp_c: {:?}f32, max_bed_temp_c: {:?}f32, max_dry_timer_s: {} }},\n\
         \x20   cadence: CadenceConfig {{ input_ms: {}, control_ms: {}, second_ms: {}, humidity_ms: {} }},\n\
         \x20   thermistor: ThermistorConfig {{ pullup_ohms: {}, r0_ohms: {}, t0_c: {:?}f32, beta: {:?}f32, adc_max: {} }},\n\
         \x20   debounce_ms: {},\n\
         }};\n",
        r.bed_deadband_c,
        r.fan_deadband_c,
        r.fan2_duty,
        l.max_air_temp_c,
        l.max_bed_temp_c,
        l.max_dry_timer_s,
        k.input_ms,
        k.control_ms,
        k.second_ms,
        k.humidity_ms,
        t.pullup_ohms,
        t.r0_ohms,
        t.t0_c,
        t.beta,
        t.adc_max,
        c.debounce_ms,
    )
}

/// Abort the build with a boxed error message
fn fail(lines: &[&str]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        body
    );
}
