//! Check command implementation.
//!
//! Reports, for every configured device, whether it can be read on this
//! host. Meant to be run by hand after editing `devices.toml`.

use std::fs;

use nix::unistd::geteuid;
use tracing::{debug, warn};

use genmon_system_status::collectors::current::read_current;
use genmon_system_status::collectors::filesystem::read_disk_capacity;
use genmon_system_status::collectors::meminfo::{legacy_layout_matches, parse_meminfo};
use genmon_system_status::collectors::thermal::read_zone;
use genmon_system_status::config::Config;

/// Checks every configured device. Returns `false` when meminfo is
/// unusable, since no output can be produced without it.
pub fn command_check(config: &Config) -> bool {
    println!("🔍 genmon-system-status - Device Check");
    println!("======================================");

    let mut all_ok = true;

    println!("\n💾 Checking {}...", config.meminfo_path.display());
    match fs::read_to_string(&config.meminfo_path) {
        Ok(content) => match parse_meminfo(&content) {
            Ok(fields) => {
                let snapshot = fields.snapshot();
                println!(
                    "   ✅ All required fields present: memory {:.0}/{:.0}MB, swap {:.0}/{:.0}MB",
                    snapshot.used_memory_mb,
                    snapshot.total_memory_mb,
                    snapshot.used_swap_mb,
                    snapshot.total_swap_mb
                );
                if legacy_layout_matches(&content) {
                    println!("   ✅ Field order matches the classic line layout");
                } else {
                    println!("   ⚠️  Field order differs from the classic line layout (fields are matched by name)");
                    warn!("meminfo line layout differs from legacy positions");
                }
            }
            Err(e) => {
                println!("   ❌ {}", e);
                all_ok = false;
            }
        },
        Err(e) => {
            println!("   ❌ Cannot read: {}", e);
            all_ok = false;
        }
    }

    println!("\n🔋 Checking battery current...");
    match read_current(&config.current_device) {
        Ok(amps) => println!("   ✅ {}: {:.3}A", config.current_device.display(), amps),
        Err(e) => println!("   ⚠️  {} (shown as unavailable)", e),
    }

    println!("\n🌡️  Checking thermal zones...");
    for path in &config.temperature_devices {
        match read_zone(path) {
            Ok(c) => println!("   ✅ {}: {}°C", path.display(), c),
            Err(e) => println!("   ⚠️  {} (shown as unavailable)", e),
        }
    }

    println!("\n📁 Checking mount points...");
    if config.disk_mounts.is_empty() {
        println!("   ℹ️  No mount points configured");
    }
    for mount in &config.disk_mounts {
        match read_disk_capacity(mount) {
            Ok(disk) => println!(
                "   ✅ {}: {:.1}G/{:.1}G",
                mount.display(),
                disk.used_gb,
                disk.total_gb
            ),
            Err(e) => println!("   ⚠️  {} (shown as unavailable)", e),
        }
    }

    println!("\n👤 Checking privileges...");
    let euid = geteuid();
    if euid.is_root() {
        println!("   ✅ Running as root (uid=0)");
    } else {
        println!(
            "   ℹ️  Running as uid={}; not needed here, but panic-poweroff must be setuid root",
            euid
        );
    }
    debug!("Device check finished, all_ok={}", all_ok);

    println!("\n📋 Summary:");
    if all_ok {
        println!("   ✅ Ready - genmon output can be produced");
    } else {
        println!("   ❌ meminfo unusable - please review the errors above");
    }
    all_ok
}
