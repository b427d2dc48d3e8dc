//! genmon markup rendering.
//!
//! Turns a [`Snapshot`] into the two blocks the xfce4 genmon applet reads
//! from stdout: the panel title (with its click-to-refresh action) and the
//! tooltip. Rendering is pure; the same snapshot and panel id always give
//! the same bytes.

use std::fmt;

use crate::collectors::filesystem::DiskUsage;
use crate::snapshot::Snapshot;

/// Shown in place of a reading that could not be taken.
pub const UNAVAILABLE: &str = "--";

const TITLE_SPAN: &str = "<span font-family='sans' font-weight='bold' color='#BBC3C8'>";
const TOOLTIP_SPAN: &str = "<span font-family='monospace'>";
const LABEL_WIDTH: usize = 20;
const DISK_LABEL_WIDTH: usize = LABEL_WIDTH - "Disk ".len();
const MB_PER_GB: f64 = 1024.0;

/// Rendered title and tooltip blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub title: String,
    pub tooltip: String,
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.title, self.tooltip)
    }
}

/// Renders a snapshot for the panel instance `panel_id`.
pub fn render(snapshot: &Snapshot, panel_id: i64) -> Rendered {
    Rendered {
        title: render_title(snapshot, panel_id),
        tooltip: render_tooltip(snapshot),
    }
}

/// Renders the output used when a sample could not be taken at all.
pub fn render_failure(panel_id: i64, message: &str) -> Rendered {
    Rendered {
        title: format!(
            "{}\n<txt>{}ERR</span></txt>",
            refresh_action(panel_id),
            TITLE_SPAN
        ),
        tooltip: format!(
            "<tool>{}{}</span></tool>",
            TOOLTIP_SPAN,
            escape_markup(message)
        ),
    }
}

/// The click-to-refresh action for a genmon panel instance.
pub fn refresh_action(panel_id: i64) -> String {
    format!(
        "<txtclick>xfce4-panel --plugin-event=genmon-{}:refresh:bool:true</txtclick>",
        panel_id
    )
}

/// Compact line: memory, swap, current, max temperature, then used space
/// per mount.
pub fn render_title(snapshot: &Snapshot, panel_id: i64) -> String {
    let mut text = format!(
        "{}G {}G  {}A  {}°C ",
        gigabytes(snapshot.memory.used_memory_mb),
        gigabytes(snapshot.memory.used_swap_mb),
        amps(snapshot.current),
        celsius(snapshot.temperature.max()),
    );
    for disk in &snapshot.disks {
        text.push_str(&format!(" {}G", disk_used(disk)));
    }

    format!(
        "{}\n<txt>{}{}</span></txt>",
        refresh_action(panel_id),
        TITLE_SPAN,
        text
    )
}

/// One line per metric with labels padded to a fixed column.
pub fn render_tooltip(snapshot: &Snapshot) -> String {
    let memory = &snapshot.memory;
    let mut lines = vec![
        format!(
            "{:<width$}{}G/{}G",
            "Memory",
            gigabytes(memory.used_memory_mb),
            gigabytes(memory.total_memory_mb),
            width = LABEL_WIDTH
        ),
        format!(
            "{:<width$}{}G/{}G",
            "Swap",
            gigabytes(memory.used_swap_mb),
            gigabytes(memory.total_swap_mb),
            width = LABEL_WIDTH
        ),
        format!(
            "{:<width$}{}A",
            "Current",
            amps(snapshot.current),
            width = LABEL_WIDTH
        ),
    ];

    let zones: Vec<String> = snapshot
        .temperature
        .zones
        .iter()
        .map(|z| format!("{}°C", celsius(z.celsius)))
        .collect();
    lines.push(format!(
        "{:<width$}{}",
        "Temperature",
        zones.join(" "),
        width = LABEL_WIDTH
    ));

    for disk in &snapshot.disks {
        let total = disk
            .capacity
            .map(|c| format!("{:.1}", c.total_gb))
            .unwrap_or_else(|| UNAVAILABLE.to_string());
        lines.push(format!(
            "Disk {:<width$}{}G/{}G",
            escape_markup(&disk.mount.display().to_string()),
            disk_used(disk),
            total,
            width = DISK_LABEL_WIDTH
        ));
    }

    format!("<tool>{}{}</span></tool>", TOOLTIP_SPAN, lines.join("\n"))
}

fn gigabytes(mb: f64) -> String {
    format!("{:.2}", mb / MB_PER_GB)
}

fn amps(current: Option<f64>) -> String {
    current
        .map(|a| format!("{:.3}", a))
        .unwrap_or_else(|| UNAVAILABLE.to_string())
}

fn celsius(value: Option<i64>) -> String {
    value
        .map(|c| c.to_string())
        .unwrap_or_else(|| UNAVAILABLE.to_string())
}

fn disk_used(disk: &DiskUsage) -> String {
    disk.capacity
        .map(|c| format!("{:.1}", c.used_gb))
        .unwrap_or_else(|| UNAVAILABLE.to_string())
}

/// Escapes the characters Pango markup treats specially.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collectors::filesystem::DiskCapacity;
    use crate::collectors::meminfo::MemorySnapshot;
    use crate::collectors::thermal::{TemperatureSnapshot, ThermalZone};
    use chrono::TimeZone;
    use std::path::PathBuf;

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            sampled_at: chrono::Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            memory: MemorySnapshot {
                used_memory_mb: 1024.0,
                total_memory_mb: 8192.0,
                used_swap_mb: 573.44,
                total_swap_mb: 2048.0,
            },
            current: Some(0.123),
            temperature: TemperatureSnapshot {
                zones: vec![
                    ThermalZone {
                        path: PathBuf::from("/sys/class/thermal/thermal_zone0/temp"),
                        celsius: Some(43),
                    },
                    ThermalZone {
                        path: PathBuf::from("/sys/class/thermal/thermal_zone1/temp"),
                        celsius: Some(42),
                    },
                ],
            },
            disks: vec![
                DiskUsage {
                    mount: PathBuf::from("/"),
                    capacity: Some(DiskCapacity {
                        used_gb: 23.0,
                        total_gb: 80.0,
                    }),
                },
                DiskUsage {
                    mount: PathBuf::from("/home"),
                    capacity: Some(DiskCapacity {
                        used_gb: 100.3,
                        total_gb: 400.0,
                    }),
                },
            ],
        }
    }

    #[test]
    fn test_refresh_action() {
        assert_eq!(
            refresh_action(7),
            "<txtclick>xfce4-panel --plugin-event=genmon-7:refresh:bool:true</txtclick>"
        );
    }

    #[test]
    fn test_render_title() {
        let title = render_title(&sample_snapshot(), 3);
        assert_eq!(
            title,
            "<txtclick>xfce4-panel --plugin-event=genmon-3:refresh:bool:true</txtclick>\n\
             <txt><span font-family='sans' font-weight='bold' color='#BBC3C8'>\
             1.00G 0.56G  0.123A  43°C  23.0G 100.3G</span></txt>"
        );
    }

    #[test]
    fn test_render_tooltip() {
        let tooltip = render_tooltip(&sample_snapshot());
        let expected = "<tool><span font-family='monospace'>\
Memory              1.00G/8.00G
Swap                0.56G/2.00G
Current             0.123A
Temperature         43°C 42°C
Disk /              23.0G/80.0G
Disk /home          100.3G/400.0G</span></tool>";
        assert_eq!(tooltip, expected);
    }

    #[test]
    fn test_unavailable_readings_use_placeholder() {
        let mut snapshot = sample_snapshot();
        snapshot.current = None;
        snapshot.temperature.zones[0].celsius = None;
        snapshot.temperature.zones[1].celsius = None;
        snapshot.disks[1].capacity = None;

        let rendered = render(&snapshot, 0);
        assert!(rendered.title.contains("  --A  --°C  23.0G --G</span>"));
        assert!(rendered.tooltip.contains("Current             --A\n"));
        assert!(rendered.tooltip.contains("Temperature         --°C --°C\n"));
        assert!(rendered.tooltip.contains("Disk /home          --G/--G</span>"));
    }

    #[test]
    fn test_max_temperature_skips_absent_zone() {
        let mut snapshot = sample_snapshot();
        snapshot.temperature.zones[0].celsius = None;
        let title = render_title(&snapshot, 0);
        assert!(title.contains("  42°C "));
    }

    #[test]
    fn test_render_is_pure() {
        let snapshot = sample_snapshot();
        let first = render(&snapshot, 5);
        let second = render(&snapshot.clone(), 5);
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_document_layout() {
        let rendered = render(&sample_snapshot(), 0);
        let document = rendered.to_string();
        let lines: Vec<&str> = document.lines().collect();
        assert!(lines[0].starts_with("<txtclick>"));
        assert!(lines[1].starts_with("<txt>") && lines[1].ends_with("</txt>"));
        assert!(lines[2].starts_with("<tool>"));
        assert!(document.ends_with("</tool>"));
    }

    #[test]
    fn test_render_failure_escapes_message() {
        let rendered = render_failure(2, "field <Shmem> missing & more");
        assert!(rendered.title.contains("genmon-2:refresh"));
        assert!(rendered.title.ends_with("ERR</span></txt>"));
        assert!(rendered
            .tooltip
            .contains("field &lt;Shmem&gt; missing &amp; more"));
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape_markup("/data"), "/data");
        assert_eq!(escape_markup("a'b\"c"), "a&apos;b&quot;c");
    }
}
