//! Memory and swap usage from /proc/meminfo.
//!
//! Eight fields are extracted by name: MemTotal, MemFree, Buffers, Cached,
//! SwapTotal, SwapFree, Shmem and SReclaimable. Used memory follows the
//! `free(1)`-style formula
//! `(MemTotal - MemFree) + Shmem - (Buffers + Cached + SReclaimable)`.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::MeminfoError;

const KB_PER_MB: f64 = 1024.0;

/// Field names in the order they are stored in [`MeminfoFields`].
pub const REQUIRED_FIELDS: [&str; 8] = [
    "MemTotal",
    "MemFree",
    "Buffers",
    "Cached",
    "SwapTotal",
    "SwapFree",
    "Shmem",
    "SReclaimable",
];

/// 1-based line numbers at which older kernels print [`REQUIRED_FIELDS`].
pub const LEGACY_LINE_POSITIONS: [usize; 8] = [1, 2, 4, 5, 15, 16, 21, 24];

/// Raw kilobyte values of the required meminfo fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeminfoFields {
    pub mem_total_kb: u64,
    pub mem_free_kb: u64,
    pub buffers_kb: u64,
    pub cached_kb: u64,
    pub swap_total_kb: u64,
    pub swap_free_kb: u64,
    pub shmem_kb: u64,
    pub sreclaimable_kb: u64,
}

/// Memory and swap usage in megabytes (kB / 1024).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MemorySnapshot {
    pub used_memory_mb: f64,
    pub total_memory_mb: f64,
    pub used_swap_mb: f64,
    pub total_swap_mb: f64,
}

impl MeminfoFields {
    /// Used memory in kB. May be negative for inconsistent input.
    pub fn used_memory_kb(&self) -> f64 {
        (self.mem_total_kb as f64 - self.mem_free_kb as f64) + self.shmem_kb as f64
            - (self.buffers_kb as f64 + self.cached_kb as f64 + self.sreclaimable_kb as f64)
    }

    /// Used swap in kB.
    pub fn used_swap_kb(&self) -> f64 {
        self.swap_total_kb as f64 - self.swap_free_kb as f64
    }

    pub fn snapshot(&self) -> MemorySnapshot {
        MemorySnapshot {
            used_memory_mb: self.used_memory_kb() / KB_PER_MB,
            total_memory_mb: self.mem_total_kb as f64 / KB_PER_MB,
            used_swap_mb: self.used_swap_kb() / KB_PER_MB,
            total_swap_mb: self.swap_total_kb as f64 / KB_PER_MB,
        }
    }

    fn slot(&mut self, index: usize) -> &mut u64 {
        match index {
            0 => &mut self.mem_total_kb,
            1 => &mut self.mem_free_kb,
            2 => &mut self.buffers_kb,
            3 => &mut self.cached_kb,
            4 => &mut self.swap_total_kb,
            5 => &mut self.swap_free_kb,
            6 => &mut self.shmem_kb,
            _ => &mut self.sreclaimable_kb,
        }
    }
}

/// Extracts the first run of decimal digits from a meminfo value,
/// e.g. `"       16314460 kB"` gives 16314460.
pub fn parse_kb_value(v: &str) -> Option<u64> {
    let start = v.find(|c: char| c.is_ascii_digit())?;
    let digits = &v[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

/// Splits a meminfo line into its field name and the text after the colon.
fn split_field(line: &str) -> Option<(&str, &str)> {
    let (name, rest) = line.split_once(':')?;
    Some((name.trim(), rest))
}

/// Parses the required fields out of /proc/meminfo content.
///
/// Fields are matched by name, so line order does not matter. The first
/// occurrence of a field wins.
pub fn parse_meminfo(content: &str) -> Result<MeminfoFields, MeminfoError> {
    let mut fields = MeminfoFields::default();
    let mut found = [false; REQUIRED_FIELDS.len()];

    for line in content.lines() {
        let Some((name, value)) = split_field(line) else {
            continue;
        };
        let Some(index) = REQUIRED_FIELDS.iter().position(|f| *f == name) else {
            continue;
        };
        if found[index] {
            continue;
        }

        let kb = parse_kb_value(value).ok_or_else(|| MeminfoError::MalformedField {
            field: REQUIRED_FIELDS[index],
            line: line.to_string(),
        })?;
        *fields.slot(index) = kb;
        found[index] = true;

        if found.iter().all(|f| *f) {
            break;
        }
    }

    if let Some(missing) = found.iter().position(|f| !*f) {
        return Err(MeminfoError::MissingField(REQUIRED_FIELDS[missing]));
    }

    Ok(fields)
}

/// Reads and parses a meminfo file.
pub fn read_meminfo(path: &Path) -> Result<MeminfoFields, MeminfoError> {
    let content = fs::read_to_string(path).map_err(|source| MeminfoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_meminfo(&content)
}

/// Reads memory and swap usage from a meminfo file.
pub fn read_memory(path: &Path) -> Result<MemorySnapshot, MeminfoError> {
    Ok(read_meminfo(path)?.snapshot())
}

/// Reports whether every required field sits at its legacy line position.
///
/// Newer kernels insert lines such as `Zswap:` before `SwapTotal:`, which
/// shifts everything below; callers use this as a diagnostic only.
pub fn legacy_layout_matches(content: &str) -> bool {
    let lines: Vec<&str> = content.lines().collect();
    REQUIRED_FIELDS
        .iter()
        .zip(LEGACY_LINE_POSITIONS.iter())
        .all(|(field, line_no)| {
            lines
                .get(line_no - 1)
                .and_then(|l| split_field(l))
                .is_some_and(|(name, _)| name == *field)
        })
}
