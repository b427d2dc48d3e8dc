//! Immediate power-off for the `panic-poweroff` helper.
//!
//! The helper binary is installed setuid-root; it switches its real uid to
//! root and asks the kernel to power off without syncing or notifying init.

use std::convert::Infallible;

use nix::sys::reboot::{reboot, RebootMode};
use nix::unistd::{setuid, Uid};

use crate::error::PowerError;

/// Takes the root uid granted by the setuid bit, then powers off.
///
/// Only returns if the kernel refused the request.
pub fn power_off() -> Result<Infallible, PowerError> {
    // Failure here surfaces as EPERM from reboot below.
    let _ = setuid(Uid::from_raw(0));
    Ok(reboot(RebootMode::RB_POWER_OFF)?)
}
