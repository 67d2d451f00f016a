//! Reachability checks for a single network address.

use std::process::{Command, Stdio};

pub trait Prober: Sync {
    fn is_online(&self, address: &str) -> bool;
}

/// Sends one ICMP echo request through the system `ping`.
#[derive(Debug, Clone, Copy)]
pub struct PingProber {
    pub timeout_secs: u64,
}

impl PingProber {
    pub fn new(timeout_secs: u64) -> Self {
        Self { timeout_secs }
    }

    fn command(&self, address: &str) -> Command {
        let mut cmd = Command::new("ping");
        if cfg!(target_os = "windows") {
            let wait_ms = (self.timeout_secs * 1000).to_string();
            cmd.args(["-n", "1", "-w", wait_ms.as_str()]);
        } else {
            let wait_s = self.timeout_secs.to_string();
            cmd.args(["-c", "1", "-W", wait_s.as_str()]);
        }
        cmd.arg(address);
        cmd
    }
}

impl Prober for PingProber {
    fn is_online(&self, address: &str) -> bool {
        self.command(address)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}
