use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const MAX_ATTEMPTS: usize = 5;
const WINDOW: Duration = Duration::from_secs(15 * 60);

/// Per-IP failed-login throttle for the admin login. There is only one
/// account, so this is the main defense against password guessing.
#[derive(Clone)]
pub struct RateLimiter {
    attempts: Arc<Mutex<HashMap<IpAddr, Vec<Instant>>>>,
    window: Duration,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::with_window(WINDOW)
    }

    fn with_window(window: Duration) -> Self {
        Self {
            attempts: Arc::new(Mutex::new(HashMap::new())),
            window,
        }
    }

    // checked_sub, since the monotonic clock may not reach back a full window
    // shortly after boot.
    fn cutoff(&self) -> Option<Instant> {
        Instant::now().checked_sub(self.window)
    }

    /// Check if the given IP is blocked. Lazily drops attempts that have
    /// aged out of the window.
    pub fn is_blocked(&self, ip: IpAddr) -> bool {
        let mut map = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        let cutoff = self.cutoff();

        if let Some(timestamps) = map.get_mut(&ip) {
            if let Some(cutoff) = cutoff {
                timestamps.retain(|t| *t > cutoff);
            }
            timestamps.len() >= MAX_ATTEMPTS
        } else {
            false
        }
    }

    /// Record a failed login attempt for the given IP. Failures are rare
    /// enough that this also sweeps aged-out entries for every IP, so the
    /// map stays bounded even for clients that never retry.
    pub fn record_failure(&self, ip: IpAddr) {
        let mut map = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(cutoff) = self.cutoff() {
            map.retain(|_, timestamps| {
                timestamps.retain(|t| *t > cutoff);
                !timestamps.is_empty()
            });
        }
        map.entry(ip).or_default().push(Instant::now());
    }

    /// Clear all recorded attempts for the given IP (call on successful login).
    pub fn clear(&self, ip: IpAddr) {
        let mut map = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        map.remove(&ip);
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn ip(last: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(10, 0, 0, last))
    }

    fn tracked_ips(limiter: &RateLimiter) -> usize {
        limiter.attempts.lock().unwrap().len()
    }

    #[test]
    fn blocks_after_max_attempts_per_ip() {
        let limiter = RateLimiter::new();
        for _ in 0..MAX_ATTEMPTS {
            limiter.record_failure(ip(1));
        }
        assert!(limiter.is_blocked(ip(1)));
        assert!(!limiter.is_blocked(ip(2)));
    }

    #[test]
    fn clear_unblocks_an_ip() {
        let limiter = RateLimiter::new();
        for _ in 0..MAX_ATTEMPTS {
            limiter.record_failure(ip(3));
        }
        limiter.clear(ip(3));
        assert!(!limiter.is_blocked(ip(3)));
    }

    #[test]
    fn recording_a_failure_sweeps_stale_entries_of_other_ips() {
        let limiter = RateLimiter::with_window(Duration::ZERO);
        limiter.record_failure(ip(1));
        limiter.record_failure(ip(2));
        limiter.record_failure(ip(3));
        assert_eq!(tracked_ips(&limiter), 1);
    }
}
