//! "You are visitor #N" notice.

use std::time::Duration;

/// How long the notice stays up before dismissing itself.
pub const TOAST_TTL: Duration = Duration::from_millis(3500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub count: u64,
}

impl Toast {
    pub fn new(count: u64) -> Self {
        Self { count }
    }

    pub fn message(&self) -> String {
        format!("You are visitor #{}", group_thousands(self.count))
    }

    pub fn ttl(&self) -> Duration {
        TOAST_TTL
    }
}

/// `1234567` -> `1,234,567`.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn message() {
        let t = Toast::new(1234);
        assert_eq!(t.message(), "You are visitor #1,234");
        assert_eq!(t.ttl(), Duration::from_millis(3500));
    }
}
