//! Peak resident memory of the current process.

/// Peak resident set size in KiB, or `None` where the platform does not
/// expose it.
#[cfg(target_os = "linux")]
pub fn peak_rss_kib() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    parse_high_water_mark(&status)
}

/// Peak resident set size in KiB, or `None` where the platform does not
/// expose it.
#[cfg(not(target_os = "linux"))]
pub fn peak_rss_kib() -> Option<u64> {
    None
}

/// Extract `VmHWM` (reported in kB) from a `/proc/<pid>/status` dump.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_high_water_mark(status: &str) -> Option<u64> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("VmHWM:"))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|kib| kib.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_high_water_mark() {
        let status = "Name:\tduet\nVmPeak:\t   20480 kB\nVmHWM:\t    9812 kB\nVmRSS:\t    9000 kB\n";
        assert_eq!(parse_high_water_mark(status), Some(9812));
    }

    #[test]
    fn test_parse_without_field() {
        assert_eq!(parse_high_water_mark("Name:\tduet\n"), None);
        assert_eq!(parse_high_water_mark("VmHWM:\tlots kB\n"), None);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_peak_rss_reported_on_linux() {
        assert!(peak_rss_kib().is_some_and(|kib| kib > 0));
    }
}
