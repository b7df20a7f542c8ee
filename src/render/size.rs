/// Units for human-readable file sizes. Anything past GB renders in GB.
const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count as a human-readable size, rounded to the nearest
/// whole unit.
pub fn format_file_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;

    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{} {}", size.round() as u64, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1024), "1 KB");
        // Rounds to nearest integer
        assert_eq!(format_file_size(1536), "2 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_file_size(1_073_741_824), "1 GB");
    }

    #[test]
    fn test_format_file_size_caps_at_gb() {
        assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
    }
}
