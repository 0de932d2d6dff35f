//! Label formatting for the market-hours timeline.

/// Grid label for an hour column, `00`..`23`
pub fn format_hour_label(hour: u32) -> String {
    format!("{:02}", hour % 24)
}

/// Offset badge, e.g. `+1H`, `-7H`, `+0H`
pub fn format_offset(offset_hours: i32) -> String {
    format!("{:+}H", offset_hours)
}

/// `HH:MM` for the "now" marker
pub fn format_marker(hour: u32, minute: u32) -> String {
    format!("{:02}:{:02}", hour % 24, minute % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_padded_and_signed() {
        assert_eq!(format_hour_label(7), "07");
        assert_eq!(format_hour_label(24), "00");
        assert_eq!(format_offset(1), "+1H");
        assert_eq!(format_offset(0), "+0H");
        assert_eq!(format_offset(-7), "-7H");
        assert_eq!(format_marker(9, 5), "09:05");
    }
}
