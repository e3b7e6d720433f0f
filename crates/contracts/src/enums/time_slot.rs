use chrono::{NaiveDateTime, NaiveTime};

/// Collection time slots offered by the backend, in wall-clock order.
///
/// These exact labels are what the server stores in
/// `scheduled_time_slot`; they are compared as strings, so the spacing and
/// AM/PM casing must not be reformatted.
pub const TIME_SLOTS: [&str; 8] = [
    "5:00 AM - 6:00 AM",
    "6:00 AM - 7:00 AM",
    "7:00 AM - 8:00 AM",
    "8:00 AM - 9:00 AM",
    "9:00 AM - 10:00 AM",
    "10:00 AM - 11:00 AM",
    "11:00 AM - 12:00 PM",
    "12:00 PM - 1:00 PM",
];

/// Parse a 12-hour clock label like "5:00 AM" or "12:00 PM".
pub fn parse_time_label(label: &str) -> Option<NaiveTime> {
    let (time, modifier) = label.trim().split_once(' ')?;
    let (hours, minutes) = time.split_once(':')?;
    let mut hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;

    match modifier {
        "PM" if hours != 12 => hours += 12,
        "AM" if hours == 12 => hours = 0,
        "AM" | "PM" => {}
        _ => return None,
    }

    NaiveTime::from_hms_opt(hours, minutes, 0)
}

/// Start time of a slot label ("5:00 AM - 6:00 AM" -> 05:00).
pub fn slot_start(slot: &str) -> Option<NaiveTime> {
    let (start, _) = slot.split_once(" - ")?;
    parse_time_label(start)
}

/// A slot is expired once the wall clock reaches its start time.
///
/// Only meaningful when the scheduled date is today; callers must not apply
/// this to future dates. Unparseable slots are treated as expired.
pub fn is_slot_expired(slot: &str, now: NaiveDateTime) -> bool {
    match slot_start(slot) {
        Some(start) => now.time() >= start,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn parses_morning_and_noon_labels() {
        assert_eq!(parse_time_label("5:00 AM"), NaiveTime::from_hms_opt(5, 0, 0));
        assert_eq!(parse_time_label("12:00 PM"), NaiveTime::from_hms_opt(12, 0, 0));
        assert_eq!(parse_time_label("12:00 AM"), NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(parse_time_label("1:00 PM"), NaiveTime::from_hms_opt(13, 0, 0));
        assert_eq!(parse_time_label("garbage"), None);
    }

    #[test]
    fn slot_expires_at_its_start_minute() {
        let slot = "9:00 AM - 10:00 AM";
        assert!(!is_slot_expired(slot, at(8, 59)));
        assert!(is_slot_expired(slot, at(9, 0)));
        assert!(is_slot_expired(slot, at(11, 30)));
    }

    #[test]
    fn noon_slot_uses_24h_arithmetic() {
        let slot = "12:00 PM - 1:00 PM";
        assert!(!is_slot_expired(slot, at(11, 59)));
        assert!(is_slot_expired(slot, at(12, 0)));
    }

    #[test]
    fn every_catalog_slot_parses() {
        for slot in TIME_SLOTS {
            assert!(slot_start(slot).is_some(), "unparseable slot: {slot}");
        }
    }
}
