use std::fmt;
use time::OffsetDateTime;

/// Local wall-clock time for log lines; falls back to UTC when the local
/// offset cannot be determined.
#[derive(Debug, PartialEq, Eq)]
pub struct DateTime {
    odt: OffsetDateTime,
}

impl DateTime {
    pub fn now() -> Self {
        let odt: OffsetDateTime = match OffsetDateTime::now_local() {
            Ok(dt) => dt,
            Err(_) => OffsetDateTime::now_utc(),
        };
        DateTime { odt }
    }

    pub fn from_unix_timestamp(secs: i64) -> Self {
        let odt = match OffsetDateTime::from_unix_timestamp(secs) {
            Ok(x) => x,
            Err(_) => OffsetDateTime::now_utc(),
        };
        DateTime { odt }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}",
            self.odt.year(),
            self.odt.month() as u8,
            self.odt.day(),
            self.odt.hour(),
            self.odt.minute(),
            self.odt.second(),
            self.odt.millisecond(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::DateTime;

    #[test]
    fn test_display() {
        let dt = DateTime::from_unix_timestamp(1_556_000_000);
        assert_eq!(dt.to_string(), "2019-04-23 06:13:20.000");
    }
}
