// ABOUTME: Time-of-day greeting selection for the clock app.
// ABOUTME: Maps a 24-hour hour to a greeting and a short message.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
}

impl DayPeriod {
    /// Picks the period for an hour in 24-hour form. Hours past 23 fall
    /// through to `Evening`.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..12 => DayPeriod::Morning,
            12..18 => DayPeriod::Afternoon,
            _ => DayPeriod::Evening,
        }
    }

    pub fn greeting(self) -> &'static str {
        match self {
            DayPeriod::Morning => "Good Morning!",
            DayPeriod::Afternoon => "Good Afternoon!",
            DayPeriod::Evening => "Good Evening!",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            DayPeriod::Morning => "Start your day with a smile!",
            DayPeriod::Afternoon => "Keep up the great work!",
            DayPeriod::Evening => "Relax and unwind!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn morning_starts_at_midnight() {
        assert_eq!(DayPeriod::from_hour(0), DayPeriod::Morning);
        assert_eq!(DayPeriod::from_hour(11), DayPeriod::Morning);
    }

    #[test]
    fn afternoon_spans_noon_to_five() {
        assert_eq!(DayPeriod::from_hour(12), DayPeriod::Afternoon);
        assert_eq!(DayPeriod::from_hour(17), DayPeriod::Afternoon);
    }

    #[test]
    fn evening_starts_at_six() {
        assert_eq!(DayPeriod::from_hour(18), DayPeriod::Evening);
        assert_eq!(DayPeriod::from_hour(23), DayPeriod::Evening);
    }

    #[test]
    fn hours_past_23_are_evening() {
        assert_eq!(DayPeriod::from_hour(24), DayPeriod::Evening);
        assert_eq!(DayPeriod::from_hour(u32::MAX), DayPeriod::Evening);
    }

    #[test]
    fn texts_match_period() {
        let morning = DayPeriod::from_hour(7);
        assert_eq!(morning.greeting(), "Good Morning!");
        assert_eq!(morning.message(), "Start your day with a smile!");

        let afternoon = DayPeriod::from_hour(14);
        assert_eq!(afternoon.greeting(), "Good Afternoon!");
        assert_eq!(afternoon.message(), "Keep up the great work!");

        let evening = DayPeriod::from_hour(21);
        assert_eq!(evening.greeting(), "Good Evening!");
        assert_eq!(evening.message(), "Relax and unwind!");
    }
}
