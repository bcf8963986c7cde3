//! Time-of-day greeting for the dashboard header.

/// Greeting bucket for a local time expressed as minutes since midnight.
/// Midnight through noon is morning, 12:01 PM through 4:00 PM is afternoon,
/// the rest of the day is evening.
pub fn greeting_for_minutes(minutes_since_midnight: u32) -> &'static str {
    if minutes_since_midnight <= 720 {
        "Good Morning"
    } else if minutes_since_midnight <= 960 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

pub fn format_greeting(name: &str, minutes_since_midnight: u32) -> String {
    format!("{} {}!", greeting_for_minutes(minutes_since_midnight), name)
}

/// Greets the user based on the browser's local clock.
#[cfg(target_arch = "wasm32")]
pub fn time_based_greeting(name: &str) -> String {
    let now = js_sys::Date::new_0();
    format_greeting(name, now.get_hours() * 60 + now.get_minutes())
}

#[cfg(test)]
mod tests {
    use super::{format_greeting, greeting_for_minutes};

    #[test]
    fn morning_runs_from_midnight_through_noon() {
        assert_eq!(greeting_for_minutes(0), "Good Morning");
        assert_eq!(greeting_for_minutes(719), "Good Morning");
        assert_eq!(greeting_for_minutes(720), "Good Morning");
    }

    #[test]
    fn afternoon_runs_until_four_pm() {
        assert_eq!(greeting_for_minutes(721), "Good Afternoon");
        assert_eq!(greeting_for_minutes(960), "Good Afternoon");
    }

    #[test]
    fn evening_covers_the_rest_of_the_day() {
        assert_eq!(greeting_for_minutes(961), "Good Evening");
        assert_eq!(greeting_for_minutes(1439), "Good Evening");
    }

    #[test]
    fn greeting_includes_the_name() {
        assert_eq!(format_greeting("Alice", 540), "Good Morning Alice!");
    }
}
