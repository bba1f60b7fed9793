use std::time::Duration;

use super::*;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MENU_LABELS: [&str; 5] = ["File", "Edit", "View", "Window", "Help"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClockSnapshot {
    pub weekday: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl ClockSnapshot {
    #[cfg(target_arch = "wasm32")]
    pub fn now() -> Self {
        let date = js_sys::Date::new_0();
        Self {
            weekday: date.get_day(),
            month: date.get_month(),
            day: date.get_date(),
            hour: date.get_hours(),
            minute: date.get_minutes(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn now() -> Self {
        Self {
            weekday: 1,
            month: 0,
            day: 1,
            hour: 9,
            minute: 41,
        }
    }
}

/// Formats the menu-bar clock as `Ddd Mon D h:mm AM`.
pub(crate) fn format_menu_clock(snapshot: ClockSnapshot) -> String {
    let weekday = WEEKDAYS[(snapshot.weekday as usize) % WEEKDAYS.len()];
    let month = MONTHS[(snapshot.month as usize) % MONTHS.len()];
    let (hour, meridiem) = match snapshot.hour % 24 {
        0 => (12, "AM"),
        h @ 1..=11 => (h, "AM"),
        12 => (12, "PM"),
        h => (h - 12, "PM"),
    };
    format!(
        "{weekday} {month} {} {hour}:{:02} {meridiem}",
        snapshot.day, snapshot.minute
    )
}

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let clock_now = create_rw_signal(ClockSnapshot::now());
    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <nav class="menu-bar" aria-label="Desktop menu bar">
            <div class="menu-bar-left">
                <span class="menu-bar-brand">"Adrian Mercer"</span>
                <ul class="menu-bar-menus">
                    {MENU_LABELS
                        .iter()
                        .map(|label| view! { <li class="menu-bar-menu">{*label}</li> })
                        .collect_view()}
                </ul>
            </div>
            <div class="menu-bar-right">
                <span class="menu-bar-status" aria-hidden="true">
                    <Icon icon=IconName::WifiOn size=IconSize::Sm />
                </span>
                <span class="menu-bar-status" aria-hidden="true">
                    <Icon icon=IconName::BatteryFull size=IconSize::Sm />
                </span>
                <time class="menu-bar-clock">
                    {move || format_menu_clock(clock_now.get())}
                </time>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn snapshot(hour: u32, minute: u32) -> ClockSnapshot {
        ClockSnapshot {
            weekday: 2,
            month: 7,
            day: 4,
            hour,
            minute,
        }
    }

    #[test]
    fn clock_formats_morning_and_pads_minutes() {
        assert_eq!(format_menu_clock(snapshot(9, 5)), "Tue Aug 4 9:05 AM");
    }

    #[test]
    fn clock_wraps_midnight_and_noon_to_twelve() {
        assert_eq!(format_menu_clock(snapshot(0, 0)), "Tue Aug 4 12:00 AM");
        assert_eq!(format_menu_clock(snapshot(12, 30)), "Tue Aug 4 12:30 PM");
    }

    #[test]
    fn clock_converts_afternoon_hours() {
        assert_eq!(format_menu_clock(snapshot(17, 45)), "Tue Aug 4 5:45 PM");
    }
}
