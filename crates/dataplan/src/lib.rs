//! Pacing statistics for a monthly data allowance.
//!
//! Given the data used so far in the current billing cycle and the monthly
//! allowance, works out how far ahead of (or behind) a uniform usage pattern
//! the cycle is. Month lengths ignore leap years.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

/// MiB per GiB; usage is entered in GiB and reported in MiB.
const MIB_PER_GIB: f64 = 1024.0;

const MONTH_NAMES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

#[derive(Debug, Error, PartialEq)]
pub enum DataPlanError {
    #[error("data allowance must be positive, got {0} GB")]
    InvalidAllowance(f64),
    #[error("data used must be non-negative, got {0} GB")]
    InvalidUsage(f64),
    #[error("reset day must be within 1..=31, got {0}")]
    InvalidResetDay(u32),
}

/// Days in `month` (1..=12), ignoring leap years. Anything else counts as 31.
pub fn days_in_month(month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => 28,
        _ => 31,
    }
}

/// Like [`days_in_month`], but also accepts month names (`"Sep"`, `"september"`).
pub fn days_in_month_named(month: &str) -> u32 {
    let month = month.trim();
    if let Ok(number) = month.parse::<u32>() {
        return days_in_month(number);
    }
    let prefix: String = month.chars().take(3).collect::<String>().to_lowercase();
    let number = MONTH_NAMES
        .iter()
        .position(|name| *name == prefix)
        .map(|i| i as u32 + 1)
        .unwrap_or(0);
    days_in_month(number)
}

/// Usage pacing for the current billing cycle. Quantities are in MiB.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageReport {
    pub cycle_usage: f64,
    pub ideal_usage: f64,
    pub net_usage: f64,
    pub cycle_rate: f64,
    pub ideal_rate: f64,
    pub net_rate: f64,
    /// Actual rate over ideal rate; above 1 means ahead of pace.
    pub coefficient: f64,
    pub cycle_day: u32,
    pub cycle_length: u32,
    /// Cycle day the current usage would be ideal for.
    pub ideal_day: f64,
    /// Days without usage needed to get back on pace, when over.
    pub catch_up_days: Option<f64>,
}

/// Build the report for `today`.
pub fn report(
    used_gb: f64,
    allowance_gb: f64,
    reset_day: u32,
    today: NaiveDate,
) -> Result<UsageReport, DataPlanError> {
    if allowance_gb.is_nan() || allowance_gb <= 0.0 {
        return Err(DataPlanError::InvalidAllowance(allowance_gb));
    }
    if used_gb.is_nan() || used_gb < 0.0 {
        return Err(DataPlanError::InvalidUsage(used_gb));
    }
    if !(1..=31).contains(&reset_day) {
        return Err(DataPlanError::InvalidResetDay(reset_day));
    }

    let day = today.day();
    let month = today.month();
    let previous = if month == 1 { 12 } else { month - 1 };
    let next = if month == 12 { 1 } else { month + 1 };
    // a reset day past the end of a short month falls on its last day
    let reset_in = |m: u32| reset_day.min(days_in_month(m));

    let this_reset = reset_in(month);
    let (cycle_length, cycle_day) = if day >= this_reset {
        (
            days_in_month(month) - this_reset + reset_in(next),
            day - this_reset + 1,
        )
    } else {
        let start = reset_in(previous);
        let tail = days_in_month(previous) - start;
        (tail + this_reset, tail + day + 1)
    };
    tracing::debug!("cycle day {} of {} (reset on day {})", cycle_day, cycle_length, reset_day);

    let cycle_usage = used_gb * MIB_PER_GIB;
    let ideal_rate = allowance_gb * MIB_PER_GIB / f64::from(cycle_length);
    let ideal_usage = ideal_rate * f64::from(cycle_day);
    let cycle_rate = cycle_usage / f64::from(cycle_day);
    let net_usage = ideal_usage - cycle_usage;

    Ok(UsageReport {
        cycle_usage,
        ideal_usage,
        net_usage,
        cycle_rate,
        ideal_rate,
        net_rate: ideal_rate - cycle_rate,
        coefficient: cycle_rate / ideal_rate,
        cycle_day,
        cycle_length,
        ideal_day: cycle_usage / ideal_rate,
        catch_up_days: (net_usage < 0.0).then(|| -net_usage / ideal_rate + 1.0),
    })
}

/// [`report`] for the local calendar date.
pub fn report_now(
    used_gb: f64,
    allowance_gb: f64,
    reset_day: u32,
) -> Result<UsageReport, DataPlanError> {
    report(used_gb, allowance_gb, reset_day, Local::now().date_naive())
}

impl fmt::Display for UsageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // whole-number fields truncate toward zero
        writeln!(f, "{:>16}: {} MiB", "Cycle Usage", self.cycle_usage as i64)?;
        writeln!(f, "{:>16}: {} MiB", "Ideal Usage", self.ideal_usage as i64)?;
        writeln!(f, "{:>16}: {} MiB", "Net Usage", self.net_usage as i64)?;
        writeln!(f, "{:>16}: {} MiB/day", "Cycle Rate", self.cycle_rate as i64)?;
        writeln!(f, "{:>16}: {} MiB/day", "Ideal Rate", self.ideal_rate as i64)?;
        writeln!(f, "{:>16}: {} MiB/day", "Net Rate", self.net_rate as i64)?;
        writeln!(f, "{:>16}: {:.6}", "Use Coefficient", self.coefficient)?;
        writeln!(
            f,
            "{:>16}: {} / {}",
            "Cycle Day", self.cycle_day, self.cycle_length
        )?;
        write!(f, "{:>16}: {}", "Ideal Day", self.ideal_day as i64)?;
        if let Some(days) = self.catch_up_days {
            write!(f, "\n{:>16}: {}", "Catch up", days as i64)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2), 28);
        assert_eq!(days_in_month(9), 30);
        assert_eq!(days_in_month(12), 31);
        assert_eq!(days_in_month(0), 31);
        assert_eq!(days_in_month_named("Sept"), 30);
        assert_eq!(days_in_month_named("february"), 28);
        assert_eq!(days_in_month_named("11"), 30);
        assert_eq!(days_in_month_named("smarch"), 31);
    }

    #[test]
    fn over_pace_mid_cycle() {
        let r = report(5.0, 10.0, 11, date(2024, 3, 20)).unwrap();
        assert_eq!((r.cycle_day, r.cycle_length), (10, 31));
        assert!(close(r.cycle_usage, 5120.0));
        assert!(close(r.ideal_rate, 10240.0 / 31.0));
        assert!(close(r.ideal_day, 15.5));
        assert!(r.coefficient > 1.0);
        assert!(close(r.catch_up_days.unwrap(), 6.5));
    }

    #[test]
    fn under_pace_has_no_catch_up() {
        let r = report(1.0, 10.0, 11, date(2024, 3, 20)).unwrap();
        assert!(r.net_usage > 0.0);
        assert_eq!(r.catch_up_days, None);
    }

    #[test]
    fn before_reset_day_counts_from_previous_month() {
        let r = report(2.0, 10.0, 11, date(2024, 1, 5)).unwrap();
        assert_eq!((r.cycle_day, r.cycle_length), (26, 31));

        let r = report(2.0, 10.0, 11, date(2024, 3, 5)).unwrap();
        assert_eq!((r.cycle_day, r.cycle_length), (23, 28));
    }

    #[test]
    fn late_reset_days_clamp_to_short_months() {
        // reset on the 31st: February's cycle starts on the 28th
        let r = report(1.0, 10.0, 31, date(2024, 3, 1)).unwrap();
        assert_eq!((r.cycle_day, r.cycle_length), (2, 31));
        assert!(r.cycle_rate.is_finite() && r.coefficient.is_finite());

        let r = report(1.0, 10.0, 30, date(2024, 3, 1)).unwrap();
        assert_eq!((r.cycle_day, r.cycle_length), (2, 30));
        assert!(r.net_rate.is_finite());

        let r = report(1.0, 10.0, 29, date(2023, 2, 28)).unwrap();
        assert_eq!((r.cycle_day, r.cycle_length), (1, 29));

        let r = report(1.0, 10.0, 31, date(2024, 3, 30)).unwrap();
        assert_eq!((r.cycle_day, r.cycle_length), (31, 31));

        // 30-day months
        let r = report(1.0, 10.0, 31, date(2024, 4, 30)).unwrap();
        assert_eq!((r.cycle_day, r.cycle_length), (1, 31));
        let r = report(1.0, 10.0, 31, date(2024, 5, 1)).unwrap();
        assert_eq!((r.cycle_day, r.cycle_length), (2, 31));
        let r = report(1.0, 10.0, 31, date(2024, 3, 31)).unwrap();
        assert_eq!((r.cycle_day, r.cycle_length), (1, 30));
    }

    #[test]
    fn cycle_day_stays_within_cycle_for_every_reset_day() {
        for reset_day in 1..=31 {
            for month in 1..=12 {
                let last = days_in_month(month);
                for day in 1..=last {
                    let r = report(1.0, 10.0, reset_day, date(2023, month, day)).unwrap();
                    assert!(
                        (1..=r.cycle_length).contains(&r.cycle_day),
                        "reset {reset_day} on {month}/{day}: {} / {}",
                        r.cycle_day,
                        r.cycle_length
                    );
                }
            }
        }
    }

    #[test]
    fn rejects_invalid_plans() {
        let today = date(2024, 3, 20);
        assert_eq!(
            report(1.0, 0.0, 11, today),
            Err(DataPlanError::InvalidAllowance(0.0))
        );
        assert_eq!(
            report(-1.0, 10.0, 11, today),
            Err(DataPlanError::InvalidUsage(-1.0))
        );
        assert_eq!(
            report(1.0, 10.0, 0, today),
            Err(DataPlanError::InvalidResetDay(0))
        );
    }

    #[test]
    fn renders_aligned_table() {
        let text = report(5.0, 10.0, 11, date(2024, 3, 20)).unwrap().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "     Cycle Usage: 5120 MiB");
        assert_eq!(lines[6], " Use Coefficient: 1.550000");
        assert_eq!(lines[7], "       Cycle Day: 10 / 31");
        assert_eq!(lines[9], "        Catch up: 6");
    }
}
