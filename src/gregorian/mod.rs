pub use leap_year::{is_leap_year, leap_years_in, LeapYearRule, YearNumber};

mod leap_year;

// The gregorian calendar repeats every 400 years. Each cycle starts with a leap year, and from then
// every 4th year is a leap year except for every 100th year.
pub const GREGORIAN_CYCLE_YEARS: u16 = 400;
pub const GREGORIAN_CENTURY_YEARS: u16 = 100;
pub const GREGORIAN_QUADRENNIUM_YEARS: u16 = 4;
// 100 quadrennia per cycle, minus the three centuries that aren't leap years.
pub const GREGORIAN_CYCLE_LEAP_YEARS: u16 = 100 - 3;
