pub use gregorian::{is_leap_year, leap_years_in, LeapYearRule, YearNumber};
pub use value::{is_leap_year_value, year_from_value, InvalidArgument, ValueKind};

mod div_rem;
pub mod gregorian;
mod value;
