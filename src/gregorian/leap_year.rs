use std::ops::Range;

use num_integer::Integer;
use num_traits::PrimInt;

use super::{GREGORIAN_CENTURY_YEARS, GREGORIAN_CYCLE_YEARS, GREGORIAN_QUADRENNIUM_YEARS};
use crate::div_rem::is_divisible_by;

/// Any primitive integer can hold a year number.
pub trait YearNumber: PrimInt + Integer {}

impl<T: PrimInt + Integer> YearNumber for T {}

/// The rule of the gregorian calendar that decides whether a year is a leap year.
///
/// Rules are tried in declaration order and the first one that matches wins, so e.g. 2000 is
/// decided by [`LeapYearRule::DivisibleBy400`] even though it is also divisible by 100 and 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeapYearRule {
    DivisibleBy400,
    DivisibleBy100,
    DivisibleBy4,
    NotDivisibleBy4,
}

impl LeapYearRule {
    pub fn classify<T: YearNumber>(year: T) -> Self {
        if is_divisible_by(year, GREGORIAN_CYCLE_YEARS) {
            LeapYearRule::DivisibleBy400
        } else if is_divisible_by(year, GREGORIAN_CENTURY_YEARS) {
            LeapYearRule::DivisibleBy100
        } else if is_divisible_by(year, GREGORIAN_QUADRENNIUM_YEARS) {
            LeapYearRule::DivisibleBy4
        } else {
            LeapYearRule::NotDivisibleBy4
        }
    }

    pub fn is_leap(self) -> bool {
        match self {
            LeapYearRule::DivisibleBy400 | LeapYearRule::DivisibleBy4 => true,
            LeapYearRule::DivisibleBy100 | LeapYearRule::NotDivisibleBy4 => false,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LeapYearRule::DivisibleBy400 => "divisible by 400",
            LeapYearRule::DivisibleBy100 => "divisible by 100 but not 400",
            LeapYearRule::DivisibleBy4 => "divisible by 4 but not 100",
            LeapYearRule::NotDivisibleBy4 => "not divisible by 4",
        }
    }
}

/// Returns true if `year` has a February 29 in the proleptic gregorian calendar.
///
/// Negative years and year 0 follow the same rule, so year 0 and -400 are leap years while -100 is
/// not. Divisibility uses a floored remainder, which never depends on the sign of the year.
pub fn is_leap_year<T: YearNumber>(year: T) -> bool {
    LeapYearRule::classify(year).is_leap()
}

/// The leap years in `range`, in ascending order.
pub fn leap_years_in<T: YearNumber>(range: Range<T>) -> impl Iterator<Item = T> {
    let Range { start, end } = range;
    let first = Some(start).filter(|year| *year < end);
    std::iter::successors(first, move |year| {
        year.checked_add(&T::one()).filter(|next| *next < end)
    })
    .filter(|year| is_leap_year(*year))
}
