//! Currency formatting

use rust_decimal::Decimal;
use std::fmt::{Display, Formatter};

/// Represents an amount of money for display.
///
/// The [`Display`] implementation rounds to 2 decimal places and formats the
/// amount with a leading `$` and comma thousands separators, e.g. `$1,234.56`.
/// Negative amounts are rendered as `-$1.50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Currency(pub Decimal);

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut amount = self.0.round_dp(2);
        let negative = amount.is_sign_negative() && !amount.is_zero();
        amount = amount.abs();
        amount.rescale(2);

        let text = amount.to_string();
        let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let sign = if negative { "-" } else { "" };
        write!(f, "{sign}${grouped}.{cents}")
    }
}
