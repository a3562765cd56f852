//! Bounds shared by balances and transfer amounts.
//!
//! Both are stored as `NUMERIC(20, 2)`, so every value the service accepts
//! must fit that column exactly. Anything finer would be rounded by
//! Postgres, or by `Decimal` once its 28 significant digits run out.

use rust_decimal::Decimal;

use crate::error::WalletError;

/// Decimal places kept for balances and amounts.
pub const MONEY_SCALE: u32 = 2;

/// Largest value a `NUMERIC(20, 2)` column holds: 999999999999999999.99
pub fn max_money() -> Decimal {
    Decimal::from_i128_with_scale(99_999_999_999_999_999_999, MONEY_SCALE)
}

/// Whether `value` can be stored without rounding or overflow.
///
/// Trailing zeros do not count against the scale: `30.000` fits.
pub fn fits_money_column(value: Decimal) -> bool {
    value.normalize().scale() <= MONEY_SCALE && value.abs() <= max_money()
}

/// Check a transfer amount: strictly positive and representable.
pub fn check_amount(amount: Decimal) -> Result<(), WalletError> {
    if amount <= Decimal::ZERO || !fits_money_column(amount) {
        return Err(WalletError::InvalidAmount);
    }

    Ok(())
}
