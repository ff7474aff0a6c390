use crate::algebra::Growable;
use std::ops::{AddAssign, MulAssign, SubAssign};

/// A financial account holding any growable balance, such as
/// [`Money`](crate::money::Money) or [`Value`](crate::value::Value).
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct Account<T> {
    balance: T,
}

impl<T: Growable> Account<T> {
    pub fn new(balance: T) -> Self {
        Account { balance }
    }

    pub fn balance(&self) -> &T {
        &self.balance
    }

    /// Multiplies the balance by `ratio`, rounding.
    pub fn grow_and_round(&mut self, ratio: f64) -> &mut Self {
        self.balance = self.balance.grow_and_round(ratio);
        self
    }

    /// Moves `amount` from this account into `to_account`.
    ///
    /// Either the amount or the resulting balances may be negative.
    pub fn transfer(&mut self, amount: T, to_account: &mut Account<T>) -> &mut Self {
        self.balance = self.balance.clone() - amount.clone();
        to_account.balance = to_account.balance.clone() + amount;
        self
    }

    /// Replaces the balance with the result of `modifier` applied to it.
    pub fn apply<F>(&mut self, modifier: F) -> &mut Self
    where
        F: FnOnce(&T) -> T,
    {
        self.balance = modifier(&self.balance);
        self
    }
}

impl<T: Growable> AddAssign<T> for Account<T> {
    fn add_assign(&mut self, amount: T) {
        self.balance = self.balance.clone() + amount;
    }
}

impl<T: Growable> SubAssign<T> for Account<T> {
    fn sub_assign(&mut self, amount: T) {
        self.balance = self.balance.clone() - amount;
    }
}

impl<T: Growable> MulAssign<i64> for Account<T> {
    fn mul_assign(&mut self, multiplier: i64) {
        self.balance = self.balance.times(multiplier);
    }
}
