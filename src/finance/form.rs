//! The JSON body accepted when creating or updating finance records.

use serde::Deserialize;

use crate::{
    Error,
    finance::{Finance, FinanceBuilder, FinanceUpdate, validate_amount, validate_title},
};

/// Every field is optional so that missing fields can be reported by name.
/// Unknown fields such as `userId` are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct FinanceForm {
    /// A short description.
    pub title: Option<String>,
    /// The amount of money.
    pub amount: Option<f64>,
    /// `income` or `expense`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// One of the category names.
    pub category: Option<String>,
}

impl FinanceForm {
    /// Validate a complete record for creation.
    ///
    /// # Errors
    /// Returns [Error::MissingField] for the first missing field in the order
    /// title, amount, type, category, or [Error::InvalidField] for a field with
    /// a bad value.
    pub fn into_builder(self) -> Result<FinanceBuilder, Error> {
        let title = self.title.ok_or(Error::MissingField("title"))?;
        let amount = self.amount.ok_or(Error::MissingField("amount"))?;
        let kind = self.kind.ok_or(Error::MissingField("type"))?;
        let category = self.category.ok_or(Error::MissingField("category"))?;

        Ok(Finance::build(
            &validate_title(&title)?,
            validate_amount(amount)?,
            kind.parse()?,
            category.parse()?,
        ))
    }

    /// Validate the fields present in the form for a partial update.
    ///
    /// # Errors
    /// Returns [Error::InvalidField] for a field with a bad value.
    pub fn into_update(self) -> Result<FinanceUpdate, Error> {
        Ok(FinanceUpdate {
            title: self.title.as_deref().map(validate_title).transpose()?,
            amount: self.amount.map(validate_amount).transpose()?,
            kind: self.kind.as_deref().map(str::parse).transpose()?,
            category: self.category.as_deref().map(str::parse).transpose()?,
        })
    }
}
