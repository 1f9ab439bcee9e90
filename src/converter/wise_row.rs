use super::record::Transaction;
use super::Decimal;
use serde::{Serialize, Serializer};

/// Column names of the Wise batch payment upload, in output order.
pub const HEADERS: [&str; 10] = [
    "name",
    "recipientEmail",
    "paymentReference",
    "receiverType",
    "amountCurrency",
    "amount",
    "sourceCurrency",
    "targetCurrency",
    "bsbCode",
    "accountNumber",
];

const RECEIVER_TYPE: &str = "PERSON";
const AMOUNT_CURRENCY: &str = "source";
const CURRENCY: &str = "AUD";

/// Serialize Decimal with exactly 2 decimal places
fn serialize_decimal_2dp<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:.2}"))
}

/// One row of the Wise batch payment CSV, borrowing from its `Transaction`.
/// Field order matches `HEADERS`.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WiseRow<'a> {
    name: &'a str,
    /// Not present in ABA files
    recipient_email: &'static str,
    payment_reference: &'a str,
    receiver_type: &'static str,
    amount_currency: &'static str,
    #[serde(serialize_with = "serialize_decimal_2dp")]
    amount: Decimal,
    source_currency: &'static str,
    target_currency: &'static str,
    bsb_code: &'a str,
    account_number: &'a str,
}

impl<'a> From<&'a Transaction> for WiseRow<'a> {
    fn from(tx: &'a Transaction) -> Self {
        WiseRow {
            name: tx.name(),
            recipient_email: "",
            payment_reference: tx.payment_reference(),
            receiver_type: RECEIVER_TYPE,
            amount_currency: AMOUNT_CURRENCY,
            amount: tx.amount(),
            source_currency: CURRENCY,
            target_currency: CURRENCY,
            bsb_code: tx.bsb_code(),
            account_number: tx.account_number(),
        }
    }
}
