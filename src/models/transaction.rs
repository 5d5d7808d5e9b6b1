use serde::Deserialize;

use crate::domain::transaction::Transaction as DomainTransaction;
use crate::domain::types::{TypeConstraintError, parse_timestamp};
use crate::models::{Scalar, optional_amount, optional_text, required_text};

#[derive(Clone, Debug, Deserialize)]
pub struct Transaction {
    #[serde(alias = "Id", alias = "transaction_id", alias = "transactionId")]
    pub id: Scalar,
    #[serde(rename = "type", alias = "Type", alias = "transaction_type")]
    pub kind: String,
    #[serde(
        default,
        rename = "orderno",
        alias = "orderNo",
        alias = "order_no",
        alias = "OrderNo"
    )]
    pub order_no: Option<Scalar>,
    #[serde(default, alias = "Amount")]
    pub amount: Option<Scalar>,
    #[serde(
        default,
        rename = "netprofit",
        alias = "netProfit",
        alias = "net_profit"
    )]
    pub net_profit: Option<Scalar>,
    #[serde(default, alias = "Bonus")]
    pub bonus: Option<Scalar>,
    #[serde(alias = "Time", alias = "created_at", alias = "createdAt")]
    pub time: String,
    #[serde(default, alias = "ref", alias = "Reference")]
    pub reference: Option<String>,
    #[serde(default, alias = "Status")]
    pub status: Option<String>,
}

impl TryFrom<Transaction> for DomainTransaction {
    type Error = TypeConstraintError;

    fn try_from(record: Transaction) -> Result<Self, Self::Error> {
        Ok(Self {
            id: required_text(record.id.into_text())?,
            kind: record.kind.trim().to_string(),
            order_no: record.order_no.map(Scalar::into_text).unwrap_or_default(),
            amount: optional_amount(record.amount.as_ref())?,
            net_profit: optional_amount(record.net_profit.as_ref())?,
            bonus: optional_amount(record.bonus.as_ref())?,
            time: parse_timestamp(&record.time)?,
            reference: optional_text(record.reference).unwrap_or_default(),
            status: optional_text(record.status).unwrap_or_default(),
        })
    }
}
