use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::Holding;

#[derive(Debug, Deserialize, Getters, new)]
pub struct KiteHoldingsDto {
    data: Vec<KiteHoldingDto>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct KiteHoldingDto {
    tradingsymbol: String,
    quantity: Decimal,
    t1_quantity: Decimal,
    average_price: Decimal,
    last_price: Decimal,
}

impl KiteHoldingDto {
    pub fn to_holding(&self) -> Holding {
        Holding::new(
            self.tradingsymbol.clone(),
            // settled plus unsettled shares
            self.quantity + self.t1_quantity,
            self.average_price,
            self.last_price,
        )
    }
}
