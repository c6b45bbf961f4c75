/// Purchase cost in Euros per kWh, including VAT.
pub const PURCHASE_COST: f64 = 0.0212;

/// Energy tax in Euros per kWh, including VAT.
pub const ENERGY_TAX: f64 = 0.15;

/// Turns a raw market price into the price a consumer pays, in Euros per kWh.
pub fn add_charges(price: f64) -> f64 {
    price + PURCHASE_COST + ENERGY_TAX
}
