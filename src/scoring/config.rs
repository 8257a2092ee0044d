use serde::{Deserialize, Serialize};

/// Loan terms the whole process scores against.
///
/// Loaded once at startup from the config file and treated as constants for
/// the lifetime of the process. `price` and `upfront` are quoted in UF
/// (inflation-indexed units); `ufvalue` converts them to pesos.
///
/// Example YAML:
/// ```yaml
/// loan:
///   price: 60000000
///   upfront: 12000000
///   interest: 0.05
///   ufvalue: 37000
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoanTerms {
    /// Target property price.
    pub price: f64,

    /// Required down payment.
    pub upfront: f64,

    /// Annual interest rate as a fraction (0.05 = 5%).
    pub interest: f64,

    /// Peso value of one UF.
    pub ufvalue: f64,
}

impl LoanTerms {
    /// Financed principal: what remains after the upfront payment, with
    /// interest applied, converted to pesos.
    pub fn credit_amount(&self) -> f64 {
        (self.price - self.upfront) * (1.0 + self.interest) * self.ufvalue
    }
}
