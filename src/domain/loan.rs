use serde::{Deserialize, Serialize};

/// Input bounds for loan parameters, enforced at the application boundary
/// before the computation runs.
pub const MIN_PRINCIPAL: f64 = 100.0;
pub const MIN_RATE_PERCENT: f64 = 1.0;
pub const MAX_RATE_PERCENT: f64 = 20.0;
pub const MIN_TERM_YEARS: u32 = 1;
pub const MAX_TERM_YEARS: u32 = 30;

/// How often loan payments are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentFrequency {
    Monthly,
    Quarterly,
    Yearly,
}

impl PaymentFrequency {
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::Quarterly => 4,
            PaymentFrequency::Yearly => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "monthly",
            PaymentFrequency::Quarterly => "quarterly",
            PaymentFrequency::Yearly => "yearly",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "monthly" => Some(PaymentFrequency::Monthly),
            "quarterly" => Some(PaymentFrequency::Quarterly),
            "yearly" => Some(PaymentFrequency::Yearly),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fixed-rate amortizing loan parameters. Ephemeral: results are recomputed
/// from these on every input change, nothing is stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Principal in currency units
    pub principal: f64,
    /// Annual interest rate in percent (5.0 = 5%)
    pub annual_rate_percent: f64,
    pub term_years: u32,
    pub frequency: PaymentFrequency,
}

/// Output of the payment computation. All monetary fields are unrounded;
/// rounding to 2 decimals happens at display time only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaymentResult {
    /// Payment due every period
    pub payment: f64,
    /// payment * total_payments
    pub total_paid: f64,
    /// total_paid - principal
    pub total_interest: f64,
    pub total_payments: u32,
    /// Interest rate per payment period as a fraction
    pub periodic_rate: f64,
}

/// Standard annuity formula for a fixed-rate amortizing loan:
///
/// payment = P * r * (1 + r)^n / ((1 + r)^n - 1)
///
/// where r is the periodic rate and n the number of payments. A zero
/// periodic rate would zero the denominator, so that case degenerates to
/// equal principal installments with no interest.
pub fn compute_payment(params: &LoanParameters) -> PaymentResult {
    let periods_per_year = params.frequency.periods_per_year();
    let total_payments = params.term_years * periods_per_year;
    let periodic_rate = params.annual_rate_percent / 100.0 / f64::from(periods_per_year);

    let payment = if periodic_rate == 0.0 {
        params.principal / f64::from(total_payments)
    } else {
        let growth = (1.0 + periodic_rate).powi(total_payments as i32);
        params.principal * periodic_rate * growth / (growth - 1.0)
    };

    let total_paid = payment * f64::from(total_payments);

    PaymentResult {
        payment,
        total_paid,
        total_interest: total_paid - params.principal,
        total_payments,
        periodic_rate,
    }
}
