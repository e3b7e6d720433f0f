use serde::{Deserialize, Serialize};

/// Payment capture method recorded by the `update_payment` action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Upi,
    Online,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Upi => "upi",
            PaymentMethod::Online => "online",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Online => "Online",
        }
    }

    pub fn all() -> Vec<PaymentMethod> {
        vec![PaymentMethod::Cash, PaymentMethod::Upi, PaymentMethod::Online]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "cash" => Some(PaymentMethod::Cash),
            "upi" => Some(PaymentMethod::Upi),
            "online" => Some(PaymentMethod::Online),
            _ => None,
        }
    }

    /// Cash and UPI collections attach a proof image; online ones settle
    /// through the gateway and do not.
    pub fn wants_proof(&self) -> bool {
        matches!(self, PaymentMethod::Cash | PaymentMethod::Upi)
    }
}
