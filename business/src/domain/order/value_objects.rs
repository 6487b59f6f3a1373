use serde::{Deserialize, Serialize};

/// Lifecycle status of an order. Checkout only ever creates `Pending` orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            _ => Err(format!("Invalid order status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_displayed_status() {
        let status: OrderStatus = OrderStatus::Pending.to_string().parse().unwrap();
        assert_eq!(status, OrderStatus::Pending);
    }

    #[test]
    fn should_reject_unknown_status() {
        assert!("shipped".parse::<OrderStatus>().is_err());
    }
}
