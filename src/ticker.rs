use std::{fmt::Display, str::FromStr};

use crate::error::DvError;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Ticker {
    pub exchange: String,
    pub symbol: String,
}

impl FromStr for Ticker {
    type Err = DvError;
    fn from_str(s: &str) -> Result<Self, <Self as FromStr>::Err> {
        let s = s.trim();

        if let Some((left, right)) = s.rsplit_once('.') {
            // Both '600000.SH' and the provider's 'sh.600000' occur
            let (symbol, exchange) = if left.chars().all(|c| c.is_ascii_digit()) {
                (left, right)
            } else {
                (right, left)
            };

            Ok(Self {
                exchange: exchange.trim().to_uppercase().to_string(),
                symbol: symbol.trim().to_uppercase().to_string(),
            })
        } else {
            let exchange = if s.len() == 6 {
                if s.starts_with("600")
                    || s.starts_with("601")
                    || s.starts_with("603")
                    || s.starts_with("605")
                    || s.starts_with("688")
                {
                    Some("SH")
                } else if s.starts_with("000")
                    || s.starts_with("001")
                    || s.starts_with("002")
                    || s.starts_with("300")
                {
                    Some("SZ")
                } else {
                    None
                }
            } else {
                None
            };

            if let Some(exchange) = exchange {
                Ok(Self {
                    exchange: exchange.to_string(),
                    symbol: s.to_uppercase().to_string(),
                })
            } else {
                Err(DvError::Invalid {
                    code: "UNSUPPORTED_EXCHANGE",
                    message: format!("Unsupported exchange '{s}'"),
                })
            }
        }
    }
}

impl Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.symbol, self.exchange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_from_str() {
        let ticker = Ticker::from_str("600000.SH").unwrap();
        assert_eq!(ticker.exchange, "SH");
        assert_eq!(ticker.symbol, "600000");

        let ticker = Ticker::from_str("sh.600000").unwrap();
        assert_eq!(ticker.exchange, "SH");
        assert_eq!(ticker.symbol, "600000");

        let ticker = Ticker::from_str("sz.000001").unwrap();
        assert_eq!(ticker.exchange, "SZ");
        assert_eq!(ticker.symbol, "000001");

        let ticker = Ticker::from_str("600519").unwrap();
        assert_eq!(ticker.exchange, "SH");
        assert_eq!(ticker.symbol, "600519");

        let ticker = Ticker::from_str("300750").unwrap();
        assert_eq!(ticker.exchange, "SZ");
        assert_eq!(ticker.symbol, "300750");

        assert!(Ticker::from_str("abcdef").is_err());
        assert!(Ticker::from_str("99").is_err());
    }

    #[test]
    fn test_ticker_display() {
        assert_eq!(
            Ticker::from_str("sh.600000").unwrap().to_string(),
            "600000.SH"
        );
    }
}
