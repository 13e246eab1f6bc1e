//! Invoice number generation
//!
//! Invoice numbers are short human-facing tokens, distinct from the sale's
//! surrogate id. Generation does not guarantee uniqueness - the UNIQUE
//! constraint on `sales.invoice_no` does, and the orchestrator retries with
//! a fresh token when an insert collides.

use uuid::Uuid;

/// Fixed marker every invoice number starts with
pub const INVOICE_PREFIX: &str = "INV-";

/// Number of hex characters taken from the random token
const TOKEN_LEN: usize = 8;

/// Generates an invoice number such as `INV-9f8a31bc`
pub fn generate_invoice_no() -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!("{}{}", INVOICE_PREFIX, &token[..TOKEN_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let invoice = generate_invoice_no();
        assert!(invoice.starts_with(INVOICE_PREFIX));
        assert_eq!(invoice.len(), INVOICE_PREFIX.len() + TOKEN_LEN);

        let token = &invoice[INVOICE_PREFIX.len()..];
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_consecutive_numbers_differ() {
        assert_ne!(generate_invoice_no(), generate_invoice_no());
    }
}
