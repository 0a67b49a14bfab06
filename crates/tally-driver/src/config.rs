//! Driver configuration.

use tally_ast::ParticipantContext;
use tally_settle::currency;

/// Currency used when none is configured.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Participants and currency for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Names the lexer recognises as members
    pub context: ParticipantContext,
    /// ISO 4217 code
    pub currency: String,
    /// Decimal digits for amounts, from the currency unless overridden
    pub digits: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            context: ParticipantContext::default(),
            currency: DEFAULT_CURRENCY.to_string(),
            digits: currency::digits_for(DEFAULT_CURRENCY),
        }
    }
}

impl DriverConfig {
    /// Create config from environment variables.
    ///
    /// `TALLY_MEMBERS` is a comma-separated participant list and
    /// `TALLY_CURRENCY` an ISO 4217 code.
    pub fn from_env() -> Self {
        let members = std::env::var("TALLY_MEMBERS").unwrap_or_default();
        let currency =
            std::env::var("TALLY_CURRENCY").unwrap_or_else(|_| DEFAULT_CURRENCY.to_string());

        Self::builder()
            .members(split_members(&members))
            .currency(currency)
            .build()
    }

    /// Create a builder for configuration.
    pub fn builder() -> DriverConfigBuilder {
        DriverConfigBuilder::default()
    }
}

/// Split a comma-separated member list.
pub fn split_members(list: &str) -> Vec<&str> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Builder for driver configuration.
#[derive(Debug, Default)]
pub struct DriverConfigBuilder {
    config: DriverConfig,
    digits: Option<u32>,
}

impl DriverConfigBuilder {
    pub fn members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.context = ParticipantContext::new(members);
        self
    }

    pub fn context(mut self, context: ParticipantContext) -> Self {
        self.config.context = context;
        self
    }

    /// Set the currency. Its digits apply unless [`digits`](Self::digits) is set.
    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.config.currency = code.into().trim().to_ascii_uppercase();
        self
    }

    pub fn digits(mut self, digits: u32) -> Self {
        self.digits = Some(digits);
        self
    }

    pub fn build(mut self) -> DriverConfig {
        self.config.digits = self
            .digits
            .unwrap_or_else(|| currency::digits_for(&self.config.currency));
        self.config
    }
}
