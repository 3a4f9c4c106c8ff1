// Token Ledger - Error Codes
// This module defines all error codes for ledger operations.
//
// Error Code Ranges:
// - 100-199: Authorization errors
// - 200-299: Pause gate errors
// - 300-399: Burn policy errors
// - 400-499: Balance errors
// - 500-599: Configuration errors
// - 900-999: Arithmetic errors

use thiserror::Error;

/// Ledger operation result type
pub type TokenResult<T> = Result<T, TokenError>;

/// Ledger error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u64)]
pub enum TokenError {
    // ========================================
    // Authorization errors (100-199)
    // ========================================
    #[error("Caller is not the owner")]
    Unauthorized = 100,

    #[error("Insufficient allowance")]
    InsufficientAllowance = 101,

    // ========================================
    // Pause gate errors (200-299)
    // ========================================
    #[error("Contract is paused")]
    ContractPaused = 200,

    #[error("Contract is already paused")]
    AlreadyPaused = 201,

    #[error("Contract is not paused")]
    NotPaused = 202,

    // ========================================
    // Burn policy errors (300-399)
    // ========================================
    #[error("Burn rate must be less than or equal to 1000")]
    InvalidBurnRate = 300,

    // ========================================
    // Balance errors (400-499)
    // ========================================
    #[error("Insufficient balance")]
    InsufficientBalance = 400,

    #[error("Invalid recipient")]
    InvalidRecipient = 401,

    // ========================================
    // Configuration errors (500-599)
    // ========================================
    #[error("Name cannot be empty")]
    NameEmpty = 500,

    #[error("Name too long")]
    NameTooLong = 501,

    #[error("Symbol cannot be empty")]
    SymbolEmpty = 502,

    #[error("Symbol too long")]
    SymbolTooLong = 503,

    #[error("Invalid symbol character")]
    SymbolInvalid = 504,

    #[error("Decimals too high")]
    DecimalsTooHigh = 505,

    #[error("Invalid owner")]
    InvalidOwner = 506,

    // ========================================
    // Arithmetic errors (900-999)
    // ========================================
    #[error("Arithmetic overflow")]
    Overflow = 900,

    #[error("Arithmetic underflow")]
    Underflow = 901,
}

impl TokenError {
    /// Get the numeric error code
    pub fn code(self) -> u64 {
        self as u64
    }

    /// Create error from numeric code
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            100 => Some(Self::Unauthorized),
            101 => Some(Self::InsufficientAllowance),
            200 => Some(Self::ContractPaused),
            201 => Some(Self::AlreadyPaused),
            202 => Some(Self::NotPaused),
            300 => Some(Self::InvalidBurnRate),
            400 => Some(Self::InsufficientBalance),
            401 => Some(Self::InvalidRecipient),
            500 => Some(Self::NameEmpty),
            501 => Some(Self::NameTooLong),
            502 => Some(Self::SymbolEmpty),
            503 => Some(Self::SymbolTooLong),
            504 => Some(Self::SymbolInvalid),
            505 => Some(Self::DecimalsTooHigh),
            506 => Some(Self::InvalidOwner),
            900 => Some(Self::Overflow),
            901 => Some(Self::Underflow),
            _ => None,
        }
    }
    /// Look an error up by its variant name, as written in scenario files
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Unauthorized" => Some(Self::Unauthorized),
            "InsufficientAllowance" => Some(Self::InsufficientAllowance),
            "ContractPaused" => Some(Self::ContractPaused),
            "AlreadyPaused" => Some(Self::AlreadyPaused),
            "NotPaused" => Some(Self::NotPaused),
            "InvalidBurnRate" => Some(Self::InvalidBurnRate),
            "InsufficientBalance" => Some(Self::InsufficientBalance),
            "InvalidRecipient" => Some(Self::InvalidRecipient),
            "NameEmpty" => Some(Self::NameEmpty),
            "NameTooLong" => Some(Self::NameTooLong),
            "SymbolEmpty" => Some(Self::SymbolEmpty),
            "SymbolTooLong" => Some(Self::SymbolTooLong),
            "SymbolInvalid" => Some(Self::SymbolInvalid),
            "DecimalsTooHigh" => Some(Self::DecimalsTooHigh),
            "InvalidOwner" => Some(Self::InvalidOwner),
            "Overflow" => Some(Self::Overflow),
            "Underflow" => Some(Self::Underflow),
            _ => None,
        }
    }
}
