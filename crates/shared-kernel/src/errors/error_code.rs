// crates/shared-kernel/src/errors/error_code.rs

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    ValidationFailed,
    InfrastructureFailure,
    ConfigurationMissing,
}
