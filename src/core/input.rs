/// Field-level error shown whenever a quantity fails validation
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid non-negative integer";

/// Check whether a raw quantity field is acceptable
///
/// Empty or whitespace-only input counts as valid (it means zero). Otherwise
/// the trimmed text must be ASCII digits only: no sign, no decimal point, no
/// separators.
pub fn is_valid_input(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.is_empty() || trimmed.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a raw quantity field into a non-negative count
///
/// Empty input parses to zero. Digit strings too large for `u64` are
/// rejected the same way as malformed input; the calculator never sees an
/// unnormalized value.
pub fn parse_input(input: &str) -> Result<u64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(INVALID_INPUT_MESSAGE.to_string());
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| INVALID_INPUT_MESSAGE.to_string())
}
