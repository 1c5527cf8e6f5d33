use crate::error::NormalizeError;

const NANP_CALLING_CODE: &str = "1";
const NANP_NATIONAL_LEN: usize = 10;
const MIN_NATIONAL_LEN: usize = 8;

pub fn format_e164(calling_code: &str, national: &str) -> Result<String, NormalizeError> {
    if calling_code.is_empty() || national.is_empty() {
        return Err(NormalizeError::MalformedNationalNumber);
    }
    if !national.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NormalizeError::MalformedNationalNumber);
    }

    let national = if calling_code == NANP_CALLING_CODE {
        let national = match national.strip_prefix('1') {
            Some(rest) if national.len() == NANP_NATIONAL_LEN + 1 => rest,
            _ => national,
        };
        if national.len() != NANP_NATIONAL_LEN {
            return Err(NormalizeError::InvalidLength);
        }
        national
    } else {
        if national.len() < MIN_NATIONAL_LEN {
            return Err(NormalizeError::InvalidLength);
        }
        national
    };

    Ok(format!("+{calling_code}{national}"))
}
