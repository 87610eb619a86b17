use crate::constants::REMOVE_PROMPT;
use crate::error::{ConversionError, Result};
use std::io::{BufRead, Write};

/// Asks whether originals may be deleted after conversion.
///
/// Only a trimmed, case-insensitive `y` confirms. Anything else, including
/// end of input, is treated as a refusal.
pub fn confirm_removal<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<()> {
    write!(output, "{}", REMOVE_PROMPT)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    if answer.trim().eq_ignore_ascii_case("y") {
        Ok(())
    } else {
        Err(ConversionError::UserDeclined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(text: &str) -> Result<()> {
        confirm_removal(Cursor::new(text.as_bytes()), Vec::new())
    }

    #[test]
    fn test_accepts_y() {
        assert!(answer("y\n").is_ok());
        assert!(answer("Y\n").is_ok());
        assert!(answer("  y  \n").is_ok());
        assert!(answer("y").is_ok());
    }

    #[test]
    fn test_rejects_everything_else() {
        for text in ["n\n", "yes\n", "\n", "", "yy\n", "sure\n"] {
            assert!(
                matches!(answer(text), Err(ConversionError::UserDeclined)),
                "{:?} should be declined",
                text
            );
        }
    }

    #[test]
    fn test_writes_prompt() {
        let mut output = Vec::new();
        let _ = confirm_removal(Cursor::new(b"n\n".to_vec()), &mut output);
        assert_eq!(String::from_utf8(output).unwrap(), REMOVE_PROMPT);
    }
}
