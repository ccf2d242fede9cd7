// Line-oriented console prompts used by the binary.
use std::io::{self, BufRead, Write};

/// Print `prompt` on its own line and read one trimmed answer from `reader`.
/// Returns `None` at end of input.
pub fn prompt_line<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, prompt: &str) -> io::Result<Option<String>> {
    writeln!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_line_reads_and_trims() {
        let mut input = "  Fall \nrest\n".as_bytes();
        let mut out: Vec<u8> = Vec::new();
        let answer = prompt_line(&mut input, &mut out, "Semester?").unwrap();
        assert_eq!(answer.as_deref(), Some("Fall"));
        assert_eq!(String::from_utf8(out).unwrap(), "Semester?\n");
    }

    #[test]
    fn test_prompt_line_eof() {
        let mut input = "".as_bytes();
        let mut out: Vec<u8> = Vec::new();
        assert_eq!(prompt_line(&mut input, &mut out, "x").unwrap(), None);
    }
}
