/// Parse a strictly positive integer for count-like arguments.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("value must be greater than zero".into()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("Invalid number: {s}")),
    }
}
