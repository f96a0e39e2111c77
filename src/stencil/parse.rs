use crate::error::*;
use crate::stencil::Stencil;
use std::str::FromStr;

/// Parse a flat list of offsets such as `[-1, 0, 1]`, `-1,0,1` or `0 1 2`.
/// Nested lists and non-numeric entries are rejected.
impl FromStr for Stencil {
    type Err = StencilError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let inner = match trimmed.strip_prefix('[') {
            Some(rest) => rest.strip_suffix(']').ok_or_else(|| {
                StencilError::Parse(format!("unbalanced brackets in `{s}`"))
            })?,
            None => trimmed,
        };
        if inner.contains(['[', ']']) {
            return Err(StencilError::Parse(format!(
                "expected a one dimensional list, got `{s}`"
            )));
        }

        let mut values = Vec::new();
        for token in inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
        {
            let value = token.parse::<f64>().map_err(|_| {
                StencilError::Parse(format!("non-numeric offset `{token}`"))
            })?;
            values.push(value);
        }
        Stencil::from_reals(&values)
    }
}
