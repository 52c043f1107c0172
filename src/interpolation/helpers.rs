use std::fmt::Display;

/// Renders the factor `(lhs - xj)` as `(lhs - |xj|)` or `(lhs + |xj|)`.
///
/// `precision` fixes the number of decimals of `|xj|`; `None` uses the
/// shortest round-trip form (`2`, `0.5`, ...).
pub(crate) fn signed_factor(lhs: impl Display, xj: f64, precision: Option<usize>) -> String {
    let sign = if xj >= 0.0 { '-' } else { '+' };
    match precision {
        Some(p) => format!("({lhs} {sign} {:.*})", p, xj.abs()),
        None    => format!("({lhs} {sign} {})", xj.abs()),
    }
}

/// Separator placed before a term with coefficient `c`.
///
/// The leading term gets no `+`, only a bare `-` when negative.
pub(crate) fn term_sign(c: f64, leading: bool) -> &'static str {
    match (leading, c >= 0.0) {
        (true, true)   => "",
        (true, false)  => "-",
        (false, true)  => " + ",
        (false, false) => " - ",
    }
}
