//! Small building blocks shared by the pattern builders.

pub(crate) const DIGIT: &str = "[0-9]";

/// `atom` repeated between zero and `max` times.
pub(crate) fn repeat_upto(atom: &str, max: u32) -> String {
    match max {
        0 => String::new(),
        1 => format!("{atom}?"),
        max => format!("{atom}{{0,{max}}}"),
    }
}

/// `atom` repeated exactly `count` times.
pub(crate) fn repeat_exactly(atom: &str, count: u32) -> String {
    match count {
        0 => String::new(),
        1 => atom.to_string(),
        count => format!("{atom}{{{count}}}"),
    }
}

pub(crate) fn digits_upto(max: u32) -> String {
    repeat_upto(DIGIT, max)
}

/// Joins the alternatives with `|` inside a single capturing group.
pub(crate) fn alternation<I, S>(alternatives: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::from("(");
    for (i, alternative) in alternatives.into_iter().enumerate() {
        if i > 0 {
            out.push('|');
        }
        out.push_str(alternative.as_ref());
    }
    out.push(')');
    out
}

/// A capturing group, named when `label` is given.
pub(crate) fn group(label: Option<&str>, body: &str) -> String {
    match label {
        Some(label) => format!("(?<{label}>{body})"),
        None => format!("({body})"),
    }
}
