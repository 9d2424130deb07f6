use std::ptr;

/// Call `f` for every pair drawn from `a` x `b`, threading `ctx` through.
///
/// When `a` and `b` are the same slice only unordered pairs of distinct
/// elements are visited, `n(n-1)/2` calls in total.
pub fn pairwise_combine<T, C, F>(a: &[T], b: &[T], mut ctx: C, mut f: F) -> C
where
    F: FnMut(&T, &T, &mut C),
{
    let same = ptr::eq(a, b);
    for (i, x) in a.iter().enumerate() {
        let start = if same { i + 1 } else { 0 };
        for y in &b[start.min(b.len())..] {
            f(x, y, &mut ctx);
        }
    }
    ctx
}

/// Render `value` with `,` grouping in its integer part.
pub fn format_thousands(value: f64) -> String {
    let text = value.to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
