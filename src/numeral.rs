//! Chinese numeral parsing for chapter numbers (一, 十二, 一百二十三, ...).

/// Parse a Chinese numeral string into an integer.
///
/// Digits accumulate into a running group; 十/百/千 multiply the group and
/// 万/亿 flush it into the result with their group weight. Characters
/// outside the numeral alphabet are skipped. Returns `None` for empty
/// input, arithmetic overflow, or a result of zero (chapter numbers start
/// at 1).
pub fn parse_cjk_number(text: &str) -> Option<u64> {
    if text.is_empty() {
        return None;
    }

    let mut result: u64 = 0;
    let mut group: u64 = 0;

    for c in text.chars() {
        if let Some(value) = char_value(c) {
            if value >= 100 {
                group = group.checked_mul(value)?;
            } else if value >= 10 {
                // A bare 十 reads as 10, X十 compounds the running group.
                group = if group != 0 {
                    group.checked_mul(10)?.checked_add(value)?
                } else {
                    value
                };
            } else {
                group = group.checked_add(value)?;
            }
        } else if c == '万' {
            result = result.checked_add(group.checked_mul(10_000)?)?;
            group = 0;
        } else if c == '亿' {
            result = result.checked_add(group.checked_mul(100_000_000)?)?;
            group = 0;
        }
    }

    result = result.checked_add(group)?;
    (result > 0).then_some(result)
}

fn char_value(c: char) -> Option<u64> {
    match c {
        '零' => Some(0),
        '一' => Some(1),
        '二' => Some(2),
        '三' => Some(3),
        '四' => Some(4),
        '五' => Some(5),
        '六' => Some(6),
        '七' => Some(7),
        '八' => Some(8),
        '九' => Some(9),
        '十' => Some(10),
        '百' => Some(100),
        '千' => Some(1000),
        _ => None,
    }
}
