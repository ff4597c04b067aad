use crate::error::{AppError, AppResult};
use std::collections::HashSet;
use std::fmt::Display;

/// 每张彩票的号码个数
pub const NUMBERS_PER_TICKET: usize = 5;
pub const MIN_NUMBER: i32 = 1;
pub const MAX_NUMBER: i32 = 36;

/// 校验投注号码: 恰好 5 个，范围 1..=36，互不重复
///
/// 接受任意可无损转换为 i64 的整数，请求体中的超大值同样得到范围错误。
pub fn validate_ticket_numbers<N: Copy + Into<i64>>(numbers: &[N]) -> AppResult<()> {
    if numbers.len() != NUMBERS_PER_TICKET {
        return Err(AppError::ValidationError(format!(
            "Ticket must contain exactly {NUMBERS_PER_TICKET} numbers"
        )));
    }

    let mut seen = HashSet::with_capacity(NUMBERS_PER_TICKET);
    for &n in numbers {
        let num: i64 = n.into();
        if !(i64::from(MIN_NUMBER)..=i64::from(MAX_NUMBER)).contains(&num) {
            return Err(AppError::ValidationError(format!(
                "Numbers must be between {MIN_NUMBER} and {MAX_NUMBER}"
            )));
        }
        if !seen.insert(num) {
            return Err(AppError::ValidationError("Numbers must be unique".into()));
        }
    }
    Ok(())
}

/// 规范化: 升序 + 逗号拼接，例如 [36, 7, 19, 3, 12] -> "3,7,12,19,36"
pub fn format_numbers<N: Copy + Ord + Display>(numbers: &[N]) -> String {
    let mut sorted = numbers.to_vec();
    sorted.sort_unstable();
    sorted
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// 解析号码字符串
///
/// 任何非数字字符都视为分隔符；空字段、0 以及溢出的字段会被直接丢弃。
pub fn parse_numbers(numbers: &str) -> Vec<i32> {
    numbers
        .split(|c: char| !c.is_ascii_digit())
        .filter(|field| !field.is_empty())
        .filter_map(|field| field.parse::<i32>().ok())
        .filter(|&n| n > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ticket_numbers() {
        assert!(validate_ticket_numbers(&[1, 2, 3, 4, 5]).is_ok());
        assert!(validate_ticket_numbers(&[36, 7, 19, 3, 12]).is_ok());
        assert!(validate_ticket_numbers(&[1, 2, 3, 4]).is_err()); // 太少
        assert!(validate_ticket_numbers(&[1, 2, 3, 4, 5, 6]).is_err()); // 太多
        assert!(validate_ticket_numbers::<i32>(&[]).is_err());
        assert!(validate_ticket_numbers(&[0, 2, 3, 4, 5]).is_err());
        assert!(validate_ticket_numbers(&[1, 2, 3, 4, 37]).is_err());
        assert!(validate_ticket_numbers(&[-1, 2, 3, 4, 5]).is_err());
        assert!(validate_ticket_numbers(&[1, 2, 3, 3, 5]).is_err());
    }

    #[test]
    fn test_validation_messages() {
        let msg = |nums: &[i32]| match validate_ticket_numbers(nums) {
            Err(AppError::ValidationError(m)) => m,
            other => panic!("unexpected: {other:?}"),
        };
        assert_eq!(msg(&[1, 2]), "Ticket must contain exactly 5 numbers");
        assert_eq!(msg(&[1, 2, 3, 4, 40]), "Numbers must be between 1 and 36");
        assert_eq!(msg(&[9, 9, 3, 4, 5]), "Numbers must be unique");
    }

    #[test]
    fn test_wide_values_are_range_errors() {
        let numbers: [i64; 5] = [1, 2, 3, 4, 4_294_967_296];
        assert!(matches!(
            validate_ticket_numbers(&numbers),
            Err(AppError::ValidationError(m)) if m == "Numbers must be between 1 and 36"
        ));
        assert!(validate_ticket_numbers(&[i64::MIN, 2, 3, 4, 5]).is_err());
        assert_eq!(format_numbers(&[36_i64, 3, 12, 7, 19]), "3,7,12,19,36");
    }

    #[test]
    fn test_format_numbers_is_order_invariant() {
        let expected = "3,7,12,19,36";
        assert_eq!(format_numbers(&[36, 7, 19, 3, 12]), expected);
        assert_eq!(format_numbers(&[3, 7, 12, 19, 36]), expected);
        assert_eq!(format_numbers(&[12, 36, 3, 19, 7]), expected);
        assert_eq!(format_numbers(&[19, 12, 7, 3, 36]), expected);
        assert_eq!(format_numbers::<i32>(&[]), "");
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_numbers(""), Vec::<i32>::new());
        assert_eq!(parse_numbers("3,7,12,19,36"), vec![3, 7, 12, 19, 36]);
        assert_eq!(parse_numbers("3, 7;12 19|36"), vec![3, 7, 12, 19, 36]);
        assert_eq!(parse_numbers(",3,,7,"), vec![3, 7]);
        assert_eq!(parse_numbers("0,5"), vec![5]);
        assert_eq!(parse_numbers("99999999999,4"), vec![4]);
    }

    #[test]
    fn test_parse_formatted_roundtrip() {
        let canonical = format_numbers(&[30, 1, 22, 8, 15]);
        assert_eq!(format_numbers(&parse_numbers(&canonical)), canonical);
    }
}
