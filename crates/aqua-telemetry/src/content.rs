//! `con` 字段的文本渲染
//!
//! broker 端按字符串解析形如 `[1700000000, 25.0, 10.0, 815.0]` 的列表：
//! 整数原样输出；实数取最短往返表示，整值保留 `.0`，
//! 十进制指数在 [-4, 16) 内用定点写法，否则写成 `1e-05` / `1.5e+16`。

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentValue {
    Int(i64),
    Real(f64),
}

impl fmt::Display for ContentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentValue::Int(v) => write!(f, "{}", v),
            ContentValue::Real(v) => f.write_str(&render_real(*v)),
        }
    }
}

pub fn render_list(values: &[ContentValue]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

pub fn render_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // LowerExp 给出最短往返的有效数字，例如 "-2.731e2"
    let sci = format!("{:e}", value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(m) => ("-", m),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if (-4..16).contains(&exp) {
        if exp >= 0 {
            let point = exp as usize + 1;
            if digits.len() > point {
                format!("{}{}.{}", sign, &digits[..point], &digits[point..])
            } else {
                format!("{}{}{}.0", sign, digits, "0".repeat(point - digits.len()))
            }
        } else {
            format!("{}0.{}{}", sign, "0".repeat((-exp - 1) as usize), digits)
        }
    } else {
        let mantissa = if digits.len() > 1 {
            format!("{}.{}", &digits[..1], &digits[1..])
        } else {
            digits
        };
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{}{}e{}{:02}", sign, mantissa, exp_sign, exp.abs())
    }
}
