//! 日志脱敏
//! 地址、签名和待签消息不落明文日志

/// 脱敏十六进制字符串（显示前缀和后缀）
///
/// 按字符而非字节截取，外部传入的任意标识串（含多字节字符）不会panic。
pub fn redact_hex_string(hex: &str, show_chars: usize) -> String {
    let chars: Vec<char> = hex.chars().collect();
    if chars.len() <= show_chars * 2 {
        return "*".repeat(chars.len());
    }

    let prefix: String = chars[..show_chars].iter().collect();
    let suffix: String = chars[chars.len() - show_chars..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

/// 脱敏地址（显示前6位和后4位）
pub fn redact_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() < 10 {
        return "*".repeat(chars.len());
    }

    let prefix: String = chars[..6].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

/// 脱敏签名
pub fn redact_signature(signature: &str) -> String {
    redact_hex_string(signature, 8)
}

/// 脱敏待签消息（只保留长度信息）
pub fn redact_message(message: &str) -> String {
    format!("<message {} bytes>", message.len())
}
