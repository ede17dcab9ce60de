use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnaplinkError {
    Validation(String),
    Network(String),
    Server { status: u16, message: String },
    MalformedResponse(String),
    Clipboard(String),
    Config(String),
    Terminal(String),
}

impl SnaplinkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            SnaplinkError::Validation(_) => "E001",
            SnaplinkError::Network(_) => "E002",
            SnaplinkError::Server { .. } => "E003",
            SnaplinkError::MalformedResponse(_) => "E004",
            SnaplinkError::Clipboard(_) => "E005",
            SnaplinkError::Config(_) => "E006",
            SnaplinkError::Terminal(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            SnaplinkError::Validation(_) => "Validation Error",
            SnaplinkError::Network(_) => "Network Error",
            SnaplinkError::Server { .. } => "Server Error",
            SnaplinkError::MalformedResponse(_) => "Malformed Response",
            SnaplinkError::Clipboard(_) => "Clipboard Error",
            SnaplinkError::Config(_) => "Configuration Error",
            SnaplinkError::Terminal(_) => "Terminal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            SnaplinkError::Validation(msg) => msg,
            SnaplinkError::Network(msg) => msg,
            SnaplinkError::Server { message, .. } => message,
            SnaplinkError::MalformedResponse(msg) => msg,
            SnaplinkError::Clipboard(msg) => msg,
            SnaplinkError::Config(msg) => msg,
            SnaplinkError::Terminal(msg) => msg,
        }
    }

    /// The message shown to the user in the error banner / on stderr.
    ///
    /// Transport details are collapsed into a generic connectivity message;
    /// server messages are already user-facing by the time they reach here.
    pub fn user_message(&self) -> String {
        match self {
            SnaplinkError::Network(_) => {
                "Could not reach the shortening service. Check your connection.".to_string()
            }
            SnaplinkError::MalformedResponse(_) => {
                "The server returned a malformed response.".to_string()
            }
            other => other.message().to_string(),
        }
    }

    /// 格式化为简洁输出（用于 CLI/TUI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SnaplinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SnaplinkError {}

// 便捷的构造函数
impl SnaplinkError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::Validation(msg.into())
    }

    pub fn network<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::Network(msg.into())
    }

    pub fn server<T: Into<String>>(status: u16, msg: T) -> Self {
        SnaplinkError::Server {
            status,
            message: msg.into(),
        }
    }

    pub fn malformed_response<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::MalformedResponse(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::Clipboard(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::Config(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::Terminal(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for SnaplinkError {
    fn from(err: std::io::Error) -> Self {
        SnaplinkError::Terminal(err.to_string())
    }
}

impl From<serde_json::Error> for SnaplinkError {
    fn from(err: serde_json::Error) -> Self {
        SnaplinkError::MalformedResponse(err.to_string())
    }
}

impl From<ureq::Error> for SnaplinkError {
    fn from(err: ureq::Error) -> Self {
        SnaplinkError::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SnaplinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_unique() {
        let errors = [
            SnaplinkError::validation("a"),
            SnaplinkError::network("b"),
            SnaplinkError::server(500, "c"),
            SnaplinkError::malformed_response("d"),
            SnaplinkError::clipboard("e"),
            SnaplinkError::config("f"),
            SnaplinkError::terminal("g"),
        ];
        let codes: std::collections::HashSet<_> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_network_user_message_is_generic() {
        let err = SnaplinkError::network("tcp connect error: connection refused (os error 111)");
        assert!(!err.user_message().contains("os error"));
        assert!(err.user_message().contains("connection"));
    }

    #[test]
    fn test_server_user_message_passes_through() {
        let err = SnaplinkError::server(400, "URL is required");
        assert_eq!(err.user_message(), "URL is required");
    }

    #[test]
    fn test_display_format() {
        let err = SnaplinkError::validation("URL cannot be empty");
        assert_eq!(err.to_string(), "Validation Error: URL cannot be empty");
    }
}
