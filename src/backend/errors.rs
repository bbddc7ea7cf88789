use reqwest::StatusCode;

#[derive(Debug)]
pub enum BackendError {
    SessionNotFound(String),
    ConfigNotFound(String),
    /// Backend answered with a non-success status.
    ApiError {
        status: StatusCode,
        message: String,
    },
    /// Request never produced a response (connect/DNS/TLS/timeout).
    NetworkError(reqwest::Error),
    /// Response arrived but its body did not match the expected shape.
    DecodeError(String),
    IoError(std::io::Error),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BackendError::DecodeError(err.to_string())
        } else {
            BackendError::NetworkError(err)
        }
    }
}

impl From<std::io::Error> for BackendError {
    fn from(err: std::io::Error) -> Self {
        BackendError::IoError(err)
    }
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendError::SessionNotFound(msg) => {
                writeln!(f, "Authentication Error")?;
                writeln!(f, "────────────────────")?;
                write!(f, "🔑 {msg}\n\n")?;
                writeln!(f, "🔧 QUICK FIXES:")?;
                writeln!(f, "   → Request a magic link: recon-desk login you@company.com")?;
                writeln!(f, "   → Or use a password: recon-desk login you@company.com --password")?;
                write!(f, "   → New accounts need admin approval before they can sign in")
            }
            BackendError::ConfigNotFound(msg) => {
                writeln!(f, "Configuration Error")?;
                writeln!(f, "───────────────────")?;
                write!(f, "📂 {msg}\n\n")?;
                writeln!(f, "🔧 QUICK FIXES:")?;
                writeln!(
                    f,
                    "   → Set the backend URL: export RECON_DESK_BACKEND_URL=https://..."
                )?;
                write!(f, "   → Or create recon-desk.toml next to the binary")
            }
            BackendError::ApiError { status, message } => {
                writeln!(f, "Backend API Error")?;
                writeln!(f, "─────────────────")?;
                writeln!(f, "🌐 HTTP {status}: {message}")?;
                writeln!(f)?;
                match status.as_u16() {
                    401 => {
                        writeln!(f, "🔧 AUTHENTICATION FAILED:")?;
                        writeln!(f, "   → Session is invalid or expired")?;
                        write!(f, "   → Sign in again: recon-desk login you@company.com")
                    }
                    403 => {
                        writeln!(f, "🔧 PERMISSION DENIED:")?;
                        writeln!(f, "   → Your account may still be pending approval")?;
                        write!(f, "   → Admin surfaces require the configured admin account")
                    }
                    404 => {
                        writeln!(f, "🔧 RESOURCE NOT FOUND:")?;
                        writeln!(f, "   → The task or report id may be wrong")?;
                        write!(f, "   → List report tasks first: recon-desk report <kind>")
                    }
                    _ => {
                        writeln!(f, "🔧 TROUBLESHOOTING:")?;
                        writeln!(f, "   → Check the backend is reachable")?;
                        write!(f, "   → Retry once the backend recovers")
                    }
                }
            }
            BackendError::NetworkError(err) => {
                writeln!(f, "Backend Network Error")?;
                writeln!(f, "─────────────────────")?;
                write!(f, "🌐 {err}\n\n")?;
                writeln!(f, "🔧 TROUBLESHOOTING:")?;
                writeln!(f, "   → Check internet connectivity")?;
                writeln!(f, "   → Verify RECON_DESK_BACKEND_URL is correct")?;
                write!(f, "   → Check corporate proxy/firewall settings")
            }
            BackendError::DecodeError(msg) => {
                writeln!(f, "Backend Response Error")?;
                writeln!(f, "──────────────────────")?;
                write!(f, "📦 Unexpected response shape: {msg}\n\n")?;
                write!(
                    f,
                    "   → The backend may be mid-deploy; retry in a few minutes"
                )
            }
            BackendError::IoError(err) => {
                writeln!(f, "File System Error")?;
                writeln!(f, "─────────────────")?;
                write!(f, "📁 {err}\n\n")?;
                write!(f, "   → Check permissions on the .recon-desk directory")
            }
        }
    }
}

impl std::error::Error for BackendError {}
