use sessionstore::CookieOptions;

/// Cookie name used when none is configured.
pub const DEFAULT_COOKIE_NAME: &str = "session_id";

/// Where [`require_login`](crate::require_login) sends anonymous requests.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Session key that marks a logged-in session when it holds `true`.
pub const LOGIN_FLAG: &str = "isLogin";

/// How the session identifier travels between client and server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub cookie: CookieOptions,
    pub login_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            cookie: CookieOptions::default(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    pub fn with_cookie(mut self, cookie: CookieOptions) -> Self {
        self.cookie = cookie;
        self
    }

    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }
}
