use crate::actions::ActionParams;

/// `startRecording` action: record the rest of the session in the background.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StartRecording {
    /// Where the finished recording is uploaded.
    url: String,

    /// MIME type of the recording, e.g. "audio/mp3".
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<String>,

    /// Upload method, "POST" or "PUT".
    #[serde(skip_serializing_if = "Option::is_none")]
    method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<String>,
}

impl StartRecording {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            format: None,
            method: None,
            username: None,
            password: None,
        }
    }

    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    pub fn with_method(mut self, method: &str) -> Self {
        self.method = Some(method.to_string());
        self
    }

    pub fn with_username(mut self, username: &str) -> Self {
        self.username = Some(username.to_string());
        self
    }

    pub fn with_password(mut self, password: &str) -> Self {
        self.password = Some(password.to_string());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ActionParams for StartRecording {
    const NAME: &'static str = "startRecording";
    const OPTIONS: &'static [&'static str] = &["url", "format", "method", "username", "password"];
}
